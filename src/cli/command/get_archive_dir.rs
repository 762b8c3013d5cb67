mod get_archive_dir_args;

pub use get_archive_dir_args::GetArchiveDirArgs;
