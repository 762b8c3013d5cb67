mod set_archive_dir_args;

pub use set_archive_dir_args::SetArchiveDirArgs;
