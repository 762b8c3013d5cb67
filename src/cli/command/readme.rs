mod readme_args;

pub use readme_args::ReadmeArgs;
