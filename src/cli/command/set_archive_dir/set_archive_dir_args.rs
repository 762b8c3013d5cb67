use crate::archive_dir::set_archive_dir;
use crate::cli::to_args::ToArgs;
use arbitrary::Arbitrary;
use clap::Args;
use eyre::Context;
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Arbitrary, PartialEq, Debug, Default, Clone)]
pub struct SetArchiveDirArgs {
    /// Path to use as the archive root (defaults to current working directory if omitted)
    pub path: Option<PathBuf>,
}

impl SetArchiveDirArgs {
    pub fn invoke(self) -> eyre::Result<()> {
        let requested = match self.path {
            Some(path) => path,
            None => std::env::current_dir()?,
        };
        let target = dunce::canonicalize(&requested)
            .wrap_err_with(|| format!("Failed to resolve {}", requested.display()))?;
        info!("Setting archive dir to {}", target.display());
        set_archive_dir(&target)?;
        println!("Set archive dir to {}", target.display());
        Ok(())
    }
}

impl ToArgs for SetArchiveDirArgs {
    fn to_args(&self) -> Vec<OsString> {
        let mut args = Vec::new();
        if let Some(path) = &self.path {
            args.push(path.into());
        }
        args
    }
}
