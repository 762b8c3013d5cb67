use crate::archive_dir::get_archive_dir;
use crate::cli::to_args::ToArgs;
use arbitrary::Arbitrary;
use clap::Args;

#[derive(Args, Arbitrary, PartialEq, Debug, Default, Clone)]
pub struct GetArchiveDirArgs;

impl GetArchiveDirArgs {
    pub fn invoke(self) -> eyre::Result<()> {
        match get_archive_dir()? {
            Some(dir) => println!("{}", dir.display()),
            None => println!("<not set>"),
        }
        Ok(())
    }
}

impl ToArgs for GetArchiveDirArgs {}
