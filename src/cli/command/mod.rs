pub mod get_archive_dir;
pub mod list_problems;
pub mod overlap;
pub mod readme;
pub mod set_archive_dir;

use crate::cli::command::get_archive_dir::GetArchiveDirArgs;
use crate::cli::command::list_problems::ListProblemsArgs;
use crate::cli::command::overlap::OverlapArgs;
use crate::cli::command::readme::ReadmeArgs;
use crate::cli::command::set_archive_dir::SetArchiveDirArgs;
use crate::cli::global_args::GlobalArgs;
use crate::cli::to_args::ToArgs;
use crate::init_tracing;
use arbitrary::Arbitrary;
use clap::Subcommand;
use std::ffi::OsString;

/// Practice archive commands
#[derive(Subcommand, Arbitrary, PartialEq, Debug)]
pub enum Command {
    /// Read intervals from stdin and print how many share a common interior point at most
    Overlap(OverlapArgs),
    /// Regenerate the archive README index from the dated problem folders
    Readme(ReadmeArgs),
    /// List problem folders found in the archive
    ListProblems(ListProblemsArgs),
    /// Get the currently configured archive directory
    GetArchiveDir(GetArchiveDirArgs),
    /// Set the archive directory (defaults to current directory if omitted)
    SetArchiveDir(SetArchiveDirArgs),
}

impl Default for Command {
    fn default() -> Self {
        Command::Overlap(OverlapArgs::default())
    }
}

impl Command {
    pub fn invoke(self, global_args: GlobalArgs) -> eyre::Result<()> {
        init_tracing(global_args.log_level(), global_args.log_format());
        match self {
            Command::Overlap(args) => args.invoke(),
            Command::Readme(args) => args.invoke(),
            Command::ListProblems(args) => args.invoke(),
            Command::GetArchiveDir(args) => args.invoke(),
            Command::SetArchiveDir(args) => args.invoke(),
        }
    }
}

impl ToArgs for Command {
    fn to_args(&self) -> Vec<OsString> {
        let mut args = Vec::new();
        match self {
            Command::Overlap(overlap_args) => {
                args.push("overlap".into());
                args.extend(overlap_args.to_args());
            }
            Command::Readme(readme_args) => {
                args.push("readme".into());
                args.extend(readme_args.to_args());
            }
            Command::ListProblems(list_args) => {
                args.push("list-problems".into());
                args.extend(list_args.to_args());
            }
            Command::GetArchiveDir(get_args) => {
                args.push("get-archive-dir".into());
                args.extend(get_args.to_args());
            }
            Command::SetArchiveDir(set_args) => {
                args.push("set-archive-dir".into());
                args.extend(set_args.to_args());
            }
        }
        args
    }
}
