pub mod command;
pub mod global_args;
pub mod to_args;

use crate::cli::command::Command;
use crate::cli::global_args::GlobalArgs;
use crate::cli::to_args::ToArgs;
use arbitrary::Arbitrary;
use clap::Parser;
use itertools::Itertools;
use std::ffi::OsString;

#[derive(Parser, Arbitrary, PartialEq, Debug, Default)]
#[command(
    name = "practice-archive",
    version,
    about = "Practice problem archive: segment overlap solver and README indexer",
    propagate_version = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global_args: GlobalArgs,
    /// Defaults to `overlap` when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Run the selected command, falling back to the overlap solver.
    ///
    /// # Errors
    ///
    /// Returns whatever error the command produces.
    pub fn invoke(self) -> eyre::Result<()> {
        self.command.unwrap_or_default().invoke(self.global_args)
    }

    /// Shell-ish rendering of the invocation, for hints in messages.
    #[must_use]
    pub fn display_invocation(&self) -> String {
        std::iter::once(OsString::from(env!("CARGO_PKG_NAME")))
            .chain(self.to_args())
            .map(|arg| {
                let arg = arg.to_string_lossy().into_owned();
                if arg.is_empty() || arg.contains(char::is_whitespace) {
                    format!("{arg:?}")
                } else {
                    arg
                }
            })
            .join(" ")
    }
}

impl ToArgs for Cli {
    fn to_args(&self) -> Vec<OsString> {
        let mut args = self.global_args.to_args();
        if let Some(command) = &self.command {
            args.extend(command.to_args());
        }
        args
    }
}
