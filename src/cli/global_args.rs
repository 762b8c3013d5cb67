use crate::cli::to_args::ToArgs;
use arbitrary::Arbitrary;
use clap::Args;
use std::ffi::OsString;
use tracing::Level;

/// How log lines are formatted on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Args, Arbitrary, PartialEq, Debug, Default, Clone)]
pub struct GlobalArgs {
    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,
    /// Emit logs as JSON lines instead of pretty text
    #[arg(long, global = true)]
    pub log_json: bool,
}

impl GlobalArgs {
    #[must_use]
    pub fn log_level(&self) -> Level {
        if self.debug { Level::DEBUG } else { Level::INFO }
    }

    #[must_use]
    pub fn log_format(&self) -> LogFormat {
        if self.log_json {
            LogFormat::Json
        } else {
            LogFormat::Pretty
        }
    }
}

impl ToArgs for GlobalArgs {
    fn to_args(&self) -> Vec<OsString> {
        let mut args = Vec::new();
        if self.debug {
            args.push("--debug".into());
        }
        if self.log_json {
            args.push("--log-json".into());
        }
        args
    }
}
