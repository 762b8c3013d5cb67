pub mod archive;
pub mod archive_dir;
pub mod cli;
pub mod overlap;
pub mod paths;

use crate::cli::Cli;
use crate::cli::global_args::LogFormat;
use clap::CommandFactory;
use clap::FromArgMatches;
use tracing::Level;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::util::SubscriberInitExt;

/// Initialize the tracing subscriber on stderr, leaving stdout for command output.
/// `RUST_LOG` overrides `level` when set.
/// In debug builds, pretty output includes file and line number without timestamp.
pub fn init_tracing(level: Level, format: LogFormat) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::builder().parse_lossy(level.to_string()));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr);
    let result = match format {
        LogFormat::Json => builder.json().finish().try_init(),
        LogFormat::Pretty => {
            let builder = builder.pretty();
            #[cfg(debug_assertions)]
            let subscriber = builder
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .without_time()
                .finish();
            #[cfg(not(debug_assertions))]
            let subscriber = builder.finish();
            subscriber.try_init()
        }
    };
    if let Err(error) = result {
        eprintln!(
            "Failed to initialize tracing subscriber - are you running `cargo test`? If so, multiple test entrypoints may be running from the same process. https://github.com/tokio-rs/console/issues/505 : {error}"
        );
        return;
    }
    debug!("Tracing initialized with level: {:?}", level);
}

// Entrypoint for the program to reduce coupling to the name of this crate.
pub fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::command();
    let cli = Cli::from_arg_matches(&cli.get_matches())?;
    cli.invoke()
}
