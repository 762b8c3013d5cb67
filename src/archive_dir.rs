use crate::cli::Cli;
use crate::cli::command::Command;
use crate::cli::command::set_archive_dir::SetArchiveDirArgs;
use crate::paths::ConfigDirPath;
use crate::paths::EnsureParentDirExists;
use eyre::Context;
use std::fs;
use std::path::Path;
use std::path::PathBuf;
use tracing::debug;
use tracing::warn;

pub const ARCHIVE_DIR_ENV: &str = "PRACTICE_ARCHIVE_DIR";

const ARCHIVE_DIR_FILE_NAME: &str = "archive_dir.txt";

/// Single-line UTF-8 file remembering the archive root between runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveDirStore {
    path: PathBuf,
}

impl ArchiveDirStore {
    pub fn in_config_dir(config_dir: impl AsRef<Path>) -> Self {
        Self {
            path: config_dir.as_ref().join(ARCHIVE_DIR_FILE_NAME),
        }
    }

    /// The store under the user's platform config directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform config directory cannot be determined.
    pub fn user_default() -> eyre::Result<Self> {
        Ok(Self::in_config_dir(ConfigDirPath::new()?))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// # Errors
    ///
    /// Returns an error if the store exists but cannot be read.
    pub fn load(&self) -> eyre::Result<Option<PathBuf>> {
        if !self.path.exists() {
            return Ok(None);
        }
        debug!("Reading archive dir from {}", self.path.display());
        let contents = fs::read_to_string(&self.path)
            .wrap_err_with(|| format!("Failed to read {}", self.path.display()))?;
        let line = contents.trim();
        Ok((!line.is_empty()).then(|| PathBuf::from(line)))
    }

    /// # Errors
    ///
    /// Returns an error if the config directory cannot be created or the file cannot be written.
    pub fn save(&self, archive_dir: impl AsRef<Path>) -> eyre::Result<()> {
        self.path.ensure_parent_dir_exists()?;
        if self.path.exists() {
            debug!("Overwriting archive dir file at {}", self.path.display());
        }
        fs::write(
            &self.path,
            format!("{}\n", archive_dir.as_ref().display()),
        )
        .wrap_err_with(|| format!("Failed to write {}", self.path.display()))
    }
}

/// The configured archive root: the environment variable first, then the persisted store.
///
/// # Errors
///
/// Returns an error if the config directory cannot be determined or the store cannot be read.
pub fn get_archive_dir() -> eyre::Result<Option<PathBuf>> {
    archive_dir_from(
        std::env::var(ARCHIVE_DIR_ENV).ok(),
        &ArchiveDirStore::user_default()?,
    )
}

/// A non-blank `env_value` wins over whatever `store` holds.
fn archive_dir_from(
    env_value: Option<String>,
    store: &ArchiveDirStore,
) -> eyre::Result<Option<PathBuf>> {
    if let Some(value) = env_value {
        let trimmed = value.trim();
        if !trimmed.is_empty() {
            debug!(env = ARCHIVE_DIR_ENV, "Using archive dir from env: {}", trimmed);
            return Ok(Some(PathBuf::from(trimmed)));
        }
    }
    store.load()
}

/// Persist `archive_dir` for future runs.
///
/// # Errors
///
/// Returns an error if the store cannot be written.
pub fn set_archive_dir(archive_dir: impl AsRef<Path>) -> eyre::Result<()> {
    if std::env::var(ARCHIVE_DIR_ENV).is_ok() {
        warn!(
            env = ARCHIVE_DIR_ENV,
            "{} is set; it will override the persisted archive dir when reading", ARCHIVE_DIR_ENV
        );
    }
    ArchiveDirStore::user_default()?.save(archive_dir)
}

/// Pick the archive root: an explicit path wins, then the configured one, then the
/// current directory.
///
/// # Errors
///
/// Returns an error if the configuration cannot be read or the current directory is unavailable.
pub fn resolve_archive_dir(explicit: Option<PathBuf>) -> eyre::Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir);
    }
    if let Some(dir) = get_archive_dir()? {
        return Ok(dir);
    }
    let current = std::env::current_dir()?;
    debug!(
        "No archive dir configured (see `{}`); using {}",
        Cli {
            command: Some(Command::SetArchiveDir(SetArchiveDirArgs { path: None })),
            ..Default::default()
        }
        .display_invocation(),
        current.display()
    );
    Ok(current)
}
