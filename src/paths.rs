use directories::ProjectDirs;
use eyre::Context;
use eyre::eyre;
use std::fs;
use std::ops::Deref;
use std::path::Path;
use std::path::PathBuf;

/// The platform config directory for this tool, e.g. `~/.config/practice_archive` on Linux.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigDirPath {
    path: PathBuf,
}

impl ConfigDirPath {
    /// # Errors
    ///
    /// Returns an error if the platform has no resolvable home directory.
    pub fn new() -> eyre::Result<Self> {
        let dirs = ProjectDirs::from_path(PathBuf::from("practice_archive"))
            .ok_or_else(|| eyre!("Could not determine project directories"))?;
        Ok(Self {
            path: dirs.config_dir().to_path_buf(),
        })
    }
}

impl Deref for ConfigDirPath {
    type Target = PathBuf;

    fn deref(&self) -> &Self::Target {
        &self.path
    }
}

impl AsRef<Path> for ConfigDirPath {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

/// Create the parent directory of a file path before writing to it.
pub trait EnsureParentDirExists {
    fn ensure_parent_dir_exists(&self) -> eyre::Result<()>;
}

impl<T: AsRef<Path>> EnsureParentDirExists for T {
    fn ensure_parent_dir_exists(&self) -> eyre::Result<()> {
        if let Some(parent) = self.as_ref().parent()
            && !parent.exists()
        {
            fs::create_dir_all(parent)
                .wrap_err_with(|| format!("Failed to create {}", parent.display()))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_missing_parents_but_not_the_file() -> eyre::Result<()> {
        let dir = tempfile::tempdir()?;
        let file = dir.path().join("a").join("b").join("archive_dir.txt");
        file.ensure_parent_dir_exists()?;
        assert!(dir.path().join("a").join("b").is_dir());
        assert!(!file.exists());
        // already present
        file.ensure_parent_dir_exists()?;
        Ok(())
    }

    #[test]
    fn config_dir_names_this_tool() -> eyre::Result<()> {
        let Ok(config_dir) = ConfigDirPath::new() else {
            // no home directory in this environment
            return Ok(());
        };
        assert!(
            config_dir
                .components()
                .any(|component| component.as_os_str() == "practice_archive")
        );
        Ok(())
    }
}
