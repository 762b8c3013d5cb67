use crate::archive::readme::ReadmeUpdate;
use crate::archive::readme::render_readme;
use crate::archive::readme::write_readme;
use crate::archive::scan::scan_archive;
use crate::archive_dir::resolve_archive_dir;
use crate::cli::to_args::ToArgs;
use arbitrary::Arbitrary;
use clap::Args;
use eyre::Context;
use std::ffi::OsString;
use std::io;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

#[derive(Args, Arbitrary, PartialEq, Debug, Default, Clone)]
pub struct ReadmeArgs {
    /// Archive root holding the dated folders (defaults to the configured archive dir, then the current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,
    /// Print the generated README to stdout instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

impl ReadmeArgs {
    pub fn invoke(self) -> eyre::Result<()> {
        let root = resolve_archive_dir(self.root.clone())?;
        self.run(&root, io::stdout().lock())
    }

    /// Scan `root` and either regenerate its README or, on a dry run, write the
    /// rendered README to `output` instead.
    ///
    /// # Errors
    ///
    /// Returns an error if the archive cannot be scanned, the README cannot be written,
    /// or `output` cannot be written.
    pub fn run(&self, root: &Path, mut output: impl Write) -> eyre::Result<()> {
        let index = scan_archive(root)?;
        if self.dry_run {
            write!(output, "{}", render_readme(&index)).wrap_err("Failed to write README")?;
        } else {
            let summary = match write_readme(root, &index)? {
                ReadmeUpdate::Updated(path) => format!("Updated {}", path.display()),
                ReadmeUpdate::Unchanged => "No problems found; README left unchanged".to_string(),
            };
            writeln!(output, "{summary}").wrap_err("Failed to write summary")?;
        }
        output.flush().wrap_err("Failed to flush output")
    }
}

impl ToArgs for ReadmeArgs {
    fn to_args(&self) -> Vec<OsString> {
        let mut args = Vec::new();
        if let Some(root) = &self.root {
            args.push("--root".into());
            args.push(root.into());
        }
        if self.dry_run {
            args.push("--dry-run".into());
        }
        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archive::readme::README_FILE_NAME;
    use std::fs;

    fn sample_archive() -> eyre::Result<tempfile::TempDir> {
        let root = tempfile::tempdir()?;
        let problem = root.path().join("250511").join("segments");
        fs::create_dir_all(&problem)?;
        fs::write(problem.join("solution.py"), "print(2)")?;
        Ok(root)
    }

    #[test]
    fn dry_run_prints_and_leaves_disk_alone() -> eyre::Result<()> {
        let root = sample_archive()?;
        let mut output = Vec::new();
        ReadmeArgs {
            root: None,
            dry_run: true,
        }
        .run(root.path(), &mut output)?;
        let printed = String::from_utf8(output)?;
        assert_eq!(printed, render_readme(&scan_archive(root.path())?));
        assert!(printed.contains("[segments](./250511/segments)"));
        assert!(!root.path().join(README_FILE_NAME).exists());
        Ok(())
    }

    #[test]
    fn regenerates_readme_and_reports_path() -> eyre::Result<()> {
        let root = sample_archive()?;
        let mut output = Vec::new();
        ReadmeArgs::default().run(root.path(), &mut output)?;
        let readme = root.path().join(README_FILE_NAME);
        assert_eq!(
            String::from_utf8(output)?,
            format!("Updated {}\n", readme.display())
        );
        assert_eq!(
            fs::read_to_string(&readme)?,
            render_readme(&scan_archive(root.path())?)
        );
        Ok(())
    }

    #[test]
    fn empty_archive_reports_unchanged() -> eyre::Result<()> {
        let root = tempfile::tempdir()?;
        let mut output = Vec::new();
        ReadmeArgs::default().run(root.path(), &mut output)?;
        assert_eq!(
            String::from_utf8(output)?,
            "No problems found; README left unchanged\n"
        );
        assert!(!root.path().join(README_FILE_NAME).exists());
        Ok(())
    }
}
