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
pub struct ListProblemsArgs {
    /// Archive root holding the dated folders (defaults to the configured archive dir, then the current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,
    /// Print a JSON array of problem records instead of one link per line
    #[arg(long)]
    pub json: bool,
}

impl ListProblemsArgs {
    pub fn invoke(self) -> eyre::Result<()> {
        let root = resolve_archive_dir(self.root.clone())?;
        self.run(&root, io::stdout().lock())
    }

    /// Scan `root` and write the problem list to `output`.
    ///
    /// # Errors
    ///
    /// Returns an error if the archive cannot be scanned or `output` cannot be written.
    pub fn run(&self, root: &Path, mut output: impl Write) -> eyre::Result<()> {
        let index = scan_archive(root)?;
        if self.json {
            let json = serde_json::to_string_pretty(&index)
                .wrap_err("Failed to serialize problem list")?;
            writeln!(output, "{json}").wrap_err("Failed to write problem list")?;
        } else {
            for problem in index.problems() {
                writeln!(output, "{}", problem.link()).wrap_err("Failed to write problem list")?;
            }
        }
        output.flush().wrap_err("Failed to flush problem list")
    }
}

impl ToArgs for ListProblemsArgs {
    fn to_args(&self) -> Vec<OsString> {
        let mut args = Vec::new();
        if let Some(root) = &self.root {
            args.push("--root".into());
            args.push(root.into());
        }
        if self.json {
            args.push("--json".into());
        }
        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use serde_json::json;
    use std::fs;

    fn sample_archive() -> eyre::Result<tempfile::TempDir> {
        let root = tempfile::tempdir()?;
        let cpp = root.path().join("250511").join("segments");
        fs::create_dir_all(&cpp)?;
        fs::write(cpp.join("main.cpp"), "int main() {}")?;
        fs::write(cpp.join("README.md"), "|난이도| 보통 |\n")?;
        let unknown = root.path().join("250512").join("notes only");
        fs::create_dir_all(&unknown)?;
        fs::write(unknown.join("notes.txt"), "todo")?;
        Ok(root)
    }

    #[test]
    fn json_records_use_lowercase_difficulty_and_display_language() -> eyre::Result<()> {
        let root = sample_archive()?;
        let mut output = Vec::new();
        ListProblemsArgs {
            root: None,
            json: true,
        }
        .run(root.path(), &mut output)?;
        let listed: Value = serde_json::from_slice(&output)?;
        assert_eq!(
            listed,
            json!([
                {
                    "date": "250511",
                    "folder": "segments",
                    "difficulty": "normal",
                    "language": "C++",
                },
                {
                    "date": "250512",
                    "folder": "notes only",
                    "difficulty": "easy",
                    "language": null,
                },
            ])
        );
        Ok(())
    }

    #[test]
    fn plain_listing_prints_one_link_per_line() -> eyre::Result<()> {
        let root = sample_archive()?;
        let mut output = Vec::new();
        ListProblemsArgs::default().run(root.path(), &mut output)?;
        assert_eq!(
            String::from_utf8(output)?,
            "./250511/segments\n./250512/notes only\n"
        );
        Ok(())
    }
}
