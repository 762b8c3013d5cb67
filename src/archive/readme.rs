use crate::archive::difficulty::Difficulty;
use crate::archive::scan::ArchiveIndex;
use eyre::Context;
use itertools::Itertools;
use std::fs;
use std::path::Path;
use std::path::PathBuf;
use strum::IntoEnumIterator;
use tracing::debug;
use tracing::info;

pub const README_FILE_NAME: &str = "README.md";

pub const README_HEADER: &str = "# 코드트리 문제 풀이 목록\n## 🌳 코드트리 문제 목록\n";

const TABLE_HEADER: &str = "| 업로드 날짜 | 문제 폴더 | 언어 | 링크 | 난이도 |\n\
                            | ----------- | --------- | ---- | ----- | ------- |\n";

/// Render the index as markdown: one table per difficulty that has problems.
#[must_use]
pub fn render_readme(index: &ArchiveIndex) -> String {
    let mut content = String::from(README_HEADER);
    for difficulty in Difficulty::iter() {
        let problems = index.problems_with(difficulty).collect_vec();
        if problems.is_empty() {
            continue;
        }
        content.push_str(&format!("### {} {}\n", difficulty.emoji(), difficulty));
        content.push_str(TABLE_HEADER);
        for problem in problems {
            let link = problem.encoded_link();
            content.push_str(&format!(
                "| {date} | [{folder}]({link}) | {language} | [링크]({link}) | ![{difficulty}]({badge}) |\n",
                date = problem.date,
                folder = problem.folder,
                language = problem.language_label(),
                badge = difficulty.badge_url(),
            ));
        }
    }
    content
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadmeUpdate {
    /// The README at this path was rewritten.
    Updated(PathBuf),
    /// No problems were found, so nothing was written.
    Unchanged,
}

/// Write the rendered index to `<root>/README.md`, unless the index is empty.
///
/// # Errors
///
/// Returns an error if the README cannot be written.
pub fn write_readme(root: impl AsRef<Path>, index: &ArchiveIndex) -> eyre::Result<ReadmeUpdate> {
    if index.is_empty() {
        debug!("No problems found; leaving README untouched");
        return Ok(ReadmeUpdate::Unchanged);
    }
    let readme_path = root.as_ref().join(README_FILE_NAME);
    fs::write(&readme_path, render_readme(index))
        .wrap_err_with(|| format!("Failed to write {}", readme_path.display()))?;
    info!("Wrote {}", readme_path.display());
    Ok(ReadmeUpdate::Updated(readme_path))
}
