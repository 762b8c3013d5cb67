use crate::archive::difficulty::Difficulty;
use crate::archive::difficulty::extract_difficulty;
use crate::archive::language::Language;
use crate::archive::problem::Problem;
use crate::archive::problem::is_date_folder_name;
use crate::archive::readme::README_FILE_NAME;
use eyre::Context;
use serde::Serialize;
use std::fs;
use std::fs::DirEntry;
use std::path::Path;
use thousands::Separable;
use tracing::debug;
use tracing::info;
use tracing::warn;

/// Every problem found under an archive root, in scan order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ArchiveIndex {
    problems: Vec<Problem>,
}

impl ArchiveIndex {
    #[must_use]
    pub fn new(problems: Vec<Problem>) -> Self {
        Self { problems }
    }

    #[must_use]
    pub fn problems(&self) -> &[Problem] {
        &self.problems
    }

    pub fn problems_with(&self, difficulty: Difficulty) -> impl Iterator<Item = &Problem> {
        self.problems
            .iter()
            .filter(move |problem| problem.difficulty == difficulty)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }
}

fn sorted_entries(dir: &Path) -> eyre::Result<Vec<DirEntry>> {
    let mut entries = fs::read_dir(dir)
        .wrap_err_with(|| format!("Failed to list {}", dir.display()))?
        .collect::<Result<Vec<_>, _>>()
        .wrap_err_with(|| format!("Failed to read an entry of {}", dir.display()))?;
    entries.sort_by_key(DirEntry::file_name);
    Ok(entries)
}

/// First entry name (sorted) in `problem_dir` with a recognised solution extension.
fn detect_language(problem_dir: &Path) -> eyre::Result<Option<Language>> {
    Ok(sorted_entries(problem_dir)?
        .iter()
        .find_map(|entry| Language::detect(&entry.file_name().to_string_lossy())))
}

/// Walk `root` for `YYMMDD/<problem>` folders.
///
/// Date folders and the problem folders inside each are visited in name order.
///
/// # Errors
///
/// Returns an error if `root` or any matched folder cannot be listed.
pub fn scan_archive(root: impl AsRef<Path>) -> eyre::Result<ArchiveIndex> {
    let root = root.as_ref();
    debug!("Scanning archive at {}", root.display());
    let mut problems = Vec::new();

    for date_entry in sorted_entries(root)? {
        let date = date_entry.file_name().to_string_lossy().into_owned();
        let date_path = date_entry.path();
        if !is_date_folder_name(&date) || !date_path.is_dir() {
            continue;
        }

        for problem_entry in sorted_entries(&date_path)? {
            let problem_path = problem_entry.path();
            if !problem_path.is_dir() {
                continue;
            }
            let problem = Problem {
                date: date.clone(),
                folder: problem_entry.file_name().to_string_lossy().into_owned(),
                difficulty: extract_difficulty(problem_path.join(README_FILE_NAME)),
                language: detect_language(&problem_path)?,
            };
            if problem.uploaded_on().is_none() {
                warn!(
                    "Date folder {} is not a valid YYMMDD date; listing it anyway",
                    problem.date
                );
            }
            debug!(
                date = %problem.date,
                difficulty = %problem.difficulty,
                language = problem.language_label(),
                "Found problem {}",
                problem.folder
            );
            problems.push(problem);
        }
    }

    info!(
        "Found {} problems under {}",
        problems.len().separate_with_commas(),
        root.display()
    );
    Ok(ArchiveIndex { problems })
}
