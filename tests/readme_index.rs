use practice_archive::archive::difficulty::Difficulty;
use practice_archive::archive::readme::README_FILE_NAME;
use practice_archive::archive::readme::ReadmeUpdate;
use practice_archive::archive::readme::write_readme;
use practice_archive::archive::scan::scan_archive;
use std::fs;
use std::path::Path;

fn add_problem(root: &Path, date: &str, folder: &str, difficulty_row: Option<&str>, solution: &str) {
    let dir = root.join(date).join(folder);
    fs::create_dir_all(&dir).expect("create problem folder");
    if let Some(row) = difficulty_row {
        fs::write(dir.join(README_FILE_NAME), format!("# {folder}\n\n|항목|값|\n{row}\n"))
            .expect("write problem readme");
    }
    fs::write(dir.join(solution), "").expect("write solution");
}

#[test]
fn regenerates_index_for_archive() -> eyre::Result<()> {
    let root = tempfile::tempdir()?;
    add_problem(
        root.path(),
        "250511",
        "최대로 겹치는 구간",
        Some("|난이도| 보통 |"),
        "maximum-overlapped-segments.py",
    );
    add_problem(root.path(), "250512", "two sum", None, "solution.cpp");
    add_problem(root.path(), "250513", "hard one", Some("|난이도| Hard |"), "Main.kt");

    let index = scan_archive(root.path())?;
    assert_eq!(index.problems().len(), 3);
    assert_eq!(index.problems_with(Difficulty::Normal).count(), 1);

    let update = write_readme(root.path(), &index)?;
    let readme_path = root.path().join(README_FILE_NAME);
    assert_eq!(update, ReadmeUpdate::Updated(readme_path.clone()));

    let readme = fs::read_to_string(&readme_path)?;
    let easy = readme.find("### 🟢 쉬움").expect("easy section");
    let normal = readme.find("### 🟡 보통").expect("normal section");
    let hard = readme.find("### 🔴 어려움").expect("hard section");
    assert!(easy < normal && normal < hard);
    assert!(readme.contains(
        "| 250512 | [two sum](./250512/two%20sum) | C++ | [링크](./250512/two%20sum) | ![쉬움](https://img.shields.io/badge/쉬움-%235cb85c.svg?for-the-badge) |"
    ));
    assert!(readme.contains("| 250511 | [최대로 겹치는 구간](./250511/%EC%B5%9C"));
    assert!(readme.contains("| Kotlin |"));
    Ok(())
}

#[test]
fn rescanning_picks_up_its_own_readme_harmlessly() -> eyre::Result<()> {
    let root = tempfile::tempdir()?;
    add_problem(root.path(), "250101", "a", None, "a.go");
    let first = scan_archive(root.path())?;
    write_readme(root.path(), &first)?;
    let second = scan_archive(root.path())?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn empty_archive_writes_nothing() -> eyre::Result<()> {
    let root = tempfile::tempdir()?;
    fs::create_dir_all(root.path().join("not-a-date"))?;
    let index = scan_archive(root.path())?;
    assert_eq!(write_readme(root.path(), &index)?, ReadmeUpdate::Unchanged);
    assert!(!root.path().join(README_FILE_NAME).exists());
    Ok(())
}
