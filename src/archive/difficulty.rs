use serde::Serialize;
use std::fs;
use std::path::Path;
use strum::AsRefStr;
use strum::Display;
use strum::EnumIter;
use strum::EnumString;
use tracing::debug;
use tracing::warn;

/// Marker cell preceding the difficulty value in a problem README table row.
pub const DIFFICULTY_MARKER: &str = "|난이도|";

/// Problem difficulty as recorded in a problem's README.
///
/// Declaration order is the order sections appear in the generated index.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Display,
    EnumString,
    AsRefStr,
    EnumIter,
    Serialize,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    #[strum(to_string = "쉬움", serialize = "easy")]
    Easy,
    #[strum(to_string = "보통", serialize = "medium")]
    Normal,
    #[strum(to_string = "어려움", serialize = "hard")]
    Hard,
}

impl Difficulty {
    /// Map a raw label (Korean or English, any ASCII case) to a difficulty,
    /// falling back to [`Difficulty::Easy`] for anything unrecognised.
    #[must_use]
    pub fn from_label(raw: &str) -> Self {
        raw.trim().to_lowercase().parse().unwrap_or_default()
    }

    #[must_use]
    pub const fn color_hex(self) -> &'static str {
        match self {
            Difficulty::Easy => "5cb85c",
            Difficulty::Normal => "FFC433",
            Difficulty::Hard => "D24D57",
        }
    }

    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Difficulty::Easy => "🟢",
            Difficulty::Normal => "🟡",
            Difficulty::Hard => "🔴",
        }
    }

    #[must_use]
    pub fn badge_url(self) -> String {
        format!(
            "https://img.shields.io/badge/{label}-%23{hex}.svg?for-the-badge",
            label = self.as_ref(),
            hex = self.color_hex()
        )
    }
}

/// Difficulty named on a single README line, if the line carries the marker cell
/// followed by a closing `|`.
#[must_use]
pub fn parse_difficulty_line(line: &str) -> Option<Difficulty> {
    let (_, rest) = line.split_once(DIFFICULTY_MARKER)?;
    let (value, _) = rest.split_once('|')?;
    Some(Difficulty::from_label(value))
}

/// Difficulty declared in the README at `readme_path`. The last declaring line wins.
///
/// A missing or unreadable README yields [`Difficulty::Easy`]; an unreadable one is logged.
pub fn extract_difficulty(readme_path: impl AsRef<Path>) -> Difficulty {
    let readme_path = readme_path.as_ref();
    if !readme_path.exists() {
        return Difficulty::default();
    }
    let contents = match fs::read_to_string(readme_path) {
        Ok(contents) => contents,
        Err(error) => {
            warn!("Error reading {}: {}", readme_path.display(), error);
            return Difficulty::default();
        }
    };
    let difficulty = contents
        .lines()
        .filter_map(parse_difficulty_line)
        .last()
        .unwrap_or_default();
    debug!("{} declares difficulty {}", readme_path.display(), difficulty);
    difficulty
}
