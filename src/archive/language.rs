use serde::Serialize;
use strum::Display;
use strum::EnumIter;
use strum::IntoEnumIterator;
use strum::IntoStaticStr;

/// Shown in the index when no solution file has a known extension.
pub const UNKNOWN_LANGUAGE: &str = "알 수 없음";

/// Solution languages recognised by file extension, in matching priority order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr, EnumIter, Serialize,
)]
pub enum Language {
    Python,
    Java,
    #[strum(to_string = "C++")]
    #[serde(rename = "C++")]
    Cpp,
    JavaScript,
    C,
    Ruby,
    Go,
    Kotlin,
    Swift,
    Rust,
}

impl Language {
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Language::Python => ".py",
            Language::Java => ".java",
            Language::Cpp => ".cpp",
            Language::JavaScript => ".js",
            Language::C => ".c",
            Language::Ruby => ".rb",
            Language::Go => ".go",
            Language::Kotlin => ".kt",
            Language::Swift => ".swift",
            Language::Rust => ".rs",
        }
    }

    /// Language of `file_name` by case-insensitive extension.
    #[must_use]
    pub fn detect(file_name: &str) -> Option<Self> {
        let lower = file_name.to_lowercase();
        Language::iter().find(|language| lower.ends_with(language.extension()))
    }

    #[must_use]
    pub fn label(language: Option<Self>) -> &'static str {
        language.map_or(UNKNOWN_LANGUAGE, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_by_extension() {
        assert_eq!(
            Language::detect("maximum-overlapped-segments.py"),
            Some(Language::Python)
        );
        assert_eq!(Language::detect("Main.JAVA"), Some(Language::Java));
        assert_eq!(Language::detect("sol.cpp"), Some(Language::Cpp));
        assert_eq!(Language::detect("sol.c"), Some(Language::C));
        assert_eq!(Language::detect("main.rs"), Some(Language::Rust));
        assert_eq!(Language::detect("README.md"), None);
        assert_eq!(Language::detect("py"), None);
    }

    #[test]
    fn labels() {
        assert_eq!(Language::label(Some(Language::Cpp)), "C++");
        assert_eq!(Language::label(Some(Language::JavaScript)), "JavaScript");
        assert_eq!(Language::label(None), UNKNOWN_LANGUAGE);
    }
}
