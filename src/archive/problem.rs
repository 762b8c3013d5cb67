use crate::archive::difficulty::Difficulty;
use crate::archive::language::Language;
use chrono::NaiveDate;
use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;
use percent_encoding::utf8_percent_encode;
use serde::Serialize;

/// RFC 3986 unreserved characters plus `/` pass through; everything else is percent-encoded.
pub const LINK_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'/');

/// Date folder names are exactly six ASCII digits, `YYMMDD`.
#[must_use]
pub fn is_date_folder_name(name: &str) -> bool {
    name.len() == 6 && name.bytes().all(|b| b.is_ascii_digit())
}

/// One solved problem: a folder inside a date folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Problem {
    /// Name of the containing date folder, e.g. `250511`.
    pub date: String,
    /// Name of the problem folder.
    pub folder: String,
    pub difficulty: Difficulty,
    pub language: Option<Language>,
}

impl Problem {
    /// Archive-relative link, e.g. `./250511/some problem`.
    #[must_use]
    pub fn link(&self) -> String {
        format!("./{}/{}", self.date, self.folder)
    }

    #[must_use]
    pub fn encoded_link(&self) -> String {
        utf8_percent_encode(&self.link(), &LINK_ENCODE_SET).to_string()
    }

    #[must_use]
    pub fn language_label(&self) -> &'static str {
        Language::label(self.language)
    }

    /// Upload date parsed from the date folder, if it is a real calendar date.
    #[must_use]
    pub fn uploaded_on(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%y%m%d").ok()
    }
}
