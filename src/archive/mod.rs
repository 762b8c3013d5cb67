//! README index generation for a dated practice-problem archive.
//!
//! The archive root holds `YYMMDD` folders, each holding one folder per solved problem.

pub mod difficulty;
pub mod language;
pub mod problem;
pub mod readme;
pub mod scan;
