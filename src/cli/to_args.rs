use std::ffi::OsString;

/// Reconstruct the command-line arguments that would parse back into `self`.
pub trait ToArgs {
    fn to_args(&self) -> Vec<OsString> {
        Vec::new()
    }
}
