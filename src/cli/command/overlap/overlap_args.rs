use crate::cli::to_args::ToArgs;
use crate::overlap::algorithm::OverlapAlgorithm;
use crate::overlap::interval_set::IntervalSet;
use arbitrary::Arbitrary;
use clap::Args;
use eyre::Context;
use std::ffi::OsString;
use std::io;
use std::io::Read;
use std::io::Write;
use tracing::debug;

#[derive(Args, Arbitrary, PartialEq, Debug, Default, Clone)]
pub struct OverlapArgs {
    /// Counting strategy; every strategy reports the same answer
    #[arg(long, value_enum, default_value_t = OverlapAlgorithm::default())]
    pub algorithm: OverlapAlgorithm,
}

impl OverlapArgs {
    /// Solve the instance on stdin and print the answer to stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if stdin is not a well-formed instance or stdout cannot be written.
    pub fn invoke(self) -> eyre::Result<()> {
        self.run(io::stdin().lock(), io::stdout().lock())?;
        Ok(())
    }

    /// Read one instance from `input`, write the answer line to `output`, and return the answer.
    ///
    /// # Errors
    ///
    /// Returns an error if `input` is not a well-formed instance or `output` cannot be written.
    pub fn run(&self, input: impl Read, mut output: impl Write) -> eyre::Result<usize> {
        let set = IntervalSet::read_from(input)?;
        debug!(
            "Counting overlap of {} intervals with {}",
            set.len(),
            self.algorithm
        );
        let answer = self.algorithm.count(&set);
        writeln!(output, "{answer}").wrap_err("Failed to write answer")?;
        output.flush().wrap_err("Failed to flush answer")?;
        Ok(answer)
    }
}

impl ToArgs for OverlapArgs {
    fn to_args(&self) -> Vec<OsString> {
        let mut args = Vec::new();
        if self.algorithm != OverlapAlgorithm::default() {
            args.push("--algorithm".into());
            args.push(self.algorithm.as_ref().into());
        }
        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_answer_line() -> eyre::Result<()> {
        let mut output = Vec::new();
        let answer = OverlapArgs::default().run("3\n1 5\n3 7\n6 10\n".as_bytes(), &mut output)?;
        assert_eq!(answer, 2);
        assert_eq!(String::from_utf8(output)?, "2\n");
        Ok(())
    }

    #[test]
    fn malformed_input_writes_nothing() {
        let mut output = Vec::new();
        let result = OverlapArgs::default().run("2\n1 5\n3\n".as_bytes(), &mut output);
        assert!(result.is_err());
        assert!(output.is_empty());
    }
}
