//! Closed-form sum of 1 through N.
//!
//! The binary reads N from standard input (defaulting to 10 on anything it
//! cannot parse), computes N·(N+1)/2 and prints it on one line. The pieces are
//! exposed here so they can be driven over any reader and writer.

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod output;
pub mod series;

pub use config::{LoggingConfig, Settings};
pub use error::{InputError, SumError, SumResult};
pub use input::{DEFAULT_N, parse_n, read_n};
pub use output::write_result;
pub use series::{checked_sum_to_n, sum_to_n};

use std::io::{Read, Write};

/// Read a bound from `input`, write its sum to `output`, return the sum.
///
/// Input problems never fail the run; only the write can.
pub fn run<R: Read, W: Write>(input: R, output: W) -> SumResult<i64> {
    let n = read_n(input);
    let sum = sum_to_n(n);
    tracing::debug!(n, sum, "computed");
    write_result(output, sum)?;
    Ok(sum)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor};

    fn run_to_string(input: &str) -> String {
        let mut out = Vec::new();
        run(Cursor::new(input.to_string()), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_run_with_bound() {
        assert_eq!(run_to_string("5\n"), "15\n");
        assert_eq!(run_to_string("100"), "5050\n");
    }

    #[test]
    fn test_run_falls_back_to_default() {
        assert_eq!(run_to_string(""), "55\n");
        assert_eq!(run_to_string("abc"), "55\n");
    }

    #[test]
    fn test_run_returns_sum() {
        let mut out = Vec::new();
        assert_eq!(run(Cursor::new("4"), &mut out).unwrap(), 10);
    }

    #[test]
    fn test_run_is_repeatable() {
        assert_eq!(run_to_string("37\n"), run_to_string("37\n"));
    }

    #[test]
    fn test_run_reports_write_failure() {
        let result = run(Cursor::new("5"), ClosedPipe);
        assert!(matches!(result, Err(SumError::Io(_))));
    }
}
