//! CLI argument parsing using clap.
//!
//! Every flag is optional; the normal invocation takes no arguments and
//! reads the bound from standard input. Unrecognized arguments never stop
//! the run: they are reported and the defaults are used instead.

use clap::{
    Parser,
    builder::styling::{AnsiColor, Effects, Styles},
    error::ErrorKind,
};
use std::ffi::OsString;
use std::path::PathBuf;

fn clap_cargo_style() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default())
}

/// Print the sum 1+2+...+N for N read from standard input
#[derive(Parser, Debug, Default, PartialEq)]
#[command(
    name = "gauss-sum",
    version = env!("CARGO_PKG_VERSION"),
    about = "Print the sum 1+2+...+N for N read from standard input",
    long_about = "Reads one integer N from standard input and prints N*(N+1)/2.\n\
                  Missing or malformed input is treated as N = 10.",
    styles = clap_cargo_style()
)]
pub struct Cli {
    /// Path to a settings.toml file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log debug details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse `args`, recovering from usage errors with `Cli::default()`.
    ///
    /// `Ok` carries the recovered usage error, if any, so the caller can log
    /// it once logging is up. `Err` is only returned for `--help` and
    /// `--version`, which the caller prints with `clap::Error::exit`.
    pub fn parse_lenient<I, T>(args: I) -> Result<(Self, Option<clap::Error>), clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Self::try_parse_from(args) {
            Ok(cli) => Ok((cli, None)),
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                Err(e)
            }
            Err(e) => Ok((Self::default(), Some(e))),
        }
    }
}
