//! Command dispatch logic for netscore

use super::{ScoreArgs, score_package};
use crate::{Host, Result};
use clap::Parser;
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use ohno::app_err;
use std::io::Write;

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "netscore", version, author, long_about = None)]
#[command(about = "Score the trustworthiness of a package from its manifest and lock file")]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(flatten)]
    score: ScoreArgs,
}

/// Dispatch command-line arguments to the scoring command
///
/// This function parses the command-line arguments and runs a scoring pass.
/// It's designed to be called from main.rs with the program arguments.
///
/// Usage errors are rendered to the host's error stream and the host is asked
/// to exit with clap's status code before any scoring happens.
///
/// # Arguments
///
/// * `args` - An iterator of command-line arguments (typically from `std::env::args()`)
///
/// # Errors
///
/// Returns an error if the arguments are invalid or if scoring cannot be performed
pub fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            let _ = write!(host.error(), "{}", e.render());
            host.exit(e.exit_code());
            return Err(app_err!("invalid command-line arguments"));
        }
        Err(e) => {
            // --help and --version
            let _ = write!(host.output(), "{}", e.render());
            return Ok(());
        }
    };

    score_package(host, &cli.score)
}
