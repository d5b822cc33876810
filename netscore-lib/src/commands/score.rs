use super::common::{ColorMode, LogLevel, ReportFormat, init_logging};
use super::config::Config;
use super::Host;
use crate::Result;
use crate::documents::load_documents;
use crate::metrics::calculate;
use crate::reports::{generate_console, generate_json};
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use ohno::IntoAppError;
use std::io::Write;

/// Arguments for a scoring run
#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Path to the package manifest (e.g. `package.json`)
    #[arg(value_name = "MANIFEST")]
    pub manifest: Utf8PathBuf,

    /// Path to the dependency lock file (e.g. `package-lock.json`)
    #[arg(value_name = "LOCK")]
    pub lock: Utf8PathBuf,

    /// Path to configuration file (default is `netscore.toml`)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    /// Report format written to standard output
    #[arg(long, value_name = "FORMAT", default_value = "json")]
    pub format: ReportFormat,

    /// Control when to use colored output
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: ColorMode,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none")]
    pub log_level: LogLevel,
}

/// Score a package from its manifest and lock file and write the report to the host
///
/// Metric failures are reported in-band and never make this function fail.
///
/// # Errors
///
/// Returns an error if the configuration or either document cannot be loaded,
/// or if the report cannot be written
pub fn score_package<H: Host>(host: &mut H, args: &ScoreArgs) -> Result<()> {
    init_logging(args.log_level);

    let config = Config::load(Utf8Path::new("."), args.config.as_ref())?;
    let policy = config.scoring_policy();

    let (manifest, lock) = load_documents(&args.manifest, &args.lock)?;
    let report = calculate(&manifest, &lock, &policy);

    let mut output = String::new();
    match args.format {
        ReportFormat::Json => generate_json(&report, &mut output)?,
        ReportFormat::Console => generate_console(&report, args.color.use_colors(), &mut output)?,
    }

    host.output()
        .write_all(output.as_bytes())
        .into_app_err("writing the scoring report")?;

    Ok(())
}
