//! CLI module containing the main entry point logic.

use crate::config::{self, Options, ReportFormat};
use crate::error::Result;
use crate::processor;
use clap::Parser as ClapParser;
use std::path::PathBuf;

const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// CLI arguments for the retemplate tool.
#[derive(ClapParser, Debug)]
#[command(name = "retemplate")]
#[command(version = PKG_VERSION)]
#[command(
    about = "Rewrite 'a' + expr + 'b' string concatenations into `a${expr}b` template literals",
    long_about = None
)]
struct Cli {
    /// Source file to convert; output is written next to it
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Suffix inserted before the output file's extension [env: RETEMPLATE_SUFFIX] [default: -NEW]
    #[arg(long, value_name = "SUFFIX", allow_hyphen_values = true)]
    suffix: Option<String>,

    /// Convert and report without writing the output file
    #[arg(long)]
    dry_run: bool,

    /// Report format (text, json)
    #[arg(long, value_name = "FORMAT", default_value = "text")]
    format: ReportFormat,
}

impl Cli {
    fn options(&self) -> Result<Options> {
        Ok(Options {
            suffix: config::resolve_suffix(self.suffix.as_deref())?,
            dry_run: self.dry_run,
            format: self.format,
        })
    }
}

/// Run one conversion and return the rendered report.
fn run(cli: &Cli) -> Result<String> {
    let options = cli.options()?;
    let report = processor::process_file(&cli.input, &options)?;
    report.render(options.format)
}

/// Main CLI logic: parse arguments, convert, print the report.
///
/// Missing arguments are reported by clap with a usage message. Any other
/// failure is printed to stderr and exits with code 1.
pub fn run_cli() {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(rendered) => println!("{rendered}"),
        Err(err) => crate::fatal_error(&err.to_string()),
    }
}
