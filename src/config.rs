//! Run configuration: output suffix resolution and run options.

use crate::error::{Result, RetemplateError};

/// Suffix inserted before the extension when none is configured.
pub const DEFAULT_SUFFIX: &str = "-NEW";

/// Environment variable overriding the default suffix.
pub const SUFFIX_ENV_VAR: &str = "RETEMPLATE_SUFFIX";

/// Report format printed after a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    /// Human-readable progress lines (default)
    #[default]
    Text,
    /// Pretty-printed JSON object
    Json,
}

/// Options for a single conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub suffix: String,
    pub dry_run: bool,
    pub format: ReportFormat,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            suffix: DEFAULT_SUFFIX.to_string(),
            dry_run: false,
            format: ReportFormat::default(),
        }
    }
}

/// Resolve the output suffix: CLI flag, then `RETEMPLATE_SUFFIX`, then `-NEW`.
///
/// # Errors
///
/// Returns `InvalidSuffix` if the chosen suffix is empty or contains a path separator.
pub fn resolve_suffix(cli_suffix: Option<&str>) -> Result<String> {
    let env_suffix = std::env::var(SUFFIX_ENV_VAR).ok();
    resolve_suffix_from(cli_suffix, env_suffix.as_deref())
}

fn resolve_suffix_from(cli_suffix: Option<&str>, env_suffix: Option<&str>) -> Result<String> {
    let suffix = cli_suffix.or(env_suffix).unwrap_or(DEFAULT_SUFFIX);
    validate_suffix(suffix)?;
    Ok(suffix.to_string())
}

/// An empty suffix would overwrite the input; separators would leave its directory.
fn validate_suffix(suffix: &str) -> Result<()> {
    if suffix.is_empty() || suffix.contains(['/', '\\']) {
        return Err(RetemplateError::InvalidSuffix(suffix.to_string()));
    }
    Ok(())
}
