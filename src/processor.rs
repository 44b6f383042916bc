//! File-level conversion: check, read, convert, write.

use crate::config::Options;
use crate::converter;
use crate::error::{Result, RetemplateError};
use crate::output_path::derive_output_path;
use crate::report::ConversionReport;
use std::fs;
use std::path::Path;

/// Convert `input` and write the result next to it.
///
/// With `options.dry_run` set, nothing is written; the report still names the
/// output path that would have been used.
///
/// # Errors
///
/// Returns `Err` if:
/// - `input` is not an existing file
/// - the output path cannot be derived from `input`
/// - the input cannot be read as UTF-8 text
/// - the output file cannot be written
pub fn process_file(input: &Path, options: &Options) -> Result<ConversionReport> {
    if !input.is_file() {
        return Err(RetemplateError::InputNotFound(input.to_path_buf()));
    }

    let output = derive_output_path(input, &options.suffix)?;

    log::info!("reading {}", input.display());
    let content = fs::read_to_string(input).map_err(|source| RetemplateError::Read {
        path: input.to_path_buf(),
        source,
    })?;

    let conversion = converter::convert_text(&content);
    log::info!(
        "rewrote {} of {} lines",
        conversion.rewritten_lines.len(),
        conversion.total_lines
    );

    if options.dry_run {
        log::info!("dry run, skipping write to {}", output.display());
    } else {
        log::info!("writing {}", output.display());
        fs::write(&output, &conversion.text).map_err(|source| RetemplateError::Write {
            path: output.clone(),
            source,
        })?;
    }

    Ok(ConversionReport {
        input: input.to_path_buf(),
        output,
        total_lines: conversion.total_lines,
        rewritten_lines: conversion.rewritten_lines,
        dry_run: options.dry_run,
    })
}
