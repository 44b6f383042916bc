//! # retemplate
//!
//! Rewrites single-quoted string concatenations such as `'a' + x + 'b'` into
//! template literals such as `` `a${x}b` ``, one line at a time.

pub mod cli;
pub mod config;
pub mod converter;
pub mod error;
pub mod output_path;
pub mod processor;
pub mod report;

/// Print an error message and exit with code 1.
pub fn fatal_error(message: &str) -> ! {
    eprintln!("{message}");
    std::process::exit(1);
}
