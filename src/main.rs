//! # retemplate
//!
//! Convert string concatenations in a source file into template literals.
//!
//! ## Usage
//!
//! - Convert a file: `retemplate server/src/parser.ts` (writes `server/src/parser-NEW.ts`)
//! - Pick another suffix: `retemplate --suffix .tpl parser.ts`
//! - Preview only: `retemplate --dry-run --format json parser.ts`
//!
//! Set `RUST_LOG=debug` to see every rewritten line.

/// Entry point for the CLI tool.
fn main() {
    env_logger::init();
    retemplate::cli::run_cli();
}
