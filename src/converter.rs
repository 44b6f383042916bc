//! Line-level rewriting of string concatenations into template literals.
//!
//! This is a textual heuristic, not a parser: each line is scanned for
//! `' + expr + '` and every hit becomes `${expr}`. When that introduces an
//! interpolation and the line has no backticks yet, all single quotes on the
//! line are turned into backticks.

use once_cell::sync::Lazy;
use regex::Regex;

/// Static regex for `' + expr + '` with a non-greedy expression capture (compiled once)
#[allow(clippy::expect_used)]
static CONCAT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"' \+ (.*?) \+ '").expect("concatenation regex pattern is valid")
});

const INTERPOLATION_MARKER: &str = "${";
const BACKTICK: char = '`';
const SINGLE_QUOTE: char = '\'';

/// Result of converting a whole document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// Converted text, same line count and terminators as the input
    pub text: String,
    /// Number of lines in the input
    pub total_lines: usize,
    /// 1-based numbers of the lines that changed
    pub rewritten_lines: Vec<usize>,
}

/// Rewrite every `' + expr + '` on one line into `${expr}`.
///
/// Captures are collected from the original line first, then each one is
/// applied with a whole-line substring replace. An identical
/// `' + expr + '` elsewhere on the line is therefore rewritten by the same
/// call, even if the scan did not match it there.
///
/// A line without any match is returned untouched, even if it already
/// contains `${` and single quotes.
#[must_use]
pub fn convert_line(line: &str) -> String {
    let expressions: Vec<&str> = CONCAT_REGEX
        .captures_iter(line)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect();

    if expressions.is_empty() {
        return line.to_string();
    }

    let mut result = line.to_string();
    for expr in expressions {
        let concatenation = format!("' + {expr} + '");
        let interpolation = format!("${{{expr}}}");
        result = result.replace(&concatenation, &interpolation);
    }

    if result.contains(INTERPOLATION_MARKER) && !result.contains(BACKTICK) {
        result = result.replace(SINGLE_QUOTE, "`");
    }

    result
}

/// Split `content` into lines ending at `\n`, `\r\n` or a lone `\r`, each
/// line keeping its terminator. A final line without a terminator is kept too.
fn split_lines(content: &str) -> Vec<&str> {
    let bytes = content.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        let end = match bytes[i] {
            b'\n' => Some(i),
            b'\r' if bytes.get(i + 1) == Some(&b'\n') => Some(i + 1),
            b'\r' => Some(i),
            _ => None,
        };
        if let Some(end) = end {
            lines.push(&content[start..=end]);
            start = end + 1;
            i = end;
        }
        i += 1;
    }

    if start < bytes.len() {
        lines.push(&content[start..]);
    }
    lines
}

/// Convert every line of `content`, keeping line terminators as they are.
#[must_use]
pub fn convert_text(content: &str) -> Conversion {
    let mut text = String::with_capacity(content.len());
    let mut rewritten_lines = Vec::new();
    let mut total_lines = 0;

    for (index, line) in split_lines(content).into_iter().enumerate() {
        let converted = convert_line(line);
        if converted != line {
            log::debug!(
                "line {}: {} -> {}",
                index + 1,
                line.trim_end(),
                converted.trim_end()
            );
            rewritten_lines.push(index + 1);
        }
        text.push_str(&converted);
        total_lines += 1;
    }

    Conversion {
        text,
        total_lines,
        rewritten_lines,
    }
}
