//! Output file naming: `dir/name.ext` becomes `dir/name<suffix>.ext`.

use crate::error::{Result, RetemplateError};
use std::path::{Path, PathBuf};

/// Derive the output path for `input` by inserting `suffix` before the extension.
///
/// The result lives in the same directory as the input. Only the last dot
/// counts as the extension separator, and leading dots never do:
/// - `parser.ts` → `parser-NEW.ts`
/// - `a.tar.gz` → `a.tar-NEW.gz`
/// - `.bashrc` → `.bashrc-NEW`
/// - `..foo` → `..foo-NEW`
///
/// # Errors
///
/// Returns `InvalidInputPath` if `input` has no file name (e.g. `..` or `/`)
/// or the file name is not valid UTF-8.
pub fn derive_output_path(input: &Path, suffix: &str) -> Result<PathBuf> {
    let file_name = input
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| RetemplateError::InvalidInputPath(input.to_path_buf()))?;

    let (stem, extension) = split_extension(file_name);
    Ok(input.with_file_name(format!("{stem}{suffix}{extension}")))
}

/// Split a file name into stem and extension, the extension keeping its dot.
///
/// The split happens at the last dot, unless everything before it is dots.
fn split_extension(file_name: &str) -> (&str, &str) {
    let Some(dot) = file_name.rfind('.') else {
        return (file_name, "");
    };

    if file_name[..dot].chars().all(|c| c == '.') {
        (file_name, "")
    } else {
        file_name.split_at(dot)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_suffix_inserted_before_extension() {
        let out = derive_output_path(
            Path::new("server/src/parser/spin2.documentSemanticParser.ts"),
            "-NEW",
        )
        .unwrap();
        assert_eq!(
            out,
            PathBuf::from("server/src/parser/spin2.documentSemanticParser-NEW.ts")
        );
    }

    #[test]
    fn test_only_last_extension_is_split() {
        let out = derive_output_path(Path::new("a.tar.gz"), "-NEW").unwrap();
        assert_eq!(out, PathBuf::from("a.tar-NEW.gz"));
    }

    #[test]
    fn test_no_extension() {
        let out = derive_output_path(Path::new("dir/Makefile"), "-NEW").unwrap();
        assert_eq!(out, PathBuf::from("dir/Makefile-NEW"));
    }

    #[test]
    fn test_leading_dot_is_not_an_extension() {
        let out = derive_output_path(Path::new(".bashrc"), "-NEW").unwrap();
        assert_eq!(out, PathBuf::from(".bashrc-NEW"));
    }

    #[test]
    fn test_leading_dots_before_name_are_not_an_extension() {
        let out = derive_output_path(Path::new("..foo"), "-NEW").unwrap();
        assert_eq!(out, PathBuf::from("..foo-NEW"));
    }

    #[test]
    fn test_all_dots_name_has_no_extension() {
        let out = derive_output_path(Path::new("dir/..."), "-NEW").unwrap();
        assert_eq!(out, PathBuf::from("dir/...-NEW"));
    }

    #[test]
    fn test_dotfile_with_extension() {
        let out = derive_output_path(Path::new(".x.y"), "-NEW").unwrap();
        assert_eq!(out, PathBuf::from(".x-NEW.y"));
    }

    #[test]
    fn test_trailing_dot_kept_as_extension() {
        let out = derive_output_path(Path::new("foo."), "-NEW").unwrap();
        assert_eq!(out, PathBuf::from("foo-NEW."));
    }

    #[test]
    fn test_custom_suffix() {
        let out = derive_output_path(Path::new("sample.ts"), ".converted").unwrap();
        assert_eq!(out, PathBuf::from("sample.converted.ts"));
    }

    #[test]
    fn test_path_without_file_name_rejected() {
        let err = derive_output_path(Path::new(".."), "-NEW").unwrap_err();
        assert!(matches!(err, RetemplateError::InvalidInputPath(_)));
    }
}
