//! Per-file BOM check and in-place rewrite.

use std::fs::{self, File};
use std::io::{self, Read};
use std::path::Path;

use crate::core::bom::{UTF8_BOM, has_bom, strip_bom};
use crate::core::types::{FileOutcome, FixMode};

/// Check `path` for a leading BOM and, in fix mode, rewrite it without one.
///
/// Only the first three bytes are read unless a BOM is present. Errors are
/// returned as [`FileOutcome::Failed`] rather than propagated so the caller
/// can keep scanning.
pub fn fix_file(path: &Path, mode: FixMode) -> FileOutcome {
    match try_fix_file(path, mode) {
        Ok(outcome) => outcome,
        Err(err) => FileOutcome::Failed(err),
    }
}

fn try_fix_file(path: &Path, mode: FixMode) -> io::Result<FileOutcome> {
    let prefix = read_prefix(path)?;
    if !has_bom(&prefix) {
        return Ok(FileOutcome::Clean);
    }
    if mode == FixMode::Check {
        return Ok(FileOutcome::Found);
    }

    let content = fs::read(path)?;
    // The file may have changed since the prefix read.
    let Some(stripped) = strip_bom(&content) else {
        return Ok(FileOutcome::Clean);
    };
    fs::write(path, stripped)?;
    Ok(FileOutcome::Fixed)
}

/// Read up to `UTF8_BOM.len()` bytes from the start of the file.
fn read_prefix(path: &Path) -> io::Result<Vec<u8>> {
    let mut prefix = Vec::with_capacity(UTF8_BOM.len());
    File::open(path)?
        .take(UTF8_BOM.len() as u64)
        .read_to_end(&mut prefix)?;
    Ok(prefix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TestTree;

    #[test]
    fn fixes_file_with_bom() {
        let tree = TestTree::new().expect("tree");
        let path = tree.write("a.md", b"\xEF\xBB\xBFhi").expect("write");

        let outcome = fix_file(&path, FixMode::Fix);
        assert!(matches!(outcome, FileOutcome::Fixed));
        assert_eq!(fs::read(&path).expect("read"), b"hi");
    }

    #[test]
    fn leaves_file_without_bom_untouched() {
        let tree = TestTree::new().expect("tree");
        let path = tree.write("a.md", b"hello").expect("write");

        let outcome = fix_file(&path, FixMode::Fix);
        assert!(matches!(outcome, FileOutcome::Clean));
        assert_eq!(fs::read(&path).expect("read"), b"hello");
    }

    #[test]
    fn short_and_empty_files_are_clean() {
        let tree = TestTree::new().expect("tree");
        let empty = tree.write("empty.js", b"").expect("write");
        let short = tree.write("short.js", b"\xEF\xBB").expect("write");

        assert!(matches!(fix_file(&empty, FixMode::Fix), FileOutcome::Clean));
        assert!(matches!(fix_file(&short, FixMode::Fix), FileOutcome::Clean));
        assert_eq!(fs::read(&short).expect("read"), b"\xEF\xBB");
    }

    #[test]
    fn bom_only_file_becomes_empty() {
        let tree = TestTree::new().expect("tree");
        let path = tree.write("a.json", &UTF8_BOM).expect("write");

        assert!(matches!(fix_file(&path, FixMode::Fix), FileOutcome::Fixed));
        assert_eq!(fs::read(&path).expect("read"), b"");
    }

    #[test]
    fn check_mode_reports_without_writing() {
        let tree = TestTree::new().expect("tree");
        let path = tree.write("a.css", b"\xEF\xBB\xBFbody{}").expect("write");

        let outcome = fix_file(&path, FixMode::Check);
        assert!(matches!(outcome, FileOutcome::Found));
        assert_eq!(fs::read(&path).expect("read"), b"\xEF\xBB\xBFbody{}");
    }

    #[test]
    fn missing_file_is_reported_as_failed() {
        let tree = TestTree::new().expect("tree");
        let outcome = fix_file(&tree.root().join("gone.md"), FixMode::Fix);
        assert!(matches!(outcome, FileOutcome::Failed(_)));
        assert!(!outcome.had_bom());
    }
}
