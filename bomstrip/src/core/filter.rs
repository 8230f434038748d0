//! Name-based filters for traversal: extension allowlist and pruned directories.

/// Returns true if `file_name` ends with any of the allowlisted extensions.
///
/// Matching is a case-sensitive suffix check on the whole name, so `.md`
/// matches `README.md` and a file literally named `.md`, but not `README.MD`.
pub fn is_candidate<S: AsRef<str>>(file_name: &str, extensions: &[S]) -> bool {
    extensions
        .iter()
        .any(|ext| file_name.ends_with(ext.as_ref()))
}

/// Returns true if a directory with this name must not be descended into.
pub fn is_excluded_dir<S: AsRef<str>>(dir_name: &str, excluded: &[S]) -> bool {
    excluded.iter().any(|name| name.as_ref() == dir_name)
}
