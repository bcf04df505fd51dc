//! Virtual path helpers

/// Separator placed between owner and repository in trending entry names,
/// since node names never contain `/`.
pub const TRENDING_NAME_SEPARATOR: char = ':';

/// Split a relative path into its first segment and the remainder after the
/// separator, if any.
///
/// `"a/b/c"` gives `("a", Some("b/c"))`, `"a/"` gives `("a", Some(""))`.
pub fn split_first_segment(path: &str) -> (&str, Option<&str>) {
    match path.split_once('/') {
        Some((segment, rest)) => (segment, Some(rest)),
        None => (path, None),
    }
}

/// Join a canonical absolute path and a child name.
pub fn join(base: &str, name: &str) -> String {
    if base.ends_with('/') {
        format!("{}{}", base, name)
    } else {
        format!("{}/{}", base, name)
    }
}

/// Whether `name` can label a node: non-empty, no `/`, not `.` or `..`.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && !name.contains('/') && name != "." && name != ".."
}

/// Node name for a trending repository, e.g. `rust-lang:rust`.
pub fn trending_entry_name(owner: &str, repo: &str) -> String {
    format!("{}{}{}", owner, TRENDING_NAME_SEPARATOR, repo)
}
