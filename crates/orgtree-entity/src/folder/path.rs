//! Materialized path helpers.
//!
//! A path is a `.`-joined list of folder names from an organization-local
//! root down to the folder itself. All ancestry checks treat the separator as
//! a hard segment boundary: `alphabet` is never under `alpha`.

/// Separator between path segments.
pub const PATH_SEPARATOR: char = '.';

/// Iterate over the segments of `path`.
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split(PATH_SEPARATOR)
}

/// The final segment of `path` (the whole path for a root).
pub fn last_segment(path: &str) -> &str {
    path.rsplit_once(PATH_SEPARATOR)
        .map_or(path, |(_, last)| last)
}

/// The path of the parent, or `None` for a root.
pub fn parent_path(path: &str) -> Option<&str> {
    path.rsplit_once(PATH_SEPARATOR).map(|(parent, _)| parent)
}

/// Number of separators in `path`; roots have depth 0.
pub fn depth(path: &str) -> usize {
    path.matches(PATH_SEPARATOR).count()
}

/// Append `name` to `parent`.
pub fn join(parent: &str, name: &str) -> String {
    let mut joined = String::with_capacity(parent.len() + 1 + name.len());
    joined.push_str(parent);
    joined.push(PATH_SEPARATOR);
    joined.push_str(name);
    joined
}

/// Whether `path` lies strictly below `root`.
pub fn is_descendant(path: &str, root: &str) -> bool {
    path.strip_prefix(root)
        .and_then(|rest| rest.strip_prefix(PATH_SEPARATOR))
        .is_some_and(|rest| !rest.is_empty())
}

/// Whether `path` is `root` itself or lies below it.
pub fn is_within(path: &str, root: &str) -> bool {
    path == root || is_descendant(path, root)
}

/// Replace the leading `old_prefix` of `path` with `new_prefix`.
///
/// Returns `None` when `path` is not within `old_prefix`; only a whole
/// segment prefix is ever replaced, never an inner substring.
pub fn rebase(path: &str, old_prefix: &str, new_prefix: &str) -> Option<String> {
    if !is_within(path, old_prefix) {
        return None;
    }
    let rest = &path[old_prefix.len()..];
    let mut rebased = String::with_capacity(new_prefix.len() + rest.len());
    rebased.push_str(new_prefix);
    rebased.push_str(rest);
    Some(rebased)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_segment_and_parent() {
        assert_eq!(last_segment("alpha.bravo.charlie"), "charlie");
        assert_eq!(last_segment("alpha"), "alpha");
        assert_eq!(parent_path("alpha.bravo.charlie"), Some("alpha.bravo"));
        assert_eq!(parent_path("alpha"), None);
        assert_eq!(depth("alpha"), 0);
        assert_eq!(depth("alpha.bravo.charlie"), 2);
    }

    #[test]
    fn test_segments() {
        let parts: Vec<&str> = segments("alpha.bravo.charlie").collect();
        assert_eq!(parts, vec!["alpha", "bravo", "charlie"]);
    }

    #[test]
    fn test_descendant_respects_segment_boundary() {
        assert!(is_descendant("alpha.bravo", "alpha"));
        assert!(is_descendant("alpha.bravo.charlie", "alpha"));
        assert!(!is_descendant("alpha", "alpha"));
        assert!(!is_descendant("alphabet", "alpha"));
        assert!(!is_descendant("alphabet.soup", "alpha"));
        assert!(!is_descendant("golf.alpha.bravo", "alpha"));
        assert!(!is_descendant("alpha.", "alpha"));
    }

    #[test]
    fn test_is_within_includes_root() {
        assert!(is_within("alpha", "alpha"));
        assert!(is_within("alpha.bravo", "alpha"));
        assert!(!is_within("alphabet", "alpha"));
    }

    #[test]
    fn test_rebase() {
        assert_eq!(
            rebase("alpha.bravo.charlie", "alpha.bravo", "alpha.delta.bravo").as_deref(),
            Some("alpha.delta.bravo.charlie")
        );
        assert_eq!(
            rebase("alpha.bravo", "alpha.bravo", "alpha.delta.bravo").as_deref(),
            Some("alpha.delta.bravo")
        );
        assert_eq!(rebase("alpha.bravox", "alpha.bravo", "x.bravo"), None);
        assert_eq!(rebase("golf.alpha.bravo", "alpha.bravo", "x.bravo"), None);
    }
}
