//! Exception-list filtering.

use std::collections::HashSet;

/// Returns true if the first path segment is on the exception list.
///
/// Excepted payloads bypass dispatch entirely: the routing phase never runs
/// for them. Matching is exact string membership, nothing fuzzy.
pub fn is_excepted(first_segment: &str, exceptions: &HashSet<String>) -> bool {
    exceptions.contains(first_segment)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> HashSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_member_is_excepted() {
        assert!(is_excepted("skip", &set(&["skip", "other"])));
    }

    #[test]
    fn test_non_member_passes() {
        assert!(!is_excepted("debug", &set(&["skip"])));
    }

    #[test]
    fn test_match_is_exact() {
        assert!(!is_excepted("Skip", &set(&["skip"])));
        assert!(!is_excepted("skip/", &set(&["skip"])));
    }

    #[test]
    fn test_empty_set_never_matches() {
        assert!(!is_excepted("anything", &HashSet::new()));
    }
}
