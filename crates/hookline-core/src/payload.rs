//! Payload tokenization.
//!
//! A raw scheme payload is an ordered run of `/`-separated segments:
//!
//! ```text
//! [key=<secret>/]<tag1>/<tag2>/.../[param=<value>/]
//! ```
//!
//! [`tokenize`] turns the raw string into path segments, and
//! [`ParsedPayload`] lifts the out-of-band `param=` token out of the
//! positional path so that route matching never sees it.

/// Scheme suffix hosts match against before handing a payload to the pipeline.
///
/// Everything after this prefix is the payload. Stripping it is the host's
/// job; the pipeline only ever sees the payload portion.
pub const SCHEME_SUFFIX: &str = "hook/";

/// Reserved prefix marking the security-key token.
pub const KEY_PREFIX: &str = "key=";

/// Reserved prefix marking the parameter token.
pub const PARAM_PREFIX: &str = "param=";

/// Splits a raw payload into ordered, non-empty segments.
///
/// Splitting happens on `/` and empty segments are discarded, so repeated or
/// trailing delimiters are harmless: `a//b/` and `a/b` tokenize identically.
/// No further validation is applied to segment content.
pub fn tokenize(raw: &str) -> Vec<String> {
    raw.split('/')
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

/// A payload after parameter extraction.
///
/// The `param=` token may appear anywhere in the token stream. It is removed
/// from the positional path, so a parameter in the middle of a payload does
/// not consume a path position during matching. If several parameter tokens
/// are present, the last one wins; only a single parameter value is ever
/// carried through to dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPayload {
    /// Positional path segments, in input order, with parameter tokens removed.
    pub path: Vec<String>,
    /// The extracted parameter value, if any token carried [`PARAM_PREFIX`].
    pub param: Option<String>,
}

impl ParsedPayload {
    /// Separates parameter tokens from the positional path.
    pub fn parse(tokens: Vec<String>) -> Self {
        let mut path = Vec::with_capacity(tokens.len());
        let mut param = None;

        for token in tokens {
            match token.strip_prefix(PARAM_PREFIX) {
                Some(value) => param = Some(value.to_owned()),
                None => path.push(token),
            }
        }

        Self { path, param }
    }

    /// Returns true if the payload has no positional segments.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_simple() {
        assert_eq!(tokenize("debug/settings/testing"), vec![
            "debug", "settings", "testing"
        ]);
    }

    #[test]
    fn test_tokenize_collapses_empty_segments() {
        assert_eq!(tokenize("a//b/"), tokenize("a/b"));
        assert_eq!(tokenize("a//b/"), vec!["a", "b"]);
    }

    #[test]
    fn test_tokenize_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("///").is_empty());
    }

    #[test]
    fn test_param_extraction_mid_path() {
        let parsed = ParsedPayload::parse(tokenize("a/param=5/b"));
        assert_eq!(parsed.path, vec!["a", "b"]);
        assert_eq!(parsed.param.as_deref(), Some("5"));
    }

    #[test]
    fn test_param_extraction_position_independent() {
        let front = ParsedPayload::parse(tokenize("param=5/a/b"));
        let middle = ParsedPayload::parse(tokenize("a/param=5/b"));
        assert_eq!(front, middle);
    }

    #[test]
    fn test_last_param_wins() {
        let parsed = ParsedPayload::parse(tokenize("a/param=1/b/param=2"));
        assert_eq!(parsed.path, vec!["a", "b"]);
        assert_eq!(parsed.param.as_deref(), Some("2"));
    }

    #[test]
    fn test_no_param() {
        let parsed = ParsedPayload::parse(tokenize("a/b"));
        assert_eq!(parsed.param, None);
        assert_eq!(parsed.path, vec!["a", "b"]);
    }

    #[test]
    fn test_empty_param_value() {
        let parsed = ParsedPayload::parse(tokenize("a/param="));
        assert_eq!(parsed.param.as_deref(), Some(""));
    }
}
