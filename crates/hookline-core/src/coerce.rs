//! Parameter type coercion.
//!
//! Hook targets declare the primitive kind they expect; the single textual
//! parameter extracted from the payload is coerced to that kind right before
//! invocation. Exactly four kinds are convertible. Anything else — including
//! a value that fails to parse — coerces to an absent value, which downstream
//! turns into a no-op assignment or a defaulted argument rather than an error.

use tracing::debug;

/// The parameter kind a hook target declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// Boolean, parsed case-insensitively from `true`/`false`.
    Bool,
    /// 32-bit signed integer.
    Int,
    /// Single-precision float.
    Float,
    /// Verbatim string.
    Str,
    /// Any type outside the supported set. Never coercible.
    Opaque,
}

/// A coerced parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum HookValue {
    Bool(bool),
    Int(i32),
    Float(f32),
    Str(String),
}

/// Coerces a raw parameter value to the target's declared kind.
///
/// Returns `None` for [`ParamKind::Opaque`] and for values that do not parse
/// as the requested kind.
pub fn coerce(kind: ParamKind, raw: &str) -> Option<HookValue> {
    let value = match kind {
        ParamKind::Bool => match raw.to_ascii_lowercase().as_str() {
            "true" => Some(HookValue::Bool(true)),
            "false" => Some(HookValue::Bool(false)),
            _ => None,
        },
        ParamKind::Int => raw.parse::<i32>().ok().map(HookValue::Int),
        ParamKind::Float => raw.parse::<f32>().ok().map(HookValue::Float),
        ParamKind::Str => Some(HookValue::Str(raw.to_owned())),
        ParamKind::Opaque => None,
    };

    if value.is_none() {
        debug!(?kind, raw, "parameter not coercible, treating as absent");
    }

    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_int() {
        assert_eq!(coerce(ParamKind::Int, "5"), Some(HookValue::Int(5)));
        assert_eq!(coerce(ParamKind::Int, "-42"), Some(HookValue::Int(-42)));
    }

    #[test]
    fn test_coerce_bool() {
        assert_eq!(coerce(ParamKind::Bool, "true"), Some(HookValue::Bool(true)));
        assert_eq!(coerce(ParamKind::Bool, "True"), Some(HookValue::Bool(true)));
        assert_eq!(
            coerce(ParamKind::Bool, "false"),
            Some(HookValue::Bool(false))
        );
    }

    #[test]
    fn test_coerce_float() {
        assert_eq!(
            coerce(ParamKind::Float, "2.5"),
            Some(HookValue::Float(2.5))
        );
    }

    #[test]
    fn test_coerce_str_is_verbatim() {
        assert_eq!(
            coerce(ParamKind::Str, "hello world"),
            Some(HookValue::Str("hello world".to_owned()))
        );
    }

    #[test]
    fn test_opaque_never_coerces() {
        assert_eq!(coerce(ParamKind::Opaque, "5"), None);
    }

    #[test]
    fn test_unparseable_is_absent() {
        assert_eq!(coerce(ParamKind::Int, "abc"), None);
        assert_eq!(coerce(ParamKind::Bool, "yes"), None);
        assert_eq!(coerce(ParamKind::Float, "1.2.3"), None);
    }
}
