//! Payload dispatch.
//!
//! Dispatch walks the payload's path segments left to right, narrowing a
//! candidate set initialized to the whole registry: at position `i`, only
//! entries whose path is longer than `i` and whose tag at `i` equals the
//! segment survive. Narrowing is monotone; entries are never added back.
//! Every survivor is then invoked with the (coerced) parameter its
//! capability declares.

use tracing::{debug, trace};

use hookline_core::{ParsedPayload, coerce};

use crate::registry::Registry;
use crate::target::HookCapability;

/// Outcome counters for one dispatch.
///
/// Purely informational; a dispatch that matches nothing is a no-op, not an
/// error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchReport {
    /// Entries surviving path narrowing.
    pub matched: usize,
    /// Targets actually invoked (setter called or method invoked).
    pub invoked: usize,
    /// Field/property targets skipped because no parameter was supplied.
    pub skipped_missing_param: usize,
}

/// Matches the payload path against the registry and invokes every survivor.
///
/// An empty path matches nothing. Survivors are invoked in registry
/// insertion order:
///
/// - field/property with no supplied parameter: skipped, others proceed
/// - field/property with a parameter: coerced to the declared kind and
///   assigned; an uncoercible value makes the assignment a no-op
/// - zero-argument method: invoked, any parameter ignored
/// - single-argument method: invoked with the coerced parameter (absent or
///   uncoercible values reach the bound closure as `None`)
pub fn dispatch(parsed: &ParsedPayload, registry: &Registry) -> DispatchReport {
    let mut report = DispatchReport::default();
    if parsed.path.is_empty() {
        debug!("no routable segments, nothing to dispatch");
        return report;
    }

    let mut candidates = registry.snapshot();
    for (i, segment) in parsed.path.iter().enumerate() {
        candidates.retain(|entry| entry.path.get(i) == Some(segment));
        trace!(segment = %segment, remaining = candidates.len(), "narrowed candidate set");
    }

    report.matched = candidates.len();
    if candidates.is_empty() {
        debug!(path = %parsed.path.join("/"), "no matching hook target");
        return report;
    }

    for entry in &candidates {
        trace!(
            owner = %entry.owner,
            member = %entry.member,
            kind = entry.capability.kind_name(),
            "Invoking hook target"
        );

        match &entry.capability {
            HookCapability::Field { kind, set } | HookCapability::Property { kind, set } => {
                let Some(raw) = parsed.param.as_deref() else {
                    debug!(
                        owner = %entry.owner,
                        member = %entry.member,
                        "target requires a parameter but none was supplied, skipping"
                    );
                    report.skipped_missing_param += 1;
                    continue;
                };
                if let Some(value) = coerce(*kind, raw) {
                    set(value);
                    report.invoked += 1;
                }
            }
            HookCapability::Method { kind: None, invoke } => {
                invoke(None);
                report.invoked += 1;
            }
            HookCapability::Method {
                kind: Some(kind),
                invoke,
            } => {
                invoke(parsed.param.as_deref().and_then(|raw| coerce(*kind, raw)));
                report.invoked += 1;
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::HookRegistration;
    use parking_lot::Mutex;
    use std::sync::Arc;

    fn parsed(path: &[&str], param: Option<&str>) -> ParsedPayload {
        ParsedPayload {
            path: path.iter().map(|s| s.to_string()).collect(),
            param: param.map(str::to_owned),
        }
    }

    #[test]
    fn test_narrowing_selects_exact_path() {
        let registry = Registry::new();
        let hits = Arc::new(Mutex::new(Vec::new()));

        for (member, path) in [
            ("t1", vec!["a", "b"]),
            ("t2", vec!["a", "c"]),
            ("t3", vec!["a"]),
        ] {
            let hits = Arc::clone(&hits);
            let path: Vec<&str> = path.clone();
            registry.register(HookRegistration::new("test").method0(member, &path, move || {
                hits.lock().push(member);
            }));
        }

        let report = dispatch(&parsed(&["a", "b"], None), &registry);
        assert_eq!(report.matched, 1);
        assert_eq!(report.invoked, 1);
        assert_eq!(*hits.lock(), vec!["t1"]);
    }

    #[test]
    fn test_prefix_dispatch_fans_out() {
        let registry = Registry::new();
        let hits = Arc::new(Mutex::new(0));

        for member in ["t1", "t2"] {
            let hits = Arc::clone(&hits);
            registry.register(
                HookRegistration::new(member).method0("m", &["a", member], move || {
                    *hits.lock() += 1;
                }),
            );
        }

        // A single segment keeps every entry whose path starts with it.
        let report = dispatch(&parsed(&["a"], None), &registry);
        assert_eq!(report.matched, 2);
        assert_eq!(*hits.lock(), 2);
    }

    #[test]
    fn test_empty_path_matches_nothing() {
        let registry = Registry::new();
        registry.register(HookRegistration::new("test").method0("m", &["a"], || {}));

        let report = dispatch(&parsed(&[], Some("5")), &registry);
        assert_eq!(report, DispatchReport::default());
    }

    #[test]
    fn test_no_match_is_noop() {
        let registry = Registry::new();
        registry.register(HookRegistration::new("test").method0("m", &["a"], || {}));

        let report = dispatch(&parsed(&["z"], None), &registry);
        assert_eq!(report.matched, 0);
        assert_eq!(report.invoked, 0);
    }

    #[test]
    fn test_field_set_with_coerced_param() {
        let registry = Registry::new();
        let value = Arc::new(Mutex::new(0));

        let sink = Arc::clone(&value);
        registry.register(
            HookRegistration::new("test").field::<i32>("volume", &["debug", "settings"], move |v| {
                *sink.lock() = v;
            }),
        );

        let report = dispatch(&parsed(&["debug", "settings"], Some("42")), &registry);
        assert_eq!(report.invoked, 1);
        assert_eq!(*value.lock(), 42);
    }

    #[test]
    fn test_field_without_param_is_skipped_others_proceed() {
        let registry = Registry::new();
        let method_ran = Arc::new(Mutex::new(false));

        registry.register(HookRegistration::new("test").field::<i32>("f", &["a"], |_| {
            panic!("field must not be set without a parameter");
        }));
        let flag = Arc::clone(&method_ran);
        registry.register(HookRegistration::new("other").method0("m", &["a"], move || {
            *flag.lock() = true;
        }));

        let report = dispatch(&parsed(&["a"], None), &registry);
        assert_eq!(report.matched, 2);
        assert_eq!(report.skipped_missing_param, 1);
        assert_eq!(report.invoked, 1);
        assert!(*method_ran.lock());
    }

    #[test]
    fn test_uncoercible_param_is_noop_assignment() {
        let registry = Registry::new();
        registry.register(HookRegistration::new("test").field::<i32>("f", &["a"], |_| {
            panic!("assignment must not happen for an uncoercible value");
        }));

        let report = dispatch(&parsed(&["a"], Some("not-a-number")), &registry);
        assert_eq!(report.matched, 1);
        assert_eq!(report.invoked, 0);
    }

    #[test]
    fn test_method1_receives_param() {
        let registry = Registry::new();
        let value = Arc::new(Mutex::new(String::new()));

        let sink = Arc::clone(&value);
        registry.register(
            HookRegistration::new("test").method1::<String>("m", &["a"], move |s| {
                *sink.lock() = s;
            }),
        );

        dispatch(&parsed(&["a"], Some("hello")), &registry);
        assert_eq!(*value.lock(), "hello");
    }

    #[test]
    fn test_method0_ignores_param() {
        let registry = Registry::new();
        let hits = Arc::new(Mutex::new(0));

        let counter = Arc::clone(&hits);
        registry.register(HookRegistration::new("test").method0("m", &["a"], move || {
            *counter.lock() += 1;
        }));

        let report = dispatch(&parsed(&["a"], Some("ignored")), &registry);
        assert_eq!(report.invoked, 1);
        assert_eq!(*hits.lock(), 1);
    }
}
