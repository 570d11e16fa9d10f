//! Hook registry.
//!
//! The registry maps hook paths to bound capabilities. Hookable collaborators
//! push a [`HookRegistration`] at construction time; the pipeline reads a
//! snapshot of the entry list on every dispatch. There is exactly one
//! explicitly constructed registry per process, passed to the interceptor
//! rather than reached through ambient statics.
//!
//! # Registration semantics
//!
//! - Adding the same (owner, member) pair twice is a silent no-op, so
//!   re-registering a whole owner is safe.
//! - Two different owners *may* register the identical path. That is intended
//!   fan-out: a matching payload invokes both, in insertion order. Insertion
//!   order is not guaranteed stable across registrations from different
//!   owners.
//! - [`Registry::unregister`] removes every entry an owner contributed. An
//!   owner whose bound closures capture shared state must unregister before
//!   tearing that state down.

use std::collections::HashSet;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, trace};

use crate::target::{HookCapability, HookParam};

/// One hookable member: a path and the capability bound to it.
#[derive(Debug, Clone)]
pub struct HookDecl {
    /// Name of the member, unique within its owner.
    pub member: String,
    /// Ordered tags identifying the routing destination.
    pub path: Vec<String>,
    /// The bound capability.
    pub capability: HookCapability,
}

/// The registration table a hookable collaborator submits at construction.
///
/// # Example
///
/// ```rust,ignore
/// registry.register(
///     HookRegistration::new("debug-tools")
///         .method0("run_tests", &["debug", "settings", "testing"], || run_tests())
///         .field::<i32>("volume", &["audio", "volume"], move |v| state.lock().volume = v),
/// );
/// ```
#[derive(Debug)]
pub struct HookRegistration {
    owner: String,
    hooks: Vec<HookDecl>,
}

impl HookRegistration {
    /// Starts a registration for the named owner.
    pub fn new(owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            hooks: Vec::new(),
        }
    }

    /// Adds a pre-built declaration.
    pub fn hook(mut self, decl: HookDecl) -> Self {
        self.hooks.push(decl);
        self
    }

    /// Adds a settable field member.
    pub fn field<T: HookParam>(
        self,
        member: &str,
        path: &[&str],
        set: impl Fn(T) + Send + Sync + 'static,
    ) -> Self {
        self.push(member, path, HookCapability::field(set))
    }

    /// Adds a settable property member.
    pub fn property<T: HookParam>(
        self,
        member: &str,
        path: &[&str],
        set: impl Fn(T) + Send + Sync + 'static,
    ) -> Self {
        self.push(member, path, HookCapability::property(set))
    }

    /// Adds a zero-argument method member.
    pub fn method0(
        self,
        member: &str,
        path: &[&str],
        invoke: impl Fn() + Send + Sync + 'static,
    ) -> Self {
        self.push(member, path, HookCapability::method0(invoke))
    }

    /// Adds a single-argument method member.
    pub fn method1<T: HookParam>(
        self,
        member: &str,
        path: &[&str],
        invoke: impl Fn(T) + Send + Sync + 'static,
    ) -> Self {
        self.push(member, path, HookCapability::method1(invoke))
    }

    fn push(mut self, member: &str, path: &[&str], capability: HookCapability) -> Self {
        self.hooks.push(HookDecl {
            member: member.to_owned(),
            path: path.iter().map(|s| s.to_string()).collect(),
            capability,
        });
        self
    }

    /// The owner this registration belongs to.
    pub fn owner(&self) -> &str {
        &self.owner
    }
}

/// A registered (path, capability) pair with its provenance.
#[derive(Debug)]
pub struct RegistryEntry {
    /// Owner that contributed this entry.
    pub owner: String,
    /// Member name within the owner.
    pub member: String,
    /// Hook path, immutable once registered.
    pub path: Vec<String>,
    /// The bound capability.
    pub capability: HookCapability,
}

#[derive(Default)]
struct RegistryInner {
    /// Entries in insertion order; dispatch iterates this directly.
    entries: Vec<Arc<RegistryEntry>>,
    /// (owner, member) pairs already recorded.
    seen: HashSet<(String, String)>,
}

/// The process-wide hook registry.
///
/// Registrations are rare writes, dispatches are read-only snapshots, so a
/// read-mostly lock keeps the two safely apart when the host is threaded
/// while costing nothing on the single-threaded polling path.
#[derive(Default)]
pub struct Registry {
    inner: RwLock<RegistryInner>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records every member of the registration not already present.
    ///
    /// Idempotent per (owner, member) pair. Returns the number of entries
    /// actually added.
    pub fn register(&self, registration: HookRegistration) -> usize {
        let mut inner = self.inner.write();
        let owner = registration.owner;
        let mut added = 0;

        for decl in registration.hooks {
            let key = (owner.clone(), decl.member.clone());
            if inner.seen.contains(&key) {
                trace!(owner = %owner, member = %decl.member, "hook already registered, ignoring");
                continue;
            }

            debug!(
                owner = %owner,
                member = %decl.member,
                path = %decl.path.join("/"),
                kind = decl.capability.kind_name(),
                "Registered hook"
            );

            inner.entries.push(Arc::new(RegistryEntry {
                owner: owner.clone(),
                member: decl.member,
                path: decl.path,
                capability: decl.capability,
            }));
            inner.seen.insert(key);
            added += 1;
        }

        added
    }

    /// Removes every entry the owner contributed.
    ///
    /// Returns the number of entries removed.
    pub fn unregister(&self, owner: &str) -> usize {
        let mut inner = self.inner.write();
        let before = inner.entries.len();

        inner.entries.retain(|entry| entry.owner != owner);
        inner.seen.retain(|(o, _)| o != owner);

        let removed = before - inner.entries.len();
        if removed > 0 {
            debug!(owner, removed, "Unregistered hooks");
        }
        removed
    }

    /// Snapshots the entry list, in insertion order.
    pub fn snapshot(&self) -> Vec<Arc<RegistryEntry>> {
        self.inner.read().entries.clone()
    }

    /// Returns the number of registered entries.
    pub fn len(&self) -> usize {
        self.inner.read().entries.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.inner.read().entries.is_empty()
    }

    /// Returns the distinct owners with at least one entry, in first-seen order.
    pub fn owners(&self) -> Vec<String> {
        let inner = self.inner.read();
        let mut owners = Vec::new();
        for entry in &inner.entries {
            if !owners.contains(&entry.owner) {
                owners.push(entry.owner.clone());
            }
        }
        owners
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop_registration(owner: &str, members: &[&str]) -> HookRegistration {
        let mut registration = HookRegistration::new(owner);
        for member in members {
            registration = registration.method0(member, &["a", member], || {});
        }
        registration
    }

    #[test]
    fn test_register_records_all_members() {
        let registry = Registry::new();
        let added = registry.register(noop_registration("tools", &["m1", "m2"]));
        assert_eq!(added, 2);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_reregistration_is_idempotent() {
        let registry = Registry::new();
        registry.register(noop_registration("tools", &["m1"]));
        let added = registry.register(noop_registration("tools", &["m1"]));
        assert_eq!(added, 0);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_same_path_different_owners_fan_out() {
        let registry = Registry::new();
        registry.register(HookRegistration::new("one").method0("m", &["shared"], || {}));
        registry.register(HookRegistration::new("two").method0("m", &["shared"], || {}));
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.owners(), vec!["one", "two"]);
    }

    #[test]
    fn test_unregister_removes_only_that_owner() {
        let registry = Registry::new();
        registry.register(noop_registration("keep", &["m1"]));
        registry.register(noop_registration("drop", &["m1", "m2"]));

        assert_eq!(registry.unregister("drop"), 2);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.owners(), vec!["keep"]);
    }

    #[test]
    fn test_unregister_allows_fresh_registration() {
        let registry = Registry::new();
        registry.register(noop_registration("tools", &["m1"]));
        registry.unregister("tools");
        let added = registry.register(noop_registration("tools", &["m1"]));
        assert_eq!(added, 1);
    }

    #[test]
    fn test_snapshot_preserves_insertion_order() {
        let registry = Registry::new();
        registry.register(noop_registration("a", &["m1"]));
        registry.register(noop_registration("b", &["m2"]));

        let members: Vec<_> = registry
            .snapshot()
            .iter()
            .map(|e| e.member.clone())
            .collect();
        assert_eq!(members, vec!["m1", "m2"]);
    }
}
