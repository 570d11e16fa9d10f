//! Pipeline preferences.
//!
//! Preferences are owned by an external collaborator (typically loaded from
//! configuration at process start and mutated by a settings surface). The
//! pipeline consumes them read-only, snapshotting the current state once per
//! intercepted payload via [`SharedPreferences::current`].

use std::collections::HashSet;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// Logging verbosity for the interception pipeline.
///
/// Maps onto tracing level filters: `Essential` surfaces only warnings
/// (dropped payloads), `Debug` adds policy decisions, `All` adds per-segment
/// routing detail.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    /// No pipeline logging at all.
    None,
    /// Only dropped payloads and misconfiguration.
    #[default]
    Essential,
    /// Policy decisions (filtered, formatting disabled, no match).
    Debug,
    /// Everything, including per-segment narrowing.
    All,
}

impl Verbosity {
    /// Filter directive for the hookline crates, suitable for an `EnvFilter`.
    pub fn as_filter(&self) -> &'static str {
        match self {
            Self::None => "hookline_core=off,hookline_framework=off,hookline_runtime=off",
            Self::Essential => "hookline_core=warn,hookline_framework=warn,hookline_runtime=warn",
            Self::Debug => "hookline_core=debug,hookline_framework=debug,hookline_runtime=debug",
            Self::All => "hookline_core=trace,hookline_framework=trace,hookline_runtime=trace",
        }
    }
}

/// Preferences consumed by the pipeline on every dispatch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preferences {
    /// Pipeline logging verbosity.
    #[serde(default)]
    pub logging: Verbosity,

    /// Master switch: when false, payloads are ignored before any listener
    /// or validation stage runs.
    #[serde(default = "default_true")]
    pub allow_intercepting: bool,

    /// When false, validated payloads are not formatted or dispatched;
    /// listeners subscribed to the validated stage still fire.
    #[serde(default = "default_true")]
    pub allow_formatting: bool,

    /// Require a matching security key on every payload.
    #[serde(default)]
    pub use_secure_hooks: bool,

    /// Shared-secret key payloads must carry when secure hooks are enabled.
    #[serde(default)]
    pub secure_key: String,

    /// First-segment values that bypass dispatch entirely.
    #[serde(default)]
    pub exceptions: HashSet<String>,
}

fn default_true() -> bool {
    true
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            logging: Verbosity::default(),
            allow_intercepting: true,
            allow_formatting: true,
            use_secure_hooks: false,
            secure_key: String::new(),
            exceptions: HashSet::new(),
        }
    }
}

/// Cheap-clone handle to live preferences.
///
/// Registrations and dispatches read far more often than a settings surface
/// writes, so a read-mostly lock is enough. Each pipeline run takes one
/// snapshot up front and works against it, so a concurrent update cannot
/// change policy halfway through a payload.
#[derive(Debug, Clone, Default)]
pub struct SharedPreferences {
    inner: Arc<RwLock<Preferences>>,
}

impl SharedPreferences {
    /// Creates a handle with the given initial preferences.
    pub fn new(prefs: Preferences) -> Self {
        Self {
            inner: Arc::new(RwLock::new(prefs)),
        }
    }

    /// Snapshots the current preferences.
    pub fn current(&self) -> Preferences {
        self.inner.read().clone()
    }

    /// Applies a mutation, e.g. from a settings surface.
    pub fn update(&self, f: impl FnOnce(&mut Preferences)) {
        f(&mut self.inner.write());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let prefs = Preferences::default();
        assert!(prefs.allow_intercepting);
        assert!(prefs.allow_formatting);
        assert!(!prefs.use_secure_hooks);
        assert!(prefs.secure_key.is_empty());
        assert!(prefs.exceptions.is_empty());
        assert_eq!(prefs.logging, Verbosity::Essential);
    }

    #[test]
    fn test_update_is_visible_to_next_snapshot() {
        let shared = SharedPreferences::default();
        shared.update(|p| p.use_secure_hooks = true);
        assert!(shared.current().use_secure_hooks);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let shared = SharedPreferences::default();
        let snapshot = shared.current();
        shared.update(|p| p.secure_key = "K1".to_owned());
        assert!(snapshot.secure_key.is_empty());
    }

    #[test]
    fn test_verbosity_ordering() {
        assert!(Verbosity::None < Verbosity::Essential);
        assert!(Verbosity::Debug < Verbosity::All);
    }
}
