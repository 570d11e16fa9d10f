//! The interception pipeline.
//!
//! [`Interceptor`] is the state machine that turns a raw scheme payload into
//! zero or more target invocations:
//!
//! ```text
//! raw ─▶ intercepted ─▶ tokenize ─▶ key check ─▶ validated ─▶ exception
//!        (broadcast)                             (broadcast)   filter
//!                                                                │
//!                             invocation ◀─ dispatch ◀─ routed ◀─┘
//!                                                      (broadcast)
//! ```
//!
//! Every failure mode drops the payload (or skips a single target) and logs;
//! [`Interceptor::on_raw_payload`] always returns normally. The returned
//! [`InterceptOutcome`] says what happened, for observers and tests —
//! fire-and-forget callers can ignore it.

use std::sync::Arc;

use tracing::{debug, warn};

use hookline_core::{
    Broadcast, DropReason, ParsedPayload, SharedPreferences, check_key, is_excepted, tokenize,
};

use crate::dispatch::{DispatchReport, dispatch};
use crate::registry::Registry;

/// What became of one intercepted payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterceptOutcome {
    /// The payload reached dispatch; the report counts what was invoked.
    Dispatched(DispatchReport),
    /// The payload was dropped before dispatch.
    Dropped(DropReason),
}

impl InterceptOutcome {
    /// Returns true if the payload reached dispatch.
    pub fn is_dispatched(&self) -> bool {
        matches!(self, Self::Dispatched(_))
    }

    /// The drop reason, if the payload was dropped.
    pub fn drop_reason(&self) -> Option<&DropReason> {
        match self {
            Self::Dropped(reason) => Some(reason),
            Self::Dispatched(_) => None,
        }
    }
}

/// Intercepts, validates and dispatches URL-scheme payloads.
///
/// The interceptor owns nothing global: it is handed its registry and its
/// preferences handle explicitly, so several independent interceptors can
/// coexist (and tests need no process-wide state).
pub struct Interceptor {
    registry: Arc<Registry>,
    prefs: SharedPreferences,
    intercepted: Broadcast<String>,
    validated: Broadcast<String>,
    routed: Broadcast<Vec<String>>,
}

impl Interceptor {
    /// Creates an interceptor over the given registry and preferences.
    pub fn new(registry: Arc<Registry>, prefs: SharedPreferences) -> Self {
        Self {
            registry,
            prefs,
            intercepted: Broadcast::new(),
            validated: Broadcast::new(),
            routed: Broadcast::new(),
        }
    }

    /// The registry this interceptor dispatches against.
    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    /// The live preferences handle.
    pub fn preferences(&self) -> &SharedPreferences {
        &self.prefs
    }

    /// Broadcast point: raw payload, before any validation.
    ///
    /// The payload still contains the key token (if any) and has not been
    /// checked. Prefer [`Self::validated`] unless pre-check access is really
    /// needed.
    pub fn intercepted(&self) -> &Broadcast<String> {
        &self.intercepted
    }

    /// Broadcast point: re-joined path after the security check, before
    /// exception filtering.
    pub fn validated(&self) -> &Broadcast<String> {
        &self.validated
    }

    /// Broadcast point: tokenized path after exception filtering, right
    /// before dispatch.
    pub fn routed(&self) -> &Broadcast<Vec<String>> {
        &self.routed
    }

    /// Runs the full pipeline for one raw payload.
    ///
    /// Synchronous and bounded: dispatch completes before this returns, and
    /// only one payload is ever in flight per interceptor call. Never
    /// panics out or returns an error — dropped payloads are logged and
    /// reported through the outcome.
    pub fn on_raw_payload(&self, raw: &str) -> InterceptOutcome {
        // One snapshot per payload; a concurrent settings change cannot
        // flip policy halfway through the pipeline.
        let prefs = self.prefs.current();

        if !prefs.allow_intercepting {
            debug!("intercepting is disabled in settings");
            return InterceptOutcome::Dropped(DropReason::InterceptingDisabled);
        }

        self.intercepted.emit(&raw.to_owned());

        let tokens = match check_key(tokenize(raw), &prefs) {
            Ok(tokens) => tokens,
            Err(rejection) => {
                warn!(%rejection, "payload dropped by security check");
                return InterceptOutcome::Dropped(rejection.into());
            }
        };

        self.validated.emit(&tokens.join("/"));

        if !prefs.allow_formatting {
            debug!("formatting is disabled in settings");
            return InterceptOutcome::Dropped(DropReason::FormattingDisabled);
        }

        let Some(first) = tokens.first() else {
            debug!("payload is empty after key stripping");
            return InterceptOutcome::Dropped(DropReason::EmptyPayload);
        };

        if is_excepted(first, &prefs.exceptions) {
            debug!(segment = %first, "payload is on the exception list, stopping");
            return InterceptOutcome::Dropped(DropReason::Excepted {
                segment: first.clone(),
            });
        }

        self.routed.emit(&tokens);

        let parsed = ParsedPayload::parse(tokens);
        if parsed.is_empty() {
            debug!("payload carried only parameter tokens, nothing to route");
            return InterceptOutcome::Dropped(DropReason::EmptyPayload);
        }

        let report = dispatch(&parsed, &self.registry);
        debug!(
            matched = report.matched,
            invoked = report.invoked,
            "payload dispatched"
        );
        InterceptOutcome::Dispatched(report)
    }
}
