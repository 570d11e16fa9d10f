//! Drop taxonomy for the interception pipeline.
//!
//! Nothing in the pipeline raises an error to its caller: every failure mode
//! is handled by dropping the payload (or skipping a single target) and
//! logging. [`DropReason`] names the ways a payload can be dropped before
//! dispatch, so observers and tests can distinguish them.

use thiserror::Error;

use crate::security::KeyRejection;

/// Why a payload was dropped before reaching dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DropReason {
    /// Intercepting is disabled in preferences; nothing ran.
    #[error("intercepting is disabled in preferences")]
    InterceptingDisabled,

    /// The security check rejected the payload.
    #[error(transparent)]
    Security(#[from] KeyRejection),

    /// Formatting is disabled in preferences; validated but not dispatched.
    #[error("formatting is disabled in preferences")]
    FormattingDisabled,

    /// The first segment matched the exception list.
    #[error("first segment '{segment}' is on the exception list")]
    Excepted {
        /// The matching segment.
        segment: String,
    },

    /// Nothing left to route after key stripping.
    #[error("payload has no routable segments")]
    EmptyPayload,
}
