//! # Hookline Core
//!
//! Foundation types for the Hookline interception pipeline.
//!
//! This crate provides the payload-level building blocks; it knows nothing
//! about registries or dispatch:
//!
//! - **Tokenization**: raw scheme payload → ordered path segments
//!   ([`tokenize`], [`ParsedPayload`])
//! - **Security**: shared-secret key stripping and validation ([`check_key`])
//! - **Exception filtering**: first-segment exclusion ([`is_excepted`])
//! - **Type coercion**: textual parameter → declared primitive kind
//!   ([`coerce`], [`HookValue`])
//! - **Preferences**: the read-only policy snapshot the pipeline consumes on
//!   every dispatch ([`Preferences`], [`SharedPreferences`])
//! - **Broadcast**: ordered, panic-isolated listener lists ([`Broadcast`])
//!
//! The stages compose left to right:
//!
//! ```text
//! raw payload ─▶ tokenize ─▶ check_key ─▶ is_excepted ─▶ ParsedPayload
//! ```
//!
//! with the dispatcher (in `hookline-framework`) consuming the result.

pub mod broadcast;
pub mod coerce;
pub mod error;
pub mod filter;
pub mod payload;
pub mod prefs;
pub mod security;

pub use broadcast::Broadcast;
pub use coerce::{HookValue, ParamKind, coerce};
pub use error::DropReason;
pub use filter::is_excepted;
pub use payload::{KEY_PREFIX, PARAM_PREFIX, ParsedPayload, SCHEME_SUFFIX, tokenize};
pub use prefs::{Preferences, SharedPreferences, Verbosity};
pub use security::{KeyRejection, check_key};
