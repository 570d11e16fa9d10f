//! Security-key validation.
//!
//! The first token of a payload may carry the shared-secret key under the
//! [`KEY_PREFIX`](crate::payload::KEY_PREFIX) marker. Whether a key is
//! *required* is controlled by [`Preferences::use_secure_hooks`]; the key
//! token itself is always stripped from the path when present, so downstream
//! stages never see it.

use thiserror::Error;
use tracing::trace;

use crate::payload::KEY_PREFIX;
use crate::prefs::Preferences;

/// Why a payload failed the security check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyRejection {
    /// Secure hooks are enabled but the payload carried no key token.
    #[error("payload does not contain a security key, but secure hooks are enabled")]
    MissingKey,

    /// The supplied key does not match the configured secure key.
    #[error("payload sent with an incorrect security key")]
    KeyMismatch,
}

/// Checks and strips the security-key token.
///
/// Rules, in order:
///
/// 1. If token 0 starts with `key=`, the prefix is stripped and the token is
///    removed from the sequence. With secure hooks disabled the key is simply
///    discarded; with secure hooks enabled the stripped value must equal the
///    configured key exactly (case-sensitive).
/// 2. Otherwise no key is present: that is a failure when secure hooks are
///    enabled and a trivial success when they are not. An empty token
///    sequence counts as "no key present".
///
/// On success the remaining tokens (key removed, order preserved) are
/// returned.
pub fn check_key(
    mut tokens: Vec<String>,
    prefs: &Preferences,
) -> Result<Vec<String>, KeyRejection> {
    let supplied = match tokens.first().and_then(|t| t.strip_prefix(KEY_PREFIX)) {
        Some(value) => {
            let value = value.to_owned();
            tokens.remove(0);
            Some(value)
        }
        None => None,
    };

    match supplied {
        Some(_) if !prefs.use_secure_hooks => {
            trace!("payload contains a security key, but secure hooks are disabled; ignoring key");
            Ok(tokens)
        }
        Some(key) => {
            trace!("payload contains a security key, checking");
            if key == prefs.secure_key {
                Ok(tokens)
            } else {
                Err(KeyRejection::KeyMismatch)
            }
        }
        None if prefs.use_secure_hooks => Err(KeyRejection::MissingKey),
        None => {
            trace!("no security key found in payload");
            Ok(tokens)
        }
    }
}
