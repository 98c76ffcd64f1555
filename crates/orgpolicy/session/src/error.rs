//! Session error types.

use orgpolicy_engine::EngineError;
use thiserror::Error;

/// Errors produced by the session shell and its collaborators.
///
/// All variants are recoverable by the caller: re-prompt the user, show a
/// banner, retry the switch. None are fatal to the process.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Context build failed (membership lookup).
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// The membership directory could not be reached or answered badly.
    #[error("membership directory error: {0}")]
    Directory(String),

    /// The policy store could not be reached or answered badly.
    #[error("policy store error: {0}")]
    Policies(String),

    /// The preferences store could not be reached or answered badly.
    #[error("preferences store error: {0}")]
    Preferences(String),

    /// A newer organization switch completed first; this switch's result
    /// was discarded and the store was left with the newer context.
    #[error("organization switch superseded by a newer switch")]
    Superseded,

    /// The context store lock was poisoned by a panicking writer.
    #[error("context store lock poisoned")]
    Lock,
}

/// Result type for session operations.
pub type Result<T> = std::result::Result<T, SessionError>;
