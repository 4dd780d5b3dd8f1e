//! # UI Error Types
//!
//! Errors raised while assembling the widget tree. The per-frame path never
//! fails: out-of-range input is clamped instead.

use thiserror::Error;

/// Errors that can occur while building or addressing a screen.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UiError {
    /// A top-level window with this name is already registered.
    #[error("duplicate window name: {0}")]
    DuplicateWindow(String),

    /// No top-level window with this name exists.
    #[error("unknown window: {0}")]
    UnknownWindow(String),
}

/// Result type for UI operations.
pub type UiResult<T> = Result<T, UiError>;
