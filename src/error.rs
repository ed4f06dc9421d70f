//! Errors shared by the console loop and the server binary.
//!
//! Duplicate-id and not-found outcomes are not errors here: they are ordinary
//! results of a store operation and are reported inline (console message or
//! HTTP status). This enum only covers failures that abort the current
//! command loop or server start-up.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The input stream ended while a prompt was still waiting for a value.
    #[error("input stream closed")]
    InputClosed,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
