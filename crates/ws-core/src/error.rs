//! Base error type.
//!
//! Sub-crates define their own error enums and wrap `WsError` where a core
//! failure can surface through them.

use thiserror::Error;

use crate::AgentId;

/// The top-level error type for `ws-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum WsError {
    #[error("agent {0} not found")]
    AgentNotFound(AgentId),
}

/// Shorthand result type for `ws-core`.
pub type WsResult<T> = Result<T, WsError>;
