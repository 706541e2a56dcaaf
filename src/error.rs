//! Error type for location and space operations

use crate::dom::NodeKind;
use thiserror::Error;

/// Failure kinds for caret operations.
///
/// Every failure is synchronous and local to the offending call; nothing
/// retries or recovers internally. The one exception to propagation is
/// `Space::contains`, which reports a would-be `DisconnectedNodes` as
/// `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CaretError {
    /// Location constructed with a negative offset
    #[error("negative offset: {0}")]
    NegativeOffset(i64),

    /// A parent-relative location was requested for a parentless node
    #[error("node has no parent")]
    NoParent,

    /// Offset normalization attempted on a kind that carries no caret
    #[error("node kind {0:?} does not support caret offsets")]
    UnsupportedNodeType(NodeKind),

    /// The two locations live under different roots
    #[error("locations belong to disconnected trees")]
    DisconnectedNodes,

    /// A space endpoint node failed the combined relevance test
    #[error("space boundary is not a relevant node")]
    IrrelevantBoundary,

    /// A space was constructed with its maximum before its minimum
    #[error("space maximum precedes its minimum")]
    ReversedRange,

    /// A location outside the space was handed to escape/next/previous
    #[error("location is outside the space")]
    OutOfScope,
}
