//! Errors raised by the positioning engine.

use thiserror::Error;

/// Failures of a positioning call.
///
/// Zero-size or detached *measured* elements are not errors: their geometry
/// is propagated as reported by the surface. Only malformed input and a
/// malformed ancestor chain fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PositionError {
    /// The placement name is not one of the twelve known identifiers.
    #[error("unknown placement '{0}'")]
    UnknownPlacement(String),

    /// The offset-parent chain did not reach the document root within the
    /// configured depth, which means the surface reported a cycle.
    #[error("offset parent chain exceeds {limit} ancestors (cyclic ancestor data?)")]
    AncestorDepthExceeded {
        /// The configured maximum depth.
        limit: usize,
    },

    /// An offset parent reported during the walk is not attached to the
    /// render tree.
    #[error("offset parent at depth {depth} is not attached to the render tree")]
    DetachedAncestor {
        /// How many offset parents had been visited, starting at 1.
        depth: usize,
    },
}
