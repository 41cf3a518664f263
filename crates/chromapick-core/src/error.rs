//! Error types for chromapick.

use thiserror::Error;

use crate::topology::DrawMode;

/// Errors surfaced by picking operations.
///
/// A background click is not an error: pick entry points return `Ok(None)`
/// for it. Errors here are configuration defects or internal
/// desynchronization between render state and buffer contents.
#[derive(Error, Debug)]
pub enum PickError {
    /// The draw mode has no mapped recognizer/searcher. Raised eagerly at
    /// picker construction, never at query time.
    #[error("draw mode {mode:?} has no picking searcher mapped")]
    UnrecognizedTopology {
        /// The offending draw mode.
        mode: DrawMode,
    },

    /// A disambiguation readback returned an ID outside the candidate set.
    /// The synthetic buffer and the re-render disagree, which means the
    /// renderer's pick state is desynchronized from its geometry.
    #[error("disambiguation readback returned {got}, not one of the candidates {candidates:?}")]
    InconsistentPick {
        /// The decoded ID that came back.
        got: u32,
        /// The candidate IDs that were rendered.
        candidates: Vec<u32>,
    },

    /// A pick-stream position could not be resolved to a vertex ID.
    #[error("pick stream position {pos} out of range (stream length {len})")]
    StreamPositionOutOfRange {
        /// The offending stream position.
        pos: u32,
        /// The length of the pick stream.
        len: u32,
    },

    /// The collaborating renderer failed to complete a picking render or
    /// readback.
    #[error("render error: {0}")]
    Render(String),
}

/// A specialized Result type for picking operations.
pub type PickResult<T> = std::result::Result<T, PickError>;
