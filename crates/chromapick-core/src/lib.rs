//! Core picking logic for chromapick.
//!
//! This crate holds everything about color-coded picking that does not touch
//! the GPU:
//! - The [`DrawMode`] topology model and vertex addressing modes
//! - The [`recognize`] primitive recognizer (pure arithmetic)
//! - 24-bit pick ID color encoding and the no-hit sentinel
//! - Query and result types shared with the render crate

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod encode;
pub mod error;
pub mod query;
pub mod recognize;
pub mod topology;

pub use encode::{color_to_index, index_to_color, NO_HIT};
pub use error::{PickError, PickResult};
pub use query::{PickQuery, PickedGeometry};
pub use recognize::{recognize, RecognizedPrimitive};
pub use topology::{DrawMode, GeometryKind, VertexAddressing};

// Re-export glam types for convenience
pub use glam::{Mat4, UVec2};
