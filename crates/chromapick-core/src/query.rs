//! Pick query and result types.

use glam::Mat4;

use crate::topology::{DrawMode, GeometryKind};

/// One pick request: a screen coordinate plus the camera state needed to
/// re-render the scene for picking.
///
/// Coordinates are in pixels with a bottom-left origin, matching the
/// convention of mouse events delivered in framebuffer space. The query is
/// immutable once created; both the full-scene pass and any disambiguation
/// pass read the same coordinate.
#[derive(Debug, Clone, Copy)]
pub struct PickQuery {
    /// Horizontal pixel coordinate, from the left edge.
    pub x: u32,
    /// Vertical pixel coordinate, from the bottom edge.
    pub y: u32,
    /// The active view-projection matrix at the time of the query.
    pub view_proj: Mat4,
}

impl PickQuery {
    /// Creates a query for the given bottom-left-origin pixel coordinate.
    pub fn new(x: u32, y: u32, view_proj: Mat4) -> Self {
        Self { x, y, view_proj }
    }
}

/// The resolved result of a pick query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickedGeometry {
    /// The draw mode of the renderer that produced the hit.
    pub mode: DrawMode,
    /// The category of the picked primitive.
    pub kind: GeometryKind,
    /// The true vertex IDs composing the picked primitive, ghosts excluded.
    pub vertex_ids: Vec<u32>,
    /// The exact vertex under the cursor, when vertex resolution ran and
    /// the disambiguation pass hit one of the candidates.
    pub picked_vertex: Option<u32>,
    /// The raw stream position decoded from the full-scene readback.
    pub raw_id: u32,
}
