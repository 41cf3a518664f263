//! Primitive recognition.
//!
//! Given a draw mode and the raw ID decoded from a pick readback, work out
//! which primitive that ID belongs to and which vertices compose it. This is
//! pure arithmetic over the topology's vertex-sharing pattern; no GPU work
//! happens here.
//!
//! Raw ID convention: the pick pass renders the vertex stream non-indexed,
//! so the decoded ID is always a position in the stream. List modes
//! (`Points`, `Lines`, `Triangles`, `Quads` and their adjacency variants)
//! can get back any vertex of the primitive and use integer division to
//! find it. Strip, loop and fan modes encode the primitive's provoking
//! vertex via flat interpolation, so the raw ID identifies the primitive
//! directly. `TriangleStripAdjacency` is the one exception: its provoking
//! convention makes the raw ID the *last* visible vertex of the triangle.

use log::trace;

use crate::encode::NO_HIT;
use crate::topology::{DrawMode, GeometryKind};

/// A primitive recognized from a raw pick ID.
///
/// Stores the full composing vertex set, ghosts included (up to 6 slots for
/// triangle adjacency). User-facing consumers go through
/// [`visible_vertices`](Self::visible_vertices), which never yields a ghost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognizedPrimitive {
    mode: DrawMode,
    kind: GeometryKind,
    raw_id: u32,
    vertices: [u32; 6],
    len: u8,
    ghost_mask: u8,
}

impl RecognizedPrimitive {
    fn new(mode: DrawMode, raw_id: u32, verts: &[u32], ghost_mask: u8) -> Option<Self> {
        debug_assert!(verts.len() <= 6);
        let kind = mode.category()?;
        let mut vertices = [0u32; 6];
        vertices[..verts.len()].copy_from_slice(verts);
        Some(Self {
            mode,
            kind,
            raw_id,
            vertices,
            len: verts.len() as u8,
            ghost_mask,
        })
    }

    /// The draw mode this primitive was recognized under.
    pub fn mode(&self) -> DrawMode {
        self.mode
    }

    /// The primitive category.
    pub fn kind(&self) -> GeometryKind {
        self.kind
    }

    /// The raw readback ID that produced this primitive.
    pub fn raw_id(&self) -> u32 {
        self.raw_id
    }

    /// All composing vertex IDs in stream order, ghosts included.
    pub fn all_vertices(&self) -> &[u32] {
        &self.vertices[..usize::from(self.len)]
    }

    /// The user-visible vertex IDs, with adjacency ghosts excluded.
    pub fn visible_vertices(&self) -> Vec<u32> {
        self.all_vertices()
            .iter()
            .enumerate()
            .filter(|(slot, _)| self.ghost_mask & (1 << slot) == 0)
            .map(|(_, &v)| v)
            .collect()
    }

    /// The ghost vertex IDs, if the mode is an adjacency variant.
    pub fn ghost_vertices(&self) -> Vec<u32> {
        self.all_vertices()
            .iter()
            .enumerate()
            .filter(|(slot, _)| self.ghost_mask & (1 << slot) != 0)
            .map(|(_, &v)| v)
            .collect()
    }
}

/// Recognizes the primitive a raw pick ID belongs to.
///
/// `stream_len` is the length of the pick vertex stream (index count for
/// one-index geometry, range count for zero-index geometry). Returns `None`
/// for the no-hit sentinel and for IDs that do not fall inside a complete
/// primitive; an out-of-range ID is "no primitive found", not an error.
///
/// This is a pure function: identical `(mode, raw_id, stream_len)` always
/// yields an identical result.
pub fn recognize(mode: DrawMode, raw_id: u32, stream_len: u32) -> Option<RecognizedPrimitive> {
    let id = raw_id;
    let n = stream_len;
    if id == NO_HIT || id >= n || n < mode.min_stream_len() {
        trace!("recognize: raw id {id} out of range for {mode:?} (stream {n})");
        return None;
    }

    match mode {
        DrawMode::Points => RecognizedPrimitive::new(mode, id, &[id], 0),

        DrawMode::Lines => {
            let p = id / 2;
            if 2 * p + 1 >= n {
                return None;
            }
            RecognizedPrimitive::new(mode, id, &[2 * p, 2 * p + 1], 0)
        }

        DrawMode::LineStrip => {
            if id + 1 >= n {
                return None;
            }
            RecognizedPrimitive::new(mode, id, &[id, id + 1], 0)
        }

        DrawMode::LineLoop => RecognizedPrimitive::new(mode, id, &[id, (id + 1) % n], 0),

        DrawMode::Triangles => {
            let p = id / 3;
            if 3 * p + 2 >= n {
                return None;
            }
            RecognizedPrimitive::new(mode, id, &[3 * p, 3 * p + 1, 3 * p + 2], 0)
        }

        DrawMode::TriangleStrip => {
            if id + 2 >= n {
                return None;
            }
            // Odd primitives flip the last two vertices to preserve winding.
            let verts = if id % 2 == 0 {
                [id, id + 1, id + 2]
            } else {
                [id, id + 2, id + 1]
            };
            RecognizedPrimitive::new(mode, id, &verts, 0)
        }

        DrawMode::TriangleFan => {
            if id < 1 || id + 1 >= n {
                return None;
            }
            RecognizedPrimitive::new(mode, id, &[0, id, id + 1], 0)
        }

        DrawMode::Quads => {
            let p = id / 4;
            if 4 * p + 3 >= n {
                return None;
            }
            RecognizedPrimitive::new(mode, id, &[4 * p, 4 * p + 1, 4 * p + 2, 4 * p + 3], 0)
        }

        DrawMode::LinesAdjacency => {
            // Groups of four; the middle two rasterize, the ends are ghosts.
            let p = id / 4;
            if 4 * p + 3 >= n {
                return None;
            }
            RecognizedPrimitive::new(
                mode,
                id,
                &[4 * p, 4 * p + 1, 4 * p + 2, 4 * p + 3],
                0b1001,
            )
        }

        DrawMode::LineStripAdjacency => {
            // Raw ID is the first rasterized vertex of the segment; the
            // vertices immediately before and after the segment are ghosts.
            if id < 1 || id + 2 >= n {
                return None;
            }
            RecognizedPrimitive::new(mode, id, &[id - 1, id, id + 1, id + 2], 0b1001)
        }

        DrawMode::TrianglesAdjacency => {
            // Groups of six; even slots rasterize, odd slots are ghosts.
            let p = id / 6;
            if 6 * p + 5 >= n {
                return None;
            }
            let base = 6 * p;
            RecognizedPrimitive::new(
                mode,
                id,
                &[base, base + 1, base + 2, base + 3, base + 4, base + 5],
                0b10_1010,
            )
        }

        DrawMode::TriangleStripAdjacency => {
            // The strip advances on even vertices; the raw ID is the last
            // visible vertex of the triangle, so the visible set walks back
            // by two. Interleaved odd vertices are the adjacency ghosts.
            if id % 2 != 0 || id < 4 || id + 1 >= n {
                return None;
            }
            RecognizedPrimitive::new(
                mode,
                id,
                &[id - 4, id - 3, id - 2, id - 1, id, id + 1],
                0b10_1010,
            )
        }

        DrawMode::Patches => None,
    }
}
