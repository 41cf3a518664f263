//! Draw-mode topologies and vertex addressing.

use serde::{Deserialize, Serialize};

/// How a draw call assembles its vertex stream into primitives.
///
/// This is a closed set: every mode a renderer can be configured with is
/// listed here, and every mode except [`DrawMode::Patches`] maps to exactly
/// one picking searcher. `Patches` is tessellation input and has no
/// rasterization-order arithmetic, so constructing a picker for it is a
/// configuration error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrawMode {
    /// Isolated points, one primitive per vertex.
    Points,
    /// Isolated line segments, two vertices per primitive.
    Lines,
    /// Connected line segments sharing one vertex with each neighbor.
    LineStrip,
    /// A line strip whose last vertex connects back to the first.
    LineLoop,
    /// Isolated triangles, three vertices per primitive.
    Triangles,
    /// Connected triangles sharing two vertices with each neighbor.
    TriangleStrip,
    /// Triangles sharing the first vertex of the stream.
    TriangleFan,
    /// Line segments with one non-rasterized ghost vertex on each end.
    LinesAdjacency,
    /// A line strip with leading and trailing ghost vertices.
    LineStripAdjacency,
    /// Isolated triangles interleaved with three ghost vertices each.
    TrianglesAdjacency,
    /// A triangle strip on the even vertices, ghosts on the odd ones.
    TriangleStripAdjacency,
    /// Isolated quadrilaterals, four vertices per primitive.
    Quads,
    /// Tessellation patches. Not pickable; no searcher is mapped.
    Patches,
}

/// The category of primitive a topology rasterizes.
///
/// Searcher dispatch happens per category, not per mode: all triangle-family
/// modes share one disambiguation algorithm and differ only in how the
/// recognizer derives the candidate vertex set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeometryKind {
    /// A single vertex.
    Point,
    /// A segment between two vertices.
    Line,
    /// A triangle between three vertices.
    Triangle,
    /// A quadrilateral between four vertices.
    Quad,
}

impl GeometryKind {
    /// Number of user-visible vertices composing one primitive of this kind.
    pub fn arity(self) -> usize {
        match self {
            Self::Point => 1,
            Self::Line => 2,
            Self::Triangle => 3,
            Self::Quad => 4,
        }
    }
}

/// How a renderer addresses the vertices of its committed geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VertexAddressing {
    /// Vertices are reached through a shared index buffer; a pick-stream
    /// position resolves to the index value stored at that position.
    OneIndex,
    /// Vertices are drawn directly from a range; a pick-stream position
    /// resolves to `first + position`.
    ZeroIndex,
}

impl DrawMode {
    /// The primitive category this mode rasterizes, or `None` for modes
    /// with no mapped searcher.
    pub fn category(self) -> Option<GeometryKind> {
        match self {
            Self::Points => Some(GeometryKind::Point),
            Self::Lines
            | Self::LineStrip
            | Self::LineLoop
            | Self::LinesAdjacency
            | Self::LineStripAdjacency => Some(GeometryKind::Line),
            Self::Triangles
            | Self::TriangleStrip
            | Self::TriangleFan
            | Self::TrianglesAdjacency
            | Self::TriangleStripAdjacency => Some(GeometryKind::Triangle),
            Self::Quads => Some(GeometryKind::Quad),
            Self::Patches => None,
        }
    }

    /// Whether this mode carries non-rasterized ghost vertices.
    pub fn is_adjacency(self) -> bool {
        matches!(
            self,
            Self::LinesAdjacency
                | Self::LineStripAdjacency
                | Self::TrianglesAdjacency
                | Self::TriangleStripAdjacency
        )
    }

    /// The smallest vertex stream that yields at least one primitive.
    pub fn min_stream_len(self) -> u32 {
        match self {
            Self::Points => 1,
            Self::Lines | Self::LineStrip => 2,
            Self::LineLoop => 2,
            Self::Triangles | Self::TriangleStrip | Self::TriangleFan => 3,
            Self::LinesAdjacency | Self::LineStripAdjacency | Self::Quads => 4,
            Self::TrianglesAdjacency | Self::TriangleStripAdjacency => 6,
            Self::Patches => u32::MAX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_mode_except_patches_has_a_category() {
        let modes = [
            DrawMode::Points,
            DrawMode::Lines,
            DrawMode::LineStrip,
            DrawMode::LineLoop,
            DrawMode::Triangles,
            DrawMode::TriangleStrip,
            DrawMode::TriangleFan,
            DrawMode::LinesAdjacency,
            DrawMode::LineStripAdjacency,
            DrawMode::TrianglesAdjacency,
            DrawMode::TriangleStripAdjacency,
            DrawMode::Quads,
        ];
        for mode in modes {
            assert!(mode.category().is_some(), "{mode:?} should be pickable");
        }
        assert!(DrawMode::Patches.category().is_none());
    }

    #[test]
    fn adjacency_classification() {
        assert!(DrawMode::LinesAdjacency.is_adjacency());
        assert!(DrawMode::TriangleStripAdjacency.is_adjacency());
        assert!(!DrawMode::TriangleStrip.is_adjacency());
        assert!(!DrawMode::Points.is_adjacency());
    }
}
