//! The inner-render bridge.
//!
//! Pickers and searchers never draw scene geometry themselves; they ask the
//! owning renderer through this trait. The renderer keeps its committed
//! buffers untouched and performs temporary overriding draws into its pick
//! target, returning the decoded raw ID. The trait is object-safe so the
//! searcher dispatch table can hold plain function pointers over
//! `&mut dyn PickRenderer`.

use chromapick_core::{DrawMode, PickError, PickQuery, PickResult, VertexAddressing};

use crate::synthetic::SyntheticBuffer;

/// The contract between the picking core and the renderer that owns the
/// geometry.
///
/// Implementations render into a [`PickTarget`](crate::PickTarget) (or an
/// equivalent attachment) and read the queried texel back; all other render
/// state — shader, transforms, viewport — is preserved across a picking
/// draw. No call here may mutate the committed geometry buffers.
pub trait PickRenderer {
    /// The topology of the committed draw call.
    fn draw_mode(&self) -> DrawMode;

    /// How the committed geometry addresses its vertices.
    fn addressing(&self) -> VertexAddressing;

    /// Length of the pick vertex stream (index count for one-index
    /// geometry, vertex range count for zero-index geometry).
    fn stream_len(&self) -> u32;

    /// Maps a pick-stream position to the true vertex ID: the stored index
    /// value for one-index geometry, `first + pos` for zero-index.
    fn resolve_index(&self, pos: u32) -> PickResult<u32>;

    /// Renders the full committed geometry into the pick target with
    /// per-position ID colors and reads back the queried texel.
    fn render_for_picking(&mut self, query: &PickQuery) -> PickResult<u32>;

    /// Stages a candidate set for an overriding draw.
    fn create_override(&self, candidates: &[u32]) -> PickResult<SyntheticBuffer>;

    /// Renders only the override buffer's candidates (as points, tagged
    /// with their true IDs) and reads back the queried texel.
    fn render_with_override(
        &mut self,
        query: &PickQuery,
        buffer: &SyntheticBuffer,
    ) -> PickResult<u32>;
}

/// Checks a stream position against the stream length before resolution.
///
/// Helper for `resolve_index` implementations.
pub fn check_stream_pos(pos: u32, len: u32) -> PickResult<()> {
    if pos < len {
        Ok(())
    } else {
        Err(PickError::StreamPositionOutOfRange { pos, len })
    }
}
