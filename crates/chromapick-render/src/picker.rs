//! The picker: entry point of a pick query.
//!
//! A `Picker` is bound to one renderer configuration (draw mode + vertex
//! addressing) for its lifetime. Construction validates the topology
//! mapping eagerly, so an unmapped mode fails at setup time rather than on
//! the first click.

use chromapick_core::{
    recognize, DrawMode, GeometryKind, PickError, PickQuery, PickResult, PickedGeometry,
    VertexAddressing, NO_HIT,
};
use log::debug;

use crate::bridge::PickRenderer;
use crate::searcher::searcher_for;

/// Resolves pick queries against one renderer's committed geometry.
#[derive(Debug, Clone, Copy)]
pub struct Picker {
    mode: DrawMode,
    addressing: VertexAddressing,
    kind: GeometryKind,
}

impl Picker {
    /// Creates a picker for a draw mode and addressing mode.
    ///
    /// Fails with [`PickError::UnrecognizedTopology`] when the mode has no
    /// mapped searcher; this is a configuration defect, validated here and
    /// never deferred to query time.
    pub fn new(mode: DrawMode, addressing: VertexAddressing) -> PickResult<Self> {
        let kind = mode
            .category()
            .ok_or(PickError::UnrecognizedTopology { mode })?;
        // Touch the dispatch table so a missing cell would also fail here.
        let _ = searcher_for(addressing, kind);
        Ok(Self {
            mode,
            addressing,
            kind,
        })
    }

    /// Creates a picker matching a renderer's current configuration.
    pub fn for_renderer<R: PickRenderer>(renderer: &R) -> PickResult<Self> {
        Self::new(renderer.draw_mode(), renderer.addressing())
    }

    /// The draw mode this picker was built for.
    pub fn mode(&self) -> DrawMode {
        self.mode
    }

    /// The vertex addressing mode this picker was built for.
    pub fn addressing(&self) -> VertexAddressing {
        self.addressing
    }

    /// The topology category this picker dispatches to.
    pub fn kind(&self) -> GeometryKind {
        self.kind
    }

    /// Resolves the topmost primitive under the query coordinate.
    ///
    /// One full-scene render and readback; no synthetic buffers are
    /// allocated. `Ok(None)` means background.
    pub fn pick_primitive<R: PickRenderer>(
        &self,
        renderer: &mut R,
        query: &PickQuery,
    ) -> PickResult<Option<PickedGeometry>> {
        self.pick(renderer, query, false)
    }

    /// Resolves the exact vertex under the query coordinate.
    ///
    /// Runs the full-scene pass, then a disambiguation pass when the
    /// primitive has more than one candidate vertex. The result's
    /// `picked_vertex` is `None` if the disambiguation pass sampled
    /// background (the cursor was inside the primitive but on none of its
    /// vertices).
    pub fn pick_vertex<R: PickRenderer>(
        &self,
        renderer: &mut R,
        query: &PickQuery,
    ) -> PickResult<Option<PickedGeometry>> {
        self.pick(renderer, query, true)
    }

    fn pick<R: PickRenderer>(
        &self,
        renderer: &mut R,
        query: &PickQuery,
        exact_vertex: bool,
    ) -> PickResult<Option<PickedGeometry>> {
        debug!(
            "pick query at ({}, {}), mode {:?}, addressing {:?}",
            query.x, query.y, self.mode, self.addressing
        );

        let raw = renderer.render_for_picking(query)?;
        if raw == NO_HIT {
            // Background: no further GPU work, no synthetic buffers.
            debug!("full-scene readback sampled background");
            return Ok(None);
        }

        let Some(prim) = recognize(self.mode, raw, renderer.stream_len()) else {
            debug!("raw id {raw} belongs to no complete primitive");
            return Ok(None);
        };

        let mut vertex_ids = Vec::with_capacity(self.kind.arity());
        for pos in prim.visible_vertices() {
            vertex_ids.push(renderer.resolve_index(pos)?);
        }

        let picked_vertex = if exact_vertex {
            let search = searcher_for(self.addressing, self.kind);
            search(renderer, query, &vertex_ids)?
        } else {
            None
        };

        Ok(Some(PickedGeometry {
            mode: self.mode,
            kind: self.kind,
            vertex_ids,
            picked_vertex,
            raw_id: raw,
        }))
    }
}
