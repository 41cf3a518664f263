//! Color-coded GPU picking.
//!
//! Given a mouse coordinate over a rendered scene, chromapick determines
//! which primitive — and, on request, which exact vertex of it — lies under
//! the cursor, using only GPU readback: the scene is re-rendered with
//! per-primitive ID colors into an offscreen attachment, one texel is read
//! back, and the decoded ID is mapped through topology-aware arithmetic to
//! the true primitive.
//!
//! The workflow:
//! 1. Implement [`PickRenderer`] on your renderer: render your committed
//!    geometry into a [`PickTarget`] with the pipelines from
//!    [`chromapick_render::pipelines`], and honor override draws.
//! 2. Build a [`Picker`] for the renderer's draw mode and vertex
//!    addressing; unmapped topologies fail here, at setup time.
//! 3. Call [`Picker::pick_primitive`] or [`Picker::pick_vertex`] per query.
//!
//! Strip, fan and adjacency topologies share vertices between neighboring
//! primitives, so exact-vertex queries run a second, narrowed render over a
//! short-lived candidate buffer ([`SyntheticBuffer`]) that is released on
//! every exit path. A disambiguation readback outside the candidate set is
//! surfaced as [`PickError::InconsistentPick`], never a process abort.
//!
//! Pick queries are synchronous and must be serialized per renderer: the
//! offscreen attachment and candidate buffers are not re-entrant.

pub use chromapick_core::{
    color_to_index, index_to_color, recognize, DrawMode, GeometryKind, PickError, PickQuery,
    PickResult, PickedGeometry, RecognizedPrimitive, VertexAddressing, NO_HIT,
};

pub use chromapick_render::{
    create_inner_pick_pipeline, create_pick_bind_group_layout, create_pick_pipeline,
    native_topology, PickCameraUniforms, PickRenderer, PickTarget, PickUniforms, Picker,
    RenderError, RenderResult, SyntheticBuffer,
};

// Re-export glam types for convenience
pub use glam::{Mat4, UVec2};

/// Convenience imports for the common picking workflow.
pub mod prelude {
    pub use chromapick_core::{
        DrawMode, GeometryKind, PickError, PickQuery, PickResult, PickedGeometry,
        VertexAddressing, NO_HIT,
    };
    pub use chromapick_render::{PickRenderer, PickTarget, Picker, SyntheticBuffer};
}
