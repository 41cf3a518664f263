//! GPU side of chromapick.
//!
//! This crate provides everything the picking core needs from wgpu:
//! - [`PickTarget`]: the offscreen integer-ID attachment and its single-texel
//!   readback path
//! - [`SyntheticBuffer`]: short-lived candidate buffers for disambiguation
//!   renders, released on every exit path
//! - [`PickRenderer`]: the narrow bridge trait a renderer implements so the
//!   pickers can ask for full-scene and override draws
//! - [`Picker`] and the per-category searchers
//! - Pipeline and shader building blocks for implementing the bridge

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod bridge;
pub mod buffer;
pub mod error;
pub mod pick_target;
pub mod picker;
pub mod pipelines;
pub mod searcher;
pub mod synthetic;

pub use bridge::PickRenderer;
pub use error::{RenderError, RenderResult};
pub use pick_target::PickTarget;
pub use picker::Picker;
pub use pipelines::{
    create_inner_pick_pipeline, create_pick_bind_group_layout, create_pick_pipeline,
    native_topology, PickCameraUniforms, PickUniforms,
};
pub use synthetic::SyntheticBuffer;
