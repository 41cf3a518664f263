//! Rendering error types.

use thiserror::Error;

/// Errors that can occur while rendering or reading back a pick pass.
#[derive(Error, Debug)]
pub enum RenderError {
    /// Mapping the readback staging buffer failed.
    #[error("pick readback mapping failed: {0}")]
    ReadbackMapFailed(#[from] wgpu::BufferAsyncError),

    /// The readback completion callback never fired.
    #[error("pick readback interrupted before completion")]
    ReadbackInterrupted,

    /// A pick draw was requested before the target was sized.
    #[error("pick target has zero extent")]
    TargetUninitialized,
}

/// A specialized Result type for pick rendering operations.
pub type RenderResult<T> = std::result::Result<T, RenderError>;

impl From<RenderError> for chromapick_core::PickError {
    fn from(err: RenderError) -> Self {
        Self::Render(err.to_string())
    }
}
