//! Pick pipeline building blocks.
//!
//! Renderers implementing [`PickRenderer`](crate::PickRenderer) draw their
//! pick passes with these pipelines. Both passes pull vertices from storage
//! buffers — no vertex buffers are bound — so `@builtin(vertex_index)` is
//! always a pick-stream position, uniform across addressing modes. The full
//! pass optionally indirects through the committed index buffer; the inner
//! pass indirects through a candidate buffer and encodes the candidate's
//! true ID.

use chromapick_core::DrawMode;

/// Camera uniforms for pick rendering.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PickCameraUniforms {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
}

impl Default for PickCameraUniforms {
    fn default() -> Self {
        Self {
            view_proj: glam::Mat4::IDENTITY.to_cols_array_2d(),
        }
    }
}

/// Per-draw uniforms for pick rendering.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
#[allow(clippy::pub_underscore_fields)]
pub struct PickUniforms {
    /// Offset added to the encoded stream position, for renderers that pack
    /// several draw ranges into one pick pass.
    pub id_base: u32,
    /// Nonzero when the full pass indirects through the index buffer
    /// binding (one-index geometry).
    pub use_index: u32,
    /// Padding to align to 16 bytes.
    pub _padding: [u32; 2],
}

impl Default for PickUniforms {
    fn default() -> Self {
        Self {
            id_base: 0,
            use_index: 0,
            _padding: [0; 2],
        }
    }
}

/// Creates the bind group layout shared by both pick passes: camera uniform,
/// pick uniforms, positions, and one index-like storage buffer (the
/// committed index buffer for the full pass, the candidate buffer for the
/// inner pass).
pub fn create_pick_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("Pick Bind Group Layout"),
        entries: &[
            // Camera uniforms
            wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            },
            // Pick uniforms
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            },
            // Position storage buffer
            wgpu::BindGroupLayoutEntry {
                binding: 2,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Storage { read_only: true },
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            },
            // Index / candidate storage buffer
            wgpu::BindGroupLayoutEntry {
                binding: 3,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Storage { read_only: true },
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            },
        ],
    })
}

/// Maps a draw mode to the wgpu topology its pick stream is drawn with.
///
/// wgpu has no native fans, loops, quads or adjacency modes; collaborating
/// renderers pre-expand those streams for the pick pass while preserving
/// the original stream numbering, and draw the expansion with the topology
/// returned here.
pub fn native_topology(mode: DrawMode) -> wgpu::PrimitiveTopology {
    match mode {
        DrawMode::Points => wgpu::PrimitiveTopology::PointList,
        DrawMode::Lines | DrawMode::LineLoop | DrawMode::LinesAdjacency => {
            wgpu::PrimitiveTopology::LineList
        }
        DrawMode::LineStrip | DrawMode::LineStripAdjacency => wgpu::PrimitiveTopology::LineStrip,
        DrawMode::Triangles
        | DrawMode::TriangleFan
        | DrawMode::TrianglesAdjacency
        | DrawMode::Quads
        | DrawMode::Patches => wgpu::PrimitiveTopology::TriangleList,
        DrawMode::TriangleStrip | DrawMode::TriangleStripAdjacency => {
            wgpu::PrimitiveTopology::TriangleStrip
        }
    }
}

/// Creates the full-scene pick pipeline for a draw mode.
pub fn create_pick_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    mode: DrawMode,
) -> wgpu::RenderPipeline {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("Pick Shader"),
        source: wgpu::ShaderSource::Wgsl(include_str!("shaders/pick.wgsl").into()),
    });
    create_pipeline(device, layout, &shader, native_topology(mode), "Pick Pipeline")
}

/// Creates the inner (disambiguation) pick pipeline; candidates are always
/// drawn as points.
pub fn create_inner_pick_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
) -> wgpu::RenderPipeline {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("Inner Pick Shader"),
        source: wgpu::ShaderSource::Wgsl(include_str!("shaders/pick_inner.wgsl").into()),
    });
    create_pipeline(
        device,
        layout,
        &shader,
        wgpu::PrimitiveTopology::PointList,
        "Inner Pick Pipeline",
    )
}

fn create_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    shader: &wgpu::ShaderModule,
    topology: wgpu::PrimitiveTopology,
    label: &str,
) -> wgpu::RenderPipeline {
    let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some(label),
        bind_group_layouts: &[layout],
        push_constant_ranges: &[],
    });

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(label),
        layout: Some(&pipeline_layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some("vs_main"),
            buffers: &[],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format: crate::PickTarget::COLOR_FORMAT,
                blend: None, // No blending for pick buffer
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        primitive: wgpu::PrimitiveState {
            topology,
            // Pick passes draw non-indexed, so no strip index format.
            ..wgpu::PrimitiveState::default()
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: crate::PickTarget::DEPTH_FORMAT,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
        cache: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pick_uniforms_are_pod_sized() {
        assert_eq!(std::mem::size_of::<PickUniforms>(), 16);
        assert_eq!(std::mem::size_of::<PickCameraUniforms>(), 64);
    }

    #[test]
    fn strip_modes_map_to_strip_topologies() {
        assert_eq!(
            native_topology(DrawMode::TriangleStrip),
            wgpu::PrimitiveTopology::TriangleStrip
        );
        assert_eq!(
            native_topology(DrawMode::Quads),
            wgpu::PrimitiveTopology::TriangleList
        );
        assert_eq!(
            native_topology(DrawMode::Points),
            wgpu::PrimitiveTopology::PointList
        );
    }
}
