//! The offscreen pick attachment and its readback path.
//!
//! Picking never draws to the visible swapchain: IDs are encoded into a
//! dedicated `Rgba8Unorm` attachment with its own depth buffer, and a single
//! texel is copied out through a small staging buffer after the draw. The
//! attachment clears to white so a background pixel decodes to the no-hit
//! sentinel.

use chromapick_core::{color_to_index, NO_HIT};
use log::debug;

use crate::error::{RenderError, RenderResult};

/// Offscreen render target for pick passes plus the staging buffer used to
/// read one texel back.
pub struct PickTarget {
    texture: wgpu::Texture,
    texture_view: wgpu::TextureView,
    depth_texture: wgpu::Texture,
    depth_view: wgpu::TextureView,
    staging_buffer: wgpu::Buffer,
    width: u32,
    height: u32,
}

impl PickTarget {
    /// Color format of the pick attachment.
    pub const COLOR_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8Unorm;
    /// Depth format of the pick attachment.
    pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth24Plus;

    /// Creates a pick target sized to the viewport.
    pub fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let (texture, texture_view) = Self::create_color(device, width, height);
        let (depth_texture, depth_view) = Self::create_depth(device, width, height);

        // Staging buffer for single pixel readback (4 bytes RGBA). Buffer
        // size must be aligned to COPY_BYTES_PER_ROW_ALIGNMENT (256).
        let staging_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Pick Staging Buffer"),
            size: 256,
            usage: wgpu::BufferUsages::COPY_DST | wgpu::BufferUsages::MAP_READ,
            mapped_at_creation: false,
        });

        Self {
            texture,
            texture_view,
            depth_texture,
            depth_view,
            staging_buffer,
            width,
            height,
        }
    }

    fn create_color(
        device: &wgpu::Device,
        width: u32,
        height: u32,
    ) -> (wgpu::Texture, wgpu::TextureView) {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Pick Texture"),
            size: wgpu::Extent3d {
                width: width.max(1),
                height: height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: Self::COLOR_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::COPY_SRC,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        (texture, view)
    }

    fn create_depth(
        device: &wgpu::Device,
        width: u32,
        height: u32,
    ) -> (wgpu::Texture, wgpu::TextureView) {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Pick Depth Texture"),
            size: wgpu::Extent3d {
                width: width.max(1),
                height: height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: Self::DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        (texture, view)
    }

    /// Recreates the attachments when the viewport size changes.
    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        if (width, height) == (self.width, self.height) {
            return;
        }
        let (texture, texture_view) = Self::create_color(device, width, height);
        let (depth_texture, depth_view) = Self::create_depth(device, width, height);
        self.texture = texture;
        self.texture_view = texture_view;
        self.depth_texture = depth_texture;
        self.depth_view = depth_view;
        self.width = width;
        self.height = height;
    }

    /// Current target extent in pixels.
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// The color attachment view, for renderers that build their own pass.
    pub fn color_view(&self) -> &wgpu::TextureView {
        &self.texture_view
    }

    /// The depth attachment view.
    pub fn depth_view(&self) -> &wgpu::TextureView {
        &self.depth_view
    }

    /// Begins a pick render pass, clearing color to the no-hit background
    /// and depth to the far plane.
    ///
    /// The caller renders its pick geometry into the returned pass and drops
    /// it to finish; the encoder submit is the caller's, keeping the bind /
    /// unbind symmetric around one draw.
    pub fn begin_pass<'a>(&'a self, encoder: &'a mut wgpu::CommandEncoder) -> wgpu::RenderPass<'a> {
        encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Pick Render Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &self.texture_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    // White clears to the no-hit sentinel.
                    load: wgpu::LoadOp::Clear(wgpu::Color::WHITE),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: &self.depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            ..Default::default()
        })
    }

    /// Reads the pick ID at a bottom-left-origin pixel coordinate.
    ///
    /// Issues one texel copy and blocks until the staging buffer maps; a
    /// pixel readback is inherently a GPU synchronization point. Coordinates
    /// outside the target decode to [`NO_HIT`] rather than erroring, and the
    /// staging buffer is unmapped before return on every path.
    pub fn read_id(&self, device: &wgpu::Device, queue: &wgpu::Queue, x: u32, y: u32) -> RenderResult<u32> {
        if self.width == 0 || self.height == 0 {
            return Err(RenderError::TargetUninitialized);
        }
        if x >= self.width || y >= self.height {
            return Ok(NO_HIT);
        }
        // Queries arrive bottom-left origin; texture rows start at the top.
        let ty = self.height - 1 - y;

        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Pick Readback Encoder"),
        });
        encoder.copy_texture_to_buffer(
            wgpu::TexelCopyTextureInfo {
                texture: &self.texture,
                mip_level: 0,
                origin: wgpu::Origin3d { x, y: ty, z: 0 },
                aspect: wgpu::TextureAspect::All,
            },
            wgpu::TexelCopyBufferInfo {
                buffer: &self.staging_buffer,
                layout: wgpu::TexelCopyBufferLayout {
                    offset: 0,
                    bytes_per_row: Some(256),
                    rows_per_image: Some(1),
                },
            },
            wgpu::Extent3d {
                width: 1,
                height: 1,
                depth_or_array_layers: 1,
            },
        );
        queue.submit(std::iter::once(encoder.finish()));

        let buffer_slice = self.staging_buffer.slice(..4);
        let (tx, rx) = std::sync::mpsc::channel();
        buffer_slice.map_async(wgpu::MapMode::Read, move |result| {
            let _ = tx.send(result);
        });

        let _ = device.poll(wgpu::PollType::Wait);
        match rx.recv() {
            Ok(Ok(())) => {}
            Ok(Err(err)) => return Err(RenderError::ReadbackMapFailed(err)),
            Err(_) => return Err(RenderError::ReadbackInterrupted),
        }

        let data = buffer_slice.get_mapped_range();
        let pixel: [u8; 4] = [data[0], data[1], data[2], data[3]];
        drop(data);
        self.staging_buffer.unmap();

        let id = color_to_index(pixel[0], pixel[1], pixel[2]);
        debug!("pick readback at ({x}, {y}) decoded id {id:#08x}");
        Ok(id)
    }
}
