//! Rendering Module
//!
//! The wgpu presentation layer. Consumes simulation state, never mutates
//! it (apart from acknowledging the world's dirty flag when the instance
//! buffer is rebuilt). One render pass per frame: sky clear, instanced
//! blocks, selection highlight, crosshair.

pub mod block_pass;
pub mod crosshair_pass;
pub mod cube;
pub mod gpu_context;
pub mod highlight_pass;
pub mod texture;

use std::sync::Arc;

use winit::window::Window;

use crate::sim::Simulation;
use crate::world::InteractionMode;

pub use block_pass::{block_instances, BlockInstance, BlockPass, BlockUniforms};
pub use gpu_context::GpuContext;
pub use texture::BlockTextures;

/// Clear color: daytime sky blue.
const SKY_COLOR: wgpu::Color = wgpu::Color {
    r: 0.35,
    g: 0.65,
    b: 0.95,
    a: 1.0,
};

/// Highlight colors for the two interaction modes.
const PLACE_COLOR: [f32; 3] = [0.0, 0.9, 0.2];
const REMOVE_COLOR: [f32; 3] = [0.9, 0.15, 0.2];

/// The complete frame renderer.
pub struct Renderer {
    gpu: GpuContext,
    textures: BlockTextures,
    block_pass: BlockPass,
    highlight_pass: highlight_pass::HighlightPass,
    crosshair_pass: crosshair_pass::CrosshairPass,
}

impl Renderer {
    /// Set up the GPU and all passes for a window.
    pub fn new(window: Arc<Window>, vsync: bool) -> Self {
        let gpu = GpuContext::new(window, vsync);
        let textures = BlockTextures::new(&gpu);
        let block_pass = BlockPass::new(&gpu, &textures);
        let highlight_pass = highlight_pass::HighlightPass::new(&gpu);
        let crosshair_pass = crosshair_pass::CrosshairPass::new(&gpu);

        Self {
            gpu,
            textures,
            block_pass,
            highlight_pass,
            crosshair_pass,
        }
    }

    /// Handle a window resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.gpu.resize(width, height);
    }

    /// Current surface dimensions.
    pub fn dimensions(&self) -> (u32, u32) {
        self.gpu.dimensions()
    }

    /// Render one frame of the simulation.
    pub fn render(&mut self, sim: &mut Simulation) -> Result<(), wgpu::SurfaceError> {
        let view_proj = sim.camera.view_proj();

        self.block_pass.prepare(&self.gpu, &mut sim.world, view_proj);

        // Highlight the cell the mode would act on
        let target = match sim.mode {
            InteractionMode::Place => sim
                .targeting
                .place_cell
                .map(|cell| (cell.center(), PLACE_COLOR, sim.targeting.highlight_alpha())),
            InteractionMode::Remove => sim
                .targeting
                .hit_block
                .map(|hit| (hit.center(), REMOVE_COLOR, sim.targeting.highlight_alpha())),
        };
        self.highlight_pass.prepare(&self.gpu, view_proj, target);

        let (width, height) = self.gpu.dimensions();
        self.crosshair_pass.prepare(&self.gpu, width, height);

        let output = self.gpu.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Frame Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(SKY_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.gpu.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            self.block_pass.draw(&mut pass, &self.textures);
            self.highlight_pass.draw(&mut pass);
            self.crosshair_pass.draw(&mut pass);
        }

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}
