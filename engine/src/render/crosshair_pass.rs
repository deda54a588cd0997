//! Crosshair Pass
//!
//! Two short screen-space lines at the center of the viewport. Vertices are
//! produced in the shader from the viewport resolution; the pass only keeps
//! the resolution uniform current.

use bytemuck::{Pod, Zeroable};

use crate::render::gpu_context::GpuContext;

const CROSSHAIR_SHADER_SOURCE: &str = include_str!("../../../shaders/crosshair.wgsl");

/// Uniforms for the crosshair shader (matches crosshair.wgsl `Uniforms`).
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
struct CrosshairUniforms {
    resolution: [f32; 2],
    _pad: [f32; 2],
}

static_assertions::assert_eq_size!(CrosshairUniforms, [u8; 16]);

/// Fixed screen-space crosshair.
pub struct CrosshairPass {
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl CrosshairPass {
    pub fn new(gpu: &GpuContext) -> Self {
        let shader = gpu
            .device
            .create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some("Crosshair Shader"),
                source: wgpu::ShaderSource::Wgsl(CROSSHAIR_SHADER_SOURCE.into()),
            });

        let uniform_buffer = gpu.create_uniform_buffer(
            "Crosshair Uniforms",
            &CrosshairUniforms {
                resolution: [1.0, 1.0],
                _pad: [0.0; 2],
            },
        );

        let layout = gpu
            .device
            .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Crosshair Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        let bind_group = gpu.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Crosshair Bind Group"),
            layout: &layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = gpu
            .device
            .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Crosshair Pipeline Layout"),
                bind_group_layouts: &[&layout],
                push_constant_ranges: &[],
            });

        let pipeline = gpu
            .device
            .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some("Crosshair Pipeline"),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    buffers: &[],
                    compilation_options: Default::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: gpu.format(),
                        blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: Default::default(),
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::LineList,
                    strip_index_format: None,
                    front_face: wgpu::FrontFace::Ccw,
                    cull_mode: None,
                    polygon_mode: wgpu::PolygonMode::Fill,
                    unclipped_depth: false,
                    conservative: false,
                },
                depth_stencil: None,
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
                cache: None,
            });

        Self {
            pipeline,
            uniform_buffer,
            bind_group,
        }
    }

    /// Keep the resolution uniform in sync with the viewport.
    pub fn prepare(&self, gpu: &GpuContext, width: u32, height: u32) {
        let uniforms = CrosshairUniforms {
            resolution: [width as f32, height as f32],
            _pad: [0.0; 2],
        };
        gpu.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));
    }

    /// Record the crosshair draw (4 vertices, 2 lines).
    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &self.bind_group, &[]);
        pass.draw(0..4, 0..1);
    }
}
