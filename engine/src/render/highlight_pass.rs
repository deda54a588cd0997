//! Selection Highlight Pass
//!
//! Draws the targeted cell as a wireframe cube plus a translucent fill,
//! pulsing with the targeting alpha. Green marks the placement cell, red
//! the block a click would break. Depth-tested but never depth-written, so
//! the highlight cannot punch holes into the world.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

use crate::render::cube;
use crate::render::gpu_context::GpuContext;
use crate::world::CUBE_HALF;

const HIGHLIGHT_SHADER_SOURCE: &str = include_str!("../../../shaders/highlight.wgsl");

/// Alpha of the translucent fill (the wireframe uses the pulsing alpha).
const FILL_ALPHA: f32 = 50.0 / 255.0;

/// Outline cubes are drawn a sliver larger than blocks to avoid z-fighting.
const OUTLINE_MARGIN: f32 = 0.01;

/// Uniforms for one highlight draw (matches highlight.wgsl `Uniforms`).
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
struct HighlightUniforms {
    view_proj: [[f32; 4]; 4],
    model: [[f32; 4]; 4],
    color: [f32; 4],
}

static_assertions::assert_eq_size!(HighlightUniforms, [u8; 144]);

/// Wireframe + translucent fill highlight for the targeted cell.
pub struct HighlightPass {
    fill_pipeline: wgpu::RenderPipeline,
    wire_pipeline: wgpu::RenderPipeline,
    fill_uniforms: wgpu::Buffer,
    wire_uniforms: wgpu::Buffer,
    fill_bind_group: wgpu::BindGroup,
    wire_bind_group: wgpu::BindGroup,
    fill_vertices: wgpu::Buffer,
    fill_indices: wgpu::Buffer,
    fill_index_count: u32,
    wire_vertices: wgpu::Buffer,
    wire_indices: wgpu::Buffer,
    visible: bool,
}

impl HighlightPass {
    pub fn new(gpu: &GpuContext) -> Self {
        let shader = gpu
            .device
            .create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some("Highlight Shader"),
                source: wgpu::ShaderSource::Wgsl(HIGHLIGHT_SHADER_SOURCE.into()),
            });

        let layout = gpu
            .device
            .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Highlight Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        let zero = HighlightUniforms {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            model: Mat4::IDENTITY.to_cols_array_2d(),
            color: [0.0; 4],
        };
        let fill_uniforms = gpu.create_uniform_buffer("Highlight Fill Uniforms", &zero);
        let wire_uniforms = gpu.create_uniform_buffer("Highlight Wire Uniforms", &zero);

        let bind_group = |label, buffer: &wgpu::Buffer| {
            gpu.device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some(label),
                layout: &layout,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: buffer.as_entire_binding(),
                }],
            })
        };
        let fill_bind_group = bind_group("Highlight Fill Bind Group", &fill_uniforms);
        let wire_bind_group = bind_group("Highlight Wire Bind Group", &wire_uniforms);

        let pipeline_layout = gpu
            .device
            .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Highlight Pipeline Layout"),
                bind_group_layouts: &[&layout],
                push_constant_ranges: &[],
            });

        let make_pipeline = |label: &str, topology, cull| {
            gpu.device
                .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                    label: Some(label),
                    layout: Some(&pipeline_layout),
                    vertex: wgpu::VertexState {
                        module: &shader,
                        entry_point: Some("vs_main"),
                        buffers: &[wgpu::VertexBufferLayout {
                            array_stride: 12,
                            step_mode: wgpu::VertexStepMode::Vertex,
                            attributes: &[wgpu::VertexAttribute {
                                format: wgpu::VertexFormat::Float32x3,
                                offset: 0,
                                shader_location: 0,
                            }],
                        }],
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
                        topology,
                        strip_index_format: None,
                        front_face: wgpu::FrontFace::Ccw,
                        cull_mode: cull,
                        polygon_mode: wgpu::PolygonMode::Fill,
                        unclipped_depth: false,
                        conservative: false,
                    },
                    depth_stencil: Some(wgpu::DepthStencilState {
                        format: wgpu::TextureFormat::Depth32Float,
                        depth_write_enabled: false,
                        depth_compare: wgpu::CompareFunction::Less,
                        stencil: wgpu::StencilState::default(),
                        bias: wgpu::DepthBiasState::default(),
                    }),
                    multisample: wgpu::MultisampleState::default(),
                    multiview: None,
                    cache: None,
                })
        };

        let fill_pipeline = make_pipeline(
            "Highlight Fill Pipeline",
            wgpu::PrimitiveTopology::TriangleList,
            Some(wgpu::Face::Back),
        );
        let wire_pipeline = make_pipeline(
            "Highlight Wire Pipeline",
            wgpu::PrimitiveTopology::LineList,
            None,
        );

        // Position-only copies of the cube mesh, slightly inflated
        let fill_positions: Vec<[f32; 3]> = cube::cube_vertices()
            .iter()
            .map(|v| {
                let scale = (CUBE_HALF + OUTLINE_MARGIN) / CUBE_HALF;
                [
                    v.position[0] * scale,
                    v.position[1] * scale,
                    v.position[2] * scale,
                ]
            })
            .collect();
        let fill_index_data = cube::cube_indices();
        let wire_positions = cube::corner_positions(CUBE_HALF + OUTLINE_MARGIN);
        let wire_index_data = cube::edge_indices();

        Self {
            fill_pipeline,
            wire_pipeline,
            fill_vertices: gpu.create_vertex_buffer("Highlight Fill Vertices", &fill_positions),
            fill_indices: gpu.create_index_buffer("Highlight Fill Indices", &fill_index_data),
            fill_index_count: fill_index_data.len() as u32,
            wire_vertices: gpu.create_vertex_buffer("Highlight Wire Vertices", &wire_positions),
            wire_indices: gpu.create_index_buffer("Highlight Wire Indices", &wire_index_data),
            fill_uniforms,
            wire_uniforms,
            fill_bind_group,
            wire_bind_group,
            visible: false,
        }
    }

    /// Position the highlight for this frame, or hide it.
    pub fn prepare(
        &mut self,
        gpu: &GpuContext,
        view_proj: Mat4,
        target: Option<(Vec3, [f32; 3], f32)>,
    ) {
        let Some((center, rgb, alpha)) = target else {
            self.visible = false;
            return;
        };
        self.visible = true;

        let model = Mat4::from_translation(center).to_cols_array_2d();
        let view_proj = view_proj.to_cols_array_2d();

        let wire = HighlightUniforms {
            view_proj,
            model,
            color: [rgb[0], rgb[1], rgb[2], alpha],
        };
        let fill = HighlightUniforms {
            color: [rgb[0], rgb[1], rgb[2], FILL_ALPHA],
            ..wire
        };
        gpu.queue
            .write_buffer(&self.wire_uniforms, 0, bytemuck::bytes_of(&wire));
        gpu.queue
            .write_buffer(&self.fill_uniforms, 0, bytemuck::bytes_of(&fill));
    }

    /// Record the highlight draws (wireframe over fill).
    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        if !self.visible {
            return;
        }
        pass.set_pipeline(&self.fill_pipeline);
        pass.set_bind_group(0, &self.fill_bind_group, &[]);
        pass.set_vertex_buffer(0, self.fill_vertices.slice(..));
        pass.set_index_buffer(self.fill_indices.slice(..), wgpu::IndexFormat::Uint32);
        pass.draw_indexed(0..self.fill_index_count, 0, 0..1);

        pass.set_pipeline(&self.wire_pipeline);
        pass.set_bind_group(0, &self.wire_bind_group, &[]);
        pass.set_vertex_buffer(0, self.wire_vertices.slice(..));
        pass.set_index_buffer(self.wire_indices.slice(..), wgpu::IndexFormat::Uint32);
        pass.draw_indexed(0..24, 0, 0..1);
    }
}
