//! Block Render Pass
//!
//! Draws every block in the world as one instanced call: the shared cube
//! mesh plus a per-block instance carrying the world offset and material.
//! The instance buffer is rebuilt only when the block collection reports a
//! change.

use bytemuck::{Pod, Zeroable};
use glam::Mat4;

use crate::render::cube;
use crate::render::gpu_context::GpuContext;
use crate::render::texture::BlockTextures;
use crate::world::{BlockMaterial, BlockWorld};

const BLOCK_SHADER_SOURCE: &str = include_str!("../../../shaders/block.wgsl");

/// Scene uniforms for the block shader (matches block.wgsl `Uniforms`).
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct BlockUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub sun_dir: [f32; 3],
    pub ambient: f32,
}

static_assertions::assert_eq_size!(BlockUniforms, [u8; 80]);

impl Default for BlockUniforms {
    fn default() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            sun_dir: [0.5, 0.8, 0.3],
            ambient: 0.35,
        }
    }
}

/// Per-block instance data (world offset + texture selector).
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct BlockInstance {
    pub offset: [f32; 3],
    pub material: u32,
}

static_assertions::assert_eq_size!(BlockInstance, [u8; 16]);

/// Build the instance list for the current world contents.
pub fn block_instances(world: &BlockWorld) -> Vec<BlockInstance> {
    world
        .blocks()
        .iter()
        .map(|&pos| BlockInstance {
            offset: pos.center().to_array(),
            material: BlockMaterial::for_pos(pos).texture_index(),
        })
        .collect()
}

/// Instanced textured-cube pass.
pub struct BlockPass {
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    uniform_bind_group: wgpu::BindGroup,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    instance_buffer: wgpu::Buffer,
    instance_capacity: usize,
    instance_count: u32,
}

impl BlockPass {
    /// Initial instance buffer capacity; grows when the world outgrows it.
    const INITIAL_CAPACITY: usize = 4096;

    pub fn new(gpu: &GpuContext, textures: &BlockTextures) -> Self {
        let shader = gpu
            .device
            .create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some("Block Shader"),
                source: wgpu::ShaderSource::Wgsl(BLOCK_SHADER_SOURCE.into()),
            });

        let uniform_buffer = gpu.create_uniform_buffer("Block Uniforms", &BlockUniforms::default());

        let uniform_layout =
            gpu.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("Block Uniform Bind Group Layout"),
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

        let uniform_bind_group = gpu.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Block Uniform Bind Group"),
            layout: &uniform_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = gpu
            .device
            .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Block Pipeline Layout"),
                bind_group_layouts: &[&uniform_layout, &textures.bind_group_layout],
                push_constant_ranges: &[],
            });

        let pipeline = gpu
            .device
            .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some("Block Pipeline"),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    buffers: &[
                        wgpu::VertexBufferLayout {
                            array_stride: std::mem::size_of::<cube::CubeVertex>() as u64,
                            step_mode: wgpu::VertexStepMode::Vertex,
                            attributes: &[
                                wgpu::VertexAttribute {
                                    format: wgpu::VertexFormat::Float32x3,
                                    offset: 0,
                                    shader_location: 0,
                                },
                                wgpu::VertexAttribute {
                                    format: wgpu::VertexFormat::Float32x3,
                                    offset: 12,
                                    shader_location: 1,
                                },
                                wgpu::VertexAttribute {
                                    format: wgpu::VertexFormat::Float32x2,
                                    offset: 24,
                                    shader_location: 2,
                                },
                            ],
                        },
                        wgpu::VertexBufferLayout {
                            array_stride: std::mem::size_of::<BlockInstance>() as u64,
                            step_mode: wgpu::VertexStepMode::Instance,
                            attributes: &[
                                wgpu::VertexAttribute {
                                    format: wgpu::VertexFormat::Float32x3,
                                    offset: 0,
                                    shader_location: 3,
                                },
                                wgpu::VertexAttribute {
                                    format: wgpu::VertexFormat::Uint32,
                                    offset: 12,
                                    shader_location: 4,
                                },
                            ],
                        },
                    ],
                    compilation_options: Default::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: gpu.format(),
                        blend: Some(wgpu::BlendState::REPLACE),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: Default::default(),
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    strip_index_format: None,
                    front_face: wgpu::FrontFace::Ccw,
                    cull_mode: Some(wgpu::Face::Back),
                    polygon_mode: wgpu::PolygonMode::Fill,
                    unclipped_depth: false,
                    conservative: false,
                },
                depth_stencil: Some(wgpu::DepthStencilState {
                    format: wgpu::TextureFormat::Depth32Float,
                    depth_write_enabled: true,
                    depth_compare: wgpu::CompareFunction::Less,
                    stencil: wgpu::StencilState::default(),
                    bias: wgpu::DepthBiasState::default(),
                }),
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
                cache: None,
            });

        let vertices = cube::cube_vertices();
        let indices = cube::cube_indices();
        let vertex_buffer = gpu.create_vertex_buffer("Block Cube Vertices", &vertices);
        let index_buffer = gpu.create_index_buffer("Block Cube Indices", &indices);

        let instance_buffer = gpu.create_dynamic_vertex_buffer(
            "Block Instances",
            (Self::INITIAL_CAPACITY * std::mem::size_of::<BlockInstance>()) as u64,
        );

        Self {
            pipeline,
            uniform_buffer,
            uniform_bind_group,
            vertex_buffer,
            index_buffer,
            index_count: indices.len() as u32,
            instance_buffer,
            instance_capacity: Self::INITIAL_CAPACITY,
            instance_count: 0,
        }
    }

    /// Upload scene uniforms and refresh the instance buffer if the world
    /// changed.
    pub fn prepare(&mut self, gpu: &GpuContext, world: &mut BlockWorld, view_proj: Mat4) {
        let uniforms = BlockUniforms {
            view_proj: view_proj.to_cols_array_2d(),
            ..Default::default()
        };
        gpu.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));

        if world.needs_upload() {
            let instances = block_instances(world);
            if instances.len() > self.instance_capacity {
                self.instance_capacity = instances.len().next_power_of_two();
                self.instance_buffer = gpu.create_dynamic_vertex_buffer(
                    "Block Instances",
                    (self.instance_capacity * std::mem::size_of::<BlockInstance>()) as u64,
                );
            }
            gpu.queue
                .write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(&instances));
            self.instance_count = instances.len() as u32;
            world.clear_dirty();
        }
    }

    /// Record the instanced draw.
    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>, textures: &BlockTextures) {
        if self.instance_count == 0 {
            return;
        }
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &self.uniform_bind_group, &[]);
        pass.set_bind_group(1, &textures.bind_group, &[]);
        pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        pass.set_vertex_buffer(1, self.instance_buffer.slice(..));
        pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        pass.draw_indexed(0..self.index_count, 0, 0..self.instance_count);
    }
}
