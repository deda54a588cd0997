//! Block Textures
//!
//! The two block face textures (grass and dirt), embedded in the binary,
//! decoded at startup and bound together in a single bind group so the
//! block shader can pick per instance.

use crate::render::gpu_context::GpuContext;

const GRASS_TEXTURE_BYTES: &[u8] = include_bytes!("../../../Assets/textures/grass.png");
const DIRT_TEXTURE_BYTES: &[u8] = include_bytes!("../../../Assets/textures/dirt.png");

/// Both block textures plus their shared sampler, ready to bind.
pub struct BlockTextures {
    pub bind_group_layout: wgpu::BindGroupLayout,
    pub bind_group: wgpu::BindGroup,
}

impl BlockTextures {
    /// Decode and upload the embedded textures.
    ///
    /// The textures ship inside the binary; failing to decode them is a
    /// build defect, not a runtime condition, so this panics with context.
    pub fn new(gpu: &GpuContext) -> Self {
        let grass = upload_png(gpu, "grass", GRASS_TEXTURE_BYTES);
        let dirt = upload_png(gpu, "dirt", DIRT_TEXTURE_BYTES);

        // Nearest filtering keeps the pixel-art texel edges crisp
        let sampler = gpu.device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Block Sampler"),
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::Repeat,
            mag_filter: wgpu::FilterMode::Nearest,
            min_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        let texture_entry = |binding| wgpu::BindGroupLayoutEntry {
            binding,
            visibility: wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Texture {
                sample_type: wgpu::TextureSampleType::Float { filterable: true },
                view_dimension: wgpu::TextureViewDimension::D2,
                multisampled: false,
            },
            count: None,
        };

        let bind_group_layout =
            gpu.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("Block Textures Bind Group Layout"),
                    entries: &[
                        texture_entry(0),
                        texture_entry(1),
                        wgpu::BindGroupLayoutEntry {
                            binding: 2,
                            visibility: wgpu::ShaderStages::FRAGMENT,
                            ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                            count: None,
                        },
                    ],
                });

        let bind_group = gpu.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Block Textures Bind Group"),
            layout: &bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&grass),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&dirt),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(&sampler),
                },
            ],
        });

        Self {
            bind_group_layout,
            bind_group,
        }
    }
}

/// Decode a PNG and upload it as an sRGB texture, returning its view.
fn upload_png(gpu: &GpuContext, name: &str, bytes: &[u8]) -> wgpu::TextureView {
    let img = image::load_from_memory(bytes)
        .unwrap_or_else(|e| panic!("Failed to decode embedded {} texture: {}", name, e))
        .to_rgba8();
    let (width, height) = img.dimensions();

    let texture = gpu.device.create_texture(&wgpu::TextureDescriptor {
        label: Some(&format!("{} Texture", name)),
        size: wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8UnormSrgb,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });

    gpu.queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture: &texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        &img,
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(4 * width),
            rows_per_image: Some(height),
        },
        wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
    );

    texture.create_view(&wgpu::TextureViewDescriptor::default())
}
