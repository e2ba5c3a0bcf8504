//! Rendering system with wgpu pipelines and instanced scene drawing.

use bytemuck::{Pod, Zeroable};
use glam::Mat4;
use std::path::Path;
use std::sync::Arc;
use wgpu::util::DeviceExt;

use crate::error::VizError;
use crate::mesh::{Mesh, MeshKind, Vertex};
use crate::scene::Scene;

/// Reflectivity carried in the instance color alpha channel.
const REFLECTOR_REFLECTIVITY: f32 = 0.8;
const REFLECTOR_COLOR: [f32; 3] = [1.0, 1.0, 0.0];

/// Uniform buffer for the scene shader.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Uniforms {
    pub view_proj: [[f32; 4]; 4],
    pub eye: [f32; 4],
    pub light_dir: [f32; 4],
}

/// Uniform buffer for the skybox shader.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct SkyUniforms {
    pub inv_view_proj: [[f32; 4]; 4],
}

/// Per-object instance data (model matrix + color/reflectivity).
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
struct InstanceRaw {
    model: [[f32; 4]; 4],
    color: [f32; 4],
}

/// The six cubemap faces, decoded to RGBA8 (+x, -x, +y, -y, +z, -z).
pub struct CubemapFaces {
    pub size: u32,
    pub faces: [Vec<u8>; 6],
}

impl CubemapFaces {
    /// Single-color 1x1 environment used when no cubemap is supplied.
    pub fn solid(color: [f32; 3]) -> Self {
        let pixel = vec![
            (color[0] * 255.0) as u8,
            (color[1] * 255.0) as u8,
            (color[2] * 255.0) as u8,
            255,
        ];
        Self {
            size: 1,
            faces: std::array::from_fn(|_| pixel.clone()),
        }
    }
}

/// Load the six cubemap face images from a directory
/// (posx/negx/posy/negy/posz/negz, .jpg or .png).
pub fn load_cubemap_faces(dir: &Path) -> Result<CubemapFaces, VizError> {
    const NAMES: [&str; 6] = ["posx", "negx", "posy", "negy", "posz", "negz"];

    let mut size = 0u32;
    let mut faces: Vec<Vec<u8>> = Vec::with_capacity(6);
    for name in NAMES {
        let jpg = dir.join(format!("{name}.jpg"));
        let path = if jpg.exists() {
            jpg
        } else {
            dir.join(format!("{name}.png"))
        };
        let img = image::open(&path)
            .map_err(|source| VizError::Cubemap {
                path: path.clone(),
                source,
            })?
            .to_rgba8();

        if img.width() != img.height() {
            return Err(VizError::Config(format!(
                "cubemap face {} is not square ({}x{})",
                path.display(),
                img.width(),
                img.height()
            )));
        }
        if size == 0 {
            size = img.width();
        } else if img.width() != size {
            return Err(VizError::Config(format!(
                "cubemap face {} size {} differs from {}",
                path.display(),
                img.width(),
                size
            )));
        }
        faces.push(img.into_raw());
    }

    let faces: [Vec<u8>; 6] = faces
        .try_into()
        .unwrap_or_else(|_| unreachable!("exactly six faces pushed"));
    Ok(CubemapFaces { size, faces })
}

/// One draw batch: a mesh plus the instances rendered with it.
struct MeshBatch {
    kind: MeshKind,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    instance_buffer: wgpu::Buffer,
    instance_count: u32,
    /// Indices into `scene.tiles` rendered by this batch.
    tile_indices: Vec<usize>,
}

/// Rendering system managing wgpu device, pipelines, and buffers.
pub struct RenderSystem {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    depth_view: wgpu::TextureView,
    scene_pipeline: wgpu::RenderPipeline,
    sky_pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    sky_uniform_buffer: wgpu::Buffer,
    scene_bind_group: wgpu::BindGroup,
    sky_bind_group: wgpu::BindGroup,
    batches: Vec<MeshBatch>,
    clear_color: wgpu::Color,
}

impl RenderSystem {
    pub async fn new(
        window: Arc<winit::window::Window>,
        scene: &Scene,
        cubemap: CubemapFaces,
    ) -> Result<Self, VizError> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window)
            .map_err(|e| VizError::Graphics(format!("failed to create surface: {e}")))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| VizError::Graphics("no suitable GPU adapter".to_string()))?;

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("Main Device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: Default::default(),
                },
                None,
            )
            .await
            .map_err(|e| VizError::Graphics(format!("failed to request device: {e}")))?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let depth_view = create_depth_view(&device, config.width, config.height);

        // Environment cubemap (real faces or a 1x1 solid background)
        let env_view = create_cubemap_texture(&device, &queue, &cubemap);
        let env_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Environment Sampler"),
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        // Shaders
        let scene_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Scene Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shader.wgsl").into()),
        });
        let sky_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Skybox Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("skybox.wgsl").into()),
        });

        // Uniform buffers and bind groups (scene and sky share a layout)
        let uniforms = Uniforms {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            eye: [0.0; 4],
            light_dir: [-0.3, -1.0, -0.2, 0.0],
        };
        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Uniform Buffer"),
            contents: bytemuck::cast_slice(&[uniforms]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let sky_uniforms = SkyUniforms {
            inv_view_proj: Mat4::IDENTITY.to_cols_array_2d(),
        };
        let sky_uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Sky Uniform Buffer"),
            contents: bytemuck::cast_slice(&[sky_uniforms]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Bind Group Layout"),
                entries: &[
                    wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: None,
                        },
                        count: None,
                    },
                    wgpu::BindGroupLayoutEntry {
                        binding: 1,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Texture {
                            sample_type: wgpu::TextureSampleType::Float { filterable: true },
                            view_dimension: wgpu::TextureViewDimension::Cube,
                            multisampled: false,
                        },
                        count: None,
                    },
                    wgpu::BindGroupLayoutEntry {
                        binding: 2,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                        count: None,
                    },
                ],
            });

        let scene_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Scene Bind Group"),
            layout: &bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&env_view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(&env_sampler),
                },
            ],
        });

        let sky_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Sky Bind Group"),
            layout: &bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: sky_uniform_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&env_view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(&env_sampler),
                },
            ],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let vertex_layout = wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3],
        };
        let instance_layout = wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<InstanceRaw>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &wgpu::vertex_attr_array![
                2 => Float32x4, 3 => Float32x4, 4 => Float32x4, 5 => Float32x4, 6 => Float32x4
            ],
        };

        let scene_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Scene Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &scene_shader,
                entry_point: Some("vs_main"),
                buffers: &[vertex_layout, instance_layout],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &scene_shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: config.format,
                    blend: None,
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

        let sky_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Skybox Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &sky_shader,
                entry_point: Some("vs_main"),
                buffers: &[],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &sky_shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: config.format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: wgpu::TextureFormat::Depth32Float,
                depth_write_enabled: false,
                depth_compare: wgpu::CompareFunction::Always,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        let batches = build_batches(&device, scene);

        let bg = scene.background_color;
        let clear_color = wgpu::Color {
            r: bg[0] as f64,
            g: bg[1] as f64,
            b: bg[2] as f64,
            a: 1.0,
        };

        Ok(Self {
            surface,
            device,
            queue,
            config,
            depth_view,
            scene_pipeline,
            sky_pipeline,
            uniform_buffer,
            sky_uniform_buffer,
            scene_bind_group,
            sky_bind_group,
            batches,
            clear_color,
        })
    }

    /// Reconfigure the surface and depth buffer for a new window size.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
        self.depth_view = create_depth_view(&self.device, width, height);
    }

    pub fn size(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }

    pub fn update_uniforms(&self, uniforms: &Uniforms) {
        self.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::cast_slice(&[*uniforms]));
        let sky = SkyUniforms {
            inv_view_proj: (Mat4::from_cols_array_2d(&uniforms.view_proj))
                .inverse()
                .to_cols_array_2d(),
        };
        self.queue
            .write_buffer(&self.sky_uniform_buffer, 0, bytemuck::cast_slice(&[sky]));
    }

    /// Rewrite per-object instance data from the scene transforms.
    pub fn update_instances(&self, scene: &Scene) {
        for batch in &self.batches {
            let mut instances: Vec<InstanceRaw> = batch
                .tile_indices
                .iter()
                .map(|&i| {
                    let tile = &scene.tiles[i];
                    InstanceRaw {
                        model: tile.transform.matrix().to_cols_array_2d(),
                        color: [tile.color[0], tile.color[1], tile.color[2], 0.0],
                    }
                })
                .collect();

            match batch.kind {
                MeshKind::Plane => {
                    let bg = scene.background_color;
                    instances.push(InstanceRaw {
                        model: Mat4::IDENTITY.to_cols_array_2d(),
                        color: [bg[0] * 0.35, bg[1] * 0.35, bg[2] * 0.35, 0.0],
                    });
                }
                MeshKind::Octahedron => {
                    if let Some(reflector) = &scene.reflector {
                        instances.push(InstanceRaw {
                            model: reflector.transform.matrix().to_cols_array_2d(),
                            color: [
                                REFLECTOR_COLOR[0],
                                REFLECTOR_COLOR[1],
                                REFLECTOR_COLOR[2],
                                REFLECTOR_REFLECTIVITY,
                            ],
                        });
                    }
                }
                _ => {}
            }

            debug_assert_eq!(instances.len() as u32, batch.instance_count);
            self.queue
                .write_buffer(&batch.instance_buffer, 0, bytemuck::cast_slice(&instances));
        }
    }

    pub fn render(&self) -> Result<(), wgpu::SurfaceError> {
        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            // Sky first (no depth write), then the instanced scene.
            render_pass.set_pipeline(&self.sky_pipeline);
            render_pass.set_bind_group(0, &self.sky_bind_group, &[]);
            render_pass.draw(0..3, 0..1);

            render_pass.set_pipeline(&self.scene_pipeline);
            render_pass.set_bind_group(0, &self.scene_bind_group, &[]);
            for batch in &self.batches {
                render_pass.set_vertex_buffer(0, batch.vertex_buffer.slice(..));
                render_pass.set_vertex_buffer(1, batch.instance_buffer.slice(..));
                render_pass
                    .set_index_buffer(batch.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                render_pass.draw_indexed(0..batch.index_count, 0, 0..batch.instance_count);
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}

/// Build one draw batch per mesh kind the scene uses (tiles grouped by
/// kind, plus the floor plane and the optional reflector). The object
/// count is fixed after construction, so instance buffers are sized
/// once.
fn build_batches(device: &wgpu::Device, scene: &Scene) -> Vec<MeshBatch> {
    let mut kinds: Vec<MeshKind> = Vec::new();
    for tile in &scene.tiles {
        if !kinds.contains(&tile.mesh) {
            kinds.push(tile.mesh);
        }
    }
    if !kinds.contains(&MeshKind::Plane) {
        kinds.push(MeshKind::Plane);
    }
    if scene.reflector.is_some() && !kinds.contains(&MeshKind::Octahedron) {
        kinds.push(MeshKind::Octahedron);
    }

    kinds
        .into_iter()
        .map(|kind| {
            let mesh = Mesh::build(kind);
            let tile_indices: Vec<usize> = scene
                .tiles
                .iter()
                .enumerate()
                .filter(|(_, tile)| tile.mesh == kind)
                .map(|(i, _)| i)
                .collect();

            let mut instance_count = tile_indices.len() as u32;
            if kind == MeshKind::Plane {
                instance_count += 1;
            }
            if kind == MeshKind::Octahedron && scene.reflector.is_some() {
                instance_count += 1;
            }

            let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Vertex Buffer"),
                contents: bytemuck::cast_slice(&mesh.vertices),
                usage: wgpu::BufferUsages::VERTEX,
            });
            let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Index Buffer"),
                contents: bytemuck::cast_slice(&mesh.indices),
                usage: wgpu::BufferUsages::INDEX,
            });
            let instance_buffer = device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("Instance Buffer"),
                size: instance_count as u64 * std::mem::size_of::<InstanceRaw>() as u64,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            });

            MeshBatch {
                kind,
                vertex_buffer,
                index_buffer,
                index_count: mesh.indices.len() as u32,
                instance_buffer,
                instance_count,
                tile_indices,
            }
        })
        .collect()
}

fn create_depth_view(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("Depth Texture"),
        size: wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Depth32Float,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    texture.create_view(&wgpu::TextureViewDescriptor::default())
}

fn create_cubemap_texture(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    cubemap: &CubemapFaces,
) -> wgpu::TextureView {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("Environment Cubemap"),
        size: wgpu::Extent3d {
            width: cubemap.size,
            height: cubemap.size,
            depth_or_array_layers: 6,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8UnormSrgb,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });

    for (layer, face) in cubemap.faces.iter().enumerate() {
        queue.write_texture(
            wgpu::ImageCopyTexture {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d {
                    x: 0,
                    y: 0,
                    z: layer as u32,
                },
                aspect: wgpu::TextureAspect::All,
            },
            face,
            wgpu::ImageDataLayout {
                offset: 0,
                bytes_per_row: Some(4 * cubemap.size),
                rows_per_image: Some(cubemap.size),
            },
            wgpu::Extent3d {
                width: cubemap.size,
                height: cubemap.size,
                depth_or_array_layers: 1,
            },
        );
    }

    texture.create_view(&wgpu::TextureViewDescriptor {
        dimension: Some(wgpu::TextureViewDimension::Cube),
        ..Default::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_layout_size() {
        // Matches the vertex attribute layout: 4x vec4 matrix + vec4 color.
        assert_eq!(std::mem::size_of::<InstanceRaw>(), 80);
    }

    #[test]
    fn test_solid_cubemap_faces() {
        let cubemap = CubemapFaces::solid([0.5, 0.25, 1.0]);
        assert_eq!(cubemap.size, 1);
        for face in &cubemap.faces {
            assert_eq!(face.len(), 4);
            assert_eq!(face[3], 255);
        }
    }

    #[test]
    fn test_missing_cubemap_directory_errors() {
        let result = load_cubemap_faces(Path::new("no/such/dir"));
        assert!(matches!(result, Err(VizError::Cubemap { .. })));
    }
}
