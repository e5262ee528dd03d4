use crate::camera;
use crate::constants::CLEAR_COLOR;
use crate::core::{CameraPose, FrameVertices, MeshCapacity, Scene, SceneMesh};
use web_sys as web;

mod helpers;
mod lines;
mod surfaces;
use helpers::{create_globals, Globals, GlobalsBinding};
use lines::{create_line_resources, LineResources};
use surfaces::{create_surface_resources, SurfaceResources};

/// WebGPU state for the background canvas: glow shells, fill shells, then
/// lines, all in one pass per frame.
pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    globals: GlobalsBinding,
    lines: LineResources,
    shells: SurfaceResources,
    mesh: SceneMesh,
    // CPU-side staging for world-space vertices, reused every frame
    vertices: FrameVertices,
    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        mesh: SceneMesh,
        capacity: MeshCapacity,
    ) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let globals = create_globals(&device);
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("color_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::COLOR_WGSL.into()),
        });
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("color_pl"),
            bind_group_layouts: &[&globals.layout],
            push_constant_ranges: &[],
        });
        let lines = create_line_resources(&device, &layout, &shader, format, capacity.lines);
        let shells =
            create_surface_resources(&device, &layout, &shader, format, capacity.surfaces);
        log::info!(
            "[gpu] ready {}x{} format={:?} capacity={:?}",
            width,
            height,
            format,
            capacity
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            globals,
            lines,
            shells,
            mesh,
            vertices: FrameVertices::default(),
            width,
            height,
            clear_color: wgpu::Color {
                r: CLEAR_COLOR[0],
                g: CLEAR_COLOR[1],
                b: CLEAR_COLOR[2],
                a: CLEAR_COLOR[3],
            },
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    pub fn render(&mut self, scene: &Scene, pose: &CameraPose) -> Result<(), wgpu::SurfaceError> {
        self.mesh.build(scene, &mut self.vertices);
        let FrameVertices { lines, glow, fill } = &self.vertices;
        let (line_count, glow_count) = (lines.len() as u32, glow.len() as u32);
        let fill_count = fill.len() as u32;
        self.lines.vertices.ensure_capacity(&self.device, lines.len());
        self.shells
            .vertices
            .ensure_capacity(&self.device, glow.len() + fill.len());

        let aspect = self.width as f32 / self.height.max(1) as f32;
        let globals = Globals {
            view_proj: camera::view_proj(pose, aspect).to_cols_array_2d(),
        };
        self.queue
            .write_buffer(&self.globals.buffer, 0, bytemuck::bytes_of(&globals));
        for (buffer, offset, data) in [
            (&self.lines.vertices.buffer, 0, lines),
            (&self.shells.vertices.buffer, 0, glow),
            (
                &self.shells.vertices.buffer,
                std::mem::size_of_val(glow.as_slice()) as u64,
                fill,
            ),
        ] {
            if !data.is_empty() {
                self.queue
                    .write_buffer(buffer, offset, bytemuck::cast_slice(data));
            }
        }

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.globals.bind_group, &[]);
            if glow_count + fill_count > 0 {
                rpass.set_vertex_buffer(0, self.shells.vertices.buffer.slice(..));
                rpass.set_pipeline(&self.shells.glow_pipeline);
                rpass.draw(0..glow_count, 0..1);
                rpass.set_pipeline(&self.shells.fill_pipeline);
                rpass.draw(glow_count..glow_count + fill_count, 0..1);
            }
            rpass.set_pipeline(&self.lines.pipeline);
            rpass.set_vertex_buffer(0, self.lines.vertices.buffer.slice(..));
            rpass.draw(0..line_count, 0..1);
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
