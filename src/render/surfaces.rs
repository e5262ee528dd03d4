use super::helpers::{make_color_pipeline, VertexBuffer};

/// Translucent shells around each shape.
///
/// Glow and fill share one vertex buffer: glow vertices first, fill after.
/// The glow pipeline culls front faces so only the inside of the outer shell
/// shows; the fill pipeline culls back faces.
pub(crate) struct SurfaceResources {
    pub(crate) glow_pipeline: wgpu::RenderPipeline,
    pub(crate) fill_pipeline: wgpu::RenderPipeline,
    pub(crate) vertices: VertexBuffer,
}

pub(crate) fn create_surface_resources(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    color_format: wgpu::TextureFormat,
    vertex_capacity: usize,
) -> SurfaceResources {
    let pipeline = |cull: wgpu::Face, label: &'static str| {
        make_color_pipeline(
            device,
            layout,
            shader,
            color_format,
            wgpu::PrimitiveTopology::TriangleList,
            Some(cull),
            label,
        )
    };
    SurfaceResources {
        glow_pipeline: pipeline(wgpu::Face::Front, "glow_pipeline"),
        fill_pipeline: pipeline(wgpu::Face::Back, "fill_pipeline"),
        vertices: VertexBuffer::new(device, "surface_vertices", vertex_capacity),
    }
}
