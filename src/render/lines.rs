use super::helpers::{make_color_pipeline, VertexBuffer};

/// Stars and shape wireframes as one line list.
pub(crate) struct LineResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) vertices: VertexBuffer,
}

pub(crate) fn create_line_resources(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    color_format: wgpu::TextureFormat,
    vertex_capacity: usize,
) -> LineResources {
    LineResources {
        pipeline: make_color_pipeline(
            device,
            layout,
            shader,
            color_format,
            wgpu::PrimitiveTopology::LineList,
            None,
            "lines_pipeline",
        ),
        vertices: VertexBuffer::new(device, "line_vertices", vertex_capacity),
    }
}
