use penumbra::{
    CompositeRenderer, DepthMapBuilder, ProceduralParams, RenderRequest, RenderSettings,
    SourceDescriptor,
};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let (width, height) = (1280u32, 720u32);
    let mut renderer = CompositeRenderer::new(
        width,
        height,
        CompositeRenderer::DEFAULT_RENDER_SCALE,
        DepthMapBuilder::new(),
    )?;

    renderer.render_frame(&RenderRequest {
        source: SourceDescriptor::Procedural(ProceduralParams::default()),
        settings: RenderSettings::default(),
    })?;

    let mut page = vec![255u8; width as usize * height as usize * 4];
    renderer.composite_multiply_into(&mut page, width, height)?;

    let surface = renderer.surface();
    println!(
        "shadow field {}x{} composited over a {width}x{height} page",
        surface.width(),
        surface.height()
    );

    let img = image::RgbaImage::from_raw(width, height, page)
        .ok_or_else(|| anyhow::anyhow!("page buffer size mismatch"))?;
    img.save("penumbra_playground.png")?;
    println!("wrote penumbra_playground.png");

    Ok(())
}
