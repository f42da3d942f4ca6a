use super::*;
use crate::model::settings::RenderSettings;
use crate::model::source::{ImageSource, ProceduralParams, SourceDescriptor};

fn image_request(width: u32, height: u32, gray: u8) -> RenderRequest {
    RenderRequest {
        source: SourceDescriptor::Image(ImageSource {
            rgba8: [gray, gray, gray, 255].repeat(width as usize * height as usize),
            width,
            height,
        }),
        settings: RenderSettings::default(),
    }
}

fn broken_image_request() -> RenderRequest {
    RenderRequest {
        source: SourceDescriptor::Image(ImageSource {
            rgba8: vec![0; 3],
            width: 2,
            height: 2,
        }),
        settings: RenderSettings::default(),
    }
}

fn new_renderer(viewport_width: u32, viewport_height: u32) -> CompositeRenderer {
    CompositeRenderer::new(
        viewport_width,
        viewport_height,
        CompositeRenderer::DEFAULT_RENDER_SCALE,
        DepthMapBuilder::new(),
    )
    .unwrap()
}

fn has_shaded_pixel(surface: &RenderSurface) -> bool {
    surface.data().chunks_exact(4).any(|px| px[0] < 255)
}

#[test]
fn rejects_out_of_range_render_scale() {
    for scale in [0.0, -0.5, 1.5, f64::NAN] {
        let r = CompositeRenderer::new(100, 100, scale, DepthMapBuilder::new());
        assert!(matches!(r, Err(PenumbraError::RenderingUnavailable(_))));
    }
}

#[test]
fn surface_starts_white_at_the_scaled_size() {
    let renderer = new_renderer(90, 60);
    let surface = renderer.surface();
    assert_eq!((surface.width(), surface.height()), (30, 20));
    assert!(surface.data().iter().all(|&b| b == 255));
}

#[test]
fn fully_lit_source_leaves_the_surface_white() {
    let mut renderer = new_renderer(90, 90);
    renderer.render_frame(&image_request(8, 8, 255)).unwrap();
    assert!(renderer.surface().data().iter().all(|&b| b == 255));

    // Compositing an unshaded surface is a no-op on the page.
    let mut page = vec![180u8; 90 * 90 * 4];
    renderer.composite_multiply_into(&mut page, 90, 90).unwrap();
    assert!(page.iter().all(|&b| b == 180));
}

#[test]
fn occluded_source_darkens_the_surface() {
    let mut renderer = new_renderer(240, 240);
    renderer.render_frame(&image_request(8, 8, 0)).unwrap();
    assert!(has_shaded_pixel(renderer.surface()));

    let mut page = vec![255u8; 240 * 240 * 4];
    renderer.composite_multiply_into(&mut page, 240, 240).unwrap();
    assert!(page.chunks_exact(4).any(|px| px[0] < 255));
}

#[test]
fn procedural_source_renders_slats() {
    let mut renderer = new_renderer(240, 240);
    let request = RenderRequest {
        source: SourceDescriptor::Procedural(ProceduralParams::default()),
        settings: RenderSettings::default(),
    };
    renderer.render_frame(&request).unwrap();
    assert!(has_shaded_pixel(renderer.surface()));
    assert!(renderer.depth_preview().is_some());
}

#[test]
fn broken_source_on_first_frame_is_an_error() {
    let mut renderer = new_renderer(90, 90);
    let err = renderer.render_frame(&broken_image_request()).unwrap_err();
    assert!(matches!(err, PenumbraError::SourceUnavailable(_)));
    assert!(renderer.depth_preview().is_none());
}

#[test]
fn broken_source_after_a_good_frame_keeps_stale_shadows() {
    let mut renderer = new_renderer(120, 120);
    renderer.render_frame(&image_request(8, 8, 0)).unwrap();
    let good = renderer.surface().clone();
    assert!(has_shaded_pixel(&good));

    renderer.render_frame(&broken_image_request()).unwrap();
    assert!(has_shaded_pixel(renderer.surface()));
    assert!(renderer.depth_preview().is_some());
}

#[test]
fn rejected_settings_are_not_replayed_on_resize() {
    let mut renderer = new_renderer(120, 120);
    renderer.render_frame(&image_request(8, 8, 0)).unwrap();

    let mut bad = image_request(8, 8, 0);
    bad.settings.sample_count = 0;
    assert!(matches!(
        renderer.render_frame(&bad),
        Err(PenumbraError::Validation(_))
    ));

    // The retained request is still the last good one.
    renderer.resize(60, 90).unwrap();
    assert!(has_shaded_pixel(renderer.surface()));
}

#[test]
fn resize_reallocates_and_re_renders() {
    let mut renderer = new_renderer(120, 120);
    renderer.render_frame(&image_request(8, 8, 0)).unwrap();

    renderer.resize(60, 90).unwrap();
    let surface = renderer.surface();
    assert_eq!((surface.width(), surface.height()), (20, 30));
    assert!(has_shaded_pixel(surface));
}

#[test]
fn zero_viewport_skips_frames_silently() {
    let mut renderer = new_renderer(0, 0);
    renderer.render_frame(&image_request(4, 4, 0)).unwrap();
    assert!(renderer.surface().is_empty());
}

#[test]
fn dispose_is_terminal() {
    let mut renderer = new_renderer(90, 90);
    renderer.render_frame(&image_request(4, 4, 0)).unwrap();
    renderer.dispose();
    assert!(renderer.is_disposed());
    assert!(renderer.surface().is_empty());
    assert!(renderer.depth_preview().is_none());

    let err = renderer.render_frame(&image_request(4, 4, 0)).unwrap_err();
    assert!(matches!(err, PenumbraError::RenderingUnavailable(_)));
    assert!(matches!(
        renderer.resize(10, 10),
        Err(PenumbraError::RenderingUnavailable(_))
    ));
}

#[test]
fn shadow_pixel_mixes_white_toward_the_tint() {
    let tint = ShadowTint {
        r: 0.5,
        g: 0.5,
        b: 0.5,
    };
    assert_eq!(shadow_pixel(tint, 0.0), [255, 255, 255, 255]);
    assert_eq!(shadow_pixel(tint, 1.0), [128, 128, 128, 255]);
    let half = shadow_pixel(tint, 0.5);
    assert_eq!(half[0], 191);
    assert_eq!(half[3], 255);
}
