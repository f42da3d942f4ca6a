use rayon::prelude::*;

use crate::depth::builder::DepthMapBuilder;
use crate::depth::raster::DepthRaster;
use crate::foundation::error::{PenumbraError, PenumbraResult};
use crate::model::settings::{RenderRequest, ShadowTint};
use crate::render::composite;
use crate::render::surface::RenderSurface;
use crate::sampler::disk::DiskKernel;
use crate::sampler::shade::shade;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RendererState {
    Ready,
    Disposed,
}

/// Owns the render surface and drives one full frame:
/// build depth raster -> shade every pixel -> write the tinted shadow field.
///
/// Explicitly constructed and explicitly disposed by whichever host activates
/// the effect; there is no process-wide instance. The host calls
/// [`CompositeRenderer::render_frame`] again whenever it observes a settings
/// or source change; the core has no subscription mechanism.
pub struct CompositeRenderer {
    builder: DepthMapBuilder,
    render_scale: f64,
    viewport: (u32, u32),
    surface: RenderSurface,
    kernel: Option<DiskKernel>,
    retained_raster: Option<DepthRaster>,
    last_request: Option<RenderRequest>,
    state: RendererState,
}

impl CompositeRenderer {
    /// Default internal-resolution factor. Shading at full device resolution
    /// with ~100 samples per pixel is not real-time-affordable.
    pub const DEFAULT_RENDER_SCALE: f64 = 1.0 / 3.0;

    /// Set up a renderer for a viewport. `render_scale` in `(0, 1]` is the
    /// ratio of internal shading resolution to the viewport.
    ///
    /// Setup failure is fatal for the instance and surfaces here, once,
    /// synchronously; the caller decides whether to run without the effect.
    pub fn new(
        viewport_width: u32,
        viewport_height: u32,
        render_scale: f64,
        builder: DepthMapBuilder,
    ) -> PenumbraResult<Self> {
        if !render_scale.is_finite() || render_scale <= 0.0 || render_scale > 1.0 {
            return Err(PenumbraError::rendering_unavailable(
                "render scale must be in (0, 1]",
            ));
        }
        let (w, h) = scaled_dims(viewport_width, viewport_height, render_scale);
        Ok(Self {
            builder,
            render_scale,
            viewport: (viewport_width, viewport_height),
            surface: RenderSurface::new(w, h),
            kernel: None,
            retained_raster: None,
            last_request: None,
            state: RendererState::Ready,
        })
    }

    /// Render one full frame from the request.
    ///
    /// A failed image source is absorbed: the previously retained raster is
    /// re-shaded (stale shadows, never a blank), and the failure goes to the
    /// log. A zero-sized viewport skips the frame silently. The surface is
    /// swapped in whole, so it never mixes two frames' outputs.
    #[tracing::instrument(skip_all)]
    pub fn render_frame(&mut self, request: &RenderRequest) -> PenumbraResult<()> {
        self.ensure_ready()?;

        if !self.kernel.as_ref().is_some_and(|k| k.matches(&request.settings)) {
            self.kernel = Some(DiskKernel::new(&request.settings)?);
        }
        // Retained only once the settings are known-good, so a later resize
        // never replays a request that was rejected here.
        self.last_request = Some(request.clone());

        let (w, h) = scaled_dims(self.viewport.0, self.viewport.1, self.render_scale);
        if w == 0 || h == 0 {
            tracing::debug!("zero-sized render target, skipping frame");
            return Ok(());
        }

        match self.builder.build(&request.source, &request.settings, w, h) {
            Ok(raster) => self.retained_raster = Some(raster),
            Err(PenumbraError::SourceUnavailable(msg)) => {
                if self.retained_raster.is_none() {
                    return Err(PenumbraError::SourceUnavailable(msg));
                }
                tracing::warn!(error = %msg, "depth source unavailable, keeping previous raster");
            }
            Err(e) => return Err(e),
        }

        let Some(raster) = self.retained_raster.as_ref() else {
            return Ok(());
        };
        let Some(kernel) = self.kernel.as_ref() else {
            return Ok(());
        };

        let tint = request.settings.shadow_tint;
        let row_bytes = w as usize * 4;
        let mut data = vec![255u8; row_bytes * h as usize];
        data.par_chunks_exact_mut(row_bytes)
            .enumerate()
            .for_each(|(y, row)| {
                for x in 0..w {
                    let factor = shade(raster, x, y as u32, kernel);
                    let i = x as usize * 4;
                    row[i..i + 4].copy_from_slice(&shadow_pixel(tint, factor));
                }
            });

        self.surface = RenderSurface::from_parts(w, h, data);
        Ok(())
    }

    /// Reallocate the surface for a new viewport and re-render the retained
    /// request in full. Never patches the previous surface incrementally.
    pub fn resize(&mut self, viewport_width: u32, viewport_height: u32) -> PenumbraResult<()> {
        self.ensure_ready()?;
        self.viewport = (viewport_width, viewport_height);
        let (w, h) = scaled_dims(viewport_width, viewport_height, self.render_scale);
        self.surface = RenderSurface::new(w, h);
        self.retained_raster = None;
        if let Some(request) = self.last_request.clone() {
            self.render_frame(&request)?;
        }
        Ok(())
    }

    /// Release every buffer this renderer owns. Terminal: all later frame
    /// calls fail with [`PenumbraError::RenderingUnavailable`].
    pub fn dispose(&mut self) {
        self.surface = RenderSurface::new(0, 0);
        self.kernel = None;
        self.retained_raster = None;
        self.last_request = None;
        self.state = RendererState::Disposed;
    }

    /// Whether [`CompositeRenderer::dispose`] has been called.
    pub fn is_disposed(&self) -> bool {
        self.state == RendererState::Disposed
    }

    /// The shadow field, sized `viewport * render_scale`, suitable for
    /// multiplicative compositing over page content.
    pub fn surface(&self) -> &RenderSurface {
        &self.surface
    }

    /// Read-only snapshot of the current depth raster for tuning overlays,
    /// if a frame has been built.
    pub fn depth_preview(&self) -> Option<RenderSurface> {
        self.retained_raster
            .as_ref()
            .map(|r| RenderSurface::from_parts(r.width(), r.height(), r.preview_rgba8()))
    }

    /// Multiply the current shadow field over caller-owned page pixels.
    pub fn composite_multiply_into(
        &self,
        page_rgba8: &mut [u8],
        page_width: u32,
        page_height: u32,
    ) -> PenumbraResult<()> {
        composite::multiply_into(page_rgba8, page_width, page_height, &self.surface)
    }

    fn ensure_ready(&self) -> PenumbraResult<()> {
        if self.state == RendererState::Disposed {
            return Err(PenumbraError::rendering_unavailable(
                "renderer has been disposed",
            ));
        }
        Ok(())
    }
}

fn scaled_dims(width: u32, height: u32, scale: f64) -> (u32, u32) {
    (
        (f64::from(width) * scale).round() as u32,
        (f64::from(height) * scale).round() as u32,
    )
}

/// `mix(white, tint, factor)`, opaque.
fn shadow_pixel(tint: ShadowTint, factor: f32) -> [u8; 4] {
    let mix = |c: f32| -> u8 {
        let v = (1.0 - factor) + factor * c;
        (v * 255.0).round().clamp(0.0, 255.0) as u8
    };
    [mix(tint.r), mix(tint.g), mix(tint.b), 255]
}

#[cfg(test)]
#[path = "../../tests/unit/render/compositor.rs"]
mod tests;
