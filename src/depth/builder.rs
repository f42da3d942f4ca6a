use std::f64::consts::FRAC_PI_2;

use kurbo::{Affine, Point, Vec2};

use crate::depth::raster::{DepthRaster, DepthTexel};
use crate::depth::resample::resample_cover;
use crate::foundation::error::PenumbraResult;
use crate::model::clock::{SystemClock, TimeSource, diurnal_angle_degrees};
use crate::model::settings::RenderSettings;
use crate::model::source::{AngleMode, FrameParams, ImageSource, ProceduralParams, SourceDescriptor};

/// Numeric floor for stored depths. Occupancy is a separate flag, so a texel
/// at the floor is still "fully deep enough to exist" rather than fully lit.
const DEPTH_FLOOR: f64 = 1.0 / 255.0;

/// Turns a [`SourceDescriptor`] into a [`DepthRaster`].
///
/// Leaf component of the pipeline: no rendering state, no IO. Wall-clock
/// access for [`AngleMode::Diurnal`] goes through the injected [`TimeSource`].
pub struct DepthMapBuilder {
    clock: Box<dyn TimeSource>,
}

impl Default for DepthMapBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DepthMapBuilder {
    /// Builder on the system clock.
    pub fn new() -> Self {
        Self::with_clock(Box::new(SystemClock))
    }

    /// Builder on a caller-supplied time source.
    pub fn with_clock(clock: Box<dyn TimeSource>) -> Self {
        Self { clock }
    }

    /// Build a depth raster of the given dimensions.
    ///
    /// A zero-sized target yields an empty raster, not an error. A malformed
    /// image source fails with [`crate::PenumbraError::SourceUnavailable`];
    /// the caller should retain its previous raster rather than blank the
    /// display.
    #[tracing::instrument(skip(self, source, settings))]
    pub fn build(
        &self,
        source: &SourceDescriptor,
        settings: &RenderSettings,
        width: u32,
        height: u32,
    ) -> PenumbraResult<DepthRaster> {
        if width == 0 || height == 0 {
            return Ok(DepthRaster::new(width, height));
        }
        match source {
            SourceDescriptor::Procedural(params) => Ok(self.build_procedural(params, width, height)),
            SourceDescriptor::Image(img) => build_image(img, settings, width, height),
        }
    }

    fn build_procedural(&self, params: &ProceduralParams, width: u32, height: u32) -> DepthRaster {
        let angle_deg = match params.angle {
            AngleMode::Fixed { degrees } => degrees,
            AngleMode::Diurnal {
                base_degrees,
                swing_degrees,
            } => diurnal_angle_degrees(self.clock.hour_of_day(), base_degrees, swing_degrees),
        };
        let angle = angle_deg.to_radians();

        let center = Vec2::new(f64::from(width) / 2.0, f64::from(height) / 2.0);
        // The plane is conceptually drawn rotated about the raster center;
        // texels are mapped back into slat space with the inverse transform.
        let to_slats = Affine::rotate(-angle) * Affine::translate(-center);
        let to_vertical = Affine::rotate(-(angle + FRAC_PI_2)) * Affine::translate(-center);

        let spacing = f64::from(params.slat_spacing_px.max(1.0));
        let slat_width = f64::from(params.slat_width_px);
        let h = f64::from(height);

        let mut texels = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                let p = Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
                let sp = to_slats * p;

                let mut texel = DepthTexel::default();

                let band = (sp.y / spacing).floor();
                if sp.y - band * spacing < slat_width {
                    texel = DepthTexel {
                        depth: band_depth(band, params.depth_base, params.depth_variation),
                        occupied: true,
                    };
                }

                // Frame bands are painted after the slats and win overlaps.
                if let Some(frame) = &params.frame
                    && let Some(ft) = frame_texel(frame, sp.y, (to_vertical * p).y, h)
                {
                    texel = ft;
                }

                texels.push(texel);
            }
        }
        DepthRaster::from_texels(width, height, texels)
    }
}

/// Deterministic pseudo-depth for slat band `i`: a fixed low-frequency pair
/// of sinusoids, so variation looks organic without any randomness.
fn band_depth(band: f64, base: f32, variation: f32) -> f32 {
    let d = f64::from(base)
        + (band * 1.37).sin() * f64::from(variation)
        + (band * 0.73).cos() * f64::from(variation) * 0.6;
    d.clamp(DEPTH_FLOOR, 1.0) as f32
}

fn frame_texel(frame: &FrameParams, slat_y: f64, vertical_y: f64, raster_h: f64) -> Option<DepthTexel> {
    let thickness = f64::from(frame.thickness_px);
    let in_crossbar = |bar_y: f32| -> bool {
        let start = raster_h * f64::from(bar_y);
        slat_y >= start && slat_y < start + thickness
    };

    let hit = in_crossbar(frame.crossbar1_y)
        || in_crossbar(frame.crossbar2_y)
        || (frame.vertical_bar && (0.0..thickness).contains(&vertical_y));
    hit.then(|| DepthTexel {
        depth: f64::from(frame.depth).clamp(DEPTH_FLOOR, 1.0) as f32,
        occupied: true,
    })
}

fn build_image(
    img: &ImageSource,
    settings: &RenderSettings,
    width: u32,
    height: u32,
) -> PenumbraResult<DepthRaster> {
    img.validate()?;
    let rgba = resample_cover(img, width, height);

    let threshold = f64::from(settings.threshold);
    let contrast = f64::from(settings.contrast);
    let depth_scale = f64::from(settings.depth_scale);

    let mut texels = Vec::with_capacity(width as usize * height as usize);
    for px in rgba.chunks_exact(4) {
        let mut lum = 0.299 * f64::from(px[0]) + 0.587 * f64::from(px[1]) + 0.114 * f64::from(px[2]);

        // Contrast about mid-gray, then the final [0, 255] clamp. No further
        // normalization when contrast and invert are pushed together.
        lum = ((lum / 255.0 - 0.5) * contrast + 0.5) * 255.0;
        lum = lum.clamp(0.0, 255.0);
        if settings.invert {
            lum = 255.0 - lum;
        }

        if lum >= threshold {
            // Light passes through. The boundary itself is lit.
            texels.push(DepthTexel::default());
        } else {
            // Closer to the threshold yields shallower (smaller, sharper)
            // objects; darker texels yield deeper (larger, softer) ones.
            let depth = depth_scale * (1.0 - lum / threshold.max(1.0));
            texels.push(DepthTexel {
                depth: depth.clamp(DEPTH_FLOOR, 1.0) as f32,
                occupied: true,
            });
        }
    }
    Ok(DepthRaster::from_texels(width, height, texels))
}

#[cfg(test)]
#[path = "../../tests/unit/depth/builder.rs"]
mod tests;
