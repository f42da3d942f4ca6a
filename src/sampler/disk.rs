use kurbo::Vec2;

use crate::foundation::error::PenumbraResult;
use crate::model::settings::RenderSettings;

/// The golden angle, `pi * (3 - sqrt(5))`, in radians.
pub const GOLDEN_ANGLE: f64 = 2.399_963_229_728_653;

/// One precomputed disk sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DiskSample {
    /// Unrotated offset from the shaded pixel, in raster pixels.
    pub offset: Vec2,
    /// Distance of the offset from the pixel (the spiral radius).
    pub dist: f64,
}

/// The sampling-relevant slice of [`RenderSettings`], used to decide when a
/// cached kernel can be reused.
#[derive(Clone, Copy, Debug, PartialEq)]
struct SamplingParams {
    sample_count: u32,
    disk_radius: f32,
    min_shadow_size: f32,
    max_shadow_size: f32,
    max_shadow_opacity: f32,
    near_influence: f32,
    far_influence: f32,
}

impl From<&RenderSettings> for SamplingParams {
    fn from(s: &RenderSettings) -> Self {
        Self {
            sample_count: s.sample_count,
            disk_radius: s.disk_radius,
            min_shadow_size: s.min_shadow_size,
            max_shadow_size: s.max_shadow_size,
            max_shadow_opacity: s.max_shadow_opacity,
            near_influence: s.near_influence,
            far_influence: s.far_influence,
        }
    }
}

/// A compiled evaluation unit: the Vogel (golden-angle spiral) sample set for
/// one settings value, plus the shading constants baked alongside it.
///
/// For sample index `i` in `1..=N`, radius is `disk_radius * sqrt(i / N)` and
/// angle is `i * GOLDEN_ANGLE`. Consecutive samples are maximally angularly
/// separated, which gives near-uniform disk coverage at low sample counts
/// with no banding. Rebuilt only when the sampling-relevant settings change.
#[derive(Clone, Debug)]
pub struct DiskKernel {
    params: SamplingParams,
    samples: Vec<DiskSample>,
}

impl DiskKernel {
    /// Compile a kernel from validated settings.
    pub fn new(settings: &RenderSettings) -> PenumbraResult<Self> {
        settings.validate()?;
        let params = SamplingParams::from(settings);

        let n = f64::from(params.sample_count);
        let radius = f64::from(params.disk_radius);
        let mut samples = Vec::with_capacity(params.sample_count as usize);
        for i in 1..=params.sample_count {
            let r = radius * (f64::from(i) / n).sqrt();
            let theta = f64::from(i) * GOLDEN_ANGLE;
            samples.push(DiskSample {
                offset: Vec2::new(r * theta.cos(), r * theta.sin()),
                dist: r,
            });
        }
        Ok(Self { params, samples })
    }

    /// Whether this kernel was compiled from sampling-equivalent settings.
    pub fn matches(&self, settings: &RenderSettings) -> bool {
        self.params == SamplingParams::from(settings)
    }

    /// The precomputed spiral.
    pub fn samples(&self) -> &[DiskSample] {
        &self.samples
    }

    pub(crate) fn sample_count(&self) -> u32 {
        self.params.sample_count
    }

    pub(crate) fn min_shadow_size(&self) -> f32 {
        self.params.min_shadow_size
    }

    pub(crate) fn max_shadow_size(&self) -> f32 {
        self.params.max_shadow_size
    }

    pub(crate) fn max_shadow_opacity(&self) -> f32 {
        self.params.max_shadow_opacity
    }

    pub(crate) fn near_influence(&self) -> f32 {
        self.params.near_influence
    }

    pub(crate) fn far_influence(&self) -> f32 {
        self.params.far_influence
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sampler/disk.rs"]
mod tests;
