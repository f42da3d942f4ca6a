use std::f32::consts::PI;

use crate::depth::raster::DepthRaster;
use crate::foundation::math::{hash01, lerp_f32};
use crate::sampler::disk::DiskKernel;

/// Shadow factor for one output pixel, in `[0, max_shadow_opacity]`.
///
/// Gathers the kernel's disk samples around `(x, y)`, rotated as a whole by a
/// deterministic per-pixel angle so residual spiral structure breaks up into
/// high-frequency noise instead of visible rings. For each occupied sample
/// texel the occluder's effective shadow size is
/// `min + depth * (max - min)`; a sample whose distance falls inside half
/// that size contributes `lerp(near_influence, far_influence, size / max)`:
/// shallow occluders hit sharp and strong, deep ones soft and diffuse.
///
/// Pure and stateless: pixels can be shaded in any order or in parallel.
pub fn shade(raster: &DepthRaster, x: u32, y: u32, kernel: &DiskKernel) -> f32 {
    let rotation = f64::from(hash01(x, y) * PI);
    let (sin_a, cos_a) = rotation.sin_cos();

    let min_size = kernel.min_shadow_size();
    let size_range = kernel.max_shadow_size() - min_size;

    let mut influence = 0.0f32;
    for s in kernel.samples() {
        let rx = cos_a * s.offset.x - sin_a * s.offset.y;
        let ry = sin_a * s.offset.x + cos_a * s.offset.y;
        let texel = raster.get(
            i64::from(x) + rx.round() as i64,
            i64::from(y) + ry.round() as i64,
        );
        if !texel.occupied || texel.depth <= 0.0 {
            continue;
        }

        let size = min_size + texel.depth * size_range;
        if f64::from(size) / 2.0 >= s.dist {
            influence += lerp_f32(
                kernel.near_influence(),
                kernel.far_influence(),
                size / kernel.max_shadow_size(),
            );
        }
    }

    (influence / kernel.sample_count() as f32).clamp(0.0, kernel.max_shadow_opacity())
}

#[cfg(test)]
#[path = "../../tests/unit/sampler/shade.rs"]
mod tests;
