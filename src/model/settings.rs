use crate::foundation::error::{PenumbraError, PenumbraResult};
use crate::model::source::SourceDescriptor;

/// RGB color mixed into lit pixels proportional to the shadow factor.
///
/// Channels are in `[0, 1]`; values near 1 keep shadows subtle and warm.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ShadowTint {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
}

impl Default for ShadowTint {
    fn default() -> Self {
        Self {
            r: 0.92,
            g: 0.90,
            b: 0.88,
        }
    }
}

/// Immutable-per-frame configuration for the whole pipeline.
///
/// Owned by the caller and passed by value into each render invocation; the
/// core never mutates it. Partial updates are the caller's concern
/// (merge-then-pass-whole-value). The serde field names are the de-facto
/// schema for config export done by tuning UIs.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Luminance cut in `[0, 255]`; texels at or above it pass light.
    pub threshold: f32,
    /// Contrast adjustment about mid-gray applied before thresholding.
    pub contrast: f32,
    /// Scales how deep (large, soft) occupied texels become, in `(0, 1]`.
    pub depth_scale: f32,
    /// Invert luminance first (for exterior shots where the opening is dark).
    pub invert: bool,

    /// Samples per pixel in the Vogel disk.
    pub sample_count: u32,
    /// Disk radius in raster pixels.
    pub disk_radius: f32,
    /// Shadow-casting size of the shallowest occluder, in pixels.
    pub min_shadow_size: f32,
    /// Shadow-casting size of the deepest occluder, in pixels.
    pub max_shadow_size: f32,
    /// Upper clamp for the per-pixel shadow factor, in `[0, 1]`.
    pub max_shadow_opacity: f32,
    /// Influence accumulated per hit from shallow (sharp, strong) occluders.
    pub near_influence: f32,
    /// Influence accumulated per hit from deep (soft, diffuse) occluders.
    pub far_influence: f32,

    /// Color mixed into lit pixels proportional to the shadow factor.
    pub shadow_tint: ShadowTint,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            threshold: 128.0,
            contrast: 1.8,
            depth_scale: 0.4,
            invert: false,
            sample_count: 100,
            disk_radius: 80.0,
            min_shadow_size: 20.0,
            max_shadow_size: 300.0,
            max_shadow_opacity: 0.8,
            near_influence: 8.0,
            far_influence: 0.5,
            shadow_tint: ShadowTint::default(),
        }
    }
}

impl RenderSettings {
    /// Validate structural invariants. Called before a sampling kernel is
    /// built from these settings.
    pub fn validate(&self) -> PenumbraResult<()> {
        if !(0.0..=255.0).contains(&self.threshold) {
            return Err(PenumbraError::validation("threshold must be in [0, 255]"));
        }
        if !self.contrast.is_finite() || self.contrast <= 0.0 {
            return Err(PenumbraError::validation("contrast must be > 0"));
        }
        if !self.depth_scale.is_finite() || self.depth_scale <= 0.0 || self.depth_scale > 1.0 {
            return Err(PenumbraError::validation("depth_scale must be in (0, 1]"));
        }
        if self.sample_count == 0 {
            return Err(PenumbraError::validation("sample_count must be >= 1"));
        }
        if !self.disk_radius.is_finite() || self.disk_radius <= 0.0 {
            return Err(PenumbraError::validation("disk_radius must be > 0"));
        }
        if !self.min_shadow_size.is_finite() || self.min_shadow_size <= 0.0 {
            return Err(PenumbraError::validation("min_shadow_size must be > 0"));
        }
        if !self.max_shadow_size.is_finite() || self.max_shadow_size < self.min_shadow_size {
            return Err(PenumbraError::validation(
                "max_shadow_size must be >= min_shadow_size",
            ));
        }
        if !(0.0..=1.0).contains(&self.max_shadow_opacity) {
            return Err(PenumbraError::validation(
                "max_shadow_opacity must be in [0, 1]",
            ));
        }
        for (name, v) in [
            ("near_influence", self.near_influence),
            ("far_influence", self.far_influence),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(PenumbraError::validation(format!("{name} must be >= 0")));
            }
        }
        for (name, v) in [
            ("shadow_tint.r", self.shadow_tint.r),
            ("shadow_tint.g", self.shadow_tint.g),
            ("shadow_tint.b", self.shadow_tint.b),
        ] {
            if !(0.0..=1.0).contains(&v) {
                return Err(PenumbraError::validation(format!("{name} must be in [0, 1]")));
            }
        }
        Ok(())
    }
}

/// Everything the host hands the renderer for one frame.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct RenderRequest {
    /// What casts the shadows.
    pub source: SourceDescriptor,
    /// How to build and shade them.
    pub settings: RenderSettings,
}

#[cfg(test)]
#[path = "../../tests/unit/model/settings.rs"]
mod tests;
