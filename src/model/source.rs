use crate::foundation::error::{PenumbraError, PenumbraResult};

/// A decoded occluder image: straight (non-premultiplied) RGBA8.
///
/// Decoding is the caller's responsibility (see [`crate::decode_image`]); the
/// pipeline itself never performs IO.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ImageSource {
    /// Raw pixels, `width * height * 4` bytes, row-major.
    pub rgba8: Vec<u8>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl ImageSource {
    /// Check that the buffer matches the declared dimensions.
    pub fn validate(&self) -> PenumbraResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(PenumbraError::source_unavailable("image source is empty"));
        }
        let expected = (self.width as usize)
            .checked_mul(self.height as usize)
            .and_then(|v| v.checked_mul(4));
        if expected != Some(self.rgba8.len()) {
            return Err(PenumbraError::source_unavailable(
                "image source byte length does not match width * height * 4",
            ));
        }
        Ok(())
    }
}

/// How the slat angle of a procedural source is chosen.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum AngleMode {
    /// A fixed angle in degrees.
    Fixed {
        /// Rotation of the slat bands, in degrees.
        degrees: f64,
    },
    /// Angle derived from wall-clock hour-of-day: the time source's hour is
    /// normalized over a 06:00-18:00 window and eased through a downward
    /// parabola, so the swing peaks at noon and settles to `base_degrees` at
    /// the window boundaries. See [`crate::diurnal_angle_degrees`].
    Diurnal {
        /// Angle at the boundaries of the daylight window, in degrees.
        base_degrees: f64,
        /// Extra rotation reached at the apex (noon), in degrees.
        swing_degrees: f64,
    },
}

/// Window mullion overlaid on the slats: thicker bands at a constant depth.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FrameParams {
    /// Depth of the frame bands, in `[0, 1]`.
    pub depth: f32,
    /// Band thickness in raster pixels.
    pub thickness_px: f32,
    /// First crossbar position as a fraction of raster height from center.
    pub crossbar1_y: f32,
    /// Second crossbar position as a fraction of raster height from center.
    pub crossbar2_y: f32,
    /// Add one bar rotated 90 degrees from the slats.
    pub vertical_bar: bool,
}

impl Default for FrameParams {
    fn default() -> Self {
        Self {
            depth: 0.65,
            thickness_px: 10.0,
            crossbar1_y: -0.15,
            crossbar2_y: 0.35,
            vertical_bar: true,
        }
    }
}

/// Parametric blind slats on an infinite rotated plane.
///
/// Each band gets a deterministic pseudo-depth from two fixed low-frequency
/// sinusoids indexed by band number, so the variation looks organic but is
/// reproducible across frames.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ProceduralParams {
    /// Slat rotation.
    pub angle: AngleMode,
    /// Slat thickness in raster pixels.
    pub slat_width_px: f32,
    /// Distance between slat leading edges in raster pixels.
    pub slat_spacing_px: f32,
    /// Baseline band depth in `[0, 1]`.
    pub depth_base: f32,
    /// Amplitude of the per-band depth wobble.
    pub depth_variation: f32,
    /// Optional window-frame overlay, painted over the slats.
    pub frame: Option<FrameParams>,
}

impl Default for ProceduralParams {
    fn default() -> Self {
        Self {
            angle: AngleMode::Fixed { degrees: -35.0 },
            slat_width_px: 5.0,
            slat_spacing_px: 50.0,
            depth_base: 0.3,
            depth_variation: 0.08,
            frame: Some(FrameParams::default()),
        }
    }
}

/// What drives the depth-map builder.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum SourceDescriptor {
    /// Procedurally generated blind slats plus optional frame.
    Procedural(ProceduralParams),
    /// A thresholded occluder image.
    Image(ImageSource),
}

#[cfg(test)]
#[path = "../../tests/unit/model/source.rs"]
mod tests;
