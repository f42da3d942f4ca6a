use crate::foundation::math::Fnv1a64;

/// One depth-map entry.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DepthTexel {
    /// Distance/size proxy of the occluder at this texel, in `[0, 1]`.
    /// Larger values cast larger, softer shadows.
    pub depth: f32,
    /// Whether this texel belongs to a shadow-casting object at all.
    /// A texel with `occupied == false` contributes no shadow influence
    /// regardless of its depth value.
    pub occupied: bool,
}

/// A 2D occupancy/depth grid, rebuilt whole every time the source changes.
///
/// Read-only after construction: the builder hands it to the sampler and it
/// is never patched incrementally.
#[derive(Clone, Debug, PartialEq)]
pub struct DepthRaster {
    width: u32,
    height: u32,
    texels: Vec<DepthTexel>,
}

impl DepthRaster {
    /// An all-clear raster (every texel unoccupied).
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            texels: vec![DepthTexel::default(); width as usize * height as usize],
        }
    }

    pub(crate) fn from_texels(width: u32, height: u32, texels: Vec<DepthTexel>) -> Self {
        debug_assert_eq!(texels.len(), width as usize * height as usize);
        Self {
            width,
            height,
            texels,
        }
    }

    /// Width in texels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in texels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// True when either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.texels.is_empty()
    }

    /// Clamp-to-edge lookup, mirroring `CLAMP_TO_EDGE` texture addressing.
    /// An empty raster reads as all-clear.
    pub fn get(&self, x: i64, y: i64) -> DepthTexel {
        if self.is_empty() {
            return DepthTexel::default();
        }
        let x = x.clamp(0, i64::from(self.width) - 1) as usize;
        let y = y.clamp(0, i64::from(self.height) - 1) as usize;
        self.texels[y * self.width as usize + x]
    }

    /// Fraction of texels that are occupied, in `[0, 1]`.
    pub fn occupied_ratio(&self) -> f64 {
        if self.texels.is_empty() {
            return 0.0;
        }
        let occupied = self.texels.iter().filter(|t| t.occupied).count();
        occupied as f64 / self.texels.len() as f64
    }

    /// Stable content hash; two builds from identical inputs must agree
    /// bit-for-bit.
    pub fn fingerprint(&self) -> u64 {
        let mut h = Fnv1a64::new_default();
        h.write_u32(self.width);
        h.write_u32(self.height);
        for t in &self.texels {
            h.write_bytes(&t.depth.to_le_bytes());
            h.write_u8(u8::from(t.occupied));
        }
        h.finish()
    }

    /// Read-only RGBA8 snapshot for debugging/tuning overlays: depth in the
    /// red channel, occupancy flag in the green channel.
    pub fn preview_rgba8(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.texels.len() * 4);
        for t in &self.texels {
            let r = (t.depth * 255.0).round().clamp(0.0, 255.0) as u8;
            out.extend_from_slice(&[r, if t.occupied { 255 } else { 0 }, 0, 255]);
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/depth/raster.rs"]
mod tests;
