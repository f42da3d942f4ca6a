/// The output raster the compositor writes shadow pixels into.
///
/// Opaque RGBA8. A fresh surface is all white, which is the multiplicative
/// identity: compositing an unshaded surface over page content is a no-op.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderSurface {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RenderSurface {
    /// Allocate an all-white surface.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![255; width as usize * height as usize * 4],
        }
    }

    pub(crate) fn from_parts(width: u32, height: u32, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), width as usize * height as usize * 4);
        Self {
            width,
            height,
            data,
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// True when either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Raw RGBA8 pixels, row-major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}
