use crate::depth::resample::sample_bilinear_rgba8;
use crate::foundation::error::{PenumbraError, PenumbraResult};
use crate::render::surface::RenderSurface;

/// Multiplicative blend of a shadow surface over caller-owned page pixels.
///
/// This is the integration contract with the host page: the shadow layer does
/// not own the page's pixels, it darkens them. White shadow pixels leave the
/// page untouched; the tint darkens underlying content in proportion to the
/// shadow factor. The surface is bilinearly upscaled to the page dimensions,
/// so the shadow field can be computed at a reduced internal resolution.
/// Alpha is left alone.
pub fn multiply_into(
    page_rgba8: &mut [u8],
    page_width: u32,
    page_height: u32,
    shadow: &RenderSurface,
) -> PenumbraResult<()> {
    let expected = (page_width as usize)
        .checked_mul(page_height as usize)
        .and_then(|v| v.checked_mul(4));
    if expected != Some(page_rgba8.len()) {
        return Err(PenumbraError::invalid_dimensions(
            "page buffer length does not match width * height * 4",
        ));
    }
    if shadow.is_empty() || page_rgba8.is_empty() {
        return Ok(());
    }

    let sx = f64::from(shadow.width()) / f64::from(page_width);
    let sy = f64::from(shadow.height()) / f64::from(page_height);

    for y in 0..page_height {
        for x in 0..page_width {
            let fx = (f64::from(x) + 0.5) * sx - 0.5;
            let fy = (f64::from(y) + 0.5) * sy - 0.5;
            let s = sample_bilinear_rgba8(shadow.data(), shadow.width(), shadow.height(), fx, fy);

            let i = (y as usize * page_width as usize + x as usize) * 4;
            for ch in 0..3 {
                page_rgba8[i + ch] = crate::foundation::math::mul_div255(
                    u16::from(page_rgba8[i + ch]),
                    u16::from(s[ch]),
                );
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
