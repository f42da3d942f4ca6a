use crate::model::source::ImageSource;

/// Bilinear sample of an RGBA8 buffer at continuous texel coordinates,
/// clamped to the edges. `(0.0, 0.0)` is the center of the top-left texel.
pub(crate) fn sample_bilinear_rgba8(data: &[u8], width: u32, height: u32, fx: f64, fy: f64) -> [u8; 4] {
    let w = width as i64;
    let h = height as i64;
    let x0 = fx.floor() as i64;
    let y0 = fy.floor() as i64;
    let tx = fx - x0 as f64;
    let ty = fy - y0 as f64;

    let px = |x: i64, y: i64| -> [f64; 4] {
        let x = x.clamp(0, w - 1) as usize;
        let y = y.clamp(0, h - 1) as usize;
        let i = (y * width as usize + x) * 4;
        [
            f64::from(data[i]),
            f64::from(data[i + 1]),
            f64::from(data[i + 2]),
            f64::from(data[i + 3]),
        ]
    };

    let a = px(x0, y0);
    let b = px(x0 + 1, y0);
    let c = px(x0, y0 + 1);
    let d = px(x0 + 1, y0 + 1);

    let mut out = [0u8; 4];
    for ch in 0..4 {
        let top = a[ch] + (b[ch] - a[ch]) * tx;
        let bot = c[ch] + (d[ch] - c[ch]) * tx;
        out[ch] = (top + (bot - top) * ty).round().clamp(0.0, 255.0) as u8;
    }
    out
}

/// Resample a source image to cover the target rectangle: scale preserving
/// aspect ratio so the target is filled entirely, center-cropping the excess.
/// Never letterboxes. A source already matching the target aspect ratio comes
/// through unscaled and uncropped.
pub(crate) fn resample_cover(src: &ImageSource, target_w: u32, target_h: u32) -> Vec<u8> {
    let mut out = vec![0u8; target_w as usize * target_h as usize * 4];
    if target_w == 0 || target_h == 0 {
        return out;
    }

    let scale = f64::max(
        f64::from(target_w) / f64::from(src.width),
        f64::from(target_h) / f64::from(src.height),
    );
    let draw_w = f64::from(src.width) * scale;
    let draw_h = f64::from(src.height) * scale;
    let dx = (f64::from(target_w) - draw_w) / 2.0;
    let dy = (f64::from(target_h) - draw_h) / 2.0;

    for y in 0..target_h {
        for x in 0..target_w {
            // Target texel center mapped back into source texel coordinates.
            let sx = (f64::from(x) + 0.5 - dx) / scale - 0.5;
            let sy = (f64::from(y) + 0.5 - dy) / scale - 0.5;
            let rgba = sample_bilinear_rgba8(&src.rgba8, src.width, src.height, sx, sy);
            let i = (y as usize * target_w as usize + x as usize) * 4;
            out[i..i + 4].copy_from_slice(&rgba);
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/depth/resample.rs"]
mod tests;
