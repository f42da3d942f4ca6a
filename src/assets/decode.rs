use crate::foundation::error::{PenumbraError, PenumbraResult};
use crate::model::source::ImageSource;

/// Decode encoded image bytes into a straight RGBA8 [`ImageSource`].
///
/// Decoding is front-loaded: the caller decodes first and only then
/// constructs a [`crate::SourceDescriptor::Image`], so a frame never touches
/// encoded bytes. Decode failures map to
/// [`PenumbraError::SourceUnavailable`] so a renderer that already holds a
/// good raster keeps displaying it.
pub fn decode_image(bytes: &[u8]) -> PenumbraResult<ImageSource> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| PenumbraError::source_unavailable(format!("decode image: {e}")))?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let source = ImageSource {
        rgba8: rgba.into_raw(),
        width,
        height,
    };
    source.validate()?;
    Ok(source)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
