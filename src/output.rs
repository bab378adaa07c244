//! Image file output.
//!
//! The renderer hands over a finished interleaved RGB buffer; encoding is
//! delegated entirely to the `image` crate.

use log::info;

use crate::error::RenderError;

/// Write an interleaved RGB byte buffer to disk as JPEG.
///
/// The buffer must be row-major, top row first, with row stride width*3.
/// A failed write is fatal to the caller, so the error propagates instead of
/// being logged and swallowed.
pub fn save_image_as_jpeg(
    buffer: &[u8],
    width: u32,
    height: u32,
    output_path: &str,
) -> Result<(), RenderError> {
    image::save_buffer(
        output_path,
        buffer,
        width,
        height,
        image::ExtendedColorType::Rgb8,
    )?;
    info!("Image saved as {}", output_path);
    Ok(())
}
