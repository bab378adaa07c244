//! Error type for the render pipeline.

/// Errors produced while rendering or writing the output image.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// A zero-length direction vector cannot be normalized.
    #[error("cannot normalize a zero-length ray direction")]
    InvalidDirection,

    /// The image is too small for the pixel-to-viewport mapping, which
    /// divides by (width - 1) and (height - 1).
    #[error("image resolution {width}x{height} is too small; need at least 2x2")]
    InvalidResolution {
        /// Requested image width in pixels.
        width: u32,
        /// Derived image height in pixels.
        height: u32,
    },

    /// The output image could not be encoded or written.
    #[error("failed to write output image: {0}")]
    Encode(#[from] image::ImageError),
}
