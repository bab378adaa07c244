//! Pinhole camera, viewport mapping, and the render driver.

use std::sync::atomic::{AtomicU32, Ordering};

use glam::Vec3A;
use log::info;
use rayon::prelude::*;

use crate::config::RenderConfig;
use crate::error::RenderError;
use crate::ray::Ray;
use crate::shade::{ray_color, to_rgb_bytes};

/// Pinhole camera with a fixed viewport, plus the driver that walks every
/// pixel of the output image.
///
/// Viewport geometry is computed once at construction: the image plane sits
/// at z = -focal_length relative to the camera origin, spanned by the
/// horizontal and vertical vectors from its lower-left corner.
#[derive(Debug, Clone)]
pub struct Camera {
    config: RenderConfig,
    /// Rendered image height in pixels, derived from width and aspect ratio.
    pub image_height: u32,
    origin: Vec3A,
    horizontal: Vec3A,
    vertical: Vec3A,
    lower_left_corner: Vec3A,
}

impl Camera {
    /// Build a camera from the render configuration.
    pub fn new(config: RenderConfig) -> Self {
        let origin = config.camera_origin;
        let horizontal = Vec3A::new(config.viewport_width(), 0.0, 0.0);
        let vertical = Vec3A::new(0.0, config.viewport_height, 0.0);
        let lower_left_corner = origin
            - horizontal / 2.0
            - vertical / 2.0
            - Vec3A::new(0.0, 0.0, config.focal_length);

        Self {
            image_height: config.image_height(),
            config,
            origin,
            horizontal,
            vertical,
            lower_left_corner,
        }
    }

    /// Map normalized image coordinates to a world-space ray.
    ///
    /// u runs left to right, v bottom to top, both in [0,1]. The direction is
    /// deliberately not normalized; shading normalizes where it needs to.
    pub fn ray_for(&self, u: f32, v: f32) -> Ray {
        let direction =
            self.lower_left_corner + u * self.horizontal + v * self.vertical - self.origin;
        Ray::new(self.origin, direction)
    }

    /// Render the full image into a flat RGB byte buffer.
    ///
    /// The buffer is row-major, top row first, three bytes per pixel, row
    /// stride width*3. Rows are independent, so they render as a parallel map
    /// over disjoint scanline slices; no write cursor is shared. Emits one
    /// progress line per completed row and a final "Done." line.
    pub fn render(&self) -> Result<Vec<u8>, RenderError> {
        let width = self.config.image_width;
        let height = self.image_height;
        // The u/v mapping divides by (width - 1) and (height - 1); anything
        // under 2x2 would panic or shade NaN coordinates.
        if width < 2 || height < 2 {
            return Err(RenderError::InvalidResolution { width, height });
        }
        let row_stride = width as usize * 3;
        let mut buffer = vec![0u8; height as usize * row_stride];

        info!(
            "Rendering {}x{} on {} CPU cores...",
            width,
            height,
            rayon::current_num_threads()
        );
        let render_start = std::time::Instant::now();
        let rows_done = AtomicU32::new(0);

        buffer
            .par_chunks_mut(row_stride)
            .enumerate()
            .try_for_each(|(row, scanline)| -> Result<(), RenderError> {
                // Buffer row 0 is the top of the image, j = height - 1.
                let j = height - 1 - row as u32;
                for i in 0..width {
                    let u = i as f32 / (width - 1) as f32;
                    let v = j as f32 / (height - 1) as f32;
                    let color = ray_color(&self.ray_for(u, v), &self.config)?;
                    let offset = i as usize * 3;
                    scanline[offset..offset + 3].copy_from_slice(&to_rgb_bytes(color));
                }

                let completed = rows_done.fetch_add(1, Ordering::Relaxed) + 1;
                info!("Progress: {}%", completed as f32 / height as f32 * 100.0);
                Ok(())
            })?;

        info!("Done.");
        info!("Image rendered in {:.2?}", render_start.elapsed());
        Ok(buffer)
    }
}
