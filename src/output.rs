//! # Output Module
//!
//! Display sink for rendered frames:
//! - Text frames go to stdout or a file in one blocking write
//! - Shading intensities can be dumped as an 8-bit grayscale PNG

use std::io::Write;

use image::{GrayImage, Luma};
use log::{debug, info};
use thiserror::Error;

use glyphcast::Frame;

/// Errors raised while emitting frames.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Writing text failed.
    #[error("failed to write frame to {target}: {source}")]
    Io {
        /// "stdout" or the file path
        target: String,
        /// Underlying I/O error
        source: std::io::Error,
    },
    /// Encoding or saving the PNG failed.
    #[error("failed to save {path}: {source}")]
    Image {
        /// Destination file
        path: String,
        /// Underlying image error
        source: image::ImageError,
    },
}

/// Write a block of frame text to `path`, or to stdout when `path` is `None`.
pub fn write_text(text: &str, path: Option<&str>) -> Result<(), OutputError> {
    match path {
        Some(path) => {
            std::fs::write(path, text).map_err(|source| OutputError::Io {
                target: path.to_string(),
                source,
            })?;
            info!("Frame text written to {}", path);
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(text.as_bytes())
                .and_then(|_| stdout.flush())
                .map_err(|source| OutputError::Io {
                    target: "stdout".to_string(),
                    source,
                })?;
        }
    }
    Ok(())
}

/// Save the intensities of `frame` as a grayscale PNG, one pixel per cell.
pub fn save_frame_as_png(frame: &Frame, path: &str) -> Result<(), OutputError> {
    let image = GrayImage::from_fn(frame.width(), frame.height(), |x, y| {
        Luma([(frame.intensity(x, y).clamp(0.0, 1.0) * 255.0).round() as u8])
    });
    debug!("Encoding {}x{} grayscale PNG", frame.width(), frame.height());
    image.save(path).map_err(|source| OutputError::Image {
        path: path.to_string(),
        source,
    })?;
    info!("Intensity map saved to {}", path);
    Ok(())
}
