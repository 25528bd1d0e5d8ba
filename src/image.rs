//! Decoded raster images and the PNG loading collaborator.
//!
//! Decoding happens synchronously, before the annotation surface is
//! constructed or as a one-shot replacement. Failures never reach the
//! annotation model: they are logged and returned for the host shell to
//! surface as a status message, with prior state retained.

use std::fs::File;
use std::path::Path;

use thiserror::Error;

/// Errors that can occur while loading an image.
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("failed to open image file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to decode PNG data: {0}")]
    Decode(#[from] cairo::IoError),

    #[error("failed to allocate image surface: {0}")]
    Surface(#[from] cairo::Error),
}

/// A decoded raster owned by the annotation model.
#[derive(Debug, Clone)]
pub struct PhotoImage {
    surface: cairo::ImageSurface,
    width: i32,
    height: i32,
}

impl PhotoImage {
    /// Loads a PNG image from `path`.
    pub fn from_png_path(path: &Path) -> Result<Self, ImageError> {
        let result = File::open(path)
            .map_err(ImageError::from)
            .and_then(|mut file| {
                cairo::ImageSurface::create_from_png(&mut file).map_err(ImageError::from)
            });

        match result {
            Ok(surface) => {
                let image = Self::from_surface(surface);
                log::info!(
                    "Loaded {}x{} image from {}",
                    image.width,
                    image.height,
                    path.display()
                );
                Ok(image)
            }
            Err(err) => {
                log::error!("Failed to load image from {}: {err}", path.display());
                Err(err)
            }
        }
    }

    /// Wraps an already decoded surface (e.g. handed over by a host shell
    /// with its own decoding pipeline).
    pub fn from_surface(surface: cairo::ImageSurface) -> Self {
        let width = surface.width();
        let height = surface.height();
        Self {
            surface,
            width,
            height,
        }
    }

    /// Creates an empty (fully transparent) raster of the given size.
    pub fn blank(width: i32, height: i32) -> Result<Self, ImageError> {
        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;
        Ok(Self::from_surface(surface))
    }

    /// Intrinsic width in pixels.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Intrinsic height in pixels.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The underlying Cairo surface, used as a paint source.
    pub fn surface(&self) -> &cairo::ImageSurface {
        &self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_reports_dimensions() {
        let image = PhotoImage::blank(17, 9).unwrap();
        assert_eq!(image.width(), 17);
        assert_eq!(image.height(), 9);
    }

    #[test]
    fn missing_file_surfaces_an_io_error() {
        let err = PhotoImage::from_png_path(Path::new("/nonexistent/photo.png")).unwrap_err();
        assert!(matches!(err, ImageError::Io(_)));
    }

    #[test]
    fn garbage_data_surfaces_a_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("not-a-png.png");
        std::fs::write(&path, b"definitely not a png").unwrap();

        let err = PhotoImage::from_png_path(&path).unwrap_err();
        assert!(matches!(err, ImageError::Decode(_)));
    }
}
