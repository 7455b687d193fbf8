//! Loading of the files a document needs: fonts and the logo.

use std::fs;
use std::path::{Path, PathBuf};

use image::GenericImageView;

use crate::{Error, Result};

/// Reads the bytes of a font file.
pub fn load_font<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    let path = path.as_ref();
    fs::read(path).map_err(|_| Error::FontNotFound(PathBuf::from(path)))
}

/// Returns the width and height in pixels of an image.
pub fn image_dimensions<P: AsRef<Path>>(path: P) -> Result<(u32, u32)> {
    let path = path.as_ref();
    let (width, height) =
        image::image_dimensions(path).map_err(|e| Error::ImageError(PathBuf::from(path), e))?;

    if width == 0 || height == 0 {
        return Err(Error::EmptyImage(PathBuf::from(path)));
    }

    Ok((width, height))
}

/// The decoded pixels of an image, without alpha channel.
pub struct RgbPixels {
    /// The width in pixels.
    pub width: u32,

    /// The height in pixels.
    pub height: u32,

    /// The rgb components, row by row.
    pub data: Vec<u8>,
}

/// Decodes an image into rgb pixels. Transparent pixels are blended over white.
pub fn load_rgb<P: AsRef<Path>>(path: P) -> Result<RgbPixels> {
    let path = path.as_ref();
    let image = image::open(path).map_err(|e| Error::ImageError(PathBuf::from(path), e))?;
    let (width, height) = image.dimensions();

    if width == 0 || height == 0 {
        return Err(Error::EmptyImage(PathBuf::from(path)));
    }

    let rgba = image.to_rgba8();
    let mut data = Vec::with_capacity(width as usize * height as usize * 3);
    for pixel in rgba.pixels() {
        let alpha = f64::from(pixel[3]) / 255.0;
        for &c in &pixel.0[..3] {
            data.push((f64::from(c) * alpha + 255.0 * (1.0 - alpha)).round() as u8);
        }
    }

    Ok(RgbPixels {
        width,
        height,
        data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_font_is_reported() {
        match load_font("does/not/exist.ttf") {
            Err(Error::FontNotFound(path)) => assert_eq!(path, PathBuf::from("does/not/exist.ttf")),
            _ => panic!("expected a missing font"),
        }
    }

    #[test]
    fn reads_png_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logo.png");
        image::RgbaImage::new(40, 10).save(&path).unwrap();

        assert_eq!(image_dimensions(&path).unwrap(), (40, 10));

        let pixels = load_rgb(&path).unwrap();
        assert_eq!(pixels.data.len(), 40 * 10 * 3);
        // fully transparent pixels end up white
        assert_eq!(pixels.data[0], 255);
    }

    #[test]
    fn unreadable_logo_is_an_error() {
        assert!(matches!(
            image_dimensions("does/not/exist.png"),
            Err(Error::ImageError(_, _))
        ));
    }
}
