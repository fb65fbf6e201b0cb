//! Image file I/O for tilepress
//!
//! Decoding and encoding are delegated to the `image` crate. Every loaded image
//! is converted to 8-bit RGB, the only layout the compression engine accepts.

use log::{debug, warn};
use std::path::{Path, PathBuf};
use tilepress_core::{consts, ColorChannels, Dimensions, Image, TilepressError, TilepressResult};

/// Load and decode an image file, converting it to 8-bit RGB
pub fn load_image<P: AsRef<Path>>(path: P) -> TilepressResult<Image> {
    let path = path.as_ref();
    let decoded = image::open(path).map_err(|e| TilepressError::ImageLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let rgb = decoded.into_rgb8();
    let dimensions = Dimensions::new(rgb.width(), rgb.height());
    debug!("loaded {} ({})", path.display(), dimensions);

    Image::from_raw(dimensions, ColorChannels::RGB, rgb.into_raw())
}

/// List the files matching a glob pattern, sorted by path
///
/// Entries that cannot be read while walking the pattern are skipped.
pub fn enumerate_images(pattern: &str) -> TilepressResult<Vec<PathBuf>> {
    let entries = glob::glob(pattern)
        .map_err(|e| TilepressError::InvalidParameter(format!("bad pattern {}: {}", pattern, e)))?;

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(e) => {
                warn!("skipping unreadable entry: {}", e);
                None
            }
        })
        .filter(|path| path.is_file())
        .collect();
    paths.sort();

    Ok(paths)
}

/// Load every decodable image matching a glob pattern
///
/// Files that fail to decode are logged and skipped.
pub fn load_images(pattern: &str) -> TilepressResult<Vec<(PathBuf, Image)>> {
    let mut images = Vec::new();
    for path in enumerate_images(pattern)? {
        match load_image(&path) {
            Ok(image) => images.push((path, image)),
            Err(e) => warn!("{}", e),
        }
    }
    Ok(images)
}

/// Encode an RGB image to a file, the format is chosen from the extension
pub fn save_image<P: AsRef<Path>>(path: P, image: &Image) -> TilepressResult<()> {
    let path = path.as_ref();
    image.ensure_rgb()?;

    let raster = image::RgbImage::from_raw(image.width(), image.height(), image.buffer.clone())
        .ok_or(TilepressError::BufferSizeMismatch {
            expected: image.pixel_count() * consts::RGB_CHANNELS,
            actual: image.buffer.len(),
        })?;

    raster.save(path).map_err(|e| TilepressError::ImageSave {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    debug!("saved {} ({})", path.display(), image.dimensions);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn checkerboard(width: u32, height: u32) -> Image {
        Image::from_fn(Dimensions::new(width, height), |x, y| {
            if (x / 2 + y / 2) % 2 == 0 {
                [255, 0, 128]
            } else {
                [0, 64, 32]
            }
        })
        .unwrap()
    }

    #[test]
    fn test_png_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("board.png");
        let image = checkerboard(12, 9);

        save_image(&path, &image).unwrap();
        let loaded = load_image(&path).unwrap();
        assert_eq!(loaded, image);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_image(dir.path().join("missing.png"));
        assert!(matches!(result, Err(TilepressError::ImageLoad { .. })));
    }

    #[test]
    fn test_save_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let result = save_image(dir.path().join("board.nope"), &checkerboard(4, 4));
        assert!(matches!(result, Err(TilepressError::ImageSave { .. })));
    }

    #[test]
    fn test_save_rejects_non_rgb() {
        let dir = tempfile::tempdir().unwrap();
        let image = Image::new(Dimensions::new(2, 2), ColorChannels::Gray).unwrap();
        let result = save_image(dir.path().join("gray.png"), &image);
        assert!(matches!(
            result,
            Err(TilepressError::UnsupportedPixelFormat { channels: 1 })
        ));
    }

    #[test]
    fn test_enumerate_and_skip_undecodable() {
        let dir = tempfile::tempdir().unwrap();
        save_image(dir.path().join("b.png"), &checkerboard(4, 4)).unwrap();
        save_image(dir.path().join("a.png"), &checkerboard(8, 4)).unwrap();
        fs::write(dir.path().join("c.png"), b"not an image").unwrap();
        fs::write(dir.path().join("notes.txt"), b"ignored").unwrap();

        let pattern = format!("{}/*.png", dir.path().display());
        let paths = enumerate_images(&pattern).unwrap();
        let names: Vec<_> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.png", "b.png", "c.png"]);

        let images = load_images(&pattern).unwrap();
        assert_eq!(images.len(), 2);
        assert_eq!(images[0].1.width(), 8);
        assert_eq!(images[1].1.width(), 4);
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(matches!(
            enumerate_images("[unclosed"),
            Err(TilepressError::InvalidParameter(_))
        ));
    }
}
