//! Image data structures

use crate::{consts, ColorChannels, Dimensions, TilepressError, TilepressResult};

/// An interleaved 8-bit raster, stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub dimensions: Dimensions,
    pub channels: ColorChannels,
    pub buffer: Vec<u8>,
}

impl Image {
    /// Create a zero-filled image
    ///
    /// Zero width or height is allowed and yields an empty image.
    pub fn new(dimensions: Dimensions, channels: ColorChannels) -> TilepressResult<Self> {
        check_dimensions(dimensions)?;

        let buffer_size = dimensions.pixel_count() * channels.count();
        Ok(Self {
            dimensions,
            channels,
            buffer: vec![0; buffer_size],
        })
    }

    /// Wrap an existing interleaved buffer
    pub fn from_raw(
        dimensions: Dimensions,
        channels: ColorChannels,
        buffer: Vec<u8>,
    ) -> TilepressResult<Self> {
        check_dimensions(dimensions)?;

        let expected = dimensions.pixel_count() * channels.count();
        if buffer.len() != expected {
            return Err(TilepressError::BufferSizeMismatch {
                expected,
                actual: buffer.len(),
            });
        }

        Ok(Self {
            dimensions,
            channels,
            buffer,
        })
    }

    /// Build an RGB image by evaluating `f` at every pixel
    pub fn from_fn<F>(dimensions: Dimensions, mut f: F) -> TilepressResult<Self>
    where
        F: FnMut(u32, u32) -> [u8; 3],
    {
        let mut image = Self::new(dimensions, ColorChannels::RGB)?;
        let width = dimensions.width as usize;
        for (idx, pixel) in image.buffer.chunks_exact_mut(consts::RGB_CHANNELS).enumerate() {
            let x = (idx % width) as u32;
            let y = (idx / width) as u32;
            pixel.copy_from_slice(&f(x, y));
        }
        Ok(image)
    }

    pub fn width(&self) -> u32 {
        self.dimensions.width
    }

    pub fn height(&self) -> u32 {
        self.dimensions.height
    }

    pub fn pixel_count(&self) -> usize {
        self.dimensions.pixel_count()
    }

    pub fn channel_count(&self) -> usize {
        self.channels.count()
    }

    pub fn is_empty(&self) -> bool {
        self.dimensions.is_empty()
    }

    /// Number of bytes in one row of pixels
    pub fn row_stride(&self) -> usize {
        self.dimensions.width as usize * self.channel_count()
    }

    /// Fail unless the image holds exactly three samples per pixel
    pub fn ensure_rgb(&self) -> TilepressResult<()> {
        if self.channels != ColorChannels::RGB {
            return Err(TilepressError::UnsupportedPixelFormat {
                channels: self.channel_count(),
            });
        }
        Ok(())
    }

    /// Read the three samples at `(x, y)`
    pub fn pixel(&self, x: u32, y: u32) -> TilepressResult<[u8; 3]> {
        let idx = self.rgb_index(x, y)?;
        Ok([self.buffer[idx], self.buffer[idx + 1], self.buffer[idx + 2]])
    }

    /// Overwrite the three samples at `(x, y)`
    pub fn set_pixel(&mut self, x: u32, y: u32, color: [u8; 3]) -> TilepressResult<()> {
        let idx = self.rgb_index(x, y)?;
        self.buffer[idx..idx + consts::RGB_CHANNELS].copy_from_slice(&color);
        Ok(())
    }

    fn rgb_index(&self, x: u32, y: u32) -> TilepressResult<usize> {
        self.ensure_rgb()?;
        if !self.dimensions.contains(x, y) {
            return Err(TilepressError::OutOfBounds { x, y });
        }
        Ok((y as usize * self.dimensions.width as usize + x as usize) * consts::RGB_CHANNELS)
    }
}

fn check_dimensions(dimensions: Dimensions) -> TilepressResult<()> {
    if dimensions.width > consts::MAX_IMAGE_DIMENSION
        || dimensions.height > consts::MAX_IMAGE_DIMENSION
    {
        return Err(TilepressError::InvalidDimensions {
            width: dimensions.width,
            height: dimensions.height,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_image_is_zeroed() {
        let image = Image::new(Dimensions::new(4, 3), ColorChannels::RGB).unwrap();
        assert_eq!(image.buffer.len(), 36);
        assert!(image.buffer.iter().all(|&b| b == 0));
        assert_eq!(image.row_stride(), 12);
    }

    #[test]
    fn test_empty_image_allowed() {
        let image = Image::new(Dimensions::new(0, 0), ColorChannels::RGB).unwrap();
        assert!(image.is_empty());
        assert!(image.buffer.is_empty());
    }

    #[test]
    fn test_oversized_image_rejected() {
        let dims = Dimensions::new(consts::MAX_IMAGE_DIMENSION + 1, 1);
        assert!(matches!(
            Image::new(dims, ColorChannels::RGB),
            Err(TilepressError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_from_raw_checks_length() {
        let result = Image::from_raw(Dimensions::new(2, 2), ColorChannels::RGB, vec![0; 11]);
        assert!(matches!(
            result,
            Err(TilepressError::BufferSizeMismatch {
                expected: 12,
                actual: 11
            })
        ));
    }

    #[test]
    fn test_pixel_access() {
        let mut image = Image::from_fn(Dimensions::new(3, 2), |x, y| [x as u8, y as u8, 7]).unwrap();
        assert_eq!(image.pixel(2, 1).unwrap(), [2, 1, 7]);

        image.set_pixel(0, 1, [9, 9, 9]).unwrap();
        assert_eq!(image.pixel(0, 1).unwrap(), [9, 9, 9]);

        assert!(matches!(
            image.pixel(3, 0),
            Err(TilepressError::OutOfBounds { x: 3, y: 0 })
        ));
    }

    #[test]
    fn test_non_rgb_access_rejected() {
        let image = Image::new(Dimensions::new(2, 2), ColorChannels::RGBA).unwrap();
        assert!(matches!(
            image.ensure_rgb(),
            Err(TilepressError::UnsupportedPixelFormat { channels: 4 })
        ));
        assert!(image.pixel(0, 0).is_err());
    }
}
