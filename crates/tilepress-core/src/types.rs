//! Core types for tilepress

use crate::{TilepressError, TilepressResult};
use std::fmt;
use std::str::FromStr;

/// Number of color channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColorChannels {
    /// Grayscale
    Gray = 1,
    /// Grayscale + Alpha
    GrayAlpha = 2,
    /// RGB
    RGB = 3,
    /// RGBA
    RGBA = 4,
}

impl ColorChannels {
    pub fn count(&self) -> usize {
        *self as usize
    }
}

/// Image dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Tile edge length used by the block-averaging compressor
///
/// Larger rates produce coarser, more lossy output. Tiles are always square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CompressionRate {
    /// 2x2 tiles
    Low = 2,
    /// 4x4 tiles
    Medium = 4,
    /// 8x8 tiles
    High = 8,
    /// 16x16 tiles
    VeryHigh = 16,
}

impl CompressionRate {
    /// All rates, finest first
    pub const ALL: [CompressionRate; 4] = [
        CompressionRate::Low,
        CompressionRate::Medium,
        CompressionRate::High,
        CompressionRate::VeryHigh,
    ];

    /// Tile edge length in pixels
    pub fn edge(&self) -> u32 {
        *self as u32
    }

    /// Label used in benchmark reports
    pub fn label(&self) -> &'static str {
        match self {
            CompressionRate::Low => "low",
            CompressionRate::Medium => "medium",
            CompressionRate::High => "high",
            CompressionRate::VeryHigh => "very_high",
        }
    }
}

impl fmt::Display for CompressionRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<u32> for CompressionRate {
    type Error = TilepressError;

    fn try_from(edge: u32) -> TilepressResult<Self> {
        match edge {
            2 => Ok(CompressionRate::Low),
            4 => Ok(CompressionRate::Medium),
            8 => Ok(CompressionRate::High),
            16 => Ok(CompressionRate::VeryHigh),
            _ => Err(TilepressError::InvalidParameter(format!(
                "compression rate must be one of 2, 4, 8, 16, got {}",
                edge
            ))),
        }
    }
}

impl FromStr for CompressionRate {
    type Err = TilepressError;

    /// Accepts either a report label (`very_high`) or an edge length (`16`)
    fn from_str(s: &str) -> TilepressResult<Self> {
        let s = s.trim();
        if let Some(rate) = Self::ALL
            .iter()
            .find(|rate| rate.label().eq_ignore_ascii_case(s))
        {
            return Ok(*rate);
        }
        match s.parse::<u32>() {
            Ok(edge) => Self::try_from(edge),
            Err(_) => Err(TilepressError::InvalidParameter(format!(
                "unknown compression rate: {}",
                s
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts;

    #[test]
    fn test_rate_edges_are_within_bounds() {
        for rate in CompressionRate::ALL {
            assert!(rate.edge() >= consts::MIN_TILE_EDGE);
            assert!(rate.edge() <= consts::MAX_TILE_EDGE);
        }
        assert!(CompressionRate::ALL.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_rate_parsing() {
        assert_eq!("low".parse::<CompressionRate>().unwrap(), CompressionRate::Low);
        assert_eq!(
            "very_high".parse::<CompressionRate>().unwrap(),
            CompressionRate::VeryHigh
        );
        assert_eq!("8".parse::<CompressionRate>().unwrap(), CompressionRate::High);
        assert!("3".parse::<CompressionRate>().is_err());
        assert!("extreme".parse::<CompressionRate>().is_err());
        assert!(CompressionRate::try_from(32).is_err());
    }

    #[test]
    fn test_rate_labels() {
        let labels: Vec<_> = CompressionRate::ALL.iter().map(|r| r.to_string()).collect();
        assert_eq!(labels, vec!["low", "medium", "high", "very_high"]);
    }

    #[test]
    fn test_dimensions() {
        let dims = Dimensions::new(640, 480);
        assert_eq!(dims.pixel_count(), 307_200);
        assert_eq!(dims.to_string(), "640x480");
        assert!(dims.contains(639, 479));
        assert!(!dims.contains(640, 0));
        assert!(Dimensions::new(0, 10).is_empty());
    }
}
