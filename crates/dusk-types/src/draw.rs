//! Draw operations.
//!
//! The renderer's entire output is an ordered `Vec<DrawOp>`. Later operations
//! paint over earlier ones; hosts replay the sequence against whatever
//! surface they own.

use crate::color::Color;
use crate::image::ImageId;

/// A single draw operation in a rendered frame.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Filled rounded rectangle with a vertical gradient (top to bottom).
    RoundedRectGradientV {
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        /// Corner radius in pixels.
        radius: u16,
        top: Color,
        bottom: Color,
    },
    /// Image blit at a destination rectangle with an opacity multiplier.
    Image {
        image: ImageId,
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        /// Opacity in `[0.0, 1.0]`; 0.0 is fully transparent.
        alpha: f32,
    },
}

impl DrawOp {
    /// Opacity of an image op; `None` for shape fills.
    pub fn alpha(&self) -> Option<f32> {
        match self {
            Self::Image { alpha, .. } => Some(*alpha),
            Self::RoundedRectGradientV { .. } => None,
        }
    }

    /// Destination position of the op.
    pub fn position(&self) -> (i32, i32) {
        match self {
            Self::RoundedRectGradientV { x, y, .. } | Self::Image { x, y, .. } => (*x, *y),
        }
    }
}
