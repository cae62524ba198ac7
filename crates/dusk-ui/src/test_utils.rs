//! Shared test helpers for inspecting emitted draw-operation sequences.

use dusk_types::draw::DrawOp;
use dusk_types::image::ImageId;

/// Flattened view of a [`DrawOp::Image`] for assertions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageOp {
    pub image: ImageId,
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
    pub alpha: f32,
}

/// Extract the image ops from a frame, in emission order.
pub fn image_ops(ops: &[DrawOp]) -> Vec<ImageOp> {
    ops.iter()
        .filter_map(|op| match *op {
            DrawOp::Image {
                image,
                x,
                y,
                w,
                h,
                alpha,
            } => Some(ImageOp {
                image,
                x,
                y,
                w,
                h,
                alpha,
            }),
            DrawOp::RoundedRectGradientV { .. } => None,
        })
        .collect()
}

/// Alphas of the image ops, in emission order.
pub fn op_alphas(ops: &[DrawOp]) -> Vec<f32> {
    ops.iter().filter_map(DrawOp::alpha).collect()
}
