//! Opaque image handles.
//!
//! Asset loading and decoding live in the host. The engine only needs an
//! identity it can emit in draw operations and the image's native dimensions
//! for layout math; pixel content never crosses this boundary.

/// Opaque handle to an image loaded by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageId(pub u64);

/// An image handle paired with its native dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageHandle {
    pub id: ImageId,
    /// Native width in pixels.
    pub width: u32,
    /// Native height in pixels.
    pub height: u32,
}

impl ImageHandle {
    pub const fn new(id: ImageId, width: u32, height: u32) -> Self {
        Self { id, width, height }
    }
}
