//! Padding and layout direction resolution.
//!
//! Padding is specified with logical `start`/`end` edges so the same values
//! work in left-to-right and right-to-left layouts. The renderer only ever
//! sees physical insets produced by [`Padding::resolve`].

/// Horizontal layout direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutDirection {
    /// Left-to-right: `start` is the left edge.
    Ltr,
    /// Right-to-left: `start` is the right edge.
    Rtl,
}

/// Padding specification with logical horizontal edges.
///
/// Values are in the same units as the container size passed to the
/// renderer (pixels or any other consistent unit).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Padding {
    /// Leading-edge padding (left in LTR, right in RTL).
    pub start: f32,
    /// Trailing-edge padding (right in LTR, left in RTL).
    pub end: f32,
    /// Top padding.
    pub top: f32,
    /// Bottom padding.
    pub bottom: f32,
}

/// Physical insets after resolving against a layout direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedPadding {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Padding {
    /// Zero padding on all sides.
    pub const ZERO: Self = Self::uniform(0.0);

    /// Create uniform padding on all sides.
    pub const fn uniform(p: f32) -> Self {
        Self {
            start: p,
            end: p,
            top: p,
            bottom: p,
        }
    }

    /// Create symmetric padding (horizontal and vertical).
    pub const fn symmetric(h: f32, v: f32) -> Self {
        Self {
            start: h,
            end: h,
            top: v,
            bottom: v,
        }
    }

    /// Create padding with individual edge values.
    pub const fn new(start: f32, end: f32, top: f32, bottom: f32) -> Self {
        Self {
            start,
            end,
            top,
            bottom,
        }
    }

    /// Total horizontal padding (start + end).
    pub fn horizontal(&self) -> f32 {
        self.start + self.end
    }

    /// Total vertical padding (top + bottom).
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }

    /// Map logical edges to physical insets for the given direction.
    pub fn resolve(&self, direction: LayoutDirection) -> ResolvedPadding {
        let (left, right) = match direction {
            LayoutDirection::Ltr => (self.start, self.end),
            LayoutDirection::Rtl => (self.end, self.start),
        };
        ResolvedPadding {
            left,
            right,
            top: self.top,
            bottom: self.bottom,
        }
    }
}
