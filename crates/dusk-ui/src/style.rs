//! Switch styles.
//!
//! A [`SwitchStyle`] is one visual skin: per-state handle and decoration
//! images, per-state background gradient colors, and the normalized
//! parameters controlling decoration placement. Styles are immutable values
//! validated once at construction; the renderer never re-checks them.

use dusk_types::color::Color;
use dusk_types::error::{DuskError, Result};
use dusk_types::image::ImageHandle;

/// Visuals for one of the two switch states.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateSkin {
    /// Image drawn as the sliding handle.
    pub handle: ImageHandle,
    /// Secondary image layered onto the track (clouds, stars, ...).
    pub decoration: ImageHandle,
    /// Top endpoint of the track's vertical background gradient.
    pub background_top: Color,
    /// Bottom endpoint of the track's vertical background gradient.
    pub background_bottom: Color,
}

/// Normalized decoration placement parameters, shared by both states.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecorationLayout {
    /// Fraction of the track height used as the decoration size basis.
    pub scale: f32,
    /// Horizontal position within the decoration's free space.
    pub offset_x: f32,
    /// Vertical position within the decoration's free space.
    pub offset_y: f32,
}

/// One visual skin for the switch. Construct with [`SwitchStyle::new`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwitchStyle {
    pub on: StateSkin,
    pub off: StateSkin,
    pub decoration: DecorationLayout,
}

impl SwitchStyle {
    /// Create a style, validating the configuration.
    ///
    /// Fails with [`DuskError::Config`] if any decoration fraction lies
    /// outside `[0.0, 1.0]` or any image handle has a zero dimension.
    pub fn new(on: StateSkin, off: StateSkin, decoration: DecorationLayout) -> Result<Self> {
        for (name, value) in [
            ("decoration scale", decoration.scale),
            ("decoration horizontal offset", decoration.offset_x),
            ("decoration vertical offset", decoration.offset_y),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(DuskError::Config(format!(
                    "{name} must be within [0, 1], got {value}"
                )));
            }
        }
        for (name, image) in [
            ("on handle", on.handle),
            ("on decoration", on.decoration),
            ("off handle", off.handle),
            ("off decoration", off.decoration),
        ] {
            if image.width == 0 || image.height == 0 {
                return Err(DuskError::Config(format!(
                    "{name} image has zero dimension ({}x{})",
                    image.width, image.height
                )));
            }
        }
        Ok(Self {
            on,
            off,
            decoration,
        })
    }
}
