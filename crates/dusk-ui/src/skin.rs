//! Skin definitions loaded from TOML.
//!
//! A skin file describes everything about a style except the images
//! themselves: gradient palettes per state and the decoration placement
//! fractions. The host loads the four images however it likes and pairs
//! them with the definition via [`StyleDef::into_style`].
//!
//! Two skins ship embedded as TOML constants so the engine is usable out of
//! the box.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use dusk_types::color::Color;
use dusk_types::error::{DuskError, Result};
use dusk_types::image::ImageHandle;

use crate::style::{DecorationLayout, StateSkin, SwitchStyle};

/// A switch skin definition (one TOML document).
#[derive(Debug, Clone, Deserialize)]
pub struct StyleDef {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub decoration: DecorationDef,
    pub on: StateDef,
    pub off: StateDef,
}

/// Decoration placement parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct DecorationDef {
    #[serde(default = "default_scale")]
    pub scale: f32,
    #[serde(default = "default_offset")]
    pub offset_x: f32,
    #[serde(default = "default_offset")]
    pub offset_y: f32,
}

/// Per-state gradient palette, colors as `#RRGGBB` / `#RRGGBBAA` strings.
#[derive(Debug, Clone, Deserialize)]
pub struct StateDef {
    pub background_top: String,
    pub background_bottom: String,
}

fn default_scale() -> f32 {
    0.5
}
fn default_offset() -> f32 {
    0.5
}

impl Default for DecorationDef {
    fn default() -> Self {
        Self {
            scale: default_scale(),
            offset_x: default_offset(),
            offset_y: default_offset(),
        }
    }
}

/// The four host-loaded images a skin definition is paired with.
#[derive(Debug, Clone, Copy)]
pub struct StyleImages {
    pub handle_on: ImageHandle,
    pub handle_off: ImageHandle,
    pub decoration_on: ImageHandle,
    pub decoration_off: ImageHandle,
}

impl StyleDef {
    /// Parse a skin definition from TOML text.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Load a skin definition from a TOML file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let def = Self::from_toml_str(&raw)?;
        log::debug!("loaded switch skin '{}' from {}", def.name, path.display());
        Ok(def)
    }

    /// Combine the definition with host-loaded images into a validated
    /// [`SwitchStyle`].
    pub fn into_style(self, images: StyleImages) -> Result<SwitchStyle> {
        let on = StateSkin {
            handle: images.handle_on,
            decoration: images.decoration_on,
            background_top: color_field("on.background_top", &self.on.background_top)?,
            background_bottom: color_field("on.background_bottom", &self.on.background_bottom)?,
        };
        let off = StateSkin {
            handle: images.handle_off,
            decoration: images.decoration_off,
            background_top: color_field("off.background_top", &self.off.background_top)?,
            background_bottom: color_field("off.background_bottom", &self.off.background_bottom)?,
        };
        SwitchStyle::new(
            on,
            off,
            DecorationLayout {
                scale: self.decoration.scale,
                offset_x: self.decoration.offset_x,
                offset_y: self.decoration.offset_y,
            },
        )
    }
}

fn color_field(field: &str, value: &str) -> Result<Color> {
    parse_hex_color(value)
        .ok_or_else(|| DuskError::Config(format!("{field}: invalid color '{value}'")))
}

/// Parse a `#RRGGBB` or `#RRGGBBAA` color string.
pub fn parse_hex_color(s: &str) -> Option<Color> {
    let s = s.strip_prefix('#')?;
    if s.len() == 6 {
        let r = u8::from_str_radix(&s[0..2], 16).ok()?;
        let g = u8::from_str_radix(&s[2..4], 16).ok()?;
        let b = u8::from_str_radix(&s[4..6], 16).ok()?;
        Some(Color::rgb(r, g, b))
    } else if s.len() == 8 {
        let r = u8::from_str_radix(&s[0..2], 16).ok()?;
        let g = u8::from_str_radix(&s[2..4], 16).ok()?;
        let b = u8::from_str_radix(&s[4..6], 16).ok()?;
        let a = u8::from_str_radix(&s[6..8], 16).ok()?;
        Some(Color::rgba(r, g, b, a))
    } else {
        None
    }
}

// ---------------------------------------------------------------------------
// Built-in skins, embedded as TOML constants.
// ---------------------------------------------------------------------------

/// Day sky fading into a starry night.
pub const DAY_NIGHT: &str = r##"
name = "day-night"

[decoration]
scale = 0.6
offset_x = 0.5
offset_y = 0.3

[on]
background_top = "#66FFED"
background_bottom = "#FFEEB2"

[off]
background_top = "#2B4485"
background_bottom = "#AFCAFF"
"##;

/// Warm citrus palette.
pub const CITRUS: &str = r##"
name = "citrus"

[decoration]
scale = 0.3
offset_x = 0.1
offset_y = 0.3

[on]
background_top = "#FFD954"
background_bottom = "#FF9736"

[off]
background_top = "#FFA336"
background_bottom = "#FFE24B"
"##;

/// Build the built-in day/night style with the given images.
pub fn day_night(images: StyleImages) -> Result<SwitchStyle> {
    StyleDef::from_toml_str(DAY_NIGHT)?.into_style(images)
}

/// Build the built-in citrus style with the given images.
pub fn citrus(images: StyleImages) -> Result<SwitchStyle> {
    StyleDef::from_toml_str(CITRUS)?.into_style(images)
}
