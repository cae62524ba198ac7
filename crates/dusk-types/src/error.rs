//! Error types for dusk.

use std::io;

/// Errors produced by the dusk engine.
#[derive(Debug, thiserror::Error)]
pub enum DuskError {
    /// Invalid style or skin configuration. Raised at construction time;
    /// never mid-frame.
    #[error("config error: {0}")]
    Config(String),

    /// Geometry that cannot be rendered meaningfully (padding exceeds the
    /// container height). All other degenerate geometries render clamped
    /// output instead of failing.
    #[error("layout error: {0}")]
    Layout(String),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, DuskError>;
