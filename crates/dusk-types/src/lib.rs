//! Foundation types for dusk.
//!
//! This crate contains the small, dependency-free value types shared by the
//! rendering engine and its hosts: colors, opaque image handles, the draw
//! operation vocabulary, and the error type.

pub mod color;
pub mod draw;
pub mod error;
pub mod image;
