//! dusk-ui: a skinnable, animated toggle switch rendering engine.
//!
//! The core is [`render`], a pure function that turns a container size,
//! padding, a [`SwitchStyle`] and the current animation state into an
//! ordered list of draw operations. Hosts replay the operations against
//! their own surface; nothing here touches a display.
//!
//! [`Switch`] is the optional stateful wrapper that owns the boolean state
//! and the progress/color animations and re-invokes the renderer per tick.

pub mod animation;
pub mod layout;
pub mod render;
pub mod skin;
pub mod style;
pub mod switch;

#[cfg(test)]
pub(crate) mod test_utils;

pub use dusk_types::color;
pub use layout::{LayoutDirection, Padding};
pub use render::render;
pub use style::SwitchStyle;
pub use switch::Switch;
