//! The stateful switch controller.
//!
//! [`Switch`] owns the only persistent state in the system: the boolean
//! value plus the progress and color animations. Each display tick the host
//! advances it with [`Switch::tick`] and asks it to render; the frame itself
//! comes from the pure engine in [`crate::render`].

use dusk_types::color::Color;
use dusk_types::draw::DrawOp;
use dusk_types::error::Result;

use crate::animation::{ColorTween, Tween, easing};
use crate::layout::{LayoutDirection, Padding};
use crate::render;
use crate::style::SwitchStyle;

/// Time for a full off-to-on travel.
const TOGGLE_ANIM_MS: u32 = 150;

/// An animated on/off switch.
pub struct Switch {
    checked: bool,
    style: SwitchStyle,
    progress: Tween,
    top: ColorTween,
    bottom: ColorTween,
}

impl Switch {
    /// Create a switch resting in the given state (no animation pending).
    pub fn new(style: SwitchStyle, checked: bool) -> Self {
        let state = if checked { &style.on } else { &style.off };
        let resting = if checked { 1.0 } else { 0.0 };
        Self {
            checked,
            progress: Tween::settled(resting, TOGGLE_ANIM_MS, easing::ease_in_out_quad),
            top: ColorTween::settled(state.background_top, TOGGLE_ANIM_MS, easing::ease_in_out_quad),
            bottom: ColorTween::settled(
                state.background_bottom,
                TOGGLE_ANIM_MS,
                easing::ease_in_out_quad,
            ),
            style,
        }
    }

    /// Current boolean state.
    pub fn checked(&self) -> bool {
        self.checked
    }

    /// Current animation progress (0.0 = off rendering, 1.0 = on).
    pub fn progress(&self) -> f32 {
        self.progress.value()
    }

    /// Whether any animation is still running.
    pub fn is_animating(&self) -> bool {
        !(self.progress.is_finished() && self.top.is_finished() && self.bottom.is_finished())
    }

    /// Activation entry point: flip the state and return the new value.
    ///
    /// Flipping mid-animation redirects the running animations toward the
    /// new targets from their current values; nothing jumps.
    pub fn toggle(&mut self) -> bool {
        self.set_checked(!self.checked);
        self.checked
    }

    /// Set the state explicitly. A no-op when already in that state.
    pub fn set_checked(&mut self, checked: bool) {
        if self.checked == checked {
            return;
        }
        self.checked = checked;
        let state = if checked {
            &self.style.on
        } else {
            &self.style.off
        };
        self.progress.retarget(if checked { 1.0 } else { 0.0 });
        self.top.retarget(state.background_top);
        self.bottom.retarget(state.background_bottom);
    }

    /// Advance the animations by `dt_ms` milliseconds.
    pub fn tick(&mut self, dt_ms: u32) {
        self.progress.tick(dt_ms);
        self.top.tick(dt_ms);
        self.bottom.tick(dt_ms);
    }

    /// Render the current frame.
    pub fn render(
        &self,
        width: f32,
        height: f32,
        padding: Padding,
        direction: LayoutDirection,
    ) -> Result<Vec<DrawOp>> {
        render::render(
            width,
            height,
            padding,
            direction,
            &self.style,
            self.progress.value(),
            self.top.value(),
            self.bottom.value(),
        )
    }

    /// The gradient colors the track would use this frame.
    pub fn colors(&self) -> (Color, Color) {
        (self.top.value(), self.bottom.value())
    }
}
