//! The frame renderer.
//!
//! [`render`] is a pure function from `(container, padding, style, progress,
//! colors)` to an ordered draw-operation list. It holds no state between
//! calls; every frame is recomputed from scratch. The emission order is
//! fixed and is part of the contract: track, off handle, on handle, off
//! decoration, on decoration. Later ops paint over earlier ones.

use dusk_types::color::Color;
use dusk_types::draw::DrawOp;
use dusk_types::error::{DuskError, Result};
use dusk_types::image::ImageHandle;

use crate::layout::{LayoutDirection, Padding};
use crate::style::{DecorationLayout, SwitchStyle};

/// Render one frame of the switch.
///
/// `progress` is the animation position: 0.0 renders the fully-off
/// appearance, 1.0 the fully-on appearance. Values outside `[0, 1]` are
/// clamped. `top_color` and `bottom_color` are the track gradient endpoints,
/// already interpolated by the caller; they are emitted verbatim and never
/// re-derived from `progress`.
///
/// Fails with [`DuskError::Layout`] only when vertical padding leaves no
/// room for the handle. Degenerate travel (container too narrow) pins the
/// handle at its start position; decorations may be pushed out of bounds by
/// small containers. Neither of those fails — animations must never throw
/// mid-frame.
#[allow(clippy::too_many_arguments)]
pub fn render(
    width: f32,
    height: f32,
    padding: Padding,
    direction: LayoutDirection,
    style: &SwitchStyle,
    progress: f32,
    top_color: Color,
    bottom_color: Color,
) -> Result<Vec<DrawOp>> {
    let progress = progress.clamp(0.0, 1.0);
    let pad = padding.resolve(direction);

    // Handle travel. The handle is square, sized to the padded track height.
    let handle_size = height - pad.top - pad.bottom;
    if handle_size <= 0.0 {
        return Err(DuskError::Layout(format!(
            "vertical padding {} leaves no room in container height {height}",
            pad.top + pad.bottom
        )));
    }
    let start_x = pad.left;
    // Zero or negative travel pins the handle at start_x.
    let end_x = (width - pad.right - handle_size).max(start_x);
    let handle_x = start_x + progress * (end_x - start_x);

    let mut ops = Vec::with_capacity(5);

    // Pill-shaped track with vertical gradient.
    ops.push(DrawOp::RoundedRectGradientV {
        x: 0,
        y: 0,
        w: width as u32,
        h: height as u32,
        radius: (height / 2.0) as u16,
        top: top_color,
        bottom: bottom_color,
    });

    // Both handles are always emitted so intermediate blending is
    // well-defined; only the exact extremes fully hide one of them.
    let hs = handle_size as u32;
    let (hx, hy) = (handle_x as i32, pad.top as i32);
    ops.push(DrawOp::Image {
        image: style.off.handle.id,
        x: hx,
        y: hy,
        w: hs,
        h: hs,
        alpha: 1.0 - progress,
    });
    ops.push(DrawOp::Image {
        image: style.on.handle.id,
        x: hx,
        y: hy,
        w: hs,
        h: hs,
        alpha: progress,
    });

    // The off decoration sits past the handle's resting start position; the
    // on decoration mirrors it, occupying the space the handle vacates when
    // on.
    ops.push(decoration(
        width,
        height,
        pad.left,
        pad.right,
        handle_size,
        style.off.decoration,
        &style.decoration,
        false,
        1.0 - progress,
    ));
    ops.push(decoration(
        width,
        height,
        pad.left,
        pad.right,
        handle_size,
        style.on.decoration,
        &style.decoration,
        true,
        progress,
    ));

    Ok(ops)
}

/// Place one decoration image.
///
/// The scale basis is the track height, divided by the image's native width;
/// both rendered dimensions use the same factor, so the image keeps its
/// aspect ratio. Remaining space may go negative for small containers, which
/// pushes the decoration partially out of bounds instead of failing.
#[allow(clippy::too_many_arguments)]
fn decoration(
    width: f32,
    height: f32,
    pad_left: f32,
    pad_right: f32,
    handle_size: f32,
    image: ImageHandle,
    layout: &DecorationLayout,
    mirrored: bool,
    alpha: f32,
) -> DrawOp {
    let downscale = height * layout.scale / image.width as f32;
    let rendered_w = image.width as f32 * downscale;
    let rendered_h = image.height as f32 * downscale;
    let remaining_w = width - handle_size - rendered_w - pad_left - pad_right;
    let remaining_h = height - rendered_h;

    let x = if mirrored {
        pad_left + remaining_w * (1.0 - layout.offset_x)
    } else {
        pad_left + handle_size + remaining_w * layout.offset_x
    };
    let y = remaining_h * layout.offset_y;

    DrawOp::Image {
        image: image.id,
        x: x.round() as i32,
        y: y.round() as i32,
        w: rendered_w as u32,
        h: rendered_h as u32,
        alpha,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StateSkin;
    use crate::test_utils::{image_ops, op_alphas};
    use dusk_types::image::{ImageHandle, ImageId};
    use proptest::prelude::*;

    const HANDLE_ON: u64 = 1;
    const HANDLE_OFF: u64 = 2;
    const DECO_ON: u64 = 3;
    const DECO_OFF: u64 = 4;

    fn style_100(scale: f32, offset_x: f32, offset_y: f32) -> SwitchStyle {
        let state = |handle, decoration| StateSkin {
            handle: ImageHandle::new(ImageId(handle), 100, 100),
            decoration: ImageHandle::new(ImageId(decoration), 100, 100),
            background_top: Color::rgb(1, 2, 3),
            background_bottom: Color::rgb(4, 5, 6),
        };
        SwitchStyle::new(
            state(HANDLE_ON, DECO_ON),
            state(HANDLE_OFF, DECO_OFF),
            crate::style::DecorationLayout {
                scale,
                offset_x,
                offset_y,
            },
        )
        .unwrap()
    }

    fn render_ltr(w: f32, h: f32, padding: Padding, style: &SwitchStyle, p: f32) -> Vec<DrawOp> {
        render(
            w,
            h,
            padding,
            LayoutDirection::Ltr,
            style,
            p,
            Color::rgb(10, 20, 30),
            Color::rgb(40, 50, 60),
        )
        .unwrap()
    }

    #[test]
    fn emission_order_is_fixed() {
        let style = style_100(0.5, 0.5, 0.3);
        let ops = render_ltr(400.0, 200.0, Padding::ZERO, &style, 0.5);
        assert_eq!(ops.len(), 5);
        assert!(matches!(ops[0], DrawOp::RoundedRectGradientV { .. }));
        let images: Vec<u64> = image_ops(&ops).iter().map(|op| op.image.0).collect();
        assert_eq!(images, vec![HANDLE_OFF, HANDLE_ON, DECO_OFF, DECO_ON]);
    }

    #[test]
    fn track_is_full_container_pill_with_verbatim_colors() {
        let style = style_100(0.5, 0.5, 0.3);
        // Caller mid-interpolation colors must pass through untouched.
        let top = Color::rgb(0x66, 0xFF, 0xED);
        let bottom = Color::rgb(0xAF, 0xCA, 0xFF);
        let ops = render(
            400.0,
            200.0,
            Padding::ZERO,
            LayoutDirection::Ltr,
            &style,
            1.0,
            top,
            bottom,
        )
        .unwrap();
        assert_eq!(
            ops[0],
            DrawOp::RoundedRectGradientV {
                x: 0,
                y: 0,
                w: 400,
                h: 200,
                radius: 100,
                top,
                bottom,
            }
        );
    }

    #[test]
    fn midpoint_scenario_400x200() {
        // 400x200, zero padding, 100x100 images, scale 0.5:
        // handle_size = 200, travel 0..200, p = 0.5 puts the handle at 100.
        let style = style_100(0.5, 0.5, 0.3);
        let ops = render_ltr(400.0, 200.0, Padding::ZERO, &style, 0.5);
        let images = image_ops(&ops);

        let off_handle = images[0];
        assert_eq!((off_handle.x, off_handle.y), (100, 0));
        assert_eq!((off_handle.w, off_handle.h), (200, 200));
        assert_eq!(off_handle.alpha, 0.5);

        // downscale = 200 * 0.5 / 100 = 1.0, so decorations render 100x100;
        // remaining = (400 - 200 - 100, 200 - 100) = (100, 100).
        let off_deco = images[2];
        assert_eq!((off_deco.x, off_deco.y), (250, 30));
        assert_eq!((off_deco.w, off_deco.h), (100, 100));
        let on_deco = images[3];
        assert_eq!((on_deco.x, on_deco.y), (50, 30));
    }

    #[test]
    fn extremes_pin_handle_to_travel_ends() {
        let style = style_100(0.5, 0.5, 0.3);
        let padding = Padding::uniform(8.0);
        // handle_size = 184, start = 8, end = 400 - 8 - 184 = 208.
        let at_zero = image_ops(&render_ltr(400.0, 200.0, padding, &style, 0.0))[0];
        assert_eq!(at_zero.x, 8);
        let at_one = image_ops(&render_ltr(400.0, 200.0, padding, &style, 1.0))[0];
        assert_eq!(at_one.x, 208);
    }

    #[test]
    fn handle_y_is_top_padding() {
        let style = style_100(0.5, 0.5, 0.3);
        let ops = render_ltr(400.0, 200.0, Padding::new(4.0, 6.0, 10.0, 12.0), &style, 0.3);
        let handle = image_ops(&ops)[0];
        assert_eq!(handle.y, 10);
        assert_eq!(handle.h, 178); // 200 - 10 - 12
    }

    #[test]
    fn rtl_resolves_start_to_right_edge() {
        let style = style_100(0.5, 0.5, 0.3);
        let padding = Padding::new(10.0, 30.0, 0.0, 0.0);
        let ltr = image_ops(&render_ltr(400.0, 200.0, padding, &style, 0.0))[0];
        assert_eq!(ltr.x, 10);
        let ops = render(
            400.0,
            200.0,
            padding,
            LayoutDirection::Rtl,
            &style,
            0.0,
            Color::BLACK,
            Color::WHITE,
        )
        .unwrap();
        assert_eq!(image_ops(&ops)[0].x, 30);
    }

    #[test]
    fn vertical_padding_exceeding_height_is_layout_error() {
        let style = style_100(0.5, 0.5, 0.3);
        let err = render(
            400.0,
            200.0,
            Padding::new(0.0, 0.0, 150.0, 100.0),
            LayoutDirection::Ltr,
            &style,
            0.5,
            Color::BLACK,
            Color::WHITE,
        )
        .unwrap_err();
        assert!(matches!(err, DuskError::Layout(_)));
    }

    #[test]
    fn exactly_consumed_height_is_layout_error() {
        let style = style_100(0.5, 0.5, 0.3);
        let err = render(
            400.0,
            200.0,
            Padding::symmetric(0.0, 100.0),
            LayoutDirection::Ltr,
            &style,
            0.5,
            Color::BLACK,
            Color::WHITE,
        )
        .unwrap_err();
        assert!(matches!(err, DuskError::Layout(_)));
    }

    #[test]
    fn degenerate_travel_pins_handle_at_start() {
        // Container narrower than the handle: end_x would be negative.
        let style = style_100(0.5, 0.5, 0.3);
        for p in [0.0, 0.25, 0.5, 1.0] {
            let ops = render_ltr(100.0, 200.0, Padding::ZERO, &style, p);
            assert_eq!(image_ops(&ops)[0].x, 0);
        }
    }

    #[test]
    fn progress_outside_range_is_clamped() {
        let style = style_100(0.5, 0.5, 0.3);
        let over = render_ltr(400.0, 200.0, Padding::ZERO, &style, 1.5);
        let exact = render_ltr(400.0, 200.0, Padding::ZERO, &style, 1.0);
        assert_eq!(over, exact);
        let under = render_ltr(400.0, 200.0, Padding::ZERO, &style, -0.5);
        let zero = render_ltr(400.0, 200.0, Padding::ZERO, &style, 0.0);
        assert_eq!(under, zero);
    }

    #[test]
    fn decorations_size_from_own_image() {
        // Unequal decoration images: each must be scaled from its own
        // native width, not the other state's.
        let state = |handle, decoration, dw, dh| StateSkin {
            handle: ImageHandle::new(ImageId(handle), 64, 64),
            decoration: ImageHandle::new(ImageId(decoration), dw, dh),
            background_top: Color::BLACK,
            background_bottom: Color::WHITE,
        };
        let style = SwitchStyle::new(
            state(HANDLE_ON, DECO_ON, 50, 100),
            state(HANDLE_OFF, DECO_OFF, 200, 100),
            crate::style::DecorationLayout {
                scale: 0.5,
                offset_x: 0.0,
                offset_y: 0.0,
            },
        )
        .unwrap();
        let ops = render_ltr(400.0, 200.0, Padding::ZERO, &style, 0.5);
        let images = image_ops(&ops);
        // off: downscale = 200*0.5/200 = 0.5 -> 100x50.
        assert_eq!((images[2].w, images[2].h), (100, 50));
        // on: downscale = 200*0.5/50 = 2.0 -> 100x200.
        assert_eq!((images[3].w, images[3].h), (100, 200));
    }

    #[test]
    fn small_container_pushes_decoration_out_of_bounds() {
        // Negative remaining width must offset, not fail.
        let style = style_100(1.0, 1.0, 0.0);
        let ops = render_ltr(120.0, 100.0, Padding::ZERO, &style, 0.0);
        let off_deco = image_ops(&ops)[2];
        // downscale = 100/100 = 1.0; remaining_w = 120 - 100 - 100 = -80;
        // x = 0 + 100 + (-80 * 1.0) = 20.
        assert_eq!(off_deco.x, 20);
    }

    #[test]
    fn decoration_offsets_round_to_nearest() {
        // offset_y 0.3 of remaining 59 = 17.7, which rounds up to 18
        // (a truncating conversion would give 17).
        let style = style_100(0.41, 0.0, 0.3);
        let ops = render_ltr(400.0, 100.0, Padding::ZERO, &style, 0.0);
        let off_deco = image_ops(&ops)[2];
        assert_eq!(off_deco.h, 41);
        assert_eq!(off_deco.y, 18);
    }

    #[test]
    fn render_is_idempotent() {
        let style = style_100(0.6, 0.5, 0.3);
        let a = render_ltr(313.0, 127.0, Padding::uniform(7.5), &style, 0.37);
        let b = render_ltr(313.0, 127.0, Padding::uniform(7.5), &style, 0.37);
        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn handle_and_decoration_alphas_sum_to_one(p in 0.0f32..=1.0) {
            let style = style_100(0.5, 0.5, 0.3);
            let ops = render_ltr(400.0, 200.0, Padding::uniform(8.0), &style, p);
            let alphas = op_alphas(&ops);
            prop_assert_eq!(alphas[0] + alphas[1], 1.0);
            prop_assert_eq!(alphas[2] + alphas[3], 1.0);
        }

        #[test]
        fn handle_x_is_monotonic_in_progress(a in 0.0f32..=1.0, b in 0.0f32..=1.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let style = style_100(0.5, 0.5, 0.3);
            let padding = Padding::uniform(8.0);
            let x_lo = image_ops(&render_ltr(400.0, 200.0, padding, &style, lo))[0].x;
            let x_hi = image_ops(&render_ltr(400.0, 200.0, padding, &style, hi))[0].x;
            prop_assert!(x_lo <= x_hi);
        }

        #[test]
        fn always_emits_five_ops(p in 0.0f32..=1.0, w in 1.0f32..1000.0, h in 1.0f32..500.0) {
            let style = style_100(0.5, 0.5, 0.3);
            let ops = render_ltr(w, h, Padding::ZERO, &style, p);
            prop_assert_eq!(ops.len(), 5);
        }
    }
}
