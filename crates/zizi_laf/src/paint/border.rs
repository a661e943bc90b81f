//! Border objects referenced from `.border` keys

use super::geometry::{focus_ring_rects, FocusRing};
use super::{first_color, ComponentState};
use crate::context::ThemeContext;
use std::fmt;
use zizi_core::{Color, Insets, Rect};

pub trait Border: Send + Sync + fmt::Debug {
    /// Device-pixel insets for a component with the given logical margin
    fn insets(&self, ctx: &ThemeContext, margin: Insets) -> Insets;

    /// Corner diameter, device pixels
    fn arc(&self, _ctx: &ThemeContext) -> f32 {
        0.0
    }

    /// Area left for the component's content
    fn content_bounds(&self, ctx: &ThemeContext, bounds: Rect, margin: Insets) -> Rect {
        bounds.subtract_insets(&self.insets(ctx, margin))
    }

    /// Outline shapes, `None` for borders that paint nothing
    fn outline(&self, _ctx: &ThemeContext, _bounds: Rect) -> Option<FocusRing> {
        None
    }
}

/// Paints nothing, takes no space
#[derive(Clone, Copy, Debug, Default)]
pub struct EmptyBorder;

impl Border for EmptyBorder {
    fn insets(&self, _ctx: &ThemeContext, _margin: Insets) -> Insets {
        Insets::ZERO
    }
}

/// Paints nothing, reserves the scaled margin
#[derive(Clone, Copy, Debug, Default)]
pub struct MarginBorder;

impl Border for MarginBorder {
    fn insets(&self, ctx: &ThemeContext, margin: Insets) -> Insets {
        ctx.scale().scale(margin)
    }
}

fn focus_width(ctx: &ThemeContext) -> f32 {
    ctx.scale()
        .scale(ctx.defaults().int_or("Component.focusWidth", 0) as f32)
}

/// Scaled margin plus room for the focus ring and the border line
fn outlined_insets(ctx: &ThemeContext, margin: Insets) -> Insets {
    let scale = ctx.scale();
    let extra = focus_width(ctx) + scale.scale(1.0);
    margin.map(|v| (scale.scale(v as f32) + extra).round() as i32)
}

fn outline_for(ctx: &ThemeContext, bounds: Rect, arc: f32) -> FocusRing {
    focus_ring_rects(bounds, focus_width(ctx), ctx.scale().scale(1.0), arc)
}

/// Square line border with focus ring space
#[derive(Clone, Copy, Debug, Default)]
pub struct ComponentBorder;

impl Border for ComponentBorder {
    fn insets(&self, ctx: &ThemeContext, margin: Insets) -> Insets {
        outlined_insets(ctx, margin)
    }

    fn outline(&self, ctx: &ThemeContext, bounds: Rect) -> Option<FocusRing> {
        Some(outline_for(ctx, bounds, 0.0))
    }
}

/// Line border with `Component.arc` corners
#[derive(Clone, Copy, Debug)]
pub struct RoundBorder {
    arc_key: &'static str,
}

impl RoundBorder {
    pub fn with_arc_key(arc_key: &'static str) -> Self {
        Self { arc_key }
    }
}

impl Default for RoundBorder {
    fn default() -> Self {
        Self::with_arc_key("Component.arc")
    }
}

impl Border for RoundBorder {
    fn insets(&self, ctx: &ThemeContext, margin: Insets) -> Insets {
        outlined_insets(ctx, margin)
    }

    fn arc(&self, ctx: &ThemeContext) -> f32 {
        let d = ctx.defaults();
        let arc = d
            .int(self.arc_key)
            .unwrap_or_else(|| d.int_or("Component.arc", 0));
        ctx.scale().scale(arc as f32)
    }

    fn outline(&self, ctx: &ThemeContext, bounds: Rect) -> Option<FocusRing> {
        Some(outline_for(ctx, bounds, self.arc(ctx)))
    }
}

/// Round border with `Button.arc` corners and a vertical border gradient
#[derive(Clone, Copy, Debug)]
pub struct ButtonBorder {
    round: RoundBorder,
}

impl Default for ButtonBorder {
    fn default() -> Self {
        Self {
            round: RoundBorder::with_arc_key("Button.arc"),
        }
    }
}

impl ButtonBorder {
    /// Top and bottom border colors for `state`
    pub fn border_colors(&self, ctx: &ThemeContext, state: ComponentState) -> (Color, Color) {
        let d = ctx.defaults();
        let fallback = d.color_or("Component.borderColor", Color::from_hex(0xC4C4C4));

        if !state.enabled {
            let c = first_color(d, ["Button.disabledBorderColor", "Component.disabledBorderColor"])
                .unwrap_or(fallback);
            return (c, c);
        }
        if state.focused {
            let key = if state.default_button {
                "Button.default.focusedBorderColor"
            } else {
                "Button.focusedBorderColor"
            };
            if let Some(c) = first_color(d, [key, "Button.focusedBorderColor"]) {
                return (c, c);
            }
        }

        let (start, end) = if state.default_button {
            ("Button.default.startBorderColor", "Button.default.endBorderColor")
        } else {
            ("Button.startBorderColor", "Button.endBorderColor")
        };
        let start = first_color(d, [start, "Button.startBorderColor"]).unwrap_or(fallback);
        let end = first_color(d, [end, "Button.endBorderColor"]).unwrap_or(start);
        (start, end)
    }
}

impl Border for ButtonBorder {
    fn insets(&self, ctx: &ThemeContext, margin: Insets) -> Insets {
        self.round.insets(ctx, margin)
    }

    fn arc(&self, ctx: &ThemeContext) -> f32 {
        self.round.arc(ctx)
    }

    fn outline(&self, ctx: &ThemeContext, bounds: Rect) -> Option<FocusRing> {
        self.round.outline(ctx, bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Diagnostics;
    use crate::scale::UiScale;
    use crate::themes::ThemeVariant;
    use crate::value::ThemeValue;

    fn context(scale: f32) -> ThemeContext {
        ThemeContext::new(
            ThemeVariant::Daylight,
            [
                ("Component.focusWidth", ThemeValue::Int(2)),
                ("Component.arc", ThemeValue::Int(5)),
                ("Button.arc", ThemeValue::Int(6)),
                ("Button.startBorderColor", ThemeValue::Color(Color::RED)),
                ("Button.endBorderColor", ThemeValue::Color(Color::BLUE)),
                ("Button.focusedBorderColor", ThemeValue::Color(Color::GREEN)),
            ]
            .into_iter()
            .collect(),
            UiScale::from_raw(scale),
            Diagnostics::new(),
        )
    }

    #[test]
    fn empty_and_margin_borders() {
        let ctx = context(2.0);
        let margin = Insets::new(1, 2, 3, 4);
        assert_eq!(EmptyBorder.insets(&ctx, margin), Insets::ZERO);
        assert_eq!(MarginBorder.insets(&ctx, margin), Insets::new(2, 4, 6, 8));
        assert!(MarginBorder.outline(&ctx, Rect::new(0.0, 0.0, 10.0, 10.0)).is_none());
    }

    #[test]
    fn outlined_borders_add_focus_and_line_width() {
        let ctx = context(1.0);
        let margin = Insets::new(2, 14, 2, 14);
        let expected = Insets::new(5, 17, 5, 17);
        assert_eq!(ComponentBorder.insets(&ctx, margin), expected);
        assert_eq!(RoundBorder::default().insets(&ctx, margin), expected);
        assert_eq!(ButtonBorder::default().insets(&ctx, margin), expected);

        let scaled = context(1.5);
        // 2*1.5 + 3 + 1.5 = 7.5, rounded half up
        assert_eq!(ComponentBorder.insets(&scaled, margin).top, 8);
    }

    #[test]
    fn arcs_come_from_their_keys() {
        let ctx = context(2.0);
        assert_eq!(ComponentBorder.arc(&ctx), 0.0);
        assert_eq!(RoundBorder::default().arc(&ctx), 10.0);
        assert_eq!(ButtonBorder::default().arc(&ctx), 12.0);
        assert_eq!(RoundBorder::with_arc_key("Missing.arc").arc(&ctx), 10.0);
    }

    #[test]
    fn content_bounds_subtract_insets() {
        let ctx = context(1.0);
        let content = ComponentBorder.content_bounds(
            &ctx,
            Rect::new(0.0, 0.0, 100.0, 30.0),
            Insets::new(2, 14, 2, 14),
        );
        assert_eq!(content, Rect::new(17.0, 5.0, 66.0, 20.0));
    }

    #[test]
    fn button_border_colors() {
        let ctx = context(1.0);
        let border = ButtonBorder::default();
        assert_eq!(border.border_colors(&ctx, ComponentState::new()), (Color::RED, Color::BLUE));
        assert_eq!(
            border.border_colors(&ctx, ComponentState::new().focused()),
            (Color::GREEN, Color::GREEN)
        );
        // default-button keys fall back to the plain ones
        assert_eq!(
            border.border_colors(&ctx, ComponentState::new().default_button()),
            (Color::RED, Color::BLUE)
        );
    }
}
