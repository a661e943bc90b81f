//! Icon objects referenced from `.icon` keys

use super::{first_color, ComponentState};
use crate::context::ThemeContext;
use std::fmt;
use zizi_core::{Color, Dimension};

/// Logical check box edge length, without the focus ring
const ICON_SIZE: i32 = 15;

/// Colors for one icon paint
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IconStyle {
    pub border: Color,
    pub background: Color,
    /// Check mark (or radio dot); `None` when unselected
    pub mark: Option<Color>,
    pub focus: Option<Color>,
}

pub trait Icon: Send + Sync + fmt::Debug {
    /// Device-pixel size
    fn size(&self, ctx: &ThemeContext) -> Dimension;

    fn style(&self, ctx: &ThemeContext, state: ComponentState) -> IconStyle;
}

/// Square selection icon read from `<prefix>.*` keys, with
/// `CheckBox.icon.*` as the fallback
#[derive(Clone, Copy, Debug)]
pub struct CheckBoxIcon {
    prefix: &'static str,
}

impl CheckBoxIcon {
    const BORDER: Color = Color::from_hex(0xB0B0B0);
    const BACKGROUND: Color = Color::WHITE;
    const MARK: Color = Color::from_hex(0x4F9EE3);
    const DISABLED: Color = Color::from_hex(0xBDBDBD);

    pub fn with_prefix(prefix: &'static str) -> Self {
        Self { prefix }
    }

    fn color(&self, ctx: &ThemeContext, names: &[&str]) -> Option<Color> {
        let keys = names.iter().flat_map(|name| {
            [
                format!("{}.{name}", self.prefix),
                format!("CheckBox.icon.{name}"),
            ]
        });
        first_color(ctx.defaults(), keys)
    }
}

impl Default for CheckBoxIcon {
    fn default() -> Self {
        Self::with_prefix("CheckBox.icon")
    }
}

impl Icon for CheckBoxIcon {
    fn size(&self, ctx: &ThemeContext) -> Dimension {
        let focus_width = ctx.defaults().int_or("Component.focusWidth", 0);
        let edge = ctx.scale().scale(ICON_SIZE + 2 * focus_width);
        Dimension::new(edge, edge)
    }

    fn style(&self, ctx: &ThemeContext, state: ComponentState) -> IconStyle {
        let border_names: &[&str] = if !state.enabled {
            &["disabledBorderColor"]
        } else if state.selected && state.focused {
            &["selectedFocusedBorderColor", "focusedBorderColor", "selectedBorderColor"]
        } else if state.focused {
            &["focusedBorderColor"]
        } else if state.selected {
            &["selectedBorderColor"]
        } else {
            &[]
        };
        let border = self
            .color(ctx, border_names)
            .or_else(|| self.color(ctx, &["borderColor"]))
            .unwrap_or(Self::BORDER);

        let background_names: &[&str] = if !state.enabled {
            &["disabledBackground"]
        } else if state.pressed {
            &["pressedBackground"]
        } else if state.selected {
            &["selectedBackground"]
        } else if state.hovered {
            &["hoverBackground"]
        } else {
            &[]
        };
        let background = self
            .color(ctx, background_names)
            .or_else(|| self.color(ctx, &["background"]))
            .unwrap_or(Self::BACKGROUND);

        let mark = state.selected.then(|| {
            if state.enabled {
                self.color(ctx, &["checkmarkColor"]).unwrap_or(Self::MARK)
            } else {
                self.color(ctx, &["disabledCheckmarkColor"])
                    .unwrap_or(Self::DISABLED)
            }
        });

        let focus = (state.enabled && state.focused).then(|| {
            self.color(ctx, &["focusColor"])
                .or_else(|| ctx.defaults().color("Component.focusColor"))
                .unwrap_or(Self::MARK)
        });

        IconStyle {
            border,
            background,
            mark,
            focus,
        }
    }
}

/// Round selection icon; shares the check box palette unless
/// `RadioButton.icon.*` keys override it
#[derive(Clone, Copy, Debug)]
pub struct RadioButtonIcon {
    inner: CheckBoxIcon,
}

impl Default for RadioButtonIcon {
    fn default() -> Self {
        Self {
            inner: CheckBoxIcon::with_prefix("RadioButton.icon"),
        }
    }
}

impl RadioButtonIcon {
    /// Diameter of the selection dot, device pixels
    pub fn dot_size(&self, ctx: &ThemeContext) -> f32 {
        let d = ctx.defaults();
        let dot = d
            .int("RadioButton.icon.centerDiameter")
            .unwrap_or(8);
        ctx.scale().scale(dot as f32)
    }
}

impl Icon for RadioButtonIcon {
    fn size(&self, ctx: &ThemeContext) -> Dimension {
        self.inner.size(ctx)
    }

    fn style(&self, ctx: &ThemeContext, state: ComponentState) -> IconStyle {
        self.inner.style(ctx, state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Diagnostics;
    use crate::scale::UiScale;
    use crate::themes::ThemeVariant;
    use crate::value::ThemeValue;
    use pretty_assertions::assert_eq;

    fn context(entries: Vec<(&str, ThemeValue)>, scale: f32) -> ThemeContext {
        ThemeContext::new(
            ThemeVariant::Daylight,
            entries.into_iter().collect(),
            UiScale::from_raw(scale),
            Diagnostics::new(),
        )
    }

    #[test]
    fn size_includes_focus_ring() {
        let ctx = context(vec![("Component.focusWidth", ThemeValue::Int(2))], 1.0);
        assert_eq!(CheckBoxIcon::default().size(&ctx), Dimension::new(19, 19));

        let scaled = context(vec![("Component.focusWidth", ThemeValue::Int(2))], 2.0);
        assert_eq!(RadioButtonIcon::default().size(&scaled), Dimension::new(38, 38));
    }

    #[test]
    fn state_colors() {
        let ctx = context(
            vec![
                ("CheckBox.icon.borderColor", ThemeValue::Color(Color::BLACK)),
                ("CheckBox.icon.selectedBorderColor", ThemeValue::Color(Color::BLUE)),
                ("CheckBox.icon.selectedBackground", ThemeValue::Color(Color::BLUE)),
                ("CheckBox.icon.checkmarkColor", ThemeValue::Color(Color::WHITE)),
                ("CheckBox.icon.disabledCheckmarkColor", ThemeValue::Color(Color::RED)),
            ],
            1.0,
        );
        let icon = CheckBoxIcon::default();

        let idle = icon.style(&ctx, ComponentState::new());
        assert_eq!(idle.border, Color::BLACK);
        assert_eq!(idle.background, CheckBoxIcon::BACKGROUND);
        assert_eq!(idle.mark, None);

        let selected = icon.style(&ctx, ComponentState::new().selected());
        assert_eq!(selected.border, Color::BLUE);
        assert_eq!(selected.background, Color::BLUE);
        assert_eq!(selected.mark, Some(Color::WHITE));

        let disabled = icon.style(&ctx, ComponentState::new().selected().disabled());
        assert_eq!(disabled.mark, Some(Color::RED));
        assert_eq!(disabled.focus, None);
    }

    #[test]
    fn radio_keys_override_check_box_palette() {
        let ctx = context(
            vec![
                ("CheckBox.icon.borderColor", ThemeValue::Color(Color::BLACK)),
                ("RadioButton.icon.borderColor", ThemeValue::Color(Color::GREEN)),
                ("CheckBox.icon.background", ThemeValue::Color(Color::RED)),
            ],
            1.0,
        );
        let style = RadioButtonIcon::default().style(&ctx, ComponentState::new());
        assert_eq!(style.border, Color::GREEN);
        assert_eq!(style.background, Color::RED);
        assert_eq!(RadioButtonIcon::default().dot_size(&ctx), 8.0);
    }
}
