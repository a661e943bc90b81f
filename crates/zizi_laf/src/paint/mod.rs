//! Widget paint styles
//!
//! Painting is split in two layers:
//!
//! - [`BaseStrategy`] answers with the shared `Component.*` keys and
//!   hard-coded toolkit fallbacks
//! - [`ThemedStrategy`] decorates any strategy with the keys of one
//!   [`WidgetFamily`] (`Button.background`, `Spinner.padding`, ...), falling
//!   back to the wrapped strategy for every absent key
//!
//! All metrics in a [`WidgetStyle`] are already scaled to device pixels.
//!
//! ```
//! use zizi_laf::paint::{BaseStrategy, ComponentState, PaintStrategy, ThemedStrategy, WidgetFamily};
//! use zizi_laf::{ThemeContext, ThemeDefaults, ThemeVariant, UiScale, Diagnostics};
//!
//! let ctx = ThemeContext::new(
//!     ThemeVariant::Daylight,
//!     ThemeDefaults::new(),
//!     UiScale::IDENTITY,
//!     Diagnostics::new(),
//! );
//! let button = ThemedStrategy::new(WidgetFamily::Button, BaseStrategy);
//! let style = button.resolve(&ctx, ComponentState::new().focused());
//! assert!(style.focus_color.is_some());
//! ```

pub mod border;
pub mod geometry;
pub mod icon;

use crate::context::ThemeContext;
use crate::defaults::ThemeDefaults;
use zizi_core::{Color, Insets};

/// Interaction state of the widget being painted
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ComponentState {
    pub enabled: bool,
    pub focused: bool,
    pub hovered: bool,
    pub pressed: bool,
    pub selected: bool,
    /// The dialog's default button
    pub default_button: bool,
}

impl ComponentState {
    /// Enabled, idle
    pub const fn new() -> Self {
        Self {
            enabled: true,
            focused: false,
            hovered: false,
            pressed: false,
            selected: false,
            default_button: false,
        }
    }

    pub const fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    pub const fn focused(mut self) -> Self {
        self.focused = true;
        self
    }

    pub const fn hovered(mut self) -> Self {
        self.hovered = true;
        self
    }

    pub const fn pressed(mut self) -> Self {
        self.pressed = true;
        self
    }

    pub const fn selected(mut self) -> Self {
        self.selected = true;
        self
    }

    pub const fn default_button(mut self) -> Self {
        self.default_button = true;
        self
    }
}

impl Default for ComponentState {
    fn default() -> Self {
        Self::new()
    }
}

/// Widget families with themed paint keys
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WidgetFamily {
    Button,
    CheckBox,
    ComboBox,
    Spinner,
    TextField,
}

impl WidgetFamily {
    /// Key prefix in the defaults table
    pub fn prefix(self) -> &'static str {
        match self {
            WidgetFamily::Button => "Button",
            WidgetFamily::CheckBox => "CheckBox",
            WidgetFamily::ComboBox => "ComboBox",
            WidgetFamily::Spinner => "Spinner",
            WidgetFamily::TextField => "TextField",
        }
    }

    pub fn all() -> &'static [WidgetFamily] {
        &[
            WidgetFamily::Button,
            WidgetFamily::CheckBox,
            WidgetFamily::ComboBox,
            WidgetFamily::Spinner,
            WidgetFamily::TextField,
        ]
    }
}

/// Resolved paint parameters, device pixels
#[derive(Clone, Debug, PartialEq)]
pub struct WidgetStyle {
    pub background: Color,
    pub foreground: Color,
    pub border_color: Color,
    /// Focus ring color; `None` when no ring is painted
    pub focus_color: Option<Color>,
    pub arc: f32,
    pub focus_width: f32,
    pub line_width: f32,
    pub padding: Insets,
}

pub trait PaintStrategy {
    fn resolve(&self, ctx: &ThemeContext, state: ComponentState) -> WidgetStyle;
}

impl<S: PaintStrategy + ?Sized> PaintStrategy for &S {
    fn resolve(&self, ctx: &ThemeContext, state: ComponentState) -> WidgetStyle {
        (**self).resolve(ctx, state)
    }
}

/// First color present among `keys`
pub(crate) fn first_color<K: AsRef<str>>(
    defaults: &ThemeDefaults,
    keys: impl IntoIterator<Item = K>,
) -> Option<Color> {
    keys.into_iter().find_map(|k| defaults.color(k.as_ref()))
}

/// Shared component keys with toolkit fallbacks
#[derive(Clone, Copy, Debug, Default)]
pub struct BaseStrategy;

impl BaseStrategy {
    const BACKGROUND: Color = Color::from_hex(0xEEEEEE);
    const FOREGROUND: Color = Color::from_hex(0x333333);
    const DISABLED_FOREGROUND: Color = Color::from_hex(0x999999);
    const BORDER: Color = Color::from_hex(0xC4C4C4);
    const DISABLED_BORDER: Color = Color::from_hex(0xCFCFCF);
    const FOCUS: Color = Color::from_hex(0x97C3F3);
}

impl PaintStrategy for BaseStrategy {
    fn resolve(&self, ctx: &ThemeContext, state: ComponentState) -> WidgetStyle {
        let d = ctx.defaults();
        let scale = ctx.scale();

        let background = d.color_or("control", Self::BACKGROUND);
        let foreground = if state.enabled {
            d.color_or("controlText", Self::FOREGROUND)
        } else {
            Self::DISABLED_FOREGROUND
        };
        let border_color = if state.enabled {
            d.color_or("Component.borderColor", Self::BORDER)
        } else {
            d.color_or("Component.disabledBorderColor", Self::DISABLED_BORDER)
        };
        let focus_color = (state.enabled && state.focused)
            .then(|| d.color_or("Component.focusColor", Self::FOCUS));

        WidgetStyle {
            background,
            foreground,
            border_color,
            focus_color,
            arc: scale.scale(d.int_or("Component.arc", 0) as f32),
            focus_width: scale.scale(d.int_or("Component.focusWidth", 0) as f32),
            line_width: scale.scale(1.0),
            padding: Insets::ZERO,
        }
    }
}

/// Keyed lookups for one widget family on top of another strategy
#[derive(Clone, Copy, Debug)]
pub struct ThemedStrategy<S> {
    family: WidgetFamily,
    inner: S,
}

impl<S: PaintStrategy> ThemedStrategy<S> {
    pub fn new(family: WidgetFamily, inner: S) -> Self {
        Self { family, inner }
    }

    pub fn family(&self) -> WidgetFamily {
        self.family
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: PaintStrategy> PaintStrategy for ThemedStrategy<S> {
    fn resolve(&self, ctx: &ThemeContext, state: ComponentState) -> WidgetStyle {
        let base = self.inner.resolve(ctx, state);
        let d = ctx.defaults();
        let scale = ctx.scale();
        let p = self.family.prefix();
        let default_button = state.default_button && self.family == WidgetFamily::Button;

        let mut background_keys = Vec::with_capacity(3);
        if !state.enabled {
            background_keys.push(format!("{p}.disabledBackground"));
        } else if state.pressed {
            background_keys.push(format!("{p}.pressedBackground"));
        } else if state.hovered {
            background_keys.push(format!("{p}.hoverBackground"));
        }
        if default_button && state.enabled {
            background_keys.push(format!("{p}.default.background"));
        }
        background_keys.push(format!("{p}.background"));

        let foreground_keys = if !state.enabled {
            vec![format!("{p}.disabledText"), format!("{p}.disabledForeground")]
        } else if default_button {
            vec![format!("{p}.default.foreground"), format!("{p}.foreground")]
        } else {
            vec![format!("{p}.foreground")]
        };

        let border_keys = if !state.enabled {
            vec![format!("{p}.disabledBorderColor")]
        } else if state.focused && default_button {
            vec![
                format!("{p}.default.focusedBorderColor"),
                format!("{p}.focusedBorderColor"),
                format!("{p}.borderColor"),
            ]
        } else if state.focused {
            vec![format!("{p}.focusedBorderColor"), format!("{p}.borderColor")]
        } else if default_button {
            vec![format!("{p}.default.borderColor"), format!("{p}.borderColor")]
        } else {
            vec![format!("{p}.borderColor")]
        };

        let focus_color = base.focus_color.map(|fallback| {
            let keys = if default_button {
                vec![format!("{p}.default.focusColor"), format!("{p}.focusColor")]
            } else {
                vec![format!("{p}.focusColor")]
            };
            first_color(d, keys).unwrap_or(fallback)
        });

        let arc = d
            .int(&format!("{p}.arc"))
            .map(|arc| scale.scale(arc as f32))
            .unwrap_or(base.arc);
        let padding = d
            .insets(&format!("{p}.padding"))
            .map(|insets| scale.scale(insets))
            .unwrap_or(base.padding);

        WidgetStyle {
            background: first_color(d, background_keys).unwrap_or(base.background),
            foreground: first_color(d, foreground_keys).unwrap_or(base.foreground),
            border_color: first_color(d, border_keys).unwrap_or(base.border_color),
            focus_color,
            arc,
            focus_width: base.focus_width,
            line_width: base.line_width,
            padding,
        }
    }
}
