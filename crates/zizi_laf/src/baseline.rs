//! Host toolkit baseline defaults
//!
//! Theme builds start from the toolkit's built-in fallback table. Every key
//! the baseline contains is guaranteed to survive theming.

use crate::defaults::ThemeDefaults;
use crate::value::ThemeValue;
use zizi_core::{Color, Dimension, FontSpec, FontStyle, Insets};

/// Source of the baseline table
pub trait BaselineProvider: Send + Sync {
    fn name(&self) -> &str;

    /// Fresh baseline table; called once per build
    fn defaults(&self) -> ThemeDefaults;
}

/// Metal-like fallback defaults
#[derive(Clone, Debug, Default)]
pub struct MetalBaseline;

/// Component families whose background/foreground/font the baseline defines
const COMPONENTS: &[&str] = &[
    "Button",
    "CheckBox",
    "ComboBox",
    "EditorPane",
    "FormattedTextField",
    "Label",
    "List",
    "Menu",
    "MenuBar",
    "MenuItem",
    "Panel",
    "PasswordField",
    "PopupMenu",
    "ProgressBar",
    "RadioButton",
    "ScrollBar",
    "ScrollPane",
    "Separator",
    "Slider",
    "Spinner",
    "SplitPane",
    "TabbedPane",
    "Table",
    "TextArea",
    "TextField",
    "TextPane",
    "ToggleButton",
    "ToolBar",
    "ToolTip",
    "Tree",
    "Viewport",
];

/// Text components: white editable background
const TEXT_COMPONENTS: &[&str] = &[
    "EditorPane",
    "FormattedTextField",
    "PasswordField",
    "TextArea",
    "TextField",
    "TextPane",
];

impl MetalBaseline {
    const CONTROL: Color = Color::from_hex(0xEEEEEE);
    const CONTROL_TEXT: Color = Color::from_hex(0x333333);
    const CONTROL_SHADOW: Color = Color::from_hex(0xB8CFE5);
    const INACTIVE_TEXT: Color = Color::from_hex(0x999999);
    const SELECTION: Color = Color::from_hex(0xB8CFE5);
    const FOCUS: Color = Color::from_hex(0x6382BF);
}

impl BaselineProvider for MetalBaseline {
    fn name(&self) -> &str {
        "metal"
    }

    fn defaults(&self) -> ThemeDefaults {
        let mut d = ThemeDefaults::new();
        let font = FontSpec::new("Dialog", FontStyle::Plain, 12.0);
        let bold = FontSpec::new("Dialog", FontStyle::Bold, 12.0);

        d.insert("control", ThemeValue::Color(Self::CONTROL));
        d.insert("controlText", ThemeValue::Color(Self::CONTROL_TEXT));
        d.insert("controlShadow", ThemeValue::Color(Self::CONTROL_SHADOW));
        d.insert("text", ThemeValue::Color(Color::WHITE));
        d.insert("textText", ThemeValue::Color(Color::BLACK));
        d.insert("textHighlight", ThemeValue::Color(Self::SELECTION));
        d.insert("window", ThemeValue::Color(Color::WHITE));

        for component in COMPONENTS {
            let is_text = TEXT_COMPONENTS.contains(component);
            let background = if is_text { Color::WHITE } else { Self::CONTROL };
            d.insert(format!("{component}.background"), ThemeValue::Color(background));
            d.insert(
                format!("{component}.foreground"),
                ThemeValue::Color(Self::CONTROL_TEXT),
            );
            let component_font = match *component {
                "Button" | "CheckBox" | "ComboBox" | "Label" | "RadioButton" | "ToggleButton"
                | "TabbedPane" | "MenuBar" | "Menu" | "MenuItem" => bold.clone(),
                _ => font.clone(),
            };
            d.insert(format!("{component}.font"), ThemeValue::Font(component_font));
        }

        for component in TEXT_COMPONENTS {
            d.insert(
                format!("{component}.selectionBackground"),
                ThemeValue::Color(Self::SELECTION),
            );
            d.insert(
                format!("{component}.inactiveForeground"),
                ThemeValue::Color(Self::INACTIVE_TEXT),
            );
            d.insert(
                format!("{component}.margin"),
                ThemeValue::Insets(Insets::uniform(0).as_ui_resource()),
            );
        }
        // Deliberately inconsistent disabled backgrounds; the resolver
        // normalizes them to `control`.
        d.insert("TextField.disabledBackground", ThemeValue::Color(Color::WHITE));
        d.insert("TextArea.disabledBackground", ThemeValue::Color(Self::CONTROL_SHADOW));
        d.insert("TextArea.inactiveBackground", ThemeValue::Color(Color::WHITE));

        d.insert("Button.margin", ThemeValue::Insets(Insets::new(2, 14, 2, 14).as_ui_resource()));
        d.insert("Button.focus", ThemeValue::Color(Self::FOCUS));
        d.insert("Button.select", ThemeValue::Color(Self::CONTROL_SHADOW));
        d.insert("Button.disabledText", ThemeValue::Color(Self::INACTIVE_TEXT));
        d.insert("Button.rollover", ThemeValue::Bool(true));
        d.insert("CheckBox.margin", ThemeValue::Insets(Insets::new(2, 2, 2, 2).as_ui_resource()));
        d.insert("CheckBox.disabledText", ThemeValue::Color(Self::INACTIVE_TEXT));
        d.insert("RadioButton.margin", ThemeValue::Insets(Insets::new(2, 2, 2, 2).as_ui_resource()));
        d.insert("ComboBox.disabledBackground", ThemeValue::Color(Self::CONTROL));
        d.insert("ComboBox.disabledForeground", ThemeValue::Color(Self::INACTIVE_TEXT));
        d.insert("ComboBox.selectionBackground", ThemeValue::Color(Self::SELECTION));
        d.insert("Label.disabledForeground", ThemeValue::Color(Self::INACTIVE_TEXT));
        d.insert("ProgressBar.foreground", ThemeValue::Color(Self::FOCUS));
        d.insert("ScrollBar.width", ThemeValue::Int(17));
        d.insert(
            "ScrollBar.minimumThumbSize",
            ThemeValue::Dimension(Dimension::new(8, 8).as_ui_resource()),
        );
        d.insert("Slider.focus", ThemeValue::Color(Self::FOCUS));
        d.insert("Spinner.arrowButtonSize", ThemeValue::Dimension(Dimension::new(16, 5).as_ui_resource()));
        d.insert("SplitPane.dividerSize", ThemeValue::Int(10));
        d.insert("SplitPane.continuousLayout", ThemeValue::Bool(true));
        d.insert("TabbedPane.selected", ThemeValue::Color(Self::CONTROL_SHADOW));
        d.insert(
            "TabbedPane.tabInsets",
            ThemeValue::Insets(Insets::new(0, 9, 1, 9).as_ui_resource()),
        );
        d.insert(
            "TabbedPane.contentBorderInsets",
            ThemeValue::Insets(Insets::new(2, 2, 3, 3).as_ui_resource()),
        );
        d.insert("ToolTip.backgroundInactive", ThemeValue::Color(Self::CONTROL));
        d
    }
}
