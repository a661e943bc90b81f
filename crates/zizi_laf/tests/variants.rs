use zizi_core::{Color, Dimension, FontSpec, Insets, Rect};
use zizi_laf::paint::border::Border;
use zizi_laf::paint::icon::Icon;
use zizi_laf::paint::{BaseStrategy, ComponentState, PaintStrategy, ThemedStrategy, WidgetFamily};
use zizi_laf::{DefaultsResolver, ScaleManager, ThemeState, ThemeVariant};
use zizi_platform::{OsFamily, PlatformSignals};

fn state(signals: PlatformSignals, variant: ThemeVariant) -> ThemeState {
    ThemeState::new(
        DefaultsResolver::new(signals.clone()),
        ScaleManager::new(signals, None),
        variant,
    )
    .unwrap()
}

#[test]
fn variant_catalog() {
    let ids: Vec<&str> = ThemeVariant::all().iter().map(|v| v.id()).collect();
    assert_eq!(ids, vec!["daylight", "twilight"]);
    for variant in ThemeVariant::all() {
        assert_eq!(variant.layers()[0], "zizi.laf");
        assert_eq!(ThemeVariant::from_id(variant.id()), Some(*variant));
    }
}

#[test]
fn variants_share_metrics_but_not_colors() {
    let linux = PlatformSignals::new(OsFamily::Linux);
    let day = state(linux.clone(), ThemeVariant::Daylight).current();
    let night = state(linux, ThemeVariant::Twilight).current();

    assert_eq!(
        day.defaults().insets("TabbedPane.tabInsets"),
        night.defaults().insets("TabbedPane.tabInsets")
    );
    assert_ne!(
        day.defaults().color("Panel.background"),
        night.defaults().color("Panel.background")
    );
    assert_eq!(day.defaults().int("Component.focusWidth"), Some(2));
    assert_eq!(night.defaults().int("Component.focusWidth"), Some(1));
    assert_eq!(day.defaults().int("SplitPane.dividerSize"), Some(5));
    assert_eq!(
        day.defaults().dimension("Spinner.arrowButtonSize"),
        Some(Dimension::new(16, 5).as_ui_resource())
    );
}

#[test]
fn host_scaling_pins_factor_to_one() {
    let signals = PlatformSignals::new(OsFamily::MacOs)
        .with_host_hidpi_aware(true)
        .with_label_font(FontSpec::plain("Dialog", 24.0));
    let ctx = state(signals, ThemeVariant::Daylight).current();
    assert_eq!(ctx.scale().scale(10), 10);
}

#[test]
fn large_label_font_scales_borders() {
    let signals = PlatformSignals::new(OsFamily::Linux).with_label_font(FontSpec::plain("Dialog", 30.0));
    let ctx = state(signals, ThemeVariant::Daylight).current();
    assert_eq!(ctx.scale().factor(), 2.0);

    let resource = ctx.defaults().instance("Button.border").unwrap();
    let border = resource.as_border().unwrap();
    let margin = ctx.defaults().insets("Button.margin").unwrap();
    // 2*2 + focus 2*2 + line 1*2
    assert_eq!(border.insets(&ctx, margin), Insets::new(10, 34, 10, 34).as_ui_resource());
    assert_eq!(border.arc(&ctx), 12.0);

    let content = border.content_bounds(&ctx, Rect::new(0.0, 0.0, 200.0, 60.0), margin);
    assert_eq!(content, Rect::new(34.0, 10.0, 132.0, 40.0));
}

#[test]
fn check_box_icon_uses_theme_palette() {
    let ctx = state(PlatformSignals::new(OsFamily::Linux), ThemeVariant::Daylight).current();
    let resource = ctx.defaults().instance("CheckBox.icon").unwrap();
    let icon = resource.as_icon().unwrap();

    assert_eq!(icon.size(&ctx), Dimension::new(19, 19));
    let style = icon.style(&ctx, ComponentState::new().selected());
    assert_eq!(style.background, Color::from_hex(0x4B8FE2));
    assert_eq!(style.mark, Some(Color::WHITE));
}

#[test]
fn themed_button_style() {
    let ctx = state(PlatformSignals::new(OsFamily::Linux), ThemeVariant::Twilight).current();
    let button = ThemedStrategy::new(WidgetFamily::Button, BaseStrategy);

    let idle = button.resolve(&ctx, ComponentState::new());
    assert_eq!(idle.background, Color::from_hex(0x4C5052));
    assert_eq!(idle.arc, 6.0);
    assert_eq!(idle.focus_width, 1.0);

    let default = button.resolve(&ctx, ComponentState::new().default_button());
    assert_eq!(default.background, Color::from_hex(0x365880));

    let disabled = button.resolve(&ctx, ComponentState::new().disabled());
    assert_eq!(disabled.foreground, Color::from_hex(0x777777));
}
