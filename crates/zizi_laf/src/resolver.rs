//! Theme build pipeline
//!
//! A build runs four stages against a fresh table:
//!
//! 1. baseline defaults from the [`BaselineProvider`]
//! 2. disabled/inactive text backgrounds normalized to `control`
//! 3. on Windows, every `*.font` key replaced by the message-box font
//! 4. the variant's property layers: globals first, then plain entries
//!
//! Stage 4 is skipped as a whole when a layer source fails to load; the
//! result is then flagged as degraded. Malformed insets, sizes, and
//! width/height integers abort the build.

use crate::baseline::{BaselineProvider, MetalBaseline};
use crate::defaults::ThemeDefaults;
use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::error::{BuildError, ParseError};
use crate::loader::{CascadingPropertyLoader, PropertySource};
use crate::properties::{is_global_key, is_variable_key, PropertyTable, GLOBAL_PREFIX};
use crate::registry::InstanceRegistry;
use crate::themes::{self, ThemeVariant};
use crate::value::{ThemeValue, ValueParser};
use crate::variables;
use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::Arc;
use zizi_platform::PlatformSignals;

/// Keys reset to the baseline `control` color before the overlay
const DISABLED_BACKGROUND_KEYS: &[&str] = &[
    "EditorPane.disabledBackground",
    "EditorPane.inactiveBackground",
    "FormattedTextField.disabledBackground",
    "PasswordField.disabledBackground",
    "TextArea.disabledBackground",
    "TextArea.inactiveBackground",
    "TextField.disabledBackground",
    "TextPane.disabledBackground",
    "TextPane.inactiveBackground",
    "Spinner.disabledBackground",
    "Spinner.disabledForeground",
];

/// Last stage a build reached.
///
/// `FontPatched` is also the terminal stage of a degraded build, where the
/// property overlay was skipped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BuildStage {
    #[default]
    NotBuilt,
    BaselineLoaded,
    FontPatched,
    PropertyOverlayApplied,
    Aborted,
}

/// Result of a successful build
#[derive(Clone, Debug, PartialEq)]
pub struct BuildOutput {
    pub defaults: ThemeDefaults,
    pub diagnostics: Diagnostics,
    /// Property overlay was skipped; only baseline and font patch applied
    pub degraded: bool,
}

pub struct DefaultsResolver {
    baseline: Arc<dyn BaselineProvider>,
    loader: CascadingPropertyLoader,
    signals: PlatformSignals,
    parser: ValueParser,
    stage: BuildStage,
}

impl DefaultsResolver {
    /// Metal baseline, built-in theme layers, built-in borders and icons
    pub fn new(signals: PlatformSignals) -> Self {
        Self {
            baseline: Arc::new(MetalBaseline),
            loader: CascadingPropertyLoader::new().with_source(themes::embedded_source()),
            signals,
            parser: ValueParser::new(Arc::new(InstanceRegistry::with_builtins())),
            stage: BuildStage::NotBuilt,
        }
    }

    pub fn with_baseline(mut self, baseline: impl BaselineProvider + 'static) -> Self {
        self.baseline = Arc::new(baseline);
        self
    }

    /// Add a property source that overrides all earlier ones
    pub fn with_source(mut self, source: impl PropertySource + 'static) -> Self {
        self.loader.push_source(Arc::new(source));
        self
    }

    /// Replace every property source
    pub fn with_loader(mut self, loader: CascadingPropertyLoader) -> Self {
        self.loader = loader;
        self
    }

    pub fn with_registry(mut self, registry: Arc<InstanceRegistry>) -> Self {
        self.parser = ValueParser::new(registry);
        self
    }

    pub fn signals(&self) -> &PlatformSignals {
        &self.signals
    }

    pub fn stage(&self) -> BuildStage {
        self.stage
    }

    /// Build the defaults table for `variant`
    pub fn build(&mut self, variant: ThemeVariant) -> Result<BuildOutput, BuildError> {
        tracing::debug!("DefaultsResolver::build - {}", variant.id());
        self.build_layers(variant.layers())
    }

    /// Build from an explicit layer chain, base first
    pub fn build_layers(&mut self, layers: &[&str]) -> Result<BuildOutput, BuildError> {
        self.stage = BuildStage::NotBuilt;
        let mut diagnostics = Diagnostics::new();

        let mut defaults = self.baseline.defaults();
        self.stage = BuildStage::BaselineLoaded;

        patch_disabled_backgrounds(&mut defaults);
        self.patch_fonts(&mut defaults);
        self.stage = BuildStage::FontPatched;

        let loaded = self.loader.load(layers, &mut diagnostics);
        if !loaded.is_complete() {
            diagnostics.push(
                DiagnosticKind::OverlaySkipped,
                format!(
                    "property overlay skipped, unreadable layers: {}",
                    loaded.failed_layers.join(", ")
                ),
            );
            return Ok(BuildOutput {
                defaults,
                diagnostics,
                degraded: true,
            });
        }

        if let Err(err) = self.apply_overlay(&mut defaults, &loaded.table, &mut diagnostics) {
            self.stage = BuildStage::Aborted;
            tracing::warn!("DefaultsResolver::build - aborted: {}", err);
            return Err(err.into());
        }
        self.stage = BuildStage::PropertyOverlayApplied;

        tracing::debug!(
            "DefaultsResolver::build - {} keys, {} diagnostics",
            defaults.len(),
            diagnostics.len()
        );
        Ok(BuildOutput {
            defaults,
            diagnostics,
            degraded: false,
        })
    }

    fn patch_fonts(&self, defaults: &mut ThemeDefaults) {
        if !self.signals.os.is_windows() {
            return;
        }
        let Some(font) = &self.signals.message_box_font else {
            return;
        };
        let keys: Vec<String> = defaults
            .keys()
            .filter(|k| k.ends_with(".font"))
            .map(str::to_string)
            .collect();
        tracing::trace!("patching {} font keys with {}", keys.len(), font);
        for key in keys {
            defaults.insert(key, ThemeValue::Font(font.clone()));
        }
    }

    fn apply_overlay(
        &self,
        defaults: &mut ThemeDefaults,
        table: &PropertyTable,
        diagnostics: &mut Diagnostics,
    ) -> Result<(), ParseError> {
        let entries = table.sorted_entries();

        let mut globals: FxHashMap<&str, ThemeValue> = FxHashMap::default();
        for &(key, raw) in &entries {
            let Some(suffix) = key.strip_prefix(GLOBAL_PREFIX) else {
                continue;
            };
            let Some(resolved) = variables::resolve(table, raw, diagnostics) else {
                continue;
            };
            let value = self.parser.parse(key, resolved)?;
            if !value.is_null() {
                globals.insert(suffix, value);
            }
        }

        if !globals.is_empty() {
            let mut matched: Vec<(String, ThemeValue)> = defaults
                .keys()
                .filter_map(|key| {
                    let (_, last) = key.rsplit_once('.')?;
                    globals.get(last).map(|v| (key.to_string(), v.clone()))
                })
                .collect();
            matched.sort_unstable_by(|a, b| a.0.cmp(&b.0));
            tracing::trace!("{} globals matched {} keys", globals.len(), matched.len());
            for (key, value) in matched {
                defaults.insert(key, value);
            }
        }

        for &(key, raw) in &entries {
            if is_variable_key(key) || is_global_key(key) {
                continue;
            }
            let Some(resolved) = variables::resolve(table, raw, diagnostics) else {
                continue;
            };
            let value = self.parser.parse(key, resolved)?;
            tracing::trace!("{} = {}", key, value);
            defaults.insert(key, value);
        }
        Ok(())
    }
}

fn patch_disabled_backgrounds(defaults: &mut ThemeDefaults) {
    let Some(control) = defaults.color("control") else {
        return;
    };
    for key in DISABLED_BACKGROUND_KEYS {
        defaults.insert(*key, ThemeValue::Color(control));
    }
}

impl fmt::Debug for DefaultsResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultsResolver")
            .field("baseline", &self.baseline.name())
            .field("signals", &self.signals)
            .field("stage", &self.stage)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::EmbeddedSource;
    use pretty_assertions::assert_eq;
    use zizi_core::{Color, FontSpec, Insets};
    use zizi_platform::OsFamily;

    fn resolver(os: OsFamily, layers: &[(&'static str, &'static str)]) -> DefaultsResolver {
        let source = layers
            .iter()
            .fold(EmbeddedSource::new(), |s, &(id, text)| s.with_layer(id, text));
        DefaultsResolver::new(PlatformSignals::new(os))
            .with_loader(CascadingPropertyLoader::new().with_source(source))
    }

    #[test]
    fn stages_progress_on_success() {
        let mut r = resolver(OsFamily::Linux, &[("base", "Button.arc = 6")]);
        assert_eq!(r.stage(), BuildStage::NotBuilt);
        let out = r.build_layers(&["base"]).unwrap();
        assert_eq!(r.stage(), BuildStage::PropertyOverlayApplied);
        assert!(!out.degraded);
        assert_eq!(out.defaults.int("Button.arc"), Some(6));
    }

    #[test]
    fn degraded_build_stops_at_font_patched() {
        struct Unreadable;
        impl PropertySource for Unreadable {
            fn name(&self) -> String {
                "unreadable".to_string()
            }
            fn read(&self, _layer: &str) -> std::io::Result<Option<String>> {
                Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"))
            }
        }

        let mut r = DefaultsResolver::new(PlatformSignals::new(OsFamily::Linux))
            .with_loader(CascadingPropertyLoader::new().with_source(Unreadable));
        let out = r.build_layers(&["base"]).unwrap();
        assert!(out.degraded);
        assert_eq!(r.stage(), BuildStage::FontPatched);
    }

    #[test]
    fn disabled_backgrounds_follow_control() {
        let mut r = resolver(OsFamily::Linux, &[]);
        let out = r.build_layers(&[]).unwrap();
        let control = out.defaults.color("control").unwrap();
        for key in DISABLED_BACKGROUND_KEYS {
            assert_eq!(out.defaults.color(key), Some(control), "{key}");
        }
    }

    #[test]
    fn font_patch_is_windows_only() {
        let font = FontSpec::plain("Segoe UI", 12.0);
        let signals = PlatformSignals::new(OsFamily::Windows).with_message_box_font(font.clone());
        let mut r = DefaultsResolver::new(signals).with_loader(CascadingPropertyLoader::new());
        let out = r.build_layers(&[]).unwrap();
        assert_eq!(out.defaults.font("Label.font"), Some(&font));
        assert_eq!(out.defaults.font("Button.font"), Some(&font));

        let signals = PlatformSignals::new(OsFamily::Linux).with_message_box_font(font.clone());
        let mut r = DefaultsResolver::new(signals).with_loader(CascadingPropertyLoader::new());
        let out = r.build_layers(&[]).unwrap();
        assert_ne!(out.defaults.font("Label.font"), Some(&font));
    }

    #[test]
    fn globals_apply_by_last_segment_then_entries_win() {
        let mut r = resolver(
            OsFamily::Linux,
            &[(
                "base",
                "*.background = 00FF00\nLabel.background = 0000FF\n*.nothing = null",
            )],
        );
        let out = r.build_layers(&["base"]).unwrap();
        assert_eq!(out.defaults.color("Button.background"), Some(Color::GREEN));
        assert_eq!(out.defaults.color("Label.background"), Some(Color::BLUE));
        // keys without a dot are never global targets
        assert_ne!(out.defaults.color("control"), Some(Color::GREEN));
        assert!(!out.defaults.contains_key("*.background"));
    }

    #[test]
    fn variables_are_not_emitted() {
        let mut r = resolver(
            OsFamily::Linux,
            &[("base", "@accent = 336699\nButton.foreground = @accent")],
        );
        let out = r.build_layers(&["base"]).unwrap();
        assert!(!out.defaults.contains_key("@accent"));
        assert_eq!(
            out.defaults.color("Button.foreground"),
            Some(Color::from_hex(0x336699))
        );
    }

    #[test]
    fn unresolved_variable_keeps_baseline_value() {
        let mut r = resolver(OsFamily::Linux, &[("base", "Button.background = @missing")]);
        let before = MetalBaseline.defaults().color("Button.background");
        let out = r.build_layers(&["base"]).unwrap();
        assert_eq!(out.defaults.color("Button.background"), before);
        assert_eq!(out.diagnostics.count(DiagnosticKind::UnresolvedVariable), 1);
    }

    #[test]
    fn null_entries_are_stored() {
        let mut r = resolver(OsFamily::Linux, &[("base", "Button.background = null")]);
        let out = r.build_layers(&["base"]).unwrap();
        assert_eq!(out.defaults.get("Button.background"), Some(&ThemeValue::Null));
    }

    #[test]
    fn fatal_parse_aborts() {
        let mut r = resolver(OsFamily::Linux, &[("base", "Button.margin = 4,8,4")]);
        let err = r.build_layers(&["base"]).unwrap_err();
        assert_eq!(
            err,
            BuildError::Parse(ParseError::Insets {
                key: "Button.margin".into(),
                value: "4,8,4".into()
            })
        );
        assert_eq!(r.stage(), BuildStage::Aborted);
    }

    #[test]
    fn builtin_variants_build_cleanly() {
        for variant in ThemeVariant::all() {
            let mut r = DefaultsResolver::new(PlatformSignals::new(OsFamily::Linux));
            let out = r.build(*variant).unwrap();
            assert!(!out.degraded);
            assert!(out.diagnostics.is_empty(), "{variant}: {:?}", out.diagnostics);
            assert_eq!(
                out.defaults.insets("Button.margin"),
                Some(Insets::new(2, 14, 2, 14).as_ui_resource())
            );
            assert!(out.defaults.instance("Button.border").is_some());
            assert!(out.defaults.instance("CheckBox.icon").is_some());
        }
    }
}
