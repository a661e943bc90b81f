//! HiDPI scaling
//!
//! Two pieces:
//! - [`UiScale`]: an immutable factor with the logical → device conversions
//!   painters call (`scale(10)`, `scale(insets)`, ...)
//! - [`ScaleManager`]: derives the factor from the label font and the
//!   platform, or pins it to 1.0 when the host already scales
//!
//! The factor is quantized to 0.25 steps and never drops below 1.0.
//! Integer conversions round with a 0.01 downward bias, so `x.5` results
//! round down.

use crate::defaults::ThemeDefaults;
use crate::diagnostics::{DiagnosticKind, Diagnostics};
use zizi_core::{Dimension, FontSpec, Insets};
use zizi_platform::PlatformSignals;

/// Values convertible between logical and device units
pub trait Scalable: Sized {
    fn scale_by(self, factor: f32) -> Self;
    fn unscale_by(self, factor: f32) -> Self;
}

/// `round(value - 0.01)` with half-up rounding, i.e. `floor(value + 0.49)`
pub fn round_biased(value: f32) -> i32 {
    (value - 0.01 + 0.5).floor() as i32
}

impl Scalable for f32 {
    fn scale_by(self, factor: f32) -> Self {
        self * factor
    }

    fn unscale_by(self, factor: f32) -> Self {
        self / factor
    }
}

impl Scalable for i32 {
    fn scale_by(self, factor: f32) -> Self {
        round_biased(self as f32 * factor)
    }

    fn unscale_by(self, factor: f32) -> Self {
        round_biased(self as f32 / factor)
    }
}

impl Scalable for Insets {
    fn scale_by(self, factor: f32) -> Self {
        self.map(|v| v.scale_by(factor))
    }

    fn unscale_by(self, factor: f32) -> Self {
        self.map(|v| v.unscale_by(factor))
    }
}

impl Scalable for Dimension {
    fn scale_by(self, factor: f32) -> Self {
        self.map(|v| v.scale_by(factor))
    }

    fn unscale_by(self, factor: f32) -> Self {
        self.map(|v| v.unscale_by(factor))
    }
}

/// Quantized user scale factor
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UiScale {
    factor: f32,
}

impl UiScale {
    pub const IDENTITY: UiScale = UiScale { factor: 1.0 };

    /// Quantize `raw`: values ≤ 1.0 become 1.0, others snap to the nearest
    /// 0.25 (ties away from zero).
    pub fn from_raw(raw: f32) -> Self {
        let factor = if !raw.is_finite() || raw <= 1.0 {
            1.0
        } else {
            (raw * 4.0).round() / 4.0
        };
        Self { factor }
    }

    pub fn factor(&self) -> f32 {
        self.factor
    }

    pub fn is_identity(&self) -> bool {
        self.factor == 1.0
    }

    pub fn scale<T: Scalable>(&self, value: T) -> T {
        if self.is_identity() {
            value
        } else {
            value.scale_by(self.factor)
        }
    }

    pub fn unscale<T: Scalable>(&self, value: T) -> T {
        if self.is_identity() {
            value
        } else {
            value.unscale_by(self.factor)
        }
    }
}

impl Default for UiScale {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Computes [`UiScale`]s for a platform
#[derive(Clone, Debug)]
pub struct ScaleManager {
    signals: PlatformSignals,
    enabled: bool,
}

impl ScaleManager {
    /// `hidpi` mirrors the user switch: `Some(false)` turns scaling off,
    /// `None` leaves it on. A host that scales by itself always disables it.
    pub fn new(signals: PlatformSignals, hidpi: Option<bool>) -> Self {
        let enabled = !signals.host_hidpi_aware && hidpi.unwrap_or(true);
        if !enabled {
            tracing::debug!(
                "ScaleManager - scaling disabled (host_hidpi_aware={}, hidpi={:?})",
                signals.host_hidpi_aware,
                hidpi
            );
        }
        Self { signals, enabled }
    }

    pub fn signals(&self) -> &PlatformSignals {
        &self.signals
    }

    pub fn is_scaling_enabled(&self) -> bool {
        self.enabled
    }

    /// Factor for a given label font; identity when scaling is off or the
    /// font is unusable
    pub fn scale_for_font(&self, label_font: Option<&FontSpec>) -> UiScale {
        if !self.enabled {
            return UiScale::IDENTITY;
        }
        match label_font {
            Some(font) if font.size.is_finite() && font.size > 0.0 => {
                let base = self.signals.default_font_size(&font.family);
                let scale = UiScale::from_raw(font.size / base);
                tracing::debug!(
                    "HiDPI scale factor {} (label {}pt over {}pt)",
                    scale.factor(),
                    font.size,
                    base
                );
                scale
            }
            _ => UiScale::IDENTITY,
        }
    }

    /// Factor for a resolved table. The host label font from the platform
    /// signals takes precedence over the table's `Label.font`.
    pub fn scale_for_defaults(&self, defaults: &ThemeDefaults, diagnostics: &mut Diagnostics) -> UiScale {
        if !self.enabled {
            return UiScale::IDENTITY;
        }
        let font = self
            .signals
            .label_font
            .as_ref()
            .or_else(|| defaults.font("Label.font"));
        match font {
            Some(f) if f.size.is_finite() && f.size > 0.0 => self.scale_for_font(Some(f)),
            _ => {
                diagnostics.push(
                    DiagnosticKind::MissingLabelFont,
                    "Label.font missing or invalid, using scale factor 1.0",
                );
                UiScale::IDENTITY
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zizi_platform::OsFamily;

    fn manager(os: OsFamily) -> ScaleManager {
        ScaleManager::new(PlatformSignals::new(os), None)
    }

    #[test]
    fn quantizes_to_quarter_steps() {
        assert_eq!(UiScale::from_raw(18.0 / 12.0).factor(), 1.5);
        assert_eq!(UiScale::from_raw(17.0 / 12.0).factor(), 1.5);
        assert_eq!(UiScale::from_raw(1.1).factor(), 1.0);
        assert_eq!(UiScale::from_raw(2.125).factor(), 2.25);
        assert_eq!(UiScale::from_raw(0.5).factor(), 1.0);
        assert_eq!(UiScale::from_raw(f32::NAN).factor(), 1.0);
    }

    #[test]
    fn integer_rounding_is_biased_down() {
        let scale = UiScale::from_raw(1.5);
        assert_eq!(scale.scale(3), 4); // 4.5 rounds down
        assert_eq!(scale.scale(5), 7); // 7.5 rounds down
        assert_eq!(scale.scale(2), 3);
        assert_eq!(scale.scale(3.0f32), 4.5);
        assert_eq!(round_biased(2.51), 3);
        assert_eq!(round_biased(2.5), 2);
    }

    #[test]
    fn unscale_inverts() {
        let scale = UiScale::from_raw(2.0);
        assert_eq!(scale.unscale(scale.scale(7)), 7);
        assert_eq!(scale.unscale(9.0f32), 4.5);
    }

    #[test]
    fn metrics_scale_componentwise_and_keep_tag() {
        let scale = UiScale::from_raw(2.0);
        let insets = scale.scale(Insets::new(1, 2, 3, 4).as_ui_resource());
        assert_eq!(insets, Insets::new(2, 4, 6, 8).as_ui_resource());

        let dim = scale.scale(Dimension::new(10, 20));
        assert_eq!(dim, Dimension::new(20, 40));
        assert!(!dim.ui_resource);
    }

    #[test]
    fn identity_leaves_values_untouched() {
        assert_eq!(UiScale::IDENTITY.scale(10), 10);
        assert_eq!(UiScale::IDENTITY.unscale(11), 11);
    }

    #[test]
    fn platform_base_sizes() {
        let font = FontSpec::plain("Dialog", 18.0);
        assert_eq!(manager(OsFamily::MacOs).scale_for_font(Some(&font)).factor(), 1.5);
        assert_eq!(manager(OsFamily::Linux).scale_for_font(Some(&font)).factor(), 1.25);

        let tahoma = FontSpec::plain("Tahoma", 22.0);
        assert_eq!(manager(OsFamily::Windows).scale_for_font(Some(&tahoma)).factor(), 2.0);
    }

    #[test]
    fn host_scaling_disables_manager() {
        let signals = PlatformSignals::new(OsFamily::Windows).with_host_hidpi_aware(true);
        let manager = ScaleManager::new(signals, Some(true));
        assert!(!manager.is_scaling_enabled());

        let font = FontSpec::plain("Dialog", 48.0);
        let scale = manager.scale_for_font(Some(&font));
        assert_eq!(scale.scale(10), 10);
    }

    #[test]
    fn hidpi_switch_disables_manager() {
        let manager = ScaleManager::new(PlatformSignals::new(OsFamily::Linux), Some(false));
        assert!(!manager.is_scaling_enabled());
    }

    #[test]
    fn missing_label_font_falls_back() {
        let mut diags = Diagnostics::new();
        let scale = manager(OsFamily::Linux).scale_for_defaults(&ThemeDefaults::new(), &mut diags);
        assert!(scale.is_identity());
        assert_eq!(diags.count(DiagnosticKind::MissingLabelFont), 1);
    }
}
