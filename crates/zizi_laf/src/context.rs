//! Immutable snapshot of an installed theme

use crate::defaults::ThemeDefaults;
use crate::diagnostics::Diagnostics;
use crate::scale::UiScale;
use crate::themes::ThemeVariant;
use std::sync::Arc;

/// Defaults table, scale factor, and build diagnostics of one theme build.
///
/// Painters receive a `&ThemeContext` instead of reading global state. A
/// context never changes after construction; a theme switch or a new
/// label font publishes a fresh one.
#[derive(Clone, Debug)]
pub struct ThemeContext {
    variant: ThemeVariant,
    defaults: Arc<ThemeDefaults>,
    scale: UiScale,
    diagnostics: Arc<Diagnostics>,
}

impl ThemeContext {
    pub fn new(
        variant: ThemeVariant,
        defaults: ThemeDefaults,
        scale: UiScale,
        diagnostics: Diagnostics,
    ) -> Self {
        Self {
            variant,
            defaults: Arc::new(defaults),
            scale,
            diagnostics: Arc::new(diagnostics),
        }
    }

    pub fn variant(&self) -> ThemeVariant {
        self.variant
    }

    pub fn defaults(&self) -> &ThemeDefaults {
        &self.defaults
    }

    pub fn scale(&self) -> UiScale {
        self.scale
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Same table and diagnostics with another scale factor
    pub fn with_scale(&self, scale: UiScale) -> Self {
        Self {
            variant: self.variant,
            defaults: Arc::clone(&self.defaults),
            scale,
            diagnostics: Arc::clone(&self.diagnostics),
        }
    }
}
