//! Global theme state singleton
//!
//! The installed theme is an immutable [`ThemeContext`] behind an `Arc`.
//! Switching variants or label fonts builds a complete new context first
//! and swaps the `Arc` afterwards, so readers see either the old or the new
//! table and a failed build leaves the old one in place.
//!
//! The runtime label font and the installed context share one lock: every
//! publish reads its inputs and swaps the context under the same write
//! guard.

use crate::context::ThemeContext;
use crate::error::BuildError;
use crate::resolver::{BuildOutput, DefaultsResolver};
use crate::scale::{ScaleManager, UiScale};
use crate::themes::ThemeVariant;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError, RwLock, RwLockWriteGuard};
use zizi_core::FontSpec;
use zizi_platform::PlatformSignals;

/// Global theme state instance
static THEME_STATE: OnceLock<ThemeState> = OnceLock::new();

/// Global redraw callback - set by the host to repaint after a theme change
static REDRAW_CALLBACK: Mutex<Option<fn()>> = Mutex::new(None);

/// Set the redraw callback function
pub fn set_redraw_callback(callback: fn()) {
    *lock(&REDRAW_CALLBACK) = Some(callback);
}

fn trigger_redraw() {
    let callback = *lock(&REDRAW_CALLBACK);
    if let Some(callback) = callback {
        callback();
    }
}

// Guarded values are only replaced wholesale, so a poisoned lock still
// holds a consistent value.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

struct Installed {
    /// Host label font set at runtime; overrides the table's `Label.font`
    label_font: Option<FontSpec>,
    context: Arc<ThemeContext>,
}

pub struct ThemeState {
    resolver: Mutex<DefaultsResolver>,
    scale: ScaleManager,
    installed: RwLock<Installed>,
}

impl ThemeState {
    /// Build `variant` and wrap it in a standalone state
    pub fn new(
        mut resolver: DefaultsResolver,
        scale: ScaleManager,
        variant: ThemeVariant,
    ) -> Result<Self, BuildError> {
        let output = resolver.build(variant)?;
        let context = context_for(&scale, None, variant, output);
        Ok(Self {
            resolver: Mutex::new(resolver),
            scale,
            installed: RwLock::new(Installed {
                label_font: None,
                context: Arc::new(context),
            }),
        })
    }

    /// Initialize the global theme state (call once at startup).
    ///
    /// Later calls build nothing and leave the installed state alone.
    pub fn init(
        resolver: DefaultsResolver,
        scale: ScaleManager,
        variant: ThemeVariant,
    ) -> Result<&'static ThemeState, BuildError> {
        if let Some(state) = THEME_STATE.get() {
            return Ok(state);
        }
        let state = Self::new(resolver, scale, variant)?;
        Ok(THEME_STATE.get_or_init(|| state))
    }

    /// Initialize with detected platform signals and the default variant
    pub fn init_default() -> Result<&'static ThemeState, BuildError> {
        let signals = PlatformSignals::detect().clone();
        let scale = ScaleManager::new(signals.clone(), None);
        Self::init(DefaultsResolver::new(signals), scale, ThemeVariant::default())
    }

    /// Get the global theme state instance
    pub fn get() -> &'static ThemeState {
        THEME_STATE
            .get()
            .expect("ThemeState not initialized. Call ThemeState::init() at app startup.")
    }

    /// Try to get the global theme state (returns None if not initialized)
    pub fn try_get() -> Option<&'static ThemeState> {
        THEME_STATE.get()
    }

    /// Snapshot of the installed theme
    pub fn current(&self) -> Arc<ThemeContext> {
        let installed = self.installed.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&installed.context)
    }

    pub fn variant(&self) -> ThemeVariant {
        self.current().variant()
    }

    pub fn scale_manager(&self) -> &ScaleManager {
        &self.scale
    }

    /// Build and install `variant`.
    ///
    /// On error the previously installed theme stays active.
    pub fn apply(&self, variant: ThemeVariant) -> Result<Arc<ThemeContext>, BuildError> {
        let output = lock(&self.resolver).build(variant)?;
        if output.degraded {
            tracing::warn!(
                "ThemeState::apply - {} installed without property overlay",
                variant.id()
            );
        }
        let context = {
            let mut installed = self.write_installed();
            let context = Arc::new(context_for(
                &self.scale,
                installed.label_font.as_ref(),
                variant,
                output,
            ));
            self.publish(&mut installed, Arc::clone(&context));
            context
        };
        trigger_redraw();
        Ok(context)
    }

    /// Rebuild the installed variant, e.g. after its sources changed
    pub fn reload(&self) -> Result<Arc<ThemeContext>, BuildError> {
        self.apply(self.variant())
    }

    /// Recompute the scale factor for a new host label font
    pub fn set_label_font(&self, font: FontSpec) -> Arc<ThemeContext> {
        let scale = self.scale.scale_for_font(Some(&font));
        let context = {
            let mut installed = self.write_installed();
            installed.label_font = Some(font);
            let context = Arc::new(installed.context.with_scale(scale));
            self.publish(&mut installed, Arc::clone(&context));
            context
        };
        trigger_redraw();
        context
    }

    fn write_installed(&self) -> RwLockWriteGuard<'_, Installed> {
        self.installed.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn publish(&self, installed: &mut Installed, context: Arc<ThemeContext>) {
        tracing::debug!(
            "ThemeState::publish - {} ({} keys, scale {})",
            context.variant().id(),
            context.defaults().len(),
            context.scale().factor()
        );
        installed.context = context;
    }
}

fn context_for(
    scale: &ScaleManager,
    label_font: Option<&FontSpec>,
    variant: ThemeVariant,
    output: BuildOutput,
) -> ThemeContext {
    let BuildOutput {
        defaults,
        mut diagnostics,
        ..
    } = output;
    let factor: UiScale = match label_font {
        Some(font) => scale.scale_for_font(Some(font)),
        None => scale.scale_for_defaults(&defaults, &mut diagnostics),
    };
    ThemeContext::new(variant, defaults, factor, diagnostics)
}

impl std::fmt::Debug for ThemeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeState")
            .field("variant", &self.variant())
            .field("scale", &self.current().scale())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;
    use crate::loader::EmbeddedSource;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use zizi_core::Color;
    use zizi_platform::OsFamily;

    fn state() -> ThemeState {
        let signals = PlatformSignals::new(OsFamily::Linux);
        let broken = EmbeddedSource::new().with_layer("zizi.laf.twilight", "Button.margin = 1,2");
        let resolver = DefaultsResolver::new(signals.clone()).with_source(broken);
        ThemeState::new(resolver, ScaleManager::new(signals, None), ThemeVariant::Daylight).unwrap()
    }

    #[test]
    fn apply_swaps_context() {
        let signals = PlatformSignals::new(OsFamily::Linux);
        let state = ThemeState::new(
            DefaultsResolver::new(signals.clone()),
            ScaleManager::new(signals, None),
            ThemeVariant::Daylight,
        )
        .unwrap();
        let before = state.current();

        let after = state.apply(ThemeVariant::Twilight).unwrap();
        assert_eq!(after.variant(), ThemeVariant::Twilight);
        assert_eq!(state.variant(), ThemeVariant::Twilight);
        // old snapshots stay valid
        assert_eq!(before.variant(), ThemeVariant::Daylight);
        assert_ne!(
            before.defaults().color("Panel.background"),
            after.defaults().color("Panel.background")
        );
    }

    #[test]
    fn failed_apply_keeps_previous_theme() {
        let state = state();
        let before = state.current();

        let err = state.apply(ThemeVariant::Twilight).unwrap_err();
        assert!(matches!(err, BuildError::Parse(ParseError::Insets { .. })));
        assert!(Arc::ptr_eq(&before, &state.current()));
    }

    #[test]
    fn label_font_sets_scale() {
        let state = state();
        // Dialog 12pt on Linux is below the 15pt base
        assert_eq!(state.current().scale().factor(), 1.0);

        let ctx = state.set_label_font(FontSpec::plain("Dialog", 30.0));
        assert_eq!(ctx.scale().factor(), 2.0);
        assert_eq!(state.current().scale().factor(), 2.0);
        assert_eq!(ctx.defaults().len(), state.current().defaults().len());

        // the override survives a variant switch
        state.apply(ThemeVariant::Daylight).unwrap();
        assert_eq!(state.current().scale().factor(), 2.0);
    }

    #[test]
    fn label_font_updates_never_undo_a_switch() {
        let signals = PlatformSignals::new(OsFamily::Linux);
        for _ in 0..50 {
            let state = ThemeState::new(
                DefaultsResolver::new(signals.clone()),
                ScaleManager::new(signals.clone(), None),
                ThemeVariant::Daylight,
            )
            .unwrap();
            std::thread::scope(|s| {
                s.spawn(|| {
                    for _ in 0..20 {
                        state.set_label_font(FontSpec::plain("Dialog", 30.0));
                    }
                });
                state.apply(ThemeVariant::Twilight).unwrap();
            });
            assert_eq!(state.variant(), ThemeVariant::Twilight);
            assert_eq!(state.current().scale().factor(), 2.0);
        }
    }

    static REDRAWS: AtomicUsize = AtomicUsize::new(0);

    fn count_redraw() {
        REDRAWS.fetch_add(1, Ordering::SeqCst);
    }

    #[test]
    fn publish_triggers_redraw() {
        set_redraw_callback(count_redraw);
        let state = state();
        let before = REDRAWS.load(Ordering::SeqCst);
        state.apply(ThemeVariant::Daylight).unwrap();
        assert!(REDRAWS.load(Ordering::SeqCst) > before);
        assert_eq!(
            state.current().defaults().color("Panel.background"),
            Some(Color::from_hex(0xF2F2F2))
        );
    }
}
