//! Platform inputs consumed by the theme engine
//!
//! The engine never queries the OS directly; it reads a [`PlatformSignals`]
//! value. Hosts with access to native APIs fill in the fonts, everything
//! else falls back to [`PlatformSignals::detect`].

use crate::os::OsFamily;
use std::sync::OnceLock;
use zizi_core::FontSpec;

static DETECTED: OnceLock<PlatformSignals> = OnceLock::new();

#[derive(Clone, Debug, PartialEq)]
pub struct PlatformSignals {
    pub os: OsFamily,
    /// Windowing layer already converts logical to device pixels
    pub host_hidpi_aware: bool,
    /// System message-box font (Windows only)
    pub message_box_font: Option<FontSpec>,
    /// Host label font, when it differs from the theme table's `Label.font`
    pub label_font: Option<FontSpec>,
}

impl PlatformSignals {
    pub fn new(os: OsFamily) -> Self {
        Self {
            os,
            host_hidpi_aware: false,
            message_box_font: None,
            label_font: None,
        }
    }

    /// Signals for the running process, detected once and cached.
    ///
    /// macOS windows are laid out in points and scaled by the compositor,
    /// so the host counts as HiDPI aware there.
    pub fn detect() -> &'static PlatformSignals {
        DETECTED.get_or_init(|| {
            let os = OsFamily::current();
            let signals = PlatformSignals {
                host_hidpi_aware: os.is_mac(),
                ..PlatformSignals::new(os)
            };
            tracing::debug!(
                "PlatformSignals::detect - os={} host_hidpi_aware={}",
                signals.os,
                signals.host_hidpi_aware
            );
            signals
        })
    }

    pub fn with_host_hidpi_aware(mut self, aware: bool) -> Self {
        self.host_hidpi_aware = aware;
        self
    }

    pub fn with_message_box_font(mut self, font: FontSpec) -> Self {
        self.message_box_font = Some(font);
        self
    }

    pub fn with_label_font(mut self, font: FontSpec) -> Self {
        self.label_font = Some(font);
        self
    }

    /// Base font size a 1.0 scale factor corresponds to.
    ///
    /// 12pt in general, 11pt for Tahoma on Windows, 15pt on Linux.
    pub fn default_font_size(&self, label_family: &str) -> f32 {
        match self.os {
            OsFamily::Windows if label_family == "Tahoma" => 11.0,
            OsFamily::Linux => 15.0,
            _ => 12.0,
        }
    }
}

impl Default for PlatformSignals {
    fn default() -> Self {
        PlatformSignals::new(OsFamily::current())
    }
}
