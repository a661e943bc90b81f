//! Per-OS startup configuration
//!
//! Each OS family contributes a set of [`StartupHints`] the host applies
//! before its first window is created.

use crate::error::{PlatformError, Result};
use crate::os::OsFamily;

/// Requested window appearance
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Appearance {
    /// Follow the system light/dark setting
    #[default]
    System,
    Light,
    Dark,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StartupHints {
    /// Application name shown by the OS (menu bar, task switcher)
    pub app_name: Option<String>,
    pub appearance: Appearance,
    /// Move the menu bar to the global screen menu bar
    pub screen_menu_bar: bool,
}

pub trait OsConfigurator: Send + Sync {
    fn os(&self) -> OsFamily;

    fn startup_hints(&self) -> StartupHints;
}

pub struct WindowsConfigurator;

impl OsConfigurator for WindowsConfigurator {
    fn os(&self) -> OsFamily {
        OsFamily::Windows
    }

    fn startup_hints(&self) -> StartupHints {
        StartupHints::default()
    }
}

pub struct LinuxConfigurator;

impl OsConfigurator for LinuxConfigurator {
    fn os(&self) -> OsFamily {
        OsFamily::Linux
    }

    fn startup_hints(&self) -> StartupHints {
        StartupHints::default()
    }
}

pub struct MacOsConfigurator {
    pub app_name: String,
}

impl OsConfigurator for MacOsConfigurator {
    fn os(&self) -> OsFamily {
        OsFamily::MacOs
    }

    fn startup_hints(&self) -> StartupHints {
        StartupHints {
            app_name: Some(self.app_name.clone()),
            appearance: Appearance::System,
            screen_menu_bar: true,
        }
    }
}

/// Configurator for an OS family
pub fn configurator_for(os: OsFamily, app_name: &str) -> Result<Box<dyn OsConfigurator>> {
    let configurator: Box<dyn OsConfigurator> = match os {
        OsFamily::Windows => Box::new(WindowsConfigurator),
        OsFamily::Linux => Box::new(LinuxConfigurator),
        OsFamily::MacOs => Box::new(MacOsConfigurator {
            app_name: app_name.to_string(),
        }),
        OsFamily::Unknown => {
            tracing::debug!("configurator_for - no configurator for unknown OS");
            return Err(PlatformError::Unsupported("startup configuration".to_string()));
        }
    };
    Ok(configurator)
}
