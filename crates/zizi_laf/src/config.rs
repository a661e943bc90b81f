//! Zizi configuration file handling
//!
//! ```toml
//! [theme]
//! variant = "twilight"
//! source_dirs = ["/home/me/.config/zizi/themes"]
//!
//! [scale]
//! hidpi = true
//! label_font_size = 18.0
//!
//! [platform]
//! os = "windows"
//! message_box_font = { family = "Segoe UI", size = 12.0 }
//! ```

use crate::error::ConfigError;
use crate::loader::DirectorySource;
use crate::resolver::DefaultsResolver;
use crate::scale::ScaleManager;
use crate::themes::ThemeVariant;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use zizi_core::FontSpec;
use zizi_platform::{OsFamily, PlatformSignals};

/// Environment variable overriding `scale.hidpi`
pub const HIDPI_ENV: &str = "ZIZI_HIDPI";

/// Top-level configuration (zizi.toml)
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct ZiziConfig {
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub scale: ScaleConfig,
    #[serde(default)]
    pub platform: PlatformConfig,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ThemeConfig {
    /// Variant id (`daylight`, `twilight`)
    #[serde(default = "default_variant")]
    pub variant: String,
    /// Directories with `<layer>.properties` overrides, later ones win
    #[serde(default)]
    pub source_dirs: Vec<PathBuf>,
}

fn default_variant() -> String {
    ThemeVariant::default().id().to_string()
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            variant: default_variant(),
            source_dirs: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct ScaleConfig {
    /// `false` disables HiDPI scaling
    #[serde(default)]
    pub hidpi: Option<bool>,
    /// Host label font size in points
    #[serde(default)]
    pub label_font_size: Option<f32>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct PlatformConfig {
    /// OS family override (`windows`, `macos`, `linux`)
    #[serde(default)]
    pub os: Option<String>,
    #[serde(default)]
    pub message_box_font: Option<FontSpec>,
    #[serde(default)]
    pub label_font: Option<FontSpec>,
}

impl ZiziConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content, &path.display().to_string())
    }

    /// Load `path` if given and present, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) if path.exists() => Self::load(path),
            Some(path) => {
                tracing::debug!("no config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }

    /// Parse TOML text; `origin` names the text in errors
    pub fn from_toml_str(content: &str, origin: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Toml {
            path: origin.to_string(),
            source,
        })
    }

    /// Apply [`HIDPI_ENV`] from the process environment
    pub fn apply_env(&mut self) {
        let value = std::env::var(HIDPI_ENV).ok();
        self.apply_hidpi_override(value.as_deref());
    }

    /// Apply a `ZIZI_HIDPI`-style value; unparseable values are ignored
    pub fn apply_hidpi_override(&mut self, value: Option<&str>) {
        let Some(value) = value else {
            return;
        };
        match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => self.scale.hidpi = Some(true),
            "0" | "false" | "no" | "off" => self.scale.hidpi = Some(false),
            other => tracing::warn!("ignoring {}={:?}", HIDPI_ENV, other),
        }
    }

    pub fn variant(&self) -> Result<ThemeVariant, ConfigError> {
        ThemeVariant::from_id(&self.theme.variant)
            .ok_or_else(|| ConfigError::UnknownVariant(self.theme.variant.clone()))
    }

    /// Platform signals: detected, then overridden by this configuration
    pub fn signals(&self) -> Result<PlatformSignals, ConfigError> {
        let mut signals = match &self.platform.os {
            Some(os) => {
                let os: OsFamily = os.parse()?;
                PlatformSignals::new(os).with_host_hidpi_aware(os.is_mac())
            }
            None => PlatformSignals::detect().clone(),
        };

        if let Some(font) = &self.platform.message_box_font {
            signals = signals.with_message_box_font(font.clone());
        }
        let label_font = match (&self.platform.label_font, self.scale.label_font_size) {
            (Some(font), Some(size)) => Some(font.with_size(size)),
            (Some(font), None) => Some(font.clone()),
            (None, Some(size)) => Some(FontSpec::plain("Dialog", size)),
            (None, None) => None,
        };
        if let Some(font) = label_font {
            signals = signals.with_label_font(font);
        }
        Ok(signals)
    }

    pub fn scale_manager(&self) -> Result<ScaleManager, ConfigError> {
        Ok(ScaleManager::new(self.signals()?, self.scale.hidpi))
    }

    /// Resolver with the built-in layers plus every configured directory
    pub fn resolver(&self) -> Result<DefaultsResolver, ConfigError> {
        let resolver = DefaultsResolver::new(self.signals()?);
        Ok(self
            .theme
            .source_dirs
            .iter()
            .fold(resolver, |r, dir| r.with_source(DirectorySource::new(dir))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use zizi_core::FontStyle;

    #[test]
    fn empty_config_uses_defaults() {
        let config = ZiziConfig::from_toml_str("", "test").unwrap();
        assert_eq!(config, ZiziConfig::default());
        assert_eq!(config.variant().unwrap(), ThemeVariant::Daylight);
    }

    #[test]
    fn full_config() {
        let config = ZiziConfig::from_toml_str(
            r#"
            [theme]
            variant = "Twilight"
            source_dirs = ["themes"]

            [scale]
            hidpi = false
            label_font_size = 18.0

            [platform]
            os = "windows"
            message_box_font = { family = "Segoe UI", size = 12.0 }
            label_font = { family = "Tahoma", style = "bold", size = 11.0 }
            "#,
            "test",
        )
        .unwrap();

        assert_eq!(config.variant().unwrap(), ThemeVariant::Twilight);
        assert_eq!(config.theme.source_dirs, vec![PathBuf::from("themes")]);

        let signals = config.signals().unwrap();
        assert_eq!(signals.os, OsFamily::Windows);
        assert!(!signals.host_hidpi_aware);
        assert_eq!(
            signals.message_box_font,
            Some(FontSpec::plain("Segoe UI", 12.0))
        );
        assert_eq!(
            signals.label_font,
            Some(FontSpec::new("Tahoma", FontStyle::Bold, 18.0))
        );
        assert!(!config.scale_manager().unwrap().is_scaling_enabled());
    }

    #[test]
    fn unknown_values_are_errors() {
        let config = ZiziConfig::from_toml_str("[theme]\nvariant = \"midnight\"", "test").unwrap();
        assert!(matches!(config.variant(), Err(ConfigError::UnknownVariant(_))));

        let config = ZiziConfig::from_toml_str("[platform]\nos = \"beos\"", "test").unwrap();
        assert!(matches!(config.signals(), Err(ConfigError::Platform(_))));

        assert!(matches!(
            ZiziConfig::from_toml_str("[scale]\nhidpi = 3", "test"),
            Err(ConfigError::Toml { .. })
        ));
    }

    #[test]
    fn hidpi_override() {
        let mut config = ZiziConfig::default();
        config.apply_hidpi_override(Some("false"));
        assert_eq!(config.scale.hidpi, Some(false));
        config.apply_hidpi_override(Some("1"));
        assert_eq!(config.scale.hidpi, Some(true));
        config.apply_hidpi_override(Some("maybe"));
        assert_eq!(config.scale.hidpi, Some(true));
        config.apply_hidpi_override(None);
        assert_eq!(config.scale.hidpi, Some(true));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("zizi.toml");
        fs::write(&path, "[theme]\nvariant = \"twilight\"\n").unwrap();

        let config = ZiziConfig::load(&path).unwrap();
        assert_eq!(config.theme.variant, "twilight");

        let missing = dir.path().join("missing.toml");
        assert_eq!(
            ZiziConfig::load_or_default(Some(&missing)).unwrap(),
            ZiziConfig::default()
        );
        assert!(matches!(ZiziConfig::load(&missing), Err(ConfigError::Io { .. })));
    }
}
