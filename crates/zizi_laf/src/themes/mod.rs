//! Built-in theme variants
//!
//! Every variant is a chain of property layers: the shared `zizi.laf` base
//! first, then the variant's own layer. The property text for all layers is
//! compiled in; directory sources can override any layer by id.

use crate::loader::EmbeddedSource;
use std::fmt;

/// Layer shared by all variants
pub const BASE_LAYER: &str = "zizi.laf";

const BASE_PROPERTIES: &str = include_str!("zizi.laf.properties");
const DAYLIGHT_PROPERTIES: &str = include_str!("zizi.laf.daylight.properties");
const TWILIGHT_PROPERTIES: &str = include_str!("zizi.laf.twilight.properties");

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemeVariant {
    #[default]
    Daylight,
    Twilight,
}

impl ThemeVariant {
    pub fn all() -> &'static [ThemeVariant] {
        &[ThemeVariant::Daylight, ThemeVariant::Twilight]
    }

    /// Case-insensitive lookup by id
    pub fn from_id(id: &str) -> Option<ThemeVariant> {
        Self::all()
            .iter()
            .copied()
            .find(|v| v.id().eq_ignore_ascii_case(id.trim()))
    }

    pub fn id(&self) -> &'static str {
        match self {
            ThemeVariant::Daylight => "daylight",
            ThemeVariant::Twilight => "twilight",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ThemeVariant::Daylight => "Zizi Daylight",
            ThemeVariant::Twilight => "Zizi Twilight",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ThemeVariant::Daylight => "Zizi Daylight Look and Feel",
            ThemeVariant::Twilight => "Zizi Twilight Look and Feel",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeVariant::Twilight)
    }

    /// Layer ids, base first
    pub fn layers(&self) -> &'static [&'static str] {
        match self {
            ThemeVariant::Daylight => &[BASE_LAYER, "zizi.laf.daylight"],
            ThemeVariant::Twilight => &[BASE_LAYER, "zizi.laf.twilight"],
        }
    }
}

impl fmt::Display for ThemeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Property text of every built-in layer
pub fn embedded_source() -> EmbeddedSource {
    EmbeddedSource::new()
        .with_layer(BASE_LAYER, BASE_PROPERTIES)
        .with_layer("zizi.laf.daylight", DAYLIGHT_PROPERTIES)
        .with_layer("zizi.laf.twilight", TWILIGHT_PROPERTIES)
}
