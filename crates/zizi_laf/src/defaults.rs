//! The UI-defaults table painters read from

use crate::registry::UiResource;
use crate::value::ThemeValue;
use rustc_hash::FxHashMap;
use zizi_core::{Color, Dimension, FontSpec, Insets};

/// Key → typed value table.
///
/// Lookups never fail hard: typed accessors return `None` for absent keys
/// and for values of another type, and the `_or` variants take a fallback.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ThemeDefaults {
    values: FxHashMap<String, ThemeValue>,
}

impl ThemeDefaults {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: ThemeValue) -> Option<ThemeValue> {
        self.values.insert(key.into(), value)
    }

    pub fn get(&self, key: &str) -> Option<&ThemeValue> {
        self.values.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(|k| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ThemeValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Entries sorted by key
    pub fn sorted(&self) -> Vec<(&str, &ThemeValue)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }

    pub fn color(&self, key: &str) -> Option<Color> {
        match self.get(key)? {
            ThemeValue::Color(c) => Some(*c),
            _ => None,
        }
    }

    pub fn color_or(&self, key: &str, fallback: Color) -> Color {
        self.color(key).unwrap_or(fallback)
    }

    pub fn int(&self, key: &str) -> Option<i32> {
        match self.get(key)? {
            ThemeValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn int_or(&self, key: &str, fallback: i32) -> i32 {
        self.int(key).unwrap_or(fallback)
    }

    pub fn boolean(&self, key: &str) -> Option<bool> {
        match self.get(key)? {
            ThemeValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn insets(&self, key: &str) -> Option<Insets> {
        match self.get(key)? {
            ThemeValue::Insets(i) => Some(*i),
            _ => None,
        }
    }

    pub fn dimension(&self, key: &str) -> Option<Dimension> {
        match self.get(key)? {
            ThemeValue::Dimension(d) => Some(*d),
            _ => None,
        }
    }

    pub fn font(&self, key: &str) -> Option<&FontSpec> {
        match self.get(key)? {
            ThemeValue::Font(f) => Some(f),
            _ => None,
        }
    }

    pub fn string(&self, key: &str) -> Option<&str> {
        match self.get(key)? {
            ThemeValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Realize a lazy `.border` / `.icon` entry
    pub fn instance(&self, key: &str) -> Option<UiResource> {
        match self.get(key)? {
            ThemeValue::Lazy(lazy) => lazy.get(),
            _ => None,
        }
    }
}

impl<K: Into<String>> FromIterator<(K, ThemeValue)> for ThemeDefaults {
    fn from_iter<I: IntoIterator<Item = (K, ThemeValue)>>(iter: I) -> Self {
        let mut defaults = ThemeDefaults::new();
        for (k, v) in iter {
            defaults.insert(k, v);
        }
        defaults
    }
}
