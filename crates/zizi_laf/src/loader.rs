//! Cascading property loading
//!
//! A theme is an ordered list of layer ids, base first. Each layer may have
//! a `.properties` source in any of the configured [`PropertySource`]s;
//! sources are consulted in registration order and all of them contribute,
//! so a later source (e.g. a user directory) overrides an earlier one (the
//! embedded theme) for the same layer.

use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::properties::PropertyTable;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Provider of raw `.properties` text per layer id
pub trait PropertySource: Send + Sync {
    /// Name used in diagnostics
    fn name(&self) -> String;

    /// `Ok(None)` when this source has nothing for `layer`
    fn read(&self, layer: &str) -> io::Result<Option<String>>;
}

/// Sources compiled into the binary
#[derive(Clone, Debug, Default)]
pub struct EmbeddedSource {
    layers: Vec<(&'static str, &'static str)>,
}

impl EmbeddedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_layer(mut self, layer: &'static str, text: &'static str) -> Self {
        self.layers.push((layer, text));
        self
    }
}

impl PropertySource for EmbeddedSource {
    fn name(&self) -> String {
        "embedded".to_string()
    }

    fn read(&self, layer: &str) -> io::Result<Option<String>> {
        Ok(self
            .layers
            .iter()
            .find(|(id, _)| *id == layer)
            .map(|(_, text)| text.to_string()))
    }
}

/// `<dir>/<layer>.properties` files
#[derive(Clone, Debug)]
pub struct DirectorySource {
    dir: PathBuf,
}

impl DirectorySource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, layer: &str) -> PathBuf {
        self.dir.join(format!("{layer}.properties"))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl PropertySource for DirectorySource {
    fn name(&self) -> String {
        self.dir.display().to_string()
    }

    fn read(&self, layer: &str) -> io::Result<Option<String>> {
        match std::fs::read_to_string(self.path_for(layer)) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }
}

/// Merged table plus a note of whether any source failed
#[derive(Clone, Debug, Default)]
pub struct LoadedProperties {
    pub table: PropertyTable,
    /// Layers whose source existed but could not be read or parsed
    pub failed_layers: Vec<String>,
}

impl LoadedProperties {
    pub fn is_complete(&self) -> bool {
        self.failed_layers.is_empty()
    }
}

#[derive(Clone, Default)]
pub struct CascadingPropertyLoader {
    sources: Vec<Arc<dyn PropertySource>>,
}

impl CascadingPropertyLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a source; later sources override earlier ones per layer
    pub fn with_source(mut self, source: impl PropertySource + 'static) -> Self {
        self.sources.push(Arc::new(source));
        self
    }

    pub fn push_source(&mut self, source: Arc<dyn PropertySource>) {
        self.sources.push(source);
    }

    /// Load and merge `chain`, base layer first
    pub fn load(&self, chain: &[&str], diagnostics: &mut Diagnostics) -> LoadedProperties {
        let mut loaded = LoadedProperties::default();

        for layer in chain {
            let mut found = false;
            for source in &self.sources {
                let text = match source.read(layer) {
                    Ok(Some(text)) => text,
                    Ok(None) => continue,
                    Err(e) => {
                        diagnostics.push(
                            DiagnosticKind::UnreadableSource,
                            format!("{layer} from {}: {e}", source.name()),
                        );
                        loaded.failed_layers.push(layer.to_string());
                        continue;
                    }
                };
                found = true;

                match PropertyTable::parse(&text) {
                    Ok(table) => {
                        tracing::trace!(
                            "loaded {} entries for layer {} from {}",
                            table.len(),
                            layer,
                            source.name()
                        );
                        loaded.table.merge(table);
                    }
                    Err(e) => {
                        diagnostics.push(
                            DiagnosticKind::UnreadableSource,
                            format!("{layer} from {}: {e}", source.name()),
                        );
                        loaded.failed_layers.push(layer.to_string());
                    }
                }
            }

            if !found && !loaded.failed_layers.iter().any(|l| l == layer) {
                diagnostics.push(
                    DiagnosticKind::MissingSource,
                    format!("no property source for layer {layer}"),
                );
            }
        }

        loaded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn derived_layers_override_base() {
        let loader = CascadingPropertyLoader::new().with_source(
            EmbeddedSource::new()
                .with_layer("base", "key = red\nonly.base = 1")
                .with_layer("derived", "key = blue"),
        );
        let mut diags = Diagnostics::new();
        let loaded = loader.load(&["base", "derived"], &mut diags);

        assert!(loaded.is_complete());
        assert_eq!(loaded.table.get("key"), Some("blue"));
        assert_eq!(loaded.table.get("only.base"), Some("1"));
        assert!(diags.is_empty());
    }

    #[test]
    fn missing_layer_is_not_an_error() {
        let loader = CascadingPropertyLoader::new()
            .with_source(EmbeddedSource::new().with_layer("base", "a = 1"));
        let mut diags = Diagnostics::new();
        let loaded = loader.load(&["base", "empty"], &mut diags);

        assert!(loaded.is_complete());
        assert_eq!(loaded.table.len(), 1);
        assert_eq!(diags.count(DiagnosticKind::MissingSource), 1);
    }

    #[test]
    fn directory_overrides_embedded() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("base.properties"), "a = 2\nb = 3\n").unwrap();

        let loader = CascadingPropertyLoader::new()
            .with_source(EmbeddedSource::new().with_layer("base", "a = 1"))
            .with_source(DirectorySource::new(dir.path()));
        let mut diags = Diagnostics::new();
        let loaded = loader.load(&["base"], &mut diags);

        assert_eq!(loaded.table.get("a"), Some("2"));
        assert_eq!(loaded.table.get("b"), Some("3"));
        assert!(diags.is_empty());
    }

    #[test]
    fn unreadable_source_is_skipped_and_reported() {
        let dir = tempfile::tempdir().unwrap();
        // invalid UTF-8 cannot be read as text
        fs::write(dir.path().join("derived.properties"), [0xFFu8, 0xFE, 0x00]).unwrap();

        let loader = CascadingPropertyLoader::new()
            .with_source(
                EmbeddedSource::new()
                    .with_layer("base", "a = 1")
                    .with_layer("derived", "a = 2"),
            )
            .with_source(DirectorySource::new(dir.path()));
        let mut diags = Diagnostics::new();
        let loaded = loader.load(&["base", "derived"], &mut diags);

        assert!(!loaded.is_complete());
        assert_eq!(loaded.failed_layers, vec!["derived".to_string()]);
        assert_eq!(loaded.table.get("a"), Some("2"));
        assert_eq!(diags.count(DiagnosticKind::UnreadableSource), 1);
    }
}
