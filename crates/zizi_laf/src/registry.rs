//! Factories for lazily realized theme objects
//!
//! `.border` and `.icon` keys name an object instead of describing a value.
//! The name is an identifier registered here; the object is built on first
//! read of the defaults entry.

use crate::error::RegistryError;
use crate::paint::border::{Border, ButtonBorder, ComponentBorder, EmptyBorder, MarginBorder, RoundBorder};
use crate::paint::icon::{CheckBoxIcon, Icon, RadioButtonIcon};
use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::Arc;

/// A realized theme object
#[derive(Clone)]
pub enum UiResource {
    Border(Arc<dyn Border>),
    Icon(Arc<dyn Icon>),
}

impl UiResource {
    pub fn as_border(&self) -> Option<&Arc<dyn Border>> {
        match self {
            UiResource::Border(b) => Some(b),
            UiResource::Icon(_) => None,
        }
    }

    pub fn as_icon(&self) -> Option<&Arc<dyn Icon>> {
        match self {
            UiResource::Icon(i) => Some(i),
            UiResource::Border(_) => None,
        }
    }
}

impl fmt::Debug for UiResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UiResource::Border(b) => f.debug_tuple("Border").field(b).finish(),
            UiResource::Icon(i) => f.debug_tuple("Icon").field(i).finish(),
        }
    }
}

pub type Factory = Arc<dyn Fn() -> Result<UiResource, String> + Send + Sync>;

#[derive(Clone, Default)]
pub struct InstanceRegistry {
    factories: FxHashMap<String, Factory>,
}

impl InstanceRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in borders and icons
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register_border("zizi.border.Empty", || EmptyBorder);
        registry.register_border("zizi.border.Margin", || MarginBorder);
        registry.register_border("zizi.border.Component", ComponentBorder::default);
        registry.register_border("zizi.border.Round", RoundBorder::default);
        registry.register_border("zizi.border.Button", ButtonBorder::default);
        registry.register_icon("zizi.icon.CheckBox", CheckBoxIcon::default);
        registry.register_icon("zizi.icon.RadioButton", RadioButtonIcon::default);
        registry
    }

    /// Register (or replace) a fallible factory
    pub fn register<F>(&mut self, id: impl Into<String>, factory: F)
    where
        F: Fn() -> Result<UiResource, String> + Send + Sync + 'static,
    {
        self.factories.insert(id.into(), Arc::new(factory));
    }

    pub fn register_border<B, F>(&mut self, id: impl Into<String>, factory: F)
    where
        B: Border + 'static,
        F: Fn() -> B + Send + Sync + 'static,
    {
        self.register(id, move || Ok(UiResource::Border(Arc::new(factory()))));
    }

    pub fn register_icon<I, F>(&mut self, id: impl Into<String>, factory: F)
    where
        I: Icon + 'static,
        F: Fn() -> I + Send + Sync + 'static,
    {
        self.register(id, move || Ok(UiResource::Icon(Arc::new(factory()))));
    }

    pub fn contains(&self, id: &str) -> bool {
        self.factories.contains_key(id)
    }

    pub fn instantiate(&self, id: &str) -> Result<UiResource, RegistryError> {
        let factory = self
            .factories
            .get(id)
            .ok_or_else(|| RegistryError::Unknown(id.to_string()))?;
        factory().map_err(|msg| RegistryError::Construction {
            id: id.to_string(),
            msg,
        })
    }
}

impl fmt::Debug for InstanceRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ids: Vec<&String> = self.factories.keys().collect();
        ids.sort();
        f.debug_struct("InstanceRegistry").field("ids", &ids).finish()
    }
}
