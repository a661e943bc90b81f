//! Zizi Look and Feel
//!
//! Theme engine for a desktop widget toolkit: turns cascading `.properties`
//! theme layers into a typed UI-defaults table and scales metrics for HiDPI
//! displays.
//!
//! # Overview
//!
//! - **Property layers**: a theme is an ordered chain of layer ids; each
//!   layer's `.properties` text comes from the compiled-in themes or from
//!   override directories ([`CascadingPropertyLoader`])
//! - **Values**: raw strings become colors, insets, sizes, integers, or
//!   lazily built borders and icons based on the key ([`ValueParser`])
//! - **Variables**: `@name` and `@@name` tokens, plus `*.suffix` globals
//! - **Build pipeline**: baseline → disabled-key patch → font patch →
//!   property overlay ([`DefaultsResolver`])
//! - **Scaling**: a quantized factor derived from the label font
//!   ([`ScaleManager`], [`UiScale`])
//!
//! # Quick Start
//!
//! ```rust
//! use zizi_laf::{DefaultsResolver, ScaleManager, ThemeState, ThemeVariant};
//! use zizi_platform::{OsFamily, PlatformSignals};
//!
//! let signals = PlatformSignals::new(OsFamily::Linux);
//! let state = ThemeState::new(
//!     DefaultsResolver::new(signals.clone()),
//!     ScaleManager::new(signals, None),
//!     ThemeVariant::Daylight,
//! )
//! .unwrap();
//!
//! let theme = state.current();
//! let background = theme.defaults().color("Panel.background");
//! assert!(background.is_some());
//!
//! // failed builds leave the installed theme alone
//! state.apply(ThemeVariant::Twilight).unwrap();
//! assert!(state.current().variant().is_dark());
//! ```
//!
//! # Painting
//!
//! Widgets never read globals. They get a [`ThemeContext`] snapshot and
//! resolve their style through a [`paint::PaintStrategy`].

pub mod baseline;
pub mod config;
pub mod context;
pub mod defaults;
pub mod diagnostics;
pub mod error;
pub mod loader;
pub mod paint;
pub mod properties;
pub mod registry;
pub mod resolver;
pub mod scale;
pub mod state;
pub mod themes;
pub mod value;
pub mod variables;

pub use baseline::{BaselineProvider, MetalBaseline};
pub use config::ZiziConfig;
pub use context::ThemeContext;
pub use defaults::ThemeDefaults;
pub use diagnostics::{Diagnostic, DiagnosticKind, Diagnostics};
pub use error::{BuildError, ConfigError, ParseError, PropertiesError, RegistryError};
pub use loader::{CascadingPropertyLoader, DirectorySource, EmbeddedSource, LoadedProperties, PropertySource};
pub use properties::PropertyTable;
pub use registry::{InstanceRegistry, UiResource};
pub use resolver::{BuildOutput, BuildStage, DefaultsResolver};
pub use scale::{ScaleManager, Scalable, UiScale};
pub use state::{set_redraw_callback, ThemeState};
pub use themes::ThemeVariant;
pub use value::{LazyInstance, ThemeValue, ValueParser};
