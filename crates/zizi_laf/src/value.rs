//! Typed theme values and the raw-token parser

use crate::error::ParseError;
use crate::registry::{InstanceRegistry, UiResource};
use smallvec::SmallVec;
use std::fmt;
use std::sync::{Arc, OnceLock};
use zizi_core::{Color, Dimension, FontSpec, Insets};

/// Key exempt from the `…Size` → dimension rule (it is a plain integer)
const DIMENSION_EXEMPT_KEY: &str = "SplitPane.dividerSize";

/// A resolved UI-defaults value
#[derive(Clone, Debug, PartialEq)]
pub enum ThemeValue {
    Null,
    Bool(bool),
    Int(i32),
    Color(Color),
    Insets(Insets),
    Dimension(Dimension),
    Font(FontSpec),
    Lazy(LazyInstance),
    Str(String),
}

impl ThemeValue {
    pub fn is_null(&self) -> bool {
        matches!(self, ThemeValue::Null)
    }

    /// Short type label for listings
    pub fn type_name(&self) -> &'static str {
        match self {
            ThemeValue::Null => "null",
            ThemeValue::Bool(_) => "bool",
            ThemeValue::Int(_) => "int",
            ThemeValue::Color(_) => "color",
            ThemeValue::Insets(_) => "insets",
            ThemeValue::Dimension(_) => "dimension",
            ThemeValue::Font(_) => "font",
            ThemeValue::Lazy(_) => "lazy",
            ThemeValue::Str(_) => "string",
        }
    }
}

impl fmt::Display for ThemeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeValue::Null => f.write_str("null"),
            ThemeValue::Bool(b) => write!(f, "{b}"),
            ThemeValue::Int(i) => write!(f, "{i}"),
            ThemeValue::Color(c) => write!(f, "{c}"),
            ThemeValue::Insets(i) => write!(f, "{},{},{},{}", i.top, i.left, i.bottom, i.right),
            ThemeValue::Dimension(d) => write!(f, "{},{}", d.width, d.height),
            ThemeValue::Font(font) => write!(f, "{font}"),
            ThemeValue::Lazy(lazy) => write!(f, "<{}>", lazy.id()),
            ThemeValue::Str(s) => f.write_str(s),
        }
    }
}

/// Deferred border/icon construction.
///
/// The first [`LazyInstance::get`] runs the registered factory; the outcome,
/// failure included, is cached for every clone of the token.
#[derive(Clone)]
pub struct LazyInstance {
    id: String,
    registry: Arc<InstanceRegistry>,
    cell: Arc<OnceLock<Option<UiResource>>>,
}

impl LazyInstance {
    pub fn new(id: impl Into<String>, registry: Arc<InstanceRegistry>) -> Self {
        Self {
            id: id.into(),
            registry,
            cell: Arc::new(OnceLock::new()),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_realized(&self) -> bool {
        self.cell.get().is_some()
    }

    /// Realize the instance. Construction errors are logged and yield `None`.
    pub fn get(&self) -> Option<UiResource> {
        self.cell
            .get_or_init(|| match self.registry.instantiate(&self.id) {
                Ok(resource) => Some(resource),
                Err(err) => {
                    tracing::warn!("lazy theme value: {}", err);
                    None
                }
            })
            .clone()
    }
}

impl PartialEq for LazyInstance {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl fmt::Debug for LazyInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyInstance")
            .field("id", &self.id)
            .field("realized", &self.is_realized())
            .finish()
    }
}

/// Turns raw property strings into [`ThemeValue`]s based on the key's
/// naming convention
#[derive(Clone, Debug)]
pub struct ValueParser {
    registry: Arc<InstanceRegistry>,
}

impl ValueParser {
    pub fn new(registry: Arc<InstanceRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Arc<InstanceRegistry> {
        &self.registry
    }

    /// Parse `raw` for `key`. First matching rule wins:
    ///
    /// 1. `null` / `true` / `false`
    /// 2. `.border` / `.icon` keys → lazy instance
    /// 3. `.margin` / `.padding` / `…Insets` keys → insets (fatal if malformed)
    /// 4. `…Size` keys → dimension (fatal if malformed)
    /// 5. `…Width` / `…Height` keys → integer (fatal if malformed)
    /// 6. 6 or 8 hex digits → color
    /// 7. integer
    /// 8. the string itself
    pub fn parse(&self, key: &str, raw: &str) -> Result<ThemeValue, ParseError> {
        let value = raw.trim();

        match value {
            "null" => return Ok(ThemeValue::Null),
            "true" => return Ok(ThemeValue::Bool(true)),
            "false" => return Ok(ThemeValue::Bool(false)),
            _ => {}
        }

        if key.ends_with(".border") || key.ends_with(".icon") {
            return Ok(ThemeValue::Lazy(LazyInstance::new(
                value,
                Arc::clone(&self.registry),
            )));
        }

        if key.ends_with(".margin") || key.ends_with(".padding") || key.ends_with("Insets") {
            return parse_insets(value).map(ThemeValue::Insets).ok_or_else(|| {
                ParseError::Insets {
                    key: key.to_string(),
                    value: value.to_string(),
                }
            });
        }

        if key.ends_with("Size") && key != DIMENSION_EXEMPT_KEY {
            return parse_dimension(value)
                .map(ThemeValue::Dimension)
                .ok_or_else(|| ParseError::Dimension {
                    key: key.to_string(),
                    value: value.to_string(),
                });
        }

        if key.ends_with("Width") || key.ends_with("Height") {
            return value
                .parse::<i32>()
                .map(ThemeValue::Int)
                .map_err(|_| ParseError::Integer {
                    key: key.to_string(),
                    value: value.to_string(),
                });
        }

        if let Some(color) = Color::parse_hex(value) {
            return Ok(ThemeValue::Color(color));
        }

        if let Ok(int) = value.parse::<i32>() {
            return Ok(ThemeValue::Int(int));
        }

        Ok(ThemeValue::Str(value.to_string()))
    }
}

/// Exactly `count` comma-separated integers
fn parse_int_list(value: &str, count: usize) -> Option<SmallVec<[i32; 4]>> {
    let numbers = value
        .split(',')
        .map(|part| part.trim().parse::<i32>().ok())
        .collect::<Option<SmallVec<[i32; 4]>>>()?;
    (numbers.len() == count).then_some(numbers)
}

fn parse_insets(value: &str) -> Option<Insets> {
    let n = parse_int_list(value, 4)?;
    Some(Insets::new(n[0], n[1], n[2], n[3]).as_ui_resource())
}

fn parse_dimension(value: &str) -> Option<Dimension> {
    let n = parse_int_list(value, 2)?;
    Some(Dimension::new(n[0], n[1]).as_ui_resource())
}
