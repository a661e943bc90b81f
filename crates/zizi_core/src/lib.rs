//! Zizi Core Types
//!
//! Value types shared by every Zizi crate:
//!
//! - **Color**: 8-bit RGBA colors parsed from theme hex tokens
//! - **Geometry**: `Point`, `Size`, `Rect` for paint-time computations
//! - **Metrics**: `Insets` and `Dimension`, integer device/logical units
//!   carrying a "UI resource" tag that marks toolkit-provided defaults
//! - **Fonts**: `FontSpec`, the font description the theme table stores
//!
//! # Example
//!
//! ```rust
//! use zizi_core::{Color, Insets, Rect};
//!
//! let accent = Color::from_hex(0x336699);
//! assert_eq!(accent.to_hex_string(), "336699");
//!
//! let bounds = Rect::new(0.0, 0.0, 100.0, 40.0);
//! let content = bounds.subtract_insets(&Insets::new(4, 8, 4, 8));
//! assert_eq!(content.width(), 84.0);
//! ```

pub mod color;
pub mod font;
pub mod geometry;

pub use color::Color;
pub use font::{FontSpec, FontStyle};
pub use geometry::{Dimension, Insets, Point, Rect, Size};
