//! Geometry and metric types
//!
//! `Point`/`Size`/`Rect` are float paint-time geometry. `Insets` and
//! `Dimension` are integer metrics as stored in the theme table; both carry
//! a `ui_resource` tag marking values that came from the toolkit or theme
//! (as opposed to values set explicitly by application code). Scaling
//! preserves the tag.

use serde::{Deserialize, Serialize};

/// 2D point
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// 2D size
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// 2D rectangle
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub fn x(&self) -> f32 {
        self.origin.x
    }

    pub fn y(&self) -> f32 {
        self.origin.y
    }

    pub fn width(&self) -> f32 {
        self.size.width
    }

    pub fn height(&self) -> f32 {
        self.size.height
    }

    /// Inset the rect by a delta (shrink from all sides)
    pub fn inset(&self, dx: f32, dy: f32) -> Self {
        Rect::new(
            self.origin.x + dx,
            self.origin.y + dy,
            (self.size.width - 2.0 * dx).max(0.0),
            (self.size.height - 2.0 * dy).max(0.0),
        )
    }

    /// Shrink by per-side insets. Width and height may go negative when the
    /// insets exceed the rect; callers clip.
    pub fn subtract_insets(&self, insets: &Insets) -> Self {
        Rect::new(
            self.origin.x + insets.left as f32,
            self.origin.y + insets.top as f32,
            self.size.width - (insets.left + insets.right) as f32,
            self.size.height - (insets.top + insets.bottom) as f32,
        )
    }
}

/// Per-side integer insets: `top, left, bottom, right`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Insets {
    pub top: i32,
    pub left: i32,
    pub bottom: i32,
    pub right: i32,
    /// Value originates from the toolkit/theme rather than application code
    #[serde(default)]
    pub ui_resource: bool,
}

impl Insets {
    pub const ZERO: Insets = Insets::new(0, 0, 0, 0);

    pub const fn new(top: i32, left: i32, bottom: i32, right: i32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
            ui_resource: false,
        }
    }

    pub const fn uniform(value: i32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Mark as a toolkit/theme-provided value
    pub const fn as_ui_resource(mut self) -> Self {
        self.ui_resource = true;
        self
    }

    /// Componentwise map, keeping the resource tag
    pub fn map(self, f: impl Fn(i32) -> i32) -> Self {
        Self {
            top: f(self.top),
            left: f(self.left),
            bottom: f(self.bottom),
            right: f(self.right),
            ui_resource: self.ui_resource,
        }
    }
}

/// Integer width/height pair
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimension {
    pub width: i32,
    pub height: i32,
    /// Value originates from the toolkit/theme rather than application code
    #[serde(default)]
    pub ui_resource: bool,
}

impl Dimension {
    pub const fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            ui_resource: false,
        }
    }

    /// Mark as a toolkit/theme-provided value
    pub const fn as_ui_resource(mut self) -> Self {
        self.ui_resource = true;
        self
    }

    /// Componentwise map, keeping the resource tag
    pub fn map(self, f: impl Fn(i32) -> i32) -> Self {
        Self {
            width: f(self.width),
            height: f(self.height),
            ui_resource: self.ui_resource,
        }
    }
}
