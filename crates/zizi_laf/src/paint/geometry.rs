//! Shape helpers shared by borders, icons, and arrow buttons

use crate::scale::UiScale;
use zizi_core::{Point, Rect};

/// Logical arrow size: base width and height of a north/south arrow
const ARROW_WIDTH: f32 = 9.0;
const ARROW_HEIGHT: f32 = 5.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArrowDirection {
    North,
    South,
    West,
    East,
}

impl ArrowDirection {
    pub fn is_vertical(self) -> bool {
        matches!(self, ArrowDirection::North | ArrowDirection::South)
    }
}

/// Triangle for an arrow centered in `bounds`.
///
/// The triangle is 9×5 logical pixels (5×9 for west/east), scaled.
pub fn arrow_points(bounds: Rect, direction: ArrowDirection, scale: UiScale) -> [Point; 3] {
    let w = scale.scale(ARROW_WIDTH);
    let h = scale.scale(ARROW_HEIGHT);
    let (box_w, box_h) = if direction.is_vertical() { (w, h) } else { (h, w) };
    let x = bounds.x() + (bounds.width() - box_w) / 2.0;
    let y = bounds.y() + (bounds.height() - box_h) / 2.0;
    let p = |dx: f32, dy: f32| Point::new(x + dx, y + dy);

    match direction {
        ArrowDirection::North => [p(0.0, h), p(w, h), p(w / 2.0, 0.0)],
        ArrowDirection::South => [p(0.0, 0.0), p(w, 0.0), p(w / 2.0, h)],
        ArrowDirection::West => [p(h, 0.0), p(h, w), p(0.0, w / 2.0)],
        ArrowDirection::East => [p(0.0, 0.0), p(0.0, w), p(h, w / 2.0)],
    }
}

/// Rectangle with rounded corners; `arc` is the corner diameter
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoundRect {
    pub rect: Rect,
    pub arc: f32,
}

impl RoundRect {
    pub fn new(rect: Rect, arc: f32) -> Self {
        Self { rect, arc: arc.max(0.0) }
    }

    /// Shrink by `delta` on every side, keeping corners concentric
    pub fn shrink(&self, delta: f32) -> Self {
        RoundRect::new(self.rect.inset(delta, delta), self.arc - delta * 2.0)
    }
}

/// Outline shapes of a focusable component
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FocusRing {
    /// Outer edge of the focus ring (the full component bounds)
    pub outer: RoundRect,
    /// Outer edge of the border line
    pub border: RoundRect,
    /// Inner edge of the border line, where the background starts
    pub inner: RoundRect,
}

/// Focus ring, border, and background shapes for a component.
///
/// All values are device pixels. The focus ring occupies the outermost
/// `focus_width` pixels, the border line the next `line_width`.
pub fn focus_ring_rects(bounds: Rect, focus_width: f32, line_width: f32, arc: f32) -> FocusRing {
    let border = RoundRect::new(bounds.inset(focus_width, focus_width), arc);
    let outer = RoundRect::new(bounds, if arc > 0.0 { arc + focus_width * 2.0 } else { 0.0 });
    let inner = border.shrink(line_width);
    FocusRing { outer, border, inner }
}
