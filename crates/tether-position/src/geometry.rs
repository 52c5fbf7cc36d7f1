//! Geometry value types.
//!
//! [Geometry Interfaces Module Level 1 § 4 The DOMRect interfaces](https://www.w3.org/TR/geometry-1/#DOMRect)
//!
//! "Objects implementing the DOMRectReadOnly interface represent a rectangle.
//! Rectangles have the following properties: origin, width, height."

use serde::Serialize;

/// A rectangle reported by the rendering surface, relative to the viewport.
///
/// [CSSOM View § 6.1 getBoundingClientRect()](https://www.w3.org/TR/cssom-view-1/#dom-element-getboundingclientrect)
///
/// "The getBoundingClientRect() method, when invoked, must return the result
/// of the following algorithm: ... Return a DOMRect object describing the
/// smallest rectangle that includes all of the rectangles in list of which
/// the height or width is not zero."
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ViewportRect {
    /// Distance from the top of the viewport to the top border edge.
    pub top: f32,
    /// Distance from the left of the viewport to the left border edge.
    pub left: f32,
    /// Border box width.
    pub width: f32,
    /// Border box height.
    pub height: f32,
}

impl ViewportRect {
    /// Create a new viewport rectangle.
    #[must_use]
    pub const fn new(top: f32, left: f32, width: f32, height: f32) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    /// True when the surface reported an empty rectangle.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 && self.height <= 0.0
    }
}

/// The document's scroll position, or a scroll container's own scroll.
///
/// [CSSOM View § 4 scrollX / scrollY](https://www.w3.org/TR/cssom-view-1/#dom-window-scrollx)
///
/// "The scrollX attribute must return the x-coordinate, relative to the
/// initial containing block origin, of the left of the viewport."
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ScrollOffset {
    /// Vertical scroll distance.
    pub scroll_top: f32,
    /// Horizontal scroll distance.
    pub scroll_left: f32,
}

impl ScrollOffset {
    /// Create a new scroll offset.
    #[must_use]
    pub const fn new(scroll_top: f32, scroll_left: f32) -> Self {
        Self {
            scroll_top,
            scroll_left,
        }
    }
}

/// Border thickness on the top and left edges of an element.
///
/// [CSSOM View § 7 clientTop / clientLeft](https://www.w3.org/TR/cssom-view-1/#dom-element-clienttop)
///
/// "Return the computed value of the border-top-width property plus the
/// height of any scrollbar rendered between the top padding edge and the
/// top border edge."
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct BorderWidths {
    /// Top border width.
    pub top: f32,
    /// Left border width.
    pub left: f32,
}

impl BorderWidths {
    /// Create new border widths.
    #[must_use]
    pub const fn new(top: f32, left: f32) -> Self {
        Self { top, left }
    }
}

/// The computed bounding box of an element.
///
/// All edges share one coordinate space: the document for
/// [`offset`](crate::offset), the nearest positioned ancestor's padding edge
/// for [`position`](crate::position).
///
/// The box can only be built through [`BoundingBox::new`], which derives
/// `bottom` and `right` from the origin and size, so
/// `bottom == top + height` and `right == left + width` always hold.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct BoundingBox {
    width: f32,
    height: f32,
    top: f32,
    bottom: f32,
    left: f32,
    right: f32,
}

impl BoundingBox {
    /// Build a box from its top-left corner and size.
    ///
    /// Negative sizes are clamped to zero.
    #[must_use]
    pub fn new(top: f32, left: f32, width: f32, height: f32) -> Self {
        let width = width.max(0.0);
        let height = height.max(0.0);
        Self {
            width,
            height,
            top,
            bottom: top + height,
            left,
            right: left + width,
        }
    }

    /// Build a box of the given size at the origin.
    ///
    /// Useful for a target element, where only the size feeds placement.
    #[must_use]
    pub fn sized(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Width of the box.
    #[must_use]
    pub const fn width(&self) -> f32 {
        self.width
    }

    /// Height of the box.
    #[must_use]
    pub const fn height(&self) -> f32 {
        self.height
    }

    /// Top edge.
    #[must_use]
    pub const fn top(&self) -> f32 {
        self.top
    }

    /// Bottom edge (`top + height`).
    #[must_use]
    pub const fn bottom(&self) -> f32 {
        self.bottom
    }

    /// Left edge.
    #[must_use]
    pub const fn left(&self) -> f32 {
        self.left
    }

    /// Right edge (`left + width`).
    #[must_use]
    pub const fn right(&self) -> f32 {
        self.right
    }
}

/// The coordinates at which a target's top-left corner should be placed.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Coordinates {
    /// Vertical coordinate of the target's top edge.
    pub top: f32,
    /// Horizontal coordinate of the target's left edge.
    pub left: f32,
}

impl Coordinates {
    /// Create new coordinates.
    #[must_use]
    pub const fn new(top: f32, left: f32) -> Self {
        Self { top, left }
    }
}
