//! Laid-out box data attached to each element.
//!
//! The render tree does not run layout: every element carries the border box
//! it was laid out at, and the geometry surface derives viewport rectangles
//! from that plus the current scroll state.

use serde::{Deserialize, Serialize};
use tether_position::ScrollOffset;

/// [§ 9.3.1 Choosing a positioning scheme: 'position' property](https://www.w3.org/TR/CSS2/visuren.html#choose-position)
///
/// "The 'position' and 'float' properties determine which of the CSS 2
/// positioning algorithms is used to calculate the position of a box."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionType {
    /// "The box is a normal box, laid out according to the normal flow."
    #[default]
    Static,
    /// "The box's position is calculated according to the normal flow.
    /// Then the box is offset relative to its normal position."
    Relative,
    /// "The box's position (and possibly size) is specified with the
    /// 'top', 'right', 'bottom', and 'left' properties."
    Absolute,
    /// "The box's position is calculated according to the 'absolute' model,
    /// but the box is fixed with respect to some reference."
    Fixed,
    /// [CSS Positioned Layout Module Level 3 § 3.2](https://www.w3.org/TR/css-position-3/#sticky-position)
    ///
    /// "A stickily positioned box is positioned similarly to a relatively
    /// positioned box, but the offset is computed with reference to the
    /// nearest ancestor with a scrolling mechanism."
    Sticky,
}

impl PositionType {
    /// [§ 9.3.2 Box offsets](https://www.w3.org/TR/CSS2/visuren.html#position-props)
    ///
    /// "An element is said to be positioned if its 'position' property has
    /// a value other than 'static'."
    #[must_use]
    pub const fn is_positioned(self) -> bool {
        !matches!(self, Self::Static)
    }
}

/// A rectangle positioned in 2D space.
///
/// [§ 3 The CSS Box Model](https://www.w3.org/TR/css-box-3/#box-model)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Horizontal position of the top-left corner.
    pub x: f32,
    /// Vertical position of the top-left corner.
    pub y: f32,
    /// Width of the rectangle.
    pub width: f32,
    /// Height of the rectangle.
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Edge sizes for a border.
///
/// [§ 3 The CSS Box Model](https://www.w3.org/TR/css-box-3/#box-model)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeSizes {
    /// Top edge size.
    pub top: f32,
    /// Right edge size.
    pub right: f32,
    /// Bottom edge size.
    pub bottom: f32,
    /// Left edge size.
    pub left: f32,
}

/// Layout results for one element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoxStyle {
    /// Computed `position`.
    pub position: PositionType,
    /// The border box in document coordinates, as laid out with every scroll
    /// offset at zero. Boxes inside a `position: fixed` subtree are in
    /// viewport coordinates instead.
    pub border_box: Rect,
    /// Border widths.
    pub border: EdgeSizes,
    /// The element's own scroll position, if it is a scroll container.
    pub scroll: ScrollOffset,
}

impl BoxStyle {
    /// A statically positioned box with no border.
    #[must_use]
    pub fn at(border_box: Rect) -> Self {
        Self {
            border_box,
            ..Self::default()
        }
    }

    /// Builder-style setter for `position`.
    #[must_use]
    pub const fn with_position(mut self, position: PositionType) -> Self {
        self.position = position;
        self
    }

    /// Builder-style setter for the border widths.
    #[must_use]
    pub const fn with_border(mut self, border: EdgeSizes) -> Self {
        self.border = border;
        self
    }
}
