//! Anchored placement of a target box against a host box.
//!
//! A placement names the host side the target sits against (its primary
//! side) and how the target is aligned along that side. Both axes are
//! resolved independently:
//!
//! ```text
//!              top-left     top     top-right
//!                  ┌─────────────────────┐
//!         left-top │                     │ right-top
//!             left │        HOST         │ right
//!      left-bottom │                     │ right-bottom
//!                  └─────────────────────┘
//!           bottom-left   bottom   bottom-right
//! ```

use strum_macros::{Display, EnumIter, EnumString};

use crate::error::PositionError;
use crate::geometry::{BoundingBox, Coordinates};

/// The host side the target is placed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Side {
    /// Above the host.
    Top,
    /// Below the host.
    Bottom,
    /// Left of the host.
    Left,
    /// Right of the host.
    Right,
}

impl Side {
    /// True for `Top`/`Bottom`, whose cross axis is horizontal.
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }
}

/// Alignment of the target along the host side.
///
/// `Start` is the left edge for vertical sides and the top edge for
/// horizontal ones; `End` is the opposite edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Alignment {
    /// Align the leading edges.
    Start,
    /// Center the target on the host.
    Center,
    /// Align the trailing edges.
    End,
}

/// One of the twelve supported anchors.
///
/// Names are kebab-case: the primary side, then the alignment edge. The bare
/// side names are centered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum Placement {
    /// `top-left`
    TopLeft,
    /// `top`
    Top,
    /// `top-right`
    TopRight,
    /// `bottom-left`
    BottomLeft,
    /// `bottom`
    Bottom,
    /// `bottom-right`
    BottomRight,
    /// `left-top`
    LeftTop,
    /// `left`
    Left,
    /// `left-bottom`
    LeftBottom,
    /// `right-top`
    RightTop,
    /// `right`
    Right,
    /// `right-bottom`
    RightBottom,
}

impl Placement {
    /// Parse a placement name such as `"top-left"` or `"right"`.
    ///
    /// # Errors
    ///
    /// Returns [`PositionError::UnknownPlacement`] carrying the rejected
    /// name if it is not one of the twelve identifiers.
    pub fn parse(name: &str) -> Result<Self, PositionError> {
        name.parse::<Self>()
            .map_err(|_| PositionError::UnknownPlacement(name.to_string()))
    }

    /// The host side the target is placed against.
    #[must_use]
    pub const fn side(self) -> Side {
        match self {
            Self::TopLeft | Self::Top | Self::TopRight => Side::Top,
            Self::BottomLeft | Self::Bottom | Self::BottomRight => Side::Bottom,
            Self::LeftTop | Self::Left | Self::LeftBottom => Side::Left,
            Self::RightTop | Self::Right | Self::RightBottom => Side::Right,
        }
    }

    /// The alignment along the host side.
    #[must_use]
    pub const fn alignment(self) -> Alignment {
        match self {
            Self::TopLeft | Self::BottomLeft | Self::LeftTop | Self::RightTop => Alignment::Start,
            Self::Top | Self::Bottom | Self::Left | Self::Right => Alignment::Center,
            Self::TopRight | Self::BottomRight | Self::LeftBottom | Self::RightBottom => {
                Alignment::End
            }
        }
    }

    /// Recombine a side and an alignment.
    #[must_use]
    pub const fn from_parts(side: Side, alignment: Alignment) -> Self {
        match (side, alignment) {
            (Side::Top, Alignment::Start) => Self::TopLeft,
            (Side::Top, Alignment::Center) => Self::Top,
            (Side::Top, Alignment::End) => Self::TopRight,
            (Side::Bottom, Alignment::Start) => Self::BottomLeft,
            (Side::Bottom, Alignment::Center) => Self::Bottom,
            (Side::Bottom, Alignment::End) => Self::BottomRight,
            (Side::Left, Alignment::Start) => Self::LeftTop,
            (Side::Left, Alignment::Center) => Self::Left,
            (Side::Left, Alignment::End) => Self::LeftBottom,
            (Side::Right, Alignment::Start) => Self::RightTop,
            (Side::Right, Alignment::Center) => Self::Right,
            (Side::Right, Alignment::End) => Self::RightBottom,
        }
    }
}

/// Compute where the target's top-left corner goes.
///
/// `host` and `target` must share a coordinate space; the result is in that
/// same space. Only the target's size is read. No clamping is applied, so
/// the result may be negative or lie outside the viewport.
#[must_use]
pub fn position_elements(
    host: &BoundingBox,
    target: &BoundingBox,
    placement: Placement,
) -> Coordinates {
    let side = placement.side();
    let alignment = placement.alignment();

    // STEP 1: Primary axis. The target's leading edge touches the host side.
    let primary = match side {
        Side::Top => host.top() - target.height(),
        Side::Bottom => host.bottom(),
        Side::Left => host.left() - target.width(),
        Side::Right => host.right(),
    };

    // STEP 2: Cross axis. Horizontal for top/bottom, vertical for left/right.
    let (start, length, end, extent) = if side.is_vertical() {
        (host.left(), host.width(), host.right(), target.width())
    } else {
        (host.top(), host.height(), host.bottom(), target.height())
    };
    let cross = match alignment {
        Alignment::Start => start,
        Alignment::Center => start + length / 2.0 - extent / 2.0,
        Alignment::End => end - extent,
    };

    if side.is_vertical() {
        Coordinates::new(primary, cross)
    } else {
        Coordinates::new(cross, primary)
    }
}
