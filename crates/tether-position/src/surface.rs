//! The rendering surface seen by the engine.

use std::fmt::Debug;

use crate::geometry::{BorderWidths, ScrollOffset, ViewportRect};

/// Read-only layout queries answered by the rendering surface.
///
/// The surface owns the live render tree; the engine only holds element
/// handles for the duration of one call. Every query must reflect the layout
/// at call time.
pub trait GeometryQuery {
    /// Opaque handle to a renderable node.
    type Element: Copy + Eq + Debug;

    /// The element's border box relative to the current viewport.
    ///
    /// Unattached elements report whatever the surface decides, typically a
    /// zero rectangle.
    fn viewport_rect(&self, element: Self::Element) -> ViewportRect;

    /// The document's current scroll position.
    fn scroll_offset(&self) -> ScrollOffset;

    /// [CSSOM View § 7 offsetParent](https://www.w3.org/TR/cssom-view-1/#dom-htmlelement-offsetparent)
    ///
    /// The nearest ancestor establishing a local coordinate system, or `None`
    /// for the root and for unattached elements. The returned ancestor may
    /// itself be statically positioned (the surface may report containers
    /// such as `body` or table cells); the engine keeps walking past those.
    fn offset_parent(&self, element: Self::Element) -> Option<Self::Element>;

    /// The element's own top and left border thickness.
    fn border_widths(&self, element: Self::Element) -> BorderWidths;

    /// Whether the element's computed `position` is anything but `static`.
    fn is_positioned(&self, element: Self::Element) -> bool;

    /// Whether the element is currently part of the render tree.
    fn is_attached(&self, element: Self::Element) -> bool;

    /// [CSSOM View § 7 offsetTop / offsetLeft](https://www.w3.org/TR/cssom-view-1/#dom-htmlelement-offsettop)
    ///
    /// The element's `(top, left)` relative to its offset parent's padding
    /// edge, when the surface has a native primitive for it.
    fn native_offset(&self, _element: Self::Element) -> Option<(f32, f32)> {
        None
    }

    /// The element's own scroll position, for scroll containers.
    fn element_scroll(&self, _element: Self::Element) -> ScrollOffset {
        ScrollOffset::default()
    }
}
