//! Offset, position and element placement over a [`GeometryQuery`] surface.
//!
//! [CSSOM View § 6 Extensions to the Element Interface](https://www.w3.org/TR/cssom-view-1/#extension-to-the-element-interface)
//!
//! Two coordinate spaces are produced:
//! - **document** ([`PositionEngine::offset`]): the viewport rectangle plus
//!   the document scroll, so it does not change while scrolling
//! - **container** ([`PositionEngine::position`]): relative to the padding
//!   edge of the nearest positioned ancestor, the space in which an
//!   absolutely positioned sibling would be laid out

use tether_common::warning::warn_once;

use crate::error::PositionError;
use crate::geometry::{BoundingBox, Coordinates, ViewportRect};
use crate::placement::{Placement, position_elements as place};
use crate::surface::GeometryQuery;

/// Default bound on the offset-parent walk.
///
/// Real documents are far shallower; hitting this means the surface
/// reported a cycle.
pub const DEFAULT_MAX_ANCESTOR_DEPTH: usize = 256;

/// Tunables for a [`PositionEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionOptions {
    /// Maximum number of offset parents visited before giving up with
    /// [`PositionError::AncestorDepthExceeded`].
    pub max_ancestor_depth: usize,
}

impl Default for PositionOptions {
    fn default() -> Self {
        Self {
            max_ancestor_depth: DEFAULT_MAX_ANCESTOR_DEPTH,
        }
    }
}

/// The positioning engine, bound to one rendering surface.
///
/// Holds no state besides the borrowed surface and its options; every call
/// re-queries the surface.
#[derive(Debug, Clone, Copy)]
pub struct PositionEngine<'a, G: GeometryQuery> {
    surface: &'a G,
    options: PositionOptions,
}

impl<'a, G: GeometryQuery> PositionEngine<'a, G> {
    /// Create an engine with default options.
    #[must_use]
    pub fn new(surface: &'a G) -> Self {
        Self::with_options(surface, PositionOptions::default())
    }

    /// Create an engine with explicit options.
    #[must_use]
    pub const fn with_options(surface: &'a G, options: PositionOptions) -> Self {
        Self { surface, options }
    }

    /// The options this engine was created with.
    #[must_use]
    pub const fn options(&self) -> PositionOptions {
        self.options
    }

    /// The element's bounding box relative to the document.
    ///
    /// The viewport rectangle plus the document scroll. Scrolling moves both
    /// by the same amount, so the result is stable for an element whose
    /// layout did not change.
    #[must_use]
    pub fn offset(&self, element: G::Element) -> BoundingBox {
        let rect = self.measure(element);
        let scroll = self.surface.scroll_offset();
        BoundingBox::new(
            rect.top + scroll.scroll_top,
            rect.left + scroll.scroll_left,
            rect.width,
            rect.height,
        )
    }

    /// The element's bounding box relative to its nearest positioned
    /// ancestor's padding edge, or to the document if there is none.
    ///
    /// # Errors
    ///
    /// Fails if the offset-parent chain is cyclic or deeper than
    /// [`PositionOptions::max_ancestor_depth`], or if it passes through an
    /// unattached ancestor.
    pub fn position(&self, element: G::Element) -> Result<BoundingBox, PositionError> {
        // STEP 1: A positioned element can ask the surface directly.
        if self.surface.is_positioned(element) {
            if let Some((top, left)) = self.surface.native_offset(element) {
                let rect = self.measure(element);
                return Ok(BoundingBox::new(top, left, rect.width, rect.height));
            }
        }

        // STEP 2: Otherwise subtract the container's padding-edge origin from
        // the element's document offset.
        let element_offset = self.offset(element);
        let origin = match self.positioned_ancestor(element)? {
            Some(ancestor) => self.content_origin(ancestor),
            // STEP 3: No positioned ancestor, the document root is the origin.
            None => Coordinates::default(),
        };

        Ok(BoundingBox::new(
            element_offset.top() - origin.top,
            element_offset.left() - origin.left,
            element_offset.width(),
            element_offset.height(),
        ))
    }

    /// Place `target` against `host` using a named placement.
    ///
    /// Both elements are measured with [`PositionEngine::offset`], so the
    /// result is in document coordinates, for a target that lives at the top
    /// level of the document. Only the target's size is read.
    ///
    /// # Errors
    ///
    /// Returns [`PositionError::UnknownPlacement`] for an unknown name.
    pub fn position_elements(
        &self,
        host: G::Element,
        target: G::Element,
        placement: &str,
    ) -> Result<Coordinates, PositionError> {
        let placement = Placement::parse(placement)?;
        let host_box = self.offset(host);
        Ok(self.place_against(&host_box, target, placement))
    }

    /// Like [`PositionEngine::position_elements`], but the host is measured
    /// with [`PositionEngine::position`], for a target that is inserted next
    /// to the host inside the same positioned container.
    ///
    /// # Errors
    ///
    /// Returns [`PositionError::UnknownPlacement`] for an unknown name, and
    /// any error of [`PositionEngine::position`] when measuring the host.
    pub fn position_elements_in_container(
        &self,
        host: G::Element,
        target: G::Element,
        placement: &str,
    ) -> Result<Coordinates, PositionError> {
        let placement = Placement::parse(placement)?;
        let host_box = self.position(host)?;
        Ok(self.place_against(&host_box, target, placement))
    }

    fn place_against(
        &self,
        host_box: &BoundingBox,
        target: G::Element,
        placement: Placement,
    ) -> Coordinates {
        let target_rect = self.measure(target);
        let target_box = BoundingBox::sized(target_rect.width, target_rect.height);
        place(host_box, &target_box, placement)
    }

    /// Walk the offset-parent chain up to the first positioned ancestor.
    ///
    /// Surfaces may report static containers (`body`, table cells) as offset
    /// parents; those are skipped.
    fn positioned_ancestor(
        &self,
        element: G::Element,
    ) -> Result<Option<G::Element>, PositionError> {
        let limit = self.options.max_ancestor_depth;
        let mut candidate = self.surface.offset_parent(element);
        let mut depth = 0;

        while let Some(ancestor) = candidate {
            depth += 1;
            if depth > limit {
                return Err(PositionError::AncestorDepthExceeded { limit });
            }
            if !self.surface.is_attached(ancestor) {
                return Err(PositionError::DetachedAncestor { depth });
            }

            let positioned = self.surface.is_positioned(ancestor);
            #[cfg(feature = "position-trace")]
            eprintln!(
                "[POSITION] {element:?}: offset parent #{depth} {ancestor:?} positioned={positioned}"
            );
            if positioned {
                return Ok(Some(ancestor));
            }
            candidate = self.surface.offset_parent(ancestor);
        }

        #[cfg(feature = "position-trace")]
        eprintln!("[POSITION] {element:?}: no positioned ancestor after {depth} offset parents");
        Ok(None)
    }

    /// Document coordinates of the container's padding edge, shifted by the
    /// container's own scroll so scrolled content keeps its coordinates.
    fn content_origin(&self, container: G::Element) -> Coordinates {
        let offset = self.offset(container);
        let border = self.surface.border_widths(container);
        let scroll = self.surface.element_scroll(container);
        Coordinates::new(
            offset.top() + border.top - scroll.scroll_top,
            offset.left() + border.left - scroll.scroll_left,
        )
    }

    fn measure(&self, element: G::Element) -> ViewportRect {
        let rect = self.surface.viewport_rect(element);
        if rect.is_empty() && !self.surface.is_attached(element) {
            warn_once(
                "Position",
                &format!("measured detached element {element:?}, its geometry is zero"),
            );
        }
        rect
    }
}

/// [`PositionEngine::offset`] with default options.
#[must_use]
pub fn offset<G: GeometryQuery>(surface: &G, element: G::Element) -> BoundingBox {
    PositionEngine::new(surface).offset(element)
}

/// [`PositionEngine::position`] with default options.
///
/// # Errors
///
/// See [`PositionEngine::position`].
pub fn position<G: GeometryQuery>(
    surface: &G,
    element: G::Element,
) -> Result<BoundingBox, PositionError> {
    PositionEngine::new(surface).position(element)
}
