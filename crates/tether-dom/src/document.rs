//! A laid-out document and its geometry surface.
//!
//! [CSSOM View Module](https://www.w3.org/TR/cssom-view-1/)

use tether_position::{BorderWidths, GeometryQuery, ScrollOffset, ViewportRect};

use crate::style::{BoxStyle, PositionType, Rect};
use crate::{DomTree, ElementData, NodeId};

/// A document: the element tree, the viewport and the document scroll.
///
/// `Document::new` creates the `<html>` and `<body>` elements, both covering
/// the viewport. Elements created afterwards are detached until appended.
#[derive(Debug, Clone)]
pub struct Document {
    tree: DomTree,
    html: NodeId,
    body: NodeId,
    scroll: ScrollOffset,
    viewport_width: f32,
    viewport_height: f32,
}

impl Document {
    /// Create an empty document with the given viewport size.
    #[must_use]
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        let page = BoxStyle::at(Rect::new(0.0, 0.0, viewport_width, viewport_height));
        let mut tree = DomTree::new();
        let html = tree.alloc(ElementData::new("html", page));
        tree.append_child(NodeId::ROOT, html);
        let body = tree.alloc(ElementData::new("body", page));
        tree.append_child(html, body);

        Self {
            tree,
            html,
            body,
            scroll: ScrollOffset::default(),
            viewport_width,
            viewport_height,
        }
    }

    /// The underlying element tree.
    #[must_use]
    pub const fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// The `<html>` element.
    #[must_use]
    pub const fn html(&self) -> NodeId {
        self.html
    }

    /// The `<body>` element.
    #[must_use]
    pub const fn body(&self) -> NodeId {
        self.body
    }

    /// The viewport size as `(width, height)`.
    #[must_use]
    pub const fn viewport_size(&self) -> (f32, f32) {
        (self.viewport_width, self.viewport_height)
    }

    /// The current document scroll position.
    #[must_use]
    pub const fn scroll(&self) -> ScrollOffset {
        self.scroll
    }

    /// Create a detached element.
    pub fn create_element(&mut self, tag_name: &str, style: BoxStyle) -> NodeId {
        self.tree.alloc(ElementData::new(tag_name, style))
    }

    /// Set the element's `id` attribute.
    pub fn set_id(&mut self, id: NodeId, element_id: &str) {
        if let Some(element) = self.tree.as_element_mut(id) {
            let _ = element.attrs.insert("id".to_string(), element_id.to_string());
        }
    }

    /// Append `child` to `parent`, moving it if it is already in the tree.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.tree.append_child(parent, child);
    }

    /// Detach an element (and its subtree) from its parent.
    pub fn detach(&mut self, id: NodeId) {
        if let Some(parent) = self.tree.parent(id) {
            self.tree.remove_child(parent, id);
        }
    }

    /// Find an element by its `id` attribute.
    #[must_use]
    pub fn element_by_id(&self, element_id: &str) -> Option<NodeId> {
        self.tree.element_by_id(element_id)
    }

    /// The layout data of an element.
    #[must_use]
    pub fn style(&self, id: NodeId) -> Option<&BoxStyle> {
        self.tree.as_element(id).map(|e| &e.style)
    }

    /// Mutable layout data of an element, to simulate a relayout.
    pub fn style_mut(&mut self, id: NodeId) -> Option<&mut BoxStyle> {
        self.tree.as_element_mut(id).map(|e| &mut e.style)
    }

    /// [CSSOM View § 4 scroll()](https://www.w3.org/TR/cssom-view-1/#dom-window-scroll)
    ///
    /// Scroll the document. Negative offsets are clamped to zero.
    pub fn scroll_to(&mut self, scroll_top: f32, scroll_left: f32) {
        self.scroll = ScrollOffset::new(scroll_top.max(0.0), scroll_left.max(0.0));
    }

    /// [CSSOM View § 7 scrollTop](https://www.w3.org/TR/cssom-view-1/#dom-element-scrolltop)
    ///
    /// Scroll an element's own content. Negative offsets are clamped to zero.
    pub fn scroll_element(&mut self, id: NodeId, scroll_top: f32, scroll_left: f32) {
        if let Some(style) = self.style_mut(id) {
            style.scroll = ScrollOffset::new(scroll_top.max(0.0), scroll_left.max(0.0));
        }
    }

    fn position_of(&self, id: NodeId) -> PositionType {
        self.style(id).map_or(PositionType::Static, |s| s.position)
    }
}

impl GeometryQuery for Document {
    type Element = NodeId;

    /// [CSSOM View § 6.1 getBoundingClientRect()](https://www.w3.org/TR/cssom-view-1/#dom-element-getboundingclientrect)
    ///
    /// "If element is not in the document, return a DOMRect object whose x,
    /// y, width and height members are zero."
    ///
    /// The laid-out border box is shifted by the scroll of every scroll
    /// container above the element and, unless the element sits in a
    /// `position: fixed` subtree, by the document scroll.
    fn viewport_rect(&self, element: NodeId) -> ViewportRect {
        if !self.tree.is_connected(element) {
            return ViewportRect::default();
        }
        let Some(style) = self.style(element) else {
            return ViewportRect::default();
        };

        let mut top = style.border_box.y;
        let mut left = style.border_box.x;
        let mut fixed = style.position == PositionType::Fixed;
        for ancestor in self.tree.ancestors(element) {
            if fixed {
                break;
            }
            let Some(ancestor_style) = self.style(ancestor) else {
                continue;
            };
            top -= ancestor_style.scroll.scroll_top;
            left -= ancestor_style.scroll.scroll_left;
            fixed = ancestor_style.position == PositionType::Fixed;
        }
        if !fixed {
            top -= self.scroll.scroll_top;
            left -= self.scroll.scroll_left;
        }

        ViewportRect::new(top, left, style.border_box.width, style.border_box.height)
    }

    fn scroll_offset(&self) -> ScrollOffset {
        self.scroll
    }

    /// [CSSOM View § 7 offsetParent](https://www.w3.org/TR/cssom-view-1/#dom-htmlelement-offsetparent)
    ///
    /// "1. If any of the following holds true return null and terminate this
    /// algorithm: The element does not have an associated CSS layout box. The
    /// element is the root element. The element is the HTML body element. The
    /// element's computed value of the position property is fixed.
    ///
    /// 2. Let ancestor be the parent of the element in the flat tree and
    /// repeat these substeps: ... If ancestor ... satisfies at least one of
    /// the following, terminate this algorithm and return ancestor: The
    /// element is a containing block of absolutely-positioned descendants.
    /// It is the body element. The computed value of the position property of
    /// the element is static and the ancestor is one of the following HTML
    /// elements: td, th, or table."
    fn offset_parent(&self, element: NodeId) -> Option<NodeId> {
        let data = self.tree.as_element(element)?;
        if !self.tree.is_connected(element)
            || element == self.html
            || element == self.body
            || data.style.position == PositionType::Fixed
        {
            return None;
        }

        let is_static = !data.style.position.is_positioned();
        self.tree.ancestors(element).find(|&ancestor| {
            self.tree.as_element(ancestor).is_some_and(|a| {
                ancestor == self.body
                    || a.style.position.is_positioned()
                    || (is_static && (a.is("td") || a.is("th") || a.is("table")))
            })
        })
    }

    fn border_widths(&self, element: NodeId) -> BorderWidths {
        self.style(element)
            .map_or_else(BorderWidths::default, |s| {
                BorderWidths::new(s.border.top, s.border.left)
            })
    }

    fn is_positioned(&self, element: NodeId) -> bool {
        self.position_of(element).is_positioned()
    }

    fn is_attached(&self, element: NodeId) -> bool {
        self.tree.is_connected(element)
    }

    /// [CSSOM View § 7 offsetTop](https://www.w3.org/TR/cssom-view-1/#dom-htmlelement-offsettop)
    ///
    /// "1. If the element is the HTML body element or does not have any
    /// associated CSS layout box return zero and terminate this algorithm.
    ///
    /// 2. If the offsetParent of the element is null return the y-coordinate
    /// of the top border edge of the first CSS layout box associated with the
    /// element, relative to the initial containing block origin, ignoring any
    /// transforms that apply to the element and its ancestors.
    ///
    /// 3. Return the result of subtracting the y-coordinate of the top padding
    /// edge of the first CSS layout box associated with the offsetParent of
    /// the element from the y-coordinate of the top border edge of the first
    /// CSS layout box associated with the element."
    ///
    /// Detached elements have no layout box and report `None`, leaving the
    /// engine to fall back to its own computation.
    fn native_offset(&self, element: NodeId) -> Option<(f32, f32)> {
        let data = self.tree.as_element(element)?;
        if !self.tree.is_connected(element) {
            return None;
        }
        if element == self.body {
            return Some((0.0, 0.0));
        }

        let border_box = data.style.border_box;
        let Some(parent) = self.offset_parent(element) else {
            return Some((border_box.y, border_box.x));
        };
        let parent_style = self.style(parent)?;
        Some((
            border_box.y - (parent_style.border_box.y + parent_style.border.top),
            border_box.x - (parent_style.border_box.x + parent_style.border.left),
        ))
    }

    fn element_scroll(&self, element: NodeId) -> ScrollOffset {
        self.style(element)
            .map_or_else(ScrollOffset::default, |s| s.scroll)
    }
}
