//! Tests for the positioning engine against a scripted geometry surface.

use std::collections::HashMap;

use strum::IntoEnumIterator;
use tether_position::{
    BorderWidths, BoundingBox, GeometryQuery, Placement, PositionEngine, PositionError,
    PositionOptions, ScrollOffset, ViewportRect, offset, position, position_elements,
};

/// What the scripted surface reports for one element.
#[derive(Debug, Clone, Copy, Default)]
struct Entry {
    rect: ViewportRect,
    offset_parent: Option<u32>,
    positioned: bool,
    detached: bool,
    border: BorderWidths,
    scroll: ScrollOffset,
    native: Option<(f32, f32)>,
}

/// A surface that answers from a table instead of a render tree.
#[derive(Debug, Default)]
struct Scripted {
    scroll: ScrollOffset,
    entries: HashMap<u32, Entry>,
}

impl Scripted {
    fn with(mut self, id: u32, entry: Entry) -> Self {
        let _ = self.entries.insert(id, entry);
        self
    }

    fn scrolled(mut self, scroll_top: f32, scroll_left: f32) -> Self {
        self.scroll = ScrollOffset::new(scroll_top, scroll_left);
        self
    }

    fn entry(&self, id: u32) -> Entry {
        self.entries.get(&id).copied().unwrap_or_default()
    }
}

impl GeometryQuery for Scripted {
    type Element = u32;

    fn viewport_rect(&self, element: u32) -> ViewportRect {
        self.entry(element).rect
    }

    fn scroll_offset(&self) -> ScrollOffset {
        self.scroll
    }

    fn offset_parent(&self, element: u32) -> Option<u32> {
        self.entry(element).offset_parent
    }

    fn border_widths(&self, element: u32) -> BorderWidths {
        self.entry(element).border
    }

    fn is_positioned(&self, element: u32) -> bool {
        self.entry(element).positioned
    }

    fn is_attached(&self, element: u32) -> bool {
        !self.entry(element).detached
    }

    fn native_offset(&self, element: u32) -> Option<(f32, f32)> {
        self.entry(element).native
    }

    fn element_scroll(&self, element: u32) -> ScrollOffset {
        self.entry(element).scroll
    }
}

fn rect(top: f32, left: f32, width: f32, height: f32) -> ViewportRect {
    ViewportRect::new(top, left, width, height)
}

fn assert_box(actual: BoundingBox, top: f32, left: f32, width: f32, height: f32) {
    let expected = BoundingBox::new(top, left, width, height);
    for (what, a, e) in [
        ("top", actual.top(), expected.top()),
        ("left", actual.left(), expected.left()),
        ("bottom", actual.bottom(), expected.bottom()),
        ("right", actual.right(), expected.right()),
        ("width", actual.width(), expected.width()),
        ("height", actual.height(), expected.height()),
    ] {
        assert!((a - e).abs() < 1e-4, "{what}: expected {e}, got {a}");
    }
}

// ========== offset ==========

#[test]
fn test_offset_adds_document_scroll() {
    let surface = Scripted::default()
        .scrolled(40.0, 15.0)
        .with(1, Entry {
            rect: rect(60.0, 85.0, 30.0, 10.0),
            ..Entry::default()
        });
    assert_box(offset(&surface, 1), 100.0, 100.0, 30.0, 10.0);
}

#[test]
fn test_offset_propagates_zero_rect_of_detached_element() {
    let surface = Scripted::default().scrolled(10.0, 0.0).with(1, Entry {
        detached: true,
        ..Entry::default()
    });
    assert_box(offset(&surface, 1), 10.0, 0.0, 0.0, 0.0);
}

// ========== position ==========

#[test]
fn test_position_without_offset_parent_is_document_relative() {
    let surface = Scripted::default().scrolled(25.0, 0.0).with(1, Entry {
        rect: rect(5.0, 8.0, 10.0, 10.0),
        ..Entry::default()
    });
    assert_box(position(&surface, 1).unwrap(), 30.0, 8.0, 10.0, 10.0);
}

#[test]
fn test_position_subtracts_ancestor_offset_and_border() {
    let surface = Scripted::default()
        .with(1, Entry {
            rect: rect(130.0, 70.0, 20.0, 20.0),
            offset_parent: Some(2),
            ..Entry::default()
        })
        .with(2, Entry {
            rect: rect(100.0, 50.0, 200.0, 200.0),
            positioned: true,
            border: BorderWidths::new(4.0, 3.0),
            ..Entry::default()
        });
    assert_box(position(&surface, 1).unwrap(), 26.0, 17.0, 20.0, 20.0);
}

#[test]
fn test_position_skips_static_offset_parents() {
    // 1 -> 2 (static, like a table cell) -> 3 (positioned)
    let surface = Scripted::default()
        .with(1, Entry {
            rect: rect(50.0, 50.0, 5.0, 5.0),
            offset_parent: Some(2),
            ..Entry::default()
        })
        .with(2, Entry {
            rect: rect(40.0, 40.0, 50.0, 50.0),
            offset_parent: Some(3),
            border: BorderWidths::new(100.0, 100.0),
            ..Entry::default()
        })
        .with(3, Entry {
            rect: rect(10.0, 20.0, 100.0, 100.0),
            positioned: true,
            ..Entry::default()
        });
    assert_box(position(&surface, 1).unwrap(), 40.0, 30.0, 5.0, 5.0);
}

#[test]
fn test_position_adds_back_container_scroll() {
    let surface = Scripted::default()
        .with(1, Entry {
            rect: rect(-20.0, 10.0, 5.0, 5.0),
            offset_parent: Some(2),
            ..Entry::default()
        })
        .with(2, Entry {
            rect: rect(0.0, 0.0, 100.0, 100.0),
            positioned: true,
            scroll: ScrollOffset::new(60.0, 0.0),
            ..Entry::default()
        });
    assert_box(position(&surface, 1).unwrap(), 40.0, 10.0, 5.0, 5.0);
}

#[test]
fn test_positioned_element_uses_native_offset() {
    let surface = Scripted::default()
        .with(1, Entry {
            rect: rect(500.0, 500.0, 12.0, 34.0),
            offset_parent: Some(2),
            positioned: true,
            native: Some((7.0, 9.0)),
            ..Entry::default()
        })
        .with(2, Entry {
            rect: rect(0.0, 0.0, 10.0, 10.0),
            positioned: true,
            ..Entry::default()
        });
    assert_box(position(&surface, 1).unwrap(), 7.0, 9.0, 12.0, 34.0);
}

#[test]
fn test_native_offset_ignored_for_static_element() {
    let surface = Scripted::default().with(1, Entry {
        rect: rect(20.0, 30.0, 1.0, 1.0),
        native: Some((7.0, 9.0)),
        ..Entry::default()
    });
    assert_box(position(&surface, 1).unwrap(), 20.0, 30.0, 1.0, 1.0);
}

#[test]
fn test_position_fails_on_cyclic_offset_parents() {
    let surface = Scripted::default()
        .with(1, Entry {
            offset_parent: Some(2),
            ..Entry::default()
        })
        .with(2, Entry {
            offset_parent: Some(3),
            ..Entry::default()
        })
        .with(3, Entry {
            offset_parent: Some(2),
            ..Entry::default()
        });
    let engine = PositionEngine::with_options(
        &surface,
        PositionOptions {
            max_ancestor_depth: 16,
        },
    );
    assert_eq!(
        engine.position(1),
        Err(PositionError::AncestorDepthExceeded { limit: 16 })
    );
}

#[test]
fn test_position_accepts_chain_at_depth_limit() {
    // 1 -> 2 -> 3 -> 4, only 4 is positioned.
    let mut surface = Scripted::default();
    for id in 1..4 {
        surface = surface.with(id, Entry {
            offset_parent: Some(id + 1),
            ..Entry::default()
        });
    }
    surface = surface.with(4, Entry {
        positioned: true,
        ..Entry::default()
    });

    let at_limit = PositionEngine::with_options(&surface, PositionOptions {
        max_ancestor_depth: 3,
    });
    assert!(at_limit.position(1).is_ok());

    let below_limit = PositionEngine::with_options(&surface, PositionOptions {
        max_ancestor_depth: 2,
    });
    assert_eq!(
        below_limit.position(1),
        Err(PositionError::AncestorDepthExceeded { limit: 2 })
    );
}

#[test]
fn test_position_fails_on_detached_ancestor() {
    let surface = Scripted::default()
        .with(1, Entry {
            offset_parent: Some(2),
            ..Entry::default()
        })
        .with(2, Entry {
            offset_parent: Some(3),
            ..Entry::default()
        })
        .with(3, Entry {
            positioned: true,
            detached: true,
            ..Entry::default()
        });
    assert_eq!(
        position(&surface, 1),
        Err(PositionError::DetachedAncestor { depth: 2 })
    );
}

// ========== position_elements ==========

/// Host 300x200 inside a positioned container at (10, 20) with a 2px
/// border; the document is scrolled by 100.
fn overlay_surface() -> Scripted {
    Scripted::default()
        .scrolled(100.0, 0.0)
        .with(1, Entry {
            rect: rect(0.0, 150.0, 300.0, 200.0),
            offset_parent: Some(3),
            ..Entry::default()
        })
        .with(2, Entry {
            rect: rect(-400.0, -400.0, 100.0, 50.0),
            ..Entry::default()
        })
        .with(3, Entry {
            rect: rect(-90.0, 20.0, 600.0, 600.0),
            positioned: true,
            border: BorderWidths::new(2.0, 2.0),
            ..Entry::default()
        })
}

#[test]
fn test_position_elements_uses_document_coordinates() {
    let surface = overlay_surface();
    let engine = PositionEngine::new(&surface);
    let c = engine.position_elements(1, 2, "top-left").unwrap();
    assert!((c.top - 50.0).abs() < 1e-4, "top was {}", c.top);
    assert!((c.left - 150.0).abs() < 1e-4, "left was {}", c.left);
}

#[test]
fn test_position_elements_matches_pure_placement_of_offsets() {
    let surface = overlay_surface();
    let engine = PositionEngine::new(&surface);
    for placement in Placement::iter() {
        let expected = position_elements(&offset(&surface, 1), &offset(&surface, 2), placement);
        let c = engine.position_elements(1, 2, &placement.to_string()).unwrap();
        assert!((c.top - expected.top).abs() < 1e-4, "{placement} top was {}", c.top);
        assert!((c.left - expected.left).abs() < 1e-4, "{placement} left was {}", c.left);
    }
}

#[test]
fn test_position_elements_in_container_uses_container_coordinates() {
    let surface = overlay_surface();
    let engine = PositionEngine::new(&surface);
    // Host relative to container: top 100 - 12 = 88, left 150 - 22 = 128.
    let c = engine.position_elements_in_container(1, 2, "right").unwrap();
    assert!((c.top - (88.0 + 100.0 - 25.0)).abs() < 1e-4, "top was {}", c.top);
    assert!((c.left - (128.0 + 300.0)).abs() < 1e-4, "left was {}", c.left);
}

#[test]
fn test_position_elements_rejects_unknown_placement() {
    let surface = overlay_surface();
    let engine = PositionEngine::new(&surface);
    assert_eq!(
        engine.position_elements(1, 2, "middle"),
        Err(PositionError::UnknownPlacement("middle".to_string()))
    );
    assert_eq!(
        engine.position_elements_in_container(1, 2, "middle"),
        Err(PositionError::UnknownPlacement("middle".to_string()))
    );
}

#[test]
fn test_default_options() {
    let surface = Scripted::default();
    let engine = PositionEngine::new(&surface);
    assert_eq!(
        engine.options().max_ancestor_depth,
        tether_position::DEFAULT_MAX_ANCESTOR_DEPTH
    );
}
