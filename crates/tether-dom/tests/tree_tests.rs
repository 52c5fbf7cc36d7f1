//! Tests for element tree mutation and lookup.

use tether_dom::{BoxStyle, DomTree, ElementData, NodeId};

/// Helper to create an element node and return its `NodeId`.
fn alloc_element(tree: &mut DomTree, tag: &str) -> NodeId {
    tree.alloc(ElementData::new(tag, BoxStyle::default()))
}

// ========== append_child ==========

#[test]
fn test_append_child_links_parent() {
    let mut tree = DomTree::new();
    let parent = alloc_element(&mut tree, "div");
    tree.append_child(NodeId::ROOT, parent);
    let child = alloc_element(&mut tree, "p");
    tree.append_child(parent, child);

    assert_eq!(tree.children(parent), &[child]);
    assert_eq!(tree.parent(child), Some(parent));
    assert_eq!(tree.ancestors(child).collect::<Vec<_>>(), vec![parent, NodeId::ROOT]);
}

#[test]
fn test_append_child_moves_existing_node() {
    let mut tree = DomTree::new();
    let a = alloc_element(&mut tree, "a");
    let b = alloc_element(&mut tree, "b");
    let c = alloc_element(&mut tree, "c");
    tree.append_child(NodeId::ROOT, a);
    tree.append_child(NodeId::ROOT, b);
    tree.append_child(a, c);

    tree.append_child(b, c);

    assert!(tree.children(a).is_empty());
    assert_eq!(tree.children(b), &[c]);
    assert_eq!(tree.parent(c), Some(b));
}

#[test]
fn test_append_child_refuses_cycles() {
    let mut tree = DomTree::new();
    let outer = alloc_element(&mut tree, "div");
    let inner = alloc_element(&mut tree, "div");
    tree.append_child(NodeId::ROOT, outer);
    tree.append_child(outer, inner);

    tree.append_child(inner, outer);
    tree.append_child(inner, inner);

    assert_eq!(tree.parent(outer), Some(NodeId::ROOT));
    assert!(tree.children(inner).is_empty());
}

// ========== remove_child ==========

#[test]
fn test_remove_child_detaches_subtree() {
    let mut tree = DomTree::new();
    let parent = alloc_element(&mut tree, "div");
    let child = alloc_element(&mut tree, "p");
    let grandchild = alloc_element(&mut tree, "span");
    tree.append_child(NodeId::ROOT, parent);
    tree.append_child(parent, child);
    tree.append_child(child, grandchild);
    assert!(tree.is_connected(grandchild));

    tree.remove_child(parent, child);

    assert!(tree.children(parent).is_empty());
    assert_eq!(tree.parent(child), None);
    assert!(!tree.is_connected(child));
    assert!(!tree.is_connected(grandchild));
    assert_eq!(tree.parent(grandchild), Some(child));
}

#[test]
fn test_remove_child_of_wrong_parent_is_ignored() {
    let mut tree = DomTree::new();
    let a = alloc_element(&mut tree, "a");
    let b = alloc_element(&mut tree, "b");
    tree.append_child(NodeId::ROOT, a);
    tree.append_child(NodeId::ROOT, b);

    tree.remove_child(a, b);

    assert_eq!(tree.parent(b), Some(NodeId::ROOT));
    assert_eq!(tree.children(NodeId::ROOT), &[a, b]);
}

// ========== lookup ==========

#[test]
fn test_document_element_and_body() {
    let mut tree = DomTree::new();
    assert_eq!(tree.document_element(), None);
    assert_eq!(tree.body(), None);

    let html = alloc_element(&mut tree, "HTML");
    let head = alloc_element(&mut tree, "head");
    let body = alloc_element(&mut tree, "body");
    tree.append_child(NodeId::ROOT, html);
    tree.append_child(html, head);
    tree.append_child(html, body);

    assert_eq!(tree.document_element(), Some(html));
    assert_eq!(tree.body(), Some(body));
    assert!(tree.as_element(html).is_some_and(|e| e.is("html")));
}

#[test]
fn test_element_by_id_includes_detached_elements() {
    let mut tree = DomTree::new();
    let attached = alloc_element(&mut tree, "div");
    let detached = alloc_element(&mut tree, "div");
    tree.append_child(NodeId::ROOT, attached);
    for (id, name) in [(attached, "here"), (detached, "gone")] {
        if let Some(element) = tree.as_element_mut(id) {
            let _ = element.attrs.insert("id".to_string(), name.to_string());
        }
    }

    assert_eq!(tree.element_by_id("here"), Some(attached));
    assert_eq!(tree.element_by_id("gone"), Some(detached));
    assert_eq!(tree.element_by_id("missing"), None);
    assert_eq!(tree.len(), 3);
    assert!(tree.as_element(NodeId::ROOT).is_none());
}

#[test]
fn test_new_tree_holds_only_the_document() {
    let tree = DomTree::new();
    assert!(!tree.is_empty());
    assert_eq!(tree.len(), 1);
    assert!(tree.children(NodeId::ROOT).is_empty());
}
