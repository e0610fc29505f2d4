//! Comprehensive tests for fos-dom
//!
//! Tree structure, attribute storage, events, the mutation journal and HTML
//! serialization.

use std::cell::RefCell;
use std::rc::Rc;

use fos_dom::{DomError, DomTree, EventListener, MutationRecord, MutationType, NodeId};

fn tree_with_body() -> (DomTree, NodeId) {
    let mut tree = DomTree::new();
    let body = tree.create_element("body");
    tree.append_child(tree.root(), body).unwrap();
    (tree, body)
}

#[test]
fn test_dom_tree_creation() {
    let mut tree = DomTree::new();

    // div > span > text
    let div = tree.create_element("div");
    let span = tree.create_element("span");
    let text = tree.create_text("Hello, World!");

    tree.append_child(tree.root(), div).unwrap();
    tree.append_child(div, span).unwrap();
    tree.append_child(span, text).unwrap();

    assert_eq!(tree.len(), 4);
    assert_eq!(tree.parent(text), Some(span));
    assert_eq!(tree.parent(span), Some(div));
    assert_eq!(tree.parent(div), Some(tree.root()));
    assert!(tree.is_connected(text));
    assert_eq!(tree.text_content(div), "Hello, World!");
}

#[test]
fn test_sibling_links() {
    let (mut tree, body) = tree_with_body();
    let ids: Vec<NodeId> = (0..4).map(|_| tree.create_element("p")).collect();
    for &id in &ids {
        tree.append_child(body, id).unwrap();
    }

    assert_eq!(tree.first_child(body), Some(ids[0]));
    assert_eq!(tree.last_child(body), Some(ids[3]));
    assert_eq!(tree.next_sibling(ids[1]), Some(ids[2]));
    assert_eq!(tree.prev_sibling(ids[1]), Some(ids[0]));
    assert_eq!(tree.next_sibling(ids[3]), None);
    assert_eq!(tree.child_ids(body), ids);
}

#[test]
fn test_insert_before_and_move() {
    let (mut tree, body) = tree_with_body();
    let a = tree.create_text("a");
    let b = tree.create_text("b");
    let c = tree.create_text("c");
    tree.append_child(body, a).unwrap();
    tree.append_child(body, c).unwrap();

    tree.insert_before(body, b, Some(c)).unwrap();
    assert_eq!(tree.text_content(body), "abc");

    // moving an attached node
    tree.insert_before(body, c, Some(a)).unwrap();
    assert_eq!(tree.text_content(body), "cab");
    assert_eq!(tree.first_child(body), Some(c));
    assert_eq!(tree.last_child(body), Some(b));
}

#[test]
fn test_reparenting() {
    let (mut tree, body) = tree_with_body();
    let left = tree.create_element("div");
    let right = tree.create_element("div");
    let item = tree.create_text("x");
    tree.append_child(body, left).unwrap();
    tree.append_child(body, right).unwrap();
    tree.append_child(left, item).unwrap();

    tree.append_child(right, item).unwrap();
    assert_eq!(tree.first_child(left), None);
    assert_eq!(tree.parent(item), Some(right));
}

#[test]
fn test_remove_child_detaches_subtree() {
    let (mut tree, body) = tree_with_body();
    let div = tree.create_element("div");
    let text = tree.create_text("gone");
    tree.append_child(body, div).unwrap();
    tree.append_child(div, text).unwrap();

    tree.remove_child(body, div).unwrap();
    assert_eq!(tree.parent(div), None);
    assert!(!tree.is_connected(div));
    assert!(!tree.is_connected(text));
    // the subtree itself is intact
    assert_eq!(tree.parent(text), Some(div));
    assert_eq!(tree.first_child(body), None);
}

#[test]
fn test_attributes_class_and_style() {
    let (mut tree, body) = tree_with_body();
    let div = tree.create_element("div");
    tree.append_child(body, div).unwrap();

    tree.set_attribute(div, "id", "main").unwrap();
    tree.set_attribute(div, "title", "t").unwrap();
    tree.set_class(div, Some("wide dark")).unwrap();
    tree.set_style_property(div, "color", Some("red")).unwrap();
    tree.set_style_property(div, "margin", Some("0")).unwrap();

    assert_eq!(tree.get_attribute(div, "id"), Some("main"));
    assert_eq!(tree.class_name(div), Some("wide dark"));
    assert_eq!(tree.style_property(div, "color"), Some("red"));
    assert_eq!(
        tree.to_html(div),
        "<div class=\"wide dark\" id=\"main\" title=\"t\" style=\"color: red; margin: 0\"></div>"
    );

    assert!(tree.remove_attribute(div, "title").unwrap());
    assert!(!tree.remove_attribute(div, "title").unwrap());
    tree.set_class(div, None).unwrap();
    tree.set_style_property(div, "color", None).unwrap();
    assert_eq!(tree.to_html(div), "<div id=\"main\" style=\"margin: 0\"></div>");
}

#[test]
fn test_set_text() {
    let (mut tree, body) = tree_with_body();
    let text = tree.create_text("old");
    tree.append_child(body, text).unwrap();
    tree.set_text(text, "new").unwrap();
    assert_eq!(tree.text(text), Some("new"));
    assert_eq!(tree.to_html(body), "<body>new</body>");
}

#[test]
fn test_mutation_journal() {
    let (mut tree, body) = tree_with_body();
    tree.take_records();

    let p = tree.create_element("p");
    let text = tree.create_text("a");
    tree.append_child(body, p).unwrap();
    tree.append_child(p, text).unwrap();
    tree.set_text(text, "b").unwrap();
    tree.set_attribute(p, "id", "x").unwrap();
    tree.remove_child(body, p).unwrap();

    let records = tree.take_records();
    let kinds: Vec<MutationType> = records.iter().map(MutationRecord::mutation_type).collect();
    assert_eq!(
        kinds,
        vec![
            MutationType::ChildList,
            MutationType::ChildList,
            MutationType::CharacterData,
            MutationType::Attributes,
            MutationType::ChildList,
        ]
    );
    assert_eq!(records[0], MutationRecord::ChildInserted { parent: body, node: p, before: None });
    assert_eq!(records[4], MutationRecord::ChildRemoved { parent: body, node: p });
    assert!(tree.records().is_empty());
}

#[test]
fn test_creation_is_not_journaled() {
    let mut tree = DomTree::new();
    tree.create_element("div");
    tree.create_text("x");
    assert!(tree.records().is_empty());
}

#[test]
fn test_event_dispatch_bubbles() {
    let (mut tree, body) = tree_with_body();
    let button = tree.create_element("button");
    tree.append_child(body, button).unwrap();

    let log = Rc::new(RefCell::new(Vec::new()));
    let record = |name: &'static str| {
        let log = Rc::clone(&log);
        EventListener::new(move |event| log.borrow_mut().push((name, event.current_target)))
    };
    tree.add_event_listener(button, "click", record("button")).unwrap();
    tree.add_event_listener(body, "click", record("body")).unwrap();
    tree.add_event_listener(body, "input", record("ignored")).unwrap();

    assert_eq!(tree.dispatch_event(button, "click").unwrap(), 2);
    assert_eq!(*log.borrow(), vec![("button", button), ("body", body)]);
}

#[test]
fn test_stop_propagation() {
    let (mut tree, body) = tree_with_body();
    let button = tree.create_element("button");
    tree.append_child(body, button).unwrap();

    tree.add_event_listener(button, "click", EventListener::new(|event| event.stop_propagation()))
        .unwrap();
    tree.add_event_listener(body, "click", EventListener::new(|_| panic!("should not bubble")))
        .unwrap();

    assert_eq!(tree.dispatch_event(button, "click").unwrap(), 1);
}

#[test]
fn test_remove_listener_by_identity() {
    let (mut tree, body) = tree_with_body();
    let first = EventListener::new(|_| {});
    let second = EventListener::new(|_| {});
    tree.add_event_listener(body, "click", first.clone()).unwrap();
    tree.add_event_listener(body, "click", second.clone()).unwrap();

    assert!(tree.remove_event_listener(body, "click", &first).unwrap());
    assert!(!tree.remove_event_listener(body, "click", &first).unwrap());
    assert!(!tree.remove_event_listener(body, "keydown", &second).unwrap());
    assert_eq!(tree.listener_count(body, "click"), 1);
}

#[test]
fn test_errors() {
    let (mut tree, body) = tree_with_body();
    let text = tree.create_text("leaf");
    let div = tree.create_element("div");
    let stray = tree.create_element("span");
    tree.append_child(body, div).unwrap();

    assert!(matches!(tree.append_child(text, div), Err(DomError::InvalidNodeType { .. })));
    assert!(matches!(tree.append_child(div, body), Err(DomError::HierarchyRequest { .. })));
    assert!(matches!(tree.append_child(div, div), Err(DomError::HierarchyRequest { .. })));
    assert!(matches!(tree.insert_before(body, text, Some(stray)), Err(DomError::NotAChild { .. })));
    assert!(matches!(tree.remove_child(body, stray), Err(DomError::NotAChild { .. })));
    assert!(matches!(tree.set_text(div, "x"), Err(DomError::InvalidNodeType { operation: "set_text", .. })));
    assert!(matches!(tree.set_attribute(text, "id", "x"), Err(DomError::InvalidNodeType { .. })));
    assert!(matches!(tree.dispatch_event(NodeId::NONE, "click"), Err(DomError::NotFound(_))));
}

#[test]
fn test_failed_operations_leave_no_record() {
    let (mut tree, body) = tree_with_body();
    let stray = tree.create_element("span");
    tree.take_records();

    assert!(tree.remove_child(body, stray).is_err());
    assert!(tree.records().is_empty());
}
