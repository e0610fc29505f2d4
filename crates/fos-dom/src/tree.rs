//! DOM Tree (arena-based allocation)
//!
//! Nodes are never freed: a removed node stays in the arena, detached, so a
//! stale `NodeId` still resolves but is no longer connected to the root.

use crate::{
    DomError, DomEvent, DomResult, ElementData, EventListener, MutationRecord, Node, NodeData, NodeId,
    RegisteredListener,
};

/// Arena-based DOM tree
///
/// The arena only grows. Removed nodes stay allocated and detached for the
/// life of the tree, so a long-lived owner that keeps replacing subtrees
/// accumulates them; [`DomTree::len`] counts them. Rebuild the tree to
/// reclaim the space.
#[derive(Debug)]
pub struct DomTree {
    nodes: Vec<Node>,
    records: Vec<MutationRecord>,
}

impl DomTree {
    /// Create a tree holding only the document root
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::document()],
            records: Vec::new(),
        }
    }

    /// Document root
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Get a mutable node by ID
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    /// Number of nodes ever allocated (including detached ones)
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: the document root exists from construction
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn node(&self, id: NodeId) -> DomResult<&Node> {
        self.get(id).ok_or(DomError::NotFound(id))
    }

    fn element(&self, id: NodeId, operation: &'static str) -> DomResult<&ElementData> {
        self.node(id)?
            .as_element()
            .ok_or(DomError::InvalidNodeType { node: id, operation })
    }

    fn element_mut(&mut self, id: NodeId, operation: &'static str) -> DomResult<&mut ElementData> {
        self.get_mut(id)
            .ok_or(DomError::NotFound(id))?
            .as_element_mut()
            .ok_or(DomError::InvalidNodeType { node: id, operation })
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    // ========================================================================
    // Creation
    // ========================================================================

    /// Create a detached element
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(Node::element(tag))
    }

    /// Create a detached text node
    pub fn create_text(&mut self, content: &str) -> NodeId {
        self.push(Node::text(content))
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id)?.parent.some()
    }

    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.get(id)?.first_child.some()
    }

    pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
        self.get(id)?.last_child.some()
    }

    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.get(id)?.next_sibling.some()
    }

    pub fn prev_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.get(id)?.prev_sibling.some()
    }

    /// Iterate over the children of a node
    pub fn children(&self, id: NodeId) -> Children<'_> {
        Children {
            tree: self,
            next: self.get(id).map_or(NodeId::NONE, |n| n.first_child),
        }
    }

    /// Child IDs in document order
    pub fn child_ids(&self, id: NodeId) -> Vec<NodeId> {
        self.children(id).map(|(child, _)| child).collect()
    }

    /// Whether the node is reachable from the document root
    pub fn is_connected(&self, id: NodeId) -> bool {
        self.is_inclusive_ancestor(NodeId::ROOT, id)
    }

    fn is_inclusive_ancestor(&self, ancestor: NodeId, id: NodeId) -> bool {
        let mut current = id;
        while current.is_valid() {
            if current == ancestor {
                return true;
            }
            current = self.get(current).map_or(NodeId::NONE, |n| n.parent);
        }
        false
    }

    // ========================================================================
    // Tree mutation
    // ========================================================================

    /// Append a child, moving it if it is already attached somewhere
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<()> {
        self.insert_before(parent, child, None)
    }

    /// Insert `child` before `reference` (append when `None`)
    pub fn insert_before(&mut self, parent: NodeId, child: NodeId, reference: Option<NodeId>) -> DomResult<()> {
        if !self.node(parent)?.is_container() {
            return Err(DomError::InvalidNodeType { node: parent, operation: "insert_before" });
        }
        if matches!(self.node(child)?.data, NodeData::Document) || self.is_inclusive_ancestor(child, parent) {
            return Err(DomError::HierarchyRequest { parent, child });
        }
        if let Some(reference) = reference {
            if self.node(reference)?.parent != parent {
                return Err(DomError::NotAChild { parent, child: reference });
            }
            if reference == child {
                return Ok(());
            }
        }

        self.detach(child);

        let (prev, next) = match reference {
            Some(reference) => (self.nodes[reference.index()].prev_sibling, reference),
            None => (self.nodes[parent.index()].last_child, NodeId::NONE),
        };

        {
            let node = &mut self.nodes[child.index()];
            node.parent = parent;
            node.prev_sibling = prev;
            node.next_sibling = next;
        }
        if prev.is_valid() {
            self.nodes[prev.index()].next_sibling = child;
        } else {
            self.nodes[parent.index()].first_child = child;
        }
        if next.is_valid() {
            self.nodes[next.index()].prev_sibling = child;
        } else {
            self.nodes[parent.index()].last_child = child;
        }

        self.records.push(MutationRecord::ChildInserted { parent, node: child, before: reference });
        Ok(())
    }

    /// Remove `child` from `parent`
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<()> {
        self.node(parent)?;
        if self.node(child)?.parent != parent {
            return Err(DomError::NotAChild { parent, child });
        }
        self.detach(child);
        self.records.push(MutationRecord::ChildRemoved { parent, node: child });
        Ok(())
    }

    /// Unlink a node from its parent and siblings
    fn detach(&mut self, id: NodeId) {
        let (parent, prev, next) = {
            let node = &self.nodes[id.index()];
            (node.parent, node.prev_sibling, node.next_sibling)
        };
        if !parent.is_valid() {
            return;
        }

        if prev.is_valid() {
            self.nodes[prev.index()].next_sibling = next;
        } else {
            self.nodes[parent.index()].first_child = next;
        }
        if next.is_valid() {
            self.nodes[next.index()].prev_sibling = prev;
        } else {
            self.nodes[parent.index()].last_child = prev;
        }

        let node = &mut self.nodes[id.index()];
        node.parent = NodeId::NONE;
        node.prev_sibling = NodeId::NONE;
        node.next_sibling = NodeId::NONE;
    }

    // ========================================================================
    // Text
    // ========================================================================

    /// Text of a text node
    pub fn text(&self, id: NodeId) -> Option<&str> {
        self.get(id)?.as_text()
    }

    /// Replace the content of a text node
    pub fn set_text(&mut self, id: NodeId, content: &str) -> DomResult<()> {
        let node = self.get_mut(id).ok_or(DomError::NotFound(id))?;
        let NodeData::Text(text) = &mut node.data else {
            return Err(DomError::InvalidNodeType { node: id, operation: "set_text" });
        };
        let old_value = std::mem::replace(&mut text.content, content.to_string());
        self.records.push(MutationRecord::CharacterData {
            target: id,
            old_value,
            new_value: content.to_string(),
        });
        Ok(())
    }

    /// Concatenated text of a subtree
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        match self.get(id).map(|n| &n.data) {
            Some(NodeData::Text(text)) => out.push_str(&text.content),
            Some(_) => {
                for (child, _) in self.children(id) {
                    self.collect_text(child, out);
                }
            }
            None => {}
        }
    }

    // ========================================================================
    // Attributes, class and style
    // ========================================================================

    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        self.get(id)?.as_element().map(|e| e.tag.as_str())
    }

    pub fn get_attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.get(id)?.as_element()?.get_attr(name)
    }

    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) -> DomResult<()> {
        let old_value = self.element_mut(id, "set_attribute")?.set_attr(name, value);
        self.records.push(MutationRecord::Attribute {
            target: id,
            name: name.to_string(),
            old_value,
            new_value: Some(value.to_string()),
        });
        Ok(())
    }

    /// Remove an attribute; returns whether it was present
    pub fn remove_attribute(&mut self, id: NodeId, name: &str) -> DomResult<bool> {
        let Some(old_value) = self.element_mut(id, "remove_attribute")?.remove_attr(name) else {
            return Ok(false);
        };
        self.records.push(MutationRecord::Attribute {
            target: id,
            name: name.to_string(),
            old_value: Some(old_value),
            new_value: None,
        });
        Ok(true)
    }

    pub fn class_name(&self, id: NodeId) -> Option<&str> {
        self.get(id)?.as_element()?.class_name.as_deref()
    }

    /// Set or clear the class
    pub fn set_class(&mut self, id: NodeId, class: Option<&str>) -> DomResult<()> {
        let elem = self.element_mut(id, "set_class")?;
        let old_value = std::mem::replace(&mut elem.class_name, class.map(str::to_string));
        self.records.push(MutationRecord::Class {
            target: id,
            old_value,
            new_value: class.map(str::to_string),
        });
        Ok(())
    }

    pub fn style_property(&self, id: NodeId, property: &str) -> Option<&str> {
        self.get(id)?.as_element()?.style_property(property)
    }

    /// Set or clear one inline style property
    pub fn set_style_property(&mut self, id: NodeId, property: &str, value: Option<&str>) -> DomResult<()> {
        let old_value = self.element_mut(id, "set_style_property")?.set_style_property(property, value);
        self.records.push(MutationRecord::Style {
            target: id,
            property: property.to_string(),
            old_value,
            new_value: value.map(str::to_string),
        });
        Ok(())
    }

    // ========================================================================
    // Events
    // ========================================================================

    pub fn add_event_listener(&mut self, id: NodeId, event_type: &str, listener: EventListener) -> DomResult<()> {
        self.element_mut(id, "add_event_listener")?.listeners.push(RegisteredListener {
            event_type: event_type.to_string(),
            listener,
        });
        self.records.push(MutationRecord::ListenerAdded { target: id, event_type: event_type.to_string() });
        Ok(())
    }

    /// Remove a listener registration; returns whether one was found
    pub fn remove_event_listener(&mut self, id: NodeId, event_type: &str, listener: &EventListener) -> DomResult<bool> {
        let elem = self.element_mut(id, "remove_event_listener")?;
        let Some(pos) = elem.listeners.iter()
            .position(|l| l.event_type == event_type && l.listener == *listener)
        else {
            return Ok(false);
        };
        elem.listeners.remove(pos);
        self.records.push(MutationRecord::ListenerRemoved { target: id, event_type: event_type.to_string() });
        Ok(true)
    }

    pub fn listener_count(&self, id: NodeId, event_type: &str) -> usize {
        self.get(id)
            .and_then(Node::as_element)
            .map_or(0, |e| e.listeners_for(event_type).count())
    }

    /// Dispatch an event at `target`, bubbling to ancestors.
    ///
    /// Returns the number of listeners invoked.
    pub fn dispatch_event(&self, target: NodeId, event_type: &str) -> DomResult<usize> {
        self.node(target)?;
        let mut event = DomEvent::new(event_type, target);
        let mut invoked = 0;
        let mut current = target;

        while current.is_valid() && !event.propagation_stopped() {
            let node = self.node(current)?;
            if let Some(elem) = node.as_element() {
                // Snapshot so callbacks observe a stable list
                let listeners: Vec<EventListener> = elem.listeners_for(event_type).cloned().collect();
                event.current_target = current;
                for listener in &listeners {
                    listener.call(&mut event);
                    invoked += 1;
                }
            }
            current = node.parent;
        }

        tracing::trace!("Dispatched {} on {}: {} listener(s)", event_type, target, invoked);
        Ok(invoked)
    }

    // ========================================================================
    // Mutation journal
    // ========================================================================

    /// Records since the last `take_records`
    pub fn records(&self) -> &[MutationRecord] {
        &self.records
    }

    /// Drain the mutation journal
    pub fn take_records(&mut self) -> Vec<MutationRecord> {
        std::mem::take(&mut self.records)
    }

    // ========================================================================
    // Serialization
    // ========================================================================

    /// Serialize a subtree to HTML (listeners are not represented)
    pub fn to_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.write_html(id, &mut out);
        out
    }

    fn write_html(&self, id: NodeId, out: &mut String) {
        let Some(node) = self.get(id) else { return };
        match &node.data {
            NodeData::Document => {
                for (child, _) in self.children(id) {
                    self.write_html(child, out);
                }
            }
            NodeData::Text(text) => escape_into(&text.content, out),
            NodeData::Element(elem) => {
                out.push('<');
                out.push_str(&elem.tag);
                if let Some(class) = &elem.class_name {
                    push_attr(out, "class", class);
                }
                for attr in &elem.attrs {
                    push_attr(out, &attr.name, &attr.value);
                }
                if !elem.style.is_empty() {
                    push_attr(out, "style", &elem.style_text());
                }
                out.push('>');
                for (child, _) in self.children(id) {
                    self.write_html(child, out);
                }
                out.push_str("</");
                out.push_str(&elem.tag);
                out.push('>');
            }
        }
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    escape_into(value, out);
    out.push('"');
}

fn escape_into(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}

/// Iterator over a node's children
pub struct Children<'a> {
    tree: &'a DomTree,
    next: NodeId,
}

impl<'a> Iterator for Children<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        if !self.next.is_valid() {
            return None;
        }
        let id = self.next;
        let node = self.tree.get(id)?;
        self.next = node.next_sibling;
        Some((id, node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_before_moves_existing_child() {
        let mut tree = DomTree::new();
        let ul = tree.create_element("ul");
        let a = tree.create_element("li");
        let b = tree.create_element("li");
        let c = tree.create_element("li");
        for id in [a, b, c] {
            tree.append_child(ul, id).unwrap();
        }

        tree.insert_before(ul, c, Some(a)).unwrap();
        assert_eq!(tree.child_ids(ul), vec![c, a, b]);
        assert_eq!(tree.first_child(ul), Some(c));
        assert_eq!(tree.last_child(ul), Some(b));
        assert_eq!(tree.prev_sibling(a), Some(c));
    }

    #[test]
    fn test_insert_before_self_is_noop() {
        let mut tree = DomTree::new();
        let ul = tree.create_element("ul");
        let a = tree.create_element("li");
        tree.append_child(ul, a).unwrap();
        tree.take_records();

        tree.insert_before(ul, a, Some(a)).unwrap();
        assert_eq!(tree.child_ids(ul), vec![a]);
        assert!(tree.records().is_empty());
    }

    #[test]
    fn test_hierarchy_request() {
        let mut tree = DomTree::new();
        let outer = tree.create_element("div");
        let inner = tree.create_element("div");
        tree.append_child(outer, inner).unwrap();

        let err = tree.append_child(inner, outer).unwrap_err();
        assert_eq!(err, DomError::HierarchyRequest { parent: inner, child: outer });
    }

    #[test]
    fn test_dispatch_bubbles() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let mut tree = DomTree::new();
        let outer = tree.create_element("div");
        let button = tree.create_element("button");
        tree.append_child(tree.root(), outer).unwrap();
        tree.append_child(outer, button).unwrap();

        let seen = Rc::new(RefCell::new(Vec::new()));
        for id in [outer, button] {
            let seen = seen.clone();
            tree.add_event_listener(id, "click", EventListener::new(move |event| {
                seen.borrow_mut().push(event.current_target);
            })).unwrap();
        }

        assert_eq!(tree.dispatch_event(button, "click").unwrap(), 2);
        assert_eq!(*seen.borrow(), vec![button, outer]);
    }

    #[test]
    fn test_to_html() {
        let mut tree = DomTree::new();
        let div = tree.create_element("div");
        let text = tree.create_text("a < b");
        tree.append_child(tree.root(), div).unwrap();
        tree.append_child(div, text).unwrap();
        tree.set_class(div, Some("box")).unwrap();
        tree.set_attribute(div, "title", "t").unwrap();
        tree.set_style_property(div, "color", Some("red")).unwrap();

        assert_eq!(
            tree.to_html(div),
            "<div class=\"box\" title=\"t\" style=\"color: red\">a &lt; b</div>"
        );
    }
}
