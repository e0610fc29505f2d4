//! `HostRenderer` for the fOS arena DOM

use fos_dom::{DomError, DomTree, EventListener, NodeId};

use crate::host::HostRenderer;

impl HostRenderer for DomTree {
    type Node = NodeId;
    type Error = DomError;

    fn create_element(&mut self, tag: &str) -> Result<NodeId, DomError> {
        Ok(DomTree::create_element(self, tag))
    }

    fn create_text_node(&mut self, text: &str) -> Result<NodeId, DomError> {
        Ok(DomTree::create_text(self, text))
    }

    fn set_text(&mut self, node: &NodeId, text: &str) -> Result<(), DomError> {
        DomTree::set_text(self, *node, text)
    }

    fn append_child(&mut self, parent: &NodeId, child: &NodeId) -> Result<(), DomError> {
        DomTree::append_child(self, *parent, *child)
    }

    fn insert_before(&mut self, parent: &NodeId, child: &NodeId, anchor: &NodeId) -> Result<(), DomError> {
        DomTree::insert_before(self, *parent, *child, Some(*anchor))
    }

    fn remove_child(&mut self, parent: &NodeId, child: &NodeId) -> Result<(), DomError> {
        DomTree::remove_child(self, *parent, *child)
    }

    fn set_attribute(&mut self, node: &NodeId, name: &str, value: Option<&str>) -> Result<(), DomError> {
        match value {
            Some(value) => DomTree::set_attribute(self, *node, name, value),
            None => DomTree::remove_attribute(self, *node, name).map(drop),
        }
    }

    fn set_style_property(&mut self, node: &NodeId, property: &str, value: Option<&str>) -> Result<(), DomError> {
        DomTree::set_style_property(self, *node, property, value)
    }

    fn set_class(&mut self, node: &NodeId, class: Option<&str>) -> Result<(), DomError> {
        DomTree::set_class(self, *node, class)
    }

    fn add_event_listener(&mut self, node: &NodeId, event_type: &str, listener: &EventListener) -> Result<(), DomError> {
        DomTree::add_event_listener(self, *node, event_type, listener.clone())
    }

    fn remove_event_listener(&mut self, node: &NodeId, event_type: &str, listener: &EventListener) -> Result<(), DomError> {
        DomTree::remove_event_listener(self, *node, event_type, listener).map(drop)
    }

    fn first_child(&self, parent: &NodeId) -> Option<NodeId> {
        DomTree::first_child(self, *parent)
    }

    fn next_sibling(&self, node: &NodeId) -> Option<NodeId> {
        DomTree::next_sibling(self, *node)
    }
}
