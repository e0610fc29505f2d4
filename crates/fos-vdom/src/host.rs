//! Host renderer capability
//!
//! The reconciler never touches a host tree directly; every mutation goes
//! through this trait. `fos_dom::DomTree` implements it (see `dom_host`).

use std::fmt;
use std::hash::Hash;

use fos_dom::EventListener;

/// Primitive operations the reconciler needs from a host tree.
///
/// `Node` is a handle, not an owner: the host tree owns its nodes and a handle
/// only locates one. Handles must be cheap to clone and usable as map keys,
/// since containers are tracked by handle.
pub trait HostRenderer {
    type Node: Clone + Eq + Hash + fmt::Debug;
    type Error: std::error::Error + 'static;

    fn create_element(&mut self, tag: &str) -> Result<Self::Node, Self::Error>;

    fn create_text_node(&mut self, text: &str) -> Result<Self::Node, Self::Error>;

    /// Replace the content of a text node
    fn set_text(&mut self, node: &Self::Node, text: &str) -> Result<(), Self::Error>;

    fn append_child(&mut self, parent: &Self::Node, child: &Self::Node) -> Result<(), Self::Error>;

    /// Insert (or move) `child` so it directly precedes `anchor`
    fn insert_before(&mut self, parent: &Self::Node, child: &Self::Node, anchor: &Self::Node) -> Result<(), Self::Error>;

    fn remove_child(&mut self, parent: &Self::Node, child: &Self::Node) -> Result<(), Self::Error>;

    /// Set a plain attribute; `None` removes it
    fn set_attribute(&mut self, node: &Self::Node, name: &str, value: Option<&str>) -> Result<(), Self::Error>;

    /// Set one style property; `None` clears it
    fn set_style_property(&mut self, node: &Self::Node, property: &str, value: Option<&str>) -> Result<(), Self::Error>;

    /// Assign the class; `None` clears it
    fn set_class(&mut self, node: &Self::Node, class: Option<&str>) -> Result<(), Self::Error>;

    fn add_event_listener(&mut self, node: &Self::Node, event_type: &str, listener: &EventListener) -> Result<(), Self::Error>;

    fn remove_event_listener(&mut self, node: &Self::Node, event_type: &str, listener: &EventListener) -> Result<(), Self::Error>;

    fn first_child(&self, parent: &Self::Node) -> Option<Self::Node>;

    fn next_sibling(&self, node: &Self::Node) -> Option<Self::Node>;
}
