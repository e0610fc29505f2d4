//! DOM Node - Compact representation
//!
//! Memory layout:
//! - Links use NodeId (4 bytes) instead of pointers (8 bytes)
//! - Attributes and style properties are stored inline for small counts

use smallvec::SmallVec;

use crate::{EventListener, NodeId};

/// DOM Node - Core structure
#[derive(Debug)]
pub struct Node {
    /// Parent node (NONE if detached or root)
    pub parent: NodeId,
    /// First child
    pub first_child: NodeId,
    /// Last child (for O(1) append)
    pub last_child: NodeId,
    /// Previous sibling
    pub prev_sibling: NodeId,
    /// Next sibling
    pub next_sibling: NodeId,
    /// Node-specific data
    pub data: NodeData,
}

impl Node {
    fn detached(data: NodeData) -> Self {
        Self {
            parent: NodeId::NONE,
            first_child: NodeId::NONE,
            last_child: NodeId::NONE,
            prev_sibling: NodeId::NONE,
            next_sibling: NodeId::NONE,
            data,
        }
    }

    /// Create a new element node
    pub fn element(tag: &str) -> Self {
        Self::detached(NodeData::Element(ElementData::new(tag)))
    }

    /// Create a new text node
    pub fn text(content: &str) -> Self {
        Self::detached(NodeData::Text(TextData { content: content.to_string() }))
    }

    /// Create a document node
    pub fn document() -> Self {
        Self::detached(NodeData::Document)
    }

    /// Check if this is an element
    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self.data, NodeData::Element(_))
    }

    /// Check if this is text
    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self.data, NodeData::Text(_))
    }

    /// Whether this node may hold children
    #[inline]
    pub fn is_container(&self) -> bool {
        matches!(self.data, NodeData::Element(_) | NodeData::Document)
    }

    /// Get element data if this is an element
    #[inline]
    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get mutable element data
    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get text content if this is a text node
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match &self.data {
            NodeData::Text(t) => Some(&t.content),
            _ => None,
        }
    }
}

/// Node-specific data
#[derive(Debug)]
pub enum NodeData {
    /// Document root
    Document,
    /// Element
    Element(ElementData),
    /// Text content
    Text(TextData),
}

/// Element-specific data
#[derive(Debug)]
pub struct ElementData {
    /// Tag name
    pub tag: String,
    /// Attributes in insertion order
    pub attrs: SmallVec<[Attribute; 4]>,
    /// `class` attribute, kept apart from the generic attributes
    pub class_name: Option<String>,
    /// Inline style declarations
    pub style: SmallVec<[StyleProperty; 4]>,
    /// Registered event listeners
    pub listeners: Vec<RegisteredListener>,
}

impl ElementData {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attrs: SmallVec::new(),
            class_name: None,
            style: SmallVec::new(),
            listeners: Vec::new(),
        }
    }

    /// Get an attribute value
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Set an attribute, returning the previous value
    pub fn set_attr(&mut self, name: &str, value: &str) -> Option<String> {
        if let Some(attr) = self.attrs.iter_mut().find(|a| a.name == name) {
            return Some(std::mem::replace(&mut attr.value, value.to_string()));
        }
        self.attrs.push(Attribute { name: name.to_string(), value: value.to_string() });
        None
    }

    /// Remove an attribute, returning its value
    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        let pos = self.attrs.iter().position(|a| a.name == name)?;
        Some(self.attrs.remove(pos).value)
    }

    /// Get an inline style property
    pub fn style_property(&self, property: &str) -> Option<&str> {
        self.style.iter()
            .find(|p| p.name == property)
            .map(|p| p.value.as_str())
    }

    /// Set or clear an inline style property, returning the previous value
    pub fn set_style_property(&mut self, property: &str, value: Option<&str>) -> Option<String> {
        let pos = self.style.iter().position(|p| p.name == property);
        match (pos, value) {
            (Some(pos), Some(value)) => {
                Some(std::mem::replace(&mut self.style[pos].value, value.to_string()))
            }
            (Some(pos), None) => Some(self.style.remove(pos).value),
            (None, Some(value)) => {
                self.style.push(StyleProperty { name: property.to_string(), value: value.to_string() });
                None
            }
            (None, None) => None,
        }
    }

    /// Serialized `style` attribute (`a: b; c: d`)
    pub fn style_text(&self) -> String {
        self.style.iter()
            .map(|p| format!("{}: {}", p.name, p.value))
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// Listeners registered for an event type
    pub fn listeners_for<'a>(&'a self, event_type: &'a str) -> impl Iterator<Item = &'a EventListener> + 'a {
        self.listeners.iter()
            .filter(move |l| l.event_type == event_type)
            .map(|l| &l.listener)
    }
}

/// Text node data
#[derive(Debug)]
pub struct TextData {
    pub content: String,
}

/// Attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

/// Inline style declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleProperty {
    pub name: String,
    pub value: String,
}

/// Listener bound to an element for one event type
#[derive(Debug, Clone)]
pub struct RegisteredListener {
    pub event_type: String,
    pub listener: EventListener,
}
