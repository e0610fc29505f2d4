//! Virtual node model
//!
//! A [`VNode`] describes one node of the desired tree. Its kind and children
//! arity are fixed at construction; the only slot reconciliation ever writes
//! is the realized host handle `N`, a non-owning reference into the host tree.

use std::fmt;

use crate::attributes::{AttrValue, Attributes};
use crate::builder::IntoChildren;

/// Sibling identity token
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Int(i64),
    Str(String),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{}", n),
            Self::Str(s) => write!(f, "{:?}", s),
        }
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i64> for Key {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Key {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<u32> for Key {
    fn from(value: u32) -> Self {
        Self::Int(value.into())
    }
}

/// Node kind discriminant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VNodeKind {
    Element,
    Text,
    Component,
    ClassComponent,
}

/// Children arity class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arity {
    None,
    One,
    Many,
}

/// Children of an element, classified by arity
#[derive(Debug, Clone)]
pub enum Children<N> {
    None,
    One(Box<VNode<N>>),
    Many(Vec<VNode<N>>),
}

impl<N> Children<N> {
    pub fn arity(&self) -> Arity {
        match self {
            Self::None => Arity::None,
            Self::One(_) => Arity::One,
            Self::Many(_) => Arity::Many,
        }
    }

    pub fn as_slice(&self) -> &[VNode<N>] {
        match self {
            Self::None => Default::default(),
            Self::One(child) => std::slice::from_ref(child.as_ref()),
            Self::Many(children) => children,
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VNode<N>> {
        self.as_slice().iter()
    }

    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, VNode<N>> {
        match self {
            Self::None => Default::default(),
            Self::One(child) => std::slice::from_mut(child.as_mut()).iter_mut(),
            Self::Many(children) => children.iter_mut(),
        }
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}

/// Element payload
#[derive(Debug, Clone)]
pub struct Element<N> {
    pub tag: String,
    /// `None` and an empty map differ only in intent; both render no attributes
    pub attrs: Option<Attributes>,
    pub children: Children<N>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    Function,
    Class,
}

/// Unresolved component placeholder.
///
/// Frameworks expand components into elements and text before handing a
/// tree to the reconciler, which rejects any placeholder it meets.
#[derive(Debug, Clone)]
pub struct Component {
    pub name: String,
    pub kind: ComponentKind,
    pub props: Option<Attributes>,
}

/// Kind-specific payload
#[derive(Debug, Clone)]
pub enum Content<N> {
    Element(Element<N>),
    Text(String),
    Component(Component),
}

/// Virtual node
#[derive(Debug, Clone)]
pub struct VNode<N> {
    pub(crate) key: Option<Key>,
    pub(crate) content: Content<N>,
    pub(crate) realized: Option<N>,
}

impl<N> VNode<N> {
    fn new(content: Content<N>) -> Self {
        Self { key: None, content, realized: None }
    }

    /// Element with no attributes and no children
    pub fn element(tag: impl Into<String>) -> Self {
        Self::new(Content::Element(Element {
            tag: tag.into(),
            attrs: None,
            children: Children::None,
        }))
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::new(Content::Text(text.into()))
    }

    pub fn component(name: impl Into<String>, kind: ComponentKind) -> Self {
        Self::new(Content::Component(Component {
            name: name.into(),
            kind,
            props: None,
        }))
    }

    pub fn with_key(mut self, key: impl Into<Key>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Replace the attribute map (props for components; ignored on text)
    pub fn with_attrs(mut self, attrs: impl Into<Option<Attributes>>) -> Self {
        match &mut self.content {
            Content::Element(element) => element.attrs = attrs.into(),
            Content::Component(component) => component.props = attrs.into(),
            Content::Text(_) => {}
        }
        self
    }

    /// Add one attribute (ignored on text)
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        let slot = match &mut self.content {
            Content::Element(element) => Some(&mut element.attrs),
            Content::Component(component) => Some(&mut component.props),
            Content::Text(_) => None,
        };
        if let Some(slot) = slot {
            slot.get_or_insert_with(Attributes::new).insert(name, value);
        }
        self
    }

    /// Replace the children (elements only)
    pub fn with_children(mut self, children: impl IntoChildren<N>) -> Self {
        if let Content::Element(element) = &mut self.content {
            element.children = children.into_children();
        }
        self
    }

    /// Append one child, promoting None -> One -> Many (elements only)
    pub fn with_child(mut self, child: VNode<N>) -> Self {
        if let Content::Element(element) = &mut self.content {
            element.children = match std::mem::replace(&mut element.children, Children::None) {
                Children::None => Children::One(Box::new(child)),
                Children::One(first) => Children::Many(vec![*first, child]),
                Children::Many(mut children) => {
                    children.push(child);
                    Children::Many(children)
                }
            };
        }
        self
    }

    pub fn kind(&self) -> VNodeKind {
        match &self.content {
            Content::Element(_) => VNodeKind::Element,
            Content::Text(_) => VNodeKind::Text,
            Content::Component(Component { kind: ComponentKind::Function, .. }) => VNodeKind::Component,
            Content::Component(Component { kind: ComponentKind::Class, .. }) => VNodeKind::ClassComponent,
        }
    }

    pub fn key(&self) -> Option<&Key> {
        self.key.as_ref()
    }

    pub fn content(&self) -> &Content<N> {
        &self.content
    }

    pub fn tag(&self) -> Option<&str> {
        match &self.content {
            Content::Element(element) => Some(&element.tag),
            _ => None,
        }
    }

    pub fn attrs(&self) -> Option<&Attributes> {
        match &self.content {
            Content::Element(element) => element.attrs.as_ref(),
            Content::Component(component) => component.props.as_ref(),
            Content::Text(_) => None,
        }
    }

    /// Children of an element; `None` for other kinds
    pub fn children(&self) -> Option<&Children<N>> {
        match &self.content {
            Content::Element(element) => Some(&element.children),
            _ => None,
        }
    }

    /// Arity of the children; text and components have none
    pub fn arity(&self) -> Arity {
        self.children().map_or(Arity::None, Children::arity)
    }

    pub fn text_content(&self) -> Option<&str> {
        match &self.content {
            Content::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Host node this VNode was mounted as, once rendered
    pub fn realized(&self) -> Option<&N> {
        self.realized.as_ref()
    }

    /// Short label for logs and errors (`<li>`, `#text`, `Component`)
    pub fn describe(&self) -> String {
        match &self.content {
            Content::Element(element) => format!("<{}>", element.tag),
            Content::Text(_) => "#text".to_string(),
            Content::Component(component) => component.name.clone(),
        }
    }
}
