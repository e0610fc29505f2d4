//! Tree construction helpers
//!
//! `h(tag, attrs, children)` classifies children the way templates write them:
//! nothing or an empty list is no children, a list is many, a single node is
//! one, and any scalar becomes a text child.

use crate::attributes::{AttrValue, Attributes};
use crate::vnode::{Children, Key, VNode};

/// Build an element.
///
/// A text `key` attribute is lifted out of `attrs` into the node's key and is
/// not forwarded to the host.
pub fn h<N>(tag: &str, attrs: impl Into<Option<Attributes>>, children: impl IntoChildren<N>) -> VNode<N> {
    let mut attrs = attrs.into();
    let key = attrs.as_mut().and_then(take_key);

    let mut node = VNode::element(tag)
        .with_attrs(attrs)
        .with_children(children);
    node.key = key;
    node
}

/// Build a text node
pub fn text<N>(content: impl Into<String>) -> VNode<N> {
    VNode::text(content)
}

fn take_key(attrs: &mut Attributes) -> Option<Key> {
    // Non-text keys stay put so validation can report them
    if !matches!(attrs.get("key"), Some(AttrValue::Text(_))) {
        return None;
    }
    match attrs.remove("key") {
        Some(AttrValue::Text(key)) => Some(Key::Str(key)),
        _ => None,
    }
}

/// Conversion into a classified children collection
pub trait IntoChildren<N> {
    fn into_children(self) -> Children<N>;
}

impl<N> IntoChildren<N> for Children<N> {
    fn into_children(self) -> Children<N> {
        self
    }
}

impl<N> IntoChildren<N> for () {
    fn into_children(self) -> Children<N> {
        Children::None
    }
}

impl<N> IntoChildren<N> for VNode<N> {
    fn into_children(self) -> Children<N> {
        Children::One(Box::new(self))
    }
}

impl<N> IntoChildren<N> for Vec<VNode<N>> {
    fn into_children(self) -> Children<N> {
        if self.is_empty() {
            Children::None
        } else {
            Children::Many(self)
        }
    }
}

impl<N, const LEN: usize> IntoChildren<N> for [VNode<N>; LEN] {
    fn into_children(self) -> Children<N> {
        Vec::from(self).into_children()
    }
}

impl<N, T: IntoChildren<N>> IntoChildren<N> for Option<T> {
    fn into_children(self) -> Children<N> {
        self.map_or(Children::None, IntoChildren::into_children)
    }
}

macro_rules! scalar_children {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<N> IntoChildren<N> for $ty {
                fn into_children(self) -> Children<N> {
                    Children::One(Box::new(VNode::text(self.to_string())))
                }
            }
        )*
    };
}

scalar_children!(&str, String, &String, char, bool, i32, i64, u32, u64, usize, f32, f64);
