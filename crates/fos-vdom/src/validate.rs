//! Tree validation
//!
//! Malformed trees are programmer errors. Catching them before the first host
//! call keeps a bad render from leaving the host half patched.

use std::collections::HashSet;

use crate::attributes::{AttrSlot, AttrValue};
use crate::vnode::{Children, Content, Key, VNode};

/// Reason a tree was rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Duplicate key {key} among the children of {parent}")]
    DuplicateKey { key: Key, parent: String },

    #[error("Component `{name}` must be resolved before reconciliation")]
    UnresolvedComponent { name: String },

    #[error("Attribute `{name}` on {tag} expects {expected}")]
    InvalidAttribute { tag: String, name: String, expected: &'static str },
}

/// Check a tree for duplicate sibling keys, unresolved components and
/// attribute values that do not fit their attribute name.
pub fn validate<N>(tree: &VNode<N>, event_prefix: char) -> Result<(), ValidationError> {
    let element = match &tree.content {
        Content::Text(_) => return Ok(()),
        Content::Component(component) => {
            return Err(ValidationError::UnresolvedComponent { name: component.name.clone() });
        }
        Content::Element(element) => element,
    };

    if let Some(attrs) = &element.attrs {
        for (name, value) in attrs.iter() {
            check_attribute(tree, name, value, event_prefix)?;
        }
    }

    if let Children::Many(children) = &element.children {
        let mut seen = HashSet::with_capacity(children.len());
        for key in children.iter().filter_map(VNode::key) {
            if !seen.insert(key) {
                return Err(ValidationError::DuplicateKey {
                    key: key.clone(),
                    parent: tree.describe(),
                });
            }
        }
    }

    element.children.iter().try_for_each(|child| validate(child, event_prefix))
}

fn check_attribute<N>(owner: &VNode<N>, name: &str, value: &AttrValue, event_prefix: char) -> Result<(), ValidationError> {
    let expected = match (AttrSlot::classify(name, event_prefix), value) {
        (AttrSlot::Event(""), _) => "a non-empty event name",
        (AttrSlot::Style, AttrValue::Style(_))
        | (AttrSlot::Event(_), AttrValue::Listener(_))
        | (AttrSlot::Class | AttrSlot::Plain, AttrValue::Text(_)) => return Ok(()),
        (AttrSlot::Style, _) => "a style map",
        (AttrSlot::Event(_), _) => "an event listener",
        (AttrSlot::Class | AttrSlot::Plain, _) => "a text value",
    };
    Err(ValidationError::InvalidAttribute {
        tag: owner.describe(),
        name: name.to_string(),
        expected,
    })
}
