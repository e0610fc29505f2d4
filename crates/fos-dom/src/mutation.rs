//! Mutation records
//!
//! Every successful tree mutation is journaled so callers (and tests) can
//! observe exactly which host operations a render performed.

use crate::NodeId;

/// Category of a mutation, mirroring MutationObserver record types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationType {
    Attributes,
    CharacterData,
    ChildList,
    Listeners,
}

/// Mutation record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationRecord {
    /// Node inserted (or moved) into `parent`, before `before` if set
    ChildInserted { parent: NodeId, node: NodeId, before: Option<NodeId> },
    /// Node detached from `parent`
    ChildRemoved { parent: NodeId, node: NodeId },
    /// Plain attribute changed; `new_value: None` means removed
    Attribute { target: NodeId, name: String, old_value: Option<String>, new_value: Option<String> },
    /// Class changed
    Class { target: NodeId, old_value: Option<String>, new_value: Option<String> },
    /// Inline style property changed
    Style { target: NodeId, property: String, old_value: Option<String>, new_value: Option<String> },
    /// Text content changed
    CharacterData { target: NodeId, old_value: String, new_value: String },
    ListenerAdded { target: NodeId, event_type: String },
    ListenerRemoved { target: NodeId, event_type: String },
}

impl MutationRecord {
    pub fn mutation_type(&self) -> MutationType {
        match self {
            Self::ChildInserted { .. } | Self::ChildRemoved { .. } => MutationType::ChildList,
            Self::Attribute { .. } | Self::Class { .. } | Self::Style { .. } => MutationType::Attributes,
            Self::CharacterData { .. } => MutationType::CharacterData,
            Self::ListenerAdded { .. } | Self::ListenerRemoved { .. } => MutationType::Listeners,
        }
    }

    /// Node the mutation applies to (the parent for child list changes)
    pub fn target(&self) -> NodeId {
        match self {
            Self::ChildInserted { parent, .. } | Self::ChildRemoved { parent, .. } => *parent,
            Self::Attribute { target, .. }
            | Self::Class { target, .. }
            | Self::Style { target, .. }
            | Self::CharacterData { target, .. }
            | Self::ListenerAdded { target, .. }
            | Self::ListenerRemoved { target, .. } => *target,
        }
    }
}
