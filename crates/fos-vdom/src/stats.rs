//! Patch statistics

/// Host mutations performed by one render
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatchStats {
    /// Host nodes created by mounting
    pub nodes_created: usize,
    /// Host nodes detached (replacements included)
    pub nodes_removed: usize,
    /// Existing host nodes repositioned among their siblings
    pub nodes_moved: usize,
    /// Nodes replaced wholesale because kind or tag changed
    pub nodes_replaced: usize,
    /// Host nodes carried over from the prior tree
    pub nodes_reused: usize,
    pub text_updates: usize,
    /// Attribute, class and style property writes
    pub attribute_writes: usize,
    pub listeners_added: usize,
    pub listeners_removed: usize,
}

impl PatchStats {
    /// Total host mutations (reuse is not a mutation)
    pub fn host_mutations(&self) -> usize {
        self.nodes_created
            + self.nodes_removed
            + self.nodes_moved
            + self.text_updates
            + self.attribute_writes
            + self.listeners_added
            + self.listeners_removed
    }

    /// True when the render left the host untouched
    pub fn is_noop(&self) -> bool {
        self.host_mutations() == 0
    }
}
