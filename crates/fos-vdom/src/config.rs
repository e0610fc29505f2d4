//! Reconciler Configuration

/// How keyed children are put back in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoveStrategy {
    /// Keep the longest run of children whose prior order is already
    /// increasing and move only the rest. Minimal number of moves.
    #[default]
    LongestIncreasingSubsequence,
    /// Walk the next children tracking the highest prior index placed so far;
    /// any matched child found below it is moved after its predecessor.
    LastPlacedIndex,
}

/// Reconciler configuration options
#[derive(Debug, Clone)]
pub struct ReconcilerConfig {
    /// Keyed children placement algorithm
    pub move_strategy: MoveStrategy,

    /// Attribute names starting with this character bind event listeners
    pub event_prefix: char,

    /// Validate each tree before touching the host
    pub validate: bool,
}

impl Default for ReconcilerConfig {
    fn default() -> Self {
        Self {
            move_strategy: MoveStrategy::default(),
            event_prefix: '@',
            validate: true,
        }
    }
}
