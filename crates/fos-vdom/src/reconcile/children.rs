//! Children reconciliation
//!
//! Dispatches on the `(prior, next)` arity pair. Only `Many -> Many` needs a
//! real diff: children are matched by key (or by position when unkeyed), then
//! put in order with the configured [`MoveStrategy`].

use std::collections::HashMap;

use super::{PatchResult, Reconciler, lis};
use crate::config::MoveStrategy;
use crate::host::HostRenderer;
use crate::vnode::{Children, Key, VNode};

impl<H: HostRenderer> Reconciler<'_, H> {
    pub(super) fn patch_children(&mut self, parent: &H::Node, prior: &Children<H::Node>, next: &mut Children<H::Node>) -> PatchResult<H> {
        match (prior, next) {
            (Children::None, Children::None) => Ok(()),
            (Children::None, Children::One(child)) => self.mount(child, parent, None),
            (Children::None, Children::Many(children)) => self.mount_all(children, parent),
            (Children::One(old), Children::None) => self.remove(parent, old),
            (Children::One(old), Children::One(new)) => self.patch(old, new, parent),
            (Children::One(old), Children::Many(children)) => {
                self.remove(parent, old)?;
                self.mount_all(children, parent)
            }
            (Children::Many(old), Children::None) => self.remove_all(old, parent),
            (Children::Many(old), Children::One(child)) => {
                self.remove_all(old, parent)?;
                self.mount(child, parent, None)
            }
            (Children::Many(old), Children::Many(children)) => self.patch_keyed(parent, old, children),
        }
    }

    fn mount_all(&mut self, children: &mut [VNode<H::Node>], parent: &H::Node) -> PatchResult<H> {
        children.iter_mut().try_for_each(|child| self.mount(child, parent, None))
    }

    fn remove_all(&mut self, children: &[VNode<H::Node>], parent: &H::Node) -> PatchResult<H> {
        children.iter().try_for_each(|child| self.remove(parent, child))
    }

    fn patch_keyed(&mut self, parent: &H::Node, prior: &[VNode<H::Node>], next: &mut [VNode<H::Node>]) -> PatchResult<H> {
        let mut index = KeyIndex::new(prior);
        let sources: Vec<Option<usize>> = next
            .iter()
            .enumerate()
            .map(|(position, child)| index.claim(child, position))
            .collect();

        match self.config.move_strategy {
            MoveStrategy::LongestIncreasingSubsequence => self.place_by_subsequence(parent, prior, next, &sources)?,
            MoveStrategy::LastPlacedIndex => self.place_by_last_index(parent, prior, next, &sources)?,
        }

        for (child, claimed) in prior.iter().zip(&index.claimed) {
            if !claimed {
                self.remove(parent, child)?;
            }
        }
        Ok(())
    }

    /// Patch every matched pair, then walk backwards inserting each child
    /// before its successor, skipping those already in increasing order.
    fn place_by_subsequence(
        &mut self,
        parent: &H::Node,
        prior: &[VNode<H::Node>],
        next: &mut [VNode<H::Node>],
        sources: &[Option<usize>],
    ) -> PatchResult<H> {
        for (child, source) in next.iter_mut().zip(sources) {
            if let Some(source) = *source {
                self.patch(&prior[source], child, parent)?;
            }
        }

        let stable = lis::stable_positions(sources);
        let mut anchor: Option<H::Node> = None;
        for (position, child) in next.iter_mut().enumerate().rev() {
            match sources[position] {
                None => self.mount(child, parent, anchor.as_ref())?,
                Some(_) if !stable[position] => {
                    let node = Self::node_of(child)?.clone();
                    tracing::trace!("Moving {} {:?} to position {}", child.describe(), node, position);
                    self.place(parent, &node, anchor.as_ref())?;
                    self.stats.nodes_moved += 1;
                }
                Some(_) => {}
            }
            anchor = Some(Self::node_of(child)?.clone());
        }
        Ok(())
    }

    /// Walk forwards tracking the highest prior index left in place; a matched
    /// child found below it moves after its predecessor.
    fn place_by_last_index(
        &mut self,
        parent: &H::Node,
        prior: &[VNode<H::Node>],
        next: &mut [VNode<H::Node>],
        sources: &[Option<usize>],
    ) -> PatchResult<H> {
        let mut last_placed = 0;
        let mut previous: Option<H::Node> = None;

        for (position, child) in next.iter_mut().enumerate() {
            match sources[position] {
                Some(source) => {
                    self.patch(&prior[source], child, parent)?;
                    if source < last_placed {
                        let node = Self::node_of(child)?.clone();
                        let anchor = self.anchor_after(parent, previous.as_ref());
                        tracing::trace!("Moving {} {:?} to position {}", child.describe(), node, position);
                        self.place(parent, &node, anchor.as_ref())?;
                        self.stats.nodes_moved += 1;
                    } else {
                        last_placed = source;
                    }
                }
                None => {
                    let anchor = self.anchor_after(parent, previous.as_ref());
                    self.mount(child, parent, anchor.as_ref())?;
                }
            }
            previous = Some(Self::node_of(child)?.clone());
        }
        Ok(())
    }

    /// Host node directly after `previous`, or the first child of `parent`
    /// when placing at the front
    fn anchor_after(&self, parent: &H::Node, previous: Option<&H::Node>) -> Option<H::Node> {
        match previous {
            Some(previous) => self.host.next_sibling(previous),
            None => self.host.first_child(parent),
        }
    }
}

/// Prior children indexed by identity.
///
/// Keyed children are found by key; an unkeyed child can only match the
/// unkeyed prior child at its own position. Each prior child is claimed at
/// most once and the first of several equal keys wins.
struct KeyIndex<'a, N> {
    prior: &'a [VNode<N>],
    by_key: HashMap<&'a Key, usize>,
    claimed: Vec<bool>,
}

impl<'a, N> KeyIndex<'a, N> {
    fn new(prior: &'a [VNode<N>]) -> Self {
        let mut by_key = HashMap::with_capacity(prior.len());
        for (source, child) in prior.iter().enumerate() {
            if let Some(key) = child.key() {
                by_key.entry(key).or_insert(source);
            }
        }
        Self { prior, by_key, claimed: vec![false; prior.len()] }
    }

    /// Prior index matched by `child` at `position`, if still unclaimed
    fn claim(&mut self, child: &VNode<N>, position: usize) -> Option<usize> {
        let source = match child.key() {
            Some(key) => *self.by_key.get(key)?,
            None => position,
        };
        let candidate = self.prior.get(source)?;
        if candidate.key() != child.key() || self.claimed[source] {
            return None;
        }
        self.claimed[source] = true;
        Some(source)
    }
}
