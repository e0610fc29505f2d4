//! Diff and patch passes
//!
//! A [`Reconciler`] lives for one render call. It reads the prior tree, writes
//! the realized slots of the next tree and issues host mutations, counting
//! each one in the render's [`PatchStats`].

mod attrs;
mod children;
mod lis;
mod mount;
mod patch;

use crate::config::ReconcilerConfig;
use crate::error::RenderError;
use crate::host::HostRenderer;
use crate::stats::PatchStats;
use crate::vnode::VNode;

/// Result of a reconciler pass over host `H`
pub(crate) type PatchResult<H> = Result<(), RenderError<<H as HostRenderer>::Error>>;

pub(crate) struct Reconciler<'a, H: HostRenderer> {
    host: &'a mut H,
    config: &'a ReconcilerConfig,
    stats: &'a mut PatchStats,
}

impl<'a, H: HostRenderer> Reconciler<'a, H> {
    pub(crate) fn new(host: &'a mut H, config: &'a ReconcilerConfig, stats: &'a mut PatchStats) -> Self {
        Self { host, config, stats }
    }

    /// Attach `node` before `anchor`, or append it when there is none
    fn place(&mut self, parent: &H::Node, node: &H::Node, anchor: Option<&H::Node>) -> PatchResult<H> {
        match anchor {
            Some(anchor) => self.host.insert_before(parent, node, anchor)?,
            None => self.host.append_child(parent, node)?,
        }
        Ok(())
    }

    /// Detach the host node of a prior child
    fn remove(&mut self, parent: &H::Node, prior: &VNode<H::Node>) -> PatchResult<H> {
        let node = Self::node_of(prior)?;
        tracing::trace!("Removing {} {:?}", prior.describe(), node);
        self.host.remove_child(parent, node)?;
        self.stats.nodes_removed += 1;
        Ok(())
    }

    /// Realized host node of a VNode that must already be mounted
    fn node_of(vnode: &VNode<H::Node>) -> Result<&H::Node, RenderError<H::Error>> {
        vnode.realized.as_ref().ok_or_else(|| RenderError::Unrealized(vnode.describe()))
    }
}
