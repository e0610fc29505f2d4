//! Render entry point
//!
//! A [`Renderer`] owns the host and remembers, per container, the tree it
//! rendered last. The first render of a container mounts; later renders patch
//! against the remembered tree.

use std::collections::HashMap;

use crate::config::ReconcilerConfig;
use crate::error::RenderError;
use crate::host::HostRenderer;
use crate::reconcile::Reconciler;
use crate::stats::PatchStats;
use crate::validate::validate;
use crate::vnode::VNode;

/// Renders VNode trees into containers of a host tree
pub struct Renderer<H: HostRenderer> {
    host: H,
    config: ReconcilerConfig,
    /// Last successfully rendered tree of each container
    roots: HashMap<H::Node, VNode<H::Node>>,
    last_stats: PatchStats,
}

impl<H: HostRenderer> Renderer<H> {
    /// Create a renderer with the default configuration
    pub fn new(host: H) -> Self {
        Self::with_config(host, ReconcilerConfig::default())
    }

    pub fn with_config(host: H, config: ReconcilerConfig) -> Self {
        Self {
            host,
            config,
            roots: HashMap::new(),
            last_stats: PatchStats::default(),
        }
    }

    /// Render `tree` into `container`.
    ///
    /// An invalid tree is rejected before any host call and the container
    /// keeps its previous tree. A host failure leaves the host partially
    /// patched and the container is forgotten: any root of the failed render
    /// still attached to the container is detached, so the next render mounts
    /// from scratch into an empty slot.
    pub fn render(&mut self, mut tree: VNode<H::Node>, container: &H::Node) -> Result<(), RenderError<H::Error>> {
        self.last_stats = PatchStats::default();

        if self.config.validate {
            if let Err(err) = validate(&tree, self.config.event_prefix) {
                tracing::warn!("Rejected tree for container {:?}: {}", container, err);
                return Err(RenderError::Invalid(err));
            }
        }

        let prior = self.roots.remove(container);
        let mut stats = PatchStats::default();
        let result = {
            let mut reconciler = Reconciler::new(&mut self.host, &self.config, &mut stats);
            match &prior {
                None => reconciler.mount(&mut tree, container, None),
                Some(prior) => reconciler.patch(prior, &mut tree, container),
            }
        };
        self.last_stats = stats;

        match result {
            Ok(()) => {
                tracing::debug!(
                    "{} {:?}: {} created, {} removed, {} moved, {} reused, {} host mutations",
                    if prior.is_some() { "Patched" } else { "Mounted" },
                    container,
                    stats.nodes_created,
                    stats.nodes_removed,
                    stats.nodes_moved,
                    stats.nodes_reused,
                    stats.host_mutations(),
                );
                self.roots.insert(container.clone(), tree);
                Ok(())
            }
            Err(err) => {
                tracing::warn!("Render into {:?} failed, prior tree dropped: {}", container, err);
                let roots = [tree.realized(), prior.as_ref().and_then(VNode::realized)];
                self.detach_stale_roots(container, &roots);
                Err(err)
            }
        }
    }

    /// Best-effort removal of `roots` that are still children of `container`
    fn detach_stale_roots(&mut self, container: &H::Node, roots: &[Option<&H::Node>]) {
        let mut stale = Vec::new();
        let mut child = self.host.first_child(container);
        while let Some(node) = child {
            child = self.host.next_sibling(&node);
            if roots.iter().flatten().any(|root| **root == node) {
                stale.push(node);
            }
        }
        for node in stale {
            match self.host.remove_child(container, &node) {
                Ok(()) => tracing::debug!("Detached stale root {:?} from {:?}", node, container),
                Err(err) => tracing::warn!("Could not detach stale root {:?} from {:?}: {}", node, container, err),
            }
        }
    }

    /// Remove the rendered tree of `container` from the host.
    ///
    /// Returns `false` when nothing was rendered there.
    pub fn unmount(&mut self, container: &H::Node) -> Result<bool, RenderError<H::Error>> {
        let Some(tree) = self.roots.remove(container) else {
            return Ok(false);
        };
        let node = tree.realized().ok_or_else(|| RenderError::Unrealized(tree.describe()))?;
        self.host.remove_child(container, node)?;
        tracing::debug!("Unmounted {} from {:?}", tree.describe(), container);
        Ok(true)
    }

    /// Tree last rendered into `container`
    pub fn rendered(&self, container: &H::Node) -> Option<&VNode<H::Node>> {
        self.roots.get(container)
    }

    pub fn is_mounted(&self, container: &H::Node) -> bool {
        self.roots.contains_key(container)
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Direct host access. Mutating nodes owned by a rendered tree breaks
    /// the next patch of that container.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    pub fn config(&self) -> &ReconcilerConfig {
        &self.config
    }

    /// Statistics of the most recent render call
    pub fn last_stats(&self) -> PatchStats {
        self.last_stats
    }
}
