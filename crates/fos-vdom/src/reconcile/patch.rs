//! Dispatch between in-place update and wholesale replacement

use super::{PatchResult, Reconciler};
use crate::error::RenderError;
use crate::host::HostRenderer;
use crate::vnode::{Content, VNode};

impl<H: HostRenderer> Reconciler<'_, H> {
    /// Bring the host node of `prior` in line with `next`.
    ///
    /// Same kind (and same tag for elements) updates in place and carries the
    /// host node over; anything else replaces it at the same position.
    pub(crate) fn patch(&mut self, prior: &VNode<H::Node>, next: &mut VNode<H::Node>, parent: &H::Node) -> PatchResult<H> {
        for side in [&*prior, &*next] {
            if let Content::Component(component) = &side.content {
                return Err(RenderError::UnresolvedComponent { name: component.name.clone() });
            }
        }
        if !same_identity(prior, next) {
            return self.replace(prior, next, parent);
        }

        let node = Self::node_of(prior)?.clone();
        next.realized = Some(node.clone());
        self.stats.nodes_reused += 1;

        match (&prior.content, &mut next.content) {
            (Content::Text(old), Content::Text(new)) => {
                if old != new {
                    self.host.set_text(&node, new)?;
                    self.stats.text_updates += 1;
                }
                Ok(())
            }
            (Content::Element(old), Content::Element(new)) => {
                self.patch_attributes(&node, old.attrs.as_ref(), new.attrs.as_ref())?;
                self.patch_children(&node, &old.children, &mut new.children)
            }
            _ => Ok(()),
        }
    }

    fn replace(&mut self, prior: &VNode<H::Node>, next: &mut VNode<H::Node>, parent: &H::Node) -> PatchResult<H> {
        let anchor = self.host.next_sibling(Self::node_of(prior)?);
        tracing::trace!("Replacing {} with {}", prior.describe(), next.describe());

        self.remove(parent, prior)?;
        self.stats.nodes_replaced += 1;
        self.mount(next, parent, anchor.as_ref())
    }
}

/// Whether `next` can reuse the host node of `prior`
fn same_identity<N>(prior: &VNode<N>, next: &VNode<N>) -> bool {
    match (&prior.content, &next.content) {
        (Content::Text(_), Content::Text(_)) => true,
        (Content::Element(a), Content::Element(b)) => a.tag == b.tag,
        _ => false,
    }
}
