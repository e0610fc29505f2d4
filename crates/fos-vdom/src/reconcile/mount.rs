//! Mounting: the only path that creates host nodes

use super::{PatchResult, Reconciler};
use crate::error::RenderError;
use crate::host::HostRenderer;
use crate::vnode::{Content, VNode};

impl<H: HostRenderer> Reconciler<'_, H> {
    /// Create host nodes for `vnode` and its subtree, then insert the root
    /// before `anchor` (appended when `None`).
    pub(crate) fn mount(&mut self, vnode: &mut VNode<H::Node>, parent: &H::Node, anchor: Option<&H::Node>) -> PatchResult<H> {
        let node = self.create(vnode)?;
        self.place(parent, &node, anchor)
    }

    fn create(&mut self, vnode: &mut VNode<H::Node>) -> Result<H::Node, RenderError<H::Error>> {
        let node = match &mut vnode.content {
            Content::Text(text) => self.host.create_text_node(text)?,
            Content::Component(component) => {
                return Err(RenderError::UnresolvedComponent { name: component.name.clone() });
            }
            Content::Element(element) => {
                let node = self.host.create_element(&element.tag)?;
                self.patch_attributes(&node, None, element.attrs.as_ref())?;
                for child in element.children.iter_mut() {
                    let child_node = self.create(child)?;
                    self.host.append_child(&node, &child_node)?;
                }
                node
            }
        };

        self.stats.nodes_created += 1;
        tracing::trace!("Mounted {} as {:?}", vnode.describe(), node);
        vnode.realized = Some(node.clone());
        Ok(node)
    }
}
