//! Attribute patching
//!
//! Values equal to their prior value issue no host call, so re-rendering an
//! identical tree leaves the host untouched.

use super::{PatchResult, Reconciler};
use crate::attributes::{AttrSlot, AttrValue, Attributes, StyleMap};
use crate::host::HostRenderer;

impl<H: HostRenderer> Reconciler<'_, H> {
    /// Apply the difference between two attribute maps. An absent map is
    /// treated as empty, so every prior attribute is removed.
    pub(super) fn patch_attributes(&mut self, node: &H::Node, prior: Option<&Attributes>, next: Option<&Attributes>) -> PatchResult<H> {
        if let Some(next) = next {
            for (name, value) in next.iter() {
                let old = prior.and_then(|prior| prior.get(name));
                self.patch_attribute(node, name, old, Some(value))?;
            }
        }
        if let Some(prior) = prior {
            for (name, value) in prior.iter() {
                if !next.is_some_and(|next| next.contains(name)) {
                    self.patch_attribute(node, name, Some(value), None)?;
                }
            }
        }
        Ok(())
    }

    fn patch_attribute(&mut self, node: &H::Node, name: &str, prior: Option<&AttrValue>, next: Option<&AttrValue>) -> PatchResult<H> {
        if prior == next {
            return Ok(());
        }

        match AttrSlot::classify(name, self.config.event_prefix) {
            AttrSlot::Style => {
                self.patch_style(node, prior.and_then(AttrValue::as_style), next.and_then(AttrValue::as_style))?;
            }
            AttrSlot::Class => {
                self.host.set_class(node, next.and_then(AttrValue::as_text))?;
                self.stats.attribute_writes += 1;
            }
            AttrSlot::Event(event_type) => {
                if let Some(listener) = prior.and_then(AttrValue::as_listener) {
                    self.host.remove_event_listener(node, event_type, listener)?;
                    self.stats.listeners_removed += 1;
                }
                if let Some(listener) = next.and_then(AttrValue::as_listener) {
                    self.host.add_event_listener(node, event_type, listener)?;
                    self.stats.listeners_added += 1;
                }
            }
            AttrSlot::Plain => {
                self.host.set_attribute(node, name, next.and_then(AttrValue::as_text))?;
                self.stats.attribute_writes += 1;
            }
        }
        Ok(())
    }

    fn patch_style(&mut self, node: &H::Node, prior: Option<&StyleMap>, next: Option<&StyleMap>) -> PatchResult<H> {
        if let Some(next) = next {
            for (property, value) in next {
                if prior.and_then(|prior| prior.get(property)) != Some(value) {
                    self.host.set_style_property(node, property, Some(value.as_str()))?;
                    self.stats.attribute_writes += 1;
                }
            }
        }
        if let Some(prior) = prior {
            for property in prior.keys() {
                if !next.is_some_and(|next| next.contains_key(property)) {
                    self.host.set_style_property(node, property, None)?;
                    self.stats.attribute_writes += 1;
                }
            }
        }
        Ok(())
    }
}
