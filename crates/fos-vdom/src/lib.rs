//! fOS VDOM - Virtual DOM reconciliation
//!
//! Describe the next UI state as a [`VNode`] tree and hand it to a
//! [`Renderer`]. The first render of a container mounts the tree; every later
//! render diffs it against the previous one and applies the minimal set of
//! mutations through a [`HostRenderer`], reusing host nodes whose identity
//! (kind, tag and key) survives.
//!
//! ```no_run
//! use fos_dom::DomTree;
//! use fos_vdom::{h, Attributes, Renderer};
//!
//! let mut dom = DomTree::new();
//! let container = dom.create_element("main");
//! dom.append_child(dom.root(), container).unwrap();
//!
//! let mut renderer = Renderer::new(dom);
//! let items = ["a", "b"].map(|k| h("li", Attributes::new().with("key", k), k));
//! renderer.render(h("ul", None, items), &container).unwrap();
//! ```

mod attributes;
mod builder;
mod config;
mod dom_host;
mod error;
mod host;
mod reconcile;
mod render;
mod stats;
mod validate;
mod vnode;

pub use attributes::{AttrValue, Attributes, StyleMap, style};
pub use builder::{IntoChildren, h, text};
pub use config::{MoveStrategy, ReconcilerConfig};
pub use error::RenderError;
pub use host::HostRenderer;
pub use render::Renderer;
pub use stats::PatchStats;
pub use validate::{ValidationError, validate};
pub use vnode::{Arity, Children, Component, ComponentKind, Content, Element, Key, VNode, VNodeKind};

/// Re-exported so callers can build listeners without depending on fos-dom
pub use fos_dom::{DomEvent, EventListener};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
