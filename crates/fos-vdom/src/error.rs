//! Render errors

use crate::validate::ValidationError;

/// Error returned by [`Renderer::render`](crate::Renderer::render).
///
/// `E` is the host renderer's error type.
#[derive(Debug, thiserror::Error)]
pub enum RenderError<E: std::error::Error + 'static> {
    /// A host operation failed; the host tree may be partially patched
    #[error("Host renderer error: {0}")]
    Host(#[from] E),

    /// The tree was rejected before any host mutation
    #[error("Invalid tree: {0}")]
    Invalid(#[source] ValidationError),

    /// A component placeholder reached the reconciler
    #[error("Component `{name}` must be resolved before rendering")]
    UnresolvedComponent { name: String },

    /// A prior node without a host node; the prior tree is corrupt
    #[error("{0} has no realized host node")]
    Unrealized(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use fos_dom::{DomError, NodeId};
    use std::error::Error;

    #[test]
    fn test_host_error_source() {
        let err: RenderError<DomError> = DomError::NotFound(NodeId::ROOT).into();
        assert!(matches!(err, RenderError::Host(DomError::NotFound(_))));
        assert!(err.source().is_some());
        assert_eq!(err.to_string(), "Host renderer error: Node not found: #0");
    }

    #[test]
    fn test_invalid_message() {
        let err: RenderError<DomError> = RenderError::Invalid(ValidationError::UnresolvedComponent {
            name: "App".into(),
        });
        assert_eq!(
            err.to_string(),
            "Invalid tree: Component `App` must be resolved before reconciliation"
        );
    }
}
