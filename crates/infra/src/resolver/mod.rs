//! Organization identifier resolution.
//!
//! Seed data names organizations symbolically (component, resource type, local
//! id); the resolver turns that into the canonical URI stored on entities.

pub mod commonground;

use thiserror::Error;

pub use commonground::CommonGroundResolver;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("no location known for component `{0}`")]
    UnknownComponent(String),

    #[error("invalid location for component `{component}`: {reason}")]
    InvalidLocation { component: String, reason: String },

    #[error("invalid reference: {0}")]
    InvalidReference(String),

    #[error("resolver unavailable: {0}")]
    Unavailable(String),
}

/// Blocking lookup of a canonical organization URI.
pub trait OrganizationResolver: Send + Sync {
    fn resolve_organization(&self, component: &str, resource: &str, id: &str) -> Result<String, ResolveError>;
}

impl<R> OrganizationResolver for std::sync::Arc<R>
where
    R: OrganizationResolver + ?Sized,
{
    fn resolve_organization(&self, component: &str, resource: &str, id: &str) -> Result<String, ResolveError> {
        (**self).resolve_organization(component, resource, id)
    }
}
