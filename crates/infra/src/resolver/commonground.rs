//! Common Ground style URL canonicalization.
//!
//! A reference `(wrc, organizations, 4d1e…)` resolves to
//! `<wrc location>/organizations/4d1e…`. Component locations come from
//! configuration; components without an explicit location fall back to
//! `https://<component>.<domain>` when a domain is configured.

use std::collections::BTreeMap;

use url::Url;

use super::{OrganizationResolver, ResolveError};
use crate::config::SeedConfig;

#[derive(Debug, Clone, Default)]
pub struct CommonGroundResolver {
    locations: BTreeMap<String, Url>,
    domain: Option<String>,
}

impl CommonGroundResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a resolver from the configured component locations and domain.
    pub fn from_config(config: &SeedConfig) -> Result<Self, ResolveError> {
        let mut resolver = Self {
            locations: BTreeMap::new(),
            domain: config.domain.clone(),
        };
        for (component, location) in &config.components {
            resolver = resolver.with_location(component, location)?;
        }
        Ok(resolver)
    }

    pub fn with_location(mut self, component: &str, location: &str) -> Result<Self, ResolveError> {
        let url = Url::parse(location).map_err(|e| ResolveError::InvalidLocation {
            component: component.to_string(),
            reason: e.to_string(),
        })?;
        if url.cannot_be_a_base() {
            return Err(ResolveError::InvalidLocation {
                component: component.to_string(),
                reason: "not a base URL".to_string(),
            });
        }
        self.locations.insert(component.to_ascii_lowercase(), url);
        Ok(self)
    }

    fn location(&self, component: &str) -> Result<Url, ResolveError> {
        let key = component.to_ascii_lowercase();
        if let Some(url) = self.locations.get(&key) {
            return Ok(url.clone());
        }
        let domain = self
            .domain
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .ok_or_else(|| ResolveError::UnknownComponent(component.to_string()))?;
        Url::parse(&format!("https://{key}.{domain}")).map_err(|e| ResolveError::InvalidLocation {
            component: component.to_string(),
            reason: e.to_string(),
        })
    }
}

fn segment<'a>(name: &str, value: &'a str) -> Result<&'a str, ResolveError> {
    let value = value.trim();
    if value.is_empty() || value.contains('/') {
        return Err(ResolveError::InvalidReference(format!("{name} `{value}` is not a path segment")));
    }
    Ok(value)
}

impl OrganizationResolver for CommonGroundResolver {
    fn resolve_organization(&self, component: &str, resource: &str, id: &str) -> Result<String, ResolveError> {
        let resource = segment("resource", resource)?;
        let id = segment("id", id)?;
        let mut url = self.location(segment("component", component)?)?;

        url.path_segments_mut()
            .map_err(|_| ResolveError::InvalidLocation {
                component: component.to_string(),
                reason: "not a base URL".to_string(),
            })?
            .pop_if_empty()
            .push(resource)
            .push(id);

        tracing::debug!(component, resource, id, resolved = %url, "resolved organization");
        Ok(url.to_string())
    }
}
