//! Seeding errors.

use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use pdc_core::{DomainError, EntityKind};
use pdc_infra::{ResolveError, StoreError};

/// Failure classes reported to the caller of a seed run.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCategory {
    Validation,
    ResolutionFailure,
    PersistenceConflict,
    PersistenceUnavailable,
}

impl core::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            ErrorCategory::Validation => "validation",
            ErrorCategory::ResolutionFailure => "resolution failure",
            ErrorCategory::PersistenceConflict => "persistence conflict",
            ErrorCategory::PersistenceUnavailable => "persistence unavailable",
        })
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SeedError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl SeedError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SeedError::Domain(_) => ErrorCategory::Validation,
            SeedError::Resolve(_) => ErrorCategory::ResolutionFailure,
            SeedError::Store(e) if e.is_conflict() => ErrorCategory::PersistenceConflict,
            SeedError::Store(_) => ErrorCategory::PersistenceUnavailable,
        }
    }
}

/// The seed entry a failure is attributed to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityRef {
    pub kind: EntityKind,
    pub key: &'static str,
    pub id: Option<Uuid>,
}

impl core::fmt::Display for EntityRef {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} `{}`", self.kind, self.key)?;
        if let Some(id) = self.id {
            write!(f, " ({id})")?;
        }
        Ok(())
    }
}

/// A failed dataset run: which dataset, at which entry, and why.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("seeding `{dataset}` failed{} [{}]: {source}", location(.entity), .source.category())]
pub struct SeedFailure {
    pub dataset: &'static str,
    pub entity: Option<EntityRef>,
    #[source]
    pub source: SeedError,
}

impl SeedFailure {
    pub fn new(dataset: &'static str, entity: Option<EntityRef>, source: impl Into<SeedError>) -> Self {
        Self {
            dataset,
            entity,
            source: source.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        self.source.category()
    }
}

fn location(entity: &Option<EntityRef>) -> String {
    entity
        .as_ref()
        .map(|e| format!(" at {e}"))
        .unwrap_or_default()
}
