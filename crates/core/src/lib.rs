//! `pdc-core`: domain foundation building blocks for the product catalogue.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::{Entity, EntityKind};
pub use error::{DomainError, DomainResult};
pub use id::{CatalogueId, GroupId, OfferId, ProductId};
pub use value_object::ValueObject;
