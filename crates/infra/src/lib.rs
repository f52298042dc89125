//! Infrastructure layer: persistence gateway, identifier resolution, config.

pub mod config;
pub mod resolver;
pub mod store;

pub use config::{ConfigError, SeedConfig};
pub use resolver::{CommonGroundResolver, OrganizationResolver, ResolveError};
pub use store::{
    CatalogueStore, DuplicatePolicy, InMemoryCatalogueStore, Persistable, Record, RecordKey, StoreError,
    StoreExt,
};
