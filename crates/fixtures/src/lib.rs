//! Tenant seed datasets and the seeding pipeline that loads them.

pub mod activation;
pub mod dataset;
pub mod datasets;
pub mod error;
pub mod graph;
pub mod ids;
pub mod report;
pub mod seeder;

pub use activation::{should_seed, ActivationRule};
pub use dataset::{CatalogueSeed, Dataset, GroupSeed, OfferSeed, OrgRef, PriceSeed, ProductSeed};
pub use error::{EntityRef, ErrorCategory, SeedError, SeedFailure};
pub use graph::CatalogueGraph;
pub use ids::IdTable;
pub use report::{DatasetOutcome, DatasetStatus, SeedCounts, SeedReport};
pub use seeder::CatalogueSeeder;
