//! Summary of a seed run.

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetStatus {
    Seeded,
    /// The activation guard declined the dataset; nothing was written.
    Skipped,
}

/// Entities and relation pairs written for one dataset.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeedCounts {
    pub catalogues: usize,
    pub groups: usize,
    pub products: usize,
    pub offers: usize,
    pub group_links: usize,
    pub offer_links: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasetOutcome {
    pub dataset: &'static str,
    pub status: DatasetStatus,
    pub counts: SeedCounts,
}

impl DatasetOutcome {
    pub fn skipped(dataset: &'static str) -> Self {
        Self {
            dataset,
            status: DatasetStatus::Skipped,
            counts: SeedCounts::default(),
        }
    }

    pub fn seeded(dataset: &'static str, counts: SeedCounts) -> Self {
        Self {
            dataset,
            status: DatasetStatus::Seeded,
            counts,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub outcomes: Vec<DatasetOutcome>,
}

impl SeedReport {
    pub fn seeded(&self) -> impl Iterator<Item = &DatasetOutcome> {
        self.outcomes
            .iter()
            .filter(|o| o.status == DatasetStatus::Seeded)
    }

    pub fn outcome(&self, dataset: &str) -> Option<&DatasetOutcome> {
        self.outcomes.iter().find(|o| o.dataset == dataset)
    }
}
