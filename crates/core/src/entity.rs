//! Entity trait: identity + continuity across state changes.

use serde::{Deserialize, Serialize};

/// The four entity kinds of the catalogue graph.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Catalogue,
    Group,
    Product,
    Offer,
}

impl EntityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Catalogue => "catalogue",
            EntityKind::Group => "group",
            EntityKind::Product => "product",
            EntityKind::Offer => "offer",
        }
    }
}

impl core::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug + core::fmt::Display;

    /// Kind tag used by stores and error reports.
    const KIND: EntityKind;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Replaces the identifier (fixed identifiers are assigned before the first write).
    fn assign_id(&mut self, id: Self::Id);
}
