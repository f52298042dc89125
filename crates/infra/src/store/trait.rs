use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use pdc_catalogue::{Catalogue, Group, Offer, Product};
use pdc_core::{CatalogueId, Entity, EntityKind, GroupId, OfferId, ProductId};

/// Store key: entity kind + identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RecordKey {
    pub kind: EntityKind,
    pub id: Uuid,
}

impl RecordKey {
    pub fn new(kind: EntityKind, id: impl Into<Uuid>) -> Self {
        Self {
            kind,
            id: id.into(),
        }
    }
}

impl core::fmt::Display for RecordKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}", self.kind, self.id)
    }
}

/// One stored entity of any kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Record {
    Catalogue(Catalogue),
    Group(Group),
    Product(Product),
    Offer(Offer),
}

impl Record {
    pub fn kind(&self) -> EntityKind {
        match self {
            Record::Catalogue(_) => EntityKind::Catalogue,
            Record::Group(_) => EntityKind::Group,
            Record::Product(_) => EntityKind::Product,
            Record::Offer(_) => EntityKind::Offer,
        }
    }

    pub fn key(&self) -> RecordKey {
        match self {
            Record::Catalogue(e) => e.record_key(),
            Record::Group(e) => e.record_key(),
            Record::Product(e) => e.record_key(),
            Record::Offer(e) => e.record_key(),
        }
    }
}

/// Entities that can travel through a [`CatalogueStore`].
pub trait Persistable: Entity + Clone {
    fn key_of(id: Self::Id) -> RecordKey;

    fn into_record(self) -> Record;

    /// `None` when the record holds a different kind.
    fn from_record(record: Record) -> Option<Self>;

    fn record_key(&self) -> RecordKey {
        Self::key_of(*self.id())
    }

    /// Merges relation sets from the committed version of this entity before it
    /// is written again. No-op for kinds without relations.
    fn carry_relations(&mut self, _committed: &Self) {}
}

macro_rules! impl_persistable {
    ($entity:ident, $id:ty $(, $carry:ident)?) => {
        impl Persistable for $entity {
            fn key_of(id: $id) -> RecordKey {
                RecordKey::new(<$entity as Entity>::KIND, id)
            }

            fn into_record(self) -> Record {
                Record::$entity(self)
            }

            fn from_record(record: Record) -> Option<Self> {
                match record {
                    Record::$entity(e) => Some(e),
                    _ => None,
                }
            }

            $(
                fn carry_relations(&mut self, committed: &Self) {
                    $entity::$carry(self, committed);
                }
            )?
        }
    };
}

impl_persistable!(Catalogue, CatalogueId);
impl_persistable!(Group, GroupId, carry_relations);
impl_persistable!(Product, ProductId, carry_relations);
impl_persistable!(Offer, OfferId, carry_relations);

/// Persistence gateway error.
///
/// Infrastructure failures, as opposed to domain errors (validation). Staged
/// writes are checked at `commit()`, so duplicates surface there.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// An insert targeted an identifier that is already committed.
    #[error("duplicate identifier: {0} already exists")]
    Duplicate(RecordKey),

    /// An update targeted an identifier that was never committed.
    #[error("no committed record for {0}")]
    Missing(RecordKey),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    /// Duplicate keys and dangling updates are constraint violations; the rest
    /// means the store could not be reached.
    pub fn is_conflict(&self) -> bool {
        matches!(self, StoreError::Duplicate(_) | StoreError::Missing(_))
    }
}

/// Unit-of-work style store for catalogue entities.
///
/// ## Semantics
///
/// - `create`/`update` only **stage** a write; nothing is visible to `find`
///   until `commit()` succeeds.
/// - Within one uncommitted batch the later write for an identifier wins.
/// - `commit()` applies the whole batch or none of it. A failed commit discards
///   the batch.
/// - After a successful `commit()`, `find` for a just-written identifier
///   returns the fully populated record, and that identifier never changes.
pub trait CatalogueStore: Send + Sync {
    /// Stage a new record.
    fn create(&self, record: Record) -> Result<(), StoreError>;

    /// Stage a replacement for an already committed record.
    fn update(&self, record: Record) -> Result<(), StoreError>;

    /// Look up a committed record.
    fn find(&self, key: RecordKey) -> Result<Option<Record>, StoreError>;

    /// All committed records of one kind, ordered by identifier.
    fn list(&self, kind: EntityKind) -> Result<Vec<Record>, StoreError>;

    /// Flush staged writes. Returns the number of records written.
    fn commit(&self) -> Result<usize, StoreError>;
}

impl<S> CatalogueStore for Arc<S>
where
    S: CatalogueStore + ?Sized,
{
    fn create(&self, record: Record) -> Result<(), StoreError> {
        (**self).create(record)
    }

    fn update(&self, record: Record) -> Result<(), StoreError> {
        (**self).update(record)
    }

    fn find(&self, key: RecordKey) -> Result<Option<Record>, StoreError> {
        (**self).find(key)
    }

    fn list(&self, kind: EntityKind) -> Result<Vec<Record>, StoreError> {
        (**self).list(kind)
    }

    fn commit(&self) -> Result<usize, StoreError> {
        (**self).commit()
    }
}

/// Typed helpers over [`CatalogueStore`].
pub trait StoreExt: CatalogueStore {
    /// Stage an entity under the identifier it already carries.
    fn create_entity<E: Persistable>(&self, entity: E) -> Result<E::Id, StoreError> {
        let id = *entity.id();
        self.create(entity.into_record())?;
        Ok(id)
    }

    /// Assign a fixed identifier, then stage the entity.
    fn create_with_id<E: Persistable>(&self, mut entity: E, id: E::Id) -> Result<E::Id, StoreError> {
        entity.assign_id(id);
        self.create_entity(entity)
    }

    fn update_entity<E: Persistable>(&self, entity: E) -> Result<(), StoreError> {
        self.update(entity.into_record())
    }

    fn find_by_id<E: Persistable>(&self, id: E::Id) -> Result<Option<E>, StoreError> {
        Ok(self.find(E::key_of(id))?.and_then(E::from_record))
    }

    fn list_all<E: Persistable>(&self) -> Result<Vec<E>, StoreError> {
        Ok(self
            .list(E::KIND)?
            .into_iter()
            .filter_map(E::from_record)
            .collect())
    }
}

impl<S: CatalogueStore + ?Sized> StoreExt for S {}
