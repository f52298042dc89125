use std::collections::BTreeMap;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use pdc_core::EntityKind;

use super::r#trait::{CatalogueStore, Record, RecordKey, StoreError};

/// What an insert does when its identifier is already committed.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Fail the commit with [`StoreError::Duplicate`].
    #[default]
    Reject,
    /// Replace the committed record.
    Upsert,
}

#[derive(Debug, Clone)]
enum Staged {
    Insert(Record),
    Update(Record),
}

#[derive(Debug, Default)]
struct State {
    committed: BTreeMap<RecordKey, Record>,
    staged: BTreeMap<RecordKey, Staged>,
}

/// In-memory catalogue store.
///
/// Intended for tests/dev and the seeding binary. Not optimized for performance.
#[derive(Debug, Default)]
pub struct InMemoryCatalogueStore {
    state: RwLock<State>,
    policy: DuplicatePolicy,
}

impl InMemoryCatalogueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: DuplicatePolicy) -> Self {
        Self {
            state: RwLock::new(State::default()),
            policy,
        }
    }

    /// Number of committed records.
    pub fn len(&self) -> Result<usize, StoreError> {
        let state = self.state.read().map_err(|_| Self::poisoned())?;
        Ok(state.committed.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }

    fn poisoned() -> StoreError {
        StoreError::Unavailable("lock poisoned".to_string())
    }
}

impl CatalogueStore for InMemoryCatalogueStore {
    fn create(&self, record: Record) -> Result<(), StoreError> {
        let mut state = self.state.write().map_err(|_| Self::poisoned())?;
        state.staged.insert(record.key(), Staged::Insert(record));
        Ok(())
    }

    fn update(&self, record: Record) -> Result<(), StoreError> {
        let mut state = self.state.write().map_err(|_| Self::poisoned())?;
        let key = record.key();
        // Updating a record inserted in this same batch keeps it an insert.
        let staged = match state.staged.get(&key) {
            Some(Staged::Insert(_)) => Staged::Insert(record),
            _ => Staged::Update(record),
        };
        state.staged.insert(key, staged);
        Ok(())
    }

    fn find(&self, key: RecordKey) -> Result<Option<Record>, StoreError> {
        let state = self.state.read().map_err(|_| Self::poisoned())?;
        Ok(state.committed.get(&key).cloned())
    }

    fn list(&self, kind: EntityKind) -> Result<Vec<Record>, StoreError> {
        let state = self.state.read().map_err(|_| Self::poisoned())?;
        Ok(state
            .committed
            .iter()
            .filter(|(k, _)| k.kind == kind)
            .map(|(_, r)| r.clone())
            .collect())
    }

    fn commit(&self) -> Result<usize, StoreError> {
        let mut state = self.state.write().map_err(|_| Self::poisoned())?;
        let staged = std::mem::take(&mut state.staged);

        // Check the whole batch before touching committed state.
        for (key, write) in &staged {
            let exists = state.committed.contains_key(key);
            match write {
                Staged::Insert(_) if exists && self.policy == DuplicatePolicy::Reject => {
                    return Err(StoreError::Duplicate(*key));
                }
                Staged::Update(_) if !exists => return Err(StoreError::Missing(*key)),
                _ => {}
            }
        }

        let written = staged.len();
        for (key, write) in staged {
            let record = match write {
                Staged::Insert(r) | Staged::Update(r) => r,
            };
            state.committed.insert(key, record);
        }
        tracing::debug!(written, "committed batch");
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{Persistable, StoreExt};
    use pdc_catalogue::{Catalogue, Group};
    use pdc_core::{CatalogueId, Entity, GroupId};

    fn catalogue() -> Catalogue {
        Catalogue::new("Gemeente Zuid Drecht", "0000").unwrap()
    }

    #[test]
    fn staged_writes_are_invisible_until_commit() {
        let store = InMemoryCatalogueStore::new();
        let id = store.create_entity(catalogue()).unwrap();
        assert!(store.find_by_id::<Catalogue>(id).unwrap().is_none());

        assert_eq!(store.commit().unwrap(), 1);
        let found = store.find_by_id::<Catalogue>(id).unwrap().unwrap();
        assert_eq!(found.name(), "Gemeente Zuid Drecht");
    }

    #[test]
    fn fixed_identifier_is_stable_after_commit() {
        let store = InMemoryCatalogueStore::new();
        let fixed: GroupId = "bbc03703-27b5-442a-9b20-57dfff95be9b".parse().unwrap();
        let group = Group::new("Diensten", "0000", CatalogueId::new()).unwrap();
        store.create_with_id(group, fixed).unwrap();
        store.commit().unwrap();

        let found: Group = store.find_by_id(fixed).unwrap().unwrap();
        assert_eq!(*found.id(), fixed);
    }

    #[test]
    fn reject_policy_surfaces_duplicates_at_commit() {
        let store = InMemoryCatalogueStore::with_policy(DuplicatePolicy::Reject);
        let c = catalogue();
        store.create_entity(c.clone()).unwrap();
        store.commit().unwrap();

        store.create_entity(c.clone()).unwrap();
        let err = store.commit().unwrap_err();
        assert_eq!(err, StoreError::Duplicate(c.record_key()));
        assert!(err.is_conflict());
    }

    #[test]
    fn failed_commit_discards_the_whole_batch() {
        let store = InMemoryCatalogueStore::new();
        let c = catalogue();
        store.create_entity(c.clone()).unwrap();
        store.commit().unwrap();

        let other = store.create_entity(catalogue()).unwrap();
        store.create_entity(c).unwrap();
        assert!(store.commit().is_err());
        assert!(store.find_by_id::<Catalogue>(other).unwrap().is_none());
        assert_eq!(store.len().unwrap(), 1);
        assert_eq!(store.commit().unwrap(), 0);
    }

    #[test]
    fn upsert_policy_replaces_committed_record() {
        let store = InMemoryCatalogueStore::with_policy(DuplicatePolicy::Upsert);
        let mut c = catalogue();
        let id = store.create_entity(c.clone()).unwrap();
        store.commit().unwrap();

        c.set_name("Gemeente Zuid-Drecht").unwrap();
        store.create_entity(c).unwrap();
        store.commit().unwrap();
        assert_eq!(store.len().unwrap(), 1);
        assert_eq!(store.find_by_id::<Catalogue>(id).unwrap().unwrap().name(), "Gemeente Zuid-Drecht");
    }

    #[test]
    fn later_write_in_one_batch_wins() {
        let store = InMemoryCatalogueStore::new();
        let mut c = catalogue();
        let id = store.create_entity(c.clone()).unwrap();
        c.set_name("Tweede versie").unwrap();
        store.create_entity(c).unwrap();
        assert_eq!(store.commit().unwrap(), 1);
        assert_eq!(store.find_by_id::<Catalogue>(id).unwrap().unwrap().name(), "Tweede versie");
    }

    #[test]
    fn update_requires_committed_record() {
        let store = InMemoryCatalogueStore::new();
        let c = catalogue();
        store.update_entity(c.clone()).unwrap();
        assert_eq!(store.commit().unwrap_err(), StoreError::Missing(c.record_key()));
    }

    #[test]
    fn update_of_record_created_in_same_batch_is_an_insert() {
        let store = InMemoryCatalogueStore::new();
        let mut c = catalogue();
        store.create_entity(c.clone()).unwrap();
        c.set_description(Some("De catalogus".into())).unwrap();
        store.update_entity(c.clone()).unwrap();
        store.commit().unwrap();
        assert_eq!(store.find_by_id::<Catalogue>(*c.id()).unwrap().unwrap().description(), Some("De catalogus"));
    }

    #[test]
    fn poisoned_lock_is_reported_not_hidden() {
        let store = InMemoryCatalogueStore::new();
        let _ = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = store.state.write().unwrap();
            panic!("writer died");
        }));

        assert!(matches!(store.len(), Err(StoreError::Unavailable(_))));
        assert!(store.is_empty().is_err());
        assert!(store.commit().is_err());
    }

    #[test]
    fn records_deserialize_only_when_valid() {
        let record = catalogue().into_record();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["kind"], "catalogue");
        assert_eq!(serde_json::from_value::<Record>(json.clone()).unwrap(), record);

        let mut blank = json;
        blank["name"] = "  ".into();
        assert!(serde_json::from_value::<Record>(blank).is_err());
    }

    #[test]
    fn list_filters_by_kind_and_find_checks_kind() {
        let store = InMemoryCatalogueStore::new();
        let cat = store.create_entity(catalogue()).unwrap();
        store
            .create_entity(Group::new("Diensten", "0000", cat).unwrap())
            .unwrap();
        store.commit().unwrap();

        assert_eq!(store.list_all::<Catalogue>().unwrap().len(), 1);
        assert_eq!(store.list_all::<Group>().unwrap().len(), 1);
        // Same UUID under another kind is a different key.
        assert!(store.find_by_id::<Group>(GroupId::from_uuid(*cat.as_uuid())).unwrap().is_none());
    }
}
