//! Catalogue seeding pipeline.
//!
//! [`CatalogueSeeder`] loads one [`Dataset`] into a [`CatalogueStore`]:
//!
//! ```text
//! Dataset
//!   ↓
//! 0. Activation guard (skip = nothing written)
//!   ↓
//! 1. Pre-flight: keys, fixed identifiers, references
//!   ↓
//! 2. Plan: resolve organizations, construct + validate every entity
//!   ↓
//! 3. Catalogues   → commit → re-fetch
//! 4. Groups       → commit → re-fetch
//! 5. Products     → commit → re-fetch
//! 6. Offers       → commit → re-fetch → link to products → commit
//! 7. Group links  → commit
//! ```
//!
//! Steps 0-2 never write, so a validation or resolution failure leaves the
//! store untouched. From step 3 on every commit is final: a failure aborts the
//! remaining steps and earlier batches stay committed. There is no retry; the
//! caller re-runs the whole dataset, and what a re-run does with identifiers
//! that already exist is the store's [`DuplicatePolicy`] decision.
//!
//! Relations are only wired between re-fetched, committed instances.
//!
//! [`DuplicatePolicy`]: pdc_infra::DuplicatePolicy

use std::collections::{BTreeMap, BTreeSet};

use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use pdc_catalogue::{
    link_offer_to_product, link_product_to_group, Catalogue, Group, Money, Offer, Product,
};
use pdc_core::{CatalogueId, DomainError, DomainResult, GroupId, OfferId, ProductId};
use pdc_infra::{
    CatalogueStore, OrganizationResolver, Persistable, RecordKey, ResolveError, SeedConfig, StoreError, StoreExt,
};

use crate::activation::should_seed;
use crate::dataset::{CatalogueSeed, Dataset, GroupSeed, OfferSeed, OrgRef, PriceSeed, ProductSeed};
use crate::error::{EntityRef, SeedError, SeedFailure};
use crate::report::{DatasetOutcome, SeedCounts, SeedReport};

/// Loads datasets through a store and an organization resolver.
#[derive(Debug)]
pub struct CatalogueSeeder<'a, S: ?Sized, R: ?Sized> {
    store: &'a S,
    resolver: &'a R,
}

impl<'a, S, R> CatalogueSeeder<'a, S, R>
where
    S: CatalogueStore + ?Sized,
    R: OrganizationResolver + ?Sized,
{
    pub fn new(store: &'a S, resolver: &'a R) -> Self {
        Self { store, resolver }
    }

    /// Seeds `datasets` in order, stopping at the first failure.
    pub fn seed_all(&self, datasets: &[Dataset], config: &SeedConfig) -> Result<SeedReport, SeedFailure> {
        let started_at = Utc::now();
        let mut outcomes = Vec::with_capacity(datasets.len());
        for dataset in datasets {
            outcomes.push(self.seed(dataset, config)?);
        }
        Ok(SeedReport {
            started_at,
            finished_at: Utc::now(),
            outcomes,
        })
    }

    /// Seeds one dataset if its activation rule matches `config`.
    pub fn seed(&self, dataset: &Dataset, config: &SeedConfig) -> Result<DatasetOutcome, SeedFailure> {
        let span = tracing::info_span!("seed_dataset", dataset = dataset.name, domain = config.domain());
        let _guard = span.enter();

        if !should_seed(&dataset.activation, config) {
            info!("activation rule not met; skipping");
            return Ok(DatasetOutcome::skipped(dataset.name));
        }

        let result = self.plan(dataset).and_then(|plan| self.write(dataset, plan));
        match result {
            Ok(counts) => {
                info!(?counts, "dataset seeded");
                Ok(DatasetOutcome::seeded(dataset.name, counts))
            }
            Err(failure) => {
                warn!(category = %failure.category(), error = %failure, "dataset seeding failed");
                Err(failure)
            }
        }
    }

    fn plan(&self, dataset: &Dataset) -> Result<Plan, SeedFailure> {
        dataset
            .validate()
            .map_err(|e| SeedFailure::new(dataset.name, None, e))?;

        let mut orgs = OrgCache::new(self.resolver);
        let mut plan = Plan::default();

        for seed in &dataset.catalogues {
            let planned = plan_entry(dataset, &mut orgs, seed.key, &seed.organization, |org| {
                catalogue_from(seed, org)
            })?;
            plan.remember(&planned);
            plan.catalogues.push(planned);
        }

        for seed in &dataset.groups {
            let catalogue = CatalogueId::from_uuid(plan.id_of(dataset, seed.catalogue)?);
            let planned = plan_entry(dataset, &mut orgs, seed.key, &seed.organization, |org| {
                group_from(seed, org, catalogue)
            })?;
            plan.remember(&planned);
            plan.groups.push(planned);
        }

        for seed in &dataset.products {
            let catalogue = CatalogueId::from_uuid(plan.id_of(dataset, seed.catalogue)?);
            let planned = plan_entry(dataset, &mut orgs, seed.key, &seed.organization, |org| {
                product_from(seed, org, catalogue)
            })?;
            plan.remember(&planned);
            plan.products.push(planned);
        }

        for seed in &dataset.offers {
            let planned = plan_entry(dataset, &mut orgs, seed.key, &seed.offered_by, |org| offer_from(seed, org))?;
            plan.remember(&planned);
            plan.offers.push(planned);
        }

        for (offer, product) in dataset.offer_links() {
            let link = (
                OfferId::from_uuid(plan.id_of(dataset, offer)?),
                ProductId::from_uuid(plan.id_of(dataset, product)?),
            );
            plan.offer_links.push(link);
        }

        for (group, product) in dataset.group_links() {
            let link = (
                GroupId::from_uuid(plan.id_of(dataset, group)?),
                ProductId::from_uuid(plan.id_of(dataset, product)?),
            );
            plan.group_links.push(link);
        }

        debug!(
            catalogues = plan.catalogues.len(),
            groups = plan.groups.len(),
            products = plan.products.len(),
            offers = plan.offers.len(),
            "plan ready"
        );
        Ok(plan)
    }

    fn write(&self, dataset: &Dataset, plan: Plan) -> Result<SeedCounts, SeedFailure> {
        let catalogues = self.write_batch(dataset, &plan, &plan.catalogues)?;
        let mut groups = self.write_batch(dataset, &plan, &plan.groups)?;
        let mut products = self.write_batch(dataset, &plan, &plan.products)?;
        let mut offers = self.write_batch(dataset, &plan, &plan.offers)?;

        let mut touched_offers = BTreeSet::new();
        let mut touched_products = BTreeSet::new();
        for (offer_id, product_id) in &plan.offer_links {
            let offer = fetched_mut(dataset, &plan, &mut offers, *offer_id)?;
            let product = fetched_mut(dataset, &plan, &mut products, *product_id)?;
            if link_offer_to_product(offer, product) {
                touched_offers.insert(*offer_id);
                touched_products.insert(*product_id);
            }
        }
        self.write_updates(dataset, &plan, &offers, &touched_offers)?;
        self.write_updates(dataset, &plan, &products, &touched_products)?;
        self.commit(dataset, &plan, "offer links")?;

        let mut touched_groups = BTreeSet::new();
        touched_products.clear();
        for (group_id, product_id) in &plan.group_links {
            let group = fetched_mut(dataset, &plan, &mut groups, *group_id)?;
            let product = fetched_mut(dataset, &plan, &mut products, *product_id)?;
            if link_product_to_group(group, product) {
                touched_groups.insert(*group_id);
                touched_products.insert(*product_id);
            }
        }
        self.write_updates(dataset, &plan, &groups, &touched_groups)?;
        self.write_updates(dataset, &plan, &products, &touched_products)?;
        self.commit(dataset, &plan, "group links")?;

        Ok(SeedCounts {
            catalogues: catalogues.len(),
            groups: groups.len(),
            products: products.len(),
            offers: offers.len(),
            group_links: plan.group_links.len(),
            offer_links: plan.offer_links.len(),
        })
    }

    /// Stages every planned entity of one kind, commits, then reads each back.
    ///
    /// An entity that is already committed keeps its relation sets, so a
    /// re-run that fails before the link batches never leaves one-sided links.
    fn write_batch<E>(
        &self,
        dataset: &Dataset,
        plan: &Plan,
        planned: &[Planned<E>],
    ) -> Result<BTreeMap<E::Id, E>, SeedFailure>
    where
        E: Persistable,
        E::Id: Ord,
    {
        for entry in planned {
            let key = entry.entity.record_key();
            let mut entity = entry.entity.clone();
            let committed = self
                .store
                .find_by_id::<E>(*entity.id())
                .map_err(|e| plan.store_failure(dataset, e, Some(key)))?;
            if let Some(committed) = &committed {
                entity.carry_relations(committed);
            }
            self.store
                .create_entity(entity)
                .map_err(|e| plan.store_failure(dataset, e, Some(key)))?;
            debug!(kind = %E::KIND, key = entry.key, id = %entry.entity.id(), rerun = committed.is_some(), "staged");
        }
        self.commit(dataset, plan, E::KIND.as_str())?;

        let mut fetched = BTreeMap::new();
        for entry in planned {
            let id = *entry.entity.id();
            let entity = self
                .store
                .find_by_id::<E>(id)
                .and_then(|found| {
                    found.ok_or_else(|| StoreError::Unavailable(format!("{} missing after commit", E::key_of(id))))
                })
                .map_err(|e| plan.store_failure(dataset, e, Some(E::key_of(id))))?;
            fetched.insert(id, entity);
        }
        Ok(fetched)
    }

    fn write_updates<E>(
        &self,
        dataset: &Dataset,
        plan: &Plan,
        fetched: &BTreeMap<E::Id, E>,
        touched: &BTreeSet<E::Id>,
    ) -> Result<(), SeedFailure>
    where
        E: Persistable,
        E::Id: Ord,
    {
        for id in touched {
            if let Some(entity) = fetched.get(id) {
                self.store
                    .update_entity(entity.clone())
                    .map_err(|e| plan.store_failure(dataset, e, Some(E::key_of(*id))))?;
            }
        }
        Ok(())
    }

    fn commit(&self, dataset: &Dataset, plan: &Plan, batch: &str) -> Result<usize, SeedFailure> {
        let written = self
            .store
            .commit()
            .map_err(|e| plan.store_failure(dataset, e, None))?;
        info!(batch, written, "committed");
        Ok(written)
    }
}

#[derive(Debug)]
struct Planned<E> {
    key: &'static str,
    entity: E,
}

#[derive(Debug, Default)]
struct Plan {
    catalogues: Vec<Planned<Catalogue>>,
    groups: Vec<Planned<Group>>,
    products: Vec<Planned<Product>>,
    offers: Vec<Planned<Offer>>,
    offer_links: Vec<(OfferId, ProductId)>,
    group_links: Vec<(GroupId, ProductId)>,
    ids: BTreeMap<&'static str, Uuid>,
    keys: BTreeMap<RecordKey, &'static str>,
}

impl Plan {
    fn remember<E: Persistable>(&mut self, planned: &Planned<E>) {
        let record = planned.entity.record_key();
        self.ids.insert(planned.key, record.id);
        self.keys.insert(record, planned.key);
    }

    fn id_of(&self, dataset: &Dataset, key: &str) -> Result<Uuid, SeedFailure> {
        self.ids.get(key).copied().ok_or_else(|| {
            SeedFailure::new(
                dataset.name,
                None,
                DomainError::validation("reference", format!("`{key}` is not planned")),
            )
        })
    }

    /// Attributes a store error to the seed entry it concerns, when known.
    fn store_failure(&self, dataset: &Dataset, err: StoreError, at: Option<RecordKey>) -> SeedFailure {
        let record = match &err {
            StoreError::Duplicate(key) | StoreError::Missing(key) => Some(*key),
            StoreError::Unavailable(_) => at,
        };
        let entity = record.and_then(|record| {
            self.keys.get(&record).map(|key| EntityRef {
                kind: record.kind,
                key: *key,
                id: Some(record.id),
            })
        });
        SeedFailure::new(dataset.name, entity, err)
    }
}

fn fetched_mut<'m, E>(
    dataset: &Dataset,
    plan: &Plan,
    fetched: &'m mut BTreeMap<E::Id, E>,
    id: E::Id,
) -> Result<&'m mut E, SeedFailure>
where
    E: Persistable,
    E::Id: Ord,
{
    fetched.get_mut(&id).ok_or_else(|| {
        plan.store_failure(
            dataset,
            StoreError::Unavailable(format!("{} was not read back", E::key_of(id))),
            Some(E::key_of(id)),
        )
    })
}

/// Resolves each distinct organization reference once per plan.
struct OrgCache<'r, R: ?Sized> {
    resolver: &'r R,
    resolved: BTreeMap<OrgRef, String>,
}

impl<'r, R: OrganizationResolver + ?Sized> OrgCache<'r, R> {
    fn new(resolver: &'r R) -> Self {
        Self {
            resolver,
            resolved: BTreeMap::new(),
        }
    }

    fn resolve(&mut self, org: &OrgRef) -> Result<String, ResolveError> {
        let (component, resource, id) = match org {
            OrgRef::Literal(value) => return Ok((*value).to_string()),
            OrgRef::Component {
                component,
                resource,
                id,
            } => (*component, *resource, *id),
        };
        if let Some(resolved) = self.resolved.get(org) {
            return Ok(resolved.clone());
        }
        let resolved = self.resolver.resolve_organization(component, resource, id)?;
        self.resolved.insert(org.clone(), resolved.clone());
        Ok(resolved)
    }
}

/// Fixed id → resolved organization → constructed entity, attributed to `key` on failure.
fn plan_entry<E, R>(
    dataset: &Dataset,
    orgs: &mut OrgCache<'_, R>,
    key: &'static str,
    org: &OrgRef,
    build: impl FnOnce(String) -> DomainResult<E>,
) -> Result<Planned<E>, SeedFailure>
where
    E: Persistable,
    E::Id: From<Uuid>,
    R: OrganizationResolver + ?Sized,
{
    let fail = |id: Option<Uuid>, err: SeedError| {
        SeedFailure::new(
            dataset.name,
            Some(EntityRef {
                kind: E::KIND,
                key,
                id,
            }),
            err,
        )
    };

    let id = dataset.ids.require(key).map_err(|e| fail(None, e.into()))?;
    let org = orgs.resolve(org).map_err(|e| fail(Some(id), e.into()))?;
    let mut entity = build(org).map_err(|e| fail(Some(id), e.into()))?;
    entity.assign_id(E::Id::from(id));
    Ok(Planned { key, entity })
}

fn money(price: Option<PriceSeed>) -> DomainResult<Option<Money>> {
    price.map(|p| Money::parse(p.amount, p.currency)).transpose()
}

fn owned(value: Option<&'static str>) -> Option<String> {
    value.map(str::to_string)
}

fn catalogue_from(seed: &CatalogueSeed, org: String) -> DomainResult<Catalogue> {
    let mut catalogue = Catalogue::new(seed.name, org)?;
    catalogue.set_description(owned(seed.description))?;
    catalogue.set_logo(owned(seed.logo))?;
    Ok(catalogue)
}

fn group_from(seed: &GroupSeed, org: String, catalogue: CatalogueId) -> DomainResult<Group> {
    let mut group = Group::new(seed.name, org, catalogue)?;
    group.set_description(owned(seed.description))?;
    group.set_logo(owned(seed.logo))?;
    group.set_icon(owned(seed.icon))?;
    Ok(group)
}

fn product_from(seed: &ProductSeed, org: String, catalogue: CatalogueId) -> DomainResult<Product> {
    let mut product = Product::new(seed.name, org, catalogue)?;
    product.set_description(owned(seed.description))?;
    product.set_logo(owned(seed.logo))?;
    product.set_movie(owned(seed.movie))?;
    product.set_sku(owned(seed.sku))?;
    product.set_product_type(seed.product_type.clone());
    product.set_price(money(seed.price)?);
    product.set_tax_percentage(seed.tax_percentage)?;
    product.set_duration(owned(seed.duration))?;
    product.set_requires_appointment(seed.requires_appointment);
    product.set_audience(seed.audience.clone());
    Ok(product)
}

fn offer_from(seed: &OfferSeed, org: String) -> DomainResult<Offer> {
    let mut offer = Offer::new(seed.name, org)?;
    offer.set_description(owned(seed.description))?;
    offer.set_price(money(seed.price)?);
    offer.set_audience(seed.audience.clone());
    Ok(offer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activation::ActivationRule;
    use crate::error::ErrorCategory;
    use crate::ids::IdTable;
    use pdc_core::EntityKind;
    use pdc_infra::{CommonGroundResolver, InMemoryCatalogueStore};

    const IDS: IdTable = IdTable::new(&[
        ("catalogue.c", "2655028a-bd64-431f-93a3-6fdb7e552426"),
        ("group.g", "1baea858-1512-454b-ad58-0d30ac5ef10e"),
        ("product.p", "e332a405-5d6e-4e6f-b0c6-05c6f30f54c0"),
        ("offer.o", "840df85b-638d-4e97-928f-30d0aa010982"),
    ]);

    const ORG: OrgRef = OrgRef::component("wrc", "organizations", "4d1eded3-fbdf-438f-9536-8747dd8ab591");

    fn dataset() -> Dataset {
        Dataset::new("tiny", ActivationRule::Always, IDS)
            .catalogue(CatalogueSeed::new("catalogue.c", "C", ORG))
            .group(GroupSeed::new("group.g", "catalogue.c", "G", ORG))
            .product(ProductSeed::new("product.p", "catalogue.c", "P", ORG).groups(&["group.g"]))
            .offer(
                OfferSeed::new("offer.o", "O", ORG)
                    .price("99.99", "EUR")
                    .products(&["product.p"]),
            )
    }

    fn resolver() -> CommonGroundResolver {
        CommonGroundResolver::new()
            .with_location("wrc", "https://wrc.zuid-drecht.nl")
            .unwrap()
    }

    #[test]
    fn seeds_and_wires_both_relation_sides() {
        let store = InMemoryCatalogueStore::new();
        let resolver = resolver();
        let outcome = CatalogueSeeder::new(&store, &resolver)
            .seed(&dataset(), &SeedConfig::default())
            .unwrap();

        assert_eq!(outcome.counts.products, 1);
        assert_eq!(outcome.counts.group_links, 1);

        let product_id = ProductId::from_uuid(IDS.require("product.p").unwrap());
        let group_id = GroupId::from_uuid(IDS.require("group.g").unwrap());
        let offer_id = OfferId::from_uuid(IDS.require("offer.o").unwrap());
        let product: Product = store.find_by_id(product_id).unwrap().unwrap();
        let group: Group = store.find_by_id(group_id).unwrap().unwrap();
        let offer: Offer = store.find_by_id(offer_id).unwrap().unwrap();

        assert!(group.has_product(product_id));
        assert!(product.groups().contains(&group_id));
        assert!(product.offers().contains(&offer_id));
        assert!(offer.products().contains(&product_id));
        assert_eq!(
            product.source_organization(),
            "https://wrc.zuid-drecht.nl/organizations/4d1eded3-fbdf-438f-9536-8747dd8ab591"
        );
    }

    #[test]
    fn invalid_entity_is_attributed_and_nothing_is_written() {
        let mut ds = dataset();
        ds.offers[0].price = Some(PriceSeed {
            amount: "-1",
            currency: "EUR",
        });
        let store = InMemoryCatalogueStore::new();
        let resolver = resolver();
        let failure = CatalogueSeeder::new(&store, &resolver)
            .seed(&ds, &SeedConfig::default())
            .unwrap_err();

        assert_eq!(failure.category(), ErrorCategory::Validation);
        assert_eq!(failure.entity.as_ref().map(|e| e.key), Some("offer.o"));
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn duplicate_on_rerun_names_the_entity() {
        let store = InMemoryCatalogueStore::new();
        let resolver = resolver();
        let seeder = CatalogueSeeder::new(&store, &resolver);
        seeder.seed(&dataset(), &SeedConfig::default()).unwrap();

        let failure = seeder.seed(&dataset(), &SeedConfig::default()).unwrap_err();
        assert_eq!(failure.category(), ErrorCategory::PersistenceConflict);
        let entity = failure.entity.unwrap();
        assert_eq!(entity.kind, EntityKind::Catalogue);
        assert_eq!(entity.key, "catalogue.c");
    }

    #[test]
    fn resolution_is_cached_per_reference() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        struct Counting(AtomicUsize);
        impl OrganizationResolver for Counting {
            fn resolve_organization(&self, _: &str, _: &str, id: &str) -> Result<String, ResolveError> {
                self.0.fetch_add(1, Ordering::SeqCst);
                Ok(format!("urn:org:{id}"))
            }
        }

        let store = InMemoryCatalogueStore::new();
        let resolver = Counting(AtomicUsize::new(0));
        CatalogueSeeder::new(&store, &resolver)
            .seed(&dataset(), &SeedConfig::default())
            .unwrap();
        assert_eq!(resolver.0.load(Ordering::SeqCst), 1);
    }
}
