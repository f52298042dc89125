use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use pdc_core::{CatalogueId, DomainError, DomainResult, Entity, EntityKind, GroupId, ProductId};

use crate::fields::{self, DESCRIPTION_MAX, NAME_MAX, TEXT_MAX};

/// Named classification bucket of products within one catalogue.
///
/// The source organization is opaque: registry codes (`002220647`) and
/// canonical URIs are both accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GroupFields")]
pub struct Group {
    id: GroupId,
    name: String,
    description: Option<String>,
    logo: Option<String>,
    icon: Option<String>,
    source_organization: String,
    catalogue: CatalogueId,
    products: BTreeSet<ProductId>,
}

impl Group {
    pub fn new(
        name: impl Into<String>,
        source_organization: impl Into<String>,
        catalogue: CatalogueId,
    ) -> DomainResult<Self> {
        Ok(Self {
            id: GroupId::new(),
            name: fields::required_text("name", name.into(), NAME_MAX)?,
            description: None,
            logo: None,
            icon: None,
            source_organization: fields::required_text(
                "source_organization",
                source_organization.into(),
                TEXT_MAX,
            )?,
            catalogue,
            products: BTreeSet::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn logo(&self) -> Option<&str> {
        self.logo.as_deref()
    }

    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    pub fn source_organization(&self) -> &str {
        &self.source_organization
    }

    pub fn catalogue(&self) -> CatalogueId {
        self.catalogue
    }

    pub fn products(&self) -> &BTreeSet<ProductId> {
        &self.products
    }

    pub fn has_product(&self, product: ProductId) -> bool {
        self.products.contains(&product)
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> DomainResult<()> {
        self.name = fields::required_text("name", name.into(), NAME_MAX)?;
        Ok(())
    }

    pub fn set_description(&mut self, description: Option<String>) -> DomainResult<()> {
        self.description = fields::optional_text("description", description, DESCRIPTION_MAX)?;
        Ok(())
    }

    pub fn set_logo(&mut self, logo: Option<String>) -> DomainResult<()> {
        self.logo = fields::optional_url("logo", logo)?;
        Ok(())
    }

    pub fn set_icon(&mut self, icon: Option<String>) -> DomainResult<()> {
        self.icon = fields::optional_text("icon", icon, TEXT_MAX)?;
        Ok(())
    }

    pub fn set_source_organization(&mut self, source_organization: impl Into<String>) -> DomainResult<()> {
        self.source_organization =
            fields::required_text("source_organization", source_organization.into(), TEXT_MAX)?;
        Ok(())
    }

    /// Returns `true` when the product was not yet a member.
    ///
    /// Only updates this side; use [`crate::link_product_to_group`] to keep
    /// both sides consistent.
    pub fn add_product(&mut self, product: ProductId) -> bool {
        self.products.insert(product)
    }

    /// Adds the memberships `committed` already holds.
    pub fn carry_relations(&mut self, committed: &Group) {
        self.products.extend(committed.products.iter().copied());
    }

    /// Returns `true` when the product was a member. Removing a non-member is a no-op.
    pub fn remove_product(&mut self, product: ProductId) -> bool {
        self.products.remove(&product)
    }
}

impl Entity for Group {
    type Id = GroupId;
    const KIND: EntityKind = EntityKind::Group;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn assign_id(&mut self, id: Self::Id) {
        self.id = id;
    }
}

#[derive(Deserialize)]
struct GroupFields {
    id: GroupId,
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    logo: Option<String>,
    #[serde(default)]
    icon: Option<String>,
    source_organization: String,
    catalogue: CatalogueId,
    #[serde(default)]
    products: BTreeSet<ProductId>,
}

impl TryFrom<GroupFields> for Group {
    type Error = DomainError;

    fn try_from(f: GroupFields) -> DomainResult<Self> {
        let mut group = Group::new(f.name, f.source_organization, f.catalogue)?;
        group.assign_id(f.id);
        group.set_description(f.description)?;
        group.set_logo(f.logo)?;
        group.set_icon(f.icon)?;
        group.products = f.products;
        Ok(group)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group() -> Group {
        Group::new("Diensten", "002220647", CatalogueId::new()).unwrap()
    }

    #[test]
    fn new_group_starts_empty_and_bound_to_catalogue() {
        let catalogue = CatalogueId::new();
        let g = Group::new("Burgerzaken", "001709124", catalogue).unwrap();
        assert_eq!(g.catalogue(), catalogue);
        assert!(g.products().is_empty());
    }

    #[test]
    fn source_organization_accepts_codes_and_uris() {
        let catalogue = CatalogueId::new();
        assert!(Group::new("Burgerzaken", "1234567", catalogue).is_ok());
        assert!(
            Group::new(
                "Diversen",
                "https://grc.dev.westfriesland.commonground.nu/cemeteries/2556c084-0687-4ca1-b098-e4f0a7292ae8",
                catalogue,
            )
            .is_ok()
        );
    }

    #[test]
    fn add_product_twice_keeps_one_membership() {
        let mut g = group();
        let p = ProductId::new();
        assert!(g.add_product(p));
        assert!(!g.add_product(p));
        assert_eq!(g.products().len(), 1);
    }

    #[test]
    fn removing_non_member_is_noop() {
        let mut g = group();
        g.add_product(ProductId::new());
        assert!(!g.remove_product(ProductId::new()));
        assert_eq!(g.products().len(), 1);
    }

    #[test]
    fn deserializing_rejects_what_the_setters_reject() {
        let mut g = group();
        g.add_product(ProductId::new());
        let json = serde_json::to_value(&g).unwrap();
        assert_eq!(serde_json::from_value::<Group>(json.clone()).unwrap(), g);

        let mut invalid = json;
        invalid["name"] = "".into();
        invalid["logo"] = "not a url".into();
        invalid["source_organization"] = "".into();
        assert!(serde_json::from_value::<Group>(invalid).is_err());
    }

    #[test]
    fn carried_relations_are_merged_not_replaced() {
        let mut committed = group();
        let kept = ProductId::new();
        committed.add_product(kept);

        let mut rewritten = group();
        let added = ProductId::new();
        rewritten.add_product(added);
        rewritten.carry_relations(&committed);
        assert!(rewritten.has_product(kept));
        assert!(rewritten.has_product(added));
    }

    #[test]
    fn icon_is_free_text() {
        let mut g = group();
        g.set_icon(Some("My Icon".into())).unwrap();
        assert_eq!(g.icon(), Some("My Icon"));
        assert_eq!(g.set_icon(Some("i".repeat(256))).unwrap_err().field(), Some("icon"));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: membership behaves as a set regardless of insertion order or repeats.
            #[test]
            fn membership_is_a_set(picks in proptest::collection::vec(0usize..5, 0..40)) {
                let pool: Vec<ProductId> = (0..5).map(|_| ProductId::new()).collect();
                let mut g = group();
                for i in &picks {
                    g.add_product(pool[*i]);
                }
                let distinct: BTreeSet<_> = picks.iter().map(|i| pool[*i]).collect();
                prop_assert_eq!(g.products(), &distinct);
            }
        }
    }
}
