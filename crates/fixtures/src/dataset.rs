//! Declarative seed datasets.
//!
//! A [`Dataset`] is plain data: what to create, which logical keys relate to
//! which, and where each fixed identifier comes from. The seeder turns it into
//! entities; nothing here touches the store or the resolver.

use std::collections::{BTreeMap, BTreeSet};

use pdc_catalogue::{Audience, ProductType};
use pdc_core::{DomainError, DomainResult, EntityKind};

use crate::activation::ActivationRule;
use crate::ids::IdTable;

/// How a seed entry names its organization.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum OrgRef {
    /// Stored as given (a canonical URI or a registry code).
    Literal(&'static str),
    /// Resolved through the organization resolver.
    Component {
        component: &'static str,
        resource: &'static str,
        id: &'static str,
    },
}

impl OrgRef {
    pub const fn literal(value: &'static str) -> Self {
        OrgRef::Literal(value)
    }

    pub const fn component(component: &'static str, resource: &'static str, id: &'static str) -> Self {
        OrgRef::Component {
            component,
            resource,
            id,
        }
    }
}

/// Amount and currency as written in the dataset, parsed when planned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceSeed {
    pub amount: &'static str,
    pub currency: &'static str,
}

#[derive(Debug, Clone)]
pub struct CatalogueSeed {
    pub key: &'static str,
    pub name: &'static str,
    pub description: Option<&'static str>,
    pub logo: Option<&'static str>,
    pub organization: OrgRef,
}

impl CatalogueSeed {
    pub fn new(key: &'static str, name: &'static str, organization: OrgRef) -> Self {
        Self {
            key,
            name,
            description: None,
            logo: None,
            organization,
        }
    }

    pub fn description(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    pub fn logo(mut self, logo: &'static str) -> Self {
        self.logo = Some(logo);
        self
    }
}

#[derive(Debug, Clone)]
pub struct GroupSeed {
    pub key: &'static str,
    pub catalogue: &'static str,
    pub name: &'static str,
    pub description: Option<&'static str>,
    pub logo: Option<&'static str>,
    pub icon: Option<&'static str>,
    pub organization: OrgRef,
    /// Product keys this group holds.
    pub products: Vec<&'static str>,
}

impl GroupSeed {
    pub fn new(key: &'static str, catalogue: &'static str, name: &'static str, organization: OrgRef) -> Self {
        Self {
            key,
            catalogue,
            name,
            description: None,
            logo: None,
            icon: None,
            organization,
            products: Vec::new(),
        }
    }

    pub fn description(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    pub fn logo(mut self, logo: &'static str) -> Self {
        self.logo = Some(logo);
        self
    }

    pub fn icon(mut self, icon: &'static str) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn products(mut self, products: &[&'static str]) -> Self {
        self.products.extend_from_slice(products);
        self
    }
}

#[derive(Debug, Clone)]
pub struct ProductSeed {
    pub key: &'static str,
    pub catalogue: &'static str,
    pub name: &'static str,
    pub description: Option<&'static str>,
    pub logo: Option<&'static str>,
    pub movie: Option<&'static str>,
    pub sku: Option<&'static str>,
    pub product_type: ProductType,
    pub price: Option<PriceSeed>,
    pub tax_percentage: Option<u8>,
    pub duration: Option<&'static str>,
    pub requires_appointment: bool,
    pub audience: Option<Audience>,
    pub organization: OrgRef,
    /// Group keys this product belongs to.
    pub groups: Vec<&'static str>,
}

impl ProductSeed {
    pub fn new(key: &'static str, catalogue: &'static str, name: &'static str, organization: OrgRef) -> Self {
        Self {
            key,
            catalogue,
            name,
            description: None,
            logo: None,
            movie: None,
            sku: None,
            product_type: ProductType::Simple,
            price: None,
            tax_percentage: None,
            duration: None,
            requires_appointment: false,
            audience: None,
            organization,
            groups: Vec::new(),
        }
    }

    pub fn description(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    pub fn logo(mut self, logo: &'static str) -> Self {
        self.logo = Some(logo);
        self
    }

    pub fn movie(mut self, movie: &'static str) -> Self {
        self.movie = Some(movie);
        self
    }

    pub fn sku(mut self, sku: &'static str) -> Self {
        self.sku = Some(sku);
        self
    }

    pub fn product_type(mut self, product_type: ProductType) -> Self {
        self.product_type = product_type;
        self
    }

    pub fn price(mut self, amount: &'static str, currency: &'static str) -> Self {
        self.price = Some(PriceSeed { amount, currency });
        self
    }

    pub fn tax_percentage(mut self, tax_percentage: u8) -> Self {
        self.tax_percentage = Some(tax_percentage);
        self
    }

    pub fn duration(mut self, duration: &'static str) -> Self {
        self.duration = Some(duration);
        self
    }

    pub fn requires_appointment(mut self, requires_appointment: bool) -> Self {
        self.requires_appointment = requires_appointment;
        self
    }

    pub fn audience(mut self, audience: Audience) -> Self {
        self.audience = Some(audience);
        self
    }

    pub fn groups(mut self, groups: &[&'static str]) -> Self {
        self.groups.extend_from_slice(groups);
        self
    }
}

#[derive(Debug, Clone)]
pub struct OfferSeed {
    pub key: &'static str,
    pub name: &'static str,
    pub description: Option<&'static str>,
    pub price: Option<PriceSeed>,
    pub offered_by: OrgRef,
    pub audience: Option<Audience>,
    /// Product keys this offer prices.
    pub products: Vec<&'static str>,
}

impl OfferSeed {
    pub fn new(key: &'static str, name: &'static str, offered_by: OrgRef) -> Self {
        Self {
            key,
            name,
            description: None,
            price: None,
            offered_by,
            audience: None,
            products: Vec::new(),
        }
    }

    pub fn description(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    pub fn price(mut self, amount: &'static str, currency: &'static str) -> Self {
        self.price = Some(PriceSeed { amount, currency });
        self
    }

    pub fn audience(mut self, audience: Audience) -> Self {
        self.audience = Some(audience);
        self
    }

    pub fn products(mut self, products: &[&'static str]) -> Self {
        self.products.extend_from_slice(products);
        self
    }
}

/// One tenant's seed data.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub name: &'static str,
    pub activation: ActivationRule,
    pub ids: IdTable,
    pub catalogues: Vec<CatalogueSeed>,
    pub groups: Vec<GroupSeed>,
    pub products: Vec<ProductSeed>,
    pub offers: Vec<OfferSeed>,
}

impl Dataset {
    pub fn new(name: &'static str, activation: ActivationRule, ids: IdTable) -> Self {
        Self {
            name,
            activation,
            ids,
            catalogues: Vec::new(),
            groups: Vec::new(),
            products: Vec::new(),
            offers: Vec::new(),
        }
    }

    pub fn catalogue(mut self, seed: CatalogueSeed) -> Self {
        self.catalogues.push(seed);
        self
    }

    pub fn group(mut self, seed: GroupSeed) -> Self {
        self.groups.push(seed);
        self
    }

    pub fn product(mut self, seed: ProductSeed) -> Self {
        self.products.push(seed);
        self
    }

    pub fn offer(mut self, seed: OfferSeed) -> Self {
        self.offers.push(seed);
        self
    }

    /// Group ↔ product pairs declared from either side, without repeats.
    pub fn group_links(&self) -> BTreeSet<(&'static str, &'static str)> {
        let from_groups = self
            .groups
            .iter()
            .flat_map(|g| g.products.iter().map(move |p| (g.key, *p)));
        let from_products = self
            .products
            .iter()
            .flat_map(|p| p.groups.iter().map(move |g| (*g, p.key)));
        from_groups.chain(from_products).collect()
    }

    /// Offer ↔ product pairs, without repeats.
    pub fn offer_links(&self) -> BTreeSet<(&'static str, &'static str)> {
        self.offers
            .iter()
            .flat_map(|o| o.products.iter().map(move |p| (o.key, *p)))
            .collect()
    }

    /// Pre-flight check, run before anything is resolved or written.
    ///
    /// Every key is declared once across the dataset and has a fixed
    /// identifier; every reference names a declared key of the right kind.
    pub fn validate(&self) -> DomainResult<()> {
        self.ids.validate()?;

        let mut kinds: BTreeMap<&'static str, EntityKind> = BTreeMap::new();
        let declared = self
            .catalogues
            .iter()
            .map(|s| (s.key, EntityKind::Catalogue))
            .chain(self.groups.iter().map(|s| (s.key, EntityKind::Group)))
            .chain(self.products.iter().map(|s| (s.key, EntityKind::Product)))
            .chain(self.offers.iter().map(|s| (s.key, EntityKind::Offer)));

        for (key, kind) in declared {
            if kinds.insert(key, kind).is_some() {
                return Err(DomainError::validation("key", format!("`{key}` declared twice")));
            }
            if self.ids.get(key)?.is_none() {
                return Err(DomainError::validation(
                    "id",
                    format!("{kind} `{key}` has no fixed identifier"),
                ));
            }
        }

        let expect = |key: &str, kind: EntityKind, from: &str| -> DomainResult<()> {
            match kinds.get(key) {
                Some(found) if *found == kind => Ok(()),
                Some(found) => Err(DomainError::validation(
                    "reference",
                    format!("`{from}` refers to `{key}` as a {kind}, but it is a {found}"),
                )),
                None => Err(DomainError::validation(
                    "reference",
                    format!("`{from}` refers to undeclared {kind} `{key}`"),
                )),
            }
        };

        for group in &self.groups {
            expect(group.catalogue, EntityKind::Catalogue, group.key)?;
            for product in &group.products {
                expect(product, EntityKind::Product, group.key)?;
            }
        }
        for product in &self.products {
            expect(product.catalogue, EntityKind::Catalogue, product.key)?;
            for group in &product.groups {
                expect(group, EntityKind::Group, product.key)?;
            }
        }
        for offer in &self.offers {
            for product in &offer.products {
                expect(product, EntityKind::Product, offer.key)?;
            }
        }
        Ok(())
    }
}
