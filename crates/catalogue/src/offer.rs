use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use pdc_core::{DomainError, DomainResult, Entity, EntityKind, OfferId, ProductId};

use crate::fields::{self, Audience, Money, DESCRIPTION_MAX, NAME_MAX, TEXT_MAX};

/// Priced variant or add-on for one or more products.
///
/// `offered_by` need not match the owning organization of the products it
/// prices (third-party add-ons).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "OfferFields")]
pub struct Offer {
    id: OfferId,
    name: String,
    description: Option<String>,
    price: Option<Money>,
    offered_by: String,
    audience: Option<Audience>,
    products: BTreeSet<ProductId>,
}

impl Offer {
    pub fn new(name: impl Into<String>, offered_by: impl Into<String>) -> DomainResult<Self> {
        Ok(Self {
            id: OfferId::new(),
            name: fields::required_text("name", name.into(), NAME_MAX)?,
            description: None,
            price: None,
            offered_by: fields::required_text("offered_by", offered_by.into(), TEXT_MAX)?,
            audience: None,
            products: BTreeSet::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn price(&self) -> Option<&Money> {
        self.price.as_ref()
    }

    pub fn offered_by(&self) -> &str {
        &self.offered_by
    }

    pub fn audience(&self) -> Option<&Audience> {
        self.audience.as_ref()
    }

    pub fn products(&self) -> &BTreeSet<ProductId> {
        &self.products
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> DomainResult<()> {
        self.name = fields::required_text("name", name.into(), NAME_MAX)?;
        Ok(())
    }

    pub fn set_description(&mut self, description: Option<String>) -> DomainResult<()> {
        self.description = fields::optional_text("description", description, DESCRIPTION_MAX)?;
        Ok(())
    }

    pub fn set_price(&mut self, price: Option<Money>) {
        self.price = price;
    }

    pub fn set_offered_by(&mut self, offered_by: impl Into<String>) -> DomainResult<()> {
        self.offered_by = fields::required_text("offered_by", offered_by.into(), TEXT_MAX)?;
        Ok(())
    }

    pub fn set_audience(&mut self, audience: Option<Audience>) {
        self.audience = audience;
    }

    /// Returns `true` when the product was newly added. This side only.
    pub fn add_product(&mut self, product: ProductId) -> bool {
        self.products.insert(product)
    }

    /// Adds the product links `committed` already holds.
    pub fn carry_relations(&mut self, committed: &Offer) {
        self.products.extend(committed.products.iter().copied());
    }

    /// Returns `true` when the product was present.
    pub fn remove_product(&mut self, product: ProductId) -> bool {
        self.products.remove(&product)
    }
}

impl Entity for Offer {
    type Id = OfferId;
    const KIND: EntityKind = EntityKind::Offer;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn assign_id(&mut self, id: Self::Id) {
        self.id = id;
    }
}

#[derive(Deserialize)]
struct OfferFields {
    id: OfferId,
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    price: Option<Money>,
    offered_by: String,
    #[serde(default)]
    audience: Option<Audience>,
    #[serde(default)]
    products: BTreeSet<ProductId>,
}

impl TryFrom<OfferFields> for Offer {
    type Error = DomainError;

    fn try_from(f: OfferFields) -> DomainResult<Self> {
        let mut offer = Offer::new(f.name, f.offered_by)?;
        offer.assign_id(f.id);
        offer.set_description(f.description)?;
        offer.set_price(f.price);
        offer.set_audience(f.audience);
        offer.products = f.products;
        Ok(offer)
    }
}
