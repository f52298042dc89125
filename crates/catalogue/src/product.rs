use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use pdc_core::{CatalogueId, DomainError, DomainResult, Entity, EntityKind, GroupId, OfferId, ProductId};

use crate::fields::{self, Audience, Money, ProductType, DESCRIPTION_MAX, NAME_MAX, TEXT_MAX};

/// Offerable service item, belonging to one catalogue and any number of groups.
///
/// Pricing, tax and appointment data are carried as-is; only their shape is
/// validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ProductFields")]
pub struct Product {
    id: ProductId,
    name: String,
    description: Option<String>,
    logo: Option<String>,
    movie: Option<String>,
    sku: Option<String>,
    #[serde(rename = "type")]
    product_type: ProductType,
    price: Option<Money>,
    tax_percentage: Option<u8>,
    duration: Option<String>,
    requires_appointment: bool,
    audience: Option<Audience>,
    source_organization: String,
    catalogue: CatalogueId,
    groups: BTreeSet<GroupId>,
    offers: BTreeSet<OfferId>,
}

impl Product {
    /// New product of type `simple`, no price, not requiring an appointment.
    pub fn new(
        name: impl Into<String>,
        source_organization: impl Into<String>,
        catalogue: CatalogueId,
    ) -> DomainResult<Self> {
        Ok(Self {
            id: ProductId::new(),
            name: fields::required_text("name", name.into(), NAME_MAX)?,
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
            source_organization: fields::required_text(
                "source_organization",
                source_organization.into(),
                TEXT_MAX,
            )?,
            catalogue,
            groups: BTreeSet::new(),
            offers: BTreeSet::new(),
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

    pub fn movie(&self) -> Option<&str> {
        self.movie.as_deref()
    }

    pub fn sku(&self) -> Option<&str> {
        self.sku.as_deref()
    }

    pub fn product_type(&self) -> &ProductType {
        &self.product_type
    }

    pub fn price(&self) -> Option<&Money> {
        self.price.as_ref()
    }

    pub fn tax_percentage(&self) -> Option<u8> {
        self.tax_percentage
    }

    pub fn duration(&self) -> Option<&str> {
        self.duration.as_deref()
    }

    pub fn requires_appointment(&self) -> bool {
        self.requires_appointment
    }

    pub fn audience(&self) -> Option<&Audience> {
        self.audience.as_ref()
    }

    pub fn source_organization(&self) -> &str {
        &self.source_organization
    }

    pub fn catalogue(&self) -> CatalogueId {
        self.catalogue
    }

    pub fn groups(&self) -> &BTreeSet<GroupId> {
        &self.groups
    }

    pub fn offers(&self) -> &BTreeSet<OfferId> {
        &self.offers
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

    pub fn set_movie(&mut self, movie: Option<String>) -> DomainResult<()> {
        self.movie = fields::optional_url("movie", movie)?;
        Ok(())
    }

    pub fn set_sku(&mut self, sku: Option<String>) -> DomainResult<()> {
        self.sku = fields::optional_text("sku", sku, TEXT_MAX)?;
        Ok(())
    }

    pub fn set_product_type(&mut self, product_type: ProductType) {
        self.product_type = product_type;
    }

    pub fn set_price(&mut self, price: Option<Money>) {
        self.price = price;
    }

    pub fn set_tax_percentage(&mut self, tax_percentage: Option<u8>) -> DomainResult<()> {
        self.tax_percentage = tax_percentage.map(fields::tax_percentage).transpose()?;
        Ok(())
    }

    pub fn set_duration(&mut self, duration: Option<String>) -> DomainResult<()> {
        if let Some(d) = &duration {
            fields::validate_duration("duration", d)?;
        }
        self.duration = duration;
        Ok(())
    }

    pub fn set_requires_appointment(&mut self, requires_appointment: bool) {
        self.requires_appointment = requires_appointment;
    }

    pub fn set_audience(&mut self, audience: Option<Audience>) {
        self.audience = audience;
    }

    pub fn set_source_organization(&mut self, source_organization: impl Into<String>) -> DomainResult<()> {
        self.source_organization =
            fields::required_text("source_organization", source_organization.into(), TEXT_MAX)?;
        Ok(())
    }

    /// Adds the group memberships and offer links `committed` already holds.
    pub fn carry_relations(&mut self, committed: &Product) {
        self.groups.extend(committed.groups.iter().copied());
        self.offers.extend(committed.offers.iter().copied());
    }

    /// Returns `true` when the group was newly added. This side only.
    pub fn add_group(&mut self, group: GroupId) -> bool {
        self.groups.insert(group)
    }

    /// Returns `true` when the group was present.
    pub fn remove_group(&mut self, group: GroupId) -> bool {
        self.groups.remove(&group)
    }

    /// Returns `true` when the offer was newly added. This side only.
    pub fn add_offer(&mut self, offer: OfferId) -> bool {
        self.offers.insert(offer)
    }

    /// Returns `true` when the offer was present.
    pub fn remove_offer(&mut self, offer: OfferId) -> bool {
        self.offers.remove(&offer)
    }
}

impl Entity for Product {
    type Id = ProductId;
    const KIND: EntityKind = EntityKind::Product;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn assign_id(&mut self, id: Self::Id) {
        self.id = id;
    }
}

#[derive(Deserialize)]
struct ProductFields {
    id: ProductId,
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    logo: Option<String>,
    #[serde(default)]
    movie: Option<String>,
    #[serde(default)]
    sku: Option<String>,
    #[serde(rename = "type", default = "simple")]
    product_type: ProductType,
    #[serde(default)]
    price: Option<Money>,
    #[serde(default)]
    tax_percentage: Option<u8>,
    #[serde(default)]
    duration: Option<String>,
    #[serde(default)]
    requires_appointment: bool,
    #[serde(default)]
    audience: Option<Audience>,
    source_organization: String,
    catalogue: CatalogueId,
    #[serde(default)]
    groups: BTreeSet<GroupId>,
    #[serde(default)]
    offers: BTreeSet<OfferId>,
}

fn simple() -> ProductType {
    ProductType::Simple
}

impl TryFrom<ProductFields> for Product {
    type Error = DomainError;

    fn try_from(f: ProductFields) -> DomainResult<Self> {
        let mut product = Product::new(f.name, f.source_organization, f.catalogue)?;
        product.assign_id(f.id);
        product.set_description(f.description)?;
        product.set_logo(f.logo)?;
        product.set_movie(f.movie)?;
        product.set_sku(f.sku)?;
        product.set_product_type(f.product_type);
        product.set_price(f.price);
        product.set_tax_percentage(f.tax_percentage)?;
        product.set_duration(f.duration)?;
        product.set_requires_appointment(f.requires_appointment);
        product.set_audience(f.audience);
        product.groups = f.groups;
        product.offers = f.offers;
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdc_core::DomainError;

    fn paspoort() -> Product {
        Product::new("Paspoort", "https://wrc.zuid-drecht.nl/organizations/4d1eded3", CatalogueId::new()).unwrap()
    }

    #[test]
    fn new_product_defaults() {
        let p = paspoort();
        assert_eq!(p.product_type(), &ProductType::Simple);
        assert!(!p.requires_appointment());
        assert!(p.price().is_none());
        assert!(p.groups().is_empty());
        assert!(p.offers().is_empty());
    }

    #[test]
    fn new_product_rejects_blank_name() {
        let err = Product::new(" ", "0000", CatalogueId::new()).unwrap_err();
        assert!(matches!(err, DomainError::Validation { field: "name", .. }));
    }

    #[test]
    fn full_cemetery_product_is_accepted() {
        let mut p = paspoort();
        p.set_sku(Some("69667-2020".into())).unwrap();
        p.set_movie(Some("https://www.youtube.com/embed/RkBZYoMnx5w".into())).unwrap();
        p.set_price(Some(Money::parse("1.00", "EUR").unwrap()));
        p.set_tax_percentage(Some(9)).unwrap();
        p.set_duration(Some("PT10M".into())).unwrap();
        p.set_audience(Some(Audience::from("string")));

        assert_eq!(p.duration(), Some("PT10M"));
        assert_eq!(p.tax_percentage(), Some(9));
        assert_eq!(p.audience(), Some(&Audience::Other("string".into())));
    }

    #[test]
    fn rejects_malformed_duration_and_tax() {
        let mut p = paspoort();
        assert_eq!(p.set_duration(Some("10 minutes".into())).unwrap_err().field(), Some("duration"));
        assert_eq!(p.duration(), None);
        assert_eq!(p.set_tax_percentage(Some(120)).unwrap_err().field(), Some("tax_percentage"));
    }

    #[test]
    fn group_and_offer_sets_are_idempotent() {
        let mut p = paspoort();
        let g = GroupId::new();
        let o = OfferId::new();
        p.add_group(g);
        p.add_group(g);
        p.add_offer(o);
        p.add_offer(o);
        assert_eq!(p.groups().len(), 1);
        assert_eq!(p.offers().len(), 1);
        assert!(!p.remove_group(GroupId::new()));
        assert!(p.remove_offer(o));
        assert!(!p.remove_offer(o));
    }

    #[test]
    fn deserializing_validates_every_field() {
        let mut p = paspoort();
        p.set_duration(Some("PT10M".into())).unwrap();
        p.add_group(GroupId::new());
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(serde_json::from_value::<Product>(json.clone()).unwrap(), p);

        for (field, value) in [
            ("name", serde_json::json!("")),
            ("movie", serde_json::json!("not a url")),
            ("duration", serde_json::json!("10 minutes")),
            ("tax_percentage", serde_json::json!(120)),
        ] {
            let mut invalid = json.clone();
            invalid[field] = value;
            let err = serde_json::from_value::<Product>(invalid).unwrap_err();
            assert!(err.to_string().contains(field), "{field}: {err}");
        }
    }

    #[test]
    fn serializes_type_under_its_wire_name() {
        let mut p = paspoort();
        p.set_product_type(ProductType::Person);
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["type"], "person");
        assert_eq!(json["requires_appointment"], false);
    }
}
