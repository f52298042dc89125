//! Read-back of the committed catalogue graph, for printing and assertions.

use serde::Serialize;

use pdc_catalogue::{Catalogue, Group, Offer, Product};
use pdc_core::Entity;
use pdc_infra::{CatalogueStore, StoreError, StoreExt};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CatalogueGraph {
    pub catalogues: Vec<Catalogue>,
    pub groups: Vec<Group>,
    pub products: Vec<Product>,
    pub offers: Vec<Offer>,
}

impl CatalogueGraph {
    pub fn load<S: CatalogueStore + ?Sized>(store: &S) -> Result<Self, StoreError> {
        Ok(Self {
            catalogues: store.list_all()?,
            groups: store.list_all()?,
            products: store.list_all()?,
            offers: store.list_all()?,
        })
    }

    pub fn catalogue_named(&self, name: &str) -> Option<&Catalogue> {
        self.catalogues.iter().find(|c| c.name() == name)
    }

    pub fn group_named(&self, name: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.name() == name)
    }

    pub fn product_named(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.name() == name)
    }

    /// Groups owned by `catalogue`, in identifier order.
    pub fn groups_of<'g>(&'g self, catalogue: &'g Catalogue) -> impl Iterator<Item = &'g Group> + 'g {
        self.groups
            .iter()
            .filter(move |g| g.catalogue() == *catalogue.id())
    }

    /// Products owned by `catalogue`, in identifier order.
    pub fn products_of<'g>(&'g self, catalogue: &'g Catalogue) -> impl Iterator<Item = &'g Product> + 'g {
        self.products
            .iter()
            .filter(move |p| p.catalogue() == *catalogue.id())
    }

    /// Offers linked to `product`, in identifier order.
    pub fn offers_of<'g>(&'g self, product: &'g Product) -> impl Iterator<Item = &'g Offer> + 'g {
        self.offers
            .iter()
            .filter(move |o| product.offers().contains(o.id()))
    }
}
