//! Catalogue entity model.
//!
//! The four entity kinds (Catalogue → Group → Product → Offer), their field
//! constraints and the symmetric many-to-many wiring between them. Pure domain
//! logic: no IO, no storage.

pub mod catalogue;
pub mod fields;
pub mod group;
pub mod offer;
pub mod product;
pub mod relation;

pub use catalogue::Catalogue;
pub use fields::{Audience, Money, ProductType};
pub use group::Group;
pub use offer::Offer;
pub use product::Product;
pub use relation::{link_offer_to_product, link_product_to_group, unlink_offer_from_product, unlink_product_from_group};
