//! Symmetric wiring of the many-to-many relations.
//!
//! Each function updates both sides so the pair stays observably consistent.
//! All of them are idempotent and return whether either side changed.

use pdc_core::Entity;

use crate::{Group, Offer, Product};

pub fn link_product_to_group(group: &mut Group, product: &mut Product) -> bool {
    let a = group.add_product(*product.id());
    let b = product.add_group(*group.id());
    a || b
}

pub fn unlink_product_from_group(group: &mut Group, product: &mut Product) -> bool {
    let a = group.remove_product(*product.id());
    let b = product.remove_group(*group.id());
    a || b
}

pub fn link_offer_to_product(offer: &mut Offer, product: &mut Product) -> bool {
    let a = offer.add_product(*product.id());
    let b = product.add_offer(*offer.id());
    a || b
}

pub fn unlink_offer_from_product(offer: &mut Offer, product: &mut Product) -> bool {
    let a = offer.remove_product(*product.id());
    let b = product.remove_offer(*offer.id());
    a || b
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdc_core::CatalogueId;

    fn fixtures() -> (Group, Product, Offer) {
        let catalogue = CatalogueId::new();
        (
            Group::new("Ballie producten", "0000", catalogue).unwrap(),
            Product::new("Rijbewijs", "0000", catalogue).unwrap(),
            Offer::new("Rijbewijs aanvragen/verlengen", "0000").unwrap(),
        )
    }

    #[test]
    fn linking_updates_both_sides() {
        let (mut g, mut p, _) = fixtures();
        assert!(link_product_to_group(&mut g, &mut p));
        assert!(g.has_product(*p.id()));
        assert!(p.groups().contains(g.id()));
    }

    #[test]
    fn linking_twice_is_noop() {
        let (mut g, mut p, _) = fixtures();
        link_product_to_group(&mut g, &mut p);
        assert!(!link_product_to_group(&mut g, &mut p));
        assert_eq!(g.products().len(), 1);
        assert_eq!(p.groups().len(), 1);
    }

    #[test]
    fn linking_repairs_one_sided_membership() {
        let (mut g, mut p, _) = fixtures();
        g.add_product(*p.id());
        assert!(link_product_to_group(&mut g, &mut p));
        assert!(p.groups().contains(g.id()));
    }

    #[test]
    fn unlinking_non_members_never_fails() {
        let (mut g, mut p, mut o) = fixtures();
        assert!(!unlink_product_from_group(&mut g, &mut p));
        assert!(!unlink_offer_from_product(&mut o, &mut p));
    }

    #[test]
    fn offer_links_are_symmetric() {
        let (_, mut p, mut o) = fixtures();
        link_offer_to_product(&mut o, &mut p);
        assert!(o.products().contains(p.id()));
        assert!(p.offers().contains(o.id()));

        assert!(unlink_offer_from_product(&mut o, &mut p));
        assert!(o.products().is_empty());
        assert!(p.offers().is_empty());
    }
}
