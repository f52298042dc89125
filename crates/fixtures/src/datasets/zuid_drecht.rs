//! Gemeente Zuid-Drecht: identity documents and civil services.

use pdc_catalogue::{Audience, ProductType};

use crate::activation::ActivationRule;
use crate::dataset::{CatalogueSeed, Dataset, GroupSeed, OfferSeed, OrgRef, ProductSeed};
use crate::ids;

pub const NAME: &str = "zuid-drecht";

const ORG: OrgRef = OrgRef::component("wrc", "organizations", "4d1eded3-fbdf-438f-9536-8747dd8ab591");
const CATALOGUE: &str = "catalogue.zuid-drecht";

const GROUP_DESCRIPTION: &str = "Een groep voor de grafsoorten van de begraafplaats Zuiderveld in gemeente Hoorn";
const GROUP_LOGO: &str = "https://www.my-organization.com/Diversenlogo.png";

const ALL_GROUPS: &[&str] = &["group.ballie", "group.identiteit", "group.diensten"];

fn group(key: &'static str, name: &'static str) -> GroupSeed {
    GroupSeed::new(key, CATALOGUE, name, ORG)
        .icon("My Icon")
        .description(GROUP_DESCRIPTION)
        .logo(GROUP_LOGO)
}

fn product(key: &'static str, name: &'static str, description: &'static str, groups: &[&'static str]) -> ProductSeed {
    ProductSeed::new(key, CATALOGUE, name, ORG)
        .description(description)
        .product_type(ProductType::Simple)
        .requires_appointment(true)
        .groups(groups)
}

fn offer(key: &'static str, name: &'static str, description: &'static str, price: &'static str, product: &'static str) -> OfferSeed {
    OfferSeed::new(key, name, ORG)
        .description(description)
        .price(price, "EUR")
        .audience(Audience::Public)
        .products(&[product])
}

pub fn dataset() -> Dataset {
    const PASPOORT: &str = "Verniewen of aanvragen van een paspoort";
    const RIJBEWIJS: &str = "Verniewen of aanvragen van een rijbewijs";
    const ID_KAART: &str = "Verniewen of aanvragen van een Identiteitskaart";
    const GEBOORTE: &str = "Verniewen of aanvragen van een geboorte aangifte";

    Dataset::new(NAME, ActivationRule::domains(&["zuid-drecht.nl"]), ids::ZUID_DRECHT)
        .catalogue(
            CatalogueSeed::new(CATALOGUE, "Gemeente Zuid Drecht", ORG)
                .description("De catalogus van de Gemeente zuid Drecht")
                .logo("https://www.my-organization.com/GemeenteSEDlogo.png"),
        )
        .group(group("group.ballie", "Ballie producten"))
        .group(group("group.identiteit", "Identietis Bewijzen"))
        .group(group("group.diensten", "Diensten"))
        .product(product("product.paspoort", "Paspoort", PASPOORT, ALL_GROUPS))
        .product(product("product.rijbewijs", "Rijbewijs", RIJBEWIJS, ALL_GROUPS))
        .product(product("product.identiteitskaart", "Identiteitskaart", ID_KAART, ALL_GROUPS))
        .product(product(
            "product.geboorte-aangifte",
            "Geboorte Aangifte",
            GEBOORTE,
            &["group.diensten"],
        ))
        .offer(offer("offer.paspoort-aanvragen", "Paspoort aanvragen/vernieuwen", PASPOORT, "99.99", "product.paspoort"))
        .offer(offer("offer.paspoort-gestolen", "Paspoort gestolen/veloren", PASPOORT, "150.0", "product.paspoort"))
        .offer(offer("offer.rijbewijs-aanvragen", "Rijbewijs aanvragen/verlengen", RIJBEWIJS, "99.99", "product.rijbewijs"))
        .offer(offer("offer.rijbewijs-gestolen", "Rijbewijs gestolen/veloren", RIJBEWIJS, "150.0", "product.rijbewijs"))
        .offer(offer(
            "offer.identiteitskaart-aanvragen",
            "Identiteitskaart aanvragen/verlengen",
            ID_KAART,
            "99.99",
            "product.identiteitskaart",
        ))
        .offer(offer(
            "offer.identiteitskaart-gestolen",
            "Identiteitskaart gestolen/veloren",
            ID_KAART,
            "150.0",
            "product.identiteitskaart",
        ))
        .offer(offer("offer.geboorte-aangifte", "Geboorte Aangifte", GEBOORTE, "99.99", "product.geboorte-aangifte"))
}
