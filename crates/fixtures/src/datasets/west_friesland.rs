//! West-Friesland municipalities and the Medemblik cemetery products.

use pdc_catalogue::{Audience, ProductType};

use crate::activation::ActivationRule;
use crate::dataset::{CatalogueSeed, Dataset, GroupSeed, OfferSeed, OrgRef, ProductSeed};
use crate::ids;

pub const NAME: &str = "west-friesland";

const MEDEMBLIK: &str = "catalogue.medemblik";
const MEDEMBLIK_ORG: OrgRef =
    OrgRef::literal("https://wrc.dev.westfriesland.commonground.nu/organizations/429e66ef-4411-4ddb-8b83-c637b37e88b5");

// Wognum Kreekland and Opperdoes Oud cemeteries.
const WK: OrgRef =
    OrgRef::literal("https://grc.dev.westfriesland.commonground.nu/cemeteries/2556c084-0687-4ca1-b098-e4f0a7292ae8");
const OO: OrgRef =
    OrgRef::literal("https://grc.dev.westfriesland.commonground.nu/cemeteries/074defab-e2eb-4eeb-a22f-caf082502db6");

const ORGEL: &str = "Gebruik van een orgel tijdens een begrafenis";
const KOFFIEKAMER: &str = "Gebruik van een koffiekamer tijdens een begrafenis";
const CD_SPELER: &str = "Gebruik van een CD speler tijdens een begrafenis";

fn catalogue(key: &'static str, name: &'static str, description: &'static str, logo: &'static str, org: &'static str) -> CatalogueSeed {
    CatalogueSeed::new(key, name, OrgRef::literal(org))
        .description(description)
        .logo(logo)
}

fn cemetery_product(
    key: &'static str,
    sku: &'static str,
    name: &'static str,
    description: &'static str,
    logo: &'static str,
    org: OrgRef,
) -> ProductSeed {
    ProductSeed::new(key, MEDEMBLIK, name, org)
        .sku(sku)
        .description(description)
        .logo(logo)
        .movie("https://www.youtube.com/embed/RkBZYoMnx5w")
        .price("1.00", "EUR")
        .tax_percentage(9)
        .product_type(ProductType::Simple)
        .requires_appointment(false)
        .audience(Audience::from("string"))
        .duration("PT10M")
}

fn offer(key: &'static str, name: &'static str, description: &'static str, price: &'static str, product: &'static str) -> OfferSeed {
    OfferSeed::new(key, name, MEDEMBLIK_ORG)
        .description(description)
        .price(price, "EUR")
        .audience(Audience::Public)
        .products(&[product])
}

fn group(
    key: &'static str,
    name: &'static str,
    description: &'static str,
    logo: &'static str,
    org: OrgRef,
    product: &'static str,
) -> GroupSeed {
    GroupSeed::new(key, MEDEMBLIK, name, org)
        .icon("My Icon")
        .description(description)
        .logo(logo)
        .products(&[product])
}

pub fn dataset() -> Dataset {
    let rule = ActivationRule::domains(&[
        "begraven.zaakonline.nl",
        "westfriesland.commonground.nu",
        "zuid-drecht.nl",
    ]);

    Dataset::new(NAME, rule, ids::WEST_FRIESLAND)
        .catalogue(catalogue(
            "catalogue.sed",
            "Gemeente SED",
            "De catalogus van de Gemeente Stede Broec, Enkhuizen en Drechterland",
            "https://www.my-organization.com/GemeenteSEDlogo.png",
            "https://wrc.dev.westfriesland.commonground.nu/organizations/7033eeb4-5c77-4d88-9f40-303b538f176f",
        ))
        .catalogue(catalogue(
            "catalogue.hoorn",
            "Gemeente Hoorn",
            "De catalogus van de Gemeente Hoorn",
            "https://www.my-organization.com/GemeenteHoornlogo.png",
            "https://wrc.dev.westfriesland.commonground.nu/organizations/d736013f-ad6d-4885-b816-ce72ac3e1384",
        ))
        .catalogue(catalogue(
            MEDEMBLIK,
            "Gemeente Medemblik",
            "De catalogus van de Gemeente Medemblik",
            "https://www.my-organization.com/GemeenteMedembliklogo.png",
            "https://wrc.dev.westfriesland.commonground.nu/organizations/429e66ef-4411-4ddb-8b83-c637b37e88b5",
        ))
        .catalogue(catalogue(
            "catalogue.koggenland",
            "Gemeente Koggenland",
            "De catalogus van de Gemeente Koggenland",
            "https://www.my-organization.com/GemeenteKoggenlandlogo.png",
            "https://wrc.dev.westfriesland.commonground.nu/organizations/f050292c-973d-46ab-97ae-9d8830a59d15",
        ))
        .catalogue(catalogue(
            "catalogue.opmeer",
            "Gemeente Opmeer",
            "De catalogus van de Gemeente Opmeer",
            "https://www.my-organization.com/GemeenteOpmeerlogo.png",
            "https://wrc.dev.westfriesland.commonground.nu/organizations/16fd1092-c4d3-4011-8998-0e15e13239cf",
        ))
        // Wognum Kreekland
        .product(cemetery_product(
            "product.wk-diversen",
            "69667-2020",
            "Diversen Product",
            "Een Product voor Diversen",
            "https://www.my-organization.com/DiversenProductlogo.png",
            WK,
        ))
        .offer(offer("offer.wk-orgel", "Gebruik Orgel", ORGEL, "100.00", "product.wk-diversen"))
        .offer(offer("offer.wk-koffiekamer", "Gebruik Koffiekamer", KOFFIEKAMER, "45.00", "product.wk-diversen"))
        .offer(offer("offer.wk-cd-speler", "Gebruik CD speler", CD_SPELER, "40.00", "product.wk-diversen"))
        .group(group(
            "group.wk-diversen",
            "Diversen",
            "Een groep voor Diversen",
            "https://www.my-organization.com/Diversenlogo.png",
            WK,
            "product.wk-diversen",
        ))
        .product(cemetery_product(
            "product.wk-bijzettingsartikelen",
            "69666-2020",
            "Bijzettingsartikelen Product",
            "Een Product voor Bijzettingsartikelen",
            "https://www.my-organization.com/BijzettingsartikelenProductlogo.png",
            WK,
        ))
        .offer(offer(
            "offer.wk-bijzetting-urn",
            "Bijzetting Urn",
            "De toepassing van een bijzetting urn tijdens een begrafenis",
            "50.00",
            "product.wk-bijzettingsartikelen",
        ))
        .offer(offer(
            "offer.wk-bijzetting-asbus",
            "Bijzetting Asbus",
            "De toepassing van een bijzetting asbus tijdens een begrafenis",
            "50.00",
            "product.wk-bijzettingsartikelen",
        ))
        .group(group(
            "group.wk-bijzettingsartikelen",
            "Bijzettingsartikelen",
            "Een groep voor Bijzettingsartikelen",
            "https://www.my-organization.com/Bijzettingslogo.png",
            WK,
            "product.wk-bijzettingsartikelen",
        ))
        // Opperdoes Oud
        .product(cemetery_product(
            "product.oo-diversen",
            "69667-2020",
            "Diversen Product",
            "Een product voor Diversen",
            "https://www.my-organization.com/DiversenProductlogo.png",
            OO,
        ))
        .offer(offer("offer.oo-orgel", "Gebruik Orgel", ORGEL, "100.00", "product.oo-diversen"))
        .offer(offer("offer.oo-koffiekamer", "Gebruik Koffiekamer", KOFFIEKAMER, "45.00", "product.oo-diversen"))
        .offer(offer("offer.oo-cd-speler", "Gebruik CD speler", CD_SPELER, "40.00", "product.oo-diversen"))
        .group(group(
            "group.oo-diversen",
            "Diversen",
            "Een groep voor Diversen",
            "https://www.my-organization.com/Diversenlogo.png",
            OO,
            "product.oo-diversen",
        ))
        .product(cemetery_product(
            "product.oo-asartikelen",
            "69666-2020",
            "As artikelen Product",
            "Een Product voor as artikelen",
            "https://www.my-organization.com/BijzettingsartikelenProductlogo.png",
            OO,
        ))
        .offer(offer(
            "offer.oo-asverstrooiing",
            "Asverstrooiing",
            "De toepassing van asverstrooiing tijdens een begrafenis",
            "50.00",
            "product.oo-asartikelen",
        ))
        .group(group(
            "group.oo-asartikelen",
            "As artikelen",
            "Een groep voor as artikelen",
            "https://www.my-organization.com/Aslogo.png",
            OO,
            "product.oo-asartikelen",
        ))
}
