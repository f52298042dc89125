//! Base dataset: national and municipal catalogues plus the Utrecht wedding
//! products. Loaded on every deployment.

use pdc_catalogue::{Audience, ProductType};

use crate::activation::ActivationRule;
use crate::dataset::{CatalogueSeed, Dataset, GroupSeed, OrgRef, ProductSeed};
use crate::ids;

pub const NAME: &str = "utrecht";

const UTRECHT: &str = "catalogue.utrecht";
const UTRECHT_ORG: OrgRef = OrgRef::literal("002220647");

const BURGERZAKEN: &str = "Alle producten met betrekking tot burgerzaken";

const TROUWAMBTENAREN: &str = "<p>Een trouwambtenaar heet officieel een buitengewoon ambtenaar van de burgerlijke stand (babs ). \
Een babs waarmee het klikt is belangrijk. Hieronder stellen de babsen van de gemeente Utrecht zich aan u voor. \
U kunt een voorkeur aangeven voor een van hen, dan krijgt u data te zien waarop die babs beschikbaar is. \
Wanneer u een babs heeft gekozen zal deze na de melding voorgenomen huwelijk, zelf contact met u opnemen.</p>

<p>Kiest u liever voor een babs uit een andere gemeente? Of voor een vriend of familielid als trouwambtenaar? \
Dan kunt u hem of haar laten benoemen tot trouwambtenaar voor 1 dag bij de gemeente Utrecht. Dit kunt u hier ook opgeven.</p>

<p>Bij een gratis of een eenvoudig huwelijk of geregistreerd partnerschap kunt u niet zelf een babs kiezen, de gemeente wijst er een toe.</p>";

const TROUWLOCATIES: &str = "<p>Een trouwlocatie; in Utrecht is er voor elk wat wils. \
De gemeente Utrecht heeft een aantal eigen trouwlocaties; het Stadhuis, het Wijkservicecentrum in Vleuten en het Stadskantoor. \
Een keuze voor een van deze trouwlocaties kunt u direct hier doen.</p>

<p>Daarnaast zijn er verschillende andere vaste trouwlocaties. Deze trouwlocaties zijn door de gemeente Utrecht al goedgekeurd. \
Hieronder vindt u het overzicht van deze trouwlocaties. Heeft u een keuze gemaakt uit een van de vaste trouwlocaties? \
Maak dan eerst een afspraak met de locatie en geef dan aan ons door waar en wanneer u wilt trouwen.</p>

<p>Maar misschien wilt u een heel andere locatie. Bijvoorbeeld het caf&eacute; om de hoek, bij u thuis of in uw favoriete restaurant. \
Zo'n locatie heet een vrije locatie. Een aanvraag voor een vrije locatie kunt u hier ook doen.</p>";

const STADSKANTOOR: &str = "Deze locatie is speciaal voor eenvoudige en gratis huwelijken.
 De zaal ligt op de 6e etage van het Stadskantoor.
 De ruimte is eenvoudig en toch heel intiem.
 Het licht is in te stellen op een kleur die jullie graag willen.";

const STADHUIS: &str = "Deze uiterst sfeervolle trouwzaal maakt de dag compleet";

const MOVIE_CEREMONY: &str = "https://www.youtube.com/embed/DAaoMvj1Qbs";
const MOVIE_DEFAULT: &str = "https://www.youtube.com/embed/RkBZYoMnx5w";
const TROUWAMBTENAAR_LOGO: &str = "https://huwelijksplanner.online/images/content/ambtenaar/trouwambtenaar.jpg";

const CEREMONIES: &[&str] = &["group.trouwen", "group.ceremonies"];
const AMBTENAREN: &[&str] = &["group.trouwen", "group.trouwambtenaren"];
const LOCATIES: &[&str] = &["group.trouwen", "group.trouwlocaties"];
const EXTRA: &[&str] = &["group.trouwen", "group.extra"];

fn utrecht_group(key: &'static str, name: &'static str, description: &'static str) -> GroupSeed {
    GroupSeed::new(key, UTRECHT, name, UTRECHT_ORG).description(description)
}

/// Utrecht wedding product: EUR, no tax, no appointment, public.
fn wedding(
    key: &'static str,
    name: &'static str,
    description: &'static str,
    product_type: ProductType,
    price: &'static str,
    groups: &[&'static str],
) -> ProductSeed {
    ProductSeed::new(key, UTRECHT, name, UTRECHT_ORG)
        .description(description)
        .product_type(product_type)
        .price(price, "EUR")
        .tax_percentage(0)
        .requires_appointment(false)
        .audience(Audience::Public)
        .groups(groups)
}

fn officiant(key: &'static str, name: &'static str, description: &'static str, logo: &'static str) -> ProductSeed {
    wedding(key, name, description, ProductType::Person, "0.00", AMBTENAREN)
        .logo(logo)
        .movie(MOVIE_CEREMONY)
}

pub fn dataset() -> Dataset {
    Dataset::new(NAME, ActivationRule::Always, ids::UTRECHT)
        .catalogue(CatalogueSeed::new(
            "catalogue.vng",
            "Vereniging Nederlandse Gemeenten",
            OrgRef::literal("0000"),
        ))
        .catalogue(CatalogueSeed::new(
            "catalogue.den-bosch",
            "Gemeente 's-Hertogenbosch",
            OrgRef::literal("001709124"),
        ))
        .catalogue(CatalogueSeed::new(
            "catalogue.eindhoven",
            "Gemeente Eindhoven",
            OrgRef::literal("001902763"),
        ))
        .catalogue(CatalogueSeed::new(UTRECHT, "Gemeente Utrecht", UTRECHT_ORG))
        .group(
            GroupSeed::new(
                "group.burgerzaken-den-bosch",
                "catalogue.den-bosch",
                "Burgerzaken",
                OrgRef::literal("001709124"),
            )
            .description(BURGERZAKEN),
        )
        .group(
            GroupSeed::new(
                "group.burgerzaken-eindhoven",
                "catalogue.eindhoven",
                "Burgerzaken",
                OrgRef::literal("1234567"),
            )
            .description(BURGERZAKEN),
        )
        .group(utrecht_group("group.burgerzaken-utrecht", "Burgerzaken", BURGERZAKEN))
        .group(utrecht_group("group.trouwen", "Trouwproducten", BURGERZAKEN))
        .group(utrecht_group("group.trouwambtenaren", "Trouwambtenaren", TROUWAMBTENAREN))
        .group(utrecht_group("group.trouwlocaties", "Trouwlocaties", TROUWLOCATIES))
        .group(utrecht_group(
            "group.ceremonies",
            "Ceremonies",
            "Verschillende ceremonies voor uw huwelijk / partnerschap",
        ))
        .group(utrecht_group("group.extra", "Extra producten", "Extra producten voor bij uw huwelijk"))
        // Ceremonies
        .product(wedding(
            "product.trouwen-partnerschap",
            "Trouwen / Partnerschap",
            "Trouwen",
            ProductType::Set,
            "627.00",
            CEREMONIES,
        ))
        .product(wedding(
            "product.eenvoudig-trouwen",
            "Eenvoudig Trouwen",
            "Eenvoudig Trouwen",
            ProductType::Set,
            "163.00",
            CEREMONIES,
        ))
        .product(wedding(
            "product.gratis-trouwen",
            "Gratis Trouwen",
            "Gratis Trouwen",
            ProductType::Set,
            "0.00",
            CEREMONIES,
        ))
        // Officiants
        .product(officiant(
            "product.erik-hendrik",
            "Dhr Erik Hendrik",
            "<p>Als Buitengewoon Ambtenaar van de Burgerlijke Stand geef ik, in overleg met het bruidspaar, \
invulling aan de huwelijksceremonie.</p>",
            "https://huwelijksplanner.online/images/content/ambtenaar/erik.jpg",
        ))
        .product(officiant(
            "product.ike-van-den-pol",
            "Mvr Ike van den Pol",
            "<p>Elkaar het Ja-woord geven, de officiële ceremonie. Vaak is dit het romantische hoogtepunt van de trouwdag. \
Een bijzonder moment, gedeeld met de mensen die je lief zijn. Een persoonlijke ceremonie, passend bij jullie relatie. \
Alles is bespreekbaar en maatwerk. Een originele trouwplechtigheid waar muziek, sprekers en kinderen een rol kunnen spelen. \
Een ceremonie met inhoud, ernst en humor, een traan en een lach, stijlvol, spontaan en ontspannen.</p>",
            "https://huwelijksplanner.online/images/content/ambtenaar/ike.jpg",
        ))
        .product(officiant(
            "product.rene-gulje",
            "Dhr. Rene Gulje",
            "<p>Ik ben Rene Gulje, in 1949 in Amsterdam geboren. Ik studeerde Nederlands aan de UVA en journalistiek aan de HU.</p>",
            "https://huwelijksplanner.online/images/content/ambtenaar/rene.jpg",
        ))
        .product(
            wedding(
                "product.toegewezen-trouwambtenaar",
                "Toegewezen Trouwambtenaar",
                "Uw trouwambtenaar wordt toegewezen, over enkele dagen krijgt u bericht van uw toegewezen trouwambtenaar!",
                ProductType::Simple,
                "0.00",
                AMBTENAREN,
            )
            .logo(TROUWAMBTENAAR_LOGO)
            .movie(MOVIE_DEFAULT),
        )
        .product(
            wedding(
                "product.stagair-trouwambtenaar",
                "Stagair Trouwambtenaar",
                "Een stagair trouwambtenaar wordt aan uw huwelijk toegewezen.",
                ProductType::Simple,
                "0.00",
                AMBTENAREN,
            )
            .logo(TROUWAMBTENAAR_LOGO)
            .movie(MOVIE_DEFAULT)
            .audience(Audience::Internal),
        )
        // Locations
        .product(
            wedding("product.stadskantoor", "Stadskantoor", STADSKANTOOR, ProductType::Simple, "0.00", LOCATIES)
                .logo("https://www.utrecht.nl/fileadmin/uploads/documenten/9.digitaalloket/Burgerzaken/Trouwzaal-Stadskantoor-Utrecht.jpg")
                .movie(MOVIE_CEREMONY),
        )
        .product(
            wedding("product.stadhuis-kleine-zaal", "Stadhuis kleine zaal", STADHUIS, ProductType::Simple, "0.00", LOCATIES)
                .logo("https://www.utrecht.nl/fileadmin/uploads/documenten/9.digitaalloket/Burgerzaken/kleine-trouwzaal-stadhuis-utrecht.jpg")
                .movie(MOVIE_CEREMONY),
        )
        .product(
            wedding("product.stadhuis-grote-zaal", "Stadhuis grote zaal", STADHUIS, ProductType::Simple, "0.00", LOCATIES)
                .logo("https://www.utrecht.nl/fileadmin/uploads/documenten/9.digitaalloket/Burgerzaken/grote-trouwzaal-stadhuis-utrecht.jpg")
                .movie(MOVIE_CEREMONY),
        )
        .product(
            wedding("product.vrije-locatie", "Vrije locatie", "Vrije locatie", ProductType::Simple, "0.00", LOCATIES)
                .movie(MOVIE_CEREMONY),
        )
        // Extras
        .product(
            wedding(
                "product.trouwboekje",
                "Trouwboekje",
                "Een mooi in leer gebonden herinnering aan uw huwelijk",
                ProductType::Simple,
                "30.20",
                EXTRA,
            )
            .movie(MOVIE_CEREMONY),
        )
        .product(
            wedding(
                "product.ringen",
                "Ringen",
                "Het uitwisselen van ringen tijdens de huwelijksceremonie",
                ProductType::Simple,
                "10.00",
                EXTRA,
            )
            .movie(MOVIE_CEREMONY),
        )
        .product(wedding(
            "product.geen-extras",
            "Geen extra's",
            "U wilt geen extra producten bij uw huwelijk",
            ProductType::Simple,
            "0.00",
            EXTRA,
        ))
}
