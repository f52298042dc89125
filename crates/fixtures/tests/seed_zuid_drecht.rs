use pdc_core::Entity;
use pdc_fixtures::datasets::zuid_drecht;
use pdc_fixtures::{CatalogueGraph, CatalogueSeeder, DatasetStatus};
use pdc_infra::{CommonGroundResolver, InMemoryCatalogueStore, SeedConfig};

const ZUID_DRECHT_ORG: &str = "https://wrc.zuid-drecht.nl/organizations/4d1eded3-fbdf-438f-9536-8747dd8ab591";

fn config() -> SeedConfig {
    SeedConfig {
        domain: Some("zuid-drecht.nl".to_string()),
        ..SeedConfig::default()
    }
}

fn seeded() -> CatalogueGraph {
    let config = config();
    let store = InMemoryCatalogueStore::new();
    let resolver = CommonGroundResolver::from_config(&config).unwrap();

    let outcome = CatalogueSeeder::new(&store, &resolver)
        .seed(&zuid_drecht::dataset(), &config)
        .unwrap();
    assert_eq!(outcome.status, DatasetStatus::Seeded);

    CatalogueGraph::load(&store).unwrap()
}

#[test]
fn one_catalogue_three_groups_four_products() {
    let graph = seeded();

    assert_eq!(graph.catalogues.len(), 1);
    let catalogue = graph.catalogue_named("Gemeente Zuid Drecht").unwrap();
    assert_eq!(catalogue.source_organization(), ZUID_DRECHT_ORG);

    let mut groups: Vec<_> = graph.groups.iter().map(|g| g.name()).collect();
    groups.sort();
    assert_eq!(groups, ["Ballie producten", "Diensten", "Identietis Bewijzen"]);

    let mut products: Vec<_> = graph.products.iter().map(|p| p.name()).collect();
    products.sort();
    assert_eq!(products, ["Geboorte Aangifte", "Identiteitskaart", "Paspoort", "Rijbewijs"]);

    assert_eq!(graph.groups_of(catalogue).count(), 3);
    assert_eq!(graph.products_of(catalogue).count(), 4);
    for group in &graph.groups {
        assert_eq!(group.catalogue(), *catalogue.id());
    }
    for product in &graph.products {
        assert_eq!(product.catalogue(), *catalogue.id());
        assert!(product.requires_appointment());
    }
}

#[test]
fn group_membership_is_symmetric() {
    let graph = seeded();
    let diensten = graph.group_named("Diensten").unwrap();

    for name in ["Paspoort", "Rijbewijs", "Identiteitskaart"] {
        let product = graph.product_named(name).unwrap();
        assert_eq!(product.groups().len(), 3, "{name}");
        for group in &graph.groups {
            assert!(group.has_product(*product.id()), "{name} in {}", group.name());
        }
    }

    let geboorte = graph.product_named("Geboorte Aangifte").unwrap();
    assert_eq!(geboorte.groups().len(), 1);
    assert!(geboorte.groups().contains(diensten.id()));
    assert!(diensten.has_product(*geboorte.id()));
    assert_eq!(diensten.products().len(), 4);
}

#[test]
fn identity_products_carry_two_offers() {
    let graph = seeded();

    for name in ["Paspoort", "Rijbewijs", "Identiteitskaart"] {
        let product = graph.product_named(name).unwrap();
        let mut prices: Vec<_> = graph
            .offers_of(product)
            .map(|o| o.price().unwrap().to_string())
            .collect();
        prices.sort();
        assert_eq!(prices, ["150.0 EUR", "99.99 EUR"], "{name}");

        for offer in graph.offers_of(product) {
            assert!(offer.products().contains(product.id()));
            assert_eq!(offer.offered_by(), ZUID_DRECHT_ORG);
        }
    }

    let geboorte = graph.product_named("Geboorte Aangifte").unwrap();
    assert_eq!(graph.offers_of(geboorte).count(), 1);
    assert_eq!(graph.offers.len(), 7);
}

#[test]
fn serializes_as_json_graph() {
    let graph = seeded();
    let json = serde_json::to_value(&graph).unwrap();

    assert_eq!(json["catalogues"].as_array().unwrap().len(), 1);
    let product = json["products"]
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["name"] == "Paspoort")
        .unwrap();
    assert_eq!(product["type"], "simple");
    assert_eq!(product["groups"].as_array().unwrap().len(), 3);
}
