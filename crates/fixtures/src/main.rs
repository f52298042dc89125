use anyhow::Context;
use serde::Serialize;

use pdc_fixtures::{datasets, CatalogueGraph, CatalogueSeeder, SeedReport};
use pdc_infra::{CommonGroundResolver, InMemoryCatalogueStore, SeedConfig};

#[derive(Serialize)]
struct Output {
    report: SeedReport,
    graph: CatalogueGraph,
}

fn main() -> anyhow::Result<()> {
    pdc_observability::init();

    let config = SeedConfig::from_env().context("reading seed configuration")?;
    tracing::info!(
        domain = config.domain(),
        build_all = config.build_all_fixtures,
        policy = ?config.duplicate_policy,
        "starting seed run"
    );

    let store = InMemoryCatalogueStore::with_policy(config.duplicate_policy);
    let resolver = CommonGroundResolver::from_config(&config).context("configuring organization resolver")?;

    let report = CatalogueSeeder::new(&store, &resolver).seed_all(&datasets::all(), &config)?;
    let graph = CatalogueGraph::load(&store).context("reading back seeded graph")?;

    let out = serde_json::to_string_pretty(&Output { report, graph })?;
    println!("{out}");
    Ok(())
}
