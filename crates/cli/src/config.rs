//! Runtime configuration: where the catalog comes from.

use std::path::Path;

use anyhow::Context;

use gymfee_membership::{Catalog, PricingEngine, PricingRules};

/// Build the engine from the built-in catalog or from a JSON catalog file.
pub fn load_engine(catalog_path: Option<&Path>) -> anyhow::Result<PricingEngine> {
    let catalog = match catalog_path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read catalog {}", path.display()))?;
            let catalog = Catalog::from_json(&raw)
                .with_context(|| format!("failed to load catalog {}", path.display()))?;
            tracing::info!(
                path = %path.display(),
                plans = catalog.plans().len(),
                features = catalog.features().len(),
                "catalog loaded"
            );
            catalog
        }
        None => Catalog::standard(),
    };

    Ok(PricingEngine::new(catalog, PricingRules::default()))
}
