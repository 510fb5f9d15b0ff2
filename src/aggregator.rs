use std::time::Duration;

use futures::future::join_all;
use log::{info, warn};
use tokio::time::timeout;

use crate::analysis::analyze_health_risks;
use crate::api::{
    EdamamClient, LookupError, OpenFoodFactsClient, PrimarySource, SecondarySource, UsdaClient,
};
use crate::config::FoodConfig;
use crate::product::{Product, SearchResult};

/// Primary results below this size trigger the secondary fan-out. The
/// threshold bounds third-party call volume; it says nothing about
/// result quality.
const MIN_PRIMARY_RESULTS: usize = 5;

const DEFAULT_PAGE_SIZE: u32 = 10;

/// Orchestrates the lookup clients and attaches analyzer output to
/// every product it returns. Stateless across calls.
pub struct ProductAggregator {
    primary: Box<dyn PrimarySource>,
    secondaries: Vec<Box<dyn SecondarySource>>,
    secondary_timeout: Duration,
}

impl ProductAggregator {
    pub fn new(config: &FoodConfig) -> Self {
        Self::with_sources(
            Box::new(OpenFoodFactsClient::new()),
            vec![
                Box::new(UsdaClient::new(config)),
                Box::new(EdamamClient::new(config)),
            ],
            config.secondary_timeout,
        )
    }

    pub fn with_sources(
        primary: Box<dyn PrimarySource>,
        secondaries: Vec<Box<dyn SecondarySource>>,
        secondary_timeout: Duration,
    ) -> Self {
        Self {
            primary,
            secondaries,
            secondary_timeout,
        }
    }

    /// Keyword search. Primary-source failures propagate; when the
    /// primary under-returns, the secondary sources are consulted
    /// concurrently and their products appended in source order, with
    /// no deduplication across sources.
    pub async fn search_products(
        &self,
        query: &str,
        lang: &str,
        page: u32,
    ) -> Result<SearchResult, LookupError> {
        let mut result = self
            .primary
            .search(query, lang, page, DEFAULT_PAGE_SIZE)
            .await?;

        if result.products.len() < MIN_PRIMARY_RESULTS {
            info!(
                "Primary search for '{}' returned {} products, consulting secondary sources",
                query,
                result.products.len()
            );

            let deadline = self.secondary_timeout;
            let lookups = self.secondaries.iter().map(|source| async move {
                match timeout(deadline, source.search(query)).await {
                    Ok(products) => (source.name(), products),
                    Err(_) => {
                        warn!(
                            "Secondary source {} timed out after {:?}",
                            source.name(),
                            deadline
                        );
                        (source.name(), None)
                    }
                }
            });

            // A join, not a race: the slower source bounds this branch.
            for (name, products) in join_all(lookups).await {
                match products {
                    Some(extra) => {
                        info!("Secondary source {} contributed {} products", name, extra.len());
                        result.products.extend(extra);
                    }
                    None => info!("Secondary source {} unavailable, skipping", name),
                }
            }

            result.count = result.products.len();
        }

        for product in &mut result.products {
            attach_warnings(product);
        }

        Ok(result)
    }

    /// Barcode lookup against the primary source only; no secondary
    /// fallback applies here. `Ok(None)` is a normal negative result.
    pub async fn product_by_barcode(
        &self,
        barcode: &str,
        lang: &str,
    ) -> Result<Option<Product>, LookupError> {
        let product = self.primary.fetch_by_barcode(barcode, lang).await?;
        Ok(product.map(|mut p| {
            attach_warnings(&mut p);
            p
        }))
    }
}

/// Appends analyzer labels not already present, keeping any warnings a
/// source reported itself. Recomputing on an analyzed product is a
/// no-op, so the attachment stays idempotent.
fn attach_warnings(product: &mut Product) {
    for label in analyze_health_risks(product) {
        if !product.health_warnings.contains(&label) {
            product.health_warnings.push(label);
        }
    }
}
