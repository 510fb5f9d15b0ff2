use async_trait::async_trait;

use crate::product::{Product, SearchResult};

pub mod edamam;
pub mod openfoodfacts;
pub mod usda;

// Re-export common types
pub use edamam::EdamamClient;
pub use openfoodfacts::{LookupError, OpenFoodFactsClient};
pub use usda::UsdaClient;

/// The authoritative product database. Failures here always surface
/// to the caller as a `LookupError`.
#[async_trait]
pub trait PrimarySource: Send + Sync {
    async fn fetch_by_barcode(
        &self,
        barcode: &str,
        lang: &str,
    ) -> Result<Option<Product>, LookupError>;

    async fn search(
        &self,
        query: &str,
        lang: &str,
        page: u32,
        page_size: u32,
    ) -> Result<SearchResult, LookupError>;
}

/// A supplementary nutrition source, consulted only when the primary
/// search under-returns. Failures are tolerated, never propagated:
/// `None` means "source unavailable, zero additional results".
#[async_trait]
pub trait SecondarySource: Send + Sync {
    fn name(&self) -> &'static str;

    async fn search(&self, query: &str) -> Option<Vec<Product>>;
}
