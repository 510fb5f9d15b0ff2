use async_trait::async_trait;
use log::info;
use serde::Deserialize;
use thiserror::Error;

use crate::api::PrimarySource;
use crate::product::{Product, SearchResult};

/// Failure from the primary source. Always surfaced to the caller;
/// no retries happen at this layer.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("request to primary source failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("primary source returned status {0}")]
    Status(reqwest::StatusCode),
}

#[derive(Debug, Deserialize)]
struct BarcodeResponse {
    status: u8,
    product: Option<Product>,
}

/// Client for the Open Food Facts v2 API, the authoritative product database.
#[derive(Debug, Clone)]
pub struct OpenFoodFactsClient {
    client: reqwest::Client,
    base_url: String,
}

impl OpenFoodFactsClient {
    pub fn new() -> Self {
        Self::with_base_url("https://world.openfoodfacts.org/api/v2".to_string())
    }

    pub fn with_base_url(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Looks up a single product by barcode. `lang` is a hint for
    /// translated text fields only. `Ok(None)` means the source
    /// explicitly reported the barcode as unknown (a normal negative
    /// result, not a fault).
    pub async fn fetch_by_barcode(
        &self,
        barcode: &str,
        lang: &str,
    ) -> Result<Option<Product>, LookupError> {
        let url = format!("{}/product/{}", self.base_url, barcode);
        let response = self
            .client
            .get(&url)
            .query(&[("lc", lang)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(LookupError::Status(response.status()));
        }

        let data: BarcodeResponse = response.json().await?;
        if data.status == 0 {
            info!("Barcode {} not found in primary source", barcode);
            return Ok(None);
        }

        Ok(data.product)
    }

    /// Free-text product search, one page per call.
    pub async fn search(
        &self,
        query: &str,
        lang: &str,
        page: u32,
        page_size: u32,
    ) -> Result<SearchResult, LookupError> {
        let url = format!("{}/search", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("search_terms", query),
                ("lc", lang),
                ("page", &page.to_string()),
                ("page_size", &page_size.to_string()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(LookupError::Status(response.status()));
        }

        Ok(response.json().await?)
    }
}

impl Default for OpenFoodFactsClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PrimarySource for OpenFoodFactsClient {
    async fn fetch_by_barcode(
        &self,
        barcode: &str,
        lang: &str,
    ) -> Result<Option<Product>, LookupError> {
        OpenFoodFactsClient::fetch_by_barcode(self, barcode, lang).await
    }

    async fn search(
        &self,
        query: &str,
        lang: &str,
        page: u32,
        page_size: u32,
    ) -> Result<SearchResult, LookupError> {
        OpenFoodFactsClient::search(self, query, lang, page, page_size).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn barcode_response_status_zero_has_no_product() {
        let data: BarcodeResponse = serde_json::from_str(r#"{"status": 0}"#).unwrap();
        assert_eq!(data.status, 0);
        assert!(data.product.is_none());
    }

    #[test]
    fn barcode_response_decodes_product_fields() {
        let raw = r#"{
            "status": 1,
            "product": {
                "id": "3017620422003",
                "product_name": "Nutella",
                "image_url": "https://images.example/nutella.jpg",
                "nutriments": {"sugars_100g": 56.3, "salt_100g": 0.107},
                "allergens_tags": ["en:milk", "en:nuts"],
                "nutrition_grades": "e"
            }
        }"#;
        let data: BarcodeResponse = serde_json::from_str(raw).unwrap();
        let product = data.product.unwrap();
        assert_eq!(product.product_name, "Nutella");
        assert_eq!(product.nutriments.sugars_100g, Some(56.3));
        assert_eq!(product.allergens_tags, vec!["en:milk", "en:nuts"]);
        assert_eq!(product.nutrition_grades.as_deref(), Some("e"));
    }

    #[test]
    fn search_result_decodes_paged_listing() {
        let raw = r#"{
            "count": 2,
            "page": 1,
            "page_size": 10,
            "products": [
                {"id": "1", "product_name": "Oat milk"},
                {"id": "2", "product_name": "Almond milk"}
            ]
        }"#;
        let result: SearchResult = serde_json::from_str(raw).unwrap();
        assert_eq!(result.count, 2);
        assert_eq!(result.products.len(), 2);
        assert_eq!(result.products[1].product_name, "Almond milk");
    }
}
