use async_trait::async_trait;
use log::warn;
use serde_json::Value;

use crate::api::SecondarySource;
use crate::config::FoodConfig;
use crate::product::{Nutriments, Product};

/// Adapter for the USDA FoodData Central search endpoint. Nutrients are
/// reported as a flat list and matched by display name, not code.
#[derive(Debug)]
pub struct UsdaClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl UsdaClient {
    pub fn new(config: &FoodConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: config.usda_api_key.clone(),
            base_url: "https://api.nal.usda.gov/fdc/v1".to_string(),
        }
    }

    async fn fetch(&self, query: &str) -> Result<Value, reqwest::Error> {
        let url = format!("{}/foods/search", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str()), ("query", query)])
            .send()
            .await?
            .error_for_status()?;

        response.json().await
    }
}

#[async_trait]
impl SecondarySource for UsdaClient {
    fn name(&self) -> &'static str {
        "usda"
    }

    async fn search(&self, query: &str) -> Option<Vec<Product>> {
        match self.fetch(query).await {
            Ok(data) => Some(map_response(&data)),
            Err(e) => {
                warn!("USDA search for '{}' failed: {}", query, e);
                None
            }
        }
    }
}

fn map_response(data: &Value) -> Vec<Product> {
    data.get("foods")
        .and_then(|f| f.as_array())
        .map(|foods| foods.iter().map(map_food).collect())
        .unwrap_or_default()
}

fn map_food(food: &Value) -> Product {
    Product {
        id: food
            .get("fdcId")
            .map(|id| id.to_string().trim_matches('"').to_string())
            .unwrap_or_default(),
        product_name: food
            .get("description")
            .and_then(|d| d.as_str())
            .unwrap_or_default()
            .to_string(),
        image_url: food
            .get("foodImage")
            .and_then(|i| i.as_str())
            .map(str::to_string),
        // A nutrient absent from the list stays None; zero only comes
        // from the source actually reporting zero.
        nutriments: Nutriments {
            energy_100g: nutrient(food, "Energy"),
            carbohydrates_100g: nutrient(food, "Carbohydrate, by difference"),
            sugars_100g: nutrient(food, "Total Sugars"),
            fat_100g: nutrient(food, "Total lipid (fat)"),
            proteins_100g: nutrient(food, "Protein"),
            salt_100g: nutrient(food, "Sodium, Na"),
            ..Default::default()
        },
        ingredients_text: food
            .get("ingredients")
            .and_then(|i| i.as_str())
            .map(str::to_string),
        ..Default::default()
    }
}

fn nutrient(food: &Value, name: &str) -> Option<f64> {
    food.get("foodNutrients")
        .and_then(|n| n.as_array())?
        .iter()
        .find(|n| n.get("nutrientName").and_then(|name_val| name_val.as_str()) == Some(name))
        .and_then(|n| n.get("value"))
        .and_then(|v| v.as_f64())
}
