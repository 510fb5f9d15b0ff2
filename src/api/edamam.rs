use async_trait::async_trait;
use log::warn;
use serde::Deserialize;

use crate::api::SecondarySource;
use crate::config::FoodConfig;
use crate::product::{Nutriments, Product};

#[derive(Debug, Deserialize)]
struct ParserResponse {
    #[serde(default)]
    hints: Vec<Hint>,
}

#[derive(Debug, Deserialize)]
struct Hint {
    food: Food,
    #[serde(rename = "foodWarnings", default)]
    food_warnings: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct Food {
    #[serde(rename = "foodId")]
    food_id: String,
    label: String,
    image: Option<String>,
    #[serde(default)]
    nutrients: FoodNutrients,
}

// Edamam reports nutrients under their nutrient codes.
#[derive(Debug, Default, Deserialize)]
struct FoodNutrients {
    #[serde(rename = "ENERC_KCAL")]
    energy: Option<f64>,
    #[serde(rename = "CHOCDF")]
    carbohydrates: Option<f64>,
    #[serde(rename = "FAT")]
    fat: Option<f64>,
    #[serde(rename = "PROCNT")]
    proteins: Option<f64>,
    #[serde(rename = "FIBTG")]
    fiber: Option<f64>,
}

/// Adapter for the Edamam food-database parser endpoint.
#[derive(Debug)]
pub struct EdamamClient {
    client: reqwest::Client,
    app_id: String,
    app_key: String,
    base_url: String,
}

impl EdamamClient {
    pub fn new(config: &FoodConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            app_id: config.edamam_app_id.clone(),
            app_key: config.edamam_app_key.clone(),
            base_url: "https://api.edamam.com/api/food-database/v2".to_string(),
        }
    }

    async fn fetch(&self, query: &str) -> Result<ParserResponse, reqwest::Error> {
        let url = format!("{}/parser", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("app_id", self.app_id.as_str()),
                ("app_key", self.app_key.as_str()),
                ("ingr", query),
            ])
            .send()
            .await?
            .error_for_status()?;

        response.json().await
    }
}

#[async_trait]
impl SecondarySource for EdamamClient {
    fn name(&self) -> &'static str {
        "edamam"
    }

    async fn search(&self, query: &str) -> Option<Vec<Product>> {
        match self.fetch(query).await {
            Ok(data) => Some(data.hints.into_iter().map(map_hint).collect()),
            Err(e) => {
                warn!("Edamam search for '{}' failed: {}", query, e);
                None
            }
        }
    }
}

fn map_hint(hint: Hint) -> Product {
    let nutrients = hint.food.nutrients;
    Product {
        id: hint.food.food_id,
        product_name: hint.food.label,
        image_url: hint.food.image,
        nutriments: Nutriments {
            energy_100g: nutrients.energy,
            carbohydrates_100g: nutrients.carbohydrates,
            // Sugars and salt are not reported by this endpoint; leave
            // them absent rather than faking zeroes.
            fat_100g: nutrients.fat,
            proteins_100g: nutrients.proteins,
            fiber_100g: nutrients.fiber,
            ..Default::default()
        },
        health_warnings: hint.food_warnings,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_hints_into_common_schema() {
        let raw = r#"{
            "hints": [{
                "food": {
                    "foodId": "food_abc",
                    "label": "Cheddar cheese",
                    "image": "https://images.example/cheddar.jpg",
                    "nutrients": {
                        "ENERC_KCAL": 402.0,
                        "CHOCDF": 1.3,
                        "FAT": 33.1,
                        "PROCNT": 24.9,
                        "FIBTG": 0.0
                    }
                },
                "foodWarnings": ["containsDairy"]
            }]
        }"#;
        let data: ParserResponse = serde_json::from_str(raw).unwrap();
        let product = map_hint(data.hints.into_iter().next().unwrap());

        assert_eq!(product.id, "food_abc");
        assert_eq!(product.product_name, "Cheddar cheese");
        assert_eq!(product.nutriments.energy_100g, Some(402.0));
        assert_eq!(product.nutriments.fiber_100g, Some(0.0));
        assert!(product.nutriments.sugars_100g.is_none());
        assert!(product.nutriments.salt_100g.is_none());
        assert_eq!(product.health_warnings, vec!["containsDairy"]);
    }

    #[test]
    fn missing_hints_decode_as_empty() {
        let data: ParserResponse = serde_json::from_str(r#"{"text": "nothing"}"#).unwrap();
        assert!(data.hints.is_empty());
    }
}
