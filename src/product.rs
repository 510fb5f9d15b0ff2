use serde::{Deserialize, Serialize};

/// A food product normalized to the Open Food Facts field names.
/// Secondary sources are reshaped into this schema by their adapters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub product_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,
    #[serde(default)]
    pub nutriments: Nutriments,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrient_levels: Option<NutrientLevels>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients_text: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allergens_tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition_grades: Option<String>,
    /// Derived by the heuristic analyzer; empty until it runs.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub health_warnings: Vec<String>,
}

/// Per-100g nutrient values. Absent means unknown, not zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Nutriments {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy_100g: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbohydrates_100g: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sugars_100g: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat_100g: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proteins_100g: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salt_100g: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fiber_100g: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sodium_100g: Option<f64>,
}

/// Open Food Facts textual nutrient levels (low/moderate/high), passthrough only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutrientLevels {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sugars: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saturated_fat: Option<String>,
}

/// One page of search results. After the aggregator merges secondary
/// sources in, `count` is recomputed as the final product count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub count: usize,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    #[serde(default)]
    pub products: Vec<Product>,
}

fn default_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    10
}
