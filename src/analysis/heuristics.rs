//! Pure heuristics over a single normalized product: no I/O, no state,
//! reproducible from the same input.
//!
//! The labels are localization keys; turning them into human text is the
//! caller's concern.

use crate::product::Product;

pub const DIABETES_WARNING: &str = "diabetesWarning";
pub const BP_WARNING: &str = "bpWarning";
pub const THROAT_WARNING: &str = "throatWarning";
pub const THYROID_WARNING: &str = "thyroidWarning";
pub const ALLERGY_WARNING: &str = "allergyWarning";

pub const STORAGE_REFRIGERATE: &str = "refrigerate";
pub const STORAGE_ROOM_TEMPERATURE: &str = "roomTemperature";
pub const STORAGE_AVOID_SUNLIGHT: &str = "avoidSunlight";
pub const STORAGE_FREEZER: &str = "freezer";

/// Sugars per 100g above this suggest a diabetes risk.
const SUGAR_THRESHOLD_100G: f64 = 22.5;
/// Salt per 100g above this suggests a blood-pressure risk.
const SALT_THRESHOLD_100G: f64 = 1.5;

const IRRITANT_KEYWORDS: &[&str] = &["spicy", "chili", "hot pepper"];
const THYROID_KEYWORDS: &[&str] = &["seaweed", "kelp"];
const REFRIGERATE_KEYWORDS: &[&str] = &["milk", "dairy", "fresh", "meat"];

/// Derives health-warning labels from nutrient values, ingredient text
/// and allergen tags, in a fixed emission order.
///
/// A missing nutrient value or missing ingredient text means the
/// condition is not met; absence is explicitly treated as zero here,
/// never as an error.
pub fn analyze_health_risks(product: &Product) -> Vec<String> {
    let mut warnings = Vec::new();
    let ingredients = lowered(product.ingredients_text.as_deref());

    if product.nutriments.sugars_100g.unwrap_or(0.0) > SUGAR_THRESHOLD_100G {
        warnings.push(DIABETES_WARNING.to_string());
    }

    if product.nutriments.salt_100g.unwrap_or(0.0) > SALT_THRESHOLD_100G {
        warnings.push(BP_WARNING.to_string());
    }

    if contains_any(&ingredients, IRRITANT_KEYWORDS) {
        warnings.push(THROAT_WARNING.to_string());
    }

    if contains_any(&ingredients, THYROID_KEYWORDS) {
        warnings.push(THYROID_WARNING.to_string());
    }

    if !product.allergens_tags.is_empty() {
        warnings.push(ALLERGY_WARNING.to_string());
    }

    warnings
}

/// Derives storage-recommendation labels from ingredient text and the
/// product name. Exactly one of `refrigerate`/`roomTemperature` is
/// always emitted; the sunlight and freezer labels are independent
/// additive flags.
pub fn determine_suitable_storage(product: &Product) -> Vec<String> {
    let mut storage = Vec::new();
    let ingredients = lowered(product.ingredients_text.as_deref());
    let name = product.product_name.to_lowercase();

    let needs_cold = contains_any(&ingredients, REFRIGERATE_KEYWORDS)
        || contains_any(&name, REFRIGERATE_KEYWORDS)
        || name.contains("yogurt");
    if needs_cold {
        storage.push(STORAGE_REFRIGERATE.to_string());
    } else {
        storage.push(STORAGE_ROOM_TEMPERATURE.to_string());
    }

    if ingredients.contains("oil") || name.contains("oil") {
        storage.push(STORAGE_AVOID_SUNLIGHT.to_string());
    }

    if ingredients.contains("frozen") || name.contains("frozen") {
        storage.push(STORAGE_FREEZER.to_string());
    }

    storage
}

fn lowered(text: Option<&str>) -> String {
    text.unwrap_or_default().to_lowercase()
}

fn contains_any(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| haystack.contains(k))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::Nutriments;

    fn product_with(sugars: Option<f64>, salt: Option<f64>) -> Product {
        Product {
            nutriments: Nutriments {
                sugars_100g: sugars,
                salt_100g: salt,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn sugar_threshold_is_exclusive() {
        let at = product_with(Some(22.5), None);
        assert!(analyze_health_risks(&at).is_empty());

        let over = product_with(Some(22.51), None);
        assert_eq!(analyze_health_risks(&over), vec![DIABETES_WARNING]);
    }

    #[test]
    fn salt_threshold_is_exclusive() {
        let at = product_with(None, Some(1.5));
        assert!(analyze_health_risks(&at).is_empty());

        let over = product_with(None, Some(1.51));
        assert_eq!(analyze_health_risks(&over), vec![BP_WARNING]);
    }

    #[test]
    fn keyword_checks_ignore_case() {
        let product = Product {
            ingredients_text: Some("Contains CHILI powder".to_string()),
            ..Default::default()
        };
        assert_eq!(analyze_health_risks(&product), vec![THROAT_WARNING]);
    }

    #[test]
    fn thyroid_keywords_trigger_warning() {
        let product = Product {
            ingredients_text: Some("rice, dried kelp, sesame".to_string()),
            ..Default::default()
        };
        assert_eq!(analyze_health_risks(&product), vec![THYROID_WARNING]);
    }

    #[test]
    fn allergen_tags_trigger_generic_warning() {
        let product = Product {
            allergens_tags: vec!["en:peanuts".to_string()],
            ..Default::default()
        };
        assert_eq!(analyze_health_risks(&product), vec![ALLERGY_WARNING]);
    }

    #[test]
    fn warnings_emit_in_fixed_order() {
        let product = Product {
            nutriments: Nutriments {
                sugars_100g: Some(40.0),
                salt_100g: Some(2.0),
                ..Default::default()
            },
            ingredients_text: Some("sugar, chili, seaweed extract".to_string()),
            allergens_tags: vec!["en:soy".to_string()],
            ..Default::default()
        };
        assert_eq!(
            analyze_health_risks(&product),
            vec![
                DIABETES_WARNING,
                BP_WARNING,
                THROAT_WARNING,
                THYROID_WARNING,
                ALLERGY_WARNING
            ]
        );
    }

    #[test]
    fn missing_fields_never_trigger_warnings() {
        let product = Product::default();
        assert!(analyze_health_risks(&product).is_empty());
    }

    #[test]
    fn analysis_is_deterministic() {
        let product = Product {
            nutriments: Nutriments {
                sugars_100g: Some(30.0),
                ..Default::default()
            },
            ingredients_text: Some("milk, sugar, hot pepper".to_string()),
            ..Default::default()
        };
        assert_eq!(analyze_health_risks(&product), analyze_health_risks(&product));
        assert_eq!(
            determine_suitable_storage(&product),
            determine_suitable_storage(&product)
        );
    }

    #[test]
    fn storage_emits_exactly_one_temperature_label() {
        let cold = Product {
            ingredients_text: Some("Pasteurized MILK, cultures".to_string()),
            ..Default::default()
        };
        let labels = determine_suitable_storage(&cold);
        assert!(labels.contains(&STORAGE_REFRIGERATE.to_string()));
        assert!(!labels.contains(&STORAGE_ROOM_TEMPERATURE.to_string()));

        let dry = Product {
            ingredients_text: Some("wheat flour, water, salt".to_string()),
            ..Default::default()
        };
        let labels = determine_suitable_storage(&dry);
        assert!(labels.contains(&STORAGE_ROOM_TEMPERATURE.to_string()));
        assert!(!labels.contains(&STORAGE_REFRIGERATE.to_string()));
    }

    #[test]
    fn yogurt_in_name_needs_refrigeration() {
        let product = Product {
            product_name: "Greek Yogurt".to_string(),
            ..Default::default()
        };
        assert_eq!(determine_suitable_storage(&product), vec![STORAGE_REFRIGERATE]);
    }

    #[test]
    fn sunlight_and_freezer_flags_are_additive() {
        let product = Product {
            product_name: "Frozen fish fillets".to_string(),
            ingredients_text: Some("fish, sunflower oil".to_string()),
            ..Default::default()
        };
        assert_eq!(
            determine_suitable_storage(&product),
            vec![
                STORAGE_ROOM_TEMPERATURE,
                STORAGE_AVOID_SUNLIGHT,
                STORAGE_FREEZER
            ]
        );
    }
}
