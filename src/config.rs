use std::env;
use std::time::Duration;

/// Credentials and tuning for the lookup clients.
///
/// The secondary sources ship with their public demo placeholders so the
/// pipeline stays usable without provisioning; real keys come from the
/// environment (or a `.env` file loaded by the binary).
#[derive(Debug, Clone)]
pub struct FoodConfig {
    pub usda_api_key: String,
    pub edamam_app_id: String,
    pub edamam_app_key: String,
    /// Deadline applied to each secondary-source call during fan-out.
    pub secondary_timeout: Duration,
}

const DEFAULT_SECONDARY_TIMEOUT_SECS: u64 = 5;

impl FoodConfig {
    pub fn from_env() -> Self {
        let secondary_timeout_secs = env::var("SECONDARY_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_SECONDARY_TIMEOUT_SECS);

        Self {
            usda_api_key: env::var("USDA_API_KEY").unwrap_or_else(|_| "DEMO_KEY".to_string()),
            edamam_app_id: env::var("EDAMAM_APP_ID").unwrap_or_else(|_| "YOUR_APP_ID".to_string()),
            edamam_app_key: env::var("EDAMAM_APP_KEY")
                .unwrap_or_else(|_| "YOUR_APP_KEY".to_string()),
            secondary_timeout: Duration::from_secs(secondary_timeout_secs),
        }
    }
}

impl Default for FoodConfig {
    fn default() -> Self {
        Self {
            usda_api_key: "DEMO_KEY".to_string(),
            edamam_app_id: "YOUR_APP_ID".to_string(),
            edamam_app_key: "YOUR_APP_KEY".to_string(),
            secondary_timeout: Duration::from_secs(DEFAULT_SECONDARY_TIMEOUT_SECS),
        }
    }
}
