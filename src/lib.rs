pub mod aggregator;
pub mod analysis;
pub mod api;
pub mod config;
pub mod product;

// Re-export commonly used items
pub use aggregator::ProductAggregator;
pub use analysis::{analyze_health_risks, determine_suitable_storage};
pub use api::LookupError;
pub use config::FoodConfig;
pub use product::{Product, SearchResult};
