pub mod heuristics;

pub use heuristics::{analyze_health_risks, determine_suitable_storage};
