// src/services/mod.rs

pub mod comparison_service;
pub mod fetch_service;
pub mod normalize_service;
pub mod recommendation_service;
pub mod scoring_service;

pub use comparison_service::compare_sites;
pub use fetch_service::{resolve_record, ServiceFetcher, SourceFetcher};
pub use normalize_service::normalize;
pub use recommendation_service::{rank_comparison_gaps, rank_recommendations};
pub use scoring_service::score_health;
