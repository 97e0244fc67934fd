// src/lib.rs

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use config::AppConfig;
pub use error::AnalysisError;
pub use services::{
    compare_sites, normalize, rank_comparison_gaps, rank_recommendations, resolve_record,
    score_health,
};
