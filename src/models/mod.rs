// src/models/mod.rs

pub mod api;
pub mod app;
pub mod comparison;
pub mod lighthouse;
pub mod record;
pub mod recommendation;
pub mod score;
pub mod sources;

pub use api::{ParamsCompare, ParamsScore};
pub use app::AppState;
pub use comparison::{ComparisonResult, Dimension, OverallVerdict, SiteComparison, Winner};
pub use record::{EssentialSource, Normalization, NormalizedSiteRecord, Sourced};
pub use recommendation::{Priority, Recommendation, RecommendationCategory};
pub use score::{ScoreCategory, ScoreMode, ScoreResult};
pub use sources::{RawSources, Settled};
