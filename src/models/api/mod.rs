pub mod params;
pub mod response;

pub use params::{ParamsCompare, ParamsScore};
pub use response::{AnalysisResponse, CompareBody, NormalizeBody, ScoreBody};
