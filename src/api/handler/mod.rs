pub mod handler;

pub use handler::{compare_handler, health_handler, normalize_handler, score_handler};
