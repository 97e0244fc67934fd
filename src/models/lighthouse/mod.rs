pub mod audit;
pub mod category;
pub mod report;

pub use audit::{Audit, AuditDetails};
pub use category::{Categories, Category, CategoryScoresInput};
pub use report::{LighthouseInput, LighthouseReport, LighthouseSummaryInput};
