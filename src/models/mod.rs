mod listing;
mod report;
mod settings;
mod verdict;

pub use listing::ListingRecord;
pub use report::{AnalysisRecord, UserReport};
pub use settings::{AnalysisMode, Settings};
pub use verdict::{Flag, RiskLevel, Verdict};
