pub mod initialize;
pub mod predictions;
pub mod stats;
pub mod store;
pub mod visits;

pub use predictions::PredictionLog;
pub use store::Store;
pub use visits::VisitLog;
