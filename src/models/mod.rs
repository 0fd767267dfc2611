pub mod emotion;
pub mod page;
pub mod prediction;
pub mod visit;
