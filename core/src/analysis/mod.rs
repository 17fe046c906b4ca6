pub mod anthocyanin;
pub mod chlorophyll;
pub mod engine;
pub mod indices;
pub mod maturity;

pub use engine::{analyze, AnalysisEngine};
