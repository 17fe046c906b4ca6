pub mod integrate;
pub mod smooth;
pub mod stats;

pub use stats::StatsHelper;
