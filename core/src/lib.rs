//! Spectral analysis core for the cotton-boll detection platform.
//!
//! Provides typed spectra, enum-dispatched detection modes, the
//! closed-form evaluators behind each mode, and well-defined failure
//! cases.

pub mod analysis;
pub mod math;
pub mod prelude;
pub mod spectral;
pub mod telemetry;

pub use prelude::{DetectionMode, EngineError, EngineResult, SpectrumSource};
