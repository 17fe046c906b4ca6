pub mod result;
pub mod sample;

pub use result::{AnalysisResult, AnthocyaninResult, ChlorophyllResult, MaturityResult};
pub use sample::{CaptureInfo, SmoothingLevel, SpectralSample, Spectrum};
