use serde::{Deserialize, Serialize};

use crate::spectral::Spectrum;

/// Detection target selected for one analysis pass.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DetectionMode {
    Maturity,
    Chlorophyll,
    Anthocyanin,
}

impl DetectionMode {
    pub fn label(&self) -> &'static str {
        match self {
            DetectionMode::Maturity => "maturity",
            DetectionMode::Chlorophyll => "chlorophyll",
            DetectionMode::Anthocyanin => "anthocyanin",
        }
    }
}

impl std::str::FromStr for DetectionMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "maturity" => Ok(DetectionMode::Maturity),
            "chlorophyll" => Ok(DetectionMode::Chlorophyll),
            "anthocyanin" => Ok(DetectionMode::Anthocyanin),
            other => Err(format!("unknown detection mode '{}'", other)),
        }
    }
}

/// Common error type for spectrum production and analysis.
#[derive(thiserror::Error, Debug)]
pub enum EngineError {
    #[error("empty spectrum: no samples to analyze")]
    EmptySpectrum,
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type EngineResult<T> = Result<T, EngineError>;

/// Capability interface for anything that can hand the engine a
/// fully-materialized spectrum (file readers, synthetic generators,
/// instrument drivers).
pub trait SpectrumSource {
    fn produce(&mut self) -> EngineResult<Spectrum>;
}
