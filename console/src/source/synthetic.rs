use crate::generator::{build_reference_spectrum, GeneratorConfig};
use bollcore::prelude::{EngineResult, SpectrumSource};
use bollcore::spectral::Spectrum;

/// Generator-backed source. Stands in for a field spectrometer when
/// no reflectance table is at hand, producing the same spectrum
/// shape as a file upload.
pub struct SyntheticSource {
    config: GeneratorConfig,
}

impl SyntheticSource {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }
}

impl Default for SyntheticSource {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}

impl SpectrumSource for SyntheticSource {
    fn produce(&mut self) -> EngineResult<Spectrum> {
        Ok(build_reference_spectrum(&self.config))
    }
}
