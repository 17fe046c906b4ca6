use crate::analysis::{anthocyanin, chlorophyll, indices, maturity};
use crate::prelude::{DetectionMode, EngineError, EngineResult};
use crate::spectral::{AnalysisResult, Spectrum};
use crate::telemetry::log::LogManager;
use crate::telemetry::metrics::MetricsRecorder;

/// Analyzes one spectrum under the selected detection mode.
///
/// Pure request/response: both indices are computed once, then the
/// mode evaluator maps them onto the result. The only failure is an
/// empty spectrum.
pub fn analyze(spectrum: &Spectrum, mode: DetectionMode) -> EngineResult<AnalysisResult> {
    if spectrum.is_empty() {
        return Err(EngineError::EmptySpectrum);
    }

    let ratio = indices::reflectance_ratio(spectrum);
    let red_edge = indices::red_edge_area(spectrum);

    let result = match mode {
        DetectionMode::Maturity => AnalysisResult::Maturity(maturity::evaluate(ratio, red_edge)),
        DetectionMode::Chlorophyll => AnalysisResult::Chlorophyll(chlorophyll::evaluate(ratio)),
        DetectionMode::Anthocyanin => AnalysisResult::Anthocyanin(anthocyanin::evaluate(ratio)),
    };

    Ok(result)
}

/// Stateful wrapper around [`analyze`] that adds logging and run
/// counters for the driver.
pub struct AnalysisEngine {
    logger: LogManager,
    metrics: MetricsRecorder,
}

impl AnalysisEngine {
    pub fn new() -> Self {
        Self {
            logger: LogManager::new(),
            metrics: MetricsRecorder::new(),
        }
    }

    pub fn run(&self, spectrum: &Spectrum, mode: DetectionMode) -> EngineResult<AnalysisResult> {
        match analyze(spectrum, mode) {
            Ok(result) => {
                self.metrics.record_analysis();
                self.logger.record(&format!(
                    "analyze {} samples {} confidence {:.1}",
                    mode.label(),
                    spectrum.len(),
                    result.confidence()
                ));
                Ok(result)
            }
            Err(err) => {
                self.metrics.record_failure();
                self.logger.record_failure(&format!("analyze {}: {}", mode.label(), err));
                Err(err)
            }
        }
    }

    /// (analyses completed, failures) so far.
    pub fn metrics(&self) -> (usize, usize) {
        self.metrics.snapshot()
    }
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spectral::result::MaturityStatus;

    fn dense_spectrum() -> Spectrum {
        // 751 points, 350-1100 nm at 1 nm spacing, with a red-edge rise
        Spectrum::from_pairs(
            (0..751).map(|i| {
                let wavelength = 350.0 + i as f32;
                let reflectance = if wavelength < 700.0 { 0.05 } else { 0.3 };
                (wavelength, reflectance)
            }),
            "test",
        )
    }

    #[test]
    fn empty_spectrum_fails_for_every_mode() {
        let empty = Spectrum::from_pairs(vec![], "test");
        for mode in [
            DetectionMode::Maturity,
            DetectionMode::Chlorophyll,
            DetectionMode::Anthocyanin,
        ] {
            assert!(matches!(
                analyze(&empty, mode),
                Err(EngineError::EmptySpectrum)
            ));
        }
    }

    #[test]
    fn dense_maturity_result_respects_the_contract_ranges() {
        let result = analyze(&dense_spectrum(), DetectionMode::Maturity).unwrap();
        let AnalysisResult::Maturity(maturity) = result else {
            panic!("expected a maturity result");
        };
        assert!((0.0..=100.0).contains(&maturity.score));
        assert!((70.0..=95.0).contains(&maturity.confidence));
        assert!(matches!(
            maturity.status,
            MaturityStatus::Mature | MaturityStatus::Immature
        ));
    }

    #[test]
    fn result_mode_matches_the_requested_mode() {
        let spectrum = dense_spectrum();
        for mode in [
            DetectionMode::Maturity,
            DetectionMode::Chlorophyll,
            DetectionMode::Anthocyanin,
        ] {
            assert_eq!(analyze(&spectrum, mode).unwrap().mode(), mode);
        }
    }

    #[test]
    fn engine_counts_analyses_and_failures() {
        let engine = AnalysisEngine::new();
        let spectrum = dense_spectrum();
        engine.run(&spectrum, DetectionMode::Maturity).unwrap();
        engine.run(&spectrum, DetectionMode::Chlorophyll).unwrap();
        let empty = Spectrum::from_pairs(vec![], "test");
        assert!(engine.run(&empty, DetectionMode::Maturity).is_err());
        assert_eq!(engine.metrics(), (2, 1));
    }
}
