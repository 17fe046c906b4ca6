use crate::workflow::config::WorkflowConfig;
use anyhow::Context;
use bollcore::analysis::AnalysisEngine;
use bollcore::prelude::DetectionMode;
use bollcore::spectral::{AnalysisResult, Spectrum};

/// Result of one analysis pass, with the prepared spectrum kept for
/// preview and export.
pub struct RunOutcome {
    pub result: AnalysisResult,
    pub prepared: Spectrum,
    pub samples_in: usize,
    pub samples_used: usize,
}

pub struct Runner {
    config: WorkflowConfig,
    engine: AnalysisEngine,
}

impl Runner {
    pub fn new(config: WorkflowConfig) -> Self {
        Self {
            config,
            engine: AnalysisEngine::new(),
        }
    }

    pub fn config(&self) -> &WorkflowConfig {
        &self.config
    }

    pub fn set_mode(&mut self, mode: DetectionMode) {
        self.config.mode = mode;
    }

    /// Band filter, smoothing, then analysis under the configured mode.
    pub fn execute(&self, spectrum: &Spectrum) -> anyhow::Result<RunOutcome> {
        let samples_in = spectrum.len();
        let prepared = spectrum
            .band(self.config.band_min_nm, self.config.band_max_nm)
            .smoothed(self.config.smoothing);
        let result = self
            .engine
            .run(&prepared, self.config.mode)
            .context("analyzing spectrum")?;

        Ok(RunOutcome {
            result,
            samples_used: prepared.len(),
            prepared,
            samples_in,
        })
    }

    /// (analyses completed, failures) since this runner was created.
    pub fn metrics(&self) -> (usize, usize) {
        self.engine.metrics()
    }
}
