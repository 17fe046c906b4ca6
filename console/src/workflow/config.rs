use anyhow::Context;
use bollcore::prelude::DetectionMode;
use bollcore::spectral::SmoothingLevel;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WorkflowConfig {
    pub mode: DetectionMode,
    pub band_min_nm: f32,
    pub band_max_nm: f32,
    #[serde(default)]
    pub smoothing: SmoothingLevel,
}

impl WorkflowConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading workflow config {}", path_ref.display()))?;
        let config: WorkflowConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing workflow config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(
        mode: DetectionMode,
        band_min_nm: f32,
        band_max_nm: f32,
        smoothing: SmoothingLevel,
    ) -> Self {
        Self {
            mode,
            band_min_nm,
            band_max_nm,
            smoothing,
        }
    }
}
