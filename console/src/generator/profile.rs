use bollcore::spectral::{CaptureInfo, SpectralSample, Spectrum};
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

/// Configuration for generating a synthetic reference spectrum.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub points: usize,
    pub wavelength_start_nm: f32,
    pub wavelength_end_nm: f32,
    pub noise: f32,
    pub seed: u64,
    pub description: Option<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            points: 751,
            wavelength_start_nm: 350.0,
            wavelength_end_nm: 1100.0,
            noise: 0.01,
            seed: 42,
            description: None,
        }
    }
}

/// Builds the deterministic plant-reflectance reference curve: low
/// blue region, green peak, red absorption trough, and a noisy
/// near-infrared plateau. Reflectance is clamped to [0, 1].
pub fn build_reference_spectrum(config: &GeneratorConfig) -> Spectrum {
    let points = config.points.max(2);
    let step = (config.wavelength_end_nm - config.wavelength_start_nm) / (points - 1) as f32;
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut samples = Vec::with_capacity(points);

    for index in 0..points {
        let wavelength_nm = config.wavelength_start_nm + step * index as f32;
        let base = if wavelength_nm <= 500.0 {
            0.05 + 0.03 * (wavelength_nm / 100.0).sin()
        } else if wavelength_nm <= 600.0 {
            0.1 + 0.15 * ((wavelength_nm - 500.0) / 100.0 * PI).sin()
        } else if wavelength_nm <= 700.0 {
            0.08 + 0.05 * ((wavelength_nm - 600.0) / 100.0 * PI).cos()
        } else {
            0.4 + 0.1 * (wavelength_nm / 150.0).sin() + 0.05 * rng.gen_range(-1.0..1.0)
        };
        let jitter = config.noise * rng.gen_range(-1.0..1.0);
        let reflectance = (base + jitter).clamp(0.0, 1.0);
        samples.push(SpectralSample {
            wavelength_nm,
            reflectance,
        });
    }

    Spectrum::new(
        samples,
        CaptureInfo {
            source: "synthetic".to_string(),
            description: config.description.clone(),
        },
    )
}
