use serde::{Deserialize, Serialize};

use crate::math::smooth;

/// One reflectance measurement at a given wavelength.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpectralSample {
    pub wavelength_nm: f32,
    pub reflectance: f32,
}

/// Provenance carried with each captured spectrum.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CaptureInfo {
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Moving-average strength applied before analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SmoothingLevel {
    None,
    #[default]
    Light,
    Medium,
    Heavy,
}

impl SmoothingLevel {
    pub fn window(&self) -> usize {
        match self {
            SmoothingLevel::None => 1,
            SmoothingLevel::Light => 3,
            SmoothingLevel::Medium => 5,
            SmoothingLevel::Heavy => 9,
        }
    }
}

impl std::str::FromStr for SmoothingLevel {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "none" => Ok(SmoothingLevel::None),
            "light" => Ok(SmoothingLevel::Light),
            "medium" => Ok(SmoothingLevel::Medium),
            "heavy" => Ok(SmoothingLevel::Heavy),
            other => Err(format!("unknown smoothing level '{}'", other)),
        }
    }
}

/// Ordered (wavelength, reflectance) sequence consumed by the engine.
///
/// Samples are expected sorted ascending by wavelength; the ordering
/// is not enforced here. A spectrum is immutable once produced, so
/// band filtering and smoothing return new instances.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spectrum {
    pub samples: Vec<SpectralSample>,
    pub info: CaptureInfo,
}

impl Spectrum {
    pub fn new(samples: Vec<SpectralSample>, info: CaptureInfo) -> Self {
        Self { samples, info }
    }

    pub fn from_pairs<I>(pairs: I, source: &str) -> Self
    where
        I: IntoIterator<Item = (f32, f32)>,
    {
        let samples = pairs
            .into_iter()
            .map(|(wavelength_nm, reflectance)| SpectralSample {
                wavelength_nm,
                reflectance,
            })
            .collect();
        Self::new(
            samples,
            CaptureInfo {
                source: source.to_string(),
                description: None,
            },
        )
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn reflectances(&self) -> Vec<f32> {
        self.samples.iter().map(|s| s.reflectance).collect()
    }

    /// Retains samples whose wavelength falls in the closed interval
    /// `[min_nm, max_nm]`.
    pub fn band(&self, min_nm: f32, max_nm: f32) -> Spectrum {
        let samples = self
            .samples
            .iter()
            .copied()
            .filter(|s| s.wavelength_nm >= min_nm && s.wavelength_nm <= max_nm)
            .collect();
        Spectrum::new(samples, self.info.clone())
    }

    pub fn wavelength_range(&self) -> Option<(f32, f32)> {
        crate::math::stats::StatsHelper::min_max(
            &self.samples.iter().map(|s| s.wavelength_nm).collect::<Vec<_>>(),
        )
    }

    pub fn reflectance_range(&self) -> Option<(f32, f32)> {
        crate::math::stats::StatsHelper::min_max(&self.reflectances())
    }

    /// Centered moving-average smoothing of the reflectance channel.
    /// Wavelengths are left untouched.
    pub fn smoothed(&self, level: SmoothingLevel) -> Spectrum {
        let window = level.window();
        if window <= 1 {
            return self.clone();
        }
        let smoothed = smooth::moving_average(&self.reflectances(), window);
        let samples = self
            .samples
            .iter()
            .zip(smoothed)
            .map(|(sample, reflectance)| SpectralSample {
                wavelength_nm: sample.wavelength_nm,
                reflectance,
            })
            .collect();
        Spectrum::new(samples, self.info.clone())
    }
}
