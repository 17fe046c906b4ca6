use crate::math::integrate;
use crate::spectral::Spectrum;

/// Sample index used as the visible-band anchor of the ratio index.
pub const RATIO_ANCHOR_INDEX: usize = 100;

/// Red-edge integration band in nanometres.
pub const RED_EDGE_BAND_NM: (f32, f32) = (680.0, 750.0);

/// Simplified NDVI-style ratio between the final sample and the
/// anchor sample at index 100:
/// `(r[last] - r[100]) / (r[last] + r[100])`.
///
/// The anchor is positional, not wavelength-based, so the index is
/// only meaningful for spectra captured on a consistent, sufficiently
/// dense grid. Spectra with 100 or fewer samples yield 0.0, as does a
/// zero denominator.
pub fn reflectance_ratio(spectrum: &Spectrum) -> f32 {
    if spectrum.len() <= RATIO_ANCHOR_INDEX {
        return 0.0;
    }
    let last = spectrum.samples[spectrum.len() - 1].reflectance;
    let anchor = spectrum.samples[RATIO_ANCHOR_INDEX].reflectance;
    let denominator = last + anchor;
    if denominator == 0.0 {
        0.0
    } else {
        (last - anchor) / denominator
    }
}

/// Trapezoidal area of reflectance across the 680-750 nm band.
///
/// Consecutive band samples integrate with unit spacing (the sample
/// index, not the wavelength, is the integration step). An empty band
/// yields 0.0.
pub fn red_edge_area(spectrum: &Spectrum) -> f32 {
    let (lo, hi) = RED_EDGE_BAND_NM;
    let band: Vec<f32> = spectrum
        .samples
        .iter()
        .filter(|s| s.wavelength_nm >= lo && s.wavelength_nm <= hi)
        .map(|s| s.reflectance)
        .collect();
    integrate::trapezoid_unit(&band)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_spectrum(len: usize, reflectance: f32) -> Spectrum {
        Spectrum::from_pairs((0..len).map(|i| (350.0 + i as f32, reflectance)), "test")
    }

    #[test]
    fn ratio_is_zero_at_or_below_the_anchor_count() {
        assert_eq!(reflectance_ratio(&flat_spectrum(100, 0.5)), 0.0);
        assert_eq!(reflectance_ratio(&flat_spectrum(1, 0.5)), 0.0);
        assert_eq!(reflectance_ratio(&Spectrum::from_pairs(vec![], "test")), 0.0);
    }

    #[test]
    fn ratio_uses_last_and_anchor_samples() {
        let mut spectrum = flat_spectrum(101, 0.2);
        spectrum.samples[100].reflectance = 0.2;
        spectrum.samples[100 - 1].reflectance = 0.9; // not the anchor
        // last == anchor here, so 101 samples put the anchor at the
        // final position and the ratio collapses to zero
        assert_eq!(reflectance_ratio(&spectrum), 0.0);

        let mut spectrum = flat_spectrum(102, 0.0);
        spectrum.samples[100].reflectance = 0.2;
        spectrum.samples[101].reflectance = 0.6;
        assert!((reflectance_ratio(&spectrum) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn ratio_with_zero_denominator_is_zero() {
        let mut spectrum = flat_spectrum(102, 0.0);
        spectrum.samples[100].reflectance = -0.3;
        spectrum.samples[101].reflectance = 0.3;
        assert_eq!(reflectance_ratio(&spectrum), 0.0);
    }

    #[test]
    fn red_edge_integrates_only_the_band() {
        let spectrum = Spectrum::from_pairs(
            vec![
                (600.0, 9.0),
                (680.0, 0.2),
                (700.0, 0.4),
                (750.0, 0.2),
                (800.0, 9.0),
            ],
            "test",
        );
        // trapezoid over [0.2, 0.4, 0.2] with unit spacing
        assert!((red_edge_area(&spectrum) - 0.6).abs() < 1e-6);
    }

    #[test]
    fn red_edge_without_band_samples_is_zero() {
        let spectrum = Spectrum::from_pairs(vec![(400.0, 0.5), (500.0, 0.5)], "test");
        assert_eq!(red_edge_area(&spectrum), 0.0);
    }
}
