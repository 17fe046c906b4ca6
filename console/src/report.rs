use anyhow::Context;
use bollcore::spectral::{AnalysisResult, Spectrum};
use chrono::Local;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// One bullet line per result field, shared by the report body and
/// the console summary.
pub fn result_lines(result: &AnalysisResult) -> Vec<String> {
    match result {
        AnalysisResult::Maturity(r) => vec![
            format!("maturity score: {:.1}%", r.score),
            format!("status: {}", r.status.label()),
            format!("boll weight: {:.2} g", r.boll_weight_g),
            format!("fiber quality: {}", r.fiber_quality.label()),
            format!("recommendation: {}", r.recommendation.label()),
        ],
        AnalysisResult::Chlorophyll(r) => vec![
            format!("total chlorophyll: {:.2} mg/g", r.total),
            format!("chlorophyll a: {:.2} mg/g", r.chlorophyll_a),
            format!("chlorophyll b: {:.2} mg/g", r.chlorophyll_b),
            format!("status: {}", r.status.label()),
        ],
        AnalysisResult::Anthocyanin(r) => vec![
            format!("anthocyanin content: {:.2} mg/g", r.content),
            format!("accumulation stage: {}", r.stage.label()),
            format!("antioxidant capacity: {}", r.antioxidant.label()),
        ],
    }
}

/// Plain-text detection report, one run per call.
pub fn render_report(result: &AnalysisResult, user: &str) -> String {
    let mut report = String::new();
    report.push_str("cotton boll detection report\n");
    report.push_str("============================\n");
    report.push_str(&format!("detection type: {}\n", result.mode().label()));
    report.push_str(&format!("analyst: {}\n", user));
    report.push_str(&format!("confidence: {:.1}%\n", result.confidence()));
    report.push('\n');
    for line in result_lines(result) {
        report.push_str(&format!("- {}\n", line));
    }
    report.push_str(&format!(
        "\ngenerated: {}\n\n",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    ));
    report
}

/// One-line preview of the spectrum a result was computed from.
pub fn preview_line(spectrum: &Spectrum) -> String {
    match (spectrum.wavelength_range(), spectrum.reflectance_range()) {
        (Some((wl_lo, wl_hi)), Some((r_lo, r_hi))) => format!(
            "wavelengths {:.1}-{:.1} nm, reflectance {:.3}-{:.3}",
            wl_lo, wl_hi, r_lo, r_hi
        ),
        _ => "empty spectrum".to_string(),
    }
}

/// CSV export of the spectrum used for the analysis.
pub fn spectrum_to_csv(spectrum: &Spectrum) -> String {
    let mut out = String::from("Wavelength,Reflectance\n");
    for sample in &spectrum.samples {
        out.push_str(&format!("{},{}\n", sample.wavelength_nm, sample.reflectance));
    }
    out
}

/// Appends to the report log, creating parent directories as needed.
pub fn append_report(path: &Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating report directory {}", parent.display()))?;
    }
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening report log {}", path.display()))?;
    file.write_all(text.as_bytes())
        .with_context(|| format!("writing report log {}", path.display()))?;
    Ok(())
}
