use anyhow::Context;
use bollcore::prelude::{DetectionMode, SpectrumSource};
use bollcore::spectral::{SmoothingLevel, Spectrum};
use clap::Parser;
use session::History;
use source::{FileSource, SyntheticSource};
use std::path::PathBuf;
use workflow::{RunOutcome, Runner, WorkflowConfig};

mod generator;
mod report;
mod session;
mod source;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Offline driver for the cotton-boll spectral detection core")]
struct Args {
    /// Reflectance table (first two columns: wavelength nm, reflectance)
    #[arg(long)]
    input: Option<PathBuf>,
    /// Load a workflow config from YAML
    #[arg(long)]
    workflow: Option<PathBuf>,
    #[arg(long, default_value = "maturity")]
    mode: DetectionMode,
    #[arg(long, default_value_t = 400.0)]
    band_min: f32,
    #[arg(long, default_value_t = 1000.0)]
    band_max: f32,
    #[arg(long, default_value = "light")]
    smoothing: SmoothingLevel,
    /// Append the plain-text report here
    #[arg(long, default_value = "tools/data/detection_report.log")]
    report: PathBuf,
    /// Write the analyzed spectrum as CSV
    #[arg(long)]
    csv_out: Option<PathBuf>,
    /// Drive the session state machine from stdin instead of one shot
    #[arg(long, default_value_t = false)]
    interactive: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = if let Some(path) = &args.workflow {
        WorkflowConfig::load(path)?
    } else {
        WorkflowConfig::from_args(args.mode, args.band_min, args.band_max, args.smoothing)
    };

    if args.interactive {
        return session::repl::run(config);
    }

    let mut data_source: Box<dyn SpectrumSource> = match &args.input {
        Some(path) => Box::new(FileSource::new(path.clone())),
        None => Box::new(SyntheticSource::default()),
    };
    let spectrum = data_source.produce().context("producing spectrum")?;

    let runner = Runner::new(config);
    let mut history = History::default();
    let outcome = offline_run(&runner, &spectrum, &mut history)?;

    println!(
        "Offline run -> mode {}, samples {} -> {}, confidence {:.1}%",
        runner.config().mode.label(),
        outcome.samples_in,
        outcome.samples_used,
        outcome.result.confidence()
    );
    println!("  spectrum: {}", report::preview_line(&outcome.prepared));
    for line in report::result_lines(&outcome.result) {
        println!("  {}", line);
    }
    let summary = history.summary();
    println!(
        "  runs this session: {}, average confidence {:.1}%",
        summary.total_runs, summary.average_confidence
    );

    let rendered = report::render_report(&outcome.result, "offline");
    report::append_report(&args.report, &rendered)?;
    log::info!("report appended to {}", args.report.display());

    if let Some(path) = &args.csv_out {
        std::fs::write(path, report::spectrum_to_csv(&outcome.prepared))
            .with_context(|| format!("writing spectrum CSV {}", path.display()))?;
        log::info!("spectrum CSV written to {}", path.display());
    }

    Ok(())
}

/// Runs one analysis and records it in the session history.
fn offline_run(
    runner: &Runner,
    spectrum: &Spectrum,
    history: &mut History,
) -> anyhow::Result<RunOutcome> {
    let outcome = runner.execute(spectrum)?;
    history.record(outcome.result.clone());
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offline_run_records_into_the_history() {
        let config = WorkflowConfig::from_args(
            DetectionMode::Maturity,
            400.0,
            1000.0,
            SmoothingLevel::Light,
        );
        let runner = Runner::new(config);
        let spectrum = SyntheticSource::default().produce().unwrap();
        let mut history = History::default();

        offline_run(&runner, &spectrum, &mut history).unwrap();
        offline_run(&runner, &spectrum, &mut history).unwrap();

        let summary = history.summary();
        assert_eq!(summary.total_runs, 2);
        assert_eq!(summary.most_frequent_mode, Some(DetectionMode::Maturity));
        assert!((summary.average_confidence - 95.0).abs() < 1e-3);
    }
}
