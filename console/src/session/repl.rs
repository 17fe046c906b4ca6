use crate::report;
use crate::session::state::{Page, Session, SessionError};
use crate::source::{FileSource, SyntheticSource};
use crate::workflow::{Runner, WorkflowConfig};
use bollcore::prelude::{DetectionMode, SpectrumSource};
use bollcore::spectral::Spectrum;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

const HELP: &str = "\
commands:
  login <user> <password>   log in (default account admin/admin)
  guest                     log in as a guest
  logout                    return to the login page
  mode <m>                  maturity | chlorophyll | anthocyanin
  analyze [csv-path]        analyze a file, or the synthetic spectrum
  result                    show the last result
  history                   show the analysis history
  export <json-path>        write the history as JSON
  export-spectrum <csv-path>  write the last analyzed spectrum as CSV
  quit                      leave the console";

/// Drives the session state machine from stdin.
pub fn run(config: WorkflowConfig) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    drive(config, &mut input, &mut output)
}

fn drive<R: BufRead, W: Write>(
    config: WorkflowConfig,
    input: &mut R,
    output: &mut W,
) -> anyhow::Result<()> {
    let mut session = Session::new();
    let mut runner = Runner::new(config);
    let mut last_spectrum: Option<Spectrum> = None;
    writeln!(output, "bollscan console - type 'help' for commands")?;

    loop {
        write!(output, "[{}]> ", session.page().label())?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            continue;
        };

        match command {
            "help" => writeln!(output, "{}", HELP)?,
            "login" => match (parts.next(), parts.next()) {
                (Some(user), Some(password)) => match session.login(user, password) {
                    Ok(()) => writeln!(output, "welcome, {}", user)?,
                    Err(err) => writeln!(output, "{}", err)?,
                },
                _ => writeln!(output, "usage: login <user> <password>")?,
            },
            "guest" => {
                session.login_guest();
                writeln!(output, "welcome, guest")?;
            }
            "logout" => {
                session.logout();
                writeln!(output, "logged out")?;
            }
            "mode" => {
                if !session.is_logged_in() {
                    writeln!(output, "{}", SessionError::NotLoggedIn)?;
                    continue;
                }
                match parts.next().map(str::parse::<DetectionMode>) {
                    Some(Ok(mode)) => {
                        runner.set_mode(mode);
                        writeln!(output, "detection mode set to {}", mode.label())?;
                    }
                    Some(Err(err)) => writeln!(output, "{}", err)?,
                    None => writeln!(output, "usage: mode <maturity|chlorophyll|anthocyanin>")?,
                }
            }
            "analyze" => {
                if let Err(err) = session.go_to(Page::Analysis) {
                    writeln!(output, "{}", err)?;
                    continue;
                }
                let spectrum = match parts.next() {
                    Some(path) => FileSource::new(PathBuf::from(path)).produce(),
                    None => SyntheticSource::default().produce(),
                };
                match spectrum
                    .map_err(anyhow::Error::from)
                    .and_then(|s| runner.execute(&s))
                {
                    Ok(outcome) => {
                        writeln!(
                            output,
                            "analyzed {} of {} samples ({})",
                            outcome.samples_used,
                            outcome.samples_in,
                            report::preview_line(&outcome.prepared)
                        )?;
                        for line in report::result_lines(&outcome.result) {
                            writeln!(output, "  {}", line)?;
                        }
                        writeln!(output, "  confidence: {:.1}%", outcome.result.confidence())?;
                        session.record_result(outcome.result);
                        last_spectrum = Some(outcome.prepared);
                    }
                    Err(err) => writeln!(output, "analysis failed: {:#}", err)?,
                }
            }
            "result" => match session.go_to(Page::Result) {
                Ok(()) => {
                    // go_to guarantees a result is present
                    if let Some(result) = session.last_result() {
                        for line in report::result_lines(result) {
                            writeln!(output, "  {}", line)?;
                        }
                    }
                }
                Err(err) => writeln!(output, "{}", err)?,
            },
            "history" => match session.go_to(Page::History) {
                Ok(()) => {
                    if session.history.is_empty() {
                        writeln!(output, "no analyses recorded yet")?;
                        continue;
                    }
                    for (index, entry) in session.history.entries().iter().enumerate() {
                        writeln!(
                            output,
                            "  {}. {} {} confidence {:.1}%",
                            index + 1,
                            entry.taken_at.format("%Y-%m-%d %H:%M:%S"),
                            entry.mode.label(),
                            entry.result.confidence()
                        )?;
                    }
                    let summary = session.history.summary();
                    writeln!(
                        output,
                        "  total {} | average confidence {:.1}% | most frequent {}",
                        summary.total_runs,
                        summary.average_confidence,
                        summary
                            .most_frequent_mode
                            .map(|m| m.label())
                            .unwrap_or("n/a")
                    )?;
                }
                Err(err) => writeln!(output, "{}", err)?,
            },
            "export" => match parts.next() {
                Some(path) => {
                    let json = session.history.to_json()?;
                    std::fs::write(path, json)?;
                    writeln!(output, "history written to {}", path)?;
                }
                None => writeln!(output, "usage: export <json-path>")?,
            },
            "export-spectrum" => match (parts.next(), last_spectrum.as_ref()) {
                (Some(path), Some(spectrum)) => {
                    std::fs::write(path, report::spectrum_to_csv(spectrum))?;
                    writeln!(output, "spectrum written to {}", path)?;
                }
                (Some(_), None) => writeln!(output, "no analyzed spectrum yet")?,
                (None, _) => writeln!(output, "usage: export-spectrum <csv-path>")?,
            },
            "quit" | "exit" => break,
            other => writeln!(output, "unknown command '{}'", other)?,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bollcore::spectral::SmoothingLevel;
    use std::io::Cursor;

    fn run_script(script: &str) -> String {
        let config = WorkflowConfig::from_args(
            DetectionMode::Maturity,
            400.0,
            1000.0,
            SmoothingLevel::Light,
        );
        let mut input = Cursor::new(script.to_string());
        let mut output = Vec::new();
        drive(config, &mut input, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn analyze_requires_a_login() {
        let transcript = run_script("analyze\nquit\n");
        assert!(transcript.contains("not logged in"));
    }

    #[test]
    fn guest_can_analyze_the_synthetic_spectrum() {
        let transcript = run_script("guest\nanalyze\nhistory\nquit\n");
        assert!(transcript.contains("welcome, guest"));
        assert!(transcript.contains("maturity score"));
        assert!(transcript.contains("total 1"));
    }

    #[test]
    fn wrong_password_is_reported() {
        let transcript = run_script("login admin wrong\nquit\n");
        assert!(transcript.contains("invalid credentials"));
    }

    #[test]
    fn mode_switch_is_reflected_in_the_result() {
        let transcript = run_script("guest\nmode anthocyanin\nanalyze\nquit\n");
        assert!(transcript.contains("anthocyanin content"));
    }

    #[test]
    fn mode_requires_a_login() {
        let transcript = run_script("mode anthocyanin\nquit\n");
        assert!(transcript.contains("not logged in"));
        assert!(!transcript.contains("detection mode set"));
    }

    #[test]
    fn analyze_prints_the_spectrum_ranges() {
        let transcript = run_script("guest\nanalyze\nquit\n");
        assert!(transcript.contains("wavelengths 400.0-1000.0 nm"));
        assert!(transcript.contains("reflectance "));
    }

    #[test]
    fn export_spectrum_before_any_analysis_is_refused() {
        let transcript = run_script("guest\nexport-spectrum out.csv\nquit\n");
        assert!(transcript.contains("no analyzed spectrum yet"));
    }

    #[test]
    fn export_spectrum_writes_the_prepared_samples() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spectrum.csv");
        let script = format!("guest\nanalyze\nexport-spectrum {}\nquit\n", path.display());
        let transcript = run_script(&script);
        assert!(transcript.contains("spectrum written to"));

        let csv = std::fs::read_to_string(&path).unwrap();
        assert!(csv.starts_with("Wavelength,Reflectance\n"));
        // 601 samples survive the 400-1000 nm band, plus the header
        assert_eq!(csv.lines().count(), 602);
    }

    #[test]
    fn result_before_any_analysis_is_refused() {
        let transcript = run_script("guest\nresult\nquit\n");
        assert!(transcript.contains("no result to show yet"));
    }
}
