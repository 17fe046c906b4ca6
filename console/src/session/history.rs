use bollcore::math::StatsHelper;
use bollcore::prelude::DetectionMode;
use bollcore::spectral::AnalysisResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One completed analysis kept for the session's lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub taken_at: DateTime<Utc>,
    pub mode: DetectionMode,
    pub result: AnalysisResult,
}

/// Append-only in-memory analysis log. Not persisted across runs.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

/// Aggregates shown on the history overview.
#[derive(Debug, PartialEq)]
pub struct HistorySummary {
    pub total_runs: usize,
    pub average_confidence: f32,
    pub most_frequent_mode: Option<DetectionMode>,
}

impl History {
    pub fn record(&mut self, result: AnalysisResult) {
        self.entries.push(HistoryEntry {
            taken_at: Utc::now(),
            mode: result.mode(),
            result,
        });
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn summary(&self) -> HistorySummary {
        let total_runs = self.entries.len();
        let confidences: Vec<f32> = self.entries.iter().map(|e| e.result.confidence()).collect();
        let average_confidence = StatsHelper::mean(&confidences);

        let mut counts = [0usize; 3];
        for entry in &self.entries {
            match entry.mode {
                DetectionMode::Maturity => counts[0] += 1,
                DetectionMode::Chlorophyll => counts[1] += 1,
                DetectionMode::Anthocyanin => counts[2] += 1,
            }
        }
        let most_frequent_mode = [
            DetectionMode::Maturity,
            DetectionMode::Chlorophyll,
            DetectionMode::Anthocyanin,
        ]
        .into_iter()
        .zip(counts)
        .filter(|(_, count)| *count > 0)
        .max_by_key(|(_, count)| *count)
        .map(|(mode, _)| mode);

        HistorySummary {
            total_runs,
            average_confidence,
            most_frequent_mode,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
