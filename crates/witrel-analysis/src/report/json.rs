//! JSON reporter: ranked entries with counts and legend, plus a run summary.

use serde::Serialize;

use super::legend::legend_groups;
use super::Reporter;
use crate::pipeline::VariantReport;

/// JSON reporter.
#[derive(Default)]
pub struct JsonReporter {
    pub pretty: bool,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    summary: Summary<'a>,
    patterns: Vec<JsonPattern>,
}

#[derive(Serialize)]
struct Summary<'a> {
    witness_count: usize,
    sigla: &'a [String],
    total_segments: usize,
    agreeing_segments: usize,
    informative_segments: usize,
    distinct_patterns: usize,
}

#[derive(Serialize)]
struct JsonPattern {
    label: String,
    percentage: f64,
    occurrences: usize,
    groups: Vec<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    first_seen: Option<usize>,
}

impl Reporter for JsonReporter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn generate(&self, report: &VariantReport) -> Result<String, String> {
        let sigla = report.run.sigla();
        let patterns = report
            .ranked
            .entries()
            .iter()
            .map(|entry| {
                let frequency = report.frequencies.get(&entry.label);
                JsonPattern {
                    label: entry.label.to_string(),
                    percentage: entry.percentage,
                    occurrences: frequency.map_or(0, |f| f.occurrences),
                    groups: legend_groups(&entry.label, sigla),
                    first_seen: frequency.map(|f| f.first_seen),
                }
            })
            .collect();

        let stats = &report.statistics;
        let output = JsonReport {
            summary: Summary {
                witness_count: report.run.witness_count(),
                sigla,
                total_segments: stats.total_segments,
                agreeing_segments: stats.agreeing_segments,
                informative_segments: stats.informative_segments,
                distinct_patterns: stats.distinct_patterns,
            },
            patterns,
        };

        if self.pretty {
            serde_json::to_string_pretty(&output).map_err(|e| e.to_string())
        } else {
            serde_json::to_string(&output).map_err(|e| e.to_string())
        }
    }
}
