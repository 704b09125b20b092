//! Plain-text reporter: one `<label>: <percentage>%` line per entry.

use super::{format_percentage, Reporter};
use crate::pipeline::VariantReport;

pub struct TextReporter;

impl Reporter for TextReporter {
    fn name(&self) -> &'static str {
        "text"
    }

    fn generate(&self, report: &VariantReport) -> Result<String, String> {
        let mut out = String::new();
        for entry in report.ranked.entries() {
            out.push_str(&format!(
                "{}: {}%\n",
                entry.label,
                format_percentage(entry.percentage)
            ));
        }
        Ok(out)
    }
}
