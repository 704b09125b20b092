//! Reporters: renderings of a variant report.
//!
//! Three formats: plain text, JSON with run summary and legend, and plot
//! data for an external charting tool.

pub mod json;
pub mod legend;
pub mod plot;
pub mod text;

use witrel_core::constants::OUTPUT_FORMATS;

use crate::pipeline::VariantReport;

pub use legend::{format_groups, legend_groups};

/// Trait for report generation.
pub trait Reporter: Send + Sync {
    fn name(&self) -> &'static str;
    fn generate(&self, report: &VariantReport) -> Result<String, String>;
}

/// Create a reporter by format name.
pub fn create_reporter(format: &str) -> Option<Box<dyn Reporter>> {
    match format {
        "text" => Some(Box::new(text::TextReporter)),
        "json" => Some(Box::new(json::JsonReporter::default())),
        "plot" => Some(Box::new(plot::PlotReporter)),
        _ => None,
    }
}

/// List all available reporter format names.
pub fn available_formats() -> &'static [&'static str] {
    &OUTPUT_FORMATS
}

/// Percentage as printed in reports: shortest decimal form, always with a
/// fractional part (`20.0`, `33.33`).
pub fn format_percentage(value: f64) -> String {
    let mut s = value.to_string();
    if value.is_finite() && !s.contains('.') {
        s.push_str(".0");
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_format_has_a_reporter() {
        for format in available_formats() {
            let reporter = create_reporter(format).unwrap();
            assert_eq!(reporter.name(), *format);
        }
        assert!(create_reporter("sarif").is_none());
    }

    #[test]
    fn percentages_keep_a_fraction() {
        assert_eq!(format_percentage(20.0), "20.0");
        assert_eq!(format_percentage(33.33), "33.33");
        assert_eq!(format_percentage(12.5), "12.5");
        assert_eq!(format_percentage(100.0), "100.0");
    }
}
