//! Plot-data reporter: `{labels, values}` for an external charting tool.

use super::Reporter;
use crate::pipeline::VariantReport;

pub struct PlotReporter;

impl Reporter for PlotReporter {
    fn name(&self) -> &'static str {
        "plot"
    }

    fn generate(&self, report: &VariantReport) -> Result<String, String> {
        serde_json::to_string(&report.ranked.to_plot_data()).map_err(|e| e.to_string())
    }
}
