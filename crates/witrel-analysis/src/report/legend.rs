//! Legend: which witnesses share a reading under a label.

use witrel_core::types::default_siglum;
use witrel_core::PatternLabel;

/// Sigla grouped by shared reading, groups in label-symbol order.
///
/// Witnesses without a siglum fall back to their positional name.
pub fn legend_groups(label: &PatternLabel, sigla: &[String]) -> Vec<Vec<String>> {
    label
        .groups()
        .into_iter()
        .map(|group| {
            group
                .into_iter()
                .map(|w| sigla.get(w).cloned().unwrap_or_else(|| default_siglum(w)))
                .collect()
        })
        .collect()
}

/// `[#M #P] [#V #W]`
pub fn format_groups(groups: &[Vec<String>]) -> String {
    groups
        .iter()
        .map(|g| format!("[{}]", g.join(" ")))
        .collect::<Vec<_>>()
        .join(" ")
}
