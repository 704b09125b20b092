//! The aligner seam.

use std::ops::Range;

use tracing::debug;
use witrel_core::errors::{AlignmentError, PipelineError};
use witrel_core::tracing::metrics;
use witrel_core::{CollationTable, Segment};

use super::witness::{ParagraphRow, WitnessSet};

/// Multi-sequence text aligner.
///
/// Given one paragraph's rows (one per witness, in witness order) it returns
/// that paragraph's aligned segments, each with one cell per row.
pub trait Aligner {
    fn name(&self) -> &str {
        "aligner"
    }

    fn align(&self, rows: &[ParagraphRow<'_>]) -> Result<Vec<Segment>, AlignmentError>;
}

/// Align every paragraph in `range` and concatenate the results in
/// document order.
pub fn align_all<A>(
    aligner: &A,
    set: &WitnessSet,
    range: Range<usize>,
) -> Result<CollationTable, PipelineError>
where
    A: Aligner + ?Sized,
{
    let first = range.start;
    let paragraphs = set.paragraph_rows(range)?;
    let mut per_paragraph = Vec::with_capacity(paragraphs.len());
    for (offset, rows) in paragraphs.iter().enumerate() {
        let segments = aligner.align(rows)?;
        debug!(
            { metrics::ALIGNER } = aligner.name(),
            { metrics::PARAGRAPH } = first + offset,
            { metrics::SEGMENT_COUNT } = segments.len(),
            "aligned paragraph"
        );
        per_paragraph.push(segments);
    }
    let table = CollationTable::from_paragraphs(set.len(), per_paragraph)?.with_sigla(set.sigla())?;
    Ok(table)
}
