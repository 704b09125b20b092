//! Witness preparation and the alignment seam.
//!
//! Alignment itself is external: an [`Aligner`] receives the rows of one
//! paragraph and returns its segments. This module prepares those rows,
//! stitches the per-paragraph output into one table, and caches the result
//! under a content hash of the inputs.

pub mod aligner;
pub mod cache;
pub mod witness;

pub use aligner::{align_all, Aligner};
pub use cache::{cache_key, CollationCache};
pub use witness::{ParagraphRange, ParagraphRow, WitnessSet, WitnessText};
