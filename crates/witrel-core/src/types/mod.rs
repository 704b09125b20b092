//! Collation data model.
//! Cells, segments, tables, witnesses, and pattern labels.

pub mod cell;
pub mod collections;
pub mod label;
pub mod table;

pub use cell::{Cell, Reading};
pub use collections::{FxHashMap, FxHashSet};
pub use label::PatternLabel;
pub use table::{default_siglum, CollationTable, Segment, Witness};
