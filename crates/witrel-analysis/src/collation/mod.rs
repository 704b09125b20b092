//! JSON interchange for collation tables.
//!
//! Two shapes are accepted: a bare array of segments, and an envelope that
//! also names the witnesses:
//!
//! ```json
//! {"witnesses": ["#M", "#P"], "segments": [["a", null], [["b", "c"], "b c"]]}
//! ```

pub mod document;

pub use document::{
    parse_collation, read_collation, to_document, to_json, write_collation, CollationDocument,
};
