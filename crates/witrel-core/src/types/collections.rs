//! Re-exports of performance-oriented collection types.

pub use rustc_hash::{FxHashMap, FxHashSet};
pub use smallvec::SmallVec;

/// SmallVec sized for pattern label symbols (most collations have <8 witnesses).
pub type SymbolVec = SmallVec<[u8; 8]>;
