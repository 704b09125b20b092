//! Immutable per-run configuration handed to every pipeline component.

use super::WitrelConfig;
use crate::constants::{
    DEFAULT_ABSENT_SENTINEL, DEFAULT_PRECISION, MAX_PRECISION, MAX_WITNESSES, MIN_WITNESSES,
};
use crate::errors::{ClassificationError, CollationError, ConfigError, PipelineError};
use crate::types::table::default_siglum;
use crate::types::CollationTable;

/// Everything a run needs to know, fixed before the first segment is
/// classified: witness count, sigla, absent sentinel, and precision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    witness_count: usize,
    sigla: Vec<String>,
    absent_sentinel: String,
    precision: u32,
}

impl RunConfig {
    /// Create a run configuration for `witness_count` witnesses.
    ///
    /// Fewer than two witnesses leaves nothing to compare, and more than the
    /// label alphabet can spell cannot be classified.
    pub fn new(witness_count: usize) -> Result<Self, ClassificationError> {
        if !(MIN_WITNESSES..=MAX_WITNESSES).contains(&witness_count) {
            return Err(ClassificationError::InvalidWitnessCount {
                count: witness_count,
                min: MIN_WITNESSES,
                max: MAX_WITNESSES,
            });
        }
        Ok(Self {
            witness_count,
            sigla: (0..witness_count).map(default_siglum).collect(),
            absent_sentinel: DEFAULT_ABSENT_SENTINEL.to_string(),
            precision: DEFAULT_PRECISION,
        })
    }

    pub fn with_sigla(mut self, sigla: Vec<String>) -> Result<Self, CollationError> {
        if sigla.len() != self.witness_count {
            return Err(CollationError::WitnessCountMismatch {
                expected: self.witness_count,
                found: sigla.len(),
            });
        }
        self.sigla = sigla;
        Ok(self)
    }

    pub fn with_absent_sentinel(mut self, sentinel: impl Into<String>) -> Self {
        self.absent_sentinel = sentinel.into();
        self
    }

    pub fn with_precision(mut self, precision: u32) -> Result<Self, ConfigError> {
        if precision > MAX_PRECISION {
            return Err(ConfigError::InvalidValue {
                field: "precision".to_string(),
                message: format!("must be between 0 and {MAX_PRECISION}"),
            });
        }
        self.precision = precision;
        Ok(self)
    }

    /// Resolve the run configuration for `table` under `config`.
    ///
    /// A configured witness count must agree with the table.
    pub fn for_table(config: &WitrelConfig, table: &CollationTable) -> Result<Self, PipelineError> {
        let found = table.witness_count();
        if let Some(expected) = config.collation.witness_count {
            if expected != found {
                return Err(CollationError::WitnessCountMismatch { expected, found }.into());
            }
        }

        let mut run = Self::new(found)?
            .with_absent_sentinel(config.collation.effective_absent_sentinel())
            .with_precision(config.ranking.effective_precision())?;
        if !table.sigla().is_empty() {
            run = run.with_sigla(table.sigla().to_vec())?;
        }
        Ok(run)
    }

    pub fn witness_count(&self) -> usize {
        self.witness_count
    }

    pub fn sigla(&self) -> &[String] {
        &self.sigla
    }

    pub fn absent_sentinel(&self) -> &str {
        &self.absent_sentinel
    }

    pub fn precision(&self) -> u32 {
        self.precision
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Segment;

    #[test]
    fn rejects_fewer_than_two_witnesses() {
        assert!(RunConfig::new(1).is_err());
        assert!(RunConfig::new(0).is_err());
        assert!(RunConfig::new(27).is_err());
        assert!(RunConfig::new(2).is_ok());
    }

    #[test]
    fn default_sigla_are_numbered() {
        let run = RunConfig::new(3).unwrap();
        assert_eq!(run.sigla(), &["W1", "W2", "W3"]);
        assert_eq!(run.absent_sentinel(), "---");
        assert_eq!(run.precision(), 2);
    }

    #[test]
    fn for_table_checks_configured_count() {
        let table =
            CollationTable::new(2, vec![Segment::from_readings([Some("a"), Some("b")])]).unwrap();
        let mut config = WitrelConfig::default();
        config.collation.witness_count = Some(4);
        let err = RunConfig::for_table(&config, &table).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::Collation(CollationError::WitnessCountMismatch { expected: 4, found: 2 })
        ));
    }

    #[test]
    fn for_table_takes_table_sigla() {
        let table = CollationTable::new(2, vec![])
            .unwrap()
            .with_sigla(vec!["#M".into(), "#P".into()])
            .unwrap();
        let run = RunConfig::for_table(&WitrelConfig::default(), &table).unwrap();
        assert_eq!(run.sigla(), &["#M", "#P"]);
    }
}
