use serde::{Deserialize, Serialize};

use crate::{ast::Formula, error::TooManyVariablesError};

/// Default bound on the number of distinct variables a formula may have before
/// exhaustive enumeration is refused (2^20 rows).
pub const MAX_VARIABLES: usize = 20;

/// Assignments are indexed by a `u64`, so no configuration can go past this.
pub const ABSOLUTE_MAX_VARIABLES: usize = 63;

/// Default bound on the height of a parsed proposition. Evaluation, rendering
/// and dropping all recurse once per level.
pub const MAX_DEPTH: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub max_variables: usize,
    /// Deepest proposition tree the parser will build. Raising it far past the
    /// default trades the nesting error for a stack overflow.
    pub max_depth: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_variables: MAX_VARIABLES,
            max_depth: MAX_DEPTH,
        }
    }
}

impl EngineConfig {
    pub fn with_max_variables(mut self, max_variables: usize) -> Self {
        self.max_variables = max_variables;

        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;

        self
    }

    /// The enforced bound, `max_variables` clamped to [`ABSOLUTE_MAX_VARIABLES`].
    pub fn variable_limit(&self) -> usize {
        self.max_variables.min(ABSOLUTE_MAX_VARIABLES)
    }

    pub fn check_variable_count(&self, formula: &Formula) -> Result<(), TooManyVariablesError> {
        let count = formula.variables().len();
        let limit = self.variable_limit();

        if count > limit {
            return Err(TooManyVariablesError { count, limit });
        }

        Ok(())
    }
}
