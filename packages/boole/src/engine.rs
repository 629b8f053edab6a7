use crate::{
    ast::Formula,
    classify::{self, Classification},
    config::EngineConfig,
    error::Error,
    evaluate::{Assignment, Evaluate},
    parser,
    truth_table::TruthTable,
};

/// Entry point for hosts. Holds only its configuration, so one engine can be
/// shared freely; every call parses its formula text afresh.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn parse(&self, input: &str) -> Result<Formula, Error> {
        parser::parse(input, &self.config)
    }

    /// Parses and evaluates `input` directly, without building a truth table.
    pub fn evaluate(&self, input: &str, assignment: &Assignment) -> Result<bool, Error> {
        Ok(self.parse(input)?.evaluate(assignment)?)
    }

    pub fn is_tautology(&self, input: &str) -> Result<bool, Error> {
        classify::is_tautology(&self.parse(input)?, &self.config)
    }

    pub fn is_contradiction(&self, input: &str) -> Result<bool, Error> {
        classify::is_contradiction(&self.parse(input)?, &self.config)
    }

    pub fn is_contingency(&self, input: &str) -> Result<bool, Error> {
        classify::is_contingency(&self.parse(input)?, &self.config)
    }

    pub fn classify(&self, input: &str) -> Result<Classification, Error> {
        classify::classify(&self.parse(input)?, &self.config)
    }

    pub fn compute_truth_table(&self, input: &str) -> Result<TruthTable, Error> {
        TruthTable::new(&self.parse(input)?, &self.config)
    }
}
