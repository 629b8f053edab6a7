//! Propositional logic engine: parses boolean formulas over named variables,
//! evaluates them, enumerates their truth tables and classifies them as
//! tautologies, contradictions or contingencies.
//!
//! The free functions below use [`Engine::default`]; build an [`Engine`] from
//! an [`EngineConfig`] to change the enumeration bound.

pub mod ast;
pub mod classify;
pub mod config;
pub mod engine;
pub mod error;
pub mod evaluate;
pub mod lexer;
pub mod markdown;
pub mod parser;
pub mod truth_table;

pub use ast::{Formula, Proposition, PropositionalVariable};
pub use classify::Classification;
pub use config::{EngineConfig, MAX_DEPTH, MAX_VARIABLES};
pub use engine::Engine;
pub use error::{
    Error, LexError, NestingTooDeepError, ParseError, TooManyVariablesError, UnboundVariableError,
};
pub use evaluate::{Assignment, Evaluate};
pub use truth_table::{Row, TruthTable};

pub fn parse(input: &str) -> Result<Formula, Error> {
    Engine::default().parse(input)
}

pub fn evaluate(input: &str, assignment: &Assignment) -> Result<bool, Error> {
    Engine::default().evaluate(input, assignment)
}

pub fn is_tautology(input: &str) -> Result<bool, Error> {
    Engine::default().is_tautology(input)
}

pub fn is_contradiction(input: &str) -> Result<bool, Error> {
    Engine::default().is_contradiction(input)
}

pub fn is_contingency(input: &str) -> Result<bool, Error> {
    Engine::default().is_contingency(input)
}

pub fn classify(input: &str) -> Result<Classification, Error> {
    Engine::default().classify(input)
}

pub fn compute_truth_table(input: &str) -> Result<TruthTable, Error> {
    Engine::default().compute_truth_table(input)
}
