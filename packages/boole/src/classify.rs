//! Tautology, contradiction and contingency checks.
//!
//! These walk the same assignments as [`TruthTable`](crate::truth_table::TruthTable)
//! but stop at the first row that settles the answer, without keeping a table.

use log::debug;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::{
    ast::Formula,
    config::EngineConfig,
    error::Error,
    evaluate::{Assignment, Evaluate},
    truth_table::Assignments,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropositionAttributes {
    /// True under every assignment.
    pub valid: bool,
    /// True under at least one assignment.
    pub satisfiable: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Classification {
    Tautology,
    Contradiction,
    Contingency,
}

impl From<PropositionAttributes> for Classification {
    fn from(attributes: PropositionAttributes) -> Self {
        match attributes {
            PropositionAttributes { valid: true, .. } => Classification::Tautology,
            PropositionAttributes {
                satisfiable: false,
                ..
            } => Classification::Contradiction,
            _ => Classification::Contingency,
        }
    }
}

impl Classification {
    pub fn is_satisfiable(&self) -> bool {
        *self != Classification::Contradiction
    }

    pub fn is_valid(&self) -> bool {
        *self == Classification::Tautology
    }
}

/// Looks for an assignment under which `formula` evaluates to `wanted`.
fn find_assignment(
    formula: &Formula,
    config: &EngineConfig,
    wanted: bool,
) -> Result<Option<Assignment>, Error> {
    config.check_variable_count(formula)?;

    let mut assignments = Assignments::new(formula.variables());

    while let Some(assignment) = assignments.advance() {
        if formula.proposition().evaluate(assignment)? == wanted {
            return Ok(Some(assignment.clone()));
        }
    }

    Ok(None)
}

/// An assignment making `formula` false, if there is one.
pub fn find_counterexample(
    formula: &Formula,
    config: &EngineConfig,
) -> Result<Option<Assignment>, Error> {
    find_assignment(formula, config, false)
}

/// An assignment making `formula` true, if there is one.
pub fn find_model(formula: &Formula, config: &EngineConfig) -> Result<Option<Assignment>, Error> {
    find_assignment(formula, config, true)
}

pub fn is_tautology(formula: &Formula, config: &EngineConfig) -> Result<bool, Error> {
    Ok(find_counterexample(formula, config)?.is_none())
}

pub fn is_contradiction(formula: &Formula, config: &EngineConfig) -> Result<bool, Error> {
    Ok(find_model(formula, config)?.is_none())
}

pub fn is_contingency(formula: &Formula, config: &EngineConfig) -> Result<bool, Error> {
    Ok(classify(formula, config)? == Classification::Contingency)
}

pub fn get_attributes(
    formula: &Formula,
    config: &EngineConfig,
) -> Result<PropositionAttributes, Error> {
    config.check_variable_count(formula)?;

    let mut valid = true;
    let mut satisfiable = false;

    let mut assignments = Assignments::new(formula.variables());

    while let Some(assignment) = assignments.advance() {
        let value = formula.proposition().evaluate(assignment)?;

        valid &= value;
        satisfiable |= value;

        if satisfiable && !valid {
            break;
        }
    }

    Ok(PropositionAttributes { valid, satisfiable })
}

pub fn classify(formula: &Formula, config: &EngineConfig) -> Result<Classification, Error> {
    let classification: Classification = get_attributes(formula, config)?.into();
    debug!("{formula} is a {classification}");

    Ok(classification)
}
