use std::fmt::Display;

use colored::Colorize;
use log::trace;
use serde::Serialize;

use crate::{
    ast::{Formula, PropositionalVariable},
    classify::{Classification, PropositionAttributes},
    config::EngineConfig,
    error::Error,
    evaluate::{Assignment, Evaluate},
    markdown::Markdown,
};

/// Walks every assignment over a list of variables in canonical order: row
/// `i` read as an `n`-bit number assigns `true` to the `k`-th variable iff bit
/// `k`, counted from the most significant end, is set.
///
/// A single [`Assignment`] is rewritten in place for each row.
pub(crate) struct Assignments {
    current: Assignment,
    index: u64,
    count: u64,
}

impl Assignments {
    /// The caller must keep `variables.len()` within
    /// [`ABSOLUTE_MAX_VARIABLES`](crate::config::ABSOLUTE_MAX_VARIABLES).
    pub(crate) fn new(variables: &[PropositionalVariable]) -> Self {
        Self {
            current: Assignment(
                variables
                    .iter()
                    .map(|variable| (variable.clone(), false))
                    .collect(),
            ),
            index: 0,
            count: 1 << variables.len(),
        }
    }

    pub(crate) fn advance(&mut self) -> Option<&Assignment> {
        if self.index == self.count {
            return None;
        }

        let i = self.index;
        let n = self.current.len();

        for (k, value) in self.current.0.values_mut().enumerate() {
            *value = (i >> (n - 1 - k)) & 1 == 1;
        }

        self.index += 1;

        Some(&self.current)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    values: Vec<bool>,
    result: bool,
}

impl Row {
    /// Assigned values in canonical variable order.
    pub fn values(&self) -> &[bool] {
        &self.values
    }

    pub fn result(&self) -> bool {
        self.result
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TruthTable {
    formula: String,
    variables: Vec<PropositionalVariable>,
    rows: Vec<Row>,
}

impl TruthTable {
    /// Evaluates `formula` under every assignment of its variables, failing
    /// before any work is done if there are more than the configured maximum.
    pub fn new(formula: &Formula, config: &EngineConfig) -> Result<Self, Error> {
        config.check_variable_count(formula)?;

        let mut rows = Vec::new();
        let mut assignments = Assignments::new(formula.variables());

        while let Some(assignment) = assignments.advance() {
            let result = formula.proposition().evaluate(assignment)?;
            trace!("{formula} under {assignment} = {result}");

            rows.push(Row {
                values: assignment.values().collect(),
                result,
            });
        }

        Ok(TruthTable {
            formula: formula.to_string(),
            variables: formula.variables().to_vec(),
            rows,
        })
    }

    pub fn formula(&self) -> &str {
        &self.formula
    }

    pub fn variables(&self) -> &[PropositionalVariable] {
        &self.variables
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Never true: a formula without variables still has one row.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The assignment of row `index`, rebuilt from the variable names.
    pub fn assignment(&self, index: usize) -> Option<Assignment> {
        let row = self.rows.get(index)?;

        Some(Assignment(
            self.variables
                .iter()
                .cloned()
                .zip(row.values.iter().copied())
                .collect(),
        ))
    }

    pub fn results(&self) -> impl Iterator<Item = bool> + '_ {
        self.rows.iter().map(Row::result)
    }

    /// The table as plain `(values, result)` pairs.
    pub fn to_vec(&self) -> Vec<(Vec<bool>, bool)> {
        self.rows
            .iter()
            .map(|row| (row.values.clone(), row.result))
            .collect()
    }

    pub fn get_attributes(&self) -> PropositionAttributes {
        let mut valid = true;
        let mut satisfiable = false;

        for result in self.results() {
            valid &= result;
            satisfiable |= result;
        }

        PropositionAttributes { valid, satisfiable }
    }

    pub fn classification(&self) -> Classification {
        self.get_attributes().into()
    }

    /// Like the [`Display`] rendering, with result cells coloured as HTML spans.
    pub fn to_markdown(&self) -> String {
        self.render(|result| {
            if result {
                "T".green().markdown()
            } else {
                "F".red().markdown()
            }
        })
    }

    fn render(&self, result_cell: impl Fn(bool) -> String) -> String {
        let mut table = String::new();

        for variable in &self.variables {
            table.push_str(&format!("|{variable}"));
        }
        table.push_str(&format!("|{}|\n", self.formula));

        for _ in 0..=self.variables.len() {
            table.push_str("|:-:");
        }
        table.push_str("|\n");

        for row in &self.rows {
            for &value in &row.values {
                table.push_str(&format!("|{}", cell(value)));
            }
            table.push_str(&format!("|{}|\n", result_cell(row.result)));
        }

        table
    }
}

fn cell(value: bool) -> &'static str {
    if value {
        "T"
    } else {
        "F"
    }
}

impl Display for TruthTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render(|result| cell(result).to_owned()))
    }
}
