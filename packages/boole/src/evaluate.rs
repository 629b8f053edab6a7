use std::{collections::HashMap, fmt::Display, hash::BuildHasher};

use indexmap::IndexMap;
use itertools::Itertools;
use serde::Serialize;

use crate::{
    ast::{Formula, Proposition, PropositionalVariable},
    error::UnboundVariableError,
};

/// Truth values for a set of variables. Iteration follows insertion order,
/// which for generated assignments is the canonical variable order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Assignment(pub IndexMap<PropositionalVariable, bool>);

impl Assignment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: bool) -> Option<bool> {
        self.0.insert(PropositionalVariable::new(name), value)
    }

    pub fn with(mut self, name: impl Into<String>, value: bool) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<bool> {
        self.0.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PropositionalVariable, bool)> + '_ {
        self.0.iter().map(|(variable, &value)| (variable, value))
    }

    pub fn values(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.values().copied()
    }
}

impl<K: Into<String>> FromIterator<(K, bool)> for Assignment {
    fn from_iter<T: IntoIterator<Item = (K, bool)>>(iter: T) -> Self {
        Assignment(
            iter.into_iter()
                .map(|(name, value)| (PropositionalVariable::new(name), value))
                .collect(),
        )
    }
}

impl<K: Into<String>, S: BuildHasher> From<HashMap<K, bool, S>> for Assignment {
    fn from(map: HashMap<K, bool, S>) -> Self {
        map.into_iter().collect()
    }
}

impl Display for Assignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let variable_list = self
            .0
            .iter()
            .sorted_by(|(a, _), (b, _)| a.cmp(b))
            .map(|(variable, &value)| {
                let prefix = if value { "" } else { "¬" };
                format!("{prefix}{variable}")
            })
            .join(", ");

        write!(f, "{{{}}}", variable_list)
    }
}

pub trait Evaluate {
    fn evaluate(&self, assignment: &Assignment) -> Result<bool, UnboundVariableError>;
}

impl Evaluate for PropositionalVariable {
    fn evaluate(&self, assignment: &Assignment) -> Result<bool, UnboundVariableError> {
        assignment.get(self.name()).ok_or_else(|| UnboundVariableError {
            name: self.name().to_owned(),
        })
    }
}

impl Evaluate for Proposition {
    /// Both operands are always evaluated (`&`/`|`, not `&&`/`||`), so a missing
    /// variable is reported whatever the other operand's value.
    fn evaluate(&self, assignment: &Assignment) -> Result<bool, UnboundVariableError> {
        let value = match self {
            Proposition::Constant(value) => *value,
            Proposition::Atomic(p) => p.evaluate(assignment)?,
            Proposition::Negation(p) => !p.evaluate(assignment)?,
            Proposition::Conjunction(left, right) => {
                left.evaluate(assignment)? & right.evaluate(assignment)?
            }
            Proposition::Disjunction(left, right) => {
                left.evaluate(assignment)? | right.evaluate(assignment)?
            }
            Proposition::Implication(left, right) => {
                !left.evaluate(assignment)? | right.evaluate(assignment)?
            }
            Proposition::Equivalence(left, right) => {
                left.evaluate(assignment)? == right.evaluate(assignment)?
            }
        };

        Ok(value)
    }
}

impl Evaluate for Formula {
    /// Checks up front that every variable of the formula is assigned, reporting
    /// the first missing one in canonical order.
    fn evaluate(&self, assignment: &Assignment) -> Result<bool, UnboundVariableError> {
        if let Some(missing) = self
            .variables()
            .iter()
            .find(|variable| !assignment.contains(variable.name()))
        {
            return Err(UnboundVariableError {
                name: missing.name().to_owned(),
            });
        }

        self.proposition().evaluate(assignment)
    }
}
