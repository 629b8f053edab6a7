use std::{borrow::Borrow, collections::BTreeSet, fmt::Display};

use derive_more::derive::Display;
use enum_as_inner::EnumAsInner;
use itertools::Itertools;
use serde::Serialize;
use termtree::Tree;

#[derive(Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PropositionalVariable(pub String);

impl PropositionalVariable {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

// Lets assignments be queried with plain `&str` keys.
impl Borrow<str> for PropositionalVariable {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Hash, PartialEq, Eq, EnumAsInner)]
pub enum Proposition {
    Constant(bool),
    Atomic(PropositionalVariable),
    Negation(Box<Proposition>),
    Conjunction(Box<Proposition>, Box<Proposition>),
    Disjunction(Box<Proposition>, Box<Proposition>),
    Implication(Box<Proposition>, Box<Proposition>),
    Equivalence(Box<Proposition>, Box<Proposition>),
}

impl From<PropositionalVariable> for Proposition {
    fn from(p: PropositionalVariable) -> Self {
        Proposition::Atomic(p)
    }
}

impl Proposition {
    pub fn atomic(name: impl Into<String>) -> Self {
        Proposition::Atomic(PropositionalVariable::new(name))
    }

    pub fn negated(self) -> Self {
        Proposition::Negation(Box::new(self))
    }

    pub fn and(self, right: Proposition) -> Self {
        Proposition::Conjunction(Box::new(self), Box::new(right))
    }

    pub fn or(self, right: Proposition) -> Self {
        Proposition::Disjunction(Box::new(self), Box::new(right))
    }

    pub fn implies(self, right: Proposition) -> Self {
        Proposition::Implication(Box::new(self), Box::new(right))
    }

    pub fn iff(self, right: Proposition) -> Self {
        Proposition::Equivalence(Box::new(self), Box::new(right))
    }

    pub fn symbol(&self) -> &str {
        match self {
            Proposition::Constant(true) => "⊤",
            Proposition::Constant(false) => "⊥",
            Proposition::Atomic(p) => p.name(),
            Proposition::Negation(_) => "¬",
            Proposition::Conjunction(_, _) => "∧",
            Proposition::Disjunction(_, _) => "∨",
            Proposition::Implication(_, _) => "⇒",
            Proposition::Equivalence(_, _) => "⇔",
        }
    }

    pub fn is_compound(&self) -> bool {
        !matches!(self, Proposition::Constant(_) | Proposition::Atomic(_))
    }

    pub fn get_tree(&self) -> Tree<String> {
        let symbol = self.symbol().to_owned();

        match self {
            Proposition::Constant(_) | Proposition::Atomic(_) => Tree::new(symbol),
            Proposition::Negation(p) => Tree::new(symbol).with_leaves(vec![p.get_tree()]),
            Proposition::Conjunction(left, right)
            | Proposition::Disjunction(left, right)
            | Proposition::Implication(left, right)
            | Proposition::Equivalence(left, right) => {
                Tree::new(symbol).with_leaves(vec![left.get_tree(), right.get_tree()])
            }
        }
    }

    /// Every variable in the proposition, sorted and without duplicates.
    pub fn get_variables(&self) -> BTreeSet<PropositionalVariable> {
        let mut variables = BTreeSet::new();
        self.collect_variables(&mut variables);

        variables
    }

    fn collect_variables(&self, variables: &mut BTreeSet<PropositionalVariable>) {
        match self {
            Proposition::Constant(_) => {}
            Proposition::Atomic(p) => {
                variables.insert(p.clone());
            }
            Proposition::Negation(p) => p.collect_variables(variables),
            Proposition::Conjunction(left, right)
            | Proposition::Disjunction(left, right)
            | Proposition::Implication(left, right)
            | Proposition::Equivalence(left, right) => {
                left.collect_variables(variables);
                right.collect_variables(variables);
            }
        }
    }
}

impl Display for Proposition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Proposition::Constant(_) | Proposition::Atomic(_) => write!(f, "{}", self.symbol()),
            Proposition::Negation(p) => write!(f, "¬{p}"),
            Proposition::Conjunction(left, right)
            | Proposition::Disjunction(left, right)
            | Proposition::Implication(left, right)
            | Proposition::Equivalence(left, right) => {
                write!(f, "({left} {} {right})", self.symbol())
            }
        }
    }
}

/// A parsed proposition together with the variables it mentions.
///
/// The variable order is canonical: it is the column order of truth tables and
/// the bit order used to enumerate assignments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formula {
    proposition: Proposition,
    variables: Vec<PropositionalVariable>,
}

impl Formula {
    pub(crate) fn new(
        proposition: Proposition,
        variables: BTreeSet<PropositionalVariable>,
    ) -> Self {
        Self {
            proposition,
            variables: variables.into_iter().collect(),
        }
    }

    pub fn proposition(&self) -> &Proposition {
        &self.proposition
    }

    pub fn variables(&self) -> &[PropositionalVariable] {
        &self.variables
    }

    pub fn into_proposition(self) -> Proposition {
        self.proposition
    }
}

impl From<Proposition> for Formula {
    fn from(proposition: Proposition) -> Self {
        let variables = proposition.get_variables();
        Formula::new(proposition, variables)
    }
}

impl Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.proposition)
    }
}

pub(crate) fn variable_list(variables: &[PropositionalVariable]) -> String {
    format!("{{{}}}", variables.iter().join(", "))
}
