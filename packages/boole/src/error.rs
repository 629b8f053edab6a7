use derive_more::derive::{Display, Error, From};

use crate::lexer::TokenKind;

/// A character that cannot begin or continue any token.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("unrecognized character `{found}` at position {position}")]
pub struct LexError {
    /// Byte offset of the offending character.
    pub position: usize,
    pub found: char,
}

/// What the parser was looking for when it hit a [`ParseError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Expected {
    #[display("a variable, constant, negation or opening parenthesis")]
    Operand,
    #[display("closing parenthesis")]
    ClosingParenthesis,
    #[display("a binary connective or end of input")]
    ConnectiveOrEnd,
}

#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("expected {expected} at position {position}, found {found}")]
pub struct ParseError {
    pub position: usize,
    pub expected: Expected,
    pub found: TokenKind,
}

/// The formula nests connectives or parentheses deeper than the parser allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("formula nests deeper than {limit} levels at position {position}")]
pub struct NestingTooDeepError {
    pub position: usize,
    pub limit: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("no value assigned to variable `{name}`")]
pub struct UnboundVariableError {
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("formula has {count} variables, more than the limit of {limit}")]
pub struct TooManyVariablesError {
    pub count: usize,
    pub limit: usize,
}

/// Any failure of an engine operation.
///
/// Hosts translating this into their own failure signal should keep the kind
/// apart, and the position where there is one (see [`Error::position`]).
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum Error {
    #[display("{_0}")]
    Lex(LexError),
    #[display("{_0}")]
    Parse(ParseError),
    #[display("{_0}")]
    NestingTooDeep(NestingTooDeepError),
    #[display("{_0}")]
    UnboundVariable(UnboundVariableError),
    #[display("{_0}")]
    TooManyVariables(TooManyVariablesError),
}

impl Error {
    pub fn position(&self) -> Option<usize> {
        match self {
            Error::Lex(e) => Some(e.position),
            Error::Parse(e) => Some(e.position),
            Error::NestingTooDeep(e) => Some(e.position),
            Error::UnboundVariable(_) | Error::TooManyVariables(_) => None,
        }
    }
}
