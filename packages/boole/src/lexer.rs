//! Splits formula text into tokens.
//!
//! The accepted spellings are fixed:
//!
//! | Token    | Symbols                  | Keyword        |
//! |----------|--------------------------|----------------|
//! | NOT      | `!` `~` `¬`              | `NOT`          |
//! | AND      | `&` `&&` `∧`             | `AND`          |
//! | OR       | `\|` `\|\|` `∨`          | `OR`           |
//! | IMPLIES  | `->` `=>` `→` `⇒`        | `IMPLIES`      |
//! | IFF      | `<->` `<=>` `==` `↔` `⇔` | `IFF`          |
//! | constant | `⊤` `⊥`                  | `TRUE` `FALSE` |
//!
//! Keywords are matched case-insensitively and only as whole words. Any other
//! word made of an ASCII letter followed by ASCII letters or digits is a
//! (case-sensitive) variable name.

use derive_more::derive::Display;
use enum_as_inner::EnumAsInner;
use winnow::{
    combinator::alt,
    error::{ContextError, ErrMode},
    token::take_while,
    Parser,
};

use crate::error::LexError;

type LexResult<O> = Result<O, ErrMode<ContextError>>;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, EnumAsInner)]
pub enum TokenKind {
    #[display("identifier `{_0}`")]
    Identifier(String),
    #[display("constant `{_0}`")]
    Constant(bool),
    #[display("NOT")]
    Not,
    #[display("AND")]
    And,
    #[display("OR")]
    Or,
    #[display("IMPLIES")]
    Implies,
    #[display("IFF")]
    Iff,
    #[display("`(`")]
    LeftParenthesis,
    #[display("`)`")]
    RightParenthesis,
    #[display("end of input")]
    End,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
#[display("{kind} at {position}")]
pub struct Token {
    pub kind: TokenKind,
    /// Byte offset of the first character of the token.
    pub position: usize,
    /// Byte offset just past the last character of the token.
    pub end: usize,
}

/// Turns `text` into tokens, always closed by a [`TokenKind::End`] token
/// positioned at the end of the input.
pub fn tokenize(text: &str) -> Result<Vec<Token>, LexError> {
    let mut input = text;
    let mut tokens = Vec::new();

    loop {
        input = input.trim_start();
        let position = text.len() - input.len();

        let Some(found) = input.chars().next() else {
            tokens.push(Token {
                kind: TokenKind::End,
                position,
                end: position,
            });

            return Ok(tokens);
        };

        let kind = token
            .parse_next(&mut input)
            .map_err(|_| LexError { position, found })?;

        tokens.push(Token {
            kind,
            position,
            end: text.len() - input.len(),
        });
    }
}

fn token(input: &mut &str) -> LexResult<TokenKind> {
    alt((connective, constant, parenthesis, word)).parse_next(input)
}

fn connective(input: &mut &str) -> LexResult<TokenKind> {
    alt((
        alt(("<->", "<=>", "==", "↔", "⇔")).value(TokenKind::Iff),
        alt(("->", "=>", "→", "⇒")).value(TokenKind::Implies),
        alt(("&&", "&", "∧")).value(TokenKind::And),
        alt(("||", "|", "∨")).value(TokenKind::Or),
        alt(("!", "~", "¬")).value(TokenKind::Not),
    ))
    .parse_next(input)
}

fn constant(input: &mut &str) -> LexResult<TokenKind> {
    alt((
        '⊤'.value(TokenKind::Constant(true)),
        '⊥'.value(TokenKind::Constant(false)),
    ))
    .parse_next(input)
}

fn parenthesis(input: &mut &str) -> LexResult<TokenKind> {
    alt((
        '('.value(TokenKind::LeftParenthesis),
        ')'.value(TokenKind::RightParenthesis),
    ))
    .parse_next(input)
}

fn word(input: &mut &str) -> LexResult<TokenKind> {
    take_while(1.., |c: char| c.is_ascii_alphanumeric())
        .verify(|word: &str| word.starts_with(|c: char| c.is_ascii_alphabetic()))
        .map(|word: &str| {
            keyword(word).unwrap_or_else(|| TokenKind::Identifier(word.to_owned()))
        })
        .parse_next(input)
}

fn keyword(word: &str) -> Option<TokenKind> {
    match word.to_ascii_uppercase().as_str() {
        "NOT" => Some(TokenKind::Not),
        "AND" => Some(TokenKind::And),
        "OR" => Some(TokenKind::Or),
        "IMPLIES" => Some(TokenKind::Implies),
        "IFF" => Some(TokenKind::Iff),
        "TRUE" => Some(TokenKind::Constant(true)),
        "FALSE" => Some(TokenKind::Constant(false)),
        _ => None,
    }
}
