//! Precedence-climbing recursive descent over lexer tokens.
//!
//! From loosest to tightest binding:
//!
//! ```text
//! equivalence := implication (IFF implication)*      left-associative
//! implication := disjunction (IMPLIES implication)?  right-associative
//! disjunction := conjunction (OR conjunction)*       left-associative
//! conjunction := negation (AND negation)*            left-associative
//! negation    := NOT negation | base_expression
//! base_expression := VARIABLE | CONSTANT | ( equivalence )
//! ```
//!
//! The height of the resulting proposition is bounded by
//! [`EngineConfig::max_depth`]. The parser's own recursion never goes deeper
//! than that height, and neither does anything that later walks the tree.

use std::collections::BTreeSet;

use log::debug;

use crate::{
    ast::{variable_list, Formula, Proposition, PropositionalVariable},
    config::EngineConfig,
    error::{Error, Expected, NestingTooDeepError, ParseError},
    lexer::{tokenize, Token, TokenKind},
};

/// Lexes and parses `text` into a [`Formula`].
pub fn parse(text: &str, config: &EngineConfig) -> Result<Formula, Error> {
    let tokens = tokenize(text)?;
    let formula = parse_tokens(&tokens, config)?;

    debug!(
        "Parsed \"{}\" as {} over {}",
        text,
        formula,
        variable_list(formula.variables())
    );

    Ok(formula)
}

/// Parses a token sequence as produced by [`tokenize`]. A missing trailing
/// [`TokenKind::End`] is tolerated.
pub fn parse_tokens(tokens: &[Token], config: &EngineConfig) -> Result<Formula, Error> {
    let mut parser = TokenParser::new(tokens, config.max_depth);

    let node = parser.equivalence()?;
    parser.expect_end()?;

    Ok(Formula::new(node.proposition, parser.variables))
}

/// A parsed subtree and its height, a leaf counting as 1.
struct Node {
    proposition: Proposition,
    height: usize,
}

impl Node {
    fn leaf(proposition: Proposition) -> Self {
        Self {
            proposition,
            height: 1,
        }
    }
}

struct TokenParser<'a> {
    tokens: &'a [Token],
    index: usize,
    end: Token,
    variables: BTreeSet<PropositionalVariable>,
    depth: usize,
    max_depth: usize,
}

impl<'a> TokenParser<'a> {
    fn new(tokens: &'a [Token], max_depth: usize) -> Self {
        let position = tokens.last().map_or(0, |token| token.end);
        let end = Token {
            kind: TokenKind::End,
            position,
            end: position,
        };

        Self {
            tokens,
            index: 0,
            end,
            variables: BTreeSet::new(),
            depth: 0,
            max_depth,
        }
    }

    fn peek(&self) -> &Token {
        self.tokens.get(self.index).unwrap_or(&self.end)
    }

    fn next_if(&mut self, kind: &TokenKind) -> bool {
        let matches = self.peek().kind == *kind;
        if matches {
            self.index += 1;
        }

        matches
    }

    fn error(&self, expected: Expected) -> ParseError {
        let token = self.peek();

        ParseError {
            position: token.position,
            expected,
            found: token.kind.clone(),
        }
    }

    fn too_deep(&self, position: usize) -> NestingTooDeepError {
        NestingTooDeepError {
            position,
            limit: self.max_depth,
        }
    }

    fn expect_end(&self) -> Result<(), ParseError> {
        match self.peek().kind {
            TokenKind::End => Ok(()),
            _ => Err(self.error(Expected::ConnectiveOrEnd)),
        }
    }

    /// Runs `parse` one level further down, refusing once the nesting at
    /// `position` would exceed the limit.
    fn nested(
        &mut self,
        position: usize,
        parse: impl FnOnce(&mut Self) -> Result<Node, Error>,
    ) -> Result<Node, Error> {
        if self.depth >= self.max_depth {
            return Err(self.too_deep(position).into());
        }

        self.depth += 1;
        let node = parse(self);
        self.depth -= 1;

        node
    }

    fn unary(
        &self,
        position: usize,
        inner: Node,
        connective: fn(Proposition) -> Proposition,
    ) -> Result<Node, Error> {
        let height = inner.height + 1;
        if height > self.max_depth {
            return Err(self.too_deep(position).into());
        }

        Ok(Node {
            proposition: connective(inner.proposition),
            height,
        })
    }

    fn binary(
        &self,
        position: usize,
        left: Node,
        right: Node,
        connective: fn(Proposition, Proposition) -> Proposition,
    ) -> Result<Node, Error> {
        let height = left.height.max(right.height) + 1;
        if height > self.max_depth {
            return Err(self.too_deep(position).into());
        }

        Ok(Node {
            proposition: connective(left.proposition, right.proposition),
            height,
        })
    }

    fn equivalence(&mut self) -> Result<Node, Error> {
        let mut left = self.implication()?;

        loop {
            let position = self.peek().position;
            if !self.next_if(&TokenKind::Iff) {
                break;
            }

            let right = self.implication()?;
            left = self.binary(position, left, right, Proposition::iff)?;
        }

        Ok(left)
    }

    fn implication(&mut self) -> Result<Node, Error> {
        let left = self.disjunction()?;

        let position = self.peek().position;
        if self.next_if(&TokenKind::Implies) {
            let right = self.nested(position, Self::implication)?;
            return self.binary(position, left, right, Proposition::implies);
        }

        Ok(left)
    }

    fn disjunction(&mut self) -> Result<Node, Error> {
        let mut left = self.conjunction()?;

        loop {
            let position = self.peek().position;
            if !self.next_if(&TokenKind::Or) {
                break;
            }

            let right = self.conjunction()?;
            left = self.binary(position, left, right, Proposition::or)?;
        }

        Ok(left)
    }

    fn conjunction(&mut self) -> Result<Node, Error> {
        let mut left = self.negation()?;

        loop {
            let position = self.peek().position;
            if !self.next_if(&TokenKind::And) {
                break;
            }

            let right = self.negation()?;
            left = self.binary(position, left, right, Proposition::and)?;
        }

        Ok(left)
    }

    fn negation(&mut self) -> Result<Node, Error> {
        let position = self.peek().position;
        if self.next_if(&TokenKind::Not) {
            let inner = self.nested(position, Self::negation)?;
            return self.unary(position, inner, Proposition::negated);
        }

        self.base_expression()
    }

    fn base_expression(&mut self) -> Result<Node, Error> {
        let tokens = self.tokens;

        match tokens.get(self.index).map(|token| &token.kind) {
            Some(TokenKind::Identifier(name)) => {
                self.index += 1;

                let variable = PropositionalVariable::new(name.as_str());
                self.variables.insert(variable.clone());

                Ok(Node::leaf(variable.into()))
            }
            Some(TokenKind::Constant(value)) => {
                self.index += 1;

                Ok(Node::leaf(Proposition::Constant(*value)))
            }
            Some(TokenKind::LeftParenthesis) => {
                let position = self.peek().position;
                self.index += 1;

                let inner = self.nested(position, Self::equivalence)?;
                if !self.next_if(&TokenKind::RightParenthesis) {
                    return Err(self.error(Expected::ClosingParenthesis).into());
                }

                Ok(inner)
            }
            _ => Err(self.error(Expected::Operand).into()),
        }
    }
}
