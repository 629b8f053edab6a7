use boole::{
    error::Expected,
    lexer::{tokenize, TokenKind},
    parse,
    parser::parse_tokens,
    Assignment, Engine, EngineConfig, Error, Evaluate, NestingTooDeepError, ParseError,
    Proposition, PropositionalVariable, MAX_DEPTH,
};

fn p() -> Proposition {
    Proposition::atomic("p")
}

fn q() -> Proposition {
    Proposition::atomic("q")
}

fn r() -> Proposition {
    Proposition::atomic("r")
}

fn s() -> Proposition {
    Proposition::atomic("s")
}

fn parsed(input: &str) -> Proposition {
    parse(input).unwrap().into_proposition()
}

fn parse_error(input: &str) -> ParseError {
    match parse(input) {
        Err(Error::Parse(e)) => e,
        other => panic!("expected a parse error for {input:?}, got {other:?}"),
    }
}

#[test]
fn and_binds_tighter_than_or() {
    assert_eq!(parsed("p AND q OR r"), p().and(q()).or(r()));
    assert_eq!(parsed("p | q & r"), p().or(q().and(r())));
}

#[test]
fn parentheses_override_precedence() {
    assert_eq!(parsed("p AND (q OR r)"), p().and(q().or(r())));
    assert_eq!(parsed("((p))"), p());
}

#[test]
fn not_binds_tightest() {
    assert_eq!(parsed("NOT p AND q"), p().negated().and(q()));
    assert_eq!(parsed("!(p & q)"), p().and(q()).negated());
    assert_eq!(parsed("!!!p"), p().negated().negated().negated());
}

#[test]
fn or_binds_tighter_than_implies() {
    assert_eq!(parsed("p OR q -> r"), p().or(q()).implies(r()));
    assert_eq!(parsed("p -> q | r"), p().implies(q().or(r())));
}

#[test]
fn implies_binds_tighter_than_iff() {
    assert_eq!(
        parsed("p -> q <-> r -> s"),
        p().implies(q()).iff(r().implies(s()))
    );
}

#[test]
fn implication_is_right_associative() {
    assert_eq!(parsed("p -> q -> r"), p().implies(q().implies(r())));
}

#[test]
fn other_binary_connectives_are_left_associative() {
    assert_eq!(parsed("p & q & r"), p().and(q()).and(r()));
    assert_eq!(parsed("p | q | r"), p().or(q()).or(r()));
    assert_eq!(parsed("p <-> q <-> r"), p().iff(q()).iff(r()));
}

#[test]
fn mixed_precedence() {
    assert_eq!(
        parsed("!p & q | r -> s <-> p"),
        p().negated()
            .and(q())
            .or(r())
            .implies(s())
            .iff(p())
    );
}

#[test]
fn constants() {
    assert_eq!(
        parsed("TRUE -> ⊥"),
        Proposition::Constant(true).implies(Proposition::Constant(false))
    );
}

#[test]
fn variables_are_sorted_and_deduplicated() {
    let formula = parse("b & a | b & c -> a").unwrap();

    assert_eq!(
        formula.variables(),
        &[
            PropositionalVariable::new("a"),
            PropositionalVariable::new("b"),
            PropositionalVariable::new("c"),
        ]
    );
    assert_eq!(
        formula.variables().to_vec(),
        formula.proposition().get_variables().into_iter().collect::<Vec<_>>()
    );
}

#[test]
fn constant_formulas_have_no_variables() {
    assert!(parse("true & !false").unwrap().variables().is_empty());
}

#[test]
fn dangling_operator() {
    assert_eq!(
        parse_error("p AND"),
        ParseError {
            position: 5,
            expected: Expected::Operand,
            found: TokenKind::End,
        }
    );
}

#[test]
fn unmatched_parentheses() {
    assert_eq!(
        parse_error("(p"),
        ParseError {
            position: 2,
            expected: Expected::ClosingParenthesis,
            found: TokenKind::End,
        }
    );

    assert_eq!(
        parse_error("p)"),
        ParseError {
            position: 1,
            expected: Expected::ConnectiveOrEnd,
            found: TokenKind::RightParenthesis,
        }
    );
}

#[test]
fn adjacent_atoms() {
    assert_eq!(
        parse_error("p q"),
        ParseError {
            position: 2,
            expected: Expected::ConnectiveOrEnd,
            found: TokenKind::Identifier("q".to_owned()),
        }
    );
}

#[test]
fn missing_operand() {
    assert_eq!(
        parse_error(""),
        ParseError {
            position: 0,
            expected: Expected::Operand,
            found: TokenKind::End,
        }
    );

    assert_eq!(
        parse_error("& p"),
        ParseError {
            position: 0,
            expected: Expected::Operand,
            found: TokenKind::And,
        }
    );

    assert_eq!(parse_error("()").position, 1);
}

#[test]
fn lexing_errors_surface_from_parse() {
    assert!(matches!(parse("p # q"), Err(Error::Lex(_))));
}

#[test]
fn tokens_without_end_marker() {
    let mut tokens = tokenize("p & q").unwrap();
    tokens.pop();

    assert_eq!(
        parse_tokens(&tokens, &EngineConfig::default())
            .unwrap()
            .into_proposition(),
        p().and(q())
    );
}

#[test]
fn missing_end_marker_reports_the_end_of_the_last_token() {
    let mut tokens = tokenize("p AND").unwrap();
    tokens.pop();

    assert_eq!(
        parse_tokens(&tokens, &EngineConfig::default()),
        Err(Error::Parse(ParseError {
            position: 5,
            expected: Expected::Operand,
            found: TokenKind::End,
        }))
    );
}

fn nesting_error(input: &str) -> NestingTooDeepError {
    match parse(input) {
        Err(Error::NestingTooDeep(e)) => e,
        other => panic!("expected a nesting error, got {other:?}"),
    }
}

#[test]
fn deeply_nested_parentheses_are_rejected() {
    let input = "(".repeat(100_000) + "p";

    assert_eq!(
        nesting_error(&input),
        NestingTooDeepError {
            position: MAX_DEPTH,
            limit: MAX_DEPTH,
        }
    );
}

#[test]
fn long_negation_runs_are_rejected() {
    let input = "!".repeat(200_000) + "p";

    assert_eq!(nesting_error(&input).position, MAX_DEPTH);
}

#[test]
fn long_binary_chains_are_rejected() {
    let conjunctions = "p".to_owned() + &" & p".repeat(100_000);
    assert_eq!(nesting_error(&conjunctions).position, 2 + 4 * (MAX_DEPTH - 1));

    let implications = "p".to_owned() + &" -> p".repeat(100_000);
    assert!(matches!(parse(&implications), Err(Error::NestingTooDeep(_))));

    let equivalences = "p".to_owned() + &" <-> p".repeat(100_000);
    assert!(matches!(parse(&equivalences), Err(Error::NestingTooDeep(_))));
}

#[test]
fn nesting_up_to_the_limit_still_parses() {
    let negations = "!".repeat(MAX_DEPTH - 1) + "p";
    let formula = parse(&negations).unwrap();
    assert!(formula
        .proposition()
        .evaluate(&Assignment::new().with("p", true))
        .unwrap());
    assert!(matches!(
        parse(&("!".repeat(MAX_DEPTH) + "p")),
        Err(Error::NestingTooDeep(_))
    ));

    let parentheses = "(".repeat(200) + "p" + &")".repeat(200);
    assert_eq!(parse(&parentheses).unwrap().into_proposition(), p());
}

#[test]
fn nesting_limit_is_configurable() {
    let engine = Engine::new(EngineConfig::default().with_max_depth(3));

    assert_eq!(
        engine.parse("!!p").unwrap().into_proposition(),
        p().negated().negated()
    );
    assert_eq!(
        engine.parse("!!!p"),
        Err(Error::NestingTooDeep(NestingTooDeepError {
            position: 0,
            limit: 3,
        }))
    );
    assert!(engine.parse("p & q & r").is_ok());
    assert!(engine.parse("p & q & r & s").is_err());
}

#[test]
fn display_reparses_to_the_same_tree() {
    for input in [
        "p AND q OR r",
        "!(p & q) <-> (!p | !q)",
        "p -> q -> r",
        "(p -> q) -> r",
        "p <-> q <-> r",
        "!!p & TRUE",
    ] {
        let formula = parse(input).unwrap();
        let reparsed = parse(&formula.to_string()).unwrap();

        assert_eq!(reparsed, formula, "{input}");
    }

    assert_eq!(parse("p & !q | r").unwrap().to_string(), "((p ∧ ¬q) ∨ r)");
}

#[test]
fn tree_rendering() {
    let tree = parse("p & !q").unwrap().proposition().get_tree().to_string();

    assert!(tree.starts_with("∧"));
    assert!(tree.contains('¬'));
    assert!(tree.contains('q'));
}

#[test]
fn variant_accessors() {
    let proposition = parsed("p | q");
    let (left, right) = proposition.as_disjunction().unwrap();

    assert_eq!(**left, p());
    assert_eq!(**right, q());
    assert!(proposition.as_conjunction().is_none());
}
