//! Tests for the S-expression front end.

use super::*;
use tslisp_ir::{
    CallExpression, Expr, Identifier, MAX_NESTING, NumberLiteral, StringLiteral, TokenKind,
};

fn parse_source(source: &str) -> Result<Program, ParseError> {
    parse(tokenize(source).expect("tokenize failed"))
}

fn assert_parse(source: &str, expected: Vec<Expr>) {
    let program = parse_source(source).expect("parse failed");
    assert_eq!(program.body, expected, "source: {}", source);
}

fn call(name: &str, arguments: Vec<Expr>) -> Expr {
    CallExpression::new(Identifier::from_path(name), arguments).into()
}

fn ident(name: &str) -> Expr {
    Identifier::from_path(name).into()
}

fn num(raw: &str) -> Expr {
    NumberLiteral::new(raw).into()
}

fn string(value: &str) -> Expr {
    StringLiteral::new(value).into()
}

fn parse_err(source: &str) -> String {
    parse_source(source).expect_err("parse should fail").to_string()
}

// =============================================================================
// Lexer
// =============================================================================

#[test]
fn test_tokenize_call() {
    let tokens = tokenize("(add 1 2.5)").unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::new(TokenKind::LeftParen, "("),
            Token::new(TokenKind::Text, "add"),
            Token::new(TokenKind::NumberLiteral, "1"),
            Token::new(TokenKind::NumberLiteral, "2.5"),
            Token::new(TokenKind::RightParen, ")"),
        ]
    );
}

#[test]
fn test_tokenize_string_verbatim() {
    let tokens = tokenize(r#"(print "a\nb (c)")"#).unwrap();
    assert_eq!(tokens[2], Token::new(TokenKind::StringLiteral, r"a\nb (c)"));
}

#[test]
fn test_tokenize_reserved_words_are_text() {
    for word in ["true", "false", "null", "undefined"] {
        assert_eq!(tokenize(word).unwrap(), vec![Token::new(TokenKind::Text, word)]);
    }
}

#[test]
fn test_tokenize_comments() {
    let source = "// leading comment\n(a /* inline\n block */ b) // trailing";
    let kinds: Vec<_> = tokenize(source).unwrap().into_iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::LeftParen,
            TokenKind::Text,
            TokenKind::Text,
            TokenKind::RightParen,
        ]
    );
}

#[test]
fn test_tokenize_slash_operator() {
    let kinds: Vec<_> = tokenize("a / b").unwrap().into_iter().map(|t| t.kind).collect();
    assert_eq!(kinds, vec![TokenKind::Text, TokenKind::Slash, TokenKind::Text]);
}

#[test]
fn test_tokenize_sign_is_separate() {
    let kinds: Vec<_> = tokenize("-5").unwrap().into_iter().map(|t| t.kind).collect();
    assert_eq!(kinds, vec![TokenKind::Minus, TokenKind::NumberLiteral]);
}

#[test]
fn test_tokenize_identifier_with_digits() {
    assert_eq!(
        tokenize("x1y2").unwrap(),
        vec![Token::new(TokenKind::Text, "x1y2")]
    );
}

#[test]
fn test_tokenize_is_deterministic() {
    let source = "(def x (object \"a\" 1.5)) // c\n(print x.a)";
    assert_eq!(tokenize(source).unwrap(), tokenize(source).unwrap());
}

#[test]
fn test_unterminated_string() {
    assert_eq!(tokenize("(print \"hi)"), Err(LexError::UnterminatedString));
}

#[test]
fn test_unterminated_block_comment() {
    assert_eq!(tokenize("(a) /* never closed"), Err(LexError::UnterminatedComment));
}

#[test]
fn test_unexpected_character() {
    let err = tokenize("(add 1 #)").unwrap_err();
    assert_eq!(err, LexError::UnexpectedChar('#'));
    assert_eq!(err.to_string(), "unexpected token '#'");
}

#[test]
fn test_non_ascii_identifier_rejected() {
    assert_eq!(tokenize("é"), Err(LexError::UnexpectedChar('é')));
}

// =============================================================================
// Parser
// =============================================================================

#[test]
fn test_parse_empty_program() {
    assert_parse("", vec![]);
    assert_parse("  // only a comment", vec![]);
}

#[test]
fn test_parse_literals() {
    assert_parse("42 3.14 \"hi\" foo", vec![num("42"), num("3.14"), string("hi"), ident("foo")]);
}

#[test]
fn test_parse_call() {
    assert_parse("(add 1 2)", vec![call("add", vec![num("1"), num("2")])]);
}

#[test]
fn test_parse_call_without_arguments() {
    assert_parse("(now)", vec![call("now", vec![])]);
}

#[test]
fn test_parse_nested_calls() {
    assert_parse(
        "(def x (array 1 (add 2 3)))",
        vec![call(
            "def",
            vec![
                ident("x"),
                call("array", vec![num("1"), call("add", vec![num("2"), num("3")])]),
            ],
        )],
    );
}

#[test]
fn test_parse_multiple_top_level() {
    assert_parse(
        "(def a 1) (print a)",
        vec![
            call("def", vec![ident("a"), num("1")]),
            call("print", vec![ident("a")]),
        ],
    );
}

#[test]
fn test_parse_dotted_identifier() {
    let program = parse_source("(console.log a.b.c)").unwrap();
    let Expr::Call(call) = &program.body[0] else {
        panic!("expected call");
    };
    assert_eq!(call.callee.segments(), ["console", "log"]);
    let Expr::Identifier(arg) = &call.arguments[0] else {
        panic!("expected identifier");
    };
    assert_eq!(arg.segments(), ["a", "b", "c"]);
    assert_eq!(arg.name(), "a.b.c");
}

#[test]
fn test_parse_dot_without_member() {
    assert_eq!(parse_err("a."), "expected expression, found '.'");
    assert_eq!(parse_err("a.1"), "expected expression, found '.'");
}

#[test]
fn test_parse_callee_must_be_identifier() {
    assert_eq!(parse_err("((f) 1)"), "expected text, found '('");
    assert_eq!(parse_err("(\"f\" 1)"), "expected text, found string literal \"f\"");
    assert_eq!(parse_err("()"), "expected text, found ')'");
}

#[test]
fn test_parse_missing_close_paren() {
    assert_eq!(parse_err("(add 1 2"), "expected ')', found end of input");
    assert_eq!(parse_err("(add"), "expected ')', found end of input");
}

#[test]
fn test_parse_stray_close_paren() {
    assert_eq!(parse_err("(a))"), "expected expression, found ')'");
}

#[test]
fn test_parse_rejects_arithmetic_tokens() {
    assert_eq!(parse_err("(add 1 + 2)"), "expected expression, found '+'");
    assert_eq!(parse_err("-1"), "expected expression, found '-'");
}

#[test]
fn test_every_callee_is_identifier() {
    fn check(expr: &Expr) {
        if let Expr::Call(call) = expr {
            assert!(!call.callee.segments().is_empty());
            call.arguments.iter().for_each(check);
        }
    }

    let program = parse_source(
        "(if (and true (not x)) (print (idx xs 0)) (throw (new Error \"bad\")))",
    )
    .unwrap();
    program.body.iter().for_each(check);
}

fn nested(depth: usize) -> String {
    format!("{}1{}", "(f ".repeat(depth), ")".repeat(depth))
}

#[test]
fn test_parse_nesting_at_limit() {
    let program = parse_source(&nested(MAX_NESTING)).unwrap();

    let mut depth = 0;
    let mut expr = &program.body[0];
    while let Expr::Call(call) = expr {
        depth += 1;
        expr = &call.arguments[0];
    }
    assert_eq!(depth, MAX_NESTING);
    assert_eq!(expr, &num("1"));
}

#[test]
fn test_parse_nesting_past_limit() {
    assert_eq!(
        parse_source(&nested(MAX_NESTING + 1)),
        Err(ParseError::TooDeep { limit: MAX_NESTING })
    );
    assert_eq!(
        parse_err(&nested(5_000)),
        "expression nesting exceeds 256 levels"
    );
}

#[test]
fn test_parse_long_unclosed_run_fails() {
    let err = parse_source(&"(f ".repeat(200_000)).unwrap_err();
    assert_eq!(err, ParseError::TooDeep { limit: MAX_NESTING });
}

#[test]
fn test_parse_siblings_do_not_count_as_nesting() {
    let source = format!("(array {})", "(f 1) ".repeat(MAX_NESTING * 2));
    let program = parse_source(&source).unwrap();
    let Expr::Call(call) = &program.body[0] else {
        panic!("expected a call");
    };
    assert_eq!(call.arguments.len(), MAX_NESTING * 2);
}
