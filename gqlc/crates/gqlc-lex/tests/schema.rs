//! Schema Integration Tests
//!
//! Lexes a complete schema document through the public API and checks the
//! token stream against the source text.

use gqlc_lex::{tokenize, Lexer, LexerConfig, Position, Token, TokenKind};
use gqlc_util::{Handler, Source};

const SCHEMA: &str = include_str!("fixtures/schema.graphqls");

fn schema_source() -> Source {
    Source::new("tests/fixtures/schema.graphqls", SCHEMA)
}

fn values_of(tokens: &[Token], kind: TokenKind) -> Vec<&str> {
    tokens
        .iter()
        .filter(|t| t.kind == kind)
        .map(|t| t.value.as_str())
        .collect()
}

#[test]
fn test_schema_lexes_without_errors() {
    let (tokens, handler) = tokenize(&schema_source());

    assert!(!handler.has_errors(), "{:?}", handler.diagnostics());
    assert!(tokens.iter().all(|t| !t.is_invalid()));
    assert_eq!(tokens.iter().filter(|t| t.is_eof()).count(), 1);
}

#[test]
fn test_schema_leading_tokens() {
    let (tokens, _) = tokenize(&schema_source());

    assert_eq!(tokens[0].kind, TokenKind::Comment);
    assert_eq!(tokens[0].position, Position::new(1, 1, 0));
    assert_eq!(tokens[1].kind, TokenKind::Name);
    assert_eq!(tokens[1].value, "schema");
    assert_eq!(tokens[1].position.line, 2);
    assert_eq!(tokens[2].kind, TokenKind::BraceL);
    assert_eq!(tokens[2].position.column, 8);
}

#[test]
fn test_schema_eof_position() {
    let (tokens, _) = tokenize(&schema_source());
    let eof = tokens.last().unwrap();

    assert_eq!(eof.kind, TokenKind::Eof);
    assert_eq!(eof.position.start, SCHEMA.len());
    assert_eq!(eof.position.line as usize, SCHEMA.lines().count() + 1);
    assert_eq!(eof.position.column, 1);
}

#[test]
fn test_schema_literals() {
    let (tokens, _) = tokenize(&schema_source());

    assert_eq!(values_of(&tokens, TokenKind::Int), ["10", "5"]);
    assert_eq!(values_of(&tokens, TokenKind::Float), ["-1.5e-3", "1.0"]);

    let blocks = values_of(&tokens, TokenKind::BlockString);
    assert_eq!(blocks.len(), 2);
    assert!(blocks[0].starts_with("\"\"\"\nThe query type"));
    assert_eq!(blocks[1], "\"\"\"Use `weight` instead.\"\"\"");

    let strings = values_of(&tokens, TokenKind::String);
    assert!(strings.contains(&r#""No comment, \"just\" stars ★""#));
    assert!(strings.contains(&r#""id""#));
}

#[test]
fn test_schema_block_string_positions() {
    let (tokens, _) = tokenize(&schema_source());
    let blocks: Vec<&Token> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::BlockString)
        .collect();

    let first_start = SCHEMA.find("\"\"\"").unwrap();
    assert_eq!(blocks[0].position, Position::new(8, 1, first_start));
    assert_eq!(blocks[1].position.line, 59);

    // The token after a multi-line block string is on the closing line.
    let next = tokens
        .iter()
        .find(|t| t.position.start > first_start && t.kind == TokenKind::Name)
        .unwrap();
    assert_eq!(next.value, "type");
    assert_eq!(next.position.line, 11);
}

#[test]
fn test_schema_tokens_match_source_text() {
    let (tokens, _) = tokenize(&schema_source());

    let mut cursor = 0;
    for token in &tokens {
        let gap = &SCHEMA[cursor..token.position.start];
        assert!(
            gap.chars().all(gqlc_lex::chars::is_ignored),
            "unexpected text {:?} before {}",
            gap,
            token
        );
        let text = token.text();
        assert_eq!(&SCHEMA[token.position.start..token.position.start + text.len()], text);
        cursor = token.position.start + text.len();
    }
    assert_eq!(cursor, SCHEMA.len());
}

#[test]
fn test_schema_without_comments() {
    let source = schema_source();
    let (with_comments, _) = tokenize(&source);

    let mut handler = Handler::new();
    let config = LexerConfig {
        emit_comments: false,
        ..LexerConfig::default()
    };
    let without: Vec<Token> = Lexer::with_config(&source, &mut handler, config).collect();

    let comments = with_comments
        .iter()
        .filter(|t| t.kind == TokenKind::Comment)
        .count();
    assert_eq!(comments, 1);
    // `tokenize` keeps the Eof token, the iterator does not.
    assert_eq!(without.len(), with_comments.len() - comments - 1);
    assert!(without.iter().all(|t| t.kind != TokenKind::Comment));
}

#[test]
fn test_schema_punctuators() {
    let (tokens, _) = tokenize(&schema_source());
    let count = |kind: TokenKind| tokens.iter().filter(|t| t.kind == kind).count();

    assert_eq!(count(TokenKind::BraceL), count(TokenKind::BraceR));
    assert_eq!(count(TokenKind::ParenL), count(TokenKind::ParenR));
    assert_eq!(count(TokenKind::BracketL), count(TokenKind::BracketR));
    assert_eq!(count(TokenKind::Amp), 1);
    assert_eq!(count(TokenKind::Pipe), 4);
    assert_eq!(count(TokenKind::At), 5);
}
