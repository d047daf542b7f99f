use mcfs_lexer::{scan, Keyword, LexError, TokenKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    scan("<stdin>", source)
        .unwrap()
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

fn fail(source: &str) -> LexError {
    scan("<stdin>", source).unwrap_err()
}

#[test]
fn reserved_words_in_a_row() {
    assert_eq!(
        kinds("define as end"),
        vec![
            TokenKind::Keyword(Keyword::Define),
            TokenKind::Keyword(Keyword::As),
            TokenKind::Keyword(Keyword::End),
            TokenKind::EndOfStream,
        ]
    );
}

#[test]
fn invalid_selector() {
    let err = fail("@x");
    assert_eq!(err.category(), "Invalid selector");
    assert_eq!(err.detail(), "'@x'");
    assert_eq!(
        err.render(),
        "Invalid selector: '@x'\nFile <stdin>, line 1\n\n@x\n^^"
    );
}

#[test]
fn unclosed_comment() {
    let err = fail("#hello");
    assert_eq!(err.category(), "Invalid Syntax");
    assert_eq!(err.detail(), "Unclosed comment");
}

#[test]
fn empty_json() {
    let err = fail("()");
    assert_eq!(err.category(), "Invalid JSON");
    assert_eq!(err.detail(), "Expected JSON value");
}

#[test]
fn raw_text_line() {
    assert_eq!(
        kinds("/say hi"),
        vec![TokenKind::RawText("say hi".into()), TokenKind::EndOfStream]
    );
}

#[test]
#[allow(clippy::approx_constant)]
fn number_with_two_dots() {
    assert_eq!(
        kinds("3.14.5"),
        vec![
            TokenKind::Number(3.14),
            TokenKind::Dot,
            TokenKind::Number(5.0),
            TokenKind::EndOfStream,
        ]
    );
}

#[test]
fn error_discards_earlier_tokens() {
    let err = fail("define a\nset b 1\nscore @z");
    assert_eq!(err.category(), "Invalid selector");
    assert_eq!(err.span().start.line(), 2);
    assert_eq!(
        err.render(),
        "Invalid selector: '@z'\nFile <stdin>, line 3\n\nscore @z\n      ^^"
    );
}

#[test]
fn full_script() {
    let source = "\
define reward
  get @p score kills
  set @p score kills = 0
  chat ({text: 'Well done', color: gold})
  /give @p diamond 1
end
";
    let tokens = scan("reward.mcfs", source).unwrap();
    let newlines = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Newline)
        .count();
    assert_eq!(newlines, 6);
    assert!(tokens.iter().any(|t| t.kind
        == TokenKind::JsonLiteral(serde_json::json!({"text": "Well done", "color": "gold"}))));
    assert!(tokens
        .iter()
        .any(|t| t.kind == TokenKind::RawText("give @p diamond 1".into())));
    assert_eq!(tokens.last().unwrap().kind, TokenKind::EndOfStream);
    assert_eq!(tokens.last().unwrap().span.start.line(), 6);
}
