use lox::{
    error::Diagnostics,
    interpreter::{
        lexer::{Token, TokenKind, scan},
        value::core::Value,
    },
};
use pretty_assertions::assert_eq;

fn kinds(src: &str) -> Vec<TokenKind> {
    let mut diagnostics = Diagnostics::default();
    let tokens = scan(src, &mut diagnostics);
    assert!(!diagnostics.had_syntax_error(), "unexpected lexical error in {src:?}");

    tokens.into_iter().map(|token| token.kind).collect()
}

fn scan_with_errors(src: &str) -> (Vec<Token>, Vec<String>) {
    let mut diagnostics = Diagnostics::default();
    let tokens = scan(src, &mut diagnostics);

    (tokens, diagnostics.reports())
}

#[test]
fn punctuation_and_operators() {
    use TokenKind::*;

    assert_eq!(kinds("(){},.-+;/*"),
               [LeftParen, RightParen, LeftBrace, RightBrace, Comma, Dot, Minus, Plus, Semicolon, Slash,
                Star, Eof]);
    assert_eq!(kinds("! != = == > >= < <="),
               [Bang, BangEqual, Equal, EqualEqual, Greater, GreaterEqual, Less, LessEqual, Eof]);
}

#[test]
fn two_character_operators_win_over_prefixes() {
    use TokenKind::*;

    assert_eq!(kinds("!==="), [BangEqual, EqualEqual, Eof]);
    assert_eq!(kinds("<=>"), [LessEqual, Greater, Eof]);
}

#[test]
fn keywords_and_identifiers() {
    use TokenKind::*;

    assert_eq!(kinds("and class else false fun for if nil or print return super this true var while"),
               [And, Class, Else, False, Fun, For, If, Nil, Or, Print, Return, Super, This, True, Var, While,
                Eof]);
    assert_eq!(kinds("orchid _private var_1 classy"),
               [Identifier, Identifier, Identifier, Identifier, Eof]);
}

#[test]
fn number_literals() {
    let mut diagnostics = Diagnostics::default();
    let tokens = scan("12 3.25 7.", &mut diagnostics);

    assert_eq!(tokens[0].literal, Some(Value::Number(12.0)));
    assert_eq!(tokens[1].literal, Some(Value::Number(3.25)));
    assert_eq!(tokens[1].lexeme, "3.25");
    // A trailing dot is not part of the number.
    assert_eq!(tokens[2].kind, TokenKind::Number);
    assert_eq!(tokens[2].lexeme, "7");
    assert_eq!(tokens[3].kind, TokenKind::Dot);
}

#[test]
fn string_literals_strip_quotes_and_span_lines() {
    let mut diagnostics = Diagnostics::default();
    let tokens = scan("\"one\ntwo\" x", &mut diagnostics);

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].lexeme, "\"one\ntwo\"");
    assert_eq!(tokens[0].literal, Some(Value::from("one\ntwo")));
    assert_eq!(tokens[0].line, 2);
    assert_eq!(tokens[1].line, 2);
}

#[test]
fn comments_and_whitespace_are_skipped() {
    use TokenKind::*;

    assert_eq!(kinds("// nothing here\nvar\t a // trailing\r\n;"), [Var, Identifier, Semicolon, Eof]);
    assert_eq!(kinds("1 / 2 // ratio"), [Number, Slash, Number, Eof]);
}

#[test]
fn lines_are_counted() {
    let mut diagnostics = Diagnostics::default();
    let lines: Vec<_> = scan("a\n\nb // c\nd", &mut diagnostics).iter()
                                                                 .map(|token| token.line)
                                                                 .collect();

    assert_eq!(lines, [1, 3, 4, 4]);
}

#[test]
fn empty_source_is_just_eof() {
    let mut diagnostics = Diagnostics::default();
    let tokens = scan("", &mut diagnostics);

    assert_eq!(tokens, [Token::eof(1)]);
}

#[test]
fn unexpected_characters_are_reported_and_skipped() {
    let (tokens, reports) = scan_with_errors("var @ x;\n#");

    let kinds: Vec<_> = tokens.iter().map(|token| token.kind).collect();
    assert_eq!(kinds, [TokenKind::Var, TokenKind::Identifier, TokenKind::Semicolon, TokenKind::Eof]);
    assert_eq!(reports,
               ["[line 1] error : Unexpected character.", "[line 2] error : Unexpected character."]);
}

#[test]
fn unterminated_string_is_reported_on_its_last_line() {
    let (tokens, reports) = scan_with_errors("print \"never\nclosed");

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[1], Token::eof(2));
    assert_eq!(reports, ["[line 2] error : Unterminated string."]);
}
