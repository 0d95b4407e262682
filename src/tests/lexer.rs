use crate::lexer::tokens::TokenKind::{self, *};
use crate::lexer::Lexer;

/// Drains the lexer over the given source and collects every token kind,
/// including the final EOF.
fn kinds_of(src: &str) -> Vec<TokenKind> {
    let mut lexer = Lexer::new(src);
    let mut kinds = vec![];

    loop {
        let token = lexer.next_token();
        let done = token.kind == EOF;
        kinds.push(token.kind);

        if done {
            break;
        }
    }

    kinds
}

#[test]
fn lexes_an_arithmetic_expression() {
    assert_eq!(
        kinds_of("-(1 + 2) * 3;"),
        vec![MINUS, L_PAREN, NUMBER, PLUS, NUMBER, R_PARENTHESIS, STAR, NUMBER, SEMICOLON, EOF]
    );
}

#[test]
fn lexes_one_and_two_character_operators() {
    assert_eq!(
        kinds_of("! != = == > >= < <="),
        vec![
            LOGIC_NOT,
            LOGIC_NOT_EQ,
            EQUALS,
            LOGIC_EQ,
            GREATER_THAN,
            GREATER_THAN_EQ,
            LESS_THAN,
            LESS_THAN_EQ,
            EOF
        ]
    );
}

#[test]
fn lexes_the_remaining_punctuation() {
    assert_eq!(
        kinds_of("{ } , . /"),
        vec![L_CURLY, R_CURLY, COMMA, DOT, SLASH, EOF]
    );
}

#[test]
fn lexes_every_keyword() {
    assert_eq!(
        kinds_of("and class else false for fun if nil or print return super this true var while"),
        vec![
            LOGIC_AND, CLASS_KW, ELSE_KW, FALSE, FOR_KW, FUN_KW, IF_KW, NIL, LOGIC_OR, PRINT_KW,
            RETURN_KW, SUPER_KW, THIS_KW, TRUE, VAR_KW, WHILE_KW, EOF
        ]
    );
}

#[test]
fn near_keywords_are_identifiers() {
    assert_eq!(
        kinds_of("fund classy truthy _tmp nil0"),
        vec![IDENTIFIER, IDENTIFIER, IDENTIFIER, IDENTIFIER, IDENTIFIER, EOF]
    );
}

#[test]
fn a_trailing_period_is_not_part_of_a_number() {
    let mut lexer = Lexer::new("12 3.25 1.");

    let first = lexer.next_token();
    assert_eq!(first.kind, NUMBER);
    assert_eq!(lexer.lexeme(&first), "12");

    let second = lexer.next_token();
    assert_eq!(second.kind, NUMBER);
    assert_eq!(lexer.lexeme(&second), "3.25");

    let third = lexer.next_token();
    assert_eq!(third.kind, NUMBER);
    assert_eq!(lexer.lexeme(&third), "1");

    assert_eq!(lexer.next_token().kind, DOT);
    assert_eq!(lexer.next_token().kind, EOF);
}

#[test]
fn string_spans_include_the_quotes() {
    let mut lexer = Lexer::new("\"foo\"");
    let token = lexer.next_token();

    assert_eq!(token.kind, STRING);
    assert_eq!(lexer.lexeme(&token), "\"foo\"");
}

#[test]
fn newlines_inside_strings_update_the_line_counter() {
    let mut lexer = Lexer::new("\"a\nb\" 1");

    let string = lexer.next_token();
    assert_eq!(string.kind, STRING);

    let number = lexer.next_token();
    assert_eq!(number.kind, NUMBER);
    assert_eq!(number.line_num, 2);
}

#[test]
fn line_comments_extend_to_the_end_of_the_line() {
    let mut lexer = Lexer::new("1 // the rest is ignored ;;;\n2");

    let first = lexer.next_token();
    assert_eq!(first.kind, NUMBER);
    assert_eq!(first.line_num, 1);

    let second = lexer.next_token();
    assert_eq!(second.kind, NUMBER);
    assert_eq!(second.line_num, 2);

    assert_eq!(lexer.next_token().kind, EOF);
}

#[test]
fn an_unterminated_string_yields_an_error_token() {
    let mut lexer = Lexer::new("\"runs off the end");

    assert_eq!(lexer.next_token().kind, ERROR("Unterminated string."));
}

#[test]
fn an_unexpected_character_yields_an_error_token() {
    let mut lexer = Lexer::new("1 @ 2");

    assert_eq!(lexer.next_token().kind, NUMBER);
    assert_eq!(lexer.next_token().kind, ERROR("Unexpected character."));
    assert_eq!(lexer.next_token().kind, NUMBER);
}

#[test]
fn the_lexer_keeps_returning_eof_once_drained() {
    let mut lexer = Lexer::new("");

    assert_eq!(lexer.next_token().kind, EOF);
    assert_eq!(lexer.next_token().kind, EOF);
}
