use std::mem;

// A token that represents a single unit of Lox code.
#[derive(Clone)]
pub struct Token {
    /// The token's line number
    pub line_num: usize,
    /// The token's lexeme span in the flat source vector
    pub span: (usize, usize),
    /// The token's type
    pub kind: TokenKind,
}

/// The types of tokens in a Lox program.
#[allow(non_camel_case_types, clippy::upper_case_acronyms)]
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Symbol-based tokens
    COMMA,
    DOT,
    EQUALS,
    GREATER_THAN,
    GREATER_THAN_EQ,
    LESS_THAN,
    LESS_THAN_EQ,
    LOGIC_EQ,
    LOGIC_NOT,
    LOGIC_NOT_EQ,
    L_CURLY,
    L_PAREN,
    MINUS,
    PLUS,
    R_CURLY,
    R_PARENTHESIS,
    SEMICOLON,
    SLASH,
    STAR,

    // Literal tokens
    IDENTIFIER,
    NUMBER,
    STRING,

    // Keyword tokens
    CLASS_KW,
    ELSE_KW,
    FALSE,
    FOR_KW,
    FUN_KW,
    IF_KW,
    LOGIC_AND,
    LOGIC_OR,
    NIL,
    PRINT_KW,
    RETURN_KW,
    SUPER_KW,
    THIS_KW,
    TRUE,
    VAR_KW,
    WHILE_KW,

    // Sentinel tokens. Error tokens carry a static message instead of a
    // span into the source.
    ERROR(&'static str),
    EOF,

    // This one is only used to initialize the compiler
    __INIT_COMPILER__,
}

impl TokenKind {
    /// Checks that this token kind matches another kind, ignoring any
    /// payload the variants may carry.
    ///
    /// # Parameters
    /// - `kind`: The token kind to be matched against this kind.
    pub fn type_match(&self, kind: &TokenKind) -> bool {
        mem::discriminant(self) == mem::discriminant(kind)
    }
}

/// Maps an identifier lexeme to a keyword token kind, or to `IDENTIFIER`
/// when the lexeme is no keyword. Discriminates on the first character (and
/// the second for `f*` and `t*`) before comparing the rest of the lexeme.
///
/// # Parameters
/// - `id`: The identifier's lexeme.
///
/// # Returns
/// `TokenKind`: The kind of token matched for the given identifier lexeme.
pub fn make_identifier_kind(id: &str) -> TokenKind {
    let bytes = id.as_bytes();

    match bytes[0] {
        b'a' => check_keyword(id, "and", TokenKind::LOGIC_AND),
        b'c' => check_keyword(id, "class", TokenKind::CLASS_KW),
        b'e' => check_keyword(id, "else", TokenKind::ELSE_KW),
        b'i' => check_keyword(id, "if", TokenKind::IF_KW),
        b'n' => check_keyword(id, "nil", TokenKind::NIL),
        b'o' => check_keyword(id, "or", TokenKind::LOGIC_OR),
        b'p' => check_keyword(id, "print", TokenKind::PRINT_KW),
        b'r' => check_keyword(id, "return", TokenKind::RETURN_KW),
        b's' => check_keyword(id, "super", TokenKind::SUPER_KW),
        b'v' => check_keyword(id, "var", TokenKind::VAR_KW),
        b'w' => check_keyword(id, "while", TokenKind::WHILE_KW),
        b'f' if bytes.len() > 1 => match bytes[1] {
            b'a' => check_keyword(id, "false", TokenKind::FALSE),
            b'o' => check_keyword(id, "for", TokenKind::FOR_KW),
            b'u' => check_keyword(id, "fun", TokenKind::FUN_KW),
            _ => TokenKind::IDENTIFIER,
        },
        b't' if bytes.len() > 1 => match bytes[1] {
            b'h' => check_keyword(id, "this", TokenKind::THIS_KW),
            b'r' => check_keyword(id, "true", TokenKind::TRUE),
            _ => TokenKind::IDENTIFIER,
        },
        _ => TokenKind::IDENTIFIER,
    }
}

/// Compares the full lexeme against a candidate keyword.
fn check_keyword(id: &str, keyword: &str, kind: TokenKind) -> TokenKind {
    if id == keyword {
        kind
    } else {
        TokenKind::IDENTIFIER
    }
}
