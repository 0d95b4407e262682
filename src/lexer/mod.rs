use crate::lexer::tokens::{Token, TokenKind};

// Submodules
mod lex_next_token;
pub mod tokens;

/// Struct that represents the scanner. Tokens are produced lazily: each call
/// to `next_token` skips whitespace and consumes exactly one token.
pub struct Lexer {
    /// A flat list of characters from the source.
    source: Vec<char>,
    /// The index of the current character.
    current: usize,
    /// The current line number.
    line_num: usize,
    /// The position in the flat source vector of the first
    /// character for the current token.
    token_start: usize,
}

impl Lexer {
    /// An initialized instance of the lexer.
    ///
    /// # Parameters
    /// - `src` - the source text
    ///
    /// ## Example
    /// ```
    /// let mut l = Lexer::new("40 + 2");
    /// ```
    pub fn new(src: &str) -> Lexer {
        Self {
            source: src.chars().collect(),
            current: 0,
            line_num: 1,
            token_start: 0,
        }
    }

    /// Gets the current character without consuming it. Returns the null
    /// character when the scanner is past the end of the source.
    pub fn get_current(&self) -> char {
        if self.is_at_end() {
            return '\0';
        }

        self.source[self.current]
    }

    /// Returns the character after the current one without consuming it.
    pub fn get_next(&self) -> char {
        if self.current + 1 >= self.source.len() {
            return '\0';
        }

        self.source[self.current + 1]
    }

    /// Checks if the scanner is at the end of the source.
    pub fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    /// Matches the current character against a provided character, consuming
    /// it on a match.
    ///
    /// # Returns
    /// - `bool`: True if the current character matched the provided
    /// character, false otherwise.
    pub fn matches(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.get_current() != expected {
            return false;
        }

        self.current += 1;
        true
    }

    /// Advances to the next char and returns the consumed char.
    pub fn advance(&mut self) -> char {
        let current = self.get_current();
        self.current += 1;
        current
    }

    /// Skips whitespace-like characters and line comments from the source.
    pub fn skip_whitespace(&mut self) {
        loop {
            if self.is_at_end() {
                break;
            }

            let c = self.get_current();

            if c == ' ' || c == '\r' || c == '\t' {
                self.advance();
            } else if c == '\n' {
                self.line_num += 1;
                self.advance();
            } else if c == '/' && self.get_next() == '/' {
                self.skip_single_line_comments();
            } else {
                break;
            }
        }
    }

    /// Skips single-line comments from the source code.
    fn skip_single_line_comments(&mut self) {
        while !self.is_at_end() && self.get_current() != '\n' {
            self.advance();
        }
    }

    /// Gets the lexeme of a token based on its span.
    ///
    /// # Parameters
    /// - `token`: The token whose lexeme should be extracted.
    ///
    /// # Returns
    /// - `String`: The token's lexeme. Error tokens yield their static
    /// message, and the EOF token yields an empty string.
    pub fn lexeme(&self, token: &Token) -> String {
        match &token.kind {
            TokenKind::ERROR(message) => String::from(*message),
            TokenKind::EOF => String::new(),
            _ => self.source[token.span.0..token.span.1].iter().collect(),
        }
    }

    /// Generates a token with the current state of the scanner.
    pub fn make_token(&self, kind: TokenKind) -> Token {
        Token {
            line_num: self.line_num,
            span: (self.token_start, self.current),
            kind,
        }
    }

    /// Generates an error token carrying the provided message.
    ///
    /// # Parameters
    /// - `message`: A static message describing the scanning error.
    ///
    /// # Returns
    /// - `Token`: The generated error token.
    pub fn make_error_token(&self, message: &'static str) -> Token {
        Token {
            line_num: self.line_num,
            span: (self.token_start, self.current),
            kind: TokenKind::ERROR(message),
        }
    }
}
