use crate::lexer::tokens::{make_identifier_kind, Token, TokenKind::*};
use crate::lexer::Lexer;

impl Lexer {
    /// Scans the next token in the source.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        // Reset the start of the token
        self.token_start = self.current;

        // If we are at the end, return the EOF token.
        if self.is_at_end() {
            return self.make_token(EOF);
        }

        let c = self.advance();

        // Generates a numeric literal if the current character is a digit
        if c.is_ascii_digit() {
            return self.make_numeric_token();
        }

        // Generates an identifier/keyword if the current character is alphabetic
        if c.is_ascii_alphabetic() || c == '_' {
            return self.make_identifier_token();
        }

        // Generate symbol-like tokens
        return match c {
            '"' => self.make_string_token(),
            '(' => self.make_token(L_PAREN),
            ')' => self.make_token(R_PARENTHESIS),
            '{' => self.make_token(L_CURLY),
            '}' => self.make_token(R_CURLY),
            ';' => self.make_token(SEMICOLON),
            ',' => self.make_token(COMMA),
            '.' => self.make_token(DOT),
            '-' => self.make_token(MINUS),
            '+' => self.make_token(PLUS),
            '/' => self.make_token(SLASH),
            '*' => self.make_token(STAR),
            '!' => {
                let tok = if self.matches('=') { LOGIC_NOT_EQ } else { LOGIC_NOT };
                self.make_token(tok)
            }
            '=' => {
                let tok = if self.matches('=') { LOGIC_EQ } else { EQUALS };
                self.make_token(tok)
            }
            '<' => {
                let tok = if self.matches('=') { LESS_THAN_EQ } else { LESS_THAN };
                self.make_token(tok)
            }
            '>' => {
                let tok = if self.matches('=') {
                    GREATER_THAN_EQ
                } else {
                    GREATER_THAN
                };
                self.make_token(tok)
            }

            // Everything else is an error token
            _ => self.make_error_token("Unexpected character."),
        };
    }

    /// Makes a numeric literal token: a run of digits, optionally followed
    /// by a period and at least one more digit.
    fn make_numeric_token(&mut self) -> Token {
        while self.get_current().is_ascii_digit() {
            self.advance();
        }

        // Only consume the period when a fractional part follows it.
        if self.get_current() == '.' && self.get_next().is_ascii_digit() {
            self.advance();

            while self.get_current().is_ascii_digit() {
                self.advance();
            }
        }

        self.make_token(NUMBER)
    }

    /// Makes a string literal token. The token's span includes the
    /// surrounding quotes; consumers trim them.
    fn make_string_token(&mut self) -> Token {
        while !self.is_at_end() && self.get_current() != '"' {
            // Take into account new lines inside the string
            if self.get_current() == '\n' {
                self.line_num += 1;
            }

            self.advance();
        }

        if self.is_at_end() {
            return self.make_error_token("Unterminated string.");
        }

        // The closing quote
        self.advance();
        self.make_token(STRING)
    }

    /// Makes an identifier or keyword token.
    fn make_identifier_token(&mut self) -> Token {
        while !self.is_at_end() {
            let c = self.get_current();

            if c.is_ascii_alphanumeric() || c == '_' {
                self.advance();
            } else {
                break;
            }
        }

        let id: String = self.source[self.token_start..self.current].iter().collect();
        self.make_token(make_identifier_kind(id.as_str()))
    }
}
