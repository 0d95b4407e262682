use crate::chunk::OpCode;
use crate::compiler::Compiler;
use crate::lexer::tokens::TokenKind;
use crate::objects::Value;
use num_derive::FromPrimitive;
use num_traits::FromPrimitive as _;

/// The order of precedence for expression parsing, from loosest
/// to tightest binding.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, FromPrimitive)]
#[repr(u8)]
pub(super) enum Precedence {
    None,
    Assignment, // =
    Or,         // or
    And,        // and
    Equality,   // == !=
    Comparison, // < > <= >=
    Term,       // + -
    Factor,     // * /
    Unary,      // ! -
    Call,       // . ()
    Primary,
}

impl Precedence {
    /// The next-tightest precedence level. Parsing the right-hand operand
    /// one level above the operator is what makes binary operators
    /// left-associative.
    fn one_higher(&self) -> Precedence {
        Precedence::from_u8(*self as u8 + 1).unwrap_or(Precedence::Primary)
    }
}

/// The prefix parsing actions of the compiler.
#[derive(Clone, Copy)]
enum PrefixRule {
    Grouping,
    Literal,
    Number,
    String,
    Unary,
}

/// The infix parsing actions of the compiler.
#[derive(Clone, Copy)]
enum InfixRule {
    Binary,
}

/// A single row of the parse-rule table: the actions a token can start or
/// continue, and the precedence at which the token binds as an infix
/// operator.
struct ParseRule {
    prefix: Option<PrefixRule>,
    infix: Option<InfixRule>,
    precedence: Precedence,
}

const fn rule(
    prefix: Option<PrefixRule>,
    infix: Option<InfixRule>,
    precedence: Precedence,
) -> ParseRule {
    ParseRule { prefix, infix, precedence }
}

/// Looks up the parse rule for a token kind.
fn rule_of(kind: &TokenKind) -> ParseRule {
    match kind {
        TokenKind::L_PAREN => rule(Some(PrefixRule::Grouping), None, Precedence::None),
        TokenKind::MINUS => rule(
            Some(PrefixRule::Unary),
            Some(InfixRule::Binary),
            Precedence::Term,
        ),
        TokenKind::PLUS => rule(None, Some(InfixRule::Binary), Precedence::Term),
        TokenKind::SLASH | TokenKind::STAR => {
            rule(None, Some(InfixRule::Binary), Precedence::Factor)
        }
        TokenKind::LOGIC_NOT => rule(Some(PrefixRule::Unary), None, Precedence::None),
        TokenKind::LOGIC_EQ | TokenKind::LOGIC_NOT_EQ => {
            rule(None, Some(InfixRule::Binary), Precedence::Equality)
        }
        TokenKind::GREATER_THAN
        | TokenKind::GREATER_THAN_EQ
        | TokenKind::LESS_THAN
        | TokenKind::LESS_THAN_EQ => rule(None, Some(InfixRule::Binary), Precedence::Comparison),
        TokenKind::NUMBER => rule(Some(PrefixRule::Number), None, Precedence::None),
        TokenKind::STRING => rule(Some(PrefixRule::String), None, Precedence::None),
        TokenKind::TRUE | TokenKind::FALSE | TokenKind::NIL => {
            rule(Some(PrefixRule::Literal), None, Precedence::None)
        }
        _ => rule(None, None, Precedence::None),
    }
}

impl<'a> Compiler<'a> {
    /// Reads an expression and emits it as bytecode.
    pub(super) fn expression(&mut self) {
        self.parse_with_precedence(Precedence::Assignment);
    }

    /// Parses every operator that binds at least as tightly as the given
    /// precedence: runs the prefix action of the token just consumed, then
    /// keeps folding infix operators while their precedence qualifies.
    ///
    /// # Arguments
    /// * `precedence` – The loosest precedence level this call may consume.
    fn parse_with_precedence(&mut self, precedence: Precedence) {
        self.advance();

        match rule_of(&self.previous.kind).prefix {
            Some(prefix_rule) => self.run_prefix_rule(prefix_rule),
            None => return self.error("Expected an expression."),
        }

        while precedence <= rule_of(&self.current.kind).precedence {
            self.advance();

            if let Some(infix_rule) = rule_of(&self.previous.kind).infix {
                self.run_infix_rule(infix_rule);
            }
        }
    }

    fn run_prefix_rule(&mut self, rule: PrefixRule) {
        match rule {
            PrefixRule::Grouping => self.grouping(),
            PrefixRule::Literal => self.literal(),
            PrefixRule::Number => self.number(),
            PrefixRule::String => self.string(),
            PrefixRule::Unary => self.unary(),
        }
    }

    fn run_infix_rule(&mut self, rule: InfixRule) {
        match rule {
            InfixRule::Binary => self.binary(),
        }
    }

    /// Reads a number literal and emits it as a constant.
    fn number(&mut self) {
        let lexeme = self.lexer.lexeme(&self.previous);

        match lexeme.parse::<f64>() {
            Ok(num) => self.emit_constant(Value::Number(num)),
            Err(_) => self.error("Invalid numeric literal."),
        }
    }

    /// Reads a string literal and emits it as a constant. The quotes around
    /// the lexeme are trimmed, and the characters in between are copied into
    /// a new string object on the heap.
    fn string(&mut self) {
        let lexeme = self.lexer.lexeme(&self.previous);
        let value = self.heap.copy_string(&lexeme[1..lexeme.len() - 1]);

        self.emit_constant(value);
    }

    /// Emits the instruction for a `true`, `false`, or `nil` literal.
    fn literal(&mut self) {
        match self.previous.kind {
            TokenKind::TRUE => self.emit_op_code(OpCode::LoadImmTrue),
            TokenKind::FALSE => self.emit_op_code(OpCode::LoadImmFalse),
            TokenKind::NIL => self.emit_op_code(OpCode::LoadImmNil),
            _ => (),
        }
    }

    /// Parses a unary expression: the operand is compiled first, then the
    /// operator's instruction is emitted.
    fn unary(&mut self) {
        let operator_kind = self.previous.kind.clone();

        self.parse_with_precedence(Precedence::Unary);

        match operator_kind {
            TokenKind::MINUS => self.emit_op_code(OpCode::Negate),
            TokenKind::LOGIC_NOT => self.emit_op_code(OpCode::LogicNot),
            _ => (),
        }
    }

    /// Parses a binary expression. The left operand has already been
    /// compiled; the right operand is parsed one precedence level above the
    /// operator, then the operator's instruction(s) are emitted. The `!=`,
    /// `>=`, and `<=` operators lower to their complement plus a negation.
    fn binary(&mut self) {
        let operator_kind = self.previous.kind.clone();
        let operator_rule = rule_of(&operator_kind);

        self.parse_with_precedence(operator_rule.precedence.one_higher());

        match operator_kind {
            TokenKind::PLUS => self.emit_op_code(OpCode::Add),
            TokenKind::MINUS => self.emit_op_code(OpCode::Subtract),
            TokenKind::STAR => self.emit_op_code(OpCode::Multiply),
            TokenKind::SLASH => self.emit_op_code(OpCode::Divide),
            TokenKind::LOGIC_EQ => self.emit_op_code(OpCode::Equals),
            TokenKind::LOGIC_NOT_EQ => self.emit_op_codes(OpCode::Equals, OpCode::LogicNot),
            TokenKind::GREATER_THAN => self.emit_op_code(OpCode::GreaterThan),
            TokenKind::GREATER_THAN_EQ => self.emit_op_codes(OpCode::LessThan, OpCode::LogicNot),
            TokenKind::LESS_THAN => self.emit_op_code(OpCode::LessThan),
            TokenKind::LESS_THAN_EQ => self.emit_op_codes(OpCode::GreaterThan, OpCode::LogicNot),
            _ => (),
        }
    }

    /// Parses a parenthesized grouping.
    fn grouping(&mut self) {
        self.expression();
        self.consume(TokenKind::R_PARENTHESIS, "Expected ')' after expression.");
    }
}
