use crate::chunk::{Chunk, OpCode};
use crate::lexer::tokens::{Token, TokenKind};
use crate::lexer::Lexer;
use crate::objects::{Heap, Value};

// Submodules
mod expressions;

/// Represents the compiler and its internal state. The compiler is a
/// single-pass Pratt parser: parsing an expression emits its bytecode
/// directly into the chunk being written, with no intermediate tree.
pub struct Compiler<'a> {
    lexer: Lexer,
    /// The previous token
    previous: Token,
    /// The current token being parsed
    current: Token,
    /// Whether or not the compiler found an error
    had_error: bool,
    /// Whether or not the compiler is in a "panic" state
    is_in_panic: bool,
    /// The chunk being written to
    chunk: &'a mut Chunk,
    /// The heap that registers string constants
    heap: &'a mut Heap,
}

impl<'a> Compiler<'a> {
    /// Compiles a single expression from the source string into the given
    /// chunk, ending with a return instruction.
    ///
    /// ## Arguments
    /// * `source` – The source text to compile.
    /// * `chunk` – The chunk the bytecode is written into.
    /// * `heap` – The heap that registers objects created at compile time.
    ///
    /// ## Returns
    /// * `bool` – True if the source had no compile-time errors.
    pub fn compile(source: &str, chunk: &'a mut Chunk, heap: &'a mut Heap) -> bool {
        let initial_token = Token {
            line_num: 0,
            span: (0, 0),
            kind: TokenKind::__INIT_COMPILER__,
        };

        let mut compiler = Compiler {
            lexer: Lexer::new(source),
            previous: initial_token.clone(),
            current: initial_token,
            had_error: false,
            is_in_panic: false,
            chunk,
            heap,
        };

        // Prime the current token, then lower exactly one expression.
        compiler.advance();
        compiler.expression();
        compiler.consume(TokenKind::EOF, "Expected end of expression");

        compiler.emit_op_code(OpCode::Return);

        #[cfg(feature = "show_bytecode")]
        {
            if !compiler.had_error {
                crate::disassembler::disassemble_chunk(compiler.chunk, "<script>");
            }
        }

        !compiler.had_error
    }

    /// "Advances" the compiler by consuming another token. Error tokens are
    /// reported as they appear and never become the current token.
    fn advance(&mut self) {
        self.previous = self.current.clone();

        loop {
            self.current = self.lexer.next_token();

            match self.current.kind {
                TokenKind::ERROR(message) => self.error_at_current(message),
                _ => break,
            }
        }
    }

    /// Checks that the current token is of the given kind, reporting the
    /// provided message if it is not. The token is consumed either way.
    ///
    /// ## Arguments
    /// * `kind` – The token kind to match against.
    /// * `message` – The error to report if the current token does not match.
    fn consume(&mut self, kind: TokenKind, message: &str) {
        if !self.current.kind.type_match(&kind) {
            self.error_at_current(message);
        }

        self.advance()
    }

    /// Emits a byte instruction from an OpCode into the chunk's instruction
    /// list, tagged with the line of the previous token.
    ///
    /// ## Arguments
    /// * `instr` – The OpCode instruction to add to the chunk.
    pub(super) fn emit_op_code(&mut self, instr: OpCode) {
        self.chunk.write_op_code(instr, self.previous.line_num);
    }

    /// Emits two byte instructions in sequence. Used for the operators that
    /// lower to a comparison followed by a logic negation.
    pub(super) fn emit_op_codes(&mut self, first: OpCode, second: OpCode) {
        self.emit_op_code(first);
        self.emit_op_code(second);
    }

    /// Adds a value to the constant pool and emits the instruction that
    /// loads it.
    ///
    /// ## Arguments
    /// * `value` – The value to add to the pool.
    pub(super) fn emit_constant(&mut self, value: Value) {
        let line = self.previous.line_num;

        if self.chunk.write_constant(value, line).is_err() {
            self.error("Too many constants in one chunk.");
        }
    }

    /// Reports an error at the previous token.
    pub(super) fn error(&mut self, message: &str) {
        let token = self.previous.clone();
        self.error_at(token, message);
    }

    /// Reports an error at the current token.
    pub(super) fn error_at_current(&mut self, message: &str) {
        let token = self.current.clone();
        self.error_at(token, message);
    }

    /// Emits a compile error from the given token. While the compiler is in
    /// panic mode, subsequent reports are suppressed.
    ///
    /// ## Arguments
    /// * `tok` – The token that caused the error.
    /// * `message` – The error message to display.
    fn error_at(&mut self, tok: Token, message: &str) {
        if self.is_in_panic {
            return;
        }

        self.is_in_panic = true;

        eprint!("[line {}] Error at ", tok.line_num);

        match tok.kind {
            TokenKind::EOF => eprint!("end"),
            // Error tokens already carry their own message.
            TokenKind::ERROR(_) => {}
            _ => eprint!("'{}'", self.lexer.lexeme(&tok)),
        }

        eprintln!(": {}", message);
        self.had_error = true;
    }
}
