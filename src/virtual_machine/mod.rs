use crate::chunk::{Chunk, OpCode};
use crate::compiler::Compiler;
use crate::objects::{Heap, Value};

// Submodules
mod arithmetic;
mod run;

/// The maximum number of values that fit on the value stack.
pub const STACK_MAX: usize = 256;

/// The types of results the interpreter can return.
#[derive(Debug, PartialEq, Eq)]
pub enum InterpretResult {
    CompileError,
    Ok,
    RuntimeError,
}

/// The intermediate result of executing a single instruction.
pub(crate) enum RuntimeResult {
    /// Keep dispatching instructions.
    Continue,
    /// A return instruction ended the program normally.
    End,
    /// A runtime error aborted the program.
    Error { message: String },
}

/// Represents the virtual machine: the value stack, the instruction
/// pointer into the chunk currently being executed, and the registry of
/// every heap object allocated so far.
pub struct VirtualMachine {
    stack: Vec<Value>,
    ip: usize,
    heap: Heap,
}

impl Default for VirtualMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl VirtualMachine {
    /// Creates a new virtual machine with an empty stack and heap.
    pub fn new() -> Self {
        Self {
            stack: Vec::with_capacity(STACK_MAX),
            ip: 0,
            heap: Heap::default(),
        }
    }

    /// Interprets a source string: compiles it into a fresh chunk, then
    /// executes the chunk to completion. The chunk only lives for the
    /// duration of this call; objects allocated while compiling or running
    /// stay registered in the heap until the machine is dropped.
    ///
    /// ## Arguments
    /// * `source` – The source text to interpret.
    ///
    /// ## Returns
    /// * `InterpretResult` – The result of the source interpretation.
    pub fn interpret(&mut self, source: &str) -> InterpretResult {
        let mut chunk = Chunk::new();

        if !Compiler::compile(source, &mut chunk, &mut self.heap) {
            return InterpretResult::CompileError;
        }

        self.ip = 0;

        match self.run(&chunk) {
            RuntimeResult::Error { message } => {
                self.report_runtime_error(&chunk, &message);
                InterpretResult::RuntimeError
            }
            _ => InterpretResult::Ok,
        }
    }

    /// The number of values currently on the stack.
    pub fn stack_size(&self) -> usize {
        self.stack.len()
    }

    /// The object registry of this machine.
    pub fn heap(&self) -> &Heap {
        &self.heap
    }

    /// Prints a runtime error to the console, along with the source line of
    /// the instruction that failed, and resets the stack.
    fn report_runtime_error(&mut self, chunk: &Chunk, message: &str) {
        eprintln!("{}", message);
        eprintln!("[line {}] in script", chunk.line_for_offset(self.ip - 1));

        self.reset_stack();
    }

    fn reset_stack(&mut self) {
        self.stack.clear();
    }

    pub(super) fn push_stack(&mut self, new_val: Value) {
        debug_assert!(self.stack.len() < STACK_MAX, "Value stack overflow.");
        self.stack.push(new_val)
    }

    pub(super) fn pop_stack(&mut self) -> Value {
        match self.stack.pop() {
            Some(val) => val,
            None => panic!("Stack is empty!"),
        }
    }

    /// Returns the value `distance` slots below the top of the stack
    /// without modifying the stack.
    pub(super) fn peek_stack(&self, distance: usize) -> &Value {
        &self.stack[self.stack.len() - 1 - distance]
    }

    /// Reads the instruction at the instruction pointer, if the byte there
    /// encodes one, and advances the pointer past it.
    fn get_next_op_code(&mut self, chunk: &Chunk) -> Option<OpCode> {
        let code = chunk.get_op_code(self.ip);
        self.ip += 1;
        code
    }

    /// Reads the one-byte operand at the instruction pointer and advances
    /// the pointer past it.
    fn get_next_byte(&mut self, chunk: &Chunk) -> Option<u8> {
        let byte = chunk.get_byte(self.ip);
        self.ip += 1;
        byte
    }

    /// Reads the three-byte operand at the instruction pointer and advances
    /// the pointer past it.
    fn get_next_long(&mut self, chunk: &Chunk) -> Option<u32> {
        let idx = chunk.get_long(self.ip);
        self.ip += 3;
        idx
    }

    /// Prints the execution trace for the program. Useful for debugging the VM.
    ///
    /// ## Arguments
    /// * `instr` – The current OpCode to be executed.
    #[cfg(feature = "trace_execution")]
    fn print_execution(&self, instr: &OpCode) {
        // Prints the current state of the values stack
        print!("stack\t[");
        for val in self.stack.iter() {
            print!(" {};", val);
        }
        println!(" ]");

        // Prints the instruction to be executed next
        println!("IP: {:>04}\tOpCode: {:?}", self.ip - 1, instr);
    }
}
