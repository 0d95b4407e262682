use crate::chunk::{Chunk, OpCode};
use crate::objects::Value;
use crate::virtual_machine::{RuntimeResult, VirtualMachine};

impl VirtualMachine {
    /// Executes the instructions in a chunk until a return instruction, a
    /// runtime error, or a byte that does not decode to any instruction.
    pub(crate) fn run(&mut self, chunk: &Chunk) -> RuntimeResult {
        loop {
            let instruction = match self.get_next_op_code(chunk) {
                Some(instr) => instr,
                None => return self.unknown_op_code(chunk),
            };

            #[cfg(feature = "trace_execution")]
            self.print_execution(&instruction);

            let exec = match instruction {
                // Constant loaders
                OpCode::LoadConstant => self.op_load_constant(chunk, false),
                OpCode::LoadConstantLong => self.op_load_constant(chunk, true),

                // Immediate loaders
                OpCode::LoadImmFalse => {
                    self.push_stack(Value::Bool(false));
                    RuntimeResult::Continue
                }
                OpCode::LoadImmNil => {
                    self.push_stack(Value::Nil);
                    RuntimeResult::Continue
                }
                OpCode::LoadImmTrue => {
                    self.push_stack(Value::Bool(true));
                    RuntimeResult::Continue
                }

                // Operators
                OpCode::Add => self.perform_addition(),
                OpCode::Divide => self.perform_division(),
                OpCode::Equals => self.op_equals(),
                OpCode::GreaterThan => self.perform_greater_than(),
                OpCode::LessThan => self.perform_less_than(),
                OpCode::LogicNot => self.op_logic_not(),
                OpCode::Multiply => self.perform_multiplication(),
                OpCode::Negate => self.perform_negation(),
                OpCode::Subtract => self.perform_subtraction(),

                // VM-specific
                OpCode::Return => self.op_return(),
            };

            match exec {
                RuntimeResult::Continue => continue,
                _ => return exec,
            }
        }
    }

    /// Builds the error for a byte that does not decode to an instruction,
    /// or for running off the end of the chunk.
    fn unknown_op_code(&self, chunk: &Chunk) -> RuntimeResult {
        let message = match chunk.get_byte(self.ip - 1) {
            Some(byte) => format!("Unknown opcode: {}", byte),
            None => String::from("Reached the end of the chunk without a return."),
        };

        RuntimeResult::Error { message }
    }

    /// Executes the instruction to load a constant onto the stack. The
    /// operand is either the next byte, or the next three bytes decoded as a
    /// 24-bit little-endian index for the long form of the instruction.
    fn op_load_constant(&mut self, chunk: &Chunk, is_long: bool) -> RuntimeResult {
        let pos = if is_long {
            self.get_next_long(chunk).map(|idx| idx as usize)
        } else {
            self.get_next_byte(chunk).map(|byte| byte as usize)
        };

        let constant = pos.and_then(|pos| chunk.get_constant(pos));

        match constant {
            Some(val) => {
                let val = val.clone();
                self.push_stack(val);
                RuntimeResult::Continue
            }
            None => RuntimeResult::Error {
                message: String::from("Malformed constant-load instruction."),
            },
        }
    }

    /// Executes the instruction to pop the top of the stack and push whether
    /// the popped value was falsey.
    fn op_logic_not(&mut self) -> RuntimeResult {
        let val = self.pop_stack();
        self.push_stack(Value::Bool(val.is_falsey()));

        RuntimeResult::Continue
    }

    /// Executes the instruction to pop the two values on top of the stack
    /// and push whether they are structurally equal.
    fn op_equals(&mut self) -> RuntimeResult {
        let val2 = self.pop_stack();
        let val1 = self.pop_stack();
        self.push_stack(Value::Bool(val1 == val2));

        RuntimeResult::Continue
    }

    /// Executes the instruction to end the program: the result value is
    /// popped off the stack and printed, followed by a newline.
    fn op_return(&mut self) -> RuntimeResult {
        let val = self.pop_stack();
        println!("{}", val);

        RuntimeResult::End
    }
}
