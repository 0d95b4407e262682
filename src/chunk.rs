use crate::objects::Value;
use num_derive::FromPrimitive;
use num_traits::FromPrimitive as _;

/// The maximum number of constants a single chunk can hold. Indexes into the
/// pool must fit the 24-bit operand of the long-form load instruction.
pub const MAX_CONSTANTS: usize = 1 << 24;

/// The set of instructions supported by the virtual machine.
///
/// **NOTE:** Changing the order in which members are declared creates
/// incompatibilities between different versions of the interpreter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive)]
#[repr(u8)]
pub enum OpCode {
    // Instructions with zero chunk operands.
    // While these instructions do not have any
    // bytecode operands, some of them do have
    // value operands from the stack.
    Add,
    Divide,
    Equals,
    GreaterThan,
    LessThan,
    LoadImmFalse,
    LoadImmNil,
    LoadImmTrue,
    LogicNot,
    Multiply,
    Negate,
    Return,
    Subtract,

    // Instructions with one chunk operand.
    // These instructions use the next byte
    // from the chunk as its operand.
    LoadConstant,

    // Instructions with three chunk operands.
    // These instructions use the next three bytes
    // (a 24-bit little-endian index) as their operand.
    LoadConstantLong,
}

/// Splits a constant-pool index into its three little-endian bytes.
///
/// ## Arguments
/// * `idx` – The index to encode. Must be less than 2^24.
///
/// ## Returns
/// * `[u8; 3]` – The low, middle, and high bytes of the index, in that order.
pub fn encode_index(idx: u32) -> [u8; 3] {
    let bytes = idx.to_le_bytes();
    [bytes[0], bytes[1], bytes[2]]
}

/// Reconstructs a constant-pool index from its three little-endian bytes.
///
/// ## Arguments
/// * `bytes` – The low, middle, and high bytes of the index, in that order.
///
/// ## Returns
/// * `u32` – The decoded index.
pub fn decode_index(bytes: [u8; 3]) -> u32 {
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], 0])
}

/// Contains all the necessary information about
/// the instructions to be executed.
#[derive(Default, Debug)]
pub struct Chunk {
    instructions: Vec<u8>,
    constants: Vec<Value>,
    // Source line for each instruction byte, stored as
    // (run length, line number) pairs.
    lines: Vec<(usize, usize)>,
}

impl Chunk {
    /// Creates a new chunk.
    ///
    /// ## Returns
    /// `Chunk` – a new, empty chunk.
    pub fn new() -> Self {
        Self {
            instructions: Vec::new(),
            constants: Vec::new(),
            lines: Vec::new(),
        }
    }

    /// Gets the length of the instructions list.
    ///
    /// ## Returns
    /// * `usize` – The length of the instructions list.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Checks whether or not the instructions list is empty.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Appends a raw byte to the instructions list, tagging it with the
    /// source line it came from. The line map either extends its last run
    /// (when the line matches) or starts a new `(1, line)` pair.
    ///
    /// ## Arguments
    /// * `byte` – The byte to add to the instructions list.
    /// * `line` – The source line the byte is associated with.
    pub fn write_byte(&mut self, byte: u8, line: usize) {
        self.instructions.push(byte);

        match self.lines.last_mut() {
            Some(run) if run.1 == line => run.0 += 1,
            _ => self.lines.push((1, line)),
        }
    }

    /// Appends a ByteCode instruction from a given OpCode into the
    /// instructions list.
    ///
    /// ## Arguments
    /// * `instr` – The OpCode instruction to add to the list.
    /// * `line` – The source line the instruction is associated with.
    pub fn write_op_code(&mut self, instr: OpCode, line: usize) {
        self.write_byte(instr as u8, line);
    }

    /// Adds a constant to this chunk's constants pool.
    /// Identical constants may occupy distinct slots.
    ///
    /// ## Arguments
    /// * `value` – The value to be added to the pool.
    ///
    /// ## Returns
    /// * `usize` – The zero-based position of the value in the pool.
    pub fn add_constant(&mut self, value: Value) -> usize {
        self.constants.push(value);
        self.constants.len() - 1
    }

    /// Adds a constant to the pool and emits the instruction that loads it:
    /// the short form with a one-byte operand for indexes up to 255, and the
    /// long form with a three-byte little-endian operand above that.
    ///
    /// ## Arguments
    /// * `value` – The value to be added to the pool.
    /// * `line` – The source line the load is associated with.
    ///
    /// ## Returns
    /// * `Result<usize, ()>` – The position of the value in the pool, or an
    /// error if the pool is already at its maximum size.
    pub fn write_constant(&mut self, value: Value, line: usize) -> Result<usize, ()> {
        if self.constants.len() >= MAX_CONSTANTS {
            return Err(());
        }

        let idx = self.add_constant(value);

        if idx <= u8::MAX as usize {
            self.write_op_code(OpCode::LoadConstant, line);
            self.write_byte(idx as u8, line);
        } else {
            self.write_op_code(OpCode::LoadConstantLong, line);

            for byte in encode_index(idx as u32) {
                self.write_byte(byte, line);
            }
        }

        Ok(idx)
    }

    /// Retrieves a constant from this chunk's constants pool.
    ///
    /// ## Arguments
    /// * `idx` – The index of the constant.
    ///
    /// ## Returns
    /// `Option<&Value>` – The value at the given index in the constant pool.
    pub fn get_constant(&self, idx: usize) -> Option<&Value> {
        self.constants.get(idx)
    }

    /// Gets the number of constants in the pool.
    pub fn pool_size(&self) -> usize {
        self.constants.len()
    }

    /// Returns the OpCode associated with a byte instruction in the
    /// instructions list.
    ///
    /// ## Arguments
    /// * `idx` – The index of the instruction in the instructions list.
    ///
    /// ## Returns
    /// `Option<OpCode>` – The OpCode instruction at the given index, or
    /// `None` if the byte does not encode an instruction.
    pub fn get_op_code(&self, idx: usize) -> Option<OpCode> {
        self.instructions.get(idx).and_then(|byte| OpCode::from_u8(*byte))
    }

    /// Retrieves a raw byte from the instructions list.
    ///
    /// ## Arguments
    /// * `idx` – The index of the byte in the instructions list.
    ///
    /// ## Returns
    /// `Option<u8>` – The byte at the given index.
    pub fn get_byte(&self, idx: usize) -> Option<u8> {
        self.instructions.get(idx).copied()
    }

    /// Retrieves the three bytes starting at the given index and decodes
    /// them into a 24-bit constant-pool index.
    ///
    /// ## Arguments
    /// * `idx` – The index of the first operand byte.
    ///
    /// ## Returns
    /// `Option<u32>` – The decoded index.
    pub fn get_long(&self, idx: usize) -> Option<u32> {
        let b1 = self.instructions.get(idx)?;
        let b2 = self.instructions.get(idx + 1)?;
        let b3 = self.instructions.get(idx + 2)?;

        Some(decode_index([*b1, *b2, *b3]))
    }

    /// Finds the source line associated with the byte at the given offset by
    /// walking the run-length pairs until the accumulated run length covers
    /// the offset.
    ///
    /// ## Arguments
    /// * `offset` – The offset of the byte in the instructions list.
    ///
    /// ## Returns
    /// * `usize` – The source line for that byte, or 0 when the offset is
    /// past the end of the chunk.
    pub fn line_for_offset(&self, offset: usize) -> usize {
        let mut covered = 0;

        for (run_length, line) in self.lines.iter() {
            covered += run_length;

            if covered > offset {
                return *line;
            }
        }

        0
    }

    /// The run-length pairs of the line map.
    pub fn lines(&self) -> &[(usize, usize)] {
        &self.lines
    }
}
