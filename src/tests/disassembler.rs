use crate::chunk::{Chunk, OpCode};
use crate::disassembler::{disassemble_chunk, disassemble_instruction};
use crate::objects::Value;

#[test]
fn instructions_advance_by_their_operand_width() {
    let mut chunk = Chunk::new();

    // A short-form load, a long-form load (the pool is pre-filled past the
    // one-byte range), and a return.
    chunk.write_constant(Value::Number(1.0), 1).unwrap();

    for n in 0..256 {
        chunk.add_constant(Value::Number(n as f64));
    }

    chunk.write_constant(Value::Number(2.0), 1).unwrap();
    chunk.write_op_code(OpCode::Return, 2);

    let mut prev_line = 0;

    let after_short = disassemble_instruction(&chunk, 0, &mut prev_line);
    assert_eq!(after_short, 2);

    let after_long = disassemble_instruction(&chunk, after_short, &mut prev_line);
    assert_eq!(after_long, 6);

    let after_return = disassemble_instruction(&chunk, after_long, &mut prev_line);
    assert_eq!(after_return, 7);
    assert_eq!(after_return, chunk.len());
}

#[test]
fn walks_a_whole_chunk_without_panicking() {
    let mut chunk = Chunk::new();

    chunk.write_op_code(OpCode::LoadImmTrue, 1);
    chunk.write_constant(Value::Number(4.25), 1).unwrap();
    chunk.write_op_code(OpCode::Equals, 2);
    chunk.write_op_code(OpCode::Return, 2);

    disassemble_chunk(&chunk, "test chunk");
}

#[test]
fn unknown_bytes_advance_by_one() {
    let mut chunk = Chunk::new();

    chunk.write_byte(0xFF, 1);
    chunk.write_op_code(OpCode::Return, 1);

    let mut prev_line = 0;

    assert_eq!(disassemble_instruction(&chunk, 0, &mut prev_line), 1);
    assert_eq!(disassemble_instruction(&chunk, 1, &mut prev_line), 2);
}
