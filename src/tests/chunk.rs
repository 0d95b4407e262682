use crate::chunk::{decode_index, encode_index, Chunk, OpCode};
use crate::objects::Value;

#[test]
fn a_new_chunk_is_empty() {
    let chunk = Chunk::new();

    assert!(chunk.is_empty());
    assert_eq!(chunk.len(), 0);
    assert_eq!(chunk.pool_size(), 0);
    assert!(chunk.lines().is_empty());
}

#[test]
fn line_map_runs_cover_every_byte() {
    let mut chunk = Chunk::new();

    chunk.write_op_code(OpCode::LoadImmNil, 1);
    chunk.write_op_code(OpCode::LogicNot, 1);
    chunk.write_op_code(OpCode::Negate, 2);
    chunk.write_op_code(OpCode::Return, 4);

    let covered: usize = chunk.lines().iter().map(|run| run.0).sum();

    assert_eq!(covered, chunk.len());
    assert_eq!(chunk.lines(), &[(2, 1), (1, 2), (1, 4)]);
}

#[test]
fn line_for_offset_returns_the_line_each_byte_was_written_with() {
    let mut chunk = Chunk::new();
    let lines = [7, 7, 7, 9, 10, 10, 12];

    for (byte, line) in lines.iter().enumerate() {
        chunk.write_byte(byte as u8, *line);
    }

    for (offset, line) in lines.iter().enumerate() {
        assert_eq!(chunk.line_for_offset(offset), *line);
    }
}

#[test]
fn index_encoding_round_trips() {
    for idx in [0u32, 1, 2, 255, 256, 257, 65_535, 65_536, 0x00AB_CDEF, (1 << 24) - 1] {
        assert_eq!(decode_index(encode_index(idx)), idx);
    }
}

#[test]
fn index_bytes_are_little_endian() {
    assert_eq!(encode_index(0x0001_0203), [0x03, 0x02, 0x01]);
    assert_eq!(decode_index([0x03, 0x02, 0x01]), 0x0001_0203);
}

#[test]
fn write_constant_uses_the_short_form_for_small_pools() {
    let mut chunk = Chunk::new();

    let idx = chunk.write_constant(Value::Number(42.0), 1);

    assert_eq!(idx, Ok(0));
    assert_eq!(chunk.get_op_code(0), Some(OpCode::LoadConstant));
    assert_eq!(chunk.get_byte(1), Some(0));
    assert_eq!(chunk.len(), 2);
}

#[test]
fn write_constant_switches_to_the_long_form_past_255() {
    let mut chunk = Chunk::new();

    for n in 0..=255 {
        chunk.add_constant(Value::Number(n as f64));
    }

    let idx = chunk.write_constant(Value::Number(9.0), 3);

    assert_eq!(idx, Ok(256));
    assert_eq!(chunk.get_op_code(0), Some(OpCode::LoadConstantLong));
    assert_eq!(chunk.get_long(1), Some(256));
    assert_eq!(chunk.len(), 4);
}

#[test]
fn identical_constants_occupy_distinct_slots() {
    let mut chunk = Chunk::new();

    chunk.add_constant(Value::Number(8.9));
    chunk.add_constant(Value::Number(8.9));

    assert_eq!(chunk.pool_size(), 2);
}

#[test]
fn bytes_that_are_no_instruction_decode_to_none() {
    let mut chunk = Chunk::new();

    chunk.write_byte(0xFF, 1);

    assert_eq!(chunk.get_op_code(0), None);
    assert_eq!(chunk.get_byte(0), Some(0xFF));
}
