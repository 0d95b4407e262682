use crate::chunk::{Chunk, OpCode};

/// Disassembles the chunk, printing each instruction and
/// its related information.
///
/// ## Arguments
/// * `chunk` – The chunk to disassemble.
/// * `name` – The name to print for the chunk.
pub fn disassemble_chunk(chunk: &Chunk, name: &str) {
    println!("==== {} ====", name);

    let mut prev_line = 0;
    let mut offset = 0;

    while offset < chunk.len() {
        offset = disassemble_instruction(chunk, offset, &mut prev_line);
    }

    println!();
}

/// Disassembles the single instruction at the given offset.
///
/// ## Arguments
/// * `chunk` – The chunk being disassembled.
/// * `offset` – The offset of the instruction.
/// * `prev_line` – The line of the previous instruction, replaced with this
/// instruction's line once it is printed.
///
/// ## Returns
/// * `usize` – The offset of the next instruction.
pub fn disassemble_instruction(chunk: &Chunk, offset: usize, prev_line: &mut usize) -> usize {
    print!("{:>04} ", offset);

    // Prints a line number, or a vertical bar when the instruction is on
    // the same line as the previous one.
    let line = chunk.line_for_offset(offset);

    if line == *prev_line {
        print!("   |\t");
    } else {
        print!("{:>4}\t", line);
        *prev_line = line;
    }

    match chunk.get_op_code(offset) {
        Some(OpCode::LoadConstant) => constant_instruction(chunk, offset),
        Some(OpCode::LoadConstantLong) => constant_long_instruction(chunk, offset),
        Some(instr) => {
            println!("{:?}", instr);
            offset + 1
        }
        None => {
            if let Some(byte) = chunk.get_byte(offset) {
                println!("Unknown opcode: {}", byte);
            }

            offset + 1
        }
    }
}

/// Prints a short-form constant load with its one-byte pool index and the
/// value it references.
fn constant_instruction(chunk: &Chunk, offset: usize) -> usize {
    match chunk.get_byte(offset + 1) {
        Some(pos) => print_constant("LoadConstant", chunk, pos as usize),
        None => println!("LoadConstant ???"),
    }

    offset + 2
}

/// Prints a long-form constant load with its decoded 24-bit pool index and
/// the value it references.
fn constant_long_instruction(chunk: &Chunk, offset: usize) -> usize {
    match chunk.get_long(offset + 1) {
        Some(pos) => print_constant("LoadConstantLong", chunk, pos as usize),
        None => println!("LoadConstantLong ???"),
    }

    offset + 4
}

fn print_constant(name: &str, chunk: &Chunk, pos: usize) {
    match chunk.get_constant(pos) {
        Some(val) => println!("{:<16} idx: {} ---> {}", name, pos, val),
        None => println!("{:<16} idx: {} ---> ???", name, pos),
    }
}
