#![allow(dead_code)]

// Using other modules
use std::env;
use std::fs;
use std::io::{self, BufRead, Write};
use std::process;

// Declaring crate-level Modules
mod chunk;
mod compiler;
mod disassembler;
mod lexer;
mod objects;
mod virtual_machine;

#[cfg(test)]
mod tests;

// Using crate-level sub-modules
use virtual_machine::InterpretResult;
use virtual_machine::VirtualMachine;

/// The main function
fn main() {
    let args: Vec<String> = env::args().collect();

    match args.len() {
        1 => repl(),
        2 => run_file(&args[1]),
        _ => {
            eprintln!("Usage: clox [path]");
            process::exit(64);
        }
    }
}

/// Runs an interactive session: reads one line at a time from standard
/// input and interprets each independently against the same machine, so
/// objects allocated by earlier lines stay alive for the whole session.
/// The session ends on EOF, or on any line that begins with `cl`.
fn repl() {
    let mut vm = VirtualMachine::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("clox >> ");
        io::stdout().flush().ok();

        match lines.next() {
            Some(Ok(line)) => {
                if line.starts_with("cl") {
                    break;
                }

                vm.interpret(&line);
            }
            _ => {
                println!();
                break;
            }
        }
    }
}

/// Reads the given file in full and interprets it once.
///
/// ## Arguments
/// * `path` – The path of the file to interpret.
fn run_file(path: &str) {
    let source = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(error) => {
            eprintln!("Unable to open file '{}': {}.", path, error);
            process::exit(74);
        }
    };

    // Creates a virtual machine for the given source contents
    let mut vm = VirtualMachine::new();

    // Exit the interpreter with the appropriate code
    match vm.interpret(&source) {
        InterpretResult::CompileError => process::exit(65),
        InterpretResult::RuntimeError => process::exit(70),
        InterpretResult::Ok => (),
    }
}
