use lazy_static::lazy_static;
use libe20isa::Word;
use regex::Regex;
use thiserror::Error;

#[cfg(test)]
mod tests;

lazy_static! {
    /// One program line: `ram[<decimal address>] = 16'b<16 binary digits>;`,
    /// with anything after the semicolon ignored.
    static ref LINE_RE: Regex = Regex::new(r"^ram\[(\d+)\] = 16'b([01]{16});.*$").unwrap();
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("Can't parse line: {0}")]
    MalformedLine(String),

    #[error("Memory addresses encountered out of sequence: {0}")]
    AddressOutOfSequence(usize),

    #[error("Program too big for memory")]
    ProgramTooBig,
}

/// Parses a machine code listing into the words of the memory image it
/// covers. Every line must declare an address, starting at 0 and increasing
/// by one per line; the cells after the program are the emulator's to
/// zero fill.
pub fn load_machine_code(source: &str) -> Result<Vec<Word>, LoadError> {
    let mut program = Vec::new();

    for line in source.lines() {
        let captures = LINE_RE
            .captures(line)
            .ok_or_else(|| LoadError::MalformedLine(line.to_string()))?;

        let addr: usize = captures[1]
            .parse()
            .map_err(|_| LoadError::MalformedLine(line.to_string()))?;
        let word = Word::from_str_radix(&captures[2], 2)
            .expect("the line pattern only admits 16 binary digits");

        if addr != program.len() {
            return Err(LoadError::AddressOutOfSequence(addr));
        }
        if addr >= libe20isa::MEM_SIZE {
            return Err(LoadError::ProgramTooBig);
        }

        program.push(word);
    }

    log::debug!("loaded {} words of machine code", program.len());

    Ok(program)
}
