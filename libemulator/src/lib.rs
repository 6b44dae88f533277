use std::iter;

use anyhow::anyhow;
use libe20isa::Word;
use memory::Memory;
use regfile::RegFile;

pub mod execute;
pub mod memory;
pub mod regfile;

pub struct Emulator {
    pub memory: Memory,
    pub reg_file: RegFile,
    pub pc: Word,
}

impl Emulator {
    /// Builds a machine in its power-on state: the program in the lowest
    /// memory cells, every other cell zero, all registers zero, pc at 0.
    pub fn new(program: Vec<Word>) -> anyhow::Result<Self> {
        if program.len() > libe20isa::MEM_SIZE {
            return Err(anyhow!("Program doesn't fit into memory"));
        }

        let cells = program
            .into_iter()
            .chain(iter::repeat(0))
            .take(libe20isa::MEM_SIZE)
            .collect();

        Ok(Self {
            memory: Memory::new(cells),
            reg_file: RegFile::new(),
            pc: 0,
        })
    }
}
