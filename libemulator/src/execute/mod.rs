use libe20isa::instruction::Instruction;

use crate::Emulator;

mod decoded;


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecuteOk {
    Normal,
    Halted,
}

impl Emulator {
    /// Fetches, decodes and executes the instruction at the current pc.
    ///
    /// The pc only moves as part of the executed instruction's own
    /// semantics, so after a halting jump it still points at the halt
    /// instruction itself.
    pub fn execute_instruction(&mut self) -> ExecuteOk {
        let instruction = Instruction::decode(self.memory.word(self.pc));

        log::trace!("pc={:4} {}", self.pc, instruction);

        self.execute_decoded_instruction(instruction)
    }

    /// Runs instructions until the halt idiom, an absolute jump to its own
    /// address, and returns how many were executed. A program that never
    /// reaches the idiom keeps running.
    pub fn execute_to_halt(&mut self) -> u64 {
        let mut executed = 0;

        loop {
            executed += 1;

            if let ExecuteOk::Halted = self.execute_instruction() {
                log::debug!("halted at pc={} after {} instructions", self.pc, executed);
                return executed;
            }
        }
    }
}
