use libe20isa::{instruction::Instruction, wrap_address, Register, Word, WordSigned};

use crate::Emulator;

use super::ExecuteOk;

impl Emulator {
    pub fn execute_decoded_instruction(&mut self, instruction: Instruction) -> ExecuteOk {
        match instruction {
            Instruction::Add { src_a, src_b, dst } => {
                let a = self.reg_file.read(src_a);
                let b = self.reg_file.read(src_b);

                self.reg_file.write(dst, a.wrapping_add(b));
                self.advance_pc();
            }

            Instruction::Sub { src_a, src_b, dst } => {
                let a = self.reg_file.read(src_a);
                let b = self.reg_file.read(src_b);

                self.reg_file.write(dst, a.wrapping_sub(b));
                self.advance_pc();
            }

            Instruction::Or { src_a, src_b, dst } => {
                let a = self.reg_file.read(src_a);
                let b = self.reg_file.read(src_b);

                self.reg_file.write(dst, a | b);
                self.advance_pc();
            }

            Instruction::And { src_a, src_b, dst } => {
                let a = self.reg_file.read(src_a);
                let b = self.reg_file.read(src_b);

                self.reg_file.write(dst, a & b);
                self.advance_pc();
            }

            Instruction::Slt { src_a, src_b, dst } => {
                let a = self.reg_file.read(src_a);
                let b = self.reg_file.read(src_b);

                self.reg_file.write(dst, (a < b) as Word);
                self.advance_pc();
            }

            Instruction::Jr { src } => {
                // The register holds a full 16-bit word; only its low 13
                // bits form the target address.
                self.pc = wrap_address(i32::from(self.reg_file.read(src)));
            }

            Instruction::Addi { src, dst, imm } => {
                let value = self.reg_file.read(src).wrapping_add_signed(imm);

                self.reg_file.write(dst, value);
                self.advance_pc();
            }

            Instruction::J { target } => {
                if target == self.pc {
                    return ExecuteOk::Halted;
                }

                self.pc = target;
            }

            Instruction::Jal { target } => {
                let return_addr = wrap_address(i32::from(self.pc) + 1);

                self.reg_file.write(libe20isa::RETURN_REGISTER, return_addr);
                self.pc = target;
            }

            Instruction::Lw { addr, dst, imm } => {
                let addr = self.effective_address(addr, imm);
                let value = self.memory.word(addr);

                self.reg_file.write(dst, value);
                self.advance_pc();
            }

            Instruction::Sw { addr, src, imm } => {
                let addr = self.effective_address(addr, imm);
                let value = self.reg_file.read(src);

                *self.memory.word_mut(addr) = value;
                self.advance_pc();
            }

            Instruction::Jeq { src_a, src_b, rel } => {
                if self.reg_file.read(src_a) == self.reg_file.read(src_b) {
                    self.pc = wrap_address(i32::from(self.pc) + 1 + i32::from(rel));
                } else {
                    self.advance_pc();
                }
            }

            Instruction::Slti { src, dst, imm } => {
                let value = self.reg_file.read(src);

                self.reg_file.write(dst, (value < imm) as Word);
                self.advance_pc();
            }
        }

        ExecuteOk::Normal
    }

    fn advance_pc(&mut self) {
        self.pc = wrap_address(i32::from(self.pc) + 1);
    }

    fn effective_address(&self, base: Register, offset: WordSigned) -> Word {
        wrap_address(i32::from(self.reg_file.read(base)) + i32::from(offset))
    }
}
