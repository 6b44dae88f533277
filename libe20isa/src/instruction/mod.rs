use std::fmt::{self, Display};

use crate::{Register, Word, WordSigned, ADDR_MASK};

pub mod fields;

#[cfg(test)]
mod tests;

/// A decoded E20 instruction.
///
/// Operands are stored by role rather than by field position, so `Addi`
/// names its source and destination instead of registers a and b.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Add {
        src_a: Register,
        src_b: Register,
        dst: Register,
    },
    Sub {
        src_a: Register,
        src_b: Register,
        dst: Register,
    },
    Or {
        src_a: Register,
        src_b: Register,
        dst: Register,
    },
    And {
        src_a: Register,
        src_b: Register,
        dst: Register,
    },
    Slt {
        src_a: Register,
        src_b: Register,
        dst: Register,
    },
    Jr {
        src: Register,
    },
    Addi {
        src: Register,
        dst: Register,
        imm: WordSigned,
    },
    J {
        target: Word,
    },
    Jal {
        target: Word,
    },
    Lw {
        addr: Register,
        dst: Register,
        imm: WordSigned,
    },
    Sw {
        addr: Register,
        src: Register,
        imm: WordSigned,
    },
    Jeq {
        src_a: Register,
        src_b: Register,
        rel: WordSigned,
    },
    Slti {
        src: Register,
        dst: Register,
        imm: Word,
    },
}

impl Instruction {
    /// Decodes a raw word. Every 16-bit pattern is a valid instruction:
    /// opcode 0 dispatches on the function selector, where the values with
    /// no arithmetic instruction of their own all decode as `jr`.
    pub fn decode(word: Word) -> Self {
        match fields::opcode(word) {
            0 => {
                let src_a = fields::reg_a(word);
                let src_b = fields::reg_b(word);
                let dst = fields::reg_c(word);

                match fields::funct(word) {
                    0 => Self::Add { src_a, src_b, dst },
                    1 => Self::Sub { src_a, src_b, dst },
                    2 => Self::Or { src_a, src_b, dst },
                    3 => Self::And { src_a, src_b, dst },
                    4 => Self::Slt { src_a, src_b, dst },
                    _ => Self::Jr { src: src_a },
                }
            }
            1 => Self::Addi {
                src: fields::reg_a(word),
                dst: fields::reg_b(word),
                imm: fields::imm_signed(word),
            },
            2 => Self::J {
                target: fields::target(word),
            },
            3 => Self::Jal {
                target: fields::target(word),
            },
            4 => Self::Lw {
                addr: fields::reg_a(word),
                dst: fields::reg_b(word),
                imm: fields::imm_signed(word),
            },
            5 => Self::Sw {
                addr: fields::reg_a(word),
                src: fields::reg_b(word),
                imm: fields::imm_signed(word),
            },
            6 => Self::Jeq {
                src_a: fields::reg_a(word),
                src_b: fields::reg_b(word),
                rel: fields::imm_signed(word),
            },
            // Opcode 7, the only value left after the shift.
            _ => Self::Slti {
                src: fields::reg_a(word),
                dst: fields::reg_b(word),
                imm: fields::imm_unsigned(word),
            },
        }
    }

    /// Encodes back into a raw word. Register and immediate operands are
    /// masked to their field widths, and `jr` is emitted with its canonical
    /// function selector 8.
    pub fn encode(&self) -> Word {
        match *self {
            Self::Add { src_a, src_b, dst } => encode_rrr(src_a, src_b, dst, 0),
            Self::Sub { src_a, src_b, dst } => encode_rrr(src_a, src_b, dst, 1),
            Self::Or { src_a, src_b, dst } => encode_rrr(src_a, src_b, dst, 2),
            Self::And { src_a, src_b, dst } => encode_rrr(src_a, src_b, dst, 3),
            Self::Slt { src_a, src_b, dst } => encode_rrr(src_a, src_b, dst, 4),
            Self::Jr { src } => encode_rrr(src, 0, 0, 8),
            Self::Addi { src, dst, imm } => encode_rri(1, src, dst, imm as Word),
            Self::J { target } => 2 << 13 | (target & ADDR_MASK),
            Self::Jal { target } => 3 << 13 | (target & ADDR_MASK),
            Self::Lw { addr, dst, imm } => encode_rri(4, addr, dst, imm as Word),
            Self::Sw { addr, src, imm } => encode_rri(5, addr, src, imm as Word),
            Self::Jeq { src_a, src_b, rel } => encode_rri(6, src_a, src_b, rel as Word),
            Self::Slti { src, dst, imm } => encode_rri(7, src, dst, imm),
        }
    }
}

fn encode_rrr(reg_a: Register, reg_b: Register, reg_c: Register, funct: Word) -> Word {
    reg_bits(reg_a) << 10 | reg_bits(reg_b) << 7 | reg_bits(reg_c) << 4 | funct
}

fn encode_rri(opcode: Word, reg_a: Register, reg_b: Register, imm: Word) -> Word {
    opcode << 13 | reg_bits(reg_a) << 10 | reg_bits(reg_b) << 7 | (imm & 0x7f)
}

fn reg_bits(register: Register) -> Word {
    (register & 0b111) as Word
}

impl Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Add { src_a, src_b, dst } => write!(f, "add ${}, ${}, ${}", dst, src_a, src_b),
            Self::Sub { src_a, src_b, dst } => write!(f, "sub ${}, ${}, ${}", dst, src_a, src_b),
            Self::Or { src_a, src_b, dst } => write!(f, "or ${}, ${}, ${}", dst, src_a, src_b),
            Self::And { src_a, src_b, dst } => write!(f, "and ${}, ${}, ${}", dst, src_a, src_b),
            Self::Slt { src_a, src_b, dst } => write!(f, "slt ${}, ${}, ${}", dst, src_a, src_b),
            Self::Jr { src } => write!(f, "jr ${}", src),
            Self::Addi { src, dst, imm } => write!(f, "addi ${}, ${}, {}", dst, src, imm),
            Self::J { target } => write!(f, "j {}", target),
            Self::Jal { target } => write!(f, "jal {}", target),
            Self::Lw { addr, dst, imm } => write!(f, "lw ${}, {}(${})", dst, imm, addr),
            Self::Sw { addr, src, imm } => write!(f, "sw ${}, {}(${})", src, imm, addr),
            Self::Jeq { src_a, src_b, rel } => write!(f, "jeq ${}, ${}, {}", src_a, src_b, rel),
            Self::Slti { src, dst, imm } => write!(f, "slti ${}, ${}, {}", dst, src, imm),
        }
    }
}
