//! Bit field accessors over a raw instruction word.
//!
//! Field layout, from the most significant bit down: a 3-bit opcode, then
//! register selectors a, b and c of 3 bits each, with the low 4 bits left
//! for the function selector of opcode-0 instructions. The immediate forms
//! reuse the positions of c and the function selector as a 7-bit immediate,
//! and the jump forms use the low 13 bits as an absolute target.

use crate::{Register, Word, WordSigned, ADDR_MASK};

pub fn opcode(word: Word) -> Word {
    word >> 13
}

pub fn reg_a(word: Word) -> Register {
    ((word >> 10) & 0b111) as Register
}

pub fn reg_b(word: Word) -> Register {
    ((word >> 7) & 0b111) as Register
}

pub fn reg_c(word: Word) -> Register {
    ((word >> 4) & 0b111) as Register
}

pub fn funct(word: Word) -> Word {
    word & 0b1111
}

/// The 7-bit immediate, zero extended.
pub fn imm_unsigned(word: Word) -> Word {
    word & 0x7f
}

/// The 7-bit immediate, sign extended into the range -64..=63.
pub fn imm_signed(word: Word) -> WordSigned {
    (((word & 0x7f) as WordSigned) << 9) >> 9
}

/// The 13-bit jump target.
pub fn target(word: Word) -> Word {
    word & ADDR_MASK
}
