pub mod instruction;


pub type Word = u16;
pub type WordSigned = i16;

pub type Register = usize;

pub const REGISTER_COUNT: usize = 8;

/// Memory size in words. Addresses are 13 bits wide, so this is also the
/// modulus for all address arithmetic.
pub const MEM_SIZE: usize = 2usize.pow(13);
pub const ADDR_MASK: Word = (MEM_SIZE - 1) as Word;

/// Register that `jal` stores its return address in.
pub const RETURN_REGISTER: Register = 7;

/// Reduces a computed address into the valid range, modulo [`MEM_SIZE`].
///
/// Intermediate address arithmetic (pc increments, branch offsets, load and
/// store effective addresses, `jr` targets) can leave the 13-bit range in
/// either direction. The memory size is a power of two, so masking is an
/// exact modular reduction even for negative values.
pub fn wrap_address(value: i32) -> Word {
    (value & ADDR_MASK as i32) as Word
}
