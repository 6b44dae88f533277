use libe20isa::{Register, Word};


/// The eight general purpose registers.
///
/// Register 0 always reads as zero. Writes to it go through the same
/// instruction path as any other write, but the stored value is discarded.
pub struct RegFile([Word; libe20isa::REGISTER_COUNT]);

impl RegFile {
    pub fn new() -> Self {
        Self([0; libe20isa::REGISTER_COUNT])
    }

    pub fn read(&self, index: Register) -> Word {
        *self.0.get(index).expect("Out of bounds register access")
    }

    pub fn write(&mut self, index: Register, value: Word) {
        if index != 0 {
            *self.0.get_mut(index).expect("Out of bounds register access") = value;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Word> + '_ {
        self.0.iter().copied()
    }
}
