use libe20isa::Word;


/// Word-addressed memory of [`libe20isa::MEM_SIZE`] cells.
///
/// The execution engine wraps every address into range before the access,
/// so the accessors here are infallible.
pub struct Memory(Vec<Word>);

impl Memory {
    pub fn new(cells: Vec<Word>) -> Self {
        Self(cells)
    }

    pub fn word(&self, addr: Word) -> Word {
        self.0[addr as usize]
    }

    pub fn word_mut(&mut self, addr: Word) -> &mut Word {
        &mut self.0[addr as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = Word> + '_ {
        self.0.iter().copied()
    }
}
