pub mod opcode;

/// One big-endian instruction word.
pub type Word = u16;

/// Memory address. Only the low 12 bits address real memory.
pub type Addr = u16;

pub type Register = usize;

pub const BYTES_PER_INSTRUCTION: usize = 2;

pub const MEMORY_SIZE: usize = 4096;

/// Load address for program images, and the boot value of the program counter.
pub const PROGRAM_START: Addr = 0x200;

/// Capacity of the program area, `PROGRAM_START` through the end of memory.
pub const MAX_PROGRAM_BYTES: usize = MEMORY_SIZE - PROGRAM_START as usize;

pub const REGISTER_COUNT: usize = 16;

/// `V[0xF]`, overwritten by arithmetic carry/borrow and draw collision.
pub const FLAG_REGISTER: Register = 0xF;

pub const STACK_DEPTH: usize = 16;

pub const DISPLAY_WIDTH: usize = 64;
pub const DISPLAY_HEIGHT: usize = 32;

/// Where the builtin hexadecimal font lives, below the program area.
pub const FONT_BASE: Addr = 0x050;

pub const FONT_GLYPH_BYTES: usize = 5;

pub const KEY_COUNT: usize = 16;

pub fn word_to_bytes(word: Word) -> [u8; BYTES_PER_INSTRUCTION] {
    [(word >> 8) as u8, (word & 0x00FF) as u8]
}

pub fn bytes_to_word(bytes: [u8; BYTES_PER_INSTRUCTION]) -> Word {
    (bytes[0] as u16) << 8 | (bytes[1] as u16)
}
