use libisa::{Addr, Word, FONT_BASE, MEMORY_SIZE};

use crate::font::FONT_SPRITES;

/// The 4 KiB address space. Accessors return `None` past the end so that
/// callers decide how an out of bounds access surfaces.
pub struct Memory([u8; MEMORY_SIZE]);

impl Memory {
    /// Fresh memory with the builtin font in place and everything else zeroed.
    pub fn new() -> Self {
        let mut data = [0; MEMORY_SIZE];

        let font_start = FONT_BASE as usize;
        data[font_start..font_start + FONT_SPRITES.len()].copy_from_slice(&FONT_SPRITES);

        Self(data)
    }

    pub fn byte(&self, addr: Addr) -> Option<u8> {
        self.0.get(addr as usize).copied()
    }

    pub fn byte_mut(&mut self, addr: Addr) -> Option<&mut u8> {
        self.0.get_mut(addr as usize)
    }

    /// Big-endian word starting at `addr`.
    pub fn word(&self, addr: Addr) -> Option<Word> {
        let high = self.byte(addr)?;
        let low = self.byte(addr.checked_add(1)?)?;
        Some(libisa::bytes_to_word([high, low]))
    }

    /// Copy `image` in starting at `addr`. `None` if it doesn't fit.
    pub fn load(&mut self, addr: Addr, image: &[u8]) -> Option<()> {
        let start = addr as usize;
        let region = self.0.get_mut(start..start + image.len())?;
        region.copy_from_slice(image);
        Some(())
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_in_and_out_of_bounds() {
        let mut memory = Memory::new();

        assert_eq!(memory.byte(0x000), Some(0));
        assert_eq!(memory.byte(0xFFF), Some(0));
        assert_eq!(memory.byte(0x1000), None);
        assert_eq!(memory.byte_mut(0x1000), None);

        *memory.byte_mut(0xFFF).unwrap() = 0xAB;
        assert_eq!(memory.byte(0xFFF), Some(0xAB));
    }

    #[test]
    fn words_are_big_endian() {
        let mut memory = Memory::new();
        *memory.byte_mut(0x200).unwrap() = 0x12;
        *memory.byte_mut(0x201).unwrap() = 0x34;

        assert_eq!(memory.word(0x200), Some(0x1234));
    }

    #[test]
    fn word_straddling_the_end_is_out_of_bounds() {
        let memory = Memory::new();
        assert_eq!(memory.word(0xFFF), None);
        assert_eq!(memory.word(0xFFFF), None);
    }

    #[test]
    fn font_is_preloaded() {
        let memory = Memory::new();

        // Glyph for 0 starts at the font base.
        assert_eq!(memory.byte(FONT_BASE), Some(0xF0));
        // Last row of the glyph for F.
        assert_eq!(memory.byte(FONT_BASE + 79), Some(0x80));
    }

    #[test]
    fn load_rejects_oversized_images() {
        let mut memory = Memory::new();

        assert_eq!(memory.load(0x200, &[0xAA; 3584]), Some(()));
        assert_eq!(memory.byte(0x200), Some(0xAA));
        assert_eq!(memory.byte(0xFFF), Some(0xAA));

        assert_eq!(memory.load(0x200, &[0xBB; 3585]), None);
    }
}
