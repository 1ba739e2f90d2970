use libisa::{Addr, Word, PROGRAM_START, REGISTER_COUNT, STACK_DEPTH};

/// The general purpose registers plus the index register and program
/// counter. Register indices come from instruction nibbles, so indexed
/// access never goes out of bounds in practice.
pub struct RegFile {
    v: [u8; REGISTER_COUNT],
    pub i: Word,
    pub pc: Word,
}

impl RegFile {
    pub fn new() -> Self {
        Self {
            v: [0; REGISTER_COUNT],
            i: 0,
            pc: PROGRAM_START,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn register(&self, index: usize) -> u8 {
        *self.v.get(index).expect("Out of bounds register access")
    }

    pub fn register_mut(&mut self, index: usize) -> &mut u8 {
        self.v.get_mut(index).expect("Out of bounds register access")
    }

    pub fn registers(&self) -> &[u8; REGISTER_COUNT] {
        &self.v
    }
}

impl Default for RegFile {
    fn default() -> Self {
        Self::new()
    }
}

/// Return addresses of the active subroutine calls, at most `STACK_DEPTH`
/// deep. Push and pop report failure instead of growing or panicking.
pub struct CallStack {
    frames: Vec<Addr>,
}

impl CallStack {
    pub fn new() -> Self {
        Self {
            frames: Vec::with_capacity(STACK_DEPTH),
        }
    }

    pub fn push(&mut self, addr: Addr) -> Option<()> {
        if self.frames.len() == STACK_DEPTH {
            return None;
        }

        self.frames.push(addr);
        Some(())
    }

    pub fn pop(&mut self) -> Option<Addr> {
        self.frames.pop()
    }

    pub fn clear(&mut self) {
        self.frames.clear();
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn frames(&self) -> &[Addr] {
        &self.frames
    }
}

impl Default for CallStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boots_with_pc_at_program_start() {
        let regs = RegFile::new();

        assert_eq!(regs.pc, PROGRAM_START);
        assert_eq!(regs.i, 0);
        assert!(regs.registers().iter().all(|&v| v == 0));
    }

    #[test]
    fn call_stack_is_lifo() {
        let mut stack = CallStack::new();

        stack.push(0x202).unwrap();
        stack.push(0x21E).unwrap();

        assert_eq!(stack.pop(), Some(0x21E));
        assert_eq!(stack.pop(), Some(0x202));
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn call_stack_caps_out_at_its_depth() {
        let mut stack = CallStack::new();

        for frame in 0..STACK_DEPTH {
            assert_eq!(stack.push(frame as Addr), Some(()));
        }

        assert_eq!(stack.depth(), STACK_DEPTH);
        assert_eq!(stack.push(0xFFF), None);
        assert_eq!(stack.depth(), STACK_DEPTH);
    }
}
