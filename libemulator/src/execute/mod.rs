use libisa::{
    opcode::{DecodeError, Opcode},
    Addr, Word, BYTES_PER_INSTRUCTION,
};
use thiserror::Error;

use crate::{keypad::Keypad, Machine, MachineState};

mod decoded;


#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ExecuteErr {
    #[error("memory access out of bounds at {addr:#06X}")]
    OutOfBounds { addr: Addr },

    #[error("call stack overflow")]
    StackOverflow,

    #[error("call stack underflow")]
    StackUnderflow,

    #[error("{0}")]
    UnknownOpcode(#[from] DecodeError),

    #[error("machine routine call to {addr:#05X} is unsupported")]
    UnsupportedOperation { addr: Addr },

    #[error("machine is halted")]
    Halted,
}

impl Machine {
    /// One fetch, decode, execute step. Any error halts the machine, and
    /// stepping a halted machine is refused with `ExecuteErr::Halted`.
    ///
    /// `keypad` is only consulted by the key instructions. A blocking
    /// `wait_press` makes the wait-for-key instruction block inside this
    /// call.
    pub fn step(&mut self, keypad: &mut dyn Keypad) -> Result<(), ExecuteErr> {
        if self.state == MachineState::Halted {
            return Err(ExecuteErr::Halted);
        }

        let result = self.fetch_execute(keypad);
        if result.is_err() {
            self.state = MachineState::Halted;
        }

        result
    }

    fn fetch_execute(&mut self, keypad: &mut dyn Keypad) -> Result<(), ExecuteErr> {
        let pc = self.regs.pc;
        let opcode = Opcode::decode(self.pc_next_word()?)?;

        log::trace!("{:#05X}: {}", pc, opcode);
        self.execute_decoded(opcode, keypad)
    }

    fn pc_next_word(&mut self) -> Result<Word, ExecuteErr> {
        let word = self.mem_word(self.regs.pc)?;
        self.regs.pc = self.regs.pc.wrapping_add(BYTES_PER_INSTRUCTION as Word);
        Ok(word)
    }

    fn mem_word(&self, addr: Addr) -> Result<Word, ExecuteErr> {
        self.memory.word(addr).ok_or(ExecuteErr::OutOfBounds { addr })
    }

    fn mem_byte(&self, addr: Addr) -> Result<u8, ExecuteErr> {
        self.memory.byte(addr).ok_or(ExecuteErr::OutOfBounds { addr })
    }

    fn mem_byte_mut(&mut self, addr: Addr) -> Result<&mut u8, ExecuteErr> {
        self.memory
            .byte_mut(addr)
            .ok_or(ExecuteErr::OutOfBounds { addr })
    }
}
