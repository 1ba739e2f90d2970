use std::fmt::{self, Display};

use thiserror::Error;

use crate::{Addr, Register, Word};

#[cfg(test)]
mod tests;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    #[error("unknown opcode {0:#06X}")]
    UnknownOpcode(Word),
}

/// One decoded instruction word.
///
/// Operand fields follow the usual naming: `x` and `y` are register
/// indices from the second and third nibbles, `addr` is the low 12 bits,
/// `value` the low byte and `height` the low nibble.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    /// `0NNN`, a call into machine-native code. Decodes, but the machine
    /// refuses to execute it.
    MachineRoutine { addr: Addr },
    /// `00E0`, blank the display.
    ClearScreen,
    /// `00EE`, return from the current subroutine.
    Return,
    /// `1NNN`, jump to `addr`.
    Jump { addr: Addr },
    /// `2NNN`, call the subroutine at `addr`.
    Call { addr: Addr },
    /// `3XNN`, skip the next instruction if `V[X] == value`.
    SkipEqImmediate { x: Register, value: u8 },
    /// `4XNN`, skip the next instruction if `V[X] != value`.
    SkipNeImmediate { x: Register, value: u8 },
    /// `5XY0`, skip the next instruction if `V[X] == V[Y]`.
    SkipEqRegister { x: Register, y: Register },
    /// `6XNN`, set `V[X]` to `value`.
    LoadImmediate { x: Register, value: u8 },
    /// `7XNN`, add `value` to `V[X]` without touching the flag.
    AddImmediate { x: Register, value: u8 },
    /// `8XY0`, copy `V[Y]` into `V[X]`.
    Copy { x: Register, y: Register },
    /// `8XY1`, bitwise OR.
    Or { x: Register, y: Register },
    /// `8XY2`, bitwise AND.
    And { x: Register, y: Register },
    /// `8XY3`, bitwise XOR.
    Xor { x: Register, y: Register },
    /// `8XY4`, add with carry into the flag.
    Add { x: Register, y: Register },
    /// `8XY5`, `V[X] - V[Y]` with not-borrow into the flag.
    Sub { x: Register, y: Register },
    /// `8XY6`, shift right one bit, shifted-out bit into the flag.
    ShiftRight { x: Register, y: Register },
    /// `8XY7`, `V[Y] - V[X]` with not-borrow into the flag.
    SubFrom { x: Register, y: Register },
    /// `8XYE`, shift left one bit, shifted-out bit into the flag.
    ShiftLeft { x: Register, y: Register },
    /// `9XY0`, skip the next instruction if `V[X] != V[Y]`.
    SkipNeRegister { x: Register, y: Register },
    /// `ANNN`, set the index register to `addr`.
    LoadIndex { addr: Addr },
    /// `BNNN`, jump to `addr + V[0]`.
    JumpOffset { addr: Addr },
    /// `CXNN`, set `V[X]` to a random byte ANDed with `mask`.
    Random { x: Register, mask: u8 },
    /// `DXYN`, XOR-draw the `height`-row sprite at the index register to
    /// `(V[X], V[Y])`, collision into the flag.
    Draw { x: Register, y: Register, height: u8 },
    /// `EX9E`, skip the next instruction if key `V[X]` is held.
    SkipKeyPressed { x: Register },
    /// `EXA1`, skip the next instruction if key `V[X]` is not held.
    SkipKeyNotPressed { x: Register },
    /// `FX07`, read the delay timer into `V[X]`.
    ReadDelayTimer { x: Register },
    /// `FX0A`, block until a key press and store it in `V[X]`.
    WaitKey { x: Register },
    /// `FX15`, set the delay timer from `V[X]`.
    SetDelayTimer { x: Register },
    /// `FX18`, set the sound timer from `V[X]`.
    SetSoundTimer { x: Register },
    /// `FX1E`, add `V[X]` to the index register.
    AddIndex { x: Register },
    /// `FX29`, point the index register at the font glyph for `V[X]`.
    FontAddress { x: Register },
    /// `FX33`, store `V[X]` as three decimal digits at the index register.
    StoreBcd { x: Register },
    /// `FX55`, store `V[0]..=V[X]` to memory at the index register.
    StoreRegisters { x: Register },
    /// `FX65`, load `V[0]..=V[X]` from memory at the index register.
    LoadRegisters { x: Register },
}

impl Opcode {
    pub fn decode(word: Word) -> Result<Self, DecodeError> {
        let x = ((word >> 8) & 0xF) as Register;
        let y = ((word >> 4) & 0xF) as Register;
        let addr = word & 0x0FFF;
        let value = (word & 0x00FF) as u8;

        let opcode = match word >> 12 {
            0x0 => match addr {
                0x0E0 => Self::ClearScreen,
                0x0EE => Self::Return,
                _ => Self::MachineRoutine { addr },
            },
            0x1 => Self::Jump { addr },
            0x2 => Self::Call { addr },
            0x3 => Self::SkipEqImmediate { x, value },
            0x4 => Self::SkipNeImmediate { x, value },
            0x5 if word & 0xF == 0 => Self::SkipEqRegister { x, y },
            0x6 => Self::LoadImmediate { x, value },
            0x7 => Self::AddImmediate { x, value },
            0x8 => match word & 0xF {
                0x0 => Self::Copy { x, y },
                0x1 => Self::Or { x, y },
                0x2 => Self::And { x, y },
                0x3 => Self::Xor { x, y },
                0x4 => Self::Add { x, y },
                0x5 => Self::Sub { x, y },
                0x6 => Self::ShiftRight { x, y },
                0x7 => Self::SubFrom { x, y },
                0xE => Self::ShiftLeft { x, y },
                _ => return Err(DecodeError::UnknownOpcode(word)),
            },
            0x9 if word & 0xF == 0 => Self::SkipNeRegister { x, y },
            0xA => Self::LoadIndex { addr },
            0xB => Self::JumpOffset { addr },
            0xC => Self::Random { x, mask: value },
            0xD => Self::Draw {
                x,
                y,
                height: (word & 0xF) as u8,
            },
            0xE => match value {
                0x9E => Self::SkipKeyPressed { x },
                0xA1 => Self::SkipKeyNotPressed { x },
                _ => return Err(DecodeError::UnknownOpcode(word)),
            },
            0xF => match value {
                0x07 => Self::ReadDelayTimer { x },
                0x0A => Self::WaitKey { x },
                0x15 => Self::SetDelayTimer { x },
                0x18 => Self::SetSoundTimer { x },
                0x1E => Self::AddIndex { x },
                0x29 => Self::FontAddress { x },
                0x33 => Self::StoreBcd { x },
                0x55 => Self::StoreRegisters { x },
                0x65 => Self::LoadRegisters { x },
                _ => return Err(DecodeError::UnknownOpcode(word)),
            },
            // 5XYN / 9XYN with a nonzero low nibble fall through to here.
            _ => return Err(DecodeError::UnknownOpcode(word)),
        };

        Ok(opcode)
    }
}

impl Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::MachineRoutine { addr } => write!(f, "sys {:#05x}", addr),
            Self::ClearScreen => f.write_str("cls"),
            Self::Return => f.write_str("ret"),
            Self::Jump { addr } => write!(f, "jp {:#05x}", addr),
            Self::Call { addr } => write!(f, "call {:#05x}", addr),
            Self::SkipEqImmediate { x, value } => write!(f, "se v{:x}, {:#04x}", x, value),
            Self::SkipNeImmediate { x, value } => write!(f, "sne v{:x}, {:#04x}", x, value),
            Self::SkipEqRegister { x, y } => write!(f, "se v{:x}, v{:x}", x, y),
            Self::LoadImmediate { x, value } => write!(f, "ld v{:x}, {:#04x}", x, value),
            Self::AddImmediate { x, value } => write!(f, "add v{:x}, {:#04x}", x, value),
            Self::Copy { x, y } => write!(f, "ld v{:x}, v{:x}", x, y),
            Self::Or { x, y } => write!(f, "or v{:x}, v{:x}", x, y),
            Self::And { x, y } => write!(f, "and v{:x}, v{:x}", x, y),
            Self::Xor { x, y } => write!(f, "xor v{:x}, v{:x}", x, y),
            Self::Add { x, y } => write!(f, "add v{:x}, v{:x}", x, y),
            Self::Sub { x, y } => write!(f, "sub v{:x}, v{:x}", x, y),
            Self::ShiftRight { x, y } => write!(f, "shr v{:x}, v{:x}", x, y),
            Self::SubFrom { x, y } => write!(f, "subn v{:x}, v{:x}", x, y),
            Self::ShiftLeft { x, y } => write!(f, "shl v{:x}, v{:x}", x, y),
            Self::SkipNeRegister { x, y } => write!(f, "sne v{:x}, v{:x}", x, y),
            Self::LoadIndex { addr } => write!(f, "ld i, {:#05x}", addr),
            Self::JumpOffset { addr } => write!(f, "jp v0, {:#05x}", addr),
            Self::Random { x, mask } => write!(f, "rnd v{:x}, {:#04x}", x, mask),
            Self::Draw { x, y, height } => write!(f, "drw v{:x}, v{:x}, {}", x, y, height),
            Self::SkipKeyPressed { x } => write!(f, "skp v{:x}", x),
            Self::SkipKeyNotPressed { x } => write!(f, "sknp v{:x}", x),
            Self::ReadDelayTimer { x } => write!(f, "ld v{:x}, dt", x),
            Self::WaitKey { x } => write!(f, "ld v{:x}, k", x),
            Self::SetDelayTimer { x } => write!(f, "ld dt, v{:x}", x),
            Self::SetSoundTimer { x } => write!(f, "ld st, v{:x}", x),
            Self::AddIndex { x } => write!(f, "add i, v{:x}", x),
            Self::FontAddress { x } => write!(f, "ld f, v{:x}", x),
            Self::StoreBcd { x } => write!(f, "ld b, v{:x}", x),
            Self::StoreRegisters { x } => write!(f, "ld [i], v{:x}", x),
            Self::LoadRegisters { x } => write!(f, "ld v{:x}, [i]", x),
        }
    }
}
