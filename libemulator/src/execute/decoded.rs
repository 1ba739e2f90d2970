use libisa::{
    opcode::Opcode, Addr, Register, Word, BYTES_PER_INSTRUCTION, FLAG_REGISTER, FONT_BASE,
    FONT_GLYPH_BYTES,
};

use crate::{keypad::Keypad, Machine};

use super::ExecuteErr;

impl Machine {
    /// Execute one already-decoded instruction. `Machine::step` is the
    /// usual entry point; this one neither advances the program counter
    /// past the instruction nor halts on error.
    pub fn execute_decoded(
        &mut self,
        opcode: Opcode,
        keypad: &mut dyn Keypad,
    ) -> Result<(), ExecuteErr> {
        match opcode {
            Opcode::MachineRoutine { addr } => {
                return Err(ExecuteErr::UnsupportedOperation { addr });
            }

            Opcode::ClearScreen => self.framebuffer.clear(),

            Opcode::Return => {
                self.regs.pc = self.stack.pop().ok_or(ExecuteErr::StackUnderflow)?;
            }

            Opcode::Jump { addr } => self.regs.pc = addr,

            Opcode::Call { addr } => {
                self.stack
                    .push(self.regs.pc)
                    .ok_or(ExecuteErr::StackOverflow)?;
                self.regs.pc = addr;
            }

            Opcode::SkipEqImmediate { x, value } => {
                if self.regs.register(x) == value {
                    self.skip_next();
                }
            }

            Opcode::SkipNeImmediate { x, value } => {
                if self.regs.register(x) != value {
                    self.skip_next();
                }
            }

            Opcode::SkipEqRegister { x, y } => {
                if self.regs.register(x) == self.regs.register(y) {
                    self.skip_next();
                }
            }

            Opcode::SkipNeRegister { x, y } => {
                if self.regs.register(x) != self.regs.register(y) {
                    self.skip_next();
                }
            }

            Opcode::LoadImmediate { x, value } => *self.regs.register_mut(x) = value,

            Opcode::AddImmediate { x, value } => {
                let reg = self.regs.register_mut(x);
                *reg = reg.wrapping_add(value);
            }

            Opcode::Copy { x, y } => {
                let src = self.regs.register(y);
                *self.regs.register_mut(x) = src;
            }

            Opcode::Or { x, y } => {
                let value = self.regs.register(x) | self.regs.register(y);
                *self.regs.register_mut(x) = value;
            }

            Opcode::And { x, y } => {
                let value = self.regs.register(x) & self.regs.register(y);
                *self.regs.register_mut(x) = value;
            }

            Opcode::Xor { x, y } => {
                let value = self.regs.register(x) ^ self.regs.register(y);
                *self.regs.register_mut(x) = value;
            }

            Opcode::Add { x, y } => {
                let (value, carry) = self
                    .regs
                    .register(x)
                    .overflowing_add(self.regs.register(y));

                *self.regs.register_mut(x) = value;
                self.set_flag(carry);
            }

            Opcode::Sub { x, y } => {
                let a = self.regs.register(x);
                let b = self.regs.register(y);

                *self.regs.register_mut(x) = a.wrapping_sub(b);
                self.set_flag(a >= b);
            }

            Opcode::SubFrom { x, y } => {
                let a = self.regs.register(x);
                let b = self.regs.register(y);

                *self.regs.register_mut(x) = b.wrapping_sub(a);
                self.set_flag(b >= a);
            }

            Opcode::ShiftRight { x, y } => {
                let source = self.shift_source(x, y);

                *self.regs.register_mut(x) = source >> 1;
                self.set_flag(source & 0x01 != 0);
            }

            Opcode::ShiftLeft { x, y } => {
                let source = self.shift_source(x, y);

                *self.regs.register_mut(x) = source << 1;
                self.set_flag(source & 0x80 != 0);
            }

            Opcode::LoadIndex { addr } => self.regs.i = addr,

            Opcode::JumpOffset { addr } => {
                self.regs.pc = addr + self.regs.register(0) as Word;
            }

            Opcode::Random { x, mask } => {
                *self.regs.register_mut(x) = self.rng.next_byte() & mask;
            }

            Opcode::Draw { x, y, height } => {
                let base = self.regs.i;

                let mut rows = Vec::with_capacity(height as usize);
                for offset in 0..height as Word {
                    rows.push(self.mem_byte(indexed_addr(base, offset)?)?);
                }

                let collision = self.framebuffer.draw_sprite(
                    self.regs.register(x) as usize,
                    self.regs.register(y) as usize,
                    &rows,
                );
                self.set_flag(collision);
            }

            Opcode::SkipKeyPressed { x } => {
                if keypad.is_pressed(self.key(x)) {
                    self.skip_next();
                }
            }

            Opcode::SkipKeyNotPressed { x } => {
                if !keypad.is_pressed(self.key(x)) {
                    self.skip_next();
                }
            }

            Opcode::ReadDelayTimer { x } => *self.regs.register_mut(x) = self.delay_timer,

            Opcode::WaitKey { x } => *self.regs.register_mut(x) = keypad.wait_press(),

            Opcode::SetDelayTimer { x } => self.delay_timer = self.regs.register(x),

            Opcode::SetSoundTimer { x } => self.sound_timer = self.regs.register(x),

            Opcode::AddIndex { x } => {
                self.regs.i = self.regs.i.wrapping_add(self.regs.register(x) as Word);
            }

            Opcode::FontAddress { x } => {
                let glyph = self.regs.register(x) as Word;
                self.regs.i = FONT_BASE + glyph * FONT_GLYPH_BYTES as Word;
            }

            Opcode::StoreBcd { x } => {
                let value = self.regs.register(x);
                let base = self.regs.i;

                let digits = [value / 100, value / 10 % 10, value % 10];
                for (offset, digit) in digits.into_iter().enumerate() {
                    *self.mem_byte_mut(indexed_addr(base, offset as Word)?)? = digit;
                }
            }

            Opcode::StoreRegisters { x } => {
                let base = self.regs.i;

                for index in 0..=x {
                    let value = self.regs.register(index);
                    *self.mem_byte_mut(indexed_addr(base, index as Word)?)? = value;
                }
            }

            Opcode::LoadRegisters { x } => {
                let base = self.regs.i;

                for index in 0..=x {
                    let value = self.mem_byte(indexed_addr(base, index as Word)?)?;
                    *self.regs.register_mut(index) = value;
                }
            }
        }

        Ok(())
    }

    fn skip_next(&mut self) {
        self.regs.pc = self.regs.pc.wrapping_add(BYTES_PER_INSTRUCTION as Word);
    }

    fn set_flag(&mut self, flag: bool) {
        *self.regs.register_mut(FLAG_REGISTER) = flag as u8;
    }

    fn shift_source(&self, x: Register, y: Register) -> u8 {
        if self.quirks.shift_reads_vy {
            self.regs.register(y)
        } else {
            self.regs.register(x)
        }
    }

    /// Key instructions only look at the low nibble of the register.
    fn key(&self, x: Register) -> u8 {
        self.regs.register(x) & 0x0F
    }
}

fn indexed_addr(base: Addr, offset: Word) -> Result<Addr, ExecuteErr> {
    base.checked_add(offset)
        .ok_or(ExecuteErr::OutOfBounds { addr: base })
}
