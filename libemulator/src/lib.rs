use anyhow::anyhow;
use libisa::{MAX_PROGRAM_BYTES, PROGRAM_START};

use framebuffer::Framebuffer;
use memory::Memory;
use regfile::{CallStack, RegFile};
use rng::Rng;

pub mod execute;
pub mod framebuffer;
pub mod keypad;
pub mod memory;
pub mod regfile;
pub mod rng;

mod font;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MachineState {
    Running,
    /// A step faulted. The machine refuses further steps until a reset.
    Halted,
}

/// Interpreter behavior switches for points where common practice diverged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Quirks {
    /// Shift instructions read `V[Y]` instead of `V[X]`, as the original
    /// interpreter did.
    pub shift_reads_vy: bool,
}

pub struct Machine {
    pub memory: Memory,
    pub framebuffer: Framebuffer,
    pub regs: RegFile,
    pub stack: CallStack,
    pub quirks: Quirks,
    state: MachineState,
    delay_timer: u8,
    sound_timer: u8,
    rng: Rng,
}

impl Machine {
    pub fn new() -> Self {
        Self {
            memory: Memory::new(),
            framebuffer: Framebuffer::new(),
            regs: RegFile::new(),
            stack: CallStack::new(),
            quirks: Quirks::default(),
            state: MachineState::Running,
            delay_timer: 0,
            sound_timer: 0,
            rng: Rng::from_clock(),
        }
    }

    /// Copy a program image into memory at `PROGRAM_START`.
    pub fn load_program(&mut self, image: &[u8]) -> anyhow::Result<()> {
        self.memory.load(PROGRAM_START, image).ok_or_else(|| {
            anyhow!(
                "program of {} bytes doesn't fit into the {} byte program area",
                image.len(),
                MAX_PROGRAM_BYTES
            )
        })?;

        log::debug!("loaded {} byte program at {:#05X}", image.len(), PROGRAM_START);
        Ok(())
    }

    /// Return to boot state. Memory, including any loaded program, is kept.
    pub fn reset(&mut self) {
        self.regs.reset();
        self.stack.clear();
        self.framebuffer.clear();
        self.delay_timer = 0;
        self.sound_timer = 0;
        self.state = MachineState::Running;
    }

    pub fn state(&self) -> MachineState {
        self.state
    }

    pub fn delay_timer(&self) -> u8 {
        self.delay_timer
    }

    pub fn sound_timer(&self) -> u8 {
        self.sound_timer
    }

    /// True while the buzzer should sound.
    pub fn sound_active(&self) -> bool {
        self.sound_timer > 0
    }

    /// One tick of the external 60 Hz clock. Both timers count down to
    /// zero and stay there.
    pub fn tick_timers(&mut self) {
        self.delay_timer = self.delay_timer.saturating_sub(1);
        self.sound_timer = self.sound_timer.saturating_sub(1);
    }
}

impl Default for Machine {
    fn default() -> Self {
        Self::new()
    }
}
