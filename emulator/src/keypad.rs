use std::{
    collections::VecDeque,
    io::{self, Write},
};

use libemulator::keypad::Keypad;
use libisa::KEY_COUNT;

/// Keypad state driven from console commands: keys held down with `k`,
/// queued one-shot presses with `kp`.
pub struct ConsoleKeypad {
    held: [bool; KEY_COUNT],
    queued: VecDeque<u8>,
}

impl ConsoleKeypad {
    pub fn new() -> Self {
        Self {
            held: [false; KEY_COUNT],
            queued: VecDeque::new(),
        }
    }

    /// Flip the held state of a key and report the new state.
    pub fn toggle(&mut self, key: u8) -> bool {
        let state = &mut self.held[(key & 0xF) as usize];
        *state = !*state;
        *state
    }

    pub fn queue_press(&mut self, key: u8) {
        self.queued.push_back(key & 0xF);
    }

    pub fn held_keys(&self) -> impl Iterator<Item = u8> + '_ {
        (0..KEY_COUNT as u8).filter(|&key| self.held[key as usize])
    }
}

impl Keypad for ConsoleKeypad {
    fn is_pressed(&self, key: u8) -> bool {
        self.held[(key & 0xF) as usize]
    }

    /// Drains the press queue first, then falls back to prompting on the
    /// console so a wait instruction blocks there instead of spinning.
    fn wait_press(&mut self) -> u8 {
        if let Some(key) = self.queued.pop_front() {
            return key;
        }

        loop {
            print!("key (0-f)? ");
            let _ = io::stdout().flush();

            let Some(Ok(line)) = io::stdin().lines().next() else {
                // Stdin is gone, nothing left to wait for.
                eprintln!("!> No input left, reporting key 0");
                return 0;
            };

            match u8::from_str_radix(line.trim(), 16) {
                Ok(key) if key < KEY_COUNT as u8 => return key,
                _ => eprintln!("!> Expected a single hex key digit"),
            }
        }
    }
}

impl Default for ConsoleKeypad {
    fn default() -> Self {
        Self::new()
    }
}
