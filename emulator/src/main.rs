use std::{fs, path::PathBuf, process::exit};

use clap::Parser;
use libemulator::Machine;
use libisa::{Addr, MEMORY_SIZE, PROGRAM_START};

use command::{Command, CommandError};
use keypad::ConsoleKeypad;

mod command;
mod keypad;
mod screen;

#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// ROM image to load into the program area.
    rom_path: PathBuf,

    /// Instructions executed per timer tick during `run`.
    #[arg(long, default_value_t = 8)]
    tick_every: u32,

    /// Shift instructions read V[Y], as the original interpreter did.
    #[arg(long)]
    legacy_shift: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let rom = match fs::read(&args.rom_path) {
        Ok(rom) => rom,
        Err(e) => {
            eprintln!("Failed to read ROM image: {}", e);
            exit(1);
        }
    };

    let mut machine = Machine::new();
    machine.quirks.shift_reads_vy = args.legacy_shift;

    if let Err(e) = machine.load_program(&rom) {
        eprintln!("Failed to load ROM image: {}", e);
        exit(1);
    }

    log::info!(
        "emulating {} byte ROM from {}",
        rom.len(),
        args.rom_path.display()
    );

    let mut keypad = ConsoleKeypad::new();
    console(&mut machine, &mut keypad, &args);
}

fn console(machine: &mut Machine, keypad: &mut ConsoleKeypad, args: &Args) {
    loop {
        println!(
            "<<<   PC: {:#05X}, I: {:#05X}, V: {:02X?}, {:?}   >>>",
            machine.regs.pc,
            machine.regs.i,
            machine.regs.registers(),
            machine.state(),
        );

        let command = match Command::prompt() {
            Ok(command) => command,
            Err(e) => {
                eprintln!("!> {}", e);
                return;
            }
        };

        if command.is_empty() {
            continue;
        }

        if let Err(e) = execute_command(&command, machine, keypad, args) {
            eprintln!("!> {}", e);
        }
    }
}

fn execute_command(
    command: &Command,
    machine: &mut Machine,
    keypad: &mut ConsoleKeypad,
    args: &Args,
) -> Result<(), CommandError> {
    let mut cmd_args = command.args();

    match cmd_args.next()? {
        "e" => {
            let count = cmd_args.next_parsed_or(1usize)?;
            step_many(machine, keypad, count, None);
        }

        "run" => {
            let limit = cmd_args.next_parsed_or(1_000_000usize)?;
            step_many(machine, keypad, limit, Some(args.tick_every.max(1)));
        }

        "t" => {
            let count = cmd_args.next_parsed_or(1u32)?;
            for _ in 0..count {
                machine.tick_timers();
            }

            println!(
                "DT: {}, ST: {}{}",
                machine.delay_timer(),
                machine.sound_timer(),
                if machine.sound_active() { " (buzzer on)" } else { "" },
            );
        }

        "scr" => println!("{}", screen::render(&machine.framebuffer)),

        "r" => print_registers(machine, keypad),

        "d" => {
            let begin = cmd_args.next_hex_or(PROGRAM_START)?;
            let length = cmd_args.next_hex_or(0x80)?;
            dump_memory(machine, begin, length);
        }

        "k" => {
            let key = cmd_args.next_hex()? as u8;
            let held = keypad.toggle(key);
            println!("key {:x} {}", key & 0xF, if held { "held" } else { "released" });
        }

        "kp" => {
            let key = cmd_args.next_hex()? as u8;
            keypad.queue_press(key);
        }

        "jmp" => machine.regs.pc = cmd_args.next_hex()?,

        "reset" => machine.reset(),

        "q" => exit(0),

        _ => return Err(CommandError::UnknownCommand),
    }

    let unused_arg_count = cmd_args.unused();
    if unused_arg_count != 0 {
        eprintln!("{} unused command arguments!", unused_arg_count);
    }

    Ok(())
}

fn step_many(
    machine: &mut Machine,
    keypad: &mut ConsoleKeypad,
    limit: usize,
    tick_every: Option<u32>,
) {
    for executed in 1..=limit {
        if let Err(e) = machine.step(keypad) {
            eprintln!("!> {}", e);
            println!("Executed {} instructions", executed - 1);
            return;
        }

        if let Some(tick_every) = tick_every {
            if executed % tick_every as usize == 0 {
                machine.tick_timers();
            }
        }
    }

    println!("Executed {} instructions", limit);
}

fn print_registers(machine: &Machine, keypad: &ConsoleKeypad) {
    for (index, value) in machine.regs.registers().iter().enumerate() {
        print!("v{:x}: {:#04X}  ", index, value);
        if index % 8 == 7 {
            println!();
        }
    }

    println!(
        "pc: {:#05X}, i: {:#05X}, dt: {}, st: {}",
        machine.regs.pc,
        machine.regs.i,
        machine.delay_timer(),
        machine.sound_timer(),
    );

    let held: Vec<u8> = keypad.held_keys().collect();
    println!(
        "stack: {:#05X?}, held keys: {:x?}, state: {:?}",
        machine.stack.frames(),
        held,
        machine.state(),
    );
}

fn dump_memory(machine: &Machine, begin: Addr, length: u16) {
    let end = begin.saturating_add(length).min(MEMORY_SIZE as Addr);

    for row_start in (begin..end).step_by(16) {
        print!("{:#05X}:", row_start);

        for addr in row_start..row_start.saturating_add(16).min(end) {
            if let Some(byte) = machine.memory.byte(addr) {
                print!(" {:02X}", byte);
            }
        }

        println!();
    }
}
