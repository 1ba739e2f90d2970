use std::{
    error::Error,
    io::{self, Write},
    str::FromStr,
};

use anyhow::anyhow;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommandError {
    // Not thrown by the arg reader itself
    #[error("Unknown command")]
    UnknownCommand,

    #[error("Missing argument {0}")]
    MissingArgument(usize),

    #[error("Bad argument ({0})")]
    ParseError(String),
}

pub struct Command(String);

impl Command {
    pub fn prompt() -> anyhow::Result<Self> {
        print!("> ");
        io::stdout().flush()?;

        let line = io::stdin()
            .lines()
            .next()
            .ok_or_else(|| anyhow!("End of input"))?
            .map_err(|e| anyhow!("Couldn't read command from stdin: {}", e))?;

        Ok(Self(line))
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    pub fn args(&self) -> CommandArgs<impl Iterator<Item = &str>> {
        CommandArgs {
            iter: self.0.split_whitespace(),
            index: 0,
        }
    }
}

pub struct CommandArgs<'a, I>
where
    I: Iterator<Item = &'a str>,
{
    iter: I,
    index: usize,
}

impl<'a, I> CommandArgs<'a, I>
where
    I: Iterator<Item = &'a str>,
{
    pub fn next(&mut self) -> Result<&'a str, CommandError> {
        self.index += 1;

        self.iter
            .next()
            .ok_or_else(|| CommandError::MissingArgument(self.index))
    }

    /// Parse the next argument, or fall back to `default` when it is absent.
    pub fn next_parsed_or<T>(&mut self, default: T) -> Result<T, CommandError>
    where
        T: FromStr,
        <T as FromStr>::Err: Error + 'static,
    {
        match self.iter.next() {
            Some(arg_str) => {
                self.index += 1;
                T::from_str(arg_str).map_err(|e| CommandError::ParseError(e.to_string()))
            }
            None => Ok(default),
        }
    }

    /// Addresses and keys read as hex, with or without a `0x` prefix.
    pub fn next_hex(&mut self) -> Result<u16, CommandError> {
        let arg_str = self.next()?;

        u16::from_str_radix(arg_str.trim_start_matches("0x"), 16)
            .map_err(|e| CommandError::ParseError(e.to_string()))
    }

    pub fn next_hex_or(&mut self, default: u16) -> Result<u16, CommandError> {
        match self.iter.next() {
            Some(arg_str) => {
                self.index += 1;
                u16::from_str_radix(arg_str.trim_start_matches("0x"), 16)
                    .map_err(|e| CommandError::ParseError(e.to_string()))
            }
            None => Ok(default),
        }
    }

    pub fn unused(self) -> usize {
        self.iter.count()
    }
}
