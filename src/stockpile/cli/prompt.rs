//! Token-based console input with validation.
//!
//! Input is consumed one whitespace-delimited token at a time, so several answers
//! typed on one line feed successive prompts. [`Prompter::ask_with`] is the single
//! validated-prompt routine: it keeps asking until the parser accepts a token.
//! Numeric answers reject with [`OnReject::DiscardLine`], dropping whatever is left
//! on that input line so one bad line costs exactly one retry. Enumerated and free
//! text answers reject with [`OnReject::KeepLine`] and read on from the next token.

use colored::Colorize;
use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::str::FromStr;
use stockpile::error::{Result, StockpileError};

/// What happens to the rest of the input line after a rejected answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnReject {
    DiscardLine,
    KeepLine,
}

pub struct Prompter<R, W> {
    input: R,
    output: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Prints `prompt` and returns the next token.
    pub fn token(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        self.next_token()
    }

    /// Prompts until `parse` accepts a token. `parse` returns the error line to show
    /// on rejection.
    pub fn ask_with<T, F>(&mut self, prompt: &str, on_reject: OnReject, mut parse: F) -> Result<T>
    where
        F: FnMut(&str) -> std::result::Result<T, String>,
    {
        loop {
            let token = self.token(prompt)?;
            match parse(&token) {
                Ok(value) => return Ok(value),
                Err(message) => {
                    if on_reject == OnReject::DiscardLine {
                        self.discard_line();
                    }
                    writeln!(self.output, "{}", message.red())?;
                }
            }
        }
    }

    /// Prompts until the token parses as `T` and satisfies `accept`. Rejections
    /// discard the rest of the line.
    pub fn ask<T, P>(&mut self, prompt: &str, accept: P, error: &str) -> Result<T>
    where
        T: FromStr,
        P: Fn(&T) -> bool,
    {
        self.ask_with(prompt, OnReject::DiscardLine, |token| match token.parse::<T>() {
            Ok(value) if accept(&value) => Ok(value),
            _ => Err(error.to_string()),
        })
    }

    fn next_token(&mut self) -> Result<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(StockpileError::InputClosed);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }

    fn discard_line(&mut self) {
        self.pending.clear();
    }
}
