//! Line-oriented console I/O: questions, answers and status messages.

use std::io::{BufRead, Write};

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};

use crate::config::SessionConfig;
use crate::error::{Error, Result};

pub struct Prompter<R, W> {
    input: R,
    output: W,
    config: SessionConfig,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W, config: SessionConfig) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Writes `text` as is and flushes, so a question is visible before
    /// the next read blocks.
    pub fn say(&mut self, text: &str) -> Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    pub fn say_line(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// A complaint about the last answer.
    pub fn warn(&mut self, text: &str) -> Result<()> {
        self.styled_line(text, Color::Red)
    }

    /// A status report, such as a completed save.
    pub fn notice(&mut self, text: &str) -> Result<()> {
        self.styled_line(text, Color::Green)
    }

    fn styled_line(&mut self, text: &str, color: Color) -> Result<()> {
        if self.config.color {
            queue!(
                self.output,
                SetForegroundColor(color),
                Print(text),
                ResetColor,
                Print("\n")
            )?;
        } else {
            writeln!(self.output, "{}", text)?;
        }
        self.output.flush()?;
        Ok(())
    }

    /// Next input line without its line terminator.
    pub fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Error::InputClosed);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    /// Reads answers until one starts with `y` or `n`. Blank lines are
    /// skipped silently; anything else gets a complaint.
    pub fn ask_yes_no(&mut self) -> Result<bool> {
        loop {
            let answer = self.read_line()?;
            match answer.chars().next() {
                Some('y') => return Ok(true),
                Some('n') => return Ok(false),
                None => {}
                Some(_) => self.warn("Please respond with [y]es or [n]o.")?,
            }
        }
    }
}
