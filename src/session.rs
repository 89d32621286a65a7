//! The interactive session: ask for a tower, solve it, offer to save the
//! transcript, and offer another round.
//!
//! The session is a state machine driven by [`Session::run`]. Every re-prompt
//! is a loop iteration, so a long session never deepens the call stack.

use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::board::Board;
use crate::config::{SessionConfig, COLUMN_GAP, HELP_TOKEN, TRANSCRIPT_EXTENSION};
use crate::error::{Error, Result};
use crate::prompt::Prompter;
use crate::transcript::write_solution;

const HEIGHT_QUESTION: &str =
    "How many disks would you like for your Towers of Hanoi? [?] for help";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    AwaitingHeight,
    ShowingIntro(u32),
    Solving(u32),
    AwaitingSaveDecision(u32),
    AwaitingReplayDecision,
    Terminated,
}

pub struct Session<R, W> {
    prompter: Prompter<R, W>,
    board: Board,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, config: SessionConfig) -> Self {
        Self {
            prompter: Prompter::new(input, output, config),
            board: Board::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn into_inner(self) -> (R, W) {
        self.prompter.into_inner()
    }

    /// Runs rounds until the user declines another one or input runs out.
    pub fn run(&mut self) -> Result<()> {
        let mut state = State::AwaitingHeight;
        while state != State::Terminated {
            state = match self.step(state) {
                Err(Error::InputClosed) => {
                    debug!("input closed, ending session");
                    self.farewell()?;
                    State::Terminated
                }
                other => other?,
            };
        }
        Ok(())
    }

    /// Performs the work of `state` and returns the state that follows it.
    pub fn step(&mut self, state: State) -> Result<State> {
        debug!(?state, "entering state");
        let next = match state {
            State::AwaitingHeight => State::ShowingIntro(self.read_height()?),
            State::ShowingIntro(height) => {
                self.intro(Some(height))?;
                State::Solving(height)
            }
            State::Solving(height) => {
                self.solve(height)?;
                State::AwaitingSaveDecision(height)
            }
            State::AwaitingSaveDecision(height) => {
                self.offer_save(height)?;
                State::AwaitingReplayDecision
            }
            State::AwaitingReplayDecision => {
                self.prompter
                    .say("Would you like to solve another Towers of Hanoi puzzle? ")?;
                if self.prompter.ask_yes_no()? {
                    self.prompter.say_line("")?;
                    State::AwaitingHeight
                } else {
                    self.farewell()?;
                    State::Terminated
                }
            }
            State::Terminated => State::Terminated,
        };
        Ok(next)
    }

    fn read_height(&mut self) -> Result<u32> {
        let mut ask = true;
        loop {
            if ask {
                self.prompter.say_line(HEIGHT_QUESTION)?;
            }
            ask = true;

            let line = self.prompter.read_line()?;
            let answer = line.trim();
            if answer.is_empty() {
                ask = false;
                continue;
            }
            if answer.starts_with(HELP_TOKEN) {
                self.intro(None)?;
                continue;
            }
            match answer.parse::<i64>().map(u32::try_from) {
                Ok(Ok(height)) if height >= 1 => return Ok(height),
                Ok(Ok(_)) => self
                    .prompter
                    .warn("You must have at least one disk for this puzzle.")?,
                Ok(Err(_)) if answer.starts_with('-') => self
                    .prompter
                    .warn("You must have at least one disk for this puzzle.")?,
                Ok(Err(_)) | Err(_) => self.prompter.warn("Please enter a number.")?,
            }
        }
    }

    /// The rules of the puzzle. `None` describes a tower of undecided height.
    fn intro(&mut self, height: Option<u32>) -> Result<()> {
        let disks = match height {
            Some(1) => "1 golden disk".to_string(),
            Some(n) => format!("{} golden disks", n),
            None => "a number of golden disks".to_string(),
        };
        let text = format!(
            "\tThe Towers of Hanoi present themselves as three diamond pegs.\n\
             One of the pegs has {} stacked on top of it.\n\
             These disks decrease in size, with the largest disks\n\
             at the bottom of peg, and the smallest at the top.\n\
             \n\
             \tYour goal is to move every disk from this peg onto another peg.\n\
             Unfortunately, only one disk can be moved at a time,\n\
             and a disk can only be placed either on an empty peg,\n\
             or atop a larger disk.\n",
            disks
        );
        self.prompter.say_line(&text)
    }

    fn solve(&mut self, height: u32) -> Result<()> {
        warn_if_too_wide(height);
        write_solution(&mut self.board, height, self.prompter.output())?;
        self.prompter.output().flush()?;
        Ok(())
    }

    fn offer_save(&mut self, height: u32) -> Result<()> {
        self.prompter.say("Would you like to save this solution? ")?;
        if !self.prompter.ask_yes_no()? {
            return Ok(());
        }

        loop {
            self.prompter
                .say("Please enter the name of the file you'd like to save to: ")?;
            let name = self.prompter.read_line()?;
            let Some(path) = destination(&name) else {
                self.prompter
                    .warn("A file name is required. Please try again.")?;
                continue;
            };
            let shown = path.display().to_string();

            if path.exists() {
                self.prompter.say(&format!(
                    "This file already exists. Are you okay with overwriting {}? ",
                    shown
                ))?;
                if !self.prompter.ask_yes_no()? {
                    self.prompter
                        .say_line("Okay. Please try again with a new file name.")?;
                    continue;
                }
            }

            match self.save_to(&path, height) {
                Ok(()) => {
                    info!(path = %shown, height, "solution saved");
                    self.prompter.say_line("")?;
                    self.prompter
                        .notice(&format!("- solution successfully saved as {} -", shown))?;
                    self.prompter.say_line("")?;
                    return Ok(());
                }
                Err(err) => {
                    warn!(path = %shown, error = %err, "could not save solution");
                    self.prompter.warn(&format!(
                        "Could not save to {}. Please try again.",
                        shown
                    ))?;
                }
            }
        }
    }

    /// Solves again straight into the file. The handle lives only for this call.
    fn save_to(&mut self, path: &Path, height: u32) -> Result<()> {
        let mut file = BufWriter::new(File::create(path)?);
        write_solution(&mut self.board, height, &mut file)?;
        file.flush()?;
        Ok(())
    }

    fn farewell(&mut self) -> Result<()> {
        self.prompter.say_line("")?;
        self.prompter.say_line("Goodbye!")?;
        self.prompter.output().flush()?;
        Ok(())
    }
}

/// Where a transcript named `name` is written: surrounding whitespace
/// trimmed and the `.txt` suffix enforced. `None` for a blank name.
pub fn destination(name: &str) -> Option<PathBuf> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    if name.ends_with(TRANSCRIPT_EXTENSION) {
        Some(PathBuf::from(name))
    } else {
        Some(PathBuf::from(format!("{}{}", name, TRANSCRIPT_EXTENSION)))
    }
}

fn warn_if_too_wide(height: u32) {
    let width = 3 * height as usize + 2 * COLUMN_GAP.len();
    if let Ok((columns, _)) = crossterm::terminal::size() {
        if width > columns as usize {
            warn!(
                height,
                width,
                columns, "rendering is wider than the terminal and will wrap"
            );
        }
    }
}

impl Session<io::StdinLock<'static>, io::StdoutLock<'static>> {
    /// A session on the process's own stdin and stdout.
    pub fn stdio(config: SessionConfig) -> Self {
        Session::new(io::stdin().lock(), io::stdout().lock(), config)
    }
}
