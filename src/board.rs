use std::fmt;

use crate::config::PEG_LABELS;
use crate::error::PegError;
use crate::peg::Peg;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PegId {
    A,
    B,
    C,
}

impl PegId {
    pub const ALL: [PegId; 3] = [PegId::A, PegId::B, PegId::C];

    fn index(self) -> usize {
        match self {
            PegId::A => 0,
            PegId::B => 1,
            PegId::C => 2,
        }
    }

    pub fn label(self) -> char {
        PEG_LABELS[self.index()]
    }
}

impl fmt::Display for PegId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The three pegs of a puzzle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pegs: [Peg; 3],
}

impl Board {
    pub fn new() -> Self {
        Self {
            pegs: PEG_LABELS.map(Peg::new),
        }
    }

    /// Clears every peg and stacks disks `height..=1` on peg A, largest at the bottom.
    pub fn reset(&mut self, height: u32) {
        for peg in &mut self.pegs {
            peg.clear();
        }
        let first = &mut self.pegs[PegId::A.index()];
        for disk in (1..=height).rev() {
            let pushed = first.push(disk);
            debug_assert!(pushed.is_ok(), "restocking peg A: {:?}", pushed);
        }
    }

    pub fn peg(&self, id: PegId) -> &Peg {
        &self.pegs[id.index()]
    }

    pub fn pegs(&self) -> impl Iterator<Item = &Peg> {
        self.pegs.iter()
    }

    /// Moves the top disk of `from` onto `to` and returns its width.
    /// The board is left untouched when the move is illegal.
    pub fn move_disk(&mut self, from: PegId, to: PegId) -> Result<u32, PegError> {
        let disk = self.pegs[from.index()].pop()?;
        if let Err(err) = self.pegs[to.index()].push(disk) {
            let restored = self.pegs[from.index()].push(disk);
            debug_assert!(restored.is_ok(), "undoing move: {:?}", restored);
            return Err(err);
        }
        Ok(disk)
    }

    /// Height of the tallest peg.
    pub fn max_height(&self) -> usize {
        self.pegs.iter().map(Peg::len).max().unwrap_or(0)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
