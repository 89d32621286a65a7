//! Fixed layout constants and the few runtime settings of a session.

use std::env;
use std::io::{self, IsTerminal};

/// Labels of the three pegs, in render order.
pub const PEG_LABELS: [char; 3] = ['A', 'B', 'C'];

/// Spacing between two rendered peg columns.
pub const COLUMN_GAP: &str = "   ";

/// Typed at the height prompt to show the rules again.
pub const HELP_TOKEN: char = '?';

/// Suffix every saved transcript carries.
pub const TRANSCRIPT_EXTENSION: &str = ".txt";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionConfig {
    /// Style prompts and status messages with terminal colors.
    pub color: bool,
}

impl SessionConfig {
    /// Colors are used only when stdout is a terminal and `NO_COLOR` is unset.
    pub fn detect() -> Self {
        let color = io::stdout().is_terminal() && env::var_os("NO_COLOR").is_none();
        Self { color }
    }

    pub fn plain() -> Self {
        Self { color: false }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_distinct() {
        assert_ne!(PEG_LABELS[0], PEG_LABELS[1]);
        assert_ne!(PEG_LABELS[1], PEG_LABELS[2]);
        assert_ne!(PEG_LABELS[0], PEG_LABELS[2]);
    }

    #[test]
    fn plain_config_has_no_color() {
        assert!(!SessionConfig::plain().color);
    }
}
