//! ASCII rendering of the board.
//!
//! Each peg is a column `column_width` characters wide. Disks are drawn as
//! right-aligned dashes from the tallest stack down to the bottom row, and a
//! final row carries the centered peg labels.

use std::fmt;

use crate::board::Board;
use crate::config::COLUMN_GAP;

/// Centers `text` in `width` columns. An odd leftover space goes on the right.
pub fn center(text: &str, width: usize) -> String {
    format!("{:^width$}", text, width = width)
}

/// A board paired with the column width it is drawn at.
pub struct Rendering<'a> {
    board: &'a Board,
    column_width: usize,
}

impl Board {
    pub fn render(&self, column_width: usize) -> Rendering<'_> {
        Rendering {
            board: self,
            column_width,
        }
    }
}

impl fmt::Display for Rendering<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.column_width;

        for row in (0..self.board.max_height()).rev() {
            let cells: Vec<String> = self
                .board
                .pegs()
                // A peg shorter than this row simply has no disk here.
                .map(|peg| peg.disk_glyph(row).unwrap_or_default())
                .map(|glyph| format!("{:>width$}", glyph, width = width))
                .collect();
            writeln!(f, "{}", cells.join(COLUMN_GAP))?;
        }

        let labels: Vec<String> = self
            .board
            .pegs()
            .map(|peg| center(&peg.label().to_string(), width))
            .collect();
        writeln!(f, "{}", labels.join(COLUMN_GAP))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::PegId;

    #[test]
    fn center_puts_extra_space_right() {
        assert_eq!(center("A", 3), " A ");
        assert_eq!(center("A", 4), " A  ");
        assert_eq!(center("A", 1), "A");
        assert_eq!(center("AB", 5), " AB  ");
    }

    #[test]
    fn center_keeps_text_wider_than_field() {
        assert_eq!(center("ABC", 1), "ABC");
    }

    #[test]
    fn single_disk_board() {
        let mut board = Board::new();
        board.reset(1);
        assert_eq!(board.render(1).to_string(), "-        \nA   B   C\n");
    }

    #[test]
    fn full_tower_sits_under_column_a() {
        let mut board = Board::new();
        board.reset(3);
        let blank = " ".repeat(12);
        let expected = format!("  -{blank}\n --{blank}\n---{blank}\n A     B     C \n");
        assert_eq!(board.render(3).to_string(), expected);
    }

    #[test]
    fn shorter_pegs_render_blank_cells() {
        let mut board = Board::new();
        board.reset(3);
        board.move_disk(PegId::A, PegId::C).unwrap();
        board.move_disk(PegId::A, PegId::B).unwrap();
        let expected = concat!(
            "---    --     -\n",
            " A     B     C \n",
        );
        assert_eq!(board.render(3).to_string(), expected);
    }

    #[test]
    fn empty_board_renders_only_labels() {
        let board = Board::new();
        assert_eq!(board.render(1).to_string(), "A   B   C\n");
    }
}
