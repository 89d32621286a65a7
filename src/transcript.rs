use std::io::Write;

use tracing::debug;

use crate::board::{Board, PegId};
use crate::error::Result;
use crate::solver::{move_count, moves};

/// Resets `board` to a `height`-disk tower and writes its full solution to
/// `out`. Returns the number of moves written.
pub fn write_solution<W: Write>(board: &mut Board, height: u32, out: &mut W) -> Result<u64> {
    board.reset(height);
    let width = height as usize;

    let steps = match move_count(height) {
        Some(count) => count.to_string(),
        None => format!("2^{} - 1", height),
    };
    let plural = if move_count(height) == Some(1) { "" } else { "s" };
    writeln!(
        out,
        "Here is how to solve a {}-disk tall Towers of Hanoi puzzle in {} step{}:",
        height, steps, plural
    )?;
    write!(out, "{}", board.render(width))?;

    let mut written = 0;
    for step in moves(height, PegId::A, PegId::C, PegId::B) {
        writeln!(out)?;
        writeln!(out, "{}", step)?;
        board.move_disk(step.from, step.to)?;
        write!(out, "{}", board.render(width))?;
        written += 1;
    }
    writeln!(out)?;

    debug!(height, moves = written, "solution written");
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transcript(height: u32) -> (String, Board) {
        let mut board = Board::new();
        let mut out = Vec::new();
        write_solution(&mut board, height, &mut out).unwrap();
        (String::from_utf8(out).unwrap(), board)
    }

    #[test]
    fn single_disk_transcript() {
        let (text, board) = transcript(1);
        let expected = concat!(
            "Here is how to solve a 1-disk tall Towers of Hanoi puzzle in 1 step:\n",
            "-        \n",
            "A   B   C\n",
            "\n",
            "Move disk 1 from peg A to peg C:\n",
            "        -\n",
            "A   B   C\n",
            "\n",
        );
        assert_eq!(text, expected);
        assert_eq!(board.peg(PegId::C).disks(), &[1]);
    }

    #[test]
    fn two_disk_transcript_lists_three_moves() {
        let (text, board) = transcript(2);
        assert!(text.starts_with(
            "Here is how to solve a 2-disk tall Towers of Hanoi puzzle in 3 steps:\n"
        ));
        let steps: Vec<&str> = text.lines().filter(|l| l.starts_with("Move")).collect();
        assert_eq!(
            steps,
            vec![
                "Move disk 1 from peg A to peg B:",
                "Move disk 2 from peg A to peg C:",
                "Move disk 1 from peg B to peg C:",
            ]
        );
        assert_eq!(board.peg(PegId::C).disks(), &[2, 1]);
    }

    #[test]
    fn rerunning_restarts_from_a_fresh_tower() {
        let mut board = Board::new();
        let mut first = Vec::new();
        let mut second = Vec::new();
        assert_eq!(write_solution(&mut board, 3, &mut first).unwrap(), 7);
        assert_eq!(write_solution(&mut board, 3, &mut second).unwrap(), 7);
        assert_eq!(first, second);
    }
}
