use std::fmt;

use crate::board::PegId;

/// A single disk relocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub disk: u32,
    pub from: PegId,
    pub to: PegId,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Move disk {} from peg {} to peg {}:",
            self.disk, self.from, self.to
        )
    }
}

#[derive(Debug, Clone, Copy)]
enum Frame {
    Transfer {
        count: u32,
        from: PegId,
        to: PegId,
        spare: PegId,
    },
    Emit(Move),
}

/// Lazily yields the optimal move sequence. Pending work is kept on an
/// explicit stack instead of the call stack.
#[derive(Debug, Clone)]
pub struct Moves {
    stack: Vec<Frame>,
}

impl Iterator for Moves {
    type Item = Move;

    fn next(&mut self) -> Option<Move> {
        while let Some(frame) = self.stack.pop() {
            match frame {
                Frame::Emit(mv) => return Some(mv),
                Frame::Transfer { count: 0, .. } => {}
                Frame::Transfer {
                    count,
                    from,
                    to,
                    spare,
                } => {
                    // Pushed in reverse of execution order.
                    self.stack.push(Frame::Transfer {
                        count: count - 1,
                        from: spare,
                        to,
                        spare: from,
                    });
                    self.stack.push(Frame::Emit(Move {
                        disk: count,
                        from,
                        to,
                    }));
                    self.stack.push(Frame::Transfer {
                        count: count - 1,
                        from,
                        to: spare,
                        spare: to,
                    });
                }
            }
        }
        None
    }
}

/// Moves that carry `count` disks from `from` to `to`, parking on `spare`.
pub fn moves(count: u32, from: PegId, to: PegId, spare: PegId) -> Moves {
    Moves {
        stack: vec![Frame::Transfer {
            count,
            from,
            to,
            spare,
        }],
    }
}

/// `2^count - 1`, or `None` when it does not fit in a `u128`.
pub fn move_count(count: u32) -> Option<u128> {
    match count {
        128 => Some(u128::MAX),
        _ => 1u128.checked_shl(count).map(|n| n - 1),
    }
}
