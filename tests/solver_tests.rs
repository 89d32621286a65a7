//! Solver tests - move legality and optimality over sampled tower heights

use rand::Rng;

use hanoi_puzzle::{move_count, moves, Board, PegId};

#[test]
fn test_no_move_covers_a_smaller_disk() {
    let mut rng = rand::thread_rng();

    for _ in 0..20 {
        let height = rng.gen_range(1..=14);
        let mut board = Board::new();
        board.reset(height);

        for step in moves(height, PegId::A, PegId::C, PegId::B) {
            if let Some(top) = board.peg(step.to).top() {
                assert!(
                    step.disk < top,
                    "height {}: disk {} placed on disk {}",
                    height,
                    step.disk,
                    top
                );
            }
            assert_eq!(board.peg(step.from).top(), Some(step.disk));
            board.move_disk(step.from, step.to).unwrap();
        }
    }
}

#[test]
fn test_every_height_is_solved_optimally() {
    let mut rng = rand::thread_rng();

    for _ in 0..10 {
        let height = rng.gen_range(1..=16);
        let mut board = Board::new();
        board.reset(height);

        let mut count: u128 = 0;
        for step in moves(height, PegId::A, PegId::C, PegId::B) {
            board.move_disk(step.from, step.to).unwrap();
            count += 1;
        }

        assert_eq!(Some(count), move_count(height));
        let expected: Vec<u32> = (1..=height).rev().collect();
        assert_eq!(board.peg(PegId::C).disks(), expected.as_slice());
        assert!(board.peg(PegId::A).is_empty());
        assert!(board.peg(PegId::B).is_empty());
    }
}

#[test]
fn test_solver_targets_any_peg() {
    let mut board = Board::new();
    board.reset(5);
    for step in moves(5, PegId::A, PegId::B, PegId::C) {
        board.move_disk(step.from, step.to).unwrap();
    }
    assert_eq!(board.peg(PegId::B).disks(), &[5, 4, 3, 2, 1]);
}

#[test]
fn test_two_disk_scenario() {
    let steps: Vec<(u32, char, char)> = moves(2, PegId::A, PegId::C, PegId::B)
        .map(|m| (m.disk, m.from.label(), m.to.label()))
        .collect();
    assert_eq!(steps, vec![(1, 'A', 'B'), (2, 'A', 'C'), (1, 'B', 'C')]);
}
