//! Property tests for the board model and decision trees.

use proptest::prelude::*;

use rust_ttt::core::{Board, Cell, Grid, Outcome, Player, Position, DIM};
use rust_ttt::{DecisionTree, GameRng, MoveError};

/// Play alternating moves picked by `picks` until the game ends or picks run out.
fn play_out(picks: &[usize]) -> Board {
    let mut board = Board::new();
    let mut player = Player::Human;
    for &pick in picks {
        if board.outcome().is_terminal() {
            break;
        }
        let free: Vec<Position> = board.free_cells().collect();
        let pos = free[pick % free.len()];
        board.apply(pos, player).unwrap();
        player = player.opponent();
    }
    board
}

fn line_owner(grid: &Grid, player: Player) -> bool {
    let target = Cell::from(player);
    Grid::lines().any(|line| line.iter().all(|&p| grid.cell(p) == target))
}

fn arbitrary_grid() -> impl Strategy<Value = Grid> {
    prop::array::uniform3(prop::array::uniform3(prop_oneof![
        Just(Cell::Empty),
        Just(Cell::Human),
        Just(Cell::Ai),
    ]))
    .prop_map(Grid::from_rows)
}

proptest! {
    #[test]
    fn prop_reachable_boards_never_have_two_winners(picks in prop::collection::vec(0usize..9, 0..9)) {
        let board = play_out(&picks);
        let grid = board.grid();

        prop_assert!(!(line_owner(grid, Player::Ai) && line_owner(grid, Player::Human)));

        match board.outcome() {
            Outcome::Win(p) => prop_assert!(line_owner(grid, p)),
            Outcome::Draw => {
                prop_assert!(grid.is_full());
                prop_assert!(!line_owner(grid, Player::Ai) && !line_owner(grid, Player::Human));
            }
            Outcome::InProgress => {
                prop_assert!(!grid.is_full());
                prop_assert!(!line_owner(grid, Player::Ai) && !line_owner(grid, Player::Human));
            }
        }
    }

    #[test]
    fn prop_outcome_matches_line_scan(grid in arbitrary_grid()) {
        let ai = line_owner(&grid, Player::Ai);
        let human = line_owner(&grid, Player::Human);
        let expected = if ai {
            Outcome::Win(Player::Ai)
        } else if human {
            Outcome::Win(Player::Human)
        } else if grid.free_count() == 0 {
            Outcome::Draw
        } else {
            Outcome::InProgress
        };
        prop_assert_eq!(grid.outcome(), expected);
    }

    #[test]
    fn prop_rejected_moves_leave_board_unchanged(
        picks in prop::collection::vec(0usize..9, 0..9),
        row in 0usize..6,
        col in 0usize..6,
    ) {
        let mut board = play_out(&picks);
        let before = board.clone();

        match board.apply_move(row, col, Player::Human) {
            Ok(()) => {
                prop_assert!(row < DIM && col < DIM);
                prop_assert!(before.grid().cell(Position::new(row, col)).is_empty());
                prop_assert_eq!(board.grid().free_count() + 1, before.grid().free_count());
            }
            Err(MoveError::OutOfBounds { .. }) => {
                prop_assert!(row >= DIM || col >= DIM);
                prop_assert_eq!(&board, &before);
            }
            Err(MoveError::AlreadyOccupied { .. }) => {
                prop_assert!(!before.grid().cell(Position::new(row, col)).is_empty());
                prop_assert_eq!(&board, &before);
            }
        }
    }

    #[test]
    fn prop_score_bounded_by_leaves(
        picks in prop::collection::vec(0usize..9, 0..5),
        seed in any::<u64>(),
        branching in 1usize..4,
    ) {
        let board = play_out(&picks);
        prop_assume!(!board.outcome().is_terminal());

        let choice = board.free_cells().next().unwrap();
        let mut tree = DecisionTree::for_candidate(&board, choice).unwrap();
        tree.build(&mut GameRng::new(seed), branching).unwrap();

        let stats = tree.stats();
        let leaves = stats.leaf_count as i64;
        let score = tree.score();
        prop_assert!(-leaves <= score && score <= leaves);
        prop_assert_eq!(score, stats.ai_wins as i64 - stats.human_wins as i64);

        for (_, node) in tree.iter() {
            prop_assert_eq!(node.children.is_empty(), node.is_terminal());
            prop_assert!(node.children.len() <= branching);
        }
    }
}
