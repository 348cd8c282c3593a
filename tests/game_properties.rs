//! Property tests for the evaluator and the history invariants.

use proptest::prelude::*;
use tictactoe::rules::{evaluate, Outcome, LINES};
use tictactoe::{Board, Cell, Game, Player, Status};

#[derive(Debug, Clone, Copy)]
enum Command {
    Play(usize),
    Jump(usize),
}

fn command() -> impl Strategy<Value = Command> {
    prop_oneof![
        3 => (0usize..11).prop_map(Command::Play),
        1 => (0usize..11).prop_map(Command::Jump),
    ]
}

fn cell() -> impl Strategy<Value = Cell> {
    prop_oneof![Just(Cell::Empty), Just(Cell::X), Just(Cell::O)]
}

fn arbitrary_board() -> impl Strategy<Value = Board> {
    prop::array::uniform9(cell()).prop_map(Board::from_cells)
}

fn changed_cells(before: &Board, after: &Board) -> Vec<usize> {
    (0..9)
        .filter(|&i| before.get_index(i) != after.get_index(i))
        .collect()
}

proptest! {
    /// A reported win names a line fully held by the winner; no win means no uniform line.
    #[test]
    fn prop_evaluate_is_sound(board in arbitrary_board()) {
        match evaluate(&board) {
            Outcome::Win { player, line } => {
                prop_assert!(LINES.contains(&line));
                for pos in line {
                    prop_assert_eq!(board.get(pos), Cell::from(player));
                }
            }
            Outcome::NoWinner => {
                for line in LINES {
                    let [a, b, c] = line.map(|pos| board.get(pos));
                    prop_assert!(a.is_empty() || a != b || a != c);
                }
            }
        }
    }

    /// Invariants hold after every command in a random session.
    #[test]
    fn prop_history_invariants(commands in prop::collection::vec(command(), 0..40)) {
        let mut game = Game::new();

        for command in commands {
            let before = game.clone();

            match command {
                Command::Play(index) => {
                    let result = game.play_cell(index);
                    if result.is_ok() {
                        prop_assert_eq!(game.len(), before.current_step() + 2);
                        prop_assert_eq!(game.current_step(), game.len() - 1);
                        prop_assert_eq!(changed_cells(before.board(), game.board()), vec![index]);
                        prop_assert_eq!(game.next_player(), before.next_player().opponent());
                        prop_assert_eq!(
                            game.board().get_index(index),
                            Some(Cell::from(before.next_player()))
                        );
                    } else {
                        prop_assert_eq!(&game, &before);
                    }
                    if game.len() < before.len() {
                        prop_assert!(before.current_step() < before.len() - 1);
                    }
                }
                Command::Jump(step) => {
                    let result = game.jump_to(step);
                    prop_assert_eq!(game.history(), before.history());
                    if step < before.len() {
                        prop_assert!(result.is_ok());
                        prop_assert_eq!(game.current_step(), step);
                    } else {
                        prop_assert!(result.is_err());
                        prop_assert_eq!(&game, &before);
                    }
                }
            }

            // Alternation
            prop_assert_eq!(game.next_player() == Player::X, game.current_step() % 2 == 0);

            // Status is a pure query
            prop_assert_eq!(game.status(), game.status());

            // Each entry adds exactly one mark to its predecessor
            for pair in game.history().windows(2) {
                let changed = changed_cells(pair[0].board(), pair[1].board());
                prop_assert_eq!(changed.len(), 1);
                prop_assert_eq!(pair[0].board().get_index(changed[0]), Some(Cell::Empty));
            }

            // Winning line stored per entry agrees with the evaluator
            for entry in game.history() {
                prop_assert_eq!(entry.winning_line(), evaluate(entry.board()).line());
            }

            if let Status::InProgress(player) = game.status() {
                prop_assert_eq!(player, game.next_player());
            }
        }
    }
}
