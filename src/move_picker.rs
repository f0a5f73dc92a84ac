// Copyright (C) 2020-2026 Andy Kurnia.

use super::{board, game_state, movegen};
use rand::prelude::*;

pub trait Player {
    // None ends the game for this player.
    fn pick(
        &mut self,
        board: &board::Board,
        phase: game_state::GamePhase,
        moves: &movegen::Moves,
    ) -> Option<(board::Place, String)>;
}

// first place in place order, first word there.
pub struct FirstPlayer;

impl Player for FirstPlayer {
    fn pick(
        &mut self,
        _board: &board::Board,
        _phase: game_state::GamePhase,
        moves: &movegen::Moves,
    ) -> Option<(board::Place, String)> {
        moves
            .iter()
            .find_map(|(&place, words)| words.first().map(|word| (place, word.clone())))
    }
}

// most letters, earlier place wins a tie.
pub struct LongestWordPlayer;

impl Player for LongestWordPlayer {
    fn pick(
        &mut self,
        _board: &board::Board,
        _phase: game_state::GamePhase,
        moves: &movegen::Moves,
    ) -> Option<(board::Place, String)> {
        let mut best: Option<(board::Place, &String)> = None;
        for (&place, words) in moves {
            for word in words {
                let len = word.chars().count();
                if best.is_none_or(|(_, best_word)| len > best_word.chars().count()) {
                    best = Some((place, word));
                }
            }
        }
        best.map(|(place, word)| (place, word.clone()))
    }
}

pub struct RandomPlayer {
    rng: rand_chacha::ChaCha20Rng,
}

impl RandomPlayer {
    pub fn new() -> Self {
        Self {
            rng: rand_chacha::ChaCha20Rng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: rand_chacha::ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for RandomPlayer {
    // uniform over (place, word) pairs.
    fn pick(
        &mut self,
        _board: &board::Board,
        _phase: game_state::GamePhase,
        moves: &movegen::Moves,
    ) -> Option<(board::Place, String)> {
        let num_words = moves.values().map(Vec::len).sum::<usize>();
        if num_words == 0 {
            return None;
        }
        let mut idx = self.rng.random_range(0..num_words);
        for (&place, words) in moves {
            if idx < words.len() {
                return Some((place, words[idx].clone()));
            }
            idx -= words.len();
        }
        None
    }
}

// generates this turn's moves and lets the player choose one of them. the
// chosen move remembers everything that was available.
pub fn pick_a_move(
    player: &mut dyn Player,
    move_generator: &mut movegen::MoveGenerator,
    board_snapshot: &movegen::BoardSnapshot<'_>,
    phase: game_state::GamePhase,
) -> Option<movegen::Move> {
    move_generator.gen_moves(board_snapshot, phase);
    let (place, word) = player.pick(board_snapshot.board, phase, &move_generator.moves)?;
    tracing::debug!(%place, %word, num_places = move_generator.moves.len(), "picked");
    Some(movegen::Move::new_with_alternatives(
        place,
        &word,
        std::mem::take(&mut move_generator.moves),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use board::{Direction, Place, Position};

    fn place(row: i8, col: i8, count: i8) -> Place {
        Place::new(Position::new(row, col), Direction::Horizontal, count)
    }

    fn sample_moves() -> movegen::Moves {
        let mut moves = movegen::Moves::new();
        moves.insert(place(3, 3, 4), vec!["zehn".into(), "zeit".into()]);
        moves.insert(place(3, 1, 5), vec!["erzen".into()]);
        moves.insert(place(4, 0, 5), vec!["ahnen".into()]);
        moves
    }

    #[test]
    fn first_and_longest() {
        let board = board::Board::new(crate::matrix::Dim { rows: 8, cols: 8 });
        let moves = sample_moves();
        assert_eq!(
            FirstPlayer.pick(&board, game_state::GamePhase::Liberal, &moves),
            Some((place(3, 1, 5), "erzen".into()))
        );
        assert_eq!(
            LongestWordPlayer.pick(&board, game_state::GamePhase::Liberal, &moves),
            Some((place(3, 1, 5), "erzen".into()))
        );
        let empty = movegen::Moves::new();
        assert_eq!(
            FirstPlayer.pick(&board, game_state::GamePhase::Liberal, &empty),
            None
        );
        assert_eq!(
            LongestWordPlayer.pick(&board, game_state::GamePhase::Liberal, &empty),
            None
        );
    }

    #[test]
    fn random_picks_are_available_and_reproducible() {
        let board = board::Board::new(crate::matrix::Dim { rows: 8, cols: 8 });
        let moves = sample_moves();
        let mut a = RandomPlayer::with_seed(42);
        let mut b = RandomPlayer::with_seed(42);
        for _ in 0..20 {
            let picked = a.pick(&board, game_state::GamePhase::Liberal, &moves);
            assert_eq!(picked, b.pick(&board, game_state::GamePhase::Liberal, &moves));
            let (place, word) = picked.unwrap();
            assert!(moves[&place].contains(&word));
        }
        assert_eq!(
            a.pick(&board, game_state::GamePhase::Liberal, &movegen::Moves::new()),
            None
        );
    }
}
