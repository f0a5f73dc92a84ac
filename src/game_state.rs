// Copyright (C) 2020-2026 Andy Kurnia.

use super::{board, error, game_config, movegen};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "phase")]
pub enum GamePhase {
    #[serde(rename = "restricted")]
    Restricted { direction: board::Direction },
    #[serde(rename = "liberal")]
    Liberal,
    #[serde(rename = "knockout")]
    KnockOut,
}

impl GamePhase {
    // phase in which `player` moves during `turn`.
    pub fn at(game_config: &game_config::GameConfig, turn: u16, player: u8) -> Self {
        let restricted_turns = game_config.restricted_turns();
        if turn < restricted_turns {
            GamePhase::Restricted {
                direction: board::Direction::for_player(player),
            }
        } else if turn - restricted_turns < game_config.liberal_turns() {
            GamePhase::Liberal
        } else {
            GamePhase::KnockOut
        }
    }

    // phases only move forward, knock-out is final.
    pub fn next(self, game_config: &game_config::GameConfig, turn: u16, player: u8) -> Self {
        match (self, Self::at(game_config, turn, player)) {
            (GamePhase::KnockOut, _) => GamePhase::KnockOut,
            (GamePhase::Liberal, GamePhase::Restricted { .. }) => GamePhase::Liberal,
            (_, next) => next,
        }
    }

    pub fn directions(&self) -> &'static [board::Direction] {
        match self {
            GamePhase::Restricted {
                direction: board::Direction::Horizontal,
            } => &[board::Direction::Horizontal],
            GamePhase::Restricted {
                direction: board::Direction::Vertical,
            } => &[board::Direction::Vertical],
            GamePhase::Liberal => &board::Direction::ALL,
            GamePhase::KnockOut => &[],
        }
    }

    pub fn min_word_len(&self, game_config: &game_config::GameConfig) -> Option<i8> {
        match self {
            GamePhase::Restricted { .. } => Some(game_config.restricted_min_len()),
            GamePhase::Liberal => Some(game_config.liberal_min_len()),
            GamePhase::KnockOut => None,
        }
    }

    #[inline(always)]
    pub fn is_over(&self) -> bool {
        *self == GamePhase::KnockOut
    }
}

#[derive(Clone)]
pub struct GameState<'a> {
    pub game_config: &'a game_config::GameConfig,
    pub board: board::Board,
    pub turn: u16,
    pub player: u8,
    pub phase: GamePhase,
    pub history: Vec<movegen::Move>,
}

impl<'a> GameState<'a> {
    pub fn new(game_config: &'a game_config::GameConfig) -> Self {
        Self {
            game_config,
            board: game_config.new_board(),
            turn: 0,
            player: 0,
            phase: GamePhase::at(game_config, 0, 0),
            history: Vec::new(),
        }
    }

    pub fn play(&mut self, play: movegen::Move) -> Result<(), error::MoveError> {
        if self.phase.is_over() {
            return Err(error::MoveError::InvalidPlace(
                "no moves after knock-out".into(),
            ));
        }
        self.board.commit(&play.place, &play.word)?;
        tracing::debug!(
            turn = self.turn,
            player = self.player,
            place = %play.place,
            word = %play.word,
            "played"
        );
        self.history.push(play);
        Ok(())
    }

    pub fn next_turn(&mut self) {
        self.player += 1;
        if self.player >= self.game_config.num_players() {
            self.player = 0;
            self.turn += 1;
        }
        let phase = self.phase.next(self.game_config, self.turn, self.player);
        if phase != self.phase {
            tracing::debug!(turn = self.turn, from = ?self.phase, to = ?phase, "phase change");
        }
        self.phase = phase;
    }
}
