// Copyright (C) 2020-2026 Andy Kurnia.

use super::{board, matrix};

pub struct StaticGameConfig {
    dim: matrix::Dim,
    start_tiles: Box<[(board::Position, char)]>,
    max_word_len: i8,
    restricted_min_len: i8,
    liberal_min_len: i8,
    restricted_turns: u16,
    liberal_turns: u16,
    num_players: u8,
}

pub enum GameConfig {
    Static(StaticGameConfig),
}

impl GameConfig {
    #[inline(always)]
    pub fn dim(&self) -> matrix::Dim {
        match self {
            GameConfig::Static(x) => x.dim,
        }
    }

    #[inline(always)]
    pub fn start_tiles(&self) -> &[(board::Position, char)] {
        match self {
            GameConfig::Static(x) => &x.start_tiles,
        }
    }

    #[inline(always)]
    pub fn max_word_len(&self) -> i8 {
        match self {
            GameConfig::Static(x) => x.max_word_len,
        }
    }

    #[inline(always)]
    pub fn restricted_min_len(&self) -> i8 {
        match self {
            GameConfig::Static(x) => x.restricted_min_len,
        }
    }

    #[inline(always)]
    pub fn liberal_min_len(&self) -> i8 {
        match self {
            GameConfig::Static(x) => x.liberal_min_len,
        }
    }

    // turns are full rounds, one move per player.
    #[inline(always)]
    pub fn restricted_turns(&self) -> u16 {
        match self {
            GameConfig::Static(x) => x.restricted_turns,
        }
    }

    #[inline(always)]
    pub fn liberal_turns(&self) -> u16 {
        match self {
            GameConfig::Static(x) => x.liberal_turns,
        }
    }

    #[inline(always)]
    pub fn num_players(&self) -> u8 {
        match self {
            GameConfig::Static(x) => x.num_players,
        }
    }

    pub fn new_board(&self) -> board::Board {
        let mut board = board::Board::new(self.dim());
        for &(pos, tile) in self.start_tiles() {
            board.set(pos, Some(tile));
        }
        board
    }
}

fn block_tiles(row: i8, col: i8, rows: &[&str]) -> Box<[(board::Position, char)]> {
    (row..)
        .zip(rows)
        .flat_map(|(r, s)| {
            (col..)
                .zip(s.chars())
                .map(move |(c, tile)| (board::Position::new(r, c), tile))
        })
        .collect()
}

// 8x8, four letters in the middle reading "ze"/"hn" across and "zh"/"en" down.
pub fn make_german_game_config() -> GameConfig {
    GameConfig::Static(StaticGameConfig {
        dim: matrix::Dim { rows: 8, cols: 8 },
        start_tiles: block_tiles(3, 3, &["ze", "hn"]),
        max_word_len: 8,
        restricted_min_len: 4,
        liberal_min_len: 3,
        restricted_turns: 1,
        liberal_turns: 5,
        num_players: 2,
    })
}

pub fn make_empty_game_config(rows: i8, cols: i8) -> GameConfig {
    GameConfig::Static(StaticGameConfig {
        dim: matrix::Dim { rows, cols },
        start_tiles: Box::new([]),
        max_word_len: rows.max(cols),
        restricted_min_len: 4,
        liberal_min_len: 3,
        restricted_turns: 1,
        liberal_turns: 5,
        num_players: 2,
    })
}
