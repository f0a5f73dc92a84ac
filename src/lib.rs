// Copyright (C) 2020-2026 Andy Kurnia.

#[macro_use]
pub mod error;

pub mod board;
pub mod build;
pub mod game_config;
pub mod game_state;
pub mod matrix;
pub mod move_picker;
pub mod movegen;
pub mod placement;
pub mod trie;
pub mod validator;
