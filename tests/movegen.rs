// Copyright (C) 2020-2026 Andy Kurnia.

use kreuzgen::board::{Board, Direction, Place, Position};
use kreuzgen::game_config::{GameConfig, make_empty_game_config, make_german_game_config};
use kreuzgen::game_state::GamePhase;
use kreuzgen::movegen::{BoardSnapshot, MoveGenerator, Moves};
use kreuzgen::trie::Trie;

fn place(row: i8, col: i8, direction: Direction, count: i8) -> Place {
    Place::new(Position::new(row, col), direction, count)
}

fn gen_moves(game_config: &GameConfig, board: &Board, words: &[&str], phase: GamePhase) -> Moves {
    let trie = words.iter().collect::<Trie>();
    let mut move_generator = MoveGenerator::new();
    move_generator.gen_moves(
        &BoardSnapshot {
            board,
            trie: &trie,
            game_config,
        },
        phase,
    );
    move_generator.moves
}

fn crossing_board() -> Board {
    Board::from_rows(&[
        "........", "........", "........", "...ze...", "...hn.x.", "......y.", "........",
        "........",
    ])
    .unwrap()
}

const ACROSS: GamePhase = GamePhase::Restricted {
    direction: Direction::Horizontal,
};

#[test]
fn crossing_word_outside_dictionary_rejects_the_place() {
    let game_config = make_german_game_config();
    let board = crossing_board();
    let moves = gen_moves(&game_config, &board, &["zehn"], ACROSS);
    // column 6 would read "nxy".
    assert!(!moves.contains_key(&place(3, 3, Direction::Horizontal, 4)));
    assert_eq!(
        moves.keys().copied().collect::<Vec<_>>(),
        vec![place(4, 1, Direction::Horizontal, 4)]
    );
    let moves = gen_moves(&game_config, &board, &["zehn", "nxy"], ACROSS);
    assert_eq!(
        moves.keys().copied().collect::<Vec<_>>(),
        vec![
            place(3, 3, Direction::Horizontal, 4),
            place(4, 1, Direction::Horizontal, 4)
        ]
    );
}

#[test]
fn liberal_phase_scans_both_directions() {
    let game_config = make_german_game_config();
    let board = game_config.new_board();
    let moves = gen_moves(&game_config, &board, &["zeh", "den"], GamePhase::Liberal);
    let mut expected = Moves::new();
    expected.insert(place(3, 3, Direction::Horizontal, 3), vec!["zeh".into()]);
    expected.insert(place(2, 4, Direction::Vertical, 3), vec!["den".into()]);
    assert_eq!(moves, expected);
    // three letters are too short while restricted.
    assert!(gen_moves(&game_config, &board, &["zeh", "den"], ACROSS).is_empty());
    assert!(
        gen_moves(
            &game_config,
            &board,
            &["zeh", "den"],
            GamePhase::Restricted {
                direction: Direction::Vertical
            }
        )
        .is_empty()
    );
}

#[test]
fn knockout_has_no_moves() {
    let game_config = make_german_game_config();
    let board = game_config.new_board();
    assert!(gen_moves(&game_config, &board, &["zehn", "zeh"], GamePhase::KnockOut).is_empty());
}

#[test]
fn empty_board_has_no_moves() {
    let game_config = make_empty_game_config(8, 8);
    let board = game_config.new_board();
    let words = ["zehn", "zeh", "achtacht"];
    assert!(gen_moves(&game_config, &board, &words, GamePhase::Liberal).is_empty());
}

#[test]
fn parallel_matches_sequential() {
    let game_config = make_german_game_config();
    let board = Board::from_rows(&[
        "........", "..d.....", "..e.....", "..nze...", "...hn...", "....e...", "........",
        "........",
    ])
    .unwrap();
    let trie = [
        "zehn", "zeh", "den", "ehe", "nah", "hohn", "zeit", "enden", "hnen", "zeno", "ehen", "nze",
        "dzen", "sehne", "zehen", "ahnen", "nzehn",
    ]
    .into_iter()
    .collect::<Trie>();
    let board_snapshot = BoardSnapshot {
        board: &board,
        trie: &trie,
        game_config: &game_config,
    };
    for phase in [
        ACROSS,
        GamePhase::Restricted {
            direction: Direction::Vertical,
        },
        GamePhase::Liberal,
        GamePhase::KnockOut,
    ] {
        let mut sequential = MoveGenerator::new();
        sequential.gen_moves(&board_snapshot, phase);
        for num_threads in [0, 1, 2, 3, 16] {
            let mut parallel = MoveGenerator::new();
            parallel.gen_moves_parallel(&board_snapshot, phase, num_threads);
            assert_eq!(parallel.moves, sequential.moves, "{:?} {}", phase, num_threads);
        }
    }
}

#[test]
fn every_generated_move_commits_cleanly() {
    let game_config = make_german_game_config();
    let board = game_config.new_board();
    let words = ["zehn", "zeh", "den", "ehe", "zeit", "enden", "ahnen", "nah"];
    let trie = words.iter().collect::<Trie>();
    let moves = gen_moves(&game_config, &board, &words, GamePhase::Liberal);
    assert!(!moves.is_empty());
    for (place, candidates) in &moves {
        for word in candidates {
            assert!(trie.contains(word));
            let mut scratch = board.clone();
            scratch.commit(place, word).unwrap();
            assert_eq!(
                scratch.pattern(place),
                word.chars().map(Some).collect::<Vec<_>>()
            );
        }
    }
}
