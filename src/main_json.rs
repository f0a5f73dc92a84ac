// Copyright (C) 2020-2026 Andy Kurnia.

use kreuzgen::{board, build, error, game_config, game_state, movegen};

// words: the dictionary, lowercase.
// lexicon: optional word list file (one per line, or .csv), added to words.
// board: one string per row, '.' for empty.
// turn, player: 0-based, these decide the phase.
// threads: 1 for sequential, 0 for one per cpu.
#[derive(serde::Deserialize)]
struct Question {
    #[serde(default)]
    words: Vec<String>,
    #[serde(default)]
    lexicon: Option<String>,
    board: Vec<String>,
    #[serde(default)]
    turn: u16,
    #[serde(default)]
    player: u8,
    #[serde(default = "default_threads")]
    threads: usize,
}

fn default_threads() -> usize {
    1
}

#[derive(serde::Serialize)]
struct Answer {
    #[serde(flatten)]
    phase: game_state::GamePhase,
    moves: Vec<movegen::MoveCandidate>,
}

const SAMPLE_QUESTION: &str = r#"
  {
    "words": [ "zehn", "zahn", "zeh", "ehe", "nah", "hohn", "zeit", "enden" ],
    "board": [
      "........",
      "........",
      "........",
      "...ze...",
      "...hn...",
      "........",
      "........",
      "........"
    ],
    "turn": 0,
    "player": 0
  }
"#;

// words and board letters are matched in lowercase.
fn answer(question: Question) -> error::Returns<Answer> {
    let rows = question
        .board
        .iter()
        .map(|row| row.to_lowercase())
        .collect::<Vec<_>>();
    let board = board::Board::from_rows(&rows)?;
    let dim = board.dim();
    if dim.rows < 1 || dim.cols < 1 {
        kreuzgen::return_error!(format!("board of {} x {} is empty", dim.rows, dim.cols));
    }
    let mut words = question.words;
    if let Some(path) = &question.lexicon {
        words.extend(build::read_words_from_path(path)?.into_vec());
    }
    for word in words.iter_mut() {
        *word = word.to_lowercase();
    }
    if let Some(word) = words.iter().find(|word| word.is_empty()) {
        kreuzgen::return_error!(format!("invalid word {:?}", word));
    }
    let trie = build::build(&words);

    let game_config = game_config::make_empty_game_config(dim.rows, dim.cols);
    let phase = game_state::GamePhase::at(&game_config, question.turn, question.player);
    tracing::info!(?phase, rows = dim.rows, cols = dim.cols, "question");
    eprint!("{}", board);

    let board_snapshot = &movegen::BoardSnapshot {
        board: &board,
        trie: &trie,
        game_config: &game_config,
    };
    let mut move_generator = movegen::MoveGenerator::new();
    move_generator.gen_moves_parallel(board_snapshot, phase, question.threads);
    let moves = &move_generator.moves;
    eprintln!("found {} places", moves.len());
    for (place, words) in moves.iter() {
        eprintln!("{} {}", place, words.join(" "));
    }

    Ok(Answer {
        phase,
        moves: movegen::moves_to_candidates(moves),
    })
}

pub fn main() -> error::Returns<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = std::env::args().collect::<Vec<_>>();
    let question = match args.get(1) {
        Some(path) => serde_json::from_str::<Question>(&std::fs::read_to_string(path)?)?,
        None => serde_json::from_str::<Question>(SAMPLE_QUESTION)?,
    };
    println!("{}", serde_json::to_string_pretty(&answer(question)?)?);

    Ok(())
}
