// Copyright (C) 2020-2026 Andy Kurnia.

use super::{board, game_config, game_state, placement, trie, validator};

// legal places mapped to the words that fit them, in place order.
pub type Moves = std::collections::BTreeMap<board::Place, Vec<String>>;

pub struct BoardSnapshot<'a> {
    pub board: &'a board::Board,
    pub trie: &'a trie::Trie,
    pub game_config: &'a game_config::GameConfig,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Move {
    pub place: board::Place,
    pub word: String,
    pub alternatives: Option<Moves>,
}

impl Move {
    pub fn new(place: board::Place, word: &str) -> Self {
        Self {
            place,
            word: word.into(),
            alternatives: None,
        }
    }

    pub fn new_with_alternatives(place: board::Place, word: &str, alternatives: Moves) -> Self {
        Self {
            place,
            word: word.into(),
            alternatives: Some(alternatives),
        }
    }
}

// json objects cannot have Place keys, so alternatives become a list.
#[derive(serde::Serialize, serde::Deserialize)]
pub struct MoveCandidate {
    pub place: board::Place,
    pub words: Vec<String>,
}

pub fn moves_to_candidates(moves: &Moves) -> Vec<MoveCandidate> {
    moves
        .iter()
        .map(|(&place, words)| MoveCandidate {
            place,
            words: words.clone(),
        })
        .collect()
}

pub fn candidates_to_moves(candidates: Vec<MoveCandidate>) -> Moves {
    let mut moves = Moves::new();
    for candidate in candidates {
        moves.entry(candidate.place).or_default().extend(candidate.words);
    }
    moves
}

#[derive(serde::Serialize, serde::Deserialize)]
struct SerializedMove {
    place: board::Place,
    word: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    alternatives: Option<Vec<MoveCandidate>>,
}

impl serde::Serialize for Move {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        SerializedMove {
            place: self.place,
            word: self.word.clone(),
            alternatives: self.alternatives.as_ref().map(moves_to_candidates),
        }
        .serialize(serializer)
    }
}

impl<'de> serde::Deserialize<'de> for Move {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let serialized = SerializedMove::deserialize(deserializer)?;
        Ok(Self {
            place: serialized.place,
            word: serialized.word,
            alternatives: serialized.alternatives.map(candidates_to_moves),
        })
    }
}

// (direction, word length) pairs allowed in a phase.
pub fn scan_jobs(
    game_config: &game_config::GameConfig,
    phase: game_state::GamePhase,
) -> Vec<(board::Direction, i8)> {
    let Some(min_len) = phase.min_word_len(game_config) else {
        return Vec::new();
    };
    let dim = game_config.dim();
    let mut jobs = Vec::new();
    for &direction in phase.directions() {
        let max_len = game_config.max_word_len().min(direction.extent(dim));
        for count in min_len.max(1)..=max_len {
            jobs.push((direction, count));
        }
    }
    jobs
}

fn scan(
    board_snapshot: &BoardSnapshot<'_>,
    scanner: &placement::PlacementScanner<'_>,
    count: i8,
    validator: &mut validator::MoveValidator<'_>,
    moves: &mut Moves,
) {
    let direction = scanner.direction();
    let mut num_candidates = 0;
    let mut num_places = 0;
    for start in scanner.legal_starts(count) {
        let place = board::Place::new(start, direction, count);
        let candidates = board_snapshot.trie.search(&board_snapshot.board.pattern(&place));
        num_candidates += candidates.len();
        let words = validator.filter(&place, candidates);
        if !words.is_empty() {
            num_places += 1;
            moves.insert(place, words);
        }
    }
    tracing::trace!(?direction, count, num_candidates, num_places, "scanned");
}

#[derive(Default)]
pub struct MoveGenerator {
    pub moves: Moves,
}

impl MoveGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gen_moves(&mut self, board_snapshot: &BoardSnapshot<'_>, phase: game_state::GamePhase) {
        self.moves.clear();
        let occupancy = board_snapshot.board.occupancy();
        let mut validator =
            validator::MoveValidator::new(board_snapshot.board, board_snapshot.trie);
        let jobs = scan_jobs(board_snapshot.game_config, phase);
        for &direction in phase.directions() {
            // masks are shared by every length in this direction.
            let scanner = placement::PlacementScanner::new(&occupancy, direction);
            for &(_, count) in jobs.iter().filter(|&&(d, _)| d == direction) {
                scan(board_snapshot, &scanner, count, &mut validator, &mut self.moves);
            }
        }
        tracing::debug!(?phase, num_places = self.moves.len(), "generated moves");
    }

    // same result as gen_moves, with the (direction, length) scans spread over
    // threads. num_threads of 0 means one per cpu.
    pub fn gen_moves_parallel(
        &mut self,
        board_snapshot: &BoardSnapshot<'_>,
        phase: game_state::GamePhase,
        num_threads: usize,
    ) {
        self.moves.clear();
        let jobs = scan_jobs(board_snapshot.game_config, phase);
        let num_threads = if num_threads == 0 {
            num_cpus::get()
        } else {
            num_threads
        }
        .min(jobs.len());
        if num_threads <= 1 {
            self.gen_moves(board_snapshot, phase);
            return;
        }
        let occupancy = board_snapshot.board.occupancy();
        let next_job = std::sync::atomic::AtomicUsize::new(0);
        let (tx, rx) = std::sync::mpsc::channel();
        std::thread::scope(|s| {
            for _ in 0..num_threads {
                let tx = tx.clone();
                let jobs = &jobs;
                let next_job = &next_job;
                let occupancy = &occupancy;
                s.spawn(move || {
                    let mut validator =
                        validator::MoveValidator::new(board_snapshot.board, board_snapshot.trie);
                    loop {
                        let job_idx = next_job.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
                        let Some(&(direction, count)) = jobs.get(job_idx) else {
                            break;
                        };
                        let scanner = placement::PlacementScanner::new(occupancy, direction);
                        let mut moves = Moves::new();
                        scan(board_snapshot, &scanner, count, &mut validator, &mut moves);
                        if tx.send(moves).is_err() {
                            break;
                        }
                    }
                });
            }
        });
        drop(tx);
        // places of different jobs never collide.
        for moves in rx {
            self.moves.extend(moves);
        }
        tracing::debug!(
            ?phase,
            num_threads,
            num_places = self.moves.len(),
            "generated moves"
        );
    }
}
