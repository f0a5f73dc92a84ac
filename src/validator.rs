// Copyright (C) 2020-2026 Andy Kurnia.

use super::{board, trie};

// crossing runs shorter than this are fragments, not words.
pub const MIN_CROSSING_LEN: usize = 3;

#[inline(always)]
pub fn fits_pattern(pattern: &[Option<char>], word: &[char]) -> bool {
    pattern.len() == word.len()
        && pattern
            .iter()
            .zip(word)
            .all(|(p, c)| p.is_none_or(|p| p == *c))
}

// Checks candidates against one board. The scratch board is overwritten with
// a full copy of the board before every candidate.
pub struct MoveValidator<'a> {
    board: &'a board::Board,
    trie: &'a trie::Trie,
    scratch: board::Board,
    word_buffer: Vec<char>,
}

impl<'a> MoveValidator<'a> {
    pub fn new(board: &'a board::Board, trie: &'a trie::Trie) -> Self {
        Self {
            board,
            trie,
            scratch: board.clone(),
            word_buffer: Vec::new(),
        }
    }

    pub fn accepts(&mut self, place: &board::Place, word: &[char]) -> bool {
        if !fits_pattern(&self.board.pattern(place), word) {
            return false;
        }
        self.scratch.clone_from(self.board);
        self.scratch.place_word(place, word);
        let across = place.direction.flip();
        place.positions().all(|pos| {
            let run = self.scratch.run_through(pos, across);
            run.len() < MIN_CROSSING_LEN || self.trie.contains_letters(&run)
        })
    }

    // candidates that survive the crossing check, in their original order.
    pub fn filter(&mut self, place: &board::Place, candidates: Vec<String>) -> Vec<String> {
        candidates
            .into_iter()
            .filter(|word| {
                let mut letters = std::mem::take(&mut self.word_buffer);
                letters.clear();
                letters.extend(word.chars());
                let ok = self.accepts(place, &letters);
                self.word_buffer = letters;
                ok
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use board::{Board, Direction, Place, Position};

    fn letters(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn board() -> Board {
        Board::from_rows(&[
            "........", "........", "........", "...ze...", "...hn.x.", "......y.", "........",
            "........",
        ])
        .unwrap()
    }

    #[test]
    fn pattern_fit() {
        let pattern = [Some('z'), Some('e'), None, None];
        assert!(fits_pattern(&pattern, &letters("zehn")));
        assert!(!fits_pattern(&pattern, &letters("zahn")));
        assert!(!fits_pattern(&pattern, &letters("zeh")));
    }

    #[test]
    fn crossing_word_must_be_in_dictionary() {
        let board = board();
        let place = Place::new(Position::new(3, 3), Direction::Horizontal, 4);
        let trie = ["zehn"].into_iter().collect::<trie::Trie>();
        let mut validator = MoveValidator::new(&board, &trie);
        // column 6 would read "nxy".
        assert!(!validator.accepts(&place, &letters("zehn")));
        let trie = ["zehn", "nxy"].into_iter().collect::<trie::Trie>();
        let mut validator = MoveValidator::new(&board, &trie);
        assert!(validator.accepts(&place, &letters("zehn")));
    }

    #[test]
    fn short_crossings_are_ignored() {
        let board = Board::from_rows(&["....", ".ab.", "....", "...."]).unwrap();
        let trie = ["xaby"].into_iter().collect::<trie::Trie>();
        let mut validator = MoveValidator::new(&board, &trie);
        let place = Place::new(Position::new(1, 0), Direction::Horizontal, 4);
        assert_eq!(
            validator.filter(&place, vec!["xaby".into(), "xabz".into(), "qqby".into()]),
            vec!["xaby", "xabz"]
        );
    }

    #[test]
    fn every_candidate_starts_from_the_original_board() {
        let board = Board::from_rows(&["....", ".ab.", "....", "...."]).unwrap();
        let trie = trie::Trie::new();
        let mut validator = MoveValidator::new(&board, &trie);
        let down = Place::new(Position::new(0, 1), Direction::Vertical, 3);
        let across = Place::new(Position::new(1, 0), Direction::Horizontal, 4);
        assert!(validator.accepts(&down, &letters("qat")));
        // leftovers from "qat" would make column 1 fail.
        assert!(validator.accepts(&across, &letters("xabc")));
        assert_eq!(board.get(Position::new(0, 1)), None);
    }
}
