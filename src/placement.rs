// Copyright (C) 2020-2026 Andy Kurnia.

// Structural legality of word runs, from the occupancy mask alone.
//
// pair mask: cells of two adjacent filled cells along the direction.
// triple mask: cells of three adjacent filled cells along the direction, grown
// by one cell at each end.
// A run of `count` cells may start at a position when it fully covers at least
// one pair (pair score >= 2), touches no triple (triple score == 0), and does
// not butt against a filled cell just before or after it.

use super::{board, matrix};

pub fn pair_mask(
    occupancy: &matrix::Matrix<u8>,
    direction: board::Direction,
) -> matrix::Matrix<u8> {
    let k2 = direction.kernel(2);
    matrix::extend(&matrix::convolve(occupancy, k2), k2, occupancy.dim())
}

pub fn triple_mask(
    occupancy: &matrix::Matrix<u8>,
    direction: board::Direction,
) -> matrix::Matrix<u8> {
    let dim = occupancy.dim();
    let k2 = direction.kernel(2);
    let k3 = direction.kernel(3);
    let triples = matrix::extend(&matrix::convolve(occupancy, k3), k3, dim);
    matrix::dilate(&matrix::convolve(&triples, k2), k2, dim)
}

// Masks for one direction, reused across word lengths.
pub struct PlacementScanner<'a> {
    occupancy: &'a matrix::Matrix<u8>,
    direction: board::Direction,
    pair_mask: matrix::Matrix<u8>,
    triple_mask: matrix::Matrix<u8>,
}

impl<'a> PlacementScanner<'a> {
    pub fn new(occupancy: &'a matrix::Matrix<u8>, direction: board::Direction) -> Self {
        Self {
            occupancy,
            direction,
            pair_mask: pair_mask(occupancy, direction),
            triple_mask: triple_mask(occupancy, direction),
        }
    }

    #[inline(always)]
    pub fn direction(&self) -> board::Direction {
        self.direction
    }

    #[inline(always)]
    fn is_filled(&self, pos: board::Position) -> bool {
        *self.occupancy.at(pos.row, pos.col) != 0
    }

    // cell just before or just after the run is filled.
    fn touches_neighbor(&self, start: board::Position, count: i8, extent: i8) -> bool {
        let idx = match self.direction {
            board::Direction::Horizontal => start.col,
            board::Direction::Vertical => start.row,
        };
        (idx > 0 && self.is_filled(start.step(self.direction, -1)))
            || (idx + count < extent && self.is_filled(start.step(self.direction, count)))
    }

    // start positions in row-major order.
    pub fn legal_starts(&self, count: i8) -> Vec<board::Position> {
        let dim = self.occupancy.dim();
        let extent = self.direction.extent(dim);
        if count < 1 || count > extent {
            return Vec::new();
        }
        let kernel = self.direction.kernel(count);
        let word_pair_score = matrix::convolve(&self.pair_mask, kernel);
        let word_triple_score = matrix::convolve(&self.triple_mask, kernel);
        let full_lane = count == extent;
        let mut starts = Vec::new();
        for ((r, c, &pair_score), &triple_score) in word_pair_score
            .iter_row_col()
            .zip(word_triple_score.cells())
        {
            if pair_score < 2 || triple_score != 0 {
                continue;
            }
            let start = board::Position::new(r, c);
            if full_lane || !self.touches_neighbor(start, count, extent) {
                starts.push(start);
            }
        }
        tracing::trace!(
            direction = ?self.direction,
            count,
            num_starts = starts.len(),
            "scanned"
        );
        starts
    }
}

pub fn legal_starts(
    occupancy: &matrix::Matrix<u8>,
    direction: board::Direction,
    count: i8,
) -> Vec<board::Position> {
    PlacementScanner::new(occupancy, direction).legal_starts(count)
}
