// Copyright (C) 2020-2026 Andy Kurnia.

use super::{error, matrix};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub enum Direction {
    #[serde(rename = "horizontal")]
    Horizontal,
    #[serde(rename = "vertical")]
    Vertical,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Horizontal, Direction::Vertical];

    #[inline(always)]
    pub fn flip(self) -> Self {
        match self {
            Direction::Horizontal => Direction::Vertical,
            Direction::Vertical => Direction::Horizontal,
        }
    }

    #[inline(always)]
    pub fn is_down(self) -> bool {
        self == Direction::Vertical
    }

    // even players go across, odd players go down.
    #[inline(always)]
    pub fn for_player(player: u8) -> Self {
        if player & 1 == 0 {
            Direction::Horizontal
        } else {
            Direction::Vertical
        }
    }

    #[inline(always)]
    pub fn kernel(self, len: i8) -> matrix::Kernel {
        match self {
            Direction::Horizontal => matrix::Kernel::across(len),
            Direction::Vertical => matrix::Kernel::down(len),
        }
    }

    // number of cells in a lane of this direction.
    #[inline(always)]
    pub fn extent(self, dim: matrix::Dim) -> i8 {
        match self {
            Direction::Horizontal => dim.cols,
            Direction::Vertical => dim.rows,
        }
    }
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub struct Position {
    pub row: i8,
    pub col: i8,
}

impl Position {
    #[inline(always)]
    pub fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    #[inline(always)]
    pub fn step(self, direction: Direction, n: i8) -> Self {
        match direction {
            Direction::Horizontal => Self::new(self.row, self.col + n),
            Direction::Vertical => Self::new(self.row + n, self.col),
        }
    }

    // (lane, index within lane) for a direction.
    #[inline(always)]
    fn lane_idx(self, direction: Direction) -> (i8, i8) {
        match direction {
            Direction::Horizontal => (self.row, self.col),
            Direction::Vertical => (self.col, self.row),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Area {
    pub row: i8,
    pub col: i8,
    pub rows: i8,
    pub cols: i8,
}

impl Area {
    #[inline(always)]
    pub fn dim(&self) -> matrix::Dim {
        matrix::Dim {
            rows: self.rows,
            cols: self.cols,
        }
    }

    #[inline(always)]
    pub fn fits(&self, dim: matrix::Dim) -> bool {
        self.rows >= 0
            && self.cols >= 0
            && self.row >= 0
            && self.col >= 0
            && (self.row as i16) + (self.rows as i16) <= dim.rows as i16
            && (self.col as i16) + (self.cols as i16) <= dim.cols as i16
    }
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub struct Place {
    pub start: Position,
    pub direction: Direction,
    pub count: i8,
}

impl Place {
    #[inline(always)]
    pub fn new(start: Position, direction: Direction, count: i8) -> Self {
        Self {
            start,
            direction,
            count,
        }
    }

    pub fn area(&self) -> Area {
        let (rows, cols) = match self.direction {
            Direction::Horizontal => (1, self.count),
            Direction::Vertical => (self.count, 1),
        };
        Area {
            row: self.start.row,
            col: self.start.col,
            rows,
            cols,
        }
    }

    #[inline(always)]
    pub fn fits(&self, dim: matrix::Dim) -> bool {
        self.count >= 1 && self.area().fits(dim)
    }

    #[inline(always)]
    pub fn cell(&self, i: i8) -> Position {
        self.start.step(self.direction, i)
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.count).map(move |i| self.cell(i))
    }
}

impl std::fmt::Display for Place {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}) {} x{}",
            self.start.row,
            self.start.col,
            match self.direction {
                Direction::Horizontal => "across",
                Direction::Vertical => "down",
            },
            self.count
        )
    }
}

const EMPTY_LABEL: char = '.';

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(into = "BoardRows", try_from = "BoardRows")]
pub struct Board {
    tiles: matrix::Matrix<Option<char>>,
}

impl Board {
    pub fn new(dim: matrix::Dim) -> Self {
        Self {
            tiles: matrix::Matrix::new(dim, None),
        }
    }

    // one string per row, '.' for an empty cell.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> error::Returns<Self> {
        let num_cols = rows.first().map_or(0, |row| row.as_ref().chars().count());
        if rows.len() > i8::MAX as usize || num_cols > i8::MAX as usize {
            return_error!(format!(
                "board of {} x {} is too large",
                rows.len(),
                num_cols
            ));
        }
        let mut cells = Vec::with_capacity(rows.len() * num_cols);
        for (r, row) in rows.iter().enumerate() {
            let before = cells.len();
            cells.extend(
                row.as_ref()
                    .chars()
                    .map(|c| if c == EMPTY_LABEL { None } else { Some(c) }),
            );
            if cells.len() - before != num_cols {
                return_error!(format!(
                    "row {} has {} cells, expected {}",
                    r,
                    cells.len() - before,
                    num_cols
                ));
            }
        }
        Ok(Self {
            tiles: matrix::Matrix::from_vec(
                matrix::Dim {
                    rows: rows.len() as i8,
                    cols: num_cols as i8,
                },
                cells,
            ),
        })
    }

    #[inline(always)]
    pub fn dim(&self) -> matrix::Dim {
        self.tiles.dim()
    }

    #[inline(always)]
    pub fn get(&self, pos: Position) -> Option<char> {
        *self.tiles.at(pos.row, pos.col)
    }

    #[inline(always)]
    pub fn set(&mut self, pos: Position, tile: Option<char>) {
        *self.tiles.at_mut(pos.row, pos.col) = tile;
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.cells().iter().all(Option::is_none)
    }

    pub fn read_area(&self, area: &Area) -> matrix::Matrix<Option<char>> {
        assert!(area.fits(self.dim()), "{:?} is outside {:?}", area, self.dim());
        let mut out = Vec::with_capacity(area.dim().area());
        for r in area.row..area.row + area.rows {
            for c in area.col..area.col + area.cols {
                out.push(*self.tiles.at(r, c));
            }
        }
        matrix::Matrix::from_vec(area.dim(), out)
    }

    pub fn write_area(&mut self, area: &Area, tiles: &matrix::Matrix<Option<char>>) {
        assert!(area.fits(self.dim()), "{:?} is outside {:?}", area, self.dim());
        assert_eq!(area.dim(), tiles.dim());
        for (r, c, &tile) in tiles.iter_row_col() {
            *self.tiles.at_mut(area.row + r, area.col + c) = tile;
        }
    }

    // filled cells become fixed letters, empty cells become wildcards.
    pub fn pattern(&self, place: &Place) -> Vec<Option<char>> {
        self.read_area(&place.area()).cells().to_vec()
    }

    pub fn occupancy(&self) -> matrix::Matrix<u8> {
        matrix::Matrix::from_vec(
            self.dim(),
            self.tiles
                .cells()
                .iter()
                .map(|tile| tile.is_some() as u8)
                .collect(),
        )
    }

    // unchecked write of a word already known to fit.
    pub fn place_word(&mut self, place: &Place, word: &[char]) {
        assert_eq!(place.count as usize, word.len());
        let area = place.area();
        self.write_area(
            &area,
            &matrix::Matrix::from_vec(area.dim(), word.iter().copied().map(Some).collect()),
        );
    }

    pub fn check(&self, place: &Place, word: &[char]) -> Result<(), error::MoveError> {
        if word.is_empty() {
            return Err(error::MoveError::InvalidPlace("word is empty".into()));
        }
        if word.contains(&EMPTY_LABEL) {
            return Err(error::MoveError::InvalidPlace(format!(
                "{:?} is not a letter",
                EMPTY_LABEL
            )));
        }
        if !place.fits(self.dim()) {
            return Err(error::MoveError::InvalidPlace(format!(
                "{} does not fit a {} x {} board",
                place,
                self.dim().rows,
                self.dim().cols
            )));
        }
        if word.len() != place.count as usize {
            return Err(error::MoveError::InvalidPlace(format!(
                "{} needs {} letters, word has {}",
                place,
                place.count,
                word.len()
            )));
        }
        for (pos, &found) in place.positions().zip(word) {
            if let Some(expected) = self.get(pos)
                && expected != found
            {
                return Err(error::MoveError::PatternMismatch {
                    row: pos.row,
                    col: pos.col,
                    expected,
                    found,
                });
            }
        }
        Ok(())
    }

    pub fn commit(&mut self, place: &Place, word: &str) -> Result<(), error::MoveError> {
        let word = word.chars().collect::<Vec<_>>();
        self.check(place, &word)?;
        self.place_word(place, &word);
        tracing::trace!(%place, word = %word.iter().collect::<String>(), "committed");
        Ok(())
    }

    // maximal run of filled cells through pos along direction, empty if pos is empty.
    pub fn run_through(&self, pos: Position, direction: Direction) -> Vec<char> {
        let (lane, idx) = pos.lane_idx(direction);
        let strider = self.dim().lane(direction.is_down(), lane);
        let cells = self.tiles.cells();
        if strider.is_empty() || cells[strider.at(idx)].is_none() {
            return Vec::new();
        }
        let mut lo = idx;
        while lo > 0 && cells[strider.at(lo - 1)].is_some() {
            lo -= 1;
        }
        let mut run = Vec::new();
        let mut i = lo;
        while i < strider.len() {
            match cells[strider.at(i)] {
                Some(c) => run.push(c),
                None => break,
            }
            i += 1;
        }
        run
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for r in 0..self.dim().rows {
            for c in 0..self.dim().cols {
                write!(f, "{}", self.tiles.at(r, c).unwrap_or(EMPTY_LABEL))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[derive(serde::Serialize, serde::Deserialize)]
struct BoardRows {
    rows: Vec<String>,
}

impl From<Board> for BoardRows {
    fn from(board: Board) -> Self {
        Self {
            rows: board.to_string().lines().map(String::from).collect(),
        }
    }
}

impl TryFrom<BoardRows> for Board {
    type Error = error::MyError;

    fn try_from(board_rows: BoardRows) -> Result<Self, Self::Error> {
        Board::from_rows(&board_rows.rows).map_err(|e| error::new(e.to_string()))
    }
}
