// Copyright (C) 2020-2026 Andy Kurnia.

#[derive(Clone)]
pub struct Strider {
    base: i16,
    step: i8,
    len: i8,
}

impl Strider {
    #[inline(always)]
    pub fn len(&self) -> i8 {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline(always)]
    pub fn at(&self, idx: i8) -> usize {
        ((self.base as isize) + (idx as isize) * (self.step as isize)) as usize
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Dim {
    pub rows: i8,
    pub cols: i8,
}

impl Dim {
    #[inline(always)]
    pub fn across(&self, row: i8) -> Strider {
        Strider {
            base: (row as i16) * (self.cols as i16),
            step: 1,
            len: self.cols,
        }
    }

    #[inline(always)]
    pub fn down(&self, col: i8) -> Strider {
        Strider {
            base: col as i16,
            step: self.cols,
            len: self.rows,
        }
    }

    #[inline(always)]
    pub fn lane(&self, down: bool, lane: i8) -> Strider {
        if down {
            self.down(lane)
        } else {
            self.across(lane)
        }
    }

    #[inline(always)]
    pub fn at_row_col(&self, row: i8, col: i8) -> usize {
        (((row as isize) * (self.cols as isize)) + (col as isize)) as usize
    }

    #[inline(always)]
    pub fn contains(&self, row: i8, col: i8) -> bool {
        (0..self.rows).contains(&row) && (0..self.cols).contains(&col)
    }

    #[inline(always)]
    pub fn area(&self) -> usize {
        (self.rows.max(0) as usize) * (self.cols.max(0) as usize)
    }
}

// Row-major grid over a flat buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matrix<T> {
    dim: Dim,
    cells: Box<[T]>,
}

impl<T: Clone> Matrix<T> {
    pub fn new(dim: Dim, value: T) -> Self {
        Self {
            dim,
            cells: vec![value; dim.area()].into_boxed_slice(),
        }
    }
}

impl<T> Matrix<T> {
    pub fn from_vec(dim: Dim, cells: Vec<T>) -> Self {
        assert_eq!(cells.len(), dim.area(), "matrix data does not fit {:?}", dim);
        Self {
            dim,
            cells: cells.into_boxed_slice(),
        }
    }

    #[inline(always)]
    pub fn dim(&self) -> Dim {
        self.dim
    }

    #[inline(always)]
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    #[inline(always)]
    pub fn cells_mut(&mut self) -> &mut [T] {
        &mut self.cells
    }

    #[inline(always)]
    pub fn at(&self, row: i8, col: i8) -> &T {
        assert!(
            self.dim.contains(row, col),
            "({}, {}) is outside {:?}",
            row,
            col,
            self.dim
        );
        &self.cells[self.dim.at_row_col(row, col)]
    }

    #[inline(always)]
    pub fn at_mut(&mut self, row: i8, col: i8) -> &mut T {
        assert!(
            self.dim.contains(row, col),
            "({}, {}) is outside {:?}",
            row,
            col,
            self.dim
        );
        &mut self.cells[self.dim.at_row_col(row, col)]
    }

    pub fn iter_row_col(&self) -> impl Iterator<Item = (i8, i8, &T)> + '_ {
        let cols = self.dim.cols;
        (0isize..)
            .zip(self.cells.iter())
            .map(move |(i, v)| ((i / cols as isize) as i8, (i % cols as isize) as i8, v))
    }
}

// All-ones rectangular kernel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Kernel {
    pub rows: i8,
    pub cols: i8,
}

impl Kernel {
    #[inline(always)]
    pub fn across(len: i8) -> Self {
        Self { rows: 1, cols: len }
    }

    #[inline(always)]
    pub fn down(len: i8) -> Self {
        Self { rows: len, cols: 1 }
    }

    #[inline(always)]
    pub fn sum(&self) -> u16 {
        (self.rows as u16) * (self.cols as u16)
    }

    // shape of a "valid" convolution output (kernel fully inside).
    #[inline(always)]
    pub fn valid_dim(&self, dim: Dim) -> Dim {
        Dim {
            rows: (dim.rows - self.rows + 1).max(0),
            cols: (dim.cols - self.cols + 1).max(0),
        }
    }
}

// Sliding-window sum, only where the whole kernel fits.
pub fn convolve<T: Copy + Into<u16>>(m: &Matrix<T>, kernel: Kernel) -> Matrix<u16> {
    let out_dim = kernel.valid_dim(m.dim());
    let mut out = Matrix::new(out_dim, 0u16);
    for r in 0..out_dim.rows {
        for c in 0..out_dim.cols {
            let mut sum = 0u16;
            for kr in 0..kernel.rows {
                let row = m.dim().across(r + kr);
                for kc in 0..kernel.cols {
                    sum += m.cells()[row.at(c + kc)].into();
                }
            }
            out.cells_mut()[out_dim.at_row_col(r, c)] = sum;
        }
    }
    out
}

// Writes the kernel footprint into a 0/1 mask of shape `dim` at every score
// accepted by `hit`. `scores` must be a valid convolution over `dim`.
fn paint<F: Fn(u16) -> bool>(scores: &Matrix<u16>, kernel: Kernel, dim: Dim, hit: F) -> Matrix<u8> {
    assert_eq!(scores.dim(), kernel.valid_dim(dim));
    let mut out = Matrix::new(dim, 0u8);
    for (r, c, &score) in scores.iter_row_col() {
        if hit(score) {
            for kr in 0..kernel.rows {
                for kc in 0..kernel.cols {
                    *out.at_mut(r + kr, c + kc) = 1;
                }
            }
        }
    }
    out
}

// Paints the footprint wherever the window was completely filled.
pub fn extend(scores: &Matrix<u16>, kernel: Kernel, dim: Dim) -> Matrix<u8> {
    let full = kernel.sum();
    paint(scores, kernel, dim, |score| score == full)
}

// Paints the footprint wherever the window touched anything.
pub fn dilate(scores: &Matrix<u16>, kernel: Kernel, dim: Dim) -> Matrix<u8> {
    paint(scores, kernel, dim, |score| score != 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mask(rows: &[&str]) -> Matrix<u8> {
        let dim = Dim {
            rows: rows.len() as i8,
            cols: rows[0].len() as i8,
        };
        Matrix::from_vec(
            dim,
            rows.iter()
                .flat_map(|row| row.bytes().map(|b| (b == b'#') as u8))
                .collect(),
        )
    }

    #[test]
    fn strider_walks_lanes() {
        let dim = Dim { rows: 3, cols: 4 };
        let across = dim.across(1);
        assert_eq!((across.at(0), across.at(3)), (4, 7));
        let down = dim.lane(true, 2);
        assert_eq!((down.at(0), down.at(2), down.len()), (2, 10, 3));
        assert!(!down.is_empty());
        assert!(Dim { rows: 0, cols: 4 }.down(1).is_empty());
    }

    #[test]
    fn convolve_is_valid_sliding_sum() {
        let m = mask(&["##.#", ".###"]);
        let across = convolve(&m, Kernel::across(2));
        assert_eq!(across.dim(), Dim { rows: 2, cols: 3 });
        assert_eq!(across.cells(), &[2, 1, 1, 1, 2, 2]);
        let down = convolve(&m, Kernel::down(2));
        assert_eq!(down.dim(), Dim { rows: 1, cols: 4 });
        assert_eq!(down.cells(), &[1, 2, 1, 2]);
    }

    #[test]
    fn oversized_kernel_yields_empty_output() {
        let m = mask(&["###"]);
        let out = convolve(&m, Kernel::across(4));
        assert_eq!(out.dim(), Dim { rows: 1, cols: 0 });
        assert!(out.cells().is_empty());
        let painted = extend(&out, Kernel::across(4), m.dim());
        assert_eq!(painted.cells(), &[0, 0, 0]);
    }

    #[test]
    fn extend_paints_only_full_windows() {
        let m = mask(&["##.##.#."]);
        let kernel = Kernel::across(2);
        let out = extend(&convolve(&m, kernel), kernel, m.dim());
        assert_eq!(out, mask(&["##.##..."]));
    }

    #[test]
    fn dilate_grows_by_kernel() {
        let m = mask(&["...#...."]);
        let kernel = Kernel::across(2);
        let out = dilate(&convolve(&m, kernel), kernel, m.dim());
        assert_eq!(out, mask(&["..###..."]));
    }

    #[test]
    #[should_panic]
    fn out_of_bounds_panics() {
        let m = mask(&["##"]);
        m.at(1, 0);
    }
}
