//! Generic dense 2D matrices for dynamic-programming workloads.
//!
//! [`Matrix`] is a rectangular grid over a flat `Vec<T>` with O(1) cell
//! access by `(row, col)`. Two access paths are provided:
//!
//! - [`Matrix::get`] / [`Matrix::get_mut`] — bounds-checked, returning
//!   [`AlnError::IndexOutOfBounds`] with the requested index and the actual
//!   extents on violation.
//! - [`Matrix::cursor_at`] — an unchecked [`MatrixCursor`] that steps by one
//!   row or column in O(1) without re-deriving the flat offset; intended for
//!   hot loops whose bounds are already established by the caller.
//!
//! [`SquareMatrix`] and [`UpperTriangular`] are alternative index-mapping
//! layouts over the same flat-storage idea; construction from mismatched
//! dimensions fails with [`AlnError::DimensionMismatch`].

use crate::error::{AlnError, Result};
use crate::traits::Shaped;
use core::ops::{Index, IndexMut};

/// A dense rectangular matrix with O(1) indexed access.
///
/// Storage is row-major: cell `(r, c)` lives at flat offset `r * cols + c`.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Clone> Matrix<T> {
    /// Create a `rows` x `cols` matrix with every cell set to `fill`.
    pub fn new(rows: usize, cols: usize, fill: T) -> Self {
        Self {
            data: vec![fill; rows * cols],
            rows,
            cols,
        }
    }
}

impl<T> Matrix<T> {
    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Bounds-checked cell access.
    ///
    /// # Errors
    ///
    /// Returns [`AlnError::IndexOutOfBounds`] if `row` or `col` falls outside
    /// the matrix extents.
    pub fn get(&self, row: usize, col: usize) -> Result<&T> {
        if row >= self.rows || col >= self.cols {
            return Err(AlnError::IndexOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(&self.data[self.offset(row, col)])
    }

    /// Bounds-checked mutable cell access.
    ///
    /// # Errors
    ///
    /// Returns [`AlnError::IndexOutOfBounds`] if `row` or `col` falls outside
    /// the matrix extents.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut T> {
        if row >= self.rows || col >= self.cols {
            return Err(AlnError::IndexOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        let off = self.offset(row, col);
        Ok(&mut self.data[off])
    }

    /// Position an unchecked cursor at `(row, col)`.
    ///
    /// The cursor trusts the caller's loop bounds; stepping it outside the
    /// matrix is a logic error (caught by debug assertions only).
    pub fn cursor_at(&self, row: usize, col: usize) -> MatrixCursor<'_, T> {
        debug_assert!(row < self.rows && col < self.cols);
        MatrixCursor {
            data: &self.data,
            cols: self.cols,
            offset: row * self.cols + col,
            row,
            col,
        }
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        debug_assert!(row < self.rows && col < self.cols);
        &self.data[row * self.cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        debug_assert!(row < self.rows && col < self.cols);
        &mut self.data[row * self.cols + col]
    }
}

impl<T> Shaped for Matrix<T> {
    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }
}

/// An unchecked read cursor over a [`Matrix`].
///
/// Holds the flat offset alongside the logical `(row, col)` position so each
/// step is a single add or subtract. No bounds checks are performed outside
/// debug builds; the checked [`Matrix::get`] path is the accessor that
/// reports [`AlnError::IndexOutOfBounds`].
#[derive(Debug, Clone)]
pub struct MatrixCursor<'a, T> {
    data: &'a [T],
    cols: usize,
    offset: usize,
    row: usize,
    col: usize,
}

impl<'a, T> MatrixCursor<'a, T> {
    /// The cell under the cursor.
    #[inline]
    pub fn value(&self) -> &'a T {
        &self.data[self.offset]
    }

    /// Current row.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Current column.
    pub fn col(&self) -> usize {
        self.col
    }

    /// Move one column right.
    #[inline]
    pub fn step_right(&mut self) {
        self.offset += 1;
        self.col += 1;
        debug_assert!(self.col < self.cols);
    }

    /// Move one column left.
    #[inline]
    pub fn step_left(&mut self) {
        debug_assert!(self.col > 0);
        self.offset -= 1;
        self.col -= 1;
    }

    /// Move one row down.
    #[inline]
    pub fn step_down(&mut self) {
        self.offset += self.cols;
        self.row += 1;
        debug_assert!(self.offset < self.data.len());
    }

    /// Move one row up.
    #[inline]
    pub fn step_up(&mut self) {
        debug_assert!(self.row > 0);
        self.offset -= self.cols;
        self.row -= 1;
    }

    /// Move one row up and one column left.
    #[inline]
    pub fn step_up_left(&mut self) {
        debug_assert!(self.row > 0 && self.col > 0);
        self.offset -= self.cols + 1;
        self.row -= 1;
        self.col -= 1;
    }

    /// Move `n` rows up.
    #[inline]
    pub fn step_up_by(&mut self, n: usize) {
        debug_assert!(self.row >= n);
        self.offset -= self.cols * n;
        self.row -= n;
    }

    /// Move `n` columns left.
    #[inline]
    pub fn step_left_by(&mut self, n: usize) {
        debug_assert!(self.col >= n);
        self.offset -= n;
        self.col -= n;
    }
}

/// A square-only layout over [`Matrix`].
#[derive(Debug, Clone, PartialEq)]
pub struct SquareMatrix<T> {
    inner: Matrix<T>,
}

impl<T: Clone> SquareMatrix<T> {
    /// Create an `n` x `n` matrix with every cell set to `fill`.
    pub fn new(n: usize, fill: T) -> Self {
        Self {
            inner: Matrix::new(n, n, fill),
        }
    }

    /// Create from explicit dimensions, which must be equal.
    ///
    /// # Errors
    ///
    /// Returns [`AlnError::DimensionMismatch`] if `rows != cols`.
    pub fn from_dims(rows: usize, cols: usize, fill: T) -> Result<Self> {
        if rows != cols {
            return Err(AlnError::DimensionMismatch { rows, cols });
        }
        Ok(Self::new(rows, fill))
    }
}

impl<T> SquareMatrix<T> {
    /// Side length.
    pub fn n(&self) -> usize {
        self.inner.rows()
    }

    /// Bounds-checked cell access.
    ///
    /// # Errors
    ///
    /// Returns [`AlnError::IndexOutOfBounds`] on out-of-range indices.
    pub fn get(&self, row: usize, col: usize) -> Result<&T> {
        self.inner.get(row, col)
    }

    /// Bounds-checked mutable cell access.
    ///
    /// # Errors
    ///
    /// Returns [`AlnError::IndexOutOfBounds`] on out-of-range indices.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut T> {
        self.inner.get_mut(row, col)
    }
}

/// An upper-triangular packed layout: cells `(r, c)` with `r <= c` of an
/// `n` x `n` grid, stored in `n * (n + 1) / 2` slots.
///
/// Row `r` starts at offset `r * n - r * (r - 1) / 2` and holds columns
/// `r..n`.
#[derive(Debug, Clone, PartialEq)]
pub struct UpperTriangular<T> {
    data: Vec<T>,
    n: usize,
}

impl<T: Clone> UpperTriangular<T> {
    /// Create an `n` x `n` upper-triangular matrix with every stored cell
    /// set to `fill`.
    pub fn new(n: usize, fill: T) -> Self {
        Self {
            data: vec![fill; n * (n + 1) / 2],
            n,
        }
    }

    /// Create from explicit dimensions, which must be equal.
    ///
    /// # Errors
    ///
    /// Returns [`AlnError::DimensionMismatch`] if `rows != cols`.
    pub fn from_dims(rows: usize, cols: usize, fill: T) -> Result<Self> {
        if rows != cols {
            return Err(AlnError::DimensionMismatch { rows, cols });
        }
        Ok(Self::new(rows, fill))
    }
}

impl<T> UpperTriangular<T> {
    /// Side length.
    pub fn n(&self) -> usize {
        self.n
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        (2 * self.n - row + 1) * row / 2 + (col - row)
    }

    /// Bounds-checked cell access; only `row <= col` cells are stored.
    ///
    /// # Errors
    ///
    /// Returns [`AlnError::IndexOutOfBounds`] if the cell lies outside the
    /// grid or below the diagonal.
    pub fn get(&self, row: usize, col: usize) -> Result<&T> {
        if row >= self.n || col >= self.n || row > col {
            return Err(AlnError::IndexOutOfBounds {
                row,
                col,
                rows: self.n,
                cols: self.n,
            });
        }
        Ok(&self.data[self.offset(row, col)])
    }

    /// Bounds-checked mutable cell access; only `row <= col` cells are stored.
    ///
    /// # Errors
    ///
    /// Returns [`AlnError::IndexOutOfBounds`] if the cell lies outside the
    /// grid or below the diagonal.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut T> {
        if row >= self.n || col >= self.n || row > col {
            return Err(AlnError::IndexOutOfBounds {
                row,
                col,
                rows: self.n,
                cols: self.n,
            });
        }
        let off = self.offset(row, col);
        Ok(&mut self.data[off])
    }
}
