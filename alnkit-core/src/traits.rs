//! Core trait definitions shared across the alnkit crates.

/// A type that carries a numeric score (alignment score, quality, etc.).
pub trait Scored {
    /// The score value.
    fn score(&self) -> f64;
}

/// A type with a two-dimensional dense shape.
pub trait Shaped {
    /// Number of rows.
    fn rows(&self) -> usize;

    /// Number of columns.
    fn cols(&self) -> usize;

    /// Total number of addressable cells.
    fn len(&self) -> usize {
        self.rows() * self.cols()
    }

    /// Whether the shape holds no cells.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
