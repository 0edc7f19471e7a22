//! Shared primitives for the alnkit alignment workspace.
//!
//! `alnkit-core` provides the foundation the algorithm crates build on:
//!
//! - **Error types** — [`AlnError`] and [`Result`] for structured error handling
//! - **Traits** — [`Scored`] and [`Shaped`] abstractions
//! - **Matrices** — [`Matrix`] with a bounds-checked accessor and an unchecked
//!   O(1)-step [`MatrixCursor`], plus square and upper-triangular layouts

pub mod error;
pub mod matrix;
pub mod traits;

pub use error::{AlnError, Result};
pub use matrix::{Matrix, MatrixCursor, SquareMatrix, UpperTriangular};
pub use traits::*;
