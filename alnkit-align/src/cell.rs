//! Matrix cell models for the aligner families.
//!
//! Each cell records the score of the best alignment ending at its position
//! together with an origin tag naming the neighbor (and, for the affine
//! family, the recurrence channel) that produced it. Traceback is driven
//! entirely by these tags; no score re-derivation is needed.

/// Which neighbor produced a cell's optimal score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// No predecessor: an alignment starting (or restarting) here.
    Stop,
    /// The up-left neighbor, via a pairing.
    Diag,
    /// The left neighbor, via a gap consuming one element of `seq0`.
    Left,
    /// The top neighbor, via a gap consuming one element of `seq1`.
    Up,
}

/// Cell of the linear-gap and two-sided-linear families.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimpleCell {
    pub score: f64,
    pub origin: Origin,
}

impl Default for SimpleCell {
    /// A free-start border cell: `Stop` at score 0.
    fn default() -> Self {
        Self {
            score: 0.0,
            origin: Origin::Stop,
        }
    }
}

/// Cell of the affine-gap family: three recurrence channels plus extension
/// flags.
///
/// Invariant: when `origin != Stop`, the channel named by `origin` holds the
/// maximum of the three. `extending_left`/`extending_up` record whether the
/// Left/Up channel value extended an existing gap run rather than opening a
/// new one; traceback needs this to know when the traced channel switches
/// back to a neighbor's overall best.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineCell {
    pub diag: f64,
    pub left: f64,
    pub up: f64,
    pub origin: Origin,
    pub extending_left: bool,
    pub extending_up: bool,
}

impl AffineCell {
    /// The cell's overall best score: the channel its origin selected, or 0
    /// for a `Stop` cell (an alignment start costs nothing).
    pub fn best(&self) -> f64 {
        match self.origin {
            Origin::Stop => 0.0,
            Origin::Diag => self.diag,
            Origin::Left => self.left,
            Origin::Up => self.up,
        }
    }
}

impl Default for AffineCell {
    /// A free-start border cell: `Stop`, all channels unreachable.
    fn default() -> Self {
        Self {
            diag: f64::NEG_INFINITY,
            left: f64::NEG_INFINITY,
            up: f64::NEG_INFINITY,
            origin: Origin::Stop,
            extending_left: false,
            extending_up: false,
        }
    }
}

/// Origin tag of the consolidating family; the many-to-one variants carry
/// the number of consolidated elements (always >= 2).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragOrigin {
    /// No predecessor.
    Stop,
    /// Plain pairing from the up-left neighbor.
    Diag,
    /// Gap consuming one element of `seq0`.
    Left,
    /// Gap consuming one element of `seq1`.
    Up,
    /// `n` elements of `seq0` consolidated against one element of `seq1`.
    ManyFromSeq0(usize),
    /// `n` elements of `seq1` consolidated against one element of `seq0`.
    ManyFromSeq1(usize),
}

/// Cell of the consolidating family.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FragmentCell {
    pub score: f64,
    pub origin: FragOrigin,
}

impl Default for FragmentCell {
    /// A free-start border cell: `Stop` at score 0.
    fn default() -> Self {
        Self {
            score: 0.0,
            origin: FragOrigin::Stop,
        }
    }
}

/// Read access to a cell's overall score, used by the best-cell locator.
pub trait ScoreCell {
    /// The cell's overall best score.
    fn best_score(&self) -> f64;
}

impl ScoreCell for SimpleCell {
    fn best_score(&self) -> f64 {
        self.score
    }
}

impl ScoreCell for AffineCell {
    fn best_score(&self) -> f64 {
        self.best()
    }
}

impl ScoreCell for FragmentCell {
    fn best_score(&self) -> f64 {
        self.score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn affine_best_follows_origin() {
        let cell = AffineCell {
            diag: 1.0,
            left: 3.0,
            up: 2.0,
            origin: Origin::Left,
            extending_left: true,
            extending_up: false,
        };
        assert_eq!(cell.best(), 3.0);
        assert_eq!(cell.best_score(), 3.0);
    }

    #[test]
    fn affine_stop_scores_zero() {
        let cell = AffineCell::default();
        assert_eq!(cell.best(), 0.0);
        assert!(cell.left.is_infinite());
    }

    #[test]
    fn defaults_are_free_start_cells() {
        assert_eq!(SimpleCell::default().origin, Origin::Stop);
        assert_eq!(SimpleCell::default().score, 0.0);
        assert_eq!(FragmentCell::default().origin, FragOrigin::Stop);
    }
}
