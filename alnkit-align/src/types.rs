//! Core types for pairwise alignment results.

use core::fmt;

/// The boundary-condition policy of an alignment operation.
///
/// Every aligner family accepts all ten modes through its `align` dispatcher
/// as well as through the individually named methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AlignMode {
    /// Both sequences consumed end-to-end; leading and trailing gaps charged.
    Global,
    /// The trailing overhang of `seq0` is free; `seq1` is fully consumed.
    CutFirstEndOff,
    /// The trailing overhang of `seq1` is free; `seq0` is fully consumed.
    CutSecondEndOff,
    /// The trailing overhang of whichever sequence scores better is free.
    CutOneEndOff,
    /// The leading overhang of one sequence is free; both ends are pinned.
    CutOneBeginOff,
    /// Start pinned at the origin; both trailing overhangs may be cut.
    Initial,
    /// Aligns the ends of the sequences: free start, ends pinned.
    End,
    /// `seq1` fully consumed somewhere inside `seq0`; both `seq0` overhangs free.
    Inside,
    /// Free leading overhangs on both sides, free trailing overhang on one.
    Semi,
    /// Best-scoring local region; the alignment may restart anywhere for free.
    Partial,
}

/// One elementary unit of an alignment: how many elements each sequence
/// contributed, and the score delta of the step.
///
/// Exactly one count is 0 for a gap step; both are 1 for a plain pairing;
/// in the consolidating family one count may exceed 1 to record an n-to-1
/// fragment merge.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step {
    /// Elements consumed from `seq0`.
    pub count0: usize,
    /// Elements consumed from `seq1`.
    pub count1: usize,
    /// Score contributed by this step.
    pub score: f64,
}

impl Step {
    /// Classify the step by its consumption counts.
    pub fn kind(&self) -> StepKind {
        match (self.count0, self.count1) {
            (1, 1) => StepKind::Pair,
            (_, 0) => StepKind::GapInSeq1,
            (0, _) => StepKind::GapInSeq0,
            (1, _) => StepKind::ManyFromSeq1,
            (_, 1) => StepKind::ManyFromSeq0,
            (a, b) => unreachable!("malformed step counts ({a}, {b})"),
        }
    }
}

/// The shape of a [`Step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StepKind {
    /// One element of each sequence, paired.
    Pair,
    /// An element of `seq0` against a gap (nothing from `seq1`).
    GapInSeq1,
    /// An element of `seq1` against a gap (nothing from `seq0`).
    GapInSeq0,
    /// Several elements of `seq0` consolidated against one element of `seq1`.
    ManyFromSeq0,
    /// Several elements of `seq1` consolidated against one element of `seq0`.
    ManyFromSeq1,
}

impl StepKind {
    /// Single-character code used by [`Alignment::ops_string`].
    ///
    /// `M` pairing, `D` gap in `seq1`, `I` gap in `seq0`, `C`/`c` fragment
    /// merges consuming many from `seq0`/`seq1` respectively.
    pub fn code(&self) -> char {
        match self {
            StepKind::Pair => 'M',
            StepKind::GapInSeq1 => 'D',
            StepKind::GapInSeq0 => 'I',
            StepKind::ManyFromSeq0 => 'C',
            StepKind::ManyFromSeq1 => 'c',
        }
    }
}

/// The result of a pairwise alignment.
///
/// Positions are `(offset into seq0, offset into seq1)`, 0-based;
/// `start` is inclusive and `end` exclusive, so the aligned region of
/// `seq0` is `seq0[start.0..end.0]`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Alignment {
    /// Total alignment score; equals the sum of the step scores.
    pub score: f64,
    /// Where the alignment begins, per sequence.
    pub start: (usize, usize),
    /// Where the alignment ends, per sequence.
    pub end: (usize, usize),
    /// Elementary steps ordered from `start` to `end`.
    pub steps: Vec<Step>,
}

impl Alignment {
    /// Elements of `seq0` consumed by the alignment.
    pub fn len0(&self) -> usize {
        self.steps.iter().map(|s| s.count0).sum()
    }

    /// Elements of `seq1` consumed by the alignment.
    pub fn len1(&self) -> usize {
        self.steps.iter().map(|s| s.count1).sum()
    }

    /// Whether the alignment pairs nothing at all.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Number of one-to-one paired positions.
    pub fn pairs(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| s.kind() == StepKind::Pair)
            .count()
    }

    /// Number of gap positions (elements aligned against nothing).
    pub fn gaps(&self) -> usize {
        self.steps
            .iter()
            .filter_map(|s| match s.kind() {
                StepKind::GapInSeq1 => Some(s.count0),
                StepKind::GapInSeq0 => Some(s.count1),
                _ => None,
            })
            .sum()
    }

    /// Compact run-length encoding of the step kinds, e.g. `"3M1D2M"`.
    ///
    /// Fragment merges encode the consolidated count, e.g. `"3c"` for a
    /// three-from-`seq1` merge.
    pub fn ops_string(&self) -> String {
        let mut out = String::new();
        let mut run: Option<(char, usize)> = None;
        for step in &self.steps {
            let kind = step.kind();
            let code = kind.code();
            let n = match kind {
                StepKind::Pair => 1,
                StepKind::GapInSeq1 | StepKind::ManyFromSeq0 => step.count0,
                StepKind::GapInSeq0 | StepKind::ManyFromSeq1 => step.count1,
            };
            let mergeable = matches!(
                kind,
                StepKind::Pair | StepKind::GapInSeq1 | StepKind::GapInSeq0
            );
            match run {
                Some((c, len)) if mergeable && c == code => run = Some((c, len + n)),
                Some((c, len)) => {
                    out.push_str(&format!("{len}{c}"));
                    run = Some((code, n));
                }
                None => run = Some((code, n)),
            }
        }
        if let Some((c, len)) = run {
            out.push_str(&format!("{len}{c}"));
        }
        out
    }

    /// Check the structural invariants: the score is the sum of the step
    /// scores (up to accumulated rounding) and the consumed counts span
    /// `start..end` on both sequences.
    ///
    /// Intended for tests and debug assertions.
    pub fn is_consistent(&self) -> bool {
        let sum: f64 = self.steps.iter().map(|s| s.score).sum();
        (sum - self.score).abs() <= 1e-9 * (1.0 + self.score.abs())
            && self.end.0 - self.start.0 == self.len0()
            && self.end.1 - self.start.1 == self.len1()
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "score {} [{:?}..{:?}] {}",
            self.score,
            self.start,
            self.end,
            self.ops_string()
        )
    }
}

impl alnkit_core::Scored for Alignment {
    fn score(&self) -> f64 {
        self.score
    }
}
