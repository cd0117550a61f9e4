use std::fmt;

use thiserror::Error;

// ============================================================================
// Edit graph coordinates (Myers 1986, Section 4b)
//
// A point (x, y) sits between A[x-1]/A[x] and B[y-1]/B[y].  A horizontal
// edge deletes A[x], a vertical edge inserts B[y], a diagonal edge keeps
// A[x] == B[y].  Diagonal k = x - y, measured relative to a region's
// top-left corner; the backward search uses c = k - delta.
// ============================================================================

/// Rectangle of the edit graph covering `[left, right)` of A and
/// `[top, bottom)` of B.
///
/// Construction never fails.  Every stage that consumes a region calls
/// [`Region::validate`] before doing any diagonal arithmetic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    pub left: usize,
    pub top: usize,
    pub right: usize,
    pub bottom: usize,
}

impl Region {
    pub fn new(left: usize, top: usize, right: usize, bottom: usize) -> Self {
        Region {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Region spanning both sequences in full.
    pub fn whole(old_len: usize, new_len: usize) -> Self {
        Region::new(0, 0, old_len, new_len)
    }

    pub fn width(&self) -> usize {
        self.right - self.left
    }

    pub fn height(&self) -> usize {
        self.bottom - self.top
    }

    pub fn size(&self) -> usize {
        self.width() + self.height()
    }

    /// Signed difference between the spans: `width - height`.
    pub fn delta(&self) -> isize {
        self.width() as isize - self.height() as isize
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Reject inverted regions.  Clamping would corrupt the diagonal
    /// arithmetic, so an inverted region is always an error.
    pub fn validate(&self) -> Result<(), DiffError> {
        if self.left > self.right || self.top > self.bottom {
            return Err(self.invalid());
        }
        Ok(())
    }

    /// Reject inverted regions and regions reaching past either sequence.
    pub fn validate_within(&self, old_len: usize, new_len: usize) -> Result<(), DiffError> {
        self.validate()?;
        if self.right > old_len || self.bottom > new_len {
            return Err(self.invalid());
        }
        Ok(())
    }

    fn invalid(&self) -> DiffError {
        DiffError::InvalidRegion {
            left: self.left,
            top: self.top,
            right: self.right,
            bottom: self.bottom,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}..{}) x [{}..{})",
            self.left, self.right, self.top, self.bottom
        )
    }
}

// ============================================================================
// Snakes
// ============================================================================

/// Run through the edit graph from `(x_start, y_start)` to `(x_end, y_end)`.
///
/// Snakes in a path list are pure: either a diagonal run, a horizontal
/// run, a vertical run, or empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Snake {
    pub x_start: usize,
    pub y_start: usize,
    pub x_end: usize,
    pub y_end: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnakeKind {
    Match,
    Deletion,
    Insertion,
    Empty,
}

impl Snake {
    pub fn new(x_start: usize, y_start: usize, x_end: usize, y_end: usize) -> Self {
        Snake {
            x_start,
            y_start,
            x_end,
            y_end,
        }
    }

    pub fn kind(&self) -> SnakeKind {
        let dx = self.x_end - self.x_start;
        let dy = self.y_end - self.y_start;
        match (dx > 0, dy > 0) {
            (true, true) => SnakeKind::Match,
            (true, false) => SnakeKind::Deletion,
            (false, true) => SnakeKind::Insertion,
            (false, false) => SnakeKind::Empty,
        }
    }
}

impl fmt::Display for Snake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) -> ({}, {})",
            self.x_start, self.y_start, self.x_end, self.y_end
        )
    }
}

/// Which end of a middle snake carries its single non-diagonal edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    /// Pure diagonal (only found at radius 0).
    None,
    /// Edge first, then the diagonal run (forward search).
    Leading,
    /// Diagonal run first, then the edge (backward search).
    Trailing,
}

/// Snake at the meeting point of the forward and backward searches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MiddleSnake {
    pub snake: Snake,
    pub edge: Edge,
}

impl MiddleSnake {
    /// Split into the edge and the diagonal run, in path order.
    pub fn pieces(&self) -> impl DoubleEndedIterator<Item = Snake> {
        let s = self.snake;
        let dx = s.x_end - s.x_start;
        let dy = s.y_end - s.y_start;
        let parts = match self.edge {
            Edge::None => [Some(s), None],
            Edge::Leading => {
                let (x, y) = if dx > dy {
                    (s.x_start + 1, s.y_start)
                } else {
                    (s.x_start, s.y_start + 1)
                };
                [
                    Some(Snake::new(s.x_start, s.y_start, x, y)),
                    Some(Snake::new(x, y, s.x_end, s.y_end)),
                ]
            }
            Edge::Trailing => {
                let (x, y) = if dx > dy {
                    (s.x_end - 1, s.y_end)
                } else {
                    (s.x_end, s.y_end - 1)
                };
                [
                    Some(Snake::new(s.x_start, s.y_start, x, y)),
                    Some(Snake::new(x, y, s.x_end, s.y_end)),
                ]
            }
        };
        parts.into_iter().flatten()
    }
}

// ============================================================================
// Edit script
// ============================================================================

/// One step of an edit script.  Values borrow from the input sequences.
#[derive(Debug, PartialEq, Eq)]
pub enum EditOp<'a, T> {
    Equal {
        old_index: usize,
        new_index: usize,
        value: &'a T,
    },
    Delete {
        old_index: usize,
        value: &'a T,
    },
    Insert {
        new_index: usize,
        value: &'a T,
    },
}

// Manual impls: derive would demand `T: Clone`/`T: Copy`.
impl<T> Clone for EditOp<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for EditOp<'_, T> {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpKind {
    Equal,
    Delete,
    Insert,
}

impl<'a, T> EditOp<'a, T> {
    pub fn kind(&self) -> OpKind {
        match self {
            EditOp::Equal { .. } => OpKind::Equal,
            EditOp::Delete { .. } => OpKind::Delete,
            EditOp::Insert { .. } => OpKind::Insert,
        }
    }

    pub fn value(&self) -> &'a T {
        match *self {
            EditOp::Equal { value, .. }
            | EditOp::Delete { value, .. }
            | EditOp::Insert { value, .. } => value,
        }
    }

    pub fn is_change(&self) -> bool {
        !matches!(self, EditOp::Equal { .. })
    }
}

impl<T: fmt::Debug> fmt::Display for EditOp<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditOp::Equal {
                old_index,
                new_index,
                value,
            } => write!(f, "EQUAL(old={}, new={}, {:?})", old_index, new_index, value),
            EditOp::Delete { old_index, value } => {
                write!(f, "DELETE(old={}, {:?})", old_index, value)
            }
            EditOp::Insert { new_index, value } => {
                write!(f, "INSERT(new={}, {:?})", new_index, value)
            }
        }
    }
}

// ============================================================================
// Options
// ============================================================================

/// Options for [`crate::diff_with`].
#[derive(Clone, Debug, Default)]
pub struct DiffOptions {
    /// Trim the common prefix and suffix before searching.
    pub strip_affixes: bool,
    /// Emit script statistics as a `debug` event.
    pub verbose: bool,
}

// ============================================================================
// Error type
// ============================================================================

#[derive(Debug, Error)]
pub enum DiffError {
    #[error("invalid region: left={left} top={top} right={right} bottom={bottom}")]
    InvalidRegion {
        left: usize,
        top: usize,
        right: usize,
        bottom: usize,
    },
    #[error("no middle snake in region {region} within radius {radius}")]
    SearchExhausted { region: Region, radius: usize },
    #[error("edit script does not match input at op {index}: {reason}")]
    ScriptMismatch { index: usize, reason: &'static str },
    #[error("input is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// ============================================================================
// Summary statistics
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DiffSummary {
    pub num_ops: usize,
    pub num_equal: usize,
    pub num_deleted: usize,
    pub num_inserted: usize,
    /// Insertions plus deletions.
    pub edit_distance: usize,
    pub num_hunks: usize,
}

pub fn diff_summary<T>(ops: &[EditOp<'_, T>]) -> DiffSummary {
    let mut num_equal = 0;
    let mut num_deleted = 0;
    let mut num_inserted = 0;
    let mut num_hunks = 0;
    let mut in_hunk = false;
    for op in ops {
        match op.kind() {
            OpKind::Equal => num_equal += 1,
            OpKind::Delete => num_deleted += 1,
            OpKind::Insert => num_inserted += 1,
        }
        if op.is_change() && !in_hunk {
            num_hunks += 1;
        }
        in_hunk = op.is_change();
    }
    DiffSummary {
        num_ops: ops.len(),
        num_equal,
        num_deleted,
        num_inserted,
        edit_distance: num_deleted + num_inserted,
        num_hunks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_derived_fields() {
        let r = Region::new(2, 5, 7, 8);
        assert_eq!(r.width(), 5);
        assert_eq!(r.height(), 3);
        assert_eq!(r.size(), 8);
        assert_eq!(r.delta(), 2);
        assert!(r.validate().is_ok());

        let tall = Region::new(4, 0, 4, 3);
        assert_eq!(tall.delta(), -3);
        assert!(!tall.is_empty());
        assert!(Region::new(3, 3, 3, 3).is_empty());
    }

    #[test]
    fn inverted_region_rejected() {
        let err = Region::new(5, 0, 4, 2).validate().unwrap_err();
        assert!(matches!(
            err,
            DiffError::InvalidRegion { left: 5, right: 4, .. }
        ));
        assert!(Region::new(0, 3, 1, 2).validate().is_err());
    }

    #[test]
    fn region_bounded_by_sequences() {
        assert!(Region::new(1, 0, 3, 2).validate_within(3, 2).is_ok());
        assert!(Region::new(0, 0, 4, 2).validate_within(3, 2).is_err());
        assert!(Region::new(0, 0, 3, 5).validate_within(3, 2).is_err());
        assert!(Region::new(2, 0, 1, 2).validate_within(3, 2).is_err());
    }

    #[test]
    fn snake_kinds() {
        assert_eq!(Snake::new(0, 0, 2, 2).kind(), SnakeKind::Match);
        assert_eq!(Snake::new(1, 1, 2, 1).kind(), SnakeKind::Deletion);
        assert_eq!(Snake::new(1, 1, 1, 3).kind(), SnakeKind::Insertion);
        assert_eq!(Snake::new(4, 4, 4, 4).kind(), SnakeKind::Empty);
    }

    #[test]
    fn leading_edge_split() {
        let mid = MiddleSnake {
            snake: Snake::new(1, 1, 4, 3),
            edge: Edge::Leading,
        };
        let parts: Vec<Snake> = mid.pieces().collect();
        assert_eq!(parts, vec![Snake::new(1, 1, 2, 1), Snake::new(2, 1, 4, 3)]);
    }

    #[test]
    fn trailing_edge_split() {
        let mid = MiddleSnake {
            snake: Snake::new(0, 0, 2, 3),
            edge: Edge::Trailing,
        };
        let parts: Vec<Snake> = mid.pieces().collect();
        assert_eq!(parts, vec![Snake::new(0, 0, 2, 2), Snake::new(2, 2, 2, 3)]);
    }

    #[test]
    fn summary_counts_hunks() {
        let a = ['a', 'b', 'c', 'd'];
        let b = ['x'];
        let ops = vec![
            EditOp::Equal { old_index: 0, new_index: 0, value: &a[0] },
            EditOp::Delete { old_index: 1, value: &a[1] },
            EditOp::Insert { new_index: 1, value: &b[0] },
            EditOp::Equal { old_index: 2, new_index: 2, value: &a[2] },
            EditOp::Delete { old_index: 3, value: &a[3] },
        ];
        let s = diff_summary(&ops);
        assert_eq!(s.num_ops, 5);
        assert_eq!(s.num_equal, 2);
        assert_eq!(s.num_deleted, 2);
        assert_eq!(s.num_inserted, 1);
        assert_eq!(s.edit_distance, 3);
        assert_eq!(s.num_hunks, 2);
    }
}
