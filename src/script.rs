//! Linearize a snake list into an edit script, and group the script into
//! hunks of consecutive changes.

use crate::types::{EditOp, OpKind, Snake, SnakeKind};

/// Convert an ordered snake list into edit operations.
///
/// Diagonal snakes emit one `Equal` per position (value taken from `old`),
/// horizontal snakes one `Delete` per position, vertical snakes one `Insert`
/// per position.  Empty snakes emit nothing.
pub fn project<'a, T>(snakes: &[Snake], old: &'a [T], new: &'a [T]) -> Vec<EditOp<'a, T>> {
    let mut ops = Vec::new();
    for s in snakes {
        match s.kind() {
            SnakeKind::Match => {
                debug_assert_eq!(s.x_end - s.x_start, s.y_end - s.y_start);
                for (i, x) in (s.x_start..s.x_end).enumerate() {
                    ops.push(EditOp::Equal {
                        old_index: x,
                        new_index: s.y_start + i,
                        value: &old[x],
                    });
                }
            }
            SnakeKind::Deletion => {
                for x in s.x_start..s.x_end {
                    ops.push(EditOp::Delete {
                        old_index: x,
                        value: &old[x],
                    });
                }
            }
            SnakeKind::Insertion => {
                for y in s.y_start..s.y_end {
                    ops.push(EditOp::Insert {
                        new_index: y,
                        value: &new[y],
                    });
                }
            }
            SnakeKind::Empty => {}
        }
    }
    ops
}

/// A maximal run of changes: `old_len` elements of the old sequence starting
/// at `old_start` are replaced by `new_len` elements of the new sequence
/// starting at `new_start`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hunk {
    pub old_start: usize,
    pub old_len: usize,
    pub new_start: usize,
    pub new_len: usize,
}

impl Hunk {
    pub fn kind(&self) -> HunkKind {
        match (self.old_len > 0, self.new_len > 0) {
            (true, true) => HunkKind::Replace,
            (true, false) => HunkKind::Delete,
            _ => HunkKind::Insert,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HunkKind {
    Delete,
    Insert,
    Replace,
}

/// Group consecutive `Delete`/`Insert` operations into hunks.
pub fn hunks<T>(ops: &[EditOp<'_, T>]) -> Vec<Hunk> {
    let mut out = Vec::new();
    // Positions in old/new reached so far.
    let mut old_pos = 0;
    let mut new_pos = 0;
    let mut current: Option<Hunk> = None;

    for op in ops {
        match *op {
            EditOp::Equal {
                old_index,
                new_index,
                ..
            } => {
                if let Some(h) = current.take() {
                    out.push(h);
                }
                old_pos = old_index + 1;
                new_pos = new_index + 1;
            }
            EditOp::Delete { old_index, .. } => {
                let h = current.get_or_insert(Hunk {
                    old_start: old_index,
                    old_len: 0,
                    new_start: new_pos,
                    new_len: 0,
                });
                h.old_len += 1;
                old_pos = old_index + 1;
            }
            EditOp::Insert { new_index, .. } => {
                let h = current.get_or_insert(Hunk {
                    old_start: old_pos,
                    old_len: 0,
                    new_start: new_index,
                    new_len: 0,
                });
                h.new_len += 1;
                new_pos = new_index + 1;
            }
        }
    }
    if let Some(h) = current {
        out.push(h);
    }
    out
}

/// Number of operations of the given kind.
pub fn count_kind<T>(ops: &[EditOp<'_, T>], kind: OpKind) -> usize {
    ops.iter().filter(|op| op.kind() == kind).count()
}
