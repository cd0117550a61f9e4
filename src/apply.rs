use crate::types::{DiffError, EditOp};

/// Reconstruct the old sequence from a script (`Equal` + `Delete` values).
pub fn old_side<'a, T>(ops: &[EditOp<'a, T>]) -> Vec<&'a T> {
    ops.iter()
        .filter_map(|op| match *op {
            EditOp::Equal { value, .. } | EditOp::Delete { value, .. } => Some(value),
            EditOp::Insert { .. } => None,
        })
        .collect()
}

/// Reconstruct the new sequence from a script (`Equal` + `Insert` values).
pub fn new_side<'a, T>(ops: &[EditOp<'a, T>]) -> Vec<&'a T> {
    ops.iter()
        .filter_map(|op| match *op {
            EditOp::Equal { value, .. } | EditOp::Insert { value, .. } => Some(value),
            EditOp::Delete { .. } => None,
        })
        .collect()
}

/// Swap the roles of old and new: deletions become insertions and vice versa.
///
/// The result is a valid script from the new sequence back to the old one.
/// `Equal` keeps its value (the element of the original old sequence).
pub fn invert<'a, T>(ops: &[EditOp<'a, T>]) -> Vec<EditOp<'a, T>> {
    ops.iter()
        .map(|op| match *op {
            EditOp::Equal {
                old_index,
                new_index,
                value,
            } => EditOp::Equal {
                old_index: new_index,
                new_index: old_index,
                value,
            },
            EditOp::Delete { old_index, value } => EditOp::Insert {
                new_index: old_index,
                value,
            },
            EditOp::Insert { new_index, value } => EditOp::Delete {
                old_index: new_index,
                value,
            },
        })
        .collect()
}

/// Replay a script against `old`, producing the new sequence.
///
/// Every `Equal` and `Delete` must name the next unread index of `old` and
/// carry an equal value, and the script must consume `old` entirely.
pub fn apply_script<T: Clone + PartialEq>(
    old: &[T],
    ops: &[EditOp<'_, T>],
) -> Result<Vec<T>, DiffError> {
    let mut out = Vec::with_capacity(old.len());
    let mut pos = 0;
    for (index, op) in ops.iter().enumerate() {
        match *op {
            EditOp::Equal {
                old_index, value, ..
            }
            | EditOp::Delete { old_index, value } => {
                if old_index != pos {
                    return Err(DiffError::ScriptMismatch {
                        index,
                        reason: "old index out of sequence",
                    });
                }
                if old.get(pos) != Some(value) {
                    return Err(DiffError::ScriptMismatch {
                        index,
                        reason: "value differs from old sequence",
                    });
                }
                if let EditOp::Equal { .. } = op {
                    out.push(value.clone());
                }
                pos += 1;
            }
            EditOp::Insert { value, .. } => out.push(value.clone()),
        }
    }
    if pos != old.len() {
        return Err(DiffError::ScriptMismatch {
            index: ops.len(),
            reason: "script ends before the old sequence",
        });
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff;

    #[test]
    fn apply_reconstructs_new() {
        let a: Vec<char> = "the cat sat".chars().collect();
        let b: Vec<char> = "a cat stood".chars().collect();
        let ops = diff(&a, &b).unwrap();
        assert_eq!(apply_script(&a, &ops).unwrap(), b);
        assert_eq!(old_side(&ops).into_iter().copied().collect::<Vec<_>>(), a);
        assert_eq!(new_side(&ops).into_iter().copied().collect::<Vec<_>>(), b);
    }

    #[test]
    fn apply_rejects_foreign_input() {
        let a = [1, 2, 3];
        let b = [1, 3];
        let ops = diff(&a, &b).unwrap();
        let err = apply_script(&[1, 9, 3], &ops).unwrap_err();
        assert!(matches!(err, DiffError::ScriptMismatch { index: 1, .. }));
        let err = apply_script(&[1, 2, 3, 4], &ops).unwrap_err();
        assert!(matches!(err, DiffError::ScriptMismatch { .. }));
    }

    #[test]
    fn inverted_script_applies_backwards() {
        let a: Vec<u8> = b"abcabba".to_vec();
        let b: Vec<u8> = b"cbabac".to_vec();
        let ops = diff(&a, &b).unwrap();
        let back = invert(&ops);
        assert_eq!(apply_script(&b, &back).unwrap(), a);
    }
}
