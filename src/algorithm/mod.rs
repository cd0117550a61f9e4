pub mod frontier;
pub mod middle;
pub mod path;

use tracing::debug;

use crate::script::project;
use crate::types::{diff_summary, DiffError, DiffOptions, EditOp, OpKind, Region, Snake};

/// The two sequences under comparison plus the equality predicate.
///
/// Both sequences are only ever read; every stage of the search borrows
/// the same graph.
pub struct EditGraph<'a, T, F> {
    old: &'a [T],
    new: &'a [T],
    eq: F,
}

impl<'a, T, F> EditGraph<'a, T, F>
where
    F: Fn(&T, &T) -> bool,
{
    pub fn new(old: &'a [T], new: &'a [T], eq: F) -> Self {
        EditGraph { old, new, eq }
    }

    /// Lengths of the old and new sequences.
    pub(crate) fn lens(&self) -> (usize, usize) {
        (self.old.len(), self.new.len())
    }

    /// Whether the diagonal edge into `(x + 1, y + 1)` exists.
    #[inline]
    pub(crate) fn matches(&self, x: isize, y: isize) -> bool {
        (self.eq)(&self.old[x as usize], &self.new[y as usize])
    }

    /// Lengths of the common prefix and common suffix (non-overlapping).
    pub fn common_affixes(&self) -> (usize, usize) {
        let n = self.old.len().min(self.new.len());
        let mut head = 0;
        while head < n && (self.eq)(&self.old[head], &self.new[head]) {
            head += 1;
        }
        let mut tail = 0;
        while tail < n - head
            && (self.eq)(
                &self.old[self.old.len() - 1 - tail],
                &self.new[self.new.len() - 1 - tail],
            )
        {
            tail += 1;
        }
        (head, tail)
    }
}

/// Log shared statistics for a finished edit script.
pub(crate) fn log_script_stats<T>(ops: &[EditOp<'_, T>]) {
    let summary = diff_summary(ops);
    let mut runs: Vec<usize> = Vec::new();
    let mut current = 0usize;
    for op in ops {
        if op.kind() == OpKind::Equal {
            current += 1;
        } else if current > 0 {
            runs.push(current);
            current = 0;
        }
    }
    if current > 0 {
        runs.push(current);
    }
    let longest = runs.iter().copied().max().unwrap_or(0);
    debug!(
        ops = summary.num_ops,
        equal = summary.num_equal,
        deleted = summary.num_deleted,
        inserted = summary.num_inserted,
        hunks = summary.num_hunks,
        unchanged_runs = runs.len(),
        longest_run = longest,
        "edit script computed"
    );
}

/// Compute the edit script with a caller-supplied equality predicate.
pub fn diff_with<'a, T, F>(
    old: &'a [T],
    new: &'a [T],
    eq: F,
    opts: &DiffOptions,
) -> Result<Vec<EditOp<'a, T>>, DiffError>
where
    F: Fn(&T, &T) -> bool,
{
    let graph = EditGraph::new(old, new, eq);
    let whole = Region::whole(old.len(), new.len());

    let snakes = if opts.strip_affixes {
        let (head, tail) = graph.common_affixes();
        let inner = Region::new(head, head, old.len() - tail, new.len() - tail);
        debug!(prefix = head, suffix = tail, "stripped common affixes");
        let mut snakes = vec![Snake::new(0, 0, head, head)];
        snakes.extend(path::find_path(&inner, &graph)?);
        snakes.push(Snake::new(inner.right, inner.bottom, whole.right, whole.bottom));
        snakes
    } else {
        path::find_path(&whole, &graph)?
    };

    let ops = project(&snakes, old, new);
    if opts.verbose {
        log_script_stats(&ops);
    }
    Ok(ops)
}

/// Compute the edit script with a caller-supplied equality predicate and
/// default options.
pub fn diff_by<'a, T, F>(old: &'a [T], new: &'a [T], eq: F) -> Result<Vec<EditOp<'a, T>>, DiffError>
where
    F: Fn(&T, &T) -> bool,
{
    diff_with(old, new, eq, &DiffOptions::default())
}

/// Compute the edit script turning `old` into `new` using `==`.
pub fn diff<'a, T: PartialEq>(old: &'a [T], new: &'a [T]) -> Result<Vec<EditOp<'a, T>>, DiffError> {
    diff_with(old, new, |a: &T, b: &T| a == b, &DiffOptions::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn affixes_do_not_overlap() {
        let a = b"aaaa";
        let b = b"aa";
        let g = EditGraph::new(&a[..], &b[..], |x: &u8, y: &u8| x == y);
        assert_eq!(g.common_affixes(), (2, 0));

        let a = b"abXcd";
        let b = b"abYYcd";
        let g = EditGraph::new(&a[..], &b[..], |x: &u8, y: &u8| x == y);
        assert_eq!(g.common_affixes(), (2, 2));
    }

    #[test]
    fn stripping_keeps_the_script_minimal() {
        let a: Vec<char> = "the quick brown fox".chars().collect();
        let b: Vec<char> = "the quack brown fix".chars().collect();
        let plain = diff(&a, &b).unwrap();
        let opts = DiffOptions {
            strip_affixes: true,
            ..DiffOptions::default()
        };
        let stripped = diff_with(&a, &b, |x: &char, y: &char| x == y, &opts).unwrap();
        assert_eq!(
            diff_summary(&plain).edit_distance,
            diff_summary(&stripped).edit_distance
        );
        assert_eq!(stripped.first().map(|op| op.kind()), Some(OpKind::Equal));
    }

    #[test]
    fn predicate_drives_matching() {
        let a = ["Alpha", "beta", "GAMMA"];
        let b = ["alpha", "BETA", "gamma"];
        let ops = diff_by(&a, &b, |x, y| x.eq_ignore_ascii_case(y)).unwrap();
        assert_eq!(ops.len(), 3);
        assert!(ops.iter().all(|op| op.kind() == OpKind::Equal));
        // Equal carries the element from the old sequence.
        assert_eq!(*ops[0].value(), "Alpha");
    }
}
