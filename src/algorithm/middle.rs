use tracing::trace;

use super::frontier::{backward, forward, Frontier};
use super::EditGraph;
use crate::types::{DiffError, MiddleSnake, Region};

/// Find the middle snake of `region`.
///
/// Runs the forward step then the backward step for each radius
/// `d = 0 ..= ceil(size / 2)`; the first overlap wins.  Returns `None` for
/// an empty region.  Both frontiers are allocated here and dropped on
/// return, so sibling regions never share search state.
pub fn find_middle_snake<T, F>(
    region: &Region,
    graph: &EditGraph<'_, T, F>,
) -> Result<Option<MiddleSnake>, DiffError>
where
    F: Fn(&T, &T) -> bool,
{
    let (old_len, new_len) = graph.lens();
    region.validate_within(old_len, new_len)?;
    if region.is_empty() {
        return Ok(None);
    }

    let max = (region.size() + 1) / 2;
    let mut vf = Frontier::new(max);
    let mut vb = Frontier::new(max);
    vf[1] = region.left as isize;
    vb[1] = region.bottom as isize;

    for d in 0..=max as isize {
        if let Some(mid) = forward(region, d, &mut vf, &vb, graph) {
            trace!(region = %region, d, snake = %mid.snake, "forward overlap");
            return Ok(Some(mid));
        }
        if let Some(mid) = backward(region, d, &vf, &mut vb, graph) {
            trace!(region = %region, d, snake = %mid.snake, "backward overlap");
            return Ok(Some(mid));
        }
    }

    Err(DiffError::SearchExhausted {
        region: *region,
        radius: max,
    })
}
