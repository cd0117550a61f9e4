use super::middle::find_middle_snake;
use super::EditGraph;
use crate::types::{DiffError, Region, Snake};

/// Pending work for the path builder.
enum Task {
    Split(Region),
    Emit(Snake),
}

/// Divide and conquer over `region`: split around the middle snake, solve
/// the part above-left of it, then the part below-right of it.
///
/// Returns the ordered snake list `left ++ [mid] ++ right`.  The recursion
/// is unrolled onto an explicit stack (tasks are pushed in reverse order),
/// since degenerate inputs nest as deep as `region.size()`.
pub fn find_path<T, F>(region: &Region, graph: &EditGraph<'_, T, F>) -> Result<Vec<Snake>, DiffError>
where
    F: Fn(&T, &T) -> bool,
{
    let mut snakes = Vec::new();
    let mut stack = vec![Task::Split(*region)];

    while let Some(task) = stack.pop() {
        match task {
            Task::Emit(snake) => snakes.push(snake),
            Task::Split(region) => {
                let Some(mid) = find_middle_snake(&region, graph)? else {
                    continue;
                };
                let s = mid.snake;
                let before = Region::new(region.left, region.top, s.x_start, s.y_start);
                let after = Region::new(s.x_end, s.y_end, region.right, region.bottom);

                stack.push(Task::Split(after));
                for piece in mid.pieces().rev() {
                    stack.push(Task::Emit(piece));
                }
                stack.push(Task::Split(before));
            }
        }
    }

    Ok(snakes)
}
