//! Furthest-reaching frontiers for the bidirectional search (Myers 1986,
//! Section 4b, "A Linear Space Refinement").
//!
//! `vf[k]` holds the furthest x reached on forward diagonal `k`; `vb[c]`
//! holds the least y reached on backward diagonal `c = k - delta`.
//! Coordinates are signed while searching: predecessor points computed
//! near the region's edges may sit one step outside it.

use std::ops::{Index, IndexMut};

use super::EditGraph;
use crate::types::{Edge, MiddleSnake, Region, Snake};

/// Offset array indexed by a signed diagonal in `[-max, max]`.
#[derive(Debug, Clone)]
pub struct Frontier {
    offset: isize,
    v: Vec<isize>,
}

impl Frontier {
    /// Frontier for radii up to `max`.
    pub fn new(max: usize) -> Self {
        Frontier {
            offset: max as isize,
            v: vec![0; 2 * max + 1],
        }
    }
}

impl Index<isize> for Frontier {
    type Output = isize;

    fn index(&self, k: isize) -> &isize {
        &self.v[(k + self.offset) as usize]
    }
}

impl IndexMut<isize> for Frontier {
    fn index_mut(&mut self, k: isize) -> &mut isize {
        &mut self.v[(k + self.offset) as usize]
    }
}

/// Build a snake from search coordinates already known to lie in the region.
fn snake_at(x_start: isize, y_start: isize, x_end: isize, y_end: isize) -> Snake {
    Snake::new(
        x_start as usize,
        y_start as usize,
        x_end as usize,
        y_end as usize,
    )
}

/// One forward step at radius `d`, from the top-left corner.
///
/// Diagonals are scanned from `d` down to `-d`.  Moves right unless forced
/// down (`k == -d`) or the diagonal above reaches strictly further.  The
/// overlap test only runs when `delta` is odd; the backward frontier has
/// then explored radius `d - 1`.
pub fn forward<T, F>(
    region: &Region,
    d: isize,
    vf: &mut Frontier,
    vb: &Frontier,
    graph: &EditGraph<'_, T, F>,
) -> Option<MiddleSnake>
where
    F: Fn(&T, &T) -> bool,
{
    let left = region.left as isize;
    let top = region.top as isize;
    let right = region.right as isize;
    let bottom = region.bottom as isize;
    let delta = region.delta();

    for k in (-d..=d).rev().step_by(2) {
        let down = k == -d || (k != d && vf[k + 1] > vf[k - 1]);

        let k_prev = if down { k + 1 } else { k - 1 };
        let x_prev = vf[k_prev];
        let y_prev = (x_prev - left) - k_prev + top;

        let x = if down { x_prev } else { x_prev + 1 };
        let y = (x - left) - k + top;

        let (mut x_end, mut y_end) = (x, y);
        while x_end < right && y_end < bottom && graph.matches(x_end, y_end) {
            x_end += 1;
            y_end += 1;
        }

        vf[k] = x_end;

        let c = k - delta;
        if delta % 2 != 0 && c >= -(d - 1) && c <= d - 1 && y_end >= vb[c] {
            return Some(MiddleSnake {
                snake: snake_at(x_prev, y_prev, x_end, y_end),
                edge: Edge::Leading,
            });
        }
    }

    None
}

/// One backward step at radius `d`, from the bottom-right corner.
///
/// Mirror of [`forward`]: moves left unless the diagonal below holds a
/// strictly smaller y, extends toward the top-left, and tests for overlap
/// only when `delta` is even (the forward frontier has already explored
/// radius `d`).
pub fn backward<T, F>(
    region: &Region,
    d: isize,
    vf: &Frontier,
    vb: &mut Frontier,
    graph: &EditGraph<'_, T, F>,
) -> Option<MiddleSnake>
where
    F: Fn(&T, &T) -> bool,
{
    let left = region.left as isize;
    let top = region.top as isize;
    let delta = region.delta();

    for c in (-d..=d).rev().step_by(2) {
        let to_left = c == -d || (c != d && vb[c + 1] < vb[c - 1]);
        let k = c + delta;

        let c_prev = if to_left { c + 1 } else { c - 1 };
        let y_prev = vb[c_prev];

        let y = if to_left { y_prev } else { y_prev - 1 };
        let x = (y - top) + k + left;
        let x_prev = if d == 0 || y != y_prev { x } else { x + 1 };

        let (mut x_end, mut y_end) = (x, y);
        while x_end > left && y_end > top && graph.matches(x_end - 1, y_end - 1) {
            x_end -= 1;
            y_end -= 1;
        }

        vb[c] = y_end;

        if delta % 2 == 0 && k >= -d && k <= d && x_end <= vf[k] {
            let edge = if d == 0 { Edge::None } else { Edge::Trailing };
            return Some(MiddleSnake {
                snake: snake_at(x_end, y_end, x_prev, y_prev),
                edge,
            });
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph<'a>(a: &'a [u8], b: &'a [u8]) -> EditGraph<'a, u8, fn(&u8, &u8) -> bool> {
        let eq: fn(&u8, &u8) -> bool = |x, y| x == y;
        EditGraph::new(a, b, eq)
    }

    fn seeded(region: &Region) -> (Frontier, Frontier) {
        let max = (region.size() + 1) / 2;
        let mut vf = Frontier::new(max);
        let mut vb = Frontier::new(max);
        vf[1] = region.left as isize;
        vb[1] = region.bottom as isize;
        (vf, vb)
    }

    #[test]
    fn frontier_negative_indices() {
        let mut v = Frontier::new(3);
        assert_eq!(v.v.len(), 7);
        v[-3] = 10;
        v[3] = 20;
        v[0] = 5;
        assert_eq!(v[-3], 10);
        assert_eq!(v[3], 20);
        assert_eq!(v[0], 5);
    }

    #[test]
    fn radius_zero_forward_slides_along_common_prefix() {
        let (a, b) = (b"abcx", b"abcy");
        let g = graph(a, b);
        let region = Region::whole(a.len(), b.len());
        let (mut vf, vb) = seeded(&region);
        // Even delta: forward never reports, it only records progress.
        assert!(forward(&region, 0, &mut vf, &vb, &g).is_none());
        assert_eq!(vf[0], 3);
    }

    #[test]
    fn radius_zero_backward_meets_on_identical_input() {
        let a = b"same";
        let g = graph(a, a);
        let region = Region::whole(a.len(), a.len());
        let (mut vf, mut vb) = seeded(&region);
        assert!(forward(&region, 0, &mut vf, &vb, &g).is_none());
        let mid = backward(&region, 0, &vf, &mut vb, &g).unwrap();
        assert_eq!(mid.edge, Edge::None);
        assert_eq!(mid.snake, Snake::new(0, 0, 4, 4));
    }

    #[test]
    fn odd_delta_meets_in_forward_step() {
        // One extra element in A: a single deletion.
        let (a, b) = (b"ab", b"a");
        let g = graph(a, b);
        let region = Region::whole(a.len(), b.len());
        let (mut vf, mut vb) = seeded(&region);
        assert!(forward(&region, 0, &mut vf, &vb, &g).is_none());
        assert!(backward(&region, 0, &vf, &mut vb, &g).is_none());
        let mid = forward(&region, 1, &mut vf, &vb, &g).unwrap();
        assert_eq!(mid.edge, Edge::Leading);
        assert_eq!(mid.snake, Snake::new(1, 1, 2, 1));
    }

    #[test]
    fn even_delta_meets_in_backward_step() {
        let (a, b) = (b"abc", b"aec");
        let g = graph(a, b);
        let region = Region::whole(a.len(), b.len());
        let (mut vf, mut vb) = seeded(&region);
        let mut found = None;
        for d in 0..=3 {
            assert!(forward(&region, d, &mut vf, &vb, &g).is_none());
            if let Some(mid) = backward(&region, d, &vf, &mut vb, &g) {
                found = Some((d, mid));
                break;
            }
        }
        let (d, mid) = found.unwrap();
        assert_eq!(d, 1);
        assert_eq!(mid.edge, Edge::Trailing);
        assert_eq!(mid.snake, Snake::new(2, 1, 2, 2));
    }
}
