//! Edge (boundary) behavior for pointer movement and peeking.

/// How a pointer operation treats a target past the grid edge.
///
/// Growth is a property of the grid, not of the call: on an infinite
/// grid an `Absorb` move past the edge grows the grid instead of failing.
/// Peeks never grow.
///
/// # Examples
///
/// ```
/// use prism_grid::{EdgeBehavior, Grid};
/// use prism_core::Direction;
///
/// let mut grid: Grid = Grid::parse("ab\ncd").unwrap();
/// let p = grid.new_pointer(());
///
/// // Absorb: the top-left corner cannot see above itself.
/// assert!(grid.pointer(p).unwrap().peek(Direction::Up, 1, EdgeBehavior::Absorb).is_err());
///
/// // Wrap: it sees the bottom row instead.
/// let cell = grid.pointer(p).unwrap().peek(Direction::Up, 1, EdgeBehavior::Wrap).unwrap();
/// assert_eq!(cell.value(), 'c');
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EdgeBehavior {
    /// Out-of-bounds target is blocked (or grows an infinite grid on move).
    #[default]
    Absorb,
    /// Out-of-bounds target wraps to the opposite side (torus).
    Wrap,
}

/// Move `steps` along an axis of length `len` without leaving it.
/// Returns `None` if the target is out of bounds.
pub(crate) fn step_axis(coord: usize, steps: usize, forward: bool, len: usize) -> Option<usize> {
    if forward {
        coord
            .checked_add(steps)
            .filter(|&target| target < len)
    } else {
        coord.checked_sub(steps)
    }
}

/// Move `steps` along an axis of length `len`, wrapping modulo `len`.
pub(crate) fn wrap_axis(coord: usize, steps: usize, forward: bool, len: usize) -> usize {
    let steps = steps % len;
    if forward {
        (coord + steps) % len
    } else {
        (coord + len - steps) % len
    }
}

/// Resolve a single-axis step under the given edge behavior.
/// Returns `Some(target)` or `None` for an Absorb out-of-bounds target.
pub(crate) fn resolve_axis(
    coord: usize,
    steps: usize,
    forward: bool,
    len: usize,
    edge: EdgeBehavior,
) -> Option<usize> {
    match step_axis(coord, steps, forward, len) {
        Some(target) => Some(target),
        None => match edge {
            EdgeBehavior::Absorb => None,
            EdgeBehavior::Wrap if len > 0 => Some(wrap_axis(coord, steps, forward, len)),
            EdgeBehavior::Wrap => None,
        },
    }
}
