use mc_core::Point2i;

use crate::error::TraceError;

// Moore neighborhood in clockwise order. Direction `d + 1` is the clockwise
// successor of `d`; `y` is the row index, same sign as the grid.
const DX: [isize; 8] = [1, 1, 0, -1, -1, -1, 0, 1];
const DY: [isize; 8] = [0, -1, -1, -1, 0, 1, 1, 1];

/// Canonical index of a unit neighbor offset, `None` for `(0, 0)` and for
/// anything that is not a Moore neighbor.
#[inline]
pub fn direction_index(offset: Point2i) -> Option<u8> {
    match (offset.x, offset.y) {
        (1, 0) => Some(0),
        (1, -1) => Some(1),
        (0, -1) => Some(2),
        (-1, -1) => Some(3),
        (-1, 0) => Some(4),
        (-1, 1) => Some(5),
        (0, 1) => Some(6),
        (1, 1) => Some(7),
        _ => None,
    }
}

#[inline]
pub fn direction_offset(dir: u8) -> Point2i {
    let d = (dir & 7) as usize;
    Point2i::new(DX[d], DY[d])
}

#[inline]
pub fn next_clockwise(dir: u8) -> u8 {
    (dir + 1) & 7
}

/// Next candidate after `prev` when rotating clockwise around `target`.
///
/// `prev` must be one of the 8 neighbors of `target`; the walk maintains this
/// at every call, so an error here means the walk itself is broken.
pub fn clockwise_neighbor(target: Point2i, prev: Point2i) -> Result<Point2i, TraceError> {
    let dir = direction_index(prev.sub(target))
        .ok_or(TraceError::AlgorithmInvariant { target, prev })?;
    Ok(target.add(direction_offset(next_clockwise(dir))))
}
