/// Integer pixel coordinate. `y` is the row index and grows with the row.
///
/// Coordinates are signed so that off-grid neighbors of edge pixels can be
/// represented; [`crate::Grid::is_foreground_at`] treats them as background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Point2i {
    pub x: isize,
    pub y: isize,
}

impl Point2i {
    pub const fn new(x: isize, y: isize) -> Self {
        Self { x, y }
    }

    /// Component-wise sum. Used to apply a neighbor offset to a pixel.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub const fn add(self, rhs: Self) -> Self {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }

    /// Component-wise difference. `b.sub(a)` is the offset leading from `a` to `b`.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub const fn sub(self, rhs: Self) -> Self {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }

    /// Chebyshev distance; `1` for the 8 Moore neighbors.
    pub fn chebyshev(self, rhs: Self) -> usize {
        let d = self.sub(rhs);
        d.x.unsigned_abs().max(d.y.unsigned_abs())
    }

    /// Returns `(x, y)` as grid indices when both are inside `width x height`.
    pub fn to_index(self, width: usize, height: usize) -> Option<(usize, usize)> {
        if self.x < 0 || self.y < 0 {
            return None;
        }

        let (xu, yu) = (self.x as usize, self.y as usize);
        if xu >= width || yu >= height {
            return None;
        }

        Some((xu, yu))
    }
}

impl From<(usize, usize)> for Point2i {
    fn from((x, y): (usize, usize)) -> Self {
        Self {
            x: x as isize,
            y: y as isize,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Point2i;

    #[test]
    fn add_sub_are_inverse() {
        let p = Point2i::new(4, 7);
        let o = Point2i::new(-1, 1);

        assert_eq!(p.add(o), Point2i::new(3, 8));
        assert_eq!(p.add(o).sub(p), o);
        assert_eq!(p.sub(p), Point2i::default());
    }

    #[test]
    fn chebyshev_counts_diagonals_as_one() {
        let p = Point2i::new(2, 2);
        assert_eq!(p.chebyshev(Point2i::new(3, 3)), 1);
        assert_eq!(p.chebyshev(Point2i::new(2, 1)), 1);
        assert_eq!(p.chebyshev(Point2i::new(0, 3)), 2);
        assert_eq!(p.chebyshev(p), 0);
    }

    #[test]
    fn to_index_rejects_off_grid() {
        assert_eq!(Point2i::new(0, 0).to_index(3, 2), Some((0, 0)));
        assert_eq!(Point2i::new(2, 1).to_index(3, 2), Some((2, 1)));
        assert_eq!(Point2i::new(-1, 0).to_index(3, 2), None);
        assert_eq!(Point2i::new(0, -1).to_index(3, 2), None);
        assert_eq!(Point2i::new(3, 0).to_index(3, 2), None);
        assert_eq!(Point2i::new(0, 2).to_index(3, 2), None);
    }
}
