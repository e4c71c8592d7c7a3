use std::collections::HashSet;

use mc_core::{Image, Point2i};

/// Why a walk ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StopReason {
    /// The grid had no foreground pixel; nothing was walked.
    #[default]
    NoForeground,
    /// The start pixel was re-entered from the cell preceding it in the scan.
    ScanEntry,
    /// The start pixel was re-entered the same way the walk first stepped into it.
    FirstEntry,
    /// A full rotation around the start pixel found no foreground neighbor.
    IsolatedPixel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TraceStats {
    /// Candidate pixels inspected by the walk.
    pub probes: usize,
    /// Probes that hit foreground and moved the boundary.
    pub accepted: usize,
    pub stop: StopReason,
}

/// Boundary pixels of one traced region.
///
/// Membership is a set; [`Outline::points`] additionally keeps the order in
/// which the walk first reached each pixel, starting with the start pixel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outline {
    width: usize,
    height: usize,
    order: Vec<Point2i>,
    members: HashSet<Point2i>,
}

impl Outline {
    pub(crate) fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            order: Vec::new(),
            members: HashSet::new(),
        }
    }

    pub(crate) fn insert(&mut self, p: Point2i) -> bool {
        let added = self.members.insert(p);
        if added {
            self.order.push(p);
        }
        added
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, p: Point2i) -> bool {
        self.members.contains(&p)
    }

    pub fn start(&self) -> Option<Point2i> {
        self.order.first().copied()
    }

    pub fn points(&self) -> &[Point2i] {
        &self.order
    }

    pub fn iter(&self) -> impl Iterator<Item = Point2i> + '_ {
        self.order.iter().copied()
    }

    pub fn as_set(&self) -> &HashSet<Point2i> {
        &self.members
    }

    pub fn into_set(self) -> HashSet<Point2i> {
        self.members
    }

    /// Redraws the outline into a fresh grid of the traced extents.
    pub fn to_mask(&self) -> Image<bool> {
        let mut mask = Image::new_fill(self.width, self.height, false);
        for p in &self.order {
            let Some((x, y)) = p.to_index(self.width, self.height) else {
                continue;
            };
            if let Some(px) = mask.get_mut(x, y) {
                *px = true;
            }
        }
        mask
    }
}

#[cfg(test)]
mod tests {
    use mc_core::{Grid, Point2i};

    use super::Outline;

    #[test]
    fn insert_keeps_first_visit_order_without_duplicates() {
        let mut o = Outline::new(4, 4);
        assert!(o.insert(Point2i::new(1, 3)));
        assert!(o.insert(Point2i::new(2, 2)));
        assert!(!o.insert(Point2i::new(1, 3)));

        assert_eq!(o.len(), 2);
        assert_eq!(o.start(), Some(Point2i::new(1, 3)));
        assert_eq!(o.points(), &[Point2i::new(1, 3), Point2i::new(2, 2)]);
        assert!(o.contains(Point2i::new(2, 2)));
        assert!(!o.contains(Point2i::new(0, 0)));
    }

    #[test]
    fn mask_marks_only_outline_pixels() {
        let mut o = Outline::new(3, 2);
        o.insert(Point2i::new(0, 1));
        o.insert(Point2i::new(2, 0));

        let mask = o.to_mask();
        assert_eq!((mask.width(), mask.height()), (3, 2));
        assert!(mask.is_foreground(0, 1));
        assert!(mask.is_foreground(2, 0));
        assert_eq!(mask.data().iter().filter(|&&v| v).count(), 2);
    }
}
