use log::debug;
use mc_core::{Grid, Point2i};

use crate::error::TraceError;
use crate::neighborhood::clockwise_neighbor;
use crate::outline::{Outline, StopReason, TraceStats};

/// Start of a walk: the first foreground pixel of the scan and the cell the
/// scan stood on just before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartPixel {
    pub first: Point2i,
    pub first_prev: Point2i,
}

/// Scans rows bottom to top and each row left to right.
///
/// `first_prev` is the previously scanned cell of the same row, or `(0, row - 1)`
/// when `first` opens its row. Either way it is a Moore neighbor of `first`.
pub fn find_start<G: Grid + ?Sized>(grid: &G) -> Option<StartPixel> {
    for y in (0..grid.height()).rev() {
        let mut first_prev = Point2i::new(0, y as isize - 1);
        for x in 0..grid.width() {
            let p = Point2i::from((x, y));
            if grid.is_foreground(x, y) {
                return Some(StartPixel {
                    first: p,
                    first_prev,
                });
            }
            first_prev = p;
        }
    }

    None
}

/// Outer boundary of the first region found by [`find_start`].
///
/// Returns an empty outline when the grid has no foreground pixel.
pub fn trace<G: Grid + ?Sized>(grid: &G) -> Result<Outline, TraceError> {
    trace_with_stats(grid).map(|(outline, _)| outline)
}

pub fn trace_with_stats<G: Grid + ?Sized>(
    grid: &G,
) -> Result<(Outline, TraceStats), TraceError> {
    let mut outline = Outline::new(grid.width(), grid.height());
    let mut stats = TraceStats::default();

    let Some(StartPixel { first, first_prev }) = find_start(grid) else {
        debug!(
            "trace: no foreground in {}x{} grid",
            grid.width(),
            grid.height()
        );
        return Ok((outline, stats));
    };
    debug!(
        "trace: start ({}, {}) entered from ({}, {})",
        first.x, first.y, first_prev.x, first_prev.y
    );

    outline.insert(first);
    let mut boundary = first;
    let mut prev = first_prev;
    let mut curr = clockwise_neighbor(boundary, prev)?;

    // `prev` held when the walk first stepped back into `first`.
    let mut first_entry: Option<Point2i> = None;
    // Consecutive background probes around `boundary`.
    let mut misses = 0u8;

    stats.stop = loop {
        if curr == first {
            if prev == first_prev {
                break StopReason::ScanEntry;
            }
            if first_entry == Some(prev) {
                break StopReason::FirstEntry;
            }
        }

        stats.probes += 1;
        if grid.is_foreground_at(curr) {
            if curr == first && first_entry.is_none() {
                first_entry = Some(prev);
            }
            outline.insert(curr);
            stats.accepted += 1;
            prev = boundary;
            boundary = curr;
            misses = 0;
        } else {
            prev = curr;
            misses += 1;
            // Only reachable around `first`: any later boundary pixel was
            // entered from a foreground neighbor.
            if misses == 8 {
                break StopReason::IsolatedPixel;
            }
        }

        curr = clockwise_neighbor(boundary, prev)?;
    };

    debug!(
        "trace: {} boundary pixels, {} probes, stop={:?}",
        outline.len(),
        stats.probes,
        stats.stop
    );
    Ok((outline, stats))
}
