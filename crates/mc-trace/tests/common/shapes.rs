use std::collections::HashSet;

use mc_core::{Grid, Image, Point2i, TextGridFormat, parse_text_grid};

pub fn grid_from_rows(rows: &[&str]) -> Image<bool> {
    parse_text_grid(&rows.join("\n"), &TextGridFormat::default()).expect("valid grid")
}

/// `width x height` background grid with a filled rectangle at `(x0, y0)`.
pub fn filled_rect(
    width: usize,
    height: usize,
    x0: usize,
    y0: usize,
    rect_w: usize,
    rect_h: usize,
) -> Image<bool> {
    let mut img = Image::new_fill(width, height, false);
    for y in y0..y0 + rect_h {
        for x in x0..x0 + rect_w {
            *img.get_mut(x, y).expect("rectangle inside grid") = true;
        }
    }
    img
}

/// Horizontal bar on row `height - 2` with one-pixel-wide teeth rising every
/// other column. Every tooth forces the walk to turn back on itself.
pub fn comb(teeth: usize, tooth_len: usize) -> Image<bool> {
    let width = 2 * teeth + 3;
    let height = tooth_len + 3;
    let mut img = Image::new_fill(width, height, false);
    let base = height - 2;

    for x in 1..width - 1 {
        *img.get_mut(x, base).expect("inside") = true;
    }
    for t in 0..teeth {
        let x = 2 + 2 * t;
        for y in base - tooth_len..base {
            *img.get_mut(x, y).expect("inside") = true;
        }
    }
    img
}

/// One-pixel-wide diagonal staircase from bottom-left to top-right.
pub fn staircase(steps: usize) -> Image<bool> {
    let n = steps + 2;
    let mut img = Image::new_fill(n, n, false);
    for i in 0..steps {
        *img.get_mut(1 + i, n - 2 - i).expect("inside") = true;
    }
    img
}

pub fn foreground_points<G: Grid>(grid: &G) -> HashSet<Point2i> {
    let mut out = HashSet::new();
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            if grid.is_foreground(x, y) {
                out.insert(Point2i::from((x, y)));
            }
        }
    }
    out
}

/// Outer boundary computed without walking: pixels of the 8-connected region
/// containing `start` that touch, 4-adjacently, background connected to the
/// space around the grid.
pub fn outer_boundary_reference<G: Grid>(grid: &G, start: Point2i) -> HashSet<Point2i> {
    const N4: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
    let (w, h) = (grid.width() as isize, grid.height() as isize);

    let mut region = HashSet::from([start]);
    let mut stack = vec![start];
    while let Some(p) = stack.pop() {
        for dy in -1..=1 {
            for dx in -1..=1 {
                let q = p.add(Point2i::new(dx, dy));
                if grid.is_foreground_at(q) && region.insert(q) {
                    stack.push(q);
                }
            }
        }
    }

    let seed = Point2i::new(-1, -1);
    let mut outside = HashSet::from([seed]);
    let mut stack = vec![seed];
    while let Some(p) = stack.pop() {
        for (dx, dy) in N4 {
            let q = p.add(Point2i::new(dx, dy));
            let in_frame = (-1..=w).contains(&q.x) && (-1..=h).contains(&q.y);
            if in_frame && !grid.is_foreground_at(q) && outside.insert(q) {
                stack.push(q);
            }
        }
    }

    region
        .into_iter()
        .filter(|&p| {
            N4.iter()
                .any(|&(dx, dy)| outside.contains(&p.add(Point2i::new(dx, dy))))
        })
        .collect()
}
