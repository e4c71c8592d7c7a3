//! Plain-text binary grids: one line per row, one character per cell.

use crate::Error;
use crate::grid::Grid;
use crate::image::Image;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextGridFormat {
    /// Cells equal to this character are foreground; every other character is background.
    pub foreground: char,
}

impl Default for TextGridFormat {
    fn default() -> Self {
        Self { foreground: '1' }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderStyle {
    pub foreground: char,
    pub background: char,
    pub right_edge: char,
    pub bottom_rule: char,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            foreground: 'X',
            background: ' ',
            right_edge: '|',
            bottom_rule: '=',
        }
    }
}

/// Parses a text grid. Accepts `\n` and `\r\n` line endings; a trailing
/// newline does not add an empty row.
pub fn parse_text_grid(text: &str, format: &TextGridFormat) -> Result<Image<bool>, Error> {
    let rows: Vec<&str> = text.lines().collect();
    let Some(first) = rows.first() else {
        return Image::from_vec(0, 0, Vec::new());
    };

    let width = first.chars().count();
    let mut data = Vec::with_capacity(width * rows.len());
    for (row, line) in rows.iter().enumerate() {
        let actual = line.chars().count();
        if actual != width {
            return Err(Error::RaggedRows {
                row,
                expected: width,
                actual,
            });
        }
        data.extend(line.chars().map(|c| c == format.foreground));
    }

    Image::from_vec(width, rows.len(), data)
}

/// Renders a grid row by row, closing each row with the right edge and the
/// grid with a bottom rule as wide as the grid.
pub fn render_text_grid<G: Grid + ?Sized>(grid: &G, style: &RenderStyle) -> String {
    let (w, h) = (grid.width(), grid.height());
    let mut out = String::with_capacity((w + 2) * (h + 1));

    for y in 0..h {
        for x in 0..w {
            out.push(if grid.is_foreground(x, y) {
                style.foreground
            } else {
                style.background
            });
        }
        out.push(style.right_edge);
        out.push('\n');
    }

    out.extend(std::iter::repeat_n(style.bottom_rule, w));
    out.push('\n');
    out
}
