//! Foundational primitives for binary contour tracing.
//!
//! ## Coordinates
//! Pixels are addressed as `(x, y)` = `(column, row)`; `y` grows with the row
//! index. [`Point2i`] is signed so that neighbors of edge pixels can be named
//! even when they fall outside the grid.
//!
//! ## Grids
//! [`Grid`] is the read-only access contract consumed by the tracer. It is
//! implemented for owned [`Image`]s and strided [`ImageView`]s of `bool`
//! (foreground is `true`) and `u8` (foreground is non-zero). Off-grid lookups
//! through [`Grid::is_foreground_at`] read as background.
//!
//! ## Text grids
//! [`parse_text_grid`] and [`render_text_grid`] read and draw the one-line-per-row
//! text format used by fixtures and the terminal demo.

mod error;
mod geom;
mod grid;
mod image;
mod text;

pub use error::Error;
pub use geom::Point2i;
pub use grid::Grid;
pub use image::{BinarizeConfig, Image, ImageView, binarize_u8};
pub use text::{RenderStyle, TextGridFormat, parse_text_grid, render_text_grid};
