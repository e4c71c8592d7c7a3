use crate::geom::Point2i;
use crate::image::{Image, ImageView};

/// Read-only rectangular binary raster.
///
/// `is_foreground` is only meaningful for `x < width()` and `y < height()`.
/// Lookups that may leave the grid go through [`Grid::is_foreground_at`],
/// which reports every off-grid point as background.
pub trait Grid {
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn is_foreground(&self, x: usize, y: usize) -> bool;

    fn is_foreground_at(&self, p: Point2i) -> bool {
        match p.to_index(self.width(), self.height()) {
            Some((x, y)) => self.is_foreground(x, y),
            None => false,
        }
    }

    fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }
}

impl Grid for ImageView<'_, bool> {
    fn width(&self) -> usize {
        ImageView::width(self)
    }

    fn height(&self) -> usize {
        ImageView::height(self)
    }

    fn is_foreground(&self, x: usize, y: usize) -> bool {
        matches!(self.get(x, y), Some(true))
    }
}

impl Grid for Image<bool> {
    fn width(&self) -> usize {
        Image::width(self)
    }

    fn height(&self) -> usize {
        Image::height(self)
    }

    fn is_foreground(&self, x: usize, y: usize) -> bool {
        matches!(self.get(x, y), Some(true))
    }
}

/// Non-zero pixels are foreground.
impl Grid for ImageView<'_, u8> {
    fn width(&self) -> usize {
        ImageView::width(self)
    }

    fn height(&self) -> usize {
        ImageView::height(self)
    }

    fn is_foreground(&self, x: usize, y: usize) -> bool {
        self.get(x, y).is_some_and(|&v| v != 0)
    }
}

/// Non-zero pixels are foreground.
impl Grid for Image<u8> {
    fn width(&self) -> usize {
        Image::width(self)
    }

    fn height(&self) -> usize {
        Image::height(self)
    }

    fn is_foreground(&self, x: usize, y: usize) -> bool {
        self.get(x, y).is_some_and(|&v| v != 0)
    }
}

impl<G: Grid + ?Sized> Grid for &G {
    fn width(&self) -> usize {
        (**self).width()
    }

    fn height(&self) -> usize {
        (**self).height()
    }

    fn is_foreground(&self, x: usize, y: usize) -> bool {
        (**self).is_foreground(x, y)
    }
}
