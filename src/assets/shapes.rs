use crate::assets::palette::ColorPalette;
use crate::foundation::core::{Grid, Rgb8};

/// Coverage value of a set template pixel.
pub const OPAQUE: u8 = 255;

/// Built-in sprite silhouettes, in template-index order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// Disc inscribed in the template.
    Circle,
    /// Fully set template.
    Rectangle,
    /// Upward-pointing isosceles triangle.
    Triangle,
    /// L1 ball inscribed in the template.
    Diamond,
}

impl ShapeKind {
    /// All shapes, indexed by template index.
    pub const ALL: [ShapeKind; 4] = [
        ShapeKind::Circle,
        ShapeKind::Rectangle,
        ShapeKind::Triangle,
        ShapeKind::Diamond,
    ];

    /// Shape for a template index; wraps around for out-of-range indices.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    fn covers(self, i: u32, j: u32, h: u32, w: u32) -> bool {
        let (fi, fj) = (f64::from(i), f64::from(j));
        let (fh, fw) = (f64::from(h), f64::from(w));
        let center = (fh - 1.0) / 2.0;
        let radius = fh / 2.0;
        match self {
            ShapeKind::Circle => {
                (fi - center).powi(2) + (fj - center).powi(2) <= radius * radius
            }
            ShapeKind::Rectangle => true,
            ShapeKind::Triangle => {
                let half = fw / 2.0;
                // Rise over distance from the nearest vertical edge, per half.
                let run = if fj <= half - 1.0 { fj + 1.0 } else { fw - fj };
                (fh - fi) / run <= fh / half
            }
            ShapeKind::Diamond => (fi - center).abs() + (fj - center).abs() <= radius,
        }
    }
}

/// Immutable shape templates plus the color palette.
///
/// Built once per run and shared read-only by every sequence worker.
#[derive(Clone, Debug)]
pub struct ShapeLibrary {
    templates: Vec<Grid<u8>>,
    palette: ColorPalette,
}

impl ShapeLibrary {
    /// Rasterize every [`ShapeKind`] at `h x w`.
    pub fn new(h: u32, w: u32) -> Self {
        let templates = ShapeKind::ALL
            .iter()
            .map(|&kind| rasterize(kind, h, w))
            .collect();
        Self {
            templates,
            palette: ColorPalette::builtin(),
        }
    }

    /// Number of shape templates.
    pub fn shape_count(&self) -> usize {
        self.templates.len()
    }

    /// Number of palette colors.
    pub fn color_count(&self) -> usize {
        self.palette.len()
    }

    /// Template for `index` (0 = circle, 1 = rectangle, 2 = triangle, 3 = diamond).
    pub fn shape_mask(&self, index: usize) -> &Grid<u8> {
        &self.templates[index % self.templates.len()]
    }

    /// Palette color for `index`.
    pub fn color(&self, index: usize) -> Rgb8 {
        self.palette.get(index)
    }
}

fn rasterize(kind: ShapeKind, h: u32, w: u32) -> Grid<u8> {
    let mut mask = Grid::new(w, h);
    for i in 0..h {
        for j in 0..w {
            if kind.covers(i, j, h, w) {
                mask.set(j, i, OPAQUE);
            }
        }
    }
    mask
}

#[cfg(test)]
#[path = "../../tests/unit/assets/shapes.rs"]
mod tests;
