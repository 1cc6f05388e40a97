use image::{GrayImage, imageops::FilterType};
use rand::Rng;

use crate::assets::shapes::ShapeLibrary;
use crate::config::GeneratorConfig;
use crate::foundation::core::{Grid, Rgb8};
use crate::foundation::error::{SpriteError, SpriteResult};
use crate::foundation::math::{round_half_away, symmetric_jitter, uniform_index};

/// Appearance drawn at birth.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Appearance {
    /// Palette index.
    pub color_index: usize,
    /// Shape template index.
    pub shape_index: usize,
    /// Isotropic scale in `[1 - scale_var, 1 + scale_var)`.
    pub scale: f64,
    /// Aspect factor; height is multiplied and width divided by it.
    pub ratio: f64,
}

impl Appearance {
    /// Draw color, shape, scale and ratio independently.
    pub fn sample<R: Rng + ?Sized>(
        rng: &mut R,
        cfg: &GeneratorConfig,
        library: &ShapeLibrary,
    ) -> Self {
        let color_index = uniform_index(rng.random::<f64>(), library.color_count());
        let shape_index = uniform_index(rng.random::<f64>(), library.shape_count());
        let scale = symmetric_jitter(rng.random::<f64>(), cfg.scale_var);
        let ratio = symmetric_jitter(rng.random::<f64>(), cfg.ratio_var).sqrt();
        Self {
            color_index,
            shape_index,
            scale,
            ratio,
        }
    }

    /// Patch size `(h_, w_)` for a template of `h x w`.
    pub fn patch_size(&self, h: u32, w: u32) -> (u32, u32) {
        let ph = round_half_away(f64::from(h) * self.scale * self.ratio).max(1) as u32;
        let pw = round_half_away(f64::from(w) * self.scale / self.ratio).max(1) as u32;
        (ph, pw)
    }

    /// Materialize the patch from the library templates.
    pub fn render(&self, library: &ShapeLibrary) -> SpriteResult<SpritePatch> {
        let template = library.shape_mask(self.shape_index);
        let (ph, pw) = self.patch_size(template.height(), template.width());
        let src = GrayImage::from_raw(
            template.width(),
            template.height(),
            template.as_slice().to_vec(),
        )
        .ok_or_else(|| SpriteError::render("shape template buffer does not match its size"))?;
        let resized = image::imageops::resize(&src, pw, ph, FilterType::Triangle);
        let alpha = Grid::from_vec(pw, ph, resized.into_raw())?;
        Ok(SpritePatch {
            color: library.color(self.color_index),
            alpha,
        })
    }
}

/// Rendered appearance of one active object: a flat color and its coverage.
#[derive(Clone, Debug, PartialEq)]
pub struct SpritePatch {
    /// Fill color.
    pub color: Rgb8,
    /// Coverage in `0..=255`, `h_` rows by `w_` columns.
    pub alpha: Grid<u8>,
}

impl SpritePatch {
    /// Patch height `h_`.
    pub fn height(&self) -> u32 {
        self.alpha.height()
    }

    /// Patch width `w_`.
    pub fn width(&self) -> u32 {
        self.alpha.width()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/appearance.rs"]
mod tests;
