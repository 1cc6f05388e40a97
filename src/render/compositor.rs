use crate::foundation::core::{Canvas, Grid};
use crate::foundation::error::{SpriteError, SpriteResult};
use crate::foundation::math::blend_u8;
use crate::render::frame::FrameRgb;
use crate::scene::lifecycle::Placement;

/// Patch footprint in working-canvas coordinates (visible canvas offset by the border).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PatchBox {
    /// Leftmost column.
    pub left: i64,
    /// Topmost row.
    pub top: i64,
    /// Patch width `w_`.
    pub width: u32,
    /// Patch height `h_`.
    pub height: u32,
}

/// Paints active objects onto one frame and tracks per-slot occlusion layers.
///
/// Patches are positioned on a working canvas that extends the visible canvas by
/// `border_w` columns and `border_h` rows on every side, so a patch may hang over the edge;
/// only the visible part is blended. Slots must be rendered in ascending index order: each
/// render blends over everything drawn before it and removes its coverage from the layers of
/// lower slots.
#[derive(Clone, Debug)]
pub struct FrameCompositor {
    canvas: Canvas,
    border_h: u32,
    border_w: u32,
    frame: FrameRgb,
    layers: Vec<Grid<f32>>,
}

impl FrameCompositor {
    /// Compositor for `slots` object slots on `canvas`.
    pub fn new(canvas: Canvas, border_h: u32, border_w: u32, slots: usize) -> Self {
        Self {
            canvas,
            border_h,
            border_w,
            frame: FrameRgb::black(canvas),
            layers: vec![Grid::new(canvas.width, canvas.height); slots],
        }
    }

    /// Clear the frame to black and every occlusion layer to zero.
    pub fn begin_frame(&mut self) {
        self.frame.data.fill(0);
        for layer in &mut self.layers {
            layer.fill(0.0);
        }
    }

    /// Alpha-blend `placement` into the frame as slot `slot`.
    pub fn render(&mut self, slot: usize, placement: &Placement<'_>) -> SpriteResult<PatchBox> {
        if slot >= self.layers.len() {
            return Err(SpriteError::render(format!(
                "slot {slot} out of range for {} occlusion layers",
                self.layers.len()
            )));
        }
        let patch = placement.patch;
        let bx = self.place(placement)?;
        let color = patch.color.channels();

        for py in 0..patch.height() {
            let vy = bx.top + i64::from(py) - i64::from(self.border_h);
            if vy < 0 || vy >= i64::from(self.canvas.height) {
                continue;
            }
            for px in 0..patch.width() {
                let vx = bx.left + i64::from(px) - i64::from(self.border_w);
                if vx < 0 || vx >= i64::from(self.canvas.width) {
                    continue;
                }
                let coverage = patch.alpha.get(px, py);
                if coverage == 0 {
                    continue;
                }
                let (vx, vy) = (vx as u32, vy as u32);
                let alpha = f32::from(coverage) / 255.0;

                let dst = self.frame.pixel_mut(vx, vy);
                for (d, &c) in dst.iter_mut().zip(color.iter()) {
                    *d = blend_u8(*d, c, alpha);
                }

                let (below, rest) = self.layers.split_at_mut(slot);
                rest[0].set(vx, vy, alpha);
                for layer in below {
                    let v = layer.get(vx, vy);
                    layer.set(vx, vy, v * (1.0 - alpha));
                }
            }
        }
        Ok(bx)
    }

    /// Frame composited so far.
    pub fn frame(&self) -> &FrameRgb {
        &self.frame
    }

    /// Occlusion layer of `slot`: visible coverage in `[0, 1]` per pixel.
    pub fn layer(&self, slot: usize) -> &Grid<f32> {
        &self.layers[slot]
    }

    /// All occlusion layers in slot order.
    pub fn layers(&self) -> &[Grid<f32>] {
        &self.layers
    }

    fn place(&self, placement: &Placement<'_>) -> SpriteResult<PatchBox> {
        let patch = placement.patch;
        let center_x = placement.x + i64::from(self.border_w);
        let center_y = placement.y + i64::from(self.border_h);
        let top = (center_y as f64 - (f64::from(patch.height()) - 1.0) / 2.0).floor() as i64;
        let left = (center_x as f64 - (f64::from(patch.width()) - 1.0) / 2.0).floor() as i64;

        let work_h = i64::from(self.canvas.height) + 2 * i64::from(self.border_h);
        let work_w = i64::from(self.canvas.width) + 2 * i64::from(self.border_w);
        if top < 0
            || left < 0
            || top + i64::from(patch.height()) > work_h
            || left + i64::from(patch.width()) > work_w
        {
            return Err(SpriteError::render(format!(
                "patch {}x{} at ({left}, {top}) exceeds the {work_w}x{work_h} working canvas",
                patch.width(),
                patch.height()
            )));
        }
        Ok(PatchBox {
            left,
            top,
            width: patch.width(),
            height: patch.height(),
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/compositor.rs"]
mod tests;
