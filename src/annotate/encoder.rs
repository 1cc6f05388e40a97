use crate::annotate::records::{DetectionRecord, FrameRecord, MaskAnnotation};
use crate::annotate::rle::rle_encode;
use crate::foundation::core::{BinaryMask, Grid};
use crate::render::compositor::PatchBox;

/// Derives ground truth from compositor output.
///
/// Detection records carry the birth-order object id. Mask annotations carry a slot-derived id
/// (`objects * batch_index + slot`); the two id spaces are deliberately kept apart.
#[derive(Clone, Copy, Debug)]
pub struct AnnotationEncoder {
    border_h: u32,
    border_w: u32,
    objects: usize,
    steps: usize,
}

impl AnnotationEncoder {
    /// Encoder for a compositor with the given border, slot count and batch length.
    pub fn new(border_h: u32, border_w: u32, objects: usize, steps: usize) -> Self {
        Self {
            border_h,
            border_w,
            objects,
            steps,
        }
    }

    /// Detection record for an object drawn at `bx` during step `step` of batch `batch_index`.
    pub fn detection(
        &self,
        batch_index: u64,
        step: usize,
        object_id: u64,
        bx: PatchBox,
    ) -> DetectionRecord {
        DetectionRecord {
            frame: batch_index * self.steps as u64 + step as u64 + 1,
            id: object_id + 1,
            left: (bx.left - i64::from(self.border_w) + 1) as f64,
            top: (bx.top - i64::from(self.border_h) + 1) as f64,
            width: f64::from(bx.width),
            height: f64::from(bx.height),
        }
    }

    /// Encode every non-empty occlusion layer of one step.
    pub fn frame_record(
        &self,
        batch_index: u64,
        step: usize,
        layers: &[Grid<f32>],
    ) -> FrameRecord {
        let annotations = layers
            .iter()
            .enumerate()
            .filter_map(|(slot, layer)| {
                let mask = downsample_half(layer);
                if mask.as_slice().iter().all(|&v| v == 0) {
                    return None;
                }
                Some(MaskAnnotation {
                    mask: rle_encode(&mask),
                    id: (self.objects as u64) * batch_index + slot as u64,
                })
            })
            .collect();
        FrameRecord::new(step as u64, batch_index, self.steps as u64, annotations)
    }
}

/// Nearest-neighbour downsampling by 2, thresholded at nonzero.
///
/// Output cell `(x, y)` samples input `(2x, 2y)`; odd trailing rows/columns are dropped.
pub fn downsample_half(layer: &Grid<f32>) -> BinaryMask {
    let (w, h) = (layer.width() / 2, layer.height() / 2);
    let mut out = BinaryMask::new(w, h);
    for y in 0..h {
        for x in 0..w {
            if layer.get(2 * x, 2 * y) != 0.0 {
                out.set(x, y, 1);
            }
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/annotate/encoder.rs"]
mod tests;
