//! Uncompressed COCO-style run-length encoding of binary masks.
//!
//! Pixels are scanned column by column (pixel `(x, y)` is the `y + h * x`-th in scan order).
//! `counts` alternates runs of 0s and 1s and always starts with a run of 0s, which is empty when
//! the first scanned pixel is set.

use serde::{Deserialize, Serialize};

use crate::foundation::core::BinaryMask;
use crate::foundation::error::{SpriteError, SpriteResult};

/// Run-length encoded binary mask.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rle {
    /// `[height, width]` of the encoded grid.
    pub size: [u32; 2],
    /// Alternating run lengths, zeros first.
    pub counts: Vec<u32>,
}

impl Rle {
    /// Number of set pixels.
    pub fn area(&self) -> u64 {
        self.counts
            .iter()
            .skip(1)
            .step_by(2)
            .map(|&c| u64::from(c))
            .sum()
    }
}

/// Encode `mask`; any nonzero cell counts as set.
pub fn rle_encode(mask: &BinaryMask) -> Rle {
    let (w, h) = (mask.width(), mask.height());
    let mut counts = Vec::new();
    let mut current = 0u8;
    let mut run = 0u32;
    for x in 0..w {
        for y in 0..h {
            let v = u8::from(mask.get(x, y) != 0);
            if v != current {
                counts.push(run);
                run = 0;
                current = v;
            }
            run += 1;
        }
    }
    counts.push(run);
    Rle {
        size: [h, w],
        counts,
    }
}

/// Decode an [`Rle`] back into a 0/1 mask.
pub fn rle_decode(rle: &Rle) -> SpriteResult<BinaryMask> {
    let [h, w] = rle.size;
    let total = (h as usize) * (w as usize);
    let covered: usize = rle.counts.iter().map(|&c| c as usize).sum();
    if covered != total {
        return Err(SpriteError::validation(format!(
            "rle counts cover {covered} pixels, expected {h}x{w}"
        )));
    }

    let mut mask = BinaryMask::new(w, h);
    let mut idx = 0usize;
    let mut value = 0u8;
    for &c in &rle.counts {
        for k in idx..idx + c as usize {
            let x = (k / h as usize) as u32;
            let y = (k % h as usize) as u32;
            mask.set(x, y, value);
        }
        idx += c as usize;
        value = 1 - value;
    }
    Ok(mask)
}

#[cfg(test)]
#[path = "../../tests/unit/annotate/rle.rs"]
mod tests;
