use crate::foundation::core::{Canvas, Rgb8};
use crate::foundation::error::{SpriteError, SpriteResult};

/// A composited frame as tightly packed, row-major RGB8 pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRgb {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGB8 bytes, `height * width * 3`.
    pub data: Vec<u8>,
}

impl FrameRgb {
    /// Black frame covering `canvas`.
    pub fn black(canvas: Canvas) -> Self {
        Self {
            width: canvas.width,
            height: canvas.height,
            data: vec![0; canvas.area() * 3],
        }
    }

    /// Pixel at column `x`, row `y`.
    pub fn pixel(&self, x: u32, y: u32) -> Rgb8 {
        let i = self.offset(x, y);
        Rgb8::new(self.data[i], self.data[i + 1], self.data[i + 2])
    }

    /// Mutable channels of the pixel at column `x`, row `y`.
    pub fn pixel_mut(&mut self, x: u32, y: u32) -> &mut [u8] {
        let i = self.offset(x, y);
        &mut self.data[i..i + 3]
    }

    /// Copy into an [`image::RgbImage`].
    pub fn to_image(&self) -> SpriteResult<image::RgbImage> {
        image::RgbImage::from_raw(self.width, self.height, self.data.clone())
            .ok_or_else(|| SpriteError::render("frame buffer does not match its dimensions"))
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + (x as usize)) * 3
    }
}
