use std::path::PathBuf;

use image::imageops::FilterType;

use crate::encode::sink::{BatchSink, SinkConfig};
use crate::foundation::error::{SpriteError, SpriteResult};
use crate::schedule::scheduler::BatchOutput;

/// Side length of preview images.
pub const PREVIEW_SIZE: u32 = 400;

/// Writes every step of sequence 0 as an upscaled PNG for eyeballing a run.
///
/// Files are named `{split}_{batch}_{step:02}.png`.
#[derive(Debug)]
pub struct PreviewSink {
    dir: PathBuf,
    size: u32,
    written: usize,
}

impl PreviewSink {
    /// Sink writing [`PREVIEW_SIZE`] square previews into `dir`, which must exist.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            size: PREVIEW_SIZE,
            written: 0,
        }
    }

    /// Override the output side length.
    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size.max(1);
        self
    }

    /// Number of images written.
    pub fn written(&self) -> usize {
        self.written
    }
}

impl BatchSink for PreviewSink {
    fn begin(&mut self, _cfg: &SinkConfig) -> SpriteResult<()> {
        self.written = 0;
        Ok(())
    }

    fn push_batch(&mut self, out: &BatchOutput) -> SpriteResult<()> {
        let batch = &out.batch;
        let Some(frames) = batch.sequences.first() else {
            return Ok(());
        };
        for (t, frame) in frames.iter().enumerate() {
            let img = frame.to_image()?;
            let big = image::imageops::resize(&img, self.size, self.size, FilterType::Nearest);
            let path = self.dir.join(format!(
                "{}_{}_{t:02}.png",
                batch.split.as_str(),
                batch.index
            ));
            big.save(&path)
                .map_err(|e| SpriteError::serde(format!("write png '{}': {e}", path.display())))?;
            self.written += 1;
        }
        Ok(())
    }

    fn end(&mut self) -> SpriteResult<()> {
        tracing::info!(dir = %self.dir.display(), images = self.written, "previews written");
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/preview.rs"]
mod tests;
