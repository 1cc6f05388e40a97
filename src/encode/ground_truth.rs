use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use crate::annotate::records::VideoRecord;
use crate::encode::sink::{BatchSink, SinkConfig};
use crate::foundation::error::{SpriteError, SpriteResult};
use crate::output::{create_file, save_json};
use crate::schedule::scheduler::BatchOutput;

/// Writes metric-mode ground truth: MOT detection lines and the mask annotation document.
///
/// Detection lines are streamed as batches arrive. Video records are buffered and the mask file
/// is written once in `end`, as a JSON array in batch order.
#[derive(Debug)]
pub struct GroundTruthSink {
    detections_path: PathBuf,
    masks_path: PathBuf,
    writer: Option<BufWriter<File>>,
    videos: Vec<VideoRecord>,
    lines: u64,
}

impl GroundTruthSink {
    /// Sink writing detections to `detections_path` and masks to `masks_path`.
    pub fn new(detections_path: impl Into<PathBuf>, masks_path: impl Into<PathBuf>) -> Self {
        Self {
            detections_path: detections_path.into(),
            masks_path: masks_path.into(),
            writer: None,
            videos: Vec::new(),
            lines: 0,
        }
    }

    /// Detection lines written so far.
    pub fn lines(&self) -> u64 {
        self.lines
    }
}

impl BatchSink for GroundTruthSink {
    fn begin(&mut self, _cfg: &SinkConfig) -> SpriteResult<()> {
        self.writer = Some(create_file(&self.detections_path)?);
        self.videos.clear();
        self.lines = 0;
        Ok(())
    }

    fn push_batch(&mut self, out: &BatchOutput) -> SpriteResult<()> {
        let path = &self.detections_path;
        let Some(writer) = self.writer.as_mut() else {
            return Err(SpriteError::validation("ground truth sink used before begin"));
        };
        for det in &out.detections {
            writeln!(writer, "{}", det.to_mot_line()).map_err(|e| SpriteError::io(path, e))?;
        }
        self.lines += out.detections.len() as u64;
        if let Some(video) = &out.video {
            self.videos.push(video.clone());
        }
        Ok(())
    }

    fn end(&mut self) -> SpriteResult<()> {
        if let Some(mut writer) = self.writer.take() {
            writer
                .flush()
                .map_err(|e| SpriteError::io(&self.detections_path, e))?;
        }
        save_json(&self.masks_path, &self.videos)?;
        tracing::info!(
            detections = self.lines,
            videos = self.videos.len(),
            "ground truth written"
        );
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/ground_truth.rs"]
mod tests;
