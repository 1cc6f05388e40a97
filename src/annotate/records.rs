use serde::Serialize;

use crate::annotate::rle::Rle;

/// One MOT-style detection line.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct DetectionRecord {
    /// 1-based frame number within the split.
    pub frame: u64,
    /// 1-based object id (birth-order id + 1).
    pub id: u64,
    /// Left edge on the visible canvas, 1-based.
    pub left: f64,
    /// Top edge on the visible canvas, 1-based.
    pub top: f64,
    /// Box width.
    pub width: f64,
    /// Box height.
    pub height: f64,
}

impl DetectionRecord {
    /// `frame,id,left,top,width,height,1,-1,-1,-1`.
    pub fn to_mot_line(&self) -> String {
        format!(
            "{},{},{:.3},{:.3},{:.3},{:.3},1,-1,-1,-1",
            self.frame, self.id, self.left, self.top, self.width, self.height
        )
    }
}

/// Record discriminator serialized under the `class` key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordClass {
    /// A frame record.
    Frame,
    /// A video record.
    Video,
}

/// Visible mask of one object slot in one frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MaskAnnotation {
    /// Downsampled, run-length encoded occupancy.
    pub mask: Rle,
    /// Slot-derived id: `objects * batch_index + slot`.
    pub id: u64,
}

/// Mask annotations of one time step.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FrameRecord {
    /// Step within the batch.
    pub timestamp: u64,
    /// Step within the split: `batch_index * steps + timestamp`.
    pub num: u64,
    /// Always [`RecordClass::Frame`].
    pub class: RecordClass,
    /// Non-empty masks in slot order.
    pub annotations: Vec<MaskAnnotation>,
}

impl FrameRecord {
    /// Frame record for step `timestamp` of batch `batch_index`.
    pub fn new(
        timestamp: u64,
        batch_index: u64,
        steps: u64,
        annotations: Vec<MaskAnnotation>,
    ) -> Self {
        Self {
            timestamp,
            num: batch_index * steps + timestamp,
            class: RecordClass::Frame,
            annotations,
        }
    }
}

/// All frames of one batch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VideoRecord {
    /// Always [`RecordClass::Video`].
    pub class: RecordClass,
    /// `video_id_{batch_index}`.
    pub filename: String,
    /// Frames in step order.
    pub frames: Vec<FrameRecord>,
}

impl VideoRecord {
    /// Video record for batch `batch_index`.
    pub fn new(batch_index: u64, frames: Vec<FrameRecord>) -> Self {
        Self {
            class: RecordClass::Video,
            filename: format!("video_id_{batch_index}"),
            frames,
        }
    }
}
