//! Spritemot generates synthetic multi-object-tracking video for training and evaluating
//! trackers.
//!
//! Each run drives `N` independent sequences through a series of batches. In every time step, a
//! small set of object slots is born, moved along straight-line trajectories across the canvas,
//! and composited with occlusion onto a black frame. Metric runs also write MOT-style detection
//! lines and run-length encoded visible masks.
//!
//! - Pick a [`GeneratorConfig`] (metric or training preset)
//! - Call [`generate`] for the full on-disk dataset, or drive a [`BatchScheduler`] into your own
//!   [`BatchSink`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod annotate;
pub(crate) mod assets;
/// Generator presets and derived paths.
pub mod config;
pub(crate) mod encode;
pub mod output;
pub mod pipeline;
pub(crate) mod render;
pub(crate) mod scene;
pub(crate) mod schedule;

pub use crate::foundation::core::{BinaryMask, Canvas, Grid, Rgb8};
pub use crate::foundation::error::{SpriteError, SpriteResult};

pub use crate::annotate::encoder::{AnnotationEncoder, downsample_half};
pub use crate::annotate::records::{
    DetectionRecord, FrameRecord, MaskAnnotation, RecordClass, VideoRecord,
};
pub use crate::annotate::rle::{Rle, rle_decode, rle_encode};
pub use crate::assets::palette::ColorPalette;
pub use crate::assets::shapes::{ShapeKind, ShapeLibrary};
pub use crate::config::{BatchCounts, DataConfigSummary, GeneratorConfig, Split};
pub use crate::encode::ground_truth::GroundTruthSink;
pub use crate::encode::preview::{PREVIEW_SIZE, PreviewSink};
pub use crate::encode::sink::{BatchSink, InMemorySink, SinkConfig};
pub use crate::encode::tensor::{TensorSink, npy_header, save_tensor};
pub use crate::pipeline::generate;
pub use crate::render::compositor::{FrameCompositor, PatchBox};
pub use crate::render::frame::FrameRgb;
pub use crate::scene::appearance::{Appearance, SpritePatch};
pub use crate::scene::lifecycle::{ActiveObject, ObjectSlot, Placement, StepOutcome};
pub use crate::scene::trajectory::{Direction, Trajectory, TrajectoryPlanner};
pub use crate::schedule::context::{ObjectIdAllocator, RunContext};
pub use crate::schedule::scheduler::{Batch, BatchOutput, BatchScheduler, RunReport};
pub use crate::schedule::sequence::{SequenceBatch, SequenceState};
