use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};
use rand_xoshiro::SplitMix64;

use crate::annotate::encoder::AnnotationEncoder;
use crate::annotate::records::{DetectionRecord, FrameRecord};
use crate::config::GeneratorConfig;
use crate::foundation::error::SpriteResult;
use crate::render::compositor::FrameCompositor;
use crate::render::frame::FrameRgb;
use crate::scene::lifecycle::{ObjectSlot, StepOutcome};
use crate::schedule::context::RunContext;

/// Everything one sequence produced during one batch.
#[derive(Clone, Debug, Default)]
pub struct SequenceBatch {
    /// Composited frames, one per step.
    pub frames: Vec<FrameRgb>,
    /// Detection records in step then slot order (metric mode only).
    pub detections: Vec<DetectionRecord>,
    /// Mask frame records, one per step (metric mode only).
    pub mask_frames: Vec<FrameRecord>,
}

/// Per-sequence state carried from one batch to the next.
///
/// Owned by exactly one worker while a batch runs; never shared between sequences.
#[derive(Clone, Debug)]
pub struct SequenceState {
    index: usize,
    slots: Vec<ObjectSlot>,
    rng: SmallRng,
}

impl SequenceState {
    /// Fresh state for sequence `index`: every slot waiting with a zero counter.
    pub fn new(index: usize, cfg: &GeneratorConfig) -> Self {
        let seed = SplitMix64::seed_from_u64(cfg.seed.wrapping_add(index as u64)).next_u64();
        Self {
            index,
            slots: vec![ObjectSlot::default(); cfg.objects],
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Sequence index within the batch.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Object slots in index order.
    pub fn slots(&self) -> &[ObjectSlot] {
        &self.slots
    }

    /// Run `steps` time steps, advancing every slot once per step in index order.
    #[tracing::instrument(level = "debug", skip(self, ctx), fields(sequence = self.index))]
    pub fn run_batch(&mut self, ctx: &RunContext, batch_index: u64) -> SpriteResult<SequenceBatch> {
        let cfg = ctx.config();
        let mut compositor =
            FrameCompositor::new(cfg.canvas(), cfg.patch_h, cfg.patch_w, cfg.objects);
        let encoder = AnnotationEncoder::new(cfg.patch_h, cfg.patch_w, cfg.objects, cfg.steps);
        let mut out = SequenceBatch {
            frames: Vec::with_capacity(cfg.steps),
            ..SequenceBatch::default()
        };

        for t in 0..cfg.steps {
            compositor.begin_frame();
            for (slot, state) in self.slots.iter_mut().enumerate() {
                let StepOutcome::Visible(placement) = state.advance(ctx, &mut self.rng)? else {
                    continue;
                };
                let bx = compositor.render(slot, &placement)?;
                if cfg.metric {
                    out.detections
                        .push(encoder.detection(batch_index, t, placement.object_id, bx));
                }
            }
            out.frames.push(compositor.frame().clone());
            if cfg.metric {
                out.mask_frames
                    .push(encoder.frame_record(batch_index, t, compositor.layers()));
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/sequence.rs"]
mod tests;
