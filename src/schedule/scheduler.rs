use rayon::prelude::*;

use crate::annotate::records::{DetectionRecord, VideoRecord};
use crate::config::{BatchCounts, GeneratorConfig, Split};
use crate::encode::sink::{BatchSink, SinkConfig};
use crate::foundation::core::Canvas;
use crate::foundation::error::{SpriteError, SpriteResult};
use crate::render::frame::FrameRgb;
use crate::schedule::context::RunContext;
use crate::schedule::sequence::{SequenceBatch, SequenceState};

/// Frames of every sequence for one batch.
#[derive(Clone, Debug)]
pub struct Batch {
    /// Split the batch belongs to.
    pub split: Split,
    /// Batch index within the split.
    pub index: u64,
    /// Visible canvas.
    pub canvas: Canvas,
    /// `sequences[n][t]` is step `t` of sequence `n`.
    pub sequences: Vec<Vec<FrameRgb>>,
}

impl Batch {
    /// `[N, T, 3, H, W]`.
    pub fn tensor_shape(&self) -> [usize; 5] {
        let steps = self.sequences.first().map_or(0, Vec::len);
        [
            self.sequences.len(),
            steps,
            3,
            self.canvas.height as usize,
            self.canvas.width as usize,
        ]
    }

    /// Pixels in `N x T x 3 x H x W` order (channel-planar per frame).
    pub fn to_tensor_bytes(&self) -> Vec<u8> {
        let [n, t, d, h, w] = self.tensor_shape();
        let plane = h * w;
        let mut out = Vec::with_capacity(n * t * d * plane);
        for frames in &self.sequences {
            for frame in frames {
                for c in 0..d {
                    out.extend(frame.data.iter().skip(c).step_by(d).take(plane));
                }
            }
        }
        out
    }
}

/// One finished batch plus its ground truth.
#[derive(Clone, Debug)]
pub struct BatchOutput {
    /// Composited frames.
    pub batch: Batch,
    /// Detection records of every sequence, in sequence order (metric mode only).
    pub detections: Vec<DetectionRecord>,
    /// Mask video built from sequence 0 (metric mode only).
    pub video: Option<VideoRecord>,
}

/// Totals of a finished run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Batches per split.
    pub batch_counts: BatchCounts,
    /// Batches actually produced.
    pub batches: u64,
    /// Objects born over the whole run.
    pub objects_born: u64,
}

/// Drives `N` sequences through every batch of both splits.
///
/// Sequences of one batch run concurrently on a bounded rayon pool; the scheduler joins them
/// before starting the next batch because each sequence resumes from its previous end state.
pub struct BatchScheduler {
    ctx: RunContext,
    states: Vec<SequenceState>,
    pool: rayon::ThreadPool,
}

impl BatchScheduler {
    /// Validate `config` and set up the worker pool and per-sequence states.
    pub fn new(config: GeneratorConfig) -> SpriteResult<Self> {
        config.validate()?;
        let pool = build_thread_pool(config.threads)?;
        let states = (0..config.sequences)
            .map(|n| SequenceState::new(n, &config))
            .collect();
        Ok(Self {
            ctx: RunContext::new(config),
            states,
            pool,
        })
    }

    /// Shared run context.
    pub fn context(&self) -> &RunContext {
        &self.ctx
    }

    /// Per-sequence states in sequence order.
    pub fn states(&self) -> &[SequenceState] {
        &self.states
    }

    /// Run batch `index` of `split` on every sequence.
    pub fn run_batch(&mut self, split: Split, index: u64) -> SpriteResult<BatchOutput> {
        let ctx = &self.ctx;
        let states = &mut self.states;
        let results: Vec<SpriteResult<SequenceBatch>> = self.pool.install(|| {
            states
                .par_iter_mut()
                .map(|state| state.run_batch(ctx, index))
                .collect()
        });

        let mut sequences = Vec::with_capacity(results.len());
        let mut detections = Vec::new();
        let mut video = None;
        for (n, result) in results.into_iter().enumerate() {
            let seq = result?;
            detections.extend(seq.detections);
            if n == 0 && ctx.config().metric {
                video = Some(VideoRecord::new(index, seq.mask_frames));
            }
            sequences.push(seq.frames);
        }

        Ok(BatchOutput {
            batch: Batch {
                split,
                index,
                canvas: ctx.config().canvas(),
                sequences,
            },
            detections,
            video,
        })
    }

    /// Run every batch of both splits, handing each to all `sinks` in order.
    #[tracing::instrument(level = "info", skip_all, fields(task = %self.ctx.config().task))]
    pub fn run(&mut self, sinks: &mut [&mut dyn BatchSink]) -> SpriteResult<RunReport> {
        let cfg = self.ctx.config().clone();
        let counts = cfg.batch_counts();
        tracing::info!(
            threads = cfg.threads,
            metric = cfg.metric,
            train = counts.train,
            test = counts.test,
            "starting run"
        );

        let sink_cfg = SinkConfig {
            canvas: cfg.canvas(),
            sequences: cfg.sequences,
            steps: cfg.steps,
            batch_counts: counts,
        };
        for sink in sinks.iter_mut() {
            sink.begin(&sink_cfg)?;
        }

        let mut report = RunReport {
            batch_counts: counts,
            ..RunReport::default()
        };
        for split in Split::ALL {
            let total = counts.get(split);
            for s in 0..total {
                let out = self.run_batch(split, s)?;
                for sink in sinks.iter_mut() {
                    sink.push_batch(&out)?;
                }
                report.batches += 1;
                tracing::info!("{}: {} / {}", split.as_str(), s + 1, total);
            }
        }

        for sink in sinks.iter_mut() {
            sink.end()?;
        }
        report.objects_born = self.ctx.ids().issued();
        tracing::info!(
            batches = report.batches,
            objects = report.objects_born,
            "run finished"
        );
        Ok(report)
    }
}

fn build_thread_pool(threads: usize) -> SpriteResult<rayon::ThreadPool> {
    if threads == 0 {
        return Err(SpriteError::validation("worker threads must be >= 1"));
    }
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|e| SpriteError::render(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/scheduler.rs"]
mod tests;
