use crate::config::BatchCounts;
use crate::foundation::core::Canvas;
use crate::foundation::error::SpriteResult;
use crate::schedule::scheduler::BatchOutput;

/// Configuration handed to a [`BatchSink`] before the first batch.
#[derive(Debug, Clone)]
pub struct SinkConfig {
    /// Visible canvas.
    pub canvas: Canvas,
    /// Sequences per batch.
    pub sequences: usize,
    /// Steps per batch.
    pub steps: usize,
    /// Batches that will be pushed per split.
    pub batch_counts: BatchCounts,
}

/// Consumer of finished batches.
///
/// Ordering contract: batches arrive train split first, then test, each in increasing batch
/// index, always from the scheduler thread.
pub trait BatchSink: Send {
    /// Called once before any batch is pushed.
    fn begin(&mut self, cfg: &SinkConfig) -> SpriteResult<()>;
    /// Push one batch.
    fn push_batch(&mut self, out: &BatchOutput) -> SpriteResult<()>;
    /// Called once after the last batch.
    fn end(&mut self) -> SpriteResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    batches: Vec<BatchOutput>,
    ended: bool,
}

impl InMemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<&SinkConfig> {
        self.cfg.as_ref()
    }

    /// Captured batches in push order.
    pub fn batches(&self) -> &[BatchOutput] {
        &self.batches
    }

    /// `true` once `end` was called.
    pub fn ended(&self) -> bool {
        self.ended
    }
}

impl BatchSink for InMemorySink {
    fn begin(&mut self, cfg: &SinkConfig) -> SpriteResult<()> {
        self.cfg = Some(cfg.clone());
        self.batches.clear();
        self.ended = false;
        Ok(())
    }

    fn push_batch(&mut self, out: &BatchOutput) -> SpriteResult<()> {
        self.batches.push(out.clone());
        Ok(())
    }

    fn end(&mut self) -> SpriteResult<()> {
        self.ended = true;
        Ok(())
    }
}
