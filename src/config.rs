use std::path::PathBuf;

use serde::Serialize;

use crate::foundation::core::Canvas;
use crate::foundation::error::{SpriteError, SpriteResult};

/// Which split a batch belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Split {
    /// Training split.
    Train,
    /// Test split.
    Test,
}

impl Split {
    /// Splits in generation order.
    pub const ALL: [Split; 2] = [Split::Train, Split::Test];

    /// Lowercase name used in file names and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Split::Train => "train",
            Split::Test => "test",
        }
    }
}

/// Number of batches generated per split.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchCounts {
    /// Batches in the train split.
    pub train: u64,
    /// Batches in the test split.
    pub test: u64,
}

impl BatchCounts {
    /// Batch count for `split`.
    pub fn get(self, split: Split) -> u64 {
        match split {
            Split::Train => self.train,
            Split::Test => self.test,
        }
    }
}

/// Every constant the generator runs with.
///
/// The binary only chooses between [`GeneratorConfig::metric`] and
/// [`GeneratorConfig::training`]; library callers may tweak fields before running.
#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    /// Task name; prefixes output directories and files.
    pub task: String,
    /// Metric mode writes detection records and mask annotations.
    pub metric: bool,
    /// Visualize mode writes PNG previews instead of tensors.
    pub visualize: bool,
    /// Sequences per batch (`N`).
    pub sequences: usize,
    /// Time steps per batch (`T`).
    pub steps: usize,
    /// Canvas height (`H`).
    pub height: u32,
    /// Canvas width (`W`).
    pub width: u32,
    /// Template height (`h`); also the working-canvas border.
    pub patch_h: u32,
    /// Template width (`w`); also the working-canvas border.
    pub patch_w: u32,
    /// Object slots per sequence (`O`).
    pub objects: usize,
    /// Total frame budget across both splits.
    pub frame_budget: f64,
    /// Fraction of the frame budget that goes to the train split.
    pub train_ratio: f64,
    /// Probability that a slot at the end of its wait is born on a given step.
    pub birth_prob: f64,
    /// Steps a slot waits after disappearing before births are attempted.
    pub appear_interval: u32,
    /// Scale jitter: scale is uniform in `[1 - scale_var, 1 + scale_var)`.
    pub scale_var: f64,
    /// Aspect jitter: ratio is `sqrt` of a uniform in `[1 - ratio_var, 1 + ratio_var)`.
    pub ratio_var: f64,
    /// Pixels travelled per step.
    pub speed: f64,
    /// Boundary tolerance of the interior test.
    pub eps: f64,
    /// Base seed for per-sequence random streams.
    pub seed: u64,
    /// Root of the output tree.
    pub output_root: PathBuf,
    /// Worker threads for the batch fan-out.
    pub threads: usize,
}

impl GeneratorConfig {
    /// Metric (evaluation) run: one sequence, test split only, single worker.
    pub fn metric() -> Self {
        Self {
            metric: true,
            sequences: 1,
            frame_budget: 1e4,
            train_ratio: 0.0,
            threads: 1,
            ..Self::base()
        }
    }

    /// Training run: 64 sequences per batch, one worker per available core.
    pub fn training() -> Self {
        let threads = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        Self {
            metric: false,
            sequences: 64,
            frame_budget: 1e5,
            train_ratio: 0.96,
            threads,
            ..Self::base()
        }
    }

    fn base() -> Self {
        Self {
            task: "spmot".to_string(),
            metric: false,
            visualize: false,
            sequences: 1,
            steps: 10,
            height: 128,
            width: 128,
            patch_h: 21,
            patch_w: 21,
            objects: 3,
            frame_budget: 0.0,
            train_ratio: 0.0,
            birth_prob: 0.5,
            appear_interval: 5,
            scale_var: 0.1,
            ratio_var: 0.2,
            speed: 5.3,
            eps: 1e-5,
            seed: 0,
            output_root: PathBuf::from("data"),
            threads: 1,
        }
    }

    /// Color channels per pixel (`D`).
    pub fn channels(&self) -> usize {
        3
    }

    /// Interior margin `m = h / 2`.
    pub fn margin(&self) -> u32 {
        self.patch_h / 2
    }

    /// Visible canvas.
    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }

    /// Batches per split derived from the frame budget.
    pub fn batch_counts(&self) -> BatchCounts {
        let per_batch = (self.sequences * self.steps) as f64;
        let train_frames = self.frame_budget * self.train_ratio;
        let test_frames = self.frame_budget * (1.0 - self.train_ratio);
        BatchCounts {
            train: (train_frames / per_batch).floor().max(0.0) as u64,
            test: (test_frames / per_batch).floor().max(0.0) as u64,
        }
    }

    /// `<root>/<task>/pt[/metric]`.
    pub fn output_dir(&self) -> PathBuf {
        let dir = self.output_root.join(&self.task).join("pt");
        if self.metric { dir.join("metric") } else { dir }
    }

    /// Directory receiving tensor files.
    pub fn input_dir(&self) -> PathBuf {
        self.output_dir().join("input")
    }

    /// Directory receiving mask annotations.
    pub fn gt_dir(&self) -> PathBuf {
        self.output_dir().join("gt")
    }

    /// Directory receiving visualize-mode previews.
    pub fn preview_dir(&self) -> PathBuf {
        self.output_dir().join("preview")
    }

    /// Detection record file (metric mode).
    pub fn detections_path(&self) -> PathBuf {
        self.output_dir().join(format!("{}gt.txt", self.task))
    }

    /// Mask annotation file (metric mode).
    pub fn masks_path(&self) -> PathBuf {
        self.gt_dir()
            .join(format!("{}_test_gt_mot_annotations_masks.json", self.task))
    }

    /// Configuration summary file.
    pub fn summary_path(&self) -> PathBuf {
        self.output_dir().join("data_config.json")
    }

    /// Reject configurations that would make the generator degenerate.
    pub fn validate(&self) -> SpriteResult<()> {
        if self.sequences == 0 || self.steps == 0 || self.objects == 0 {
            return Err(SpriteError::validation(
                "sequences, steps and objects must be >= 1",
            ));
        }
        if self.patch_h == 0 || self.patch_w == 0 {
            return Err(SpriteError::validation("patch size must be >= 1"));
        }
        let m = self.margin();
        if self.height < 2 * m + 1 || self.width < 2 * m + 1 {
            return Err(SpriteError::validation(format!(
                "canvas {}x{} leaves no interior for margin {m}",
                self.width, self.height
            )));
        }
        if !(0.0..=1.0).contains(&self.birth_prob) {
            return Err(SpriteError::validation("birth_prob must be in [0, 1]"));
        }
        if !(0.0..=1.0).contains(&self.train_ratio) {
            return Err(SpriteError::validation("train_ratio must be in [0, 1]"));
        }
        if !(0.0..1.0).contains(&self.scale_var) || !(0.0..1.0).contains(&self.ratio_var) {
            return Err(SpriteError::validation(
                "scale_var and ratio_var must be in [0, 1)",
            ));
        }
        if !self.speed.is_finite() || self.speed < 0.0 {
            return Err(SpriteError::validation("speed must be finite and >= 0"));
        }
        if !self.frame_budget.is_finite() || self.frame_budget < 0.0 {
            return Err(SpriteError::validation(
                "frame_budget must be finite and >= 0",
            ));
        }
        if self.threads == 0 {
            return Err(SpriteError::validation("threads must be >= 1"));
        }
        Ok(())
    }

    /// Summary persisted next to the generated data.
    pub fn summary(&self) -> DataConfigSummary {
        let counts = self.batch_counts();
        DataConfigSummary {
            task: self.task.clone(),
            train_batch_num: counts.train,
            test_batch_num: counts.test,
            n: self.sequences,
            t: self.steps,
            d: self.channels(),
            h_canvas: self.height,
            w_canvas: self.width,
            h_patch: self.patch_h,
            w_patch: self.patch_w,
            zeta_s: self.scale_var,
            zeta_r: [1.0, self.ratio_var],
        }
    }
}

/// Contents of `data_config.json`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DataConfigSummary {
    /// Task name.
    pub task: String,
    /// Train batches written.
    pub train_batch_num: u64,
    /// Test batches written.
    pub test_batch_num: u64,
    /// Sequences per batch.
    #[serde(rename = "N")]
    pub n: usize,
    /// Steps per batch.
    #[serde(rename = "T")]
    pub t: usize,
    /// Channels.
    #[serde(rename = "D")]
    pub d: usize,
    /// Canvas height.
    #[serde(rename = "H")]
    pub h_canvas: u32,
    /// Canvas width.
    #[serde(rename = "W")]
    pub w_canvas: u32,
    /// Template height.
    #[serde(rename = "h")]
    pub h_patch: u32,
    /// Template width.
    #[serde(rename = "w")]
    pub w_patch: u32,
    /// Scale jitter.
    pub zeta_s: f64,
    /// Aspect jitter as `[1, ratio_var]`.
    pub zeta_r: [f64; 2],
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
