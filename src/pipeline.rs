//! One-call generation: prepare the output tree, run every batch, write the summary.

use crate::config::GeneratorConfig;
use crate::encode::ground_truth::GroundTruthSink;
use crate::encode::preview::PreviewSink;
use crate::encode::sink::BatchSink;
use crate::encode::tensor::TensorSink;
use crate::foundation::error::SpriteResult;
use crate::output::{clear_dir, make_dir, save_json};
use crate::schedule::scheduler::{BatchScheduler, RunReport};

/// Generate the full dataset described by `cfg`.
///
/// Tensors go to `input/` unless `cfg.visualize` is set, in which case upscaled PNG previews of
/// sequence 0 go to `preview/` instead. Metric runs also write detection lines and the mask
/// annotation document. Previous `input/` and `gt/` contents are removed first.
#[tracing::instrument(level = "info", skip_all, fields(task = %cfg.task, metric = cfg.metric))]
pub fn generate(cfg: &GeneratorConfig) -> SpriteResult<RunReport> {
    cfg.validate()?;
    let out_dir = cfg.output_dir();
    make_dir(&out_dir)?;

    let mut tensors = None;
    let mut previews = None;
    if cfg.visualize {
        let dir = cfg.preview_dir();
        make_dir(&dir)?;
        previews = Some(PreviewSink::new(dir));
    } else {
        let input = cfg.input_dir();
        clear_dir(&input)?;
        clear_dir(&cfg.gt_dir())?;
        make_dir(&input)?;
        tensors = Some(TensorSink::new(input));
    }

    let mut ground_truth = None;
    if cfg.metric {
        make_dir(&cfg.gt_dir())?;
        ground_truth = Some(GroundTruthSink::new(
            cfg.detections_path(),
            cfg.masks_path(),
        ));
    }

    let mut sinks: Vec<&mut dyn BatchSink> = Vec::with_capacity(3);
    if let Some(sink) = tensors.as_mut() {
        sinks.push(sink);
    }
    if let Some(sink) = previews.as_mut() {
        sinks.push(sink);
    }
    if let Some(sink) = ground_truth.as_mut() {
        sinks.push(sink);
    }

    let mut scheduler = BatchScheduler::new(cfg.clone())?;
    let report = scheduler.run(&mut sinks)?;

    save_json(&cfg.summary_path(), &cfg.summary())?;
    tracing::info!(dir = %out_dir.display(), "dataset written");
    Ok(report)
}
