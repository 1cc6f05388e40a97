use super::*;
use crate::config::{BatchCounts, Split};
use crate::foundation::core::Canvas;
use crate::render::frame::FrameRgb;
use crate::schedule::scheduler::Batch;

#[test]
fn writes_every_step_of_the_first_sequence_at_the_requested_size() {
    let dir = std::env::temp_dir().join(format!(
        "spritemot_preview_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    std::fs::create_dir_all(&dir).unwrap();
    let canvas = Canvas {
        width: 4,
        height: 4,
    };
    let mut lit = FrameRgb::black(canvas);
    lit.pixel_mut(0, 0).copy_from_slice(&[255, 0, 0]);
    let out = BatchOutput {
        batch: Batch {
            split: Split::Train,
            index: 3,
            canvas,
            sequences: vec![
                vec![lit, FrameRgb::black(canvas)],
                vec![FrameRgb::black(canvas); 2],
            ],
        },
        detections: Vec::new(),
        video: None,
    };

    let mut sink = PreviewSink::new(&dir).with_size(8);
    sink.begin(&SinkConfig {
        canvas,
        sequences: 2,
        steps: 2,
        batch_counts: BatchCounts { train: 4, test: 0 },
    })
    .unwrap();
    sink.push_batch(&out).unwrap();
    sink.end().unwrap();

    assert_eq!(sink.written(), 2);
    let first = image::open(dir.join("train_3_00.png")).unwrap().to_rgb8();
    assert_eq!(first.dimensions(), (8, 8));
    // Nearest upscaling by 2 turns the lit pixel into a 2x2 block.
    assert_eq!(first.get_pixel(1, 1).0, [255, 0, 0]);
    assert_eq!(first.get_pixel(2, 2).0, [0, 0, 0]);
    assert!(dir.join("train_3_01.png").exists());
    std::fs::remove_dir_all(&dir).unwrap();
}
