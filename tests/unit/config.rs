use super::*;

#[test]
fn metric_batch_counts_match_budget() {
    let cfg = GeneratorConfig::metric();
    assert_eq!(cfg.batch_counts(), BatchCounts { train: 0, test: 1000 });
}

#[test]
fn training_batch_counts_match_budget() {
    let cfg = GeneratorConfig::training();
    assert_eq!(cfg.batch_counts(), BatchCounts { train: 150, test: 6 });
}

#[test]
fn margin_is_half_patch_height() {
    assert_eq!(GeneratorConfig::metric().margin(), 10);
}

#[test]
fn output_paths_follow_mode() {
    let mut cfg = GeneratorConfig::metric();
    cfg.output_root = PathBuf::from("out");
    assert_eq!(cfg.output_dir(), PathBuf::from("out/spmot/pt/metric"));
    assert_eq!(cfg.detections_path(), PathBuf::from("out/spmot/pt/metric/spmotgt.txt"));
    assert_eq!(
        cfg.masks_path(),
        PathBuf::from("out/spmot/pt/metric/gt/spmot_test_gt_mot_annotations_masks.json")
    );

    cfg.metric = false;
    assert_eq!(cfg.input_dir(), PathBuf::from("out/spmot/pt/input"));
}

#[test]
fn defaults_validate() {
    GeneratorConfig::metric().validate().unwrap();
    GeneratorConfig::training().validate().unwrap();
}

#[test]
fn degenerate_configs_are_rejected() {
    let mut cfg = GeneratorConfig::metric();
    cfg.birth_prob = 1.5;
    assert!(cfg.validate().is_err());

    let mut cfg = GeneratorConfig::metric();
    cfg.scale_var = 1.0;
    assert!(cfg.validate().is_err());

    let mut cfg = GeneratorConfig::metric();
    cfg.height = 20;
    assert!(cfg.validate().is_err());

    let mut cfg = GeneratorConfig::metric();
    cfg.threads = 0;
    assert!(cfg.validate().is_err());
}

#[test]
fn summary_uses_short_key_names() {
    let json = serde_json::to_value(GeneratorConfig::metric().summary()).unwrap();
    assert_eq!(json["task"], "spmot");
    assert_eq!(json["test_batch_num"], 1000);
    assert_eq!(json["N"], 1);
    assert_eq!(json["h"], 21);
    assert_eq!(json["H"], 128);
    assert_eq!(json["zeta_r"], serde_json::json!([1.0, 0.2]));
}
