use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;
use crate::assets::shapes::OPAQUE;

fn appearance(shape_index: usize, scale: f64, ratio: f64) -> Appearance {
    Appearance {
        color_index: 3,
        shape_index,
        scale,
        ratio,
    }
}

#[test]
fn patch_size_applies_scale_and_ratio() {
    assert_eq!(appearance(0, 1.0, 1.0).patch_size(21, 21), (21, 21));
    // 21 * 1.1 * 1.2 = 27.72, 21 * 1.1 / 1.2 = 19.25
    assert_eq!(appearance(0, 1.1, 1.2).patch_size(21, 21), (28, 19));
}

#[test]
fn identity_rectangle_patch_is_opaque() {
    let lib = ShapeLibrary::new(21, 21);
    let patch = appearance(1, 1.0, 1.0).render(&lib).unwrap();
    assert_eq!((patch.height(), patch.width()), (21, 21));
    assert_eq!(patch.color, Rgb8::new(255, 0, 0));
    assert!(patch.alpha.as_slice().iter().all(|&a| a == OPAQUE));
}

#[test]
fn resized_patch_has_requested_size() {
    let lib = ShapeLibrary::new(21, 21);
    let app = appearance(0, 0.95, 1.05);
    let patch = app.render(&lib).unwrap();
    assert_eq!((patch.height(), patch.width()), app.patch_size(21, 21));
}

#[test]
fn samples_stay_within_configured_ranges() {
    let cfg = GeneratorConfig::metric();
    let lib = ShapeLibrary::new(cfg.patch_h, cfg.patch_w);
    let mut rng = SmallRng::seed_from_u64(11);
    for _ in 0..500 {
        let a = Appearance::sample(&mut rng, &cfg, &lib);
        assert!(a.color_index < 6);
        assert!(a.shape_index < 4);
        assert!(a.scale >= 0.9 && a.scale < 1.1);
        assert!(a.ratio >= 0.8f64.sqrt() && a.ratio < 1.2f64.sqrt());
        let (h, w) = a.patch_size(cfg.patch_h, cfg.patch_w);
        assert!(h > 0 && w > 0);
    }
}
