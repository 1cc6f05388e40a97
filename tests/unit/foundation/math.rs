use super::*;

#[test]
fn rounding_ties_go_away_from_zero() {
    assert_eq!(round_half_away(2.5), 3);
    assert_eq!(round_half_away(-2.5), -3);
    assert_eq!(round_half_away(2.49), 2);
    assert_eq!(round_half_away(0.5), 1);
}

#[test]
fn interior_bounds_include_eps() {
    assert!(within_interior(10.0, 10, 128, 1e-5));
    assert!(within_interior(117.0, 10, 128, 1e-5));
    assert!(!within_interior(9.0, 10, 128, 1e-5));
    assert!(!within_interior(118.0, 10, 128, 1e-5));
    assert!(within_interior(10.0 - 1e-6, 10, 128, 1e-5));
}

#[test]
fn blend_endpoints() {
    assert_eq!(blend_u8(10, 200, 0.0), 10);
    assert_eq!(blend_u8(10, 200, 1.0), 200);
    assert_eq!(blend_u8(0, 255, 0.5), 128);
    assert_eq!(blend_u8(255, 0, 0.5), 128);
}

#[test]
fn uniform_index_stays_in_range() {
    assert_eq!(uniform_index(0.0, 6), 0);
    assert_eq!(uniform_index(0.999_999, 6), 5);
    assert_eq!(uniform_index(1.0, 6), 5);
    assert_eq!(uniform_index(0.5, 4), 2);
}

#[test]
fn jitter_spans_symmetric_range() {
    assert!((symmetric_jitter(0.0, 0.1) - 0.9).abs() < 1e-12);
    assert!((symmetric_jitter(0.5, 0.1) - 1.0).abs() < 1e-12);
}
