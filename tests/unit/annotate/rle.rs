use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::*;

fn mask(w: u32, h: u32, cells: &[u8]) -> BinaryMask {
    BinaryMask::from_vec(w, h, cells.to_vec()).unwrap()
}

#[test]
fn encoding_scans_columns_and_starts_with_zeros() {
    // 2 rows x 3 columns:
    // 1 0 1
    // 1 0 0
    let m = mask(3, 2, &[1, 0, 1, 1, 0, 0]);
    let rle = rle_encode(&m);
    assert_eq!(rle.size, [2, 3]);
    assert_eq!(rle.counts, vec![0, 2, 2, 1, 1]);
    assert_eq!(rle.area(), 3);
}

#[test]
fn all_zero_and_all_one_grids_round_trip() {
    let zeros = BinaryMask::new(4, 3);
    let rle = rle_encode(&zeros);
    assert_eq!(rle.counts, vec![12]);
    assert_eq!(rle_decode(&rle).unwrap(), zeros);

    let ones = BinaryMask::filled(4, 3, 1);
    let rle = rle_encode(&ones);
    assert_eq!(rle.counts, vec![0, 12]);
    assert_eq!(rle_decode(&rle).unwrap(), ones);
}

#[test]
fn random_grids_round_trip() {
    let mut rng = SmallRng::seed_from_u64(9);
    for _ in 0..50 {
        let w = rng.random_range(1..20u32);
        let h = rng.random_range(1..20u32);
        let cells: Vec<u8> = (0..w * h).map(|_| u8::from(rng.random_bool(0.3))).collect();
        let m = mask(w, h, &cells);
        assert_eq!(rle_decode(&rle_encode(&m)).unwrap(), m);
    }
}

#[test]
fn decode_rejects_counts_that_do_not_cover_the_grid() {
    let rle = Rle {
        size: [2, 2],
        counts: vec![1, 1],
    };
    assert!(rle_decode(&rle).is_err());
}

#[test]
fn serializes_as_size_and_counts() {
    let rle = rle_encode(&mask(1, 2, &[0, 1]));
    let json = serde_json::to_value(&rle).unwrap();
    assert_eq!(json, serde_json::json!({ "size": [2, 1], "counts": [1, 1] }));
}
