use super::*;

#[test]
fn grid_is_row_major() {
    let mut g = Grid::<u8>::new(3, 2);
    g.set(2, 1, 7);
    assert_eq!(g.as_slice()[5], 7);
    assert_eq!(g.get(2, 1), 7);
}

#[test]
fn grid_from_vec_rejects_wrong_length() {
    assert!(Grid::from_vec(2, 2, vec![0u8; 3]).is_err());
    assert!(Grid::from_vec(2, 2, vec![0u8; 4]).is_ok());
}

#[test]
fn flips_mirror_cells() {
    let g = Grid::from_vec(3, 2, vec![1u8, 2, 3, 4, 5, 6]).unwrap();
    assert_eq!(g.flipped_horizontal().as_slice(), &[3, 2, 1, 6, 5, 4]);
    assert_eq!(g.flipped_vertical().as_slice(), &[4, 5, 6, 1, 2, 3]);
}

#[test]
fn canvas_area_and_color_channels() {
    let c = Canvas {
        width: 4,
        height: 5,
    };
    assert_eq!(c.area(), 20);
    assert_eq!(Rgb8::new(1, 2, 3).channels(), [1, 2, 3]);
}
