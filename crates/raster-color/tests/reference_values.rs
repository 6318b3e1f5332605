//! Known-answer tests against published sRGB/Lab/WCAG reference values.

use approx::assert_relative_eq;
use raster_color::{contrast_ratio, parse_rgb, rgb_to_lab, rgb_to_xyz, Rgb8};

#[test]
fn xyz_of_primaries_matches_matrix_columns() {
    // Each primary at full scale lands on its matrix column (x100).
    let [x, y, z] = rgb_to_xyz(Rgb8::new(255, 0, 0));
    assert_relative_eq!(x, 41.246, epsilon = 0.05);
    assert_relative_eq!(y, 21.267, epsilon = 0.05);
    assert_relative_eq!(z, 1.933, epsilon = 0.05);

    let [x, y, z] = rgb_to_xyz(Rgb8::new(0, 255, 0));
    assert_relative_eq!(x, 35.758, epsilon = 0.05);
    assert_relative_eq!(y, 71.515, epsilon = 0.05);
    assert_relative_eq!(z, 11.919, epsilon = 0.05);

    let [x, y, z] = rgb_to_xyz(Rgb8::new(0, 0, 255));
    assert_relative_eq!(x, 18.044, epsilon = 0.05);
    assert_relative_eq!(y, 7.218, epsilon = 0.05);
    assert_relative_eq!(z, 95.030, epsilon = 0.05);
}

#[test]
fn lab_of_primaries_matches_published_values() {
    let [l, a, b] = rgb_to_lab(Rgb8::new(255, 0, 0));
    assert_relative_eq!(l, 53.24, epsilon = 0.5);
    assert_relative_eq!(a, 80.09, epsilon = 0.5);
    assert_relative_eq!(b, 67.20, epsilon = 0.5);

    let [l, a, b] = rgb_to_lab(Rgb8::new(0, 255, 0));
    assert_relative_eq!(l, 87.74, epsilon = 0.5);
    assert_relative_eq!(a, -86.18, epsilon = 0.5);
    assert_relative_eq!(b, 83.18, epsilon = 0.5);

    let [l, a, b] = rgb_to_lab(Rgb8::new(0, 0, 255));
    assert_relative_eq!(l, 32.30, epsilon = 0.5);
    assert_relative_eq!(a, 79.19, epsilon = 0.5);
    assert_relative_eq!(b, -107.86, epsilon = 0.5);
}

#[test]
fn wcag_reference_pairs() {
    // White on black is the maximum ratio.
    assert_relative_eq!(
        contrast_ratio(Rgb8::new(255, 255, 255), Rgb8::new(0, 0, 0)),
        21.0,
        epsilon = 0.1
    );
    // #767676 on white is the canonical "just passes AA" gray (4.54:1).
    assert_relative_eq!(
        contrast_ratio(Rgb8::new(0x76, 0x76, 0x76), Rgb8::new(255, 255, 255)),
        4.54,
        epsilon = 0.05
    );
}

#[test]
fn pipette_text_roundtrip() {
    // The shape the host's canvas readout produces.
    let picked = parse_rgb("rgb(128, 64, 32)").unwrap();
    assert_eq!(picked, Rgb8::new(128, 64, 32));
    let [l, _, _] = rgb_to_lab(picked);
    assert!(l > 0.0 && l < 100.0);
}
