use super::*;
use std::f64::consts::PI;

fn vector(values: [f64; 5]) -> TraitVector {
    TraitVector::new(values).unwrap()
}

#[test]
fn closed_polygon_has_six_points_and_repeats_first() {
    let poly = build(&vector([1.0, 2.0, 3.0, 4.0, 5.0]));
    assert_eq!(poly.len(), 6);
    assert_eq!(poly.points()[0], poly.points()[5]);
    assert_eq!(poly.vertices().len(), 5);
}

#[test]
fn angles_follow_canonical_order() {
    let poly = build(&vector([1.0, 2.0, 3.0, 4.0, 5.0]));
    let expected = [0.0, 2.0 * PI / 5.0, 4.0 * PI / 5.0, 6.0 * PI / 5.0, 8.0 * PI / 5.0];
    for (p, want) in poly.vertices().iter().zip(expected) {
        assert!((p.angle - want).abs() < 1e-12, "{} != {want}", p.angle);
    }
    for w in poly.vertices().windows(2) {
        assert!(w[0].angle < w[1].angle);
    }
    let radii: Vec<f64> = poly.vertices().iter().map(|p| p.radius).collect();
    assert_eq!(radii, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
}

#[test]
fn raw_values_are_not_clamped() {
    let poly = build(&vector([-4.0, 0.0, 250.0, 0.5, 0.0]));
    assert_eq!(poly.points()[0].radius, -4.0);
    assert_eq!(poly.points()[2].radius, 250.0);
    assert_eq!(poly.radial_extent(), (-4.0, 250.0));
}

#[test]
fn build_is_deterministic() {
    let v = vector([3.5, 1.0, 4.0, 1.0, 5.9]);
    assert_eq!(build(&v), build(&v));
}

#[test]
fn all_zero_is_degenerate_but_valid() {
    let poly = build(&vector([0.0; 5]));
    assert_eq!(poly.len(), 6);
    assert!(poly.points().iter().all(|p| p.radius == 0.0));
    assert_eq!(poly.radial_extent(), (0.0, 0.0));
}
