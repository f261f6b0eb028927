use super::*;
use serde_json::json;

#[test]
fn parses_hex_and_named() {
    let c: Rgb8 = serde_json::from_value(json!("#ff0000")).unwrap();
    assert_eq!(c, Rgb8::new(255, 0, 0));

    let c: Rgb8 = serde_json::from_value(json!("Blue")).unwrap();
    assert_eq!(c, Rgb8::BLUE);
}

#[test]
fn parses_rgb_object_and_array() {
    let c: Rgb8 = serde_json::from_value(json!({"r": 0.0, "g": 0.5, "b": 1.0})).unwrap();
    assert_eq!(c, Rgb8::new(0, 128, 255));

    let c: Rgb8 = serde_json::from_value(json!([1.0, 1.0, 1.0])).unwrap();
    assert_eq!(c, Rgb8::WHITE);

    assert!(serde_json::from_value::<Rgb8>(json!([1.0, 1.0])).is_err());
}

#[test]
fn rejects_malformed_hex() {
    assert!(Rgb8::parse("#12345").is_err());
    assert!(Rgb8::parse("#gg0000").is_err());
    assert!(Rgb8::parse("not-a-color").is_err());
}

#[test]
fn serializes_as_hex() {
    let v = serde_json::to_value(Rgb8::new(0x1f, 0x77, 0xb4)).unwrap();
    assert_eq!(v, json!("#1f77b4"));
}

#[test]
fn alpha_is_scaled_and_clamped() {
    assert_eq!(Rgb8::BLUE.with_alpha(0.4), [0, 0, 255, 102]);
    assert_eq!(Rgb8::BLUE.with_alpha(3.0)[3], 255);
    assert_eq!(Rgb8::BLUE.with_alpha(-1.0)[3], 0);
}
