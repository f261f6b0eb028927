use super::*;
use crate::foundation::error::ChartError;
use serde_json::json;

#[test]
fn missing_keys_default_to_zero() {
    let v = scores_from_json(&json!({"Openness": 5})).unwrap();
    assert_eq!(v.values(), &[0.0, 0.0, 0.0, 0.0, 5.0]);

    let explicit = scores_from_json(&json!({
        "Extraversion": 0,
        "Agreeableness": 0,
        "Conscientiousness": 0,
        "Neuroticism": 0,
        "Openness": 5
    }))
    .unwrap();
    assert_eq!(v, explicit);
}

#[test]
fn integers_and_floats_are_uniform() {
    let a = scores_from_json(&json!({"Extraversion": 3, "Neuroticism": -2})).unwrap();
    let b = scores_from_json(&json!({"Extraversion": 3.0, "Neuroticism": -2.0})).unwrap();
    assert_eq!(a, b);
}

#[test]
fn unknown_keys_are_ignored() {
    let v = scores_from_json(&json!({"Openness": 1.5, "Humor": "lots"})).unwrap();
    assert_eq!(v.get(Trait::Openness), 1.5);
}

#[test]
fn non_numeric_values_are_rejected() {
    for bad in [json!("high"), json!(true), json!(null), json!([1]), json!({"v": 1})] {
        let err = scores_from_json(&json!({ "Extraversion": bad })).unwrap_err();
        match err {
            ChartError::Validation(msg) => assert_eq!(msg, NON_NUMERIC_MESSAGE),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}

#[test]
fn non_object_body_is_rejected() {
    assert!(matches!(
        scores_from_json(&json!([1, 2, 3, 4, 5])),
        Err(ChartError::Validation(_))
    ));
    assert!(matches!(
        scores_from_slice(b"not json"),
        Err(ChartError::Validation(_))
    ));
}

#[test]
fn parses_raw_bytes() {
    let v = scores_from_slice(br#"{"Agreeableness": 4.25}"#).unwrap();
    assert_eq!(v.get(Trait::Agreeableness), 4.25);
}
