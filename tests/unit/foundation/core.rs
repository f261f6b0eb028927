use super::*;

#[test]
fn canvas_rejects_empty_and_oversized() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, 0).is_err());
    assert!(Canvas::new(Canvas::MAX_DIM + 1, 10).is_err());
    assert!(Canvas::new(Canvas::MAX_DIM, 1).is_ok());
}

#[test]
fn canvas_center_and_len() {
    let c = Canvas::new(500, 400).unwrap();
    assert_eq!(c.center(), Point::new(250.0, 200.0));
    assert_eq!(c.rgba_len(), 500 * 400 * 4);
}
