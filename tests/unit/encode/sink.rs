use super::*;
use crate::foundation::error::ChartError;

#[test]
fn in_memory_keeps_bytes_without_touching_disk() {
    let art = ChartSink::in_memory()
        .deliver(vec![1, 2, 3], ImageEncoding::Png)
        .unwrap();
    assert_eq!(art.bytes, vec![1, 2, 3]);
    assert_eq!(art.mime_type(), "image/png");
    assert!(!art.is_persisted());
}

#[test]
fn file_sink_stores_under_unique_name() {
    let tmp = tempfile::tempdir().unwrap();
    let sink = ChartSink::file(tmp.path().join("charts"));

    let a = sink.deliver(vec![7; 16], ImageEncoding::Jpeg).unwrap();
    let b = sink.deliver(vec![8; 16], ImageEncoding::Jpeg).unwrap();

    let (fa, fb) = (a.filename.clone().unwrap(), b.filename.clone().unwrap());
    assert_ne!(fa, fb);
    assert!(fa.ends_with(".jpg"));
    assert_eq!(a.mime_type(), "image/jpeg");
    assert_eq!(
        std::fs::read(tmp.path().join("charts").join(&fa)).unwrap(),
        vec![7; 16]
    );
}

#[test]
fn file_sink_reports_storage_errors() {
    let tmp = tempfile::tempdir().unwrap();
    let blocker = tmp.path().join("not-a-dir");
    std::fs::write(&blocker, b"x").unwrap();
    let err = ChartSink::file(&blocker)
        .deliver(vec![1], ImageEncoding::Png)
        .unwrap_err();
    assert!(matches!(err, ChartError::Storage(_)));
}
