use super::*;
use std::collections::HashSet;

#[test]
fn names_have_prefix_and_extension() {
    let name = next_filename("png");
    assert!(name.starts_with(ARTIFACT_PREFIX));
    assert!(name.ends_with(".png"));
    assert!(is_artifact_filename(&name));
    assert!(is_artifact_filename(&next_filename("jpg")));
}

#[test]
fn names_are_unique_across_threads() {
    let names: Vec<String> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| s.spawn(|| (0..500).map(|_| next_filename("png")).collect::<Vec<_>>()))
            .collect();
        handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect()
    });
    let unique: HashSet<&String> = names.iter().collect();
    assert_eq!(unique.len(), names.len());
}

#[test]
fn sequence_is_monotonic_within_a_thread() {
    fn seq(name: &str) -> u64 {
        let body = name
            .strip_prefix(ARTIFACT_PREFIX)
            .and_then(|s| s.strip_suffix(".png"))
            .unwrap();
        body.split('_').nth(1).unwrap().parse().unwrap()
    }
    let a = seq(&next_filename("png"));
    let b = seq(&next_filename("png"));
    assert!(b > a);
}

#[test]
fn rejects_foreign_and_unsafe_names() {
    for bad in [
        "",
        "radar_chart_.png",
        "radar_chart_1.gif",
        "radar_chart_1",
        "../radar_chart_1.png",
        "radar_chart_../../etc/passwd.png",
        "radar_chart_1/2.png",
        ".radar_chart_1.tmp",
        "other_1.png",
        "radar_chart_1 2.png",
    ] {
        assert!(!is_artifact_filename(bad), "{bad:?} should be rejected");
    }
    assert!(is_artifact_filename("radar_chart_42.png"));
    assert!(is_artifact_filename("radar_chart_42.jpeg"));
}
