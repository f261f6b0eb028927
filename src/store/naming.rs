use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::encode::format::ImageEncoding;

/// Prefix shared by every stored chart.
pub const ARTIFACT_PREFIX: &str = "radar_chart_";

static NEXT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Produce a fresh artifact filename with the given extension.
///
/// Shape: `radar_chart_{unix_millis}_{seq}_{random:08x}.{ext}`. `seq` is a process-wide
/// monotonically increasing counter, so two names from one process never repeat; the timestamp
/// and 32-bit random suffix keep separate processes sharing a directory apart.
pub fn next_filename(extension: &str) -> String {
    let seq = NEXT_SEQ.fetch_add(1, Ordering::Relaxed);
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    let suffix: u32 = rand::random();
    format!("{ARTIFACT_PREFIX}{millis}_{seq}_{suffix:08x}.{extension}")
}

/// Whether `name` is a flat artifact filename this service could have produced.
///
/// Used to gate the serving endpoint: no path separators, no dot-files, no traversal.
pub fn is_artifact_filename(name: &str) -> bool {
    let Some(stem) = name.strip_prefix(ARTIFACT_PREFIX) else {
        return false;
    };
    let Some((body, ext)) = stem.rsplit_once('.') else {
        return false;
    };
    !body.is_empty()
        && body
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
        && ImageEncoding::from_extension(ext).is_some()
}

#[cfg(test)]
#[path = "../../tests/unit/store/naming.rs"]
mod tests;
