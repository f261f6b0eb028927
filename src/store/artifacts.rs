use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use crate::encode::format::ImageEncoding;
use crate::foundation::error::{ChartError, ChartResult};
use crate::store::naming::{ARTIFACT_PREFIX, is_artifact_filename, next_filename};

/// Fresh names drawn before a write gives up on collisions.
pub const MAX_NAME_ATTEMPTS: usize = 8;

const TEMP_PREFIX: &str = ".radar_chart_";
const TEMP_SUFFIX: &str = ".tmp";

/// A chart persisted in the store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoredArtifact {
    /// Flat filename inside the store directory.
    pub filename: String,
    /// Full path on disk.
    pub path: PathBuf,
}

/// Flat directory of chart images.
///
/// Writes go to a temporary file in the same directory and are then linked under a fresh name
/// without clobbering, so readers never observe partial files and concurrent writers never
/// overwrite each other.
#[derive(Clone, Debug)]
pub struct ArtifactStore {
    root: PathBuf,
}

impl ArtifactStore {
    /// Store rooted at `root`. Nothing touches the filesystem until the first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory holding the artifacts.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the store directory if absent. Safe to race with other callers.
    pub fn ensure_dir(&self) -> ChartResult<()> {
        std::fs::create_dir_all(&self.root).map_err(|e| {
            ChartError::storage(format!(
                "create artifact dir '{}': {e}",
                self.root.display()
            ))
        })
    }

    /// Persist encoded bytes under a freshly generated name.
    pub fn persist(&self, bytes: &[u8], encoding: ImageEncoding) -> ChartResult<StoredArtifact> {
        self.persist_with(bytes, encoding, next_filename)
    }

    pub(crate) fn persist_with(
        &self,
        bytes: &[u8],
        encoding: ImageEncoding,
        mut name_for: impl FnMut(&str) -> String,
    ) -> ChartResult<StoredArtifact> {
        self.ensure_dir()?;

        let mut tmp = tempfile::Builder::new()
            .prefix(TEMP_PREFIX)
            .suffix(TEMP_SUFFIX)
            .tempfile_in(&self.root)
            .map_err(|e| {
                ChartError::storage(format!(
                    "create temp file in '{}': {e}",
                    self.root.display()
                ))
            })?;
        tmp.write_all(bytes)
            .and_then(|()| tmp.flush())
            .map_err(|e| ChartError::storage(format!("write temp artifact: {e}")))?;

        for attempt in 1..=MAX_NAME_ATTEMPTS {
            let filename = name_for(encoding.extension());
            let path = self.root.join(&filename);
            match tmp.persist_noclobber(&path) {
                Ok(_) => {
                    tracing::debug!(path = %path.display(), bytes = bytes.len(), "stored artifact");
                    return Ok(StoredArtifact { filename, path });
                }
                Err(e) if e.error.kind() == std::io::ErrorKind::AlreadyExists => {
                    tracing::warn!(%filename, attempt, "artifact name collision, retrying");
                    tmp = e.file;
                }
                Err(e) => {
                    return Err(ChartError::storage(format!(
                        "write artifact '{}': {}",
                        path.display(),
                        e.error
                    )));
                }
            }
        }

        // Dropping `tmp` removes the temporary file.
        Err(ChartError::storage(format!(
            "no free artifact name after {MAX_NAME_ATTEMPTS} attempts"
        )))
    }

    /// Read a stored artifact for serving.
    pub fn open(&self, filename: &str) -> ChartResult<(Vec<u8>, ImageEncoding)> {
        let encoding = Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .and_then(ImageEncoding::from_extension)
            .filter(|_| is_artifact_filename(filename))
            .ok_or_else(|| ChartError::not_found(format!("artifact '{filename}'")))?;

        let path = self.root.join(filename);
        match std::fs::read(&path) {
            Ok(bytes) => Ok((bytes, encoding)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(ChartError::not_found(format!("artifact '{filename}'")))
            }
            Err(e) => Err(ChartError::storage(format!(
                "read artifact '{}': {e}",
                path.display()
            ))),
        }
    }

    /// Delete artifacts (and leftover temp files) last modified more than `ttl` ago.
    ///
    /// Returns the number of files removed. A missing directory counts as empty.
    pub fn sweep_expired(&self, ttl: Duration) -> ChartResult<usize> {
        let entries = match std::fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(0),
            Err(e) => {
                return Err(ChartError::storage(format!(
                    "list artifact dir '{}': {e}",
                    self.root.display()
                )));
            }
        };

        let now = SystemTime::now();
        let mut removed = 0;
        for entry in entries.flatten() {
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };
            let is_temp = name.starts_with(TEMP_PREFIX) && name.ends_with(TEMP_SUFFIX);
            if !is_artifact_filename(name) && !is_temp {
                continue;
            }

            let age = entry
                .metadata()
                .and_then(|m| m.modified())
                .ok()
                .and_then(|modified| now.duration_since(modified).ok())
                .unwrap_or(Duration::ZERO);
            if age < ttl {
                continue;
            }

            match std::fs::remove_file(entry.path()) {
                Ok(()) => removed += 1,
                // Another sweeper got there first.
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => tracing::warn!(file = name, error = %e, "failed to remove expired artifact"),
            }
        }

        if removed > 0 {
            tracing::info!(removed, prefix = ARTIFACT_PREFIX, "swept expired artifacts");
        }
        Ok(removed)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/store/artifacts.rs"]
mod tests;
