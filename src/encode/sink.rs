use std::path::PathBuf;

use crate::encode::format::ImageEncoding;
use crate::foundation::error::ChartResult;
use crate::store::artifacts::ArtifactStore;

/// Rendered chart output: encoded bytes plus, for file sinks, the stored filename.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChartArtifact {
    /// Complete encoded image.
    pub bytes: Vec<u8>,
    /// Encoding of `bytes`.
    pub encoding: ImageEncoding,
    /// Flat filename in the artifact store, set only by [`ChartSink::File`].
    pub filename: Option<String>,
}

impl ChartArtifact {
    /// MIME type matching [`ChartArtifact::encoding`].
    pub fn mime_type(&self) -> &'static str {
        self.encoding.mime_type()
    }

    /// Whether the artifact was written to durable storage.
    pub fn is_persisted(&self) -> bool {
        self.filename.is_some()
    }
}

/// Where encoded charts go.
#[derive(Clone, Debug)]
pub enum ChartSink {
    /// Keep the bytes in memory only; the caller owns them.
    InMemory,
    /// Write the bytes into a flat artifact directory under a fresh unique name.
    File(ArtifactStore),
}

impl ChartSink {
    /// In-memory sink.
    pub fn in_memory() -> Self {
        Self::InMemory
    }

    /// File sink writing into `dir` (created on first use).
    pub fn file(dir: impl Into<PathBuf>) -> Self {
        Self::File(ArtifactStore::new(dir))
    }

    /// Deliver encoded bytes.
    pub fn deliver(&self, bytes: Vec<u8>, encoding: ImageEncoding) -> ChartResult<ChartArtifact> {
        match self {
            ChartSink::InMemory => Ok(ChartArtifact {
                bytes,
                encoding,
                filename: None,
            }),
            ChartSink::File(store) => {
                let stored = store.persist(&bytes, encoding)?;
                Ok(ChartArtifact {
                    bytes,
                    encoding,
                    filename: Some(stored.filename),
                })
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
