//! Image encodings and artifact sinks.
//!
//! Rendered frames are serialized to PNG or JPEG and delivered either as an in-memory buffer or
//! as a uniquely named file in the artifact store.

/// PNG/JPEG serialization of rendered frames.
pub mod format;
/// In-memory and file sinks.
pub mod sink;
