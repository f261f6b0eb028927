//! Flat on-disk artifact store and its naming policy.

/// Atomic writes, lookup and TTL sweep over the artifact directory.
pub mod artifacts;
/// Collision-resistant artifact filenames.
pub mod naming;
