//! Error types for the Silhouette library.

use thiserror::Error;

/// Errors produced by the Silhouette library.
///
/// An empty passphrase is deliberately **not** an error: the key derivation
/// hash accepts any string, so an empty key is merely weak, not invalid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SilhouetteError {
    /// Buffer length does not match the declared frame shape.
    #[error("buffer length {actual} does not match frame shape ({expected} bytes expected)")]
    LengthMismatch {
        /// Byte count the frame shape implies.
        expected: usize,
        /// Byte count actually supplied.
        actual: usize,
    },
    /// Buffer has more positions than the permutation index width can address.
    #[error("buffer of {len} bytes exceeds the maximum addressable size")]
    BufferTooLarge {
        /// Length of the rejected buffer.
        len: usize,
    },
}
