//! Passphrase-to-digest key derivation.
//!
//! Every cipher stage is seeded from a SHA-256 digest of the passphrase
//! prefixed with a stage-specific domain tag. Domain separation keeps the
//! keystream, the permutation, and the diffusion IV independent even though
//! they share one passphrase.

use sha2::{Digest, Sha256};

/// Domain tag for keystream derivation.
pub const KEYSTREAM_TAG: &str = "ks:";

/// Domain tag for permutation derivation.
pub const PERMUTATION_TAG: &str = "perm:";

/// Domain tag for diffusion IV derivation.
pub const DIFFUSION_TAG: &str = "diff:";

/// Derives a 32-byte digest from a domain tag and a passphrase.
///
/// Computes `SHA-256(domain || key)` over the UTF-8 bytes of both strings.
/// Pure and infallible: any strings are valid input, including empty ones.
///
/// # Parameters
/// - `domain`: Stage-specific tag ([`KEYSTREAM_TAG`], [`PERMUTATION_TAG`]
///   or [`DIFFUSION_TAG`]).
/// - `key`: The passphrase.
///
/// # Returns
/// The 32-byte SHA-256 digest.
///
/// # Examples
///
/// ```
/// use silhouette::kdf;
///
/// let a = kdf::derive(kdf::KEYSTREAM_TAG, "secret");
/// let b = kdf::derive(kdf::PERMUTATION_TAG, "secret");
/// assert_ne!(a, b, "domain tags separate derivations");
/// ```
pub fn derive(domain: &str, key: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(domain.as_bytes());
    hasher.update(key.as_bytes());
    hasher.finalize().into()
}

/// Reads a big-endian `u32` from 4 digest bytes starting at `offset`.
///
/// # Panics
/// Panics if `offset + 4` exceeds the digest length. Callers pass fixed
/// in-range offsets (0 and 4).
pub(crate) fn u32_be(digest: &[u8; 32], offset: usize) -> u32 {
    u32::from_be_bytes([
        digest[offset],
        digest[offset + 1],
        digest[offset + 2],
        digest[offset + 3],
    ])
}
