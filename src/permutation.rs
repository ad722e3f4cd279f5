//! Key-derived positional permutation.
//!
//! Scattering byte positions before diffusion decorrelates the spatial
//! structure of an image. The permutation is an unbiased Fisher-Yates
//! shuffle of the identity sequence, driven by a ChaCha8 generator seeded
//! from the permutation digest of the passphrase. ChaCha8 is a fixed,
//! versioned algorithm, so identical keys reproduce identical permutations
//! across builds and platforms.
//!
//! Indices are `u32`: wide enough for any practical pixel buffer, half the
//! memory of `usize` indices on 64-bit targets. Oversized buffers are
//! rejected at the pipeline boundary before this module runs.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::kdf;

/// Number of digest bytes consumed as the shuffle seed.
const SEED_BYTES: usize = 16;

/// Produces the key-derived permutation of `0..n` as a vector of indices.
///
/// Derives the permutation digest, seeds a [`ChaCha8Rng`] with its first
/// 16 bytes (remaining seed bytes zero), and Fisher-Yates shuffles the
/// identity sequence. Fully determined by `(key, n)`.
///
/// # Parameters
/// - `n`: Permutation size. Zero yields an empty vector; one yields `[0]`.
/// - `key`: The passphrase.
///
/// # Examples
///
/// ```
/// use silhouette::permutation;
///
/// let idx = permutation::indices(5, "abc");
/// let mut sorted = idx.clone();
/// sorted.sort_unstable();
/// assert_eq!(sorted, vec![0, 1, 2, 3, 4]);
/// ```
pub fn indices(n: usize, key: &str) -> Vec<u32> {
    let digest = kdf::derive(kdf::PERMUTATION_TAG, key);
    let mut seed = [0u8; 32];
    seed[..SEED_BYTES].copy_from_slice(&digest[..SEED_BYTES]);
    let mut rng = ChaCha8Rng::from_seed(seed);

    let mut idx: Vec<u32> = (0..n as u32).collect();
    idx.shuffle(&mut rng);
    idx
}

/// Computes the inverse of a permutation in O(n).
///
/// The result satisfies `inv[idx[i]] == i` for every `i`, so gathering by
/// `idx` and then gathering by `inv` restores the original order.
///
/// # Parameters
/// - `idx`: A permutation of `0..idx.len()` as produced by [`indices`].
///
/// # Panics
/// Panics if `idx` contains a value outside `0..idx.len()`. Inputs from
/// [`indices`] are always in range.
pub fn inverse(idx: &[u32]) -> Vec<u32> {
    let mut inv = vec![0u32; idx.len()];
    for (i, &target) in idx.iter().enumerate() {
        inv[target as usize] = i as u32;
    }
    inv
}
