//! Chained-feedback diffusion codec.
//!
//! XORs each byte with the chaotic keystream and with the previous
//! ciphertext byte (CBC-like, but byte-granular). The feedback chain makes
//! every output byte depend on all preceding plaintext bytes, which is what
//! destroys the visual silhouette of an image even after permutation.
//!
//! The chain is strictly sequential left-to-right in both directions and is
//! not parallelizable across shards.

use crate::kdf;
use crate::keystream;

/// Derives the single-byte diffusion IV for a passphrase.
fn derive_iv(key: &str) -> u8 {
    kdf::derive(kdf::DIFFUSION_TAG, key)[0]
}

/// Encrypts a byte sequence with keystream masking and ciphertext feedback.
///
/// For each position `i`: `out[i] = data[i] ^ keystream[i] ^ prev`, where
/// `prev` starts at the key-derived IV and then tracks the ciphertext byte
/// just produced.
///
/// # Parameters
/// - `data`: The plaintext bytes. Empty input yields empty output.
/// - `key`: The passphrase.
///
/// # Examples
///
/// ```
/// use silhouette::diffusion;
///
/// let cipher = diffusion::encrypt(&[1, 2, 3], "secret");
/// assert_eq!(diffusion::decrypt(&cipher, "secret"), vec![1, 2, 3]);
/// ```
pub fn encrypt(data: &[u8], key: &str) -> Vec<u8> {
    let iv = derive_iv(key);
    let stream = keystream::generate(data.len(), key);

    let mut out = Vec::with_capacity(data.len());
    let mut prev = iv;
    for (i, &byte) in data.iter().enumerate() {
        let c = byte ^ stream[i] ^ prev;
        out.push(c);
        prev = c;
    }
    out
}

/// Decrypts a byte sequence produced by [`encrypt`] with the same key.
///
/// Identical to encryption except that the feedback byte is the ciphertext
/// byte just *consumed*, so `prev` reconstructs the same chain the encryptor
/// produced: `decrypt(encrypt(data, key), key) == data` for all inputs.
///
/// # Parameters
/// - `data`: The ciphertext bytes.
/// - `key`: The passphrase.
pub fn decrypt(data: &[u8], key: &str) -> Vec<u8> {
    let iv = derive_iv(key);
    let stream = keystream::generate(data.len(), key);

    let mut out = Vec::with_capacity(data.len());
    let mut prev = iv;
    for (i, &c) in data.iter().enumerate() {
        out.push(c ^ stream[i] ^ prev);
        prev = c;
    }
    out
}
