//! Chaotic keystream generation via the logistic map.
//!
//! The keystream source is the logistic recurrence `x := r·x·(1−x)` run in
//! its chaotic regime. Initial state and control parameter are both derived
//! from the keystream digest of the passphrase, so the full byte sequence is
//! a pure function of (key, length).
//!
//! The evaluation order `r * x * (1.0 - x)` in IEEE-754 double precision is
//! part of the contract: reassociating the product changes every subsequent
//! byte.

use crate::kdf;

/// Divisor placing the initial state strictly inside (0, 1): 2^32 + 2.
const X0_DIVISOR: f64 = 4_294_967_298.0;

/// Upper end of the control parameter range.
const R_BASE: f64 = 3.99;

/// Logistic map iterator seeded from a passphrase digest.
///
/// The map stays chaotic for the derived parameter range
/// `r ∈ [3.989001, 3.99]`; the key perturbs `r` at micro granularity and
/// selects the starting point `x0`.
pub struct LogisticMap {
    x: f64,
    r: f64,
}

impl LogisticMap {
    /// Creates a logistic map positioned by the given passphrase.
    ///
    /// Derives the keystream digest and maps its first 8 bytes onto the
    /// chaotic state:
    /// - `x0 = (u32(digest[0..4]) + 1) / (2^32 + 2)`, strictly in (0, 1).
    /// - `r = 3.99 − ((u32(digest[4..8]) mod 1000) / 1_000_000)`.
    ///
    /// # Parameters
    /// - `key`: The passphrase.
    pub fn from_key(key: &str) -> Self {
        let digest = kdf::derive(kdf::KEYSTREAM_TAG, key);
        let x = (f64::from(kdf::u32_be(&digest, 0)) + 1.0) / X0_DIVISOR;
        let r = R_BASE - f64::from(kdf::u32_be(&digest, 4) % 1000) / 1_000_000.0;
        LogisticMap { x, r }
    }

    /// Advances the map one step and emits the next keystream byte.
    ///
    /// The byte is `floor(x · 256) & 0xFF` of the updated state. Since
    /// `x < r/4 < 1`, the product is strictly below 256 and the truncating
    /// cast never saturates.
    pub fn next_byte(&mut self) -> u8 {
        self.x = self.r * self.x * (1.0 - self.x);
        (self.x * 256.0) as u8
    }

    /// Returns the current map state. Exposed for diagnostics and tests.
    pub fn state(&self) -> f64 {
        self.x
    }

    /// Returns the control parameter `r`.
    pub fn parameter(&self) -> f64 {
        self.r
    }
}

/// Generates `length` keystream bytes for the given passphrase.
///
/// Fully determined by `(key, length)`: two calls with identical arguments
/// produce identical sequences, and the first `n` bytes of a longer stream
/// equal the `n`-byte stream for the same key.
///
/// # Parameters
/// - `length`: Number of bytes to produce. Zero yields an empty vector.
/// - `key`: The passphrase.
///
/// # Examples
///
/// ```
/// use silhouette::keystream;
///
/// let a = keystream::generate(16, "secret");
/// let b = keystream::generate(16, "secret");
/// assert_eq!(a, b);
/// assert!(keystream::generate(0, "secret").is_empty());
/// ```
pub fn generate(length: usize, key: &str) -> Vec<u8> {
    let mut map = LogisticMap::from_key(key);
    let mut stream = Vec::with_capacity(length);
    for _ in 0..length {
        stream.push(map.next_byte());
    }
    stream
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_in_open_interval() {
        for key in ["", "a", "TestPassphrase", "FraktalBahar2025"] {
            let map = LogisticMap::from_key(key);
            assert!(
                map.state() > 0.0 && map.state() < 1.0,
                "x0 out of (0,1) for key '{}': {}",
                key,
                map.state()
            );
        }
    }

    #[test]
    fn test_parameter_in_chaotic_band() {
        for key in ["", "a", "TestPassphrase", "another key"] {
            let map = LogisticMap::from_key(key);
            assert!(
                map.parameter() >= 3.989 && map.parameter() <= 3.99,
                "r out of band for key '{}': {}",
                key,
                map.parameter()
            );
        }
    }

    #[test]
    fn test_generate_length() {
        assert_eq!(generate(0, "key").len(), 0);
        assert_eq!(generate(1, "key").len(), 1);
        assert_eq!(generate(1000, "key").len(), 1000);
    }

    #[test]
    fn test_generate_deterministic() {
        let a = generate(256, "TestPassphrase");
        let b = generate(256, "TestPassphrase");
        assert_eq!(a, b);
    }

    #[test]
    fn test_prefix_consistency() {
        // The stream has no hidden counter: shorter requests are prefixes
        let long = generate(128, "prefix_key");
        let short = generate(32, "prefix_key");
        assert_eq!(&long[..32], &short[..]);
    }

    #[test]
    fn test_different_keys_diverge() {
        let a = generate(64, "key_one");
        let b = generate(64, "key_two");
        assert_ne!(a, b);
    }

    #[test]
    fn test_empty_key_produces_stream() {
        let stream = generate(32, "");
        assert_eq!(stream.len(), 32);
    }
}
