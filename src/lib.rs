//! Silhouette symmetric chaotic stream cipher.
//!
//! Silhouette obscures image pixel data with a deterministic, key-derived
//! byte-stream cipher. Three stages combine to destroy the visual outline
//! (the "silhouette") of the plaintext:
//!
//! 1. A key-derived permutation scatters byte positions.
//! 2. A chaotic keystream (iterated logistic map seeded from a SHA-256
//!    digest of the passphrase) masks byte values.
//! 3. A chained-feedback diffusion pass makes every ciphertext byte depend
//!    on all preceding plaintext bytes.
//!
//! The core is shape-agnostic: it operates on a flat ordered sequence of
//! bytes. Image decoding, color-space handling, and file I/O belong to the
//! caller.
//!
//! Silhouette is **not** a cryptographically secure cipher. The logistic
//! map and the narrow keyspace are weak by modern standards; the crate's
//! contracts are determinism and exact invertibility, not security.
//!
//! # Architecture
//!
//! ```text
//! kdf          (SHA-256 of domain-tag || passphrase — seeds everything)
//!     ↓
//! keystream    (logistic map x := r·x·(1−x), one byte per position)
//! permutation  (ChaCha8-seeded Fisher-Yates bijection on positions)
//! diffusion    (byte-granular chained-feedback XOR, CBC-like)
//!     ↓
//! SilhouetteCipher  (orchestrator — permute → diffuse / de-diffuse → unpermute)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt a flat pixel buffer:
//!
//! ```
//! use silhouette::SilhouetteCipher;
//!
//! let cipher = SilhouetteCipher::new("my_secret_passphrase");
//!
//! let pixels: Vec<u8> = vec![10, 20, 30, 40, 50, 60];
//! let encrypted = cipher.encrypt_buffer(&pixels).unwrap();
//! assert_ne!(encrypted, pixels);
//!
//! let decrypted = cipher.decrypt_buffer(&encrypted).unwrap();
//! assert_eq!(decrypted, pixels);
//! ```
//!
//! Validate a buffer against its image shape at the boundary:
//!
//! ```
//! use silhouette::{FrameShape, SilhouetteCipher};
//!
//! let cipher = SilhouetteCipher::new("key");
//! let shape = FrameShape::new(2, 2, 3);
//!
//! let pixels = vec![0u8; shape.expected_len()];
//! let encrypted = cipher.encrypt_frame(shape, &pixels).unwrap();
//! assert_eq!(encrypted.len(), pixels.len());
//! ```

#![deny(clippy::all)]

pub mod diffusion;
pub mod error;
pub mod kdf;
pub mod keystream;
pub mod permutation;

mod pipeline;

pub use error::SilhouetteError;
pub use pipeline::{FrameShape, SilhouetteCipher};
