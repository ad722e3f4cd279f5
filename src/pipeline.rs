//! Cipher pipeline: permutation and diffusion orchestration.
//!
//! Encryption runs permute → diffuse; decryption runs de-diffuse →
//! inverse-permute. Both directions re-derive all state from the stored
//! passphrase, so an encryptor and a decryptor constructed from the same
//! passphrase are interchangeable and every call is a pure transform.

use zeroize::Zeroize;

use crate::diffusion;
use crate::error::SilhouetteError;
use crate::permutation;

/// Shape descriptor for the image boundary.
///
/// The core itself is shape-agnostic; the shape exists only to validate
/// that a flat buffer has the byte count the caller's image implies, and to
/// let the caller reshape the result afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameShape {
    /// Image width in pixels.
    pub width: usize,
    /// Image height in pixels.
    pub height: usize,
    /// Channels per pixel (3 for RGB, 4 for RGBA).
    pub channels: usize,
}

impl FrameShape {
    /// Creates a shape descriptor.
    pub fn new(width: usize, height: usize, channels: usize) -> Self {
        FrameShape {
            width,
            height,
            channels,
        }
    }

    /// Returns the flat byte count this shape implies
    /// (`width * height * channels`, row-major, channel-interleaved).
    pub fn expected_len(&self) -> usize {
        self.width * self.height * self.channels
    }
}

/// Symmetric chaotic stream cipher over flat byte buffers.
///
/// Holds the passphrase for the duration of the instance and derives all
/// per-call state (keystream, permutation, IV) fresh on every invocation.
/// No state persists across calls: encrypting the same buffer twice yields
/// the same ciphertext, and instances with the same passphrase are
/// interchangeable. The passphrase is zeroed when the cipher is dropped.
///
/// # Examples
///
/// ```
/// use silhouette::SilhouetteCipher;
///
/// let encryptor = SilhouetteCipher::new("shared_passphrase");
/// let decryptor = SilhouetteCipher::new("shared_passphrase");
///
/// let cipher = encryptor.encrypt_buffer(&[1, 2, 3, 4]).unwrap();
/// assert_eq!(decryptor.decrypt_buffer(&cipher).unwrap(), vec![1, 2, 3, 4]);
/// ```
pub struct SilhouetteCipher {
    key: String,
}

impl SilhouetteCipher {
    /// Creates a cipher from a passphrase.
    ///
    /// Any string is a valid passphrase, including the empty string (weak,
    /// but well-defined: the key derivation hash accepts any input).
    pub fn new(passphrase: &str) -> Self {
        SilhouetteCipher {
            key: passphrase.to_owned(),
        }
    }

    /// Encrypts a flat byte buffer: gather by permutation, then diffuse.
    ///
    /// `permuted[j] = flat[idx[j]]` scatters spatial structure, and the
    /// diffusion pass chains every output byte to all preceding input.
    ///
    /// # Parameters
    /// - `flat`: The plaintext bytes, row-major and channel-interleaved.
    ///
    /// # Returns
    /// A ciphertext buffer of the same length.
    ///
    /// # Errors
    /// Returns [`SilhouetteError::BufferTooLarge`] if the buffer has more
    /// positions than the `u32` permutation index width can address.
    pub fn encrypt_buffer(&self, flat: &[u8]) -> Result<Vec<u8>, SilhouetteError> {
        Self::check_addressable(flat.len())?;

        let idx = permutation::indices(flat.len(), &self.key);
        let permuted: Vec<u8> = idx.iter().map(|&j| flat[j as usize]).collect();
        Ok(diffusion::encrypt(&permuted, &self.key))
    }

    /// Decrypts a flat byte buffer: de-diffuse, then inverse-permute.
    ///
    /// After the diffusion chain is unwound, `plain[i] = permuted[inv[i]]`
    /// places every byte back at its pre-permutation position, exactly
    /// undoing the gather in [`encrypt_buffer`](Self::encrypt_buffer).
    ///
    /// # Parameters
    /// - `flat`: The ciphertext bytes.
    ///
    /// # Returns
    /// The recovered plaintext buffer of the same length.
    ///
    /// # Errors
    /// Returns [`SilhouetteError::BufferTooLarge`] if the buffer has more
    /// positions than the `u32` permutation index width can address.
    pub fn decrypt_buffer(&self, flat: &[u8]) -> Result<Vec<u8>, SilhouetteError> {
        Self::check_addressable(flat.len())?;

        let permuted = diffusion::decrypt(flat, &self.key);
        let idx = permutation::indices(permuted.len(), &self.key);
        let inv = permutation::inverse(&idx);
        Ok(inv.iter().map(|&j| permuted[j as usize]).collect())
    }

    /// Encrypts a pixel buffer after validating it against its shape.
    ///
    /// # Parameters
    /// - `shape`: Width, height and channel count of the source image.
    /// - `flat`: The pixel bytes, row-major and channel-interleaved.
    ///
    /// # Errors
    /// Returns [`SilhouetteError::LengthMismatch`] if `flat.len()` differs
    /// from `shape.expected_len()`; the buffer is rejected before any
    /// processing, never truncated or padded.
    pub fn encrypt_frame(
        &self,
        shape: FrameShape,
        flat: &[u8],
    ) -> Result<Vec<u8>, SilhouetteError> {
        Self::check_shape(shape, flat)?;
        self.encrypt_buffer(flat)
    }

    /// Decrypts a pixel buffer after validating it against its shape.
    ///
    /// # Parameters
    /// - `shape`: Width, height and channel count of the original image.
    /// - `flat`: The ciphertext bytes.
    ///
    /// # Errors
    /// Returns [`SilhouetteError::LengthMismatch`] if `flat.len()` differs
    /// from `shape.expected_len()`.
    pub fn decrypt_frame(
        &self,
        shape: FrameShape,
        flat: &[u8],
    ) -> Result<Vec<u8>, SilhouetteError> {
        Self::check_shape(shape, flat)?;
        self.decrypt_buffer(flat)
    }

    /// Rejects buffers whose positions cannot be addressed by `u32` indices.
    fn check_addressable(len: usize) -> Result<(), SilhouetteError> {
        if len > u32::MAX as usize {
            return Err(SilhouetteError::BufferTooLarge { len });
        }
        Ok(())
    }

    /// Rejects buffers whose length does not match the declared shape.
    fn check_shape(shape: FrameShape, flat: &[u8]) -> Result<(), SilhouetteError> {
        let expected = shape.expected_len();
        if flat.len() != expected {
            return Err(SilhouetteError::LengthMismatch {
                expected,
                actual: flat.len(),
            });
        }
        Ok(())
    }
}

impl Drop for SilhouetteCipher {
    /// Clears the stored passphrase on drop.
    fn drop(&mut self) {
        self.key.zeroize();
    }
}
