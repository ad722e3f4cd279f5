//! Property-based tests for the cipher pipeline.
//!
//! These tests verify the fundamental invariants of the scheme:
//!
//! 1. **Round-trip**: decrypt(encrypt(b, key), key) == b for all buffers
//! 2. **Determinism**: same (key, input) always produces the same output
//! 3. **Permutation validity**: key-derived indices form a bijection
//! 4. **Diffusion prefix dependence**: output[i] depends only on input[0..=i]

use proptest::prelude::*;
use silhouette::{diffusion, keystream, permutation, FrameShape, SilhouetteCipher};

/// Arbitrary passphrases, empty string included (a valid, if weak, key).
fn key_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex(".{0,24}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_pipeline_roundtrip(
        data in prop::collection::vec(any::<u8>(), 0..512),
        key in key_strategy(),
    ) {
        let cipher = SilhouetteCipher::new(&key);
        let encrypted = cipher.encrypt_buffer(&data).unwrap();
        prop_assert_eq!(encrypted.len(), data.len());
        let decrypted = cipher.decrypt_buffer(&encrypted).unwrap();
        prop_assert_eq!(decrypted, data);
    }

    #[test]
    fn prop_diffusion_roundtrip(
        data in prop::collection::vec(any::<u8>(), 0..512),
        key in key_strategy(),
    ) {
        let encrypted = diffusion::encrypt(&data, &key);
        prop_assert_eq!(diffusion::decrypt(&encrypted, &key), data);
    }

    #[test]
    fn prop_keystream_deterministic(
        length in 0usize..1024,
        key in key_strategy(),
    ) {
        let a = keystream::generate(length, &key);
        let b = keystream::generate(length, &key);
        prop_assert_eq!(a.len(), length);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_permutation_is_bijection(
        n in 0usize..1024,
        key in key_strategy(),
    ) {
        let idx = permutation::indices(n, &key);
        prop_assert_eq!(idx.len(), n);

        let mut seen = vec![false; n];
        for &v in &idx {
            prop_assert!((v as usize) < n);
            prop_assert!(!seen[v as usize], "index {} repeated", v);
            seen[v as usize] = true;
        }
    }

    #[test]
    fn prop_inverse_composes_to_identity(
        n in 0usize..1024,
        key in key_strategy(),
    ) {
        let idx = permutation::indices(n, &key);
        let inv = permutation::inverse(&idx);
        for i in 0..n {
            prop_assert_eq!(inv[idx[i] as usize] as usize, i);
        }
    }

    #[test]
    fn prop_diffusion_prefix_dependence(
        data in prop::collection::vec(any::<u8>(), 2..256),
        key in key_strategy(),
        flip in any::<prop::sample::Index>(),
    ) {
        // Flipping input byte k leaves output[0..k] unchanged and always
        // alters output[k]; bytes after k may or may not change.
        let k = flip.index(data.len());
        let base = diffusion::encrypt(&data, &key);

        let mut mutated = data.clone();
        mutated[k] ^= 0x01;
        let changed = diffusion::encrypt(&mutated, &key);

        prop_assert_eq!(&base[..k], &changed[..k]);
        prop_assert_ne!(base[k], changed[k]);
    }

    #[test]
    fn prop_frame_validation_matches_shape(
        width in 0usize..32,
        height in 0usize..32,
        channels in 1usize..5,
        key in key_strategy(),
    ) {
        let cipher = SilhouetteCipher::new(&key);
        let shape = FrameShape::new(width, height, channels);
        let data = vec![0x7Fu8; shape.expected_len()];

        let encrypted = cipher.encrypt_frame(shape, &data).unwrap();
        let decrypted = cipher.decrypt_frame(shape, &encrypted).unwrap();
        prop_assert_eq!(decrypted, data);

        // One byte short must be rejected before processing
        if shape.expected_len() > 0 {
            let short = vec![0u8; shape.expected_len() - 1];
            prop_assert!(cipher.encrypt_frame(shape, &short).is_err());
        }
    }
}
