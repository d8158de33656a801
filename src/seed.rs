//! Stable seed derivation.
//!
//! Seeds must be identical across platforms and compiler releases, so
//! these use fixed hash functions rather than `std::hash`.

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Hashes a text label (e.g. `"t1"`) into a 64-bit seed (FNV-1a).
///
/// ```
/// use u_nameopt::seed::seed_from_label;
///
/// assert_eq!(seed_from_label("t1"), seed_from_label("t1"));
/// assert_ne!(seed_from_label("t1"), seed_from_label("t2"));
/// ```
pub fn seed_from_label(label: &str) -> u64 {
    label.bytes().fold(FNV_OFFSET, |hash, byte| {
        (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
    })
}

/// SplitMix64 finalizer.
pub fn mix(a: u64, b: u64) -> u64 {
    let mut z = a ^ b.wrapping_add(0x9e37_79b9_7f4a_7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

/// Sampling seed for evaluating `domain_id` at `iteration`.
pub fn derive_seed(domain_id: &str, iteration: usize) -> u64 {
    mix(seed_from_label(domain_id), iteration as u64)
}
