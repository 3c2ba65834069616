//! FNV-1a fingerprints of tracks and configurations.
//!
//! Not cryptographic. Used for fast equality checks when comparing a
//! replayed run against a recorded one.

use asep_core::Track;

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

#[inline]
fn fnv1a_bytes(mut hash: u64, bytes: &[u8]) -> u64 {
    for &b in bytes {
        hash = (hash ^ b as u64).wrapping_mul(FNV_PRIME);
    }
    hash
}

#[inline]
fn fnv1a_u64(hash: u64, v: u64) -> u64 {
    fnv1a_bytes(hash, &v.to_le_bytes())
}

/// Hash a track's shape and every label in column order.
///
/// The lane and column counts are folded in first, so tracks with equal
/// label sequences but different lane counts hash differently.
pub fn track_hash(track: &Track) -> u64 {
    let mut hash = FNV_OFFSET;
    hash = fnv1a_u64(hash, track.lanes() as u64);
    hash = fnv1a_u64(hash, track.columns() as u64);
    for &raw in track.labels() {
        hash = fnv1a_bytes(hash, &raw.to_le_bytes());
    }
    hash
}

/// Hash the scalars that determine a seeded run: seed, lanes and columns.
pub fn config_hash(seed: u64, lanes: usize, columns: usize) -> u64 {
    let mut hash = FNV_OFFSET;
    hash = fnv1a_u64(hash, seed);
    hash = fnv1a_u64(hash, lanes as u64);
    fnv1a_u64(hash, columns as u64)
}
