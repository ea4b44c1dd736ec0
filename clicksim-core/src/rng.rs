//! Deterministic RNG hierarchy.
//!
//! A master seed generates deterministic sub-seeds for each
//! `(slate, index, iteration)` triple. Sub-seeds are derived via BLAKE3 hashing,
//! independently of thread scheduling order, so simulated clicks are identical
//! regardless of thread count.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Deterministic RNG hierarchy.
///
/// The master seed is expanded into per-(slate, index, iteration) sub-seeds using
/// BLAKE3. Because derivation is hash-based (not order-dependent), the same
/// master seed produces identical sub-seeds regardless of the order in which
/// slates are processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RngHierarchy {
    master_seed: u64,
}

impl RngHierarchy {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    pub fn master_seed(&self) -> u64 {
        self.master_seed
    }

    /// Derive a deterministic sub-seed for a specific `(slate_key, slate_index, iteration)`.
    ///
    /// `slate_index` is the slate's position in its batch, so repeated slates
    /// of one query stand for independent sessions. `iteration` separates
    /// repeated simulations of the same batch, e.g. one per training epoch.
    pub fn sub_seed(&self, slate_key: &str, slate_index: u64, iteration: u64) -> u64 {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&self.master_seed.to_le_bytes());
        hasher.update(&(slate_key.len() as u64).to_le_bytes());
        hasher.update(slate_key.as_bytes());
        hasher.update(&slate_index.to_le_bytes());
        hasher.update(&iteration.to_le_bytes());
        let hash = hasher.finalize();
        let mut seed = [0u8; 8];
        seed.copy_from_slice(&hash.as_bytes()[..8]);
        u64::from_le_bytes(seed)
    }

    /// Create a seeded StdRng from a sub-seed.
    pub fn rng_for(&self, slate_key: &str, slate_index: u64, iteration: u64) -> StdRng {
        StdRng::seed_from_u64(self.sub_seed(slate_key, slate_index, iteration))
    }
}
