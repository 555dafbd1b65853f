//! Deterministic RNG wrapper and seed-derivation helpers.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use siphasher::sip::SipHasher13;
use std::hash::Hasher;

/// Deterministic RNG handle threaded through every code construction.
///
/// The handle is a thin wrapper around `StdRng`. A master `seed: u64` must be
/// provided by the caller; nothing in the toolkit reseeds from the clock or
/// shares generator state between constructions. Batch runs derive one seed
/// per code by hashing `(master_seed, substream_id)` with SipHash-1-3 keyed
/// with zeros, see [`derive_substream_seed`].
#[derive(Debug, Clone)]
pub struct RngHandle {
    seed: u64,
    rng: StdRng,
    drawn: bool,
}

impl RngHandle {
    /// Creates a new RNG handle from a master seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
            drawn: false,
        }
    }

    /// Creates the handle for substream `index` of `master_seed`.
    pub fn substream(master_seed: u64, index: u64) -> Self {
        Self::from_seed(derive_substream_seed(master_seed, index))
    }

    /// Returns the seed this handle was created from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the seed while nothing has been drawn from the handle yet,
    /// i.e. while the seed still reproduces the next draws.
    pub fn fresh_seed(&self) -> Option<u64> {
        (!self.drawn).then_some(self.seed)
    }

    /// Returns a mutable reference to the underlying RNG for advanced usage.
    /// The handle stops reporting a [`fresh_seed`](Self::fresh_seed).
    pub fn inner_mut(&mut self) -> &mut StdRng {
        self.drawn = true;
        &mut self.rng
    }
}

impl RngCore for RngHandle {
    fn next_u32(&mut self) -> u32 {
        self.drawn = true;
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.drawn = true;
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.drawn = true;
        self.rng.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.drawn = true;
        self.rng.try_fill_bytes(dest)
    }
}

/// Derives the deterministic seed for a specific substream.
pub fn derive_substream_seed(master_seed: u64, substream: u64) -> u64 {
    let mut hasher = SipHasher13::new_with_keys(0, 0);
    hasher.write_u64(master_seed);
    hasher.write_u64(substream);
    hasher.finish()
}
