#![deny(missing_docs)]
#![doc = "Randomized stabilizer-code construction: block layout, arena-driven filling, commutation repair, logical operators and validation."]

/// Fixed-capacity random byte arena and bit reader.
pub mod arena;
/// Generator construction entry points and the constructed code type.
pub mod construct;
/// Randomized block filling and identity placement.
pub mod fill;
/// Canonical hashing helpers for constructed codes.
pub mod hash;
/// Block coordinates of the generator matrix.
pub mod layout;
/// Logical operator derivation.
pub mod logical;
/// Validated code parameters.
pub mod params;
/// Pauli string rendering and parsing.
pub mod pauli;
/// GF(2) rank.
pub mod rank;
/// Commutation repair pass.
pub mod repair;
/// Serialization routines for JSON and binary round-trips.
pub mod serde;
/// Syndrome and logical action of Pauli errors.
pub mod syndrome;
pub mod validate;

pub use crate::serde::{from_bytes, from_json, to_bytes, to_json};
pub use arena::{BitSlice, RandomArena};
pub use construct::{construct, construct_with, ConstructionOptions, RandomCode};
pub use fill::EntropyPolicy;
pub use hash::canonical_code_hash;
pub use layout::{Block, BlockLayout, BlockRole};
pub use params::{CodeParameters, MIN_BLOCK_PARAMETER};
pub use pauli::{Pauli, PauliString};
pub use rank::gf2_rank;
pub use repair::RepairReport;
