#![deny(missing_docs)]
#![doc = "Core error, randomness and symplectic matrix primitives for the QECC toolkit."]

pub mod errors;
pub mod provenance;
pub mod rng;
pub mod symplectic;

pub use errors::{ErrorInfo, QeccError};
pub use provenance::{RunProvenance, SchemaVersion};
pub use rng::{derive_substream_seed, RngHandle};
pub use symplectic::{symplectic_product, SymplecticMatrix};
