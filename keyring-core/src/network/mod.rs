// keyring-core/src/network/mod.rs
//
// Network Module - per-coin parameters and output records
//
// Provides:
// - `NetworkParameters` / `NetworkRegistry`: immutable per-coin constants
// - Models for the records returned to callers (pub / priv / pubHex)

pub mod models;
pub mod params;

// Re-export for convenience
pub use models::*;
pub use params::*;
