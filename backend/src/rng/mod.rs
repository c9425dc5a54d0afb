//! Deterministic random number generation
//!
//! Uses the ARC4-based `seedrandom` construction so that a game code shared
//! between two devices expands into the same stream of draws on both.
//! CRITICAL: All randomness in board generation MUST go through this module.

mod arc4;

pub use arc4::RngManager;
