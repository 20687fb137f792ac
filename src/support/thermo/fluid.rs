//! Canonical fluid identifiers.

mod air;

pub use air::Air;
