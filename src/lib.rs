//! # Heat-Sink Network
//!
//! Steady-state junction temperature of a die cooled by a straight-fin heat
//! sink in forced air, built as a [Twine](https://github.com/isentropic-dev/twine)
//! model.
//!
//! The die, interface material, heat-sink base, and finned surface form a
//! series resistance network. Each term comes from a closed-form conduction
//! or convection relation, with the convective film coefficient chosen by the
//! flow regime in the fin channels.
//!
//! ## Crate layout
//!
//! - [`models`]: The [`twine_core::Model`] implementation and its sizing helpers.
//! - [`api`]: JSON request and report types used by the `heatsink-network` binary.
//! - [`support`]: Units, constraints, and air properties used by the model.
//!
//! Modules in [`support`] are public because they're useful on their own,
//! but their APIs are not stable.

pub mod api;
pub mod models;
pub mod support;
