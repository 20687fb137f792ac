//! Public Twine models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core` submodule
//! where the computation and domain logic lives. The `core` module is an
//! implementation detail; its types reach the public API only through the
//! model module's re-exports.
//!
//! The [`twine_core::Model`] implementation is a thin adapter that delegates
//! to the core API.

pub mod thermal;
