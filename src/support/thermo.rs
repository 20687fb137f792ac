//! Fluid transport properties for convective heat transfer.
//!
//! A convection correlation needs three properties of the coolant: thermal
//! conductivity, kinematic viscosity, and Prandtl number. They are grouped in
//! [`TransportProperties`], which can be built from fixed reference values or
//! evaluated for [`Air`](fluid::Air) at a given temperature.

mod error;
pub mod fluid;
mod transport;

pub use error::PropertyError;
pub use transport::TransportProperties;
