//! Thermal systems models.
//!
//! This module contains models for electronics cooling hardware.

pub mod heat_sink;
