//! Utility functions shared by the rendering pipeline and services.
//!
//! - [`currency`] - Indonesian Rupiah formatting
//! - [`whatsapp`] - Phone normalization and `wa.me` checkout links

pub mod currency;
pub mod whatsapp;
