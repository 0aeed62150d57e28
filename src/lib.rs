//! Swatchbook
//!
//! Color palette server built on `swatch-engine`.
//! This library exposes modules for integration testing.

pub mod api;
pub mod error;
pub mod models;
pub mod server;
pub mod services;
