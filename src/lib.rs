//! vidinfo - video metadata lookup service
//!
//! This library crate exposes the core functionality for integration testing.

pub mod config;
pub mod lookup;
pub mod server;
