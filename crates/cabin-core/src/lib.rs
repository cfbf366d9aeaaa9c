//! Shared types, configuration and errors for the cabin manager crates.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
