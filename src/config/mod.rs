//! Configuration Management
//!
//! This module handles loading upstream API settings from the environment.

pub mod upstream;

// Re-export
pub use upstream::UpstreamConfig;
