//! signal-notify - Nagios notifications via a Signal REST gateway
//!
//! This library turns one monitoring event (host or service state change,
//! or an acknowledgement) into a human-readable alert string and delivers
//! it through the gateway's send-message endpoint.

pub mod app;
pub mod cli;
pub mod compose;
pub mod config;
pub mod core;
pub mod delivery;

// Re-export core types for convenience
pub use crate::core::*;
