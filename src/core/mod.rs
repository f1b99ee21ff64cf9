//! Static configuration: banks, the platform fee schedule, and loading both
//! from JSON.

pub mod bank;
pub mod config;
pub mod registry;
pub mod schedule;
