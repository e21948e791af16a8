//! Core module - configuration
//!
//! - [`Config`] - front desk configuration loaded from the environment

pub mod config;

pub use config::Config;
