//! DAO Common - Shared types, utilities, and configuration for the DAO analysis service.
//!
//! This crate provides:
//! - Configuration types and loading
//! - Error types and handling utilities
//! - Logging setup

#![warn(clippy::all)]
#![allow(clippy::pedantic)]

pub mod config;
pub mod error;
pub mod logging;

pub use config::{Config, ObservabilityConfig, ServiceConfig};
pub use error::{Error, Result};
pub use logging::init_logging;
