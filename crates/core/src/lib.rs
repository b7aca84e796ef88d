//! Core types and configuration for the propiq market engine.
//!
//! This crate provides shared types used across all other crates:
//! - Market data types (listings, price samples, seasonal samples)
//! - Tier vocabularies (demand, saturation, hotness, buy outlook)
//! - Configuration structures
//! - Common error types

pub mod config;
pub mod error;
pub mod types;

pub use config::EngineConfig;
pub use error::{Error, Result};
pub use types::*;
