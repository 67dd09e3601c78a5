//! # Carteira Common Library
//!
//! Shared code for the Carteira services including:
//! - Error types
//! - Configuration file loading and data folder resolution
//! - Timestamp utilities

pub mod config;
pub mod error;
pub mod time;

pub use error::{Error, Result};
