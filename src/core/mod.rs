//! Core components of the `sec-dashboard` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`DashClient`] and its builder.
//! - The primary [`DashError`] type.
//! - The shared lenient decoding rules for API payloads.

/// The main client (`DashClient`), builder, and retry configuration.
pub mod client;
/// The primary error type (`DashError`) for the crate.
pub mod error;
pub(crate) mod net;
pub(crate) mod wire;

// convenient re-exports so most code can just `use crate::core::DashClient`
pub use client::{DashClient, DashClientBuilder};
pub use error::DashError;
