//! Core components of the `alphavantage-rs` client.
//!
//! This module contains the foundational building blocks of the library:
//! - The main [`AvClient`] and its builder.
//! - The primary [`AvError`] type.
//! - The ordered request-argument list ([`ApiParams`]) and the response
//!   [`Envelope`] classifier.
//! - Typed request parameters shared across endpoint families.

/// The main client (`AvClient`), builder, and configuration.
pub mod client;
pub(crate) mod constants;
/// Response-envelope classification.
pub mod envelope;
/// The primary error type (`AvError`) for the crate.
pub mod error;
pub(crate) mod net;
pub(crate) mod num;
/// Ordered `key=value` request arguments.
pub mod params;
/// Typed request parameters (`Interval`, `OutputSize`, ...).
pub mod types;
pub(crate) mod util;

// convenient re-exports so most code can just `use crate::core::AvClient`
pub use client::{AvClient, AvClientBuilder};
pub use envelope::Envelope;
pub use error::AvError;
pub use params::ApiParams;
pub use types::{Interval, NewsSort, NewsTopic, OutputSize, SeriesType};
