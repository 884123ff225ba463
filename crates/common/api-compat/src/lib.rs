//! API Compat - helpers for evolving a public Rust API without breaking
//! callers.
//!
//! This crate provides:
//! - Renamed-parameter resolution that accepts a deprecated name next to
//!   its replacement and rejects callers passing both
//! - Experimental markers for functions and types that warn on use
//! - Quiet scopes so code built on experimental items does not warn its own
//!   callers
//!
//! # Architecture
//!
//! - **Resolution** ([`api::normalize_renamed_param`]): pure, no warnings
//! - **Marking** ([`api::mark_experimental`], [`api::ExperimentalType`]):
//!   one warning per call made outside a quiet scope
//! - **Suppression** ([`api::quiet_experimental_warnings`]): depth tracked
//!   per thread and per tokio task
//!
//! Warnings are `tracing` events under [`api::EXPERIMENTAL_TARGET`] and
//! [`api::DEPRECATION_TARGET`]. Whether they are recorded, filtered or
//! shown is up to the installed subscriber.
//!
//! # Example
//!
//! ```
//! use api_compat::api::{ExperimentalMarking, mark_experimental, quiet_experimental_warnings};
//!
//! let preview = mark_experimental(ExperimentalMarking::function("preview"), |x: u32| x + 1);
//! let stable = quiet_experimental_warnings(move |x: u32| preview.call(x) * 2);
//!
//! // Warns nothing: `preview` runs inside the quiet scope.
//! assert_eq!(stable.call(1), 4);
//! ```

pub mod api;
pub mod config;
pub mod error;

pub use error::{Error, Result};
