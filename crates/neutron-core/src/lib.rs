//! # neutron-core
//!
//! Core types and utilities for working with the OpenStack Networking (Neutron) API.
//!
//! This crate provides the error type, transport and client configuration, and the
//! opaque resource identifiers shared by Neutron client crates.
//!
//! ## Modules
//!
//! - [`error`] - Error types and HTTP status code mapping
//! - [`ids`] - Typed wrappers for opaque Neutron resource identifiers
//! - [`config`] - Deserializable client configuration
//! - [`client`] - HTTP transport settings

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod error;
pub mod ids;

// Re-export commonly used types
pub use error::{Error, Result};
