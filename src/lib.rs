//! tasklist - A task list client that keeps local state in step with a REST
//! task service
//!
//! This library provides the synchronization layer between a task list shown
//! to a user and the remote service that owns the tasks: the HTTP transport,
//! title validation, and the controller that applies only server-confirmed
//! changes to the local list.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod api;
pub mod config;
pub mod controller;
pub mod form;
pub mod models;
pub mod output;
pub mod paths;
#[cfg(feature = "server")]
pub mod server;
pub mod validation;
