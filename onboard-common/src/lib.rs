//! Common types and utilities shared across Onboard crates.
//!
//! This crate defines the shared error type and observability helpers used
//! throughout the Onboard workspace. It is intentionally lightweight and
//! dependency-minimal so that all crates can depend on it without
//! introducing heavy transitive costs.
//!
//! # Overview
//!
//! - [`OnboardError`] and [`Result`]: Shared error handling
//! - [`observability`]: Centralised tracing/logging initialisation
use thiserror::Error;

pub mod observability;

/// Errors shared across the Onboard workspace.
#[derive(Debug, Error)]
pub enum OnboardError {
    /// Configuration was incomplete or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An underlying subsystem reported an error.
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Convenient alias for results that use [`OnboardError`].
pub type Result<T> = std::result::Result<T, OnboardError>;
