//! Error Types
//!
//! This module defines the error types used throughout the crate.
//!
//! # Overview
//!
//! The main error type [`Error`] covers all failure modes:
//! - Transition validation failures (bad durations, missing targets)
//! - Scene registration conflicts
//! - Asset loading failures reported by external loaders
//!
//! All public APIs return [`Result<T>`], an alias for `std::result::Result<T, Error>`.
//!
//! Validation errors fail fast: a rejected transition performs no scene
//! mutation at all. Load errors degrade: they are logged and the affected
//! target simply stays absent.

use thiserror::Error;

/// The main error type for the orrery crate.
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // Transition Validation Errors
    // ========================================================================
    /// The named target does not exist in the scene (yet).
    ///
    /// Targets populated by asynchronous loaders are absent until the
    /// loader resolves; callers must confirm presence before running a
    /// transition against them.
    #[error("Target not ready: {0}")]
    TargetNotReady(String),

    /// An animation spec carried a non-positive or non-finite duration.
    #[error("Invalid duration {duration} for target '{target}'")]
    InvalidDuration {
        /// Name of the target the offending spec addressed
        target: String,
        /// The rejected duration in seconds
        duration: f32,
    },

    /// The transition contained no animation specs.
    #[error("Transition '{0}' is empty")]
    EmptyTransition(String),

    /// Two specs in the same transition addressed the same
    /// (target, property) pair.
    #[error("Duplicate spec for '{target}' in transition '{transition}'")]
    DuplicateSpec {
        /// Name of the doubly-addressed target
        target: String,
        /// Name of the rejected transition
        transition: String,
    },

    // ========================================================================
    // Scene Errors
    // ========================================================================
    /// A target with the same name is already registered.
    #[error("Target already exists: {0}")]
    DuplicateTarget(String),

    // ========================================================================
    // Asset Loading Errors
    // ========================================================================
    /// An external loader failed to deliver an asset.
    #[error("Load error: {0}")]
    Load(#[from] LoadError),
}

/// Failure reported by an external asset loader collaborator.
///
/// The core never retries: a failed load is logged and the corresponding
/// scene target remains permanently absent.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The requested asset path does not exist.
    #[error("Asset not found: {0}")]
    NotFound(String),

    /// File I/O error while reading the asset.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The asset bytes could not be decoded.
    #[error("Decode error: {0}")]
    Decode(String),
}

/// Alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
