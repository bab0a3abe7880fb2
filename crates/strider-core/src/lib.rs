// ABOUTME: Core types and constants for the Strider training-plan service
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(unsafe_code)]

//! # Strider Core
//!
//! Foundation crate providing shared types for the Strider running-plan
//! service. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **models**: Domain types (distances, weekdays, workout types, schedules)
//! - **constants**: Application-wide constants organized by domain

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core domain models (race goals, workout types, weekly schedules)
pub mod models;

pub use errors::{AppError, AppResult, ErrorCode};
