// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`export`]: Writing filtered renditions of an image frame
//!
//! # Design Notes
//!
//! - Traits are `Send + Sync` so adapters can run on blocking workers
//! - Methods return `Result` with port-specific error types
//! - No `async fn` - callers wrap port calls in Iced `Task`s

pub mod export;

// Re-export main types for convenience
pub use export::{ExportError, ExportRequest, FilterExporter};
