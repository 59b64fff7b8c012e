// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`. These adapters wrap external dependencies like the
//! filesystem and image codecs.
//!
//! # Available Adapters
//!
//! - [`file_export`]: Writes filtered renditions to disk (implements
//!   [`FilterExporter`])
//!
//! [`FilterExporter`]: crate::application::port::FilterExporter

pub mod file_export;

// Re-export main types for convenience
pub use file_export::FileExporter;
