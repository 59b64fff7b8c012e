// SPDX-License-Identifier: MPL-2.0
//! Filtered-image export port definition.
//!
//! This module defines the [`FilterExporter`] trait the filter dialog's host
//! depends on. Infrastructure adapters implement it to write the filtered
//! rendition somewhere; tests substitute doubles to observe what the dialog
//! requested.

use crate::media::export::ExportFormat;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

// =============================================================================
// ExportError
// =============================================================================

/// Errors that can occur while exporting a filtered image.
#[derive(Debug, Clone, PartialEq)]
pub enum ExportError {
    /// The transform descriptor could not be parsed.
    InvalidTransform(String),

    /// The pixel buffer does not match the declared dimensions.
    InvalidFrame,

    /// No writable destination directory could be resolved.
    NoDestination,

    /// Encoding to the output format failed.
    Encode(String),

    /// The encoded file could not be written.
    Io(String),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::InvalidTransform(msg) => write!(f, "Invalid transform: {msg}"),
            ExportError::InvalidFrame => write!(f, "Pixel buffer does not match dimensions"),
            ExportError::NoDestination => write!(f, "No writable destination directory"),
            ExportError::Encode(msg) => write!(f, "Encoding failed: {msg}"),
            ExportError::Io(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

impl std::error::Error for ExportError {}

// =============================================================================
// ExportRequest
// =============================================================================

/// Everything the export needs, captured when the download was triggered.
///
/// The dialog builds this snapshot at the moment the user presses download;
/// filter selections made while the export is in flight do not feed back into
/// it. Pixels ride behind an `Arc` so snapshotting never copies the frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportRequest {
    /// Stem of the source file, used to derive the output filename.
    pub file_stem: String,
    /// Name of the filter preset at trigger time.
    pub filter_name: String,
    /// Transform descriptor of that preset.
    pub transform: String,
    /// Full-resolution RGBA pixels (`width * height * 4` bytes).
    pub rgba: Arc<Vec<u8>>,
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Output encoding.
    pub format: ExportFormat,
    /// Destination directory, if one was configured.
    pub destination: Option<PathBuf>,
}

// =============================================================================
// FilterExporter Port
// =============================================================================

/// Writes a filtered rendition of an image frame.
///
/// Implementations must be thread-safe: the host runs exports on a blocking
/// worker while the UI thread keeps processing messages.
pub trait FilterExporter: Send + Sync {
    /// Applies the request's transform to its pixels and writes the result.
    ///
    /// Returns the path of the written file.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError`] if the transform cannot be parsed, the frame
    /// is inconsistent, or encoding/writing fails. Callers treat failure as
    /// log-and-move-on; nothing is retried.
    fn export(&self, request: &ExportRequest) -> Result<PathBuf, ExportError>;
}
