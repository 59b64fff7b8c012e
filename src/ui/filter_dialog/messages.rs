// SPDX-License-Identifier: MPL-2.0
//! Filter dialog message/event types re-exported by the facade.

use crate::application::port::{ExportError, ExportRequest};
use crate::domain::FilterPreset;
use std::path::PathBuf;

/// Messages emitted by the dialog widgets (and the keyboard subscription).
#[derive(Debug, Clone)]
pub enum Message {
    /// A preset was picked from the filter strip.
    FilterSelected(FilterPreset),
    /// The download button was pressed.
    DownloadPressed,
    /// The asynchronous export finished, successfully or not.
    ExportFinished(Result<PathBuf, ExportError>),
    /// The cancel button was pressed or Esc was hit.
    ClosePressed,
}

/// Events propagated to the parent application for side effects.
#[derive(Debug, Clone)]
pub enum Event {
    /// No action needed.
    None,
    /// Run the export described by the snapshot and report the outcome back
    /// as [`Message::ExportFinished`].
    ExportRequested(ExportRequest),
    /// Tear the dialog down and return to the viewer.
    CloseRequested,
}
