// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::media::ImageData;
use crate::ui::filter_dialog;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// Trigger the open file dialog.
    OpenImagePressed,
    /// Result from the open file dialog.
    OpenDialogResult(Option<PathBuf>),
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    /// Result from async image loading.
    ImageLoaded {
        path: PathBuf,
        result: Result<ImageData, Error>,
    },
    /// Open the filter dialog for the loaded image.
    TintPressed,
    /// Messages routed to the filter dialog while it is open.
    FilterDialog(filter_dialog::Message),
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional image path to preload on startup.
    pub file_path: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_TINT_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
