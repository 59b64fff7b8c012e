// SPDX-License-Identifier: MPL-2.0
//! Update handlers for the application.
//!
//! Each handler owns one message family. They receive an `UpdateContext`
//! holding mutable references into `App` so the update loop in `mod.rs`
//! stays a thin dispatch table.

use super::{config, Message, Screen};
use crate::application::port::{ExportError, ExportRequest, FilterExporter};
use crate::domain::FilterCatalog;
use crate::error::Error;
use crate::infrastructure::FileExporter;
use crate::media::{self, ImageData};
use crate::ui::filter_dialog;
use iced::Task;
use std::path::PathBuf;

/// Mutable view into the application state shared by all handlers.
pub struct UpdateContext<'a> {
    pub screen: &'a mut Screen,
    pub config: &'a config::Config,
    pub catalog: &'a FilterCatalog,
    pub image: &'a mut Option<ImageData>,
    pub image_path: &'a mut Option<PathBuf>,
    pub load_error: &'a mut Option<String>,
    pub filter_dialog: &'a mut Option<filter_dialog::State>,
    pub exporter: FileExporter,
}

/// Opens the native file picker restricted to supported image types.
pub fn handle_open_image_pressed() -> Task<Message> {
    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .add_filter("Images", media::IMAGE_EXTENSIONS)
                .pick_file()
                .await
                .map(|h| h.path().to_path_buf())
        },
        Message::OpenDialogResult,
    )
}

/// Handles the picker result. `None` means the user cancelled.
pub fn handle_open_dialog_result(path: Option<PathBuf>) -> Task<Message> {
    match path {
        Some(path) => load_image_task(path),
        None => Task::none(),
    }
}

/// Handles a file dropped onto the window.
pub fn handle_file_dropped(path: PathBuf) -> Task<Message> {
    if media::is_supported_image(&path) {
        load_image_task(path)
    } else {
        eprintln!("Unsupported image file: {}", path.display());
        Task::none()
    }
}

/// Decodes the image on a blocking worker so large files do not stall the
/// event loop.
pub fn load_image_task(path: PathBuf) -> Task<Message> {
    Task::perform(
        async move {
            let loading = path.clone();
            let result = tokio::task::spawn_blocking(move || media::load_image(&loading))
                .await
                .unwrap_or_else(|err| Err(Error::Io(err.to_string())));
            (path, result)
        },
        |(path, result)| Message::ImageLoaded { path, result },
    )
}

/// Applies an image load outcome to the viewer.
pub fn handle_image_loaded(
    ctx: &mut UpdateContext<'_>,
    path: PathBuf,
    result: Result<ImageData, Error>,
) -> Task<Message> {
    match result {
        Ok(image) => {
            *ctx.image = Some(image);
            *ctx.image_path = Some(path);
            *ctx.load_error = None;
        }
        Err(err) => {
            eprintln!("Failed to load {}: {err}", path.display());
            *ctx.load_error = Some(err.to_string());
        }
    }
    Task::none()
}

/// Opens the filter dialog for the loaded image. Ignored while no image is
/// loaded, mirroring the disabled toolbar button.
pub fn handle_tint_pressed(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let (Some(image), Some(path)) = (ctx.image.as_ref(), ctx.image_path.as_ref()) else {
        return Task::none();
    };

    *ctx.filter_dialog = Some(filter_dialog::State::new(
        ctx.catalog.clone(),
        image.clone(),
        path,
        ctx.config.export.effective_format(),
        ctx.config.export.save_directory.clone(),
    ));
    *ctx.screen = Screen::FilterDialog;
    Task::none()
}

/// Routes a message into the filter dialog and acts on the resulting event.
pub fn handle_dialog_message(
    ctx: &mut UpdateContext<'_>,
    message: filter_dialog::Message,
) -> Task<Message> {
    let Some(dialog) = ctx.filter_dialog.as_mut() else {
        // Stale message after teardown, e.g. a completion for a session
        // that was already closed.
        return Task::none();
    };

    if let filter_dialog::Message::ExportFinished(Ok(path)) = &message {
        eprintln!("Filtered image saved to: {}", path.display());
    }

    match dialog.update(message) {
        filter_dialog::Event::None => Task::none(),
        filter_dialog::Event::ExportRequested(request) => run_export(ctx.exporter, request),
        filter_dialog::Event::CloseRequested => {
            *ctx.filter_dialog = None;
            *ctx.screen = Screen::Viewer;
            Task::none()
        }
    }
}

/// Runs the export on a blocking worker and routes the outcome back into the
/// dialog as an `ExportFinished` message.
fn run_export(exporter: FileExporter, request: ExportRequest) -> Task<Message> {
    Task::perform(
        async move {
            tokio::task::spawn_blocking(move || exporter.export(&request))
                .await
                .unwrap_or_else(|err| Err(ExportError::Io(err.to_string())))
        },
        |result| Message::FilterDialog(filter_dialog::Message::ExportFinished(result)),
    )
}
