// SPDX-License-Identifier: MPL-2.0
//! Full-window filter session: preview the loaded image under a catalog of
//! color filters and download the filtered rendition.
//!
//! The dialog follows the same "state down, messages up" pattern as the rest
//! of the UI: every rule of the session lives in [`State::update`], which
//! returns an [`Event`] for the host to act on. The asynchronous export is
//! the session's only suspension point; its completion always closes the
//! dialog, whether the file was written or not.

mod messages;
mod view;

pub use messages::{Event, Message};
pub use view::ViewContext;

use crate::application::port::{ExportError, ExportRequest};
use crate::domain::{FilterCatalog, FilterPreset};
use crate::media::{filter_render, ExportFormat, ImageData};
use iced::Element;
use std::path::{Path, PathBuf};

/// Local UI state for the filter session.
#[derive(Debug, Clone)]
pub struct State {
    catalog: FilterCatalog,
    /// Invariant: always a clone of a catalog entry.
    active_filter: FilterPreset,
    is_exporting: bool,
    /// Full-resolution source; download snapshots share its pixel buffer.
    source: ImageData,
    /// Downscaled rendition every preview is recomputed from.
    preview_base: ImageData,
    /// `preview_base` under the active filter.
    preview: ImageData,
    /// Stem of the source file, used to derive export names.
    file_stem: String,
    format: ExportFormat,
    destination: Option<PathBuf>,
}

impl State {
    /// Opens a session for `source`. The active filter starts at the
    /// catalog's default (identity) preset.
    #[must_use]
    pub fn new(
        catalog: FilterCatalog,
        source: ImageData,
        source_path: &Path,
        format: ExportFormat,
        destination: Option<PathBuf>,
    ) -> Self {
        let active_filter = catalog.default_preset().clone();
        // The identity rendition doubles as the base every other preview is
        // computed from; oversized sources are downscaled here exactly once.
        let preview_base = filter_render::render_preview(&source, &active_filter.transform)
            .unwrap_or_else(|_| source.clone());
        let preview = preview_base.clone();
        let file_stem = source_path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("image")
            .to_string();

        Self {
            catalog,
            active_filter,
            is_exporting: false,
            source,
            preview_base,
            preview,
            file_stem,
            format,
            destination,
        }
    }

    /// Update the state and emit an [`Event`] for the parent when needed.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::FilterSelected(preset) => self.select(preset),
            Message::DownloadPressed => self.trigger_download(),
            Message::ExportFinished(result) => self.finish_export(result),
            Message::ClosePressed => self.close(),
        }
    }

    fn select(&mut self, preset: FilterPreset) -> Event {
        // A preset's name is its identity: resolve through the catalog so the
        // session can never activate a filter the catalog does not carry.
        // Unknown names are dropped without touching the state.
        let Some(member) = self.catalog.get(&preset.name) else {
            return Event::None;
        };
        if member.name == self.active_filter.name {
            return Event::None;
        }
        let member = member.clone();

        // Selection is honored even while an export runs: the preview swaps,
        // the in-flight snapshot does not.
        match filter_render::render_preview(&self.preview_base, &member.transform) {
            Ok(preview) => self.preview = preview,
            Err(err) => {
                eprintln!("Failed to render preview for '{}': {err}", member.name);
            }
        }
        self.active_filter = member;
        Event::None
    }

    fn trigger_download(&mut self) -> Event {
        // One export at a time; presses while saving are dropped.
        if self.is_exporting {
            return Event::None;
        }
        self.is_exporting = true;

        // Snapshot the session at this instant: selections made while the
        // export runs must not leak into it.
        Event::ExportRequested(ExportRequest {
            file_stem: self.file_stem.clone(),
            filter_name: self.active_filter.name.clone(),
            transform: self.active_filter.transform.clone(),
            rgba: self.source.rgba_arc(),
            width: self.source.width,
            height: self.source.height,
            format: self.format,
            destination: self.destination.clone(),
        })
    }

    fn finish_export(&mut self, result: Result<PathBuf, ExportError>) -> Event {
        self.is_exporting = false;
        if let Err(err) = result {
            // Failures are logged and otherwise swallowed: no retry, no error
            // surface. The dialog closes like any finished export.
            eprintln!("Failed to export filtered image: {err}");
        }
        Event::CloseRequested
    }

    fn close(&mut self) -> Event {
        if self.is_exporting {
            // The running export owns the dialog's lifetime; completion will
            // close the session.
            return Event::None;
        }
        Event::CloseRequested
    }

    /// Render the dialog.
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        view::render(self, ctx)
    }

    /// The catalog backing the filter strip.
    pub fn catalog(&self) -> &FilterCatalog {
        &self.catalog
    }

    /// The currently active preset.
    pub fn active_filter(&self) -> &FilterPreset {
        &self.active_filter
    }

    /// True while an export is in flight.
    pub fn is_exporting(&self) -> bool {
        self.is_exporting
    }

    /// The rendition currently shown on the preview surface.
    pub fn preview(&self) -> &ImageData {
        &self.preview
    }

    /// The output format downloads will be encoded with.
    pub fn format(&self) -> ExportFormat {
        self.format
    }
}

#[cfg(test)]
mod tests;
