// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the viewer and the filter
//! dialog.
//!
//! The `App` struct wires together localization, configuration, image loading,
//! and the filter session, and translates component events into side effects
//! like the background export. This file intentionally keeps policy decisions
//! (window sizing, screen switching, export routing) close to the main update
//! loop so it is easy to audit user-facing behavior.

pub mod config;
mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::domain::FilterCatalog;
use crate::i18n::fluent::I18n;
use crate::infrastructure::FileExporter;
use crate::media::{self, ImageData};
use crate::ui::filter_dialog;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state that bridges UI components, localization, and
/// configuration.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    config: config::Config,
    theme_mode: ThemeMode,
    catalog: FilterCatalog,
    /// Currently loaded image, if any.
    image: Option<ImageData>,
    /// On-disk path of the loaded image.
    image_path: Option<PathBuf>,
    /// Shown under the open prompt when the last load failed.
    load_error: Option<String>,
    /// Filter session state while the dialog is open.
    filter_dialog: Option<filter_dialog::State>,
    exporter: FileExporter,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("has_image", &self.image.is_some())
            .field("dialog_open", &self.filter_dialog.is_some())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 520;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    let icon = crate::icon::load_window_icon();

    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        icon,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            screen: Screen::Viewer,
            config: config::Config::default(),
            theme_mode: ThemeMode::System,
            catalog: FilterCatalog::builtin(),
            image: None,
            image_path: None,
            load_error: None,
            filter_dialog: None,
            exporter: FileExporter,
        }
    }
}

impl App {
    /// Initializes application state and optionally kicks off asynchronous
    /// image loading based on `Flags` received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        if let Some(warning) = config_warning {
            eprintln!("Failed to load settings: {warning}");
        }

        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut app = App {
            i18n,
            ..Self::default()
        };
        app.theme_mode = config.general.theme_mode;
        app.config = config;

        let task = match flags.file_path {
            Some(path_str) => {
                let path = PathBuf::from(&path_str);
                if media::is_supported_image(&path) {
                    update::load_image_task(path)
                } else {
                    eprintln!("Unsupported image file: {}", path.display());
                    Task::none()
                }
            }
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");

        let file_name = self.image_path.as_ref().and_then(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .map(String::from)
        });

        match file_name {
            Some(name) => format!("{name} - {app_name}"),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription(self.screen)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            screen: &mut self.screen,
            config: &self.config,
            catalog: &self.catalog,
            image: &mut self.image,
            image_path: &mut self.image_path,
            load_error: &mut self.load_error,
            filter_dialog: &mut self.filter_dialog,
            exporter: self.exporter,
        };

        match message {
            Message::OpenImagePressed => update::handle_open_image_pressed(),
            Message::OpenDialogResult(path) => update::handle_open_dialog_result(path),
            Message::FileDropped(path) => update::handle_file_dropped(path),
            Message::ImageLoaded { path, result } => {
                update::handle_image_loaded(&mut ctx, path, result)
            }
            Message::TintPressed => update::handle_tint_pressed(&mut ctx),
            Message::FilterDialog(dialog_message) => {
                update::handle_dialog_message(&mut ctx, dialog_message)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            image: self.image.as_ref(),
            load_error: self.load_error.as_deref(),
            filter_dialog: self.filter_dialog.as_ref(),
        })
    }
}
