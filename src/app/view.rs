// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current screen
//! based on application state.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::media::ImageData;
use crate::ui::components::checkerboard;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::filter_dialog::{self, ViewContext as DialogViewContext};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Image, Row, Text};
use iced::{alignment, Color, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub image: Option<&'a ImageData>,
    pub load_error: Option<&'a str>,
    pub filter_dialog: Option<&'a filter_dialog::State>,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Viewer => view_viewer(ctx.image, ctx.load_error, ctx.i18n),
        Screen::FilterDialog => view_filter_dialog(ctx.filter_dialog, ctx.i18n),
    };

    Container::new(current_view)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_viewer<'a>(
    image: Option<&'a ImageData>,
    load_error: Option<&'a str>,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    match image {
        Some(image) => view_loaded(image, load_error, i18n),
        None => view_empty(load_error, i18n),
    }
}

/// Toolbar plus the image on a checkerboard, so alpha stays visible.
fn view_loaded<'a>(
    image: &'a ImageData,
    load_error: Option<&'a str>,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    let open_button = button(Text::new(i18n.tr("open-button")))
        .padding([spacing::XS, spacing::LG])
        .style(styles::button::unselected)
        .on_press(Message::OpenImagePressed);

    let tint_button = button(Text::new(i18n.tr("tint-button")))
        .padding([spacing::XS, spacing::LG])
        .style(styles::button::primary)
        .on_press(Message::TintPressed);

    let mut toolbar = Row::new()
        .spacing(spacing::SM)
        .padding([spacing::XS, spacing::SM])
        .align_y(alignment::Vertical::Center)
        .push(open_button)
        .push(tint_button);

    if let Some(error) = load_error {
        toolbar = toolbar.push(
            Text::new(error)
                .size(typography::CAPTION)
                .color(palette::ERROR_500),
        );
    }

    let picture = Image::new(image.handle.clone())
        .content_fit(iced::ContentFit::Contain)
        .width(Length::Fill)
        .height(Length::Fill);

    let surface = checkerboard::wrap(
        Container::new(picture)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::SM),
    );

    Column::new().push(toolbar).push(surface).into()
}

/// Centered prompt shown while no image is loaded.
fn view_empty<'a>(load_error: Option<&'a str>, i18n: &'a I18n) -> Element<'a, Message> {
    let title = Text::new(i18n.tr("no-image-hint"))
        .size(typography::TITLE_MD)
        .color(palette::GRAY_400);

    let open_button = button(Text::new(i18n.tr("open-button")))
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::primary)
        .on_press(Message::OpenImagePressed);

    let drop_hint = Text::new(i18n.tr("drop-hint"))
        .size(typography::CAPTION)
        .color(Color {
            a: 0.5,
            ..palette::GRAY_400
        });

    let mut content = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(open_button)
        .push(drop_hint);

    if let Some(error) = load_error {
        content = content.push(
            Text::new(error)
                .size(typography::CAPTION)
                .color(palette::ERROR_500),
        );
    }

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn view_filter_dialog<'a>(
    dialog: Option<&'a filter_dialog::State>,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    match dialog {
        Some(state) => state
            .view(DialogViewContext { i18n })
            .map(Message::FilterDialog),
        None => Container::new(Text::new("Dialog error"))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .into(),
    }
}
