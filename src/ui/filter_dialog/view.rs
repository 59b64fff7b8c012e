// SPDX-License-Identifier: MPL-2.0
//! Rendering for the filter dialog.

use super::{Message, State};
use crate::i18n::fluent::I18n;
use crate::ui::components::checkerboard;
use crate::ui::design_tokens::{opacity, palette, radius, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, Column, Container, Image, Row, Stack, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Theme};

/// Contextual data needed to render the dialog.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Renders the full-window filter session.
pub fn render<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("filters-title")).size(typography::TITLE_MD);

    let preview = Container::new(preview_surface(state, ctx.i18n))
        .width(Length::Fill)
        .height(Length::Fill);

    let content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .width(Length::Fill)
        .height(Length::Fill)
        .push(title)
        .push(preview)
        .push(filter_strip(state))
        .push(action_row(state, ctx.i18n));

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::panel)
        .into()
}

/// The preview image over a checkerboard, dimmed while an export runs.
fn preview_surface<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let rendition = Image::new(state.preview().handle.clone())
        .content_fit(iced::ContentFit::Contain)
        .width(Length::Fill)
        .height(Length::Fill);

    let framed = Container::new(rendition)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(|_theme: &Theme| container::Style {
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            ..Default::default()
        });

    let surface = checkerboard::wrap(framed);

    if !state.is_exporting() {
        return surface;
    }

    let veil = Container::new(
        Text::new(i18n.tr("saving-label"))
            .size(typography::BODY_LG)
            .color(palette::WHITE),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .style(|_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::BLACK
        })),
        ..Default::default()
    });

    Stack::new().push(surface).push(veil).into()
}

/// One toggle button per catalog preset, active one highlighted.
///
/// The strip stays interactive during an export: picking a preset only
/// changes the preview, never the running download.
fn filter_strip(state: &State) -> Element<'_, Message> {
    let mut strip = Row::new().spacing(spacing::XS);

    for preset in state.catalog().presets() {
        let is_active = preset.name == state.active_filter().name;
        let style: fn(&Theme, button::Status) -> button::Style = if is_active {
            styles::button::selected
        } else {
            styles::button::unselected
        };

        strip = strip.push(
            button(Text::new(preset.name.as_str()).size(typography::BODY))
                .padding([spacing::XXS, spacing::SM])
                .style(style)
                .on_press(Message::FilterSelected(preset.clone())),
        );
    }

    strip.into()
}

fn action_row<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let exporting = state.is_exporting();

    // Press targets are removed while saving; `State::update` drops the
    // messages regardless, this only greys the affordance out.
    let cancel = button(Text::new(i18n.tr("cancel-button")).size(typography::BODY))
        .padding([spacing::XS, spacing::LG])
        .style(styles::button::unselected);
    let cancel = if exporting {
        cancel
    } else {
        cancel.on_press(Message::ClosePressed)
    };

    let download = button(Text::new(i18n.tr("download-button")).size(typography::BODY))
        .padding([spacing::XS, spacing::LG])
        .style(styles::button::primary);
    let download = if exporting {
        download
    } else {
        download.on_press(Message::DownloadPressed)
    };

    Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(cancel)
        .push(download)
        .into()
}
