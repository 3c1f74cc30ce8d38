// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo application.
//!
//! One button per named region, a status line, and the toast overlay
//! stacked on top.

use super::Message;
use crate::surface::Document;
use crate::toast::{self, Position};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::overlay;
use iced::widget::{button, Column, Container, Row, Stack, Text};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub document: &'a Document,
    pub live: usize,
    pub closed: usize,
}

/// Renders the controls with the toast regions layered above them.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let spawn_buttons = Position::NAMED.iter().fold(
        Row::new().spacing(spacing::XS),
        |row, position| {
            row.push(
                button(Text::new(position.to_string()).size(typography::BODY))
                    .on_press(Message::Spawn(position.clone())),
            )
        },
    );

    let clear = button(Text::new("clear all").size(typography::BODY)).on_press(Message::ClearAll);

    let status = Text::new(format!("{} live, {} closed", ctx.live, ctx.closed))
        .size(typography::CAPTION);

    let controls = Column::new()
        .spacing(spacing::SM)
        .push(spawn_buttons)
        .push(clear)
        .push(status);

    let base = Container::new(controls)
        .center_x(Length::Fill)
        .center_y(Length::Fill);

    let toasts =
        overlay::view(ctx.document).map(|event| Message::Toast(toast::Message::Event(event)));

    Stack::new()
        .push(base)
        .push(toasts)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
