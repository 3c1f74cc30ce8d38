// SPDX-License-Identifier: MPL-2.0
//! Renders the toast regions of a [`Document`] as an Iced overlay.
//!
//! Each region is a column of cards pinned to its corner; the regions are
//! stacked so they can share the window. Cards report pointer and click
//! input as [`HostEvent`]s, and the manager decides which of them a toast
//! actually listens to.

use crate::surface::{Document, ElementId, Region, Surface};
use crate::toast::{classes, HostEvent, Position};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{mouse_area, progress_bar, text, Column, Container, Stack, Text};
use iced::{Element, Length, Theme};

/// Renders every region of `document`, filling the available space.
pub fn view(document: &Document) -> Element<'_, HostEvent> {
    let regions: Vec<Element<'_, HostEvent>> = document
        .regions()
        .map(|region| view_region(document, region))
        .collect();

    if regions.is_empty() {
        // Return an empty container that takes no space
        return Container::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into();
    }

    regions
        .into_iter()
        .fold(Stack::new(), |stack, region| stack.push(region))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Corner alignment of a region. Custom positions stack at the top right.
#[must_use]
pub fn alignment(position: &Position) -> (Horizontal, Vertical) {
    match position {
        Position::TopLeft => (Horizontal::Left, Vertical::Top),
        Position::TopCenter => (Horizontal::Center, Vertical::Top),
        Position::TopRight | Position::Custom(_) => (Horizontal::Right, Vertical::Top),
        Position::BottomLeft => (Horizontal::Left, Vertical::Bottom),
        Position::BottomCenter => (Horizontal::Center, Vertical::Bottom),
        Position::BottomRight => (Horizontal::Right, Vertical::Bottom),
    }
}

fn view_region<'a>(document: &'a Document, region: Region<'a>) -> Element<'a, HostEvent> {
    let (horizontal, vertical) = alignment(&Position::from(region.position));

    let cards: Vec<Element<'a, HostEvent>> = region
        .toasts
        .iter()
        .map(|&element| view_toast(document, element))
        .collect();

    let column = Column::with_children(cards)
        .spacing(spacing::XS)
        .align_x(horizontal);

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(horizontal)
        .align_y(vertical)
        .padding(spacing::MD)
        .into()
}

fn view_toast(document: &Document, element: ElementId) -> Element<'_, HostEvent> {
    let shown = document.has_class(element, classes::SHOW);

    let message = Text::new(document.text(element).unwrap_or_default()).size(typography::BODY);
    let mut content = Column::new().spacing(spacing::XS).push(message);

    if document.has_class(element, classes::PROGRESS) {
        if let Some(value) = document.style_property(element, classes::PROGRESS_PROPERTY) {
            content = content.push(progress_bar(0.0..=1.0, value).style(styles::progress));
        }
    }

    let card = Container::new(content)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |theme: &Theme| styles::toast_card(theme, shown));

    mouse_area(card)
        .on_enter(HostEvent::PointerEntered(element))
        .on_exit(HostEvent::PointerLeft(element))
        .on_press(HostEvent::Clicked(element))
        .into()
}
