//! Modal dialog overlay.
//!
//! The dialog appears centered on top of the form with a semi-transparent
//! backdrop. The backdrop is opaque to input, so the form underneath cannot
//! receive a second submit while a dialog is showing.

use iced::widget::{button, center, column, container, opaque, row, space, stack, text};
use iced::{Alignment, Border, Color, Element, Length, Shadow, Theme, Vector};
use iced_fonts::lucide;

use crate::theme::{BORDER_RADIUS_LG, MODAL_WIDTH, SPACING_LG, SPACING_MD, SPACING_SM};

/// Creates an alert dialog with a title, icon, message, and a single OK
/// button.
///
/// # Arguments
///
/// * `base` - The background content (the entire form)
/// * `title` - Dialog title text
/// * `icon` - Status icon shown next to the message
/// * `message` - Dialog body text
/// * `on_close` - Message sent by both the OK button and the close icon
pub fn alert_modal<'a, M: Clone + 'a>(
    base: Element<'a, M>,
    title: &'a str,
    icon: Element<'a, M>,
    message: String,
    on_close: M,
) -> Element<'a, M> {
    // Backdrop overlay
    let backdrop = container(column![])
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_theme: &Theme| container::Style {
            background: Some(Color::from_rgba(0.0, 0.0, 0.0, 0.4).into()),
            ..Default::default()
        });

    // Header with title and close button
    let header = row![
        text(title).size(18).style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().background.base.text),
        }),
        space::horizontal(),
        button(lucide::x().size(16))
            .on_press(on_close.clone())
            .padding([4.0, 8.0])
            .style(button::text),
    ]
    .align_y(Alignment::Center);

    let body = row![icon, text(message).size(14)]
        .spacing(SPACING_SM)
        .align_y(Alignment::Center);

    let ok_btn = button(text("OK").size(14))
        .on_press(on_close)
        .padding([10.0, 24.0])
        .style(button::primary);

    let action_row = row![space::horizontal(), ok_btn];

    // Dialog box
    let dialog = container(
        column![header, container(body).padding([SPACING_MD, 0.0]), action_row]
            .spacing(SPACING_MD),
    )
    .width(Length::Fixed(MODAL_WIDTH))
    .padding(SPACING_LG)
    .style(|theme: &Theme| {
        let palette = theme.extended_palette();
        container::Style {
            background: Some(palette.background.base.color.into()),
            border: Border {
                radius: BORDER_RADIUS_LG.into(),
                width: 1.0,
                color: palette.background.strong.color,
            },
            shadow: Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
                offset: Vector::new(0.0, 4.0),
                blur_radius: 24.0,
            },
            ..Default::default()
        }
    });

    // Stack layers: base -> backdrop -> dialog
    stack![base, opaque(backdrop), center(dialog)].into()
}
