//! The record entry form view.

use iced::widget::{Space, button, column, container, pick_list, row, space, text};
use iced::{Element, Length, Theme};
use iced_fonts::lucide;

use cdesk_store::ContactMethod;

use crate::app::{App, NAME_INPUT};
use crate::component::{alert_modal, form_field};
use crate::message::Message;
use crate::state::StatusDialog;
use crate::theme::{SPACING_LG, SPACING_MD, SPACING_XS};

/// Renders the entry form, with the outcome dialog stacked on top when one
/// is showing.
pub fn view_form(app: &App) -> Element<'_, Message> {
    let form = &app.form;

    let contact_label = text("Preferred Contact:")
        .size(13)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().background.base.text),
        });

    let contact_picker = pick_list(
        ContactMethod::ALL,
        Some(form.contact_method),
        Message::ContactMethodSelected,
    )
    .text_size(14)
    .padding(8.0)
    .width(Length::Fixed(160.0));

    let submit_row = row![
        space::horizontal(),
        button(text("Submit").size(14))
            .on_press(Message::SubmitPressed)
            .padding([10.0, 24.0])
            .style(button::primary),
    ];

    let fields = column![
        form_field(
            "Name:",
            &form.name,
            "Required",
            Some(NAME_INPUT),
            Message::NameChanged
        ),
        form_field(
            "Birthday (YYYY-MM-DD):",
            &form.birthday,
            "",
            None,
            Message::BirthdayChanged
        ),
        form_field("Email:", &form.email, "", None, Message::EmailChanged),
        form_field("Phone:", &form.phone, "", None, Message::PhoneChanged),
        form_field("Address:", &form.address, "", None, Message::AddressChanged),
        column![contact_label, contact_picker].spacing(SPACING_XS),
        Space::new().height(SPACING_XS),
        submit_row,
    ]
    .spacing(SPACING_MD);

    let base: Element<'_, Message> = container(fields)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(SPACING_LG)
        .into();

    match &app.dialog {
        Some(dialog) => alert_modal(
            base,
            dialog.title(),
            dialog_icon(dialog),
            dialog.message(),
            Message::DialogDismissed,
        ),
        None => base,
    }
}

fn dialog_icon(dialog: &StatusDialog) -> Element<'_, Message> {
    match dialog {
        StatusDialog::Success { .. } => lucide::circle_check()
            .size(20)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.extended_palette().success.base.color),
            })
            .into(),
        StatusDialog::InputError => lucide::triangle_alert()
            .size(20)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.extended_palette().danger.base.color),
            })
            .into(),
        StatusDialog::DatabaseError { .. } => lucide::circle_x()
            .size(20)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.extended_palette().danger.base.color),
            })
            .into(),
    }
}
