//! Labeled text-entry field.

use iced::widget::{column, text, text_input};
use iced::{Element, Length, Theme};

use crate::theme::SPACING_XS;

/// Creates a labeled text input.
///
/// # Arguments
///
/// * `label` - Field label text
/// * `value` - Current field value
/// * `placeholder` - Placeholder text
/// * `id` - Optional widget id, for fields that receive programmatic focus
/// * `on_change` - Message factory for value changes
pub fn form_field<'a, M: Clone + 'a>(
    label: &'a str,
    value: &'a str,
    placeholder: &'a str,
    id: Option<&'static str>,
    on_change: impl Fn(String) -> M + 'a,
) -> Element<'a, M> {
    let label_text = text(label).size(13).style(|theme: &Theme| text::Style {
        color: Some(theme.extended_palette().background.base.text),
    });

    let mut input = text_input(placeholder, value)
        .on_input(on_change)
        .size(14)
        .padding(10.0)
        .width(Length::Fill);

    if let Some(id) = id {
        input = input.id(id);
    }

    column![label_text, input].spacing(SPACING_XS).into()
}
