//! Application messages.

use cdesk_store::ContactMethod;

/// All events the entry form can produce.
#[derive(Debug, Clone)]
pub enum Message {
    /// Name field edited.
    NameChanged(String),
    /// Birthday field edited.
    BirthdayChanged(String),
    /// Email field edited.
    EmailChanged(String),
    /// Phone field edited.
    PhoneChanged(String),
    /// Address field edited.
    AddressChanged(String),
    /// Preferred contact method picked from the dropdown.
    ContactMethodSelected(ContactMethod),
    /// Submit button pressed.
    SubmitPressed,
    /// Outcome dialog dismissed.
    DialogDismissed,
}
