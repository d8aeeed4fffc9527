//! Main application: State → Message → Update → View.
//!
//! All state changes happen in `update()`; the view is a pure function of
//! state. The submit handler runs synchronously on the event loop, so a
//! second submit cannot start while one is in flight.

use std::path::PathBuf;

use iced::widget::operation;
use iced::{Element, Task, Theme};

use cdesk_store::SubmitError;

use crate::message::Message;
use crate::state::{FormState, StatusDialog};
use crate::view::view_form;

/// Focus target for the name input; focused on startup and after each
/// dialog dismissal.
pub const NAME_INPUT: &str = "customer-name";

/// Main application struct.
pub struct App {
    /// Location of the SQLite store. Each operation opens its own connection.
    db_path: PathBuf,
    /// Live form field values.
    pub form: FormState,
    /// Outcome dialog, if one is showing.
    pub dialog: Option<StatusDialog>,
}

impl App {
    /// Create a new application instance with the given store location.
    pub fn new(db_path: PathBuf) -> (Self, Task<Message>) {
        let app = Self {
            db_path,
            form: FormState::default(),
            dialog: None,
        };

        (app, operation::focus(NAME_INPUT))
    }

    /// Window title.
    pub fn title(&self) -> String {
        "Customer Information Entry".to_string()
    }

    /// Application theme.
    pub fn theme(&self) -> Theme {
        Theme::Light
    }

    /// Update application state in response to a message.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::NameChanged(value) => {
                self.form.name = value;
                Task::none()
            }
            Message::BirthdayChanged(value) => {
                self.form.birthday = value;
                Task::none()
            }
            Message::EmailChanged(value) => {
                self.form.email = value;
                Task::none()
            }
            Message::PhoneChanged(value) => {
                self.form.phone = value;
                Task::none()
            }
            Message::AddressChanged(value) => {
                self.form.address = value;
                Task::none()
            }
            Message::ContactMethodSelected(method) => {
                self.form.contact_method = method;
                Task::none()
            }
            Message::SubmitPressed => {
                self.handle_submit();
                Task::none()
            }
            Message::DialogDismissed => {
                self.dialog = None;
                operation::focus(NAME_INPUT)
            }
        }
    }

    /// Collect the entered fields, validate, and persist.
    ///
    /// On success the fields are reset; on either error path the entered
    /// values stay in place so the user can correct or retry.
    fn handle_submit(&mut self) {
        let input = self.form.to_input();

        match cdesk_store::submit(&self.db_path, &input) {
            Ok(_id) => {
                self.dialog = Some(StatusDialog::Success { name: input.name });
                self.form.reset();
            }
            Err(SubmitError::EmptyName) => {
                self.dialog = Some(StatusDialog::InputError);
            }
            Err(SubmitError::Store(err)) => {
                tracing::error!("customer insert failed: {err}");
                self.dialog = Some(StatusDialog::DatabaseError {
                    detail: err.to_string(),
                });
            }
        }
    }

    /// Render the current state.
    pub fn view(&self) -> Element<'_, Message> {
        view_form(self)
    }
}
