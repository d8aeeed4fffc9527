//! Form and dialog state.

use cdesk_store::{ContactMethod, CustomerInput};

/// Live values of the six entry controls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub birthday: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub contact_method: ContactMethod,
}

impl FormState {
    /// Snapshot the control values into the store's input struct.
    pub fn to_input(&self) -> CustomerInput {
        CustomerInput {
            name: self.name.clone(),
            birthday: self.birthday.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            address: self.address.clone(),
            contact_method: self.contact_method,
        }
    }

    /// Reset every field to its initial state: text fields empty, contact
    /// method back to Email.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Outcome dialog shown after a submit attempt. Blocks the form until
/// dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusDialog {
    /// Record persisted; the fields were reset.
    Success { name: String },
    /// Name missing; entered values kept.
    InputError,
    /// Store failure; entered values kept for retry.
    DatabaseError { detail: String },
}

impl StatusDialog {
    /// Dialog title bar text.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Success { .. } => "Success",
            Self::InputError => "Input Error",
            Self::DatabaseError { .. } => "Database Error",
        }
    }

    /// Dialog body text.
    pub fn message(&self) -> String {
        match self {
            Self::Success { name } => {
                format!("Customer '{name}' has been added to the database.")
            }
            Self::InputError => "The 'Name' field is required.".to_string(),
            Self::DatabaseError { detail } => {
                format!("An error occurred while saving data: {detail}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_restores_initial_state() {
        let mut form = FormState {
            name: "Jane".to_string(),
            birthday: "1990-05-01".to_string(),
            email: "jane@x.com".to_string(),
            phone: "555-1234".to_string(),
            address: "1 Main St".to_string(),
            contact_method: ContactMethod::Mail,
        };

        form.reset();

        assert_eq!(form, FormState::default());
        assert_eq!(form.contact_method, ContactMethod::Email);
    }

    #[test]
    fn test_to_input_carries_values_verbatim() {
        let form = FormState {
            name: "  Jane  ".to_string(),
            contact_method: ContactMethod::Phone,
            ..FormState::default()
        };

        let input = form.to_input();
        assert_eq!(input.name, "  Jane  ");
        assert_eq!(input.contact_method, ContactMethod::Phone);
        assert_eq!(input.birthday, "");
    }

    #[test]
    fn test_dialog_messages() {
        let success = StatusDialog::Success {
            name: "Jane Doe".to_string(),
        };
        assert_eq!(success.title(), "Success");
        assert!(success.message().contains("'Jane Doe'"));

        let db_err = StatusDialog::DatabaseError {
            detail: "disk I/O error".to_string(),
        };
        assert_eq!(db_err.title(), "Database Error");
        assert!(db_err.message().contains("disk I/O error"));
    }
}
