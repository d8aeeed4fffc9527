//! Reusable UI components.

mod form_field;
mod modal;

pub use form_field::form_field;
pub use modal::alert_modal;
