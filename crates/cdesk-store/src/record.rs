//! Customer record types.

/// Preferred way to reach a customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactMethod {
    /// Contact by email (the form default).
    #[default]
    Email,
    /// Contact by phone.
    Phone,
    /// Contact by postal mail.
    Mail,
}

impl ContactMethod {
    /// Stable string form, stored in the `contact_method` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Mail => "Mail",
        }
    }

    /// Parse the stored string form back into the enum.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Email" => Some(Self::Email),
            "Phone" => Some(Self::Phone),
            "Mail" => Some(Self::Mail),
            _ => None,
        }
    }

    /// All selectable methods, in form display order.
    pub const ALL: [ContactMethod; 3] = [Self::Email, Self::Phone, Self::Mail];
}

impl std::fmt::Display for ContactMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The six field values collected from the entry form.
///
/// Values are carried exactly as entered. Only `name` is validated (non-empty
/// after trimming) and even then the untrimmed value is what gets stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerInput {
    pub name: String,
    pub birthday: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub contact_method: ContactMethod,
}

/// A persisted customer record, including its store-assigned id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerRecord {
    /// Unique, monotonically assigned by the store at insert time.
    pub id: i64,
    pub name: String,
    pub birthday: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub contact_method: ContactMethod,
}
