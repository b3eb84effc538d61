//! Cliente field validation
//!
//! Presence checks only: `nome` and `email` must be non-empty. The
//! update allow-list lives here too, so the repository never sees a
//! column name that didn't come from [`ClienteField`].

use super::ValidationError;

/// Maximum length for nome/email, matching the VARCHAR(255) columns.
const MAX_FIELD_LEN: usize = 255;

/// Validated cliente name (non-empty)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nome(String);

impl Nome {
    /// Create a new nome, requiring non-blank content.
    ///
    /// # Example
    /// ```
    /// use clientes_server::models::Nome;
    ///
    /// assert!(Nome::new("Ana").is_ok());
    /// assert!(Nome::new("").is_err());
    /// assert!(Nome::new("   ").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        validated(s, "nome").map(Self)
    }

    /// Get the nome as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

/// Validated cliente email (non-empty; no format check beyond presence)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email(String);

impl Email {
    /// Create a new email, requiring non-blank content.
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        validated(s, "email").map(Self)
    }

    /// Get the email as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

fn validated(s: &str, field: &'static str) -> Result<String, ValidationError> {
    if s.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }
    if s.len() > MAX_FIELD_LEN {
        return Err(ValidationError::TooLong {
            field,
            max: MAX_FIELD_LEN,
        });
    }
    Ok(s.to_owned())
}

/// Allow-list of updatable cliente fields.
///
/// PATCH bodies may only name these keys; anything else is rejected
/// before any SQL is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClienteField {
    Nome,
    Email,
}

impl ClienteField {
    /// Map a request key to an allow-listed field.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "nome" => Some(Self::Nome),
            "email" => Some(Self::Email),
            _ => None,
        }
    }

    /// Column name in the `clientes` table.
    pub fn column(self) -> &'static str {
        match self {
            Self::Nome => "nome",
            Self::Email => "email",
        }
    }

    /// Validate a submitted value for this field.
    pub fn validate(self, value: &str) -> Result<String, ValidationError> {
        match self {
            Self::Nome => Nome::new(value).map(Nome::into_string),
            Self::Email => Email::new(value).map(Email::into_string),
        }
    }
}
