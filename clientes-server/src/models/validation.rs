//! Validation error types
//!
//! Display strings are client-facing and therefore in Portuguese, like
//! the rest of the API surface.

use std::fmt;

/// Validation error for domain models
#[derive(Debug, Clone)]
pub enum ValidationError {
    /// Field is missing or empty when it shouldn't be
    Empty { field: &'static str },

    /// Field exceeds maximum length
    TooLong { field: &'static str, max: usize },

    /// Value doesn't match the required format
    InvalidFormat { field: &'static str, reason: &'static str },

    /// Field name is not in the updatable allow-list
    UnknownField { field: String },

    /// Update body contained no fields at all
    NoFields,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "o campo '{}' é obrigatório", field),
            Self::TooLong { field, max } => {
                write!(f, "o campo '{}' excede o máximo de {} caracteres", field, max)
            }
            Self::InvalidFormat { field, reason } => {
                write!(f, "campo '{}' inválido: {}", field, reason)
            }
            Self::UnknownField { field } => {
                write!(f, "campo '{}' não é atualizável", field)
            }
            Self::NoFields => write!(f, "nenhum campo para atualizar"),
        }
    }
}

impl std::error::Error for ValidationError {}
