//! Domain models with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod cliente;
pub mod validation;

pub use cliente::{ClienteField, Email, Nome};
pub use validation::ValidationError;
