//! Repository implementations for database access
//!
//! Each operation issues exactly one parameterized statement. Column
//! names in dynamic SQL come only from the [`ClienteField`] allow-list,
//! never from request text.
//!
//! [`ClienteField`]: crate::models::ClienteField

pub mod clientes;

pub use clientes::{Cliente, ClienteRepo, DbError};
