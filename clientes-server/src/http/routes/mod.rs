//! Route handlers organized by resource

pub mod clientes;
pub mod health;
