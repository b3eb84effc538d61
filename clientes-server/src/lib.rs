//! clientes-server: HTTP CRUD service for the `clientes` resource
//!
//! Exposes REST endpoints over a single MySQL table through a bounded
//! connection pool. Route handlers live under [`http::routes`], database
//! access under [`db`], and validated domain types under [`models`].

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::DbConfig;
pub use http::{run_server, ServerConfig};
