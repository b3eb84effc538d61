//! Database layer - connection pool and repositories
//!
//! # Design Principles
//!
//! - Bounded connection pool, injected into handlers via state - no globals
//! - One parameterized statement per operation - no transactions needed
//! - Not-found is decided by `rows_affected`, never by check-then-write
//!
//! Expected schema (see `schema.sql`):
//!
//! ```sql
//! CREATE TABLE clientes (
//!     cliente_id BIGINT AUTO_INCREMENT PRIMARY KEY,
//!     nome       VARCHAR(255) NOT NULL,
//!     email      VARCHAR(255) NOT NULL
//! );
//! ```

pub mod pool;
pub mod repos;

pub use pool::create_pool;
pub use repos::{Cliente, ClienteRepo, DbError};
