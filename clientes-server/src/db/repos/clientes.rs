//! Cliente repository
//!
//! CRUD over the `clientes` table. PUT/PATCH/DELETE decide not-found by
//! `rows_affected`, so absent ids never mutate anything.

use sqlx::{FromRow, MySqlPool};

use crate::models::{ClienteField, Email, Nome};

/// Cliente record from database
#[derive(Debug, Clone, FromRow)]
pub struct Cliente {
    pub cliente_id: i64,
    pub nome: String,
    pub email: String,
}

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: i64 },
}

/// Cliente repository
pub struct ClienteRepo<'a> {
    pool: &'a MySqlPool,
}

impl<'a> ClienteRepo<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    /// List all clientes ordered by id.
    pub async fn list(&self) -> Result<Vec<Cliente>, DbError> {
        let rows: Vec<Cliente> = sqlx::query_as(
            "SELECT cliente_id, nome, email FROM clientes ORDER BY cliente_id",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Get a single cliente by id.
    pub async fn get(&self, id: i64) -> Result<Cliente, DbError> {
        let row: Option<Cliente> = sqlx::query_as(
            "SELECT cliente_id, nome, email FROM clientes WHERE cliente_id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        row.ok_or(DbError::NotFound {
            resource: "cliente",
            id,
        })
    }

    /// Insert a cliente, returning the storage-assigned id.
    pub async fn create(&self, nome: &Nome, email: &Email) -> Result<u64, DbError> {
        let result = sqlx::query("INSERT INTO clientes (nome, email) VALUES (?, ?)")
            .bind(nome.as_str())
            .bind(email.as_str())
            .execute(self.pool)
            .await?;

        Ok(result.last_insert_id())
    }

    /// Fully replace nome and email for an existing cliente.
    pub async fn replace(&self, id: i64, nome: &Nome, email: &Email) -> Result<(), DbError> {
        let result = sqlx::query("UPDATE clientes SET nome = ?, email = ? WHERE cliente_id = ?")
            .bind(nome.as_str())
            .bind(email.as_str())
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "cliente",
                id,
            });
        }
        Ok(())
    }

    /// Update only the given fields of an existing cliente.
    ///
    /// The SET clause is built from [`ClienteField`] values, so the SQL
    /// text only ever contains allow-listed column names; submitted
    /// values are positionally bound. Callers guarantee `changes` is
    /// non-empty.
    pub async fn update_fields(
        &self,
        id: i64,
        changes: &[(ClienteField, String)],
    ) -> Result<(), DbError> {
        debug_assert!(!changes.is_empty());

        let sql = update_sql(changes.iter().map(|(field, _)| *field));

        let mut query = sqlx::query(&sql);
        for (_, value) in changes {
            query = query.bind(value.as_str());
        }
        query = query.bind(id);

        let result = query.execute(self.pool).await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "cliente",
                id,
            });
        }
        Ok(())
    }

    /// Delete a cliente by id.
    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM clientes WHERE cliente_id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "cliente",
                id,
            });
        }
        Ok(())
    }
}

/// Build the UPDATE statement for a set of allow-listed fields.
///
/// Safe to interpolate because column names come from the enum, not
/// from user input; values stay as `?` placeholders.
fn update_sql(fields: impl Iterator<Item = ClienteField>) -> String {
    let mut sql = String::from("UPDATE clientes SET ");
    for (i, field) in fields.enumerate() {
        if i > 0 {
            sql.push_str(", ");
        }
        sql.push_str(field.column());
        sql.push_str(" = ?");
    }
    sql.push_str(" WHERE cliente_id = ?");
    sql
}
