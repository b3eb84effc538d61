//! Database connection pool management
//!
//! Uses sqlx MySqlPool with explicit connection limits. The pool is
//! created lazily: bad credentials or an unreachable server surface as
//! errors on first use, not at construction.

use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use sqlx::MySqlPool;

/// Create a MySQL connection pool.
///
/// Connections are established on demand. When all connections are in
/// use, callers wait for one to free up rather than failing.
///
/// # Example
///
/// ```ignore
/// let config = DbConfig::from_env();
/// let pool = create_pool(config.connect_options(), config.max_connections);
/// ```
pub fn create_pool(options: MySqlConnectOptions, max_connections: u32) -> MySqlPool {
    MySqlPoolOptions::new()
        .max_connections(max_connections)
        .connect_lazy_with(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    // Integration tests require a real database
    // Run with: DATABASE_URL=mysql://... cargo test -p clientes-server -- --ignored

    fn options_from_env() -> MySqlConnectOptions {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        MySqlConnectOptions::from_str(&url).expect("invalid DATABASE_URL")
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn pool_acquires_connection() {
        let pool = create_pool(options_from_env(), 5);

        let result: (i32,) = sqlx::query_as("SELECT 1")
            .fetch_one(&pool)
            .await
            .expect("query failed");

        assert_eq!(result.0, 1);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn concurrent_pool_access() {
        let pool = create_pool(options_from_env(), 5);

        // More tasks than connections: excess callers queue, none fail
        let handles: Vec<_> = (0..10)
            .map(|i| {
                let pool = pool.clone();
                tokio::spawn(async move {
                    let result: (i32,) = sqlx::query_as("SELECT ?")
                        .bind(i)
                        .fetch_one(&pool)
                        .await
                        .expect("concurrent query failed");
                    result.0
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let result = handle.await.expect("task panicked");
            assert_eq!(result, i as i32);
        }
    }
}
