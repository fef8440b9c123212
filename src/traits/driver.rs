use async_trait::async_trait;

use crate::error::Result;
use crate::types::{RawQueryResult, SqlValue};

/// Trait for database driver implementations.
/// Drivers are responsible for:
/// - Owning the connection to the database
/// - Converting SqlValue parameters to native types
/// - Executing statements and converting results to RawQueryResult
/// - Committing and closing the session
#[async_trait]
pub trait DatabaseDriver: Send + Sync {
    /// Execute a SQL statement with the given parameters and fetch every row.
    /// Parameters use MySQL-style positional placeholders (`?`).
    async fn execute(&self, sql: &str, params: &[SqlValue]) -> Result<RawQueryResult>;

    /// Commit the session's current transaction.
    async fn commit(&self) -> Result<()>;

    /// Release the connection. Any later call fails with `ConnectionClosed`.
    async fn close(&self) -> Result<()>;
}
