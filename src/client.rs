use std::sync::Arc;

use crate::builders::{build_insert, build_select, build_upsert};
use crate::clauses::Filter;
use crate::config::ClientConfig;
use crate::drivers::MySqlDriver;
use crate::error::{Result, ToolkitError};
use crate::traits::DatabaseDriver;
use crate::types::{ConflictPolicy, InsertOutcome, QueryResult, Row, SqlValue, Statement};

/// Main entry point for mysqltoolkit.
/// Owns one database connection and runs generated statements against it.
pub struct Client {
    driver: Arc<dyn DatabaseDriver>,
}

impl Client {
    /// Connect to a MySQL database.
    ///
    /// # Example
    /// ```ignore
    /// let config = ClientConfig::new("127.0.0.1", 3306, "root", "", "test");
    /// let client = Client::connect(&config).await?;
    /// ```
    pub async fn connect(config: &ClientConfig) -> Result<Self> {
        let driver = MySqlDriver::connect(config).await?;
        Ok(Self {
            driver: Arc::new(driver),
        })
    }

    /// Create a new client with a custom driver.
    /// Useful for testing or using alternative database drivers.
    pub fn with_driver(driver: Arc<dyn DatabaseDriver>) -> Self {
        Self { driver }
    }

    /// The driver this client runs statements on.
    pub fn driver(&self) -> &Arc<dyn DatabaseDriver> {
        &self.driver
    }

    /// Fetch `fields` of every row in `table` matching all `filters`.
    ///
    /// Each filter is a raw SQL boolean expression joined to the others with
    /// `AND` and placed in the statement as-is. Nothing in it is escaped or
    /// bound, so callers must quote any values themselves and never pass
    /// untrusted input; [`Client::select_filtered`] binds values instead.
    /// An empty `filters` slice selects every row.
    pub async fn select(
        &self,
        table: &str,
        fields: &[&str],
        filters: &[&str],
    ) -> Result<Vec<Row>> {
        let filters: Vec<Filter> = filters.iter().map(|f| Filter::raw(*f)).collect();
        self.select_filtered(table, fields, &filters).await
    }

    /// Like [`Client::select`], with structured filters whose values are bound
    /// as parameters. [`Filter::Raw`] is still accepted.
    pub async fn select_filtered(
        &self,
        table: &str,
        fields: &[&str],
        filters: &[Filter],
    ) -> Result<Vec<Row>> {
        ensure_fields(fields)?;
        let stmt = build_select(table, fields, filters);
        Ok(self.run(&stmt).await?.rows())
    }

    /// First row matching `filters`, if any.
    pub async fn select_one(
        &self,
        table: &str,
        fields: &[&str],
        filters: &[Filter],
    ) -> Result<Option<Row>> {
        ensure_fields(fields)?;
        let stmt = build_select(table, fields, filters);
        Ok(self.run(&stmt).await?.first())
    }

    /// Insert one row, binding `data` positionally to `fields`, and commit.
    ///
    /// With [`ConflictPolicy::Update`] an existing row with the same unique key
    /// has the listed columns overwritten. With [`ConflictPolicy::Ignore`] a
    /// duplicate-key error is swallowed and [`InsertOutcome::Ignored`] returned.
    /// Any other error propagates and nothing is committed.
    pub async fn insert(
        &self,
        table: &str,
        fields: &[&str],
        data: &[SqlValue],
        policy: ConflictPolicy,
    ) -> Result<InsertOutcome> {
        ensure_fields(fields)?;
        if data.len() != fields.len() {
            return Err(ToolkitError::ParameterCountMismatch {
                expected: fields.len(),
                actual: data.len(),
            });
        }

        let sql = match policy {
            ConflictPolicy::Update => build_upsert(table, fields),
            ConflictPolicy::Fail | ConflictPolicy::Ignore => build_insert(table, fields),
        };
        let stmt = Statement::new(sql, data.to_vec());

        let result = match self.run(&stmt).await {
            Ok(result) => result,
            Err(e) if policy == ConflictPolicy::Ignore && e.is_duplicate_key() => {
                tracing::warn!(table, error = %e, "ignoring duplicate key on insert");
                return Ok(InsertOutcome::Ignored);
            }
            Err(e) => return Err(e),
        };

        self.driver.commit().await?;
        tracing::debug!(table, affected_rows = result.affected_rows(), "insert committed");

        Ok(InsertOutcome::Written {
            affected_rows: result.affected_rows(),
            last_insert_id: result.last_insert_id(),
        })
    }

    /// Run arbitrary SQL with bound parameters and return every row.
    ///
    /// Nothing is committed.
    pub async fn query(&self, sql: &str, params: &[SqlValue]) -> Result<Vec<Row>> {
        let stmt = Statement::new(sql, params.to_vec());
        Ok(self.run(&stmt).await?.rows())
    }

    /// Release the connection. Later calls fail with `ConnectionClosed`.
    pub async fn close(&self) -> Result<()> {
        tracing::debug!("closing connection");
        self.driver.close().await
    }

    async fn run(&self, stmt: &Statement) -> Result<QueryResult> {
        tracing::debug!(sql = %stmt.sql, params = stmt.params.len(), "executing statement");
        let raw = self.driver.execute(&stmt.sql, &stmt.params).await?;
        Ok(QueryResult::from_raw(raw))
    }
}

fn ensure_fields(fields: &[&str]) -> Result<()> {
    if fields.is_empty() {
        return Err(ToolkitError::EmptyFieldList);
    }
    Ok(())
}
