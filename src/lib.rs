//! mysqltoolkit - a thin async wrapper that builds SELECT / INSERT / upsert
//! statements for MySQL and runs them over a single owned connection.
//!
//! # Example
//! ```ignore
//! use mysqltoolkit::{Client, ClientConfig, ConflictPolicy, SqlValue};
//!
//! let client = Client::connect(&ClientConfig::new("127.0.0.1", 3306, "root", "", "test")).await?;
//!
//! client
//!     .insert(
//!         "ComplexTable",
//!         &["itemId", "date", "field1"],
//!         &[SqlValue::from("DS_3"), SqlValue::from("2020-03-13"), SqlValue::from(2)],
//!         ConflictPolicy::Update,
//!     )
//!     .await?;
//!
//! let rows = client
//!     .select("ComplexTable", &["id", "field1"], &[r#"itemId = "DS_3""#])
//!     .await?;
//! let field1 = rows[0].get("field1")?;
//! ```

pub mod builders;
pub mod clauses;
pub mod config;
pub mod drivers;
pub mod error;
pub mod traits;
pub mod types;

mod client;

// Re-export main types for convenient access
pub use clauses::Filter;
pub use client::Client;
pub use config::ClientConfig;
pub use error::{Result, ToolkitError};
pub use traits::DatabaseDriver;
pub use types::{
    ConflictPolicy, InsertOutcome, QueryResult, RawQueryResult, Row, SqlValue, Statement,
};
