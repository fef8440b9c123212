mod conflict;
mod row;
mod sql_value;
mod statement;

pub use conflict::{ConflictPolicy, InsertOutcome};
pub use row::{QueryResult, RawQueryResult, Row};
pub use sql_value::SqlValue;
pub use statement::Statement;
