use crate::builders::{field_list, quote_identifier};
use crate::clauses::Filter;
use crate::types::Statement;

/// Builds `SELECT <fields> FROM <table> [WHERE f1 AND f2 ...]`.
///
/// Raw filters go into the statement verbatim; structured ones contribute
/// their bound values to the returned statement's params.
pub fn build_select(table: &str, fields: &[&str], filters: &[Filter]) -> Statement {
    let mut sql = String::with_capacity(256);
    let mut params = Vec::new();

    // SELECT clause
    sql.push_str("SELECT ");
    sql.push_str(&field_list(fields));

    // FROM clause
    sql.push_str(" FROM ");
    sql.push_str(&quote_identifier(table));

    // WHERE clause
    if !filters.is_empty() {
        sql.push_str(" WHERE ");
        for (i, filter) in filters.iter().enumerate() {
            if i > 0 {
                sql.push_str(" AND ");
            }
            sql.push_str(&filter.build_sql(&mut params));
        }
    }

    Statement::new(sql, params)
}
