use crate::builders::quote_identifier;
use crate::types::SqlValue;

/// Comparison operator for a structured filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl Comparison {
    fn as_sql(self) -> &'static str {
        match self {
            Comparison::Eq => "=",
            Comparison::Ne => "<>",
            Comparison::Lt => "<",
            Comparison::Le => "<=",
            Comparison::Gt => ">",
            Comparison::Ge => ">=",
        }
    }
}

/// One predicate of a SELECT's WHERE clause.
///
/// Top-level filters handed to a select are joined with `AND`.
///
/// [`Filter::Raw`] is emitted into the statement verbatim: it is neither
/// escaped nor parameterized, so the caller owns any quoting of the values
/// inside it and must never build one from untrusted input. A raw predicate
/// containing `OR` should carry its own parentheses. The structured variants
/// quote their field and bind their value.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// Raw SQL boolean expression, e.g. `itemId = "DS_0"`
    Raw(String),
    /// field <op> value
    Compare(String, Comparison, SqlValue),
    /// field IS NULL
    IsNull(String),
    /// field IS NOT NULL
    IsNotNull(String),
    /// filter AND filter
    And(Box<Filter>, Box<Filter>),
    /// filter OR filter
    Or(Box<Filter>, Box<Filter>),
}

impl Filter {
    pub fn raw(sql: impl Into<String>) -> Self {
        Filter::Raw(sql.into())
    }

    /// Creates an equality condition: field = value
    pub fn eq<V: Into<SqlValue>>(field: impl Into<String>, value: V) -> Self {
        Filter::Compare(field.into(), Comparison::Eq, value.into())
    }

    pub fn ne<V: Into<SqlValue>>(field: impl Into<String>, value: V) -> Self {
        Filter::Compare(field.into(), Comparison::Ne, value.into())
    }

    pub fn lt<V: Into<SqlValue>>(field: impl Into<String>, value: V) -> Self {
        Filter::Compare(field.into(), Comparison::Lt, value.into())
    }

    pub fn le<V: Into<SqlValue>>(field: impl Into<String>, value: V) -> Self {
        Filter::Compare(field.into(), Comparison::Le, value.into())
    }

    pub fn gt<V: Into<SqlValue>>(field: impl Into<String>, value: V) -> Self {
        Filter::Compare(field.into(), Comparison::Gt, value.into())
    }

    pub fn ge<V: Into<SqlValue>>(field: impl Into<String>, value: V) -> Self {
        Filter::Compare(field.into(), Comparison::Ge, value.into())
    }

    pub fn is_null(field: impl Into<String>) -> Self {
        Filter::IsNull(field.into())
    }

    pub fn is_not_null(field: impl Into<String>) -> Self {
        Filter::IsNotNull(field.into())
    }

    /// Combines this filter with another using AND
    pub fn and(self, other: Filter) -> Self {
        Filter::And(Box::new(self), Box::new(other))
    }

    /// Combines this filter with another using OR
    pub fn or(self, other: Filter) -> Self {
        Filter::Or(Box::new(self), Box::new(other))
    }

    /// Builds the SQL fragment, appending bound values to `params` in
    /// placeholder order.
    pub fn build_sql(&self, params: &mut Vec<SqlValue>) -> String {
        match self {
            Filter::Raw(sql) => sql.clone(),
            Filter::Compare(field, op, value) => {
                params.push(value.clone());
                format!("{} {} ?", quote_identifier(field), op.as_sql())
            }
            Filter::IsNull(field) => format!("{} IS NULL", quote_identifier(field)),
            Filter::IsNotNull(field) => format!("{} IS NOT NULL", quote_identifier(field)),
            Filter::And(left, right) => {
                let left_sql = left.build_sql(params);
                let right_sql = right.build_sql(params);
                format!("({}) AND ({})", left_sql, right_sql)
            }
            Filter::Or(left, right) => {
                let left_sql = left.build_sql(params);
                let right_sql = right.build_sql(params);
                format!("({}) OR ({})", left_sql, right_sql)
            }
        }
    }
}

impl From<&str> for Filter {
    fn from(value: &str) -> Self {
        Filter::Raw(value.to_string())
    }
}

impl From<String> for Filter {
    fn from(value: String) -> Self {
        Filter::Raw(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_filter_is_verbatim() {
        let mut params = Vec::new();
        let sql = Filter::raw(r#"itemId="DS_0""#).build_sql(&mut params);

        assert_eq!(sql, r#"itemId="DS_0""#);
        assert!(params.is_empty());
    }

    #[test]
    fn test_eq_filter() {
        let mut params = Vec::new();
        let sql = Filter::eq("itemId", "DS_0").build_sql(&mut params);

        assert_eq!(sql, "`itemId` = ?");
        assert_eq!(params, vec![SqlValue::Text("DS_0".to_string())]);
    }

    #[test]
    fn test_or_inside_and() {
        let filter = Filter::eq("itemId", "DS_0")
            .or(Filter::eq("itemId", "DS_1"))
            .and(Filter::ge("field1", 2));

        let mut params = Vec::new();
        let sql = filter.build_sql(&mut params);

        assert_eq!(
            sql,
            "((`itemId` = ?) OR (`itemId` = ?)) AND (`field1` >= ?)"
        );
        assert_eq!(
            params,
            vec![
                SqlValue::from("DS_0"),
                SqlValue::from("DS_1"),
                SqlValue::Int(2)
            ]
        );
    }

    #[test]
    fn test_null_checks_bind_nothing() {
        let mut params = Vec::new();
        let sql = Filter::is_null("field5")
            .and(Filter::is_not_null("field6"))
            .build_sql(&mut params);

        assert_eq!(sql, "(`field5` IS NULL) AND (`field6` IS NOT NULL)");
        assert!(params.is_empty());
    }

    #[test]
    fn test_field_name_is_quoted() {
        let mut params = Vec::new();
        let sql = Filter::ne("odd`name", 1).build_sql(&mut params);

        assert_eq!(sql, "`odd``name` <> ?");
    }
}
