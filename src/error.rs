use thiserror::Error;

/// MySQL server error codes that signal a unique-key violation.
const ER_DUP_ENTRY: u16 = 1062;
const ER_DUP_ENTRY_WITH_KEY_NAME: u16 = 1586;

/// Error type for mysqltoolkit operations
#[derive(Debug, Error)]
pub enum ToolkitError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Connection is closed")]
    ConnectionClosed,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Query failed: {0}")]
    QueryFailed(String),

    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    #[error("Expected {expected} parameter(s), got {actual}")]
    ParameterCountMismatch { expected: usize, actual: usize },

    #[error("Value out of range: {0}")]
    ValueOutOfRange(String),

    #[error("Field list is empty")]
    EmptyFieldList,

    #[error("Expected {expected} row(s), got {actual}")]
    UnexpectedRowCount { expected: usize, actual: usize },

    #[error("Column not found: {0}")]
    ColumnNotFound(String),
}

impl ToolkitError {
    /// Whether this error is a unique-key violation reported by the server.
    pub fn is_duplicate_key(&self) -> bool {
        matches!(self, Self::DuplicateKey(_))
    }

    /// Classify a statement error coming out of mysql_async.
    pub fn from_mysql(err: mysql_async::Error) -> Self {
        match err {
            mysql_async::Error::Server(ref server) => match server.code {
                ER_DUP_ENTRY | ER_DUP_ENTRY_WITH_KEY_NAME => {
                    Self::DuplicateKey(server.message.clone())
                }
                _ => Self::QueryFailed(err.to_string()),
            },
            mysql_async::Error::Driver(mysql_async::DriverError::StmtParamsMismatch {
                required,
                supplied,
            }) => Self::ParameterCountMismatch {
                expected: required as usize,
                actual: supplied as usize,
            },
            other => Self::QueryFailed(other.to_string()),
        }
    }
}

impl From<url::ParseError> for ToolkitError {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidConfig(err.to_string())
    }
}

/// Result type alias for mysqltoolkit operations
pub type Result<T> = std::result::Result<T, ToolkitError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn server_error(code: u16, message: &str) -> mysql_async::Error {
        mysql_async::Error::Server(mysql_async::ServerError {
            code,
            message: message.to_string(),
            state: "23000".to_string(),
        })
    }

    #[test]
    fn test_duplicate_entry_is_classified() {
        let err = ToolkitError::from_mysql(server_error(
            1062,
            "Duplicate entry 'DS_2-2020-03-13' for key 'item_id_date'",
        ));
        assert!(err.is_duplicate_key());
        assert!(err.to_string().contains("item_id_date"));
    }

    #[test]
    fn test_other_server_errors_are_query_failures() {
        let err = ToolkitError::from_mysql(server_error(1146, "Table 'db.Nope' doesn't exist"));
        assert!(!err.is_duplicate_key());
        assert!(matches!(err, ToolkitError::QueryFailed(_)));
    }

    #[test]
    fn test_params_mismatch_is_classified() {
        let err = ToolkitError::from_mysql(mysql_async::Error::Driver(
            mysql_async::DriverError::StmtParamsMismatch {
                required: 3,
                supplied: 2,
            },
        ));
        match err {
            ToolkitError::ParameterCountMismatch { expected, actual } => {
                assert_eq!(expected, 3);
                assert_eq!(actual, 2);
            }
            _ => panic!("Expected ParameterCountMismatch error"),
        }
    }
}
