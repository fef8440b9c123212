/// Quotes a MySQL identifier (table or column name) for interpolation into
/// SQL text.
///
/// The name is wrapped in backticks and any embedded backtick is doubled, so
/// the result always parses as exactly one identifier.
pub fn quote_identifier(name: &str) -> String {
    let mut quoted = String::with_capacity(name.len() + 2);
    quoted.push('`');
    for c in name.chars() {
        if c == '`' {
            quoted.push('`');
        }
        quoted.push(c);
    }
    quoted.push('`');
    quoted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_name() {
        assert_eq!(quote_identifier("ComplexTable"), "`ComplexTable`");
    }

    #[test]
    fn test_embedded_backtick_is_doubled() {
        assert_eq!(
            quote_identifier("x` ; DROP TABLE t; --"),
            "`x`` ; DROP TABLE t; --`"
        );
    }

    #[test]
    fn test_quotes_and_backslashes_stay_inside() {
        assert_eq!(quote_identifier(r#"a"b\c'"#), r#"`a"b\c'`"#);
    }
}
