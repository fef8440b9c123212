use crate::builders::{field_list, quote_identifier};

/// Builds `INSERT INTO <table> (<fields>) VALUES (?, ...)` with one
/// placeholder per field.
pub fn build_insert(table: &str, fields: &[&str]) -> String {
    let mut sql = String::with_capacity(128);

    sql.push_str("INSERT INTO ");
    sql.push_str(&quote_identifier(table));
    sql.push_str(" (");
    sql.push_str(&field_list(fields));
    sql.push_str(") VALUES (");
    sql.push_str(&vec!["?"; fields.len()].join(", "));
    sql.push(')');

    sql
}

/// Builds the insert statement followed by
/// `ON DUPLICATE KEY UPDATE f = VALUES(f), ...` for every listed field.
///
/// Columns not in `fields` keep whatever the existing row holds.
pub fn build_upsert(table: &str, fields: &[&str]) -> String {
    let mut sql = build_insert(table, fields);

    sql.push_str(" ON DUPLICATE KEY UPDATE ");
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            sql.push_str(", ");
        }
        let quoted = quote_identifier(field);
        sql.push_str(&quoted);
        sql.push_str(" = VALUES(");
        sql.push_str(&quoted);
        sql.push(')');
    }

    sql
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_insert() {
        let sql = build_insert("ComplexTable", &["itemId", "date", "field1"]);

        assert_eq!(
            sql,
            "INSERT INTO `ComplexTable` (`itemId`, `date`, `field1`) VALUES (?, ?, ?)"
        );
    }

    #[test]
    fn test_placeholder_count_matches_fields() {
        let fields = ["a", "b", "c", "d", "e", "f", "g", "h", "i"];
        let sql = build_insert("t", &fields);

        assert_eq!(sql.matches('?').count(), fields.len());
    }

    #[test]
    fn test_build_upsert() {
        let sql = build_upsert("BasicTable", &["basic"]);

        assert_eq!(
            sql,
            "INSERT INTO `BasicTable` (`basic`) VALUES (?) \
             ON DUPLICATE KEY UPDATE `basic` = VALUES(`basic`)"
        );
    }

    #[test]
    fn test_upsert_assigns_every_field() {
        let sql = build_upsert("ComplexTable", &["itemId", "field1"]);

        assert!(sql.ends_with(
            "ON DUPLICATE KEY UPDATE `itemId` = VALUES(`itemId`), `field1` = VALUES(`field1`)"
        ));
    }

    #[test]
    fn test_identifiers_are_quoted() {
        let sql = build_insert("my`table", &["we`ird"]);

        assert_eq!(sql, "INSERT INTO `my``table` (`we``ird`) VALUES (?)");
    }
}
