use crate::dialect::Dialect;

/// A [`Dialect`] for [SQLite](https://www.sqlite.org).
///
/// This dialect allows columns in a `CREATE TABLE` to omit a declared type,
/// and accepts all three identifier quoting styles.
#[derive(Debug, Default)]
pub struct SQLiteDialect {}

impl Dialect for SQLiteDialect {
    // See https://www.sqlite.org/lang_keywords.html
    fn is_delimited_identifier_start(&self, ch: char) -> bool {
        ch == '`' || ch == '"' || ch == '['
    }

    fn is_identifier_start(&self, ch: char) -> bool {
        ch.is_ascii_alphabetic() || ch == '_' || ch == '$' || ('\u{007f}'..='\u{ffff}').contains(&ch)
    }

    fn is_identifier_part(&self, ch: char) -> bool {
        self.is_identifier_start(ch) || ch.is_ascii_digit()
    }
}
