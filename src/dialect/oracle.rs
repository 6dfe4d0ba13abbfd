use crate::dialect::Dialect;

/// A [`Dialect`] for [Oracle Database](https://www.oracle.com/database/).
#[derive(Debug, Default)]
pub struct OracleDialect {}

impl Dialect for OracleDialect {
    fn is_identifier_start(&self, ch: char) -> bool {
        ch.is_alphabetic() || ch == '_'
    }

    fn is_identifier_part(&self, ch: char) -> bool {
        ch.is_alphanumeric() || ch == '_' || ch == '$' || ch == '#'
    }

    fn supports_connect_by(&self) -> bool {
        true
    }

    fn require_interval_qualifier(&self) -> bool {
        true
    }
}
