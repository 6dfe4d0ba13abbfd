use crate::dialect::Dialect;

/// A [`Dialect`] for [Amazon Redshift](https://aws.amazon.com/redshift/).
///
/// Redshift descends from PostgreSQL, so everything not overridden here
/// matches the PostgreSQL behavior.
#[derive(Debug, Default)]
pub struct RedshiftDialect {}

impl Dialect for RedshiftDialect {
    fn is_identifier_start(&self, ch: char) -> bool {
        // `#` starts temporary table names.
        ch.is_alphabetic() || ch == '_' || ch == '#'
    }

    fn is_identifier_part(&self, ch: char) -> bool {
        ch.is_alphanumeric() || ch == '_' || ch == '$' || ch == '#'
    }

    fn supports_group_by_expr(&self) -> bool {
        true
    }

    fn supports_connect_by(&self) -> bool {
        true
    }
}
