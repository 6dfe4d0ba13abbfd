use crate::dialect::Dialect;

/// A [`Dialect`] for the strict ANSI SQL:2016 grammar, with no vendor
/// extensions enabled.
#[derive(Debug, Default)]
pub struct AnsiDialect {}

impl Dialect for AnsiDialect {
    fn is_identifier_start(&self, ch: char) -> bool {
        ch.is_ascii_alphabetic()
    }

    fn is_identifier_part(&self, ch: char) -> bool {
        ch.is_ascii_alphanumeric() || ch == '_'
    }

    fn require_interval_qualifier(&self) -> bool {
        true
    }
}
