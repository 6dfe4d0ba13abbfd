use crate::dialect::Dialect;

/// A [`Dialect`] for [Microsoft SQL Server](https://www.microsoft.com/en-us/sql-server/).
#[derive(Debug, Default)]
pub struct MsSqlDialect {}

impl Dialect for MsSqlDialect {
    fn is_delimited_identifier_start(&self, ch: char) -> bool {
        ch == '"' || ch == '['
    }

    fn is_identifier_start(&self, ch: char) -> bool {
        // Names starting with `@` are variables, names starting with `#`
        // are temporary objects; both lex as words.
        ch.is_alphabetic() || ch == '_' || ch == '#' || ch == '@'
    }

    fn is_identifier_part(&self, ch: char) -> bool {
        ch.is_alphanumeric() || ch == '@' || ch == '$' || ch == '#' || ch == '_'
    }

    fn supports_named_fn_args_with_eq_operator(&self) -> bool {
        true
    }
}
