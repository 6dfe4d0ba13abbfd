//! Dialect descriptors.
//!
//! A [`Dialect`] is a value-like descriptor: a set of character predicates
//! consumed by the tokenizer plus feature flags consumed by the parser at
//! branch points. Concrete dialects override only what differs from the
//! defaults; the defaults are the ANSI behavior.

mod ansi;
mod bigquery;
mod clickhouse;
mod databricks;
mod duckdb;
mod generic;
mod hive;
mod mssql;
mod mysql;
mod oracle;
mod postgresql;
mod redshift;
mod snowflake;
mod sqlite;

use core::fmt::Debug;
use core::iter::Peekable;
use core::str::Chars;

pub use self::{
    ansi::AnsiDialect, bigquery::BigQueryDialect, clickhouse::ClickHouseDialect,
    databricks::DatabricksDialect, duckdb::DuckDbDialect, generic::GenericDialect,
    hive::HiveDialect, mssql::MsSqlDialect, mysql::MySqlDialect, oracle::OracleDialect,
    postgresql::PostgreSqlDialect, redshift::RedshiftDialect, snowflake::SnowflakeDialect,
    sqlite::SQLiteDialect,
};
use crate::{ast::Statement, error::ParserError, parser::Parser};

/// The lexical and grammatical variations of one SQL vendor.
///
/// Dialects carry no state besides their flags, so they are freely sharable
/// between parses.
pub trait Dialect: Debug {
    /// Determine if a character starts a quoted identifier. The default
    /// implementation, accepting "double quoted" ids is both ANSI-compliant
    /// and appropriate for most dialects (with the notable exception of
    /// MySQL, MS SQL, and sqlite). You can accept one of characters listed
    /// in `Word::matching_end_quote` here.
    fn is_delimited_identifier_start(&self, ch: char) -> bool {
        ch == '"'
    }

    /// Determine if quoted characters are proper for identifier. The default
    /// implementation treats the remainder of the input as fair game.
    fn is_proper_identifier_inside_quotes(&self, mut _chars: Peekable<Chars<'_>>) -> bool {
        true
    }

    /// Determine if a character is a valid start character for an unquoted
    /// identifier.
    fn is_identifier_start(&self, ch: char) -> bool {
        ch.is_ascii_alphabetic() || ch == '_'
    }

    /// Determine if a character is a valid unquoted identifier character.
    fn is_identifier_part(&self, ch: char) -> bool {
        ch.is_ascii_alphanumeric() || ch == '_'
    }

    /// Does the dialect fold `'string'` escapes with a backslash, MySQL
    /// style (`\n`, `\'`, `\\`, ...)?
    fn supports_string_literal_backslash_escape(&self) -> bool {
        false
    }

    /// Does `"double quoted"` text lex as a string literal rather than a
    /// delimited identifier?
    fn supports_double_quoted_string(&self) -> bool {
        false
    }

    /// Does the dialect recognize `$tag$ ... $tag$` string literals?
    fn supports_dollar_quoted_strings(&self) -> bool {
        false
    }

    /// Does the dialect recognize `E'...'` escaped string literals?
    fn supports_escaped_string_literal(&self) -> bool {
        false
    }

    /// Does the dialect recognize `R'...'` raw string literals?
    fn supports_raw_string_literal(&self) -> bool {
        false
    }

    /// Does `#` introduce an inline comment? Only consulted when `#` is not
    /// an identifier start for the dialect.
    fn supports_hash_comment(&self) -> bool {
        false
    }

    /// Does `//` introduce an inline comment (Snowflake)?
    fn supports_double_slash_comment(&self) -> bool {
        false
    }

    /// Do digits followed by identifier characters re-attach into a word
    /// (MySQL, Hive)?
    fn supports_numeric_prefix(&self) -> bool {
        false
    }

    /// Are trailing commas accepted in projection and similar lists?
    fn supports_trailing_commas(&self) -> bool {
        false
    }

    /// Are `GROUPING SETS`, `ROLLUP` and `CUBE` accepted after `GROUP BY`?
    fn supports_group_by_expr(&self) -> bool {
        false
    }

    /// Is `FILTER (WHERE ...)` accepted after an aggregate function call?
    fn supports_filter_during_aggregation(&self) -> bool {
        false
    }

    /// Is the `{'key': value}` dictionary literal syntax accepted (DuckDB)?
    fn supports_dictionary_syntax(&self) -> bool {
        false
    }

    /// May a window specification reference a named window
    /// (`OVER (name ...)`)?
    fn supports_window_clause_named_window_reference(&self) -> bool {
        false
    }

    /// Are named function arguments with `=` accepted in addition to `=>`?
    fn supports_named_fn_args_with_eq_operator(&self) -> bool {
        false
    }

    /// Is the `MATCH_RECOGNIZE` table factor accepted?
    fn supports_match_recognize(&self) -> bool {
        false
    }

    /// Are `CONNECT BY ... START WITH ...` hierarchical queries accepted?
    fn supports_connect_by(&self) -> bool {
        false
    }

    /// Is `SELECT * EXCEPT (...) REPLACE (...)` accepted?
    fn supports_select_wildcard_except(&self) -> bool {
        false
    }

    /// Is `SET (a, b) = (1, 2)` accepted?
    fn supports_parenthesized_set_variables(&self) -> bool {
        false
    }

    /// Is the `MAP {key: value}` literal syntax accepted (DuckDB)?
    fn support_map_literal_syntax(&self) -> bool {
        false
    }

    /// Is `CREATE INDEX ... WITH (...)` accepted (PostgreSQL)?
    fn supports_create_index_with_clause(&self) -> bool {
        false
    }

    /// Is `EXPLAIN (ANALYZE, VERBOSE, ...)` accepted (PostgreSQL)?
    fn supports_explain_with_utility_options(&self) -> bool {
        false
    }

    /// Must `INTERVAL` literals carry an explicit unit qualifier?
    fn require_interval_qualifier(&self) -> bool {
        false
    }

    /// May `EXTRACT` take an arbitrary identifier as its field?
    fn allow_extract_custom(&self) -> bool {
        false
    }

    /// May the `EXTRACT` field be single-quoted?
    fn allow_extract_single_quotes(&self) -> bool {
        false
    }

    /// Dialect-specific statement parser override.
    ///
    /// When this returns `Some`, the parser delegates the whole statement to
    /// the dialect and short-circuits its own dispatch.
    fn parse_statement(&self, _parser: &mut Parser) -> Option<Result<Statement, ParserError>> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ansi_predicates() {
        let dialect = AnsiDialect {};
        assert!(dialect.is_identifier_start('a'));
        assert!(!dialect.is_identifier_start('1'));
        assert!(dialect.is_identifier_part('1'));
        assert!(dialect.is_delimited_identifier_start('"'));
        assert!(!dialect.is_delimited_identifier_start('`'));
    }

    #[test]
    fn overrides_are_local() {
        // MySQL swaps the identifier quote but inherits everything else.
        let dialect = MySqlDialect {};
        assert!(dialect.is_delimited_identifier_start('`'));
        assert!(dialect.supports_string_literal_backslash_escape());
        assert!(!dialect.supports_match_recognize());
    }
}
