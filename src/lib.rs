//! # polysql
//!
//! polysql is a multi-dialect SQL front-end: a lexical tokenizer plus a
//! hand-written Pratt recursive-descent parser that turns a SQL source
//! string into a fully-typed abstract syntax tree. Every AST node
//! serializes back to canonical SQL through [`core::fmt::Display`], and the
//! whole tree can be walked with the visitors in [`ast::visitor`].
//!
//! The pipeline is:
//!
//! ```txt
//! source string -> Tokenizer -> tokens (with locations)
//!               -> Parser(dialect, options) -> Vec<Statement>
//!               -> Display -> canonical SQL string
//! ```
//!
//! Parsing is a pure function of `(input, dialect, options)`: dialects are
//! immutable descriptors, the parser holds no global state, and separate
//! parses can run on separate threads freely.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod ast;
pub mod dialect;
mod error;
pub mod keywords;
pub mod tokenizer;
pub mod tokens;

pub mod parser;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

pub use crate::error::{Location, ParserError, TokenizeError};
pub use crate::parser::{Parser, ParserOptions, DEFAULT_RECURSION_LIMIT};
pub use crate::tokenizer::Tokenizer;

use crate::{
    ast::{DataType, Expr, ObjectName, Statement},
    dialect::Dialect,
    tokens::Token,
};

/// Parses a SQL string, possibly containing several `;`-separated
/// statements, under the given dialect.
pub fn parse_sql(sql: &str, dialect: &dyn Dialect) -> Result<Vec<Statement>, ParserError> {
    Parser::parse_sql(dialect, sql)
}

/// Like [`parse_sql`], with explicit [`ParserOptions`].
pub fn parse_sql_with_options(
    sql: &str,
    dialect: &dyn Dialect,
    options: ParserOptions,
) -> Result<Vec<Statement>, ParserError> {
    Parser::new(dialect)
        .with_options(options)
        .try_with_sql(sql)?
        .parse_statements()
}

/// Parses a single standalone expression.
pub fn parse_expression(sql: &str, dialect: &dyn Dialect) -> Result<Expr, ParserError> {
    let mut parser = Parser::new(dialect).try_with_sql(sql)?;
    let expr = parser.parse_expr()?;
    expect_fully_consumed(&parser)?;
    Ok(expr)
}

/// Parses a single standalone data type, e.g. `NUMERIC(10, 2)`.
pub fn parse_data_type(sql: &str, dialect: &dyn Dialect) -> Result<DataType, ParserError> {
    let mut parser = Parser::new(dialect).try_with_sql(sql)?;
    let data_type = parser.parse_data_type()?;
    expect_fully_consumed(&parser)?;
    Ok(data_type)
}

/// Parses a single possibly-qualified object name, e.g. `db.schema.table`.
pub fn parse_object_name(sql: &str, dialect: &dyn Dialect) -> Result<ObjectName, ParserError> {
    let mut parser = Parser::new(dialect).try_with_sql(sql)?;
    let name = parser.parse_object_name()?;
    expect_fully_consumed(&parser)?;
    Ok(name)
}

fn expect_fully_consumed(parser: &Parser) -> Result<(), ParserError> {
    if parser.peek_token() != Token::EOF {
        parser.expected("end of input", parser.peek_token_with_location())
    } else {
        Ok(())
    }
}

/// Tokenizes a SQL string without parsing it.
pub fn tokenize(sql: &str, dialect: &dyn Dialect) -> Result<Vec<Token>, TokenizeError> {
    Tokenizer::new(dialect, sql).tokenize()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::dialect::*;

    fn all_dialects() -> Vec<Box<dyn Dialect>> {
        vec![
            Box::new(GenericDialect {}),
            Box::new(AnsiDialect {}),
            Box::new(PostgreSqlDialect {}),
            Box::new(MySqlDialect {}),
            Box::new(MsSqlDialect {}),
            Box::new(SQLiteDialect {}),
            Box::new(SnowflakeDialect {}),
            Box::new(HiveDialect {}),
            Box::new(RedshiftDialect {}),
            Box::new(BigQueryDialect {}),
            Box::new(DuckDbDialect {}),
            Box::new(ClickHouseDialect {}),
            Box::new(DatabricksDialect {}),
            Box::new(OracleDialect {}),
        ]
    }

    /// Parses under every dialect, asserting the same canonical SQL and the
    /// same AST from each.
    fn one_statement_parses_to(sql: &str, canonical: &str) -> Statement {
        let mut last: Option<Statement> = None;
        for dialect in all_dialects() {
            let statements = parse_sql(sql, dialect.as_ref())
                .unwrap_or_else(|e| panic!("{e} (dialect {dialect:?})"));
            assert_eq!(statements.len(), 1);
            assert_eq!(statements[0].to_string(), canonical, "dialect {dialect:?}");
            if let Some(prev) = &last {
                assert_eq!(prev, &statements[0], "dialect {dialect:?}");
            }
            last = Some(statements.into_iter().next().unwrap());
        }
        last.unwrap()
    }

    #[test]
    fn keyword_casing_normalizes() {
        one_statement_parses_to(
            "select id, fname, lname from customer where id = 1 limit 5",
            "SELECT id, fname, lname FROM customer WHERE id = 1 LIMIT 5",
        );
    }

    #[test]
    fn distinct_tuple_projection() {
        let statement = one_statement_parses_to(
            "SELECT DISTINCT (name, id) FROM customer",
            "SELECT DISTINCT (name, id) FROM customer",
        );
        match statement {
            Statement::Query(query) => match *query.body {
                ast::SetExpr::Select(select) => {
                    assert_eq!(select.projection.len(), 1);
                    assert!(matches!(
                        select.projection[0],
                        ast::SelectItem::UnnamedExpr(ast::Expr::Tuple(_))
                    ));
                }
                other => panic!("unexpected: {other:?}"),
            },
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn create_index_concurrently() {
        let statement = one_statement_parses_to(
            "CREATE INDEX CONCURRENTLY idx ON t (col) WHERE col > 0",
            "CREATE INDEX CONCURRENTLY idx ON t (col) WHERE col > 0",
        );
        match statement {
            Statement::CreateIndex(create_index) => {
                assert!(create_index.concurrently);
                assert!(create_index.predicate.is_some());
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn interval_year_to_month() {
        let statement = one_statement_parses_to(
            "SELECT INTERVAL '1-1' YEAR TO MONTH",
            "SELECT INTERVAL '1-1' YEAR TO MONTH",
        );
        match statement {
            Statement::Query(query) => match *query.body {
                ast::SetExpr::Select(select) => match &select.projection[0] {
                    ast::SelectItem::UnnamedExpr(ast::Expr::Interval(interval)) => {
                        assert_eq!(interval.leading_field, Some(ast::DateTimeField::Year));
                        assert_eq!(interval.last_field, Some(ast::DateTimeField::Month));
                    }
                    other => panic!("unexpected: {other:?}"),
                },
                other => panic!("unexpected: {other:?}"),
            },
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn round_trip_is_stable() {
        // parse(to_sql(parse(s))) == parse(s)
        let dialect = GenericDialect {};
        for sql in [
            "SELECT a, b FROM t WHERE a = 1 GROUP BY a HAVING COUNT(*) > 1 ORDER BY b DESC LIMIT 10 OFFSET 2",
            "WITH cte AS (SELECT 1 AS x) SELECT x FROM cte",
            "SELECT * FROM a JOIN b ON a.id = b.id LEFT JOIN c USING(id)",
            "SELECT CASE WHEN a THEN 1 ELSE 2 END FROM t",
            "INSERT INTO t (a) VALUES (1)",
            "CREATE TABLE t (a INT NOT NULL, b TEXT DEFAULT 'x', PRIMARY KEY (a))",
        ] {
            let first = parse_sql(sql, &dialect).unwrap();
            let printed = first[0].to_string();
            let second = parse_sql(&printed, &dialect).unwrap();
            assert_eq!(first, second, "{sql}");
        }
    }

    #[test]
    fn empty_statements() {
        for dialect in all_dialects() {
            assert_eq!(parse_sql("", dialect.as_ref()).unwrap(), vec![]);
            assert_eq!(parse_sql(";;", dialect.as_ref()).unwrap(), vec![]);
        }
    }

    #[test]
    fn top_level_helpers() {
        let dialect = GenericDialect {};
        assert_eq!(
            parse_expression("1 + 1", &dialect).unwrap().to_string(),
            "1 + 1"
        );
        assert_eq!(
            parse_data_type("VARCHAR(10)", &dialect).unwrap().to_string(),
            "VARCHAR(10)"
        );
        assert_eq!(
            parse_object_name("a.b.c", &dialect).unwrap().to_string(),
            "a.b.c"
        );
        assert!(!tokenize("SELECT 1", &dialect).unwrap().is_empty());
    }
}
