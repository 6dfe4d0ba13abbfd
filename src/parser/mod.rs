//! SQL parser.
//!
//! A hand-written Pratt (precedence-climbing) recursive-descent parser over
//! the token stream produced by [`Tokenizer`]. Parsing is a pure function of
//! `(input, dialect, options)`; the parser holds no state beyond its token
//! cursor and the bounded-recursion counter.

mod ddl;
mod dml;
mod expression;
mod query;
mod statement;
mod types;

#[cfg(not(feature = "std"))]
use alloc::{
    boxed::Box,
    format,
    rc::Rc,
    string::{String, ToString},
    vec,
    vec::Vec,
};
use core::cell::Cell;
use core::fmt::Display;
#[cfg(feature = "std")]
use std::rc::Rc;

use log::debug;

use crate::{
    ast::*,
    dialect::Dialect,
    error::{parse_error, Location, ParserError},
    keywords::{Keyword, RESERVED_FOR_COLUMN_ALIAS, RESERVED_FOR_TABLE_ALIAS},
    tokenizer::Tokenizer,
    tokens::{Token, TokenWithLocation, Word},
};

/// The default number of nested expression/query levels the parser accepts
/// before failing with [`ParserError::RecursionLimitExceeded`].
pub const DEFAULT_RECURSION_LIMIT: u32 = 50;

/// Options that alter the parser's behavior independently of the dialect.
#[derive(Clone, Copy, Debug)]
pub struct ParserOptions {
    /// Accept trailing commas in projection and similar lists. OR-combined
    /// with the dialect's `supports_trailing_commas()`.
    pub trailing_commas: bool,
    /// Fold `''` and backslash escape sequences in string literals. When
    /// false the escape sequences are preserved byte-for-byte.
    pub unescape: bool,
    /// The recursion depth guard.
    pub recursion_limit: u32,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            trailing_commas: false,
            unescape: true,
            recursion_limit: DEFAULT_RECURSION_LIMIT,
        }
    }
}

/// Tracks the remaining recursion depth. Cloned into a [`DepthGuard`] on
/// every descent so the depth is restored on all exit paths.
struct RecursionCounter {
    remaining_depth: Rc<Cell<u32>>,
}

impl RecursionCounter {
    fn new(limit: u32) -> Self {
        Self {
            remaining_depth: Rc::new(Cell::new(limit)),
        }
    }

    /// Decrements the remaining depth; the returned guard restores it when
    /// dropped.
    fn try_decrease(&self) -> Result<DepthGuard, ParserError> {
        let old_value = self.remaining_depth.get();
        if old_value == 0 {
            Err(ParserError::RecursionLimitExceeded)
        } else {
            self.remaining_depth.set(old_value - 1);
            Ok(DepthGuard {
                remaining_depth: Rc::clone(&self.remaining_depth),
            })
        }
    }
}

struct DepthGuard {
    remaining_depth: Rc<Cell<u32>>,
}

impl Drop for DepthGuard {
    fn drop(&mut self) {
        let old_value = self.remaining_depth.get();
        self.remaining_depth.set(old_value + 1);
    }
}

/// SQL parser.
pub struct Parser<'a> {
    tokens: Vec<TokenWithLocation>,
    /// The index of the first unprocessed token in `tokens`.
    index: usize,
    dialect: &'a dyn Dialect,
    options: ParserOptions,
    recursion_counter: RecursionCounter,
}

impl<'a> Parser<'a> {
    /// Creates a parser for the given dialect with no tokens loaded.
    pub fn new(dialect: &'a dyn Dialect) -> Self {
        Self {
            tokens: vec![],
            index: 0,
            dialect,
            options: ParserOptions::default(),
            recursion_counter: RecursionCounter::new(DEFAULT_RECURSION_LIMIT),
        }
    }

    /// Replaces the parser options.
    pub fn with_options(mut self, options: ParserOptions) -> Self {
        self.options = options;
        self.recursion_counter = RecursionCounter::new(options.recursion_limit);
        self
    }

    /// Loads a token stream, discarding whitespace and comments.
    pub fn with_tokens(mut self, tokens: Vec<TokenWithLocation>) -> Self {
        self.tokens = tokens
            .into_iter()
            .filter(|t| !t.token.is_whitespace())
            .collect();
        self.index = 0;
        self
    }

    /// Tokenizes the given SQL and loads the tokens.
    pub fn try_with_sql(self, sql: &str) -> Result<Self, ParserError> {
        debug!("Parsing sql '{sql}'...");
        let tokens = Tokenizer::new(self.dialect, sql)
            .with_unescape(self.options.unescape)
            .tokenize_with_location()?;
        Ok(self.with_tokens(tokens))
    }

    /// Parses a SQL string, possibly containing multiple statements, into a
    /// list of statements.
    pub fn parse_sql(dialect: &dyn Dialect, sql: &str) -> Result<Vec<Statement>, ParserError> {
        Parser::new(dialect).try_with_sql(sql)?.parse_statements()
    }

    /// Parses a `;`-delimited sequence of statements. Empty input and stray
    /// semicolons are fine and yield an empty list.
    pub fn parse_statements(&mut self) -> Result<Vec<Statement>, ParserError> {
        let mut statements = vec![];
        let mut expecting_statement_delimiter = false;
        loop {
            // ignore empty statements (between successive statement delimiters)
            while self.consume_token(&Token::SemiColon) {
                expecting_statement_delimiter = false;
            }
            if self.peek_token() == Token::EOF {
                break;
            }
            if expecting_statement_delimiter {
                return self.expected("end of statement", self.peek_token_with_location());
            }
            statements.push(self.parse_statement()?);
            expecting_statement_delimiter = true;
        }
        Ok(statements)
    }

    /// Parses a single top-level statement, dispatching on its first
    /// keyword. Custom dialects may take over the whole statement through
    /// [`Dialect::parse_statement`].
    pub fn parse_statement(&mut self) -> Result<Statement, ParserError> {
        let _guard = self.recursion_counter.try_decrease()?;
        let dialect = self.dialect;
        if let Some(statement) = dialect.parse_statement(self) {
            return statement;
        }

        let token = self.next_token_with_location();
        debug!("parsing statement, got token {token}");
        match &token.token {
            Token::Word(w) => match w.keyword {
                Some(Keyword::SELECT) | Some(Keyword::WITH) | Some(Keyword::VALUES) => {
                    self.prev_token();
                    Ok(Statement::Query(Box::new(self.parse_query()?)))
                }
                Some(Keyword::EXPLAIN) => self.parse_explain(false),
                Some(Keyword::DESCRIBE) | Some(Keyword::DESC) => self.parse_explain(true),
                Some(Keyword::INSERT) => self.parse_insert(false),
                Some(Keyword::REPLACE) => self.parse_insert(true),
                Some(Keyword::UPDATE) => self.parse_update(),
                Some(Keyword::DELETE) => self.parse_delete(),
                Some(Keyword::MERGE) => self.parse_merge(),
                Some(Keyword::CREATE) => self.parse_create(),
                Some(Keyword::ALTER) => self.parse_alter(),
                Some(Keyword::DROP) => self.parse_drop(),
                Some(Keyword::TRUNCATE) => self.parse_truncate(),
                Some(Keyword::GRANT) => self.parse_grant(),
                Some(Keyword::REVOKE) => self.parse_revoke(),
                Some(Keyword::DENY) => self.parse_deny(),
                Some(Keyword::BEGIN) => self.parse_begin(),
                Some(Keyword::START) => self.parse_start_transaction(),
                Some(Keyword::COMMIT) => self.parse_commit(),
                Some(Keyword::ROLLBACK) => self.parse_rollback(),
                Some(Keyword::SAVEPOINT) => {
                    let name = self.parse_identifier()?;
                    Ok(Statement::Savepoint { name })
                }
                Some(Keyword::RELEASE) => {
                    let _ = self.parse_keyword(Keyword::SAVEPOINT);
                    let name = self.parse_identifier()?;
                    Ok(Statement::ReleaseSavepoint { name })
                }
                Some(Keyword::SET) => self.parse_set(),
                Some(Keyword::RESET) => self.parse_reset(),
                Some(Keyword::SHOW) => self.parse_show(),
                Some(Keyword::DISCARD) => self.parse_discard(),
                Some(Keyword::USE) => {
                    let db_name = self.parse_identifier()?;
                    Ok(Statement::Use { db_name })
                }
                Some(Keyword::COMMENT) => self.parse_comment(),
                Some(Keyword::CACHE) => self.parse_cache_table(),
                Some(Keyword::UNCACHE) => self.parse_uncache_table(),
                Some(Keyword::LISTEN) => {
                    let channel = self.parse_identifier()?;
                    Ok(Statement::Listen { channel })
                }
                Some(Keyword::NOTIFY) => self.parse_notify(),
                Some(Keyword::PREPARE) => self.parse_prepare(),
                Some(Keyword::EXECUTE) => self.parse_execute(),
                Some(Keyword::DEALLOCATE) => self.parse_deallocate(),
                Some(Keyword::VACUUM) => self.parse_vacuum(),
                Some(Keyword::RAISE) => self.parse_raise(),
                Some(Keyword::RAISERROR) => self.parse_raiserror(),
                Some(Keyword::PRINT) => {
                    let message = Box::new(self.parse_expr()?);
                    Ok(Statement::Print { message })
                }
                Some(Keyword::CALL) => self.parse_call(),
                Some(Keyword::ASSERT) => self.parse_assert(),
                Some(Keyword::LOCK) => self.parse_lock_tables(),
                Some(Keyword::COPY) => self.parse_copy(),
                Some(Keyword::UNLOAD) => self.parse_unload(),
                Some(Keyword::IF) => self.parse_if(),
                Some(Keyword::WHILE) => self.parse_while(),
                Some(Keyword::CASE) => self.parse_case_statement(),
                _ => self.expected("a SQL statement", token),
            },
            Token::LParen => {
                self.prev_token();
                Ok(Statement::Query(Box::new(self.parse_query()?)))
            }
            _ => self.expected("a SQL statement", token),
        }
    }

    /// Parses an `EXPLAIN` / `DESCRIBE` statement, rejecting nested
    /// `EXPLAIN`s.
    fn parse_explain(&mut self, describe_alias: bool) -> Result<Statement, ParserError> {
        let options = if self.dialect.supports_explain_with_utility_options()
            && self.peek_token() == Token::LParen
        {
            Some(self.parse_utility_options()?)
        } else {
            None
        };
        let analyze = self.parse_keyword(Keyword::ANALYZE);
        let verbose = self.parse_keyword(Keyword::VERBOSE);
        let format = if self.parse_keyword(Keyword::FORMAT) {
            Some(self.parse_analyze_format()?)
        } else {
            None
        };

        match self.maybe_parse(|parser| parser.parse_statement()) {
            Some(Statement::Explain { .. }) | Some(Statement::ExplainTable { .. }) => {
                parse_error("Explain must be root of the plan.")
            }
            Some(statement) => Ok(Statement::Explain {
                describe_alias,
                analyze,
                verbose,
                statement: Box::new(statement),
                format,
                options,
            }),
            None => {
                let table_name = self.parse_object_name()?;
                Ok(Statement::ExplainTable {
                    describe_alias,
                    table_name,
                })
            }
        }
    }

    // ========================================================================
    // Token cursor
    // ========================================================================

    /// Returns the next non-whitespace token without advancing.
    pub fn peek_token(&self) -> Token {
        self.peek_nth_token(0)
    }

    /// Returns the next token with its location, without advancing.
    pub fn peek_token_with_location(&self) -> TokenWithLocation {
        match self.tokens.get(self.index) {
            Some(token) => token.clone(),
            None => TokenWithLocation::eof(self.eof_location()),
        }
    }

    /// Returns the `n`th upcoming token without advancing.
    pub fn peek_nth_token(&self, n: usize) -> Token {
        match self.tokens.get(self.index + n) {
            Some(token) => token.token.clone(),
            None => Token::EOF,
        }
    }

    /// Consumes and returns the next token.
    pub fn next_token(&mut self) -> Token {
        self.next_token_with_location().token
    }

    /// Consumes and returns the next token with its location. Advancing past
    /// the end keeps returning EOF; [`Parser::prev_token`] undoes each step.
    pub fn next_token_with_location(&mut self) -> TokenWithLocation {
        let token = self
            .tokens
            .get(self.index)
            .cloned()
            .unwrap_or_else(|| TokenWithLocation::eof(self.eof_location()));
        self.index += 1;
        token
    }

    /// Steps the cursor back one token. Must not be called more times than
    /// [`Parser::next_token`] was.
    pub fn prev_token(&mut self) {
        assert!(self.index > 0, "prev_token before any next_token");
        self.index -= 1;
    }

    fn eof_location(&self) -> Location {
        self.tokens
            .last()
            .map(|t| t.location)
            .unwrap_or_default()
    }

    /// Consumes the next token if it equals `expected` and reports whether
    /// it did.
    pub fn consume_token(&mut self, expected: &Token) -> bool {
        if self.peek_token() == *expected {
            self.index += 1;
            true
        } else {
            false
        }
    }

    /// Consumes the next token, failing unless it equals `expected`.
    pub fn expect_token(&mut self, expected: &Token) -> Result<(), ParserError> {
        if self.consume_token(expected) {
            Ok(())
        } else {
            self.expected(&expected.to_string(), self.peek_token_with_location())
        }
    }

    /// Reports an unexpected token.
    pub fn expected<T>(
        &self,
        expected: impl Display,
        found: TokenWithLocation,
    ) -> Result<T, ParserError> {
        parse_error(format!("Expected {expected}, found {found}"))
    }

    /// Consumes the next token if it is the given keyword.
    pub fn parse_keyword(&mut self, expected: Keyword) -> bool {
        match self.peek_token() {
            Token::Word(w) if w.keyword == Some(expected) => {
                self.index += 1;
                true
            }
            _ => false,
        }
    }

    /// Consumes the given keyword sequence entirely, or nothing at all.
    pub fn parse_keywords(&mut self, keywords: &[Keyword]) -> bool {
        let index = self.index;
        for &keyword in keywords {
            if !self.parse_keyword(keyword) {
                // roll back, no match
                self.index = index;
                return false;
            }
        }
        true
    }

    /// Consumes the next keyword token if it is one of `keywords`.
    pub fn parse_one_of_keywords(&mut self, keywords: &[Keyword]) -> Option<Keyword> {
        match self.peek_token() {
            Token::Word(w) => match w.keyword {
                Some(keyword) if keywords.contains(&keyword) => {
                    self.index += 1;
                    Some(keyword)
                }
                _ => None,
            },
            _ => None,
        }
    }

    /// Consumes the next keyword token, failing unless it is `expected`.
    pub fn expect_keyword(&mut self, expected: Keyword) -> Result<(), ParserError> {
        if self.parse_keyword(expected) {
            Ok(())
        } else {
            self.expected(expected, self.peek_token_with_location())
        }
    }

    /// Consumes the given keyword sequence, failing on the first mismatch.
    pub fn expect_keywords(&mut self, expected: &[Keyword]) -> Result<(), ParserError> {
        for &kw in expected {
            self.expect_keyword(kw)?;
        }
        Ok(())
    }

    /// Consumes the next keyword token, failing unless it is one of
    /// `keywords`.
    pub fn expect_one_of_keywords(&mut self, keywords: &[Keyword]) -> Result<Keyword, ParserError> {
        if let Some(keyword) = self.parse_one_of_keywords(keywords) {
            Ok(keyword)
        } else {
            self.expected(
                format!("one of {}", display_comma_separated_keywords(keywords)),
                self.peek_token_with_location(),
            )
        }
    }

    /// Runs `f`, rolling the cursor back and returning `None` if it fails.
    pub fn maybe_parse<T>(
        &mut self,
        f: impl FnOnce(&mut Parser<'a>) -> Result<T, ParserError>,
    ) -> Option<T> {
        let index = self.index;
        match f(self) {
            Ok(value) => Some(value),
            Err(_) => {
                self.index = index;
                None
            }
        }
    }

    pub(crate) fn recursion_guard(&self) -> Result<impl Drop, ParserError> {
        self.recursion_counter.try_decrease()
    }

    // ========================================================================
    // List helpers
    // ========================================================================

    pub(crate) fn trailing_commas_allowed(&self) -> bool {
        self.options.trailing_commas || self.dialect.supports_trailing_commas()
    }

    /// Parses a comma-separated list of 1+ items accepted by `f`. When
    /// trailing commas are enabled, a comma followed by a list terminator
    /// ends the list.
    pub fn parse_comma_separated<T>(
        &mut self,
        mut f: impl FnMut(&mut Parser<'a>) -> Result<T, ParserError>,
    ) -> Result<Vec<T>, ParserError> {
        let mut values = vec![];
        loop {
            values.push(f(self)?);
            if !self.consume_token(&Token::Comma) {
                break;
            }
            if self.trailing_commas_allowed() {
                match self.peek_token() {
                    Token::RParen
                    | Token::RBracket
                    | Token::RBrace
                    | Token::SemiColon
                    | Token::EOF => break,
                    Token::Word(w)
                        if matches!(w.keyword, Some(kw) if RESERVED_FOR_COLUMN_ALIAS.contains(&kw)) =>
                    {
                        break
                    }
                    _ => continue,
                }
            }
        }
        Ok(values)
    }

    /// Parses `( <ident> [, ...] )`; with `optional` the whole list may be
    /// absent, with `allow_empty` the parens may be empty.
    pub fn parse_parenthesized_column_list(
        &mut self,
        optional: bool,
        allow_empty: bool,
    ) -> Result<Vec<Ident>, ParserError> {
        if self.consume_token(&Token::LParen) {
            if allow_empty && self.consume_token(&Token::RParen) {
                Ok(vec![])
            } else {
                let cols = self.parse_comma_separated(|parser| parser.parse_identifier())?;
                self.expect_token(&Token::RParen)?;
                Ok(cols)
            }
        } else if optional {
            Ok(vec![])
        } else {
            self.expected("a list of columns in parentheses", self.peek_token_with_location())
        }
    }

    // ========================================================================
    // Aliases
    // ========================================================================

    /// Parses `AS <alias>` or a bare alias word, where a bare word is only
    /// treated as an alias if it is not one of `reserved_kwds`.
    pub fn parse_optional_alias(
        &mut self,
        reserved_kwds: &[Keyword],
    ) -> Result<Option<Ident>, ParserError> {
        let after_as = self.parse_keyword(Keyword::AS);
        let token = self.next_token_with_location();
        match &token.token {
            Token::Word(w)
                if after_as || !matches!(w.keyword, Some(kw) if reserved_kwds.contains(&kw)) =>
            {
                Ok(Some(Ident {
                    value: w.value.clone(),
                    quote_style: w.quote_style,
                }))
            }
            // MSSQL supports single-quoted strings as aliases
            Token::SingleQuotedString(s) => Ok(Some(Ident::with_quote('\'', s.clone()))),
            _ => {
                if after_as {
                    return self.expected("an identifier after AS", token);
                }
                self.prev_token();
                Ok(None)
            }
        }
    }

    /// Parses a table alias with its optional column list.
    pub fn parse_optional_table_alias(&mut self) -> Result<Option<TableAlias>, ParserError> {
        match self.parse_optional_alias(RESERVED_FOR_TABLE_ALIAS)? {
            Some(name) => {
                let columns = self.parse_parenthesized_column_list(true, false)?;
                Ok(Some(TableAlias { name, columns }))
            }
            None => Ok(None),
        }
    }

    /// Parses `ALL` / `DISTINCT [ON (...)]`, rejecting the conflicting
    /// combination.
    pub fn parse_all_or_distinct(&mut self) -> Result<Option<Distinct>, ParserError> {
        let all = self.parse_keyword(Keyword::ALL);
        let distinct = self.parse_keyword(Keyword::DISTINCT);
        if all && distinct {
            return parse_error("Cannot specify both ALL and DISTINCT");
        }
        if !distinct {
            return Ok(None);
        }
        if self.parse_keyword(Keyword::ON) {
            self.expect_token(&Token::LParen)?;
            let on = self.parse_comma_separated(Parser::parse_expr)?;
            self.expect_token(&Token::RParen)?;
            Ok(Some(Distinct::On(on)))
        } else {
            Ok(Some(Distinct::Distinct))
        }
    }

    pub(crate) fn peek_word_matches(&self, keyword: Keyword) -> bool {
        matches!(self.peek_token(), Token::Word(w) if w.keyword == Some(keyword))
    }

    pub(crate) fn peek_is_word(&self) -> Option<Word> {
        match self.peek_token() {
            Token::Word(w) => Some(w),
            _ => None,
        }
    }
}

fn display_comma_separated_keywords(keywords: &[Keyword]) -> String {
    let mut out = String::new();
    for (i, kw) in keywords.iter().enumerate() {
        if i != 0 {
            out.push_str(", ");
        }
        out.push_str(kw.as_str());
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::dialect::{AnsiDialect, GenericDialect};

    #[test]
    fn parse_empty_input() {
        let dialect = GenericDialect {};
        assert_eq!(Parser::parse_sql(&dialect, "").unwrap(), vec![]);
        assert_eq!(Parser::parse_sql(&dialect, ";;").unwrap(), vec![]);
        assert_eq!(Parser::parse_sql(&dialect, "  \n; ;").unwrap(), vec![]);
    }

    #[test]
    fn parse_multiple_statements() {
        let dialect = GenericDialect {};
        let statements = Parser::parse_sql(&dialect, "SELECT 1; SELECT 2;").unwrap();
        assert_eq!(statements.len(), 2);
    }

    #[test]
    fn missing_statement_delimiter() {
        let dialect = GenericDialect {};
        let res = Parser::parse_sql(&dialect, "SELECT 1 SELECT 2");
        assert_eq!(
            res.unwrap_err(),
            ParserError::ParserError(
                "Expected end of statement, found SELECT, Line: 1, Col: 10".to_string()
            )
        );
    }

    #[test]
    fn explain_must_be_root() {
        let dialect = GenericDialect {};
        let res = Parser::parse_sql(&dialect, "EXPLAIN EXPLAIN SELECT 1");
        assert_eq!(
            res.unwrap_err(),
            ParserError::ParserError("Explain must be root of the plan.".to_string())
        );
    }

    #[test]
    fn recursion_limit_is_enforced() {
        let dialect = GenericDialect {};
        let sql = format!("SELECT {}1{}", "(".repeat(100), ")".repeat(100));
        let res = Parser::parse_sql(&dialect, &sql);
        assert_eq!(res.unwrap_err(), ParserError::RecursionLimitExceeded);
        assert_eq!(
            ParserError::RecursionLimitExceeded.to_string(),
            "Recursion limit exceeded."
        );

        // a generous limit admits the same input
        let deep = format!("SELECT {}1{}", "(".repeat(100), ")".repeat(100));
        let res = Parser::new(&dialect)
            .with_options(ParserOptions {
                recursion_limit: 500,
                ..ParserOptions::default()
            })
            .try_with_sql(&deep)
            .unwrap()
            .parse_statements();
        assert!(res.is_ok());
    }

    #[test]
    fn dialect_statement_hook_short_circuits() {
        #[derive(Debug)]
        struct CommitEverything;
        impl Dialect for CommitEverything {
            fn parse_statement(
                &self,
                parser: &mut Parser,
            ) -> Option<Result<Statement, ParserError>> {
                while !matches!(parser.peek_token(), Token::SemiColon | Token::EOF) {
                    parser.next_token();
                }
                Some(Ok(Statement::Commit { chain: false }))
            }
        }
        let dialect = CommitEverything;
        let statements = Parser::parse_sql(&dialect, "anything at all").unwrap();
        assert_eq!(statements, vec![Statement::Commit { chain: false }]);
    }

    #[test]
    fn alias_requires_identifier_after_as() {
        let dialect = AnsiDialect {};
        let res = Parser::parse_sql(&dialect, "SELECT a AS");
        assert_eq!(
            res.unwrap_err(),
            ParserError::ParserError("Expected an identifier after AS, found EOF".to_string())
        );
    }
}
