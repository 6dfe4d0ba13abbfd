//! Data-manipulation statement parsing.

#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, vec, vec::Vec};

use crate::{
    ast::*,
    error::ParserError,
    keywords::Keyword,
    parser::Parser,
    tokens::Token,
};

impl<'a> Parser<'a> {
    /// Parses `INSERT INTO ...` / `REPLACE INTO ...`; the first keyword has
    /// been consumed.
    pub fn parse_insert(&mut self, replace_into: bool) -> Result<Statement, ParserError> {
        let overwrite = self.parse_keyword(Keyword::OVERWRITE);
        let into = self.parse_keyword(Keyword::INTO);
        let table = self.parse_keyword(Keyword::TABLE);
        let table_name = self.parse_object_name()?;

        let mut columns = vec![];
        let mut partitioned = None;
        let mut after_columns = vec![];
        if !matches!(self.peek_token(), Token::Word(ref w) if matches!(w.keyword, Some(Keyword::VALUES) | Some(Keyword::SELECT)))
        {
            columns = self.parse_parenthesized_column_list(true, false)?;
            if self.parse_keyword(Keyword::PARTITION) {
                self.expect_token(&Token::LParen)?;
                partitioned = Some(self.parse_comma_separated(Parser::parse_expr)?);
                self.expect_token(&Token::RParen)?;
                after_columns = self.parse_parenthesized_column_list(true, false)?;
            }
        }

        let source = if self.parse_keywords(&[Keyword::DEFAULT, Keyword::VALUES]) {
            None
        } else {
            Some(Box::new(self.parse_query()?))
        };

        let on = if self.parse_keywords(&[Keyword::ON, Keyword::DUPLICATE, Keyword::KEY]) {
            self.expect_keyword(Keyword::UPDATE)?;
            let assignments = self.parse_comma_separated(Parser::parse_assignment)?;
            Some(OnInsert::DuplicateKeyUpdate(assignments))
        } else if self.parse_keywords(&[Keyword::ON, Keyword::CONFLICT]) {
            let conflict_target = self.parse_parenthesized_column_list(true, false)?;
            self.expect_keyword(Keyword::DO)?;
            let action = if self.parse_keyword(Keyword::NOTHING) {
                OnConflictAction::DoNothing
            } else {
                self.expect_keywords(&[Keyword::UPDATE, Keyword::SET])?;
                let assignments = self.parse_comma_separated(Parser::parse_assignment)?;
                let selection = if self.parse_keyword(Keyword::WHERE) {
                    Some(self.parse_expr()?)
                } else {
                    None
                };
                OnConflictAction::DoUpdate {
                    assignments,
                    selection,
                }
            };
            Some(OnInsert::OnConflict(OnConflict {
                conflict_target,
                action,
            }))
        } else {
            None
        };

        let returning = self.parse_optional_returning()?;

        Ok(Statement::Insert(InsertStmt {
            replace_into,
            overwrite,
            into,
            table,
            table_name,
            columns,
            partitioned,
            after_columns,
            source,
            on,
            returning,
        }))
    }

    fn parse_optional_returning(&mut self) -> Result<Option<Vec<SelectItem>>, ParserError> {
        if self.parse_keyword(Keyword::RETURNING) {
            Ok(Some(
                self.parse_comma_separated(Parser::parse_select_item)?,
            ))
        } else {
            Ok(None)
        }
    }

    /// One `<column> = <value>` assignment.
    pub fn parse_assignment(&mut self) -> Result<Assignment, ParserError> {
        let id = self.parse_object_name()?.0;
        self.expect_token(&Token::Eq)?;
        let value = self.parse_expr()?;
        Ok(Assignment { id, value })
    }

    /// Parses `UPDATE ... SET ...`; the `UPDATE` keyword has been consumed.
    pub fn parse_update(&mut self) -> Result<Statement, ParserError> {
        let table = self.parse_table_and_joins()?;
        self.expect_keyword(Keyword::SET)?;
        let assignments = self.parse_comma_separated(Parser::parse_assignment)?;
        let from = if self.parse_keyword(Keyword::FROM) {
            Some(self.parse_table_and_joins()?)
        } else {
            None
        };
        let selection = if self.parse_keyword(Keyword::WHERE) {
            Some(self.parse_expr()?)
        } else {
            None
        };
        let returning = self.parse_optional_returning()?;
        Ok(Statement::Update(UpdateStmt {
            table,
            assignments,
            from,
            selection,
            returning,
        }))
    }

    /// Parses `DELETE [ <tables> ] FROM ...`; the `DELETE` keyword has been
    /// consumed.
    pub fn parse_delete(&mut self) -> Result<Statement, ParserError> {
        let tables = if !self.peek_word_matches(Keyword::FROM) {
            let tables = self.parse_comma_separated(Parser::parse_object_name)?;
            self.expect_keyword(Keyword::FROM)?;
            tables
        } else {
            self.expect_keyword(Keyword::FROM)?;
            vec![]
        };
        let from = self.parse_comma_separated(Parser::parse_table_and_joins)?;
        let using = if self.parse_keyword(Keyword::USING) {
            Some(self.parse_comma_separated(Parser::parse_table_and_joins)?)
        } else {
            None
        };
        let selection = if self.parse_keyword(Keyword::WHERE) {
            Some(self.parse_expr()?)
        } else {
            None
        };
        let returning = self.parse_optional_returning()?;
        Ok(Statement::Delete(DeleteStmt {
            tables,
            from,
            using,
            selection,
            returning,
        }))
    }

    /// Parses `MERGE [INTO] <target> USING <source> ON <expr> WHEN ...`;
    /// the `MERGE` keyword has been consumed.
    pub fn parse_merge(&mut self) -> Result<Statement, ParserError> {
        let into = self.parse_keyword(Keyword::INTO);
        let table = self.parse_table_factor()?;
        self.expect_keyword(Keyword::USING)?;
        let source = self.parse_table_factor()?;
        self.expect_keyword(Keyword::ON)?;
        let on = Box::new(self.parse_expr()?);
        let clauses = self.parse_merge_clauses()?;
        Ok(Statement::Merge(MergeStmt {
            into,
            table,
            source,
            on,
            clauses,
        }))
    }

    fn parse_merge_clauses(&mut self) -> Result<Vec<MergeClause>, ParserError> {
        let mut clauses = vec![];
        loop {
            if !self.parse_keyword(Keyword::WHEN) {
                if clauses.is_empty() {
                    return self.expected("WHEN", self.peek_token_with_location());
                }
                break;
            }
            let matched = !self.parse_keywords(&[Keyword::NOT, Keyword::MATCHED]);
            if matched {
                self.expect_keyword(Keyword::MATCHED)?;
            }
            let predicate = if self.parse_keyword(Keyword::AND) {
                Some(self.parse_expr()?)
            } else {
                None
            };
            self.expect_keyword(Keyword::THEN)?;
            let action = if self.parse_keyword(Keyword::DELETE) {
                MergeAction::Delete
            } else if self.parse_keywords(&[Keyword::UPDATE, Keyword::SET]) {
                MergeAction::Update {
                    assignments: self.parse_comma_separated(Parser::parse_assignment)?,
                }
            } else {
                self.expect_keyword(Keyword::INSERT)?;
                let columns = self.parse_parenthesized_column_list(true, false)?;
                self.expect_keyword(Keyword::VALUES)?;
                self.expect_token(&Token::LParen)?;
                let values = self.parse_comma_separated(Parser::parse_expr)?;
                self.expect_token(&Token::RParen)?;
                MergeAction::Insert { columns, values }
            };
            clauses.push(MergeClause {
                matched,
                predicate,
                action,
            });
        }
        Ok(clauses)
    }

    /// Parses `COPY { <table> | (<query>) } { TO | FROM } <target>`; the
    /// `COPY` keyword has been consumed.
    pub fn parse_copy(&mut self) -> Result<Statement, ParserError> {
        let source = if self.consume_token(&Token::LParen) {
            let query = Box::new(self.parse_query()?);
            self.expect_token(&Token::RParen)?;
            CopySource::Query(query)
        } else {
            let table_name = self.parse_object_name()?;
            let columns = self.parse_parenthesized_column_list(true, false)?;
            CopySource::Table {
                table_name,
                columns,
            }
        };
        let to = match self.expect_one_of_keywords(&[Keyword::TO, Keyword::FROM])? {
            Keyword::TO => true,
            _ => false,
        };
        let target = if self.parse_keyword(Keyword::STDIN) {
            CopyTarget::Stdin
        } else if self.parse_keyword(Keyword::STDOUT) {
            CopyTarget::Stdout
        } else if self.parse_keyword(Keyword::PROGRAM) {
            CopyTarget::Program {
                command: self.parse_literal_string()?,
            }
        } else {
            CopyTarget::File {
                filename: self.parse_literal_string()?,
            }
        };
        let mut options = vec![];
        if self.parse_keyword(Keyword::WITH) {
            self.expect_token(&Token::LParen)?;
            options = self.parse_comma_separated(Parser::parse_copy_option)?;
            self.expect_token(&Token::RParen)?;
        }
        Ok(Statement::Copy(CopyStmt {
            source,
            to,
            target,
            options,
        }))
    }

    fn parse_copy_option(&mut self) -> Result<CopyOption, ParserError> {
        if self.parse_keyword(Keyword::FORMAT) {
            Ok(CopyOption::Format(self.parse_identifier()?))
        } else if self.parse_keyword(Keyword::DELIMITER) {
            Ok(CopyOption::Delimiter(self.parse_literal_char()?))
        } else if self.parse_keyword(Keyword::NULL) {
            Ok(CopyOption::Null(self.parse_literal_string()?))
        } else if self.parse_keyword(Keyword::HEADER) {
            Ok(CopyOption::Header(!self.parse_keyword(Keyword::FALSE)))
        } else if self.parse_keyword(Keyword::CSV) {
            Ok(CopyOption::Csv)
        } else if self.parse_keyword(Keyword::FREEZE) {
            Ok(CopyOption::Freeze(!self.parse_keyword(Keyword::FALSE)))
        } else if self.parse_keyword(Keyword::QUOTE) {
            Ok(CopyOption::Quote(self.parse_literal_char()?))
        } else {
            self.expected("a COPY option", self.peek_token_with_location())
        }
    }

    fn parse_literal_char(&mut self) -> Result<char, ParserError> {
        let s = self.parse_literal_string()?;
        if s.chars().count() != 1 {
            let token = self.peek_token_with_location();
            return self.expected("a single character", token);
        }
        Ok(s.chars().next().expect("one char"))
    }

    /// Parses `TRUNCATE [TABLE] <names> ...`; the `TRUNCATE` keyword has
    /// been consumed.
    pub fn parse_truncate(&mut self) -> Result<Statement, ParserError> {
        let table = self.parse_keyword(Keyword::TABLE);
        let table_names = self.parse_comma_separated(Parser::parse_object_name)?;
        let partitions = if self.parse_keyword(Keyword::PARTITION) {
            self.expect_token(&Token::LParen)?;
            let partitions = self.parse_comma_separated(Parser::parse_expr)?;
            self.expect_token(&Token::RParen)?;
            Some(partitions)
        } else {
            None
        };
        let cascade = if self.parse_keyword(Keyword::CASCADE) {
            Some(true)
        } else if self.parse_keyword(Keyword::RESTRICT) {
            Some(false)
        } else {
            None
        };
        Ok(Statement::Truncate(TruncateStmt {
            table,
            table_names,
            partitions,
            cascade,
        }))
    }

    /// Parses `UNLOAD(<query>) TO <ident> [ WITH (...) ]`; the `UNLOAD`
    /// keyword has been consumed.
    pub fn parse_unload(&mut self) -> Result<Statement, ParserError> {
        self.expect_token(&Token::LParen)?;
        let query = Box::new(self.parse_query()?);
        self.expect_token(&Token::RParen)?;
        self.expect_keyword(Keyword::TO)?;
        let to = self.parse_identifier()?;
        let with = if self.parse_keyword(Keyword::WITH) {
            self.expect_token(&Token::LParen)?;
            let options = self.parse_comma_separated(Parser::parse_sql_option)?;
            self.expect_token(&Token::RParen)?;
            options
        } else {
            vec![]
        };
        Ok(Statement::Unload(UnloadStmt { query, to, with }))
    }

    /// One `name = value` option.
    pub(crate) fn parse_sql_option(&mut self) -> Result<SqlOption, ParserError> {
        let name = self.parse_identifier()?;
        self.expect_token(&Token::Eq)?;
        let value = self.parse_expr()?;
        Ok(SqlOption { name, value })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::dialect::{GenericDialect, MySqlDialect, PostgreSqlDialect};

    fn round_trip(sql: &str) {
        let dialect = GenericDialect {};
        let statements = Parser::parse_sql(&dialect, sql).unwrap();
        assert_eq!(statements.len(), 1);
        assert_eq!(statements[0].to_string(), sql);
    }

    #[test]
    fn parse_insert() {
        round_trip("INSERT INTO t (a, b) VALUES (1, 2), (3, 4)");
        round_trip("INSERT INTO t SELECT * FROM s");
        round_trip("INSERT INTO t DEFAULT VALUES");
        let dialect = MySqlDialect {};
        let statements =
            Parser::parse_sql(&dialect, "REPLACE INTO t (a) VALUES (1)").unwrap();
        assert_eq!(statements[0].to_string(), "REPLACE INTO t (a) VALUES (1)");
    }

    #[test]
    fn parse_insert_on_conflict() {
        let dialect = PostgreSqlDialect {};
        let sql = "INSERT INTO t (a) VALUES (1) ON CONFLICT (a) DO UPDATE SET a = 2 WHERE t.a = 1";
        let statements = Parser::parse_sql(&dialect, sql).unwrap();
        assert_eq!(statements[0].to_string(), sql);
        let sql = "INSERT INTO t (a) VALUES (1) ON CONFLICT DO NOTHING";
        let statements = Parser::parse_sql(&dialect, sql).unwrap();
        assert_eq!(statements[0].to_string(), sql);

        let dialect = MySqlDialect {};
        let sql = "INSERT INTO t (a) VALUES (1) ON DUPLICATE KEY UPDATE a = 2";
        let statements = Parser::parse_sql(&dialect, sql).unwrap();
        assert_eq!(statements[0].to_string(), sql);
    }

    #[test]
    fn parse_update() {
        round_trip("UPDATE t SET a = 1, b = 2, c = 3 WHERE d");
        let dialect = GenericDialect {};
        let statements =
            Parser::parse_sql(&dialect, "UPDATE t SET a = 1, b = 2, c = 3 WHERE d").unwrap();
        match &statements[0] {
            Statement::Update(update) => {
                assert_eq!(update.assignments.len(), 3);
                assert_eq!(update.assignments[0].id, vec![Ident::new("a")]);
            }
            other => panic!("unexpected: {other:?}"),
        }
        round_trip("UPDATE t SET a = 1 FROM u WHERE t.id = u.id RETURNING t.id");
    }

    #[test]
    fn parse_delete() {
        round_trip("DELETE FROM t WHERE a = 1");
        round_trip("DELETE t1, t2 FROM t1 JOIN t2 ON t1.id = t2.id WHERE t1.a = 1");
        round_trip("DELETE FROM t USING u WHERE t.id = u.id RETURNING *");
    }

    #[test]
    fn parse_merge() {
        let sql = "MERGE INTO s.bar AS dest USING (SELECT * FROM s.foo) AS stg ON dest.D = stg.D \
                   WHEN NOT MATCHED THEN INSERT (A) VALUES (stg.A)";
        let dialect = GenericDialect {};
        let statements = Parser::parse_sql(&dialect, sql).unwrap();
        assert_eq!(statements[0].to_string(), sql);
        match &statements[0] {
            Statement::Merge(merge) => {
                assert!(merge.into);
                assert_eq!(merge.clauses.len(), 1);
                assert!(!merge.clauses[0].matched);
            }
            other => panic!("unexpected: {other:?}"),
        }

        round_trip(
            "MERGE INTO t USING s ON t.id = s.id \
             WHEN MATCHED AND s.del THEN DELETE \
             WHEN MATCHED THEN UPDATE SET v = s.v \
             WHEN NOT MATCHED THEN INSERT (id, v) VALUES (s.id, s.v)",
        );
    }

    #[test]
    fn parse_copy() {
        let dialect = PostgreSqlDialect {};
        for sql in [
            "COPY t (a, b) FROM STDIN",
            "COPY t TO STDOUT",
            "COPY (SELECT * FROM t) TO 'file.csv' WITH (FORMAT CSV, HEADER)",
            "COPY t FROM PROGRAM 'gzip -dc data.gz'",
        ] {
            let statements = Parser::parse_sql(&dialect, sql).unwrap();
            assert_eq!(statements[0].to_string(), sql);
        }
    }

    #[test]
    fn parse_truncate() {
        round_trip("TRUNCATE TABLE t1, t2 CASCADE");
        round_trip("TRUNCATE t PARTITION (p1, p2)");
    }

    #[test]
    fn parse_unload() {
        round_trip("UNLOAD(SELECT a FROM t) TO s3 WITH (format = 'parquet')");
    }
}
