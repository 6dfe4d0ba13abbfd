//! Parsing for transactions, session state, access control, utility
//! statements and procedural control blocks.

#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, string::String, vec, vec::Vec};

use crate::{
    ast::*,
    error::ParserError,
    keywords::Keyword,
    parser::Parser,
    tokens::Token,
};

impl<'a> Parser<'a> {
    // ========================================================================
    // Transactions
    // ========================================================================

    /// `BEGIN [ TRANSACTION | WORK ]`; `BEGIN` has been consumed.
    pub fn parse_begin(&mut self) -> Result<Statement, ParserError> {
        let _ = self.parse_one_of_keywords(&[Keyword::TRANSACTION, Keyword::WORK]);
        Ok(Statement::StartTransaction {
            modes: self.parse_transaction_modes()?,
            begin: true,
        })
    }

    /// `START TRANSACTION ...`; `START` has been consumed.
    pub fn parse_start_transaction(&mut self) -> Result<Statement, ParserError> {
        self.expect_keyword(Keyword::TRANSACTION)?;
        Ok(Statement::StartTransaction {
            modes: self.parse_transaction_modes()?,
            begin: false,
        })
    }

    fn parse_transaction_modes(&mut self) -> Result<Vec<TransactionMode>, ParserError> {
        let mut modes = vec![];
        let mut required = false;
        loop {
            let mode = if self.parse_keywords(&[Keyword::ISOLATION, Keyword::LEVEL]) {
                let iso_level = if self.parse_keywords(&[Keyword::READ, Keyword::UNCOMMITTED]) {
                    TransactionIsolationLevel::ReadUncommitted
                } else if self.parse_keywords(&[Keyword::READ, Keyword::COMMITTED]) {
                    TransactionIsolationLevel::ReadCommitted
                } else if self.parse_keywords(&[Keyword::REPEATABLE, Keyword::READ]) {
                    TransactionIsolationLevel::RepeatableRead
                } else if self.parse_keyword(Keyword::SERIALIZABLE) {
                    TransactionIsolationLevel::Serializable
                } else if self.parse_keyword(Keyword::SNAPSHOT) {
                    TransactionIsolationLevel::Snapshot
                } else {
                    return self.expected("isolation level", self.peek_token_with_location());
                };
                TransactionMode::IsolationLevel(iso_level)
            } else if self.parse_keywords(&[Keyword::READ, Keyword::ONLY]) {
                TransactionMode::AccessMode(TransactionAccessMode::ReadOnly)
            } else if self.parse_keywords(&[Keyword::READ, Keyword::WRITE]) {
                TransactionMode::AccessMode(TransactionAccessMode::ReadWrite)
            } else if required {
                return self.expected("transaction mode", self.peek_token_with_location());
            } else {
                break;
            };
            modes.push(mode);
            // Modes may be comma-separated; a trailing comma demands another.
            required = self.consume_token(&Token::Comma);
        }
        Ok(modes)
    }

    /// `COMMIT [ WORK | TRANSACTION ] [ AND [NO] CHAIN ]`.
    pub fn parse_commit(&mut self) -> Result<Statement, ParserError> {
        Ok(Statement::Commit {
            chain: self.parse_commit_rollback_chain()?,
        })
    }

    /// `ROLLBACK [...] [ TO [SAVEPOINT] <name> ]`.
    pub fn parse_rollback(&mut self) -> Result<Statement, ParserError> {
        let chain = self.parse_commit_rollback_chain()?;
        let savepoint = if self.parse_keyword(Keyword::TO) {
            let _ = self.parse_keyword(Keyword::SAVEPOINT);
            Some(self.parse_identifier()?)
        } else {
            None
        };
        Ok(Statement::Rollback { chain, savepoint })
    }

    fn parse_commit_rollback_chain(&mut self) -> Result<bool, ParserError> {
        let _ = self.parse_one_of_keywords(&[Keyword::TRANSACTION, Keyword::WORK]);
        if self.parse_keyword(Keyword::AND) {
            let chain = !self.parse_keyword(Keyword::NO);
            self.expect_keyword(Keyword::CHAIN)?;
            Ok(chain)
        } else {
            Ok(false)
        }
    }

    // ========================================================================
    // Session state
    // ========================================================================

    /// Dispatches `SET ...`; `SET` has been consumed.
    pub fn parse_set(&mut self) -> Result<Statement, ParserError> {
        let local = self.parse_keyword(Keyword::LOCAL);

        if self.parse_keywords(&[Keyword::TIME, Keyword::ZONE]) {
            return Ok(Statement::SetTimeZone {
                local,
                value: self.parse_expr()?,
            });
        }

        if !local {
            if self.parse_keyword(Keyword::SESSION) {
                if self.parse_non_keyword_word("CHARACTERISTICS") {
                    self.expect_keywords(&[Keyword::AS, Keyword::TRANSACTION])?;
                    return Ok(Statement::SetTransaction {
                        modes: self.parse_transaction_modes()?,
                        snapshot: None,
                        session: true,
                    });
                }
                // `SET SESSION <var>` - the scope modifier is accepted and
                // normalized away
            } else {
                let _ = self.parse_keyword(Keyword::GLOBAL);
            }
            if self.parse_keyword(Keyword::TRANSACTION) {
                if self.parse_keyword(Keyword::SNAPSHOT) {
                    let snapshot = Some(self.parse_value()?);
                    return Ok(Statement::SetTransaction {
                        modes: vec![],
                        snapshot,
                        session: false,
                    });
                }
                return Ok(Statement::SetTransaction {
                    modes: self.parse_transaction_modes()?,
                    snapshot: None,
                    session: false,
                });
            }
        }

        let hivevar = self.parse_keyword(Keyword::HIVEVAR);
        if hivevar {
            // the tokenizer folds `:name` into a placeholder
            let variable = match self.next_token() {
                Token::Placeholder(ref s) if s.starts_with(':') => {
                    ObjectName(vec![Ident::new(&s[1..])])
                }
                _ => {
                    return self.expected(
                        ":<name> after HIVEVAR",
                        self.peek_token_with_location(),
                    )
                }
            };
            self.expect_token(&Token::Eq)?;
            let value = self.parse_expr()?;
            return Ok(Statement::SetVariable {
                local,
                hivevar: true,
                variables: vec![variable],
                value: vec![value],
                parenthesized: false,
            });
        }

        if self.dialect.supports_parenthesized_set_variables()
            && self.peek_token() == Token::LParen
        {
            self.expect_token(&Token::LParen)?;
            let variables = self.parse_comma_separated(Parser::parse_object_name)?;
            self.expect_token(&Token::RParen)?;
            self.expect_token(&Token::Eq)?;
            self.expect_token(&Token::LParen)?;
            let value = self.parse_comma_separated(Parser::parse_expr)?;
            self.expect_token(&Token::RParen)?;
            return Ok(Statement::SetVariable {
                local,
                hivevar: false,
                variables,
                value,
                parenthesized: true,
            });
        }

        let variable = self.parse_object_name()?;
        if !self.consume_token(&Token::Eq) && !self.parse_keyword(Keyword::TO) {
            return self.expected("'=' or TO after SET variable", self.peek_token_with_location());
        }
        let value = self.parse_expr()?;
        Ok(Statement::SetVariable {
            local,
            hivevar: false,
            variables: vec![variable],
            value: vec![value],
            parenthesized: false,
        })
    }

    /// `RESET { <variable> | ALL }`; `RESET` has been consumed.
    pub fn parse_reset(&mut self) -> Result<Statement, ParserError> {
        let variable = if self.parse_keyword(Keyword::ALL) {
            None
        } else {
            Some(self.parse_object_name()?)
        };
        Ok(Statement::Reset { variable })
    }

    /// Dispatches `SHOW ...`; `SHOW` has been consumed.
    pub fn parse_show(&mut self) -> Result<Statement, ParserError> {
        if self.parse_keyword(Keyword::CREATE) {
            let obj_type = match self.expect_one_of_keywords(&[
                Keyword::TABLE,
                Keyword::VIEW,
                Keyword::TRIGGER,
                Keyword::PROCEDURE,
                Keyword::FUNCTION,
            ])? {
                Keyword::TABLE => ShowCreateObject::Table,
                Keyword::VIEW => ShowCreateObject::View,
                Keyword::TRIGGER => ShowCreateObject::Trigger,
                Keyword::PROCEDURE => ShowCreateObject::Procedure,
                _ => ShowCreateObject::Function,
            };
            let obj_name = self.parse_object_name()?;
            return Ok(Statement::ShowCreate { obj_type, obj_name });
        }

        let extended = self.parse_keyword(Keyword::EXTENDED);
        let full = self.parse_keyword(Keyword::FULL);
        if self.parse_keyword(Keyword::TABLES) {
            let db_name = if self.parse_one_of_keywords(&[Keyword::FROM, Keyword::IN]).is_some() {
                Some(self.parse_identifier()?)
            } else {
                None
            };
            let filter = self.parse_optional_show_filter()?;
            return Ok(Statement::ShowTables {
                extended,
                full,
                db_name,
                filter,
            });
        }
        if self.parse_keyword(Keyword::COLUMNS) {
            self.expect_one_of_keywords(&[Keyword::FROM, Keyword::IN])?;
            let table_name = self.parse_object_name()?;
            let filter = self.parse_optional_show_filter()?;
            return Ok(Statement::ShowColumns {
                extended,
                full,
                table_name,
                filter,
            });
        }
        if extended || full {
            return self.expected("TABLES or COLUMNS", self.peek_token_with_location());
        }
        if self.parse_keyword(Keyword::FUNCTIONS) {
            return Ok(Statement::ShowFunctions {
                filter: self.parse_optional_show_filter()?,
            });
        }
        if self.parse_keyword(Keyword::COLLATION) {
            return Ok(Statement::ShowCollation {
                filter: self.parse_optional_show_filter()?,
            });
        }
        let mut variable = vec![];
        while let Token::Word(_) = self.peek_token() {
            variable.push(self.parse_identifier()?);
        }
        Ok(Statement::ShowVariable { variable })
    }

    fn parse_optional_show_filter(
        &mut self,
    ) -> Result<Option<ShowStatementFilter>, ParserError> {
        if self.parse_keyword(Keyword::LIKE) {
            Ok(Some(ShowStatementFilter::Like(
                self.parse_literal_string()?,
            )))
        } else if self.parse_keyword(Keyword::ILIKE) {
            Ok(Some(ShowStatementFilter::ILike(
                self.parse_literal_string()?,
            )))
        } else if self.parse_keyword(Keyword::WHERE) {
            Ok(Some(ShowStatementFilter::Where(self.parse_expr()?)))
        } else {
            Ok(None)
        }
    }

    /// `DISCARD { ALL | PLANS | SEQUENCES | TEMP }`; `DISCARD` has been
    /// consumed.
    pub fn parse_discard(&mut self) -> Result<Statement, ParserError> {
        let object_type = match self.expect_one_of_keywords(&[
            Keyword::ALL,
            Keyword::PLANS,
            Keyword::SEQUENCES,
            Keyword::TEMP,
        ])? {
            Keyword::ALL => DiscardObject::All,
            Keyword::PLANS => DiscardObject::Plans,
            Keyword::SEQUENCES => DiscardObject::Sequences,
            _ => DiscardObject::Temp,
        };
        Ok(Statement::Discard { object_type })
    }

    // ========================================================================
    // Access control
    // ========================================================================

    /// `GRANT ...`; `GRANT` has been consumed.
    pub fn parse_grant(&mut self) -> Result<Statement, ParserError> {
        let (privileges, objects) = self.parse_grant_revoke_privileges_objects()?;
        self.expect_keyword(Keyword::TO)?;
        let grantees = self.parse_comma_separated(Parser::parse_identifier)?;
        let with_grant_option =
            self.parse_keywords(&[Keyword::WITH, Keyword::GRANT, Keyword::OPTION]);
        let granted_by = if self.parse_keywords(&[Keyword::GRANTED, Keyword::BY]) {
            Some(self.parse_identifier()?)
        } else {
            None
        };
        Ok(Statement::Grant {
            privileges,
            objects,
            grantees,
            with_grant_option,
            granted_by,
        })
    }

    /// `REVOKE ...`; `REVOKE` has been consumed.
    pub fn parse_revoke(&mut self) -> Result<Statement, ParserError> {
        let (privileges, objects) = self.parse_grant_revoke_privileges_objects()?;
        self.expect_keyword(Keyword::FROM)?;
        let grantees = self.parse_comma_separated(Parser::parse_identifier)?;
        let granted_by = if self.parse_keywords(&[Keyword::GRANTED, Keyword::BY]) {
            Some(self.parse_identifier()?)
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
        Ok(Statement::Revoke {
            privileges,
            objects,
            grantees,
            granted_by,
            cascade,
        })
    }

    /// `DENY ...` (MSSQL); `DENY` has been consumed.
    pub fn parse_deny(&mut self) -> Result<Statement, ParserError> {
        let (privileges, objects) = self.parse_grant_revoke_privileges_objects()?;
        self.expect_keyword(Keyword::TO)?;
        let grantees = self.parse_comma_separated(Parser::parse_identifier)?;
        Ok(Statement::Deny {
            privileges,
            objects,
            grantees,
        })
    }

    fn parse_grant_revoke_privileges_objects(
        &mut self,
    ) -> Result<(Privileges, GrantObjects), ParserError> {
        let privileges = if self.parse_keyword(Keyword::ALL) {
            Privileges::All {
                with_privileges_keyword: self.parse_keyword(Keyword::PRIVILEGES),
            }
        } else {
            Privileges::Actions(self.parse_comma_separated(Parser::parse_grant_action)?)
        };
        self.expect_keyword(Keyword::ON)?;
        let objects = if self.parse_keywords(&[
            Keyword::ALL,
            Keyword::TABLES,
            Keyword::IN,
            Keyword::SCHEMA,
        ]) {
            GrantObjects::AllTablesInSchema {
                schemas: self.parse_comma_separated(Parser::parse_object_name)?,
            }
        } else if self.parse_keywords(&[
            Keyword::ALL,
            Keyword::SEQUENCES,
            Keyword::IN,
            Keyword::SCHEMA,
        ]) {
            GrantObjects::AllSequencesInSchema {
                schemas: self.parse_comma_separated(Parser::parse_object_name)?,
            }
        } else if self.parse_keyword(Keyword::SCHEMA) {
            GrantObjects::Schemas(self.parse_comma_separated(Parser::parse_object_name)?)
        } else if self.parse_keyword(Keyword::SEQUENCE) {
            GrantObjects::Sequences(self.parse_comma_separated(Parser::parse_object_name)?)
        } else {
            let _ = self.parse_keyword(Keyword::TABLE);
            GrantObjects::Tables(self.parse_comma_separated(Parser::parse_object_name)?)
        };
        Ok((privileges, objects))
    }

    fn parse_grant_action(&mut self) -> Result<Action, ParserError> {
        if self.parse_keyword(Keyword::CONNECT) {
            Ok(Action::Connect)
        } else if self.parse_keyword(Keyword::CREATE) {
            Ok(Action::Create)
        } else if self.parse_keyword(Keyword::DELETE) {
            Ok(Action::Delete)
        } else if self.parse_keyword(Keyword::EXECUTE) {
            Ok(Action::Execute)
        } else if self.parse_keyword(Keyword::INSERT) {
            Ok(Action::Insert {
                columns: self.parse_optional_grant_columns()?,
            })
        } else if self.parse_keyword(Keyword::REFERENCES) {
            Ok(Action::References {
                columns: self.parse_optional_grant_columns()?,
            })
        } else if self.parse_keyword(Keyword::SELECT) {
            Ok(Action::Select {
                columns: self.parse_optional_grant_columns()?,
            })
        } else if self.parse_keyword(Keyword::TEMPORARY) {
            Ok(Action::Temporary)
        } else if self.parse_keyword(Keyword::TRIGGER) {
            Ok(Action::Trigger)
        } else if self.parse_keyword(Keyword::TRUNCATE) {
            Ok(Action::Truncate)
        } else if self.parse_keyword(Keyword::UPDATE) {
            Ok(Action::Update {
                columns: self.parse_optional_grant_columns()?,
            })
        } else if self.parse_keyword(Keyword::USAGE) {
            Ok(Action::Usage)
        } else {
            self.expected("a privilege keyword", self.peek_token_with_location())
        }
    }

    fn parse_optional_grant_columns(&mut self) -> Result<Option<Vec<Ident>>, ParserError> {
        let columns = self.parse_parenthesized_column_list(true, false)?;
        Ok(if columns.is_empty() {
            None
        } else {
            Some(columns)
        })
    }

    // ========================================================================
    // Utility statements
    // ========================================================================

    /// `CACHE [LAZY] TABLE <name> [OPTIONS (...)] [[AS] <query>]`; `CACHE`
    /// has been consumed.
    pub fn parse_cache_table(&mut self) -> Result<Statement, ParserError> {
        let lazy = self.parse_keyword(Keyword::LAZY);
        self.expect_keyword(Keyword::TABLE)?;
        let table_name = self.parse_object_name()?;
        let options = if self.parse_keyword(Keyword::OPTIONS) {
            self.expect_token(&Token::LParen)?;
            let options = self.parse_comma_separated(Parser::parse_sql_option)?;
            self.expect_token(&Token::RParen)?;
            options
        } else {
            vec![]
        };
        let query = if self.parse_keyword(Keyword::AS) || self.peek_is_query_start() {
            Some(Box::new(self.parse_query()?))
        } else {
            None
        };
        Ok(Statement::Cache {
            lazy,
            table_name,
            options,
            query,
        })
    }

    /// `UNCACHE TABLE [IF EXISTS] <name>`; `UNCACHE` has been consumed.
    pub fn parse_uncache_table(&mut self) -> Result<Statement, ParserError> {
        self.expect_keyword(Keyword::TABLE)?;
        let if_exists = self.parse_keywords(&[Keyword::IF, Keyword::EXISTS]);
        let table_name = self.parse_object_name()?;
        Ok(Statement::UNCache {
            table_name,
            if_exists,
        })
    }

    /// `NOTIFY <channel> [, '<payload>']`; `NOTIFY` has been consumed.
    pub fn parse_notify(&mut self) -> Result<Statement, ParserError> {
        let channel = self.parse_identifier()?;
        let payload = if self.consume_token(&Token::Comma) {
            Some(self.parse_literal_string()?)
        } else {
            None
        };
        Ok(Statement::Notify { channel, payload })
    }

    /// `PREPARE <name> [ (<types>) ] AS <statement>`; `PREPARE` has been
    /// consumed.
    pub fn parse_prepare(&mut self) -> Result<Statement, ParserError> {
        let name = self.parse_identifier()?;
        let data_types = if self.consume_token(&Token::LParen) {
            let data_types = self.parse_comma_separated(Parser::parse_data_type)?;
            self.expect_token(&Token::RParen)?;
            data_types
        } else {
            vec![]
        };
        self.expect_keyword(Keyword::AS)?;
        let statement = Box::new(self.parse_statement()?);
        Ok(Statement::Prepare {
            name,
            data_types,
            statement,
        })
    }

    /// `EXECUTE <name> [ (<params>) ]` or `EXECUTE IMMEDIATE <expr>
    /// [ USING <exprs> ]`; `EXECUTE` has been consumed.
    pub fn parse_execute(&mut self) -> Result<Statement, ParserError> {
        if self.parse_keyword(Keyword::IMMEDIATE) {
            let statement = Box::new(self.parse_expr()?);
            let using = if self.parse_keyword(Keyword::USING) {
                self.parse_comma_separated(Parser::parse_expr)?
            } else {
                vec![]
            };
            return Ok(Statement::ExecuteImmediate { statement, using });
        }
        let name = self.parse_identifier()?;
        let parameters = if self.consume_token(&Token::LParen) {
            let parameters = self.parse_comma_separated(Parser::parse_expr)?;
            self.expect_token(&Token::RParen)?;
            parameters
        } else {
            vec![]
        };
        Ok(Statement::Execute { name, parameters })
    }

    /// `DEALLOCATE [PREPARE] <name>`; `DEALLOCATE` has been consumed.
    pub fn parse_deallocate(&mut self) -> Result<Statement, ParserError> {
        let prepare = self.parse_keyword(Keyword::PREPARE);
        let name = self.parse_identifier()?;
        Ok(Statement::Deallocate { name, prepare })
    }

    /// `VACUUM [FULL] [FREEZE] [ANALYZE] [<table>]`; `VACUUM` has been
    /// consumed.
    pub fn parse_vacuum(&mut self) -> Result<Statement, ParserError> {
        let full = self.parse_keyword(Keyword::FULL);
        let freeze = self.parse_keyword(Keyword::FREEZE);
        let analyze = self.parse_keyword(Keyword::ANALYZE);
        let table_name = match self.peek_token() {
            Token::Word(_) => Some(self.parse_object_name()?),
            _ => None,
        };
        Ok(Statement::Vacuum {
            full,
            freeze,
            analyze,
            table_name,
        })
    }

    /// `RAISE [<expr>]`; `RAISE` has been consumed.
    pub fn parse_raise(&mut self) -> Result<Statement, ParserError> {
        let value = match self.peek_token() {
            Token::SemiColon | Token::EOF => None,
            _ => Some(Box::new(self.parse_expr()?)),
        };
        Ok(Statement::Raise { value })
    }

    /// `RAISERROR(<msg>, <severity>, <state> [, <args>])`; `RAISERROR` has
    /// been consumed.
    pub fn parse_raiserror(&mut self) -> Result<Statement, ParserError> {
        self.expect_token(&Token::LParen)?;
        let message = Box::new(self.parse_expr()?);
        self.expect_token(&Token::Comma)?;
        let severity = Box::new(self.parse_expr()?);
        self.expect_token(&Token::Comma)?;
        let state = Box::new(self.parse_expr()?);
        let arguments = if self.consume_token(&Token::Comma) {
            self.parse_comma_separated(Parser::parse_expr)?
        } else {
            vec![]
        };
        self.expect_token(&Token::RParen)?;
        Ok(Statement::RaiseError {
            message,
            severity,
            state,
            arguments,
        })
    }

    /// `CALL <function>`; `CALL` has been consumed.
    pub fn parse_call(&mut self) -> Result<Statement, ParserError> {
        let name = self.parse_object_name()?;
        if self.peek_token() == Token::LParen {
            match self.parse_function(name)? {
                Expr::Function(function) => Ok(Statement::Call(function)),
                _ => unreachable!("parse_function returns a function"),
            }
        } else {
            Ok(Statement::Call(Function {
                name,
                args: vec![],
                duplicate_treatment: None,
                order_by: vec![],
                limit: None,
                on_overflow: None,
                filter: None,
                null_treatment: None,
                within_group: vec![],
                over: None,
            }))
        }
    }

    /// `ASSERT <condition> [AS <message>]`; `ASSERT` has been consumed.
    pub fn parse_assert(&mut self) -> Result<Statement, ParserError> {
        let condition = self.parse_expr()?;
        let message = if self.parse_keyword(Keyword::AS) {
            Some(self.parse_expr()?)
        } else {
            None
        };
        Ok(Statement::Assert { condition, message })
    }

    /// `LOCK TABLES <t> [[AS] alias] { READ [LOCAL] | WRITE } [, ...]`;
    /// `LOCK` has been consumed.
    pub fn parse_lock_tables(&mut self) -> Result<Statement, ParserError> {
        self.expect_keyword(Keyword::TABLES)?;
        let tables = self.parse_comma_separated(|parser| {
            let table = parser.parse_object_name()?;
            let alias =
                parser.parse_optional_alias(crate::keywords::RESERVED_FOR_TABLE_ALIAS)?;
            let lock_type = if parser.parse_keyword(Keyword::READ) {
                LockTableType::Read {
                    local: parser.parse_keyword(Keyword::LOCAL),
                }
            } else {
                parser.expect_keyword(Keyword::WRITE)?;
                LockTableType::Write
            };
            Ok(LockTable {
                table,
                alias,
                lock_type,
            })
        })?;
        Ok(Statement::LockTables { tables })
    }

    /// PostgreSQL `EXPLAIN ( <option> [<arg>], ... )` utility options.
    pub(crate) fn parse_utility_options(&mut self) -> Result<Vec<UtilityOption>, ParserError> {
        self.expect_token(&Token::LParen)?;
        let options = self.parse_comma_separated(|parser| {
            let name = parser.parse_identifier()?;
            let arg = match parser.peek_token() {
                Token::Comma | Token::RParen => None,
                _ => Some(parser.parse_expr()?),
            };
            Ok(UtilityOption { name, arg })
        })?;
        self.expect_token(&Token::RParen)?;
        Ok(options)
    }

    pub(crate) fn parse_analyze_format(&mut self) -> Result<AnalyzeFormat, ParserError> {
        if self.parse_keyword(Keyword::TEXT) {
            Ok(AnalyzeFormat::Text)
        } else if self.parse_keyword(Keyword::JSON) {
            Ok(AnalyzeFormat::Json)
        } else if self.parse_non_keyword_word("GRAPHVIZ") {
            Ok(AnalyzeFormat::Graphviz)
        } else {
            self.expected("TEXT, GRAPHVIZ or JSON", self.peek_token_with_location())
        }
    }

    // ========================================================================
    // Control blocks
    // ========================================================================

    /// Statements until one of `terminators` is peeked; semicolons between
    /// statements are consumed.
    fn parse_statement_list(
        &mut self,
        terminators: &[Keyword],
    ) -> Result<Vec<Statement>, ParserError> {
        let mut body = vec![];
        loop {
            while self.consume_token(&Token::SemiColon) {}
            match self.peek_token() {
                Token::EOF => break,
                Token::Word(w)
                    if matches!(w.keyword, Some(kw) if terminators.contains(&kw)) =>
                {
                    break
                }
                _ => body.push(self.parse_statement()?),
            }
        }
        Ok(body)
    }

    /// `IF <cond> THEN ... [ELSEIF ...] [ELSE ...] END IF`; `IF` has been
    /// consumed.
    pub fn parse_if(&mut self) -> Result<Statement, ParserError> {
        let condition = self.parse_expr()?;
        self.expect_keyword(Keyword::THEN)?;
        let then_body =
            self.parse_statement_list(&[Keyword::ELSEIF, Keyword::ELSE, Keyword::END])?;
        let mut elseifs = vec![];
        while self.parse_keyword(Keyword::ELSEIF) {
            let condition = self.parse_expr()?;
            self.expect_keyword(Keyword::THEN)?;
            let body =
                self.parse_statement_list(&[Keyword::ELSEIF, Keyword::ELSE, Keyword::END])?;
            elseifs.push(ElseIfBlock { condition, body });
        }
        let else_body = if self.parse_keyword(Keyword::ELSE) {
            Some(self.parse_statement_list(&[Keyword::END])?)
        } else {
            None
        };
        self.expect_keywords(&[Keyword::END, Keyword::IF])?;
        Ok(Statement::If(IfStmt {
            condition,
            then_body,
            elseifs,
            else_body,
        }))
    }

    /// `WHILE <cond> DO ... END WHILE`; `WHILE` has been consumed.
    pub fn parse_while(&mut self) -> Result<Statement, ParserError> {
        let condition = self.parse_expr()?;
        self.expect_keyword(Keyword::DO)?;
        let body = self.parse_statement_list(&[Keyword::END])?;
        self.expect_keywords(&[Keyword::END, Keyword::WHILE])?;
        Ok(Statement::While(WhileStmt { condition, body }))
    }

    /// `CASE [<operand>] WHEN <value> THEN ... [ELSE ...] END CASE`; `CASE`
    /// has been consumed.
    pub fn parse_case_statement(&mut self) -> Result<Statement, ParserError> {
        let operand = if self.peek_word_matches(Keyword::WHEN) {
            None
        } else {
            Some(self.parse_expr()?)
        };
        let mut when_blocks = vec![];
        while self.parse_keyword(Keyword::WHEN) {
            let condition = self.parse_expr()?;
            self.expect_keyword(Keyword::THEN)?;
            let body =
                self.parse_statement_list(&[Keyword::WHEN, Keyword::ELSE, Keyword::END])?;
            when_blocks.push(CaseStmtWhen { condition, body });
        }
        let else_body = if self.parse_keyword(Keyword::ELSE) {
            Some(self.parse_statement_list(&[Keyword::END])?)
        } else {
            None
        };
        self.expect_keywords(&[Keyword::END, Keyword::CASE])?;
        Ok(Statement::CaseStatement(CaseStmt {
            operand,
            when_blocks,
            else_body,
        }))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::dialect::{GenericDialect, MsSqlDialect, MySqlDialect, PostgreSqlDialect};

    fn round_trip(sql: &str) {
        let dialect = GenericDialect {};
        let statements = Parser::parse_sql(&dialect, sql).unwrap();
        assert_eq!(statements.len(), 1);
        assert_eq!(statements[0].to_string(), sql);
    }

    #[test]
    fn parse_transactions() {
        round_trip("BEGIN TRANSACTION");
        round_trip("START TRANSACTION READ ONLY, ISOLATION LEVEL SERIALIZABLE");
        round_trip("COMMIT");
        round_trip("COMMIT AND CHAIN");
        round_trip("ROLLBACK TO SAVEPOINT sp1");
        round_trip("SAVEPOINT sp1");
        round_trip("RELEASE SAVEPOINT sp1");
        round_trip("SET TRANSACTION ISOLATION LEVEL READ COMMITTED");
    }

    #[test]
    fn parse_set_statements() {
        round_trip("SET search_path = 'public'");
        round_trip("SET LOCAL a.b = 1");
        round_trip("SET TIME ZONE 'UTC'");
        let dialect = GenericDialect {};
        let statements = Parser::parse_sql(&dialect, "SET x TO 1").unwrap();
        assert_eq!(statements[0].to_string(), "SET x = 1");
        round_trip("SET (a, b) = (1, 2)");
        round_trip("RESET ALL");
        round_trip("RESET timezone");
        round_trip("DISCARD PLANS");
        round_trip("USE db1");
    }

    #[test]
    fn parse_show_statements() {
        round_trip("SHOW CREATE TABLE t");
        round_trip("SHOW TABLES FROM db LIKE '%x%'");
        round_trip("SHOW EXTENDED FULL COLUMNS FROM t");
        round_trip("SHOW FUNCTIONS LIKE 'f%'");
        round_trip("SHOW COLLATION WHERE Charset = 'utf8'");
        round_trip("SHOW max_connections");
    }

    #[test]
    fn parse_grant_revoke() {
        round_trip("GRANT SELECT (a, b), INSERT ON t1, t2 TO r1, r2 WITH GRANT OPTION");
        round_trip("GRANT ALL PRIVILEGES ON ALL TABLES IN SCHEMA s TO r GRANTED BY admin");
        round_trip("REVOKE USAGE ON SCHEMA s FROM r CASCADE");
        round_trip("DENY DELETE ON t TO r");
    }

    #[test]
    fn parse_utility_statements() {
        round_trip("LISTEN events");
        round_trip("NOTIFY events, 'payload'");
        round_trip("PREPARE q (INT, TEXT) AS SELECT * FROM t WHERE a = $1");
        round_trip("EXECUTE q(1, 'x')");
        round_trip("DEALLOCATE PREPARE q");
        round_trip("VACUUM FULL ANALYZE t");
        round_trip("CACHE LAZY TABLE t OPTIONS (retention = '1d') AS SELECT * FROM s");
        round_trip("UNCACHE TABLE IF EXISTS t");
        round_trip("ASSERT a = 1 AS 'expectation failed'");
        round_trip("CALL proc(1, 2)");

        let mssql = MsSqlDialect {};
        let statements =
            Parser::parse_sql(&mssql, "RAISERROR('oops', 16, 1)").unwrap();
        assert_eq!(statements[0].to_string(), "RAISERROR('oops', 16, 1)");
        let statements = Parser::parse_sql(&mssql, "PRINT 'hello'").unwrap();
        assert_eq!(statements[0].to_string(), "PRINT 'hello'");

        let mysql = MySqlDialect {};
        let statements =
            Parser::parse_sql(&mysql, "LOCK TABLES t1 READ LOCAL, t2 AS a WRITE").unwrap();
        assert_eq!(
            statements[0].to_string(),
            "LOCK TABLES t1 READ LOCAL, t2 AS a WRITE"
        );
    }

    #[test]
    fn parse_explain() {
        round_trip("EXPLAIN SELECT * FROM t");
        round_trip("EXPLAIN ANALYZE VERBOSE SELECT 1");
        round_trip("DESCRIBE tbl");
        let dialect = PostgreSqlDialect {};
        let sql = "EXPLAIN (ANALYZE, FORMAT JSON) SELECT 1";
        let statements = Parser::parse_sql(&dialect, sql).unwrap();
        assert_eq!(statements[0].to_string(), sql);
    }

    #[test]
    fn parse_control_blocks() {
        round_trip("IF a = 1 THEN SELECT 1; ELSEIF a = 2 THEN SELECT 2; ELSE SELECT 3; END IF");
        round_trip("WHILE x < 10 DO SET x = x + 1; END WHILE");
        round_trip("CASE x WHEN 1 THEN SELECT 1; ELSE SELECT 2; END CASE");
    }

    #[test]
    fn parse_execute_immediate() {
        round_trip("EXECUTE IMMEDIATE 'SELECT 1' USING 1, 'x'");
    }
}
