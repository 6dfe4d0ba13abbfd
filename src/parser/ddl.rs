//! Data-definition statement parsing: the CREATE/ALTER/DROP families and
//! `COMMENT ON`.

#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, string::ToString, vec, vec::Vec};

use crate::{
    ast::*,
    error::ParserError,
    keywords::Keyword,
    parser::Parser,
    tokens::Token,
};

impl<'a> Parser<'a> {
    /// Dispatches a `CREATE ...` statement; `CREATE` has been consumed.
    pub fn parse_create(&mut self) -> Result<Statement, ParserError> {
        let or_replace = self.parse_keywords(&[Keyword::OR, Keyword::REPLACE]);
        let or_alter = self.parse_keywords(&[Keyword::OR, Keyword::ALTER]);
        let global = if self.parse_keyword(Keyword::GLOBAL) {
            Some(true)
        } else if self.parse_keyword(Keyword::LOCAL) {
            Some(false)
        } else {
            None
        };
        let temporary = self
            .parse_one_of_keywords(&[Keyword::TEMP, Keyword::TEMPORARY])
            .is_some();
        let external = self.parse_keyword(Keyword::EXTERNAL);
        let unique = self.parse_keyword(Keyword::UNIQUE);
        let materialized = self.parse_keyword(Keyword::MATERIALIZED);

        if self.parse_keyword(Keyword::TABLE) {
            self.parse_create_table(or_replace, temporary, external, global)
        } else if self.parse_keyword(Keyword::VIEW) {
            self.parse_create_view(or_replace, materialized, temporary)
        } else if self.parse_keyword(Keyword::INDEX) {
            self.parse_create_index(unique)
        } else if self.parse_keyword(Keyword::SCHEMA) {
            self.parse_create_schema()
        } else if self.parse_keyword(Keyword::DATABASE) {
            self.parse_create_database()
        } else if self.parse_keyword(Keyword::ROLE) {
            self.parse_create_role()
        } else if self.parse_keyword(Keyword::FUNCTION) {
            self.parse_create_function(or_replace, temporary)
        } else if self.parse_keyword(Keyword::PROCEDURE) {
            self.parse_create_procedure(or_alter)
        } else if self.parse_keyword(Keyword::TRIGGER) {
            self.parse_create_trigger(or_replace)
        } else if self.parse_keyword(Keyword::POLICY) {
            self.parse_create_policy()
        } else if self.parse_keyword(Keyword::SEQUENCE) {
            self.parse_create_sequence(temporary)
        } else if self.parse_keyword(Keyword::TYPE) {
            self.parse_create_type()
        } else if self.parse_keyword(Keyword::CONNECTOR) {
            self.parse_create_connector()
        } else if self.parse_keyword(Keyword::SERVER) {
            self.parse_create_server()
        } else {
            self.expected("an object type after CREATE", self.peek_token_with_location())
        }
    }

    fn parse_create_table(
        &mut self,
        or_replace: bool,
        temporary: bool,
        external: bool,
        global: Option<bool>,
    ) -> Result<Statement, ParserError> {
        let if_not_exists =
            self.parse_keywords(&[Keyword::IF, Keyword::NOT, Keyword::EXISTS]);
        let name = self.parse_object_name()?;

        let (partition_of, partition_bound) = if self
            .parse_keywords(&[Keyword::PARTITION, Keyword::OF])
        {
            let parent = self.parse_object_name()?;
            let bound = Some(self.parse_partition_bound()?);
            (Some(parent), bound)
        } else {
            (None, None)
        };

        let (columns, constraints) = self.parse_columns()?;

        let clone = if self.parse_keyword(Keyword::CLONE) {
            Some(self.parse_object_name()?)
        } else {
            None
        };
        let like = if self.parse_keyword(Keyword::LIKE) {
            Some(self.parse_object_name()?)
        } else {
            None
        };
        let on_cluster = if self.parse_keywords(&[Keyword::ON, Keyword::CLUSTER]) {
            Some(self.parse_identifier()?)
        } else {
            None
        };
        let partition_by = if self.parse_keywords(&[Keyword::PARTITION, Keyword::BY]) {
            Some(Box::new(self.parse_expr()?))
        } else {
            None
        };
        let cluster_by = if self.parse_keywords(&[Keyword::CLUSTER, Keyword::BY]) {
            self.parse_comma_separated(Parser::parse_identifier)?
        } else {
            vec![]
        };
        let file_format = if self.parse_keywords(&[Keyword::STORED, Keyword::AS]) {
            Some(self.parse_identifier()?)
        } else {
            None
        };
        let location = if self.parse_keyword(Keyword::LOCATION) {
            Some(self.parse_literal_string()?)
        } else {
            None
        };
        let with_options = self.parse_options(Keyword::WITH)?;
        let comment = if self.parse_keyword(Keyword::COMMENT) {
            Some(self.parse_literal_string()?)
        } else {
            None
        };

        let (query, as_table) = if self.parse_keyword(Keyword::AS) {
            if self.parse_keyword(Keyword::TABLE) {
                (None, Some(self.parse_object_name()?))
            } else {
                (Some(Box::new(self.parse_query()?)), None)
            }
        } else {
            (None, None)
        };

        Ok(Statement::CreateTable(CreateTableStmt {
            or_replace,
            temporary,
            external,
            global,
            if_not_exists,
            name,
            columns,
            constraints,
            partition_of,
            partition_bound,
            clone,
            like,
            on_cluster,
            partition_by,
            cluster_by,
            file_format,
            location,
            with_options,
            comment,
            query,
            as_table,
        }))
    }

    fn parse_partition_bound(&mut self) -> Result<PartitionBound, ParserError> {
        if self.parse_keyword(Keyword::DEFAULT) {
            return Ok(PartitionBound::Default);
        }
        self.expect_keywords(&[Keyword::FOR, Keyword::VALUES])?;
        if self.parse_keyword(Keyword::IN) {
            self.expect_token(&Token::LParen)?;
            let exprs = self.parse_comma_separated(Parser::parse_expr)?;
            self.expect_token(&Token::RParen)?;
            Ok(PartitionBound::In(exprs))
        } else if self.parse_keyword(Keyword::FROM) {
            let from = self.parse_partition_range_bounds()?;
            self.expect_keyword(Keyword::TO)?;
            let to = self.parse_partition_range_bounds()?;
            Ok(PartitionBound::FromTo { from, to })
        } else if self.parse_keyword(Keyword::WITH) {
            self.expect_token(&Token::LParen)?;
            self.expect_keyword(Keyword::MODULUS)?;
            let modulus = self.parse_literal_uint()?;
            self.expect_token(&Token::Comma)?;
            self.expect_keyword(Keyword::REMAINDER)?;
            let remainder = self.parse_literal_uint()?;
            self.expect_token(&Token::RParen)?;
            Ok(PartitionBound::With { modulus, remainder })
        } else {
            self.expected("IN, FROM or WITH", self.peek_token_with_location())
        }
    }

    fn parse_partition_range_bounds(
        &mut self,
    ) -> Result<Vec<PartitionRangeBound>, ParserError> {
        self.expect_token(&Token::LParen)?;
        let bounds = self.parse_comma_separated(|parser| {
            if parser.parse_keyword(Keyword::MINVALUE) {
                Ok(PartitionRangeBound::MinValue)
            } else if parser.parse_keyword(Keyword::MAXVALUE) {
                Ok(PartitionRangeBound::MaxValue)
            } else {
                Ok(PartitionRangeBound::Expr(parser.parse_expr()?))
            }
        })?;
        self.expect_token(&Token::RParen)?;
        Ok(bounds)
    }

    /// Parses the parenthesized column/constraint list of a CREATE TABLE.
    fn parse_columns(&mut self) -> Result<(Vec<ColumnDef>, Vec<TableConstraint>), ParserError> {
        let mut columns = vec![];
        let mut constraints = vec![];
        if !self.consume_token(&Token::LParen) || self.consume_token(&Token::RParen) {
            return Ok((columns, constraints));
        }
        loop {
            if let Some(constraint) = self.parse_optional_table_constraint()? {
                constraints.push(constraint);
            } else if let Token::Word(_) = self.peek_token() {
                columns.push(self.parse_column_def()?);
            } else {
                return self.expected(
                    "column name or constraint definition",
                    self.peek_token_with_location(),
                );
            }
            let comma = self.consume_token(&Token::Comma);
            let rparen = self.peek_token() == Token::RParen;
            if !comma && !rparen {
                return self.expected(
                    "',' or ')' after column definition",
                    self.peek_token_with_location(),
                );
            }
            if rparen && (!comma || self.trailing_commas_allowed()) {
                self.expect_token(&Token::RParen)?;
                break;
            }
        }
        Ok((columns, constraints))
    }

    /// Parses a single column definition.
    pub fn parse_column_def(&mut self) -> Result<ColumnDef, ParserError> {
        let name = self.parse_identifier()?;
        let data_type = self.parse_data_type()?;
        let collation = if self.parse_keyword(Keyword::COLLATE) {
            Some(self.parse_object_name()?)
        } else {
            None
        };
        let mut options = vec![];
        loop {
            if self.parse_keyword(Keyword::CONSTRAINT) {
                let name = Some(self.parse_identifier()?);
                if let Some(option) = self.parse_optional_column_option()? {
                    options.push(ColumnOptionDef { name, option });
                } else {
                    return self.expected(
                        "constraint details after CONSTRAINT <name>",
                        self.peek_token_with_location(),
                    );
                }
            } else if let Some(option) = self.parse_optional_column_option()? {
                options.push(ColumnOptionDef { name: None, option });
            } else {
                break;
            }
        }
        Ok(ColumnDef {
            name,
            data_type,
            collation,
            options,
        })
    }

    fn parse_optional_column_option(&mut self) -> Result<Option<ColumnOption>, ParserError> {
        if self.parse_keywords(&[Keyword::NOT, Keyword::NULL]) {
            Ok(Some(ColumnOption::NotNull))
        } else if self.parse_keyword(Keyword::NULL) {
            Ok(Some(ColumnOption::Null))
        } else if self.parse_keyword(Keyword::DEFAULT) {
            Ok(Some(ColumnOption::Default(self.parse_expr()?)))
        } else if self.parse_keywords(&[Keyword::PRIMARY, Keyword::KEY]) {
            let characteristics = self.parse_constraint_characteristics()?;
            Ok(Some(ColumnOption::Unique {
                is_primary: true,
                characteristics,
            }))
        } else if self.parse_keyword(Keyword::UNIQUE) {
            let characteristics = self.parse_constraint_characteristics()?;
            Ok(Some(ColumnOption::Unique {
                is_primary: false,
                characteristics,
            }))
        } else if self.parse_keyword(Keyword::REFERENCES) {
            let foreign_table = self.parse_object_name()?;
            let referred_columns = self.parse_parenthesized_column_list(true, false)?;
            let match_kind = if self.parse_keyword(Keyword::MATCH) {
                Some(self.parse_referential_match_kind()?)
            } else {
                None
            };
            let mut on_delete = None;
            let mut on_update = None;
            loop {
                if on_delete.is_none() && self.parse_keywords(&[Keyword::ON, Keyword::DELETE]) {
                    on_delete = Some(self.parse_referential_action()?);
                } else if on_update.is_none()
                    && self.parse_keywords(&[Keyword::ON, Keyword::UPDATE])
                {
                    on_update = Some(self.parse_referential_action()?);
                } else {
                    break;
                }
            }
            let characteristics = self.parse_constraint_characteristics()?;
            Ok(Some(ColumnOption::ForeignKey {
                foreign_table,
                referred_columns,
                match_kind,
                on_delete,
                on_update,
                characteristics,
            }))
        } else if self.parse_keyword(Keyword::CHECK) {
            self.expect_token(&Token::LParen)?;
            let expr = self.parse_expr()?;
            self.expect_token(&Token::RParen)?;
            Ok(Some(ColumnOption::Check(expr)))
        } else if self.parse_keyword(Keyword::GENERATED) {
            self.parse_generated_column_option().map(Some)
        } else if self.parse_keyword(Keyword::COMMENT) {
            Ok(Some(ColumnOption::Comment(self.parse_literal_string()?)))
        } else if self.parse_keyword(Keyword::INVISIBLE) {
            Ok(Some(ColumnOption::Invisible))
        } else {
            Ok(None)
        }
    }

    fn parse_generated_column_option(&mut self) -> Result<ColumnOption, ParserError> {
        let generated_as = if self.parse_keyword(Keyword::ALWAYS) {
            GeneratedAs::Always
        } else {
            self.expect_keywords(&[Keyword::BY, Keyword::DEFAULT])?;
            GeneratedAs::ByDefault
        };
        self.expect_keyword(Keyword::AS)?;
        if self.parse_keyword(Keyword::IDENTITY) {
            Ok(ColumnOption::Generated {
                generated_as,
                generation_expr: None,
                stored: false,
            })
        } else {
            self.expect_token(&Token::LParen)?;
            let generation_expr = Some(self.parse_expr()?);
            self.expect_token(&Token::RParen)?;
            let stored = self.parse_keyword(Keyword::STORED);
            Ok(ColumnOption::Generated {
                generated_as,
                generation_expr,
                stored,
            })
        }
    }

    fn parse_referential_match_kind(&mut self) -> Result<ReferentialMatchKind, ParserError> {
        match self.expect_one_of_keywords(&[
            Keyword::FULL,
            Keyword::PARTIAL,
            Keyword::SIMPLE,
        ])? {
            Keyword::FULL => Ok(ReferentialMatchKind::Full),
            Keyword::PARTIAL => Ok(ReferentialMatchKind::Partial),
            _ => Ok(ReferentialMatchKind::Simple),
        }
    }

    fn parse_referential_action(&mut self) -> Result<ReferentialAction, ParserError> {
        if self.parse_keyword(Keyword::RESTRICT) {
            Ok(ReferentialAction::Restrict)
        } else if self.parse_keyword(Keyword::CASCADE) {
            Ok(ReferentialAction::Cascade)
        } else if self.parse_keywords(&[Keyword::SET, Keyword::NULL]) {
            Ok(ReferentialAction::SetNull)
        } else if self.parse_keywords(&[Keyword::NO, Keyword::ACTION]) {
            Ok(ReferentialAction::NoAction)
        } else if self.parse_keywords(&[Keyword::SET, Keyword::DEFAULT]) {
            Ok(ReferentialAction::SetDefault)
        } else {
            self.expected(
                "one of RESTRICT, CASCADE, SET NULL, NO ACTION or SET DEFAULT",
                self.peek_token_with_location(),
            )
        }
    }

    fn parse_constraint_characteristics(
        &mut self,
    ) -> Result<Option<ConstraintCharacteristics>, ParserError> {
        let mut characteristics = ConstraintCharacteristics::default();
        loop {
            if characteristics.deferrable.is_none()
                && self.parse_keywords(&[Keyword::NOT, Keyword::DEFERRABLE])
            {
                characteristics.deferrable = Some(false);
            } else if characteristics.deferrable.is_none()
                && self.parse_keyword(Keyword::DEFERRABLE)
            {
                characteristics.deferrable = Some(true);
            } else if characteristics.initially.is_none()
                && self.parse_keyword(Keyword::INITIALLY)
            {
                if self.parse_keyword(Keyword::DEFERRED) {
                    characteristics.initially = Some(DeferrableInitial::Deferred);
                } else {
                    self.expect_keyword(Keyword::IMMEDIATE)?;
                    characteristics.initially = Some(DeferrableInitial::Immediate);
                }
            } else if characteristics.enforced.is_none()
                && self.parse_keywords(&[Keyword::NOT, Keyword::ENFORCED])
            {
                characteristics.enforced = Some(false);
            } else if characteristics.enforced.is_none() && self.parse_keyword(Keyword::ENFORCED)
            {
                characteristics.enforced = Some(true);
            } else {
                break;
            }
        }
        if characteristics == ConstraintCharacteristics::default() {
            Ok(None)
        } else {
            Ok(Some(characteristics))
        }
    }

    fn parse_optional_table_constraint(
        &mut self,
    ) -> Result<Option<TableConstraint>, ParserError> {
        let name = if self.parse_keyword(Keyword::CONSTRAINT) {
            Some(self.parse_identifier()?)
        } else {
            None
        };
        if self.parse_keywords(&[Keyword::PRIMARY, Keyword::KEY]) {
            let columns = self.parse_parenthesized_column_list(false, false)?;
            let characteristics = self.parse_constraint_characteristics()?;
            Ok(Some(TableConstraint::PrimaryKey {
                name,
                columns,
                characteristics,
            }))
        } else if self.parse_keyword(Keyword::UNIQUE) {
            let columns = self.parse_parenthesized_column_list(false, false)?;
            let characteristics = self.parse_constraint_characteristics()?;
            Ok(Some(TableConstraint::Unique {
                name,
                columns,
                characteristics,
            }))
        } else if self.parse_keywords(&[Keyword::FOREIGN, Keyword::KEY]) {
            let columns = self.parse_parenthesized_column_list(false, false)?;
            self.expect_keyword(Keyword::REFERENCES)?;
            let foreign_table = self.parse_object_name()?;
            let referred_columns = self.parse_parenthesized_column_list(true, false)?;
            let match_kind = if self.parse_keyword(Keyword::MATCH) {
                Some(self.parse_referential_match_kind()?)
            } else {
                None
            };
            let mut on_delete = None;
            let mut on_update = None;
            loop {
                if on_delete.is_none() && self.parse_keywords(&[Keyword::ON, Keyword::DELETE]) {
                    on_delete = Some(self.parse_referential_action()?);
                } else if on_update.is_none()
                    && self.parse_keywords(&[Keyword::ON, Keyword::UPDATE])
                {
                    on_update = Some(self.parse_referential_action()?);
                } else {
                    break;
                }
            }
            let characteristics = self.parse_constraint_characteristics()?;
            Ok(Some(TableConstraint::ForeignKey {
                name,
                columns,
                foreign_table,
                referred_columns,
                match_kind,
                on_delete,
                on_update,
                characteristics,
            }))
        } else if self.parse_keyword(Keyword::CHECK) {
            self.expect_token(&Token::LParen)?;
            let expr = Box::new(self.parse_expr()?);
            self.expect_token(&Token::RParen)?;
            Ok(Some(TableConstraint::Check { name, expr }))
        } else if name.is_some() {
            self.expected(
                "PRIMARY KEY, UNIQUE, FOREIGN KEY or CHECK after CONSTRAINT <name>",
                self.peek_token_with_location(),
            )
        } else {
            Ok(None)
        }
    }

    /// Parses a `<keyword> ( name = value, ... )` option list.
    fn parse_options(&mut self, keyword: Keyword) -> Result<Vec<SqlOption>, ParserError> {
        if self.parse_keyword(keyword) {
            self.expect_token(&Token::LParen)?;
            let options = self.parse_comma_separated(Parser::parse_sql_option)?;
            self.expect_token(&Token::RParen)?;
            Ok(options)
        } else {
            Ok(vec![])
        }
    }

    fn parse_create_view(
        &mut self,
        or_replace: bool,
        materialized: bool,
        temporary: bool,
    ) -> Result<Statement, ParserError> {
        let if_not_exists =
            self.parse_keywords(&[Keyword::IF, Keyword::NOT, Keyword::EXISTS]);
        let name = self.parse_object_name()?;
        let with_options = self.parse_options(Keyword::WITH)?;
        let columns = self.parse_parenthesized_column_list(true, false)?;
        let cluster_by = if self.parse_keywords(&[Keyword::CLUSTER, Keyword::BY]) {
            self.parse_parenthesized_column_list(false, false)?
        } else {
            vec![]
        };
        self.expect_keyword(Keyword::AS)?;
        let query = Box::new(self.parse_query()?);
        Ok(Statement::CreateView(CreateViewStmt {
            or_replace,
            materialized,
            temporary,
            if_not_exists,
            name,
            columns,
            query,
            with_options,
            cluster_by,
        }))
    }

    fn parse_create_index(&mut self, unique: bool) -> Result<Statement, ParserError> {
        let concurrently = self.parse_keyword(Keyword::CONCURRENTLY);
        let if_not_exists =
            self.parse_keywords(&[Keyword::IF, Keyword::NOT, Keyword::EXISTS]);
        let name = if self.peek_word_matches(Keyword::ON) {
            None
        } else {
            Some(self.parse_object_name()?)
        };
        self.expect_keyword(Keyword::ON)?;
        let table_name = self.parse_object_name()?;
        let using = if self.parse_keyword(Keyword::USING) {
            Some(self.parse_identifier()?)
        } else {
            None
        };
        self.expect_token(&Token::LParen)?;
        let columns = self.parse_comma_separated(Parser::parse_order_by_expr)?;
        self.expect_token(&Token::RParen)?;
        let include = if self.parse_keyword(Keyword::INCLUDE) {
            self.parse_parenthesized_column_list(false, false)?
        } else {
            vec![]
        };
        let nulls_distinct = if self.parse_keyword(Keyword::NULLS) {
            let not = self.parse_keyword(Keyword::NOT);
            self.expect_keyword(Keyword::DISTINCT)?;
            Some(!not)
        } else {
            None
        };
        let with = if self.dialect.supports_create_index_with_clause() {
            self.parse_options(Keyword::WITH)?
        } else {
            vec![]
        };
        let predicate = if self.parse_keyword(Keyword::WHERE) {
            Some(self.parse_expr()?)
        } else {
            None
        };
        Ok(Statement::CreateIndex(CreateIndexStmt {
            name,
            table_name,
            using,
            columns,
            unique,
            concurrently,
            if_not_exists,
            include,
            nulls_distinct,
            with,
            predicate,
        }))
    }

    fn parse_create_schema(&mut self) -> Result<Statement, ParserError> {
        let if_not_exists =
            self.parse_keywords(&[Keyword::IF, Keyword::NOT, Keyword::EXISTS]);
        let (name, authorization) = if self.parse_keyword(Keyword::AUTHORIZATION) {
            (None, Some(self.parse_identifier()?))
        } else {
            let name = self.parse_object_name()?;
            let authorization = if self.parse_keyword(Keyword::AUTHORIZATION) {
                Some(self.parse_identifier()?)
            } else {
                None
            };
            (Some(name), authorization)
        };
        Ok(Statement::CreateSchema(CreateSchemaStmt {
            if_not_exists,
            name,
            authorization,
        }))
    }

    fn parse_create_database(&mut self) -> Result<Statement, ParserError> {
        let if_not_exists =
            self.parse_keywords(&[Keyword::IF, Keyword::NOT, Keyword::EXISTS]);
        let db_name = self.parse_object_name()?;
        let mut location = None;
        let mut managed_location = None;
        loop {
            if self.parse_keyword(Keyword::LOCATION) {
                location = Some(self.parse_literal_string()?);
            } else if self.parse_non_keyword_word("MANAGEDLOCATION") {
                managed_location = Some(self.parse_literal_string()?);
            } else {
                break;
            }
        }
        Ok(Statement::CreateDatabase(CreateDatabaseStmt {
            db_name,
            if_not_exists,
            location,
            managed_location,
        }))
    }

    /// Consumes a bare word (one that is not in the keyword table) if it
    /// matches `expected` case-insensitively.
    pub(crate) fn parse_non_keyword_word(&mut self, expected: &str) -> bool {
        match self.peek_token() {
            Token::Word(w) if w.value.eq_ignore_ascii_case(expected) => {
                self.next_token();
                true
            }
            _ => false,
        }
    }

    fn parse_create_role(&mut self) -> Result<Statement, ParserError> {
        let if_not_exists =
            self.parse_keywords(&[Keyword::IF, Keyword::NOT, Keyword::EXISTS]);
        let names = self.parse_comma_separated(Parser::parse_object_name)?;
        let mut login = None;
        let mut inherit = None;
        let mut superuser = None;
        let mut password = None;
        loop {
            if self.parse_keyword(Keyword::LOGIN) {
                login = Some(true);
            } else if self.parse_non_keyword_word("NOLOGIN") {
                login = Some(false);
            } else if self.parse_keyword(Keyword::INHERIT) {
                inherit = Some(true);
            } else if self.parse_non_keyword_word("NOINHERIT") {
                inherit = Some(false);
            } else if self.parse_keyword(Keyword::SUPERUSER) {
                superuser = Some(true);
            } else if self.parse_non_keyword_word("NOSUPERUSER") {
                superuser = Some(false);
            } else if self.parse_keyword(Keyword::PASSWORD) {
                password = if self.parse_keyword(Keyword::NULL) {
                    Some(Password::NullPassword)
                } else {
                    Some(Password::Password(Expr::Value(self.parse_value()?)))
                };
            } else {
                break;
            }
        }
        Ok(Statement::CreateRole(CreateRoleStmt {
            names,
            if_not_exists,
            login,
            inherit,
            superuser,
            password,
        }))
    }

    fn parse_create_function(
        &mut self,
        or_replace: bool,
        temporary: bool,
    ) -> Result<Statement, ParserError> {
        let name = self.parse_object_name()?;
        self.expect_token(&Token::LParen)?;
        let args = if self.consume_token(&Token::RParen) {
            vec![]
        } else {
            let args = self.parse_comma_separated(Parser::parse_function_arg_def)?;
            self.expect_token(&Token::RParen)?;
            args
        };
        let return_type = if self.parse_keyword(Keyword::RETURNS) {
            Some(self.parse_data_type()?)
        } else {
            None
        };
        let language = if self.parse_keyword(Keyword::LANGUAGE) {
            Some(self.parse_identifier()?)
        } else {
            None
        };
        let body = if self.parse_keyword(Keyword::AS) {
            Some(self.parse_expr()?)
        } else {
            None
        };
        Ok(Statement::CreateFunction(CreateFunctionStmt {
            or_replace,
            temporary,
            name,
            args,
            return_type,
            language,
            body,
        }))
    }

    /// One `[name] type [DEFAULT expr]` argument of a CREATE/DROP FUNCTION.
    pub(crate) fn parse_function_arg_def(&mut self) -> Result<OperateFunctionArg, ParserError> {
        // Ambiguity: a lone custom type name looks like an argument name.
        // Try `name type` first and fall back to a bare type.
        let named = self.maybe_parse(|parser| {
            let name = parser.parse_identifier()?;
            let data_type = parser.parse_data_type()?;
            Ok((name, data_type))
        });
        let (name, data_type) = match named {
            Some((name, data_type)) => (Some(name), data_type),
            None => (None, self.parse_data_type()?),
        };
        let default_expr = if self.parse_keyword(Keyword::DEFAULT) {
            Some(self.parse_expr()?)
        } else {
            None
        };
        Ok(OperateFunctionArg {
            name,
            data_type,
            default_expr,
        })
    }

    fn parse_create_procedure(&mut self, or_alter: bool) -> Result<Statement, ParserError> {
        let name = self.parse_object_name()?;
        let params = if self.consume_token(&Token::LParen) {
            let params = self.parse_comma_separated(Parser::parse_function_arg_def)?;
            self.expect_token(&Token::RParen)?;
            params
        } else {
            vec![]
        };
        self.expect_keyword(Keyword::AS)?;
        self.expect_keyword(Keyword::BEGIN)?;
        let mut body = vec![];
        loop {
            while self.consume_token(&Token::SemiColon) {}
            if self.parse_keyword(Keyword::END) {
                break;
            }
            body.push(self.parse_statement()?);
        }
        Ok(Statement::CreateProcedure(CreateProcedureStmt {
            or_alter,
            name,
            params,
            body,
        }))
    }

    fn parse_create_trigger(&mut self, or_replace: bool) -> Result<Statement, ParserError> {
        let name = self.parse_object_name()?;
        let period = if self.parse_keyword(Keyword::BEFORE) {
            TriggerPeriod::Before
        } else if self.parse_keyword(Keyword::AFTER) {
            TriggerPeriod::After
        } else {
            self.expect_keywords(&[Keyword::INSTEAD, Keyword::OF])?;
            TriggerPeriod::InsteadOf
        };
        let mut events = vec![self.parse_trigger_event()?];
        while self.parse_keyword(Keyword::OR) {
            events.push(self.parse_trigger_event()?);
        }
        self.expect_keyword(Keyword::ON)?;
        let table_name = self.parse_object_name()?;
        let for_each = if self.parse_keyword(Keyword::FOR) {
            let _ = self.parse_keyword(Keyword::EACH);
            if self.parse_keyword(Keyword::ROW) {
                Some(TriggerObject::Row)
            } else {
                self.expect_keyword(Keyword::STATEMENT)?;
                Some(TriggerObject::Statement)
            }
        } else {
            None
        };
        let condition = if self.parse_keyword(Keyword::WHEN) {
            self.expect_token(&Token::LParen)?;
            let condition = self.parse_expr()?;
            self.expect_token(&Token::RParen)?;
            Some(condition)
        } else {
            None
        };
        self.expect_keyword(Keyword::EXECUTE)?;
        let is_function = if self.parse_keyword(Keyword::FUNCTION) {
            true
        } else {
            self.expect_keyword(Keyword::PROCEDURE)?;
            false
        };
        let func_name = self.parse_object_name()?;
        self.expect_token(&Token::LParen)?;
        let exec_args = if self.consume_token(&Token::RParen) {
            vec![]
        } else {
            let args = self.parse_comma_separated(Parser::parse_expr)?;
            self.expect_token(&Token::RParen)?;
            args
        };
        Ok(Statement::CreateTrigger(CreateTriggerStmt {
            or_replace,
            name,
            period,
            events,
            table_name,
            for_each,
            condition,
            exec_body: TriggerExecBody {
                is_function,
                func_name,
                args: exec_args,
            },
        }))
    }

    fn parse_trigger_event(&mut self) -> Result<TriggerEvent, ParserError> {
        if self.parse_keyword(Keyword::INSERT) {
            Ok(TriggerEvent::Insert)
        } else if self.parse_keyword(Keyword::UPDATE) {
            let columns = if self.parse_keyword(Keyword::OF) {
                self.parse_comma_separated(Parser::parse_identifier)?
            } else {
                vec![]
            };
            Ok(TriggerEvent::Update(columns))
        } else if self.parse_keyword(Keyword::DELETE) {
            Ok(TriggerEvent::Delete)
        } else if self.parse_keyword(Keyword::TRUNCATE) {
            Ok(TriggerEvent::Truncate)
        } else {
            self.expected(
                "INSERT, UPDATE, DELETE or TRUNCATE",
                self.peek_token_with_location(),
            )
        }
    }

    fn parse_create_policy(&mut self) -> Result<Statement, ParserError> {
        let name = self.parse_identifier()?;
        self.expect_keyword(Keyword::ON)?;
        let table_name = self.parse_object_name()?;
        let policy_type = if self.parse_keyword(Keyword::AS) {
            if self.parse_keyword(Keyword::PERMISSIVE) {
                Some(CreatePolicyType::Permissive)
            } else {
                self.expect_keyword(Keyword::RESTRICTIVE)?;
                Some(CreatePolicyType::Restrictive)
            }
        } else {
            None
        };
        let command = if self.parse_keyword(Keyword::FOR) {
            Some(
                match self.expect_one_of_keywords(&[
                    Keyword::ALL,
                    Keyword::SELECT,
                    Keyword::INSERT,
                    Keyword::UPDATE,
                    Keyword::DELETE,
                ])? {
                    Keyword::ALL => CreatePolicyCommand::All,
                    Keyword::SELECT => CreatePolicyCommand::Select,
                    Keyword::INSERT => CreatePolicyCommand::Insert,
                    Keyword::UPDATE => CreatePolicyCommand::Update,
                    _ => CreatePolicyCommand::Delete,
                },
            )
        } else {
            None
        };
        let to = if self.parse_keyword(Keyword::TO) {
            self.parse_comma_separated(Parser::parse_owner)?
        } else {
            vec![]
        };
        let using = if self.parse_keyword(Keyword::USING) {
            self.expect_token(&Token::LParen)?;
            let expr = self.parse_expr()?;
            self.expect_token(&Token::RParen)?;
            Some(expr)
        } else {
            None
        };
        let with_check = if self.parse_keywords(&[Keyword::WITH, Keyword::CHECK]) {
            self.expect_token(&Token::LParen)?;
            let expr = self.parse_expr()?;
            self.expect_token(&Token::RParen)?;
            Some(expr)
        } else {
            None
        };
        Ok(Statement::CreatePolicy(CreatePolicyStmt {
            name,
            table_name,
            policy_type,
            command,
            to,
            using,
            with_check,
        }))
    }

    pub(crate) fn parse_owner(&mut self) -> Result<Owner, ParserError> {
        if self.parse_keyword(Keyword::CURRENT_USER) {
            Ok(Owner::CurrentUser)
        } else if self.parse_keyword(Keyword::CURRENT_ROLE) {
            Ok(Owner::CurrentRole)
        } else if self.parse_keyword(Keyword::SESSION_USER) {
            Ok(Owner::SessionUser)
        } else {
            Ok(Owner::Ident(self.parse_identifier()?))
        }
    }

    fn parse_create_sequence(&mut self, temporary: bool) -> Result<Statement, ParserError> {
        let if_not_exists =
            self.parse_keywords(&[Keyword::IF, Keyword::NOT, Keyword::EXISTS]);
        let name = self.parse_object_name()?;
        let data_type = if self.parse_keyword(Keyword::AS) {
            Some(self.parse_data_type()?)
        } else {
            None
        };
        let sequence_options = self.parse_sequence_options()?;
        let owned_by = if self.parse_keywords(&[Keyword::OWNED, Keyword::BY]) {
            Some(self.parse_object_name()?)
        } else {
            None
        };
        Ok(Statement::CreateSequence(CreateSequenceStmt {
            temporary,
            if_not_exists,
            name,
            data_type,
            sequence_options,
            owned_by,
        }))
    }

    pub(crate) fn parse_sequence_options(&mut self) -> Result<Vec<SequenceOptions>, ParserError> {
        let mut options = vec![];
        loop {
            if self.parse_keyword(Keyword::INCREMENT) {
                let _ = self.parse_keyword(Keyword::BY);
                options.push(SequenceOptions::IncrementBy(self.parse_expr()?));
            } else if self.parse_keyword(Keyword::MINVALUE) {
                options.push(SequenceOptions::MinValue(self.parse_expr()?));
            } else if self.parse_keywords(&[Keyword::NO, Keyword::MINVALUE]) {
                options.push(SequenceOptions::NoMinValue);
            } else if self.parse_keyword(Keyword::MAXVALUE) {
                options.push(SequenceOptions::MaxValue(self.parse_expr()?));
            } else if self.parse_keywords(&[Keyword::NO, Keyword::MAXVALUE]) {
                options.push(SequenceOptions::NoMaxValue);
            } else if self.parse_keyword(Keyword::START) {
                let _ = self.parse_keyword(Keyword::WITH);
                options.push(SequenceOptions::StartWith(self.parse_expr()?));
            } else if self.parse_keyword(Keyword::CACHE) {
                options.push(SequenceOptions::Cache(self.parse_expr()?));
            } else if self.parse_keywords(&[Keyword::NO, Keyword::CYCLE]) {
                options.push(SequenceOptions::NoCycle);
            } else if self.parse_keyword(Keyword::CYCLE) {
                options.push(SequenceOptions::Cycle);
            } else {
                break;
            }
        }
        Ok(options)
    }

    fn parse_create_type(&mut self) -> Result<Statement, ParserError> {
        let name = self.parse_object_name()?;
        self.expect_keyword(Keyword::AS)?;
        let representation = if self.parse_keyword(Keyword::ENUM) {
            self.expect_token(&Token::LParen)?;
            let labels = self.parse_comma_separated(|parser| parser.parse_literal_string())?;
            self.expect_token(&Token::RParen)?;
            UserDefinedTypeRepresentation::Enum { labels }
        } else {
            self.expect_token(&Token::LParen)?;
            let attributes = self.parse_comma_separated(|parser| {
                let name = parser.parse_identifier()?;
                let data_type = parser.parse_data_type()?;
                Ok(UserDefinedTypeCompositeAttributeDef { name, data_type })
            })?;
            self.expect_token(&Token::RParen)?;
            UserDefinedTypeRepresentation::Composite { attributes }
        };
        Ok(Statement::CreateType(CreateTypeStmt {
            name,
            representation,
        }))
    }

    fn parse_create_connector(&mut self) -> Result<Statement, ParserError> {
        let if_not_exists =
            self.parse_keywords(&[Keyword::IF, Keyword::NOT, Keyword::EXISTS]);
        let name = self.parse_identifier()?;
        let connector_type = if self.parse_keyword(Keyword::TYPE) {
            Some(self.parse_literal_string()?)
        } else {
            None
        };
        let url = if self.parse_keyword(Keyword::URL) {
            Some(self.parse_literal_string()?)
        } else {
            None
        };
        let comment = if self.parse_keyword(Keyword::COMMENT) {
            Some(self.parse_literal_string()?)
        } else {
            None
        };
        let with_dcproperties =
            if self.parse_keyword(Keyword::WITH) && self.parse_non_keyword_word("DCPROPERTIES") {
                self.expect_token(&Token::LParen)?;
                let options = self.parse_comma_separated(Parser::parse_sql_option)?;
                self.expect_token(&Token::RParen)?;
                options
            } else {
                vec![]
            };
        Ok(Statement::CreateConnector(CreateConnectorStmt {
            name,
            if_not_exists,
            connector_type,
            url,
            comment,
            with_dcproperties,
        }))
    }

    fn parse_create_server(&mut self) -> Result<Statement, ParserError> {
        let if_not_exists =
            self.parse_keywords(&[Keyword::IF, Keyword::NOT, Keyword::EXISTS]);
        let name = self.parse_object_name()?;
        let server_type = if self.parse_keyword(Keyword::TYPE) {
            Some(self.parse_identifier()?)
        } else {
            None
        };
        let version = if self.parse_non_keyword_word("VERSION") {
            Some(self.parse_literal_string()?)
        } else {
            None
        };
        self.expect_keywords(&[Keyword::FOREIGN, Keyword::DATA])?;
        if !self.parse_non_keyword_word("WRAPPER") {
            return self.expected("WRAPPER", self.peek_token_with_location());
        }
        let foreign_data_wrapper = self.parse_object_name()?;
        let options = self.parse_options(Keyword::OPTIONS)?;
        Ok(Statement::CreateServer(CreateServerStmt {
            name,
            if_not_exists,
            server_type,
            version,
            foreign_data_wrapper,
            options,
        }))
    }

    // ========================================================================
    // ALTER
    // ========================================================================

    /// Dispatches an `ALTER ...` statement; `ALTER` has been consumed.
    pub fn parse_alter(&mut self) -> Result<Statement, ParserError> {
        if self.parse_keyword(Keyword::TABLE) {
            self.parse_alter_table()
        } else if self.parse_keyword(Keyword::INDEX) {
            let name = self.parse_object_name()?;
            self.expect_keywords(&[Keyword::RENAME, Keyword::TO])?;
            let index_name = self.parse_object_name()?;
            Ok(Statement::AlterIndex(AlterIndexStmt {
                name,
                operation: AlterIndexOperation::RenameIndex { index_name },
            }))
        } else if self.parse_keyword(Keyword::VIEW) {
            let name = self.parse_object_name()?;
            let columns = self.parse_parenthesized_column_list(true, false)?;
            self.expect_keyword(Keyword::AS)?;
            let query = Box::new(self.parse_query()?);
            Ok(Statement::AlterView(AlterViewStmt {
                name,
                columns,
                query,
                with_options: vec![],
            }))
        } else if self.parse_keyword(Keyword::SCHEMA) {
            let name = self.parse_object_name()?;
            let operation = if self.parse_keywords(&[Keyword::RENAME, Keyword::TO]) {
                AlterSchemaOperation::RenameTo(self.parse_identifier()?)
            } else {
                self.expect_keywords(&[Keyword::OWNER, Keyword::TO])?;
                AlterSchemaOperation::OwnerTo(self.parse_owner()?)
            };
            Ok(Statement::AlterSchema(AlterSchemaStmt { name, operation }))
        } else if self.parse_keyword(Keyword::TYPE) {
            self.parse_alter_type()
        } else if self.parse_keyword(Keyword::USER) {
            let name = self.parse_identifier()?;
            let operation = if self.parse_keywords(&[Keyword::RENAME, Keyword::TO]) {
                AlterUserOperation::RenameTo(self.parse_identifier()?)
            } else {
                self.expect_keyword(Keyword::SET)?;
                AlterUserOperation::SetOptions(
                    self.parse_comma_separated(Parser::parse_sql_option)?,
                )
            };
            Ok(Statement::AlterUser(AlterUserStmt { name, operation }))
        } else if self.parse_keyword(Keyword::SEQUENCE) {
            let name = self.parse_object_name()?;
            let sequence_options = self.parse_sequence_options()?;
            Ok(Statement::AlterSequence(AlterSequenceStmt {
                name,
                sequence_options,
            }))
        } else if self.parse_keyword(Keyword::CONNECTOR) {
            self.parse_alter_connector()
        } else {
            self.expected("an object type after ALTER", self.peek_token_with_location())
        }
    }

    fn parse_alter_table(&mut self) -> Result<Statement, ParserError> {
        let if_exists = self.parse_keywords(&[Keyword::IF, Keyword::EXISTS]);
        let only = self.parse_keyword(Keyword::ONLY);
        let name = self.parse_object_name()?;
        let on_cluster = if self.parse_keywords(&[Keyword::ON, Keyword::CLUSTER]) {
            Some(self.parse_identifier()?)
        } else {
            None
        };
        let operations = self.parse_comma_separated(Parser::parse_alter_table_operation)?;
        Ok(Statement::AlterTable(AlterTableStmt {
            name,
            if_exists,
            only,
            operations,
            on_cluster,
        }))
    }

    fn parse_alter_table_operation(&mut self) -> Result<AlterTableOperation, ParserError> {
        if self.parse_keyword(Keyword::ADD) {
            if self.parse_keyword(Keyword::CONSTRAINT) {
                let constraint_name = Some(self.parse_identifier()?);
                // PostgreSQL `ADD CONSTRAINT ... USING INDEX`
                let is_primary = self.parse_keywords(&[Keyword::PRIMARY, Keyword::KEY]);
                if is_primary || self.parse_keyword(Keyword::UNIQUE) {
                    if self.parse_keywords(&[Keyword::USING, Keyword::INDEX]) {
                        let index_name = self.parse_identifier()?;
                        let characteristics = self.parse_constraint_characteristics()?;
                        return Ok(AlterTableOperation::AddConstraintUsingIndex {
                            constraint_name,
                            is_primary,
                            index_name,
                            characteristics,
                        });
                    }
                    let columns = self.parse_parenthesized_column_list(false, false)?;
                    let characteristics = self.parse_constraint_characteristics()?;
                    let constraint = if is_primary {
                        TableConstraint::PrimaryKey {
                            name: constraint_name,
                            columns,
                            characteristics,
                        }
                    } else {
                        TableConstraint::Unique {
                            name: constraint_name,
                            columns,
                            characteristics,
                        }
                    };
                    return Ok(AlterTableOperation::AddConstraint(constraint));
                }
                // any other named constraint
                self.prev_token(); // rewind to re-parse with the generic path
                self.prev_token();
                match self.parse_optional_table_constraint()? {
                    Some(constraint) => return Ok(AlterTableOperation::AddConstraint(constraint)),
                    None => {
                        return self.expected(
                            "a constraint after ADD CONSTRAINT",
                            self.peek_token_with_location(),
                        )
                    }
                }
            }
            if matches!(
                self.peek_token(),
                Token::Word(ref w) if matches!(
                    w.keyword,
                    Some(Keyword::PRIMARY) | Some(Keyword::UNIQUE) | Some(Keyword::FOREIGN) | Some(Keyword::CHECK)
                )
            ) {
                match self.parse_optional_table_constraint()? {
                    Some(constraint) => return Ok(AlterTableOperation::AddConstraint(constraint)),
                    None => unreachable!("peeked a constraint keyword"),
                }
            }
            let column_keyword = self.parse_keyword(Keyword::COLUMN);
            let if_not_exists =
                self.parse_keywords(&[Keyword::IF, Keyword::NOT, Keyword::EXISTS]);
            let column_def = self.parse_column_def()?;
            Ok(AlterTableOperation::AddColumn {
                column_keyword,
                if_not_exists,
                column_def,
            })
        } else if self.parse_keyword(Keyword::DROP) {
            if self.parse_keyword(Keyword::CONSTRAINT) {
                let if_exists = self.parse_keywords(&[Keyword::IF, Keyword::EXISTS]);
                let name = self.parse_identifier()?;
                let behavior = self.parse_optional_drop_behavior();
                Ok(AlterTableOperation::DropConstraint {
                    if_exists,
                    name,
                    behavior,
                })
            } else {
                let _ = self.parse_keyword(Keyword::COLUMN);
                let if_exists = self.parse_keywords(&[Keyword::IF, Keyword::EXISTS]);
                let column_name = self.parse_identifier()?;
                let behavior = self.parse_optional_drop_behavior();
                Ok(AlterTableOperation::DropColumn {
                    if_exists,
                    column_name,
                    behavior,
                })
            }
        } else if self.parse_keyword(Keyword::ALTER) {
            let _ = self.parse_keyword(Keyword::COLUMN);
            let column_name = self.parse_identifier()?;
            let op = if self.parse_keywords(&[Keyword::SET, Keyword::NOT, Keyword::NULL]) {
                AlterColumnOperation::SetNotNull
            } else if self.parse_keywords(&[Keyword::DROP, Keyword::NOT, Keyword::NULL]) {
                AlterColumnOperation::DropNotNull
            } else if self.parse_keywords(&[Keyword::SET, Keyword::DEFAULT]) {
                AlterColumnOperation::SetDefault(self.parse_expr()?)
            } else if self.parse_keywords(&[Keyword::DROP, Keyword::DEFAULT]) {
                AlterColumnOperation::DropDefault
            } else if self.parse_keywords(&[Keyword::SET, Keyword::DATA, Keyword::TYPE])
                || self.parse_keyword(Keyword::TYPE)
            {
                let data_type = self.parse_data_type()?;
                let using = if self.parse_keyword(Keyword::USING) {
                    Some(self.parse_expr()?)
                } else {
                    None
                };
                AlterColumnOperation::SetDataType { data_type, using }
            } else {
                return self.expected(
                    "SET/DROP NOT NULL, SET/DROP DEFAULT or SET DATA TYPE after ALTER COLUMN",
                    self.peek_token_with_location(),
                );
            };
            Ok(AlterTableOperation::AlterColumn { column_name, op })
        } else if self.parse_keyword(Keyword::RENAME) {
            if self.parse_keyword(Keyword::TO) {
                Ok(AlterTableOperation::RenameTable {
                    new_name: self.parse_object_name()?,
                })
            } else {
                let _ = self.parse_keyword(Keyword::COLUMN);
                let old_column_name = self.parse_identifier()?;
                self.expect_keyword(Keyword::TO)?;
                let new_column_name = self.parse_identifier()?;
                Ok(AlterTableOperation::RenameColumn {
                    old_column_name,
                    new_column_name,
                })
            }
        } else if self.parse_keywords(&[Keyword::VALIDATE, Keyword::CONSTRAINT]) {
            Ok(AlterTableOperation::ValidateConstraint {
                name: self.parse_identifier()?,
            })
        } else if self.parse_keywords(&[Keyword::REPLICA, Keyword::IDENTITY]) {
            let identity = if self.parse_keyword(Keyword::NONE) {
                ReplicaIdentity::Nothing
            } else if self.parse_keyword(Keyword::NOTHING) {
                ReplicaIdentity::Nothing
            } else if self.parse_keyword(Keyword::DEFAULT) {
                ReplicaIdentity::Default
            } else if self.parse_keyword(Keyword::FULL) {
                ReplicaIdentity::Full
            } else {
                self.expect_keywords(&[Keyword::USING, Keyword::INDEX])?;
                ReplicaIdentity::Index(self.parse_identifier()?)
            };
            Ok(AlterTableOperation::ReplicaIdentity(identity))
        } else if self.parse_keywords(&[Keyword::SET, Keyword::SCHEMA]) {
            Ok(AlterTableOperation::SetSchema {
                new_schema: self.parse_identifier()?,
            })
        } else if self.parse_keywords(&[Keyword::OWNER, Keyword::TO]) {
            Ok(AlterTableOperation::OwnerTo(self.parse_owner()?))
        } else {
            self.expected(
                "ADD, DROP, ALTER, RENAME, VALIDATE, REPLICA, SET or OWNER after ALTER TABLE",
                self.peek_token_with_location(),
            )
        }
    }

    fn parse_optional_drop_behavior(&mut self) -> Option<DropBehavior> {
        if self.parse_keyword(Keyword::CASCADE) {
            Some(DropBehavior::Cascade)
        } else if self.parse_keyword(Keyword::RESTRICT) {
            Some(DropBehavior::Restrict)
        } else {
            None
        }
    }

    fn parse_alter_type(&mut self) -> Result<Statement, ParserError> {
        let name = self.parse_object_name()?;
        let operation = if self.parse_keywords(&[Keyword::RENAME, Keyword::TO]) {
            AlterTypeOperation::RenameTo(self.parse_identifier()?)
        } else if self.parse_keywords(&[Keyword::ADD, Keyword::VALUE]) {
            AlterTypeOperation::AddValue(self.parse_literal_string()?)
        } else if self.parse_keywords(&[Keyword::RENAME, Keyword::VALUE]) {
            let from = self.parse_literal_string()?;
            self.expect_keyword(Keyword::TO)?;
            let to = self.parse_literal_string()?;
            AlterTypeOperation::RenameValue { from, to }
        } else {
            return self.expected(
                "RENAME TO, ADD VALUE or RENAME VALUE after ALTER TYPE",
                self.peek_token_with_location(),
            );
        };
        Ok(Statement::AlterType(AlterTypeStmt { name, operation }))
    }

    fn parse_alter_connector(&mut self) -> Result<Statement, ParserError> {
        let name = self.parse_identifier()?;
        self.expect_keyword(Keyword::SET)?;
        let mut properties = None;
        let mut url = None;
        let mut owner = None;
        if self.parse_non_keyword_word("DCPROPERTIES") {
            self.expect_token(&Token::LParen)?;
            properties = Some(self.parse_comma_separated(Parser::parse_sql_option)?);
            self.expect_token(&Token::RParen)?;
        } else if self.parse_keyword(Keyword::URL) {
            url = Some(self.parse_literal_string()?);
        } else if self.parse_keyword(Keyword::OWNER) {
            owner = Some(self.parse_owner()?);
        } else {
            return self.expected(
                "DCPROPERTIES, URL or OWNER after ALTER CONNECTOR SET",
                self.peek_token_with_location(),
            );
        }
        Ok(Statement::AlterConnector(AlterConnectorStmt {
            name,
            properties,
            url,
            owner,
        }))
    }

    // ========================================================================
    // DROP
    // ========================================================================

    /// Dispatches a `DROP ...` statement; `DROP` has been consumed.
    pub fn parse_drop(&mut self) -> Result<Statement, ParserError> {
        let temporary = self.parse_keyword(Keyword::TEMPORARY);
        let object_type = if self.parse_keyword(Keyword::TABLE) {
            ObjectType::Table
        } else if self.parse_keyword(Keyword::VIEW) {
            ObjectType::View
        } else if self.parse_keyword(Keyword::INDEX) {
            ObjectType::Index
        } else if self.parse_keyword(Keyword::SCHEMA) {
            ObjectType::Schema
        } else if self.parse_keyword(Keyword::DATABASE) {
            ObjectType::Database
        } else if self.parse_keyword(Keyword::ROLE) {
            ObjectType::Role
        } else if self.parse_keyword(Keyword::SEQUENCE) {
            ObjectType::Sequence
        } else if self.parse_keyword(Keyword::STAGE) {
            ObjectType::Stage
        } else if self.parse_keyword(Keyword::FUNCTION) {
            return self.parse_drop_function();
        } else if self.parse_keyword(Keyword::POLICY) {
            return self.parse_drop_policy();
        } else if self.parse_keyword(Keyword::TRIGGER) {
            return self.parse_drop_trigger();
        } else if self.parse_keyword(Keyword::OPERATOR) {
            return self.parse_drop_operator();
        } else if self.parse_keyword(Keyword::USER) {
            return self.parse_drop_user();
        } else if self.parse_keyword(Keyword::DOMAIN) {
            return self.parse_drop_domain();
        } else if self.parse_keyword(Keyword::CONNECTOR) {
            return self.parse_drop_connector();
        } else if self.parse_keyword(Keyword::EXTENSION) {
            return self.parse_drop_extension();
        } else if self.parse_keyword(Keyword::TYPE) {
            ObjectType::Type
        } else {
            return self.expected(
                "an object type after DROP",
                self.peek_token_with_location(),
            );
        };
        let if_exists = self.parse_keywords(&[Keyword::IF, Keyword::EXISTS]);
        let names = self.parse_comma_separated(Parser::parse_object_name)?;
        let behavior = self.parse_optional_drop_behavior();
        let purge = self.parse_keyword(Keyword::PURGE);
        Ok(Statement::Drop(DropStmt {
            object_type,
            if_exists,
            names,
            behavior,
            purge,
            temporary,
        }))
    }

    fn parse_drop_function(&mut self) -> Result<Statement, ParserError> {
        let if_exists = self.parse_keywords(&[Keyword::IF, Keyword::EXISTS]);
        let func_desc = self.parse_comma_separated(|parser| {
            let name = parser.parse_object_name()?;
            let args = if parser.consume_token(&Token::LParen) {
                if parser.consume_token(&Token::RParen) {
                    Some(vec![])
                } else {
                    let args = parser.parse_comma_separated(Parser::parse_function_arg_def)?;
                    parser.expect_token(&Token::RParen)?;
                    Some(args)
                }
            } else {
                None
            };
            Ok(FunctionDesc { name, args })
        })?;
        let behavior = self.parse_optional_drop_behavior();
        Ok(Statement::DropFunction(DropFunctionStmt {
            if_exists,
            func_desc,
            behavior,
        }))
    }

    fn parse_drop_policy(&mut self) -> Result<Statement, ParserError> {
        let if_exists = self.parse_keywords(&[Keyword::IF, Keyword::EXISTS]);
        let name = self.parse_identifier()?;
        self.expect_keyword(Keyword::ON)?;
        let table_name = self.parse_object_name()?;
        let behavior = self.parse_optional_drop_behavior();
        Ok(Statement::DropPolicy(DropPolicyStmt {
            if_exists,
            name,
            table_name,
            behavior,
        }))
    }

    fn parse_drop_trigger(&mut self) -> Result<Statement, ParserError> {
        let if_exists = self.parse_keywords(&[Keyword::IF, Keyword::EXISTS]);
        let trigger_name = self.parse_object_name()?;
        self.expect_keyword(Keyword::ON)?;
        let table_name = self.parse_object_name()?;
        let behavior = self.parse_optional_drop_behavior();
        Ok(Statement::DropTrigger(DropTriggerStmt {
            if_exists,
            trigger_name,
            table_name,
            behavior,
        }))
    }

    fn parse_drop_operator(&mut self) -> Result<Statement, ParserError> {
        if self.parse_keyword(Keyword::CLASS) {
            return self
                .parse_drop_operator_entity()
                .map(Statement::DropOperatorClass);
        }
        if self.parse_keyword(Keyword::FAMILY) {
            return self
                .parse_drop_operator_entity()
                .map(Statement::DropOperatorFamily);
        }
        let if_exists = self.parse_keywords(&[Keyword::IF, Keyword::EXISTS]);
        let operators = self.parse_comma_separated(|parser| {
            let operator = parser.next_token().to_string();
            parser.expect_token(&Token::LParen)?;
            let left_type = parser.parse_operator_signature_type()?;
            parser.expect_token(&Token::Comma)?;
            let right_type = parser.parse_operator_signature_type()?;
            parser.expect_token(&Token::RParen)?;
            Ok(OperatorSignature {
                operator,
                left_type,
                right_type,
            })
        })?;
        let behavior = self.parse_optional_drop_behavior();
        Ok(Statement::DropOperator(DropOperatorStmt {
            if_exists,
            operators,
            behavior,
        }))
    }

    fn parse_operator_signature_type(&mut self) -> Result<Option<DataType>, ParserError> {
        if self.parse_keyword(Keyword::NONE) {
            Ok(None)
        } else {
            Ok(Some(self.parse_data_type()?))
        }
    }

    fn parse_drop_operator_entity(&mut self) -> Result<DropOperatorEntityStmt, ParserError> {
        let if_exists = self.parse_keywords(&[Keyword::IF, Keyword::EXISTS]);
        let name = self.parse_object_name()?;
        self.expect_keyword(Keyword::USING)?;
        let using = self.parse_identifier()?;
        let behavior = self.parse_optional_drop_behavior();
        Ok(DropOperatorEntityStmt {
            if_exists,
            name,
            using,
            behavior,
        })
    }

    fn parse_drop_user(&mut self) -> Result<Statement, ParserError> {
        let if_exists = self.parse_keywords(&[Keyword::IF, Keyword::EXISTS]);
        let names = self.parse_comma_separated(Parser::parse_identifier)?;
        Ok(Statement::DropUser(DropUserStmt { if_exists, names }))
    }

    fn parse_drop_domain(&mut self) -> Result<Statement, ParserError> {
        let if_exists = self.parse_keywords(&[Keyword::IF, Keyword::EXISTS]);
        let name = self.parse_object_name()?;
        let behavior = self.parse_optional_drop_behavior();
        Ok(Statement::DropDomain(DropDomainStmt {
            if_exists,
            name,
            behavior,
        }))
    }

    fn parse_drop_connector(&mut self) -> Result<Statement, ParserError> {
        let if_exists = self.parse_keywords(&[Keyword::IF, Keyword::EXISTS]);
        let name = self.parse_identifier()?;
        Ok(Statement::DropConnector(DropConnectorStmt {
            if_exists,
            name,
        }))
    }

    fn parse_drop_extension(&mut self) -> Result<Statement, ParserError> {
        let if_exists = self.parse_keywords(&[Keyword::IF, Keyword::EXISTS]);
        let names = self.parse_comma_separated(Parser::parse_identifier)?;
        let behavior = self.parse_optional_drop_behavior();
        Ok(Statement::DropExtension(DropExtensionStmt {
            if_exists,
            names,
            behavior,
        }))
    }

    /// Parses `COMMENT [IF EXISTS] ON <object> IS { '<text>' | NULL }`;
    /// `COMMENT` has been consumed.
    pub fn parse_comment(&mut self) -> Result<Statement, ParserError> {
        let if_exists = self.parse_keywords(&[Keyword::IF, Keyword::EXISTS]);
        self.expect_keyword(Keyword::ON)?;
        let object_type = match self.expect_one_of_keywords(&[
            Keyword::COLUMN,
            Keyword::TABLE,
            Keyword::VIEW,
            Keyword::SCHEMA,
            Keyword::DATABASE,
        ])? {
            Keyword::COLUMN => CommentObject::Column,
            Keyword::TABLE => CommentObject::Table,
            Keyword::VIEW => CommentObject::View,
            Keyword::SCHEMA => CommentObject::Schema,
            _ => CommentObject::Database,
        };
        let object_name = self.parse_object_name()?;
        self.expect_keyword(Keyword::IS)?;
        let comment = if self.parse_keyword(Keyword::NULL) {
            None
        } else {
            Some(self.parse_literal_string()?)
        };
        Ok(Statement::Comment {
            object_type,
            object_name,
            comment,
            if_exists,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::dialect::{ClickHouseDialect, GenericDialect, HiveDialect, PostgreSqlDialect};

    fn round_trip(sql: &str) {
        let dialect = GenericDialect {};
        let statements = Parser::parse_sql(&dialect, sql).unwrap();
        assert_eq!(statements.len(), 1);
        assert_eq!(statements[0].to_string(), sql);
    }

    fn round_trip_with(dialect: &dyn crate::dialect::Dialect, sql: &str) {
        let statements = Parser::parse_sql(dialect, sql).unwrap();
        assert_eq!(statements[0].to_string(), sql);
    }

    #[test]
    fn parse_create_table() {
        round_trip("CREATE TABLE t (a INT NOT NULL, b VARCHAR(10) DEFAULT 'x')");
        round_trip("CREATE OR REPLACE TEMPORARY TABLE IF NOT EXISTS t (a INT)");
        round_trip("CREATE TABLE t (a INT PRIMARY KEY, b INT REFERENCES other (id) ON DELETE CASCADE ON UPDATE SET NULL)");
        round_trip(
            "CREATE TABLE t (a INT, b INT, CONSTRAINT fk FOREIGN KEY (b) REFERENCES o (id) MATCH FULL)",
        );
        round_trip("CREATE TABLE t (a INT CONSTRAINT nn NOT NULL CHECK (a > 0))");
        round_trip("CREATE TABLE t (id INT GENERATED ALWAYS AS IDENTITY, doubled INT GENERATED ALWAYS AS (id * 2) STORED)");
        round_trip("CREATE TABLE t2 AS SELECT * FROM t1");
        round_trip("CREATE TABLE t2 AS TABLE t1");
        round_trip("CREATE TABLE t2 LIKE t1");
        round_trip("CREATE TABLE t2 CLONE t1");
    }

    #[test]
    fn parse_create_table_partitions() {
        let dialect = PostgreSqlDialect {};
        round_trip_with(
            &dialect,
            "CREATE TABLE m0 PARTITION OF m FOR VALUES WITH (MODULUS 4, REMAINDER 0)",
        );
        round_trip_with(
            &dialect,
            "CREATE TABLE q1 PARTITION OF q FOR VALUES FROM (MINVALUE) TO (100)",
        );
        round_trip_with(&dialect, "CREATE TABLE pd PARTITION OF p DEFAULT");
        round_trip_with(&dialect, "CREATE TABLE pl PARTITION OF p FOR VALUES IN (1, 2)");
        let clickhouse = ClickHouseDialect {};
        round_trip_with(
            &clickhouse,
            "CREATE TABLE t (a INT) ON CLUSTER prod PARTITION BY toYYYYMM(d)",
        );
    }

    #[test]
    fn parse_create_external_table() {
        let hive = HiveDialect {};
        round_trip_with(
            &hive,
            "CREATE EXTERNAL TABLE t (a INT) STORED AS PARQUET LOCATION '/data/t'",
        );
    }

    #[test]
    fn parse_create_table_trailing_comma() {
        let dialect = GenericDialect {};
        assert!(Parser::parse_sql(&dialect, "CREATE TABLE t (a INT, b INT,)").is_err());
        let statements = Parser::new(&dialect)
            .with_options(crate::parser::ParserOptions {
                trailing_commas: true,
                ..Default::default()
            })
            .try_with_sql("CREATE TABLE t (a INT, b INT,)")
            .unwrap()
            .parse_statements()
            .unwrap();
        assert_eq!(statements[0].to_string(), "CREATE TABLE t (a INT, b INT)");
    }

    #[test]
    fn parse_create_view_index_schema() {
        round_trip("CREATE VIEW v AS SELECT 1");
        round_trip("CREATE OR REPLACE MATERIALIZED VIEW v (a, b) AS SELECT 1, 2");
        round_trip("CREATE UNIQUE INDEX idx ON t USING btree (a ASC, b DESC)");
        let dialect = PostgreSqlDialect {};
        round_trip_with(
            &dialect,
            "CREATE INDEX idx ON t (a) INCLUDE (b) NULLS NOT DISTINCT WITH (fillfactor = 70) WHERE a > 0",
        );
        round_trip("CREATE SCHEMA IF NOT EXISTS s AUTHORIZATION joe");
        round_trip("CREATE SCHEMA AUTHORIZATION joe");
        round_trip("CREATE DATABASE IF NOT EXISTS db LOCATION '/data/db'");
    }

    #[test]
    fn parse_create_misc_objects() {
        round_trip("CREATE ROLE admin LOGIN SUPERUSER PASSWORD 'secret'");
        round_trip("CREATE FUNCTION add(a INT, b INT) RETURNS INT LANGUAGE SQL AS 'select a + b'");
        round_trip("CREATE TRIGGER trg BEFORE INSERT OR UPDATE OF a ON t FOR EACH ROW WHEN (NEW.a > 0) EXECUTE FUNCTION audit()");
        round_trip("CREATE POLICY p ON t AS PERMISSIVE FOR SELECT TO CURRENT_USER USING (owner = CURRENT_USER)");
        round_trip("CREATE SEQUENCE seq INCREMENT BY 2 MINVALUE 1 MAXVALUE 100 START WITH 10 CACHE 5 CYCLE OWNED BY t.id");
        round_trip("CREATE TYPE mood AS ENUM ('sad', 'ok', 'happy')");
        round_trip("CREATE TYPE pair AS (x INT, y INT)");
        round_trip("CREATE SERVER files FOREIGN DATA WRAPPER file_fdw OPTIONS (root = '/data')");
        let hive = HiveDialect {};
        round_trip_with(
            &hive,
            "CREATE CONNECTOR IF NOT EXISTS pg TYPE 'postgres' URL 'jdbc:postgresql://h/db' WITH DCPROPERTIES (user = 'u')",
        );
        round_trip("CREATE PROCEDURE p AS BEGIN SELECT 1; END");
    }

    #[test]
    fn parse_alter_table() {
        round_trip("ALTER TABLE t ADD COLUMN IF NOT EXISTS a INT");
        round_trip("ALTER TABLE IF EXISTS ONLY t DROP COLUMN IF EXISTS a CASCADE");
        round_trip("ALTER TABLE t ALTER COLUMN a SET NOT NULL");
        round_trip("ALTER TABLE t ALTER COLUMN a SET DATA TYPE BIGINT USING a::BIGINT");
        round_trip("ALTER TABLE t RENAME TO t2");
        round_trip("ALTER TABLE t RENAME COLUMN a TO b");
        round_trip("ALTER TABLE t ADD CONSTRAINT u UNIQUE (a, b) DEFERRABLE INITIALLY DEFERRED");
        round_trip("ALTER TABLE t ADD CONSTRAINT pk PRIMARY KEY USING INDEX idx");
        round_trip("ALTER TABLE t DROP CONSTRAINT IF EXISTS c CASCADE");
        round_trip("ALTER TABLE t VALIDATE CONSTRAINT c");
        round_trip("ALTER TABLE t REPLICA IDENTITY USING INDEX idx");
        round_trip("ALTER TABLE t SET SCHEMA s2, OWNER TO CURRENT_ROLE");
        round_trip("ALTER TABLE t ADD a INT, DROP COLUMN b");
    }

    #[test]
    fn parse_alter_other_objects() {
        round_trip("ALTER INDEX idx RENAME TO idx2");
        round_trip("ALTER VIEW v AS SELECT 1");
        round_trip("ALTER SCHEMA s RENAME TO s2");
        round_trip("ALTER SCHEMA s OWNER TO SESSION_USER");
        round_trip("ALTER TYPE mood ADD VALUE 'meh'");
        round_trip("ALTER TYPE mood RENAME VALUE 'sad' TO 'down'");
        round_trip("ALTER USER u RENAME TO v");
        round_trip("ALTER SEQUENCE seq INCREMENT BY 5 NO MAXVALUE");
        let hive = HiveDialect {};
        round_trip_with(&hive, "ALTER CONNECTOR pg SET URL 'jdbc:postgresql://h2/db'");
    }

    #[test]
    fn parse_drops() {
        round_trip("DROP TABLE IF EXISTS t1, t2 CASCADE");
        round_trip("DROP TEMPORARY TABLE t");
        round_trip("DROP VIEW v RESTRICT");
        round_trip("DROP INDEX idx");
        round_trip("DROP SCHEMA s");
        round_trip("DROP DATABASE db");
        round_trip("DROP ROLE r");
        round_trip("DROP SEQUENCE seq");
        round_trip("DROP TYPE mood");
        round_trip("DROP FUNCTION IF EXISTS f(INT, TEXT), g CASCADE");
        round_trip("DROP POLICY IF EXISTS p ON t RESTRICT");
        round_trip("DROP TRIGGER trg ON t");
        round_trip("DROP OPERATOR CLASS IF EXISTS oc USING btree");
        round_trip("DROP OPERATOR FAMILY of USING gin CASCADE");
        round_trip("DROP USER u1, u2");
        round_trip("DROP DOMAIN d CASCADE");
        round_trip("DROP CONNECTOR IF EXISTS pg");
        round_trip("DROP EXTENSION IF EXISTS postgis CASCADE");
        let dialect = PostgreSqlDialect {};
        let statements =
            Parser::parse_sql(&dialect, "DROP OPERATOR + (INT, INT), @ (NONE, INT)").unwrap();
        assert_eq!(
            statements[0].to_string(),
            "DROP OPERATOR + (INT, INT), @ (NONE, INT)"
        );
    }

    #[test]
    fn parse_comment_on() {
        round_trip("COMMENT ON TABLE t IS 'a table'");
        round_trip("COMMENT ON COLUMN t.a IS NULL");
        round_trip("COMMENT IF EXISTS ON VIEW v IS 'v'");
    }

    #[test]
    fn parse_hive_dialect_create_table() {
        // Hive identifiers may start with a digit
        let hive = HiveDialect {};
        round_trip_with(&hive, "CREATE TABLE 2021_data (a INT)");
    }
}
