//! Query parsing: `WITH`, set operations, `SELECT` bodies, table factors,
//! joins, and the row-pattern sub-grammar of `MATCH_RECOGNIZE`.

#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, vec, vec::Vec};

use crate::{
    ast::*,
    error::ParserError,
    keywords::Keyword,
    parser::Parser,
    tokens::Token,
};

// Set operators bind looser than INTERSECT.
const UNION_PREC: u8 = 10;
const INTERSECT_PREC: u8 = 20;

impl<'a> Parser<'a> {
    /// Parses a query expression: an optional `WITH`, a body of `SELECT`s
    /// combined with set operators, and the trailing ordering/limit/lock
    /// clauses.
    pub fn parse_query(&mut self) -> Result<Query, ParserError> {
        let _guard = self.recursion_guard()?;
        let with = if self.parse_keyword(Keyword::WITH) {
            Some(With {
                recursive: self.parse_keyword(Keyword::RECURSIVE),
                cte_tables: self.parse_comma_separated(Parser::parse_cte)?,
            })
        } else {
            None
        };

        let body = Box::new(self.parse_query_body(0)?);

        let order_by = if self.parse_keywords(&[Keyword::ORDER, Keyword::BY]) {
            self.parse_comma_separated(Parser::parse_order_by_expr)?
        } else {
            vec![]
        };

        let limit = if self.parse_keyword(Keyword::LIMIT) {
            if self.parse_keyword(Keyword::ALL) {
                None
            } else {
                Some(self.parse_expr()?)
            }
        } else {
            None
        };

        let offset = if self.parse_keyword(Keyword::OFFSET) {
            let value = self.parse_expr()?;
            let rows = if self.parse_keyword(Keyword::ROW) {
                OffsetRows::Row
            } else if self.parse_keyword(Keyword::ROWS) {
                OffsetRows::Rows
            } else {
                OffsetRows::None
            };
            Some(Offset { value, rows })
        } else {
            None
        };

        let fetch = if self.parse_keyword(Keyword::FETCH) {
            Some(self.parse_fetch()?)
        } else {
            None
        };

        let mut locks = vec![];
        let mut for_clause = None;
        while self.parse_keyword(Keyword::FOR) {
            if let Some(keyword) =
                self.parse_one_of_keywords(&[Keyword::UPDATE, Keyword::SHARE])
            {
                locks.push(self.parse_lock_clause(keyword)?);
            } else {
                for_clause = Some(self.parse_for_clause()?);
                break;
            }
        }

        Ok(Query {
            with,
            body,
            order_by,
            limit,
            offset,
            fetch,
            locks,
            for_clause,
        })
    }

    /// A single CTE: `alias [(col1, col2, ...)] AS (query) [FROM ident]`.
    fn parse_cte(&mut self) -> Result<Cte, ParserError> {
        let name = self.parse_identifier()?;
        let columns = self.parse_parenthesized_column_list(true, false)?;
        self.expect_keyword(Keyword::AS)?;
        self.expect_token(&Token::LParen)?;
        let query = Box::new(self.parse_query()?);
        self.expect_token(&Token::RParen)?;
        let from = if self.parse_keyword(Keyword::FROM) {
            Some(self.parse_identifier()?)
        } else {
            None
        };
        Ok(Cte {
            alias: TableAlias { name, columns },
            query,
            from,
        })
    }

    /// Parses set operations with proper left-associativity:
    /// `UNION`/`EXCEPT` bind looser than `INTERSECT`.
    fn parse_query_body(&mut self, precedence: u8) -> Result<SetExpr, ParserError> {
        let _guard = self.recursion_guard()?;
        let mut expr = if self.parse_keyword(Keyword::SELECT) {
            SetExpr::Select(Box::new(self.parse_select()?))
        } else if self.consume_token(&Token::LParen) {
            // CTEs are not allowed here, but the parser currently accepts
            // them
            let subquery = self.parse_query()?;
            self.expect_token(&Token::RParen)?;
            SetExpr::Query(Box::new(subquery))
        } else if self.parse_keyword(Keyword::VALUES) {
            SetExpr::Values(self.parse_values()?)
        } else if self.parse_keyword(Keyword::TABLE) {
            SetExpr::Table(self.parse_object_name()?)
        } else {
            return self.expected(
                "SELECT, VALUES, or a subquery in the query body",
                self.peek_token_with_location(),
            );
        };

        loop {
            let (op, next_precedence) = match self.peek_token() {
                Token::Word(w) => match w.keyword {
                    Some(Keyword::UNION) => (SetOperator::Union, UNION_PREC),
                    Some(Keyword::EXCEPT) => (SetOperator::Except, UNION_PREC),
                    Some(Keyword::INTERSECT) => (SetOperator::Intersect, INTERSECT_PREC),
                    _ => break,
                },
                _ => break,
            };
            if precedence >= next_precedence {
                break;
            }
            self.next_token(); // consume the operator
            let set_quantifier = self.parse_set_quantifier()?;
            expr = SetExpr::SetOperation {
                op,
                set_quantifier,
                left: Box::new(expr),
                right: Box::new(self.parse_query_body(next_precedence)?),
            };
        }
        Ok(expr)
    }

    fn parse_set_quantifier(&mut self) -> Result<SetQuantifier, ParserError> {
        if self.parse_keyword(Keyword::ALL) {
            if self.parse_keywords(&[Keyword::BY, Keyword::NAME]) {
                Ok(SetQuantifier::AllByName)
            } else {
                Ok(SetQuantifier::All)
            }
        } else if self.parse_keyword(Keyword::DISTINCT) {
            if self.parse_keywords(&[Keyword::BY, Keyword::NAME]) {
                Ok(SetQuantifier::DistinctByName)
            } else {
                Ok(SetQuantifier::Distinct)
            }
        } else if self.parse_keywords(&[Keyword::BY, Keyword::NAME]) {
            Ok(SetQuantifier::ByName)
        } else {
            Ok(SetQuantifier::None)
        }
    }

    /// Parses a restricted `SELECT` body, assuming the `SELECT` keyword has
    /// been consumed.
    pub fn parse_select(&mut self) -> Result<Select, ParserError> {
        let distinct = self.parse_all_or_distinct()?;
        let projection = self.parse_comma_separated(Parser::parse_select_item)?;

        let into = if self.parse_keyword(Keyword::INTO) {
            let temporary = self
                .parse_one_of_keywords(&[Keyword::TEMP, Keyword::TEMPORARY])
                .is_some();
            let unlogged = self.parse_keyword(Keyword::UNLOGGED);
            let table = self.parse_keyword(Keyword::TABLE);
            let name = self.parse_object_name()?;
            Some(SelectInto {
                temporary,
                unlogged,
                table,
                name,
            })
        } else {
            None
        };

        // Note that for keywords to be properly handled here, they need to be
        // reserved in the keyword lists, otherwise they may be parsed as an
        // alias as part of the `projection` or `from`.
        let from = if self.parse_keyword(Keyword::FROM) {
            self.parse_comma_separated(Parser::parse_table_and_joins)?
        } else {
            vec![]
        };

        let mut lateral_views = vec![];
        while self.parse_keywords(&[Keyword::LATERAL, Keyword::VIEW]) {
            let outer = self.parse_keyword(Keyword::OUTER);
            let lateral_view = self.parse_expr()?;
            let lateral_view_name = self.parse_object_name()?;
            let lateral_col_alias = if self.parse_keyword(Keyword::AS) {
                self.parse_comma_separated(Parser::parse_identifier)?
            } else {
                vec![]
            };
            lateral_views.push(LateralView {
                lateral_view,
                lateral_view_name,
                lateral_col_alias,
                outer,
            });
        }

        let selection = if self.parse_keyword(Keyword::WHERE) {
            Some(self.parse_expr()?)
        } else {
            None
        };

        let group_by = if self.parse_keywords(&[Keyword::GROUP, Keyword::BY]) {
            self.parse_comma_separated(Parser::parse_group_by_expr)?
        } else {
            vec![]
        };

        let cluster_by = if self.parse_keywords(&[Keyword::CLUSTER, Keyword::BY]) {
            self.parse_comma_separated(Parser::parse_expr)?
        } else {
            vec![]
        };

        let distribute_by = if self.parse_keywords(&[Keyword::DISTRIBUTE, Keyword::BY]) {
            self.parse_comma_separated(Parser::parse_expr)?
        } else {
            vec![]
        };

        let sort_by = if self.parse_keywords(&[Keyword::SORT, Keyword::BY]) {
            self.parse_comma_separated(Parser::parse_expr)?
        } else {
            vec![]
        };

        let having = if self.parse_keyword(Keyword::HAVING) {
            Some(self.parse_expr()?)
        } else {
            None
        };

        // WINDOW and QUALIFY may come in either order; remember which so the
        // serializer can reproduce it.
        let mut named_window = vec![];
        let mut qualify = None;
        let mut window_before_qualify = false;
        if self.parse_keyword(Keyword::WINDOW) {
            named_window = self.parse_comma_separated(Parser::parse_named_window)?;
            window_before_qualify = true;
            if self.parse_keyword(Keyword::QUALIFY) {
                qualify = Some(self.parse_expr()?);
            }
        } else if self.parse_keyword(Keyword::QUALIFY) {
            qualify = Some(self.parse_expr()?);
            if self.parse_keyword(Keyword::WINDOW) {
                named_window = self.parse_comma_separated(Parser::parse_named_window)?;
            }
        }

        let connect_by = if self.dialect.supports_connect_by() {
            self.parse_optional_connect_by()?
        } else {
            None
        };

        Ok(Select {
            distinct,
            projection,
            into,
            from,
            lateral_views,
            selection,
            group_by,
            cluster_by,
            distribute_by,
            sort_by,
            having,
            named_window,
            qualify,
            connect_by,
            window_before_qualify,
        })
    }

    /// `START WITH ... CONNECT BY ...`, accepted in either order.
    fn parse_optional_connect_by(&mut self) -> Result<Option<ConnectBy>, ParserError> {
        if self.parse_keywords(&[Keyword::START, Keyword::WITH]) {
            let condition = Box::new(self.parse_expr()?);
            self.expect_keywords(&[Keyword::CONNECT, Keyword::BY])?;
            let relationships = self.parse_comma_separated(Parser::parse_expr)?;
            Ok(Some(ConnectBy {
                condition,
                relationships,
            }))
        } else if self.parse_keywords(&[Keyword::CONNECT, Keyword::BY]) {
            let relationships = self.parse_comma_separated(Parser::parse_expr)?;
            self.expect_keywords(&[Keyword::START, Keyword::WITH])?;
            let condition = Box::new(self.parse_expr()?);
            Ok(Some(ConnectBy {
                condition,
                relationships,
            }))
        } else {
            Ok(None)
        }
    }

    fn parse_group_by_expr(&mut self) -> Result<Expr, ParserError> {
        if !self.dialect.supports_group_by_expr() {
            return self.parse_expr();
        }
        if self.parse_keywords(&[Keyword::GROUPING, Keyword::SETS]) {
            self.expect_token(&Token::LParen)?;
            let result = self.parse_comma_separated(|p| p.parse_tuple(false, true))?;
            self.expect_token(&Token::RParen)?;
            Ok(Expr::GroupingSets(result))
        } else if self.parse_keyword(Keyword::CUBE) {
            self.expect_token(&Token::LParen)?;
            let result = self.parse_comma_separated(|p| p.parse_tuple(true, true))?;
            self.expect_token(&Token::RParen)?;
            Ok(Expr::Cube(result))
        } else if self.parse_keyword(Keyword::ROLLUP) {
            self.expect_token(&Token::LParen)?;
            let result = self.parse_comma_separated(|p| p.parse_tuple(true, true))?;
            self.expect_token(&Token::RParen)?;
            Ok(Expr::Rollup(result))
        } else {
            self.parse_expr()
        }
    }

    /// Parses a parenthesized, comma-separated list of expressions; with
    /// `lift_singleton` a bare expression is accepted as a one-element list.
    fn parse_tuple(
        &mut self,
        lift_singleton: bool,
        allow_empty: bool,
    ) -> Result<Vec<Expr>, ParserError> {
        if lift_singleton && !matches!(self.peek_token(), Token::LParen) {
            return Ok(vec![self.parse_expr()?]);
        }
        self.expect_token(&Token::LParen)?;
        if allow_empty && self.consume_token(&Token::RParen) {
            return Ok(vec![]);
        }
        let result = self.parse_comma_separated(Parser::parse_expr)?;
        self.expect_token(&Token::RParen)?;
        Ok(result)
    }

    /// One projection item, with wildcard modifiers and optional alias.
    pub fn parse_select_item(&mut self) -> Result<SelectItem, ParserError> {
        match self.parse_expr()? {
            Expr::Wildcard => Ok(SelectItem::Wildcard(
                self.parse_wildcard_additional_options()?,
            )),
            Expr::QualifiedWildcard(prefix) => Ok(SelectItem::QualifiedWildcard(
                ObjectName(prefix),
                self.parse_wildcard_additional_options()?,
            )),
            expr => match self.parse_optional_alias(crate::keywords::RESERVED_FOR_COLUMN_ALIAS)? {
                Some(alias) => Ok(SelectItem::ExprWithAlias { expr, alias }),
                None => Ok(SelectItem::UnnamedExpr(expr)),
            },
        }
    }

    fn parse_wildcard_additional_options(
        &mut self,
    ) -> Result<WildcardAdditionalOptions, ParserError> {
        let mut options = WildcardAdditionalOptions::default();
        if !self.dialect.supports_select_wildcard_except() {
            return Ok(options);
        }
        if self.parse_keyword(Keyword::EXCEPT) {
            let columns = self.parse_parenthesized_column_list(false, false)?;
            options.opt_except = Some(ExceptSelectItem { columns });
        }
        if self.parse_keyword(Keyword::REPLACE) {
            self.expect_token(&Token::LParen)?;
            let items = self.parse_comma_separated(|parser| {
                let expr = parser.parse_expr()?;
                parser.expect_keyword(Keyword::AS)?;
                let column_name = parser.parse_identifier()?;
                Ok(ReplaceSelectElement { expr, column_name })
            })?;
            self.expect_token(&Token::RParen)?;
            options.opt_replace = Some(ReplaceSelectItem { items });
        }
        Ok(options)
    }

    fn parse_named_window(&mut self) -> Result<NamedWindowDefinition, ParserError> {
        let ident = self.parse_identifier()?;
        self.expect_keyword(Keyword::AS)?;
        let window_expr = if self.consume_token(&Token::LParen) {
            let spec = self.parse_window_spec()?;
            self.expect_token(&Token::RParen)?;
            NamedWindowExpr::WindowSpec(spec)
        } else if self.dialect.supports_window_clause_named_window_reference() {
            NamedWindowExpr::NamedWindow(self.parse_identifier()?)
        } else {
            return self.expected("(", self.peek_token_with_location());
        };
        Ok(NamedWindowDefinition(ident, window_expr))
    }

    fn parse_values(&mut self) -> Result<Values, ParserError> {
        let mut explicit_row = false;
        let rows = self.parse_comma_separated(|parser| {
            if parser.parse_keyword(Keyword::ROW) {
                explicit_row = true;
            }
            parser.expect_token(&Token::LParen)?;
            let exprs = parser.parse_comma_separated(Parser::parse_expr)?;
            parser.expect_token(&Token::RParen)?;
            Ok(exprs)
        })?;
        Ok(Values { explicit_row, rows })
    }

    fn parse_fetch(&mut self) -> Result<Fetch, ParserError> {
        self.expect_one_of_keywords(&[Keyword::FIRST, Keyword::NEXT])?;
        let (quantity, percent) = if self
            .parse_one_of_keywords(&[Keyword::ROW, Keyword::ROWS])
            .is_some()
        {
            (None, false)
        } else {
            let quantity = self.parse_expr()?;
            let percent = self.parse_keyword(Keyword::PERCENT);
            self.expect_one_of_keywords(&[Keyword::ROW, Keyword::ROWS])?;
            (Some(quantity), percent)
        };
        let with_ties = if self.parse_keyword(Keyword::ONLY) {
            false
        } else if self.parse_keywords(&[Keyword::WITH, Keyword::TIES]) {
            true
        } else {
            return self.expected("ONLY or WITH TIES", self.peek_token_with_location());
        };
        Ok(Fetch {
            quantity,
            percent,
            with_ties,
        })
    }

    fn parse_lock_clause(&mut self, keyword: Keyword) -> Result<LockClause, ParserError> {
        let lock_type = match keyword {
            Keyword::UPDATE => LockType::Update,
            _ => LockType::Share,
        };
        let of = if self.parse_keyword(Keyword::OF) {
            Some(self.parse_object_name()?)
        } else {
            None
        };
        let nonblock = if self.parse_keyword(Keyword::NOWAIT) {
            Some(NonBlock::Nowait)
        } else if self.parse_keywords(&[Keyword::SKIP, Keyword::LOCKED]) {
            Some(NonBlock::SkipLocked)
        } else {
            None
        };
        Ok(LockClause {
            lock_type,
            of,
            nonblock,
        })
    }

    fn parse_for_clause(&mut self) -> Result<ForClause, ParserError> {
        if self.parse_keyword(Keyword::BROWSE) {
            Ok(ForClause::Browse)
        } else if self.parse_keyword(Keyword::JSON) {
            let mode = self.parse_identifier()?;
            let auto = match mode.value.to_uppercase().as_str() {
                "AUTO" => true,
                "PATH" => false,
                _ => {
                    return self.expected("AUTO or PATH", self.peek_token_with_location());
                }
            };
            Ok(ForClause::Json { auto, root: None })
        } else if self.parse_keyword(Keyword::XML) {
            let mode = if self.parse_keyword(Keyword::PATH) {
                ForXmlMode::Path
            } else {
                let word = self.parse_identifier()?;
                match word.value.to_uppercase().as_str() {
                    "AUTO" => ForXmlMode::Auto,
                    "RAW" => ForXmlMode::Raw,
                    _ => return self.expected("AUTO, RAW or PATH", self.peek_token_with_location()),
                }
            };
            Ok(ForClause::Xml { mode })
        } else {
            self.expected(
                "UPDATE, SHARE, BROWSE, JSON or XML after FOR",
                self.peek_token_with_location(),
            )
        }
    }

    // ========================================================================
    // Table factors and joins
    // ========================================================================

    /// One item of a `FROM` list: a table factor and the joins chained onto
    /// it.
    pub fn parse_table_and_joins(&mut self) -> Result<TableWithJoins, ParserError> {
        let relation = self.parse_table_factor()?;
        // Note that for keywords to be properly handled here, they need to
        // be reserved in the keyword lists, otherwise they may be parsed as
        // an alias as part of the `projection` or `from`.
        let mut joins = vec![];
        loop {
            let global = self.parse_keyword(Keyword::GLOBAL);
            let natural = self.parse_keyword(Keyword::NATURAL);

            let peeked = match self.peek_token() {
                Token::Word(w) => w.keyword,
                _ => None,
            };
            let join_operator_ctor: fn(JoinConstraint) -> JoinOperator = match peeked {
                Some(Keyword::CROSS) => {
                    self.next_token();
                    self.expect_keyword(Keyword::JOIN)?;
                    let relation = self.parse_table_factor()?;
                    joins.push(Join {
                        relation,
                        global,
                        join_operator: JoinOperator::CrossJoin,
                    });
                    continue;
                }
                Some(Keyword::JOIN) => {
                    self.next_token();
                    JoinOperator::Inner
                }
                Some(Keyword::INNER) => {
                    self.next_token();
                    self.expect_keyword(Keyword::JOIN)?;
                    JoinOperator::Inner
                }
                Some(Keyword::LEFT) => {
                    self.next_token();
                    if self.parse_keyword(Keyword::SEMI) {
                        self.expect_keyword(Keyword::JOIN)?;
                        JoinOperator::LeftSemi
                    } else if self.parse_keyword(Keyword::ANTI) {
                        self.expect_keyword(Keyword::JOIN)?;
                        JoinOperator::LeftAnti
                    } else {
                        let _ = self.parse_keyword(Keyword::OUTER);
                        self.expect_keyword(Keyword::JOIN)?;
                        JoinOperator::LeftOuter
                    }
                }
                Some(Keyword::RIGHT) => {
                    self.next_token();
                    if self.parse_keyword(Keyword::SEMI) {
                        self.expect_keyword(Keyword::JOIN)?;
                        JoinOperator::RightSemi
                    } else if self.parse_keyword(Keyword::ANTI) {
                        self.expect_keyword(Keyword::JOIN)?;
                        JoinOperator::RightAnti
                    } else {
                        let _ = self.parse_keyword(Keyword::OUTER);
                        self.expect_keyword(Keyword::JOIN)?;
                        JoinOperator::RightOuter
                    }
                }
                Some(Keyword::FULL) => {
                    self.next_token();
                    let _ = self.parse_keyword(Keyword::OUTER);
                    self.expect_keyword(Keyword::JOIN)?;
                    JoinOperator::FullOuter
                }
                Some(Keyword::SEMI) => {
                    self.next_token();
                    self.expect_keyword(Keyword::JOIN)?;
                    JoinOperator::Semi
                }
                Some(Keyword::ANTI) => {
                    self.next_token();
                    self.expect_keyword(Keyword::JOIN)?;
                    JoinOperator::Anti
                }
                Some(Keyword::STRAIGHT_JOIN) => {
                    self.next_token();
                    JoinOperator::StraightJoin
                }
                _ => {
                    if natural {
                        return self.expected(
                            "a join type after NATURAL",
                            self.peek_token_with_location(),
                        );
                    }
                    break;
                }
            };
            let relation = self.parse_table_factor()?;
            let join_constraint = self.parse_join_constraint(natural)?;
            joins.push(Join {
                relation,
                global,
                join_operator: join_operator_ctor(join_constraint),
            });
        }
        Ok(TableWithJoins { relation, joins })
    }

    fn parse_join_constraint(&mut self, natural: bool) -> Result<JoinConstraint, ParserError> {
        if natural {
            Ok(JoinConstraint::Natural)
        } else if self.parse_keyword(Keyword::ON) {
            Ok(JoinConstraint::On(self.parse_expr()?))
        } else if self.parse_keyword(Keyword::USING) {
            Ok(JoinConstraint::Using(
                self.parse_parenthesized_column_list(false, false)?,
            ))
        } else {
            Ok(JoinConstraint::None)
        }
    }

    /// A table or a derived table, with PIVOT/UNPIVOT/TABLESAMPLE and
    /// MATCH_RECOGNIZE wrappers applied afterwards.
    pub fn parse_table_factor(&mut self) -> Result<TableFactor, ParserError> {
        let factor = self.parse_table_factor_inner()?;
        self.parse_table_factor_wrappers(factor)
    }

    fn parse_table_factor_inner(&mut self) -> Result<TableFactor, ParserError> {
        if self.parse_keyword(Keyword::LATERAL) {
            if self.consume_token(&Token::LParen) {
                return self.parse_derived_table_factor(true);
            }
            let name = self.parse_object_name()?;
            self.expect_token(&Token::LParen)?;
            let args = self.parse_table_function_args()?;
            let alias = self.parse_optional_table_alias()?;
            return Ok(TableFactor::Function {
                lateral: true,
                name,
                args,
                alias,
            });
        }

        if self.consume_token(&Token::LParen) {
            if self.peek_is_query_start() {
                return self.parse_derived_table_factor(false);
            }
            // A parenthesized join: `(foo <JOIN> bar [<JOIN> baz ...])`
            let table_with_joins = Box::new(self.parse_table_and_joins()?);
            self.expect_token(&Token::RParen)?;
            let alias = self.parse_optional_table_alias()?;
            return Ok(TableFactor::NestedJoin {
                table_with_joins,
                alias,
            });
        }

        if self.parse_keyword(Keyword::UNNEST) {
            self.expect_token(&Token::LParen)?;
            let array_exprs = self.parse_comma_separated(Parser::parse_expr)?;
            self.expect_token(&Token::RParen)?;
            let alias = self.parse_optional_table_alias()?;
            let with_offset = self.parse_keywords(&[Keyword::WITH, Keyword::OFFSET]);
            let with_offset_alias = if with_offset && self.parse_keyword(Keyword::AS) {
                Some(self.parse_identifier()?)
            } else {
                None
            };
            return Ok(TableFactor::UnNest {
                alias,
                array_exprs,
                with_offset,
                with_offset_alias,
            });
        }

        if self.peek_word_matches(Keyword::TABLE) && self.peek_nth_token(1) == Token::LParen {
            self.next_token();
            self.expect_token(&Token::LParen)?;
            let expr = self.parse_expr()?;
            self.expect_token(&Token::RParen)?;
            let alias = self.parse_optional_table_alias()?;
            return Ok(TableFactor::TableFunction { expr, alias });
        }

        if self.peek_word_matches(Keyword::XMLTABLE) && self.peek_nth_token(1) == Token::LParen {
            self.next_token();
            return self.parse_xml_table_factor();
        }
        if self.peek_word_matches(Keyword::OPENJSON) && self.peek_nth_token(1) == Token::LParen {
            self.next_token();
            return self.parse_open_json_table_factor();
        }
        if self.peek_word_matches(Keyword::JSON_TABLE) && self.peek_nth_token(1) == Token::LParen {
            self.next_token();
            return self.parse_json_table_factor();
        }
        if self.peek_word_matches(Keyword::SEMANTIC_VIEW) && self.peek_nth_token(1) == Token::LParen
        {
            self.next_token();
            return self.parse_semantic_view_factor();
        }

        let name = self.parse_object_name()?;

        // MySQL partition selection
        let partitions = if self.peek_word_matches(Keyword::PARTITION)
            && self.peek_nth_token(1) == Token::LParen
        {
            self.next_token();
            self.parse_parenthesized_column_list(false, false)?
        } else {
            vec![]
        };

        // Table-valued function arguments
        let args = if self.consume_token(&Token::LParen) {
            Some(self.parse_table_function_args()?)
        } else {
            None
        };

        let alias = self.parse_optional_table_alias()?;

        // MSSQL-style `WITH (NOLOCK, ...)` hints
        let with_hints = if self.peek_word_matches(Keyword::WITH)
            && self.peek_nth_token(1) == Token::LParen
        {
            self.next_token();
            self.expect_token(&Token::LParen)?;
            let hints = self.parse_comma_separated(Parser::parse_expr)?;
            self.expect_token(&Token::RParen)?;
            hints
        } else {
            vec![]
        };

        Ok(TableFactor::Table {
            name,
            alias,
            args,
            with_hints,
            partitions,
        })
    }

    fn parse_table_function_args(&mut self) -> Result<Vec<FunctionArg>, ParserError> {
        if self.consume_token(&Token::RParen) {
            return Ok(vec![]);
        }
        let args = self.parse_comma_separated(Parser::parse_function_arg)?;
        self.expect_token(&Token::RParen)?;
        Ok(args)
    }

    fn parse_derived_table_factor(&mut self, lateral: bool) -> Result<TableFactor, ParserError> {
        let subquery = Box::new(self.parse_query()?);
        self.expect_token(&Token::RParen)?;
        let alias = self.parse_optional_table_alias()?;
        Ok(TableFactor::Derived {
            lateral,
            subquery,
            alias,
        })
    }

    /// Applies PIVOT/UNPIVOT/TABLESAMPLE/MATCH_RECOGNIZE suffixes, which can
    /// stack.
    fn parse_table_factor_wrappers(
        &mut self,
        mut factor: TableFactor,
    ) -> Result<TableFactor, ParserError> {
        loop {
            if self.parse_keyword(Keyword::PIVOT) {
                factor = self.parse_pivot_table_factor(factor)?;
            } else if self.parse_keyword(Keyword::UNPIVOT) {
                factor = self.parse_unpivot_table_factor(factor)?;
            } else if self.parse_keyword(Keyword::TABLESAMPLE) {
                factor = self.parse_table_sample_factor(factor)?;
            } else if self.dialect.supports_match_recognize()
                && self.parse_keyword(Keyword::MATCH_RECOGNIZE)
            {
                factor = self.parse_match_recognize(factor)?;
            } else {
                return Ok(factor);
            }
        }
    }

    fn parse_expr_with_alias(&mut self) -> Result<ExprWithAlias, ParserError> {
        let expr = self.parse_expr()?;
        let alias = self.parse_optional_alias(crate::keywords::RESERVED_FOR_COLUMN_ALIAS)?;
        Ok(ExprWithAlias { expr, alias })
    }

    fn parse_pivot_table_factor(
        &mut self,
        table: TableFactor,
    ) -> Result<TableFactor, ParserError> {
        self.expect_token(&Token::LParen)?;
        let aggregate_functions = self.parse_comma_separated(Parser::parse_expr_with_alias)?;
        self.expect_keyword(Keyword::FOR)?;
        let value_column = self.parse_object_name()?.0;
        self.expect_keyword(Keyword::IN)?;
        self.expect_token(&Token::LParen)?;
        let value_source = self.parse_comma_separated(Parser::parse_expr_with_alias)?;
        self.expect_token(&Token::RParen)?;
        self.expect_token(&Token::RParen)?;
        let alias = self.parse_optional_table_alias()?;
        Ok(TableFactor::Pivot {
            table: Box::new(table),
            aggregate_functions,
            value_column,
            value_source,
            alias,
        })
    }

    fn parse_unpivot_table_factor(
        &mut self,
        table: TableFactor,
    ) -> Result<TableFactor, ParserError> {
        self.expect_token(&Token::LParen)?;
        let value = self.parse_identifier()?;
        self.expect_keyword(Keyword::FOR)?;
        let name = self.parse_identifier()?;
        self.expect_keyword(Keyword::IN)?;
        let columns = self.parse_parenthesized_column_list(false, false)?;
        self.expect_token(&Token::RParen)?;
        let alias = self.parse_optional_table_alias()?;
        Ok(TableFactor::Unpivot {
            table: Box::new(table),
            value,
            name,
            columns,
            alias,
        })
    }

    fn parse_table_sample_factor(
        &mut self,
        table: TableFactor,
    ) -> Result<TableFactor, ParserError> {
        let method = match self.peek_token() {
            Token::Word(_) => Some(self.parse_identifier()?),
            _ => None,
        };
        self.expect_token(&Token::LParen)?;
        let quantity = Box::new(self.parse_expr()?);
        let unit = if self.parse_keyword(Keyword::ROWS) {
            Some(TableSampleUnit::Rows)
        } else if self.parse_keyword(Keyword::PERCENT) {
            Some(TableSampleUnit::Percent)
        } else {
            None
        };
        self.expect_token(&Token::RParen)?;
        Ok(TableFactor::TableSample {
            table: Box::new(table),
            method,
            quantity,
            unit,
        })
    }

    fn parse_xml_table_factor(&mut self) -> Result<TableFactor, ParserError> {
        self.expect_token(&Token::LParen)?;
        let row_expression = Box::new(self.parse_expr()?);
        self.expect_keyword(Keyword::PASSING)?;
        let passing = Box::new(self.parse_expr()?);
        self.expect_keyword(Keyword::COLUMNS)?;
        let columns = self.parse_comma_separated(|parser| {
            let name = parser.parse_identifier()?;
            let r#type = parser.parse_data_type()?;
            let path = if parser.parse_keyword(Keyword::PATH) {
                Some(parser.parse_value()?)
            } else {
                None
            };
            Ok(XmlTableColumn { name, r#type, path })
        })?;
        self.expect_token(&Token::RParen)?;
        let alias = self.parse_optional_table_alias()?;
        Ok(TableFactor::XmlTable {
            row_expression,
            passing,
            columns,
            alias,
        })
    }

    fn parse_open_json_table_factor(&mut self) -> Result<TableFactor, ParserError> {
        self.expect_token(&Token::LParen)?;
        let json_expr = Box::new(self.parse_expr()?);
        let json_path = if self.consume_token(&Token::Comma) {
            Some(self.parse_value()?)
        } else {
            None
        };
        self.expect_token(&Token::RParen)?;
        let columns = if self.parse_keyword(Keyword::WITH) {
            self.expect_token(&Token::LParen)?;
            let columns = self.parse_comma_separated(|parser| {
                let name = parser.parse_identifier()?;
                let r#type = parser.parse_data_type()?;
                let path = match parser.peek_token() {
                    Token::SingleQuotedString(_) => Some(parser.parse_value()?),
                    _ => None,
                };
                let as_json = parser.parse_keywords(&[Keyword::AS, Keyword::JSON]);
                Ok(OpenJsonTableColumn {
                    name,
                    r#type,
                    path,
                    as_json,
                })
            })?;
            self.expect_token(&Token::RParen)?;
            columns
        } else {
            vec![]
        };
        let alias = self.parse_optional_table_alias()?;
        Ok(TableFactor::OpenJson {
            json_expr,
            json_path,
            columns,
            alias,
        })
    }

    fn parse_json_table_factor(&mut self) -> Result<TableFactor, ParserError> {
        self.expect_token(&Token::LParen)?;
        let json_expr = Box::new(self.parse_expr()?);
        self.expect_token(&Token::Comma)?;
        let json_path = self.parse_value()?;
        self.expect_keyword(Keyword::COLUMNS)?;
        self.expect_token(&Token::LParen)?;
        let columns = self.parse_comma_separated(|parser| {
            let name = parser.parse_identifier()?;
            if parser.parse_keywords(&[Keyword::FOR, Keyword::ORDINALITY]) {
                return Ok(JsonTableColumn {
                    name,
                    r#type: None,
                    path: None,
                    exists: false,
                    for_ordinality: true,
                });
            }
            let r#type = Some(parser.parse_data_type()?);
            let exists = parser.parse_keyword(Keyword::EXISTS);
            let path = if parser.parse_keyword(Keyword::PATH) {
                Some(parser.parse_value()?)
            } else {
                None
            };
            Ok(JsonTableColumn {
                name,
                r#type,
                path,
                exists,
                for_ordinality: false,
            })
        })?;
        self.expect_token(&Token::RParen)?;
        self.expect_token(&Token::RParen)?;
        let alias = self.parse_optional_table_alias()?;
        Ok(TableFactor::JsonTable {
            json_expr,
            json_path,
            columns,
            alias,
        })
    }

    fn parse_semantic_view_factor(&mut self) -> Result<TableFactor, ParserError> {
        self.expect_token(&Token::LParen)?;
        let name = self.parse_object_name()?;
        let metrics = if self.parse_keyword(Keyword::METRICS) {
            self.parse_comma_separated(Parser::parse_expr)?
        } else {
            vec![]
        };
        let dimensions = if self.parse_keyword(Keyword::DIMENSIONS) {
            self.parse_comma_separated(Parser::parse_expr)?
        } else {
            vec![]
        };
        self.expect_token(&Token::RParen)?;
        let alias = self.parse_optional_table_alias()?;
        Ok(TableFactor::SemanticView {
            name,
            metrics,
            dimensions,
            alias,
        })
    }

    // ========================================================================
    // MATCH_RECOGNIZE
    // ========================================================================

    /// `MATCH_RECOGNIZE(...)`; the keyword has been consumed.
    fn parse_match_recognize(&mut self, table: TableFactor) -> Result<TableFactor, ParserError> {
        self.expect_token(&Token::LParen)?;
        let partition_by = if self.parse_keywords(&[Keyword::PARTITION, Keyword::BY]) {
            self.parse_comma_separated(Parser::parse_expr)?
        } else {
            vec![]
        };
        let order_by = if self.parse_keywords(&[Keyword::ORDER, Keyword::BY]) {
            self.parse_comma_separated(Parser::parse_order_by_expr)?
        } else {
            vec![]
        };
        let measures = if self.parse_keyword(Keyword::MEASURES) {
            self.parse_comma_separated(|parser| {
                let expr = parser.parse_expr()?;
                let _ = parser.parse_keyword(Keyword::AS);
                let alias = parser.parse_identifier()?;
                Ok(Measure { expr, alias })
            })?
        } else {
            vec![]
        };
        let rows_per_match = if self.parse_keywords(&[
            Keyword::ONE,
            Keyword::ROW,
            Keyword::PER,
            Keyword::MATCH,
        ]) {
            Some(RowsPerMatch::OneRow)
        } else if self.parse_keywords(&[
            Keyword::ALL,
            Keyword::ROWS,
            Keyword::PER,
            Keyword::MATCH,
        ]) {
            Some(RowsPerMatch::AllRows)
        } else {
            None
        };
        let after_match_skip =
            if self.parse_keywords(&[Keyword::AFTER, Keyword::MATCH, Keyword::SKIP]) {
                if self.parse_keywords(&[Keyword::PAST, Keyword::LAST, Keyword::ROW]) {
                    Some(AfterMatchSkip::PastLastRow)
                } else if self.parse_keywords(&[Keyword::TO, Keyword::NEXT, Keyword::ROW]) {
                    Some(AfterMatchSkip::ToNextRow)
                } else if self.parse_keywords(&[Keyword::TO, Keyword::FIRST]) {
                    Some(AfterMatchSkip::ToFirst(self.parse_identifier()?))
                } else if self.parse_keywords(&[Keyword::TO, Keyword::LAST]) {
                    Some(AfterMatchSkip::ToLast(self.parse_identifier()?))
                } else {
                    return self.expected(
                        "after match skip option",
                        self.peek_token_with_location(),
                    );
                }
            } else {
                None
            };
        self.expect_keyword(Keyword::PATTERN)?;
        self.expect_token(&Token::LParen)?;
        let pattern = self.parse_pattern()?;
        self.expect_token(&Token::RParen)?;
        self.expect_keyword(Keyword::DEFINE)?;
        let symbols = self.parse_comma_separated(|parser| {
            let symbol = parser.parse_identifier()?;
            parser.expect_keyword(Keyword::AS)?;
            let definition = parser.parse_expr()?;
            Ok(SymbolDefinition { symbol, definition })
        })?;
        self.expect_token(&Token::RParen)?;
        let alias = self.parse_optional_table_alias()?;
        Ok(TableFactor::MatchRecognize(Box::new(MatchRecognize {
            table,
            partition_by,
            order_by,
            measures,
            rows_per_match,
            after_match_skip,
            pattern,
            symbols,
            alias,
        })))
    }

    /// Row-pattern alternation: `concat | concat | ...`.
    fn parse_pattern(&mut self) -> Result<MatchRecognizePattern, ParserError> {
        let mut patterns = vec![self.parse_pattern_concat()?];
        while self.consume_token(&Token::Pipe) {
            patterns.push(self.parse_pattern_concat()?);
        }
        if patterns.len() == 1 {
            Ok(patterns.into_iter().next().expect("one pattern"))
        } else {
            Ok(MatchRecognizePattern::Alternation(patterns))
        }
    }

    /// Row-pattern concatenation: juxtaposed repetitions.
    fn parse_pattern_concat(&mut self) -> Result<MatchRecognizePattern, ParserError> {
        let mut patterns = vec![self.parse_pattern_repetition()?];
        loop {
            match self.peek_token() {
                Token::RParen | Token::Pipe | Token::EOF => break,
                Token::Minus => break, // closing of an exclusion
                _ => patterns.push(self.parse_pattern_repetition()?),
            }
        }
        if patterns.len() == 1 {
            Ok(patterns.into_iter().next().expect("one pattern"))
        } else {
            Ok(MatchRecognizePattern::Concat(patterns))
        }
    }

    /// A primary pattern with its postfix quantifiers.
    fn parse_pattern_repetition(&mut self) -> Result<MatchRecognizePattern, ParserError> {
        let mut pattern = self.parse_pattern_primary()?;
        loop {
            let kind = match self.peek_token() {
                Token::Mul => {
                    self.next_token();
                    RepetitionKind::ZeroOrMore
                }
                Token::Plus => {
                    self.next_token();
                    RepetitionKind::OneOrMore
                }
                Token::Placeholder(ref s) if s == "?" => {
                    self.next_token();
                    RepetitionKind::AtMostOne
                }
                Token::LBrace => {
                    self.next_token();
                    let kind = if self.consume_token(&Token::Comma) {
                        RepetitionKind::AtMost(self.parse_literal_uint()? as u32)
                    } else {
                        let n = self.parse_literal_uint()? as u32;
                        if self.consume_token(&Token::Comma) {
                            if self.peek_token() == Token::RBrace {
                                RepetitionKind::AtLeast(n)
                            } else {
                                RepetitionKind::Range(n, self.parse_literal_uint()? as u32)
                            }
                        } else {
                            RepetitionKind::Exactly(n)
                        }
                    };
                    self.expect_token(&Token::RBrace)?;
                    kind
                }
                _ => break,
            };
            // `?` right after a quantifier makes it reluctant
            let reluctant = self.consume_token(&Token::Placeholder("?".into()));
            pattern = MatchRecognizePattern::Repetition(
                Box::new(pattern),
                RepetitionQuantifier { kind, reluctant },
            );
        }
        Ok(pattern)
    }

    fn parse_pattern_primary(&mut self) -> Result<MatchRecognizePattern, ParserError> {
        let token = self.next_token_with_location();
        match &token.token {
            Token::Caret => Ok(MatchRecognizePattern::Symbol(MatchRecognizeSymbol::Start)),
            Token::Placeholder(s) if s == "$" => {
                Ok(MatchRecognizePattern::Symbol(MatchRecognizeSymbol::End))
            }
            Token::LParen => {
                let pattern = self.parse_pattern()?;
                self.expect_token(&Token::RParen)?;
                Ok(MatchRecognizePattern::Group(Box::new(pattern)))
            }
            Token::LBrace => {
                self.expect_token(&Token::Minus)?;
                let pattern = self.parse_pattern()?;
                self.expect_token(&Token::Minus)?;
                self.expect_token(&Token::RBrace)?;
                Ok(MatchRecognizePattern::Exclude(Box::new(pattern)))
            }
            Token::Word(w) if w.keyword == Some(Keyword::PERMUTE) => {
                self.expect_token(&Token::LParen)?;
                let symbols = self.parse_comma_separated(|parser| {
                    Ok(MatchRecognizeSymbol::Named(parser.parse_identifier()?))
                })?;
                self.expect_token(&Token::RParen)?;
                Ok(MatchRecognizePattern::Permute(symbols))
            }
            Token::Word(w) => Ok(MatchRecognizePattern::Symbol(MatchRecognizeSymbol::Named(
                Ident {
                    value: w.value.clone(),
                    quote_style: w.quote_style,
                },
            ))),
            _ => self.expected("a row pattern", token),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::dialect::{
        ClickHouseDialect, GenericDialect, MsSqlDialect, MySqlDialect, PostgreSqlDialect,
        SnowflakeDialect,
    };

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
    fn parse_ctes() {
        round_trip("WITH cte AS (SELECT 1) SELECT * FROM cte");
        round_trip("WITH RECURSIVE r (n) AS (SELECT 1 UNION ALL SELECT n + 1 FROM r) SELECT n FROM r");
        round_trip("WITH a AS (SELECT 1), b AS (SELECT 2) SELECT * FROM a JOIN b ON true");
    }

    #[test]
    fn parse_set_operations() {
        round_trip("SELECT 1 UNION SELECT 2");
        round_trip("SELECT 1 UNION ALL SELECT 2");
        round_trip("SELECT 1 EXCEPT DISTINCT SELECT 2");
        round_trip("SELECT 1 UNION BY NAME SELECT 2");
        // INTERSECT binds tighter than UNION
        let dialect = GenericDialect {};
        let statements =
            Parser::parse_sql(&dialect, "SELECT 1 UNION SELECT 2 INTERSECT SELECT 3").unwrap();
        match &statements[0] {
            Statement::Query(query) => match &*query.body {
                SetExpr::SetOperation { op, right, .. } => {
                    assert_eq!(*op, SetOperator::Union);
                    assert!(matches!(
                        **right,
                        SetExpr::SetOperation {
                            op: SetOperator::Intersect,
                            ..
                        }
                    ));
                }
                other => panic!("unexpected: {other:?}"),
            },
            other => panic!("unexpected: {other:?}"),
        }
        round_trip("(SELECT 1 ORDER BY a) UNION SELECT 2");
        round_trip("SELECT * FROM (TABLE t1) AS x");
    }

    #[test]
    fn parse_query_tail_clauses() {
        round_trip("SELECT a FROM t ORDER BY a ASC, b DESC NULLS FIRST LIMIT 5 OFFSET 3 ROWS");
        round_trip("SELECT a FROM t FETCH FIRST 10 PERCENT ROWS WITH TIES");
        round_trip("SELECT a FROM t FOR UPDATE OF t NOWAIT");
        round_trip("SELECT a FROM t FOR SHARE SKIP LOCKED");
        let mssql = MsSqlDialect {};
        round_trip_with(&mssql, "SELECT a FROM t FOR JSON AUTO");
        round_trip_with(&mssql, "SELECT a FROM t FOR XML RAW");
        round_trip_with(&mssql, "SELECT a FROM t FOR BROWSE");
        // LIMIT ALL parses as no limit
        let dialect = GenericDialect {};
        let statements = Parser::parse_sql(&dialect, "SELECT a FROM t LIMIT ALL").unwrap();
        assert_eq!(statements[0].to_string(), "SELECT a FROM t");
    }

    #[test]
    fn parse_select_body_clauses() {
        round_trip("SELECT a INTO TEMPORARY TABLE t2 FROM t");
        round_trip("SELECT a FROM t GROUP BY a HAVING COUNT(*) > 1");
        round_trip("SELECT a FROM t CLUSTER BY a DISTRIBUTE BY b SORT BY c");
        round_trip("SELECT DISTINCT ON (a) a, b FROM t");
        let snowflake = SnowflakeDialect {};
        round_trip_with(&snowflake, "SELECT a FROM t QUALIFY ROW_NUMBER() OVER (ORDER BY a) = 1");
        round_trip_with(
            &snowflake,
            "SELECT a FROM t WINDOW w AS (PARTITION BY a) QUALIFY COUNT(*) OVER w > 1",
        );
    }

    #[test]
    fn parse_group_by_grouping_sets() {
        round_trip("SELECT a, b FROM t GROUP BY GROUPING SETS ((a), (b), ())");
        round_trip("SELECT a, b FROM t GROUP BY ROLLUP (a, b)");
        round_trip("SELECT a, b FROM t GROUP BY CUBE (a, (a, b))");
    }

    #[test]
    fn parse_wildcard_modifiers() {
        let snowflake = SnowflakeDialect {};
        round_trip_with(&snowflake, "SELECT * EXCEPT (dept_id) FROM employees");
        round_trip_with(
            &snowflake,
            "SELECT employees.* EXCEPT (dept_id) REPLACE (UPPER(city) AS city) FROM employees",
        );
    }

    #[test]
    fn parse_joins() {
        round_trip("SELECT * FROM t1 JOIN t2 ON t1.a = t2.a");
        round_trip("SELECT * FROM t1 NATURAL LEFT JOIN t2");
        round_trip("SELECT * FROM t1 CROSS JOIN t2");
        round_trip("SELECT * FROM t1 FULL JOIN t2 USING(a)");
        round_trip("SELECT * FROM t1 LEFT SEMI JOIN t2 ON t1.a = t2.a");
        round_trip("SELECT * FROM t1 RIGHT ANTI JOIN t2 ON t1.a = t2.a");
        let mysql = MySqlDialect {};
        round_trip_with(&mysql, "SELECT * FROM t1 STRAIGHT_JOIN t2 ON t1.a = t2.a");
        let clickhouse = ClickHouseDialect {};
        round_trip_with(&clickhouse, "SELECT * FROM t1 GLOBAL JOIN t2 ON t1.a = t2.a");

        let dialect = GenericDialect {};
        let res = Parser::parse_sql(&dialect, "SELECT * FROM t1 NATURAL");
        assert_eq!(
            res.unwrap_err().to_string(),
            "Expected a join type after NATURAL, found EOF"
        );
    }

    #[test]
    fn parse_table_factors() {
        round_trip("SELECT * FROM (SELECT 1) AS sub");
        round_trip("SELECT * FROM LATERAL (SELECT t.a) AS l");
        round_trip("SELECT * FROM (t1 JOIN t2 ON t1.a = t2.a) AS j");
        round_trip("SELECT * FROM TABLE(generate_series(1, 10)) AS g");
        round_trip("SELECT * FROM UNNEST([1, 2, 3]) AS nums WITH OFFSET AS off");
        round_trip("SELECT * FROM generate_series(1, 10) AS g (n)");
        let mssql = MsSqlDialect {};
        round_trip_with(&mssql, "SELECT * FROM t WITH (NOLOCK)");
        let mysql = MySqlDialect {};
        round_trip_with(&mysql, "SELECT * FROM t PARTITION (p0, p1) AS x");
    }

    #[test]
    fn parse_pivot_unpivot_sample() {
        round_trip(
            "SELECT * FROM monthly_sales PIVOT(SUM(amount) FOR month IN ('JAN', 'FEB')) AS p",
        );
        round_trip("SELECT * FROM sales UNPIVOT(qty FOR month IN (jan, feb)) AS u");
        round_trip("SELECT * FROM t TABLESAMPLE BERNOULLI (10 PERCENT)");
        round_trip("SELECT * FROM t TABLESAMPLE (50 ROWS)");
    }

    #[test]
    fn parse_exotic_table_factors() {
        let mssql = MsSqlDialect {};
        round_trip_with(
            &mssql,
            "SELECT * FROM OPENJSON(@json, '$.items') WITH (id INT 'strict $.id', raw NVARCHAR(4000) AS JSON) AS j",
        );
        round_trip(
            "SELECT * FROM JSON_TABLE(doc, '$[*]' COLUMNS (id FOR ORDINALITY, name TEXT PATH '$.name')) AS jt",
        );
        round_trip(
            "SELECT * FROM XMLTABLE('//row' PASSING doc COLUMNS a INT PATH '@a', b TEXT PATH '@b') AS x",
        );
        let snowflake = SnowflakeDialect {};
        round_trip_with(
            &snowflake,
            "SELECT * FROM SEMANTIC_VIEW(sales METRICS total, avg_price DIMENSIONS region) AS sv",
        );
    }

    #[test]
    fn parse_match_recognize() {
        let snowflake = SnowflakeDialect {};
        let sql = "SELECT * FROM stock MATCH_RECOGNIZE(\
PARTITION BY symbol \
ORDER BY tstamp \
MEASURES FIRST(price) AS start_price, LAST(price) AS end_price \
ONE ROW PER MATCH \
AFTER MATCH SKIP PAST LAST ROW \
PATTERN (STRT DOWN+ UP+) \
DEFINE DOWN AS price < PREV(price), UP AS price > PREV(price)) AS mr";
        round_trip_with(&snowflake, sql);
    }

    #[test]
    fn parse_match_recognize_patterns() {
        let snowflake = SnowflakeDialect {};
        for pattern in [
            "A B C",
            "A | B | C",
            "(A | B)+",
            "A*?",
            "A{2}",
            "A{2,}?",
            "A{,4}",
            "A{2,4}",
            "^ A $",
            "PERMUTE(A, B)",
            "{- A -} B",
        ] {
            let sql = format!(
                "SELECT * FROM t MATCH_RECOGNIZE(PATTERN ({pattern}) DEFINE A AS x > 0) AS m"
            );
            let statements = Parser::parse_sql(&snowflake, &sql).unwrap();
            assert_eq!(statements[0].to_string(), sql, "pattern {pattern}");
        }
    }

    #[test]
    fn parse_connect_by() {
        let snowflake = SnowflakeDialect {};
        round_trip_with(
            &snowflake,
            "SELECT emp, mgr FROM emps START WITH mgr IS NULL CONNECT BY mgr = PRIOR emp",
        );
        let statements = Parser::parse_sql(
            &snowflake,
            "SELECT emp FROM emps CONNECT BY mgr = PRIOR emp START WITH mgr IS NULL",
        )
        .unwrap();
        // both orders normalize with START WITH first
        assert_eq!(
            statements[0].to_string(),
            "SELECT emp FROM emps START WITH mgr IS NULL CONNECT BY mgr = PRIOR emp"
        );
    }

    #[test]
    fn parse_lateral_views() {
        let hive = crate::dialect::HiveDialect {};
        round_trip_with(
            &hive,
            "SELECT c FROM t LATERAL VIEW OUTER explode(cols) tbl AS c1, c2",
        );
    }

    #[test]
    fn parse_trailing_commas() {
        // rejected by default...
        let dialect = PostgreSqlDialect {};
        assert!(Parser::parse_sql(&dialect, "SELECT a, b, FROM t").is_err());
        // ...accepted with the option, or with a dialect that allows them
        let statements = Parser::new(&dialect)
            .with_options(crate::parser::ParserOptions {
                trailing_commas: true,
                ..Default::default()
            })
            .try_with_sql("SELECT a, b, FROM t")
            .unwrap()
            .parse_statements()
            .unwrap();
        assert_eq!(statements[0].to_string(), "SELECT a, b FROM t");
        let snowflake = SnowflakeDialect {};
        let statements = Parser::parse_sql(&snowflake, "SELECT a, b, FROM t").unwrap();
        assert_eq!(statements[0].to_string(), "SELECT a, b FROM t");
    }

    #[test]
    fn query_body_error_message() {
        let dialect = GenericDialect {};
        let res = Parser::parse_sql(&dialect, "SELECT 1 UNION foo");
        assert_eq!(
            res.unwrap_err().to_string(),
            "Expected SELECT, VALUES, or a subquery in the query body, found foo, Line: 1, Col: 16"
        );
    }
}
