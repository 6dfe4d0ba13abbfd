//! Pratt-style expression parsing: a prefix parser for leaves and unary
//! operators, an infix parser keyed on the next token, and a binding-power
//! table that drives the precedence climb.

#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, format, string::ToString, vec, vec::Vec};

use crate::{
    ast::*,
    error::{parse_error, ParserError},
    keywords::Keyword,
    parser::Parser,
    tokens::Token,
};

// Binding powers, lowest to highest. `BETWEEN`, `IN`, `LIKE` and the
// PostgreSQL JSON/regex operators bind tighter than plain comparisons;
// string concatenation tighter than multiplication; `::` and subscripts
// tighter still.
const OR_PREC: u8 = 5;
const AND_PREC: u8 = 10;
const UNARY_NOT_PREC: u8 = 15;
const IS_PREC: u8 = 17;
const COMPARISON_PREC: u8 = 20;
const BETWEEN_PREC: u8 = 21;
const PIPE_PREC: u8 = 22;
const CARET_PREC: u8 = 23;
const AMPERSAND_PREC: u8 = 24;
const SHIFT_PREC: u8 = 25;
const PLUS_MINUS_PREC: u8 = 30;
const MUL_DIV_MOD_PREC: u8 = 40;
const CONCAT_PREC: u8 = 45;
const UNARY_SIGN_PREC: u8 = 50;
const CAST_PREC: u8 = 60;
const SUBSCRIPT_PREC: u8 = 70;
const COLLATE_PREC: u8 = 75;

impl<'a> Parser<'a> {
    /// Parses a new expression.
    pub fn parse_expr(&mut self) -> Result<Expr, ParserError> {
        self.parse_subexpr(0)
    }

    /// Parses tokens until the precedence drops to `precedence` or below.
    pub fn parse_subexpr(&mut self, precedence: u8) -> Result<Expr, ParserError> {
        let _guard = self.recursion_guard()?;
        let mut expr = self.parse_prefix()?;
        loop {
            let next_precedence = self.next_precedence()?;
            if precedence >= next_precedence {
                break;
            }
            expr = self.parse_infix(expr, next_precedence)?;
        }
        Ok(expr)
    }

    /// Parses an expression prefix: a leaf or a unary-prefixed expression.
    pub fn parse_prefix(&mut self) -> Result<Expr, ParserError> {
        let token = self.next_token_with_location();
        match &token.token {
            Token::Word(w) => {
                // Typed string literals like `DATE '2020-01-01'`.
                if let Some(keyword) = w.keyword {
                    if matches!(
                        keyword,
                        Keyword::DATE
                            | Keyword::TIME
                            | Keyword::TIMESTAMP
                            | Keyword::DATETIME
                            | Keyword::JSON
                            | Keyword::BIGNUMERIC
                            | Keyword::BIGDECIMAL
                    ) {
                        if let Token::SingleQuotedString(_) = self.peek_token() {
                            self.prev_token();
                            let data_type = self.parse_data_type()?;
                            let value = self.parse_literal_string()?;
                            return Ok(Expr::TypedString { data_type, value });
                        }
                    }
                }
                match w.keyword {
                    Some(Keyword::TRUE) | Some(Keyword::FALSE) | Some(Keyword::NULL) => {
                        self.prev_token();
                        Ok(Expr::Value(self.parse_value()?))
                    }
                    Some(Keyword::CASE) => self.parse_case_expr(),
                    Some(Keyword::CAST) => self.parse_cast_expr(CastKind::Cast),
                    Some(Keyword::TRY_CAST) => self.parse_cast_expr(CastKind::TryCast),
                    Some(Keyword::EXISTS) => self.parse_exists_expr(false),
                    Some(Keyword::EXTRACT) => self.parse_extract_expr(),
                    Some(Keyword::CEIL) | Some(Keyword::CEILING) => {
                        self.parse_ceil_floor_expr(CeilFloorKind::Ceil)
                    }
                    Some(Keyword::FLOOR) => self.parse_ceil_floor_expr(CeilFloorKind::Floor),
                    Some(Keyword::POSITION) if self.peek_token() == Token::LParen => {
                        self.parse_position_expr()
                    }
                    Some(Keyword::SUBSTRING) => self.parse_substring_expr(),
                    Some(Keyword::TRIM) => self.parse_trim_expr(),
                    Some(Keyword::OVERLAY) => self.parse_overlay_expr(),
                    Some(Keyword::INTERVAL) => Ok(Expr::Interval(self.parse_interval()?)),
                    Some(Keyword::NOT) => self.parse_not(),
                    Some(Keyword::CONNECT_BY_ROOT) => Ok(Expr::ConnectByRoot(Box::new(
                        self.parse_subexpr(UNARY_SIGN_PREC)?,
                    ))),
                    Some(Keyword::PRIOR) => {
                        Ok(Expr::Prior(Box::new(self.parse_subexpr(UNARY_SIGN_PREC)?)))
                    }
                    Some(Keyword::ARRAY) if self.peek_token() == Token::LBracket => {
                        self.expect_token(&Token::LBracket)?;
                        self.parse_array_expr(true)
                    }
                    Some(Keyword::MAP)
                        if self.peek_token() == Token::LBrace
                            && self.dialect.support_map_literal_syntax() =>
                    {
                        self.expect_token(&Token::LBrace)?;
                        let entries = self.parse_dictionary_fields()?;
                        Ok(Expr::Map(MapExpr { entries }))
                    }
                    _ => {
                        let word = w.clone();
                        self.parse_word_prefix(word)
                    }
                }
            }
            Token::Number(..)
            | Token::SingleQuotedString(_)
            | Token::DoubleQuotedString(_)
            | Token::NationalStringLiteral(_)
            | Token::HexStringLiteral(_)
            | Token::EscapedStringLiteral(_)
            | Token::RawStringLiteral(_)
            | Token::SingleQuotedByteStringLiteral(_)
            | Token::DollarQuotedString(_)
            | Token::Placeholder(_) => {
                self.prev_token();
                Ok(Expr::Value(self.parse_value()?))
            }
            Token::Minus => Ok(Expr::UnaryOp(UnaryOpExpr {
                op: UnaryOperator::Minus,
                expr: Box::new(self.parse_subexpr(UNARY_SIGN_PREC)?),
            })),
            Token::Plus => Ok(Expr::UnaryOp(UnaryOpExpr {
                op: UnaryOperator::Plus,
                expr: Box::new(self.parse_subexpr(UNARY_SIGN_PREC)?),
            })),
            Token::Tilde => Ok(Expr::UnaryOp(UnaryOpExpr {
                op: UnaryOperator::PGBitwiseNot,
                expr: Box::new(self.parse_subexpr(UNARY_SIGN_PREC)?),
            })),
            Token::DoubleExclamationMark => Ok(Expr::UnaryOp(UnaryOpExpr {
                op: UnaryOperator::PGPrefixFactorial,
                expr: Box::new(self.parse_subexpr(UNARY_SIGN_PREC)?),
            })),
            Token::PGSquareRoot => Ok(Expr::UnaryOp(UnaryOpExpr {
                op: UnaryOperator::PGSquareRoot,
                expr: Box::new(self.parse_subexpr(UNARY_SIGN_PREC)?),
            })),
            Token::PGCubeRoot => Ok(Expr::UnaryOp(UnaryOpExpr {
                op: UnaryOperator::PGCubeRoot,
                expr: Box::new(self.parse_subexpr(UNARY_SIGN_PREC)?),
            })),
            Token::Mul => Ok(Expr::Wildcard),
            Token::LParen => {
                let expr = if self.peek_is_query_start() {
                    Expr::Subquery(Box::new(self.parse_query()?))
                } else {
                    let exprs = self.parse_comma_separated(Parser::parse_expr)?;
                    if exprs.len() == 1 {
                        Expr::Nested(Box::new(exprs.into_iter().next().expect("one expr")))
                    } else {
                        Expr::Tuple(exprs)
                    }
                };
                self.expect_token(&Token::RParen)?;
                Ok(expr)
            }
            Token::LBracket => self.parse_array_expr(false),
            Token::LBrace if self.dialect.supports_dictionary_syntax() => {
                let fields = self.parse_dictionary_fields()?;
                Ok(Expr::Dictionary(fields))
            }
            _ => self.expected("an expression", token),
        }
    }

    /// A bare word, compound identifier, function call or qualified
    /// wildcard; the word token has already been consumed and is passed in.
    fn parse_word_prefix(&mut self, word: crate::tokens::Word) -> Result<Expr, ParserError> {
        // MS SQL variables lex as words starting with `@`.
        if word.quote_style.is_none() && word.value.starts_with('@') {
            return Ok(Expr::Value(Value::Placeholder(word.value)));
        }
        let mut id_parts = vec![Ident {
            value: word.value,
            quote_style: word.quote_style,
        }];
        let mut ends_with_wildcard = false;
        while self.consume_token(&Token::Period) {
            let next = self.next_token_with_location();
            match next.token {
                Token::Word(w) => id_parts.push(Ident {
                    value: w.value,
                    quote_style: w.quote_style,
                }),
                Token::Mul => {
                    ends_with_wildcard = true;
                    break;
                }
                _ => return self.expected("an identifier or a '*' after '.'", next),
            }
        }
        if ends_with_wildcard {
            Ok(Expr::QualifiedWildcard(id_parts))
        } else if self.peek_token() == Token::LParen {
            self.parse_function(ObjectName(id_parts))
        } else if id_parts.len() > 1 {
            Ok(Expr::CompoundIdentifier(id_parts))
        } else {
            Ok(Expr::Identifier(id_parts.into_iter().next().expect("one part")))
        }
    }

    fn parse_not(&mut self) -> Result<Expr, ParserError> {
        if self.parse_keyword(Keyword::EXISTS) {
            self.parse_exists_expr(true)
        } else {
            Ok(Expr::UnaryOp(UnaryOpExpr {
                op: UnaryOperator::Not,
                expr: Box::new(self.parse_subexpr(UNARY_NOT_PREC)?),
            }))
        }
    }

    /// Gets the binding power of the next token.
    pub fn next_precedence(&self) -> Result<u8, ParserError> {
        let token = self.peek_token();
        let precedence = match &token {
            Token::Word(w) => match w.keyword {
                Some(Keyword::OR) => OR_PREC,
                Some(Keyword::AND) => AND_PREC,
                Some(Keyword::XOR) => AMPERSAND_PREC,
                Some(Keyword::NOT) => {
                    // The precedence of NOT varies depending on the keyword
                    // that follows it: if it introduces a negated predicate,
                    // it takes that predicate's precedence, otherwise it is
                    // not an infix operator at all.
                    match self.peek_nth_token(1) {
                        Token::Word(w)
                            if matches!(
                                w.keyword,
                                Some(Keyword::IN)
                                    | Some(Keyword::BETWEEN)
                                    | Some(Keyword::LIKE)
                                    | Some(Keyword::ILIKE)
                                    | Some(Keyword::SIMILAR)
                            ) =>
                        {
                            BETWEEN_PREC
                        }
                        _ => 0,
                    }
                }
                Some(Keyword::IS) | Some(Keyword::ISNULL) | Some(Keyword::NOTNULL) => IS_PREC,
                Some(Keyword::IN)
                | Some(Keyword::BETWEEN)
                | Some(Keyword::LIKE)
                | Some(Keyword::ILIKE)
                | Some(Keyword::SIMILAR)
                | Some(Keyword::OVERLAPS)
                | Some(Keyword::MEMBER) => BETWEEN_PREC,
                Some(Keyword::AT) => SUBSCRIPT_PREC,
                Some(Keyword::COLLATE) => COLLATE_PREC,
                _ => 0,
            },
            Token::Eq
            | Token::DoubleEq
            | Token::Neq
            | Token::Lt
            | Token::LtEq
            | Token::Gt
            | Token::GtEq
            | Token::Spaceship => COMPARISON_PREC,
            Token::Arrow
            | Token::LongArrow
            | Token::HashArrow
            | Token::HashLongArrow
            | Token::HashMinus
            | Token::AtArrow
            | Token::ArrowAt
            | Token::AtQuestion
            | Token::AtAt
            | Token::Tilde
            | Token::TildeAsterisk
            | Token::ExclamationMarkTilde
            | Token::ExclamationMarkTildeAsterisk
            | Token::Overlap => BETWEEN_PREC,
            Token::Pipe => PIPE_PREC,
            Token::Caret => CARET_PREC,
            Token::Ampersand => AMPERSAND_PREC,
            Token::ShiftLeft | Token::ShiftRight => SHIFT_PREC,
            Token::Plus | Token::Minus => PLUS_MINUS_PREC,
            Token::Mul | Token::Div | Token::Mod => MUL_DIV_MOD_PREC,
            Token::StringConcat => CONCAT_PREC,
            Token::DoubleColon => CAST_PREC,
            Token::LBracket => SUBSCRIPT_PREC,
            _ => 0,
        };
        Ok(precedence)
    }

    /// Parses an operator following an expression, producing the combined
    /// expression.
    pub fn parse_infix(&mut self, expr: Expr, precedence: u8) -> Result<Expr, ParserError> {
        let token = self.next_token_with_location();

        let regular_binary_operator = match &token.token {
            Token::Plus => Some(BinaryOperator::Plus),
            Token::Minus => Some(BinaryOperator::Minus),
            Token::Mul => Some(BinaryOperator::Multiply),
            Token::Div => Some(BinaryOperator::Divide),
            Token::Mod => Some(BinaryOperator::Modulo),
            Token::StringConcat => Some(BinaryOperator::StringConcat),
            Token::Gt => Some(BinaryOperator::Gt),
            Token::Lt => Some(BinaryOperator::Lt),
            Token::GtEq => Some(BinaryOperator::GtEq),
            Token::LtEq => Some(BinaryOperator::LtEq),
            Token::Spaceship => Some(BinaryOperator::Spaceship),
            Token::Eq | Token::DoubleEq => Some(BinaryOperator::Eq),
            Token::Neq => Some(BinaryOperator::NotEq),
            Token::Pipe => Some(BinaryOperator::BitwiseOr),
            Token::Caret => Some(BinaryOperator::BitwiseXor),
            Token::Ampersand => Some(BinaryOperator::BitwiseAnd),
            Token::ShiftLeft => Some(BinaryOperator::BitwiseShiftLeft),
            Token::ShiftRight => Some(BinaryOperator::BitwiseShiftRight),
            Token::Tilde => Some(BinaryOperator::PGRegexMatch),
            Token::TildeAsterisk => Some(BinaryOperator::PGRegexIMatch),
            Token::ExclamationMarkTilde => Some(BinaryOperator::PGRegexNotMatch),
            Token::ExclamationMarkTildeAsterisk => Some(BinaryOperator::PGRegexNotIMatch),
            Token::Overlap => Some(BinaryOperator::PGOverlap),
            Token::Arrow => Some(BinaryOperator::Arrow),
            Token::LongArrow => Some(BinaryOperator::LongArrow),
            Token::HashArrow => Some(BinaryOperator::HashArrow),
            Token::HashLongArrow => Some(BinaryOperator::HashLongArrow),
            Token::HashMinus => Some(BinaryOperator::HashMinus),
            Token::AtArrow => Some(BinaryOperator::AtArrow),
            Token::ArrowAt => Some(BinaryOperator::ArrowAt),
            Token::AtQuestion => Some(BinaryOperator::AtQuestion),
            Token::AtAt => Some(BinaryOperator::AtAt),
            Token::Word(w) => match w.keyword {
                Some(Keyword::AND) => Some(BinaryOperator::And),
                Some(Keyword::OR) => Some(BinaryOperator::Or),
                Some(Keyword::XOR) => Some(BinaryOperator::Xor),
                _ => None,
            },
            _ => None,
        };

        if let Some(op) = regular_binary_operator {
            // `<op> { ANY | SOME | ALL } (...)` comparisons
            if let Some(keyword) =
                self.parse_one_of_keywords(&[Keyword::ANY, Keyword::SOME, Keyword::ALL])
            {
                self.expect_token(&Token::LParen)?;
                let right = if self.peek_is_query_start() {
                    Expr::Subquery(Box::new(self.parse_query()?))
                } else {
                    self.parse_expr()?
                };
                self.expect_token(&Token::RParen)?;
                let any_all = AnyAllExpr {
                    left: Box::new(expr),
                    compare_op: op,
                    right: Box::new(right),
                };
                return Ok(match keyword {
                    Keyword::ALL => Expr::AllOp(any_all),
                    _ => Expr::AnyOp(any_all),
                });
            }
            let right = self.parse_subexpr(precedence)?;
            return Ok(Expr::BinaryOp(BinaryOpExpr {
                left: Box::new(expr),
                op,
                right: Box::new(right),
            }));
        }

        match &token.token {
            Token::DoubleColon => {
                let data_type = self.parse_data_type()?;
                Ok(Expr::Cast(CastExpr {
                    kind: CastKind::DoubleColon,
                    expr: Box::new(expr),
                    data_type,
                }))
            }
            Token::LBracket => {
                let subscript = self.parse_expr()?;
                self.expect_token(&Token::RBracket)?;
                Ok(Expr::Subscript(SubscriptExpr {
                    expr: Box::new(expr),
                    subscript: Box::new(subscript),
                }))
            }
            Token::Word(w) => match w.keyword {
                Some(Keyword::IS) => self.parse_is(expr),
                Some(Keyword::ISNULL) => Ok(Expr::IsNull(IsNullExpr {
                    expr: Box::new(expr),
                    negated: false,
                })),
                Some(Keyword::NOTNULL) => Ok(Expr::IsNull(IsNullExpr {
                    expr: Box::new(expr),
                    negated: true,
                })),
                Some(Keyword::NOT) => {
                    if self.parse_keyword(Keyword::IN) {
                        self.parse_in(expr, true)
                    } else if self.parse_keyword(Keyword::BETWEEN) {
                        self.parse_between(expr, true)
                    } else if self.parse_keyword(Keyword::LIKE) {
                        self.parse_like(expr, LikeKind::Like, true)
                    } else if self.parse_keyword(Keyword::ILIKE) {
                        self.parse_like(expr, LikeKind::ILike, true)
                    } else if self.parse_keywords(&[Keyword::SIMILAR, Keyword::TO]) {
                        self.parse_like(expr, LikeKind::SimilarTo, true)
                    } else {
                        self.expected(
                            "IN, BETWEEN, LIKE, ILIKE or SIMILAR TO after NOT",
                            self.peek_token_with_location(),
                        )
                    }
                }
                Some(Keyword::IN) => self.parse_in(expr, false),
                Some(Keyword::BETWEEN) => self.parse_between(expr, false),
                Some(Keyword::LIKE) => self.parse_like(expr, LikeKind::Like, false),
                Some(Keyword::ILIKE) => self.parse_like(expr, LikeKind::ILike, false),
                Some(Keyword::SIMILAR) => {
                    self.expect_keyword(Keyword::TO)?;
                    self.parse_like(expr, LikeKind::SimilarTo, false)
                }
                Some(Keyword::OVERLAPS) => {
                    let right = self.parse_subexpr(BETWEEN_PREC)?;
                    Ok(Expr::Overlaps(OverlapsExpr {
                        left: Box::new(expr),
                        right: Box::new(right),
                    }))
                }
                Some(Keyword::MEMBER) => {
                    self.expect_keyword(Keyword::OF)?;
                    self.expect_token(&Token::LParen)?;
                    let array = self.parse_expr()?;
                    self.expect_token(&Token::RParen)?;
                    Ok(Expr::MemberOf(MemberOfExpr {
                        value: Box::new(expr),
                        array: Box::new(array),
                    }))
                }
                Some(Keyword::AT) => {
                    self.expect_keywords(&[Keyword::TIME, Keyword::ZONE])?;
                    let time_zone = self.parse_subexpr(SUBSCRIPT_PREC)?;
                    Ok(Expr::AtTimeZone(AtTimeZoneExpr {
                        timestamp: Box::new(expr),
                        time_zone: Box::new(time_zone),
                    }))
                }
                Some(Keyword::COLLATE) => {
                    let collation = self.parse_object_name()?;
                    Ok(Expr::Collate(CollateExpr {
                        expr: Box::new(expr),
                        collation,
                    }))
                }
                // Can only happen if `next_precedence` is out of sync with
                // this function.
                _ => parse_error(format!("No infix parser for token {}", token.token)),
            },
            _ => parse_error(format!("No infix parser for token {}", token.token)),
        }
    }

    /// Parses the right side of `IS`, covering the whole multi-word family.
    fn parse_is(&mut self, expr: Expr) -> Result<Expr, ParserError> {
        let negated = self.parse_keyword(Keyword::NOT);
        if self.parse_keyword(Keyword::NULL) {
            Ok(Expr::IsNull(IsNullExpr {
                expr: Box::new(expr),
                negated,
            }))
        } else if self.parse_keyword(Keyword::TRUE) {
            Ok(Expr::IsBool(IsBoolExpr {
                expr: Box::new(expr),
                negated,
                value: IsBoolValue::True,
            }))
        } else if self.parse_keyword(Keyword::FALSE) {
            Ok(Expr::IsBool(IsBoolExpr {
                expr: Box::new(expr),
                negated,
                value: IsBoolValue::False,
            }))
        } else if self.parse_keyword(Keyword::UNKNOWN) {
            Ok(Expr::IsBool(IsBoolExpr {
                expr: Box::new(expr),
                negated,
                value: IsBoolValue::Unknown,
            }))
        } else if self.parse_keywords(&[Keyword::DISTINCT, Keyword::FROM]) {
            let right = self.parse_subexpr(IS_PREC)?;
            Ok(Expr::IsDistinctFrom(IsDistinctFromExpr {
                left: Box::new(expr),
                negated,
                right: Box::new(right),
            }))
        } else if let Some(form) = self.parse_optional_normalization_form() {
            self.expect_keyword(Keyword::NORMALIZED)?;
            Ok(Expr::IsNormalized(IsNormalizedExpr {
                expr: Box::new(expr),
                form: Some(form),
                negated,
            }))
        } else if self.parse_keyword(Keyword::NORMALIZED) {
            Ok(Expr::IsNormalized(IsNormalizedExpr {
                expr: Box::new(expr),
                form: None,
                negated,
            }))
        } else {
            self.expected(
                "[NOT] NULL or TRUE|FALSE or [NOT] DISTINCT FROM after IS",
                self.peek_token_with_location(),
            )
        }
    }

    fn parse_optional_normalization_form(&mut self) -> Option<NormalizationForm> {
        let word = self.peek_is_word()?;
        let form = match word.value.to_uppercase().as_str() {
            "NFC" => NormalizationForm::NFC,
            "NFD" => NormalizationForm::NFD,
            "NFKC" => NormalizationForm::NFKC,
            "NFKD" => NormalizationForm::NFKD,
            _ => return None,
        };
        self.next_token();
        Some(form)
    }

    /// Parses `[NOT] IN (list) | (query) | UNNEST(expr)`, assuming `[NOT] IN`
    /// has been consumed.
    fn parse_in(&mut self, expr: Expr, negated: bool) -> Result<Expr, ParserError> {
        if self.parse_keyword(Keyword::UNNEST) {
            self.expect_token(&Token::LParen)?;
            let array_expr = self.parse_expr()?;
            self.expect_token(&Token::RParen)?;
            return Ok(Expr::InUnnest(InUnnestExpr {
                expr: Box::new(expr),
                array_expr: Box::new(array_expr),
                negated,
            }));
        }
        self.expect_token(&Token::LParen)?;
        let in_op = if self.peek_is_query_start() {
            Expr::InSubquery(InSubqueryExpr {
                expr: Box::new(expr),
                subquery: Box::new(self.parse_query()?),
                negated,
            })
        } else {
            Expr::InList(InListExpr {
                expr: Box::new(expr),
                list: self.parse_comma_separated(Parser::parse_expr)?,
                negated,
            })
        };
        self.expect_token(&Token::RParen)?;
        Ok(in_op)
    }

    /// Parses `[NOT] BETWEEN <low> AND <high>`, assuming `[NOT] BETWEEN`
    /// has been consumed.
    fn parse_between(&mut self, expr: Expr, negated: bool) -> Result<Expr, ParserError> {
        // Stop parsing subexpressions for <low> and <high> on tokens with
        // precedence lower than that of BETWEEN, such as AND, IS, etc.
        let low = self.parse_subexpr(BETWEEN_PREC)?;
        self.expect_keyword(Keyword::AND)?;
        let high = self.parse_subexpr(BETWEEN_PREC)?;
        Ok(Expr::Between(BetweenExpr {
            expr: Box::new(expr),
            negated,
            low: Box::new(low),
            high: Box::new(high),
        }))
    }

    fn parse_like(
        &mut self,
        expr: Expr,
        kind: LikeKind,
        negated: bool,
    ) -> Result<Expr, ParserError> {
        let pattern = self.parse_subexpr(BETWEEN_PREC)?;
        let escape_char = if self.parse_keyword(Keyword::ESCAPE) {
            Some(self.parse_literal_string()?)
        } else {
            None
        };
        Ok(Expr::Like(LikeExpr {
            expr: Box::new(expr),
            kind,
            negated,
            pattern: Box::new(pattern),
            escape_char,
        }))
    }

    fn parse_case_expr(&mut self) -> Result<Expr, ParserError> {
        let mut operand = None;
        if !self.parse_keyword(Keyword::WHEN) {
            operand = Some(Box::new(self.parse_expr()?));
            self.expect_keyword(Keyword::WHEN)?;
        }
        let mut conditions = vec![];
        let mut results = vec![];
        loop {
            conditions.push(self.parse_expr()?);
            self.expect_keyword(Keyword::THEN)?;
            results.push(self.parse_expr()?);
            if !self.parse_keyword(Keyword::WHEN) {
                break;
            }
        }
        let else_result = if self.parse_keyword(Keyword::ELSE) {
            Some(Box::new(self.parse_expr()?))
        } else {
            None
        };
        self.expect_keyword(Keyword::END)?;
        Ok(Expr::Case(CaseExpr {
            operand,
            conditions,
            results,
            else_result,
        }))
    }

    fn parse_cast_expr(&mut self, kind: CastKind) -> Result<Expr, ParserError> {
        self.expect_token(&Token::LParen)?;
        let expr = self.parse_expr()?;
        self.expect_keyword(Keyword::AS)?;
        let data_type = self.parse_data_type()?;
        self.expect_token(&Token::RParen)?;
        Ok(Expr::Cast(CastExpr {
            kind,
            expr: Box::new(expr),
            data_type,
        }))
    }

    fn parse_exists_expr(&mut self, negated: bool) -> Result<Expr, ParserError> {
        self.expect_token(&Token::LParen)?;
        let subquery = Box::new(self.parse_query()?);
        self.expect_token(&Token::RParen)?;
        Ok(Expr::Exists(ExistsExpr { subquery, negated }))
    }

    fn parse_extract_expr(&mut self) -> Result<Expr, ParserError> {
        self.expect_token(&Token::LParen)?;
        let field = self.parse_date_time_field()?;
        self.expect_keyword(Keyword::FROM)?;
        let expr = self.parse_expr()?;
        self.expect_token(&Token::RParen)?;
        Ok(Expr::Extract(ExtractExpr {
            field,
            expr: Box::new(expr),
        }))
    }

    fn parse_ceil_floor_expr(&mut self, kind: CeilFloorKind) -> Result<Expr, ParserError> {
        self.expect_token(&Token::LParen)?;
        let expr = self.parse_expr()?;
        let field = if self.parse_keyword(Keyword::TO) {
            CeilFloorField::DateTime(self.parse_date_time_field()?)
        } else if self.consume_token(&Token::Comma) {
            CeilFloorField::Scale(self.parse_number_value()?)
        } else {
            CeilFloorField::None
        };
        self.expect_token(&Token::RParen)?;
        Ok(Expr::CeilFloor(CeilFloorExpr {
            kind,
            expr: Box::new(expr),
            field,
        }))
    }

    fn parse_position_expr(&mut self) -> Result<Expr, ParserError> {
        self.expect_token(&Token::LParen)?;
        // Stop before IN so the haystack can follow.
        let expr = self.parse_subexpr(BETWEEN_PREC)?;
        self.expect_keyword(Keyword::IN)?;
        let r#in = self.parse_expr()?;
        self.expect_token(&Token::RParen)?;
        Ok(Expr::Position(PositionExpr {
            expr: Box::new(expr),
            r#in: Box::new(r#in),
        }))
    }

    /// `SUBSTRING(<expr> [FROM <expr>] [FOR <expr>])`; MS SQL also accepts
    /// the comma-separated form.
    fn parse_substring_expr(&mut self) -> Result<Expr, ParserError> {
        self.expect_token(&Token::LParen)?;
        let expr = self.parse_expr()?;
        let mut from_expr = None;
        if self.parse_keyword(Keyword::FROM) || self.consume_token(&Token::Comma) {
            from_expr = Some(self.parse_expr()?);
        }
        let mut to_expr = None;
        if self.parse_keyword(Keyword::FOR) || self.consume_token(&Token::Comma) {
            to_expr = Some(self.parse_expr()?);
        }
        self.expect_token(&Token::RParen)?;
        Ok(Expr::Substring(SubstringExpr {
            expr: Box::new(expr),
            substring_from: from_expr.map(Box::new),
            substring_for: to_expr.map(Box::new),
        }))
    }

    fn parse_trim_expr(&mut self) -> Result<Expr, ParserError> {
        self.expect_token(&Token::LParen)?;
        let trim_where = match self.parse_one_of_keywords(&[
            Keyword::BOTH,
            Keyword::LEADING,
            Keyword::TRAILING,
        ]) {
            Some(Keyword::BOTH) => Some(TrimWhereField::Both),
            Some(Keyword::LEADING) => Some(TrimWhereField::Leading),
            Some(Keyword::TRAILING) => Some(TrimWhereField::Trailing),
            _ => None,
        };
        let mut expr = self.parse_expr()?;
        let mut trim_what = None;
        if self.parse_keyword(Keyword::FROM) {
            trim_what = Some(Box::new(expr));
            expr = self.parse_expr()?;
        }
        self.expect_token(&Token::RParen)?;
        Ok(Expr::Trim(TrimExpr {
            expr: Box::new(expr),
            trim_where,
            trim_what,
        }))
    }

    fn parse_overlay_expr(&mut self) -> Result<Expr, ParserError> {
        self.expect_token(&Token::LParen)?;
        let expr = self.parse_expr()?;
        self.expect_keyword(Keyword::PLACING)?;
        let overlay_what = self.parse_expr()?;
        self.expect_keyword(Keyword::FROM)?;
        let overlay_from = self.parse_expr()?;
        let overlay_for = if self.parse_keyword(Keyword::FOR) {
            Some(Box::new(self.parse_expr()?))
        } else {
            None
        };
        self.expect_token(&Token::RParen)?;
        Ok(Expr::Overlay(OverlayExpr {
            expr: Box::new(expr),
            overlay_what: Box::new(overlay_what),
            overlay_from: Box::new(overlay_from),
            overlay_for,
        }))
    }

    /// Parses the bracketed element list of an array literal; the opening
    /// bracket has been consumed.
    fn parse_array_expr(&mut self, named: bool) -> Result<Expr, ParserError> {
        if self.consume_token(&Token::RBracket) {
            return Ok(Expr::Array(ArrayExpr { elem: vec![], named }));
        }
        let elem = self.parse_comma_separated(Parser::parse_expr)?;
        self.expect_token(&Token::RBracket)?;
        Ok(Expr::Array(ArrayExpr { elem, named }))
    }

    /// Parses `key: value` pairs until the closing brace; the opening brace
    /// has been consumed.
    fn parse_dictionary_fields(&mut self) -> Result<Vec<DictionaryField>, ParserError> {
        if self.consume_token(&Token::RBrace) {
            return Ok(vec![]);
        }
        let fields = self.parse_comma_separated(|parser| {
            let key = parser.parse_subexpr(CAST_PREC)?;
            parser.expect_token(&Token::Colon)?;
            let value = parser.parse_expr()?;
            Ok(DictionaryField {
                key: Box::new(key),
                value: Box::new(value),
            })
        })?;
        self.expect_token(&Token::RBrace)?;
        Ok(fields)
    }

    // ========================================================================
    // Function calls
    // ========================================================================

    /// Parses a function call; the name has been parsed, the `(` has not
    /// been consumed yet.
    pub fn parse_function(&mut self, name: ObjectName) -> Result<Expr, ParserError> {
        self.expect_token(&Token::LParen)?;
        let mut function = Function {
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
        };
        if !self.consume_token(&Token::RParen) {
            function.duplicate_treatment = self.parse_duplicate_treatment()?;
            function.args = self.parse_comma_separated(Parser::parse_function_arg)?;
            if self.parse_keywords(&[Keyword::ORDER, Keyword::BY]) {
                function.order_by = self.parse_comma_separated(Parser::parse_order_by_expr)?;
            }
            if self.parse_keyword(Keyword::LIMIT) {
                function.limit = Some(Box::new(self.parse_expr()?));
            }
            if self.parse_keywords(&[Keyword::ON, Keyword::OVERFLOW]) {
                function.on_overflow = Some(self.parse_listagg_on_overflow()?);
            }
            self.expect_token(&Token::RParen)?;
        }

        if self.dialect.supports_filter_during_aggregation()
            && self.parse_keyword(Keyword::FILTER)
        {
            self.expect_token(&Token::LParen)?;
            self.expect_keyword(Keyword::WHERE)?;
            function.filter = Some(Box::new(self.parse_expr()?));
            self.expect_token(&Token::RParen)?;
        }
        if self.parse_keywords(&[Keyword::IGNORE, Keyword::NULLS]) {
            function.null_treatment = Some(NullTreatment::IgnoreNulls);
        } else if self.parse_keywords(&[Keyword::RESPECT, Keyword::NULLS]) {
            function.null_treatment = Some(NullTreatment::RespectNulls);
        }
        if self.parse_keywords(&[Keyword::WITHIN, Keyword::GROUP]) {
            self.expect_token(&Token::LParen)?;
            self.expect_keywords(&[Keyword::ORDER, Keyword::BY])?;
            function.within_group = self.parse_comma_separated(Parser::parse_order_by_expr)?;
            self.expect_token(&Token::RParen)?;
        }
        if self.parse_keyword(Keyword::OVER) {
            if self.consume_token(&Token::LParen) {
                let spec = self.parse_window_spec()?;
                self.expect_token(&Token::RParen)?;
                function.over = Some(WindowType::WindowSpec(spec));
            } else {
                function.over = Some(WindowType::NamedWindow(self.parse_identifier()?));
            }
        }
        Ok(Expr::Function(function))
    }

    fn parse_duplicate_treatment(&mut self) -> Result<Option<DuplicateTreatment>, ParserError> {
        let all = self.parse_keyword(Keyword::ALL);
        let distinct = self.parse_keyword(Keyword::DISTINCT);
        match (all, distinct) {
            (true, true) => parse_error("Cannot specify both ALL and DISTINCT"),
            (true, false) => Ok(Some(DuplicateTreatment::All)),
            (false, true) => Ok(Some(DuplicateTreatment::Distinct)),
            (false, false) => Ok(None),
        }
    }

    /// Parses one function argument, named (`name => expr`, and `name = expr`
    /// where the dialect allows it) or unnamed.
    pub fn parse_function_arg(&mut self) -> Result<FunctionArg, ParserError> {
        if let Token::Word(_) = self.peek_token() {
            let named = match self.peek_nth_token(1) {
                Token::RightArrow => Some(FunctionArgOperator::RightArrow),
                Token::Eq if self.dialect.supports_named_fn_args_with_eq_operator() => {
                    Some(FunctionArgOperator::Equals)
                }
                _ => None,
            };
            if let Some(operator) = named {
                let name = self.parse_identifier()?;
                self.next_token(); // consume `=>` / `=`
                let arg = self.parse_function_arg_expr()?;
                return Ok(FunctionArg::Named {
                    name,
                    arg,
                    operator,
                });
            }
        }
        Ok(FunctionArg::Unnamed(self.parse_function_arg_expr()?))
    }

    fn parse_function_arg_expr(&mut self) -> Result<FunctionArgExpr, ParserError> {
        match self.parse_expr()? {
            Expr::Wildcard => Ok(FunctionArgExpr::Wildcard),
            Expr::QualifiedWildcard(prefix) => {
                Ok(FunctionArgExpr::QualifiedWildcard(ObjectName(prefix)))
            }
            expr => Ok(FunctionArgExpr::Expr(expr)),
        }
    }

    fn parse_listagg_on_overflow(&mut self) -> Result<ListAggOnOverflow, ParserError> {
        if self.parse_keyword(Keyword::ERROR) {
            Ok(ListAggOnOverflow::Error)
        } else {
            self.expect_keyword(Keyword::TRUNCATE)?;
            let filler = match self.peek_token() {
                Token::Word(w)
                    if matches!(w.keyword, Some(Keyword::WITH) | Some(Keyword::WITHOUT)) =>
                {
                    None
                }
                _ => Some(Box::new(self.parse_expr()?)),
            };
            let with_count = if self.parse_keyword(Keyword::WITH) {
                true
            } else {
                self.expect_keyword(Keyword::WITHOUT)?;
                false
            };
            self.expect_keyword(Keyword::COUNT)?;
            Ok(ListAggOnOverflow::Truncate { filler, with_count })
        }
    }

    /// Parses the inside of an `OVER (...)` or `WINDOW ... AS (...)`
    /// specification.
    pub fn parse_window_spec(&mut self) -> Result<WindowSpec, ParserError> {
        let window_name = match self.peek_token() {
            Token::Word(w)
                if w.keyword.is_none()
                    && self.dialect.supports_window_clause_named_window_reference() =>
            {
                Some(self.parse_identifier()?)
            }
            _ => None,
        };
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
        let window_frame = match self.parse_one_of_keywords(&[
            Keyword::ROWS,
            Keyword::RANGE,
            Keyword::GROUPS,
        ]) {
            Some(keyword) => {
                let units = match keyword {
                    Keyword::ROWS => WindowFrameUnits::Rows,
                    Keyword::RANGE => WindowFrameUnits::Range,
                    _ => WindowFrameUnits::Groups,
                };
                if self.parse_keyword(Keyword::BETWEEN) {
                    let start_bound = self.parse_window_frame_bound()?;
                    self.expect_keyword(Keyword::AND)?;
                    let end_bound = Some(self.parse_window_frame_bound()?);
                    Some(WindowFrame {
                        units,
                        start_bound,
                        end_bound,
                    })
                } else {
                    Some(WindowFrame {
                        units,
                        start_bound: self.parse_window_frame_bound()?,
                        end_bound: None,
                    })
                }
            }
            None => None,
        };
        Ok(WindowSpec {
            window_name,
            partition_by,
            order_by,
            window_frame,
        })
    }

    /// Parses `CURRENT ROW`, `UNBOUNDED PRECEDING|FOLLOWING` or
    /// `<expr> PRECEDING|FOLLOWING`.
    fn parse_window_frame_bound(&mut self) -> Result<WindowFrameBound, ParserError> {
        if self.parse_keywords(&[Keyword::CURRENT, Keyword::ROW]) {
            Ok(WindowFrameBound::CurrentRow)
        } else {
            let rows = if self.parse_keyword(Keyword::UNBOUNDED) {
                None
            } else {
                Some(Box::new(self.parse_expr()?))
            };
            if self.parse_keyword(Keyword::PRECEDING) {
                Ok(WindowFrameBound::Preceding(rows))
            } else if self.parse_keyword(Keyword::FOLLOWING) {
                Ok(WindowFrameBound::Following(rows))
            } else {
                self.expected("PRECEDING or FOLLOWING", self.peek_token_with_location())
            }
        }
    }

    /// Parses an `ORDER BY` element.
    pub fn parse_order_by_expr(&mut self) -> Result<OrderByExpr, ParserError> {
        let expr = self.parse_expr()?;
        let asc = if self.parse_keyword(Keyword::ASC) {
            Some(true)
        } else if self.parse_keyword(Keyword::DESC) {
            Some(false)
        } else {
            None
        };
        let nulls_first = if self.parse_keywords(&[Keyword::NULLS, Keyword::FIRST]) {
            Some(true)
        } else if self.parse_keywords(&[Keyword::NULLS, Keyword::LAST]) {
            Some(false)
        } else {
            None
        };
        Ok(OrderByExpr {
            expr,
            asc,
            nulls_first,
        })
    }

    pub(crate) fn peek_is_query_start(&self) -> bool {
        matches!(
            self.peek_token(),
            Token::Word(w) if matches!(
                w.keyword,
                Some(Keyword::SELECT)
                    | Some(Keyword::WITH)
                    | Some(Keyword::VALUES)
                    | Some(Keyword::TABLE)
            )
        ) || self.peek_token() == Token::LParen && self.peek_nth_is_query_start(1)
    }

    fn peek_nth_is_query_start(&self, n: usize) -> bool {
        match self.peek_nth_token(n) {
            Token::Word(w) => matches!(
                w.keyword,
                Some(Keyword::SELECT)
                    | Some(Keyword::WITH)
                    | Some(Keyword::VALUES)
                    | Some(Keyword::TABLE)
            ),
            Token::LParen => self.peek_nth_is_query_start(n + 1),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::dialect::{GenericDialect, MySqlDialect, PostgreSqlDialect, SnowflakeDialect};

    fn expr(sql: &str) -> Expr {
        let dialect = GenericDialect {};
        crate::parse_expression(sql, &dialect).unwrap()
    }

    fn round_trip(sql: &str) {
        assert_eq!(expr(sql).to_string(), sql);
    }

    #[test]
    fn parse_precedence() {
        assert_eq!(expr("1 + 2 * 3").to_string(), "1 + 2 * 3");
        match expr("1 + 2 * 3") {
            Expr::BinaryOp(op) => {
                assert_eq!(op.op, BinaryOperator::Plus);
                assert_eq!(op.right.to_string(), "2 * 3");
            }
            other => panic!("unexpected: {other:?}"),
        }
        // left associativity
        match expr("1 - 2 - 3") {
            Expr::BinaryOp(op) => {
                assert_eq!(op.left.to_string(), "1 - 2");
            }
            other => panic!("unexpected: {other:?}"),
        }
        // NOT binds looser than BETWEEN
        match expr("NOT 1 BETWEEN 0 AND 2") {
            Expr::UnaryOp(op) => {
                assert_eq!(op.op, UnaryOperator::Not);
                assert!(matches!(*op.expr, Expr::Between(_)));
            }
            other => panic!("unexpected: {other:?}"),
        }
        // AND stops the BETWEEN bounds
        match expr("a BETWEEN 1 AND 2 AND b") {
            Expr::BinaryOp(op) => {
                assert_eq!(op.op, BinaryOperator::And);
                assert!(matches!(*op.left, Expr::Between(_)));
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn parse_not_like_family() {
        round_trip("a NOT LIKE 'x%'");
        round_trip("a NOT ILIKE 'x%'");
        round_trip("a NOT SIMILAR TO 'x%'");
        round_trip("a LIKE 'x%' ESCAPE '!'");
        round_trip("a NOT IN (1, 2, 3)");
        round_trip("a NOT BETWEEN 1 AND 2");
    }

    #[test]
    fn parse_is_family() {
        round_trip("a IS NULL");
        round_trip("a IS NOT NULL");
        round_trip("a IS TRUE");
        round_trip("a IS NOT FALSE");
        round_trip("a IS UNKNOWN");
        round_trip("a IS DISTINCT FROM b");
        round_trip("a IS NOT DISTINCT FROM b");
        round_trip("a IS NFC NORMALIZED");
        round_trip("a IS NOT NORMALIZED");
        // postfix spellings normalize into the IS forms
        assert_eq!(expr("a ISNULL").to_string(), "a IS NULL");
        assert_eq!(expr("a NOTNULL").to_string(), "a IS NOT NULL");
    }

    #[test]
    fn parse_is_error_message() {
        let dialect = GenericDialect {};
        let res = crate::parse_sql("SELECT a IS b", &dialect);
        assert_eq!(
            res.unwrap_err().to_string(),
            "Expected [NOT] NULL or TRUE|FALSE or [NOT] DISTINCT FROM after IS, found b, Line: 1, Col: 13"
        );
    }

    #[test]
    fn parse_special_functions() {
        round_trip("CAST(a AS INT)");
        round_trip("TRY_CAST(a AS TEXT)");
        round_trip("EXTRACT(YEAR FROM d)");
        round_trip("CEIL(a TO DAY)");
        round_trip("FLOOR(a, 2)");
        round_trip("POSITION('x' IN s)");
        round_trip("SUBSTRING(s FROM 1 FOR 2)");
        round_trip("TRIM(LEADING 'x' FROM s)");
        round_trip("OVERLAY(s PLACING 'x' FROM 2 FOR 3)");
        round_trip("a AT TIME ZONE 'UTC'");
        assert_eq!(expr("a::INT").to_string(), "a::INT");
    }

    #[test]
    fn parse_extract_error_message() {
        let dialect = PostgreSqlDialect {};
        let res = crate::parse_sql("SELECT EXTRACT(MILLISECONDS FROM d)", &dialect);
        assert_eq!(
            res.unwrap_err().to_string(),
            "Expected date/time field, found MILLISECONDS, Line: 1, Col: 16"
        );
    }

    #[test]
    fn parse_interval_literals() {
        round_trip("INTERVAL '1-1' YEAR TO MONTH");
        round_trip("INTERVAL '1' SECOND (5, 4)");
        round_trip("INTERVAL '10' HOUR (1)");
        match expr("INTERVAL '1-1' YEAR TO MONTH") {
            Expr::Interval(interval) => {
                assert_eq!(interval.leading_field, Some(DateTimeField::Year));
                assert_eq!(interval.last_field, Some(DateTimeField::Month));
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn parse_function_modifiers() {
        let dialect = PostgreSqlDialect {};
        let sql = "SELECT COUNT(DISTINCT a) FILTER (WHERE a > 0) FROM t";
        let statements = crate::parse_sql(sql, &dialect).unwrap();
        assert_eq!(statements[0].to_string(), sql);

        round_trip("ROW_NUMBER() OVER (PARTITION BY a ORDER BY b DESC)");
        round_trip("SUM(a) OVER (ROWS BETWEEN UNBOUNDED PRECEDING AND CURRENT ROW)");
        round_trip("LISTAGG(x, ',' ON OVERFLOW TRUNCATE '...' WITH COUNT) WITHIN GROUP (ORDER BY y)");
        round_trip("FIRST_VALUE(a) IGNORE NULLS OVER (ORDER BY b)");
    }

    #[test]
    fn parse_named_function_args() {
        round_trip("fn(a => 1, b => 2)");
        let dialect = MySqlDialect {};
        // `=` named args only where the dialect allows them
        let res = crate::parse_expression("fn(a = 1)", &dialect).unwrap();
        // parses as a comparison argument instead
        assert_eq!(res.to_string(), "fn(a = 1)");
    }

    #[test]
    fn parse_any_all() {
        round_trip("a = ANY (SELECT b FROM t)");
        round_trip("a > ALL (SELECT b FROM t)");
    }

    #[test]
    fn parse_json_operators() {
        let dialect = PostgreSqlDialect {};
        for sql in [
            "a -> 'b'",
            "a ->> 'b'",
            "a #> '{b,c}'",
            "a #>> '{b,c}'",
            "a #- '{b}'",
            "a @> b",
            "a <@ b",
            "a @? b",
            "a @@ b",
            "a ~ 'x'",
            "a !~* 'x'",
        ] {
            let parsed = crate::parse_expression(sql, &dialect).unwrap();
            assert_eq!(parsed.to_string(), sql);
        }
    }

    #[test]
    fn parse_container_literals() {
        round_trip("ARRAY[1, 2, 3]");
        let dialect = crate::dialect::DuckDbDialect {};
        let parsed = crate::parse_expression("MAP {'a': 1, 'b': 2}", &dialect).unwrap();
        assert_eq!(parsed.to_string(), "MAP {'a': 1, 'b': 2}");
        let parsed = crate::parse_expression("{'a': 1}", &dialect).unwrap();
        assert_eq!(parsed.to_string(), "{'a': 1}");
        round_trip("arr[1][2]");
    }

    #[test]
    fn parse_connect_by_operators() {
        let dialect = SnowflakeDialect {};
        let parsed = crate::parse_expression("CONNECT_BY_ROOT name", &dialect).unwrap();
        assert_eq!(parsed.to_string(), "CONNECT_BY_ROOT name");
        let parsed = crate::parse_expression("PRIOR id", &dialect).unwrap();
        assert_eq!(parsed.to_string(), "PRIOR id");
    }
}
