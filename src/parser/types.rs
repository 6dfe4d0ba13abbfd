#[cfg(not(feature = "std"))]
use alloc::{
    boxed::Box,
    format,
    string::{String, ToString},
    vec,
    vec::Vec,
};

use crate::{
    ast::*,
    error::ParserError,
    keywords::Keyword,
    parser::Parser,
    tokens::Token,
};

impl<'a> Parser<'a> {
    /// Parses an identifier.
    pub fn parse_identifier(&mut self) -> Result<Ident, ParserError> {
        let token = self.next_token_with_location();
        match &token.token {
            Token::Word(w) => Ok(Ident {
                value: w.value.clone(),
                quote_style: w.quote_style,
            }),
            _ => self.expected("identifier", token),
        }
    }

    /// Parses a possibly qualified, possibly quoted object name.
    pub fn parse_object_name(&mut self) -> Result<ObjectName, ParserError> {
        let mut idents = vec![];
        loop {
            idents.push(self.parse_identifier()?);
            if !self.consume_token(&Token::Period) {
                break;
            }
        }
        Ok(ObjectName(idents))
    }

    /// Parses a literal value (numbers, strings, NULL, booleans,
    /// placeholders).
    pub fn parse_value(&mut self) -> Result<Value, ParserError> {
        let token = self.next_token_with_location();
        match &token.token {
            Token::Word(w) => match w.keyword {
                Some(Keyword::TRUE) => Ok(Value::Boolean(true)),
                Some(Keyword::FALSE) => Ok(Value::Boolean(false)),
                Some(Keyword::NULL) => Ok(Value::Null),
                _ => self.expected("a value", token),
            },
            Token::Number(n, long) => Ok(Value::Number(n.clone(), *long)),
            Token::SingleQuotedString(s) => Ok(Value::SingleQuotedString(s.clone())),
            Token::DoubleQuotedString(s) => Ok(Value::DoubleQuotedString(s.clone())),
            Token::NationalStringLiteral(s) => Ok(Value::NationalStringLiteral(s.clone())),
            Token::HexStringLiteral(s) => Ok(Value::HexStringLiteral(s.clone())),
            Token::EscapedStringLiteral(s) => Ok(Value::EscapedStringLiteral(s.clone())),
            Token::RawStringLiteral(s) => Ok(Value::RawStringLiteral(s.clone())),
            Token::SingleQuotedByteStringLiteral(s) => {
                Ok(Value::SingleQuotedByteStringLiteral(s.clone()))
            }
            Token::DollarQuotedString(s) => Ok(Value::DollarQuotedString(s.clone())),
            Token::Placeholder(s) => Ok(Value::Placeholder(s.clone())),
            _ => self.expected("a value", token),
        }
    }

    /// Parses a number literal.
    pub fn parse_number_value(&mut self) -> Result<Value, ParserError> {
        let token = self.next_token_with_location();
        match &token.token {
            Token::Number(n, long) => Ok(Value::Number(n.clone(), *long)),
            _ => self.expected("literal number", token),
        }
    }

    /// Parses an unsigned integer literal.
    pub fn parse_literal_uint(&mut self) -> Result<u64, ParserError> {
        let token = self.next_token_with_location();
        match &token.token {
            Token::Number(n, _) => n.parse::<u64>().map_err(|e| {
                ParserError::ParserError(format!("Could not parse '{n}' as u64: {e}"))
            }),
            _ => self.expected("literal unsigned int", token),
        }
    }

    /// Parses a string literal token.
    pub fn parse_literal_string(&mut self) -> Result<String, ParserError> {
        let token = self.next_token_with_location();
        match &token.token {
            Token::SingleQuotedString(s) | Token::DoubleQuotedString(s) => Ok(s.clone()),
            _ => self.expected("literal string", token),
        }
    }

    /// Parses a field of a date/time value for `EXTRACT`, `CEIL`/`FLOOR`
    /// and interval qualifiers. Dialects may allow custom or single-quoted
    /// fields.
    pub fn parse_date_time_field(&mut self) -> Result<DateTimeField, ParserError> {
        let token = self.next_token_with_location();
        match &token.token {
            Token::Word(w) => match w.keyword {
                Some(Keyword::YEAR) => Ok(DateTimeField::Year),
                Some(Keyword::MONTH) => Ok(DateTimeField::Month),
                Some(Keyword::WEEK) => Ok(DateTimeField::Week),
                Some(Keyword::DAY) => Ok(DateTimeField::Day),
                Some(Keyword::HOUR) => Ok(DateTimeField::Hour),
                Some(Keyword::MINUTE) => Ok(DateTimeField::Minute),
                Some(Keyword::SECOND) => Ok(DateTimeField::Second),
                Some(Keyword::CENTURY) => Ok(DateTimeField::Century),
                Some(Keyword::DECADE) => Ok(DateTimeField::Decade),
                Some(Keyword::DOW) => Ok(DateTimeField::Dow),
                Some(Keyword::DOY) => Ok(DateTimeField::Doy),
                Some(Keyword::EPOCH) => Ok(DateTimeField::Epoch),
                Some(Keyword::ISODOW) => Ok(DateTimeField::Isodow),
                Some(Keyword::ISOYEAR) => Ok(DateTimeField::Isoyear),
                Some(Keyword::JULIAN) => Ok(DateTimeField::Julian),
                Some(Keyword::MICROSECOND) => Ok(DateTimeField::Microsecond),
                Some(Keyword::MILLENNIUM) => Ok(DateTimeField::Millennium),
                Some(Keyword::MILLISECOND) => Ok(DateTimeField::Millisecond),
                Some(Keyword::NANOSECOND) => Ok(DateTimeField::Nanosecond),
                Some(Keyword::QUARTER) => Ok(DateTimeField::Quarter),
                Some(Keyword::TIMEZONE_HOUR) => Ok(DateTimeField::TimezoneHour),
                Some(Keyword::TIMEZONE_MINUTE) => Ok(DateTimeField::TimezoneMinute),
                _ if self.dialect.allow_extract_custom() => Ok(DateTimeField::Custom(Ident {
                    value: w.value.clone(),
                    quote_style: w.quote_style,
                })),
                _ => self.expected("date/time field", token),
            },
            Token::SingleQuotedString(s) if self.dialect.allow_extract_single_quotes() => {
                Ok(DateTimeField::Custom(Ident::with_quote('\'', s.clone())))
            }
            _ => self.expected("date/time field", token),
        }
    }

    /// Parses an `INTERVAL` literal, assuming the `INTERVAL` keyword has
    /// been consumed.
    ///
    /// Some syntactically valid intervals:
    ///
    /// ```txt
    /// 1. INTERVAL '<value>' <leading field> [ (<leading precision>) ] TO <last field>
    /// 2. INTERVAL '<value>' <leading field> [ (<leading precision>) ]
    ///        TO SECOND [ (<fractional seconds precision>) ]
    /// 3. INTERVAL '<value>' <leading field> [ (<leading precision>) ]
    /// 4. INTERVAL '<value>' SECOND [ (<leading precision> [, <fractional seconds precision> ]) ]
    /// 5. INTERVAL '<value>' (PostgreSQL, with the qualifier inside the string)
    /// ```
    ///
    /// Note: the quoted value itself is not validated.
    pub fn parse_interval(&mut self) -> Result<Interval, ParserError> {
        // The SQL standard allows an optional sign before the value string,
        // which is parsed as part of the prefix expression.
        let value = self.parse_prefix()?;

        // Following the string literal is a qualifier which indicates the
        // units of the duration. PostgreSQL allows omitting it entirely,
        // other dialects insist on one.
        let leading_field = if self.dialect.require_interval_qualifier() {
            Some(self.parse_date_time_field()?)
        } else {
            match self.peek_token() {
                Token::Word(w)
                    if matches!(
                        w.keyword,
                        Some(Keyword::YEAR)
                            | Some(Keyword::MONTH)
                            | Some(Keyword::WEEK)
                            | Some(Keyword::DAY)
                            | Some(Keyword::HOUR)
                            | Some(Keyword::MINUTE)
                            | Some(Keyword::SECOND)
                            | Some(Keyword::CENTURY)
                            | Some(Keyword::DECADE)
                            | Some(Keyword::MILLENNIUM)
                            | Some(Keyword::MICROSECOND)
                            | Some(Keyword::MILLISECOND)
                            | Some(Keyword::NANOSECOND)
                            | Some(Keyword::QUARTER)
                    ) =>
                {
                    Some(self.parse_date_time_field()?)
                }
                _ => None,
            }
        };

        let (leading_precision, last_field, fractional_seconds_precision) =
            if leading_field == Some(DateTimeField::Second) {
                // `SECOND [ (<leading precision> [, <fractional seconds precision>]) ]`
                let (leading_precision, fractional_seconds_precision) =
                    self.parse_optional_precision_scale()?;
                (leading_precision, None, fractional_seconds_precision)
            } else {
                let leading_precision = self.parse_optional_precision()?;
                if self.parse_keyword(Keyword::TO) {
                    let last_field = Some(self.parse_date_time_field()?);
                    let fractional_seconds_precision = if last_field == Some(DateTimeField::Second)
                    {
                        self.parse_optional_precision()?
                    } else {
                        None
                    };
                    (leading_precision, last_field, fractional_seconds_precision)
                } else {
                    (leading_precision, None, None)
                }
            };

        Ok(Interval {
            value: Box::new(value),
            leading_field,
            leading_precision,
            last_field,
            fractional_seconds_precision,
        })
    }

    /// Parses a data type, including array suffixes (`[]`, `[n]`, chained).
    pub fn parse_data_type(&mut self) -> Result<DataType, ParserError> {
        let mut data_type = self.parse_simple_data_type()?;
        // PostgreSQL-style array suffixes, e.g. INT[], INT[3][]
        while self.consume_token(&Token::LBracket) {
            let size = if self.peek_token() != Token::RBracket {
                Some(self.parse_literal_uint()?)
            } else {
                None
            };
            self.expect_token(&Token::RBracket)?;
            data_type = DataType::Array(ArrayElemTypeDef::SquareBracket(Box::new(data_type), size));
        }
        Ok(data_type)
    }

    fn parse_simple_data_type(&mut self) -> Result<DataType, ParserError> {
        let token = self.next_token_with_location();
        match &token.token {
            Token::Word(w) => match w.keyword {
                Some(Keyword::BOOLEAN) => Ok(DataType::Boolean),
                Some(Keyword::BOOL) => Ok(DataType::Bool),

                Some(Keyword::TINYINT) => {
                    let size = self.parse_optional_precision()?;
                    Ok(DataType::TinyInt(size, self.parse_keyword(Keyword::UNSIGNED)))
                }
                Some(Keyword::SMALLINT) => {
                    let size = self.parse_optional_precision()?;
                    Ok(DataType::SmallInt(size, self.parse_keyword(Keyword::UNSIGNED)))
                }
                Some(Keyword::MEDIUMINT) => {
                    let size = self.parse_optional_precision()?;
                    Ok(DataType::MediumInt(size, self.parse_keyword(Keyword::UNSIGNED)))
                }
                Some(Keyword::INT) => {
                    let size = self.parse_optional_precision()?;
                    Ok(DataType::Int(size, self.parse_keyword(Keyword::UNSIGNED)))
                }
                Some(Keyword::INTEGER) => {
                    let size = self.parse_optional_precision()?;
                    Ok(DataType::Integer(size, self.parse_keyword(Keyword::UNSIGNED)))
                }
                Some(Keyword::BIGINT) => {
                    let size = self.parse_optional_precision()?;
                    Ok(DataType::BigInt(size, self.parse_keyword(Keyword::UNSIGNED)))
                }
                Some(Keyword::INT2) => Ok(DataType::Int2),
                Some(Keyword::INT4) => Ok(DataType::Int4),
                Some(Keyword::INT8) => Ok(DataType::Int8),
                Some(Keyword::FLOAT4) => Ok(DataType::Float4),
                Some(Keyword::FLOAT8) => Ok(DataType::Float8),
                Some(Keyword::FLOAT) => Ok(DataType::Float(self.parse_optional_precision()?)),
                Some(Keyword::REAL) => Ok(DataType::Real),
                Some(Keyword::DOUBLE) => {
                    if self.parse_keyword(Keyword::PRECISION) {
                        Ok(DataType::DoublePrecision)
                    } else {
                        Ok(DataType::Double)
                    }
                }

                Some(Keyword::NUMERIC) => {
                    Ok(DataType::Numeric(self.parse_exact_number_info()?))
                }
                Some(Keyword::DECIMAL) => {
                    Ok(DataType::Decimal(self.parse_exact_number_info()?))
                }
                Some(Keyword::DEC) => Ok(DataType::Dec(self.parse_exact_number_info()?)),
                Some(Keyword::BIGNUMERIC) => {
                    Ok(DataType::BigNumeric(self.parse_exact_number_info()?))
                }
                Some(Keyword::BIGDECIMAL) => {
                    Ok(DataType::BigDecimal(self.parse_exact_number_info()?))
                }

                Some(Keyword::CHARACTER) => {
                    if self.parse_keyword(Keyword::VARYING) {
                        Ok(DataType::CharacterVarying(self.parse_optional_character_length()?))
                    } else {
                        Ok(DataType::Character(self.parse_optional_character_length()?))
                    }
                }
                Some(Keyword::CHAR) => {
                    if self.parse_keyword(Keyword::VARYING) {
                        Ok(DataType::CharVarying(self.parse_optional_character_length()?))
                    } else {
                        Ok(DataType::Char(self.parse_optional_character_length()?))
                    }
                }
                Some(Keyword::VARCHAR) => {
                    Ok(DataType::Varchar(self.parse_optional_character_length()?))
                }
                Some(Keyword::NCHAR) => {
                    Ok(DataType::Nchar(self.parse_optional_character_length()?))
                }
                Some(Keyword::NVARCHAR) => Ok(DataType::Nvarchar(self.parse_optional_precision()?)),
                Some(Keyword::TEXT) => Ok(DataType::Text),
                Some(Keyword::STRING) => Ok(DataType::String(self.parse_optional_precision()?)),
                Some(Keyword::CLOB) => Ok(DataType::Clob(self.parse_optional_precision()?)),
                Some(Keyword::UUID) => Ok(DataType::Uuid),

                Some(Keyword::BINARY) => Ok(DataType::Binary(self.parse_optional_precision()?)),
                Some(Keyword::VARBINARY) => {
                    Ok(DataType::Varbinary(self.parse_optional_precision()?))
                }
                Some(Keyword::BLOB) => Ok(DataType::Blob(self.parse_optional_precision()?)),
                Some(Keyword::BYTES) => Ok(DataType::Bytes(self.parse_optional_precision()?)),
                Some(Keyword::BYTEA) => Ok(DataType::Bytea),

                Some(Keyword::DATE) => Ok(DataType::Date),
                Some(Keyword::DATETIME) => Ok(DataType::Datetime(self.parse_optional_precision()?)),
                Some(Keyword::TIME) => {
                    let precision = self.parse_optional_precision()?;
                    let tz = self.parse_timezone_info()?;
                    Ok(DataType::Time(precision, tz))
                }
                Some(Keyword::TIMESTAMP) => {
                    let precision = self.parse_optional_precision()?;
                    let tz = self.parse_timezone_info()?;
                    Ok(DataType::Timestamp(precision, tz))
                }
                // Interval types can be followed by a complicated interval
                // qualifier that only matters for literals; the bare type is
                // enough here.
                Some(Keyword::INTERVAL) => Ok(DataType::Interval),

                Some(Keyword::JSON) => Ok(DataType::Json),
                Some(Keyword::JSONB) => Ok(DataType::Jsonb),
                Some(Keyword::REGCLASS) => Ok(DataType::Regclass),

                Some(Keyword::ENUM) => Ok(DataType::Enum(self.parse_string_list()?)),
                Some(Keyword::SET) => Ok(DataType::Set(self.parse_string_list()?)),

                Some(Keyword::ARRAY) => {
                    if self.consume_token(&Token::Lt) {
                        let inner = self.parse_data_type()?;
                        self.expect_token(&Token::Gt)?;
                        Ok(DataType::Array(ArrayElemTypeDef::AngleBracket(Box::new(
                            inner,
                        ))))
                    } else {
                        Ok(DataType::Array(ArrayElemTypeDef::None))
                    }
                }
                Some(Keyword::MAP) => {
                    self.expect_token(&Token::Lt)?;
                    let key = self.parse_data_type()?;
                    self.expect_token(&Token::Comma)?;
                    let value = self.parse_data_type()?;
                    self.expect_token(&Token::Gt)?;
                    Ok(DataType::Map(Box::new(key), Box::new(value)))
                }

                _ => {
                    self.prev_token();
                    let name = self.parse_object_name()?;
                    let modifiers = self.parse_optional_type_modifiers()?;
                    Ok(DataType::Custom(name, modifiers))
                }
            },
            _ => self.expected("a data type name", token),
        }
    }

    fn parse_timezone_info(&mut self) -> Result<TimezoneInfo, ParserError> {
        if self.parse_keywords(&[Keyword::WITH, Keyword::TIME, Keyword::ZONE]) {
            Ok(TimezoneInfo::WithTimeZone)
        } else if self.parse_keywords(&[Keyword::WITHOUT, Keyword::TIME, Keyword::ZONE]) {
            Ok(TimezoneInfo::WithoutTimeZone)
        } else {
            Ok(TimezoneInfo::None)
        }
    }

    fn parse_exact_number_info(&mut self) -> Result<ExactNumberInfo, ParserError> {
        let (precision, scale) = self.parse_optional_precision_scale()?;
        Ok(match (precision, scale) {
            (Some(precision), Some(scale)) => ExactNumberInfo::PrecisionAndScale(precision, scale),
            (Some(precision), None) => ExactNumberInfo::Precision(precision),
            _ => ExactNumberInfo::None,
        })
    }

    fn parse_optional_character_length(
        &mut self,
    ) -> Result<Option<CharacterLength>, ParserError> {
        if !self.consume_token(&Token::LParen) {
            return Ok(None);
        }
        let length = if self.parse_keyword(Keyword::MAX) {
            CharacterLength::Max
        } else {
            let length = self.parse_literal_uint()?;
            let unit = if self.parse_keyword(Keyword::CHARACTERS) {
                Some(CharLengthUnits::Characters)
            } else if self.parse_keyword(Keyword::OCTETS) {
                Some(CharLengthUnits::Octets)
            } else {
                None
            };
            CharacterLength::IntegerLength { length, unit }
        };
        self.expect_token(&Token::RParen)?;
        Ok(Some(length))
    }

    pub(crate) fn parse_optional_precision(&mut self) -> Result<Option<u64>, ParserError> {
        if self.consume_token(&Token::LParen) {
            let n = self.parse_literal_uint()?;
            self.expect_token(&Token::RParen)?;
            Ok(Some(n))
        } else {
            Ok(None)
        }
    }

    pub(crate) fn parse_optional_precision_scale(
        &mut self,
    ) -> Result<(Option<u64>, Option<u64>), ParserError> {
        if self.consume_token(&Token::LParen) {
            let precision = self.parse_literal_uint()?;
            let scale = if self.consume_token(&Token::Comma) {
                Some(self.parse_literal_uint()?)
            } else {
                None
            };
            self.expect_token(&Token::RParen)?;
            Ok((Some(precision), scale))
        } else {
            Ok((None, None))
        }
    }

    fn parse_string_list(&mut self) -> Result<Vec<String>, ParserError> {
        self.expect_token(&Token::LParen)?;
        let values = self.parse_comma_separated(|parser| parser.parse_literal_string())?;
        self.expect_token(&Token::RParen)?;
        Ok(values)
    }

    fn parse_optional_type_modifiers(&mut self) -> Result<Vec<String>, ParserError> {
        if !self.consume_token(&Token::LParen) {
            return Ok(vec![]);
        }
        let mut modifiers = vec![];
        loop {
            let token = self.next_token_with_location();
            match &token.token {
                Token::Word(w) => modifiers.push(w.value.clone()),
                Token::Number(n, _) => modifiers.push(n.clone()),
                Token::SingleQuotedString(s) => modifiers.push(s.clone()),
                _ => return self.expected("type modifiers", token),
            }
            if self.consume_token(&Token::RParen) {
                break;
            }
            self.expect_token(&Token::Comma)?;
        }
        Ok(modifiers)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::dialect::{GenericDialect, PostgreSqlDialect};

    fn parse_type(sql: &str) -> DataType {
        let dialect = GenericDialect {};
        crate::parse_data_type(sql, &dialect).unwrap()
    }

    #[test]
    fn parse_common_types() {
        assert_eq!(parse_type("INT"), DataType::Int(None, false));
        assert_eq!(parse_type("INT(11) UNSIGNED"), DataType::Int(Some(11), true));
        assert_eq!(
            parse_type("NUMERIC(10, 2)"),
            DataType::Numeric(ExactNumberInfo::PrecisionAndScale(10, 2))
        );
        assert_eq!(
            parse_type("VARCHAR(255)"),
            DataType::Varchar(Some(CharacterLength::IntegerLength {
                length: 255,
                unit: None
            }))
        );
        assert_eq!(parse_type("VARCHAR(MAX)"), DataType::Varchar(Some(CharacterLength::Max)));
        assert_eq!(
            parse_type("TIMESTAMP(3) WITH TIME ZONE"),
            DataType::Timestamp(Some(3), TimezoneInfo::WithTimeZone)
        );
        assert_eq!(parse_type("DOUBLE PRECISION"), DataType::DoublePrecision);
    }

    #[test]
    fn parse_array_types() {
        assert_eq!(
            parse_type("INT[]"),
            DataType::Array(ArrayElemTypeDef::SquareBracket(
                Box::new(DataType::Int(None, false)),
                None
            ))
        );
        assert_eq!(
            parse_type("INT[3]"),
            DataType::Array(ArrayElemTypeDef::SquareBracket(
                Box::new(DataType::Int(None, false)),
                Some(3)
            ))
        );
        assert_eq!(
            parse_type("ARRAY<TEXT>"),
            DataType::Array(ArrayElemTypeDef::AngleBracket(Box::new(DataType::Text)))
        );
    }

    #[test]
    fn parse_custom_type_with_modifiers() {
        assert_eq!(
            parse_type("GEOMETRY(POINT, 4326)"),
            DataType::Custom(
                ObjectName(vec![Ident::new("GEOMETRY")]),
                vec!["POINT".to_string(), "4326".to_string()]
            )
        );
    }

    #[test]
    fn data_type_round_trips() {
        for sql in [
            "CHARACTER VARYING(10)",
            "DECIMAL(8, 2)",
            "TIME WITHOUT TIME ZONE",
            "MAP<TEXT, INT>",
            "ENUM('a', 'b')",
        ] {
            assert_eq!(parse_type(sql).to_string(), sql);
        }
    }

    #[test]
    fn parse_object_names() {
        let dialect = PostgreSqlDialect {};
        let name = crate::parse_object_name("a.\"b\".c", &dialect).unwrap();
        assert_eq!(name.to_string(), "a.\"b\".c");
    }
}
