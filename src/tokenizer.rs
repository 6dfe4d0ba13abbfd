//! SQL tokenizer.
//!
//! A stateful character scanner that turns a SQL source string into a flat
//! sequence of [`Token`]s, each carrying the [`Location`] where it starts.
//! Dialect predicates and flags drive every lexical decision; the scanner
//! itself holds no dialect knowledge.

#[cfg(not(feature = "std"))]
use alloc::{
    format,
    string::{String, ToString},
    vec,
    vec::Vec,
};
use core::iter::Peekable;
use core::str::Chars;

use crate::{
    dialect::Dialect,
    error::{Location, TokenizeError},
    tokens::{DollarQuotedString, Token, TokenWithLocation, Whitespace, Word},
};

/// SQL tokenizer.
pub struct Tokenizer<'a> {
    dialect: &'a dyn Dialect,
    iter: Peekable<Chars<'a>>,
    location: Location,
    /// When true (the default), `''` collapses to `'` and backslash escape
    /// sequences are folded; when false they are preserved byte-for-byte.
    unescape: bool,
}

impl<'a> Tokenizer<'a> {
    /// Creates a new SQL tokenizer for the given input string.
    pub fn new(dialect: &'a dyn Dialect, input: &'a str) -> Self {
        Self {
            dialect,
            iter: input.chars().peekable(),
            location: Location::default(),
            unescape: true,
        }
    }

    /// Controls string-literal escape folding.
    pub fn with_unescape(mut self, unescape: bool) -> Self {
        self.unescape = unescape;
        self
    }

    /// Tokenizes the input and produces a sequence of tokens.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, TokenizeError> {
        self.tokenize_with_location()
            .map(|tokens| tokens.into_iter().map(|t| t.token).collect())
    }

    /// Tokenizes the input, keeping the location where each token starts.
    pub fn tokenize_with_location(&mut self) -> Result<Vec<TokenWithLocation>, TokenizeError> {
        let mut tokens = vec![];
        loop {
            let start = self.location;
            match self.next_token()? {
                Some(token) => tokens.push(TokenWithLocation::new(token, start)),
                None => break,
            }
        }
        Ok(tokens)
    }

    fn next_token(&mut self) -> Result<Option<Token>, TokenizeError> {
        let ch = match self.iter.peek() {
            Some(&ch) => ch,
            None => return Ok(None),
        };
        match ch {
            ' ' | '\t' | '\n' | '\r' => Ok(self.tokenize_whitespace().map(Token::Whitespace)),
            // national string literal
            // The spec only allows an uppercase 'N' to introduce a national
            // string literal, but PostgreSQL/MySQL, at least, allow a
            // lowercase 'n' too.
            n @ 'N' | n @ 'n' => {
                self.next_char();
                if self.next_if_is('\'') {
                    let s = self.tokenize_quoted_string('\'')?;
                    Ok(Some(Token::NationalStringLiteral(s)))
                } else {
                    Ok(Some(self.tokenize_word(n)))
                }
            }
            e @ 'E' | e @ 'e' if self.dialect.supports_escaped_string_literal() => {
                self.next_char();
                if self.next_if_is('\'') {
                    let s = self.tokenize_escaped_string()?;
                    Ok(Some(Token::EscapedStringLiteral(s)))
                } else {
                    Ok(Some(self.tokenize_word(e)))
                }
            }
            r @ 'R' | r @ 'r' if self.dialect.supports_raw_string_literal() => {
                self.next_char();
                if self.next_if_is('\'') {
                    let s = self.tokenize_raw_string()?;
                    Ok(Some(Token::RawStringLiteral(s)))
                } else {
                    Ok(Some(self.tokenize_word(r)))
                }
            }
            b @ 'B' | b @ 'b' => {
                self.next_char();
                if self.next_if_is('\'') {
                    let s = self.tokenize_quoted_string('\'')?;
                    Ok(Some(Token::SingleQuotedByteStringLiteral(s)))
                } else {
                    Ok(Some(self.tokenize_word(b)))
                }
            }
            // The spec only allows an uppercase 'X' to introduce a hex
            // string literal, but PostgreSQL/MySQL, at least, allow a
            // lowercase 'x' too.
            x @ 'X' | x @ 'x' => {
                self.next_char();
                if self.next_if_is('\'') {
                    let s = self.tokenize_quoted_string('\'')?;
                    Ok(Some(Token::HexStringLiteral(s)))
                } else {
                    Ok(Some(self.tokenize_word(x)))
                }
            }
            quote if self.dialect.is_delimited_identifier_start(quote)
                && self
                    .dialect
                    .is_proper_identifier_inside_quotes(self.iter.clone()) =>
            {
                self.next_char();
                let ident = self.tokenize_delimited_ident(quote)?;
                Ok(Some(Token::Word(Word {
                    value: ident,
                    quote_style: Some(quote),
                    keyword: None,
                })))
            }
            '\'' => {
                self.next_char();
                let s = self.tokenize_quoted_string('\'')?;
                Ok(Some(Token::SingleQuotedString(s)))
            }
            '"' if self.dialect.supports_double_quoted_string() => {
                self.next_char();
                let s = self.tokenize_quoted_string('"')?;
                Ok(Some(Token::DoubleQuotedString(s)))
            }
            // Numbers go first: dialects like Hive and MySQL treat digits as
            // identifier starts, and glued identifiers are recovered inside
            // the number scanner instead.
            ch if ch.is_ascii_digit() || ch == '.' => self.tokenize_number().map(Some),
            // `@` and `#` can start both identifiers (`@var`, `#temp`) and
            // operators (`@>`, `#>>`); only a following identifier character
            // makes them a word.
            ch @ ('@' | '#') if self.dialect.is_identifier_start(ch) => {
                let mut ahead = self.iter.clone();
                ahead.next();
                match ahead.next() {
                    Some(next) if self.dialect.is_identifier_part(next) => {
                        self.next_char();
                        Ok(Some(self.tokenize_word(ch)))
                    }
                    _ => self.tokenize_symbol().map(Some),
                }
            }
            ch if self.dialect.is_identifier_start(ch) => {
                self.next_char();
                Ok(Some(self.tokenize_word(ch)))
            }
            '$' => {
                self.next_char();
                self.tokenize_dollar_preceded_value().map(Some)
            }
            _ => self.tokenize_symbol().map(Some),
        }
    }

    fn tokenize_whitespace(&mut self) -> Option<Whitespace> {
        self.iter.next().map(|ch| match ch {
            ' ' => {
                self.location.column += 1;
                Whitespace::Space
            }
            '\t' => {
                self.location.column += 1;
                Whitespace::Tab
            }
            '\n' => {
                self.location.line += 1;
                self.location.column = 1;
                Whitespace::Newline
            }
            '\r' => {
                // Emit a single Whitespace::Newline token for \r and \r\n
                self.iter.next_if_eq(&'\n');
                self.location.line += 1;
                self.location.column = 1;
                Whitespace::Newline
            }
            _ => unreachable!(),
        })
    }

    fn tokenize_word(&mut self, first: char) -> Token {
        let dialect = self.dialect;
        let mut value = first.to_string();
        value.push_str(&self.peeking_take_while(|ch| dialect.is_identifier_part(ch)));
        Token::make_word(value, None)
    }

    /// Reads a string literal body after the open quote has been consumed.
    /// A doubled quote is an escaped quote; a backslash escapes when the
    /// dialect says so.
    fn tokenize_quoted_string(&mut self, quote: char) -> Result<String, TokenizeError> {
        let mut s = String::new();
        let backslash_escape = self.dialect.supports_string_literal_backslash_escape();
        loop {
            match self.next_char() {
                Some(ch) if ch == quote => {
                    if self.iter.peek() == Some(&quote) {
                        self.next_char();
                        s.push(quote);
                        if !self.unescape {
                            s.push(quote);
                        }
                    } else {
                        return Ok(s);
                    }
                }
                Some('\\') if backslash_escape => match self.next_char() {
                    Some(next) => {
                        if self.unescape {
                            s.push(match next {
                                '0' => '\0',
                                'b' => '\u{8}',
                                'n' => '\n',
                                'r' => '\r',
                                't' => '\t',
                                'Z' => '\u{1a}',
                                _ => next,
                            });
                        } else {
                            s.push('\\');
                            s.push(next);
                        }
                    }
                    None => break,
                },
                Some(ch) => s.push(ch),
                None => break,
            }
        }
        Err(self.location.into_error(format!(
            "Unterminated string literal. Expected {} after {}",
            quote, self.location
        )))
    }

    /// `E'...'` body: backslash escapes are always meaningful.
    fn tokenize_escaped_string(&mut self) -> Result<String, TokenizeError> {
        let mut s = String::new();
        loop {
            match self.next_char() {
                Some('\'') => {
                    if self.iter.peek() == Some(&'\'') {
                        self.next_char();
                        s.push('\'');
                        if !self.unescape {
                            s.push('\'');
                        }
                    } else {
                        return Ok(s);
                    }
                }
                Some('\\') => match self.next_char() {
                    Some(next) => {
                        if self.unescape {
                            s.push(match next {
                                'n' => '\n',
                                'r' => '\r',
                                't' => '\t',
                                _ => next,
                            });
                        } else {
                            s.push('\\');
                            s.push(next);
                        }
                    }
                    None => break,
                },
                Some(ch) => s.push(ch),
                None => break,
            }
        }
        Err(self.location.into_error(format!(
            "Unterminated string literal. Expected ' after {}",
            self.location
        )))
    }

    /// `R'...'` body: no escape processing at all.
    fn tokenize_raw_string(&mut self) -> Result<String, TokenizeError> {
        let s = self.peeking_take_while(|ch| ch != '\'');
        if self.next_char() == Some('\'') {
            Ok(s)
        } else {
            Err(self.location.into_error(format!(
                "Unterminated string literal. Expected ' after {}",
                self.location
            )))
        }
    }

    fn tokenize_delimited_ident(&mut self, open_quote: char) -> Result<String, TokenizeError> {
        let close_quote = Word::matching_end_quote(open_quote);
        let mut s = String::new();
        loop {
            match self.next_char() {
                Some(ch) if ch == close_quote => {
                    // a repeated close quote inside is a literal quote char
                    if self.iter.peek() == Some(&close_quote) {
                        self.next_char();
                        s.push(close_quote);
                    } else {
                        return Ok(s);
                    }
                }
                Some(ch) => s.push(ch),
                None => break,
            }
        }
        Err(self
            .location
            .into_error(format!("Expected close delimiter '{close_quote}' before EOF.")))
    }

    fn tokenize_number(&mut self) -> Result<Token, TokenizeError> {
        let mut s = self.peeking_take_while(|ch| ch.is_ascii_digit());

        // MySQL hex literals in digit form: 0x
        if s == "0" && self.next_if_is('x') {
            let hex = self.peeking_take_while(|ch| ch.is_ascii_alphanumeric());
            return Ok(Token::HexStringLiteral(hex));
        }

        // match one period
        if self.next_if_is('.') {
            s.push('.');
        }
        s += &self.peeking_take_while(|ch| ch.is_ascii_digit());

        // No number -> Token::Period
        if s == "." {
            return Ok(Token::Period);
        }

        // Optional exponent; only committed when followed by digits.
        if matches!(self.iter.peek(), Some('e') | Some('E')) {
            let mut spec = self.iter.clone();
            let mut exponent = String::from(spec.next().unwrap());
            if matches!(spec.peek(), Some('+') | Some('-')) {
                exponent.push(spec.next().unwrap());
            }
            if matches!(spec.peek(), Some(c) if c.is_ascii_digit()) {
                for _ in 0..exponent.len() {
                    self.next_char();
                }
                exponent += &self.peeking_take_while(|ch| ch.is_ascii_digit());
                s += &exponent;
            }
        }

        // MySQL and Hive treat a run of digits glued to identifier
        // characters as a word, e.g. `SELECT 1col FROM t`.
        let dialect = self.dialect;
        if dialect.supports_numeric_prefix() {
            if let Some(&ch) = self.iter.peek() {
                if dialect.is_identifier_part(ch) && !s.contains('.') {
                    let rest = self.peeking_take_while(|ch| dialect.is_identifier_part(ch));
                    return Ok(Token::make_word(format!("{s}{rest}"), None));
                }
            }
        }

        let long = self.next_if_is('L');
        Ok(Token::Number(s, long))
    }

    /// Dollar-quoted string (`$tag$ ... $tag$` or `$$ ... $$`), or a `$N` /
    /// `$name` placeholder when no dollar-quote follows. The `$` has been
    /// consumed.
    fn tokenize_dollar_preceded_value(&mut self) -> Result<Token, TokenizeError> {
        if self.dialect.supports_dollar_quoted_strings() && self.iter.peek() == Some(&'$') {
            self.next_char();
            let value = self.tokenize_dollar_quoted_body(None)?;
            return Ok(Token::DollarQuotedString(DollarQuotedString {
                value,
                tag: None,
            }));
        }
        let tag = self.peeking_take_while(|ch| ch.is_alphanumeric() || ch == '_');
        if self.dialect.supports_dollar_quoted_strings() && self.iter.peek() == Some(&'$') {
            self.next_char();
            let value = self.tokenize_dollar_quoted_body(Some(&tag))?;
            Ok(Token::DollarQuotedString(DollarQuotedString {
                value,
                tag: Some(tag),
            }))
        } else {
            Ok(Token::Placeholder(format!("${tag}")))
        }
    }

    /// Scans until the exact closing delimiter (`$tag$`, or `$$` when there
    /// is no tag).
    fn tokenize_dollar_quoted_body(&mut self, tag: Option<&str>) -> Result<String, TokenizeError> {
        let mut value = String::new();
        loop {
            match self.next_char() {
                Some('$') => {
                    let closing = match tag {
                        Some(tag) => format!("{tag}$"),
                        None => "$".to_string(),
                    };
                    let mut spec = self.iter.clone();
                    if closing.chars().all(|ch| spec.next() == Some(ch)) {
                        for _ in 0..closing.chars().count() {
                            self.next_char();
                        }
                        return Ok(value);
                    }
                    value.push('$');
                }
                Some(ch) => value.push(ch),
                None => {
                    return Err(self
                        .location
                        .into_error("Unterminated dollar-quoted string"))
                }
            }
        }
    }

    fn tokenize_symbol(&mut self) -> Result<Token, TokenizeError> {
        let ch = self.next_char().expect("caller peeked a symbol");
        let token = match ch {
            ',' => Token::Comma,
            ';' => Token::SemiColon,
            '(' => Token::LParen,
            ')' => Token::RParen,
            '[' => Token::LBracket,
            ']' => Token::RBracket,
            '{' => Token::LBrace,
            '}' => Token::RBrace,
            '\\' => Token::Backslash,

            '+' => Token::Plus,
            '*' => Token::Mul,
            '%' => Token::Mod,
            '^' => Token::Caret,

            ':' => {
                if self.next_if_is(':') {
                    Token::DoubleColon
                } else if self.next_if_is('=') {
                    Token::DuckAssignment
                } else if matches!(self.iter.peek(), Some(&c) if self.dialect.is_identifier_start(c))
                {
                    let dialect = self.dialect;
                    let name = self.peeking_take_while(|c| dialect.is_identifier_part(c));
                    Token::Placeholder(format!(":{name}"))
                } else {
                    Token::Colon
                }
            }
            '=' => {
                if self.next_if_is('=') {
                    Token::DoubleEq
                } else if self.next_if_is('>') {
                    Token::RightArrow
                } else {
                    Token::Eq
                }
            }
            '<' => {
                if self.next_if_is('=') {
                    if self.next_if_is('>') {
                        Token::Spaceship
                    } else {
                        Token::LtEq
                    }
                } else if self.next_if_is('>') {
                    Token::Neq
                } else if self.next_if_is('<') {
                    Token::ShiftLeft
                } else if self.next_if_is('@') {
                    Token::ArrowAt
                } else {
                    Token::Lt
                }
            }
            '>' => {
                if self.next_if_is('=') {
                    Token::GtEq
                } else if self.next_if_is('>') {
                    Token::ShiftRight
                } else {
                    Token::Gt
                }
            }
            '!' => {
                if self.next_if_is('=') {
                    Token::Neq
                } else if self.next_if_is('!') {
                    Token::DoubleExclamationMark
                } else if self.next_if_is('~') {
                    if self.next_if_is('*') {
                        Token::ExclamationMarkTildeAsterisk
                    } else {
                        Token::ExclamationMarkTilde
                    }
                } else {
                    Token::ExclamationMark
                }
            }
            '-' => {
                if self.next_if_is('-') {
                    Token::Whitespace(self.tokenize_single_line_comment("--"))
                } else if self.next_if_is('>') {
                    if self.next_if_is('>') {
                        Token::LongArrow
                    } else {
                        Token::Arrow
                    }
                } else {
                    Token::Minus
                }
            }
            '/' => {
                if self.next_if_is('*') {
                    Token::Whitespace(self.tokenize_multi_line_comment()?)
                } else if self.dialect.supports_double_slash_comment() && self.next_if_is('/') {
                    Token::Whitespace(self.tokenize_single_line_comment("//"))
                } else {
                    Token::Div
                }
            }
            '|' => {
                if self.next_if_is('/') {
                    Token::PGSquareRoot
                } else if self.next_if_is('|') {
                    if self.next_if_is('/') {
                        Token::PGCubeRoot
                    } else {
                        Token::StringConcat
                    }
                } else {
                    Token::Pipe
                }
            }
            '&' => {
                if self.next_if_is('&') {
                    Token::Overlap
                } else {
                    Token::Ampersand
                }
            }
            '~' => {
                if self.next_if_is('*') {
                    Token::TildeAsterisk
                } else {
                    Token::Tilde
                }
            }
            '#' => {
                if self.dialect.supports_hash_comment() {
                    Token::Whitespace(self.tokenize_single_line_comment("#"))
                } else if self.next_if_is('-') {
                    Token::HashMinus
                } else if self.next_if_is('>') {
                    if self.next_if_is('>') {
                        Token::HashLongArrow
                    } else {
                        Token::HashArrow
                    }
                } else {
                    Token::Sharp
                }
            }
            '@' => {
                if self.next_if_is('@') {
                    Token::AtAt
                } else if self.next_if_is('>') {
                    Token::AtArrow
                } else if self.next_if_is('?') {
                    Token::AtQuestion
                } else {
                    Token::AtSign
                }
            }
            '?' => {
                let digits = self.peeking_take_while(|ch| ch.is_ascii_digit());
                Token::Placeholder(format!("?{digits}"))
            }
            other => Token::Char(other),
        };
        Ok(token)
    }

    /// Consumes to the next newline (inclusive) and returns the comment.
    fn tokenize_single_line_comment(&mut self, prefix: impl Into<String>) -> Whitespace {
        let mut comment = self.peeking_take_while(|ch| ch != '\n');
        if let Some(ch) = self.next_char() {
            debug_assert_eq!(ch, '\n');
            comment.push(ch);
        }
        Whitespace::SingleLineComment {
            comment,
            prefix: prefix.into(),
        }
    }

    /// `/* ... */` with proper nesting.
    fn tokenize_multi_line_comment(&mut self) -> Result<Whitespace, TokenizeError> {
        let mut comment = String::new();
        let mut nested = 1usize;
        loop {
            match self.next_char() {
                Some('*') if self.next_if_is('/') => {
                    nested -= 1;
                    if nested == 0 {
                        break Ok(Whitespace::MultiLineComment(comment));
                    }
                    comment.push_str("*/");
                }
                Some('/') if self.next_if_is('*') => {
                    nested += 1;
                    comment.push_str("/*");
                }
                Some(ch) => comment.push(ch),
                None => {
                    break Err(self
                        .location
                        .into_error("Unexpected EOF while in a multi-line comment"))
                }
            }
        }
    }

    /// Consumes the next character and records the current location.
    fn next_char(&mut self) -> Option<char> {
        let ch = self.iter.next();
        if let Some(ch) = ch {
            self.location.advance(ch);
        }
        ch
    }

    /// Consumes the next character if it matches `ch`; returns whether it did.
    #[inline]
    fn next_if_is(&mut self, ch: char) -> bool {
        if self.iter.next_if_eq(&ch).is_some() {
            self.location.advance(ch);
            true
        } else {
            false
        }
    }

    /// Grabs the next characters that match the predicate, as a string.
    fn peeking_take_while(&mut self, predicate: impl Fn(char) -> bool) -> String {
        let mut value = String::new();
        while let Some(&ch) = self.iter.peek() {
            if !predicate(ch) {
                break;
            }
            self.iter.next();
            self.location.advance(ch);
            value.push(ch);
        }
        value
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::dialect::{
        AnsiDialect, BigQueryDialect, GenericDialect, MsSqlDialect, MySqlDialect,
        PostgreSqlDialect, SnowflakeDialect,
    };

    macro_rules! tokenize {
        ($input:expr, $expected:expr) => {{
            let dialect = GenericDialect {};
            let got = Tokenizer::new(&dialect, $input).tokenize();
            assert_eq!(got, $expected);
        }};
        ($input:expr, $expected:expr, $dialect:expr) => {{
            let got = Tokenizer::new($dialect, $input).tokenize();
            assert_eq!(got, $expected);
        }};
    }

    fn word(value: &str) -> Token {
        Token::make_word(value, None)
    }

    #[test]
    fn tokenize_simple_select() {
        tokenize!(
            "SELECT * FROM customer WHERE id = 1 LIMIT 5",
            Ok(vec![
                word("SELECT"),
                Token::Whitespace(Whitespace::Space),
                Token::Mul,
                Token::Whitespace(Whitespace::Space),
                word("FROM"),
                Token::Whitespace(Whitespace::Space),
                word("customer"),
                Token::Whitespace(Whitespace::Space),
                word("WHERE"),
                Token::Whitespace(Whitespace::Space),
                word("id"),
                Token::Whitespace(Whitespace::Space),
                Token::Eq,
                Token::Whitespace(Whitespace::Space),
                Token::Number("1".into(), false),
                Token::Whitespace(Whitespace::Space),
                word("LIMIT"),
                Token::Whitespace(Whitespace::Space),
                Token::Number("5".into(), false),
            ])
        );
    }

    #[test]
    fn tokenize_whitespace() {
        tokenize!(
            " line1\nline2\t\rline3\r\nline4\r",
            Ok(vec![
                Token::Whitespace(Whitespace::Space),
                word("line1"),
                Token::Whitespace(Whitespace::Newline),
                word("line2"),
                Token::Whitespace(Whitespace::Tab),
                Token::Whitespace(Whitespace::Newline),
                word("line3"),
                Token::Whitespace(Whitespace::Newline),
                word("line4"),
                Token::Whitespace(Whitespace::Newline),
            ])
        );
    }

    #[test]
    fn tokenize_operators() {
        tokenize!(
            "a->b->>c#>d#>>e@>f<@g#-h@?i@@j",
            Ok(vec![
                word("a"),
                Token::Arrow,
                word("b"),
                Token::LongArrow,
                word("c"),
                Token::HashArrow,
                word("d"),
                Token::HashLongArrow,
                word("e"),
                Token::AtArrow,
                word("f"),
                Token::ArrowAt,
                word("g"),
                Token::HashMinus,
                word("h"),
                Token::AtQuestion,
                word("i"),
                Token::AtAt,
                word("j"),
            ])
        );
        tokenize!(
            "|/ ||/ || ~ ~* !~ !~* <=> :: := == != <> =>",
            Ok(vec![
                Token::PGSquareRoot,
                Token::Whitespace(Whitespace::Space),
                Token::PGCubeRoot,
                Token::Whitespace(Whitespace::Space),
                Token::StringConcat,
                Token::Whitespace(Whitespace::Space),
                Token::Tilde,
                Token::Whitespace(Whitespace::Space),
                Token::TildeAsterisk,
                Token::Whitespace(Whitespace::Space),
                Token::ExclamationMarkTilde,
                Token::Whitespace(Whitespace::Space),
                Token::ExclamationMarkTildeAsterisk,
                Token::Whitespace(Whitespace::Space),
                Token::Spaceship,
                Token::Whitespace(Whitespace::Space),
                Token::DoubleColon,
                Token::Whitespace(Whitespace::Space),
                Token::DuckAssignment,
                Token::Whitespace(Whitespace::Space),
                Token::DoubleEq,
                Token::Whitespace(Whitespace::Space),
                Token::Neq,
                Token::Whitespace(Whitespace::Space),
                Token::Neq,
                Token::Whitespace(Whitespace::Space),
                Token::RightArrow,
            ])
        );
    }

    #[test]
    fn tokenize_numbers() {
        tokenize!(
            ".1 12345.6789 0. . 1e10 1e-2 2E+3 42L",
            Ok(vec![
                Token::Number(".1".into(), false),
                Token::Whitespace(Whitespace::Space),
                Token::Number("12345.6789".into(), false),
                Token::Whitespace(Whitespace::Space),
                Token::Number("0.".into(), false),
                Token::Whitespace(Whitespace::Space),
                Token::Period,
                Token::Whitespace(Whitespace::Space),
                Token::Number("1e10".into(), false),
                Token::Whitespace(Whitespace::Space),
                Token::Number("1e-2".into(), false),
                Token::Whitespace(Whitespace::Space),
                Token::Number("2E+3".into(), false),
                Token::Whitespace(Whitespace::Space),
                Token::Number("42".into(), true),
            ])
        );

        // `1e` with no digits after is a number then a word
        tokenize!(
            "1e",
            Ok(vec![Token::Number("1".into(), false), word("e")])
        );

        let mysql = MySqlDialect {};
        tokenize!("0x12ab", Ok(vec![Token::HexStringLiteral("12ab".into())]), &mysql);
        tokenize!("1col", Ok(vec![word("1col")]), &mysql);
    }

    #[test]
    fn tokenize_string_literal_family() {
        tokenize!("'hello'", Ok(vec![Token::SingleQuotedString("hello".into())]));
        tokenize!("N'你好'", Ok(vec![Token::NationalStringLiteral("你好".into())]));
        tokenize!("x'abcdef'", Ok(vec![Token::HexStringLiteral("abcdef".into())]));
        tokenize!(
            "b'01010101'",
            Ok(vec![Token::SingleQuotedByteStringLiteral("01010101".into())])
        );

        let dialect = PostgreSqlDialect {};
        tokenize!(
            "E'a\\nb'",
            Ok(vec![Token::EscapedStringLiteral("a\nb".into())]),
            &dialect
        );
        tokenize!(
            "$tag$in between$tag$",
            Ok(vec![Token::DollarQuotedString(DollarQuotedString {
                value: "in between".into(),
                tag: Some("tag".into()),
            })]),
            &dialect
        );
        tokenize!(
            "$$no tag$$",
            Ok(vec![Token::DollarQuotedString(DollarQuotedString {
                value: "no tag".into(),
                tag: None,
            })]),
            &dialect
        );
        tokenize!(
            "$outer$inner $notouter$ body$outer$",
            Ok(vec![Token::DollarQuotedString(DollarQuotedString {
                value: "inner $notouter$ body".into(),
                tag: Some("outer".into()),
            })]),
            &dialect
        );

        let bigquery = BigQueryDialect {};
        tokenize!(
            "R'no \\escape'",
            Ok(vec![Token::RawStringLiteral("no \\escape".into())]),
            &bigquery
        );
    }

    #[test]
    fn tokenize_escaping() {
        // doubled quote folds by default
        tokenize!(
            "'a''b'",
            Ok(vec![Token::SingleQuotedString("a'b".into())])
        );
        // ... and is preserved with unescape = false
        let dialect = GenericDialect {};
        let got = Tokenizer::new(&dialect, "'a''b'")
            .with_unescape(false)
            .tokenize();
        assert_eq!(got, Ok(vec![Token::SingleQuotedString("a''b".into())]));

        let mysql = MySqlDialect {};
        tokenize!(
            r"'a\nb\%c'",
            Ok(vec![Token::SingleQuotedString("a\nb%c".into())]),
            &mysql
        );
        let got = Tokenizer::new(&mysql, r"'a\nb'").with_unescape(false).tokenize();
        assert_eq!(got, Ok(vec![Token::SingleQuotedString(r"a\nb".into())]));
    }

    #[test]
    fn tokenize_unterminated_string() {
        tokenize!(
            "select 'foo",
            Err(Location::new(1, 12).into_error(
                "Unterminated string literal. Expected ' after Line: 1, Col: 12"
            ))
        );
    }

    #[test]
    fn tokenize_delimited_ident() {
        tokenize!("\"foo\"", Ok(vec![Token::make_word("foo", Some('"'))]));
        tokenize!(
            "\"fo\"\"o\"",
            Ok(vec![Token::make_word("fo\"o", Some('"'))])
        );
        tokenize!(
            "\"foo",
            Err(Location::new(1, 5).into_error("Expected close delimiter '\"' before EOF."))
        );

        let mssql = MsSqlDialect {};
        tokenize!("[foo]", Ok(vec![Token::make_word("foo", Some('['))]), &mssql);
        let mysql = MySqlDialect {};
        tokenize!("`foo`", Ok(vec![Token::make_word("foo", Some('`'))]), &mysql);
    }

    #[test]
    fn tokenize_comments() {
        tokenize!(
            "0--this is a comment\n1",
            Ok(vec![
                Token::Number("0".into(), false),
                Token::Whitespace(Whitespace::SingleLineComment {
                    prefix: "--".into(),
                    comment: "this is a comment\n".into(),
                }),
                Token::Number("1".into(), false),
            ])
        );
        tokenize!(
            "/*line1\n/*nested*/ tail*/",
            Ok(vec![Token::Whitespace(Whitespace::MultiLineComment(
                "line1\n/*nested*/ tail".into()
            ))])
        );
        tokenize!(
            "/*unclosed",
            Err(Location::new(1, 11).into_error("Unexpected EOF while in a multi-line comment"))
        );

        let snowflake = SnowflakeDialect {};
        tokenize!(
            "1//snow\n2",
            Ok(vec![
                Token::Number("1".into(), false),
                Token::Whitespace(Whitespace::SingleLineComment {
                    prefix: "//".into(),
                    comment: "snow\n".into(),
                }),
                Token::Number("2".into(), false),
            ]),
            &snowflake
        );
        tokenize!(
            "1#hash\n2",
            Ok(vec![
                Token::Number("1".into(), false),
                Token::Whitespace(Whitespace::SingleLineComment {
                    prefix: "#".into(),
                    comment: "hash\n".into(),
                }),
                Token::Number("2".into(), false),
            ]),
            &snowflake
        );
    }

    #[test]
    fn tokenize_placeholders() {
        tokenize!(
            "? ?2 :name",
            Ok(vec![
                Token::Placeholder("?".into()),
                Token::Whitespace(Whitespace::Space),
                Token::Placeholder("?2".into()),
                Token::Whitespace(Whitespace::Space),
                Token::Placeholder(":name".into()),
            ])
        );
        let dialect = PostgreSqlDialect {};
        tokenize!("$1", Ok(vec![Token::Placeholder("$1".into())]), &dialect);
    }

    #[test]
    fn tokenize_locations() {
        let dialect = AnsiDialect {};
        let tokens = Tokenizer::new(&dialect, "SELECT a\n  FROM b")
            .tokenize_with_location()
            .unwrap();
        let positions: Vec<(u64, u64)> = tokens
            .iter()
            .filter(|t| !t.token.is_whitespace())
            .map(|t| (t.location.line, t.location.column))
            .collect();
        assert_eq!(positions, vec![(1, 1), (1, 8), (2, 3), (2, 8)]);
    }
}
