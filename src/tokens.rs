#[cfg(not(feature = "std"))]
use alloc::string::{String, ToString};
use core::fmt;

use crate::{error::Location, keywords::Keyword};

/// SQL token.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Token {
    /// Whitespace (space, newline, tab) or a comment.
    Whitespace(Whitespace),

    /// A keyword (like SELECT) or an optionally quoted SQL identifier.
    /// Non-reserved keywords are permitted as identifiers without quoting.
    Word(Word),

    /// An unsigned numeric literal; the flag records a trailing `L` suffix.
    Number(String, bool),

    /// Character string literal: i.e: 'string'
    SingleQuotedString(String),
    /// Double-quoted string literal, for dialects where `"` does not
    /// delimit identifiers: i.e: "string"
    DoubleQuotedString(String),
    /// National character string literal: i.e: N'string'
    NationalStringLiteral(String),
    /// Hexadecimal string literal: i.e: X'deadbeef' or 0xdeadbeef
    HexStringLiteral(String),
    /// Escaped string literal: i.e: E'string\n' (PostgreSQL)
    EscapedStringLiteral(String),
    /// Raw string literal: i.e: R'string' (BigQuery)
    RawStringLiteral(String),
    /// Byte string literal: i.e: B'bytes' (BigQuery)
    SingleQuotedByteStringLiteral(String),
    /// Dollar-quoted string literal: i.e: $tag$string$tag$ (PostgreSQL)
    DollarQuotedString(DollarQuotedString),

    /// A named or positional placeholder: `?`, `?3`, `$1`, `:name`, `@var`.
    Placeholder(String),

    /// End of the token stream.
    EOF,

    /// Comma `,`
    Comma,
    /// SemiColon `;`
    SemiColon,
    /// Period `.`
    Period,
    /// Colon `:`
    Colon,
    /// Double colon `::`
    DoubleColon,
    /// Assignment `:=` (DuckDB, MySQL)
    DuckAssignment,

    /// Left parenthesis `(`
    LParen,
    /// Right parenthesis `)`
    RParen,
    /// Left bracket `[`
    LBracket,
    /// Right bracket `]`
    RBracket,
    /// Left brace `{`
    LBrace,
    /// Right brace `}`
    RBrace,

    /// Equality `=`
    Eq,
    /// Double equality `==`
    DoubleEq,
    /// Inequality `<>` or `!=` (both spellings produce this token)
    Neq,
    /// Less than `<`
    Lt,
    /// Greater than `>`
    Gt,
    /// Less than or equal `<=`
    LtEq,
    /// Greater than or equal `>=`
    GtEq,
    /// Three-way comparison `<=>` (MySQL)
    Spaceship,

    /// Plus `+`
    Plus,
    /// Minus `-`
    Minus,
    /// Multiplication or wildcard `*`
    Mul,
    /// Division `/`
    Div,
    /// Modulo `%`
    Mod,

    /// Left shift `<<`
    ShiftLeft,
    /// Right shift `>>`
    ShiftRight,
    /// Bitwise and `&`
    Ampersand,
    /// Bitwise or `|`
    Pipe,
    /// Bitwise xor (or exponent) `^`
    Caret,

    /// String concatenation `||`
    StringConcat,
    /// Array overlap `&&` (PostgreSQL)
    Overlap,

    /// Bitwise not, or regex match `~` (PostgreSQL)
    Tilde,
    /// Case-insensitive regex match `~*` (PostgreSQL)
    TildeAsterisk,
    /// Regex not-match `!~` (PostgreSQL)
    ExclamationMarkTilde,
    /// Case-insensitive regex not-match `!~*` (PostgreSQL)
    ExclamationMarkTildeAsterisk,

    /// Exclamation `!`
    ExclamationMark,
    /// Factorial `!!` (PostgreSQL)
    DoubleExclamationMark,

    /// JSON access `->`
    Arrow,
    /// JSON access as text `->>`
    LongArrow,
    /// Named-argument assignment `=>`
    RightArrow,
    /// Sharp `#`
    Sharp,
    /// JSONB delete-path `#-` (PostgreSQL)
    HashMinus,
    /// JSON path access `#>` (PostgreSQL)
    HashArrow,
    /// JSON path access as text `#>>` (PostgreSQL)
    HashLongArrow,
    /// Containment `@>` (PostgreSQL)
    AtArrow,
    /// Contained-by `<@` (PostgreSQL)
    ArrowAt,
    /// JSON path exists `@?` (PostgreSQL)
    AtQuestion,
    /// JSON path match `@@`, also text search match (PostgreSQL)
    AtAt,
    /// At `@`
    AtSign,

    /// Square root `|/` (PostgreSQL)
    PGSquareRoot,
    /// Cube root `||/` (PostgreSQL)
    PGCubeRoot,

    /// Backslash `\`
    Backslash,

    /// A character that could not be tokenized.
    Char(char),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Whitespace(ws) => write!(f, "{ws}"),
            Token::Word(w) => write!(f, "{w}"),
            Token::Number(n, long) => write!(f, "{}{}", n, if *long { "L" } else { "" }),
            Token::SingleQuotedString(s) => write!(f, "'{s}'"),
            Token::DoubleQuotedString(s) => write!(f, "\"{s}\""),
            Token::NationalStringLiteral(s) => write!(f, "N'{s}'"),
            Token::HexStringLiteral(s) => write!(f, "X'{s}'"),
            Token::EscapedStringLiteral(s) => write!(f, "E'{s}'"),
            Token::RawStringLiteral(s) => write!(f, "R'{s}'"),
            Token::SingleQuotedByteStringLiteral(s) => write!(f, "B'{s}'"),
            Token::DollarQuotedString(s) => write!(f, "{s}"),
            Token::Placeholder(s) => write!(f, "{s}"),
            Token::EOF => f.write_str("EOF"),
            Token::Comma => f.write_str(","),
            Token::SemiColon => f.write_str(";"),
            Token::Period => f.write_str("."),
            Token::Colon => f.write_str(":"),
            Token::DoubleColon => f.write_str("::"),
            Token::DuckAssignment => f.write_str(":="),
            Token::LParen => f.write_str("("),
            Token::RParen => f.write_str(")"),
            Token::LBracket => f.write_str("["),
            Token::RBracket => f.write_str("]"),
            Token::LBrace => f.write_str("{"),
            Token::RBrace => f.write_str("}"),
            Token::Eq => f.write_str("="),
            Token::DoubleEq => f.write_str("=="),
            Token::Neq => f.write_str("<>"),
            Token::Lt => f.write_str("<"),
            Token::Gt => f.write_str(">"),
            Token::LtEq => f.write_str("<="),
            Token::GtEq => f.write_str(">="),
            Token::Spaceship => f.write_str("<=>"),
            Token::Plus => f.write_str("+"),
            Token::Minus => f.write_str("-"),
            Token::Mul => f.write_str("*"),
            Token::Div => f.write_str("/"),
            Token::Mod => f.write_str("%"),
            Token::ShiftLeft => f.write_str("<<"),
            Token::ShiftRight => f.write_str(">>"),
            Token::Ampersand => f.write_str("&"),
            Token::Pipe => f.write_str("|"),
            Token::Caret => f.write_str("^"),
            Token::StringConcat => f.write_str("||"),
            Token::Overlap => f.write_str("&&"),
            Token::Tilde => f.write_str("~"),
            Token::TildeAsterisk => f.write_str("~*"),
            Token::ExclamationMarkTilde => f.write_str("!~"),
            Token::ExclamationMarkTildeAsterisk => f.write_str("!~*"),
            Token::ExclamationMark => f.write_str("!"),
            Token::DoubleExclamationMark => f.write_str("!!"),
            Token::Arrow => f.write_str("->"),
            Token::LongArrow => f.write_str("->>"),
            Token::RightArrow => f.write_str("=>"),
            Token::Sharp => f.write_str("#"),
            Token::HashMinus => f.write_str("#-"),
            Token::HashArrow => f.write_str("#>"),
            Token::HashLongArrow => f.write_str("#>>"),
            Token::AtArrow => f.write_str("@>"),
            Token::ArrowAt => f.write_str("<@"),
            Token::AtQuestion => f.write_str("@?"),
            Token::AtAt => f.write_str("@@"),
            Token::AtSign => f.write_str("@"),
            Token::PGSquareRoot => f.write_str("|/"),
            Token::PGCubeRoot => f.write_str("||/"),
            Token::Backslash => f.write_str("\\"),
            Token::Char(c) => write!(f, "{c}"),
        }
    }
}

impl Token {
    /// Creates a word token, classifying unquoted words against the keyword
    /// table.
    pub fn make_word(word: impl Into<String>, quote_style: Option<char>) -> Self {
        let value = word.into();
        let keyword = if quote_style.is_none() {
            Keyword::lookup(&value.to_uppercase())
        } else {
            None
        };
        Token::Word(Word {
            value,
            quote_style,
            keyword,
        })
    }

    /// Returns true for whitespace and comment tokens.
    pub fn is_whitespace(&self) -> bool {
        matches!(self, Token::Whitespace(_))
    }

    /// Returns true if the token is the given keyword.
    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        matches!(self, Token::Word(w) if w.keyword == Some(keyword))
    }

    /// Returns the matching keyword if the token is one of `keywords`.
    pub fn is_one_of_keywords(&self, keywords: &[Keyword]) -> Option<Keyword> {
        match self {
            Token::Word(w) => keywords.iter().copied().find(|k| w.keyword == Some(*k)),
            _ => None,
        }
    }
}

/// A keyword or an optionally quoted SQL identifier.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Word {
    /// The value of the token, without the enclosing quotes, and with the
    /// escape sequences (if any) processed.
    pub value: String,
    /// An identifier can be "quoted" (<delimited identifier> in ANSI
    /// parlance). The standard and most implementations use double quotes,
    /// but some also support backticks or square brackets.
    pub quote_style: Option<char>,
    /// The keyword tag when the (unquoted) value is a keyword.
    pub keyword: Option<Keyword>,
}

impl Word {
    /// The closing quote that matches an opening delimited-identifier quote.
    pub fn matching_end_quote(quote_style: char) -> char {
        match quote_style {
            '"' => '"',   // ANSI and most dialects
            '[' => ']',   // MS SQL
            '`' => '`',   // MySQL
            _ => panic!("unexpected quoting style!"),
        }
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.quote_style {
            None => f.write_str(&self.value),
            Some(s) if s == '"' || s == '\'' || s == '`' => {
                write!(f, "{}{}{}", s, self.value, s)
            }
            Some('[') => write!(f, "[{}]", self.value),
            Some(_) => panic!("Unexpected quote_style!"),
        }
    }
}

/// A dollar-quoted string literal, with its (possibly empty) tag.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DollarQuotedString {
    /// The string payload between the delimiters.
    pub value: String,
    /// The tag between the dollar signs, if any.
    pub tag: Option<String>,
}

impl fmt::Display for DollarQuotedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.tag {
            Some(tag) => write!(f, "${tag}${}${tag}$", self.value),
            None => write!(f, "$${}$$", self.value),
        }
    }
}

/// Whitespace token; comments count as whitespace for the parser.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Whitespace {
    /// A single space.
    Space,
    /// A newline; `\r` and `\r\n` both collapse into this.
    Newline,
    /// A single tab.
    Tab,
    /// An inline comment, introduced by `--` (or a dialect-specific prefix)
    /// and running to the end of the line.
    SingleLineComment {
        /// The comment text, excluding the prefix.
        comment: String,
        /// The prefix that introduced the comment.
        prefix: String,
    },
    /// A (possibly nested) `/* ... */` comment.
    MultiLineComment(String),
}

impl fmt::Display for Whitespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Whitespace::Space => f.write_str(" "),
            Whitespace::Newline => f.write_str("\n"),
            Whitespace::Tab => f.write_str("\t"),
            Whitespace::SingleLineComment { comment, prefix } => {
                write!(f, "{prefix}{comment}")
            }
            Whitespace::MultiLineComment(s) => write!(f, "/*{s}*/"),
        }
    }
}

/// A token paired with the location where it starts in the source.
///
/// Equality and hashing ignore the location, so parsers can compare against
/// bare tokens.
#[derive(Clone, Debug, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenWithLocation {
    /// The token itself.
    pub token: Token,
    /// Where the token starts.
    pub location: Location,
}

impl TokenWithLocation {
    /// Pairs a token with a location.
    pub fn new(token: Token, location: Location) -> Self {
        Self { token, location }
    }

    /// An EOF token anchored at `location`.
    pub fn eof(location: Location) -> Self {
        Self::new(Token::EOF, location)
    }
}

impl PartialEq for TokenWithLocation {
    fn eq(&self, other: &Self) -> bool {
        self.token == other.token
    }
}

impl PartialEq<Token> for TokenWithLocation {
    fn eq(&self, other: &Token) -> bool {
        &self.token == other
    }
}

impl core::hash::Hash for TokenWithLocation {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.token.hash(state);
    }
}

impl fmt::Display for TokenWithLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.token == Token::EOF {
            f.write_str("EOF")
        } else {
            write!(f, "{}, {}", self.token, self.location)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_classifies_keywords() {
        match Token::make_word("select", None) {
            Token::Word(w) => {
                assert_eq!(w.keyword, Some(Keyword::SELECT));
                assert_eq!(w.value, "select");
            }
            _ => unreachable!(),
        }
        match Token::make_word("select", Some('"')) {
            Token::Word(w) => assert_eq!(w.keyword, None),
            _ => unreachable!(),
        }
    }

    #[test]
    fn token_with_location_display() {
        let t = TokenWithLocation::new(Token::RParen, Location::new(1, 27));
        assert_eq!(t.to_string(), "), Line: 1, Col: 27");
        assert_eq!(TokenWithLocation::eof(Location::new(9, 9)).to_string(), "EOF");
    }

    #[test]
    fn not_equal_spellings_normalize() {
        assert_eq!(Token::Neq.to_string(), "<>");
    }
}
