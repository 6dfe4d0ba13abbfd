//! SQL abstract syntax tree.
//!
//! Every node is a plain value type that owns its children, derives
//! structural equality, and serializes back to canonical SQL through
//! [`core::fmt::Display`]. Re-parsing the canonical text under the same
//! dialect yields an equal tree.

mod data_type;
mod ddl;
mod dml;
mod expression;
mod operator;
mod query;
mod statement;
mod value;
pub mod visitor;

#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};
use core::fmt;

pub use self::{
    data_type::*, ddl::*, dml::*, expression::*, operator::*, query::*, statement::*, value::*,
};
pub use self::visitor::{visit_expressions, visit_relations, visit_statements, Visit, Visitor};

struct DisplaySeparated<'a, T>
where
    T: fmt::Display,
{
    slice: &'a [T],
    sep: &'static str,
}

impl<T> fmt::Display for DisplaySeparated<'_, T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut delim = "";
        for t in self.slice {
            f.write_str(delim)?;
            delim = self.sep;
            write!(f, "{t}")?;
        }
        Ok(())
    }
}

pub(crate) fn display_separated<'a, T>(slice: &'a [T], sep: &'static str) -> impl fmt::Display + 'a
where
    T: fmt::Display,
{
    DisplaySeparated { slice, sep }
}

pub(crate) fn display_comma_separated<T>(slice: &[T]) -> impl fmt::Display + '_
where
    T: fmt::Display,
{
    DisplaySeparated { slice, sep: ", " }
}

pub(crate) struct EscapeSingleQuoteString<'a>(&'a str);

impl fmt::Display for EscapeSingleQuoteString<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for c in self.0.chars() {
            if c == '\'' {
                write!(f, "''")?;
            } else {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

pub(crate) fn escape_single_quote_string(s: &str) -> EscapeSingleQuoteString<'_> {
    EscapeSingleQuoteString(s)
}

/// An identifier, decomposed into its value or character data and the quote
/// style.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ident {
    /// The value of the identifier without quotes.
    pub value: String,
    /// An identifier can be "quoted" (<delimited identifier> in ANSI
    /// parlance). The standard and most implementations allow using double
    /// quotes for this, but some implementations support other quoting
    /// styles as well. Valid quote characters are the double quote,
    /// backtick, and opening square bracket.
    pub quote_style: Option<char>,
}

impl Ident {
    /// Creates a new identifier with the given value and no quotes.
    pub fn new<S>(value: S) -> Self
    where
        S: Into<String>,
    {
        Ident {
            value: value.into(),
            quote_style: None,
        }
    }

    /// Creates a new quoted identifier with the given quote and value.
    /// Panics if the given quote is not a valid quote character.
    pub fn with_quote<S>(quote: char, value: S) -> Self
    where
        S: Into<String>,
    {
        assert!(quote == '\'' || quote == '"' || quote == '`' || quote == '[');
        Ident {
            value: value.into(),
            quote_style: Some(quote),
        }
    }
}

impl From<&str> for Ident {
    fn from(value: &str) -> Self {
        Ident::new(value)
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.quote_style {
            None => f.write_str(&self.value),
            Some(q) if q == '\'' || q == '"' || q == '`' => write!(f, "{q}{}{q}", self.value),
            Some('[') => write!(f, "[{}]", self.value),
            Some(q) => panic!("Unsupported quote character {q} for SQL identifier!"),
        }
    }
}

/// A name of a table, view, custom type, etc., possibly multi-part, i.e.
/// `db.schema.obj`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectName(pub Vec<Ident>);

impl fmt::Display for ObjectName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", display_separated(&self.0, "."))
    }
}

impl From<Vec<Ident>> for ObjectName {
    fn from(idents: Vec<Ident>) -> Self {
        ObjectName(idents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ident_display() {
        assert_eq!(Ident::new("foo").to_string(), "foo");
        assert_eq!(Ident::with_quote('"', "foo").to_string(), "\"foo\"");
        assert_eq!(Ident::with_quote('[', "foo").to_string(), "[foo]");
    }

    #[test]
    fn object_name_display() {
        let name = ObjectName(vec![Ident::new("a"), Ident::new("b"), Ident::new("c")]);
        assert_eq!(name.to_string(), "a.b.c");
    }

    #[test]
    fn escaping() {
        assert_eq!(escape_single_quote_string("it's").to_string(), "it''s");
    }
}
