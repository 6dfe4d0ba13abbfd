#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, string::String};
use core::fmt;

use crate::ast::{escape_single_quote_string, Expr, Ident};
use crate::tokens::DollarQuotedString;

/// Primitive SQL values such as number and string.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// Numeric literal; the flag records a trailing `L` suffix.
    Number(String, bool),
    /// 'string value'
    SingleQuotedString(String),
    /// "string value" (for dialects where `"` quotes strings, not idents)
    DoubleQuotedString(String),
    /// N'string value'
    NationalStringLiteral(String),
    /// X'hex value'
    HexStringLiteral(String),
    /// E'string value' (PostgreSQL extension)
    EscapedStringLiteral(String),
    /// R'string value' (BigQuery raw string)
    RawStringLiteral(String),
    /// B'string value' (BigQuery byte string)
    SingleQuotedByteStringLiteral(String),
    /// `$tag$string value$tag$` (PostgreSQL)
    DollarQuotedString(DollarQuotedString),
    /// Boolean value true or false
    Boolean(bool),
    /// `NULL` value
    Null,
    /// `?`, `$1`, `:name` or `@var` style placeholder
    Placeholder(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Number(v, long) => write!(f, "{}{}", v, if *long { "L" } else { "" }),
            Value::SingleQuotedString(v) => write!(f, "'{}'", escape_single_quote_string(v)),
            Value::DoubleQuotedString(v) => write!(f, "\"{v}\""),
            Value::NationalStringLiteral(v) => write!(f, "N'{v}'"),
            Value::HexStringLiteral(v) => write!(f, "X'{v}'"),
            Value::EscapedStringLiteral(v) => write!(f, "E'{v}'"),
            Value::RawStringLiteral(v) => write!(f, "R'{v}'"),
            Value::SingleQuotedByteStringLiteral(v) => write!(f, "B'{v}'"),
            Value::DollarQuotedString(v) => write!(f, "{v}"),
            Value::Boolean(v) => write!(f, "{v}"),
            Value::Null => f.write_str("NULL"),
            Value::Placeholder(v) => write!(f, "{v}"),
        }
    }
}

/// A field of a date/time value, as used by `EXTRACT`, `CEIL`/`FLOOR` and
/// interval qualifiers.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DateTimeField {
    /// `YEAR`
    Year,
    /// `MONTH`
    Month,
    /// `WEEK`
    Week,
    /// `DAY`
    Day,
    /// `HOUR`
    Hour,
    /// `MINUTE`
    Minute,
    /// `SECOND`
    Second,
    /// `CENTURY`
    Century,
    /// `DECADE`
    Decade,
    /// `DOW`
    Dow,
    /// `DOY`
    Doy,
    /// `EPOCH`
    Epoch,
    /// `ISODOW`
    Isodow,
    /// `ISOYEAR`
    Isoyear,
    /// `JULIAN`
    Julian,
    /// `MICROSECOND`
    Microsecond,
    /// `MILLENNIUM`
    Millennium,
    /// `MILLISECOND`
    Millisecond,
    /// `NANOSECOND`
    Nanosecond,
    /// `QUARTER`
    Quarter,
    /// `TIMEZONE_HOUR`
    TimezoneHour,
    /// `TIMEZONE_MINUTE`
    TimezoneMinute,
    /// Dialects with `allow_extract_custom` accept any identifier here.
    Custom(Ident),
}

impl fmt::Display for DateTimeField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DateTimeField::Year => f.write_str("YEAR"),
            DateTimeField::Month => f.write_str("MONTH"),
            DateTimeField::Week => f.write_str("WEEK"),
            DateTimeField::Day => f.write_str("DAY"),
            DateTimeField::Hour => f.write_str("HOUR"),
            DateTimeField::Minute => f.write_str("MINUTE"),
            DateTimeField::Second => f.write_str("SECOND"),
            DateTimeField::Century => f.write_str("CENTURY"),
            DateTimeField::Decade => f.write_str("DECADE"),
            DateTimeField::Dow => f.write_str("DOW"),
            DateTimeField::Doy => f.write_str("DOY"),
            DateTimeField::Epoch => f.write_str("EPOCH"),
            DateTimeField::Isodow => f.write_str("ISODOW"),
            DateTimeField::Isoyear => f.write_str("ISOYEAR"),
            DateTimeField::Julian => f.write_str("JULIAN"),
            DateTimeField::Microsecond => f.write_str("MICROSECOND"),
            DateTimeField::Millennium => f.write_str("MILLENNIUM"),
            DateTimeField::Millisecond => f.write_str("MILLISECOND"),
            DateTimeField::Nanosecond => f.write_str("NANOSECOND"),
            DateTimeField::Quarter => f.write_str("QUARTER"),
            DateTimeField::TimezoneHour => f.write_str("TIMEZONE_HOUR"),
            DateTimeField::TimezoneMinute => f.write_str("TIMEZONE_MINUTE"),
            DateTimeField::Custom(ident) => write!(f, "{ident}"),
        }
    }
}

/// An `INTERVAL` literal, roughly in the following format:
///
/// ```txt
/// INTERVAL '<value>' [ <leading_field> [ (<leading_precision>) ] ]
///     [ TO <last_field> [ (<fractional_seconds_precision>) ] ]
/// ```
///
/// e.g. `INTERVAL '123:45.67' MINUTE(3) TO SECOND(2)`.
///
/// The parser does not validate the `<value>`, nor does it ensure that the
/// `<leading_field>` units are coarser than the `<last_field>` units, so
/// consumers have to reject intervals like `HOUR TO YEAR` themselves.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval {
    /// The interval duration; usually a string literal, but some dialects
    /// accept a bare number or expression.
    pub value: Box<Expr>,
    /// The unit of the duration.
    pub leading_field: Option<DateTimeField>,
    /// `<leading_field> (<leading_precision>)`
    pub leading_precision: Option<u64>,
    /// `TO <last_field>`
    pub last_field: Option<DateTimeField>,
    /// The seconds precision can be specified in SQL source as
    /// `INTERVAL '__' SECOND(_, x)` (in which case the `leading_field` will
    /// be `Second` and the `last_field` will be `None`), or as
    /// `__ TO SECOND(x)`.
    pub fractional_seconds_precision: Option<u64>,
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match (
            &self.leading_field,
            self.leading_precision,
            self.fractional_seconds_precision,
        ) {
            (Some(DateTimeField::Second), Some(leading_precision), Some(fractional_precision)) => {
                // When the leading field is SECOND, the parser guarantees
                // that the last field is None.
                assert!(self.last_field.is_none());
                write!(
                    f,
                    "INTERVAL {} SECOND ({leading_precision}, {fractional_precision})",
                    self.value
                )
            }
            _ => {
                write!(f, "INTERVAL {}", self.value)?;
                if let Some(leading_field) = &self.leading_field {
                    write!(f, " {leading_field}")?;
                }
                if let Some(leading_precision) = self.leading_precision {
                    write!(f, " ({leading_precision})")?;
                }
                if let Some(last_field) = &self.last_field {
                    write!(f, " TO {last_field}")?;
                }
                if let Some(fractional_precision) = self.fractional_seconds_precision {
                    write!(f, " ({fractional_precision})")?;
                }
                Ok(())
            }
        }
    }
}

/// The normalization form for `IS [NOT] [form] NORMALIZED`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NormalizationForm {
    /// `NFC`
    NFC,
    /// `NFD`
    NFD,
    /// `NFKC`
    NFKC,
    /// `NFKD`
    NFKD,
}

impl fmt::Display for NormalizationForm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            NormalizationForm::NFC => "NFC",
            NormalizationForm::NFD => "NFD",
            NormalizationForm::NFKC => "NFKC",
            NormalizationForm::NFKD => "NFKD",
        })
    }
}
