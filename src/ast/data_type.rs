#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, string::String, vec::Vec};
use core::fmt;

use crate::ast::{display_comma_separated, ObjectName};

/// SQL data type.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DataType {
    /// Fixed-length character type, e.g. `CHARACTER(10)`
    Character(Option<CharacterLength>),
    /// Fixed-length char type, e.g. `CHAR(10)`
    Char(Option<CharacterLength>),
    /// `CHARACTER VARYING(n)`
    CharacterVarying(Option<CharacterLength>),
    /// `CHAR VARYING(n)`
    CharVarying(Option<CharacterLength>),
    /// `VARCHAR(n)`
    Varchar(Option<CharacterLength>),
    /// `NCHAR(n)`
    Nchar(Option<CharacterLength>),
    /// `NVARCHAR(n)`
    Nvarchar(Option<u64>),
    /// `TEXT`
    Text,
    /// `STRING(n)` (BigQuery)
    String(Option<u64>),
    /// `CLOB(n)` — character large object
    Clob(Option<u64>),
    /// `UUID`
    Uuid,
    /// `BINARY(n)`
    Binary(Option<u64>),
    /// `VARBINARY(n)`
    Varbinary(Option<u64>),
    /// `BLOB(n)` — binary large object
    Blob(Option<u64>),
    /// `BYTES(n)` (BigQuery)
    Bytes(Option<u64>),
    /// `BYTEA` (PostgreSQL)
    Bytea,
    /// `NUMERIC(p, s)`
    Numeric(ExactNumberInfo),
    /// `DECIMAL(p, s)`
    Decimal(ExactNumberInfo),
    /// `DEC(p, s)`
    Dec(ExactNumberInfo),
    /// `BIGNUMERIC(p, s)` (BigQuery)
    BigNumeric(ExactNumberInfo),
    /// `BIGDECIMAL(p, s)` (BigQuery alias for BIGNUMERIC)
    BigDecimal(ExactNumberInfo),
    /// `TINYINT(n)`; the flag records an `UNSIGNED` suffix
    TinyInt(Option<u64>, bool),
    /// `SMALLINT(n)`
    SmallInt(Option<u64>, bool),
    /// `MEDIUMINT(n)` (MySQL)
    MediumInt(Option<u64>, bool),
    /// `INT(n)`
    Int(Option<u64>, bool),
    /// `INTEGER(n)`
    Integer(Option<u64>, bool),
    /// `BIGINT(n)`
    BigInt(Option<u64>, bool),
    /// `INT2` (PostgreSQL alias for SMALLINT)
    Int2,
    /// `INT4` (PostgreSQL alias for INTEGER)
    Int4,
    /// `INT8` (PostgreSQL alias for BIGINT)
    Int8,
    /// `FLOAT4` (PostgreSQL alias for REAL)
    Float4,
    /// `FLOAT8` (PostgreSQL alias for DOUBLE PRECISION)
    Float8,
    /// `FLOAT(p)`
    Float(Option<u64>),
    /// `REAL`
    Real,
    /// `DOUBLE`
    Double,
    /// `DOUBLE PRECISION`
    DoublePrecision,
    /// `BOOL`
    Bool,
    /// `BOOLEAN`
    Boolean,
    /// `DATE`
    Date,
    /// `TIME(p) [ WITH | WITHOUT TIME ZONE ]`
    Time(Option<u64>, TimezoneInfo),
    /// `DATETIME(p)` (MySQL, BigQuery)
    Datetime(Option<u64>),
    /// `TIMESTAMP(p) [ WITH | WITHOUT TIME ZONE ]`
    Timestamp(Option<u64>, TimezoneInfo),
    /// `INTERVAL`
    Interval,
    /// `JSON`
    Json,
    /// `JSONB` (PostgreSQL)
    Jsonb,
    /// `REGCLASS` (PostgreSQL)
    Regclass,
    /// `ENUM('a', 'b')` (MySQL)
    Enum(Vec<String>),
    /// `SET('a', 'b')` (MySQL)
    Set(Vec<String>),
    /// Arrays: `INT[]`, `INT[3]`, or `ARRAY<INT>`
    Array(ArrayElemTypeDef),
    /// `MAP<K, V>` (ClickHouse, DuckDB)
    Map(Box<DataType>, Box<DataType>),
    /// Any type not covered above, with optional modifiers:
    /// `GEOMETRY(POINT, 4326)`
    Custom(ObjectName, Vec<String>),
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DataType::Character(size) => format_character_type(f, "CHARACTER", size),
            DataType::Char(size) => format_character_type(f, "CHAR", size),
            DataType::CharacterVarying(size) => {
                format_character_type(f, "CHARACTER VARYING", size)
            }
            DataType::CharVarying(size) => format_character_type(f, "CHAR VARYING", size),
            DataType::Varchar(size) => format_character_type(f, "VARCHAR", size),
            DataType::Nchar(size) => format_character_type(f, "NCHAR", size),
            DataType::Nvarchar(size) => format_type_with_optional_length(f, "NVARCHAR", size),
            DataType::Text => f.write_str("TEXT"),
            DataType::String(size) => format_type_with_optional_length(f, "STRING", size),
            DataType::Clob(size) => format_type_with_optional_length(f, "CLOB", size),
            DataType::Uuid => f.write_str("UUID"),
            DataType::Binary(size) => format_type_with_optional_length(f, "BINARY", size),
            DataType::Varbinary(size) => format_type_with_optional_length(f, "VARBINARY", size),
            DataType::Blob(size) => format_type_with_optional_length(f, "BLOB", size),
            DataType::Bytes(size) => format_type_with_optional_length(f, "BYTES", size),
            DataType::Bytea => f.write_str("BYTEA"),
            DataType::Numeric(info) => write!(f, "NUMERIC{info}"),
            DataType::Decimal(info) => write!(f, "DECIMAL{info}"),
            DataType::Dec(info) => write!(f, "DEC{info}"),
            DataType::BigNumeric(info) => write!(f, "BIGNUMERIC{info}"),
            DataType::BigDecimal(info) => write!(f, "BIGDECIMAL{info}"),
            DataType::TinyInt(size, unsigned) => {
                format_int_type(f, "TINYINT", size, *unsigned)
            }
            DataType::SmallInt(size, unsigned) => format_int_type(f, "SMALLINT", size, *unsigned),
            DataType::MediumInt(size, unsigned) => {
                format_int_type(f, "MEDIUMINT", size, *unsigned)
            }
            DataType::Int(size, unsigned) => format_int_type(f, "INT", size, *unsigned),
            DataType::Integer(size, unsigned) => format_int_type(f, "INTEGER", size, *unsigned),
            DataType::BigInt(size, unsigned) => format_int_type(f, "BIGINT", size, *unsigned),
            DataType::Int2 => f.write_str("INT2"),
            DataType::Int4 => f.write_str("INT4"),
            DataType::Int8 => f.write_str("INT8"),
            DataType::Float4 => f.write_str("FLOAT4"),
            DataType::Float8 => f.write_str("FLOAT8"),
            DataType::Float(size) => format_type_with_optional_length(f, "FLOAT", size),
            DataType::Real => f.write_str("REAL"),
            DataType::Double => f.write_str("DOUBLE"),
            DataType::DoublePrecision => f.write_str("DOUBLE PRECISION"),
            DataType::Bool => f.write_str("BOOL"),
            DataType::Boolean => f.write_str("BOOLEAN"),
            DataType::Date => f.write_str("DATE"),
            DataType::Time(precision, timezone_info) => {
                format_datetime_precision_and_tz(f, "TIME", precision, timezone_info)
            }
            DataType::Datetime(precision) => {
                format_type_with_optional_length(f, "DATETIME", precision)
            }
            DataType::Timestamp(precision, timezone_info) => {
                format_datetime_precision_and_tz(f, "TIMESTAMP", precision, timezone_info)
            }
            DataType::Interval => f.write_str("INTERVAL"),
            DataType::Json => f.write_str("JSON"),
            DataType::Jsonb => f.write_str("JSONB"),
            DataType::Regclass => f.write_str("REGCLASS"),
            DataType::Enum(vals) => format_string_list_type(f, "ENUM", vals),
            DataType::Set(vals) => format_string_list_type(f, "SET", vals),
            DataType::Array(def) => match def {
                ArrayElemTypeDef::None => f.write_str("ARRAY"),
                ArrayElemTypeDef::AngleBracket(inner) => write!(f, "ARRAY<{inner}>"),
                ArrayElemTypeDef::SquareBracket(inner, None) => write!(f, "{inner}[]"),
                ArrayElemTypeDef::SquareBracket(inner, Some(size)) => {
                    write!(f, "{inner}[{size}]")
                }
            },
            DataType::Map(key, value) => write!(f, "MAP<{key}, {value}>"),
            DataType::Custom(name, modifiers) => {
                if modifiers.is_empty() {
                    write!(f, "{name}")
                } else {
                    write!(f, "{name}({})", display_comma_separated(modifiers))
                }
            }
        }
    }
}

fn format_type_with_optional_length(
    f: &mut fmt::Formatter,
    sql_type: &'static str,
    len: &Option<u64>,
) -> fmt::Result {
    write!(f, "{sql_type}")?;
    if let Some(len) = len {
        write!(f, "({len})")?;
    }
    Ok(())
}

fn format_int_type(
    f: &mut fmt::Formatter,
    sql_type: &'static str,
    len: &Option<u64>,
    unsigned: bool,
) -> fmt::Result {
    format_type_with_optional_length(f, sql_type, len)?;
    if unsigned {
        f.write_str(" UNSIGNED")?;
    }
    Ok(())
}

fn format_character_type(
    f: &mut fmt::Formatter,
    sql_type: &'static str,
    size: &Option<CharacterLength>,
) -> fmt::Result {
    write!(f, "{sql_type}")?;
    if let Some(size) = size {
        write!(f, "({size})")?;
    }
    Ok(())
}

fn format_datetime_precision_and_tz(
    f: &mut fmt::Formatter,
    sql_type: &'static str,
    precision: &Option<u64>,
    timezone_info: &TimezoneInfo,
) -> fmt::Result {
    format_type_with_optional_length(f, sql_type, precision)?;
    write!(f, "{timezone_info}")
}

fn format_string_list_type(
    f: &mut fmt::Formatter,
    sql_type: &'static str,
    values: &[String],
) -> fmt::Result {
    write!(f, "{sql_type}(")?;
    for (i, v) in values.iter().enumerate() {
        if i != 0 {
            f.write_str(", ")?;
        }
        write!(f, "'{}'", crate::ast::escape_single_quote_string(v))?;
    }
    f.write_str(")")
}

/// Timezone qualifier of `TIME`/`TIMESTAMP` types.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimezoneInfo {
    /// No qualifier.
    None,
    /// `WITH TIME ZONE`
    WithTimeZone,
    /// `WITHOUT TIME ZONE`
    WithoutTimeZone,
}

impl fmt::Display for TimezoneInfo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TimezoneInfo::None => Ok(()),
            TimezoneInfo::WithTimeZone => f.write_str(" WITH TIME ZONE"),
            TimezoneInfo::WithoutTimeZone => f.write_str(" WITHOUT TIME ZONE"),
        }
    }
}

/// Precision and scale of an exact number type.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExactNumberInfo {
    /// No additional information
    None,
    /// Only precision, e.g. `DECIMAL(10)`
    Precision(u64),
    /// Precision and scale, e.g. `DECIMAL(10, 2)`
    PrecisionAndScale(u64, u64),
}

impl fmt::Display for ExactNumberInfo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ExactNumberInfo::None => Ok(()),
            ExactNumberInfo::Precision(p) => write!(f, "({p})"),
            ExactNumberInfo::PrecisionAndScale(p, s) => write!(f, "({p}, {s})"),
        }
    }
}

/// Length of a character type, with its optional unit.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CharacterLength {
    /// `CHARACTER VARYING(10 CHARACTERS)`
    IntegerLength {
        /// Default (if VARYING) or maximum (if not VARYING) length.
        length: u64,
        /// Optional unit.
        unit: Option<CharLengthUnits>,
    },
    /// `VARCHAR(MAX)` (MS SQL)
    Max,
}

impl fmt::Display for CharacterLength {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CharacterLength::IntegerLength { length, unit } => {
                write!(f, "{length}")?;
                if let Some(unit) = unit {
                    write!(f, " {unit}")?;
                }
                Ok(())
            }
            CharacterLength::Max => f.write_str("MAX"),
        }
    }
}

/// The unit of a character length.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CharLengthUnits {
    /// `CHARACTERS`
    Characters,
    /// `OCTETS`
    Octets,
}

impl fmt::Display for CharLengthUnits {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            CharLengthUnits::Characters => "CHARACTERS",
            CharLengthUnits::Octets => "OCTETS",
        })
    }
}

/// How an array element type was written down.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ArrayElemTypeDef {
    /// `ARRAY` with no element type
    None,
    /// `ARRAY<INT>`
    AngleBracket(Box<DataType>),
    /// `INT[]` or `INT[3]`, chainable
    SquareBracket(Box<DataType>, Option<u64>),
}
