#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, string::String, vec::Vec};
use core::fmt;

use crate::ast::{
    display_comma_separated, display_separated, escape_single_quote_string, DataType,
    DateTimeField, Ident, Interval, NormalizationForm, ObjectName, OrderByExpr, Query, Value,
};
use crate::ast::{BinaryOperator, UnaryOperator};

/// SQL expression.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Expr {
    /// Identifier e.g. table name or column name
    Identifier(Ident),
    /// Multi-part identifier, e.g. `table_alias.column` or `schema.table.col`
    CompoundIdentifier(Vec<Ident>),
    /// Unqualified wildcard (`*`). SQL allows this in limited contexts, such
    /// as right after `SELECT`, or as part of an aggregate function, e.g.
    /// `COUNT(*)`.
    Wildcard,
    /// Qualified wildcard, e.g. `alias.*` or `schema.table.*`.
    QualifiedWildcard(Vec<Ident>),
    /// A literal value, such as string, number, date or NULL
    Value(Value),
    /// A constant of form `<data_type> 'value'`. This can represent ANSI SQL
    /// `DATE`, `TIME`, and `TIMESTAMP` literals (such as
    /// `DATE '2020-01-01'`), as well as constants of other types (a
    /// non-standard PostgreSQL extension).
    TypedString {
        /// The type prefix.
        data_type: DataType,
        /// The string payload.
        value: String,
    },
    /// An `INTERVAL` literal.
    Interval(Interval),

    /// `<expr> IS [NOT] NULL`; postfix `ISNULL`/`NOTNULL` normalize here.
    IsNull(IsNullExpr),
    /// `<expr> IS [NOT] TRUE | FALSE | UNKNOWN`
    IsBool(IsBoolExpr),
    /// `<expr> IS [NOT] DISTINCT FROM <expr>`
    IsDistinctFrom(IsDistinctFromExpr),
    /// `<expr> IS [NOT] [form] NORMALIZED`
    IsNormalized(IsNormalizedExpr),

    /// `<expr> [ NOT ] IN (val1, val2, ...)`
    InList(InListExpr),
    /// `<expr> [ NOT ] IN (SELECT ...)`
    InSubquery(InSubqueryExpr),
    /// `<expr> [ NOT ] IN UNNEST(array_expression)`
    InUnnest(InUnnestExpr),
    /// `<expr> [ NOT ] BETWEEN <low> AND <high>`
    Between(BetweenExpr),
    /// `<expr> [ NOT ] LIKE | ILIKE | SIMILAR TO <pattern> [ ESCAPE <char> ]`
    Like(LikeExpr),

    /// Binary operation e.g. `1 + 1` or `foo > bar`
    BinaryOp(BinaryOpExpr),
    /// Unary operation e.g. `NOT foo`
    UnaryOp(UnaryOpExpr),
    /// `<left> <op> ANY (<right>)`
    AnyOp(AnyAllExpr),
    /// `<left> <op> ALL (<right>)`
    AllOp(AnyAllExpr),

    /// `CAST(<expr> AS <type>)`, `TRY_CAST(<expr> AS <type>)` or
    /// `<expr>::<type>`
    Cast(CastExpr),
    /// `<timestamp> AT TIME ZONE <zone>`
    AtTimeZone(AtTimeZoneExpr),
    /// `EXTRACT(<field> FROM <expr>)`
    Extract(ExtractExpr),
    /// `CEIL(<expr> [TO <field> | , <scale>])` and the `FLOOR` twin
    CeilFloor(CeilFloorExpr),
    /// `POSITION(<expr> IN <expr>)`
    Position(PositionExpr),
    /// `SUBSTRING(<expr> [FROM <expr>] [FOR <expr>])`
    Substring(SubstringExpr),
    /// `TRIM([BOTH | LEADING | TRAILING] [<chars> FROM] <expr>)`
    Trim(TrimExpr),
    /// `OVERLAY(<expr> PLACING <expr> FROM <expr> [FOR <expr>])`
    Overlay(OverlayExpr),
    /// `<expr> COLLATE collation`
    Collate(CollateExpr),

    /// Nested expression e.g. `(foo > bar)` or `(1)`
    Nested(Box<Expr>),
    /// A parenthesized comma-separated list, e.g. `(1, 2)`
    Tuple(Vec<Expr>),
    /// `ARRAY[1, 2, 3]` or `[1, 2, 3]`
    Array(ArrayExpr),
    /// `MAP {'a': 1, 'b': 2}` (DuckDB)
    Map(MapExpr),
    /// `{'a': 1, 'b': 2}` dictionary literal (DuckDB)
    Dictionary(Vec<DictionaryField>),
    /// Chainable subscript access, e.g. `arr[1]` or `map['k']['k2']`
    Subscript(SubscriptExpr),

    /// `CASE [<operand>] WHEN <condition> THEN <result> ...
    /// [ELSE <result>] END`
    ///
    /// Note we only recognize a complete single expression as `<condition>`,
    /// not `< 0` nor `1, 2, 3` as allowed in a `<simple when clause>` per
    /// <https://jakewheat.github.io/sql-overview/sql-2016-foundation-grammar.html#simple-when-clause>
    Case(CaseExpr),
    /// `[NOT] EXISTS (SELECT ...)`
    Exists(ExistsExpr),
    /// A parenthesized subquery `(SELECT ...)`, used in expressions like
    /// `SELECT (subquery) AS x` or `WHERE (subquery) = x`
    Subquery(Box<Query>),
    /// Scalar or aggregate function call e.g. `LEFT(foo, 5)`
    Function(Function),

    /// `<value> MEMBER OF(<array>)` (MySQL)
    MemberOf(MemberOfExpr),
    /// `(<start1>, <end1>) OVERLAPS (<start2>, <end2>)`
    Overlaps(OverlapsExpr),
    /// `CONNECT_BY_ROOT <expr>` (hierarchical queries)
    ConnectByRoot(Box<Expr>),
    /// `PRIOR <expr>` (hierarchical queries)
    Prior(Box<Expr>),

    /// `GROUPING SETS ((a), (b, c))` — only valid after `GROUP BY`
    GroupingSets(Vec<Vec<Expr>>),
    /// `ROLLUP (a, (b, c))` — only valid after `GROUP BY`
    Rollup(Vec<Vec<Expr>>),
    /// `CUBE (a, (b, c))` — only valid after `GROUP BY`
    Cube(Vec<Vec<Expr>>),
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Identifier(ident) => write!(f, "{ident}"),
            Self::CompoundIdentifier(idents) => write!(f, "{}", display_separated(idents, ".")),
            Self::Wildcard => f.write_str("*"),
            Self::QualifiedWildcard(idents) => write!(f, "{}.*", display_separated(idents, ".")),
            Self::Value(v) => write!(f, "{v}"),
            Self::TypedString { data_type, value } => {
                write!(f, "{data_type} '{}'", escape_single_quote_string(value))
            }
            Self::Interval(interval) => write!(f, "{interval}"),
            Self::IsNull(expr) => write!(f, "{expr}"),
            Self::IsBool(expr) => write!(f, "{expr}"),
            Self::IsDistinctFrom(expr) => write!(f, "{expr}"),
            Self::IsNormalized(expr) => write!(f, "{expr}"),
            Self::InList(expr) => write!(f, "{expr}"),
            Self::InSubquery(expr) => write!(f, "{expr}"),
            Self::InUnnest(expr) => write!(f, "{expr}"),
            Self::Between(expr) => write!(f, "{expr}"),
            Self::Like(expr) => write!(f, "{expr}"),
            Self::BinaryOp(expr) => write!(f, "{expr}"),
            Self::UnaryOp(expr) => write!(f, "{expr}"),
            Self::AnyOp(expr) => format_any_all(f, expr, "ANY"),
            Self::AllOp(expr) => format_any_all(f, expr, "ALL"),
            Self::Cast(expr) => write!(f, "{expr}"),
            Self::AtTimeZone(expr) => write!(f, "{expr}"),
            Self::Extract(expr) => write!(f, "{expr}"),
            Self::CeilFloor(expr) => write!(f, "{expr}"),
            Self::Position(expr) => write!(f, "{expr}"),
            Self::Substring(expr) => write!(f, "{expr}"),
            Self::Trim(expr) => write!(f, "{expr}"),
            Self::Overlay(expr) => write!(f, "{expr}"),
            Self::Collate(expr) => write!(f, "{expr}"),
            Self::Nested(expr) => write!(f, "({expr})"),
            Self::Tuple(exprs) => write!(f, "({})", display_comma_separated(exprs)),
            Self::Array(expr) => write!(f, "{expr}"),
            Self::Map(expr) => write!(f, "{expr}"),
            Self::Dictionary(fields) => write!(f, "{{{}}}", display_comma_separated(fields)),
            Self::Subscript(expr) => write!(f, "{expr}"),
            Self::Case(expr) => write!(f, "{expr}"),
            Self::Exists(expr) => write!(f, "{expr}"),
            Self::Subquery(query) => write!(f, "({query})"),
            Self::Function(func) => write!(f, "{func}"),
            Self::MemberOf(expr) => write!(f, "{expr}"),
            Self::Overlaps(expr) => write!(f, "{expr}"),
            Self::ConnectByRoot(expr) => write!(f, "CONNECT_BY_ROOT {expr}"),
            Self::Prior(expr) => write!(f, "PRIOR {expr}"),
            Self::GroupingSets(sets) => {
                write!(f, "GROUPING SETS (")?;
                let mut sep = "";
                for set in sets {
                    write!(f, "{sep}({})", display_comma_separated(set))?;
                    sep = ", ";
                }
                f.write_str(")")
            }
            Self::Rollup(sets) => format_grouping_shorthand(f, "ROLLUP", sets),
            Self::Cube(sets) => format_grouping_shorthand(f, "CUBE", sets),
        }
    }
}

fn format_any_all(
    f: &mut fmt::Formatter,
    expr: &AnyAllExpr,
    quantifier: &'static str,
) -> fmt::Result {
    // a subquery brings its own parentheses
    if matches!(*expr.right, Expr::Subquery(_)) {
        write!(f, "{} {} {quantifier} {}", expr.left, expr.compare_op, expr.right)
    } else {
        write!(f, "{} {} {quantifier} ({})", expr.left, expr.compare_op, expr.right)
    }
}

fn format_grouping_shorthand(
    f: &mut fmt::Formatter,
    keyword: &'static str,
    sets: &[Vec<Expr>],
) -> fmt::Result {
    write!(f, "{keyword} (")?;
    let mut sep = "";
    for set in sets {
        f.write_str(sep)?;
        sep = ", ";
        if set.len() == 1 {
            write!(f, "{}", set[0])?;
        } else {
            write!(f, "({})", display_comma_separated(set))?;
        }
    }
    f.write_str(")")
}

/// `<expr> IS [NOT] NULL`
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IsNullExpr {
    /// The tested expression.
    pub expr: Box<Expr>,
    /// `IS NOT NULL` when true.
    pub negated: bool,
}

impl fmt::Display for IsNullExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} IS {}NULL",
            self.expr,
            if self.negated { "NOT " } else { "" }
        )
    }
}

/// `<expr> IS [NOT] TRUE | FALSE | UNKNOWN`
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IsBoolExpr {
    /// The tested expression.
    pub expr: Box<Expr>,
    /// `IS NOT` when true.
    pub negated: bool,
    /// The truth value on the right-hand side.
    pub value: IsBoolValue,
}

/// The right-hand side of an `IS [NOT]` truth test.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum IsBoolValue {
    True,
    False,
    Unknown,
}

impl fmt::Display for IsBoolExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} IS {}{}",
            self.expr,
            if self.negated { "NOT " } else { "" },
            match self.value {
                IsBoolValue::True => "TRUE",
                IsBoolValue::False => "FALSE",
                IsBoolValue::Unknown => "UNKNOWN",
            }
        )
    }
}

/// `<expr1> IS [NOT] DISTINCT FROM <expr2>`
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IsDistinctFromExpr {
    /// Left operand.
    pub left: Box<Expr>,
    /// `IS NOT DISTINCT FROM` when true.
    pub negated: bool,
    /// Right operand.
    pub right: Box<Expr>,
}

impl fmt::Display for IsDistinctFromExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} IS {}DISTINCT FROM {}",
            self.left,
            if self.negated { "NOT " } else { "" },
            self.right
        )
    }
}

/// `<expr> IS [NOT] [form] NORMALIZED`
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IsNormalizedExpr {
    /// The tested expression.
    pub expr: Box<Expr>,
    /// The normalization form, when spelled out.
    pub form: Option<NormalizationForm>,
    /// `IS NOT ... NORMALIZED` when true.
    pub negated: bool,
}

impl fmt::Display for IsNormalizedExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} IS ", self.expr)?;
        if self.negated {
            f.write_str("NOT ")?;
        }
        if let Some(form) = &self.form {
            write!(f, "{form} ")?;
        }
        f.write_str("NORMALIZED")
    }
}

/// `<expr> [ NOT ] IN (val1, val2, ...)`
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InListExpr {
    /// The tested expression.
    pub expr: Box<Expr>,
    /// The candidate list.
    pub list: Vec<Expr>,
    /// `NOT IN` when true.
    pub negated: bool,
}

impl fmt::Display for InListExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {}IN ({})",
            self.expr,
            if self.negated { "NOT " } else { "" },
            display_comma_separated(&self.list)
        )
    }
}

/// `<expr> [ NOT ] IN (SELECT ...)`
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InSubqueryExpr {
    /// The tested expression.
    pub expr: Box<Expr>,
    /// The subquery producing candidates.
    pub subquery: Box<Query>,
    /// `NOT IN` when true.
    pub negated: bool,
}

impl fmt::Display for InSubqueryExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {}IN ({})",
            self.expr,
            if self.negated { "NOT " } else { "" },
            self.subquery
        )
    }
}

/// `<expr> [ NOT ] IN UNNEST(array_expression)`
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InUnnestExpr {
    /// The tested expression.
    pub expr: Box<Expr>,
    /// The expression producing the array.
    pub array_expr: Box<Expr>,
    /// `NOT IN` when true.
    pub negated: bool,
}

impl fmt::Display for InUnnestExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {}IN UNNEST({})",
            self.expr,
            if self.negated { "NOT " } else { "" },
            self.array_expr
        )
    }
}

/// `<expr> [ NOT ] BETWEEN <low> AND <high>`
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BetweenExpr {
    /// The tested expression.
    pub expr: Box<Expr>,
    /// `NOT BETWEEN` when true.
    pub negated: bool,
    /// Lower bound.
    pub low: Box<Expr>,
    /// Upper bound.
    pub high: Box<Expr>,
}

impl fmt::Display for BetweenExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {}BETWEEN {} AND {}",
            self.expr,
            if self.negated { "NOT " } else { "" },
            self.low,
            self.high
        )
    }
}

/// Which pattern-match operator a [`LikeExpr`] uses.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LikeKind {
    /// `LIKE`
    Like,
    /// `ILIKE` (case-insensitive, PostgreSQL/Snowflake)
    ILike,
    /// `SIMILAR TO`
    SimilarTo,
}

/// `<expr> [ NOT ] LIKE | ILIKE | SIMILAR TO <pattern> [ ESCAPE <char> ]`
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LikeExpr {
    /// The matched expression.
    pub expr: Box<Expr>,
    /// Which operator.
    pub kind: LikeKind,
    /// Negated form when true.
    pub negated: bool,
    /// The pattern.
    pub pattern: Box<Expr>,
    /// `ESCAPE <char>`.
    pub escape_char: Option<String>,
}

impl fmt::Display for LikeExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let op = match self.kind {
            LikeKind::Like => "LIKE",
            LikeKind::ILike => "ILIKE",
            LikeKind::SimilarTo => "SIMILAR TO",
        };
        write!(
            f,
            "{} {}{op} {}",
            self.expr,
            if self.negated { "NOT " } else { "" },
            self.pattern
        )?;
        if let Some(escape) = &self.escape_char {
            write!(f, " ESCAPE '{escape}'")?;
        }
        Ok(())
    }
}

/// Binary operation e.g. `1 + 1` or `foo > bar`
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BinaryOpExpr {
    /// Left operand.
    pub left: Box<Expr>,
    /// The operator.
    pub op: BinaryOperator,
    /// Right operand.
    pub right: Box<Expr>,
}

impl fmt::Display for BinaryOpExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} {}", self.left, self.op, self.right)
    }
}

/// Unary operation e.g. `NOT foo`
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnaryOpExpr {
    /// The operator.
    pub op: UnaryOperator,
    /// The operand.
    pub expr: Box<Expr>,
}

impl fmt::Display for UnaryOpExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.op == UnaryOperator::Not {
            write!(f, "{} {}", self.op, self.expr)
        } else {
            write!(f, "{}{}", self.op, self.expr)
        }
    }
}

/// `<left> <op> ANY (<right>)` / `<left> <op> ALL (<right>)`
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnyAllExpr {
    /// Left operand.
    pub left: Box<Expr>,
    /// The comparison operator.
    pub compare_op: BinaryOperator,
    /// Right operand (a subquery or an array expression).
    pub right: Box<Expr>,
}

/// `CAST` flavor.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CastKind {
    /// `CAST(expr AS type)`
    Cast,
    /// `TRY_CAST(expr AS type)`; returns NULL instead of failing.
    TryCast,
    /// `expr::type`
    DoubleColon,
}

/// A cast in one of its three spellings.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CastExpr {
    /// Which spelling was used.
    pub kind: CastKind,
    /// The expression being cast.
    pub expr: Box<Expr>,
    /// The target type.
    pub data_type: DataType,
}

impl fmt::Display for CastExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            CastKind::Cast => write!(f, "CAST({} AS {})", self.expr, self.data_type),
            CastKind::TryCast => write!(f, "TRY_CAST({} AS {})", self.expr, self.data_type),
            CastKind::DoubleColon => write!(f, "{}::{}", self.expr, self.data_type),
        }
    }
}

/// `<timestamp> AT TIME ZONE <zone>`
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AtTimeZoneExpr {
    /// The timestamp expression.
    pub timestamp: Box<Expr>,
    /// The time zone expression.
    pub time_zone: Box<Expr>,
}

impl fmt::Display for AtTimeZoneExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} AT TIME ZONE {}", self.timestamp, self.time_zone)
    }
}

/// `EXTRACT(<field> FROM <expr>)`
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExtractExpr {
    /// The extracted field.
    pub field: DateTimeField,
    /// The source expression.
    pub expr: Box<Expr>,
}

impl fmt::Display for ExtractExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "EXTRACT({} FROM {})", self.field, self.expr)
    }
}

/// `CEIL` or `FLOOR`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum CeilFloorKind {
    Ceil,
    Floor,
}

/// What follows the expression in `CEIL`/`FLOOR`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CeilFloorField {
    /// No qualifier.
    None,
    /// `TO <datetime field>`
    DateTime(DateTimeField),
    /// `, <scale>`
    Scale(Value),
}

/// `CEIL(<expr> [TO <field> | , <scale>])` / `FLOOR(...)`
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CeilFloorExpr {
    /// `CEIL` or `FLOOR`.
    pub kind: CeilFloorKind,
    /// The rounded expression.
    pub expr: Box<Expr>,
    /// The optional datetime field or scale.
    pub field: CeilFloorField,
}

impl fmt::Display for CeilFloorExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self.kind {
            CeilFloorKind::Ceil => "CEIL",
            CeilFloorKind::Floor => "FLOOR",
        };
        match &self.field {
            CeilFloorField::None => write!(f, "{name}({})", self.expr),
            CeilFloorField::DateTime(field) => write!(f, "{name}({} TO {field})", self.expr),
            CeilFloorField::Scale(scale) => write!(f, "{name}({}, {scale})", self.expr),
        }
    }
}

/// `POSITION(<expr> IN <expr>)`
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionExpr {
    /// The needle.
    pub expr: Box<Expr>,
    /// The haystack.
    pub r#in: Box<Expr>,
}

impl fmt::Display for PositionExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "POSITION({} IN {})", self.expr, self.r#in)
    }
}

/// `SUBSTRING(<expr> [FROM <expr>] [FOR <expr>])`
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubstringExpr {
    /// The source string.
    pub expr: Box<Expr>,
    /// `FROM <expr>` / the second comma argument.
    pub substring_from: Option<Box<Expr>>,
    /// `FOR <expr>` / the third comma argument.
    pub substring_for: Option<Box<Expr>>,
}

impl fmt::Display for SubstringExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "SUBSTRING({}", self.expr)?;
        if let Some(from_part) = &self.substring_from {
            write!(f, " FROM {from_part}")?;
        }
        if let Some(for_part) = &self.substring_for {
            write!(f, " FOR {for_part}")?;
        }
        f.write_str(")")
    }
}

/// `[BOTH | LEADING | TRAILING]`
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum TrimWhereField {
    Both,
    Leading,
    Trailing,
}

impl fmt::Display for TrimWhereField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Self::Both => "BOTH",
            Self::Leading => "LEADING",
            Self::Trailing => "TRAILING",
        })
    }
}

/// `TRIM([BOTH | LEADING | TRAILING] [<chars> FROM] <expr>)`
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrimExpr {
    /// The trimmed expression.
    pub expr: Box<Expr>,
    /// The side to trim, when spelled out.
    pub trim_where: Option<TrimWhereField>,
    /// The characters to trim, when spelled out.
    pub trim_what: Option<Box<Expr>>,
}

impl fmt::Display for TrimExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "TRIM(")?;
        if let Some(trim_where) = &self.trim_where {
            write!(f, "{trim_where} ")?;
        }
        if let Some(trim_what) = &self.trim_what {
            write!(f, "{trim_what} FROM ")?;
        }
        write!(f, "{})", self.expr)
    }
}

/// `OVERLAY(<expr> PLACING <expr> FROM <expr> [FOR <expr>])`
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OverlayExpr {
    /// The target string.
    pub expr: Box<Expr>,
    /// `PLACING <expr>`.
    pub overlay_what: Box<Expr>,
    /// `FROM <expr>`.
    pub overlay_from: Box<Expr>,
    /// `FOR <expr>`.
    pub overlay_for: Option<Box<Expr>>,
}

impl fmt::Display for OverlayExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "OVERLAY({} PLACING {} FROM {}",
            self.expr, self.overlay_what, self.overlay_from
        )?;
        if let Some(for_part) = &self.overlay_for {
            write!(f, " FOR {for_part}")?;
        }
        f.write_str(")")
    }
}

/// `<expr> COLLATE collation`
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CollateExpr {
    /// The collated expression.
    pub expr: Box<Expr>,
    /// The collation name.
    pub collation: ObjectName,
}

impl fmt::Display for CollateExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} COLLATE {}", self.expr, self.collation)
    }
}

/// `ARRAY[..]` or `[..]`
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArrayExpr {
    /// The element expressions.
    pub elem: Vec<Expr>,
    /// Whether the `ARRAY` keyword was spelled out.
    pub named: bool,
}

impl fmt::Display for ArrayExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}[{}]",
            if self.named { "ARRAY" } else { "" },
            display_comma_separated(&self.elem)
        )
    }
}

/// One `key: value` entry of a [`MapExpr`] or dictionary.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DictionaryField {
    /// The key.
    pub key: Box<Expr>,
    /// The value.
    pub value: Box<Expr>,
}

impl fmt::Display for DictionaryField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.value)
    }
}

/// `MAP {'a': 1, 'b': 2}` (DuckDB)
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapExpr {
    /// The entries of the map.
    pub entries: Vec<DictionaryField>,
}

impl fmt::Display for MapExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "MAP {{{}}}", display_comma_separated(&self.entries))
    }
}

/// Subscript access, e.g. `arr[1]`; chains left-associatively.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubscriptExpr {
    /// The subscripted expression.
    pub expr: Box<Expr>,
    /// The index expression.
    pub subscript: Box<Expr>,
}

impl fmt::Display for SubscriptExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}[{}]", self.expr, self.subscript)
    }
}

/// `CASE [<operand>] WHEN <condition> THEN <result> ... [ELSE <result>] END`
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CaseExpr {
    /// The operand of the "simple" form.
    pub operand: Option<Box<Expr>>,
    /// The `WHEN` expressions, one per branch.
    pub conditions: Vec<Expr>,
    /// The `THEN` results, zipped with `conditions`.
    pub results: Vec<Expr>,
    /// The `ELSE` result.
    pub else_result: Option<Box<Expr>>,
}

impl fmt::Display for CaseExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("CASE")?;
        if let Some(operand) = &self.operand {
            write!(f, " {operand}")?;
        }
        for (c, r) in self.conditions.iter().zip(&self.results) {
            write!(f, " WHEN {c} THEN {r}")?;
        }
        if let Some(else_result) = &self.else_result {
            write!(f, " ELSE {else_result}")?;
        }
        f.write_str(" END")
    }
}

/// `[NOT] EXISTS (SELECT ...)`
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExistsExpr {
    /// The tested subquery.
    pub subquery: Box<Query>,
    /// `NOT EXISTS` when true.
    pub negated: bool,
}

impl fmt::Display for ExistsExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}EXISTS ({})",
            if self.negated { "NOT " } else { "" },
            self.subquery
        )
    }
}

/// `<value> MEMBER OF(<array>)` (MySQL)
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MemberOfExpr {
    /// The candidate value.
    pub value: Box<Expr>,
    /// The JSON array.
    pub array: Box<Expr>,
}

impl fmt::Display for MemberOfExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} MEMBER OF({})", self.value, self.array)
    }
}

/// `(<start1>, <end1>) OVERLAPS (<start2>, <end2>)`
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OverlapsExpr {
    /// The left period.
    pub left: Box<Expr>,
    /// The right period.
    pub right: Box<Expr>,
}

impl fmt::Display for OverlapsExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} OVERLAPS {}", self.left, self.right)
    }
}

// ============================================================================
// Function calls
// ============================================================================

/// A function call, with every post-parenthesis modifier the grammar allows.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Function {
    /// The (possibly qualified) function name.
    pub name: ObjectName,
    /// The argument list.
    pub args: Vec<FunctionArg>,
    /// `DISTINCT` or `ALL` before the arguments.
    pub duplicate_treatment: Option<DuplicateTreatment>,
    /// `ORDER BY` inside the parentheses (aggregates).
    pub order_by: Vec<OrderByExpr>,
    /// `LIMIT` inside the parentheses (some dialects).
    pub limit: Option<Box<Expr>>,
    /// `ON OVERFLOW ...` (LISTAGG).
    pub on_overflow: Option<ListAggOnOverflow>,
    /// `FILTER (WHERE <predicate>)`.
    pub filter: Option<Box<Expr>>,
    /// `IGNORE NULLS` or `RESPECT NULLS`.
    pub null_treatment: Option<NullTreatment>,
    /// `WITHIN GROUP (ORDER BY ...)`.
    pub within_group: Vec<OrderByExpr>,
    /// `OVER (window spec)` or `OVER window_name`.
    pub over: Option<WindowType>,
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        if let Some(duplicate_treatment) = &self.duplicate_treatment {
            write!(f, "{duplicate_treatment} ")?;
        }
        write!(f, "{}", display_comma_separated(&self.args))?;
        if !self.order_by.is_empty() {
            write!(f, " ORDER BY {}", display_comma_separated(&self.order_by))?;
        }
        if let Some(limit) = &self.limit {
            write!(f, " LIMIT {limit}")?;
        }
        if let Some(on_overflow) = &self.on_overflow {
            write!(f, "{on_overflow}")?;
        }
        f.write_str(")")?;
        if let Some(filter) = &self.filter {
            write!(f, " FILTER (WHERE {filter})")?;
        }
        if let Some(null_treatment) = &self.null_treatment {
            write!(f, " {null_treatment}")?;
        }
        if !self.within_group.is_empty() {
            write!(
                f,
                " WITHIN GROUP (ORDER BY {})",
                display_comma_separated(&self.within_group)
            )?;
        }
        if let Some(over) = &self.over {
            write!(f, " OVER {over}")?;
        }
        Ok(())
    }
}

/// `DISTINCT` or `ALL` inside an aggregate call.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum DuplicateTreatment {
    All,
    Distinct,
}

impl fmt::Display for DuplicateTreatment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            DuplicateTreatment::All => "ALL",
            DuplicateTreatment::Distinct => "DISTINCT",
        })
    }
}

/// `IGNORE NULLS` or `RESPECT NULLS`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum NullTreatment {
    IgnoreNulls,
    RespectNulls,
}

impl fmt::Display for NullTreatment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            NullTreatment::IgnoreNulls => "IGNORE NULLS",
            NullTreatment::RespectNulls => "RESPECT NULLS",
        })
    }
}

/// The `ON OVERFLOW` clause of a LISTAGG invocation.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ListAggOnOverflow {
    /// `ON OVERFLOW ERROR`
    Error,
    /// `ON OVERFLOW TRUNCATE [ <filler> ] WITH[OUT] COUNT`
    Truncate {
        /// The filler string.
        filler: Option<Box<Expr>>,
        /// `WITH COUNT` vs `WITHOUT COUNT`.
        with_count: bool,
    },
}

impl fmt::Display for ListAggOnOverflow {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(" ON OVERFLOW")?;
        match self {
            ListAggOnOverflow::Error => f.write_str(" ERROR"),
            ListAggOnOverflow::Truncate { filler, with_count } => {
                f.write_str(" TRUNCATE")?;
                if let Some(filler) = filler {
                    write!(f, " {filler}")?;
                }
                if *with_count {
                    f.write_str(" WITH")?;
                } else {
                    f.write_str(" WITHOUT")?;
                }
                f.write_str(" COUNT")
            }
        }
    }
}

/// An argument of a function call.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FunctionArg {
    /// `name => expr` or `name = expr`
    Named {
        /// The parameter name.
        name: Ident,
        /// The argument value.
        arg: FunctionArgExpr,
        /// `=>` or `=`.
        operator: FunctionArgOperator,
    },
    /// A bare argument.
    Unnamed(FunctionArgExpr),
}

impl fmt::Display for FunctionArg {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FunctionArg::Named {
                name,
                arg,
                operator,
            } => write!(f, "{name} {operator} {arg}"),
            FunctionArg::Unnamed(arg) => write!(f, "{arg}"),
        }
    }
}

/// The operator of a named function argument.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum FunctionArgOperator {
    RightArrow,
    Equals,
}

impl fmt::Display for FunctionArgOperator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            FunctionArgOperator::RightArrow => "=>",
            FunctionArgOperator::Equals => "=",
        })
    }
}

/// The value of a function argument.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FunctionArgExpr {
    /// A regular expression argument.
    Expr(Expr),
    /// Qualified wildcard, e.g. `alias.*`.
    QualifiedWildcard(ObjectName),
    /// An unqualified `*`, e.g. in `COUNT(*)`.
    Wildcard,
}

impl fmt::Display for FunctionArgExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FunctionArgExpr::Expr(expr) => write!(f, "{expr}"),
            FunctionArgExpr::QualifiedWildcard(prefix) => write!(f, "{prefix}.*"),
            FunctionArgExpr::Wildcard => f.write_str("*"),
        }
    }
}

/// What follows `OVER`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WindowType {
    /// An inline window specification.
    WindowSpec(WindowSpec),
    /// A reference to a window declared in the `WINDOW` clause.
    NamedWindow(Ident),
}

impl fmt::Display for WindowType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            WindowType::WindowSpec(spec) => write!(f, "({spec})"),
            WindowType::NamedWindow(name) => write!(f, "{name}"),
        }
    }
}

/// A window specification:
/// `[window_name] [PARTITION BY ...] [ORDER BY ...] [frame]`.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowSpec {
    /// An existing named window this spec extends.
    pub window_name: Option<Ident>,
    /// `PARTITION BY`.
    pub partition_by: Vec<Expr>,
    /// `ORDER BY`.
    pub order_by: Vec<OrderByExpr>,
    /// The window frame.
    pub window_frame: Option<WindowFrame>,
}

impl fmt::Display for WindowSpec {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut delim = "";
        if let Some(window_name) = &self.window_name {
            write!(f, "{window_name}")?;
            delim = " ";
        }
        if !self.partition_by.is_empty() {
            f.write_str(delim)?;
            delim = " ";
            write!(f, "PARTITION BY {}", display_comma_separated(&self.partition_by))?;
        }
        if !self.order_by.is_empty() {
            f.write_str(delim)?;
            delim = " ";
            write!(f, "ORDER BY {}", display_comma_separated(&self.order_by))?;
        }
        if let Some(window_frame) = &self.window_frame {
            f.write_str(delim)?;
            write!(f, "{window_frame}")?;
        }
        Ok(())
    }
}

/// A window frame clause.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowFrame {
    /// `ROWS`, `RANGE` or `GROUPS`.
    pub units: WindowFrameUnits,
    /// The start bound.
    pub start_bound: WindowFrameBound,
    /// The end bound; present iff the `BETWEEN ... AND` form was used.
    pub end_bound: Option<WindowFrameBound>,
}

impl fmt::Display for WindowFrame {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.end_bound {
            Some(end_bound) => write!(
                f,
                "{} BETWEEN {} AND {end_bound}",
                self.units, self.start_bound
            ),
            None => write!(f, "{} {}", self.units, self.start_bound),
        }
    }
}

/// The unit of a window frame.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum WindowFrameUnits {
    Rows,
    Range,
    Groups,
}

impl fmt::Display for WindowFrameUnits {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            WindowFrameUnits::Rows => "ROWS",
            WindowFrameUnits::Range => "RANGE",
            WindowFrameUnits::Groups => "GROUPS",
        })
    }
}

/// One bound of a window frame.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WindowFrameBound {
    /// `CURRENT ROW`
    CurrentRow,
    /// `<N> PRECEDING` or `UNBOUNDED PRECEDING`
    Preceding(Option<Box<Expr>>),
    /// `<N> FOLLOWING` or `UNBOUNDED FOLLOWING`
    Following(Option<Box<Expr>>),
}

impl fmt::Display for WindowFrameBound {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            WindowFrameBound::CurrentRow => f.write_str("CURRENT ROW"),
            WindowFrameBound::Preceding(None) => f.write_str("UNBOUNDED PRECEDING"),
            WindowFrameBound::Following(None) => f.write_str("UNBOUNDED FOLLOWING"),
            WindowFrameBound::Preceding(Some(n)) => write!(f, "{n} PRECEDING"),
            WindowFrameBound::Following(Some(n)) => write!(f, "{n} FOLLOWING"),
        }
    }
}
