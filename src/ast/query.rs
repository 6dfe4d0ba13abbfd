#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, string::String, vec::Vec};
use core::fmt;

use crate::ast::{
    display_comma_separated, display_separated, DataType, Expr, FunctionArg, Ident, ObjectName,
    Value, WindowSpec,
};

/// The most complete variant of a `SELECT` query expression, optionally
/// including `WITH`, `UNION` / other set operations, and `ORDER BY`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Query {
    /// `WITH` (common table expressions, or CTEs)
    pub with: Option<With>,
    /// `SELECT` or `UNION` / `EXCEPT` / `INTERSECT`
    pub body: Box<SetExpr>,
    /// `ORDER BY <expr> [ ASC | DESC ] [ NULLS { FIRST | LAST } ] [, ...]`
    pub order_by: Vec<OrderByExpr>,
    /// `LIMIT <N>`; `LIMIT ALL` parses as no limit
    pub limit: Option<Expr>,
    /// `OFFSET <N> [ { ROW | ROWS } ]`
    pub offset: Option<Offset>,
    /// `FETCH { FIRST | NEXT } <N> [ PERCENT ] { ROW | ROWS } { ONLY | WITH TIES }`
    pub fetch: Option<Fetch>,
    /// `FOR { UPDATE | SHARE } [ OF table ] [ NOWAIT | SKIP LOCKED ]`
    pub locks: Vec<LockClause>,
    /// MS SQL `FOR { BROWSE | JSON ... | XML ... }`
    pub for_clause: Option<ForClause>,
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(with) = &self.with {
            write!(f, "{with} ")?;
        }
        write!(f, "{}", self.body)?;
        if !self.order_by.is_empty() {
            write!(f, " ORDER BY {}", display_comma_separated(&self.order_by))?;
        }
        if let Some(limit) = &self.limit {
            write!(f, " LIMIT {limit}")?;
        }
        if let Some(offset) = &self.offset {
            write!(f, " {offset}")?;
        }
        if let Some(fetch) = &self.fetch {
            write!(f, " {fetch}")?;
        }
        for lock in &self.locks {
            write!(f, " {lock}")?;
        }
        if let Some(for_clause) = &self.for_clause {
            write!(f, " {for_clause}")?;
        }
        Ok(())
    }
}

/// A node in a tree, representing a "query body" expression, roughly:
/// `SELECT ... [ {UNION|EXCEPT|INTERSECT} SELECT ...]`
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SetExpr {
    /// Restricted SELECT .. FROM .. HAVING (no ORDER BY or set operations)
    Select(Box<Select>),
    /// Parenthesized SELECT subquery, which may include more set operations
    /// in its body and an optional ORDER BY / LIMIT.
    Query(Box<Query>),
    /// UNION/EXCEPT/INTERSECT of two queries
    SetOperation {
        /// The operator.
        op: SetOperator,
        /// `ALL`, `DISTINCT`, `BY NAME` or nothing.
        set_quantifier: SetQuantifier,
        /// Left operand.
        left: Box<SetExpr>,
        /// Right operand.
        right: Box<SetExpr>,
    },
    /// A `VALUES` list.
    Values(Values),
    /// `TABLE <name>`
    Table(ObjectName),
}

impl fmt::Display for SetExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SetExpr::Select(s) => write!(f, "{s}"),
            SetExpr::Query(q) => write!(f, "({q})"),
            SetExpr::Values(v) => write!(f, "{v}"),
            SetExpr::Table(t) => write!(f, "TABLE {t}"),
            SetExpr::SetOperation {
                left,
                right,
                op,
                set_quantifier,
            } => {
                write!(f, "{left} {op}")?;
                match set_quantifier {
                    SetQuantifier::None => {}
                    _ => write!(f, " {set_quantifier}")?,
                }
                write!(f, " {right}")
            }
        }
    }
}

/// A set operator.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum SetOperator {
    Union,
    Except,
    Intersect,
}

impl fmt::Display for SetOperator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            SetOperator::Union => "UNION",
            SetOperator::Except => "EXCEPT",
            SetOperator::Intersect => "INTERSECT",
        })
    }
}

/// The quantifier of a set operation.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum SetQuantifier {
    All,
    Distinct,
    ByName,
    AllByName,
    DistinctByName,
    None,
}

impl fmt::Display for SetQuantifier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SetQuantifier::All => f.write_str("ALL"),
            SetQuantifier::Distinct => f.write_str("DISTINCT"),
            SetQuantifier::ByName => f.write_str("BY NAME"),
            SetQuantifier::AllByName => f.write_str("ALL BY NAME"),
            SetQuantifier::DistinctByName => f.write_str("DISTINCT BY NAME"),
            SetQuantifier::None => Ok(()),
        }
    }
}

/// A `VALUES` list.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Values {
    /// Was `ROW` spelled out before each row (MySQL)?
    pub explicit_row: bool,
    /// The rows.
    pub rows: Vec<Vec<Expr>>,
}

impl fmt::Display for Values {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("VALUES ")?;
        let prefix = if self.explicit_row { "ROW" } else { "" };
        let mut delim = "";
        for row in &self.rows {
            f.write_str(delim)?;
            delim = ", ";
            write!(f, "{prefix}({})", display_comma_separated(row))?;
        }
        Ok(())
    }
}

/// A restricted variant of `SELECT` (without CTEs/`ORDER BY`), which may
/// appear either as the only body item of a `Query`, or as an operand to a
/// set operation like `UNION`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Select {
    /// `DISTINCT` / `DISTINCT ON (...)`
    pub distinct: Option<Distinct>,
    /// Projection expressions
    pub projection: Vec<SelectItem>,
    /// `INTO [TEMPORARY] [UNLOGGED] [TABLE] <name>`
    pub into: Option<SelectInto>,
    /// `FROM`
    pub from: Vec<TableWithJoins>,
    /// `LATERAL VIEW` clauses (Hive)
    pub lateral_views: Vec<LateralView>,
    /// `WHERE`
    pub selection: Option<Expr>,
    /// `GROUP BY`
    pub group_by: Vec<Expr>,
    /// `CLUSTER BY` (Hive)
    pub cluster_by: Vec<Expr>,
    /// `DISTRIBUTE BY` (Hive)
    pub distribute_by: Vec<Expr>,
    /// `SORT BY` (Hive)
    pub sort_by: Vec<Expr>,
    /// `HAVING`
    pub having: Option<Expr>,
    /// `WINDOW name AS (...)` definitions
    pub named_window: Vec<NamedWindowDefinition>,
    /// `QUALIFY` (Snowflake)
    pub qualify: Option<Expr>,
    /// `CONNECT BY ... START WITH ...` (hierarchical queries)
    pub connect_by: Option<ConnectBy>,
    /// Whether the `WINDOW` clause preceded `QUALIFY` in the source; the
    /// serializer reproduces the original order.
    pub window_before_qualify: bool,
}

impl fmt::Display for Select {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("SELECT")?;
        if let Some(distinct) = &self.distinct {
            write!(f, " {distinct}")?;
        }
        write!(f, " {}", display_comma_separated(&self.projection))?;
        if let Some(into) = &self.into {
            write!(f, " {into}")?;
        }
        if !self.from.is_empty() {
            write!(f, " FROM {}", display_comma_separated(&self.from))?;
        }
        for lateral_view in &self.lateral_views {
            write!(f, "{lateral_view}")?;
        }
        if let Some(selection) = &self.selection {
            write!(f, " WHERE {selection}")?;
        }
        if !self.group_by.is_empty() {
            write!(f, " GROUP BY {}", display_comma_separated(&self.group_by))?;
        }
        if !self.cluster_by.is_empty() {
            write!(f, " CLUSTER BY {}", display_comma_separated(&self.cluster_by))?;
        }
        if !self.distribute_by.is_empty() {
            write!(
                f,
                " DISTRIBUTE BY {}",
                display_comma_separated(&self.distribute_by)
            )?;
        }
        if !self.sort_by.is_empty() {
            write!(f, " SORT BY {}", display_comma_separated(&self.sort_by))?;
        }
        if let Some(having) = &self.having {
            write!(f, " HAVING {having}")?;
        }
        if self.window_before_qualify {
            if !self.named_window.is_empty() {
                write!(f, " WINDOW {}", display_comma_separated(&self.named_window))?;
            }
            if let Some(qualify) = &self.qualify {
                write!(f, " QUALIFY {qualify}")?;
            }
        } else {
            if let Some(qualify) = &self.qualify {
                write!(f, " QUALIFY {qualify}")?;
            }
            if !self.named_window.is_empty() {
                write!(f, " WINDOW {}", display_comma_separated(&self.named_window))?;
            }
        }
        if let Some(connect_by) = &self.connect_by {
            write!(f, " {connect_by}")?;
        }
        Ok(())
    }
}

/// The duplicate treatment of a `SELECT`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Distinct {
    /// `DISTINCT`
    Distinct,
    /// `DISTINCT ON (col1, col2, ...)` (PostgreSQL)
    On(Vec<Expr>),
}

impl fmt::Display for Distinct {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Distinct::Distinct => f.write_str("DISTINCT"),
            Distinct::On(exprs) => write!(f, "DISTINCT ON ({})", display_comma_separated(exprs)),
        }
    }
}

/// `CONNECT BY ... START WITH ...`; both source orders normalize to
/// `START WITH` first.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConnectBy {
    /// `START WITH <condition>`
    pub condition: Box<Expr>,
    /// `CONNECT BY <relationship> [, ...]`
    pub relationships: Vec<Expr>,
}

impl fmt::Display for ConnectBy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "START WITH {} CONNECT BY {}",
            self.condition,
            display_comma_separated(&self.relationships)
        )
    }
}

/// A hive `LATERAL VIEW [OUTER] <expr> <name> [AS col, ...]`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LateralView {
    /// The expanding expression, e.g. `explode(col)`.
    pub lateral_view: Expr,
    /// The view name.
    pub lateral_view_name: ObjectName,
    /// Column aliases.
    pub lateral_col_alias: Vec<Ident>,
    /// `OUTER` was spelled out.
    pub outer: bool,
}

impl fmt::Display for LateralView {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            " LATERAL VIEW{outer} {} {}",
            self.lateral_view,
            self.lateral_view_name,
            outer = if self.outer { " OUTER" } else { "" }
        )?;
        if !self.lateral_col_alias.is_empty() {
            write!(f, " AS {}", display_comma_separated(&self.lateral_col_alias))?;
        }
        Ok(())
    }
}

/// One `WINDOW name AS ...` definition.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NamedWindowDefinition(pub Ident, pub NamedWindowExpr);

impl fmt::Display for NamedWindowDefinition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} AS {}", self.0, self.1)
    }
}

/// What a named window is defined as.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NamedWindowExpr {
    /// `WINDOW w AS other_window`
    NamedWindow(Ident),
    /// `WINDOW w AS (partition/order/frame)`
    WindowSpec(WindowSpec),
}

impl fmt::Display for NamedWindowExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NamedWindowExpr::NamedWindow(name) => write!(f, "{name}"),
            NamedWindowExpr::WindowSpec(spec) => write!(f, "({spec})"),
        }
    }
}

/// One item of the comma-separated list following `SELECT`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SelectItem {
    /// Any expression, not followed by `[ AS ] alias`
    UnnamedExpr(Expr),
    /// An expression, followed by `[ AS ] alias`
    ExprWithAlias {
        /// The expression.
        expr: Expr,
        /// The alias.
        alias: Ident,
    },
    /// `alias.*` or even `schema.table.*`, with optional modifiers
    QualifiedWildcard(ObjectName, WildcardAdditionalOptions),
    /// An unqualified `*`, with optional modifiers
    Wildcard(WildcardAdditionalOptions),
}

impl fmt::Display for SelectItem {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SelectItem::UnnamedExpr(expr) => write!(f, "{expr}"),
            SelectItem::ExprWithAlias { expr, alias } => write!(f, "{expr} AS {alias}"),
            SelectItem::QualifiedWildcard(prefix, options) => write!(f, "{prefix}.*{options}"),
            SelectItem::Wildcard(options) => write!(f, "*{options}"),
        }
    }
}

/// `EXCEPT` / `REPLACE` modifiers after a wildcard (dialect-gated).
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WildcardAdditionalOptions {
    /// `EXCEPT (col1, col2, ...)`
    pub opt_except: Option<ExceptSelectItem>,
    /// `REPLACE (expr AS col1, ...)`
    pub opt_replace: Option<ReplaceSelectItem>,
}

impl fmt::Display for WildcardAdditionalOptions {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(except) = &self.opt_except {
            write!(f, " {except}")?;
        }
        if let Some(replace) = &self.opt_replace {
            write!(f, " {replace}")?;
        }
        Ok(())
    }
}

/// `EXCEPT (col1, col2, ...)` after a wildcard.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExceptSelectItem {
    /// The excluded columns; never empty.
    pub columns: Vec<Ident>,
}

impl fmt::Display for ExceptSelectItem {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "EXCEPT ({})", display_comma_separated(&self.columns))
    }
}

/// `REPLACE (expr AS col1, ...)` after a wildcard.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReplaceSelectItem {
    /// The replacement elements.
    pub items: Vec<ReplaceSelectElement>,
}

impl fmt::Display for ReplaceSelectItem {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "REPLACE ({})", display_comma_separated(&self.items))
    }
}

/// One `expr AS col` element of a `REPLACE` wildcard modifier.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReplaceSelectElement {
    /// The replacement expression.
    pub expr: Expr,
    /// The column it replaces.
    pub column_name: Ident,
}

impl fmt::Display for ReplaceSelectElement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} AS {}", self.expr, self.column_name)
    }
}

/// `INTO [TEMPORARY] [UNLOGGED] [TABLE] <name>` inside a `SELECT`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectInto {
    /// `TEMPORARY`
    pub temporary: bool,
    /// `UNLOGGED`
    pub unlogged: bool,
    /// `TABLE` was spelled out.
    pub table: bool,
    /// The destination name.
    pub name: ObjectName,
}

impl fmt::Display for SelectInto {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("INTO")?;
        if self.temporary {
            f.write_str(" TEMPORARY")?;
        }
        if self.unlogged {
            f.write_str(" UNLOGGED")?;
        }
        if self.table {
            f.write_str(" TABLE")?;
        }
        write!(f, " {}", self.name)
    }
}

/// An expression with an optional alias, as in `PIVOT` aggregate lists.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExprWithAlias {
    /// The expression.
    pub expr: Expr,
    /// The alias.
    pub alias: Option<Ident>,
}

impl fmt::Display for ExprWithAlias {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.expr)?;
        if let Some(alias) = &self.alias {
            write!(f, " AS {alias}")?;
        }
        Ok(())
    }
}

/// `WITH` clause.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct With {
    /// `WITH RECURSIVE`
    pub recursive: bool,
    /// The CTEs.
    pub cte_tables: Vec<Cte>,
}

impl fmt::Display for With {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "WITH {}{}",
            if self.recursive { "RECURSIVE " } else { "" },
            display_comma_separated(&self.cte_tables)
        )
    }
}

/// A single CTE (used after `WITH`): `alias [(col1, col2, ...)] AS (query)`.
/// The names in the column list before `AS`, when specified, replace the
/// names of the columns returned by the query. The parser does not validate
/// that the number of columns matches.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cte {
    /// The alias (name and optional column list).
    pub alias: TableAlias,
    /// The CTE body.
    pub query: Box<Query>,
    /// `FROM <ident>` after the CTE body (MSSQL quirk).
    pub from: Option<Ident>,
}

impl fmt::Display for Cte {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} AS ({})", self.alias, self.query)?;
        if let Some(from) = &self.from {
            write!(f, " FROM {from}")?;
        }
        Ok(())
    }
}

/// A table name or a derived subquery with an optional alias, plus the
/// specialized relation forms.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TableFactor {
    /// A plain relation, optionally with table-valued-function arguments.
    Table {
        /// The relation name.
        name: ObjectName,
        /// The alias.
        alias: Option<TableAlias>,
        /// Arguments of a table-valued function, as supported by PostgreSQL
        /// and MSSQL.
        args: Option<Vec<FunctionArg>>,
        /// MSSQL-specific `WITH (...)` hints such as NOLOCK.
        with_hints: Vec<Expr>,
        /// MySQL partition selection: `FROM t PARTITION (p0, p1)`.
        partitions: Vec<Ident>,
    },
    /// A parenthesized subquery, optionally `LATERAL`.
    Derived {
        /// `LATERAL` was spelled out.
        lateral: bool,
        /// The subquery.
        subquery: Box<Query>,
        /// The alias.
        alias: Option<TableAlias>,
    },
    /// `TABLE(<expr>) [ AS <alias> ]`
    TableFunction {
        /// The wrapped expression.
        expr: Expr,
        /// The alias.
        alias: Option<TableAlias>,
    },
    /// A set-returning function call in `FROM`, e.g.
    /// `generate_series(1, 10)`.
    Function {
        /// `LATERAL` was spelled out.
        lateral: bool,
        /// The function name.
        name: ObjectName,
        /// The arguments.
        args: Vec<FunctionArg>,
        /// The alias.
        alias: Option<TableAlias>,
    },
    /// `UNNEST(expr[, ...]) [AS alias] [WITH OFFSET [AS name]]` (BigQuery)
    UnNest {
        /// The alias.
        alias: Option<TableAlias>,
        /// The array expressions.
        array_exprs: Vec<Expr>,
        /// `WITH OFFSET` was spelled out.
        with_offset: bool,
        /// `WITH OFFSET AS <name>`.
        with_offset_alias: Option<Ident>,
    },
    /// Represents a parenthesized table factor. The SQL spec only allows a
    /// join expression (`(foo <JOIN> bar [ <JOIN> baz ... ])`) to be nested,
    /// possibly several times.
    ///
    /// The parser may also accept non-standard nesting of bare tables for
    /// some dialects, but the information about such nesting is stripped
    /// from the AST.
    NestedJoin {
        /// The nested join.
        table_with_joins: Box<TableWithJoins>,
        /// The alias.
        alias: Option<TableAlias>,
    },
    /// `<table> PIVOT(<aggregates> FOR <col> IN (<values>)) [alias]`
    Pivot {
        /// The pivoted relation.
        table: Box<TableFactor>,
        /// The aggregate expressions.
        aggregate_functions: Vec<ExprWithAlias>,
        /// The `FOR` columns.
        value_column: Vec<Ident>,
        /// The `IN` list.
        value_source: Vec<ExprWithAlias>,
        /// The alias.
        alias: Option<TableAlias>,
    },
    /// `<table> UNPIVOT(<value> FOR <name> IN (<columns>)) [alias]`
    Unpivot {
        /// The unpivoted relation.
        table: Box<TableFactor>,
        /// The value column.
        value: Ident,
        /// The name column.
        name: Ident,
        /// The source columns.
        columns: Vec<Ident>,
        /// The alias.
        alias: Option<TableAlias>,
    },
    /// `<table> TABLESAMPLE [method] (<quantity> [ROWS | PERCENT])`
    TableSample {
        /// The sampled relation.
        table: Box<TableFactor>,
        /// `BERNOULLI`, `SYSTEM`, or a custom method.
        method: Option<Ident>,
        /// The sample quantity.
        quantity: Box<Expr>,
        /// The quantity unit.
        unit: Option<TableSampleUnit>,
    },
    /// `<table> MATCH_RECOGNIZE(...)` (SQL:2016 row-pattern matching)
    MatchRecognize(Box<MatchRecognize>),
    /// `XMLTABLE(<row expr> PASSING <doc> COLUMNS ...)`
    XmlTable {
        /// The row XPath expression.
        row_expression: Box<Expr>,
        /// `PASSING <document>`.
        passing: Box<Expr>,
        /// The produced columns.
        columns: Vec<XmlTableColumn>,
        /// The alias.
        alias: Option<TableAlias>,
    },
    /// `SEMANTIC_VIEW(<name> [METRICS ...] [DIMENSIONS ...])` (Snowflake)
    SemanticView {
        /// The semantic view name.
        name: ObjectName,
        /// `METRICS` items.
        metrics: Vec<Expr>,
        /// `DIMENSIONS` items.
        dimensions: Vec<Expr>,
        /// The alias.
        alias: Option<TableAlias>,
    },
    /// `OPENJSON(<json expr> [, <path>]) [WITH (...)]` (MSSQL)
    OpenJson {
        /// The JSON document expression.
        json_expr: Box<Expr>,
        /// The optional path.
        json_path: Option<Value>,
        /// The `WITH` column definitions.
        columns: Vec<OpenJsonTableColumn>,
        /// The alias.
        alias: Option<TableAlias>,
    },
    /// `JSON_TABLE(<json expr>, <path> COLUMNS (...))`
    JsonTable {
        /// The JSON document expression.
        json_expr: Box<Expr>,
        /// The row path.
        json_path: Value,
        /// The produced columns.
        columns: Vec<JsonTableColumn>,
        /// The alias.
        alias: Option<TableAlias>,
    },
}

impl fmt::Display for TableFactor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TableFactor::Table {
                name,
                alias,
                args,
                with_hints,
                partitions,
            } => {
                write!(f, "{name}")?;
                if !partitions.is_empty() {
                    write!(f, " PARTITION ({})", display_comma_separated(partitions))?;
                }
                if let Some(args) = args {
                    write!(f, "({})", display_comma_separated(args))?;
                }
                if let Some(alias) = alias {
                    write!(f, " AS {alias}")?;
                }
                if !with_hints.is_empty() {
                    write!(f, " WITH ({})", display_comma_separated(with_hints))?;
                }
                Ok(())
            }
            TableFactor::Derived {
                lateral,
                subquery,
                alias,
            } => {
                if *lateral {
                    f.write_str("LATERAL ")?;
                }
                write!(f, "({subquery})")?;
                if let Some(alias) = alias {
                    write!(f, " AS {alias}")?;
                }
                Ok(())
            }
            TableFactor::TableFunction { expr, alias } => {
                write!(f, "TABLE({expr})")?;
                if let Some(alias) = alias {
                    write!(f, " AS {alias}")?;
                }
                Ok(())
            }
            TableFactor::Function {
                lateral,
                name,
                args,
                alias,
            } => {
                if *lateral {
                    f.write_str("LATERAL ")?;
                }
                write!(f, "{name}({})", display_comma_separated(args))?;
                if let Some(alias) = alias {
                    write!(f, " AS {alias}")?;
                }
                Ok(())
            }
            TableFactor::UnNest {
                alias,
                array_exprs,
                with_offset,
                with_offset_alias,
            } => {
                write!(f, "UNNEST({})", display_comma_separated(array_exprs))?;
                if let Some(alias) = alias {
                    write!(f, " AS {alias}")?;
                }
                if *with_offset {
                    f.write_str(" WITH OFFSET")?;
                }
                if let Some(with_offset_alias) = with_offset_alias {
                    write!(f, " AS {with_offset_alias}")?;
                }
                Ok(())
            }
            TableFactor::NestedJoin {
                table_with_joins,
                alias,
            } => {
                write!(f, "({table_with_joins})")?;
                if let Some(alias) = alias {
                    write!(f, " AS {alias}")?;
                }
                Ok(())
            }
            TableFactor::Pivot {
                table,
                aggregate_functions,
                value_column,
                value_source,
                alias,
            } => {
                write!(
                    f,
                    "{table} PIVOT({} FOR {} IN ({}))",
                    display_comma_separated(aggregate_functions),
                    display_separated(value_column, "."),
                    display_comma_separated(value_source)
                )?;
                if let Some(alias) = alias {
                    write!(f, " AS {alias}")?;
                }
                Ok(())
            }
            TableFactor::Unpivot {
                table,
                value,
                name,
                columns,
                alias,
            } => {
                write!(
                    f,
                    "{table} UNPIVOT({value} FOR {name} IN ({}))",
                    display_comma_separated(columns)
                )?;
                if let Some(alias) = alias {
                    write!(f, " AS {alias}")?;
                }
                Ok(())
            }
            TableFactor::TableSample {
                table,
                method,
                quantity,
                unit,
            } => {
                write!(f, "{table} TABLESAMPLE")?;
                if let Some(method) = method {
                    write!(f, " {method}")?;
                }
                write!(f, " ({quantity}")?;
                if let Some(unit) = unit {
                    write!(f, " {unit}")?;
                }
                f.write_str(")")
            }
            TableFactor::MatchRecognize(mr) => write!(f, "{mr}"),
            TableFactor::XmlTable {
                row_expression,
                passing,
                columns,
                alias,
            } => {
                write!(
                    f,
                    "XMLTABLE({row_expression} PASSING {passing} COLUMNS {})",
                    display_comma_separated(columns)
                )?;
                if let Some(alias) = alias {
                    write!(f, " AS {alias}")?;
                }
                Ok(())
            }
            TableFactor::SemanticView {
                name,
                metrics,
                dimensions,
                alias,
            } => {
                write!(f, "SEMANTIC_VIEW({name}")?;
                if !metrics.is_empty() {
                    write!(f, " METRICS {}", display_comma_separated(metrics))?;
                }
                if !dimensions.is_empty() {
                    write!(f, " DIMENSIONS {}", display_comma_separated(dimensions))?;
                }
                f.write_str(")")?;
                if let Some(alias) = alias {
                    write!(f, " AS {alias}")?;
                }
                Ok(())
            }
            TableFactor::OpenJson {
                json_expr,
                json_path,
                columns,
                alias,
            } => {
                write!(f, "OPENJSON({json_expr}")?;
                if let Some(json_path) = json_path {
                    write!(f, ", {json_path}")?;
                }
                f.write_str(")")?;
                if !columns.is_empty() {
                    write!(f, " WITH ({})", display_comma_separated(columns))?;
                }
                if let Some(alias) = alias {
                    write!(f, " AS {alias}")?;
                }
                Ok(())
            }
            TableFactor::JsonTable {
                json_expr,
                json_path,
                columns,
                alias,
            } => {
                write!(
                    f,
                    "JSON_TABLE({json_expr}, {json_path} COLUMNS ({}))",
                    display_comma_separated(columns)
                )?;
                if let Some(alias) = alias {
                    write!(f, " AS {alias}")?;
                }
                Ok(())
            }
        }
    }
}

/// The unit of a `TABLESAMPLE` quantity.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum TableSampleUnit {
    Rows,
    Percent,
}

impl fmt::Display for TableSampleUnit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            TableSampleUnit::Rows => "ROWS",
            TableSampleUnit::Percent => "PERCENT",
        })
    }
}

/// One column of an `XMLTABLE`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct XmlTableColumn {
    /// The column name.
    pub name: Ident,
    /// The column type.
    pub r#type: DataType,
    /// `PATH '<xpath>'`.
    pub path: Option<Value>,
}

impl fmt::Display for XmlTableColumn {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.name, self.r#type)?;
        if let Some(path) = &self.path {
            write!(f, " PATH {path}")?;
        }
        Ok(())
    }
}

/// One column of an `OPENJSON WITH` clause.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OpenJsonTableColumn {
    /// The column name.
    pub name: Ident,
    /// The column type.
    pub r#type: DataType,
    /// The JSON path.
    pub path: Option<Value>,
    /// `AS JSON` suffix.
    pub as_json: bool,
}

impl fmt::Display for OpenJsonTableColumn {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.name, self.r#type)?;
        if let Some(path) = &self.path {
            write!(f, " {path}")?;
        }
        if self.as_json {
            f.write_str(" AS JSON")?;
        }
        Ok(())
    }
}

/// One column of a `JSON_TABLE COLUMNS` clause.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JsonTableColumn {
    /// The column name.
    pub name: Ident,
    /// The column type; `None` for `FOR ORDINALITY` columns.
    pub r#type: Option<DataType>,
    /// `PATH '<json path>'`.
    pub path: Option<Value>,
    /// `EXISTS` between the type and `PATH`.
    pub exists: bool,
    /// `FOR ORDINALITY`.
    pub for_ordinality: bool,
}

impl fmt::Display for JsonTableColumn {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if self.for_ordinality {
            return f.write_str(" FOR ORDINALITY");
        }
        if let Some(r#type) = &self.r#type {
            write!(f, " {type}")?;
        }
        if self.exists {
            f.write_str(" EXISTS")?;
        }
        if let Some(path) = &self.path {
            write!(f, " PATH {path}")?;
        }
        Ok(())
    }
}

/// `MATCH_RECOGNIZE(...)` applied to a relation.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchRecognize {
    /// The matched relation.
    pub table: TableFactor,
    /// `PARTITION BY`.
    pub partition_by: Vec<Expr>,
    /// `ORDER BY`.
    pub order_by: Vec<OrderByExpr>,
    /// `MEASURES`.
    pub measures: Vec<Measure>,
    /// `ONE ROW PER MATCH` / `ALL ROWS PER MATCH`.
    pub rows_per_match: Option<RowsPerMatch>,
    /// `AFTER MATCH SKIP ...`.
    pub after_match_skip: Option<AfterMatchSkip>,
    /// `PATTERN (...)`.
    pub pattern: MatchRecognizePattern,
    /// `DEFINE sym AS expr [, ...]`.
    pub symbols: Vec<SymbolDefinition>,
    /// The alias.
    pub alias: Option<TableAlias>,
}

impl fmt::Display for MatchRecognize {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} MATCH_RECOGNIZE(", self.table)?;
        let mut delim = "";
        if !self.partition_by.is_empty() {
            write!(f, "PARTITION BY {}", display_comma_separated(&self.partition_by))?;
            delim = " ";
        }
        if !self.order_by.is_empty() {
            write!(
                f,
                "{delim}ORDER BY {}",
                display_comma_separated(&self.order_by)
            )?;
            delim = " ";
        }
        if !self.measures.is_empty() {
            write!(
                f,
                "{delim}MEASURES {}",
                display_comma_separated(&self.measures)
            )?;
            delim = " ";
        }
        if let Some(rows_per_match) = &self.rows_per_match {
            write!(f, "{delim}{rows_per_match}")?;
            delim = " ";
        }
        if let Some(after_match_skip) = &self.after_match_skip {
            write!(f, "{delim}{after_match_skip}")?;
            delim = " ";
        }
        write!(f, "{delim}PATTERN ({})", self.pattern)?;
        write!(f, " DEFINE {}", display_comma_separated(&self.symbols))?;
        f.write_str(")")?;
        if let Some(alias) = &self.alias {
            write!(f, " AS {alias}")?;
        }
        Ok(())
    }
}

/// A `MEASURES` element: `expr AS alias`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Measure {
    /// The measured expression.
    pub expr: Expr,
    /// Its alias.
    pub alias: Ident,
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} AS {}", self.expr, self.alias)
    }
}

/// `ONE ROW PER MATCH` / `ALL ROWS PER MATCH`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum RowsPerMatch {
    OneRow,
    AllRows,
}

impl fmt::Display for RowsPerMatch {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            RowsPerMatch::OneRow => "ONE ROW PER MATCH",
            RowsPerMatch::AllRows => "ALL ROWS PER MATCH",
        })
    }
}

/// `AFTER MATCH SKIP ...`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AfterMatchSkip {
    /// `PAST LAST ROW`
    PastLastRow,
    /// `TO NEXT ROW`
    ToNextRow,
    /// `TO FIRST <symbol>`
    ToFirst(Ident),
    /// `TO LAST <symbol>`
    ToLast(Ident),
}

impl fmt::Display for AfterMatchSkip {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("AFTER MATCH SKIP ")?;
        match self {
            AfterMatchSkip::PastLastRow => f.write_str("PAST LAST ROW"),
            AfterMatchSkip::ToNextRow => f.write_str("TO NEXT ROW"),
            AfterMatchSkip::ToFirst(symbol) => write!(f, "TO FIRST {symbol}"),
            AfterMatchSkip::ToLast(symbol) => write!(f, "TO LAST {symbol}"),
        }
    }
}

/// The row-pattern mini-regex of `MATCH_RECOGNIZE`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchRecognizePattern {
    /// A named symbol or an anchor.
    Symbol(MatchRecognizeSymbol),
    /// `{- pattern -}` exclusion.
    Exclude(Box<MatchRecognizePattern>),
    /// `PERMUTE(sym, ...)`.
    Permute(Vec<MatchRecognizeSymbol>),
    /// Juxtaposition, e.g. `A B+ C`.
    Concat(Vec<MatchRecognizePattern>),
    /// `( pattern )`.
    Group(Box<MatchRecognizePattern>),
    /// `pat1 | pat2 | ...`.
    Alternation(Vec<MatchRecognizePattern>),
    /// `pattern <quantifier>`.
    Repetition(Box<MatchRecognizePattern>, RepetitionQuantifier),
}

impl fmt::Display for MatchRecognizePattern {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MatchRecognizePattern::Symbol(symbol) => write!(f, "{symbol}"),
            MatchRecognizePattern::Exclude(pattern) => write!(f, "{{- {pattern} -}}"),
            MatchRecognizePattern::Permute(symbols) => {
                write!(f, "PERMUTE({})", display_comma_separated(symbols))
            }
            MatchRecognizePattern::Concat(patterns) => {
                write!(f, "{}", display_separated(patterns, " "))
            }
            MatchRecognizePattern::Group(pattern) => write!(f, "({pattern})"),
            MatchRecognizePattern::Alternation(patterns) => {
                write!(f, "{}", display_separated(patterns, " | "))
            }
            MatchRecognizePattern::Repetition(pattern, quantifier) => {
                write!(f, "{pattern}{quantifier}")
            }
        }
    }
}

/// A pattern symbol or anchor.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchRecognizeSymbol {
    /// A symbol defined in `DEFINE`.
    Named(Ident),
    /// The `^` start anchor.
    Start,
    /// The `$` end anchor.
    End,
}

impl fmt::Display for MatchRecognizeSymbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MatchRecognizeSymbol::Named(symbol) => write!(f, "{symbol}"),
            MatchRecognizeSymbol::Start => f.write_str("^"),
            MatchRecognizeSymbol::End => f.write_str("$"),
        }
    }
}

/// A postfix repetition quantifier, optionally reluctant (`*?`).
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RepetitionQuantifier {
    /// The base quantifier.
    pub kind: RepetitionKind,
    /// Trailing `?`.
    pub reluctant: bool,
}

impl fmt::Display for RepetitionQuantifier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if self.reluctant {
            f.write_str("?")?;
        }
        Ok(())
    }
}

/// The base repetition quantifiers.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RepetitionKind {
    /// `*`
    ZeroOrMore,
    /// `+`
    OneOrMore,
    /// `?`
    AtMostOne,
    /// `{n}`
    Exactly(u32),
    /// `{n,}`
    AtLeast(u32),
    /// `{,m}`
    AtMost(u32),
    /// `{n,m}`
    Range(u32, u32),
}

impl fmt::Display for RepetitionKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RepetitionKind::ZeroOrMore => f.write_str("*"),
            RepetitionKind::OneOrMore => f.write_str("+"),
            RepetitionKind::AtMostOne => f.write_str("?"),
            RepetitionKind::Exactly(n) => write!(f, "{{{n}}}"),
            RepetitionKind::AtLeast(n) => write!(f, "{{{n},}}"),
            RepetitionKind::AtMost(m) => write!(f, "{{,{m}}}"),
            RepetitionKind::Range(n, m) => write!(f, "{{{n},{m}}}"),
        }
    }
}

/// A `DEFINE` element: `symbol AS expr`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SymbolDefinition {
    /// The defined symbol.
    pub symbol: Ident,
    /// Its defining condition.
    pub definition: Expr,
}

impl fmt::Display for SymbolDefinition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} AS {}", self.symbol, self.definition)
    }
}

/// An alias after a table factor: `name [ (col1, col2, ...) ]`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableAlias {
    /// The alias name.
    pub name: Ident,
    /// Optional column aliases.
    pub columns: Vec<Ident>,
}

impl fmt::Display for TableAlias {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.columns.is_empty() {
            write!(f, " ({})", display_comma_separated(&self.columns))?;
        }
        Ok(())
    }
}

/// A relation and the joins hanging off of it.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableWithJoins {
    /// The leftmost relation.
    pub relation: TableFactor,
    /// The chained joins.
    pub joins: Vec<Join>,
}

impl fmt::Display for TableWithJoins {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.relation)?;
        for join in &self.joins {
            write!(f, "{join}")?;
        }
        Ok(())
    }
}

/// A single join.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Join {
    /// The joined relation.
    pub relation: TableFactor,
    /// ClickHouse `GLOBAL` join prefix.
    pub global: bool,
    /// The join operator and constraint.
    pub join_operator: JoinOperator,
}

impl fmt::Display for Join {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn prefix(constraint: &JoinConstraint) -> &'static str {
            match constraint {
                JoinConstraint::Natural => "NATURAL ",
                _ => "",
            }
        }
        fn suffix(constraint: &JoinConstraint) -> impl fmt::Display + '_ {
            struct Suffix<'a>(&'a JoinConstraint);
            impl fmt::Display for Suffix<'_> {
                fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                    match self.0 {
                        JoinConstraint::On(expr) => write!(f, " ON {expr}"),
                        JoinConstraint::Using(attrs) => {
                            write!(f, " USING({})", display_comma_separated(attrs))
                        }
                        _ => Ok(()),
                    }
                }
            }
            Suffix(constraint)
        }
        if self.global {
            f.write_str(" GLOBAL")?;
        }
        match &self.join_operator {
            JoinOperator::Inner(constraint) => write!(
                f,
                " {}JOIN {}{}",
                prefix(constraint),
                self.relation,
                suffix(constraint)
            ),
            JoinOperator::LeftOuter(constraint) => write!(
                f,
                " {}LEFT JOIN {}{}",
                prefix(constraint),
                self.relation,
                suffix(constraint)
            ),
            JoinOperator::RightOuter(constraint) => write!(
                f,
                " {}RIGHT JOIN {}{}",
                prefix(constraint),
                self.relation,
                suffix(constraint)
            ),
            JoinOperator::FullOuter(constraint) => write!(
                f,
                " {}FULL JOIN {}{}",
                prefix(constraint),
                self.relation,
                suffix(constraint)
            ),
            JoinOperator::CrossJoin => write!(f, " CROSS JOIN {}", self.relation),
            JoinOperator::Semi(constraint) => write!(
                f,
                " {}SEMI JOIN {}{}",
                prefix(constraint),
                self.relation,
                suffix(constraint)
            ),
            JoinOperator::LeftSemi(constraint) => write!(
                f,
                " {}LEFT SEMI JOIN {}{}",
                prefix(constraint),
                self.relation,
                suffix(constraint)
            ),
            JoinOperator::RightSemi(constraint) => write!(
                f,
                " {}RIGHT SEMI JOIN {}{}",
                prefix(constraint),
                self.relation,
                suffix(constraint)
            ),
            JoinOperator::Anti(constraint) => write!(
                f,
                " {}ANTI JOIN {}{}",
                prefix(constraint),
                self.relation,
                suffix(constraint)
            ),
            JoinOperator::LeftAnti(constraint) => write!(
                f,
                " {}LEFT ANTI JOIN {}{}",
                prefix(constraint),
                self.relation,
                suffix(constraint)
            ),
            JoinOperator::RightAnti(constraint) => write!(
                f,
                " {}RIGHT ANTI JOIN {}{}",
                prefix(constraint),
                self.relation,
                suffix(constraint)
            ),
            JoinOperator::StraightJoin(constraint) => write!(
                f,
                " STRAIGHT_JOIN {}{}",
                self.relation,
                suffix(constraint)
            ),
        }
    }
}

/// The operator of a join.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum JoinOperator {
    Inner(JoinConstraint),
    LeftOuter(JoinConstraint),
    RightOuter(JoinConstraint),
    FullOuter(JoinConstraint),
    CrossJoin,
    Semi(JoinConstraint),
    LeftSemi(JoinConstraint),
    RightSemi(JoinConstraint),
    Anti(JoinConstraint),
    LeftAnti(JoinConstraint),
    RightAnti(JoinConstraint),
    StraightJoin(JoinConstraint),
}

/// The constraint of a join.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum JoinConstraint {
    On(Expr),
    Using(Vec<Ident>),
    Natural,
    None,
}

/// An `ORDER BY` element.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrderByExpr {
    /// The sort expression.
    pub expr: Expr,
    /// `ASC` (true) / `DESC` (false).
    pub asc: Option<bool>,
    /// `NULLS FIRST` (true) / `NULLS LAST` (false).
    pub nulls_first: Option<bool>,
}

impl fmt::Display for OrderByExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.expr)?;
        match self.asc {
            Some(true) => f.write_str(" ASC")?,
            Some(false) => f.write_str(" DESC")?,
            None => {}
        }
        match self.nulls_first {
            Some(true) => f.write_str(" NULLS FIRST")?,
            Some(false) => f.write_str(" NULLS LAST")?,
            None => {}
        }
        Ok(())
    }
}

/// An `OFFSET` clause.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Offset {
    /// The offset expression.
    pub value: Expr,
    /// The trailing `ROW`/`ROWS` keyword.
    pub rows: OffsetRows,
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "OFFSET {}{}", self.value, self.rows)
    }
}

/// The keyword after `OFFSET <number>`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OffsetRows {
    /// Omitting `ROW`/`ROWS` is non-standard MySQL quirk.
    None,
    /// `ROW`
    Row,
    /// `ROWS`
    Rows,
}

impl fmt::Display for OffsetRows {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OffsetRows::None => Ok(()),
            OffsetRows::Row => f.write_str(" ROW"),
            OffsetRows::Rows => f.write_str(" ROWS"),
        }
    }
}

/// A `FETCH FIRST` clause.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fetch {
    /// The row count; `None` means "FETCH FIRST ROW".
    pub quantity: Option<Expr>,
    /// `PERCENT` follows the quantity.
    pub percent: bool,
    /// `WITH TIES` instead of `ONLY`.
    pub with_ties: bool,
}

impl fmt::Display for Fetch {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let extension = if self.with_ties { "WITH TIES" } else { "ONLY" };
        if let Some(quantity) = &self.quantity {
            let percent = if self.percent { " PERCENT" } else { "" };
            write!(f, "FETCH FIRST {quantity}{percent} ROWS {extension}")
        } else {
            write!(f, "FETCH FIRST ROWS {extension}")
        }
    }
}

/// A `FOR { UPDATE | SHARE }` lock clause.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LockClause {
    /// `UPDATE` or `SHARE`.
    pub lock_type: LockType,
    /// `OF <table>`.
    pub of: Option<ObjectName>,
    /// `NOWAIT` or `SKIP LOCKED`.
    pub nonblock: Option<NonBlock>,
}

impl fmt::Display for LockClause {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "FOR {}", self.lock_type)?;
        if let Some(of) = &self.of {
            write!(f, " OF {of}")?;
        }
        if let Some(nonblock) = &self.nonblock {
            write!(f, " {nonblock}")?;
        }
        Ok(())
    }
}

/// The lock strength.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum LockType {
    Share,
    Update,
}

impl fmt::Display for LockType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            LockType::Share => "SHARE",
            LockType::Update => "UPDATE",
        })
    }
}

/// The blocking behavior of a lock clause.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum NonBlock {
    Nowait,
    SkipLocked,
}

impl fmt::Display for NonBlock {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            NonBlock::Nowait => "NOWAIT",
            NonBlock::SkipLocked => "SKIP LOCKED",
        })
    }
}

/// MS SQL `FOR` clause at the end of a query.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ForClause {
    /// `FOR BROWSE`
    Browse,
    /// `FOR JSON { AUTO | PATH } [, ROOT ('<root>')]`
    Json {
        /// `AUTO` vs `PATH`.
        auto: bool,
        /// `ROOT ('<root>')`.
        root: Option<String>,
    },
    /// `FOR XML { AUTO | RAW | PATH }`
    Xml {
        /// The mode keyword.
        mode: ForXmlMode,
    },
}

/// The mode of `FOR XML`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum ForXmlMode {
    Auto,
    Raw,
    Path,
}

impl fmt::Display for ForClause {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ForClause::Browse => f.write_str("FOR BROWSE"),
            ForClause::Json { auto, root } => {
                write!(f, "FOR JSON {}", if *auto { "AUTO" } else { "PATH" })?;
                if let Some(root) = root {
                    write!(f, ", ROOT ('{root}')")?;
                }
                Ok(())
            }
            ForClause::Xml { mode } => {
                write!(
                    f,
                    "FOR XML {}",
                    match mode {
                        ForXmlMode::Auto => "AUTO",
                        ForXmlMode::Raw => "RAW",
                        ForXmlMode::Path => "PATH",
                    }
                )
            }
        }
    }
}
