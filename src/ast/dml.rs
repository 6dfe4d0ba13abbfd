//! AST types specific to data manipulation statements.

#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, string::String, vec::Vec};
use core::fmt;

use crate::ast::{
    display_comma_separated, escape_single_quote_string, Expr, Ident, ObjectName, Query,
    SelectItem, TableFactor, TableWithJoins,
};

/// A `SET <column> = <value>` assignment, as used by UPDATE and by the
/// update arm of MERGE.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment {
    /// The assigned column (possibly compound).
    pub id: Vec<Ident>,
    /// The new value.
    pub value: Expr,
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} = {}",
            crate::ast::display_separated(&self.id, "."),
            self.value
        )
    }
}

/// The `INSERT INTO` statement.
///
/// ```txt
/// INSERT [ OVERWRITE ] INTO <table> [ (<columns>) ]
///     [ PARTITION (<exprs>) ]
///     { <query> | DEFAULT VALUES }
///     [ ON CONFLICT ... | ON DUPLICATE KEY UPDATE ... ]
///     [ RETURNING <items> ]
/// ```
#[doc(hidden)]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InsertStmt {
    /// MySQL `REPLACE INTO`.
    pub replace_into: bool,
    /// Hive `INSERT OVERWRITE TABLE`.
    pub overwrite: bool,
    /// `INTO` was spelled out (MySQL allows `INSERT <table>`).
    pub into: bool,
    /// Spelled `TABLE` after INTO/OVERWRITE (Hive).
    pub table: bool,
    pub table_name: ObjectName,
    pub columns: Vec<Ident>,
    /// Hive `PARTITION (...)`.
    pub partitioned: Option<Vec<Expr>>,
    /// Hive columns spelled after PARTITION.
    pub after_columns: Vec<Ident>,
    /// The inserted rows; `None` for `DEFAULT VALUES`.
    pub source: Option<Box<Query>>,
    pub on: Option<OnInsert>,
    pub returning: Option<Vec<SelectItem>>,
}

impl fmt::Display for InsertStmt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{verb} {act}{tbl}{name}",
            verb = if self.replace_into { "REPLACE" } else { "INSERT" },
            act = if self.overwrite {
                "OVERWRITE "
            } else if self.into {
                "INTO "
            } else {
                ""
            },
            tbl = if self.table { "TABLE " } else { "" },
            name = self.table_name,
        )?;
        if !self.columns.is_empty() {
            write!(f, " ({})", display_comma_separated(&self.columns))?;
        }
        if let Some(partitioned) = &self.partitioned {
            if !partitioned.is_empty() {
                write!(f, " PARTITION ({})", display_comma_separated(partitioned))?;
            }
        }
        if !self.after_columns.is_empty() {
            write!(f, " ({})", display_comma_separated(&self.after_columns))?;
        }
        match &self.source {
            Some(source) => write!(f, " {source}")?,
            None => f.write_str(" DEFAULT VALUES")?,
        }
        if let Some(on) = &self.on {
            write!(f, "{on}")?;
        }
        if let Some(returning) = &self.returning {
            write!(f, " RETURNING {}", display_comma_separated(returning))?;
        }
        Ok(())
    }
}

/// The conflict arm of an INSERT.
#[doc(hidden)]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OnInsert {
    /// MySQL `ON DUPLICATE KEY UPDATE <assignments>`
    DuplicateKeyUpdate(Vec<Assignment>),
    /// PostgreSQL/SQLite `ON CONFLICT ...`
    OnConflict(OnConflict),
}

impl fmt::Display for OnInsert {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OnInsert::DuplicateKeyUpdate(assignments) => write!(
                f,
                " ON DUPLICATE KEY UPDATE {}",
                display_comma_separated(assignments)
            ),
            OnInsert::OnConflict(on_conflict) => write!(f, "{on_conflict}"),
        }
    }
}

/// `ON CONFLICT [ (<columns>) ] DO { NOTHING | UPDATE SET ... [WHERE ...] }`
#[doc(hidden)]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OnConflict {
    pub conflict_target: Vec<Ident>,
    pub action: OnConflictAction,
}

/// The action of an `ON CONFLICT` clause.
#[doc(hidden)]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OnConflictAction {
    DoNothing,
    DoUpdate {
        assignments: Vec<Assignment>,
        selection: Option<Expr>,
    },
}

impl fmt::Display for OnConflict {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(" ON CONFLICT")?;
        if !self.conflict_target.is_empty() {
            write!(f, " ({})", display_comma_separated(&self.conflict_target))?;
        }
        match &self.action {
            OnConflictAction::DoNothing => f.write_str(" DO NOTHING"),
            OnConflictAction::DoUpdate {
                assignments,
                selection,
            } => {
                write!(f, " DO UPDATE SET {}", display_comma_separated(assignments))?;
                if let Some(selection) = selection {
                    write!(f, " WHERE {selection}")?;
                }
                Ok(())
            }
        }
    }
}

/// The `UPDATE` statement.
#[doc(hidden)]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UpdateStmt {
    pub table: TableWithJoins,
    pub assignments: Vec<Assignment>,
    pub from: Option<TableWithJoins>,
    pub selection: Option<Expr>,
    pub returning: Option<Vec<SelectItem>>,
}

impl fmt::Display for UpdateStmt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "UPDATE {} SET {}",
            self.table,
            display_comma_separated(&self.assignments)
        )?;
        if let Some(from) = &self.from {
            write!(f, " FROM {from}")?;
        }
        if let Some(selection) = &self.selection {
            write!(f, " WHERE {selection}")?;
        }
        if let Some(returning) = &self.returning {
            write!(f, " RETURNING {}", display_comma_separated(returning))?;
        }
        Ok(())
    }
}

/// The `DELETE` statement.
///
/// ```txt
/// DELETE [ <tables> ] FROM <relations>
///     [ USING <relations> ] [ WHERE <predicate> ] [ RETURNING <items> ]
/// ```
#[doc(hidden)]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeleteStmt {
    /// MySQL multi-table delete targets.
    pub tables: Vec<ObjectName>,
    pub from: Vec<TableWithJoins>,
    pub using: Option<Vec<TableWithJoins>>,
    pub selection: Option<Expr>,
    pub returning: Option<Vec<SelectItem>>,
}

impl fmt::Display for DeleteStmt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("DELETE ")?;
        if !self.tables.is_empty() {
            write!(f, "{} ", display_comma_separated(&self.tables))?;
        }
        write!(f, "FROM {}", display_comma_separated(&self.from))?;
        if let Some(using) = &self.using {
            write!(f, " USING {}", display_comma_separated(using))?;
        }
        if let Some(selection) = &self.selection {
            write!(f, " WHERE {selection}")?;
        }
        if let Some(returning) = &self.returning {
            write!(f, " RETURNING {}", display_comma_separated(returning))?;
        }
        Ok(())
    }
}

/// The `MERGE` statement.
#[doc(hidden)]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MergeStmt {
    /// `INTO` was spelled out.
    pub into: bool,
    /// The target relation.
    pub table: TableFactor,
    /// The source relation.
    pub source: TableFactor,
    /// The join predicate.
    pub on: Box<Expr>,
    /// The `WHEN` arms.
    pub clauses: Vec<MergeClause>,
}

impl fmt::Display for MergeStmt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "MERGE{int} {table} USING {source} ON {on}",
            int = if self.into { " INTO" } else { "" },
            table = self.table,
            source = self.source,
            on = self.on,
        )?;
        for clause in &self.clauses {
            write!(f, " {clause}")?;
        }
        Ok(())
    }
}

/// One `WHEN [NOT] MATCHED [AND <predicate>] THEN <action>` arm.
#[doc(hidden)]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MergeClause {
    pub matched: bool,
    pub predicate: Option<Expr>,
    pub action: MergeAction,
}

impl fmt::Display for MergeClause {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "WHEN {}MATCHED",
            if self.matched { "" } else { "NOT " }
        )?;
        if let Some(predicate) = &self.predicate {
            write!(f, " AND {predicate}")?;
        }
        write!(f, " THEN {}", self.action)
    }
}

/// The action of a MERGE arm.
#[doc(hidden)]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MergeAction {
    /// `UPDATE SET <assignments>`
    Update { assignments: Vec<Assignment> },
    /// `DELETE`
    Delete,
    /// `INSERT [ (<columns>) ] VALUES (<values>)`
    Insert {
        columns: Vec<Ident>,
        values: Vec<Expr>,
    },
}

impl fmt::Display for MergeAction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MergeAction::Update { assignments } => {
                write!(f, "UPDATE SET {}", display_comma_separated(assignments))
            }
            MergeAction::Delete => f.write_str("DELETE"),
            MergeAction::Insert { columns, values } => {
                f.write_str("INSERT")?;
                if !columns.is_empty() {
                    write!(f, " ({})", display_comma_separated(columns))?;
                }
                write!(f, " VALUES ({})", display_comma_separated(values))
            }
        }
    }
}

/// The source or destination of a `COPY`.
#[doc(hidden)]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CopyTarget {
    Stdin,
    Stdout,
    File { filename: String },
    Program { command: String },
}

impl fmt::Display for CopyTarget {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CopyTarget::Stdin => f.write_str("STDIN"),
            CopyTarget::Stdout => f.write_str("STDOUT"),
            CopyTarget::File { filename } => {
                write!(f, "'{}'", escape_single_quote_string(filename))
            }
            CopyTarget::Program { command } => {
                write!(f, "PROGRAM '{}'", escape_single_quote_string(command))
            }
        }
    }
}

/// An option of a `COPY ... WITH (...)` list.
#[doc(hidden)]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CopyOption {
    /// `FORMAT <ident>`
    Format(Ident),
    /// `DELIMITER '<char>'`
    Delimiter(char),
    /// `NULL '<string>'`
    Null(String),
    /// `HEADER [ <bool> ]`
    Header(bool),
    /// `CSV`
    Csv,
    /// `FREEZE [ <bool> ]`
    Freeze(bool),
    /// `QUOTE '<char>'`
    Quote(char),
}

impl fmt::Display for CopyOption {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CopyOption::Format(ident) => write!(f, "FORMAT {ident}"),
            CopyOption::Delimiter(char) => write!(f, "DELIMITER '{char}'"),
            CopyOption::Null(string) => {
                write!(f, "NULL '{}'", escape_single_quote_string(string))
            }
            CopyOption::Header(true) => f.write_str("HEADER"),
            CopyOption::Header(false) => f.write_str("HEADER FALSE"),
            CopyOption::Csv => f.write_str("CSV"),
            CopyOption::Freeze(true) => f.write_str("FREEZE"),
            CopyOption::Freeze(false) => f.write_str("FREEZE FALSE"),
            CopyOption::Quote(char) => write!(f, "QUOTE '{char}'"),
        }
    }
}

/// The `COPY` statement (PostgreSQL).
///
/// ```txt
/// COPY { <table> [ (<columns>) ] | (<query>) }
///     { TO | FROM } <target> [ WITH ( <options> ) ]
/// ```
#[doc(hidden)]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CopyStmt {
    pub source: CopySource,
    pub to: bool,
    pub target: CopyTarget,
    pub options: Vec<CopyOption>,
}

/// What a `COPY` reads from or writes to on the SQL side.
#[doc(hidden)]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CopySource {
    Table {
        table_name: ObjectName,
        columns: Vec<Ident>,
    },
    Query(Box<Query>),
}

impl fmt::Display for CopyStmt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("COPY ")?;
        match &self.source {
            CopySource::Table {
                table_name,
                columns,
            } => {
                write!(f, "{table_name}")?;
                if !columns.is_empty() {
                    write!(f, " ({})", display_comma_separated(columns))?;
                }
            }
            CopySource::Query(query) => write!(f, "({query})")?,
        }
        write!(
            f,
            " {} {}",
            if self.to { "TO" } else { "FROM" },
            self.target
        )?;
        if !self.options.is_empty() {
            write!(f, " WITH ({})", display_comma_separated(&self.options))?;
        }
        Ok(())
    }
}

/// The `TRUNCATE` statement.
#[doc(hidden)]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TruncateStmt {
    /// `TABLE` was spelled out.
    pub table: bool,
    pub table_names: Vec<ObjectName>,
    /// Hive `PARTITION (...)`.
    pub partitions: Option<Vec<Expr>>,
    pub cascade: Option<bool>,
}

impl fmt::Display for TruncateStmt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "TRUNCATE {table}{names}",
            table = if self.table { "TABLE " } else { "" },
            names = display_comma_separated(&self.table_names),
        )?;
        if let Some(partitions) = &self.partitions {
            if !partitions.is_empty() {
                write!(f, " PARTITION ({})", display_comma_separated(partitions))?;
            }
        }
        match self.cascade {
            Some(true) => f.write_str(" CASCADE")?,
            Some(false) => f.write_str(" RESTRICT")?,
            None => {}
        }
        Ok(())
    }
}

/// The `UNLOAD` statement (Redshift/Athena).
#[doc(hidden)]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnloadStmt {
    pub query: Box<Query>,
    pub to: Ident,
    pub with: Vec<crate::ast::SqlOption>,
}

impl fmt::Display for UnloadStmt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "UNLOAD({}) TO {}", self.query, self.to)?;
        if !self.with.is_empty() {
            write!(f, " WITH ({})", display_comma_separated(&self.with))?;
        }
        Ok(())
    }
}
