//! AST types specific to CREATE/ALTER/DROP statements.

#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, string::String, vec::Vec};
use core::fmt;

use crate::ast::{
    display_comma_separated, escape_single_quote_string, DataType, Expr, Ident, ObjectName,
    OrderByExpr, Query,
};

// ============================================================================
// Column and constraint definitions
// ============================================================================

/// SQL column definition.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColumnDef {
    /// Column name.
    pub name: Ident,
    /// Column type.
    pub data_type: DataType,
    /// `COLLATE` clause.
    pub collation: Option<ObjectName>,
    /// Column options, named or not.
    pub options: Vec<ColumnOptionDef>,
}

impl fmt::Display for ColumnDef {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.name, self.data_type)?;
        if let Some(collation) = &self.collation {
            write!(f, " COLLATE {collation}")?;
        }
        for option in &self.options {
            write!(f, " {option}")?;
        }
        Ok(())
    }
}

/// An optionally-named column option: `[ CONSTRAINT <name> ] <column-option>`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColumnOptionDef {
    /// Constraint name.
    pub name: Option<Ident>,
    /// The option itself.
    pub option: ColumnOption,
}

impl fmt::Display for ColumnOptionDef {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(name) = &self.name {
            write!(f, "CONSTRAINT {name} ")?;
        }
        write!(f, "{}", self.option)
    }
}

/// `ColumnOption`s are modifiers that follow a column definition in a
/// `CREATE TABLE` statement.
#[doc(hidden)]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColumnOption {
    /// `NULL`
    Null,
    /// `NOT NULL`
    NotNull,
    /// `DEFAULT <restricted-expr>`
    Default(Expr),
    /// `{ PRIMARY KEY | UNIQUE } [ <constraint-characteristics> ]`
    Unique {
        is_primary: bool,
        characteristics: Option<ConstraintCharacteristics>,
    },
    /// A referential integrity constraint:
    /// `REFERENCES <foreign_table> [ (<referred_columns>) ]
    /// [ MATCH { FULL | PARTIAL | SIMPLE } ]
    /// [ ON DELETE <referential-action> ] [ ON UPDATE <referential-action> ]
    /// [ <constraint-characteristics> ]`
    ForeignKey {
        foreign_table: ObjectName,
        referred_columns: Vec<Ident>,
        match_kind: Option<ReferentialMatchKind>,
        on_delete: Option<ReferentialAction>,
        on_update: Option<ReferentialAction>,
        characteristics: Option<ConstraintCharacteristics>,
    },
    /// `CHECK (<expr>)`
    Check(Expr),
    /// `GENERATED { ALWAYS | BY DEFAULT } AS IDENTITY` or
    /// `GENERATED ALWAYS AS (<expr>) [ STORED ]`
    Generated {
        generated_as: GeneratedAs,
        generation_expr: Option<Expr>,
        stored: bool,
    },
    /// `COMMENT '<text>'` (MySQL)
    Comment(String),
    /// `INVISIBLE` (MySQL)
    Invisible,
}

impl fmt::Display for ColumnOption {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ColumnOption::Null => f.write_str("NULL"),
            ColumnOption::NotNull => f.write_str("NOT NULL"),
            ColumnOption::Default(expr) => write!(f, "DEFAULT {expr}"),
            ColumnOption::Unique {
                is_primary,
                characteristics,
            } => {
                f.write_str(if *is_primary { "PRIMARY KEY" } else { "UNIQUE" })?;
                if let Some(characteristics) = characteristics {
                    write!(f, " {characteristics}")?;
                }
                Ok(())
            }
            ColumnOption::ForeignKey {
                foreign_table,
                referred_columns,
                match_kind,
                on_delete,
                on_update,
                characteristics,
            } => {
                write!(f, "REFERENCES {foreign_table}")?;
                if !referred_columns.is_empty() {
                    write!(f, " ({})", display_comma_separated(referred_columns))?;
                }
                if let Some(match_kind) = match_kind {
                    write!(f, " MATCH {match_kind}")?;
                }
                if let Some(action) = on_delete {
                    write!(f, " ON DELETE {action}")?;
                }
                if let Some(action) = on_update {
                    write!(f, " ON UPDATE {action}")?;
                }
                if let Some(characteristics) = characteristics {
                    write!(f, " {characteristics}")?;
                }
                Ok(())
            }
            ColumnOption::Check(expr) => write!(f, "CHECK ({expr})"),
            ColumnOption::Generated {
                generated_as,
                generation_expr,
                stored,
            } => {
                match generation_expr {
                    Some(expr) => {
                        write!(f, "GENERATED {generated_as} AS ({expr})")?;
                        if *stored {
                            f.write_str(" STORED")?;
                        }
                    }
                    None => write!(f, "GENERATED {generated_as} AS IDENTITY")?,
                }
                Ok(())
            }
            ColumnOption::Comment(comment) => {
                write!(f, "COMMENT '{}'", escape_single_quote_string(comment))
            }
            ColumnOption::Invisible => f.write_str("INVISIBLE"),
        }
    }
}

/// `GENERATED { ALWAYS | BY DEFAULT }`
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum GeneratedAs {
    Always,
    ByDefault,
}

impl fmt::Display for GeneratedAs {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            GeneratedAs::Always => "ALWAYS",
            GeneratedAs::ByDefault => "BY DEFAULT",
        })
    }
}

/// `[ [NOT] DEFERRABLE ] [ INITIALLY { DEFERRED | IMMEDIATE } ]
/// [ [NOT] ENFORCED ]`
#[doc(hidden)]
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConstraintCharacteristics {
    pub deferrable: Option<bool>,
    pub initially: Option<DeferrableInitial>,
    pub enforced: Option<bool>,
}

/// `INITIALLY { DEFERRED | IMMEDIATE }`
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum DeferrableInitial {
    Immediate,
    Deferred,
}

impl fmt::Display for ConstraintCharacteristics {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut delim = "";
        if let Some(deferrable) = self.deferrable {
            f.write_str(if deferrable { "DEFERRABLE" } else { "NOT DEFERRABLE" })?;
            delim = " ";
        }
        if let Some(initially) = self.initially {
            write!(
                f,
                "{delim}INITIALLY {}",
                match initially {
                    DeferrableInitial::Immediate => "IMMEDIATE",
                    DeferrableInitial::Deferred => "DEFERRED",
                }
            )?;
            delim = " ";
        }
        if let Some(enforced) = self.enforced {
            write!(
                f,
                "{delim}{}",
                if enforced { "ENFORCED" } else { "NOT ENFORCED" }
            )?;
        }
        Ok(())
    }
}

/// `MATCH { FULL | PARTIAL | SIMPLE }`
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum ReferentialMatchKind {
    Full,
    Partial,
    Simple,
}

impl fmt::Display for ReferentialMatchKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            ReferentialMatchKind::Full => "FULL",
            ReferentialMatchKind::Partial => "PARTIAL",
            ReferentialMatchKind::Simple => "SIMPLE",
        })
    }
}

/// `{ RESTRICT | CASCADE | SET NULL | NO ACTION | SET DEFAULT }`
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum ReferentialAction {
    Restrict,
    Cascade,
    SetNull,
    NoAction,
    SetDefault,
}

impl fmt::Display for ReferentialAction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            ReferentialAction::Restrict => "RESTRICT",
            ReferentialAction::Cascade => "CASCADE",
            ReferentialAction::SetNull => "SET NULL",
            ReferentialAction::NoAction => "NO ACTION",
            ReferentialAction::SetDefault => "SET DEFAULT",
        })
    }
}

/// A table-level constraint, specified in a `CREATE TABLE` or an
/// `ALTER TABLE ADD <constraint>` statement.
#[doc(hidden)]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TableConstraint {
    /// `[ CONSTRAINT <name> ] UNIQUE (<columns>)`
    Unique {
        name: Option<Ident>,
        columns: Vec<Ident>,
        characteristics: Option<ConstraintCharacteristics>,
    },
    /// `[ CONSTRAINT <name> ] PRIMARY KEY (<columns>)`
    PrimaryKey {
        name: Option<Ident>,
        columns: Vec<Ident>,
        characteristics: Option<ConstraintCharacteristics>,
    },
    /// `[ CONSTRAINT <name> ] FOREIGN KEY (<columns>) REFERENCES ...`
    ForeignKey {
        name: Option<Ident>,
        columns: Vec<Ident>,
        foreign_table: ObjectName,
        referred_columns: Vec<Ident>,
        match_kind: Option<ReferentialMatchKind>,
        on_delete: Option<ReferentialAction>,
        on_update: Option<ReferentialAction>,
        characteristics: Option<ConstraintCharacteristics>,
    },
    /// `[ CONSTRAINT <name> ] CHECK (<expr>)`
    Check {
        name: Option<Ident>,
        expr: Box<Expr>,
    },
}

fn display_constraint_name(name: &Option<Ident>) -> impl fmt::Display + '_ {
    struct ConstraintName<'a>(&'a Option<Ident>);
    impl fmt::Display for ConstraintName<'_> {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            if let Some(name) = self.0 {
                write!(f, "CONSTRAINT {name} ")?;
            }
            Ok(())
        }
    }
    ConstraintName(name)
}

impl fmt::Display for TableConstraint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TableConstraint::Unique {
                name,
                columns,
                characteristics,
            } => {
                write!(
                    f,
                    "{}UNIQUE ({})",
                    display_constraint_name(name),
                    display_comma_separated(columns)
                )?;
                if let Some(characteristics) = characteristics {
                    write!(f, " {characteristics}")?;
                }
                Ok(())
            }
            TableConstraint::PrimaryKey {
                name,
                columns,
                characteristics,
            } => {
                write!(
                    f,
                    "{}PRIMARY KEY ({})",
                    display_constraint_name(name),
                    display_comma_separated(columns)
                )?;
                if let Some(characteristics) = characteristics {
                    write!(f, " {characteristics}")?;
                }
                Ok(())
            }
            TableConstraint::ForeignKey {
                name,
                columns,
                foreign_table,
                referred_columns,
                match_kind,
                on_delete,
                on_update,
                characteristics,
            } => {
                write!(
                    f,
                    "{}FOREIGN KEY ({}) REFERENCES {foreign_table}",
                    display_constraint_name(name),
                    display_comma_separated(columns),
                )?;
                if !referred_columns.is_empty() {
                    write!(f, " ({})", display_comma_separated(referred_columns))?;
                }
                if let Some(match_kind) = match_kind {
                    write!(f, " MATCH {match_kind}")?;
                }
                if let Some(action) = on_delete {
                    write!(f, " ON DELETE {action}")?;
                }
                if let Some(action) = on_update {
                    write!(f, " ON UPDATE {action}")?;
                }
                if let Some(characteristics) = characteristics {
                    write!(f, " {characteristics}")?;
                }
                Ok(())
            }
            TableConstraint::Check { name, expr } => {
                write!(f, "{}CHECK ({expr})", display_constraint_name(name))
            }
        }
    }
}

/// A `<name> = <value>` option, as in `WITH (...)` lists.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SqlOption {
    /// Option name.
    pub name: Ident,
    /// Option value.
    pub value: Expr,
}

impl fmt::Display for SqlOption {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} = {}", self.name, self.value)
    }
}

/// `CASCADE` or `RESTRICT` at the end of a `DROP`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum DropBehavior {
    Cascade,
    Restrict,
}

impl fmt::Display for DropBehavior {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            DropBehavior::Cascade => "CASCADE",
            DropBehavior::Restrict => "RESTRICT",
        })
    }
}

/// The owner of an object, as in `OWNER TO`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum Owner {
    Ident(Ident),
    CurrentUser,
    CurrentRole,
    SessionUser,
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Owner::Ident(ident) => write!(f, "{ident}"),
            Owner::CurrentUser => f.write_str("CURRENT_USER"),
            Owner::CurrentRole => f.write_str("CURRENT_ROLE"),
            Owner::SessionUser => f.write_str("SESSION_USER"),
        }
    }
}

// ============================================================================
// CREATE TABLE
// ============================================================================

/// The bound of a `CREATE TABLE ... PARTITION OF` statement.
#[doc(hidden)]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PartitionBound {
    /// `DEFAULT`
    Default,
    /// `FOR VALUES IN (<exprs>)`
    In(Vec<Expr>),
    /// `FOR VALUES FROM (<bounds>) TO (<bounds>)`
    FromTo {
        from: Vec<PartitionRangeBound>,
        to: Vec<PartitionRangeBound>,
    },
    /// `FOR VALUES WITH (MODULUS <n>, REMAINDER <n>)`
    With { modulus: u64, remainder: u64 },
}

impl fmt::Display for PartitionBound {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PartitionBound::Default => f.write_str("DEFAULT"),
            PartitionBound::In(exprs) => {
                write!(f, "FOR VALUES IN ({})", display_comma_separated(exprs))
            }
            PartitionBound::FromTo { from, to } => write!(
                f,
                "FOR VALUES FROM ({}) TO ({})",
                display_comma_separated(from),
                display_comma_separated(to)
            ),
            PartitionBound::With { modulus, remainder } => {
                write!(f, "FOR VALUES WITH (MODULUS {modulus}, REMAINDER {remainder})")
            }
        }
    }
}

/// One element of a `FROM (...) TO (...)` partition bound.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum PartitionRangeBound {
    MinValue,
    MaxValue,
    Expr(Expr),
}

impl fmt::Display for PartitionRangeBound {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PartitionRangeBound::MinValue => f.write_str("MINVALUE"),
            PartitionRangeBound::MaxValue => f.write_str("MAXVALUE"),
            PartitionRangeBound::Expr(expr) => write!(f, "{expr}"),
        }
    }
}

/// The `CREATE TABLE` statement.
///
/// ```txt
/// CREATE [ OR REPLACE ] [ GLOBAL | LOCAL ] [ EXTERNAL ] [ TEMPORARY ] TABLE
///     [ IF NOT EXISTS ] <name>
///     [ PARTITION OF <parent> { DEFAULT | FOR VALUES ... } ]
///     [ ( <columns and constraints> ) ]
///     [ CLONE <name> | LIKE <name> ]
///     [ ON CLUSTER <name> ] [ PARTITION BY <expr> ] [ CLUSTER BY ... ]
///     [ STORED AS <format> ] [ LOCATION '<path>' ] [ WITH ( <options> ) ]
///     [ COMMENT '<text>' ]
///     [ AS <query> | AS TABLE <name> ]
/// ```
#[doc(hidden)]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreateTableStmt {
    pub or_replace: bool,
    pub temporary: bool,
    pub external: bool,
    /// `GLOBAL` (Some(true)) / `LOCAL` (Some(false)) temporary table.
    pub global: Option<bool>,
    pub if_not_exists: bool,
    pub name: ObjectName,
    pub columns: Vec<ColumnDef>,
    pub constraints: Vec<TableConstraint>,
    pub partition_of: Option<ObjectName>,
    pub partition_bound: Option<PartitionBound>,
    pub clone: Option<ObjectName>,
    pub like: Option<ObjectName>,
    pub on_cluster: Option<Ident>,
    pub partition_by: Option<Box<Expr>>,
    pub cluster_by: Vec<Ident>,
    pub file_format: Option<Ident>,
    pub location: Option<String>,
    pub with_options: Vec<SqlOption>,
    pub comment: Option<String>,
    pub query: Option<Box<Query>>,
    pub as_table: Option<ObjectName>,
}

impl fmt::Display for CreateTableStmt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "CREATE {or_replace}{global}{external}{temporary}TABLE {if_not_exists}{name}",
            or_replace = if self.or_replace { "OR REPLACE " } else { "" },
            global = match self.global {
                Some(true) => "GLOBAL ",
                Some(false) => "LOCAL ",
                None => "",
            },
            external = if self.external { "EXTERNAL " } else { "" },
            temporary = if self.temporary { "TEMPORARY " } else { "" },
            if_not_exists = if self.if_not_exists { "IF NOT EXISTS " } else { "" },
            name = self.name,
        )?;
        if let Some(partition_of) = &self.partition_of {
            write!(f, " PARTITION OF {partition_of}")?;
            if let Some(bound) = &self.partition_bound {
                write!(f, " {bound}")?;
            }
        }
        if !self.columns.is_empty() || !self.constraints.is_empty() {
            write!(f, " ({}", display_comma_separated(&self.columns))?;
            if !self.columns.is_empty() && !self.constraints.is_empty() {
                f.write_str(", ")?;
            }
            write!(f, "{})", display_comma_separated(&self.constraints))?;
        }
        if let Some(clone) = &self.clone {
            write!(f, " CLONE {clone}")?;
        }
        if let Some(like) = &self.like {
            write!(f, " LIKE {like}")?;
        }
        if let Some(on_cluster) = &self.on_cluster {
            write!(f, " ON CLUSTER {on_cluster}")?;
        }
        if let Some(partition_by) = &self.partition_by {
            write!(f, " PARTITION BY {partition_by}")?;
        }
        if !self.cluster_by.is_empty() {
            write!(f, " CLUSTER BY {}", display_comma_separated(&self.cluster_by))?;
        }
        if let Some(file_format) = &self.file_format {
            write!(f, " STORED AS {file_format}")?;
        }
        if let Some(location) = &self.location {
            write!(f, " LOCATION '{}'", escape_single_quote_string(location))?;
        }
        if !self.with_options.is_empty() {
            write!(f, " WITH ({})", display_comma_separated(&self.with_options))?;
        }
        if let Some(comment) = &self.comment {
            write!(f, " COMMENT '{}'", escape_single_quote_string(comment))?;
        }
        if let Some(query) = &self.query {
            write!(f, " AS {query}")?;
        }
        if let Some(as_table) = &self.as_table {
            write!(f, " AS TABLE {as_table}")?;
        }
        Ok(())
    }
}

// ============================================================================
// ALTER TABLE
// ============================================================================

/// The `ALTER TABLE` statement.
#[doc(hidden)]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlterTableStmt {
    pub name: ObjectName,
    pub if_exists: bool,
    pub only: bool,
    pub operations: Vec<AlterTableOperation>,
    pub on_cluster: Option<Ident>,
}

impl fmt::Display for AlterTableStmt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("ALTER TABLE ")?;
        if self.if_exists {
            f.write_str("IF EXISTS ")?;
        }
        if self.only {
            f.write_str("ONLY ")?;
        }
        write!(f, "{}", self.name)?;
        if let Some(on_cluster) = &self.on_cluster {
            write!(f, " ON CLUSTER {on_cluster}")?;
        }
        write!(f, " {}", display_comma_separated(&self.operations))
    }
}

/// An operation performed by an `ALTER TABLE` statement.
#[doc(hidden)]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AlterTableOperation {
    /// `ADD [COLUMN [IF NOT EXISTS]] <column_def>`
    AddColumn {
        column_keyword: bool,
        if_not_exists: bool,
        column_def: ColumnDef,
    },
    /// `ADD <table_constraint>`
    AddConstraint(TableConstraint),
    /// `ADD CONSTRAINT <name> { UNIQUE | PRIMARY KEY } USING INDEX <index>`
    /// (PostgreSQL)
    AddConstraintUsingIndex {
        constraint_name: Option<Ident>,
        is_primary: bool,
        index_name: Ident,
        characteristics: Option<ConstraintCharacteristics>,
    },
    /// `DROP [COLUMN] [IF EXISTS] <name> [CASCADE | RESTRICT]`
    DropColumn {
        if_exists: bool,
        column_name: Ident,
        behavior: Option<DropBehavior>,
    },
    /// `ALTER [COLUMN] <name> <operation>`
    AlterColumn {
        column_name: Ident,
        op: AlterColumnOperation,
    },
    /// `RENAME TO <name>`
    RenameTable { new_name: ObjectName },
    /// `RENAME COLUMN <old> TO <new>`
    RenameColumn {
        old_column_name: Ident,
        new_column_name: Ident,
    },
    /// `DROP CONSTRAINT [IF EXISTS] <name> [CASCADE]`
    DropConstraint {
        if_exists: bool,
        name: Ident,
        behavior: Option<DropBehavior>,
    },
    /// `VALIDATE CONSTRAINT <name>`
    ValidateConstraint { name: Ident },
    /// `REPLICA IDENTITY { DEFAULT | FULL | NOTHING | USING INDEX <name> }`
    ReplicaIdentity(ReplicaIdentity),
    /// `SET SCHEMA <name>`
    SetSchema { new_schema: Ident },
    /// `OWNER TO <owner>`
    OwnerTo(Owner),
}

impl fmt::Display for AlterTableOperation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AlterTableOperation::AddColumn {
                column_keyword,
                if_not_exists,
                column_def,
            } => {
                f.write_str("ADD")?;
                if *column_keyword {
                    f.write_str(" COLUMN")?;
                }
                if *if_not_exists {
                    f.write_str(" IF NOT EXISTS")?;
                }
                write!(f, " {column_def}")
            }
            AlterTableOperation::AddConstraint(constraint) => write!(f, "ADD {constraint}"),
            AlterTableOperation::AddConstraintUsingIndex {
                constraint_name,
                is_primary,
                index_name,
                characteristics,
            } => {
                f.write_str("ADD ")?;
                if let Some(name) = constraint_name {
                    write!(f, "CONSTRAINT {name} ")?;
                }
                write!(
                    f,
                    "{} USING INDEX {index_name}",
                    if *is_primary { "PRIMARY KEY" } else { "UNIQUE" }
                )?;
                if let Some(characteristics) = characteristics {
                    write!(f, " {characteristics}")?;
                }
                Ok(())
            }
            AlterTableOperation::DropColumn {
                if_exists,
                column_name,
                behavior,
            } => {
                f.write_str("DROP COLUMN ")?;
                if *if_exists {
                    f.write_str("IF EXISTS ")?;
                }
                write!(f, "{column_name}")?;
                if let Some(behavior) = behavior {
                    write!(f, " {behavior}")?;
                }
                Ok(())
            }
            AlterTableOperation::AlterColumn { column_name, op } => {
                write!(f, "ALTER COLUMN {column_name} {op}")
            }
            AlterTableOperation::RenameTable { new_name } => write!(f, "RENAME TO {new_name}"),
            AlterTableOperation::RenameColumn {
                old_column_name,
                new_column_name,
            } => write!(f, "RENAME COLUMN {old_column_name} TO {new_column_name}"),
            AlterTableOperation::DropConstraint {
                if_exists,
                name,
                behavior,
            } => {
                f.write_str("DROP CONSTRAINT ")?;
                if *if_exists {
                    f.write_str("IF EXISTS ")?;
                }
                write!(f, "{name}")?;
                if let Some(behavior) = behavior {
                    write!(f, " {behavior}")?;
                }
                Ok(())
            }
            AlterTableOperation::ValidateConstraint { name } => {
                write!(f, "VALIDATE CONSTRAINT {name}")
            }
            AlterTableOperation::ReplicaIdentity(identity) => {
                write!(f, "REPLICA IDENTITY {identity}")
            }
            AlterTableOperation::SetSchema { new_schema } => {
                write!(f, "SET SCHEMA {new_schema}")
            }
            AlterTableOperation::OwnerTo(owner) => write!(f, "OWNER TO {owner}"),
        }
    }
}

/// An operation on a single column of an `ALTER TABLE ALTER COLUMN`.
#[doc(hidden)]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AlterColumnOperation {
    /// `SET NOT NULL`
    SetNotNull,
    /// `DROP NOT NULL`
    DropNotNull,
    /// `SET DEFAULT <expr>`
    SetDefault(Expr),
    /// `DROP DEFAULT`
    DropDefault,
    /// `SET DATA TYPE <type> [ USING <expr> ]`
    SetDataType {
        data_type: DataType,
        using: Option<Expr>,
    },
}

impl fmt::Display for AlterColumnOperation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AlterColumnOperation::SetNotNull => f.write_str("SET NOT NULL"),
            AlterColumnOperation::DropNotNull => f.write_str("DROP NOT NULL"),
            AlterColumnOperation::SetDefault(expr) => write!(f, "SET DEFAULT {expr}"),
            AlterColumnOperation::DropDefault => f.write_str("DROP DEFAULT"),
            AlterColumnOperation::SetDataType { data_type, using } => {
                write!(f, "SET DATA TYPE {data_type}")?;
                if let Some(using) = using {
                    write!(f, " USING {using}")?;
                }
                Ok(())
            }
        }
    }
}

/// `REPLICA IDENTITY` forms.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum ReplicaIdentity {
    Default,
    Full,
    Nothing,
    Index(Ident),
}

impl fmt::Display for ReplicaIdentity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ReplicaIdentity::Default => f.write_str("DEFAULT"),
            ReplicaIdentity::Full => f.write_str("FULL"),
            ReplicaIdentity::Nothing => f.write_str("NOTHING"),
            ReplicaIdentity::Index(name) => write!(f, "USING INDEX {name}"),
        }
    }
}

// ============================================================================
// Other CREATE statements
// ============================================================================

/// The `CREATE INDEX` statement.
///
/// ```txt
/// CREATE [ UNIQUE ] INDEX [ CONCURRENTLY ] [ IF NOT EXISTS ] [ <name> ]
///     ON <table> [ USING <method> ] ( <columns> )
///     [ INCLUDE ( <columns> ) ] [ NULLS [ NOT ] DISTINCT ]
///     [ WITH ( <options> ) ] [ WHERE <predicate> ]
/// ```
#[doc(hidden)]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreateIndexStmt {
    pub name: Option<ObjectName>,
    pub table_name: ObjectName,
    pub using: Option<Ident>,
    pub columns: Vec<OrderByExpr>,
    pub unique: bool,
    pub concurrently: bool,
    pub if_not_exists: bool,
    pub include: Vec<Ident>,
    pub nulls_distinct: Option<bool>,
    pub with: Vec<SqlOption>,
    pub predicate: Option<Expr>,
}

impl fmt::Display for CreateIndexStmt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "CREATE {unique}INDEX {concurrently}{if_not_exists}",
            unique = if self.unique { "UNIQUE " } else { "" },
            concurrently = if self.concurrently { "CONCURRENTLY " } else { "" },
            if_not_exists = if self.if_not_exists { "IF NOT EXISTS " } else { "" },
        )?;
        if let Some(name) = &self.name {
            write!(f, "{name} ")?;
        }
        write!(f, "ON {}", self.table_name)?;
        if let Some(using) = &self.using {
            write!(f, " USING {using}")?;
        }
        write!(f, " ({})", display_comma_separated(&self.columns))?;
        if !self.include.is_empty() {
            write!(f, " INCLUDE ({})", display_comma_separated(&self.include))?;
        }
        if let Some(nulls_distinct) = self.nulls_distinct {
            write!(
                f,
                " NULLS {}DISTINCT",
                if nulls_distinct { "" } else { "NOT " }
            )?;
        }
        if !self.with.is_empty() {
            write!(f, " WITH ({})", display_comma_separated(&self.with))?;
        }
        if let Some(predicate) = &self.predicate {
            write!(f, " WHERE {predicate}")?;
        }
        Ok(())
    }
}

/// The `ALTER INDEX` statement.
#[doc(hidden)]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlterIndexStmt {
    pub name: ObjectName,
    pub operation: AlterIndexOperation,
}

impl fmt::Display for AlterIndexStmt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ALTER INDEX {} {}", self.name, self.operation)
    }
}

/// An operation of an `ALTER INDEX`.
#[doc(hidden)]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AlterIndexOperation {
    /// `RENAME TO <name>`
    RenameIndex { index_name: ObjectName },
}

impl fmt::Display for AlterIndexOperation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AlterIndexOperation::RenameIndex { index_name } => {
                write!(f, "RENAME TO {index_name}")
            }
        }
    }
}

/// The `CREATE VIEW` statement.
#[doc(hidden)]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreateViewStmt {
    pub or_replace: bool,
    pub materialized: bool,
    pub temporary: bool,
    pub if_not_exists: bool,
    pub name: ObjectName,
    pub columns: Vec<Ident>,
    pub query: Box<Query>,
    pub with_options: Vec<SqlOption>,
    pub cluster_by: Vec<Ident>,
}

impl fmt::Display for CreateViewStmt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "CREATE {or_replace}{materialized}{temporary}VIEW {if_not_exists}{name}",
            or_replace = if self.or_replace { "OR REPLACE " } else { "" },
            materialized = if self.materialized { "MATERIALIZED " } else { "" },
            temporary = if self.temporary { "TEMPORARY " } else { "" },
            if_not_exists = if self.if_not_exists { "IF NOT EXISTS " } else { "" },
            name = self.name,
        )?;
        if !self.with_options.is_empty() {
            write!(f, " WITH ({})", display_comma_separated(&self.with_options))?;
        }
        if !self.columns.is_empty() {
            write!(f, " ({})", display_comma_separated(&self.columns))?;
        }
        if !self.cluster_by.is_empty() {
            write!(f, " CLUSTER BY ({})", display_comma_separated(&self.cluster_by))?;
        }
        write!(f, " AS {}", self.query)
    }
}

/// The `ALTER VIEW` statement.
#[doc(hidden)]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlterViewStmt {
    pub name: ObjectName,
    pub columns: Vec<Ident>,
    pub query: Box<Query>,
    pub with_options: Vec<SqlOption>,
}

impl fmt::Display for AlterViewStmt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ALTER VIEW {}", self.name)?;
        if !self.with_options.is_empty() {
            write!(f, " WITH ({})", display_comma_separated(&self.with_options))?;
        }
        if !self.columns.is_empty() {
            write!(f, " ({})", display_comma_separated(&self.columns))?;
        }
        write!(f, " AS {}", self.query)
    }
}

/// The `CREATE SCHEMA` statement.
///
/// ```txt
/// CREATE SCHEMA [ IF NOT EXISTS ]
///     [ <name> | AUTHORIZATION <owner> | <name> AUTHORIZATION <owner> ]
/// ```
#[doc(hidden)]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreateSchemaStmt {
    pub if_not_exists: bool,
    pub name: Option<ObjectName>,
    pub authorization: Option<Ident>,
}

impl fmt::Display for CreateSchemaStmt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("CREATE SCHEMA")?;
        if self.if_not_exists {
            f.write_str(" IF NOT EXISTS")?;
        }
        if let Some(name) = &self.name {
            write!(f, " {name}")?;
        }
        if let Some(authorization) = &self.authorization {
            write!(f, " AUTHORIZATION {authorization}")?;
        }
        Ok(())
    }
}

/// The `ALTER SCHEMA` statement.
#[doc(hidden)]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlterSchemaStmt {
    pub name: ObjectName,
    pub operation: AlterSchemaOperation,
}

/// An operation of an `ALTER SCHEMA`.
#[doc(hidden)]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AlterSchemaOperation {
    RenameTo(Ident),
    OwnerTo(Owner),
}

impl fmt::Display for AlterSchemaStmt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ALTER SCHEMA {} ", self.name)?;
        match &self.operation {
            AlterSchemaOperation::RenameTo(name) => write!(f, "RENAME TO {name}"),
            AlterSchemaOperation::OwnerTo(owner) => write!(f, "OWNER TO {owner}"),
        }
    }
}

/// The `CREATE DATABASE` statement.
///
/// **NOTE**: not part of the ANSI SQL standard, and thus its syntax varies
/// among vendors.
#[doc(hidden)]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreateDatabaseStmt {
    pub db_name: ObjectName,
    pub if_not_exists: bool,
    pub location: Option<String>,
    pub managed_location: Option<String>,
}

impl fmt::Display for CreateDatabaseStmt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("CREATE DATABASE ")?;
        if self.if_not_exists {
            f.write_str("IF NOT EXISTS ")?;
        }
        write!(f, "{}", self.db_name)?;
        if let Some(location) = &self.location {
            write!(f, " LOCATION '{}'", escape_single_quote_string(location))?;
        }
        if let Some(managed_location) = &self.managed_location {
            write!(
                f,
                " MANAGEDLOCATION '{}'",
                escape_single_quote_string(managed_location)
            )?;
        }
        Ok(())
    }
}

/// The `CREATE ROLE` statement (PostgreSQL flavor).
#[doc(hidden)]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreateRoleStmt {
    pub names: Vec<ObjectName>,
    pub if_not_exists: bool,
    pub login: Option<bool>,
    pub inherit: Option<bool>,
    pub superuser: Option<bool>,
    pub password: Option<Password>,
}

/// `PASSWORD { '<text>' | NULL }`
#[doc(hidden)]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Password {
    Password(Expr),
    NullPassword,
}

impl fmt::Display for CreateRoleStmt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "CREATE ROLE {if_not_exists}{names}",
            if_not_exists = if self.if_not_exists { "IF NOT EXISTS " } else { "" },
            names = display_comma_separated(&self.names),
        )?;
        if let Some(login) = self.login {
            f.write_str(if login { " LOGIN" } else { " NOLOGIN" })?;
        }
        if let Some(inherit) = self.inherit {
            f.write_str(if inherit { " INHERIT" } else { " NOINHERIT" })?;
        }
        if let Some(superuser) = self.superuser {
            f.write_str(if superuser { " SUPERUSER" } else { " NOSUPERUSER" })?;
        }
        match &self.password {
            Some(Password::Password(pass)) => write!(f, " PASSWORD {pass}")?,
            Some(Password::NullPassword) => f.write_str(" PASSWORD NULL")?,
            None => {}
        }
        Ok(())
    }
}

/// The `ALTER USER` statement.
#[doc(hidden)]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlterUserStmt {
    pub name: Ident,
    pub operation: AlterUserOperation,
}

/// An operation of an `ALTER USER`.
#[doc(hidden)]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AlterUserOperation {
    RenameTo(Ident),
    SetOptions(Vec<SqlOption>),
}

impl fmt::Display for AlterUserStmt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ALTER USER {} ", self.name)?;
        match &self.operation {
            AlterUserOperation::RenameTo(name) => write!(f, "RENAME TO {name}"),
            AlterUserOperation::SetOptions(options) => {
                write!(f, "SET {}", display_comma_separated(options))
            }
        }
    }
}

/// An argument of `CREATE FUNCTION`/`DROP FUNCTION`.
#[doc(hidden)]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OperateFunctionArg {
    pub name: Option<Ident>,
    pub data_type: DataType,
    pub default_expr: Option<Expr>,
}

impl fmt::Display for OperateFunctionArg {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(name) = &self.name {
            write!(f, "{name} ")?;
        }
        write!(f, "{}", self.data_type)?;
        if let Some(default_expr) = &self.default_expr {
            write!(f, " DEFAULT {default_expr}")?;
        }
        Ok(())
    }
}

/// The `CREATE FUNCTION` statement.
///
/// ```txt
/// CREATE [ OR REPLACE ] [ TEMPORARY ] FUNCTION <name> ( <args> )
///     [ RETURNS <type> ] [ LANGUAGE <lang> ] [ AS <definition> ]
/// ```
#[doc(hidden)]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreateFunctionStmt {
    pub or_replace: bool,
    pub temporary: bool,
    pub name: ObjectName,
    pub args: Vec<OperateFunctionArg>,
    pub return_type: Option<DataType>,
    pub language: Option<Ident>,
    pub body: Option<Expr>,
}

impl fmt::Display for CreateFunctionStmt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "CREATE {or_replace}{temporary}FUNCTION {name}({args})",
            or_replace = if self.or_replace { "OR REPLACE " } else { "" },
            temporary = if self.temporary { "TEMPORARY " } else { "" },
            name = self.name,
            args = display_comma_separated(&self.args),
        )?;
        if let Some(return_type) = &self.return_type {
            write!(f, " RETURNS {return_type}")?;
        }
        if let Some(language) = &self.language {
            write!(f, " LANGUAGE {language}")?;
        }
        if let Some(body) = &self.body {
            write!(f, " AS {body}")?;
        }
        Ok(())
    }
}

/// The `CREATE PROCEDURE` statement (MSSQL flavor).
#[doc(hidden)]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreateProcedureStmt {
    pub or_alter: bool,
    pub name: ObjectName,
    pub params: Vec<OperateFunctionArg>,
    pub body: Vec<crate::ast::Statement>,
}

impl fmt::Display for CreateProcedureStmt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "CREATE {or_alter}PROCEDURE {name}",
            or_alter = if self.or_alter { "OR ALTER " } else { "" },
            name = self.name,
        )?;
        if !self.params.is_empty() {
            write!(f, " ({})", display_comma_separated(&self.params))?;
        }
        write!(
            f,
            " AS BEGIN {}; END",
            crate::ast::display_separated(&self.body, "; ")
        )
    }
}

/// When a trigger fires relative to the triggering event.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum TriggerPeriod {
    Before,
    After,
    InsteadOf,
}

impl fmt::Display for TriggerPeriod {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            TriggerPeriod::Before => "BEFORE",
            TriggerPeriod::After => "AFTER",
            TriggerPeriod::InsteadOf => "INSTEAD OF",
        })
    }
}

/// The event a trigger listens for.
#[doc(hidden)]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TriggerEvent {
    Insert,
    Update(Vec<Ident>),
    Delete,
    Truncate,
}

impl fmt::Display for TriggerEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TriggerEvent::Insert => f.write_str("INSERT"),
            TriggerEvent::Update(columns) => {
                f.write_str("UPDATE")?;
                if !columns.is_empty() {
                    write!(f, " OF {}", display_comma_separated(columns))?;
                }
                Ok(())
            }
            TriggerEvent::Delete => f.write_str("DELETE"),
            TriggerEvent::Truncate => f.write_str("TRUNCATE"),
        }
    }
}

/// `FOR EACH { ROW | STATEMENT }`
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum TriggerObject {
    Row,
    Statement,
}

impl fmt::Display for TriggerObject {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            TriggerObject::Row => "ROW",
            TriggerObject::Statement => "STATEMENT",
        })
    }
}

/// `EXECUTE { FUNCTION | PROCEDURE } <name>(<args>)`
#[doc(hidden)]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TriggerExecBody {
    pub is_function: bool,
    pub func_name: ObjectName,
    pub args: Vec<Expr>,
}

impl fmt::Display for TriggerExecBody {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "EXECUTE {} {}({})",
            if self.is_function { "FUNCTION" } else { "PROCEDURE" },
            self.func_name,
            display_comma_separated(&self.args)
        )
    }
}

/// The `CREATE TRIGGER` statement.
///
/// ```txt
/// CREATE [ OR REPLACE ] TRIGGER <name>
///     { BEFORE | AFTER | INSTEAD OF } <event> [ OR <event> ... ]
///     ON <table> [ FOR EACH { ROW | STATEMENT } ] [ WHEN ( <cond> ) ]
///     EXECUTE { FUNCTION | PROCEDURE } <fname>(<args>)
/// ```
#[doc(hidden)]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreateTriggerStmt {
    pub or_replace: bool,
    pub name: ObjectName,
    pub period: TriggerPeriod,
    pub events: Vec<TriggerEvent>,
    pub table_name: ObjectName,
    pub for_each: Option<TriggerObject>,
    pub condition: Option<Expr>,
    pub exec_body: TriggerExecBody,
}

impl fmt::Display for CreateTriggerStmt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "CREATE {or_replace}TRIGGER {name} {period} {events} ON {table}",
            or_replace = if self.or_replace { "OR REPLACE " } else { "" },
            name = self.name,
            period = self.period,
            events = crate::ast::display_separated(&self.events, " OR "),
            table = self.table_name,
        )?;
        if let Some(for_each) = &self.for_each {
            write!(f, " FOR EACH {for_each}")?;
        }
        if let Some(condition) = &self.condition {
            write!(f, " WHEN ({condition})")?;
        }
        write!(f, " {}", self.exec_body)
    }
}

/// The `CREATE POLICY` statement (PostgreSQL row-level security).
#[doc(hidden)]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreatePolicyStmt {
    pub name: Ident,
    pub table_name: ObjectName,
    pub policy_type: Option<CreatePolicyType>,
    pub command: Option<CreatePolicyCommand>,
    pub to: Vec<Owner>,
    pub using: Option<Expr>,
    pub with_check: Option<Expr>,
}

/// `AS { PERMISSIVE | RESTRICTIVE }`
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum CreatePolicyType {
    Permissive,
    Restrictive,
}

/// `FOR { ALL | SELECT | INSERT | UPDATE | DELETE }`
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum CreatePolicyCommand {
    All,
    Select,
    Insert,
    Update,
    Delete,
}

impl fmt::Display for CreatePolicyStmt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "CREATE POLICY {} ON {}", self.name, self.table_name)?;
        if let Some(policy_type) = self.policy_type {
            write!(
                f,
                " AS {}",
                match policy_type {
                    CreatePolicyType::Permissive => "PERMISSIVE",
                    CreatePolicyType::Restrictive => "RESTRICTIVE",
                }
            )?;
        }
        if let Some(command) = self.command {
            write!(
                f,
                " FOR {}",
                match command {
                    CreatePolicyCommand::All => "ALL",
                    CreatePolicyCommand::Select => "SELECT",
                    CreatePolicyCommand::Insert => "INSERT",
                    CreatePolicyCommand::Update => "UPDATE",
                    CreatePolicyCommand::Delete => "DELETE",
                }
            )?;
        }
        if !self.to.is_empty() {
            write!(f, " TO {}", display_comma_separated(&self.to))?;
        }
        if let Some(using) = &self.using {
            write!(f, " USING ({using})")?;
        }
        if let Some(with_check) = &self.with_check {
            write!(f, " WITH CHECK ({with_check})")?;
        }
        Ok(())
    }
}

/// An option of a `CREATE SEQUENCE` / `ALTER SEQUENCE` statement.
#[doc(hidden)]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SequenceOptions {
    IncrementBy(Expr),
    MinValue(Expr),
    NoMinValue,
    MaxValue(Expr),
    NoMaxValue,
    StartWith(Expr),
    Cache(Expr),
    Cycle,
    NoCycle,
}

impl fmt::Display for SequenceOptions {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SequenceOptions::IncrementBy(expr) => write!(f, "INCREMENT BY {expr}"),
            SequenceOptions::MinValue(expr) => write!(f, "MINVALUE {expr}"),
            SequenceOptions::NoMinValue => f.write_str("NO MINVALUE"),
            SequenceOptions::MaxValue(expr) => write!(f, "MAXVALUE {expr}"),
            SequenceOptions::NoMaxValue => f.write_str("NO MAXVALUE"),
            SequenceOptions::StartWith(expr) => write!(f, "START WITH {expr}"),
            SequenceOptions::Cache(expr) => write!(f, "CACHE {expr}"),
            SequenceOptions::Cycle => f.write_str("CYCLE"),
            SequenceOptions::NoCycle => f.write_str("NO CYCLE"),
        }
    }
}

/// The `CREATE SEQUENCE` statement.
#[doc(hidden)]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreateSequenceStmt {
    pub temporary: bool,
    pub if_not_exists: bool,
    pub name: ObjectName,
    pub data_type: Option<DataType>,
    pub sequence_options: Vec<SequenceOptions>,
    pub owned_by: Option<ObjectName>,
}

impl fmt::Display for CreateSequenceStmt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "CREATE {temporary}SEQUENCE {if_not_exists}{name}",
            temporary = if self.temporary { "TEMPORARY " } else { "" },
            if_not_exists = if self.if_not_exists { "IF NOT EXISTS " } else { "" },
            name = self.name,
        )?;
        if let Some(data_type) = &self.data_type {
            write!(f, " AS {data_type}")?;
        }
        for option in &self.sequence_options {
            write!(f, " {option}")?;
        }
        if let Some(owned_by) = &self.owned_by {
            write!(f, " OWNED BY {owned_by}")?;
        }
        Ok(())
    }
}

/// The `ALTER SEQUENCE` statement.
#[doc(hidden)]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlterSequenceStmt {
    pub name: ObjectName,
    pub sequence_options: Vec<SequenceOptions>,
}

impl fmt::Display for AlterSequenceStmt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ALTER SEQUENCE {}", self.name)?;
        for option in &self.sequence_options {
            write!(f, " {option}")?;
        }
        Ok(())
    }
}

/// The `CREATE TYPE` statement.
#[doc(hidden)]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreateTypeStmt {
    pub name: ObjectName,
    pub representation: UserDefinedTypeRepresentation,
}

/// The body of a `CREATE TYPE`.
#[doc(hidden)]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UserDefinedTypeRepresentation {
    /// `AS (attr type, ...)`
    Composite {
        attributes: Vec<UserDefinedTypeCompositeAttributeDef>,
    },
    /// `AS ENUM ('a', 'b')`
    Enum { labels: Vec<String> },
}

/// An attribute of a composite user-defined type.
#[doc(hidden)]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserDefinedTypeCompositeAttributeDef {
    pub name: Ident,
    pub data_type: DataType,
}

impl fmt::Display for UserDefinedTypeCompositeAttributeDef {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.name, self.data_type)
    }
}

impl fmt::Display for CreateTypeStmt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "CREATE TYPE {} AS ", self.name)?;
        match &self.representation {
            UserDefinedTypeRepresentation::Composite { attributes } => {
                write!(f, "({})", display_comma_separated(attributes))
            }
            UserDefinedTypeRepresentation::Enum { labels } => {
                f.write_str("ENUM (")?;
                for (i, label) in labels.iter().enumerate() {
                    if i != 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "'{}'", escape_single_quote_string(label))?;
                }
                f.write_str(")")
            }
        }
    }
}

/// The `ALTER TYPE` statement.
#[doc(hidden)]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlterTypeStmt {
    pub name: ObjectName,
    pub operation: AlterTypeOperation,
}

/// An operation of an `ALTER TYPE`.
#[doc(hidden)]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AlterTypeOperation {
    RenameTo(Ident),
    AddValue(String),
    RenameValue { from: String, to: String },
}

impl fmt::Display for AlterTypeStmt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ALTER TYPE {} ", self.name)?;
        match &self.operation {
            AlterTypeOperation::RenameTo(name) => write!(f, "RENAME TO {name}"),
            AlterTypeOperation::AddValue(value) => {
                write!(f, "ADD VALUE '{}'", escape_single_quote_string(value))
            }
            AlterTypeOperation::RenameValue { from, to } => write!(
                f,
                "RENAME VALUE '{}' TO '{}'",
                escape_single_quote_string(from),
                escape_single_quote_string(to)
            ),
        }
    }
}

/// The `CREATE CONNECTOR` statement (Hive).
#[doc(hidden)]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreateConnectorStmt {
    pub name: Ident,
    pub if_not_exists: bool,
    pub connector_type: Option<String>,
    pub url: Option<String>,
    pub comment: Option<String>,
    pub with_dcproperties: Vec<SqlOption>,
}

impl fmt::Display for CreateConnectorStmt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "CREATE CONNECTOR {if_not_exists}{name}",
            if_not_exists = if self.if_not_exists { "IF NOT EXISTS " } else { "" },
            name = self.name,
        )?;
        if let Some(connector_type) = &self.connector_type {
            write!(f, " TYPE '{}'", escape_single_quote_string(connector_type))?;
        }
        if let Some(url) = &self.url {
            write!(f, " URL '{}'", escape_single_quote_string(url))?;
        }
        if let Some(comment) = &self.comment {
            write!(f, " COMMENT '{}'", escape_single_quote_string(comment))?;
        }
        if !self.with_dcproperties.is_empty() {
            write!(
                f,
                " WITH DCPROPERTIES ({})",
                display_comma_separated(&self.with_dcproperties)
            )?;
        }
        Ok(())
    }
}

/// The `ALTER CONNECTOR` statement (Hive).
#[doc(hidden)]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlterConnectorStmt {
    pub name: Ident,
    pub properties: Option<Vec<SqlOption>>,
    pub url: Option<String>,
    pub owner: Option<Owner>,
}

impl fmt::Display for AlterConnectorStmt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ALTER CONNECTOR {}", self.name)?;
        if let Some(properties) = &self.properties {
            write!(
                f,
                " SET DCPROPERTIES ({})",
                display_comma_separated(properties)
            )?;
        }
        if let Some(url) = &self.url {
            write!(f, " SET URL '{}'", escape_single_quote_string(url))?;
        }
        if let Some(owner) = &self.owner {
            write!(f, " SET OWNER {owner}")?;
        }
        Ok(())
    }
}

/// The `CREATE SERVER` statement (PostgreSQL foreign data wrappers).
#[doc(hidden)]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreateServerStmt {
    pub name: ObjectName,
    pub if_not_exists: bool,
    pub server_type: Option<Ident>,
    pub version: Option<String>,
    pub foreign_data_wrapper: ObjectName,
    pub options: Vec<SqlOption>,
}

impl fmt::Display for CreateServerStmt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "CREATE SERVER {if_not_exists}{name}",
            if_not_exists = if self.if_not_exists { "IF NOT EXISTS " } else { "" },
            name = self.name,
        )?;
        if let Some(server_type) = &self.server_type {
            write!(f, " TYPE {server_type}")?;
        }
        if let Some(version) = &self.version {
            write!(f, " VERSION '{}'", escape_single_quote_string(version))?;
        }
        write!(f, " FOREIGN DATA WRAPPER {}", self.foreign_data_wrapper)?;
        if !self.options.is_empty() {
            write!(f, " OPTIONS ({})", display_comma_separated(&self.options))?;
        }
        Ok(())
    }
}

// ============================================================================
// DROP statements
// ============================================================================

/// The object kind of a generic `DROP` statement.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum ObjectType {
    Table,
    View,
    Index,
    Schema,
    Database,
    Role,
    Sequence,
    Type,
    Stage,
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            ObjectType::Table => "TABLE",
            ObjectType::View => "VIEW",
            ObjectType::Index => "INDEX",
            ObjectType::Schema => "SCHEMA",
            ObjectType::Database => "DATABASE",
            ObjectType::Role => "ROLE",
            ObjectType::Sequence => "SEQUENCE",
            ObjectType::Type => "TYPE",
            ObjectType::Stage => "STAGE",
        })
    }
}

/// The generic `DROP` statement.
///
/// ```txt
/// DROP <object-type> [ IF EXISTS ] <name> [, ...]
///     [ CASCADE | RESTRICT ] [ PURGE ]
/// ```
#[doc(hidden)]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DropStmt {
    pub object_type: ObjectType,
    pub if_exists: bool,
    pub names: Vec<ObjectName>,
    pub behavior: Option<DropBehavior>,
    /// Hive: `PURGE` skips the trash.
    pub purge: bool,
    /// MySQL: `DROP TEMPORARY TABLE`.
    pub temporary: bool,
}

impl fmt::Display for DropStmt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "DROP {temporary}{object_type} {if_exists}{names}",
            temporary = if self.temporary { "TEMPORARY " } else { "" },
            object_type = self.object_type,
            if_exists = if self.if_exists { "IF EXISTS " } else { "" },
            names = display_comma_separated(&self.names),
        )?;
        if let Some(behavior) = &self.behavior {
            write!(f, " {behavior}")?;
        }
        if self.purge {
            f.write_str(" PURGE")?;
        }
        Ok(())
    }
}

/// A function name with an optional argument signature, as used by
/// `DROP FUNCTION`.
#[doc(hidden)]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FunctionDesc {
    pub name: ObjectName,
    pub args: Option<Vec<OperateFunctionArg>>,
}

impl fmt::Display for FunctionDesc {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(args) = &self.args {
            write!(f, "({})", display_comma_separated(args))?;
        }
        Ok(())
    }
}

/// The `DROP FUNCTION` statement.
#[doc(hidden)]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DropFunctionStmt {
    pub if_exists: bool,
    pub func_desc: Vec<FunctionDesc>,
    pub behavior: Option<DropBehavior>,
}

impl fmt::Display for DropFunctionStmt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "DROP FUNCTION {if_exists}{func_desc}",
            if_exists = if self.if_exists { "IF EXISTS " } else { "" },
            func_desc = display_comma_separated(&self.func_desc),
        )?;
        if let Some(behavior) = &self.behavior {
            write!(f, " {behavior}")?;
        }
        Ok(())
    }
}

/// The `DROP POLICY` statement.
#[doc(hidden)]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DropPolicyStmt {
    pub if_exists: bool,
    pub name: Ident,
    pub table_name: ObjectName,
    pub behavior: Option<DropBehavior>,
}

impl fmt::Display for DropPolicyStmt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "DROP POLICY {if_exists}{name} ON {table}",
            if_exists = if self.if_exists { "IF EXISTS " } else { "" },
            name = self.name,
            table = self.table_name,
        )?;
        if let Some(behavior) = &self.behavior {
            write!(f, " {behavior}")?;
        }
        Ok(())
    }
}

/// The `DROP TRIGGER` statement.
#[doc(hidden)]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DropTriggerStmt {
    pub if_exists: bool,
    pub trigger_name: ObjectName,
    pub table_name: ObjectName,
    pub behavior: Option<DropBehavior>,
}

impl fmt::Display for DropTriggerStmt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "DROP TRIGGER {if_exists}{name} ON {table}",
            if_exists = if self.if_exists { "IF EXISTS " } else { "" },
            name = self.trigger_name,
            table = self.table_name,
        )?;
        if let Some(behavior) = &self.behavior {
            write!(f, " {behavior}")?;
        }
        Ok(())
    }
}

/// The signature of an operator, as used by `DROP OPERATOR`: the operator
/// symbol plus its left and right operand types (`NONE` for prefix
/// operators).
#[doc(hidden)]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OperatorSignature {
    pub operator: String,
    pub left_type: Option<DataType>,
    pub right_type: Option<DataType>,
}

impl fmt::Display for OperatorSignature {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} (", self.operator)?;
        match &self.left_type {
            Some(t) => write!(f, "{t}")?,
            None => f.write_str("NONE")?,
        }
        f.write_str(", ")?;
        match &self.right_type {
            Some(t) => write!(f, "{t}")?,
            None => f.write_str("NONE")?,
        }
        f.write_str(")")
    }
}

/// The `DROP OPERATOR` statement (PostgreSQL).
#[doc(hidden)]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DropOperatorStmt {
    pub if_exists: bool,
    pub operators: Vec<OperatorSignature>,
    pub behavior: Option<DropBehavior>,
}

impl fmt::Display for DropOperatorStmt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "DROP OPERATOR {if_exists}{operators}",
            if_exists = if self.if_exists { "IF EXISTS " } else { "" },
            operators = display_comma_separated(&self.operators),
        )?;
        if let Some(behavior) = &self.behavior {
            write!(f, " {behavior}")?;
        }
        Ok(())
    }
}

/// The `DROP OPERATOR CLASS` / `DROP OPERATOR FAMILY` statements
/// (PostgreSQL); both have the same shape.
#[doc(hidden)]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DropOperatorEntityStmt {
    pub if_exists: bool,
    pub name: ObjectName,
    pub using: Ident,
    pub behavior: Option<DropBehavior>,
}

impl DropOperatorEntityStmt {
    pub(crate) fn display(&self, f: &mut fmt::Formatter, entity: &str) -> fmt::Result {
        write!(
            f,
            "DROP OPERATOR {entity} {if_exists}{name} USING {using}",
            if_exists = if self.if_exists { "IF EXISTS " } else { "" },
            name = self.name,
            using = self.using,
        )?;
        if let Some(behavior) = &self.behavior {
            write!(f, " {behavior}")?;
        }
        Ok(())
    }
}

/// The `DROP USER` statement.
#[doc(hidden)]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DropUserStmt {
    pub if_exists: bool,
    pub names: Vec<Ident>,
}

impl fmt::Display for DropUserStmt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "DROP USER {if_exists}{names}",
            if_exists = if self.if_exists { "IF EXISTS " } else { "" },
            names = display_comma_separated(&self.names),
        )
    }
}

/// The `DROP DOMAIN` statement.
#[doc(hidden)]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DropDomainStmt {
    pub if_exists: bool,
    pub name: ObjectName,
    pub behavior: Option<DropBehavior>,
}

impl fmt::Display for DropDomainStmt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "DROP DOMAIN {if_exists}{name}",
            if_exists = if self.if_exists { "IF EXISTS " } else { "" },
            name = self.name,
        )?;
        if let Some(behavior) = &self.behavior {
            write!(f, " {behavior}")?;
        }
        Ok(())
    }
}

/// The `DROP CONNECTOR` statement (Hive).
#[doc(hidden)]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DropConnectorStmt {
    pub if_exists: bool,
    pub name: Ident,
}

impl fmt::Display for DropConnectorStmt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "DROP CONNECTOR {if_exists}{name}",
            if_exists = if self.if_exists { "IF EXISTS " } else { "" },
            name = self.name,
        )
    }
}

/// The `DROP EXTENSION` statement (PostgreSQL).
#[doc(hidden)]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DropExtensionStmt {
    pub if_exists: bool,
    pub names: Vec<Ident>,
    pub behavior: Option<DropBehavior>,
}

impl fmt::Display for DropExtensionStmt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "DROP EXTENSION {if_exists}{names}",
            if_exists = if self.if_exists { "IF EXISTS " } else { "" },
            names = display_comma_separated(&self.names),
        )?;
        if let Some(behavior) = &self.behavior {
            write!(f, " {behavior}")?;
        }
        Ok(())
    }
}

/// What a `COMMENT ON` statement attaches to.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum CommentObject {
    Column,
    Table,
    View,
    Schema,
    Database,
}

impl fmt::Display for CommentObject {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            CommentObject::Column => "COLUMN",
            CommentObject::Table => "TABLE",
            CommentObject::View => "VIEW",
            CommentObject::Schema => "SCHEMA",
            CommentObject::Database => "DATABASE",
        })
    }
}
