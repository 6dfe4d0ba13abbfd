#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, string::String, vec::Vec};
use core::fmt;

use crate::ast::{
    display_comma_separated, display_separated, escape_single_quote_string, AlterConnectorStmt,
    AlterIndexStmt, AlterSchemaStmt, AlterSequenceStmt, AlterTableStmt, AlterTypeStmt,
    AlterUserStmt, AlterViewStmt, CommentObject, CopyStmt, CreateConnectorStmt,
    CreateDatabaseStmt, CreateFunctionStmt, CreateIndexStmt, CreatePolicyStmt,
    CreateProcedureStmt, CreateRoleStmt, CreateSchemaStmt, CreateSequenceStmt, CreateServerStmt,
    CreateTableStmt, CreateTriggerStmt, CreateTypeStmt, CreateViewStmt, DataType, DeleteStmt,
    DropConnectorStmt, DropDomainStmt, DropExtensionStmt, DropFunctionStmt,
    DropOperatorEntityStmt, DropOperatorStmt, DropPolicyStmt, DropStmt, DropTriggerStmt,
    DropUserStmt, Expr, Function, Ident, InsertStmt, MergeStmt, ObjectName, Query, SqlOption,
    TruncateStmt, UnloadStmt, UpdateStmt, Value,
};

/// A top-level statement (SELECT, INSERT, CREATE, etc.)
#[allow(clippy::large_enum_variant)]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Statement {
    /// A `SELECT` / `VALUES` / `TABLE` query, possibly with set operations.
    Query(Box<Query>),

    // ========================================================================
    // Data manipulation
    // ========================================================================
    /// `INSERT INTO ...`
    Insert(InsertStmt),
    /// `UPDATE ... SET ...`
    Update(UpdateStmt),
    /// `DELETE FROM ...`
    Delete(DeleteStmt),
    /// `MERGE INTO ...`
    Merge(MergeStmt),
    /// `COPY ...`
    Copy(CopyStmt),
    /// `TRUNCATE [TABLE] ...`
    Truncate(TruncateStmt),
    /// `UNLOAD(...) TO ...`
    Unload(UnloadStmt),

    // ========================================================================
    // Data definition
    // ========================================================================
    /// `CREATE TABLE ...`
    CreateTable(CreateTableStmt),
    /// `CREATE VIEW ...`
    CreateView(CreateViewStmt),
    /// `CREATE INDEX ...`
    CreateIndex(CreateIndexStmt),
    /// `CREATE SCHEMA ...`
    CreateSchema(CreateSchemaStmt),
    /// `CREATE DATABASE ...`
    CreateDatabase(CreateDatabaseStmt),
    /// `CREATE ROLE ...`
    CreateRole(CreateRoleStmt),
    /// `CREATE FUNCTION ...`
    CreateFunction(CreateFunctionStmt),
    /// `CREATE PROCEDURE ...`
    CreateProcedure(CreateProcedureStmt),
    /// `CREATE TRIGGER ...`
    CreateTrigger(CreateTriggerStmt),
    /// `CREATE POLICY ...`
    CreatePolicy(CreatePolicyStmt),
    /// `CREATE SEQUENCE ...`
    CreateSequence(CreateSequenceStmt),
    /// `CREATE TYPE ...`
    CreateType(CreateTypeStmt),
    /// `CREATE CONNECTOR ...`
    CreateConnector(CreateConnectorStmt),
    /// `CREATE SERVER ...`
    CreateServer(CreateServerStmt),
    /// `ALTER TABLE ...`
    AlterTable(AlterTableStmt),
    /// `ALTER INDEX ...`
    AlterIndex(AlterIndexStmt),
    /// `ALTER VIEW ...`
    AlterView(AlterViewStmt),
    /// `ALTER SCHEMA ...`
    AlterSchema(AlterSchemaStmt),
    /// `ALTER TYPE ...`
    AlterType(AlterTypeStmt),
    /// `ALTER USER ...`
    AlterUser(AlterUserStmt),
    /// `ALTER SEQUENCE ...`
    AlterSequence(AlterSequenceStmt),
    /// `ALTER CONNECTOR ...`
    AlterConnector(AlterConnectorStmt),
    /// `DROP { TABLE | VIEW | ... } ...`
    Drop(DropStmt),
    /// `DROP FUNCTION ...`
    DropFunction(DropFunctionStmt),
    /// `DROP POLICY ...`
    DropPolicy(DropPolicyStmt),
    /// `DROP TRIGGER ...`
    DropTrigger(DropTriggerStmt),
    /// `DROP OPERATOR ...`
    DropOperator(DropOperatorStmt),
    /// `DROP OPERATOR CLASS ...`
    DropOperatorClass(DropOperatorEntityStmt),
    /// `DROP OPERATOR FAMILY ...`
    DropOperatorFamily(DropOperatorEntityStmt),
    /// `DROP USER ...`
    DropUser(DropUserStmt),
    /// `DROP DOMAIN ...`
    DropDomain(DropDomainStmt),
    /// `DROP CONNECTOR ...`
    DropConnector(DropConnectorStmt),
    /// `DROP EXTENSION ...`
    DropExtension(DropExtensionStmt),

    // ========================================================================
    // Access control
    // ========================================================================
    /// `GRANT <privileges> ON <objects> TO <grantees>`
    Grant {
        /// The granted privileges.
        privileges: Privileges,
        /// The objects granted on.
        objects: GrantObjects,
        /// The receiving roles.
        grantees: Vec<Ident>,
        /// `WITH GRANT OPTION`
        with_grant_option: bool,
        /// `GRANTED BY <role>`
        granted_by: Option<Ident>,
    },
    /// `REVOKE <privileges> ON <objects> FROM <grantees>`
    Revoke {
        /// The revoked privileges.
        privileges: Privileges,
        /// The objects revoked on.
        objects: GrantObjects,
        /// The affected roles.
        grantees: Vec<Ident>,
        /// `GRANTED BY <role>`
        granted_by: Option<Ident>,
        /// Trailing `CASCADE` / `RESTRICT`.
        cascade: Option<bool>,
    },
    /// `DENY <privileges> ON <objects> TO <grantees>` (MSSQL)
    Deny {
        /// The denied privileges.
        privileges: Privileges,
        /// The objects denied on.
        objects: GrantObjects,
        /// The affected roles.
        grantees: Vec<Ident>,
    },

    // ========================================================================
    // Transaction management
    // ========================================================================
    /// `START TRANSACTION ...` / `BEGIN [TRANSACTION | WORK]`
    StartTransaction {
        /// The requested modes.
        modes: Vec<TransactionMode>,
        /// Spelled `BEGIN` rather than `START TRANSACTION`.
        begin: bool,
    },
    /// `SET [SESSION] TRANSACTION ...`
    SetTransaction {
        /// The requested modes.
        modes: Vec<TransactionMode>,
        /// `SNAPSHOT '<id>'`
        snapshot: Option<Value>,
        /// `SET SESSION CHARACTERISTICS AS TRANSACTION` form.
        session: bool,
    },
    /// `COMMIT [ AND [NO] CHAIN ]`
    Commit {
        /// `AND CHAIN`
        chain: bool,
    },
    /// `ROLLBACK [ AND [NO] CHAIN ] [ TO [SAVEPOINT] <name> ]`
    Rollback {
        /// `AND CHAIN`
        chain: bool,
        /// `TO SAVEPOINT <name>`
        savepoint: Option<Ident>,
    },
    /// `SAVEPOINT <name>`
    Savepoint {
        /// The savepoint name.
        name: Ident,
    },
    /// `RELEASE SAVEPOINT <name>`
    ReleaseSavepoint {
        /// The savepoint name.
        name: Ident,
    },

    // ========================================================================
    // Session state
    // ========================================================================
    /// `SET [LOCAL] <variable> = <value>`
    SetVariable {
        /// `LOCAL`
        local: bool,
        /// Hive `SET hivevar:<name> = ...`
        hivevar: bool,
        /// The assigned variables (more than one in the parenthesized form).
        variables: Vec<ObjectName>,
        /// The assigned values.
        value: Vec<Expr>,
        /// `SET (a, b) = (1, 2)` form.
        parenthesized: bool,
    },
    /// `SET [LOCAL] TIME ZONE <value>`
    SetTimeZone {
        /// `LOCAL`
        local: bool,
        /// The zone value.
        value: Expr,
    },
    /// `RESET { <variable> | ALL }`
    Reset {
        /// The variable; `None` means `ALL`.
        variable: Option<ObjectName>,
    },
    /// `DISCARD { ALL | PLANS | SEQUENCES | TEMP }`
    Discard {
        /// What to discard.
        object_type: DiscardObject,
    },
    /// `USE <database>`
    Use {
        /// The database name.
        db_name: Ident,
    },

    // ========================================================================
    // Introspection
    // ========================================================================
    /// `SHOW <variable>`
    ShowVariable {
        /// The variable name parts.
        variable: Vec<Ident>,
    },
    /// `SHOW CREATE { TABLE | ... } <name>`
    ShowCreate {
        /// The object kind.
        obj_type: ShowCreateObject,
        /// The object name.
        obj_name: ObjectName,
    },
    /// `SHOW [EXTENDED] [FULL] TABLES [ { FROM | IN } <db> ] [ <filter> ]`
    ShowTables {
        /// `EXTENDED`
        extended: bool,
        /// `FULL`
        full: bool,
        /// `FROM`/`IN` database.
        db_name: Option<Ident>,
        /// Trailing filter.
        filter: Option<ShowStatementFilter>,
    },
    /// `SHOW [EXTENDED] [FULL] COLUMNS { FROM | IN } <table> [ <filter> ]`
    ShowColumns {
        /// `EXTENDED`
        extended: bool,
        /// `FULL`
        full: bool,
        /// The inspected table.
        table_name: ObjectName,
        /// Trailing filter.
        filter: Option<ShowStatementFilter>,
    },
    /// `SHOW FUNCTIONS [ <filter> ]`
    ShowFunctions {
        /// Trailing filter.
        filter: Option<ShowStatementFilter>,
    },
    /// `SHOW COLLATION [ <filter> ]`
    ShowCollation {
        /// Trailing filter.
        filter: Option<ShowStatementFilter>,
    },

    // ========================================================================
    // Utility
    // ========================================================================
    /// `EXPLAIN` / `DESCRIBE` of a statement
    Explain {
        /// Spelled `DESCRIBE`/`DESC` rather than `EXPLAIN`.
        describe_alias: bool,
        /// `ANALYZE`
        analyze: bool,
        /// `VERBOSE`
        verbose: bool,
        /// The explained statement.
        statement: Box<Statement>,
        /// `FORMAT { TEXT | GRAPHVIZ | JSON }`
        format: Option<AnalyzeFormat>,
        /// PostgreSQL `EXPLAIN (opt [arg], ...)` utility options.
        options: Option<Vec<UtilityOption>>,
    },
    /// `EXPLAIN <table>` / `DESCRIBE <table>`
    ExplainTable {
        /// Spelled `DESCRIBE`/`DESC` rather than `EXPLAIN`.
        describe_alias: bool,
        /// The described table.
        table_name: ObjectName,
    },
    /// `COMMENT ON <object> IS { '<text>' | NULL }`
    Comment {
        /// The commented object kind.
        object_type: CommentObject,
        /// The commented object.
        object_name: ObjectName,
        /// The comment text; `NULL` clears it.
        comment: Option<String>,
        /// `IF EXISTS` (Snowflake extension).
        if_exists: bool,
    },
    /// `CACHE [LAZY] TABLE <name> [ OPTIONS (...) ] [ [AS] <query> ]` (Spark)
    Cache {
        /// `LAZY`
        lazy: bool,
        /// The cached table.
        table_name: ObjectName,
        /// `OPTIONS (...)`
        options: Vec<SqlOption>,
        /// The optional source query.
        query: Option<Box<Query>>,
    },
    /// `UNCACHE TABLE [IF EXISTS] <name>` (Spark)
    UNCache {
        /// The table to evict.
        table_name: ObjectName,
        /// `IF EXISTS`
        if_exists: bool,
    },
    /// `LISTEN <channel>` (PostgreSQL)
    Listen {
        /// The channel name.
        channel: Ident,
    },
    /// `NOTIFY <channel> [ , '<payload>' ]` (PostgreSQL)
    Notify {
        /// The channel name.
        channel: Ident,
        /// The payload.
        payload: Option<String>,
    },
    /// `PREPARE <name> [ (<types>) ] AS <statement>`
    Prepare {
        /// The prepared-statement name.
        name: Ident,
        /// The parameter types.
        data_types: Vec<DataType>,
        /// The prepared statement.
        statement: Box<Statement>,
    },
    /// `EXECUTE <name> [ (<parameters>) ]`
    Execute {
        /// The prepared-statement name.
        name: Ident,
        /// The bound parameters.
        parameters: Vec<Expr>,
    },
    /// `EXECUTE IMMEDIATE <sql> [ USING <exprs> ]` (BigQuery)
    ExecuteImmediate {
        /// The statement text expression.
        statement: Box<Expr>,
        /// `USING` bindings.
        using: Vec<Expr>,
    },
    /// `DEALLOCATE [PREPARE] <name>`
    Deallocate {
        /// The prepared-statement name.
        name: Ident,
        /// `PREPARE` was spelled out.
        prepare: bool,
    },
    /// `VACUUM [FULL] [FREEZE] [ANALYZE] [ <table> ]` (PostgreSQL)
    Vacuum {
        /// `FULL`
        full: bool,
        /// `FREEZE`
        freeze: bool,
        /// `ANALYZE`
        analyze: bool,
        /// The vacuumed table.
        table_name: Option<ObjectName>,
    },
    /// `RAISE [ <expr> ]`
    Raise {
        /// The raised value.
        value: Option<Box<Expr>>,
    },
    /// `RAISERROR(<message>, <severity>, <state> [, <args>])` (MSSQL)
    RaiseError {
        /// The message expression.
        message: Box<Expr>,
        /// The severity.
        severity: Box<Expr>,
        /// The state.
        state: Box<Expr>,
        /// Substitution arguments.
        arguments: Vec<Expr>,
    },
    /// `PRINT <expr>` (MSSQL)
    Print {
        /// The printed expression.
        message: Box<Expr>,
    },
    /// `CALL <function>`
    Call(Function),
    /// `ASSERT <condition> [ AS <message> ]` (BigQuery)
    Assert {
        /// The asserted condition.
        condition: Expr,
        /// The failure message.
        message: Option<Expr>,
    },
    /// `LOCK TABLES <table> [ AS <alias> ] { READ | WRITE } [, ...]` (MySQL)
    LockTables {
        /// The locked tables.
        tables: Vec<LockTable>,
    },

    // ========================================================================
    // Control flow
    // ========================================================================
    /// `IF ... THEN ... [ELSEIF ...] [ELSE ...] END IF`
    If(IfStmt),
    /// `WHILE ... DO ... END WHILE`
    While(WhileStmt),
    /// `CASE [operand] WHEN ... THEN ... END CASE`
    CaseStatement(CaseStmt),
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Query(query) => write!(f, "{query}"),
            Self::Insert(stmt) => write!(f, "{stmt}"),
            Self::Update(stmt) => write!(f, "{stmt}"),
            Self::Delete(stmt) => write!(f, "{stmt}"),
            Self::Merge(stmt) => write!(f, "{stmt}"),
            Self::Copy(stmt) => write!(f, "{stmt}"),
            Self::Truncate(stmt) => write!(f, "{stmt}"),
            Self::Unload(stmt) => write!(f, "{stmt}"),
            Self::CreateTable(stmt) => write!(f, "{stmt}"),
            Self::CreateView(stmt) => write!(f, "{stmt}"),
            Self::CreateIndex(stmt) => write!(f, "{stmt}"),
            Self::CreateSchema(stmt) => write!(f, "{stmt}"),
            Self::CreateDatabase(stmt) => write!(f, "{stmt}"),
            Self::CreateRole(stmt) => write!(f, "{stmt}"),
            Self::CreateFunction(stmt) => write!(f, "{stmt}"),
            Self::CreateProcedure(stmt) => write!(f, "{stmt}"),
            Self::CreateTrigger(stmt) => write!(f, "{stmt}"),
            Self::CreatePolicy(stmt) => write!(f, "{stmt}"),
            Self::CreateSequence(stmt) => write!(f, "{stmt}"),
            Self::CreateType(stmt) => write!(f, "{stmt}"),
            Self::CreateConnector(stmt) => write!(f, "{stmt}"),
            Self::CreateServer(stmt) => write!(f, "{stmt}"),
            Self::AlterTable(stmt) => write!(f, "{stmt}"),
            Self::AlterIndex(stmt) => write!(f, "{stmt}"),
            Self::AlterView(stmt) => write!(f, "{stmt}"),
            Self::AlterSchema(stmt) => write!(f, "{stmt}"),
            Self::AlterType(stmt) => write!(f, "{stmt}"),
            Self::AlterUser(stmt) => write!(f, "{stmt}"),
            Self::AlterSequence(stmt) => write!(f, "{stmt}"),
            Self::AlterConnector(stmt) => write!(f, "{stmt}"),
            Self::Drop(stmt) => write!(f, "{stmt}"),
            Self::DropFunction(stmt) => write!(f, "{stmt}"),
            Self::DropPolicy(stmt) => write!(f, "{stmt}"),
            Self::DropTrigger(stmt) => write!(f, "{stmt}"),
            Self::DropOperator(stmt) => write!(f, "{stmt}"),
            Self::DropOperatorClass(stmt) => stmt.display(f, "CLASS"),
            Self::DropOperatorFamily(stmt) => stmt.display(f, "FAMILY"),
            Self::DropUser(stmt) => write!(f, "{stmt}"),
            Self::DropDomain(stmt) => write!(f, "{stmt}"),
            Self::DropConnector(stmt) => write!(f, "{stmt}"),
            Self::DropExtension(stmt) => write!(f, "{stmt}"),
            Self::Grant {
                privileges,
                objects,
                grantees,
                with_grant_option,
                granted_by,
            } => {
                write!(f, "GRANT {privileges} ")?;
                write!(f, "ON {objects} ")?;
                write!(f, "TO {}", display_comma_separated(grantees))?;
                if *with_grant_option {
                    f.write_str(" WITH GRANT OPTION")?;
                }
                if let Some(grantor) = granted_by {
                    write!(f, " GRANTED BY {grantor}")?;
                }
                Ok(())
            }
            Self::Revoke {
                privileges,
                objects,
                grantees,
                granted_by,
                cascade,
            } => {
                write!(f, "REVOKE {privileges} ")?;
                write!(f, "ON {objects} ")?;
                write!(f, "FROM {}", display_comma_separated(grantees))?;
                if let Some(grantor) = granted_by {
                    write!(f, " GRANTED BY {grantor}")?;
                }
                match cascade {
                    Some(true) => f.write_str(" CASCADE")?,
                    Some(false) => f.write_str(" RESTRICT")?,
                    None => {}
                }
                Ok(())
            }
            Self::Deny {
                privileges,
                objects,
                grantees,
            } => {
                write!(
                    f,
                    "DENY {privileges} ON {objects} TO {}",
                    display_comma_separated(grantees)
                )
            }
            Self::StartTransaction { modes, begin } => {
                if *begin {
                    f.write_str("BEGIN TRANSACTION")?;
                } else {
                    f.write_str("START TRANSACTION")?;
                }
                if !modes.is_empty() {
                    write!(f, " {}", display_comma_separated(modes))?;
                }
                Ok(())
            }
            Self::SetTransaction {
                modes,
                snapshot,
                session,
            } => {
                if *session {
                    f.write_str("SET SESSION CHARACTERISTICS AS TRANSACTION")?;
                } else {
                    f.write_str("SET TRANSACTION")?;
                }
                if !modes.is_empty() {
                    write!(f, " {}", display_comma_separated(modes))?;
                }
                if let Some(snapshot_id) = snapshot {
                    write!(f, " SNAPSHOT {snapshot_id}")?;
                }
                Ok(())
            }
            Self::Commit { chain } => {
                write!(f, "COMMIT{}", if *chain { " AND CHAIN" } else { "" })
            }
            Self::Rollback { chain, savepoint } => {
                f.write_str("ROLLBACK")?;
                if *chain {
                    f.write_str(" AND CHAIN")?;
                }
                if let Some(savepoint) = savepoint {
                    write!(f, " TO SAVEPOINT {savepoint}")?;
                }
                Ok(())
            }
            Self::Savepoint { name } => write!(f, "SAVEPOINT {name}"),
            Self::ReleaseSavepoint { name } => write!(f, "RELEASE SAVEPOINT {name}"),
            Self::SetVariable {
                local,
                hivevar,
                variables,
                value,
                parenthesized,
            } => {
                f.write_str("SET ")?;
                if *local {
                    f.write_str("LOCAL ")?;
                }
                if *hivevar {
                    f.write_str("HIVEVAR:")?;
                }
                if *parenthesized {
                    write!(f, "({})", display_comma_separated(variables))?;
                } else {
                    write!(f, "{}", display_comma_separated(variables))?;
                }
                f.write_str(" = ")?;
                if *parenthesized {
                    write!(f, "({})", display_comma_separated(value))
                } else {
                    write!(f, "{}", display_comma_separated(value))
                }
            }
            Self::SetTimeZone { local, value } => {
                f.write_str("SET ")?;
                if *local {
                    f.write_str("LOCAL ")?;
                }
                write!(f, "TIME ZONE {value}")
            }
            Self::Reset { variable } => match variable {
                Some(variable) => write!(f, "RESET {variable}"),
                None => f.write_str("RESET ALL"),
            },
            Self::Discard { object_type } => write!(f, "DISCARD {object_type}"),
            Self::Use { db_name } => write!(f, "USE {db_name}"),
            Self::ShowVariable { variable } => {
                f.write_str("SHOW")?;
                if !variable.is_empty() {
                    write!(f, " {}", display_separated(variable, " "))?;
                }
                Ok(())
            }
            Self::ShowCreate { obj_type, obj_name } => {
                write!(f, "SHOW CREATE {obj_type} {obj_name}")
            }
            Self::ShowTables {
                extended,
                full,
                db_name,
                filter,
            } => {
                write!(
                    f,
                    "SHOW {extended}{full}TABLES",
                    extended = if *extended { "EXTENDED " } else { "" },
                    full = if *full { "FULL " } else { "" },
                )?;
                if let Some(db_name) = db_name {
                    write!(f, " FROM {db_name}")?;
                }
                if let Some(filter) = filter {
                    write!(f, " {filter}")?;
                }
                Ok(())
            }
            Self::ShowColumns {
                extended,
                full,
                table_name,
                filter,
            } => {
                write!(
                    f,
                    "SHOW {extended}{full}COLUMNS FROM {table_name}",
                    extended = if *extended { "EXTENDED " } else { "" },
                    full = if *full { "FULL " } else { "" },
                )?;
                if let Some(filter) = filter {
                    write!(f, " {filter}")?;
                }
                Ok(())
            }
            Self::ShowFunctions { filter } => {
                f.write_str("SHOW FUNCTIONS")?;
                if let Some(filter) = filter {
                    write!(f, " {filter}")?;
                }
                Ok(())
            }
            Self::ShowCollation { filter } => {
                f.write_str("SHOW COLLATION")?;
                if let Some(filter) = filter {
                    write!(f, " {filter}")?;
                }
                Ok(())
            }
            Self::Explain {
                describe_alias,
                analyze,
                verbose,
                statement,
                format,
                options,
            } => {
                f.write_str(if *describe_alias { "DESCRIBE " } else { "EXPLAIN " })?;
                if let Some(options) = options {
                    write!(f, "({}) ", display_comma_separated(options))?;
                }
                if *analyze {
                    f.write_str("ANALYZE ")?;
                }
                if *verbose {
                    f.write_str("VERBOSE ")?;
                }
                if let Some(format) = format {
                    write!(f, "FORMAT {format} ")?;
                }
                write!(f, "{statement}")
            }
            Self::ExplainTable {
                describe_alias,
                table_name,
            } => {
                f.write_str(if *describe_alias { "DESCRIBE " } else { "EXPLAIN " })?;
                write!(f, "{table_name}")
            }
            Self::Comment {
                object_type,
                object_name,
                comment,
                if_exists,
            } => {
                f.write_str("COMMENT ")?;
                if *if_exists {
                    f.write_str("IF EXISTS ")?;
                }
                write!(f, "ON {object_type} {object_name} IS ")?;
                match comment {
                    Some(comment) => write!(f, "'{}'", escape_single_quote_string(comment)),
                    None => f.write_str("NULL"),
                }
            }
            Self::Cache {
                lazy,
                table_name,
                options,
                query,
            } => {
                write!(
                    f,
                    "CACHE {lazy}TABLE {table_name}",
                    lazy = if *lazy { "LAZY " } else { "" },
                )?;
                if !options.is_empty() {
                    write!(f, " OPTIONS ({})", display_comma_separated(options))?;
                }
                if let Some(query) = query {
                    write!(f, " AS {query}")?;
                }
                Ok(())
            }
            Self::UNCache {
                table_name,
                if_exists,
            } => {
                write!(
                    f,
                    "UNCACHE TABLE {if_exists}{table_name}",
                    if_exists = if *if_exists { "IF EXISTS " } else { "" },
                )
            }
            Self::Listen { channel } => write!(f, "LISTEN {channel}"),
            Self::Notify { channel, payload } => {
                write!(f, "NOTIFY {channel}")?;
                if let Some(payload) = payload {
                    write!(f, ", '{}'", escape_single_quote_string(payload))?;
                }
                Ok(())
            }
            Self::Prepare {
                name,
                data_types,
                statement,
            } => {
                write!(f, "PREPARE {name} ")?;
                if !data_types.is_empty() {
                    write!(f, "({}) ", display_comma_separated(data_types))?;
                }
                write!(f, "AS {statement}")
            }
            Self::Execute { name, parameters } => {
                write!(f, "EXECUTE {name}")?;
                if !parameters.is_empty() {
                    write!(f, "({})", display_comma_separated(parameters))?;
                }
                Ok(())
            }
            Self::ExecuteImmediate { statement, using } => {
                write!(f, "EXECUTE IMMEDIATE {statement}")?;
                if !using.is_empty() {
                    write!(f, " USING {}", display_comma_separated(using))?;
                }
                Ok(())
            }
            Self::Deallocate { name, prepare } => {
                write!(
                    f,
                    "DEALLOCATE {prepare}{name}",
                    prepare = if *prepare { "PREPARE " } else { "" },
                )
            }
            Self::Vacuum {
                full,
                freeze,
                analyze,
                table_name,
            } => {
                f.write_str("VACUUM")?;
                if *full {
                    f.write_str(" FULL")?;
                }
                if *freeze {
                    f.write_str(" FREEZE")?;
                }
                if *analyze {
                    f.write_str(" ANALYZE")?;
                }
                if let Some(table_name) = table_name {
                    write!(f, " {table_name}")?;
                }
                Ok(())
            }
            Self::Raise { value } => {
                f.write_str("RAISE")?;
                if let Some(value) = value {
                    write!(f, " {value}")?;
                }
                Ok(())
            }
            Self::RaiseError {
                message,
                severity,
                state,
                arguments,
            } => {
                write!(f, "RAISERROR({message}, {severity}, {state}")?;
                if !arguments.is_empty() {
                    write!(f, ", {}", display_comma_separated(arguments))?;
                }
                f.write_str(")")
            }
            Self::Print { message } => write!(f, "PRINT {message}"),
            Self::Call(function) => write!(f, "CALL {function}"),
            Self::Assert { condition, message } => {
                write!(f, "ASSERT {condition}")?;
                if let Some(message) = message {
                    write!(f, " AS {message}")?;
                }
                Ok(())
            }
            Self::LockTables { tables } => {
                write!(f, "LOCK TABLES {}", display_comma_separated(tables))
            }
            Self::If(stmt) => write!(f, "{stmt}"),
            Self::While(stmt) => write!(f, "{stmt}"),
            Self::CaseStatement(stmt) => write!(f, "{stmt}"),
        }
    }
}

// ============================================================================
// Access control support
// ============================================================================

/// The privileges of a GRANT/REVOKE/DENY.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Privileges {
    /// `ALL [PRIVILEGES]`
    All {
        /// `PRIVILEGES` was spelled out.
        with_privileges_keyword: bool,
    },
    /// A list of specific actions.
    Actions(Vec<Action>),
}

impl fmt::Display for Privileges {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Privileges::All {
                with_privileges_keyword,
            } => {
                write!(
                    f,
                    "ALL{}",
                    if *with_privileges_keyword { " PRIVILEGES" } else { "" }
                )
            }
            Privileges::Actions(actions) => write!(f, "{}", display_comma_separated(actions)),
        }
    }
}

/// A single privilege.
#[doc(hidden)]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Connect,
    Create,
    Delete,
    Execute,
    Insert { columns: Option<Vec<Ident>> },
    References { columns: Option<Vec<Ident>> },
    Select { columns: Option<Vec<Ident>> },
    Temporary,
    Trigger,
    Truncate,
    Update { columns: Option<Vec<Ident>> },
    Usage,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Action::Connect => f.write_str("CONNECT")?,
            Action::Create => f.write_str("CREATE")?,
            Action::Delete => f.write_str("DELETE")?,
            Action::Execute => f.write_str("EXECUTE")?,
            Action::Insert { .. } => f.write_str("INSERT")?,
            Action::References { .. } => f.write_str("REFERENCES")?,
            Action::Select { .. } => f.write_str("SELECT")?,
            Action::Temporary => f.write_str("TEMPORARY")?,
            Action::Trigger => f.write_str("TRIGGER")?,
            Action::Truncate => f.write_str("TRUNCATE")?,
            Action::Update { .. } => f.write_str("UPDATE")?,
            Action::Usage => f.write_str("USAGE")?,
        }
        match self {
            Action::Insert { columns }
            | Action::References { columns }
            | Action::Select { columns }
            | Action::Update { columns } => {
                if let Some(columns) = columns {
                    write!(f, " ({})", display_comma_separated(columns))?;
                }
            }
            _ => {}
        }
        Ok(())
    }
}

/// The objects a GRANT/REVOKE applies to.
#[doc(hidden)]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GrantObjects {
    /// `ALL SEQUENCES IN SCHEMA <schema> [, ...]`
    AllSequencesInSchema { schemas: Vec<ObjectName> },
    /// `ALL TABLES IN SCHEMA <schema> [, ...]`
    AllTablesInSchema { schemas: Vec<ObjectName> },
    /// `SCHEMA <schema> [, ...]`
    Schemas(Vec<ObjectName>),
    /// `SEQUENCE <sequence> [, ...]`
    Sequences(Vec<ObjectName>),
    /// `[TABLE] <table> [, ...]`
    Tables(Vec<ObjectName>),
}

impl fmt::Display for GrantObjects {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GrantObjects::AllSequencesInSchema { schemas } => {
                write!(
                    f,
                    "ALL SEQUENCES IN SCHEMA {}",
                    display_comma_separated(schemas)
                )
            }
            GrantObjects::AllTablesInSchema { schemas } => {
                write!(
                    f,
                    "ALL TABLES IN SCHEMA {}",
                    display_comma_separated(schemas)
                )
            }
            GrantObjects::Schemas(schemas) => {
                write!(f, "SCHEMA {}", display_comma_separated(schemas))
            }
            GrantObjects::Sequences(sequences) => {
                write!(f, "SEQUENCE {}", display_comma_separated(sequences))
            }
            GrantObjects::Tables(tables) => {
                write!(f, "{}", display_comma_separated(tables))
            }
        }
    }
}

// ============================================================================
// Transaction support
// ============================================================================

/// A transaction mode.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum TransactionMode {
    AccessMode(TransactionAccessMode),
    IsolationLevel(TransactionIsolationLevel),
}

impl fmt::Display for TransactionMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TransactionMode::AccessMode(access_mode) => write!(f, "{access_mode}"),
            TransactionMode::IsolationLevel(iso_level) => {
                write!(f, "ISOLATION LEVEL {iso_level}")
            }
        }
    }
}

/// `READ ONLY` / `READ WRITE`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum TransactionAccessMode {
    ReadOnly,
    ReadWrite,
}

impl fmt::Display for TransactionAccessMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            TransactionAccessMode::ReadOnly => "READ ONLY",
            TransactionAccessMode::ReadWrite => "READ WRITE",
        })
    }
}

/// The isolation level of a transaction.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum TransactionIsolationLevel {
    ReadUncommitted,
    ReadCommitted,
    RepeatableRead,
    Serializable,
    Snapshot,
}

impl fmt::Display for TransactionIsolationLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            TransactionIsolationLevel::ReadUncommitted => "READ UNCOMMITTED",
            TransactionIsolationLevel::ReadCommitted => "READ COMMITTED",
            TransactionIsolationLevel::RepeatableRead => "REPEATABLE READ",
            TransactionIsolationLevel::Serializable => "SERIALIZABLE",
            TransactionIsolationLevel::Snapshot => "SNAPSHOT",
        })
    }
}

// ============================================================================
// SHOW / EXPLAIN support
// ============================================================================

/// The object kind of a `SHOW CREATE`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum ShowCreateObject {
    Table,
    View,
    Trigger,
    Procedure,
    Function,
}

impl fmt::Display for ShowCreateObject {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            ShowCreateObject::Table => "TABLE",
            ShowCreateObject::View => "VIEW",
            ShowCreateObject::Trigger => "TRIGGER",
            ShowCreateObject::Procedure => "PROCEDURE",
            ShowCreateObject::Function => "FUNCTION",
        })
    }
}

/// A trailing filter of a `SHOW` statement.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShowStatementFilter {
    /// `LIKE '<pattern>'`
    Like(String),
    /// `ILIKE '<pattern>'`
    ILike(String),
    /// `WHERE <expr>`
    Where(Expr),
}

impl fmt::Display for ShowStatementFilter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ShowStatementFilter::Like(pattern) => {
                write!(f, "LIKE '{}'", escape_single_quote_string(pattern))
            }
            ShowStatementFilter::ILike(pattern) => {
                write!(f, "ILIKE '{}'", escape_single_quote_string(pattern))
            }
            ShowStatementFilter::Where(expr) => write!(f, "WHERE {expr}"),
        }
    }
}

/// What a `DISCARD` discards.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum DiscardObject {
    All,
    Plans,
    Sequences,
    Temp,
}

impl fmt::Display for DiscardObject {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            DiscardObject::All => "ALL",
            DiscardObject::Plans => "PLANS",
            DiscardObject::Sequences => "SEQUENCES",
            DiscardObject::Temp => "TEMP",
        })
    }
}

/// The output format of an `EXPLAIN`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum AnalyzeFormat {
    Text,
    Graphviz,
    Json,
}

impl fmt::Display for AnalyzeFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            AnalyzeFormat::Text => "TEXT",
            AnalyzeFormat::Graphviz => "GRAPHVIZ",
            AnalyzeFormat::Json => "JSON",
        })
    }
}

/// One option of a PostgreSQL `EXPLAIN ( ... )` list.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UtilityOption {
    /// The option name.
    pub name: Ident,
    /// The optional argument.
    pub arg: Option<Expr>,
}

impl fmt::Display for UtilityOption {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(arg) = &self.arg {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

// ============================================================================
// LOCK TABLES support
// ============================================================================

/// One element of a `LOCK TABLES` list.
#[doc(hidden)]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LockTable {
    pub table: ObjectName,
    pub alias: Option<Ident>,
    pub lock_type: LockTableType,
}

impl fmt::Display for LockTable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.table)?;
        if let Some(alias) = &self.alias {
            write!(f, " AS {alias}")?;
        }
        write!(f, " {}", self.lock_type)
    }
}

/// The lock kind of one `LOCK TABLES` element.
#[doc(hidden)]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LockTableType {
    Read { local: bool },
    Write,
}

impl fmt::Display for LockTableType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LockTableType::Read { local } => {
                f.write_str("READ")?;
                if *local {
                    f.write_str(" LOCAL")?;
                }
                Ok(())
            }
            LockTableType::Write => f.write_str("WRITE"),
        }
    }
}

// ============================================================================
// Control-flow blocks
// ============================================================================

/// `IF <cond> THEN <stmts> [ ELSEIF <cond> THEN <stmts> ]* [ ELSE <stmts> ]
/// END IF`
#[doc(hidden)]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IfStmt {
    pub condition: Expr,
    pub then_body: Vec<Statement>,
    pub elseifs: Vec<ElseIfBlock>,
    pub else_body: Option<Vec<Statement>>,
}

/// One `ELSEIF` arm of an [`IfStmt`].
#[doc(hidden)]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElseIfBlock {
    pub condition: Expr,
    pub body: Vec<Statement>,
}

impl fmt::Display for IfStmt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "IF {} THEN {};",
            self.condition,
            display_separated(&self.then_body, "; ")
        )?;
        for elseif in &self.elseifs {
            write!(
                f,
                " ELSEIF {} THEN {};",
                elseif.condition,
                display_separated(&elseif.body, "; ")
            )?;
        }
        if let Some(else_body) = &self.else_body {
            write!(f, " ELSE {};", display_separated(else_body, "; "))?;
        }
        f.write_str(" END IF")
    }
}

/// `WHILE <cond> DO <stmts> END WHILE`
#[doc(hidden)]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WhileStmt {
    pub condition: Expr,
    pub body: Vec<Statement>,
}

impl fmt::Display for WhileStmt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "WHILE {} DO {}; END WHILE",
            self.condition,
            display_separated(&self.body, "; ")
        )
    }
}

/// `CASE [<operand>] WHEN <value> THEN <stmts> ... [ELSE <stmts>] END CASE`
#[doc(hidden)]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CaseStmt {
    pub operand: Option<Expr>,
    pub when_blocks: Vec<CaseStmtWhen>,
    pub else_body: Option<Vec<Statement>>,
}

/// One `WHEN` arm of a [`CaseStmt`].
#[doc(hidden)]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CaseStmtWhen {
    pub condition: Expr,
    pub body: Vec<Statement>,
}

impl fmt::Display for CaseStmt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("CASE")?;
        if let Some(operand) = &self.operand {
            write!(f, " {operand}")?;
        }
        for when in &self.when_blocks {
            write!(
                f,
                " WHEN {} THEN {};",
                when.condition,
                display_separated(&when.body, "; ")
            )?;
        }
        if let Some(else_body) = &self.else_body {
            write!(f, " ELSE {};", display_separated(else_body, "; "))?;
        }
        f.write_str(" END CASE")
    }
}
