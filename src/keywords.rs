//! A single ordered table of every keyword the tokenizer and parser can
//! recognize, plus the keyword sets that restrict implicit aliases.
//!
//! This is *not* a list of reserved words: most entries can be parsed as
//! identifiers if the parser decides so, which means new keywords can be
//! added here without affecting existing parse results.

use core::fmt;

/// Defines a string constant for a single keyword: `kw_def!(SELECT);`
/// expands to `const SELECT: &'static str = "SELECT";`
macro_rules! kw_def {
    ($ident:ident = $string_keyword:expr) => {
        const $ident: &'static str = $string_keyword;
    };
    ($ident:ident) => {
        kw_def!($ident = stringify!($ident));
    };
}

/// Expands to a list of `kw_def!()` invocations for each keyword, the
/// `Keyword` enum, and the `ALL_KEYWORDS` / `ALL_KEYWORDS_INDEX` arrays.
///
/// The list must stay sorted (binary search) and the enum order is, by
/// construction, the array order.
macro_rules! define_keywords {
    ($(
        $ident:ident $(= $string_keyword:expr)?
    ),* $(,)?) => {
        /// A keyword recognized by the tokenizer.
        ///
        /// The discriminant of each tag is the index of its spelling in
        /// [`ALL_KEYWORDS`].
        #[allow(non_camel_case_types, missing_docs)]
        #[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum Keyword {
            $($ident),*
        }

        $(kw_def!($ident $(= $string_keyword)?);)*

        /// All keyword spellings, sorted for binary search.
        pub const ALL_KEYWORDS: &[&str] = &[
            $($ident),*
        ];

        /// All keyword tags, in the same order as [`ALL_KEYWORDS`].
        pub const ALL_KEYWORDS_INDEX: &[Keyword] = &[
            $(Keyword::$ident),*
        ];
    };
}

define_keywords!(
    ABORT,
    ACTION,
    ADD,
    ADMIN,
    AFTER,
    ALL,
    ALTER,
    ALWAYS,
    ANALYZE,
    AND,
    ANTI,
    ANY,
    ARCHIVE,
    ARRAY,
    AS,
    ASC,
    ASSERT,
    AT,
    AUTHORIZATION,
    AUTOINCREMENT,
    AUTO_INCREMENT,
    BEFORE,
    BEGIN,
    BERNOULLI,
    BETWEEN,
    BIGDECIMAL,
    BIGINT,
    BIGNUMERIC,
    BINARY,
    BLOB,
    BOOL,
    BOOLEAN,
    BOTH,
    BROWSE,
    BY,
    BYTEA,
    BYTES,
    CACHE,
    CALL,
    CASCADE,
    CASE,
    CAST,
    CEIL,
    CEILING,
    CENTURY,
    CHAIN,
    CHAR,
    CHARACTER,
    CHARACTERS,
    CHAR_LENGTH,
    CHECK,
    CLASS,
    CLOB,
    CLONE,
    CLUSTER,
    COLLATE,
    COLLATION,
    COLUMN,
    COLUMNS,
    COMMENT,
    COMMIT,
    COMMITTED,
    CONCURRENTLY,
    CONFLICT,
    CONNECT,
    CONNECTOR,
    CONNECT_BY_ROOT,
    CONSTRAINT,
    COPY,
    COUNT,
    CREATE,
    CROSS,
    CSV,
    CUBE,
    CURRENT,
    CURRENT_DATE,
    CURRENT_ROLE,
    CURRENT_TIME,
    CURRENT_TIMESTAMP,
    CURRENT_USER,
    CYCLE,
    DATA,
    DATABASE,
    DATE,
    DATETIME,
    DAY,
    DEALLOCATE,
    DEC,
    DECADE,
    DECIMAL,
    DEFAULT,
    DEFERRABLE,
    DEFERRED,
    DEFINE,
    DELETE,
    DELIMITER,
    DENY,
    DESC,
    DESCRIBE,
    DIMENSIONS,
    DISCARD,
    DISTINCT,
    DISTRIBUTE,
    DO,
    DOMAIN,
    DOUBLE,
    DOW,
    DOY,
    DROP,
    DUPLICATE,
    EACH,
    ELSE,
    ELSEIF,
    END,
    END_EXEC = "END-EXEC",
    ENFORCED,
    ENUM,
    EPOCH,
    ERROR,
    ESCAPE,
    EXCEPT,
    EXECUTE,
    EXISTS,
    EXPLAIN,
    EXTENDED,
    EXTENSION,
    EXTERNAL,
    EXTRACT,
    FALSE,
    FAMILY,
    FETCH,
    FILTER,
    FIRST,
    FLOAT,
    FLOAT4,
    FLOAT8,
    FLOOR,
    FOLLOWING,
    FOR,
    FOREIGN,
    FORMAT,
    FREEZE,
    FROM,
    FULL,
    FUNCTION,
    FUNCTIONS,
    GENERATED,
    GLOBAL,
    GRANT,
    GRANTED,
    GROUP,
    GROUPING,
    GROUPS,
    HAVING,
    HEADER,
    HIVEVAR,
    HOUR,
    IDENTITY,
    IF,
    IGNORE,
    ILIKE,
    IMMEDIATE,
    IN,
    INCLUDE,
    INCREMENT,
    INDEX,
    INHERIT,
    INITIALLY,
    INNER,
    INSERT,
    INSTEAD,
    INT,
    INT2,
    INT4,
    INT8,
    INTEGER,
    INTERSECT,
    INTERVAL,
    INTO,
    INVISIBLE,
    IS,
    ISNULL,
    ISODOW,
    ISOLATION,
    ISOYEAR,
    JOIN,
    JSON,
    JSONB,
    JSON_TABLE,
    JULIAN,
    KEY,
    LANGUAGE,
    LAST,
    LATERAL,
    LAZY,
    LEADING,
    LEFT,
    LEVEL,
    LIKE,
    LIMIT,
    LISTAGG,
    LISTEN,
    LOCAL,
    LOCATION,
    LOCK,
    LOCKED,
    LOGIN,
    MAP,
    MATCH,
    MATCHED,
    MATCH_RECOGNIZE,
    MATERIALIZED,
    MAX,
    MAXVALUE,
    MEASURES,
    MEDIUMINT,
    MEMBER,
    MERGE,
    METRICS,
    MICROSECOND,
    MILLENNIUM,
    MILLISECOND,
    MINUTE,
    MINVALUE,
    MODULUS,
    MONTH,
    NAME,
    NANOSECOND,
    NATURAL,
    NCHAR,
    NEW,
    NEXT,
    NFC,
    NFD,
    NFKC,
    NFKD,
    NO,
    NONE,
    NORMALIZED,
    NOT,
    NOTHING,
    NOTIFY,
    NOTNULL,
    NOWAIT,
    NULL,
    NULLS,
    NUMERIC,
    NVARCHAR,
    OCTETS,
    OF,
    OFFSET,
    OLD,
    ON,
    ONE,
    ONLY,
    OPENJSON,
    OPERATOR,
    OPTION,
    OPTIONS,
    OR,
    ORDER,
    ORDINALITY,
    OUTER,
    OVER,
    OVERFLOW,
    OVERLAPS,
    OVERLAY,
    OVERWRITE,
    OWNED,
    OWNER,
    PARTIAL,
    PARTITION,
    PARTITIONED,
    PARTITIONS,
    PASSING,
    PASSWORD,
    PAST,
    PATH,
    PATTERN,
    PER,
    PERCENT,
    PERMISSIVE,
    PERMUTE,
    PIVOT,
    PLACING,
    PLANS,
    POLICY,
    POSITION,
    PRECEDING,
    PRECISION,
    PREPARE,
    PRIMARY,
    PRINT,
    PRIOR,
    PRIVILEGES,
    PROCEDURE,
    PROGRAM,
    PURGE,
    QUALIFY,
    QUARTER,
    QUOTE,
    RAISE,
    RAISERROR,
    RANGE,
    READ,
    REAL,
    RECURSIVE,
    REFERENCES,
    REFERENCING,
    REGCLASS,
    RELEASE,
    REMAINDER,
    RENAME,
    REPEATABLE,
    REPLACE,
    REPLICA,
    RESET,
    RESPECT,
    RESTRICT,
    RESTRICTIVE,
    RETURNING,
    RETURNS,
    REVOKE,
    RIGHT,
    ROLE,
    ROLLBACK,
    ROLLUP,
    ROW,
    ROWS,
    SAVEPOINT,
    SCHEMA,
    SECOND,
    SELECT,
    SEMANTIC_VIEW,
    SEMI,
    SEQUENCE,
    SEQUENCES,
    SERIALIZABLE,
    SERVER,
    SESSION,
    SESSION_USER,
    SET,
    SETS,
    SHARE,
    SHOW,
    SIMILAR,
    SIMPLE,
    SKIP,
    SMALLINT,
    SNAPSHOT,
    SOME,
    SORT,
    STAGE,
    START,
    STATEMENT,
    STDIN,
    STDOUT,
    STORED,
    STRAIGHT_JOIN,
    STRING,
    SUBSTRING,
    SUPERUSER,
    SYSTEM,
    TABLE,
    TABLES,
    TABLESAMPLE,
    TEMP,
    TEMPORARY,
    TEXT,
    THEN,
    TIES,
    TIME,
    TIMESTAMP,
    TIMEZONE_HOUR,
    TIMEZONE_MINUTE,
    TINYINT,
    TO,
    TRAILING,
    TRANSACTION,
    TRIGGER,
    TRIM,
    TRUE,
    TRUNCATE,
    TRY_CAST,
    TYPE,
    UNBOUNDED,
    UNCACHE,
    UNCOMMITTED,
    UNION,
    UNIQUE,
    UNKNOWN,
    UNLOAD,
    UNLOGGED,
    UNNEST,
    UNPIVOT,
    UNSIGNED,
    UPDATE,
    URL,
    USAGE,
    USE,
    USER,
    USING,
    UUID,
    VACUUM,
    VALIDATE,
    VALUE,
    VALUES,
    VARBINARY,
    VARCHAR,
    VARYING,
    VERBOSE,
    VIEW,
    WEEK,
    WHEN,
    WHERE,
    WHILE,
    WINDOW,
    WITH,
    WITHIN,
    WITHOUT,
    WORK,
    WRITE,
    XML,
    XMLTABLE,
    XOR,
    YEAR,
    ZONE,
);

impl Keyword {
    /// Returns the canonical spelling of the keyword.
    pub fn as_str(&self) -> &'static str {
        ALL_KEYWORDS[*self as usize]
    }

    /// Looks up a word (already upper-cased) in the keyword table.
    pub(crate) fn lookup(word_uppercase: &str) -> Option<Keyword> {
        ALL_KEYWORDS
            .binary_search(&word_uppercase)
            .ok()
            .map(|idx| ALL_KEYWORDS_INDEX[idx])
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keywords that terminate a `FROM` item, so an unquoted word that follows a
/// table factor without `AS` is only treated as an implicit alias when it is
/// not one of these.
pub const RESERVED_FOR_TABLE_ALIAS: &[Keyword] = &[
    Keyword::ANTI,
    Keyword::CLUSTER,
    Keyword::CONNECT,
    Keyword::CROSS,
    Keyword::DISTRIBUTE,
    Keyword::END,
    Keyword::EXCEPT,
    Keyword::FETCH,
    Keyword::FOR,
    Keyword::FULL,
    Keyword::GLOBAL,
    Keyword::GROUP,
    Keyword::HAVING,
    Keyword::INNER,
    Keyword::INTERSECT,
    Keyword::JOIN,
    Keyword::LATERAL,
    Keyword::LEFT,
    Keyword::LIMIT,
    Keyword::MATCH_RECOGNIZE,
    Keyword::NATURAL,
    Keyword::OFFSET,
    Keyword::ON,
    Keyword::ORDER,
    Keyword::OUTER,
    Keyword::PARTITION,
    Keyword::PIVOT,
    Keyword::QUALIFY,
    Keyword::RETURNING,
    Keyword::RIGHT,
    Keyword::SELECT,
    Keyword::SEMI,
    Keyword::SET,
    Keyword::SORT,
    Keyword::START,
    Keyword::STRAIGHT_JOIN,
    Keyword::TABLESAMPLE,
    Keyword::UNION,
    Keyword::UNPIVOT,
    Keyword::USING,
    Keyword::WHERE,
    Keyword::WINDOW,
    Keyword::WITH,
];

/// Keywords that terminate a `SELECT` item; same idea as
/// [`RESERVED_FOR_TABLE_ALIAS`] but for implicit column aliases.
pub const RESERVED_FOR_COLUMN_ALIAS: &[Keyword] = &[
    Keyword::CLUSTER,
    Keyword::DISTRIBUTE,
    Keyword::END,
    Keyword::EXCEPT,
    Keyword::FETCH,
    Keyword::FROM,
    Keyword::GROUP,
    Keyword::HAVING,
    Keyword::INTERSECT,
    Keyword::INTO,
    Keyword::LIMIT,
    Keyword::OFFSET,
    Keyword::ORDER,
    Keyword::SORT,
    Keyword::UNION,
    Keyword::WHERE,
    Keyword::WINDOW,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_list_is_sorted() {
        let mut sorted = ALL_KEYWORDS.to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, ALL_KEYWORDS);
    }

    #[test]
    fn tag_order_matches_list_order() {
        for (idx, kw) in ALL_KEYWORDS_INDEX.iter().enumerate() {
            assert_eq!(*kw as usize, idx);
            assert_eq!(kw.as_str(), ALL_KEYWORDS[idx]);
        }
    }

    #[test]
    fn lookup_is_case_normalized() {
        assert_eq!(Keyword::lookup("SELECT"), Some(Keyword::SELECT));
        assert_eq!(Keyword::lookup("END-EXEC"), Some(Keyword::END_EXEC));
        assert_eq!(Keyword::lookup("NOPE"), None);
    }
}
