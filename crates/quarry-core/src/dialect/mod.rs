//! SQL dialect support.
//!
//! Each backend is a zero-sized [`Compiler`] that overrides the base
//! rendering where its SQL diverges: identifier quoting, function spelling
//! and, above all, LIMIT/OFFSET emulation.
//!
//! | Dialect    | limit only              | limit + offset                  | offset only               |
//! |------------|-------------------------|---------------------------------|---------------------------|
//! | ANSI       | `LIMIT n`               | `LIMIT n OFFSET m`              | `OFFSET m`                |
//! | MySQL      | `LIMIT n`               | `LIMIT n OFFSET m`              | `LIMIT <u64::MAX> OFFSET m` |
//! | PostgreSQL | `LIMIT n`               | `LIMIT n OFFSET m`              | `OFFSET m`                |
//! | SQLite     | `LIMIT n`               | `LIMIT n OFFSET m`              | `LIMIT -1 OFFSET m`       |
//! | SQL Server | `SELECT TOP n`          | `ROW_NUMBER()` window           | unsupported               |
//! | Oracle     | `ROWNUM <= n` wrap      | double `ROWNUM` wrap            | single `ROWNUM` wrap      |
//! | DB2        | `ROW_NUMBER()` window   | `ROW_NUMBER()` window           | `ROW_NUMBER()` window     |
//! | Firebird   | `ROWS 1 TO n`           | `ROWS m+1 TO m+n`               | unsupported               |
//! | NuoDB      | `FETCH n`               | `OFFSET m FETCH n`              | `OFFSET m`                |

mod ansi;
mod db2;
mod firebird;
mod mysql;
mod nuodb;
mod oracle;
mod postgres;
mod sqlite;
mod sqlserver;

pub use ansi::AnsiCompiler;
pub use db2::Db2Compiler;
pub use firebird::FirebirdCompiler;
pub use mysql::MySqlCompiler;
pub use nuodb::NuoDbCompiler;
pub use oracle::OracleCompiler;
pub use postgres::PostgresCompiler;
pub use sqlite::SqliteCompiler;
pub use sqlserver::SqlServerCompiler;

use crate::compiler::Compiler;

/// The supported SQL dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DialectKind {
    /// Standard SQL; also the fallback for unknown drivers.
    #[default]
    Ansi,
    /// MySQL / MariaDB.
    MySql,
    /// PostgreSQL.
    PostgreSql,
    /// SQLite.
    Sqlite,
    /// Microsoft SQL Server and Sybase.
    SqlServer,
    /// Oracle.
    Oracle,
    /// IBM DB2.
    Db2,
    /// Firebird.
    Firebird,
    /// NuoDB.
    NuoDb,
}

impl DialectKind {
    /// Every dialect, ANSI first.
    pub const ALL: [Self; 9] = [
        Self::Ansi,
        Self::MySql,
        Self::PostgreSql,
        Self::Sqlite,
        Self::SqlServer,
        Self::Oracle,
        Self::Db2,
        Self::Firebird,
        Self::NuoDb,
    ];

    /// Resolves a driver name, ignoring case.
    ///
    /// Unknown drivers fall back to [`DialectKind::Ansi`].
    #[must_use]
    pub fn from_driver(driver: &str) -> Self {
        match driver.trim().to_ascii_lowercase().as_str() {
            "mysql" => Self::MySql,
            "pgsql" | "postgresql" | "postgres" => Self::PostgreSql,
            "sqlite" => Self::Sqlite,
            "sqlsrv" | "mssql" | "dblib" | "sybase" => Self::SqlServer,
            "oracle" | "oci" => Self::Oracle,
            "db2" | "ibm" | "odbc" => Self::Db2,
            "firebird" => Self::Firebird,
            "nuodb" => Self::NuoDb,
            _ => Self::Ansi,
        }
    }

    /// Returns the dialect name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ansi => "ansi",
            Self::MySql => "mysql",
            Self::PostgreSql => "postgresql",
            Self::Sqlite => "sqlite",
            Self::SqlServer => "sqlserver",
            Self::Oracle => "oracle",
            Self::Db2 => "db2",
            Self::Firebird => "firebird",
            Self::NuoDb => "nuodb",
        }
    }

    /// Returns the compiler for this dialect.
    #[must_use]
    pub fn compiler(self) -> &'static dyn Compiler {
        match self {
            Self::Ansi => &AnsiCompiler,
            Self::MySql => &MySqlCompiler,
            Self::PostgreSql => &PostgresCompiler,
            Self::Sqlite => &SqliteCompiler,
            Self::SqlServer => &SqlServerCompiler,
            Self::Oracle => &OracleCompiler,
            Self::Db2 => &Db2Compiler,
            Self::Firebird => &FirebirdCompiler,
            Self::NuoDb => &NuoDbCompiler,
        }
    }
}
