//! SQLite.

use super::DialectKind;
use crate::compiler::{ansi_function_sql, call, BuiltinFunction, Compiler, Result};

/// SQLite compiler.
///
/// SQLite only accepts OFFSET after a LIMIT; a negative limit means "no
/// limit".
#[derive(Debug, Default, Clone, Copy)]
pub struct SqliteCompiler;

impl SqliteCompiler {
    /// Creates a new SQLite compiler.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Compiler for SqliteCompiler {
    fn name(&self) -> &'static str {
        "sqlite"
    }

    fn kind(&self) -> DialectKind {
        DialectKind::Sqlite
    }

    fn function_sql(&self, function: BuiltinFunction, args: &[String]) -> String {
        match function {
            BuiltinFunction::Substring => call("SUBSTR", args),
            BuiltinFunction::Length => call("LENGTH", args),
            BuiltinFunction::Now => String::from("datetime('now')"),
            _ => ansi_function_sql(function, args),
        }
    }

    fn limit_clause(&self, limit: Option<u64>, offset: Option<u64>) -> Result<String> {
        Ok(match (limit, offset) {
            (Some(n), Some(m)) => format!("LIMIT {n} OFFSET {m}"),
            (Some(n), None) => format!("LIMIT {n}"),
            (None, Some(m)) => format!("LIMIT -1 OFFSET {m}"),
            (None, None) => String::new(),
        })
    }
}
