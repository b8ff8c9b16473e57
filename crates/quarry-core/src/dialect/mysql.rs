//! MySQL / MariaDB.

use super::DialectKind;
use crate::compiler::{ansi_function_sql, call, BuiltinFunction, Compiler, Result};

/// MySQL has no OFFSET without LIMIT; the documented idiom is the largest
/// unsigned 64-bit row count.
const MAX_ROWS: u64 = u64::MAX;

/// MySQL compiler: backtick quoting.
#[derive(Debug, Default, Clone, Copy)]
pub struct MySqlCompiler;

impl MySqlCompiler {
    /// Creates a new MySQL compiler.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Compiler for MySqlCompiler {
    fn name(&self) -> &'static str {
        "mysql"
    }

    fn kind(&self) -> DialectKind {
        DialectKind::MySql
    }

    fn wrapper(&self) -> &'static str {
        "`%s`"
    }

    fn function_sql(&self, function: BuiltinFunction, args: &[String]) -> String {
        match function {
            BuiltinFunction::Upper => call("UCASE", args),
            BuiltinFunction::Lower => call("LCASE", args),
            BuiltinFunction::Substring => call("MID", args),
            BuiltinFunction::Length => call("LENGTH", args),
            BuiltinFunction::Now => String::from("NOW()"),
            _ => ansi_function_sql(function, args),
        }
    }

    fn limit_clause(&self, limit: Option<u64>, offset: Option<u64>) -> Result<String> {
        Ok(match (limit, offset) {
            (Some(n), Some(m)) => format!("LIMIT {n} OFFSET {m}"),
            (Some(n), None) => format!("LIMIT {n}"),
            (None, Some(m)) => format!("LIMIT {MAX_ROWS} OFFSET {m}"),
            (None, None) => String::new(),
        })
    }
}
