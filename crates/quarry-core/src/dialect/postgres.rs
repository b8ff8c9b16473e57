//! PostgreSQL.

use super::DialectKind;
use crate::compiler::{ansi_function_sql, call, BuiltinFunction, Compiler};

/// PostgreSQL compiler: native `LIMIT`/`OFFSET`, including OFFSET alone.
#[derive(Debug, Default, Clone, Copy)]
pub struct PostgresCompiler;

impl PostgresCompiler {
    /// Creates a new PostgreSQL compiler.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Compiler for PostgresCompiler {
    fn name(&self) -> &'static str {
        "postgresql"
    }

    fn kind(&self) -> DialectKind {
        DialectKind::PostgreSql
    }

    fn function_sql(&self, function: BuiltinFunction, args: &[String]) -> String {
        match function {
            BuiltinFunction::Substring => call("SUBSTR", args),
            BuiltinFunction::Length => call("LENGTH", args),
            BuiltinFunction::Now => String::from("NOW()"),
            _ => ansi_function_sql(function, args),
        }
    }
}
