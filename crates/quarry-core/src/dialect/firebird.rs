//! Firebird.

use super::DialectKind;
use crate::compiler::{ansi_function_sql, call, BuiltinFunction, CompileError, Compiler, Result};

/// Firebird compiler: `ROWS first TO last` on 1-based row positions.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirebirdCompiler;

impl FirebirdCompiler {
    /// Creates a new Firebird compiler.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Compiler for FirebirdCompiler {
    fn name(&self) -> &'static str {
        "firebird"
    }

    fn kind(&self) -> DialectKind {
        DialectKind::Firebird
    }

    fn function_sql(&self, function: BuiltinFunction, args: &[String]) -> String {
        match (function, args) {
            (BuiltinFunction::Substring, [string, start]) => {
                format!("SUBSTRING({string} FROM {start})")
            }
            (BuiltinFunction::Substring, [string, start, length]) => {
                format!("SUBSTRING({string} FROM {start} FOR {length})")
            }
            (BuiltinFunction::Length, _) => call("CHAR_LENGTH", args),
            _ => ansi_function_sql(function, args),
        }
    }

    fn limit_clause(&self, limit: Option<u64>, offset: Option<u64>) -> Result<String> {
        match (limit, offset) {
            (Some(n), Some(m)) => Ok(format!(
                "ROWS {} TO {}",
                m.saturating_add(1),
                m.saturating_add(n)
            )),
            (Some(n), None) => Ok(format!("ROWS 1 TO {n}")),
            (None, Some(_)) => Err(CompileError::Unsupported {
                dialect: self.name(),
                feature: "OFFSET without LIMIT",
            }),
            (None, None) => Ok(String::new()),
        }
    }
}
