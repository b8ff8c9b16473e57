//! NuoDB.

use super::DialectKind;
use crate::compiler::{Compiler, Result};

/// NuoDB compiler: `OFFSET m FETCH n`.
#[derive(Debug, Default, Clone, Copy)]
pub struct NuoDbCompiler;

impl NuoDbCompiler {
    /// Creates a new NuoDB compiler.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Compiler for NuoDbCompiler {
    fn name(&self) -> &'static str {
        "nuodb"
    }

    fn kind(&self) -> DialectKind {
        DialectKind::NuoDb
    }

    fn limit_clause(&self, limit: Option<u64>, offset: Option<u64>) -> Result<String> {
        Ok(match (limit, offset) {
            (Some(n), Some(m)) => format!("OFFSET {m} FETCH {n}"),
            (Some(n), None) => format!("FETCH {n}"),
            (None, Some(m)) => format!("OFFSET {m}"),
            (None, None) => String::new(),
        })
    }
}
