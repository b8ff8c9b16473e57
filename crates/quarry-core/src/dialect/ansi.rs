//! Standard SQL.

use super::DialectKind;
use crate::compiler::Compiler;

/// Standard SQL with double-quoted identifiers and `LIMIT`/`OFFSET`.
///
/// Used for any driver the registry does not recognise.
#[derive(Debug, Default, Clone, Copy)]
pub struct AnsiCompiler;

impl AnsiCompiler {
    /// Creates a new ANSI compiler.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Compiler for AnsiCompiler {
    fn name(&self) -> &'static str {
        "ansi"
    }

    fn kind(&self) -> DialectKind {
        DialectKind::Ansi
    }
}
