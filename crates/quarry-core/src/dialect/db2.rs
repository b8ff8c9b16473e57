//! IBM DB2.

use super::DialectKind;
use crate::ast::SelectStatement;
use crate::builder::value::SqlValue;
use crate::compiler::{
    ansi_function_sql, call, page_of, render_row_number_page, BuiltinFunction, Compiler, Result,
    RowFilter,
};

/// DB2 compiler: every pagination goes through a `ROW_NUMBER()` window.
///
/// DB2 rejects an unqualified `*` next to another select item, so an empty
/// projection is expanded to `source.*` for each FROM source and join
/// target.
#[derive(Debug, Default, Clone, Copy)]
pub struct Db2Compiler;

impl Db2Compiler {
    /// Creates a new DB2 compiler.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn render_paged(
        &self,
        stmt: &SelectStatement,
        nested: bool,
        params: &mut Vec<SqlValue>,
    ) -> Result<String> {
        let (limit, offset) = page_of(stmt);
        match RowFilter::page(limit, offset) {
            Some(filter) => render_row_number_page(self, stmt, filter, true, nested, params),
            None => self.render_unpaged(stmt, params),
        }
    }
}

impl Compiler for Db2Compiler {
    fn name(&self) -> &'static str {
        "db2"
    }

    fn kind(&self) -> DialectKind {
        DialectKind::Db2
    }

    fn function_sql(&self, function: BuiltinFunction, args: &[String]) -> String {
        match function {
            BuiltinFunction::Substring => call("SUBSTR", args),
            BuiltinFunction::Length => call("LENGTH", args),
            BuiltinFunction::Now => String::from("CURRENT TIMESTAMP"),
            _ => ansi_function_sql(function, args),
        }
    }

    fn render_select(&self, stmt: &SelectStatement, params: &mut Vec<SqlValue>) -> Result<String> {
        self.render_paged(stmt, false, params)
    }

    fn render_subquery(
        &self,
        stmt: &SelectStatement,
        params: &mut Vec<SqlValue>,
    ) -> Result<String> {
        self.render_paged(stmt, true, params)
    }
}
