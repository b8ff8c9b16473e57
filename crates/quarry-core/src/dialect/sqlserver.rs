//! Microsoft SQL Server (also Sybase through `dblib`).

use super::DialectKind;
use crate::ast::SelectStatement;
use crate::builder::value::SqlValue;
use crate::compiler::{
    ansi_function_sql, call, page_of, render_row_number_page, select_keyword, BuiltinFunction,
    CompileError, Compiler, Result, RowFilter,
};

/// SQL Server compiler.
///
/// A bare limit becomes `SELECT TOP n`; a limit with an offset is emulated
/// with a `ROW_NUMBER()` window. OFFSET alone is rejected.
#[derive(Debug, Default, Clone, Copy)]
pub struct SqlServerCompiler;

impl SqlServerCompiler {
    /// Creates a new SQL Server compiler.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn render_top(
        &self,
        stmt: &SelectStatement,
        top: u64,
        params: &mut Vec<SqlValue>,
    ) -> Result<String> {
        let mut sql = format!("{}TOP {top} ", select_keyword(stmt.distinct));
        sql.push_str(&self.render_projection(&stmt.columns, params)?);
        sql.push_str(&self.render_into(stmt.into.as_ref()));
        sql.push_str(&self.render_source_clauses(stmt, params)?);
        sql.push_str(&self.render_order_by(&stmt.order_by, params)?);
        Ok(sql)
    }

    fn render_paged(
        &self,
        stmt: &SelectStatement,
        nested: bool,
        params: &mut Vec<SqlValue>,
    ) -> Result<String> {
        match page_of(stmt) {
            (None, None) => self.render_unpaged(stmt, params),
            (Some(n), None) => self.render_top(stmt, n, params),
            (None, Some(_)) => Err(CompileError::Unsupported {
                dialect: self.name(),
                feature: "OFFSET without LIMIT",
            }),
            (Some(n), Some(m)) => render_row_number_page(
                self,
                stmt,
                RowFilter::Between(m.saturating_add(1), m.saturating_add(n)),
                false,
                nested,
                params,
            ),
        }
    }
}

impl Compiler for SqlServerCompiler {
    fn name(&self) -> &'static str {
        "sqlserver"
    }

    fn kind(&self) -> DialectKind {
        DialectKind::SqlServer
    }

    fn wrapper(&self) -> &'static str {
        "[%s]"
    }

    fn function_sql(&self, function: BuiltinFunction, args: &[String]) -> String {
        match function {
            BuiltinFunction::Length => call("LEN", args),
            BuiltinFunction::Now => String::from("GETDATE()"),
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
