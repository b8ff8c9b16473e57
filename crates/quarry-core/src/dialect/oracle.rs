//! Oracle.

use tracing::debug;

use super::DialectKind;
use crate::ast::SelectStatement;
use crate::builder::value::SqlValue;
use crate::compiler::{
    ansi_function_sql, call, page_of, render_page_projection, select_keyword, BuiltinFunction,
    CompileError, Compiler, Result,
};

/// Oracle compiler.
///
/// Pagination wraps the query and filters on `ROWNUM`; the offset forms list
/// the original columns again so `QUARRY_ROWNUM` stays internal. Table
/// aliases are written without `AS`, which Oracle rejects.
#[derive(Debug, Default, Clone, Copy)]
pub struct OracleCompiler;

impl OracleCompiler {
    /// Creates a new Oracle compiler.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Compiler for OracleCompiler {
    fn name(&self) -> &'static str {
        "oracle"
    }

    fn kind(&self) -> DialectKind {
        DialectKind::Oracle
    }

    fn table_alias_keyword(&self) -> &'static str {
        ""
    }

    fn function_sql(&self, function: BuiltinFunction, args: &[String]) -> String {
        match function {
            BuiltinFunction::Substring => call("SUBSTR", args),
            BuiltinFunction::Length => call("LENGTH", args),
            BuiltinFunction::Now => String::from("SYSDATE"),
            _ => ansi_function_sql(function, args),
        }
    }

    fn render_select(&self, stmt: &SelectStatement, params: &mut Vec<SqlValue>) -> Result<String> {
        let (limit, offset) = page_of(stmt);
        if limit.is_none() && offset.is_none() {
            return self.render_unpaged(stmt, params);
        }
        if stmt.into.is_some() {
            return Err(CompileError::Unsupported {
                dialect: self.name(),
                feature: "SELECT INTO with pagination",
            });
        }
        debug!(dialect = self.name(), ?limit, ?offset, "Paginating with ROWNUM wrap");
        let Some(m) = offset else {
            let inner = self.render_unpaged(stmt, params)?;
            let n = limit.unwrap_or(u64::MAX);
            return Ok(format!("SELECT * FROM ({inner}) WHERE ROWNUM <= {n}"));
        };
        let projection = render_page_projection(self, stmt, false, params)?;
        let mut inner = String::from(select_keyword(stmt.distinct));
        inner.push_str(&projection.inner);
        inner.push_str(&self.render_source_clauses(stmt, params)?);
        inner.push_str(&self.render_order_by(&stmt.order_by, params)?);
        let bound = limit.map_or_else(String::new, |n| {
            format!(" WHERE ROWNUM <= {}", m.saturating_add(n))
        });
        Ok(format!(
            "SELECT {} FROM (SELECT quarry_tmp.*, ROWNUM AS QUARRY_ROWNUM FROM ({inner}) quarry_tmp{bound}) WHERE QUARRY_ROWNUM >= {}",
            projection.outer,
            m.saturating_add(1)
        ))
    }
}
