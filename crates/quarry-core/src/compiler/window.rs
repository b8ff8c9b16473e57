//! ROW_NUMBER() pagination for dialects without LIMIT/OFFSET.

use std::fmt;

use tracing::debug;

use super::{select_keyword, CompileError, Compiler, Result};
use crate::ast::{Expression, Fragment, SelectColumn, SelectStatement};
use crate::builder::value::SqlValue;

/// Row range kept by the outer query, on 1-based row numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowFilter {
    /// `quarry_rownum BETWEEN first AND last`
    Between(u64, u64),
    /// `quarry_rownum > skipped`
    After(u64),
}

impl RowFilter {
    /// Derives the filter from a limit and a 0-indexed offset.
    ///
    /// Returns `None` when there is nothing to paginate.
    #[must_use]
    pub const fn page(limit: Option<u64>, offset: Option<u64>) -> Option<Self> {
        match (limit, offset) {
            (Some(n), Some(m)) => Some(Self::Between(m.saturating_add(1), m.saturating_add(n))),
            (Some(n), None) => Some(Self::Between(1, n)),
            (None, Some(m)) => Some(Self::After(m)),
            (None, None) => None,
        }
    }
}

impl fmt::Display for RowFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Between(first, last) => write!(f, "quarry_rownum BETWEEN {first} AND {last}"),
            Self::After(skipped) => write!(f, "quarry_rownum > {skipped}"),
        }
    }
}

/// Projection of a paginated query, split between the numbered inner query
/// and the outer query that drops the row number again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageProjection {
    /// Select list of the inner query, with any synthesized aliases.
    pub inner: String,
    /// Select list of the outer query.
    pub outer: String,
}

/// Renders the projection of a query about to be wrapped for pagination.
///
/// Every select item gets an output name the outer query can list: its alias,
/// the last segment of a plain column, or `quarry_colN` for anything else and
/// for names already taken. A `*` projection cannot be listed, so the outer
/// query falls back to `*`. With `expand_star` an empty projection becomes
/// `source.*` for every FROM source and join target.
///
/// # Errors
///
/// Propagates expression errors.
pub fn render_page_projection<C: Compiler + ?Sized>(
    compiler: &C,
    stmt: &SelectStatement,
    expand_star: bool,
    params: &mut Vec<SqlValue>,
) -> Result<PageProjection> {
    if stmt.columns.is_empty() {
        let inner = if expand_star {
            qualified_stars(compiler, stmt)
        } else {
            String::from("*")
        };
        return Ok(PageProjection {
            inner,
            outer: String::from("*"),
        });
    }
    if stmt.columns.iter().any(|column| is_star(&column.expr)) {
        return Ok(PageProjection {
            inner: compiler.render_projection(&stmt.columns, params)?,
            outer: String::from("*"),
        });
    }

    let mut names: Vec<String> = Vec::with_capacity(stmt.columns.len());
    let mut inner = Vec::with_capacity(stmt.columns.len());
    for (index, column) in stmt.columns.iter().enumerate() {
        let expr = compiler.render_expression(&column.expr, params)?;
        let (name, aliased) = match output_name(column) {
            Some(name) if !names.iter().any(|taken| taken.eq_ignore_ascii_case(&name)) => {
                (name, column.alias.is_some())
            }
            _ => (format!("quarry_col{}", index + 1), true),
        };
        if aliased {
            inner.push(format!("{expr} AS {}", compiler.wrap_segment(&name)));
        } else {
            inner.push(expr);
        }
        names.push(name);
    }
    let outer: Vec<String> = names.iter().map(|name| compiler.wrap_segment(name)).collect();
    Ok(PageProjection {
        inner: inner.join(", "),
        outer: outer.join(", "),
    })
}

fn output_name(column: &SelectColumn) -> Option<String> {
    if let Some(alias) = &column.alias {
        return Some(alias.clone());
    }
    match column.expr.fragments() {
        [Fragment::Column(reference)] if !reference.raw => {
            reference.name.rsplit('.').next().map(String::from)
        }
        _ => None,
    }
}

fn is_star(expr: &Expression) -> bool {
    matches!(expr.fragments(), [Fragment::Column(reference)] if reference.name.ends_with('*'))
}

/// Wraps a SELECT in a numbered subquery and filters on the row number.
///
/// ```text
/// SELECT <names> FROM (SELECT <cols>, ROW_NUMBER() OVER (ORDER BY <order>) AS quarry_rownum
///   FROM ... [WHERE] [GROUP BY] [HAVING]) AS quarry_page
/// WHERE <filter> [ORDER BY quarry_rownum]
/// ```
///
/// With no ORDER BY the window orders by `(SELECT 0)`. The outer select list
/// comes from [`render_page_projection`]. The trailing `ORDER BY` is left out
/// when `nested` is set, since derived tables and subqueries cannot carry one
/// on SQL Server.
///
/// # Errors
///
/// Returns [`CompileError::Unsupported`] for `SELECT ... INTO`, and
/// propagates clause errors.
pub fn render_row_number_page<C: Compiler + ?Sized>(
    compiler: &C,
    stmt: &SelectStatement,
    filter: RowFilter,
    expand_star: bool,
    nested: bool,
    params: &mut Vec<SqlValue>,
) -> Result<String> {
    if stmt.into.is_some() {
        return Err(CompileError::Unsupported {
            dialect: compiler.name(),
            feature: "SELECT INTO with pagination",
        });
    }
    let projection = render_page_projection(compiler, stmt, expand_star, params)?;
    let order = if stmt.order_by.is_empty() {
        String::from("(SELECT 0)")
    } else {
        compiler.render_order_list(&stmt.order_by, params)?
    };
    let sources = compiler.render_source_clauses(stmt, params)?;
    let tail = if nested { "" } else { " ORDER BY quarry_rownum" };
    debug!(
        dialect = compiler.name(),
        filter = %filter,
        nested,
        "Paginating with ROW_NUMBER window"
    );
    Ok(format!(
        "SELECT {} FROM ({}{}, ROW_NUMBER() OVER (ORDER BY {order}) AS quarry_rownum{sources}) AS quarry_page WHERE {filter}{tail}",
        projection.outer,
        select_keyword(stmt.distinct),
        projection.inner
    ))
}

fn qualified_stars<C: Compiler + ?Sized>(compiler: &C, stmt: &SelectStatement) -> String {
    let stars: Vec<String> = stmt
        .tables
        .iter()
        .chain(stmt.joins.iter().map(|join| &join.target))
        .filter_map(|table| table.reference_name())
        .map(|name| format!("{}.*", compiler.wrap(name)))
        .collect();
    if stars.is_empty() {
        String::from("*")
    } else {
        stars.join(", ")
    }
}
