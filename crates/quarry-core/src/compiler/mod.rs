//! Statement compilers.
//!
//! A [`Compiler`] walks a statement in fixed clause order and produces a
//! [`CompiledQuery`]: SQL text with `?` placeholders plus the values to bind,
//! in the order the placeholders appear. The trait's default methods are the
//! ANSI rendering; dialects override the hooks they need (identifier quoting,
//! function spelling, pagination).
//!
//! Subqueries are rendered into the caller's parameter vector, so their
//! values land exactly where their placeholders are.

mod error;
mod function;
mod window;

pub use error::{CompileError, Result};
pub use function::{ansi_function_sql, call, BuiltinFunction};
pub use window::{render_page_projection, render_row_number_page, PageProjection, RowFilter};

use tracing::trace;

use crate::ast::{
    ColumnRef, Condition, ConditionNode, DeleteStatement, Expression, Fragment, InSource,
    InsertSource, InsertStatement, Join, JoinType, Operand, OrderBy, Predicate, SelectColumn,
    SelectInto, SelectStatement, Statement, TableRef, TableSource, UpdateStatement,
};
use crate::builder::value::SqlValue;
use crate::dialect::DialectKind;

/// SQL text and its positional parameters.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompiledQuery {
    /// The SQL with `?` placeholders.
    pub sql: String,
    /// Values for the placeholders, in textual order.
    pub params: Vec<SqlValue>,
}

impl CompiledQuery {
    /// Returns the number of `?` placeholders in the SQL.
    ///
    /// A `?` inside a string literal or a quoted identifier (`'...'`,
    /// `"..."`, `` `...` `` or `[...]`) is not a placeholder.
    #[must_use]
    pub fn placeholder_count(&self) -> usize {
        let mut count = 0;
        let mut closing = None;
        for c in self.sql.chars() {
            match closing {
                Some(end) if c == end => closing = None,
                Some(_) => {}
                None => match c {
                    '\'' | '"' | '`' => closing = Some(c),
                    '[' => closing = Some(']'),
                    '?' => count += 1,
                    _ => {}
                },
            }
        }
        count
    }
}

/// LIMIT and OFFSET of a statement, with a zero offset treated as absent.
#[must_use]
pub fn page_of(stmt: &SelectStatement) -> (Option<u64>, Option<u64>) {
    (stmt.limit, stmt.offset.filter(|&m| m > 0))
}

/// Returns `SELECT ` or `SELECT DISTINCT `.
#[must_use]
pub const fn select_keyword(distinct: bool) -> &'static str {
    if distinct {
        "SELECT DISTINCT "
    } else {
        "SELECT "
    }
}

/// A dialect compiler.
///
/// Implementations are zero-sized values; every method is a pure function of
/// its arguments.
pub trait Compiler: Send + Sync {
    /// Returns the dialect name used in errors and logs.
    fn name(&self) -> &'static str;

    /// Returns the dialect this compiler renders.
    fn kind(&self) -> DialectKind;

    /// Returns the identifier template; `%s` is replaced by the name.
    fn wrapper(&self) -> &'static str {
        "\"%s\""
    }

    /// Quotes a single identifier segment.
    ///
    /// `*` is never quoted, and the closing quote character is doubled when
    /// it appears inside the name.
    fn wrap_segment(&self, segment: &str) -> String {
        if segment == "*" {
            return String::from(segment);
        }
        let template = self.wrapper();
        let (open, close) = template.split_once("%s").unwrap_or((template, ""));
        if close.is_empty() {
            return format!("{open}{segment}");
        }
        let escaped = segment.replace(close, &close.repeat(2));
        format!("{open}{escaped}{close}")
    }

    /// Quotes a dotted identifier segment by segment (`u.id` -> `"u"."id"`).
    fn wrap(&self, identifier: &str) -> String {
        identifier
            .split('.')
            .map(|segment| self.wrap_segment(segment))
            .collect::<Vec<_>>()
            .join(".")
    }

    /// Keyword placed between a table and its alias, including the trailing
    /// space.
    fn table_alias_keyword(&self) -> &'static str {
        "AS "
    }

    /// Spells a built-in function with already-rendered arguments.
    fn function_sql(&self, function: BuiltinFunction, args: &[String]) -> String {
        ansi_function_sql(function, args)
    }

    /// Renders a column reference.
    fn render_column(&self, column: &ColumnRef) -> String {
        if column.raw {
            column.name.clone()
        } else {
            self.wrap(&column.name)
        }
    }

    /// Renders an operand, binding values.
    ///
    /// # Errors
    ///
    /// Propagates errors from nested expressions.
    fn render_operand(&self, operand: &Operand, params: &mut Vec<SqlValue>) -> Result<String> {
        match operand {
            Operand::Column(column) => Ok(self.render_column(column)),
            Operand::Value(value) => {
                params.push(value.clone());
                Ok(String::from(SqlValue::placeholder()))
            }
            Operand::Expr(expr) => self.render_expression(expr, params),
        }
    }

    /// Renders an expression; fragments are separated by one space.
    ///
    /// # Errors
    ///
    /// Propagates errors from nested expressions.
    fn render_expression(&self, expr: &Expression, params: &mut Vec<SqlValue>) -> Result<String> {
        let mut parts = Vec::with_capacity(expr.fragments().len());
        for fragment in expr.fragments() {
            let part = match fragment {
                Fragment::Column(column) => self.render_column(column),
                Fragment::Value(value) => {
                    params.push(value.clone());
                    String::from(SqlValue::placeholder())
                }
                Fragment::Raw(sql) => sql.clone(),
                Fragment::Nested(inner) => format!("({})", self.render_expression(inner, params)?),
                Fragment::Function(call_expr) => {
                    let mut args = call_expr
                        .args
                        .iter()
                        .map(|arg| self.render_expression(arg, params))
                        .collect::<Result<Vec<_>>>()?;
                    if call_expr.distinct {
                        if let Some(first) = args.first_mut() {
                            first.insert_str(0, "DISTINCT ");
                        }
                    }
                    match BuiltinFunction::from_name(&call_expr.name) {
                        Some(function) => self.function_sql(function, &args),
                        None => call(&call_expr.name, &args),
                    }
                }
            };
            parts.push(part);
        }
        Ok(parts.join(" "))
    }

    /// Renders a leaf predicate.
    ///
    /// # Errors
    ///
    /// Propagates errors from operands and subqueries.
    fn render_predicate(
        &self,
        predicate: &Predicate,
        params: &mut Vec<SqlValue>,
    ) -> Result<String> {
        let sql = match predicate {
            Predicate::Compare { left, op, right } => {
                let left = self.render_operand(left, params)?;
                let right = self.render_operand(right, params)?;
                format!("{left} {} {right}", op.as_str())
            }
            Predicate::Between {
                expr,
                low,
                high,
                negated,
            } => {
                let expr = self.render_operand(expr, params)?;
                let low = self.render_operand(low, params)?;
                let high = self.render_operand(high, params)?;
                let not = if *negated { "NOT " } else { "" };
                format!("{expr} {not}BETWEEN {low} AND {high}")
            }
            Predicate::Like {
                expr,
                pattern,
                negated,
            } => {
                let expr = self.render_operand(expr, params)?;
                let pattern = self.render_operand(pattern, params)?;
                let not = if *negated { "NOT " } else { "" };
                format!("{expr} {not}LIKE {pattern}")
            }
            Predicate::In {
                expr,
                source,
                negated,
            } => {
                let not = if *negated { "NOT " } else { "" };
                match source {
                    InSource::List(items) if items.is_empty() => {
                        String::from(if *negated { "1 = 1" } else { "1 = 0" })
                    }
                    InSource::List(items) => {
                        let expr = self.render_operand(expr, params)?;
                        let items = items
                            .iter()
                            .map(|item| self.render_operand(item, params))
                            .collect::<Result<Vec<_>>>()?;
                        format!("{expr} {not}IN ({})", items.join(", "))
                    }
                    InSource::Subquery(query) => {
                        let expr = self.render_operand(expr, params)?;
                        let query = self.render_subquery(query, params)?;
                        format!("{expr} {not}IN ({query})")
                    }
                }
            }
            Predicate::IsNull { expr, negated } => {
                let expr = self.render_operand(expr, params)?;
                let not = if *negated { "NOT " } else { "" };
                format!("{expr} IS {not}NULL")
            }
            Predicate::Exists { query, negated } => {
                let query = self.render_subquery(query, params)?;
                let not = if *negated { "NOT " } else { "" };
                format!("{not}EXISTS ({query})")
            }
            Predicate::Raw { sql, params: bound } => {
                if sql.is_empty() {
                    return Ok(String::new());
                }
                params.extend(bound.iter().cloned());
                sql.clone()
            }
        };
        Ok(sql)
    }

    /// Renders a condition tree without the leading keyword.
    ///
    /// An empty tree renders as the empty string.
    ///
    /// # Errors
    ///
    /// Propagates errors from predicates.
    fn render_condition(
        &self,
        condition: &Condition,
        params: &mut Vec<SqlValue>,
    ) -> Result<String> {
        render_tree(self, condition, params).map(|tree| tree.sql)
    }

    /// Renders a FROM entry or join target.
    ///
    /// # Errors
    ///
    /// Propagates errors from derived tables.
    fn render_table_ref(&self, table: &TableRef, params: &mut Vec<SqlValue>) -> Result<String> {
        let base = match &table.source {
            TableSource::Named(name) => self.wrap(name),
            TableSource::Subquery(query) => format!("({})", self.render_subquery(query, params)?),
        };
        Ok(match &table.alias {
            Some(alias) => format!(
                "{base} {}{}",
                self.table_alias_keyword(),
                self.wrap_segment(alias)
            ),
            None => base,
        })
    }

    /// Renders the projection; an empty list renders `*`.
    ///
    /// # Errors
    ///
    /// Propagates errors from column expressions.
    fn render_projection(
        &self,
        columns: &[SelectColumn],
        params: &mut Vec<SqlValue>,
    ) -> Result<String> {
        if columns.is_empty() {
            return Ok(String::from("*"));
        }
        let rendered = columns
            .iter()
            .map(|column| {
                let expr = self.render_expression(&column.expr, params)?;
                Ok(match &column.alias {
                    Some(alias) => format!("{expr} AS {}", self.wrap_segment(alias)),
                    None => expr,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(rendered.join(", "))
    }

    /// Renders ` INTO t [IN db]`, or nothing.
    fn render_into(&self, into: Option<&SelectInto>) -> String {
        into.map_or_else(String::new, |into| match &into.database {
            Some(db) => format!(" INTO {} IN {}", self.wrap(&into.table), self.wrap_segment(db)),
            None => format!(" INTO {}", self.wrap(&into.table)),
        })
    }

    /// Renders the joins, each prefixed by a space.
    ///
    /// # Errors
    ///
    /// Returns [`CompileError::Structural`] for a non-cross join without an
    /// ON condition or a cross join with one.
    fn render_joins(&self, joins: &[Join], params: &mut Vec<SqlValue>) -> Result<String> {
        let mut sql = String::new();
        for join in joins {
            let target = self.render_table_ref(&join.target, params)?;
            let on = self.render_condition(&join.on, params)?;
            match (join.join_type, on.is_empty()) {
                (JoinType::Cross, true) => {
                    sql.push_str(&format!(" {} {target}", join.join_type.as_str()));
                }
                (JoinType::Cross, false) => {
                    return Err(CompileError::Structural(format!(
                        "CROSS JOIN {target} does not take an ON condition"
                    )));
                }
                (join_type, true) => {
                    return Err(CompileError::Structural(format!(
                        "{} {target} requires an ON condition",
                        join_type.as_str()
                    )));
                }
                (join_type, false) => {
                    sql.push_str(&format!(" {} {target} ON {on}", join_type.as_str()));
                }
            }
        }
        Ok(sql)
    }

    /// Renders everything between the projection and ORDER BY:
    /// `FROM`, joins, `WHERE`, `GROUP BY` and `HAVING`, each with a leading
    /// space and only when present.
    ///
    /// # Errors
    ///
    /// Propagates join and condition errors.
    fn render_source_clauses(
        &self,
        stmt: &SelectStatement,
        params: &mut Vec<SqlValue>,
    ) -> Result<String> {
        let mut sql = String::new();
        if !stmt.tables.is_empty() {
            let tables = stmt
                .tables
                .iter()
                .map(|table| self.render_table_ref(table, params))
                .collect::<Result<Vec<_>>>()?;
            sql.push_str(" FROM ");
            sql.push_str(&tables.join(", "));
        }
        sql.push_str(&self.render_joins(&stmt.joins, params)?);

        let where_sql = self.render_condition(&stmt.where_clause, params)?;
        if !where_sql.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&where_sql);
        }

        let groups = stmt
            .group_by
            .iter()
            .map(|expr| self.render_expression(expr, params))
            .collect::<Result<Vec<_>>>()?;
        if !groups.is_empty() {
            sql.push_str(" GROUP BY ");
            sql.push_str(&groups.join(", "));
        }

        let having = self.render_condition(&stmt.having, params)?;
        if !having.is_empty() {
            sql.push_str(" HAVING ");
            sql.push_str(&having);
        }
        Ok(sql)
    }

    /// Renders ORDER BY entries without the keyword.
    ///
    /// # Errors
    ///
    /// Propagates expression errors.
    fn render_order_list(
        &self,
        order_by: &[OrderBy],
        params: &mut Vec<SqlValue>,
    ) -> Result<String> {
        let entries = order_by
            .iter()
            .map(|entry| {
                let expr = self.render_expression(&entry.expr, params)?;
                let direction = entry.direction.as_str();
                Ok(match entry.nulls {
                    Some(nulls) => format!("{expr} {direction} {}", nulls.as_str()),
                    None => format!("{expr} {direction}"),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(entries.join(", "))
    }

    /// Renders ` ORDER BY ...`, or nothing.
    ///
    /// # Errors
    ///
    /// Propagates expression errors.
    fn render_order_by(&self, order_by: &[OrderBy], params: &mut Vec<SqlValue>) -> Result<String> {
        if order_by.is_empty() {
            return Ok(String::new());
        }
        Ok(format!(" ORDER BY {}", self.render_order_list(order_by, params)?))
    }

    /// Renders a SELECT without its pagination.
    ///
    /// # Errors
    ///
    /// Propagates clause errors.
    fn render_unpaged(&self, stmt: &SelectStatement, params: &mut Vec<SqlValue>) -> Result<String> {
        let mut sql = String::from(select_keyword(stmt.distinct));
        sql.push_str(&self.render_projection(&stmt.columns, params)?);
        sql.push_str(&self.render_into(stmt.into.as_ref()));
        sql.push_str(&self.render_source_clauses(stmt, params)?);
        sql.push_str(&self.render_order_by(&stmt.order_by, params)?);
        Ok(sql)
    }

    /// Trailing pagination clause, used by the default [`Compiler::render_select`].
    ///
    /// # Errors
    ///
    /// Dialects that cannot express a combination return
    /// [`CompileError::Unsupported`].
    fn limit_clause(&self, limit: Option<u64>, offset: Option<u64>) -> Result<String> {
        Ok(match (limit, offset) {
            (Some(n), Some(m)) => format!("LIMIT {n} OFFSET {m}"),
            (Some(n), None) => format!("LIMIT {n}"),
            (None, Some(m)) => format!("OFFSET {m}"),
            (None, None) => String::new(),
        })
    }

    /// Renders a full SELECT, pagination included.
    ///
    /// Dialects that emulate pagination by wrapping the query override this.
    ///
    /// # Errors
    ///
    /// Propagates clause and pagination errors.
    fn render_select(&self, stmt: &SelectStatement, params: &mut Vec<SqlValue>) -> Result<String> {
        let mut sql = self.render_unpaged(stmt, params)?;
        let (limit, offset) = page_of(stmt);
        let clause = self.limit_clause(limit, offset)?;
        if !clause.is_empty() {
            sql.push(' ');
            sql.push_str(&clause);
        }
        Ok(sql)
    }

    /// Renders a SELECT nested in another statement: IN and EXISTS
    /// subqueries, derived tables and `INSERT ... SELECT`.
    ///
    /// # Errors
    ///
    /// See [`Compiler::render_select`].
    fn render_subquery(
        &self,
        stmt: &SelectStatement,
        params: &mut Vec<SqlValue>,
    ) -> Result<String> {
        self.render_select(stmt, params)
    }

    /// Compiles a SELECT.
    ///
    /// # Errors
    ///
    /// See [`Compiler::render_select`].
    fn compile_select(&self, stmt: &SelectStatement) -> Result<CompiledQuery> {
        let mut params = Vec::new();
        let sql = self.render_select(stmt, &mut params)?;
        Ok(finish(self.name(), sql, params))
    }

    /// Compiles an INSERT.
    ///
    /// # Errors
    ///
    /// Returns [`CompileError::Structural`] when there are no rows or the
    /// rows do not all match the column count.
    fn compile_insert(&self, stmt: &InsertStatement) -> Result<CompiledQuery> {
        let mut params = Vec::new();
        let mut sql = format!("INSERT INTO {}", self.wrap(&stmt.table));
        if !stmt.columns.is_empty() {
            let columns: Vec<String> = stmt.columns.iter().map(|c| self.wrap(c)).collect();
            sql.push_str(&format!(" ({})", columns.join(", ")));
        }
        match &stmt.source {
            InsertSource::Values(rows) => {
                let Some(first) = rows.first() else {
                    return Err(CompileError::Structural(format!(
                        "INSERT INTO {} has no rows",
                        stmt.table
                    )));
                };
                let arity = if stmt.columns.is_empty() {
                    first.len()
                } else {
                    stmt.columns.len()
                };
                if arity == 0 {
                    return Err(CompileError::Structural(format!(
                        "INSERT INTO {} has an empty row",
                        stmt.table
                    )));
                }
                let mut rendered = Vec::with_capacity(rows.len());
                for (index, row) in rows.iter().enumerate() {
                    if row.len() != arity {
                        return Err(CompileError::Structural(format!(
                            "INSERT row {index} has {} values, expected {arity}",
                            row.len()
                        )));
                    }
                    let values = row
                        .iter()
                        .map(|value| self.render_operand(value, &mut params))
                        .collect::<Result<Vec<_>>>()?;
                    rendered.push(format!("({})", values.join(", ")));
                }
                sql.push_str(" VALUES ");
                sql.push_str(&rendered.join(", "));
            }
            InsertSource::Query(query) => {
                sql.push(' ');
                sql.push_str(&self.render_subquery(query, &mut params)?);
            }
        }
        Ok(finish(self.name(), sql, params))
    }

    /// Compiles an UPDATE.
    ///
    /// # Errors
    ///
    /// Returns [`CompileError::Structural`] when there are no assignments.
    fn compile_update(&self, stmt: &UpdateStatement) -> Result<CompiledQuery> {
        if stmt.assignments.is_empty() {
            return Err(CompileError::Structural(format!(
                "UPDATE {} has no assignments",
                stmt.table
            )));
        }
        let mut params = Vec::new();
        let assignments = stmt
            .assignments
            .iter()
            .map(|assignment| {
                let value = self.render_operand(&assignment.value, &mut params)?;
                Ok(format!("{} = {value}", self.wrap(&assignment.column)))
            })
            .collect::<Result<Vec<_>>>()?;
        let mut sql = format!(
            "UPDATE {} SET {}",
            self.wrap(&stmt.table),
            assignments.join(", ")
        );
        let where_sql = self.render_condition(&stmt.where_clause, &mut params)?;
        if !where_sql.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&where_sql);
        }
        Ok(finish(self.name(), sql, params))
    }

    /// Compiles a DELETE.
    ///
    /// # Errors
    ///
    /// Propagates condition errors.
    fn compile_delete(&self, stmt: &DeleteStatement) -> Result<CompiledQuery> {
        let mut params = Vec::new();
        let mut sql = format!("DELETE FROM {}", self.wrap(&stmt.table));
        let where_sql = self.render_condition(&stmt.where_clause, &mut params)?;
        if !where_sql.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&where_sql);
        }
        Ok(finish(self.name(), sql, params))
    }

    /// Compiles any statement.
    ///
    /// # Errors
    ///
    /// See the per-statement methods.
    fn compile(&self, stmt: &Statement) -> Result<CompiledQuery> {
        match stmt {
            Statement::Select(s) => self.compile_select(s),
            Statement::Insert(i) => self.compile_insert(i),
            Statement::Update(u) => self.compile_update(u),
            Statement::Delete(d) => self.compile_delete(d),
        }
    }
}

fn finish(dialect: &str, sql: String, params: Vec<SqlValue>) -> CompiledQuery {
    trace!(dialect, params = params.len(), sql = %sql, "Compiled statement");
    CompiledQuery { sql, params }
}

struct RenderedTree {
    sql: String,
    children: usize,
    // A single child that cannot be split by a neighbouring AND/OR.
    atomic: bool,
}

fn render_tree<C: Compiler + ?Sized>(
    compiler: &C,
    condition: &Condition,
    params: &mut Vec<SqlValue>,
) -> Result<RenderedTree> {
    let mut sql = String::new();
    let mut children = 0;
    let mut atomic = false;
    for (connector, node) in condition.children() {
        let (part, part_atomic) = match node {
            ConditionNode::Predicate(predicate) => (
                compiler.render_predicate(predicate, params)?,
                !matches!(predicate, Predicate::Raw { .. }),
            ),
            ConditionNode::Group {
                condition: group,
                negated,
            } => {
                let inner = render_tree(compiler, group, params)?;
                let part = if inner.sql.is_empty() {
                    inner.sql
                } else if *negated {
                    format!("NOT ({})", inner.sql)
                } else if inner.children > 1 || !inner.atomic {
                    format!("({})", inner.sql)
                } else {
                    inner.sql
                };
                (part, true)
            }
        };
        if part.is_empty() {
            continue;
        }
        if children > 0 {
            sql.push(' ');
            sql.push_str(connector.as_str());
            sql.push(' ');
        }
        sql.push_str(&part);
        children += 1;
        atomic = part_atomic;
    }
    Ok(RenderedTree {
        sql,
        children,
        atomic,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{col, count_all, Delete, Insert, Select, Update};
    use crate::dialect::AnsiCompiler;

    fn ansi(stmt: &SelectStatement) -> CompiledQuery {
        AnsiCompiler.compile_select(stmt).unwrap()
    }

    #[test]
    fn test_placeholder_count_skips_quoted_text() {
        let query = CompiledQuery {
            sql: String::from(
                r#"SELECT "why?", [who?], `how?` FROM t WHERE a = ? AND b = 'it''s ?' AND c = ?"#,
            ),
            params: vec![SqlValue::Int(1), SqlValue::Int(2)],
        };
        assert_eq!(query.placeholder_count(), 2);
    }

    #[test]
    fn test_select_star_without_columns() {
        let q = ansi(&Select::new().from("users").build());
        assert_eq!(q.sql, r#"SELECT * FROM "users""#);
        assert!(q.params.is_empty());
    }

    #[test]
    fn test_select_without_from() {
        let stmt = Select::new().column(crate::builder::expr().raw("1")).build();
        assert_eq!(ansi(&stmt).sql, "SELECT 1");
    }

    #[test]
    fn test_between_scenario() {
        let stmt = Select::new()
            .from("users")
            .where_clause(col("age").between(18, 21))
            .build();
        let q = ansi(&stmt);
        assert_eq!(q.sql, r#"SELECT * FROM "users" WHERE "age" BETWEEN ? AND ?"#);
        assert_eq!(q.params, vec![SqlValue::Int(18), SqlValue::Int(21)]);
    }

    #[test]
    fn test_empty_group_is_skipped_with_connector() {
        let stmt = Select::new()
            .from("t")
            .where_clause(col("a").eq(1))
            .or_where_group(Condition::new())
            .build();
        assert_eq!(ansi(&stmt).sql, r#"SELECT * FROM "t" WHERE "a" = ?"#);
    }

    #[test]
    fn test_single_child_group_is_not_parenthesized() {
        let stmt = Select::new()
            .from("t")
            .where_clause(col("a").eq(1))
            .where_group(Condition::new().and(col("b").eq(2)))
            .build();
        assert_eq!(ansi(&stmt).sql, r#"SELECT * FROM "t" WHERE "a" = ? AND "b" = ?"#);
    }

    #[test]
    fn test_negated_group_always_parenthesized() {
        let stmt = Select::new()
            .from("t")
            .where_not_group(Condition::new().and(col("b").eq(2)))
            .build();
        assert_eq!(ansi(&stmt).sql, r#"SELECT * FROM "t" WHERE NOT ("b" = ?)"#);
    }

    #[test]
    fn test_empty_in_list() {
        let empty: Vec<i32> = vec![];
        let stmt = Select::new()
            .from("t")
            .where_clause(col("a").in_list(empty.clone()))
            .or_where(col("b").not_in_list(empty))
            .build();
        let q = ansi(&stmt);
        assert_eq!(q.sql, r#"SELECT * FROM "t" WHERE 1 = 0 OR 1 = 1"#);
        assert!(q.params.is_empty());
    }

    #[test]
    fn test_join_without_on_is_structural() {
        let stmt = Select::new()
            .from("a")
            .join("b", Condition::new())
            .build();
        assert!(matches!(
            AnsiCompiler.compile_select(&stmt),
            Err(CompileError::Structural(_))
        ));
    }

    #[test]
    fn test_count_query() {
        let stmt = Select::new().column_as(count_all(), "n").from("users").build();
        assert_eq!(ansi(&stmt).sql, r#"SELECT COUNT(*) AS "n" FROM "users""#);
    }

    #[test]
    fn test_zero_offset_is_dropped() {
        let stmt = Select::new().from("t").limit(10).offset(0).build();
        assert_eq!(ansi(&stmt).sql, r#"SELECT * FROM "t" LIMIT 10"#);
    }

    #[test]
    fn test_compile_dispatches_dml() {
        let insert = Insert::new()
            .into_table("t")
            .columns(&["a"])
            .values([1])
            .build();
        let update = Update::new().table("t").set("a", 2).build();
        let delete = Delete::new().from("t").build();

        assert_eq!(
            AnsiCompiler.compile(&insert.into()).unwrap().sql,
            r#"INSERT INTO "t" ("a") VALUES (?)"#
        );
        assert_eq!(
            AnsiCompiler.compile(&update.into()).unwrap().sql,
            r#"UPDATE "t" SET "a" = ?"#
        );
        assert_eq!(
            AnsiCompiler.compile(&delete.into()).unwrap().sql,
            r#"DELETE FROM "t""#
        );
    }

    #[test]
    fn test_compilation_is_repeatable() {
        let stmt = Select::new()
            .from("t")
            .where_clause(col("a").eq("x"))
            .build();
        assert_eq!(ansi(&stmt), ansi(&stmt));
    }

    #[test]
    fn test_placeholder_count() {
        let q = CompiledQuery {
            sql: String::from("a = ? AND b = ?"),
            params: vec![SqlValue::Int(1), SqlValue::Int(2)],
        };
        assert_eq!(q.placeholder_count(), 2);
    }
}
