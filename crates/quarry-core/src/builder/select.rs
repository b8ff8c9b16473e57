//! Fluent SELECT builder.
//!
//! The builder consumes itself on every call and [`Select::build`] returns a
//! frozen [`SelectStatement`]. SQL is only produced by a compiler, so a built
//! statement can be compiled for several dialects without re-running the
//! builder.

use crate::ast::{
    Condition, Expression, Join, JoinType, NullOrdering, OrderBy, OrderDirection, Predicate,
    SelectColumn, SelectInto, SelectStatement, TableRef,
};

/// A SELECT statement builder.
#[derive(Debug, Clone, Default)]
pub struct Select {
    stmt: SelectStatement,
}

impl Select {
    /// Creates a new SELECT builder with no source (`SELECT *`).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a table to the FROM clause.
    #[must_use]
    pub fn from(mut self, table: &str) -> Self {
        self.stmt.tables.push(TableRef::table(table));
        self
    }

    /// Adds an aliased table to the FROM clause.
    #[must_use]
    pub fn from_as(mut self, table: &str, alias: &str) -> Self {
        self.stmt.tables.push(TableRef::table(table).alias(alias));
        self
    }

    /// Adds a derived table to the FROM clause.
    #[must_use]
    pub fn from_subquery(mut self, query: SelectStatement, alias: &str) -> Self {
        self.stmt.tables.push(TableRef::subquery(query, alias));
        self
    }

    /// Adds plain columns to the projection.
    #[must_use]
    pub fn columns(mut self, cols: &[&str]) -> Self {
        self.stmt.columns.extend(
            cols.iter()
                .map(|name| SelectColumn::new(Expression::new().column(name))),
        );
        self
    }

    /// Adds an expression (or column name) to the projection.
    #[must_use]
    pub fn column(mut self, expr: impl Into<Expression>) -> Self {
        self.stmt.columns.push(SelectColumn::new(expr.into()));
        self
    }

    /// Adds an aliased expression (or column name) to the projection.
    #[must_use]
    pub fn column_as(mut self, expr: impl Into<Expression>, alias: &str) -> Self {
        self.stmt
            .columns
            .push(SelectColumn::with_alias(expr.into(), alias));
        self
    }

    /// Sets DISTINCT.
    #[must_use]
    pub const fn distinct(mut self) -> Self {
        self.stmt.distinct = true;
        self
    }

    /// Turns the query into `SELECT ... INTO table`.
    #[must_use]
    pub fn into_table(mut self, table: &str) -> Self {
        self.stmt.into = Some(SelectInto {
            table: String::from(table),
            database: None,
        });
        self
    }

    /// Turns the query into `SELECT ... INTO table IN database`.
    #[must_use]
    pub fn into_table_in(mut self, table: &str, database: &str) -> Self {
        self.stmt.into = Some(SelectInto {
            table: String::from(table),
            database: Some(String::from(database)),
        });
        self
    }

    /// Adds a join of any type.
    #[must_use]
    pub fn join_ref(mut self, join_type: JoinType, target: TableRef, on: Condition) -> Self {
        self.stmt.joins.push(Join {
            join_type,
            target,
            on,
        });
        self
    }

    /// Adds an INNER JOIN.
    #[must_use]
    pub fn join(self, table: &str, on: impl Into<Condition>) -> Self {
        self.join_ref(JoinType::Inner, TableRef::table(table), on.into())
    }

    /// Adds an aliased INNER JOIN.
    #[must_use]
    pub fn join_as(self, table: &str, alias: &str, on: impl Into<Condition>) -> Self {
        self.join_ref(JoinType::Inner, TableRef::table(table).alias(alias), on.into())
    }

    /// Adds a LEFT JOIN.
    #[must_use]
    pub fn left_join(self, table: &str, on: impl Into<Condition>) -> Self {
        self.join_ref(JoinType::Left, TableRef::table(table), on.into())
    }

    /// Adds a RIGHT JOIN.
    #[must_use]
    pub fn right_join(self, table: &str, on: impl Into<Condition>) -> Self {
        self.join_ref(JoinType::Right, TableRef::table(table), on.into())
    }

    /// Adds a FULL JOIN.
    #[must_use]
    pub fn full_join(self, table: &str, on: impl Into<Condition>) -> Self {
        self.join_ref(JoinType::Full, TableRef::table(table), on.into())
    }

    /// Adds a CROSS JOIN.
    #[must_use]
    pub fn cross_join(self, table: &str) -> Self {
        self.join_ref(JoinType::Cross, TableRef::table(table), Condition::new())
    }

    /// Adds a WHERE predicate joined with AND.
    #[must_use]
    pub fn where_clause(mut self, predicate: Predicate) -> Self {
        self.stmt.where_clause = self.stmt.where_clause.and(predicate);
        self
    }

    /// Adds a WHERE predicate joined with OR.
    #[must_use]
    pub fn or_where(mut self, predicate: Predicate) -> Self {
        self.stmt.where_clause = self.stmt.where_clause.or(predicate);
        self
    }

    /// Adds a parenthesized WHERE group joined with AND.
    #[must_use]
    pub fn where_group(mut self, group: Condition) -> Self {
        self.stmt.where_clause = self.stmt.where_clause.and_group(group);
        self
    }

    /// Adds a parenthesized WHERE group joined with OR.
    #[must_use]
    pub fn or_where_group(mut self, group: Condition) -> Self {
        self.stmt.where_clause = self.stmt.where_clause.or_group(group);
        self
    }

    /// Adds `AND NOT (group)` to the WHERE clause.
    #[must_use]
    pub fn where_not_group(mut self, group: Condition) -> Self {
        self.stmt.where_clause = self.stmt.where_clause.and_not_group(group);
        self
    }

    /// Adds GROUP BY columns.
    #[must_use]
    pub fn group_by(mut self, cols: &[&str]) -> Self {
        self.stmt
            .group_by
            .extend(cols.iter().map(|name| Expression::new().column(name)));
        self
    }

    /// Adds a GROUP BY expression.
    #[must_use]
    pub fn group_by_expr(mut self, expr: Expression) -> Self {
        self.stmt.group_by.push(expr);
        self
    }

    /// Adds a HAVING predicate joined with AND.
    #[must_use]
    pub fn having(mut self, predicate: Predicate) -> Self {
        self.stmt.having = self.stmt.having.and(predicate);
        self
    }

    /// Adds a HAVING predicate joined with OR.
    #[must_use]
    pub fn or_having(mut self, predicate: Predicate) -> Self {
        self.stmt.having = self.stmt.having.or(predicate);
        self
    }

    /// Adds a parenthesized HAVING group joined with AND.
    #[must_use]
    pub fn having_group(mut self, group: Condition) -> Self {
        self.stmt.having = self.stmt.having.and_group(group);
        self
    }

    /// Adds ascending ORDER BY columns.
    #[must_use]
    pub fn order_by(mut self, cols: &[&str]) -> Self {
        for name in cols {
            self = self.order_by_expr(Expression::new().column(name), OrderDirection::Asc, None);
        }
        self
    }

    /// Adds descending ORDER BY columns.
    #[must_use]
    pub fn order_by_desc(mut self, cols: &[&str]) -> Self {
        for name in cols {
            self = self.order_by_expr(Expression::new().column(name), OrderDirection::Desc, None);
        }
        self
    }

    /// Adds an ORDER BY entry with explicit direction and null ordering.
    #[must_use]
    pub fn order_by_expr(
        mut self,
        expr: Expression,
        direction: OrderDirection,
        nulls: Option<NullOrdering>,
    ) -> Self {
        self.stmt.order_by.push(OrderBy {
            expr,
            direction,
            nulls,
        });
        self
    }

    /// Sets LIMIT.
    #[must_use]
    pub const fn limit(mut self, n: u64) -> Self {
        self.stmt.limit = Some(n);
        self
    }

    /// Sets OFFSET (number of rows to skip).
    #[must_use]
    pub const fn offset(mut self, n: u64) -> Self {
        self.stmt.offset = Some(n);
        self
    }

    /// Freezes the builder into a statement.
    #[must_use]
    pub fn build(self) -> SelectStatement {
        self.stmt
    }
}

impl From<Select> for SelectStatement {
    fn from(select: Select) -> Self {
        select.build()
    }
}
