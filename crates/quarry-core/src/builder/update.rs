//! UPDATE builder using the typestate pattern.

use std::marker::PhantomData;

use crate::ast::{Assignment, Condition, Expression, Operand, Predicate, UpdateStatement};

// Typestate markers

/// Marker: No table specified yet.
pub struct NoTable;
/// Marker: Table has been specified.
pub struct HasTable;
/// Marker: No SET clause specified yet.
pub struct NoSet;
/// Marker: SET clause has been specified.
pub struct HasSet;

/// An UPDATE statement builder.
pub struct Update<Table, Set> {
    table: Option<String>,
    assignments: Vec<Assignment>,
    where_clause: Condition,
    _state: PhantomData<(Table, Set)>,
}

impl Update<NoTable, NoSet> {
    /// Creates a new UPDATE builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            table: None,
            assignments: vec![],
            where_clause: Condition::new(),
            _state: PhantomData,
        }
    }
}

impl Default for Update<NoTable, NoSet> {
    fn default() -> Self {
        Self::new()
    }
}

// Transition: NoTable -> HasTable
impl<Set> Update<NoTable, Set> {
    /// Specifies the table to update.
    #[must_use]
    pub fn table(self, table: &str) -> Update<HasTable, Set> {
        Update {
            table: Some(String::from(table)),
            assignments: self.assignments,
            where_clause: self.where_clause,
            _state: PhantomData,
        }
    }
}

// Transition: NoSet -> HasSet (requires table)
impl Update<HasTable, NoSet> {
    /// Adds the first SET assignment.
    #[must_use]
    pub fn set(self, column: &str, value: impl Into<Operand>) -> Update<HasTable, HasSet> {
        Update {
            table: self.table,
            assignments: vec![Assignment {
                column: String::from(column),
                value: value.into(),
            }],
            where_clause: self.where_clause,
            _state: PhantomData,
        }
    }

    /// Adds `column = column + by` as the first assignment.
    #[must_use]
    pub fn increment(self, column: &str, by: i64) -> Update<HasTable, HasSet> {
        self.set(column, step(column, "+", by))
    }

    /// Adds `column = column - by` as the first assignment.
    #[must_use]
    pub fn decrement(self, column: &str, by: i64) -> Update<HasTable, HasSet> {
        self.set(column, step(column, "-", by))
    }
}

// Methods available after SET
impl Update<HasTable, HasSet> {
    /// Adds another SET assignment.
    #[must_use]
    pub fn set(mut self, column: &str, value: impl Into<Operand>) -> Self {
        self.assignments.push(Assignment {
            column: String::from(column),
            value: value.into(),
        });
        self
    }

    /// Adds `column = column + by`.
    #[must_use]
    pub fn increment(self, column: &str, by: i64) -> Self {
        self.set(column, step(column, "+", by))
    }

    /// Adds `column = column - by`.
    #[must_use]
    pub fn decrement(self, column: &str, by: i64) -> Self {
        self.set(column, step(column, "-", by))
    }

    /// Adds a WHERE predicate joined with AND.
    #[must_use]
    pub fn where_clause(mut self, predicate: Predicate) -> Self {
        self.where_clause = self.where_clause.and(predicate);
        self
    }

    /// Adds a WHERE predicate joined with OR.
    #[must_use]
    pub fn or_where(mut self, predicate: Predicate) -> Self {
        self.where_clause = self.where_clause.or(predicate);
        self
    }

    /// Adds a parenthesized WHERE group joined with AND.
    #[must_use]
    pub fn where_group(mut self, group: Condition) -> Self {
        self.where_clause = self.where_clause.and_group(group);
        self
    }

    /// Freezes the builder into a statement.
    #[must_use]
    pub fn build(self) -> UpdateStatement {
        UpdateStatement {
            table: self.table.unwrap_or_default(),
            assignments: self.assignments,
            where_clause: self.where_clause,
        }
    }
}

fn step(column: &str, op: &str, by: i64) -> Expression {
    Expression::new().column(column).op(op).value(by)
}
