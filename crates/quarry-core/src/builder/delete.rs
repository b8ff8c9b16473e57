//! DELETE builder using the typestate pattern.

use std::marker::PhantomData;

use crate::ast::{Condition, DeleteStatement, Predicate};

// Typestate markers

/// Marker: No table specified yet.
pub struct NoTable;
/// Marker: Table has been specified.
pub struct HasTable;

/// A DELETE statement builder.
///
/// `build()` is only available once the table is specified.
pub struct Delete<Table> {
    table: Option<String>,
    where_clause: Condition,
    _state: PhantomData<Table>,
}

impl Delete<NoTable> {
    /// Creates a new DELETE builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            table: None,
            where_clause: Condition::new(),
            _state: PhantomData,
        }
    }

    /// Specifies the table to delete from.
    #[must_use]
    pub fn from(self, table: &str) -> Delete<HasTable> {
        Delete {
            table: Some(String::from(table)),
            where_clause: self.where_clause,
            _state: PhantomData,
        }
    }
}

impl Default for Delete<NoTable> {
    fn default() -> Self {
        Self::new()
    }
}

impl Delete<HasTable> {
    /// Adds a WHERE predicate joined with AND.
    ///
    /// **Important**: DELETE without WHERE deletes all rows!
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

    /// Returns true if a WHERE clause is specified.
    #[must_use]
    pub fn has_where_clause(&self) -> bool {
        !self.where_clause.is_empty()
    }

    /// Freezes the builder into a statement.
    #[must_use]
    pub fn build(self) -> DeleteStatement {
        DeleteStatement {
            table: self.table.unwrap_or_default(),
            where_clause: self.where_clause,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::col;

    #[test]
    fn test_delete_without_where() {
        let delete = Delete::new().from("sessions");
        assert!(!delete.has_where_clause());
        assert_eq!(delete.build().table, "sessions");
    }

    #[test]
    fn test_delete_with_where() {
        let delete = Delete::new()
            .from("sessions")
            .where_clause(col("expired").eq(true));
        assert!(delete.has_where_clause());
    }
}
