//! INSERT builder using the typestate pattern.

use std::marker::PhantomData;

use crate::ast::{InsertSource, InsertStatement, Operand, SelectStatement};

// Typestate markers

/// Marker: No table specified yet.
pub struct NoTable;
/// Marker: Table has been specified.
pub struct HasTable;
/// Marker: No rows specified yet.
pub struct NoValues;
/// Marker: Rows (or a source query) have been specified.
pub struct HasValues;

/// An INSERT statement builder.
///
/// `build()` is only available once a table and at least one row (or a
/// source query) are set.
pub struct Insert<Table, Values> {
    table: Option<String>,
    columns: Vec<String>,
    rows: Vec<Vec<Operand>>,
    query: Option<SelectStatement>,
    _state: PhantomData<(Table, Values)>,
}

impl Insert<NoTable, NoValues> {
    /// Creates a new INSERT builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            table: None,
            columns: vec![],
            rows: vec![],
            query: None,
            _state: PhantomData,
        }
    }
}

impl Default for Insert<NoTable, NoValues> {
    fn default() -> Self {
        Self::new()
    }
}

// Transition: NoTable -> HasTable
impl<Values> Insert<NoTable, Values> {
    /// Specifies the table to insert into.
    #[must_use]
    pub fn into_table(self, table: &str) -> Insert<HasTable, Values> {
        Insert {
            table: Some(String::from(table)),
            columns: self.columns,
            rows: self.rows,
            query: self.query,
            _state: PhantomData,
        }
    }
}

impl<Values> Insert<HasTable, Values> {
    /// Specifies the target columns.
    #[must_use]
    pub fn columns(mut self, cols: &[&str]) -> Self {
        self.columns = cols.iter().map(|s| String::from(*s)).collect();
        self
    }
}

// Transition: NoValues -> HasValues
impl Insert<HasTable, NoValues> {
    /// Adds the first row.
    #[must_use]
    pub fn values<I, T>(self, row: I) -> Insert<HasTable, HasValues>
    where
        I: IntoIterator<Item = T>,
        T: Into<Operand>,
    {
        Insert {
            table: self.table,
            columns: self.columns,
            rows: vec![row.into_iter().map(Into::into).collect()],
            query: None,
            _state: PhantomData,
        }
    }

    /// Inserts the result of a query instead of literal rows.
    #[must_use]
    pub fn select(self, query: SelectStatement) -> Insert<HasTable, HasValues> {
        Insert {
            table: self.table,
            columns: self.columns,
            rows: vec![],
            query: Some(query),
            _state: PhantomData,
        }
    }
}

impl Insert<HasTable, HasValues> {
    /// Adds another row.
    #[must_use]
    pub fn and_values<I, T>(mut self, row: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Operand>,
    {
        self.rows.push(row.into_iter().map(Into::into).collect());
        self
    }

    /// Freezes the builder into a statement.
    #[must_use]
    pub fn build(self) -> InsertStatement {
        let source = match self.query {
            Some(query) => InsertSource::Query(Box::new(query)),
            None => InsertSource::Values(self.rows),
        };
        InsertStatement {
            table: self.table.unwrap_or_default(),
            columns: self.columns,
            source,
        }
    }
}
