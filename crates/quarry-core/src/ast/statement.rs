//! Statement model.
//!
//! Statements are plain values produced by the builders in
//! [`crate::builder`]. They carry no rendered SQL; every compilation renders
//! from scratch.

use super::condition::Condition;
use super::expression::{Expression, Operand};

/// Order direction for ORDER BY.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderDirection {
    /// Ascending order (default).
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl OrderDirection {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Null ordering for ORDER BY.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NullOrdering {
    /// NULLs come first.
    First,
    /// NULLs come last.
    Last,
}

impl NullOrdering {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::First => "NULLS FIRST",
            Self::Last => "NULLS LAST",
        }
    }
}

/// An ORDER BY clause entry.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderBy {
    /// The expression to order by.
    pub expr: Expression,
    /// The direction (ASC or DESC).
    pub direction: OrderDirection,
    /// Null ordering (optional).
    pub nulls: Option<NullOrdering>,
}

/// Join type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinType {
    /// INNER JOIN.
    Inner,
    /// LEFT OUTER JOIN.
    Left,
    /// RIGHT OUTER JOIN.
    Right,
    /// FULL OUTER JOIN.
    Full,
    /// CROSS JOIN.
    Cross,
}

impl JoinType {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Inner => "INNER JOIN",
            Self::Left => "LEFT JOIN",
            Self::Right => "RIGHT JOIN",
            Self::Full => "FULL JOIN",
            Self::Cross => "CROSS JOIN",
        }
    }
}

/// What a FROM entry or join target reads from.
#[derive(Debug, Clone, PartialEq)]
pub enum TableSource {
    /// A (possibly schema-qualified) table name.
    Named(String),
    /// A derived table.
    Subquery(Box<SelectStatement>),
}

/// A table reference in FROM clause or a join target.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRef {
    /// The source.
    pub source: TableSource,
    /// Alias.
    pub alias: Option<String>,
}

impl TableRef {
    /// Creates a simple table reference.
    #[must_use]
    pub fn table(name: impl Into<String>) -> Self {
        Self {
            source: TableSource::Named(name.into()),
            alias: None,
        }
    }

    /// Creates a derived-table reference.
    #[must_use]
    pub fn subquery(query: SelectStatement, alias: impl Into<String>) -> Self {
        Self {
            source: TableSource::Subquery(Box::new(query)),
            alias: Some(alias.into()),
        }
    }

    /// Adds an alias to this table reference.
    #[must_use]
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Returns the name other clauses use to refer to this source.
    #[must_use]
    pub fn reference_name(&self) -> Option<&str> {
        match (&self.alias, &self.source) {
            (Some(alias), _) => Some(alias),
            (None, TableSource::Named(name)) => Some(name),
            (None, TableSource::Subquery(_)) => None,
        }
    }
}

/// A JOIN clause.
#[derive(Debug, Clone, PartialEq)]
pub struct Join {
    /// The type of join.
    pub join_type: JoinType,
    /// The table to join.
    pub target: TableRef,
    /// The join condition; must be empty for CROSS joins only.
    pub on: Condition,
}

/// A column in SELECT clause.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectColumn {
    /// The expression.
    pub expr: Expression,
    /// Column alias.
    pub alias: Option<String>,
}

impl SelectColumn {
    /// Creates a new select column.
    #[must_use]
    pub fn new(expr: Expression) -> Self {
        Self { expr, alias: None }
    }

    /// Creates a select column with an alias.
    #[must_use]
    pub fn with_alias(expr: Expression, alias: impl Into<String>) -> Self {
        Self {
            expr,
            alias: Some(alias.into()),
        }
    }
}

/// Target of `SELECT ... INTO`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectInto {
    /// Destination table.
    pub table: String,
    /// External database (`IN "db"`).
    pub database: Option<String>,
}

/// A SELECT statement.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SelectStatement {
    /// Whether to select DISTINCT values.
    pub distinct: bool,
    /// The projection; empty means `*`.
    pub columns: Vec<SelectColumn>,
    /// `SELECT ... INTO` target.
    pub into: Option<SelectInto>,
    /// FROM sources, comma-joined.
    pub tables: Vec<TableRef>,
    /// Joins in declaration order.
    pub joins: Vec<Join>,
    /// The WHERE tree.
    pub where_clause: Condition,
    /// GROUP BY expressions.
    pub group_by: Vec<Expression>,
    /// The HAVING tree.
    pub having: Condition,
    /// ORDER BY clauses.
    pub order_by: Vec<OrderBy>,
    /// LIMIT.
    pub limit: Option<u64>,
    /// OFFSET (0-indexed row count to skip).
    pub offset: Option<u64>,
}

/// Source of data for INSERT.
#[derive(Debug, Clone, PartialEq)]
pub enum InsertSource {
    /// VALUES (...), (...), ...
    Values(Vec<Vec<Operand>>),
    /// INSERT ... SELECT ...
    Query(Box<SelectStatement>),
}

/// An INSERT statement.
#[derive(Debug, Clone, PartialEq)]
pub struct InsertStatement {
    /// Table name.
    pub table: String,
    /// Column names (optional).
    pub columns: Vec<String>,
    /// Rows or query to insert.
    pub source: InsertSource,
}

/// An assignment in UPDATE SET.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    /// Column name.
    pub column: String,
    /// Value, column or expression (`hits + 1`).
    pub value: Operand,
}

/// An UPDATE statement.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateStatement {
    /// Table name.
    pub table: String,
    /// SET assignments.
    pub assignments: Vec<Assignment>,
    /// WHERE clause.
    pub where_clause: Condition,
}

/// A DELETE statement.
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteStatement {
    /// Table name.
    pub table: String,
    /// WHERE clause.
    pub where_clause: Condition,
}

/// A SQL statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// SELECT statement.
    Select(SelectStatement),
    /// INSERT statement.
    Insert(InsertStatement),
    /// UPDATE statement.
    Update(UpdateStatement),
    /// DELETE statement.
    Delete(DeleteStatement),
}

impl From<SelectStatement> for Statement {
    fn from(stmt: SelectStatement) -> Self {
        Self::Select(stmt)
    }
}

impl From<InsertStatement> for Statement {
    fn from(stmt: InsertStatement) -> Self {
        Self::Insert(stmt)
    }
}

impl From<UpdateStatement> for Statement {
    fn from(stmt: UpdateStatement) -> Self {
        Self::Update(stmt)
    }
}

impl From<DeleteStatement> for Statement {
    fn from(stmt: DeleteStatement) -> Self {
        Self::Delete(stmt)
    }
}
