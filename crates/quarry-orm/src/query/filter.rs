//! Q objects for complex query filtering.
//!
//! Q objects allow building complex filter expressions that can be combined
//! with AND, OR, and NOT operators. Each one wraps a core [`Condition`], so
//! the dialect compiler decides the final SQL.

use quarry_core::ast::Condition;
use quarry_core::builder::col;
use quarry_core::builder::value::{SqlValue, ToSqlValue};
use quarry_core::{Compiler, Predicate};

/// A filter expression that can be combined with other expressions.
///
/// # Example
///
/// ```rust
/// use quarry_orm::Q;
///
/// // Simple equality
/// let filter = Q::eq("status", "active");
///
/// // Complex boolean logic
/// let filter = Q::eq("status", "active")
///     .and(Q::gt("age", 18).or(Q::eq("verified", true)));
///
/// // NOT expressions
/// let filter = Q::eq("deleted", true).not();
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Q {
    condition: Condition,
}

impl Q {
    fn leaf(predicate: Predicate) -> Self {
        Self {
            condition: Condition::from(predicate),
        }
    }

    /// Creates an equality filter (field = value).
    pub fn eq<V: ToSqlValue>(field: &str, value: V) -> Self {
        Self::leaf(col(field).eq(value.to_sql_value()))
    }

    /// Creates an inequality filter (field != value).
    pub fn ne<V: ToSqlValue>(field: &str, value: V) -> Self {
        Self::leaf(col(field).not_eq(value.to_sql_value()))
    }

    /// Creates a greater-than filter (field > value).
    pub fn gt<V: ToSqlValue>(field: &str, value: V) -> Self {
        Self::leaf(col(field).gt(value.to_sql_value()))
    }

    /// Creates a greater-than-or-equal filter (field >= value).
    pub fn gte<V: ToSqlValue>(field: &str, value: V) -> Self {
        Self::leaf(col(field).gt_eq(value.to_sql_value()))
    }

    /// Creates a less-than filter (field < value).
    pub fn lt<V: ToSqlValue>(field: &str, value: V) -> Self {
        Self::leaf(col(field).lt(value.to_sql_value()))
    }

    /// Creates a less-than-or-equal filter (field <= value).
    pub fn lte<V: ToSqlValue>(field: &str, value: V) -> Self {
        Self::leaf(col(field).lt_eq(value.to_sql_value()))
    }

    /// Creates an IS NULL filter.
    pub fn is_null(field: &str) -> Self {
        Self::leaf(col(field).is_null())
    }

    /// Creates an IS NOT NULL filter.
    pub fn is_not_null(field: &str) -> Self {
        Self::leaf(col(field).is_not_null())
    }

    /// Creates an IN list filter.
    ///
    /// An empty list matches nothing.
    pub fn in_list<V: ToSqlValue>(field: &str, values: Vec<V>) -> Self {
        Self::leaf(col(field).in_list(values.into_iter().map(ToSqlValue::to_sql_value)))
    }

    /// Creates a NOT IN list filter.
    ///
    /// An empty list matches everything.
    pub fn not_in_list<V: ToSqlValue>(field: &str, values: Vec<V>) -> Self {
        Self::leaf(col(field).not_in_list(values.into_iter().map(ToSqlValue::to_sql_value)))
    }

    /// Creates a LIKE filter; wildcards are part of `pattern`.
    pub fn like(field: &str, pattern: &str) -> Self {
        Self::leaf(col(field).like(pattern))
    }

    /// Creates a filter matching values containing `value`.
    pub fn contains(field: &str, value: &str) -> Self {
        Self::like(field, &format!("%{value}%"))
    }

    /// Creates a filter matching values starting with `value`.
    pub fn startswith(field: &str, value: &str) -> Self {
        Self::like(field, &format!("{value}%"))
    }

    /// Creates a filter matching values ending with `value`.
    pub fn endswith(field: &str, value: &str) -> Self {
        Self::like(field, &format!("%{value}"))
    }

    /// Creates a BETWEEN filter (inclusive on both ends).
    pub fn between<V: ToSqlValue>(field: &str, low: V, high: V) -> Self {
        Self::leaf(col(field).between(low.to_sql_value(), high.to_sql_value()))
    }

    /// Creates a raw SQL filter.
    ///
    /// **Warning**: only use this for SQL fragments without user input.
    pub fn raw(sql: &str, params: Vec<SqlValue>) -> Self {
        Self::leaf(Predicate::raw(sql, params))
    }

    /// Combines this filter with another using AND.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        Self {
            condition: Condition::new()
                .and_group(self.condition)
                .and_group(other.condition),
        }
    }

    /// Combines this filter with another using OR.
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        Self {
            condition: Condition::new()
                .and_group(self.condition)
                .or_group(other.condition),
        }
    }

    /// Negates this filter.
    #[must_use]
    pub fn not(self) -> Self {
        Self {
            condition: Condition::new().and_not_group(self.condition),
        }
    }

    /// Returns the underlying condition tree.
    pub fn into_condition(self) -> Condition {
        self.condition
    }

    /// Returns the underlying condition tree.
    pub const fn condition(&self) -> &Condition {
        &self.condition
    }

    /// Renders the filter with the given compiler.
    ///
    /// # Errors
    ///
    /// Propagates compilation errors.
    pub fn to_sql(&self, compiler: &dyn Compiler) -> quarry_core::Result<(String, Vec<SqlValue>)> {
        let mut params = Vec::new();
        let sql = compiler.render_condition(&self.condition, &mut params)?;
        Ok((sql, params))
    }
}

impl From<Q> for Condition {
    fn from(q: Q) -> Self {
        q.condition
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quarry_core::dialect::AnsiCompiler;

    fn sql(q: &Q) -> (String, Vec<SqlValue>) {
        q.to_sql(&AnsiCompiler).unwrap()
    }

    #[test]
    fn test_simple_eq() {
        let (sql, params) = sql(&Q::eq("name", "Alice"));
        assert_eq!(sql, r#""name" = ?"#);
        assert_eq!(params, vec![SqlValue::Text(String::from("Alice"))]);
    }

    #[test]
    fn test_and_combination() {
        let (sql, params) = sql(&Q::eq("a", 1).and(Q::eq("b", 2)));
        assert_eq!(sql, r#""a" = ? AND "b" = ?"#);
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_or_inside_and_is_grouped() {
        let q = Q::eq("status", "active").and(Q::gt("age", 18).or(Q::eq("verified", true)));
        let (sql, params) = sql(&q);
        assert_eq!(sql, r#""status" = ? AND ("age" > ? OR "verified" = ?)"#);
        assert_eq!(
            params,
            vec![
                SqlValue::Text(String::from("active")),
                SqlValue::Int(18),
                SqlValue::Bool(true),
            ]
        );
    }

    #[test]
    fn test_not() {
        let (sql, _) = sql(&Q::eq("deleted", true).not());
        assert_eq!(sql, r#"NOT ("deleted" = ?)"#);
    }

    #[test]
    fn test_in_list() {
        let (sql, params) = sql(&Q::in_list("id", vec![1, 2, 3]));
        assert_eq!(sql, r#""id" IN (?, ?, ?)"#);
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn test_contains_wraps_pattern() {
        let (sql, params) = sql(&Q::contains("name", "li"));
        assert_eq!(sql, r#""name" LIKE ?"#);
        assert_eq!(params, vec![SqlValue::Text(String::from("%li%"))]);
    }

    #[test]
    fn test_between() {
        let (sql, params) = sql(&Q::between("age", 18, 65));
        assert_eq!(sql, r#""age" BETWEEN ? AND ?"#);
        assert_eq!(params, vec![SqlValue::Int(18), SqlValue::Int(65)]);
    }

    #[test]
    fn test_is_null() {
        let (sql, params) = sql(&Q::is_null("deleted_at"));
        assert_eq!(sql, r#""deleted_at" IS NULL"#);
        assert!(params.is_empty());
    }
}
