//! QuerySet implementation for lazy, chainable database queries.
//!
//! QuerySets are lazy - they don't execute until you call a method that
//! evaluates the query (like `execute()`, `first()`, etc.). Every statement is
//! built as a core AST and compiled by the executor's dialect.

use quarry_core::ast::{
    Condition, DeleteStatement, OrderBy as OrderClause, OrderDirection, Predicate,
    SelectStatement,
};
use quarry_core::builder::count_all;
use quarry_core::{Expression, Select};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};
use std::marker::PhantomData;

use crate::database::Executor;
use crate::error::{OrmError, Result};
use crate::model::{check_field, Model};
use crate::query::{Aggregate, Q};

const COUNT_ALIAS: &str = "quarry_count";

/// An ordering specification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    /// Column to order by
    pub column: String,
    /// Order direction
    pub direction: OrderDirection,
}

impl OrderBy {
    /// Creates a new ascending order specification.
    pub fn asc(column: &str) -> Self {
        Self {
            column: String::from(column),
            direction: OrderDirection::Asc,
        }
    }

    /// Creates a new descending order specification.
    pub fn desc(column: &str) -> Self {
        Self {
            column: String::from(column),
            direction: OrderDirection::Desc,
        }
    }

    /// Parses a Django-style order specification.
    ///
    /// Prefix with `-` for descending order.
    /// Example: `"-created_at"` for descending, `"name"` for ascending.
    pub fn parse(spec: &str) -> Self {
        if let Some(column) = spec.strip_prefix('-') {
            Self::desc(column)
        } else {
            Self::asc(spec)
        }
    }

    fn to_clause(&self) -> OrderClause {
        OrderClause {
            expr: Expression::from(self.column.as_str()),
            direction: self.direction,
            nulls: None,
        }
    }
}

/// A lazy, chainable query builder for database operations.
///
/// QuerySets are immutable - each method returns a new QuerySet with the
/// modification applied.
///
/// # Example
///
/// ```ignore
/// use quarry_orm::{Model, Q};
///
/// let users = User::objects()
///     .filter(Q::eq("is_active", true))
///     .exclude(Q::eq("role", "banned"))
///     .order_by("-created_at")
///     .limit(10)
///     .execute(&db)
///     .await?;
/// ```
#[derive(Debug)]
pub struct QuerySet<M: Model> {
    /// Filters and excludes, in call order
    where_clause: Condition,
    /// Ordering specifications
    order_by: Vec<OrderBy>,
    /// LIMIT clause
    limit: Option<u64>,
    /// OFFSET clause
    offset: Option<u64>,
    /// Columns to select (None = all)
    select_columns: Option<Vec<String>>,
    /// Whether to select distinct rows
    distinct: bool,
    _marker: PhantomData<M>,
}

// Manual Clone implementation to avoid M: Clone bound
impl<M: Model> Clone for QuerySet<M> {
    fn clone(&self) -> Self {
        Self {
            where_clause: self.where_clause.clone(),
            order_by: self.order_by.clone(),
            limit: self.limit,
            offset: self.offset,
            select_columns: self.select_columns.clone(),
            distinct: self.distinct,
            _marker: PhantomData,
        }
    }
}

impl<M: Model> Default for QuerySet<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Model> QuerySet<M> {
    /// Creates a new empty QuerySet.
    pub const fn new() -> Self {
        Self {
            where_clause: Condition::new(),
            order_by: Vec::new(),
            limit: None,
            offset: None,
            select_columns: None,
            distinct: false,
            _marker: PhantomData,
        }
    }

    /// Adds a filter to the QuerySet.
    ///
    /// Multiple filters are combined with AND, each kept as its own group.
    #[must_use]
    pub fn filter(mut self, q: Q) -> Self {
        self.where_clause = self.where_clause.and_group(q.into_condition());
        self
    }

    /// Adds an exclude filter to the QuerySet.
    ///
    /// Excluded rows are those that match the filter.
    #[must_use]
    pub fn exclude(mut self, q: Q) -> Self {
        self.where_clause = self.where_clause.and_not_group(q.into_condition());
        self
    }

    /// Adds an ordering; use a `-` prefix for descending order.
    ///
    /// # Example
    ///
    /// ```ignore
    /// // Order by created_at descending, then name ascending
    /// qs.order_by("-created_at").order_by("name")
    /// ```
    #[must_use]
    pub fn order_by(mut self, spec: &str) -> Self {
        self.order_by.push(OrderBy::parse(spec));
        self
    }

    /// Clears all ordering and sets new ordering.
    #[must_use]
    pub fn order_by_clear(mut self, specs: &[&str]) -> Self {
        self.order_by = specs.iter().map(|s| OrderBy::parse(s)).collect();
        self
    }

    /// Limits the number of results.
    #[must_use]
    pub const fn limit(mut self, n: u64) -> Self {
        self.limit = Some(n);
        self
    }

    /// Skips the first `n` rows.
    #[must_use]
    pub const fn offset(mut self, n: u64) -> Self {
        self.offset = Some(n);
        self
    }

    /// Selects specific columns.
    #[must_use]
    pub fn only(mut self, columns: &[&str]) -> Self {
        self.select_columns = Some(columns.iter().map(|s| String::from(*s)).collect());
        self
    }

    /// Makes the query return distinct rows.
    #[must_use]
    pub const fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    /// Returns a new QuerySet that is a copy of this one.
    #[must_use]
    pub fn all(&self) -> Self {
        self.clone()
    }

    /// Returns a QuerySet with no results.
    #[must_use]
    pub fn none() -> Self {
        let mut qs = Self::new();
        qs.where_clause = Condition::from(Predicate::raw("1 = 0", Vec::new()));
        qs
    }

    /// Builds the SELECT statement.
    ///
    /// # Errors
    ///
    /// Returns [`OrmError::InvalidField`] when `only` or `order_by` names a
    /// column the model does not have.
    pub fn select_statement(&self) -> Result<SelectStatement> {
        let mut select = Select::new().from(M::TABLE);
        match &self.select_columns {
            Some(columns) => {
                for column in columns {
                    check_field::<M>(column)?;
                    select = select.column(column.as_str());
                }
            }
            None => select = select.columns(M::COLUMNS),
        }
        if self.distinct {
            select = select.distinct();
        }
        if let Some(n) = self.limit {
            select = select.limit(n);
        }
        if let Some(n) = self.offset {
            select = select.offset(n);
        }

        let mut stmt = select.build();
        stmt.where_clause = self.where_clause.clone();
        stmt.order_by = self
            .order_by
            .iter()
            .map(|order| check_field::<M>(&order.column).map(|()| order.to_clause()))
            .collect::<Result<_>>()?;
        Ok(stmt)
    }

    /// Builds the COUNT statement.
    ///
    /// A sliced or distinct QuerySet is counted through a subquery so the
    /// count honors the slice.
    ///
    /// # Errors
    ///
    /// Same as [`QuerySet::select_statement`].
    pub fn count_statement(&self) -> Result<SelectStatement> {
        if self.limit.is_some() || self.offset.is_some() || self.distinct {
            return Ok(Select::new()
                .column(count_all())
                .from_subquery(self.select_statement()?, COUNT_ALIAS)
                .build());
        }
        let mut stmt = Select::new().column(count_all()).from(M::TABLE).build();
        stmt.where_clause = self.where_clause.clone();
        Ok(stmt)
    }

    /// Builds the DELETE statement; slicing and ordering are ignored.
    pub fn delete_statement(&self) -> DeleteStatement {
        DeleteStatement {
            table: String::from(M::TABLE),
            where_clause: self.where_clause.clone(),
        }
    }

    /// Builds an aggregate statement over the filtered rows.
    pub fn aggregate_statement(&self, aggregate: &Aggregate) -> SelectStatement {
        let mut stmt = Select::new()
            .column(aggregate.to_expression())
            .from(M::TABLE)
            .build();
        stmt.where_clause = self.where_clause.clone();
        stmt
    }
}

/// Async execution methods for QuerySet.
impl<M: Model + for<'r> FromRow<'r, SqliteRow> + Unpin> QuerySet<M> {
    /// Executes the query and returns all matching rows.
    pub async fn execute(&self, db: &impl Executor) -> Result<Vec<M>> {
        let query = db.compiler().compile_select(&self.select_statement()?)?;
        let rows = db.fetch_all(&query).await?;
        let models = rows
            .iter()
            .map(|row| M::from_row(row))
            .collect::<std::result::Result<Vec<_>, sqlx::Error>>()?;
        Ok(models)
    }

    /// Returns the first matching row, or None if no rows match.
    ///
    /// An unordered QuerySet is ordered by primary key first.
    pub async fn first(&self, db: &impl Executor) -> Result<Option<M>> {
        let mut qs = self.clone().limit(1);
        if qs.order_by.is_empty() {
            qs = qs.order_by(M::PRIMARY_KEY);
        }
        Ok(qs.execute(db).await?.into_iter().next())
    }

    /// Returns exactly one matching row.
    ///
    /// # Errors
    ///
    /// [`OrmError::NotFound`] when nothing matches and
    /// [`OrmError::MultipleObjectsReturned`] when more than one row does.
    pub async fn get(&self, db: &impl Executor) -> Result<M> {
        let mut rows = self.clone().limit(2).execute(db).await?.into_iter();
        match (rows.next(), rows.next()) {
            (Some(model), None) => Ok(model),
            (None, _) => Err(OrmError::NotFound),
            (Some(_), Some(_)) => Err(OrmError::MultipleObjectsReturned),
        }
    }

    /// Returns the number of matching rows.
    pub async fn count(&self, db: &impl Executor) -> Result<i64> {
        let query = db.compiler().compile_select(&self.count_statement()?)?;
        match db.fetch_optional(&query).await? {
            Some(row) => Ok(row.try_get(0)?),
            None => Ok(0),
        }
    }

    /// Returns whether any row matches.
    pub async fn exists(&self, db: &impl Executor) -> Result<bool> {
        let count = self.clone().limit(1).count(db).await?;
        Ok(count > 0)
    }

    /// Deletes all matching rows and returns the count of deleted rows.
    pub async fn delete(&self, db: &impl Executor) -> Result<u64> {
        let query = db.compiler().compile_delete(&self.delete_statement())?;
        db.execute(&query).await
    }

    /// Executes an aggregate query and returns the result as f64.
    pub async fn aggregate(&self, db: &impl Executor, agg: &Aggregate) -> Result<Option<f64>> {
        let query = db.compiler().compile_select(&self.aggregate_statement(agg))?;
        match db.fetch_optional(&query).await? {
            Some(row) => Ok(row.try_get(0)?),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quarry_core::dialect::{AnsiCompiler, MySqlCompiler, SqlServerCompiler};
    use quarry_core::{Compiler, SqlValue};

    struct TestModel;

    impl Model for TestModel {
        const TABLE: &'static str = "test_models";
        const COLUMNS: &'static [&'static str] = &["id", "name", "email", "created_at"];
        type PrimaryKey = i64;

        fn pk(&self) -> i64 {
            0
        }
    }

    fn ansi(stmt: &SelectStatement) -> (String, Vec<SqlValue>) {
        let compiled = AnsiCompiler.compile_select(stmt).unwrap();
        (compiled.sql, compiled.params)
    }

    fn select(qs: &QuerySet<TestModel>) -> (String, Vec<SqlValue>) {
        ansi(&qs.select_statement().unwrap())
    }

    #[test]
    fn test_basic_select() {
        let (sql, params) = select(&QuerySet::new());
        assert_eq!(
            sql,
            r#"SELECT "id", "name", "email", "created_at" FROM "test_models""#
        );
        assert!(params.is_empty());
    }

    #[test]
    fn test_select_with_filter() {
        let (sql, params) = select(&QuerySet::new().filter(Q::eq("name", "Alice")));
        assert!(sql.ends_with(r#"FROM "test_models" WHERE "name" = ?"#));
        assert_eq!(params, vec![SqlValue::Text(String::from("Alice"))]);
    }

    #[test]
    fn test_select_with_multiple_filters() {
        let qs = QuerySet::new()
            .filter(Q::eq("name", "Alice"))
            .filter(Q::gt("id", 10));
        let (sql, params) = select(&qs);
        assert!(sql.ends_with(r#"WHERE "name" = ? AND "id" > ?"#));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_combined_q_is_grouped_after_first_filter() {
        let qs = QuerySet::new()
            .filter(Q::eq("name", "Alice"))
            .filter(Q::eq("id", 1).or(Q::eq("id", 2)));
        let (sql, _) = select(&qs);
        assert!(sql.ends_with(r#"WHERE "name" = ? AND ("id" = ? OR "id" = ?)"#));
    }

    #[test]
    fn test_select_with_exclude() {
        let (sql, params) = select(&QuerySet::new().exclude(Q::eq("name", "Bob")));
        assert!(sql.ends_with(r#"WHERE NOT ("name" = ?)"#));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_select_with_order_by() {
        let qs = QuerySet::new().order_by("-created_at").order_by("name");
        let (sql, _) = select(&qs);
        assert!(sql.ends_with(r#"ORDER BY "created_at" DESC, "name" ASC"#));
    }

    #[test]
    fn test_select_with_limit_offset() {
        let (sql, _) = select(&QuerySet::new().limit(10).offset(20));
        assert!(sql.ends_with("LIMIT 10 OFFSET 20"));
    }

    #[test]
    fn test_slice_follows_dialect() {
        let stmt = QuerySet::<TestModel>::new()
            .only(&["id"])
            .limit(5)
            .select_statement()
            .unwrap();
        assert_eq!(
            SqlServerCompiler.compile_select(&stmt).unwrap().sql,
            "SELECT TOP 5 [id] FROM [test_models]"
        );
        assert_eq!(
            MySqlCompiler.compile_select(&stmt).unwrap().sql,
            "SELECT `id` FROM `test_models` LIMIT 5"
        );
    }

    #[test]
    fn test_select_with_only() {
        let (sql, _) = select(&QuerySet::new().only(&["id", "name"]));
        assert_eq!(sql, r#"SELECT "id", "name" FROM "test_models""#);
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let qs: QuerySet<TestModel> = QuerySet::new().only(&["password"]);
        assert!(matches!(
            qs.select_statement(),
            Err(OrmError::InvalidField(_))
        ));
        let qs: QuerySet<TestModel> = QuerySet::new().order_by("-rank");
        assert!(matches!(
            qs.select_statement(),
            Err(OrmError::InvalidField(_))
        ));
    }

    #[test]
    fn test_select_distinct() {
        let (sql, _) = select(&QuerySet::new().distinct());
        assert!(sql.starts_with("SELECT DISTINCT"));
    }

    #[test]
    fn test_filter_after_or_keeps_grouping() {
        let qs: QuerySet<TestModel> = QuerySet::new()
            .filter(Q::eq("name", "a").or(Q::eq("email", "b")))
            .filter(Q::eq("id", 3));
        let (sql, params) = select(&qs);
        assert!(
            sql.ends_with(r#"WHERE ("name" = ? OR "email" = ?) AND "id" = ?"#),
            "{sql}"
        );
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn test_exclude_after_or_keeps_grouping() {
        let qs: QuerySet<TestModel> = QuerySet::new()
            .filter(Q::eq("name", "a").or(Q::eq("email", "b")))
            .exclude(Q::eq("id", 3));
        let (sql, _) = select(&qs);
        assert!(
            sql.ends_with(r#"WHERE ("name" = ? OR "email" = ?) AND NOT ("id" = ?)"#),
            "{sql}"
        );
    }

    #[test]
    fn test_raw_filter_is_grouped() {
        let qs: QuerySet<TestModel> = QuerySet::new()
            .filter(Q::eq("id", 1))
            .filter(Q::raw(
                "name = ? OR email = ?",
                vec![
                    SqlValue::Text(String::from("a")),
                    SqlValue::Text(String::from("b")),
                ],
            ));
        let (sql, _) = select(&qs);
        assert!(sql.ends_with(r#"WHERE "id" = ? AND (name = ? OR email = ?)"#), "{sql}");
    }

    #[test]
    fn test_none_matches_nothing() {
        let (sql, _) = select(&QuerySet::none());
        assert!(sql.ends_with("WHERE 1 = 0"));
    }

    #[test]
    fn test_count() {
        let qs: QuerySet<TestModel> = QuerySet::new().filter(Q::eq("name", "Alice"));
        let (sql, params) = ansi(&qs.count_statement().unwrap());
        assert_eq!(sql, r#"SELECT COUNT(*) FROM "test_models" WHERE "name" = ?"#);
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_sliced_count_uses_subquery() {
        let qs: QuerySet<TestModel> = QuerySet::new().only(&["id"]).limit(1);
        let (sql, _) = ansi(&qs.count_statement().unwrap());
        assert_eq!(
            sql,
            r#"SELECT COUNT(*) FROM (SELECT "id" FROM "test_models" LIMIT 1) AS "quarry_count""#
        );
    }

    #[test]
    fn test_delete() {
        let qs: QuerySet<TestModel> = QuerySet::new().filter(Q::eq("name", "Alice"));
        let compiled = AnsiCompiler.compile_delete(&qs.delete_statement()).unwrap();
        assert_eq!(compiled.sql, r#"DELETE FROM "test_models" WHERE "name" = ?"#);
        assert_eq!(compiled.params.len(), 1);
    }

    #[test]
    fn test_aggregate() {
        let qs: QuerySet<TestModel> = QuerySet::new().filter(Q::gt("id", 3));
        let (sql, _) = ansi(&qs.aggregate_statement(&Aggregate::max("id")));
        assert_eq!(sql, r#"SELECT MAX("id") FROM "test_models" WHERE "id" > ?"#);
    }

    #[test]
    fn test_order_by_parsing() {
        assert_eq!(
            OrderBy::parse("-created_at").direction,
            OrderDirection::Desc
        );
        assert_eq!(OrderBy::parse("name").direction, OrderDirection::Asc);
    }
}
