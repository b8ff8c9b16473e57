//! Manager for database access.
//!
//! The Manager provides the primary interface for database operations,
//! similar to Django's Manager class.

use quarry_core::ast::{InsertStatement, UpdateStatement};
use quarry_core::{Insert, SqlValue, Update};
use sqlx::sqlite::SqliteRow;
use sqlx::FromRow;
use std::marker::PhantomData;

use crate::database::Executor;
use crate::error::{OrmError, Result};
use crate::model::{check_field, Model};
use crate::query::Q;
use crate::queryset::QuerySet;

/// A Manager provides database access methods for a Model.
///
/// Each Model has a default Manager accessible via `Model::objects()`.
/// Managers are zero-sized and can be created freely.
///
/// # Example
///
/// ```ignore
/// use quarry_orm::{Model, SqlValue};
///
/// let users = User::objects().all().execute(&db).await?;
/// let user = User::objects().get(&db, 1).await?;
///
/// User::objects()
///     .create_from(&db, &["username"], vec![SqlValue::Text("alice".into())])
///     .await?;
/// ```
#[derive(Debug)]
pub struct Manager<M: Model> {
    _marker: PhantomData<M>,
}

impl<M: Model> Clone for Manager<M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M: Model> Copy for Manager<M> {}

impl<M: Model> Default for Manager<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Model> Manager<M> {
    /// Creates a new Manager.
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }

    /// Returns a QuerySet for all objects.
    pub fn all(&self) -> QuerySet<M> {
        QuerySet::new()
    }

    /// Returns a QuerySet filtered by the given Q expression.
    pub fn filter(&self, q: Q) -> QuerySet<M> {
        QuerySet::new().filter(q)
    }

    /// Returns a QuerySet excluding objects matching the Q expression.
    pub fn exclude(&self, q: Q) -> QuerySet<M> {
        QuerySet::new().exclude(q)
    }

    /// Returns a QuerySet with no results.
    pub fn none(&self) -> QuerySet<M> {
        QuerySet::none()
    }

    /// Builds a single-row INSERT.
    ///
    /// # Errors
    ///
    /// Returns [`OrmError::InvalidField`] for unknown columns or when the
    /// value count differs from the column count.
    pub fn insert_statement(
        &self,
        columns: &[&str],
        values: Vec<SqlValue>,
    ) -> Result<InsertStatement> {
        for column in columns {
            check_field::<M>(column)?;
        }
        if columns.len() != values.len() {
            return Err(OrmError::InvalidField(format!(
                "{} columns but {} values",
                columns.len(),
                values.len()
            )));
        }
        Ok(Insert::new()
            .into_table(M::TABLE)
            .columns(columns)
            .values(values)
            .build())
    }

    /// Builds an UPDATE of the rows matching `filter`.
    ///
    /// # Errors
    ///
    /// Returns [`OrmError::InvalidField`] for unknown columns or an empty
    /// assignment list.
    pub fn update_statement(
        &self,
        filter: Q,
        assignments: Vec<(&str, SqlValue)>,
    ) -> Result<UpdateStatement> {
        let mut assignments = assignments.into_iter();
        let Some((column, value)) = assignments.next() else {
            return Err(OrmError::InvalidField(String::from("no columns to update")));
        };
        check_field::<M>(column)?;
        let mut update = Update::new().table(M::TABLE).set(column, value);
        for (column, value) in assignments {
            check_field::<M>(column)?;
            update = update.set(column, value);
        }
        let mut stmt = update.build();
        stmt.where_clause = filter.into_condition();
        Ok(stmt)
    }

    /// Inserts one row and returns the number of rows affected.
    pub async fn create_from(
        &self,
        db: &impl Executor,
        columns: &[&str],
        values: Vec<SqlValue>,
    ) -> Result<u64> {
        let stmt = self.insert_statement(columns, values)?;
        let query = db.compiler().compile_insert(&stmt)?;
        db.execute(&query).await
    }

    /// Updates the rows matching `filter` and returns how many changed.
    pub async fn update_where(
        &self,
        db: &impl Executor,
        filter: Q,
        assignments: Vec<(&str, SqlValue)>,
    ) -> Result<u64> {
        let stmt = self.update_statement(filter, assignments)?;
        let query = db.compiler().compile_update(&stmt)?;
        db.execute(&query).await
    }
}

/// Async methods for Manager.
impl<M: Model + for<'r> FromRow<'r, SqliteRow> + Unpin> Manager<M> {
    /// Gets an object by its primary key.
    pub async fn get(&self, db: &impl Executor, pk: M::PrimaryKey) -> Result<M> {
        self.filter(Q::eq(M::PRIMARY_KEY, pk)).get(db).await
    }

    /// Gets an object by its primary key, returning None if not found.
    pub async fn get_or_none(&self, db: &impl Executor, pk: M::PrimaryKey) -> Result<Option<M>> {
        match self.get(db, pk).await {
            Ok(model) => Ok(Some(model)),
            Err(OrmError::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Returns the count of all objects.
    pub async fn count(&self, db: &impl Executor) -> Result<i64> {
        self.all().count(db).await
    }

    /// Returns whether any objects exist.
    pub async fn exists(&self, db: &impl Executor) -> Result<bool> {
        self.all().exists(db).await
    }

    /// Returns the first object by primary key, or None if no objects exist.
    pub async fn first(&self, db: &impl Executor) -> Result<Option<M>> {
        self.all().first(db).await
    }

    /// Returns the last object by primary key, or None if no objects exist.
    pub async fn last(&self, db: &impl Executor) -> Result<Option<M>> {
        self.all()
            .order_by(&format!("-{}", M::PRIMARY_KEY))
            .first(db)
            .await
    }
}
