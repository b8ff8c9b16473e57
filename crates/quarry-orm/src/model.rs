//! Model trait.
//!
//! A `Model` carries the table metadata the ORM needs to build statements and
//! hands out a `Manager` for database operations.

use quarry_core::ToSqlValue;

use crate::error::{OrmError, Result};
use crate::manager::Manager;

/// A database model with ORM capabilities.
///
/// # Example
///
/// ```ignore
/// use quarry_orm::Model;
///
/// #[derive(sqlx::FromRow)]
/// struct User {
///     id: i64,
///     username: String,
/// }
///
/// impl Model for User {
///     const TABLE: &'static str = "users";
///     const COLUMNS: &'static [&'static str] = &["id", "username"];
///     type PrimaryKey = i64;
///
///     fn pk(&self) -> i64 {
///         self.id
///     }
/// }
///
/// let users = User::objects().all().execute(&db).await?;
/// let user = User::objects().get(&db, 1).await?;
/// ```
pub trait Model: Sized + Send + Sync + 'static {
    /// Table name.
    const TABLE: &'static str;

    /// Column names, in projection order.
    const COLUMNS: &'static [&'static str];

    /// Primary key column.
    const PRIMARY_KEY: &'static str = "id";

    /// The primary key type.
    type PrimaryKey: ToSqlValue + Clone + Send + Sync;

    /// Returns the primary key value for this instance.
    fn pk(&self) -> Self::PrimaryKey;

    /// Returns a new Manager for this model.
    fn objects() -> Manager<Self> {
        Manager::new()
    }
}

/// Fails with [`OrmError::InvalidField`] unless `field` is one of `M::COLUMNS`.
pub(crate) fn check_field<M: Model>(field: &str) -> Result<()> {
    if M::COLUMNS.contains(&field) {
        Ok(())
    } else {
        Err(OrmError::InvalidField(format!(
            "`{field}` is not a column of `{}`",
            M::TABLE
        )))
    }
}
