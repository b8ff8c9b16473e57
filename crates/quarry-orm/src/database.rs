//! Connection handling and statement execution.

use quarry_core::{CompiledQuery, Compiler, DialectKind, SqlValue};
use sqlx::sqlite::{SqliteArguments, SqlitePoolOptions, SqliteRow};
use sqlx::{Sqlite, SqlitePool};
use tracing::{debug, info};

use crate::config::DatabaseConfig;
use crate::error::{OrmError, Result};

type SqliteQuery<'q> = sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>>;

/// Runs compiled statements.
///
/// QuerySets and managers only talk to this trait; [`Database`] is the
/// pooled implementation.
#[allow(async_fn_in_trait)]
pub trait Executor {
    /// The dialect statements are compiled for.
    fn dialect(&self) -> DialectKind;

    /// Runs a query and returns every row.
    async fn fetch_all(&self, query: &CompiledQuery) -> Result<Vec<SqliteRow>>;

    /// Runs a statement and returns the number of affected rows.
    async fn execute(&self, query: &CompiledQuery) -> Result<u64>;

    /// Runs a query and returns its first row, if any.
    async fn fetch_optional(&self, query: &CompiledQuery) -> Result<Option<SqliteRow>> {
        Ok(self.fetch_all(query).await?.into_iter().next())
    }

    /// The compiler for [`Executor::dialect`].
    fn compiler(&self) -> &'static dyn Compiler {
        self.dialect().compiler()
    }
}

/// A connection pool paired with the dialect its statements use.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
    dialect: DialectKind,
}

impl Database {
    /// Opens a pool from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`OrmError::Config`] for drivers without an execution backend
    /// and [`OrmError::Database`] when the connection fails.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let dialect = config.dialect();
        if dialect != DialectKind::Sqlite {
            return Err(OrmError::Config(format!(
                "driver `{}` can compile statements but has no execution backend",
                config.driver
            )));
        }
        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.url)
            .await?;
        info!(
            driver = %config.driver,
            dialect = dialect.as_str(),
            max_connections = config.max_connections,
            "Connected to database"
        );
        Ok(Self { pool, dialect })
    }

    /// Wraps an existing SQLite pool.
    pub const fn from_pool(pool: SqlitePool) -> Self {
        Self {
            pool,
            dialect: DialectKind::Sqlite,
        }
    }

    /// The underlying pool.
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

impl Executor for Database {
    fn dialect(&self) -> DialectKind {
        self.dialect
    }

    async fn fetch_all(&self, query: &CompiledQuery) -> Result<Vec<SqliteRow>> {
        debug!(sql = %query.sql, params = query.params.len(), "Executing query");
        let rows = bind_all(sqlx::query(&query.sql), &query.params)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn execute(&self, query: &CompiledQuery) -> Result<u64> {
        debug!(sql = %query.sql, params = query.params.len(), "Executing statement");
        let result = bind_all(sqlx::query(&query.sql), &query.params)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}

fn bind_all<'q>(query: SqliteQuery<'q>, params: &[SqlValue]) -> SqliteQuery<'q> {
    params.iter().cloned().fold(query, bind_param)
}

/// Binds one parameter, in placeholder order.
fn bind_param(query: SqliteQuery<'_>, value: SqlValue) -> SqliteQuery<'_> {
    match value {
        SqlValue::Null => query.bind(Option::<i64>::None),
        SqlValue::Bool(b) => query.bind(b),
        SqlValue::Int(i) => query.bind(i),
        SqlValue::Float(f) => query.bind(f),
        SqlValue::Text(s) => query.bind(s),
        SqlValue::Blob(b) => query.bind(b),
    }
}
