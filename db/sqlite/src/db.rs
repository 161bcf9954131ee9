use std::str::FromStr;

use anyhow::Result;
use sqlx::{
    query::{Query, QueryAs},
    sqlite::{
        SqliteArguments, SqliteConnectOptions, SqlitePoolOptions, SqliteQueryResult, SqliteRow,
    },
    Error, Pool, Sqlite,
};

use crate::query::project;

pub const IN_MEMORY_PATH: &str = ":memory:";

pub struct SqliteDb {
    pool: Pool<Sqlite>,
}

impl SqliteDb {
    /// Opens (creating when missing) the database at `path` and sets up its tables.
    /// `":memory:"` opens a private in-memory database shared by the pool.
    pub async fn new(path: &str, max_connections: &u32) -> Result<Self> {
        pf_log::info(Some("⚡"), "[SQLite] Initializing component");

        let pool_options = SqlitePoolOptions::new().max_connections(*max_connections);

        let pool = if path == IN_MEMORY_PATH {
            // The database lives only as long as one of its connections.
            pool_options
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect_with(SqliteConnectOptions::from_str("sqlite::memory:")?)
                .await?
        } else {
            pool_options
                .connect_with(
                    SqliteConnectOptions::new()
                        .filename(path)
                        .create_if_missing(true),
                )
                .await?
        };

        let db = Self { pool };
        db.init().await?;

        Ok(db)
    }

    /// Creates missing tables. Safe to call repeatedly.
    pub async fn init(&self) -> Result<()> {
        project::init(&self.pool).await
    }

    pub async fn close(&self) {
        pf_log::info(Some("🔒"), "[SQLite] Closing connection pool");
        self.pool.close().await;
    }

    pub async fn execute<'a>(
        &self,
        query: Query<'a, Sqlite, SqliteArguments<'a>>,
    ) -> Result<SqliteQueryResult, Error> {
        query.execute(&self.pool).await
    }

    pub async fn fetch_one<'a, T: Send + Unpin + for<'r> sqlx::FromRow<'r, SqliteRow>>(
        &self,
        query: QueryAs<'a, Sqlite, T, SqliteArguments<'a>>,
    ) -> Result<T, Error> {
        query.fetch_one(&self.pool).await
    }

    pub async fn fetch_optional<'a, T: Send + Unpin + for<'r> sqlx::FromRow<'r, SqliteRow>>(
        &self,
        query: QueryAs<'a, Sqlite, T, SqliteArguments<'a>>,
    ) -> Result<Option<T>, Error> {
        query.fetch_optional(&self.pool).await
    }

    pub async fn fetch_all<'a, T: Send + Unpin + for<'r> sqlx::FromRow<'r, SqliteRow>>(
        &self,
        query: QueryAs<'a, Sqlite, T, SqliteArguments<'a>>,
    ) -> Result<Vec<T>, Error> {
        query.fetch_all(&self.pool).await
    }
}
