use anyhow::Result;
use sqlx::{Executor, Pool, Sqlite};

use crate::{db::SqliteDb, model::project::ProjectModel};

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS \"projects\" (\"id\" integer PRIMARY KEY AUTOINCREMENT, \"title\" text NOT NULL, \"description\" text NOT NULL, \"image_file_name\" text NOT NULL, \"created_at\" datetime NOT NULL, \"updated_at\" datetime NOT NULL)";
const INSERT: &str = "INSERT INTO \"projects\" (\"title\", \"description\", \"image_file_name\", \"created_at\", \"updated_at\") VALUES (?, ?, ?, ?, ?)";
const SELECT: &str = "SELECT \"id\", \"title\", \"description\", \"image_file_name\", \"created_at\", \"updated_at\" FROM \"projects\" WHERE \"id\" = ?";
const SELECT_MANY: &str = "SELECT \"id\", \"title\", \"description\", \"image_file_name\", \"created_at\", \"updated_at\" FROM \"projects\" ORDER BY \"created_at\" DESC, \"id\" DESC";
const UPDATE: &str = "UPDATE \"projects\" SET \"title\" = ?, \"description\" = ?, \"image_file_name\" = ?, \"updated_at\" = ? WHERE \"id\" = ?";
const DELETE: &str = "DELETE FROM \"projects\" WHERE \"id\" = ?";
const COUNT: &str = "SELECT COUNT(1) FROM \"projects\" WHERE \"id\" = ?";

pub async fn init(pool: &Pool<Sqlite>) -> Result<()> {
    pf_log::info(Some("🔧"), "[SQLite] Setting up projects table");

    pool.execute(CREATE_TABLE).await?;

    pool.prepare(INSERT).await?;
    pool.prepare(SELECT).await?;
    pool.prepare(SELECT_MANY).await?;
    pool.prepare(UPDATE).await?;
    pool.prepare(DELETE).await?;
    pool.prepare(COUNT).await?;

    Ok(())
}

impl SqliteDb {
    /// Inserts every column except `id`, which the table assigns. Returns the new `id`.
    pub async fn insert_project(&self, value: &ProjectModel) -> Result<i64> {
        let res = self
            .execute(
                sqlx::query(INSERT)
                    .bind(value.title())
                    .bind(value.description())
                    .bind(value.image_file_name())
                    .bind(value.created_at())
                    .bind(value.updated_at()),
            )
            .await?;
        Ok(res.last_insert_rowid())
    }

    pub async fn select_project(&self, id: &i64) -> Result<Option<ProjectModel>> {
        Ok(self.fetch_optional(sqlx::query_as(SELECT).bind(id)).await?)
    }

    pub async fn select_many_projects(&self) -> Result<Vec<ProjectModel>> {
        Ok(self.fetch_all(sqlx::query_as(SELECT_MANY)).await?)
    }

    /// `created_at` is never written. Returns whether a row matched `id`.
    pub async fn update_project(&self, value: &ProjectModel) -> Result<bool> {
        let res = self
            .execute(
                sqlx::query(UPDATE)
                    .bind(value.title())
                    .bind(value.description())
                    .bind(value.image_file_name())
                    .bind(value.updated_at())
                    .bind(value.id()),
            )
            .await?;
        Ok(res.rows_affected() > 0)
    }

    pub async fn delete_project(&self, id: &i64) -> Result<bool> {
        let res = self.execute(sqlx::query(DELETE).bind(id)).await?;
        Ok(res.rows_affected() > 0)
    }

    pub async fn exists_project(&self, id: &i64) -> Result<bool> {
        let (count,): (i64,) = self.fetch_one(sqlx::query_as(COUNT).bind(id)).await?;
        Ok(count > 0)
    }
}
