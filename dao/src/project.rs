use anyhow::Result;
use chrono::{DateTime, Utc};
use pf_db_sqlite::model::project::ProjectModel as ProjectSqliteModel;

use crate::Db;

#[derive(Debug)]
pub struct ProjectDao {
    id: i64,
    title: String,
    description: String,
    image_file_name: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ProjectDao {
    /// An unsaved project. `id` stays `0` until [`ProjectDao::db_insert`] assigns one.
    pub fn new(title: &str, description: &str, image_file_name: &str) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            title: title.to_owned(),
            description: description.to_owned(),
            image_file_name: image_file_name.to_owned(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> &i64 {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn image_file_name(&self) -> &str {
        &self.image_file_name
    }

    pub fn created_at(&self) -> &DateTime<Utc> {
        &self.created_at
    }

    pub fn updated_at(&self) -> &DateTime<Utc> {
        &self.updated_at
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_owned();
    }

    pub fn set_description(&mut self, description: &str) {
        self.description = description.to_owned();
    }

    pub fn set_image_file_name(&mut self, image_file_name: &str) {
        self.image_file_name = image_file_name.to_owned();
    }

    pub async fn db_insert(&mut self, db: &Db) -> Result<i64> {
        self.id = match db {
            Db::SqliteDb(db) => db.insert_project(&self.to_sqlitedb_model()).await?,
        };
        Ok(self.id)
    }

    pub async fn db_select(db: &Db, id: &i64) -> Result<Option<Self>> {
        match db {
            Db::SqliteDb(db) => Ok(db
                .select_project(id)
                .await?
                .map(|model| Self::from_sqlitedb_model(&model))),
        }
    }

    /// Newest first. Projects created at the same instant keep insertion order, latest first.
    pub async fn db_select_many(db: &Db) -> Result<Vec<Self>> {
        match db {
            Db::SqliteDb(db) => {
                let projects = db.select_many_projects().await?;
                let mut projects_data = Vec::with_capacity(projects.len());
                for project in &projects {
                    projects_data.push(Self::from_sqlitedb_model(project));
                }
                Ok(projects_data)
            }
        }
    }

    /// Writes the mutable fields and refreshes `updated_at`.
    /// Returns `false` when the row no longer exists.
    pub async fn db_update(&mut self, db: &Db) -> Result<bool> {
        self.updated_at = Utc::now().max(self.created_at);
        match db {
            Db::SqliteDb(db) => db.update_project(&self.to_sqlitedb_model()).await,
        }
    }

    pub async fn db_delete(db: &Db, id: &i64) -> Result<bool> {
        match db {
            Db::SqliteDb(db) => db.delete_project(id).await,
        }
    }

    pub async fn db_exists(db: &Db, id: &i64) -> Result<bool> {
        match db {
            Db::SqliteDb(db) => db.exists_project(id).await,
        }
    }

    fn from_sqlitedb_model(model: &ProjectSqliteModel) -> Self {
        Self {
            id: *model.id(),
            title: model.title().to_owned(),
            description: model.description().to_owned(),
            image_file_name: model.image_file_name().to_owned(),
            created_at: *model.created_at(),
            updated_at: *model.updated_at(),
        }
    }

    fn to_sqlitedb_model(&self) -> ProjectSqliteModel {
        ProjectSqliteModel::new(
            &self.id,
            &self.title,
            &self.description,
            &self.image_file_name,
            &self.created_at,
            &self.updated_at,
        )
    }
}
