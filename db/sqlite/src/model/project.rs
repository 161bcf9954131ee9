use chrono::{DateTime, Utc};
use sqlx::prelude::FromRow;

#[derive(FromRow, Debug)]
pub struct ProjectModel {
    id: i64,
    title: String,
    description: String,
    image_file_name: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ProjectModel {
    pub fn new(
        id: &i64,
        title: &str,
        description: &str,
        image_file_name: &str,
        created_at: &DateTime<Utc>,
        updated_at: &DateTime<Utc>,
    ) -> Self {
        Self {
            id: *id,
            title: title.to_owned(),
            description: description.to_owned(),
            image_file_name: image_file_name.to_owned(),
            created_at: *created_at,
            updated_at: *updated_at,
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
}
