use serde::Deserialize;

use self::sqlite::DbSqliteConfig;

pub mod sqlite;

#[derive(Deserialize, Default)]
pub struct DbConfig {
    #[serde(default)]
    sqlite: DbSqliteConfig,
}

impl DbConfig {
    pub fn sqlite(&self) -> &DbSqliteConfig {
        &self.sqlite
    }

    pub(crate) fn sqlite_mut(&mut self) -> &mut DbSqliteConfig {
        &mut self.sqlite
    }
}
