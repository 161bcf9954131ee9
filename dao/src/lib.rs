use anyhow::Result;
use pf_db_sqlite::db::SqliteDb;

pub mod project;

pub enum Db {
    SqliteDb(SqliteDb),
}

impl Db {
    pub async fn init(&self) -> Result<()> {
        match self {
            Db::SqliteDb(db) => db.init().await,
        }
    }

    pub async fn close(&self) {
        match self {
            Db::SqliteDb(db) => db.close().await,
        }
    }
}
