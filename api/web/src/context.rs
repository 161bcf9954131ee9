use std::sync::Arc;

use pf_config::app::AppConfigMode;
use pf_dao::Db;

pub struct ApiWebCtx {
    mode: AppConfigMode,
    dao: ApiWebDaoCtx,
}

impl ApiWebCtx {
    pub fn new(mode: AppConfigMode, dao: ApiWebDaoCtx) -> Self {
        Self { mode, dao }
    }

    pub fn mode(&self) -> &AppConfigMode {
        &self.mode
    }

    pub fn dao(&self) -> &ApiWebDaoCtx {
        &self.dao
    }
}

pub struct ApiWebDaoCtx {
    db: Arc<Db>,
}

impl ApiWebDaoCtx {
    pub fn new(db: Arc<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Db {
        &self.db
    }
}
