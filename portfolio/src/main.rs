use std::sync::Arc;

use pf_api_web::{
    context::{ApiWebCtx, ApiWebDaoCtx},
    ApiWebServer,
};
use pf_config::Config;
use pf_dao::Db;
use pf_db_sqlite::db::SqliteDb;
use tokio_util::sync::CancellationToken;

mod config_path;

fn load_config(config_path: Option<&str>) -> Config {
    let config = match config_path {
        Some(config_path) => pf_config::from_path(config_path),
        None => pf_config::from_env(),
    };
    match config {
        Ok(config) => config,
        Err(err) => pf_log::panic(None, format!("[Portfolio] Loading config failed: {err}")),
    }
}

#[tokio::main]
async fn main() {
    let config = load_config(config_path::get().as_deref());

    pf_log::init(config.log().display_level(), config.log().level_filter());

    pf_log::info(Some("🚀"), "[Portfolio] Starting");

    let sqlite = config.db().sqlite();
    let db = match SqliteDb::new(sqlite.path(), sqlite.max_connections()).await {
        Ok(db) => Arc::new(Db::SqliteDb(db)),
        Err(err) => pf_log::panic(
            None,
            format!("[Portfolio] Opening database {} failed: {err}", sqlite.path()),
        ),
    };

    let api_web_server = ApiWebServer::new(
        config.api().web().host(),
        config.api().web().port(),
        config.api().web().static_path(),
        ApiWebCtx::new(*config.app().mode(), ApiWebDaoCtx::new(db.clone())),
    );

    let cancel_token = CancellationToken::new();

    match tokio::try_join!(api_web_server.run(cancel_token.clone())) {
        Ok(_) => pf_log::info(Some("👋"), "[Portfolio] Turned off"),
        Err(err) => {
            pf_log::warn(None, "[Portfolio] Shutting down all running components");
            cancel_token.cancel();
            pf_log::warn(
                Some("👋"),
                format!("[Portfolio] Turned off with error: {err}"),
            );
        }
    }

    db.close().await;
}
