use actix_files::Files;
use actix_web::web;

use crate::service::{contact::contact_api, project::project_api, root::root_api};

/// Upper bound for urlencoded form bodies. Free-text fields carry no maximum length.
pub const FORM_LIMIT: usize = 1024 * 1024;

pub fn configure(cfg: &mut web::ServiceConfig, static_path: &str) {
    cfg.app_data(web::FormConfig::default().limit(FORM_LIMIT))
        .configure(root_api)
        .configure(contact_api)
        .configure(project_api)
        .service(Files::new("/static", static_path));
}
