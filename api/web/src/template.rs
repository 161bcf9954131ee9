use actix_web::http::StatusCode;
use askama::Template;
use pf_dao::project::ProjectDao;

use crate::model::{contact::ContactReqForm, project::InsertOneProjectReqForm};

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate;

#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutTemplate;

#[derive(Template)]
#[template(path = "resume.html")]
pub struct ResumeTemplate;

#[derive(Template)]
#[template(path = "thankyou.html")]
pub struct ThankYouTemplate {
    flash: Option<String>,
}

impl ThankYouTemplate {
    pub fn new(flash: Option<String>) -> Self {
        Self { flash }
    }
}

#[derive(Template)]
#[template(path = "projects.html")]
pub struct ProjectsTemplate {
    projects: Vec<ProjectDao>,
    flash: Option<String>,
}

impl ProjectsTemplate {
    pub fn new(projects: Vec<ProjectDao>, flash: Option<String>) -> Self {
        Self { projects, flash }
    }
}

/// Contact form, optionally refilled after a failed submission.
/// Passwords are never carried back into the page.
#[derive(Template, Default)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    errors: Vec<String>,
    first_name: String,
    last_name: String,
    email: String,
    message: String,
}

impl ContactTemplate {
    pub fn new(form: &ContactReqForm, errors: Vec<String>) -> Self {
        Self {
            errors,
            first_name: form.first_name().to_owned(),
            last_name: form.last_name().to_owned(),
            email: form.email().to_owned(),
            message: form.message().to_owned(),
        }
    }
}

#[derive(Template, Default)]
#[template(path = "add_project.html")]
pub struct AddProjectTemplate {
    errors: Vec<String>,
    title: String,
    description: String,
    image_file_name: String,
}

impl AddProjectTemplate {
    pub fn new(form: &InsertOneProjectReqForm, errors: Vec<String>) -> Self {
        Self {
            errors,
            title: form.title().to_owned(),
            description: form.description().to_owned(),
            image_file_name: form.image_file_name().to_owned(),
        }
    }
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    status_code: u16,
    reason: String,
}

impl ErrorTemplate {
    pub fn new(status_code: &StatusCode) -> Self {
        Self {
            status_code: status_code.as_u16(),
            reason: status_code
                .canonical_reason()
                .unwrap_or("Unknown Error")
                .to_owned(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}
