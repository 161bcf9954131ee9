use actix_web::{
    http::{
        header::{self, ContentType},
        StatusCode,
    },
    HttpResponse, HttpResponseBuilder,
};
use askama::Template;
use pf_error::Error;
use validator::ValidationErrors;

use crate::{flash::Flash, template::ErrorTemplate};

pub mod contact;
pub mod project;

pub struct Page;

impl Page {
    pub fn render<T: Template>(status_code: &StatusCode, template: &T) -> HttpResponse {
        match template.render() {
            Ok(html) => HttpResponseBuilder::new(*status_code)
                .content_type(ContentType::html())
                .body(html),
            Err(err) => Self::error(&Error::render(err)),
        }
    }

    /// `303 See Other` to `location`, carrying `flash` to the next page.
    pub fn redirect(location: &str, flash: &Flash) -> HttpResponse {
        HttpResponse::SeeOther()
            .insert_header((header::LOCATION, location))
            .cookie(flash.cookie())
            .finish()
    }

    /// Logs `err` and answers with the 500 page. Details stay in the log.
    pub fn error(err: &Error) -> HttpResponse {
        pf_log::error(None, err);

        Self::error_raw(&StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn error_raw(status_code: &StatusCode) -> HttpResponse {
        let template = ErrorTemplate::new(status_code);
        match template.render() {
            Ok(html) => HttpResponseBuilder::new(*status_code)
                .content_type(ContentType::html())
                .body(html),
            Err(err) => {
                pf_log::error(None, format!("[ApiWebServer] Failed to render error page: {err}"));
                HttpResponseBuilder::new(*status_code)
                    .content_type(ContentType::plaintext())
                    .body(template.reason().to_owned())
            }
        }
    }
}

/// Flattens validator output into display messages, ordered as in `order`.
/// Messages missing from `order` go last.
pub fn validation_messages(errors: &ValidationErrors, order: &[&str]) -> Vec<String> {
    let mut messages: Vec<String> = errors
        .field_errors()
        .values()
        .flat_map(|errs| errs.iter())
        .map(|err| match &err.message {
            Some(message) => message.to_string(),
            None => err.code.to_string(),
        })
        .collect();

    messages.sort_by_key(|message| {
        order
            .iter()
            .position(|known| *known == message.as_str())
            .unwrap_or(order.len())
    });

    messages
}
