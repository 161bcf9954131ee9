use actix_web::{http::StatusCode, web, HttpResponse};
use validator::Validate;

use crate::{
    flash::Flash,
    model::{
        contact::{ContactReqForm, CONTACT_MESSAGES},
        validation_messages, Page,
    },
    template::ContactTemplate,
};

pub fn contact_api(cfg: &mut web::ServiceConfig) {
    cfg.route("/contact", web::get().to(find_form))
        .route("/contact", web::post().to(submit_one));
}

async fn find_form() -> HttpResponse {
    Page::render(&StatusCode::OK, &ContactTemplate::default())
}

async fn submit_one(data: web::Form<ContactReqForm>) -> HttpResponse {
    let data = data.into_inner().trimmed();

    if let Err(err) = data.validate() {
        let errors = validation_messages(&err, &CONTACT_MESSAGES);
        return Page::render(&StatusCode::OK, &ContactTemplate::new(&data, errors));
    }

    pf_log::debug(
        None,
        format!(
            "[ApiWebServer] Contact message received ({} chars)",
            data.message().chars().count()
        ),
    );

    Page::redirect("/thankyou", &Flash::ContactSent)
}
