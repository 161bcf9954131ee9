use actix_web::{http::StatusCode, web, HttpRequest, HttpResponse};

use crate::{
    flash::Flash,
    model::Page,
    template::{AboutTemplate, IndexTemplate, ResumeTemplate, ThankYouTemplate},
};

pub fn root_api(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/about", web::get().to(about))
        .route("/resume", web::get().to(resume))
        .route("/thankyou", web::get().to(thank_you));
}

async fn index() -> HttpResponse {
    Page::render(&StatusCode::OK, &IndexTemplate)
}

async fn about() -> HttpResponse {
    Page::render(&StatusCode::OK, &AboutTemplate)
}

async fn resume() -> HttpResponse {
    Page::render(&StatusCode::OK, &ResumeTemplate)
}

async fn thank_you(req: HttpRequest) -> HttpResponse {
    let flash = Flash::from_request(&req);

    let mut res = Page::render(
        &StatusCode::OK,
        &ThankYouTemplate::new(
            flash
                .filter(|flash| *flash == Flash::ContactSent)
                .map(|flash| flash.message(None)),
        ),
    );

    if flash.is_some() {
        Flash::clear(&mut res);
    }

    res
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test};
    use assert_matches::assert_matches;
    use pf_config::app::AppConfigMode;

    use crate::{
        app,
        flash::{Flash, FLASH_COOKIE},
        tests::{body_text, ctx, is_html, STATIC_PATH},
    };

    #[actix_web::test]
    async fn static_pages_render() {
        let app = test::init_service(app(ctx(AppConfigMode::Production).await, STATIC_PATH)).await;

        for uri in ["/", "/about", "/resume", "/thankyou"] {
            let res = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;

            assert_eq!(res.status(), StatusCode::OK, "{uri}");
            assert!(is_html(&res), "{uri}");
            assert!(body_text(res).await.starts_with("<!DOCTYPE html>"), "{uri}");
        }
    }

    #[actix_web::test]
    async fn thank_you_shows_and_clears_the_flash() {
        let app = test::init_service(app(ctx(AppConfigMode::Production).await, STATIC_PATH)).await;

        let req = test::TestRequest::get()
            .uri("/thankyou")
            .cookie(Flash::ContactSent.cookie())
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);
        let removal = res
            .response()
            .cookies()
            .find(|cookie| cookie.name() == FLASH_COOKIE)
            .map(|cookie| cookie.into_owned());
        assert_matches!(removal, Some(cookie) if cookie.value().is_empty());
        assert!(body_text(res).await.contains("Thank you for your message!"));
    }

    #[actix_web::test]
    async fn thank_you_without_flash_has_no_message() {
        let app = test::init_service(app(ctx(AppConfigMode::Production).await, STATIC_PATH)).await;

        let res =
            test::call_service(&app, test::TestRequest::get().uri("/thankyou").to_request()).await;

        assert!(res.response().cookies().next().is_none());
        assert!(!body_text(res).await.contains("Thank you for your message!"));
    }

    #[actix_web::test]
    async fn unknown_route_is_an_html_not_found() {
        let app = test::init_service(app(ctx(AppConfigMode::Production).await, STATIC_PATH)).await;

        let res =
            test::call_service(&app, test::TestRequest::get().uri("/missing").to_request()).await;

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert!(is_html(&res));
        assert!(body_text(res).await.contains("404 Not Found"));
    }

    #[actix_web::test]
    async fn static_files_are_served() {
        let app = test::init_service(app(ctx(AppConfigMode::Production).await, STATIC_PATH)).await;

        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/static/css/style.css")
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        assert!(body_text(res).await.contains(".site-header"));

        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/static/css/missing.css")
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert!(is_html(&res));
    }

    #[actix_web::test]
    async fn project_flash_is_not_shown_on_thank_you() {
        let app = test::init_service(app(ctx(AppConfigMode::Production).await, STATIC_PATH)).await;

        let req = test::TestRequest::get()
            .uri("/thankyou")
            .cookie(Flash::ProjectAdded(1).cookie())
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);
        assert!(!body_text(res).await.contains("added successfully!"));
    }
}
