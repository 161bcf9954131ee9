use actix_web::{http::StatusCode, web, HttpRequest, HttpResponse};
use pf_config::app::AppConfigMode;
use pf_dao::{project::ProjectDao, Db};
use pf_error::Error;
use validator::Validate;

use crate::{
    context::ApiWebCtx,
    flash::Flash,
    model::{
        project::{InsertOneProjectReqForm, PROJECT_MESSAGES},
        validation_messages, Page,
    },
    template::{AddProjectTemplate, ProjectsTemplate},
};

pub fn project_api(cfg: &mut web::ServiceConfig) {
    cfg.route("/projects", web::get().to(find_many))
        .route("/add_project", web::get().to(find_form))
        .route("/add_project", web::post().to(insert_one));
}

async fn find_many(ctx: web::Data<ApiWebCtx>, req: HttpRequest) -> HttpResponse {
    let projects_data = match ProjectDao::db_select_many(ctx.dao().db()).await {
        Ok(data) => data,
        Err(err) => return Page::error(&Error::storage(err)),
    };

    // Any flash is consumed here, only project notices are shown.
    let flash = Flash::from_request(&req);
    let flash_message = match flash {
        Some(flash @ Flash::ProjectAdded(id)) => {
            let title = projects_data
                .iter()
                .find(|project| *project.id() == id)
                .map(|project| project.title());
            Some(flash.message(title))
        }
        Some(Flash::ContactSent) | None => None,
    };

    let mut res = Page::render(
        &StatusCode::OK,
        &ProjectsTemplate::new(projects_data, flash_message),
    );

    if flash.is_some() {
        Flash::clear(&mut res);
    }

    res
}

async fn find_form() -> HttpResponse {
    Page::render(&StatusCode::OK, &AddProjectTemplate::default())
}

async fn insert_one(
    ctx: web::Data<ApiWebCtx>,
    data: web::Form<InsertOneProjectReqForm>,
) -> HttpResponse {
    let data = data.into_inner().trimmed();

    match insert_project(ctx.dao().db(), &data).await {
        Ok(project_data) => {
            pf_log::info(
                None,
                format!(
                    "[ApiWebServer] Added project {} \"{}\"",
                    project_data.id(),
                    project_data.title()
                ),
            );
            Page::redirect("/projects", &Flash::ProjectAdded(*project_data.id()))
        }
        Err(Error::Validation(errors)) => Page::render(
            &StatusCode::OK,
            &AddProjectTemplate::new(&data, errors),
        ),
        Err(err) => {
            pf_log::error(None, format!("[ApiWebServer] {err}"));
            let message = match ctx.mode() {
                AppConfigMode::Development => format!("Error adding project: {err}"),
                AppConfigMode::Production => {
                    "Error adding project. Please try again later.".to_owned()
                }
            };
            Page::render(
                &StatusCode::INTERNAL_SERVER_ERROR,
                &AddProjectTemplate::new(&data, vec![message]),
            )
        }
    }
}

/// Validates `data` and stores it as a new project.
pub(crate) async fn insert_project(
    db: &Db,
    data: &InsertOneProjectReqForm,
) -> Result<ProjectDao, Error> {
    if let Err(err) = data.validate() {
        return Err(Error::Validation(validation_messages(
            &err,
            &PROJECT_MESSAGES,
        )));
    }

    let mut project_data =
        ProjectDao::new(data.title(), data.description(), data.image_file_name());
    project_data.db_insert(db).await.map_err(Error::storage)?;

    Ok(project_data)
}

#[cfg(test)]
mod tests {
    use actix_web::{
        http::{header, StatusCode},
        test,
    };
    use assert_matches::assert_matches;
    use pf_config::app::AppConfigMode;
    use pf_dao::project::ProjectDao;
    use pf_error::Error;

    use super::insert_project;
    use crate::{
        app,
        flash::{Flash, FLASH_COOKIE},
        model::project::{InsertOneProjectReqForm, DESCRIPTION_MESSAGE, TITLE_MESSAGE},
        tests::{body_text, ctx, is_html, STATIC_PATH},
    };

    const VALID_FORM: [(&str, &str); 3] = [
        ("title", "Test Project"),
        ("description", "This is a detailed test project description"),
        ("imageFileName", "test_image.jpg"),
    ];

    #[actix_web::test]
    async fn empty_listing_renders() {
        let app = test::init_service(app(ctx(AppConfigMode::Production).await, STATIC_PATH)).await;

        for uri in ["/projects", "/add_project"] {
            let res = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;

            assert_eq!(res.status(), StatusCode::OK, "{uri}");
            assert!(is_html(&res), "{uri}");
            assert!(body_text(res).await.starts_with("<!DOCTYPE html>"), "{uri}");
        }

        let res =
            test::call_service(&app, test::TestRequest::get().uri("/projects").to_request()).await;
        assert!(body_text(res).await.contains("No projects yet."));
    }

    #[actix_web::test]
    async fn short_title_is_rejected_and_nothing_is_stored() {
        let ctx = ctx(AppConfigMode::Production).await;
        let app = test::init_service(app(ctx.clone(), STATIC_PATH)).await;

        let mut form = VALID_FORM;
        form[0] = ("title", "TP");
        let req = test::TestRequest::post()
            .uri("/add_project")
            .set_form(&form[..])
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);
        assert!(res.headers().get(header::LOCATION).is_none());
        let body = body_text(res).await;
        assert!(body.contains(TITLE_MESSAGE));
        assert!(!body.contains(DESCRIPTION_MESSAGE));
        assert!(body.contains("value=\"test_image.jpg\""));
        assert!(ProjectDao::db_select_many(ctx.dao().db())
            .await
            .unwrap()
            .is_empty());
    }

    #[actix_web::test]
    async fn valid_project_is_listed_with_a_flash() {
        let ctx = ctx(AppConfigMode::Production).await;
        let app = test::init_service(app(ctx.clone(), STATIC_PATH)).await;

        let req = test::TestRequest::post()
            .uri("/add_project")
            .set_form(&VALID_FORM[..])
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            res.headers()
                .get(header::LOCATION)
                .and_then(|value| value.to_str().ok()),
            Some("/projects")
        );
        let flash = res
            .response()
            .cookies()
            .find(|cookie| cookie.name() == FLASH_COOKIE)
            .map(|cookie| cookie.into_owned())
            .unwrap();

        let projects_data = ProjectDao::db_select_many(ctx.dao().db()).await.unwrap();
        assert_eq!(projects_data.len(), 1);
        assert_eq!(projects_data[0].title(), "Test Project");
        assert_eq!(
            projects_data[0].description(),
            "This is a detailed test project description"
        );
        assert_eq!(projects_data[0].image_file_name(), "test_image.jpg");

        let req = test::TestRequest::get()
            .uri("/projects")
            .cookie(flash)
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);
        let body = body_text(res).await;
        assert!(body.contains("Test Project"));
        assert!(body.contains("/static/images/test_image.jpg"));
        assert!(body.contains("added successfully!"));
        assert!(!body.contains("No projects yet."));
    }

    #[actix_web::test]
    async fn listing_is_newest_first() {
        let ctx = ctx(AppConfigMode::Production).await;
        let app = test::init_service(app(ctx.clone(), STATIC_PATH)).await;

        for title in ["Alpha Project", "Bravo Project", "Charlie Project"] {
            let form =
                InsertOneProjectReqForm::new(title, "A sufficiently long description", "x.png");
            insert_project(ctx.dao().db(), &form).await.unwrap();
        }

        let res =
            test::call_service(&app, test::TestRequest::get().uri("/projects").to_request()).await;
        let body = body_text(res).await;

        let position = |title: &str| body.find(title).unwrap();
        assert!(position("Charlie Project") < position("Bravo Project"));
        assert!(position("Bravo Project") < position("Alpha Project"));
    }

    #[actix_web::test]
    async fn insert_project_reports_typed_outcomes() {
        let ctx = ctx(AppConfigMode::Production).await;
        let db = ctx.dao().db();

        let form =
            InsertOneProjectReqForm::new("  Ray Tracer  ", "Renders spheres and planes", "ray.png")
                .trimmed();
        let project_data = insert_project(db, &form).await.unwrap();
        assert!(*project_data.id() > 0);
        assert_eq!(project_data.title(), "Ray Tracer");

        let stored = ProjectDao::db_select(db, project_data.id()).await.unwrap();
        assert_matches!(stored, Some(project) if project.title() == "Ray Tracer");

        let form = InsertOneProjectReqForm::new("TP", "Short", "");
        assert_matches!(
            insert_project(db, &form).await,
            Err(Error::Validation(messages)) if messages.len() == 3
        );

        db.close().await;
        let form =
            InsertOneProjectReqForm::new("Closed Store", "Nothing can be written now", "c.png");
        assert_matches!(insert_project(db, &form).await, Err(Error::Storage(_)));
    }

    #[actix_web::test]
    async fn storage_failure_keeps_the_form_with_a_generic_message() {
        let ctx = ctx(AppConfigMode::Production).await;
        ctx.dao().db().close().await;
        let app = test::init_service(app(ctx, STATIC_PATH)).await;

        let req = test::TestRequest::post()
            .uri("/add_project")
            .set_form(&VALID_FORM[..])
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(is_html(&res));
        let body = body_text(res).await;
        assert!(body.contains("Error adding project. Please try again later."));
        assert!(body.contains("value=\"Test Project\""));
    }

    #[actix_web::test]
    async fn storage_failure_details_are_shown_in_development() {
        let ctx = ctx(AppConfigMode::Development).await;
        ctx.dao().db().close().await;
        let app = test::init_service(app(ctx, STATIC_PATH)).await;

        let req = test::TestRequest::post()
            .uri("/add_project")
            .set_form(&VALID_FORM[..])
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body_text(res).await.contains("Error adding project: storage error:"));
    }

    #[actix_web::test]
    async fn listing_storage_failure_is_an_error_page() {
        let ctx = ctx(AppConfigMode::Production).await;
        ctx.dao().db().close().await;
        let app = test::init_service(app(ctx, STATIC_PATH)).await;

        let res =
            test::call_service(&app, test::TestRequest::get().uri("/projects").to_request()).await;

        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(is_html(&res));
        assert!(body_text(res).await.contains("500 Internal Server Error"));
    }

    #[actix_web::test]
    async fn contact_flash_is_cleared_without_being_shown() {
        let app = test::init_service(app(ctx(AppConfigMode::Production).await, STATIC_PATH)).await;

        let req = test::TestRequest::get()
            .uri("/projects")
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
        assert!(!body_text(res).await.contains("Thank you for your message!"));
    }

    #[actix_web::test]
    async fn long_description_is_stored() {
        let ctx = ctx(AppConfigMode::Production).await;
        let app = test::init_service(app(ctx.clone(), STATIC_PATH)).await;

        let description = "d".repeat(20 * 1024);
        let mut form = VALID_FORM;
        form[1] = ("description", &description);
        let req = test::TestRequest::post()
            .uri("/add_project")
            .set_form(&form[..])
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        let projects_data = ProjectDao::db_select_many(ctx.dao().db()).await.unwrap();
        assert_eq!(projects_data.len(), 1);
        assert_eq!(projects_data[0].description().len(), 20 * 1024);
    }
}
