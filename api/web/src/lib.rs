use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::{ErrorHandlers, Logger},
    web, App, Error, HttpServer,
};
use configure::configure;
use context::ApiWebCtx;
use error_handler::default_error_handler;
use logger::logger_format;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

mod configure;
pub mod context;
mod error_handler;
mod flash;
mod logger;
mod model;
mod service;
mod template;

pub struct ApiWebServer {
    address: String,
    static_path: String,
    context: web::Data<ApiWebCtx>,
}

impl ApiWebServer {
    pub fn new(host: &str, port: &u16, static_path: &str, ctx: ApiWebCtx) -> Self {
        pf_log::info(Some("⚡"), "[ApiWebServer] Initializing component");

        Self {
            address: format!("{host}:{port}"),
            static_path: static_path.to_owned(),
            context: web::Data::new(ctx),
        }
    }

    pub fn run(self, cancel_token: CancellationToken) -> JoinHandle<()> {
        pf_log::info(
            Some("💫"),
            format!("[ApiWebServer] Running component on {}", self.address),
        );

        tokio::spawn((|| async move {
            let context = self.context;
            let static_path = self.static_path;

            let server = match HttpServer::new(move || app(context.clone(), &static_path))
                .bind(&self.address)
            {
                Ok(server) => server.run(),
                Err(err) => pf_log::panic(
                    None,
                    format!("[ApiWebServer] Failed to bind {}: {err}", self.address),
                ),
            };
            let server_handle = server.handle();

            tokio::select! {
                _ = cancel_token.cancelled() => {}
                s = server => {
                    if let Err(err) = s {
                        pf_log::panic(None, format!("[ApiWebServer] Web server error: {err}"));
                    }
                }
            }

            pf_log::info(None, "[ApiWebServer] Shutting down component");
            server_handle.stop(true).await;
        })())
    }
}

pub(crate) fn app(
    context: web::Data<ApiWebCtx>,
    static_path: &str,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap(ErrorHandlers::new().default_handler(default_error_handler))
        .wrap(Logger::new(logger_format()))
        .app_data(context)
        .configure(|cfg| configure(cfg, static_path))
}
