use actix_web::{App, HttpResponse, HttpServer, middleware, web};
use tokio::task::JoinHandle;

use crate::ProfileApp;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub const fn new(host: String, port: u16) -> Self {
        Self { host, port }
    }
}

/// # Errors
///
/// Returns an error if the server fails to bind or run
#[allow(clippy::future_not_send)]
pub async fn run_server(app: ProfileApp, config: ServerConfig) -> std::io::Result<()> {
    let RunServerResponse { join_handle, .. } = run_server_with_handle(app, &config)?;

    join_handle.await?
}

pub struct RunServerResponse {
    pub handle: actix_web::dev::ServerHandle,
    pub addrs: Vec<std::net::SocketAddr>,
    pub join_handle: JoinHandle<Result<(), std::io::Error>>,
}

/// # Errors
///
/// Returns an error if the server fails to bind
pub fn run_server_with_handle(
    app: ProfileApp,
    config: &ServerConfig,
) -> std::io::Result<RunServerResponse> {
    log::info!(
        "Serving {} on {}:{}",
        app.site().root(),
        config.host,
        config.port
    );

    let app = web::Data::new(app);

    let server = HttpServer::new(move || {
        App::new()
            .app_data(app.clone())
            .wrap(middleware::Logger::default())
            .route("/", web::get().to(index))
            .route("/health", web::get().to(|| async { "OK" }))
    })
    .bind((config.host.as_str(), config.port))?;

    let addrs = server.addrs();
    let server = server.run();
    let handle = server.handle();

    let join_handle = tokio::spawn(server);

    Ok(RunServerResponse {
        handle,
        addrs,
        join_handle,
    })
}

/// Every request is a fresh page load.
async fn index(app: web::Data<ProfileApp>) -> HttpResponse {
    match app.render().await {
        Ok(document) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(document.into_string()),
        Err(e) => {
            log::error!("Failed to render page: {e}");
            HttpResponse::InternalServerError().body(e.to_string())
        }
    }
}
