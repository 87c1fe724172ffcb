use actix_web::{middleware::Logger, web, App, HttpServer};

use revision_server::{
    app_state::AppState,
    config::Config,
    handlers,
    middleware::{cors, cors_headers, RequestIdMiddleware},
    services::http_helpers::json_config,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    config.warn_if_incomplete();

    let host = config.web_server_host.clone();
    let port = config.web_server_port;

    let state = AppState::new(config).map_err(|e| std::io::Error::other(e.to_string()))?;
    log::info!(
        "Loaded catalogue: {} topic(s), {} ready",
        state.catalogue.topics().len(),
        state.catalogue.ready_topics().count()
    );

    log::info!("starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(json_config())
            .wrap(RequestIdMiddleware)
            .wrap(cors())
            .wrap(cors_headers())
            .wrap(Logger::new("%a \"%r\" %s %b %T %{x-request-id}o"))
            .service(handlers::health_check)
            .service(handlers::health_check_ready)
            .configure(handlers::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
