use actix_cors::Cors;
use actix_web::{middleware::NormalizePath, web, App, HttpServer};
use tracing_actix_web::TracingLogger;

use portfolio_site::{
    graceful_shutdown::stop_on_signal,
    handlers::json_error::route_not_found,
    routes::configure_routes,
    settings::AppConfig,
    source::{ContentSource, SiteContentSource},
    telemetry::init_tracing,
    AppState,
};

fn build_cors(config: &AppConfig) -> Cors {
    let origins = config.cors_origins();
    let cors = Cors::default()
        .allowed_methods(vec!["GET", "POST"])
        .allow_any_header()
        .max_age(3600);

    if origins.iter().any(|o| o == "*") {
        cors.allow_any_origin()
    } else {
        origins.iter().fold(cors, |cors, origin| cors.allowed_origin(origin))
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    init_tracing();

    let config = match AppConfig::new() {
        Ok(cfg) => {
            tracing::info!("Loaded configuration: {:?}", cfg);
            cfg
        },
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let source = match SiteContentSource::from_config(&config) {
        Ok(source) => source,
        Err(e) => {
            tracing::error!("Content source error: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!(
        "Serving content from {} ({})",
        source.locate(&config.blog_resource),
        config.content_source
    );

    let app_state = web::Data::new(AppState::new(&config, source));

    let server_addr = format!("{}:{}", config.host, config.port);

    tracing::info!(
        "🚀 Starting Portfolio Site API v{} on {}",
        env!("CARGO_PKG_VERSION"),
        server_addr
    );

    let cors_config = config.clone();
    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(build_cors(&cors_config))
            .wrap(NormalizePath::trim())
            .wrap(TracingLogger::default())
            .configure(configure_routes)
            .default_service(web::to(route_not_found))
    })
    .workers(config.worker_count)
    .bind(server_addr)?
    .run();

    tokio::spawn(stop_on_signal(server.handle()));

    server.await
}
