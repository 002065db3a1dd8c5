use actix_cors::Cors;
use actix_web::{web, App, HttpServer, middleware};
use friendfinder_compat::config::Settings;
use friendfinder_compat::core::Matcher;
use friendfinder_compat::error::AppError;
use friendfinder_compat::routes::{self, compatibility::AppState};
use tracing::{info, error};
use tracing_subscriber::EnvFilter;

fn init_logging(settings: &Settings) {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| settings.logging.level.clone());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| settings.logging.format.clone());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_level))
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }
}

#[actix_web::main]
async fn main() -> Result<(), AppError> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load().inspect_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
    })?;

    init_logging(&settings);

    info!("Starting FriendFinder compatibility service...");

    let weights = settings.scoring.weights.to_weights().inspect_err(|e| {
        error!("Rejecting scoring configuration: {}", e);
    })?;

    let matcher = Matcher::new(weights, settings.scoring.compatible_threshold);

    info!(
        "Matcher initialized with weights: {:?}, compatible threshold: {}",
        matcher.weights(),
        matcher.compatible_threshold()
    );

    let app_state = AppState {
        matcher,
        matching: settings.matching.clone(),
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(routes::json_config())
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await?;

    Ok(())
}
