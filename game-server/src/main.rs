use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use game_persistence::{
    connection::connect_and_migrate,
    repositories::{LeaderboardRepository, VerbRepository},
};
use game_server::{
    config::Config,
    create_routes,
    translation::{DeeplTranslator, Translator},
    word_list::seed_verbs_from_file,
};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting Translatle server...");

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    // Initialize database connection and run migrations
    let db = match connect_and_migrate(&config.database_url).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to connect to database and run migrations: {}", e);
            std::process::exit(1);
        }
    };
    let verb_repository = Arc::new(VerbRepository::new(db.clone()));
    let leaderboard_repository = Arc::new(LeaderboardRepository::new(db));

    info!("Loading verbs from: {}", config.verbs_file.display());
    if let Err(e) = seed_verbs_from_file(&verb_repository, &config.verbs_file).await {
        error!("Failed to load verb list: {:#}", e);
        std::process::exit(1);
    }
    match verb_repository.count().await {
        Ok(0) => tracing::warn!("Verb table is empty; word requests will fail until it is filled"),
        Ok(count) => info!("Serving {} verbs", count),
        Err(e) => error!("Failed to count verbs: {}", e),
    }

    let translator: Arc<dyn Translator> = Arc::new(DeeplTranslator::new(
        config.deepl_api_key.clone(),
        config.deepl_api_url.clone(),
    ));

    let routes = create_routes(
        verb_repository,
        leaderboard_repository,
        translator,
        config.leaderboard_size,
    );

    let host = match config.host.parse::<std::net::IpAddr>() {
        Ok(host) => host,
        Err(e) => {
            error!("Invalid HOST '{}': {}", config.host, e);
            std::process::exit(1);
        }
    };

    info!("Server starting on {}:{}", config.host, config.port);

    let (addr, server) =
        warp::serve(routes).bind_with_graceful_shutdown((host, config.port), shutdown_signal());

    info!("Listening at http://{}/api. Press Ctrl+C to stop.", addr);
    server.await;
    info!("Server shutdown complete.");
}

/// Wait for SIGINT (Ctrl+C) or SIGTERM
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal as unix_signal};

        match (
            unix_signal(SignalKind::interrupt()),
            unix_signal(SignalKind::terminate()),
        ) {
            (Ok(mut sigint), Ok(mut sigterm)) => {
                tokio::select! {
                    _ = sigint.recv() => {
                        info!("Received SIGINT, shutting down gracefully...");
                    }
                    _ = sigterm.recv() => {
                        info!("Received SIGTERM, shutting down gracefully...");
                    }
                }
                return;
            }
            _ => error!("Failed to install unix signal handlers, falling back to Ctrl+C"),
        }
    }

    if let Err(e) = signal::ctrl_c().await {
        error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Received Ctrl+C, shutting down gracefully...");
}
