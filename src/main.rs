use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use clap::Parser;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};

use ecotrail::api;
use ecotrail::chat::{ChatService, SessionRegistry};
use ecotrail::cli::{commands::Cli, commands::Commands, run_cli};
use ecotrail::config::AppConfig;
use ecotrail::db::{DocStore, Repository};
use ecotrail::llm::ProviderFactory;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if !matches!(cli.command, Commands::Serve) {
        run_cli(cli.command, cli.config).await;
        return Ok(());
    }

    info!("Starting Ecotrail Tourism Server...");

    let config = match AppConfig::load(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let store = match DocStore::open(&config.database) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            error!("Failed to initialize document store: {}", e);
            std::process::exit(1);
        }
    };
    let repo = Repository::new(store);

    // A missing credential is not fatal: catalog endpoints keep working and
    // assistant endpoints answer with a configuration error.
    let provider = ProviderFactory::create_default(&config);
    match &provider {
        Some(p) => info!("Using LLM provider '{}'", p.name()),
        None => warn!("No LLM provider configured; assistant endpoints disabled"),
    }

    let chat = ChatService::new(
        SessionRegistry::new(config.chat.system_prompt.clone()),
        provider,
        repo.clone(),
        Duration::from_secs(config.chat.request_timeout_secs),
    );
    let chat = web::Data::new(chat);
    let repo = web::Data::new(repo);

    let host = config.server.host.clone();
    let port = config.server.port;
    let origins = config.cors.origins.clone();

    info!("Server listening on {}:{}", host, port);

    HttpServer::new(move || {
        let mut cors = Cors::default().allow_any_method().allow_any_header();
        if origins.iter().any(|o| o == "*") {
            cors = cors.allow_any_origin();
        } else {
            for origin in &origins {
                cors = cors.allowed_origin(origin);
            }
        }

        App::new()
            .wrap(cors)
            .app_data(repo.clone())
            .app_data(chat.clone())
            .configure(api::routes::configure)
    })
    .bind((host, port))?
    .run()
    .await
}
