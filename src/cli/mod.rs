pub mod commands;

use std::sync::Arc;

use crate::cli::commands::Commands;
use crate::config::AppConfig;
use crate::db::{seed, DocStore, Repository};

pub async fn run_cli(command: Commands, config_path: String) {
    let config = AppConfig::load(&config_path).expect("Failed to load config");

    match command {
        Commands::Serve => {
            panic!("Serve command should be intercepted by main.rs to boot actix-web");
        }
        Commands::Seed => {
            let store = DocStore::open(&config.database).expect("DB error");
            let repo = Repository::new(Arc::new(store));

            match seed::reseed(&repo).await {
                Ok(inserted) => println!("Seeded {} catalog entries", inserted),
                Err(e) => eprintln!("Error: {}", e),
            }
        }
    }
}
