use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ecotrail", version, about = "Jharkhand Eco-Tourism Backend", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Override the config file path globally
    #[arg(short, long, global = true, default_value = "config.yaml")]
    pub config: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server
    Serve,

    /// Clear and repopulate the sample catalog
    Seed,
}
