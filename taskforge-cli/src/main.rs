use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::info;

use taskforge_core::TaskStore;
use taskforge_gateway::TaskGateway;
use taskforge_rpc::TaskService;

#[derive(Parser, Debug)]
#[command(name = "taskforge", version)]
#[command(about = "Taskforge - task tracking service")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the task service and its HTTP gateway
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "0.0.0.0:3000")]
        addr: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize JSON logging once.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env();
    let env_filter = match "info".parse() {
        Ok(directive) => env_filter.add_directive(directive),
        Err(_) => env_filter, // fallback to default if parsing fails
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .json()
        .try_init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { addr } => {
            let store = Arc::new(TaskStore::new());
            let service = Arc::new(TaskService::new(store));
            let gateway = TaskGateway::new(service);

            info!(address = %addr, "Starting taskforge");

            gateway.serve(&addr).await?;

            info!("Taskforge stopped");
        }
    }

    Ok(())
}
