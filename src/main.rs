use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use snack_directory::api::{self, AppState, ValidationConfig};
use snack_directory::store::Directory;

#[derive(Parser)]
#[command(name = "snack-directory")]
#[command(about = "In-memory snack directory served over a small HTTP API")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the snack directory server
    Serve {
        /// Port for HTTP API
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Letter validated snack ids must start with (overrides SNACKDIR_ID_LETTER)
        #[arg(long)]
        id_letter: Option<char>,
    },
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG")
            .unwrap_or_else(|_| "snack_directory=debug,tower_http=debug".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn serve(port: u16, id_letter: Option<char>) -> anyhow::Result<()> {
    let validation = match id_letter {
        Some(letter) => ValidationConfig::with_required_letter(letter),
        None => ValidationConfig::from_env(),
    };

    let state = AppState {
        directory: Directory::new(),
        validation,
    };
    let app = api::create_router(state);

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await?;
    tracing::info!("Snack directory listening on http://127.0.0.1:{}", port);

    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Some(Commands::Serve { port, id_letter }) => {
            tracing::info!("Starting snack directory server on port {}", port);
            serve(port, id_letter).await
        }
        None => {
            // Default: start server
            tracing::info!("Starting snack directory server on port 3000");
            serve(3000, None).await
        }
    }
}
