//! carteira-dl - Document Loader service
//!
//! Serves display-ready identity card records to the Carteira viewer
//! shell: cache-first lookup against the local document store, falling
//! back to the Certfy verification API with transform-and-persist on
//! first sight of a document id.

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use carteira_dl::services::CertfyClient;
use carteira_dl::AppState;

#[derive(Debug, Parser)]
#[command(name = "carteira-dl", about = "Carteira document loader service")]
struct Args {
    /// Data folder holding the document cache database
    #[arg(long, env = "CARTEIRA_DATA")]
    data_folder: Option<String>,

    /// Listen port
    #[arg(long, default_value_t = 5740)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();

    info!("Starting carteira-dl (Document Loader) service");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    // Step 1: Load the optional TOML config file
    let toml_config = carteira_common::config::TomlConfig::load_default("carteira-dl")?;

    // Step 2: Resolve and create the data folder
    let data_folder =
        carteira_common::config::resolve_data_folder(args.data_folder.as_deref(), &toml_config);
    carteira_common::config::ensure_data_folder(&data_folder)?;

    // Step 3: Open or create the document cache database
    let db_path = data_folder.join("carteira.db");
    info!("Database: {}", db_path.display());
    let db_pool = carteira_dl::db::init_database_pool(&db_path).await?;
    info!("Database connection established");

    // Step 4: Build the Certfy client from ENV/TOML configuration
    let certfy_config = carteira_dl::config::resolve_certfy_config(&toml_config)?;
    info!("Verification API: {}", certfy_config.base_url);
    let certfy = CertfyClient::new(certfy_config)
        .map_err(|e| anyhow::anyhow!("Failed to create Certfy client: {}", e))?;

    // Create application state and router
    let state = AppState::new(db_pool, certfy);
    let app = carteira_dl::build_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", args.port)).await?;
    info!("Listening on http://127.0.0.1:{}", args.port);
    info!("Health check: http://127.0.0.1:{}/health", args.port);

    axum::serve(listener, app).await?;

    Ok(())
}
