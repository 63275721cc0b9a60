use orders_hex::application::demo::Demo;
use orders_hex::application::order_service::OrderService;
use orders_hex::config::Config;
use orders_hex::domain::seed::{load_orders, sample_orders};
use orders_repo::{build_repo, Repo, RepoConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env for DATABASE_URL / DATABASE_NAME / COLLECTION_NAME when present.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    let seed = match &config.seed_file {
        Some(path) => load_orders(path)?,
        None => sample_orders(),
    };

    let repo_cfg = RepoConfig {
        url: config.database_url.clone(),
        database: config.database_name.clone(),
        collection: config.collection_name.clone(),
    };
    let repo: Repo = match build_repo(&repo_cfg).await {
        Ok(repo) => {
            println!("Successfully connected to MongoDB!");
            repo
        }
        Err(e) => {
            tracing::error!(error = %e, url = %repo_cfg.url, "connection failed");
            println!("Error connecting to MongoDB: {}", e);
            std::process::exit(1);
        }
    };

    let demo = Demo::new(OrderService::new(repo), seed);
    demo.run().await;
    Ok(())
}
