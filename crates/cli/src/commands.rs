use anyhow::{Context, Result};
use axum::Router;
use clap::ArgMatches;
use console::style;
use mockshelf_catalog::ErrorClassifier;
use mockshelf_config::{Config, ConfigPersistence};
use mockshelf_core::{CatalogGateway, SeedOutcome};
use mockshelf_database::{connect, verify_integrity, DatabaseConfig, DbPool, SqliteGateway};
use mockshelf_http::{mount, MountOptions};

/// Seed the catalog, mount the API and serve until Ctrl-C
pub async fn serve(config: &Config) -> Result<()> {
    let gateway = open_gateway(config).await?;
    verify_integrity(gateway.pool())
        .await
        .context("Database failed its integrity check")?;

    let static_dir = &config.server.static_dir;
    if !static_dir.is_dir() {
        log::warn!(
            "Static directory {} does not exist, /static requests will return 404",
            static_dir.display()
        );
    }

    let options = MountOptions::new(classifier(config)).with_static_dir(static_dir);
    let app = mount(Router::new(), gateway, options)
        .await
        .context("Failed to seed the catalog")?;

    let listener = tokio::net::TcpListener::bind(&config.server.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.server.bind_addr))?;
    log::info!(
        "Serving catalog on http://{} (mode: {})",
        listener.local_addr()?,
        config.api.mode
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    log::info!("Server stopped");
    Ok(())
}

/// Seed the catalog if it is empty and report what happened
pub async fn seed(config: &Config) -> Result<()> {
    let gateway = open_gateway(config).await?;
    let outcome = gateway
        .seed_if_empty()
        .await
        .context("Failed to seed the catalog")?;
    verify_integrity(gateway.pool())
        .await
        .context("Database failed its integrity check")?;

    println!("{}", describe_outcome(&outcome, &config.database.path));
    Ok(())
}

/// Print the effective configuration, or write it to `--write FILE`
pub fn show_config(config: &Config, matches: &ArgMatches) -> Result<()> {
    match matches.get_one::<String>("write") {
        Some(path) => {
            let persistence = ConfigPersistence::new(path);
            persistence
                .save(config)
                .with_context(|| format!("Failed to write config to {}", path))?;
            println!(
                "{} Config written to {}",
                style("✓").green().bold(),
                persistence.path().display()
            );
        }
        None => print!("{}", config.to_toml()?),
    }
    Ok(())
}

fn classifier(config: &Config) -> ErrorClassifier {
    ErrorClassifier::new(config.api.mode).with_not_found_status(config.api.not_found_status)
}

async fn open_gateway(config: &Config) -> Result<SqliteGateway> {
    let pool = connect_db(config).await?;
    SqliteGateway::with_default_seed(pool, &config.server.base_url)
        .context("Failed to load the seed catalog")
}

async fn connect_db(config: &Config) -> Result<DbPool> {
    let db = DatabaseConfig::new(config.database.path.as_str())
        .with_max_connections(config.database.max_connections)
        .with_wal(config.database.enable_wal);
    connect(db)
        .await
        .with_context(|| format!("Failed to open database {}", config.database.path))
}

fn describe_outcome(outcome: &SeedOutcome, db_path: &str) -> String {
    match outcome {
        SeedOutcome::Seeded(n) => format!(
            "{} Seeded {} books into {}",
            style("✓").green().bold(),
            style(n).cyan(),
            db_path
        ),
        SeedOutcome::AlreadyPopulated(n) => format!(
            "{} {} already holds {} books, nothing to do",
            style("•").dim(),
            db_path,
            style(n).cyan()
        ),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
