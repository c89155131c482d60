use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command};
use mockshelf_config::{Config, LogLevel};
use mockshelf_core::RuntimeMode;

mod commands;

fn build_cli() -> Command {
    Command::new("mockshelf")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Mock books catalog API with pagination, search and static covers")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("PATH")
                .help("Path to the TOML config file")
                .default_value("mockshelf.toml")
                .global(true),
        )
        .arg(
            Arg::new("database")
                .short('d')
                .long("database")
                .value_name("PATH")
                .help("SQLite database file, or :memory:")
                .global(true),
        )
        .subcommand(
            Command::new("serve")
                .about("Seed the catalog if empty and serve the API (default)")
                .arg(
                    Arg::new("bind")
                        .short('b')
                        .long("bind")
                        .value_name("ADDR")
                        .help("Listen address, e.g. 127.0.0.1:8080"),
                )
                .arg(
                    Arg::new("mode")
                        .short('m')
                        .long("mode")
                        .value_name("MODE")
                        .help("Runtime mode")
                        .value_parser(["development", "test", "production"]),
                ),
        )
        .subcommand(Command::new("seed").about("Seed the catalog if empty, then exit"))
        .subcommand(
            Command::new("config")
                .about("Print the effective configuration")
                .arg(
                    Arg::new("write")
                        .short('w')
                        .long("write")
                        .value_name("FILE")
                        .help("Write the configuration to FILE instead of printing it"),
                ),
        )
}

/// File, then environment, then command line
fn resolve_config(matches: &ArgMatches) -> Result<Config> {
    let path = matches
        .get_one::<String>("config")
        .map(String::as_str)
        .unwrap_or("mockshelf.toml");
    let mut config =
        Config::load(path).with_context(|| format!("Failed to load config from {}", path))?;

    if let Some(database) = matches.get_one::<String>("database") {
        config.database.path = database.clone();
    }

    if let Some(("serve", serve)) = matches.subcommand() {
        config.server.static_dir = config.static_root(path);
        if let Some(bind) = serve.get_one::<String>("bind") {
            config.server.bind_addr = bind.clone();
        }
        if let Some(mode) = serve.get_one::<String>("mode") {
            config.api.mode = mode.parse::<RuntimeMode>()?;
        }
    }

    config
        .validate()
        .map_err(mockshelf_config::ConfigError::Invalid)
        .context("Invalid command line options")?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let matches = build_cli().get_matches();

    // Config loading logs too: start at info, narrow once the level is known.
    let explicit_filter = std::env::var_os("RUST_LOG").is_some();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("trace")).init();
    if !explicit_filter {
        log::set_max_level(LogLevel::Info.to_level_filter());
    }

    let config = resolve_config(&matches)?;
    if !explicit_filter {
        log::set_max_level(config.server.log_level.to_level_filter());
    }

    match matches.subcommand() {
        Some(("seed", _)) => commands::seed(&config).await,
        Some(("config", sub_matches)) => commands::show_config(&config, sub_matches),
        Some(("serve", _)) | None => commands::serve(&config).await,
        _ => {
            build_cli().print_help()?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        build_cli().debug_assert();
    }

    #[test]
    fn test_global_database_after_subcommand() {
        let matches = build_cli()
            .try_get_matches_from(["mockshelf", "seed", "--database", ":memory:"])
            .unwrap();
        assert_eq!(
            matches.get_one::<String>("database").map(String::as_str),
            Some(":memory:")
        );
    }

    #[test]
    fn test_serve_takes_static_dir_from_config_location() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("mockshelf.toml");
        std::fs::write(&path, "[server]\nstatic_dir = \"public\"\n").unwrap();

        let matches = build_cli()
            .try_get_matches_from(["mockshelf", "--config", path.to_str().unwrap(), "serve"])
            .unwrap();
        let config = resolve_config(&matches).unwrap();
        assert_eq!(config.server.static_dir, dir.path().join("public"));
    }

    #[test]
    fn test_serve_rejects_unknown_mode() {
        let result =
            build_cli().try_get_matches_from(["mockshelf", "serve", "--mode", "staging"]);
        assert!(result.is_err());
    }
}
