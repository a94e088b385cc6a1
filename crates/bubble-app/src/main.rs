mod app_state;
mod cli;
mod controls;

use std::path::{Path, PathBuf};

use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

use bubble_common::BubbleError;
use bubble_config::schema::BubbleConfig;

const FALLBACK_DIRECTIVE: &str = "warn,bubble_app=info";

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        eprintln!("\n--- Bubble crashed ---");
        eprintln!("Run with --log-level debug for more detail.");
        eprintln!("----------------------\n");
        default_hook(info);
    }));
}

/// Config file to use: the CLI override, else the platform default.
fn config_path(args: &cli::Args) -> Result<PathBuf, BubbleError> {
    match args.config {
        Some(ref path) => Ok(path.clone()),
        None => Ok(bubble_config::toml_loader::default_config_path()?),
    }
}

/// Make a relative CLI image path absolute against the working directory,
/// since config image paths resolve against the config file's directory.
fn absolutize(image: &str) -> String {
    let path = Path::new(image);
    if path.is_absolute() {
        return image.to_string();
    }
    match std::env::current_dir() {
        Ok(cwd) => cwd.join(path).display().to_string(),
        Err(_) => image.to_string(),
    }
}

/// Log filter: `--log-level` wins, then `RUST_LOG`, then the config's level.
fn log_filter(cli_level: Option<&str>, config: Option<&BubbleConfig>) -> EnvFilter {
    let from_config = || {
        let directive = config
            .map(|c| c.logging.level.directive())
            .unwrap_or_else(|| FALLBACK_DIRECTIVE.to_string());
        EnvFilter::try_new(directive)
    };
    let filter = match cli_level {
        Some(level) => EnvFilter::try_new(level),
        None => EnvFilter::try_from_default_env().or_else(|_| from_config()),
    };
    filter.unwrap_or_else(|_| EnvFilter::new(FALLBACK_DIRECTIVE))
}

/// The config after CLI overrides, as `--print-config` shows it.
fn effective_config_json(config: &BubbleConfig) -> String {
    bubble_config::config_to_json(config)
}

fn run() -> Result<(), BubbleError> {
    let args = cli::parse();
    let config_path = config_path(&args)?;

    // Logging is configured from the config file, so load it first and
    // report the outcome once the subscriber is up.
    let loaded = bubble_config::load_config_from(&config_path);

    let filter = log_filter(args.log_level.as_deref(), loaded.as_ref().ok());
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("Bubble v{} starting...", env!("CARGO_PKG_VERSION"));

    let mut config = match loaded {
        Ok(config) => {
            tracing::info!(path = %config_path.display(), "Config loaded");
            config
        }
        Err(e) => {
            tracing::warn!("Config load failed, using defaults: {e}");
            BubbleConfig::default()
        }
    };

    let mut overrides = args.overrides();
    overrides.image = overrides.image.as_deref().map(absolutize);
    overrides.apply(&mut config);
    tracing::info!(variant = config.scene.variant.name(), "Scene configured");

    if args.print_config {
        println!("{}", effective_config_json(&config));
        return Ok(());
    }

    let event_loop = EventLoop::new().map_err(|e| BubbleError::Other(e.to_string()))?;
    let mut app = app_state::BubbleApp::new(config, config_path, overrides);

    tracing::info!("Entering event loop");
    event_loop
        .run_app(&mut app)
        .map_err(|e| BubbleError::Other(format!("event loop error: {e}")))
}

fn main() {
    install_panic_hook();

    if let Err(e) = run() {
        tracing::error!("{e}");
        eprintln!("bubble: {e}");
        std::process::exit(1);
    }
    tracing::info!("Shutdown complete");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_image_is_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let image = dir.path().join("photo.png").display().to_string();
        assert_eq!(absolutize(&image), image);
    }

    #[test]
    fn relative_image_joins_working_directory() {
        let resolved = absolutize("photo.png");
        assert!(Path::new(&resolved).is_absolute());
        assert!(resolved.ends_with("photo.png"));
    }

    #[test]
    fn cli_log_level_builds_filter() {
        let filter = log_filter(Some("bubble_renderer=trace"), None);
        assert!(filter.to_string().contains("bubble_renderer=trace"));
    }

    #[test]
    fn config_level_used_without_cli_override() {
        let mut config = BubbleConfig::default();
        config.logging.level = bubble_config::schema::LogLevel::Debug;
        if std::env::var_os("RUST_LOG").is_none() {
            let filter = log_filter(None, Some(&config));
            assert!(filter.to_string().contains("bubble_renderer=debug"));
        }
    }

    #[test]
    fn printed_config_reflects_overrides() {
        let mut config = BubbleConfig::default();
        cli::Overrides {
            variant: Some(bubble_config::schema::SceneVariant::Graded),
            image: Some("/srv/backdrop.png".into()),
        }
        .apply(&mut config);

        let json: serde_json::Value = serde_json::from_str(&effective_config_json(&config)).unwrap();
        assert_eq!(json["scene"]["variant"], "graded");
        assert_eq!(json["scene"]["image"], "/srv/backdrop.png");
    }

    #[test]
    fn explicit_config_path_wins() {
        let args = <cli::Args as clap::Parser>::try_parse_from([
            "bubble",
            "--config",
            "/tmp/other.toml",
        ])
        .unwrap();
        assert_eq!(
            config_path(&args).unwrap(),
            PathBuf::from("/tmp/other.toml")
        );
    }
}
