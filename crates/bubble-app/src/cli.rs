use std::path::PathBuf;

use bubble_config::schema::{BubbleConfig, SceneVariant};
use clap::Parser;

/// Bubble: an animated glass sphere with live-tunable effects.
#[derive(Parser, Debug)]
#[command(name = "bubble", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter directive override (e.g. `debug` or `bubble_renderer=trace`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Scene variant to start with (masked, bloom, graded).
    #[arg(long)]
    pub variant: Option<SceneVariant>,

    /// Image shown behind or through the bubble.
    #[arg(long)]
    pub image: Option<String>,

    /// Print the effective config as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}

impl Args {
    /// Settings from the command line that win over the config file,
    /// including after a live reload.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            variant: self.variant,
            image: self.image.clone(),
        }
    }
}

/// Command-line values layered on top of every loaded config.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub variant: Option<SceneVariant>,
    pub image: Option<String>,
}

impl Overrides {
    pub fn apply(&self, config: &mut BubbleConfig) {
        if let Some(variant) = self.variant {
            config.scene.variant = variant;
        }
        if let Some(ref image) = self.image {
            config.scene.image = Some(image.clone());
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_flags() {
        let args = Args::try_parse_from([
            "bubble",
            "--config",
            "/tmp/bubble.toml",
            "--log-level",
            "debug",
            "--variant",
            "masked",
            "--image",
            "photo.jpg",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("/tmp/bubble.toml")));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert_eq!(args.variant, Some(SceneVariant::Masked));
        assert_eq!(args.image.as_deref(), Some("photo.jpg"));
    }

    #[test]
    fn print_config_flag_defaults_off() {
        assert!(!Args::try_parse_from(["bubble"]).unwrap().print_config);
        assert!(Args::try_parse_from(["bubble", "--print-config"]).unwrap().print_config);
    }

    #[test]
    fn unknown_variant_is_rejected() {
        assert!(Args::try_parse_from(["bubble", "--variant", "sparkly"]).is_err());
    }

    #[test]
    fn no_flags_means_no_overrides() {
        let args = Args::try_parse_from(["bubble"]).unwrap();
        let mut config = BubbleConfig::default();
        args.overrides().apply(&mut config);
        assert_eq!(config, BubbleConfig::default());
    }

    #[test]
    fn overrides_replace_variant_and_image() {
        let overrides = Overrides {
            variant: Some(SceneVariant::Bloom),
            image: Some("backdrop.png".into()),
        };
        let mut config = BubbleConfig::default();
        overrides.apply(&mut config);
        assert_eq!(config.scene.variant, SceneVariant::Bloom);
        assert_eq!(config.scene.image.as_deref(), Some("backdrop.png"));
    }
}
