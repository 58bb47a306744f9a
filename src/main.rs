//! folio - Entry Point

use clap::Parser;
use folio::model::{AppError, Content, SectionId};
use std::path::PathBuf;
use tracing::info;

/// Terminal portfolio viewer
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Terminal portfolio viewer with an animated hero and section navigation")]
pub struct Args {
    /// Path to a content document (uses the embedded portfolio if not
    /// provided)
    pub content: Option<PathBuf>,

    /// Accent theme
    #[arg(long, value_parser = folio::view::Styles::KNOWN_THEMES)]
    pub theme: Option<String>,

    /// Start scrolled to a specific section
    #[arg(long, value_parser = clap::value_parser!(SectionId))]
    pub section: Option<SectionId>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Set NO_COLOR env var if --no-color flag is passed, so color
    // handling is consistent throughout the application.
    if args.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    // Resolve configuration with the full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = folio::config::load_config_with_precedence(args.config.clone())?;
        let merged = folio::config::merge_config(config_file);
        let with_env = folio::config::apply_env_overrides(merged);
        folio::config::apply_cli_overrides(with_env, args.theme.clone(), args.content.clone())
    };

    folio::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let content = match &config.content {
        Some(path) => Content::from_path(path),
        None => Content::embedded(),
    }?;

    run(content, &config, args.section)?;

    Ok(())
}

fn run(
    content: Content,
    config: &folio::config::ResolvedConfig,
    start_section: Option<SectionId>,
) -> Result<(), AppError> {
    let mut app = folio::view::App::new(content, config)?;
    if let Some(section) = start_section {
        app.jump_to_section(section)?;
    }
    app.run()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_does_not_error() {
        let result = Args::try_parse_from(["folio", "--help"]);
        // Help returns Err with DisplayHelp, which is success
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_does_not_error() {
        let result = Args::try_parse_from(["folio", "--version"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_no_args_defaults() {
        let args = Args::parse_from(["folio"]);
        assert_eq!(args.content, None);
        assert_eq!(args.theme, None);
        assert_eq!(args.section, None);
        assert!(!args.no_color);
        assert_eq!(args.config, None);
    }

    #[test]
    fn test_content_path_populates_content_field() {
        let args = Args::parse_from(["folio", "me.json"]);
        assert_eq!(args.content, Some(PathBuf::from("me.json")));
    }

    #[test]
    fn test_theme_accepts_known_names() {
        for theme in folio::view::Styles::KNOWN_THEMES {
            let args = Args::parse_from(["folio", "--theme", theme]);
            assert_eq!(args.theme, Some(theme.to_string()));
        }
    }

    #[test]
    fn test_theme_rejects_unknown_names() {
        let result = Args::try_parse_from(["folio", "--theme", "neon"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }

    #[test]
    fn test_section_parses_known_ids() {
        let args = Args::parse_from(["folio", "--section", "projects"]);
        assert_eq!(args.section, Some(SectionId::Projects));
    }

    #[test]
    fn test_section_rejects_unknown_ids() {
        let result = Args::try_parse_from(["folio", "--section", "blog"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_no_color_flag() {
        let args = Args::parse_from(["folio", "--no-color"]);
        assert!(args.no_color);
    }

    #[test]
    fn test_config_path() {
        let args = Args::parse_from(["folio", "--config", "/custom/config.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_combined_flags() {
        let args = Args::parse_from([
            "folio",
            "me.json",
            "--theme",
            "blue",
            "--section",
            "contact",
            "--no-color",
        ]);
        assert_eq!(args.content, Some(PathBuf::from("me.json")));
        assert_eq!(args.theme, Some("blue".to_string()));
        assert_eq!(args.section, Some(SectionId::Contact));
        assert!(args.no_color);
    }

    #[test]
    fn test_theme_flows_through_config_precedence_chain() {
        use folio::config::{apply_cli_overrides, merge_config, ConfigFile};

        let config_file = ConfigFile {
            theme: Some("green".to_string()),
            content: None,
            log_file_path: None,
            scroll_step: None,
        };

        let merged = merge_config(Some(config_file));
        assert_eq!(
            merged.theme, "green",
            "Config file should override default theme"
        );

        let with_cli = apply_cli_overrides(merged, Some("blue".to_string()), None);
        assert_eq!(
            with_cli.theme, "blue",
            "CLI theme should override all other sources"
        );
    }

    #[test]
    fn test_theme_default_is_amber() {
        use folio::config::ResolvedConfig;

        let config = ResolvedConfig::default();
        assert_eq!(config.theme, "amber");
    }
}
