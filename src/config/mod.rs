pub mod model;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub use model::{AppConfig, HandlerConfig, LoggingConfig};

fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("sumpractice")
        .join("config.toml")
}

pub fn load_config() -> Result<AppConfig> {
    let path = config_path();
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    parse_config(&contents)
}

fn parse_config(contents: &str) -> Result<AppConfig> {
    toml::from_str(contents).with_context(|| "Failed to parse config file")
}

/// Write the effective config back, so a first run leaves an editable file.
/// A failure is logged and otherwise ignored.
pub fn save_config(config: &AppConfig) {
    let path = config_path();
    if let Err(e) = write_config(&path, config) {
        tracing::warn!(path = %path.display(), error = %e, "could not write config file");
    }
}

fn write_config(path: &Path, config: &AppConfig) -> Result<()> {
    if path.exists() {
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory {}", parent.display()))?;
    }
    let contents = toml::to_string_pretty(config).with_context(|| "Failed to serialize config")?;
    std::fs::write(path, contents)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let cfg = parse_config("").unwrap();
        assert_eq!(cfg.handler.host, "127.0.0.1");
        assert_eq!(cfg.handler.port, 8000);
        assert_eq!(cfg.ui.total_exercises, 15);
        assert!(cfg.ui.reset_on_submit);
        assert!(!cfg.logging.enabled);
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let cfg = parse_config(
            r#"
            [handler]
            port = 9100

            [page]
            title = "Sumas"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.handler.port, 9100);
        assert_eq!(cfg.handler.host, "127.0.0.1");
        assert_eq!(cfg.handler.reconnect_interval_ms, 2000);
        assert_eq!(cfg.page.title, "Sumas");
        assert_eq!(cfg.page.preview_image, "favicon.ico");
    }

    #[test]
    fn test_default_config_serializes_and_parses_back() {
        let text = toml::to_string_pretty(&AppConfig::default()).unwrap();
        let cfg = parse_config(&text).unwrap();
        assert_eq!(cfg.ui.tick_rate_ms, AppConfig::default().ui.tick_rate_ms);
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        assert!(parse_config("[handler]\nport = \"eighty\"").is_err());
    }

    #[test]
    fn test_write_config_creates_file_once() {
        let dir = std::env::temp_dir().join(format!("sumpractice-cfg-{}", std::process::id()));
        let path = dir.join("nested").join("config.toml");
        let _ = std::fs::remove_dir_all(&dir);

        write_config(&path, &AppConfig::default()).unwrap();
        assert!(parse_config(&std::fs::read_to_string(&path).unwrap()).is_ok());

        std::fs::write(&path, "[handler]\nport = 9100\n").unwrap();
        write_config(&path, &AppConfig::default()).unwrap();
        let kept = parse_config(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(kept.handler.port, 9100);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_unwritable_config_path_is_an_error_not_a_panic() {
        let dir = std::env::temp_dir().join(format!("sumpractice-ro-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        // A regular file where a directory is expected
        let blocker = dir.join("blocker");
        std::fs::write(&blocker, "").unwrap();

        let result = write_config(&blocker.join("config.toml"), &AppConfig::default());
        assert!(result.is_err());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
