//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub handler: HandlerConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub page: PageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the remote state handler listens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandlerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Delay between reconnect attempts.
    #[serde(default = "default_reconnect_interval_ms")]
    pub reconnect_interval_ms: u64,
}

impl Default for HandlerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            reconnect_interval_ms: default_reconnect_interval_ms(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".into()
}

fn default_port() -> u16 {
    8000
}

fn default_reconnect_interval_ms() -> u64 {
    2000
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// UI update cycle; re-renders are coalesced to at most one per tick.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    #[serde(default = "default_total_exercises")]
    pub total_exercises: u32,
    #[serde(default = "default_true")]
    pub reset_on_submit: bool,
    #[serde(default = "default_heading")]
    pub heading: String,
    #[serde(default = "default_submit_label")]
    pub submit_label: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            total_exercises: default_total_exercises(),
            reset_on_submit: true,
            heading: default_heading(),
            submit_label: default_submit_label(),
        }
    }
}

fn default_tick_rate_ms() -> u64 {
    50
}

fn default_total_exercises() -> u32 {
    15
}

fn default_true() -> bool {
    true
}

fn default_heading() -> String {
    "Practica de Sumas de Primaria".into()
}

fn default_submit_label() -> String {
    "Revisar Respuesta".into()
}

/// Static document metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    #[serde(default = "default_title")]
    pub title: String,
    /// Social-preview image reference.
    #[serde(default = "default_preview_image")]
    pub preview_image: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            preview_image: default_preview_image(),
        }
    }
}

fn default_title() -> String {
    "S | Index".into()
}

fn default_preview_image() -> String {
    "favicon.ico".into()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    /// Filter directive, overridden by `RUST_LOG`.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

fn default_log_dir() -> String {
    "~/.local/share/sumpractice/logs".into()
}

fn default_log_level() -> String {
    "info".into()
}
