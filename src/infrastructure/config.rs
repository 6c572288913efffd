use crate::application::panel_loader::FallbackPolicy;
use crate::infrastructure::text_source::TextDialect;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct PanelsConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub sources: SourceSettings,
    #[serde(default)]
    pub loader: LoaderSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self { bind: default_bind() }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SourceKind {
    /// Assets are fetched over HTTP relative to `base_url`.
    #[default]
    Http,
    /// Assets are read from files under `root`.
    Directory,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SourceSettings {
    #[serde(default)]
    pub kind: SourceKind,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_root")]
    pub root: PathBuf,
    #[serde(default = "default_spreadsheet_path")]
    pub spreadsheet_path: String,
    #[serde(default = "default_text_path")]
    pub text_path: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            kind: SourceKind::default(),
            base_url: default_base_url(),
            root: default_root(),
            spreadsheet_path: default_spreadsheet_path(),
            text_path: default_text_path(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct LoaderSettings {
    #[serde(default)]
    pub policy: FallbackPolicy,
    #[serde(default)]
    pub text_dialect: TextDialect,
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_base_url() -> String {
    "http://127.0.0.1:5173".to_string()
}

fn default_root() -> PathBuf {
    PathBuf::from("static")
}

fn default_spreadsheet_path() -> String {
    "/panels.xlsx".to_string()
}

fn default_text_path() -> String {
    "/panels.csv".to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

pub fn load_panels_config() -> anyhow::Result<PanelsConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/panels"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

pub fn parse_panels_config(toml: &str) -> anyhow::Result<PanelsConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::from_str(toml, config::FileFormat::Toml))
        .build()?;

    Ok(settings.try_deserialize()?)
}
