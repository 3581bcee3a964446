//! Configuration loading and parsing
//!
//! Every section of `config.toml` is optional; missing values fall back to the
//! defaults the report has always used.

use anyhow::{Context, Result};
use car_sales_core::PriceFormat;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main application configuration (loaded from config.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub parsing: PriceFormat,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub email: EmailConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InputConfig {
    #[serde(default = "default_input")]
    pub path: PathBuf,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: default_input(),
        }
    }
}

fn default_input() -> PathBuf {
    PathBuf::from("car_sales.json")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReportConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_report_output")]
    pub output: PathBuf,
    #[serde(default = "default_report_title")]
    pub title: String,
    /// Directory holding the `*-Regular.ttf`, `*-Bold.ttf`, ... font files
    pub fonts_dir: Option<PathBuf>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            output: default_report_output(),
            title: default_report_title(),
            fonts_dir: None,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_report_output() -> PathBuf {
    PathBuf::from("/tmp/cars.pdf")
}

fn default_report_title() -> String {
    "Sales Report".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmailConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_sender")]
    pub from: String,
    /// Recipient; defaults to `<$USER>@example.com`
    pub to: Option<String>,
    #[serde(default = "default_subject")]
    pub subject: String,
    #[serde(default)]
    pub smtp: SmtpSettings,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            from: default_sender(),
            to: None,
            subject: default_subject(),
            smtp: SmtpSettings::default(),
        }
    }
}

impl EmailConfig {
    /// Configured recipient, or the current user's address at example.com
    pub fn recipient(&self) -> String {
        match &self.to {
            Some(to) => to.clone(),
            None => {
                let user = env::var("USER")
                    .or_else(|_| env::var("USERNAME"))
                    .unwrap_or_else(|_| "student".to_string());
                format!("{}@example.com", user)
            }
        }
    }
}

fn default_sender() -> String {
    "automation@example.com".to_string()
}

fn default_subject() -> String {
    "Sales summary for last month".to_string()
}

/// Outbound SMTP relay
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SmtpSettings {
    #[serde(default = "default_smtp_host")]
    pub host: String,
    #[serde(default = "default_smtp_port")]
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl Default for SmtpSettings {
    fn default() -> Self {
        Self {
            host: default_smtp_host(),
            port: default_smtp_port(),
            username: None,
            password: None,
        }
    }
}

fn default_smtp_host() -> String {
    "localhost".to_string()
}

fn default_smtp_port() -> u16 {
    25
}

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: AppConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_deserialization() {
        let toml_content = r#"
            [input]
            path = "data/car_sales.json"

            [parsing]
            thousands_separator = ","

            [report]
            output = "out/cars.pdf"
            title = "Monthly Sales"

            [email]
            to = "manager@example.com"

            [email.smtp]
            host = "mail.example.com"
            port = 2525
        "#;

        let config: AppConfig = toml::from_str(toml_content).unwrap();
        assert_eq!(config.input.path, PathBuf::from("data/car_sales.json"));
        assert_eq!(config.parsing, PriceFormat::en_us());
        assert_eq!(config.report.title, "Monthly Sales");
        assert!(config.report.enabled);
        assert_eq!(config.email.recipient(), "manager@example.com");
        assert_eq!(config.email.subject, "Sales summary for last month");
        assert_eq!(config.email.smtp.host, "mail.example.com");
        assert_eq!(config.email.smtp.port, 2525);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.input.path, PathBuf::from("car_sales.json"));
        assert_eq!(config.parsing, PriceFormat::default());
        assert_eq!(config.report.output, PathBuf::from("/tmp/cars.pdf"));
        assert_eq!(config.email.from, "automation@example.com");
        assert_eq!(config.email.smtp.port, 25);
        assert!(config.email.recipient().ends_with("@example.com"));
    }

    #[test]
    fn test_load_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[email]\nenabled = false\n").unwrap();

        let config = load_config(&path).unwrap();
        assert!(!config.email.enabled);
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config(Path::new("no/such/config.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
