//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database configuration.
    pub database: DatabaseConfig,
    /// Report export configuration.
    #[serde(default)]
    pub reports: ReportsConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL.
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

/// How CSV fields are quoted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CsvQuoting {
    /// Wrap every field in double quotes without escaping embedded quotes.
    ///
    /// Existing consumers parse this exact output, so it stays the default.
    #[default]
    Legacy,
    /// Wrap every field in double quotes and double embedded quotes.
    Rfc4180,
}

/// Report export configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportsConfig {
    /// CSV quoting mode.
    #[serde(default)]
    pub csv_quoting: CsvQuoting,
    /// Maximum number of per-order fetches in flight during assembly.
    #[serde(default = "default_fetch_concurrency")]
    pub fetch_concurrency: usize,
    /// PDF page geometry.
    #[serde(default)]
    pub pdf: PdfLayout,
}

impl Default for ReportsConfig {
    fn default() -> Self {
        Self {
            csv_quoting: CsvQuoting::default(),
            fetch_concurrency: default_fetch_concurrency(),
            pdf: PdfLayout::default(),
        }
    }
}

fn default_fetch_concurrency() -> usize {
    8
}

impl ReportsConfig {
    /// Rejects settings the exporters cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`config::ConfigError::Message`] naming the offending key.
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        if self.fetch_concurrency == 0 {
            return Err(invalid("reports.fetch_concurrency must be at least 1"));
        }
        self.pdf.validate()
    }
}

/// PDF page geometry, in points.
///
/// Vertical positions are measured from the top edge of the page.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct PdfLayout {
    /// Page width.
    pub page_width: f32,
    /// Page height.
    pub page_height: f32,
    /// Left, right and top margin.
    pub margin: f32,
    /// Height of header and data rows.
    pub row_height: f32,
    /// Body font size.
    pub font_size: f32,
    /// Cursor position past which a new page is started.
    pub page_break_at: f32,
    /// Names longer than this many characters are cut and suffixed with `...`.
    pub truncate_names_at: usize,
}

impl Default for PdfLayout {
    fn default() -> Self {
        // A4 portrait
        Self {
            page_width: 595.0,
            page_height: 842.0,
            margin: 40.0,
            row_height: 20.0,
            font_size: 9.0,
            page_break_at: 770.0,
            truncate_names_at: 25,
        }
    }
}

/// Shortest name limit that still fits the `...` suffix.
const MIN_TRUNCATE_NAMES_AT: usize = 3;

impl PdfLayout {
    /// Checks that rows have height and fit between the margin and the
    /// page-break threshold.
    ///
    /// # Errors
    ///
    /// Returns [`config::ConfigError::Message`] naming the offending key.
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        let positive = |value: f32| value.is_finite() && value > 0.0;

        if !positive(self.page_width) || !positive(self.page_height) {
            return Err(invalid("reports.pdf page size must be positive"));
        }
        if !positive(self.row_height) {
            return Err(invalid("reports.pdf.row_height must be positive"));
        }
        if !positive(self.font_size) {
            return Err(invalid("reports.pdf.font_size must be positive"));
        }
        if !self.margin.is_finite() || self.margin < 0.0 {
            return Err(invalid("reports.pdf.margin must not be negative"));
        }
        if !self.page_break_at.is_finite() || self.page_break_at > self.page_height {
            return Err(invalid("reports.pdf.page_break_at must be within the page height"));
        }
        if self.page_break_at < self.margin + self.row_height {
            return Err(invalid("reports.pdf.page_break_at leaves no room for the header row"));
        }
        if self.truncate_names_at < MIN_TRUNCATE_NAMES_AT {
            return Err(invalid("reports.pdf.truncate_names_at must be at least 3"));
        }
        Ok(())
    }
}

fn invalid(message: &str) -> config::ConfigError {
    config::ConfigError::Message(message.to_string())
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or the report
    /// settings are invalid.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("KITROUTE").separator("__"))
            .build()?;

        let config: Self = config.try_deserialize()?;
        config.reports.validate()?;
        Ok(config)
    }
}
