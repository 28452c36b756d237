use serde::Deserialize;

/// Output path meaning "write to standard output"
pub const STDOUT_PATH: &str = "-";

/// Main configuration structure for Docs-Survey
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub crawler: CrawlerConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CrawlerConfig {
    /// The only host discovered links may point to; defaults to the first seed's host
    #[serde(default)]
    pub allowed_domain: Option<String>,

    /// Whole-request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Connection timeout in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

fn default_request_timeout() -> u64 {
    30
}

fn default_connect_timeout() -> u64 {
    10
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            allowed_domain: None,
            request_timeout_secs: default_request_timeout(),
            connect_timeout_secs: default_connect_timeout(),
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,

    /// URL with information about the crawler
    #[serde(rename = "contact-url")]
    pub contact_url: String,
}

/// Crawl input configuration
#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    /// Path to the newline-delimited seed URL file
    #[serde(rename = "seeds-path")]
    pub seeds_path: String,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path to the CSV report, or `"-"` for stdout
    #[serde(rename = "csv-path")]
    pub csv_path: String,
}

impl OutputConfig {
    pub fn is_stdout(&self) -> bool {
        self.csv_path == STDOUT_PATH
    }
}
