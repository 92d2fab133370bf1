use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Everything that differs between deployments of the card site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub name: String,
    pub description: String,
    /// Absolute site URL without a trailing slash, e.g. "https://invention.cards".
    pub root_url: String,
    /// Directory copied verbatim into the output.
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
    /// TSV catalog of curated inventions.
    #[serde(default = "default_catalog")]
    pub catalog: PathBuf,
    /// Page template; the built-in one is used when unset.
    #[serde(default)]
    pub template: Option<PathBuf>,
    /// Program and leading arguments; `<card id> <output path>` are appended.
    #[serde(default = "default_screenshot_command")]
    pub screenshot_command: Vec<String>,
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

fn default_catalog() -> PathBuf {
    PathBuf::from("static/asimov.tsv")
}

fn default_screenshot_command() -> Vec<String> {
    vec!["screenshot/card-screenshot.mjs".to_string()]
}

impl SiteConfig {
    pub fn page_url(&self, id: &str) -> String {
        format!("{}/{}", self.root_url, id)
    }
}
